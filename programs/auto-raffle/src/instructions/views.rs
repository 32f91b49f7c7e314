use anchor_lang::prelude::*;

use crate::{
    constants::{NUM_WORDS, RAFFLE_SEED, REQUEST_CONFIRMATIONS},
    state::{PendingRequest, Raffle, RaffleState},
};

// Read-only queries for dashboards and keepers. Each returns its value as
// instruction return data and never writes.

pub fn get_raffle_state(ctx: Context<ReadRaffle>) -> Result<RaffleState> {
    Ok(ctx.accounts.raffle.raffle_state)
}

pub fn get_entrance_fee(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.entrance_fee)
}

/// # Errors
/// - `PlayerIndexOutOfBounds` if `index` is past the last entry of the round
pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player(index)
}

pub fn get_number_of_players(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.players.len() as u64)
}

pub fn get_recent_winner(ctx: Context<ReadRaffle>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.raffle.recent_winner)
}

pub fn get_latest_timestamp(ctx: Context<ReadRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.last_timestamp)
}

/// Lamports in the current pool, excluding the vault's rent reserve.
pub fn get_pool_balance(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.pool)
}

pub fn get_interval(ctx: Context<ReadRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.interval)
}

pub fn get_num_words(_ctx: Context<ReadRaffle>) -> Result<u32> {
    Ok(NUM_WORDS)
}

pub fn get_request_confirmations(_ctx: Context<ReadRaffle>) -> Result<u16> {
    Ok(REQUEST_CONFIRMATIONS)
}

pub fn get_pending_request(ctx: Context<ReadRaffle>) -> Result<Option<PendingRequest>> {
    Ok(ctx.accounts.raffle.pending_request)
}

#[derive(Accounts)]
pub struct ReadRaffle<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
