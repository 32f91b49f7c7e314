use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, VAULT_SEED},
    error::RaffleError,
    helpers::pay_out_pool,
    state::{Raffle, Vault},
};

/// Callback through which the randomness provider answers a pending request.
///
/// Execution requirements:
/// 1. The provider signing the transaction is the one bound at initialization
/// 2. `request_id` is the request currently in flight
/// 3. At least one random word is supplied
///
/// The winner is `random_words[0] mod players`. The whole pool moves from the
/// vault to the `winner` account, which must be that player. Only after the
/// payout succeeds is the round reset and `WinnerPicked` emitted.
///
/// # Errors
/// - `UnauthorizedCallback` if the signer is not the bound provider
/// - `UnknownRequest` for a stale, consumed or never-issued request id
/// - `MissingRandomWords` if `random_words` is empty
/// - `PayoutFailed` if the winner cannot be paid; the round stays `Calculating`
///   and needs a fulfillment whose payout succeeds
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let rent = Rent::get()?;

    let caller = ctx.accounts.randomness_provider.key();
    let vault = ctx.accounts.vault.to_account_info();
    let recipient = ctx.accounts.winner.to_account_info();

    let event = ctx.accounts.raffle.settle(
        &caller,
        request_id,
        &random_words,
        now,
        |winner, amount| pay_out_pool(&vault, &recipient, &winner, amount, &rent),
    )?;

    msg!(
        "Round {} settled: {} lamports to {}",
        event.round,
        event.amount,
        event.winner
    );

    emit!(event);

    Ok(())
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        has_one = randomness_provider @ RaffleError::UnauthorizedCallback,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [
            VAULT_SEED,
            raffle.key().as_ref(),
        ],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    pub randomness_provider: Signer<'info>,

    /// CHECK: Compared against the drawn player before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}
