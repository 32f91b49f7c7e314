use anchor_lang::prelude::*;

use crate::{constants::RAFFLE_SEED, state::Raffle};

/// Closes the current round and requests randomness for it.
///
/// Anyone may call this; it only succeeds while `check_upkeep` would report
/// upkeep as needed. The emitted `SettlementRequested` event is the request the
/// bound provider answers with `fulfill_random_words`. There is no timeout:
/// the raffle stays `Calculating` until that answer lands.
///
/// # Errors
/// - `UpkeepNotNeeded` if any upkeep condition fails, including a request already in flight
pub fn perform_upkeep(ctx: Context<PerformUpkeep>, _perform_data: Vec<u8>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let event = ctx.accounts.raffle.request_settlement(now)?;

    msg!(
        "Randomness requested: request_id={} round={}",
        event.request_id,
        event.round
    );

    emit!(event);

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
