use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::{RAFFLE_SEED, VAULT_SEED},
    error::RaffleError,
    state::{Raffle, Vault},
};

/// Instruction to enter the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `payment` - Lamports paid for the entry; must be at least the entrance fee
///
/// # Security Considerations
/// 1. Rejects payments below the entrance fee
/// 2. Rejects entries while a settlement is in flight
/// 3. Records the entry before moving lamports, then verifies the vault received them
///
/// # Implementation Notes
/// - Overpayment is not refunded; it goes to the pool with the rest
/// - The same signer may enter several times, each entry is one slot
pub fn enter_raffle(ctx: Context<EnterRaffle>, payment: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    let event = ctx.accounts.raffle.enter(player, payment)?;

    let pre_transfer_balance = ctx.accounts.vault.to_account_info().lamports();

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        payment,
    )?;

    let post_transfer_balance = ctx.accounts.vault.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(payment)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(event);

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
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

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
