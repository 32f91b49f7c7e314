use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader_upgradeable;

use crate::{
    constants::{RAFFLE_SEED, VAULT_SEED},
    error::RaffleError,
    events::RaffleInitialized,
    state::{Raffle, RaffleParams, Vault, RAFFLE_ACCOUNT_SIZE, VAULT_ACCOUNT_SIZE},
};

/// Instruction to create the raffle and bind its randomness provider.
/// This should be called once during deployment.
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `params` - Entrance fee, interval and the randomness request settings
///
/// # Account Validations
/// * Authority - Signer must be the upgrade authority recorded in the program data account
/// * Raffle - New singleton PDA with seed "raffle", sized for `MAX_PLAYERS` entries
/// * Vault - New PDA with seeds ["vault", raffle_key] that will hold the pool
/// * Randomness Provider - Becomes the only key allowed to fulfill requests
///
/// # Implementation Notes
/// - Entrance fee, interval, provider and request settings cannot change afterwards
/// - The first round starts at the current cluster time
pub fn initialize_raffle(ctx: Context<InitializeRaffle>, params: RaffleParams) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let raffle = Raffle::new(
        &params,
        ctx.accounts.randomness_provider.key(),
        now,
        ctx.bumps.raffle,
    )?;
    ctx.accounts.raffle.set_inner(raffle);

    ctx.accounts.vault.raffle = ctx.accounts.raffle.key();
    ctx.accounts.vault.bump = ctx.bumps.vault;

    msg!(
        "Raffle initialized: entrance_fee={} interval={}s",
        params.entrance_fee,
        params.interval
    );

    emit!(RaffleInitialized {
        raffle: ctx.accounts.raffle.key(),
        randomness_provider: ctx.accounts.randomness_provider.key(),
        entrance_fee: params.entrance_fee,
        interval: params.interval,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = authority,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [
            VAULT_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [crate::ID.as_ref()],
        bump,
        seeds::program = bpf_loader_upgradeable::id(),
        constraint = program_data.upgrade_authority_address == Some(authority.key())
            @ RaffleError::UnauthorizedInitializer,
    )]
    pub program_data: Account<'info, ProgramData>,

    /// The off-chain randomness provider key bound to this raffle
    pub randomness_provider: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
