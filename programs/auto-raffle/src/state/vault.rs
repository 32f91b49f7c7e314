use anchor_lang::prelude::*;

// 8 discriminator, 32 raffle, 1 bump
pub const VAULT_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned account holding the current round's pool on top of its rent reserve.
#[account]
pub struct Vault {
    pub raffle: Pubkey,
    pub bump: u8,
}
