use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Moves `amount` lamports from the program-owned vault to the drawn winner.
///
/// Rejects with `PayoutFailed` before touching any balance when the recipient
/// is not the drawn winner or cannot be credited, or when the vault would dip
/// into its rent reserve. An empty recipient account can only be credited
/// with at least its rent-exempt minimum.
pub fn pay_out_pool<'info>(
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    winner: &Pubkey,
    amount: u64,
    rent: &Rent,
) -> Result<()> {
    require_keys_eq!(*recipient.key, *winner, RaffleError::PayoutFailed);

    if !recipient.is_writable || recipient.executable {
        msg!("Winner {} cannot receive lamports", winner);
        return err!(RaffleError::PayoutFailed);
    }

    let recipient_floor = rent.minimum_balance(recipient.data_len());
    if recipient.lamports() == 0 && amount < recipient_floor {
        msg!(
            "Winner {} is empty and {} lamports is below its rent minimum of {}",
            winner,
            amount,
            recipient_floor
        );
        return err!(RaffleError::PayoutFailed);
    }

    let rent_reserve = rent.minimum_balance(vault.data_len());
    let available = vault.lamports().saturating_sub(rent_reserve);
    if available < amount {
        msg!(
            "Vault holds {} spendable lamports, pool is {}",
            available,
            amount
        );
        return err!(RaffleError::PayoutFailed);
    }

    vault
        .sub_lamports(amount)
        .map_err(|_| error!(RaffleError::PayoutFailed))?;
    recipient
        .add_lamports(amount)
        .map_err(|_| error!(RaffleError::PayoutFailed))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::ERROR_CODE_OFFSET;
    use anchor_lang::solana_program::program_error::ProgramError;

    // vaults in these tests carry no data
    fn reserve() -> u64 {
        Rent::default().minimum_balance(0)
    }

    fn assert_payout_failed(result: Result<()>) {
        let err = result.expect_err("payout should have been rejected");
        assert_eq!(
            ProgramError::from(err),
            ProgramError::Custom(ERROR_CODE_OFFSET + RaffleError::PayoutFailed as u32)
        );
    }

    #[test]
    fn pays_exact_pool_to_winner() {
        let program_id = Pubkey::new_unique();
        let system_id = Pubkey::default();
        let vault_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let mut vault_lamports = reserve() + 30;
        let mut winner_lamports = 5_000;
        let mut vault_data = [0u8; 0];
        let mut winner_data = [0u8; 0];
        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        let winner = AccountInfo::new(
            &winner_key,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &system_id,
            false,
            0,
        );

        pay_out_pool(&vault, &winner, &winner_key, 30, &Rent::default()).unwrap();

        assert_eq!(vault.lamports(), reserve());
        assert_eq!(winner.lamports(), 5_030);
    }

    #[test]
    fn rejects_recipient_other_than_winner() {
        let program_id = Pubkey::new_unique();
        let system_id = Pubkey::default();
        let vault_key = Pubkey::new_unique();
        let other_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let mut vault_lamports = reserve() + 30;
        let mut other_lamports = 0;
        let mut vault_data = [0u8; 0];
        let mut other_data = [0u8; 0];
        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        let other = AccountInfo::new(
            &other_key,
            false,
            true,
            &mut other_lamports,
            &mut other_data,
            &system_id,
            false,
            0,
        );

        assert_payout_failed(pay_out_pool(&vault, &other, &winner_key, 30, &Rent::default()));
        assert_eq!(vault.lamports(), reserve() + 30);
        assert_eq!(other.lamports(), 0);
    }

    #[test]
    fn rejects_recipient_that_cannot_be_credited() {
        let program_id = Pubkey::new_unique();
        let vault_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let mut vault_lamports = reserve() + 30;
        let mut winner_lamports = 1;
        let mut vault_data = [0u8; 0];
        let mut winner_data = [0u8; 0];
        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        // executable accounts can never be credited
        let winner = AccountInfo::new(
            &winner_key,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &program_id,
            true,
            0,
        );

        assert_payout_failed(pay_out_pool(&vault, &winner, &winner_key, 30, &Rent::default()));
        assert_eq!(vault.lamports(), reserve() + 30);
        assert_eq!(winner.lamports(), 1);
    }

    #[test]
    fn keeps_vault_rent_reserve() {
        let program_id = Pubkey::new_unique();
        let system_id = Pubkey::default();
        let vault_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let mut vault_lamports = reserve() + 20;
        let mut winner_lamports = 5_000;
        let mut vault_data = [0u8; 0];
        let mut winner_data = [0u8; 0];
        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        let winner = AccountInfo::new(
            &winner_key,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &system_id,
            false,
            0,
        );

        assert_payout_failed(pay_out_pool(&vault, &winner, &winner_key, 30, &Rent::default()));
        assert_eq!(vault.lamports(), reserve() + 20);
        assert_eq!(winner.lamports(), 5_000);
    }

    #[test]
    fn rejects_pool_below_rent_minimum_for_empty_winner() {
        let program_id = Pubkey::new_unique();
        let system_id = Pubkey::default();
        let vault_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let mut vault_lamports = reserve() + 30;
        let mut winner_lamports = 0;
        let mut vault_data = [0u8; 0];
        let mut winner_data = [0u8; 0];
        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        let winner = AccountInfo::new(
            &winner_key,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &system_id,
            false,
            0,
        );

        assert_payout_failed(pay_out_pool(&vault, &winner, &winner_key, 30, &Rent::default()));
        assert_eq!(vault.lamports(), reserve() + 30);
        assert_eq!(winner.lamports(), 0);
    }

    #[test]
    fn pays_empty_winner_when_pool_covers_rent_minimum() {
        let program_id = Pubkey::new_unique();
        let system_id = Pubkey::default();
        let vault_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let pool = reserve();
        let mut vault_lamports = reserve() + pool;
        let mut winner_lamports = 0;
        let mut vault_data = [0u8; 0];
        let mut winner_data = [0u8; 0];
        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        let winner = AccountInfo::new(
            &winner_key,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &system_id,
            false,
            0,
        );

        pay_out_pool(&vault, &winner, &winner_key, pool, &Rent::default()).unwrap();

        assert_eq!(vault.lamports(), reserve());
        assert_eq!(winner.lamports(), pool);
    }
}
