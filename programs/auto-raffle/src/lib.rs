use anchor_lang::prelude::*;
use instructions::*;
use state::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("FKReDeLru6TdxtRiKwkGj7XTUbuwXgPUhBxqqwWhUF6j");

#[program]
pub mod auto_raffle {
    use super::*;

    pub fn initialize_raffle(ctx: Context<InitializeRaffle>, params: RaffleParams) -> Result<()> {
        instructions::initialize_raffle::initialize_raffle(ctx, params)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, payment: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, payment)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
        instructions::check_upkeep::check_upkeep(ctx, check_data)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx, perform_data)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn get_raffle_state(ctx: Context<ReadRaffle>) -> Result<RaffleState> {
        instructions::views::get_raffle_state(ctx)
    }

    pub fn get_entrance_fee(ctx: Context<ReadRaffle>) -> Result<u64> {
        instructions::views::get_entrance_fee(ctx)
    }

    pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
        instructions::views::get_player(ctx, index)
    }

    pub fn get_number_of_players(ctx: Context<ReadRaffle>) -> Result<u64> {
        instructions::views::get_number_of_players(ctx)
    }

    pub fn get_recent_winner(ctx: Context<ReadRaffle>) -> Result<Option<Pubkey>> {
        instructions::views::get_recent_winner(ctx)
    }

    pub fn get_latest_timestamp(ctx: Context<ReadRaffle>) -> Result<i64> {
        instructions::views::get_latest_timestamp(ctx)
    }

    pub fn get_pool_balance(ctx: Context<ReadRaffle>) -> Result<u64> {
        instructions::views::get_pool_balance(ctx)
    }

    pub fn get_interval(ctx: Context<ReadRaffle>) -> Result<i64> {
        instructions::views::get_interval(ctx)
    }

    pub fn get_num_words(ctx: Context<ReadRaffle>) -> Result<u32> {
        instructions::views::get_num_words(ctx)
    }

    pub fn get_request_confirmations(ctx: Context<ReadRaffle>) -> Result<u16> {
        instructions::views::get_request_confirmations(ctx)
    }

    pub fn get_pending_request(ctx: Context<ReadRaffle>) -> Result<Option<PendingRequest>> {
        instructions::views::get_pending_request(ctx)
    }
}
