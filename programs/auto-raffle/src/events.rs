use anchor_lang::prelude::*;

/// Event emitted once when the raffle is created
#[event]
#[derive(Debug, PartialEq)]
pub struct RaffleInitialized {
    pub raffle: Pubkey,
    pub randomness_provider: Pubkey,
    pub entrance_fee: u64,
    pub interval: i64,
}

/// Event emitted for every accepted entry
#[event]
#[derive(Debug, PartialEq)]
pub struct PlayerEntered {
    pub player: Pubkey,
}

/// Event emitted when upkeep closes the round and asks for randomness.
/// The bound provider serves the request identified by `request_id`.
#[event]
#[derive(Debug, PartialEq)]
pub struct SettlementRequested {
    pub request_id: u64,
    pub round: u64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// Event emitted after the pool has been paid to the winner
#[event]
#[derive(Debug, PartialEq)]
pub struct WinnerPicked {
    pub winner: Pubkey,
    /// Lamports paid out
    pub amount: u64,
    /// The round that was settled
    pub round: u64,
}
