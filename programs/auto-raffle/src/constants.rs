use anchor_lang::prelude::*;

#[constant]
pub const RAFFLE_SEED: &[u8] = b"raffle";
#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

/// Upper bound on entries per round; the raffle account is allocated for this many players.
pub const MAX_PLAYERS: usize = 250;

// Randomness request shape, fixed for every round
#[constant]
pub const REQUEST_CONFIRMATIONS: u16 = 3;
#[constant]
pub const NUM_WORDS: u32 = 1;

pub const MIN_CALLBACK_GAS_LIMIT: u32 = 10_000;
pub const MAX_CALLBACK_GAS_LIMIT: u32 = 2_500_000;

// Deployment defaults
pub const DEFAULT_ENTRANCE_FEE: u64 = 10_000_000; // 0.01 SOL
pub const DEFAULT_INTERVAL: i64 = 30; // seconds
pub const DEFAULT_CALLBACK_GAS_LIMIT: u32 = 500_000;
pub const DEFAULT_SUBSCRIPTION_ID: u64 = 0;
pub const DEFAULT_KEY_HASH: [u8; 32] = [
    71, 78, 52, 160, 119, 223, 88, 128, 125, 190, 156, 150, 211, 192, 9, 178, 59, 60, 109, 12,
    206, 67, 62, 89, 187, 245, 179, 79, 130, 59, 197, 108,
];
