use anchor_lang::prelude::*;
use arrayref::{array_mut_ref, array_refs};

use crate::error::RaffleError;

/// A 256-bit random value delivered by the provider, big-endian.
pub type RandomWord = [u8; 32];

/// Reduces a random word modulo the player count.
///
/// The reduction is exact over all 256 bits: the word is folded in as four
/// 64-bit limbs, keeping the running remainder below `players`. Plain modulo
/// reduction carries a small bias toward low indices when `players` does not
/// divide 2^256; that bias is accepted.
pub fn winner_index(word: &RandomWord, players: u64) -> Result<u64> {
    require!(players > 0, RaffleError::NoPlayers);

    let (hi, mid_hi, mid_lo, lo) = array_refs![word, 8, 8, 8, 8];
    let modulus = u128::from(players);
    let remainder = [hi, mid_hi, mid_lo, lo].iter().fold(0u128, |acc, limb| {
        ((acc << 64) | u128::from(u64::from_be_bytes(**limb))) % modulus
    });

    // remainder < players, so it always fits back into a u64
    Ok(remainder as u64)
}

/// Widens a u64 into a random word with the same numeric value.
pub fn random_word_from_u64(value: u64) -> RandomWord {
    let mut word = [0u8; 32];
    *array_mut_ref![word, 24, 8] = value.to_be_bytes();
    word
}
