use anchor_lang::prelude::*;

use crate::{
    constants::{
        DEFAULT_CALLBACK_GAS_LIMIT, DEFAULT_ENTRANCE_FEE, DEFAULT_INTERVAL, DEFAULT_KEY_HASH,
        DEFAULT_SUBSCRIPTION_ID, MAX_CALLBACK_GAS_LIMIT, MAX_PLAYERS, MIN_CALLBACK_GAS_LIMIT,
        NUM_WORDS, REQUEST_CONFIRMATIONS,
    },
    error::RaffleError,
    events::{PlayerEntered, SettlementRequested, WinnerPicked},
    utils::{winner_index, RandomWord},
};

// Space calculation:
// 8 (discriminator) +
// 32 (randomness_provider) +
// 8 (entrance_fee) +
// 8 (interval) +
// 32 (key_hash) +
// 8 (subscription_id) +
// 4 (callback_gas_limit) +
// 1 (raffle_state) +
// 8 (last_timestamp) +
// 8 (pool) +
// 33 (recent_winner: Option<Pubkey>) +
// 25 (pending_request: Option<PendingRequest>) +
// 8 (round) +
// 8 (next_request_id) +
// 1 (bump) +
// 4 + 32 * MAX_PLAYERS (players)
pub const RAFFLE_ACCOUNT_SIZE: usize =
    8 + 32 + 8 + 8 + 32 + 8 + 4 + 1 + 8 + 8 + 33 + 25 + 8 + 8 + 1 + 4 + 32 * MAX_PLAYERS;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

/// The randomness request currently in flight. Kept in the raffle account so
/// the provider's callback can land any number of slots later.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub request_id: u64,
    /// Round the request settles
    pub round: u64,
    pub requested_at: i64,
}

/// Deployment parameters, immutable once the raffle exists.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RaffleParams {
    /// Minimum payment per entry, in lamports
    pub entrance_fee: u64,
    /// Minimum seconds between the start of a round and its settlement
    pub interval: i64,
    /// Provider gas lane the requests are served on
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
}

impl Default for RaffleParams {
    fn default() -> Self {
        Self {
            entrance_fee: DEFAULT_ENTRANCE_FEE,
            interval: DEFAULT_INTERVAL,
            key_hash: DEFAULT_KEY_HASH,
            subscription_id: DEFAULT_SUBSCRIPTION_ID,
            callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT,
        }
    }
}

/// The four conditions upkeep depends on, returned to keepers for diagnosis.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepDiagnostics {
    pub is_open: bool,
    pub time_passed: bool,
    pub has_players: bool,
    pub has_balance: bool,
}

impl UpkeepDiagnostics {
    pub fn upkeep_needed(&self) -> bool {
        self.is_open && self.time_passed && self.has_players && self.has_balance
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    pub diagnostics: UpkeepDiagnostics,
}

#[account]
#[derive(Debug, PartialEq)]
pub struct Raffle {
    /// Only this key may deliver random words
    pub randomness_provider: Pubkey,
    pub entrance_fee: u64,
    pub interval: i64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub raffle_state: RaffleState,
    /// Start of the current round
    pub last_timestamp: i64,
    /// Lamports paid in this round, held by the vault
    pub pool: u64,
    pub recent_winner: Option<Pubkey>,
    pub pending_request: Option<PendingRequest>,
    /// Number of settled rounds
    pub round: u64,
    /// Next request id to issue; ids start at 1 and are never reused
    pub next_request_id: u64,
    pub bump: u8,
    pub players: Vec<Pubkey>,
}

impl Raffle {
    pub fn new(
        params: &RaffleParams,
        randomness_provider: Pubkey,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(params.entrance_fee > 0, RaffleError::InvalidEntranceFee);
        require!(params.interval > 0, RaffleError::InvalidInterval);
        require!(
            (MIN_CALLBACK_GAS_LIMIT..=MAX_CALLBACK_GAS_LIMIT).contains(&params.callback_gas_limit),
            RaffleError::InvalidCallbackGasLimit
        );

        Ok(Self {
            randomness_provider,
            entrance_fee: params.entrance_fee,
            interval: params.interval,
            key_hash: params.key_hash,
            subscription_id: params.subscription_id,
            callback_gas_limit: params.callback_gas_limit,
            raffle_state: RaffleState::Open,
            last_timestamp: now,
            pool: 0,
            recent_winner: None,
            pending_request: None,
            round: 0,
            next_request_id: 1,
            bump,
            players: Vec::new(),
        })
    }

    /// Records an entry. The caller moves `payment` lamports into the vault;
    /// anything above the entrance fee stays in the pool.
    pub fn enter(&mut self, player: Pubkey, payment: u64) -> Result<PlayerEntered> {
        require!(payment >= self.entrance_fee, RaffleError::NotEnoughFunds);
        require!(
            self.raffle_state == RaffleState::Open,
            RaffleError::RaffleNotOpen
        );
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        let pool = self
            .pool
            .checked_add(payment)
            .ok_or(RaffleError::Overflow)?;

        self.players.push(player);
        self.pool = pool;

        Ok(PlayerEntered { player })
    }

    pub fn upkeep_diagnostics(&self, now: i64) -> UpkeepDiagnostics {
        UpkeepDiagnostics {
            is_open: self.raffle_state == RaffleState::Open,
            time_passed: now.saturating_sub(self.last_timestamp) >= self.interval,
            has_players: !self.players.is_empty(),
            has_balance: self.pool > 0,
        }
    }

    pub fn check_upkeep(&self, now: i64) -> UpkeepCheck {
        let diagnostics = self.upkeep_diagnostics(now);
        UpkeepCheck {
            upkeep_needed: diagnostics.upkeep_needed(),
            diagnostics,
        }
    }

    /// Closes the round and issues exactly one randomness request.
    pub fn request_settlement(&mut self, now: i64) -> Result<SettlementRequested> {
        if !self.check_upkeep(now).upkeep_needed {
            msg!(
                "Upkeep not needed: pool={} players={} state={:?}",
                self.pool,
                self.players.len(),
                self.raffle_state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let request_id = self.next_request_id;
        let next_request_id = request_id
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;

        self.next_request_id = next_request_id;
        self.pending_request = Some(PendingRequest {
            request_id,
            round: self.round,
            requested_at: now,
        });
        self.raffle_state = RaffleState::Calculating;

        Ok(SettlementRequested {
            request_id,
            round: self.round,
            key_hash: self.key_hash,
            subscription_id: self.subscription_id,
            request_confirmations: REQUEST_CONFIRMATIONS,
            callback_gas_limit: self.callback_gas_limit,
            num_words: NUM_WORDS,
        })
    }

    /// Picks the winner for the pending request without changing anything.
    pub fn draw_winner(&self, request_id: u64, random_words: &[RandomWord]) -> Result<Pubkey> {
        let pending = self
            .pending_request
            .filter(|pending| pending.request_id == request_id)
            .ok_or(RaffleError::UnknownRequest)?;
        require!(
            self.raffle_state == RaffleState::Calculating && pending.round == self.round,
            RaffleError::UnknownRequest
        );

        let word = random_words
            .first()
            .ok_or(RaffleError::MissingRandomWords)?;
        let index = winner_index(word, self.players.len() as u64)?;

        self.players
            .get(index as usize)
            .copied()
            .ok_or_else(|| error!(RaffleError::NoPlayers))
    }

    /// Settles the pending request.
    ///
    /// `pay` must move the whole pool to the winner. The round is reset only
    /// once it succeeds; if it fails the raffle stays `Calculating` with its
    /// players, pool and pending request untouched.
    pub fn settle<F>(
        &mut self,
        caller: &Pubkey,
        request_id: u64,
        random_words: &[RandomWord],
        now: i64,
        pay: F,
    ) -> Result<WinnerPicked>
    where
        F: FnOnce(Pubkey, u64) -> Result<()>,
    {
        require_keys_eq!(
            *caller,
            self.randomness_provider,
            RaffleError::UnauthorizedCallback
        );

        let winner = self.draw_winner(request_id, random_words)?;
        let amount = self.pool;
        let settled_round = self.round;
        let next_round = settled_round
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;

        if let Err(e) = pay(winner, amount) {
            msg!(
                "Payout of {} lamports to {} failed; round {} stays calculating",
                amount,
                winner,
                settled_round
            );
            return Err(e);
        }

        self.recent_winner = Some(winner);
        self.players.clear();
        self.pending_request = None;
        self.raffle_state = RaffleState::Open;
        self.last_timestamp = now;
        self.round = next_round;
        self.pool = 0;

        Ok(WinnerPicked {
            winner,
            amount,
            round: settled_round,
        })
    }

    pub fn player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.players.get(index))
            .copied()
            .ok_or_else(|| error!(RaffleError::PlayerIndexOutOfBounds))
    }

    /// `Open` exactly when no request is pending.
    #[cfg(test)]
    pub fn is_consistent(&self) -> bool {
        (self.raffle_state == RaffleState::Open) == self.pending_request.is_none()
            && self.players.is_empty() == (self.pool == 0)
    }
}
