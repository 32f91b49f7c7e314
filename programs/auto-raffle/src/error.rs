use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Payment is below the entrance fee")]
    NotEnoughFunds,
    #[msg("Raffle is not accepting entries")]
    RaffleNotOpen,
    #[msg("Upkeep is not needed")]
    UpkeepNotNeeded,
    #[msg("Only the bound randomness provider may fulfill requests")]
    UnauthorizedCallback,
    #[msg("Request id does not match the pending randomness request")]
    UnknownRequest,
    #[msg("Pool could not be paid to the winner")]
    PayoutFailed,
    #[msg("Raffle has reached the maximum number of players")]
    RaffleFull,
    #[msg("Fulfillment carried no random words")]
    MissingRandomWords,
    #[msg("Raffle has no players")]
    NoPlayers,
    #[msg("Player index out of bounds")]
    PlayerIndexOutOfBounds,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Interval must be greater than zero")]
    InvalidInterval,
    #[msg("Callback gas limit is out of range")]
    InvalidCallbackGasLimit,
    #[msg("Vault transfer failed")]
    TransferFailed,
    #[msg("Only the program upgrade authority may initialize the raffle")]
    UnauthorizedInitializer,
}
