use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid round configuration")]
    ConfigInvalid,
    #[msg("Deposit would exceed the round's seat capacity")]
    CapacityExceeded,
    #[msg("Round is not yet eligible for a draw")]
    NotYetEligible,
    #[msg("Round already has a draw in progress")]
    AlreadyDrawing,
    #[msg("An oracle request is already outstanding")]
    AlreadyRequested,
    #[msg("Callback does not match the outstanding oracle request")]
    UnknownRequest,
    #[msg("Caller does not own the winning seat")]
    NotWinner,
    #[msg("Prize tier already claimed")]
    AlreadyClaimed,
    #[msg("Deposit already withdrawn")]
    AlreadyWithdrawn,
    #[msg("Caller has no deposit in this round")]
    NotDeposited,
    #[msg("Operation not allowed in the round's current state")]
    WrongRoundState,
    #[msg("Round id is not the engine's current round")]
    RoundMismatch,
    #[msg("Seat is not taken")]
    SeatNotFound,
    #[msg("Prize tier out of range")]
    InvalidTier,
    #[msg("Draw snapshot is malformed")]
    InvalidSnapshot,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Invalid vault account")]
    InvalidVault,
    #[msg("Invalid ticket mint")]
    InvalidMint,
    #[msg("Invalid user ticket account")]
    InvalidUserTicketAta,
    #[msg("Invalid admin address")]
    InvalidAdmin,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Unauthorized")]
    Unauthorized,
}
