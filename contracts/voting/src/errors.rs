//! Error codes returned by the voting contract.
//!
//! Codes are grouped by category:
//! - 1-9: Initialization
//! - 10-19: Authorization
//! - 20-29: Workflow phase
//! - 30-39: Duplicate registration or vote
//! - 40-49: Invalid input
//! - 50: Unspecified

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // ===== Initialization (1-9) =====
    /// No administrator has been configured yet
    NotInitialized = 1,

    /// `initialize` was already called
    AlreadyInitialized = 2,

    // ===== Authorization (10-19) =====
    /// Caller is not the administrator
    NotAdmin = 10,

    /// Caller is not a registered voter
    NotVoter = 11,

    // ===== Workflow Phase (20-29) =====
    VotersRegistrationClosed = 20,
    ProposalsRegistrationNotStartable = 21,
    ProposalsNotAllowed = 22,
    ProposalsRegistrationNotStarted = 23,
    ProposalsRegistrationNotFinished = 24,
    VotingSessionNotStarted = 25,
    VotingSessionNotEnded = 26,

    // ===== Duplicates (30-39) =====
    AlreadyRegistered = 30,
    AlreadyVoted = 31,

    // ===== Invalid Input (40-49) =====
    EmptyDescription = 40,
    ProposalNotFound = 41,

    // ===== Unspecified (50) =====
    /// Reading a proposal id that was never assigned
    Unspecified = 50,
}

/// Coarse classification of a [`VotingError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Initialization,
    Unauthorized,
    Phase,
    AlreadyRegistered,
    AlreadyVoted,
    InvalidInput,
    Unspecified,
}

impl VotingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VotingError::NotInitialized | VotingError::AlreadyInitialized => {
                ErrorKind::Initialization
            }
            VotingError::NotAdmin | VotingError::NotVoter => ErrorKind::Unauthorized,
            VotingError::VotersRegistrationClosed
            | VotingError::ProposalsRegistrationNotStartable
            | VotingError::ProposalsNotAllowed
            | VotingError::ProposalsRegistrationNotStarted
            | VotingError::ProposalsRegistrationNotFinished
            | VotingError::VotingSessionNotStarted
            | VotingError::VotingSessionNotEnded => ErrorKind::Phase,
            VotingError::AlreadyRegistered => ErrorKind::AlreadyRegistered,
            VotingError::AlreadyVoted => ErrorKind::AlreadyVoted,
            VotingError::EmptyDescription | VotingError::ProposalNotFound => {
                ErrorKind::InvalidInput
            }
            VotingError::Unspecified => ErrorKind::Unspecified,
        }
    }

    /// Human-readable reason. Phase errors name the expectation that was violated.
    /// `Unspecified` deliberately carries no reason.
    pub fn message(&self) -> &'static str {
        match self {
            VotingError::NotInitialized => "contract not initialized",
            VotingError::AlreadyInitialized => "contract already initialized",

            VotingError::NotAdmin => "caller is not the owner",
            VotingError::NotVoter => "you're not a voter",

            VotingError::VotersRegistrationClosed => "voters registration is not open yet",
            VotingError::ProposalsRegistrationNotStartable => {
                "registering proposals cannot be started now"
            }
            VotingError::ProposalsNotAllowed => "proposals are not allowed yet",
            VotingError::ProposalsRegistrationNotStarted => {
                "registering proposals haven't started yet"
            }
            VotingError::ProposalsRegistrationNotFinished => {
                "registering proposals phase is not finished"
            }
            VotingError::VotingSessionNotStarted => "voting session hasn't started yet",
            VotingError::VotingSessionNotEnded => "current status is not 'voting session ended'",

            VotingError::AlreadyRegistered => "already registered",
            VotingError::AlreadyVoted => "you have already voted",

            VotingError::EmptyDescription => "you cannot propose nothing",
            VotingError::ProposalNotFound => "proposal not found",

            VotingError::Unspecified => "",
        }
    }
}
