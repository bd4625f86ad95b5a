//! Election phase tracking.
//!
//! The phase only ever moves forward, one step at a time, through one of the
//! named [`Transition`]s. Operations that do not change the phase check it with
//! [`require_status`].

use soroban_sdk::{log, Env};

use crate::errors::VotingError;
use crate::events::WorkflowStatusChange;
use crate::storage;
use crate::types::WorkflowStatus;

/// The administrator-driven phase changes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    StartProposalsRegistering,
    EndProposalsRegistering,
    StartVotingSession,
    EndVotingSession,
    TallyVotes,
}

impl Transition {
    /// Phase the election must be in for this transition to apply.
    pub fn source(self) -> WorkflowStatus {
        match self {
            Transition::StartProposalsRegistering => WorkflowStatus::RegisteringVoters,
            Transition::EndProposalsRegistering => WorkflowStatus::ProposalsRegistrationStarted,
            Transition::StartVotingSession => WorkflowStatus::ProposalsRegistrationEnded,
            Transition::EndVotingSession => WorkflowStatus::VotingSessionStarted,
            Transition::TallyVotes => WorkflowStatus::VotingSessionEnded,
        }
    }

    /// Error reported when the election is anywhere but [`Transition::source`].
    pub fn violation(self) -> VotingError {
        match self {
            Transition::StartProposalsRegistering => VotingError::ProposalsRegistrationNotStartable,
            Transition::EndProposalsRegistering => VotingError::ProposalsRegistrationNotStarted,
            Transition::StartVotingSession => VotingError::ProposalsRegistrationNotFinished,
            Transition::EndVotingSession => VotingError::VotingSessionNotStarted,
            Transition::TallyVotes => VotingError::VotingSessionNotEnded,
        }
    }
}

pub fn current(env: &Env) -> WorkflowStatus {
    storage::get_status(env)
}

pub fn require_status(
    env: &Env,
    expected: WorkflowStatus,
    violation: VotingError,
) -> Result<(), VotingError> {
    if current(env) != expected {
        return Err(violation);
    }
    Ok(())
}

/// Check that `transition` may be applied now without applying it.
pub fn check(env: &Env, transition: Transition) -> Result<(), VotingError> {
    require_status(env, transition.source(), transition.violation())
}

/// Move to the phase following `transition.source()` and announce the change.
pub fn advance(env: &Env, transition: Transition) -> Result<(), VotingError> {
    check(env, transition)?;

    let previous_status = transition.source();
    let new_status = previous_status.next().ok_or(transition.violation())?;

    storage::set_status(env, new_status);

    WorkflowStatusChange {
        previous_status,
        new_status,
    }
    .publish(env);

    log!(env, "workflow status changed", previous_status as u32, new_status as u32);

    Ok(())
}
