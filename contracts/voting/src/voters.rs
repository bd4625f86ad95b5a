use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::events::VoterRegistered;
use crate::storage;
use crate::types::Voter;

/// Create the voter record for `voter`. Records are never removed.
pub fn register(env: &Env, voter: &Address) -> Result<(), VotingError> {
    if storage::has_voter(env, voter) {
        return Err(VotingError::AlreadyRegistered);
    }

    let record = Voter {
        is_registered: true,
        ..Voter::default()
    };
    storage::save_voter(env, voter, &record);

    VoterRegistered {
        voter: voter.clone(),
    }
    .publish(env);

    Ok(())
}

/// Record of `voter`, or the zero value if it was never registered.
pub fn lookup(env: &Env, voter: &Address) -> Voter {
    storage::get_voter(env, voter).unwrap_or_default()
}

pub fn require_not_voted(record: &Voter) -> Result<(), VotingError> {
    if record.has_voted {
        return Err(VotingError::AlreadyVoted);
    }
    Ok(())
}

/// Mark `record` as having voted for `proposal_id`.
///
/// Callers check [`require_not_voted`] first; `has_voted` never goes back to false.
pub fn record_vote(env: &Env, address: &Address, mut record: Voter, proposal_id: u32) {
    record.has_voted = true;
    record.voted_proposal_id = proposal_id;
    storage::save_voter(env, address, &record);
}
