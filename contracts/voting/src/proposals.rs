use soroban_sdk::{Env, String};

use crate::errors::VotingError;
use crate::events::ProposalRegistered;
use crate::storage;
use crate::types::Proposal;

/// Append a proposal and return its id, which is its position in submission order.
pub fn submit(env: &Env, description: String) -> Result<u32, VotingError> {
    if description.is_empty() {
        return Err(VotingError::EmptyDescription);
    }

    let proposal_id = storage::get_proposal_count(env);
    let proposal = Proposal {
        description,
        vote_count: 0,
    };

    storage::save_proposal(env, proposal_id, &proposal);
    storage::set_proposal_count(env, proposal_id + 1);

    ProposalRegistered { proposal_id }.publish(env);

    Ok(proposal_id)
}

/// Read a proposal. Ids that were never assigned fail without a reason.
pub fn get(env: &Env, proposal_id: u32) -> Result<Proposal, VotingError> {
    storage::get_proposal(env, proposal_id).ok_or(VotingError::Unspecified)
}

/// Ensure `proposal_id` can receive a vote.
///
/// Ids at or past the proposal count are rejected, so the highest votable id
/// is `count - 1`.
pub fn require_votable(env: &Env, proposal_id: u32) -> Result<(), VotingError> {
    if proposal_id >= storage::get_proposal_count(env) {
        return Err(VotingError::ProposalNotFound);
    }
    Ok(())
}

/// Count one more vote for `proposal_id`.
pub fn add_vote(env: &Env, proposal_id: u32) -> Result<(), VotingError> {
    let mut proposal =
        storage::get_proposal(env, proposal_id).ok_or(VotingError::ProposalNotFound)?;

    proposal.vote_count += 1;
    storage::save_proposal(env, proposal_id, &proposal);

    Ok(())
}
