#![no_std]
//! # Voting Contract
//!
//! A single election run by one administrator. The administrator registers
//! voters, opens and closes proposal registration, opens and closes the voting
//! session, then tallies. Registered voters submit proposals and cast exactly
//! one vote each. The proposal with the most votes wins; ties go to the
//! proposal submitted first.
//!
//! Every entry point authenticates its `caller`, checks the caller's role,
//! checks the current [`WorkflowStatus`], and only then writes state.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod access;
mod errors;
mod events;
mod proposals;
mod storage;
mod tally;
mod types;
mod voters;
mod workflow;

pub use errors::{ErrorKind, VotingError};
pub use events::{
    AdminTransferred, Initialized, ProposalRegistered, Voted, VoterRegistered,
    WorkflowStatusChange,
};
pub use types::{Proposal, Voter, WorkflowStatus};

use workflow::Transition;

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Configure the election administrator. Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::set_proposal_count(&env, 0);
        storage::set_winning_proposal(&env, 0);

        Initialized { admin }.publish(&env);

        Ok(())
    }

    /// Hand the administrator role to `new_admin`.
    pub fn transfer_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;

        storage::set_admin(&env, &new_admin);

        AdminTransferred {
            previous_admin: caller,
            new_admin,
        }
        .publish(&env);

        Ok(())
    }

    // ── Voter Registration ───────────────────────────────────────────────────

    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::require_status(
            &env,
            WorkflowStatus::RegisteringVoters,
            VotingError::VotersRegistrationClosed,
        )?;

        voters::register(&env, &voter)
    }

    /// Read any address's voter record. Unknown addresses read as the zero record.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, VotingError> {
        access::require_voter(&env, &caller)?;

        Ok(voters::lookup(&env, &voter))
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, Transition::StartProposalsRegistering)
    }

    /// Submit a proposal and return its id.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        access::require_voter(&env, &caller)?;
        workflow::require_status(
            &env,
            WorkflowStatus::ProposalsRegistrationStarted,
            VotingError::ProposalsNotAllowed,
        )?;

        proposals::submit(&env, description)
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, Transition::EndProposalsRegistering)
    }

    pub fn get_one_proposal(
        env: Env,
        caller: Address,
        proposal_id: u32,
    ) -> Result<Proposal, VotingError> {
        access::require_voter(&env, &caller)?;

        proposals::get(&env, proposal_id)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, Transition::StartVotingSession)
    }

    /// Cast the caller's single vote for `proposal_id`.
    pub fn set_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        let record = access::require_voter(&env, &caller)?;
        workflow::require_status(
            &env,
            WorkflowStatus::VotingSessionStarted,
            VotingError::VotingSessionNotStarted,
        )?;
        voters::require_not_voted(&record)?;
        proposals::require_votable(&env, proposal_id)?;

        voters::record_vote(&env, &caller, record, proposal_id);
        proposals::add_vote(&env, proposal_id)?;

        Voted {
            voter: caller,
            proposal_id,
        }
        .publish(&env);

        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, Transition::EndVotingSession)
    }

    // ── Tally ────────────────────────────────────────────────────────────────

    /// Select the winning proposal and close the election.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::check(&env, Transition::TallyVotes)?;

        let winner = tally::count_votes(&env);
        storage::set_winning_proposal(&env, winner);
        workflow::advance(&env, Transition::TallyVotes)?;

        Ok(winner)
    }

    // ── Public Queries ───────────────────────────────────────────────────────

    pub fn workflow_status(env: Env) -> WorkflowStatus {
        workflow::current(&env)
    }

    /// Winning proposal id. Reads 0 until votes are tallied.
    pub fn winning_proposal_id(env: Env) -> u32 {
        storage::get_winning_proposal(&env)
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        storage::get_admin(&env).ok_or(VotingError::NotInitialized)
    }
}
