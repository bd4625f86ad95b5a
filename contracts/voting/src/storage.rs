use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Proposal, Voter, WorkflowStatus};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger a day is 17,280 ledgers. Entries are bumped to the network
// maximum once their remaining TTL falls under 30 days.
const DAY_IN_LEDGERS: u32 = 17_280;
const BUMP_THRESHOLD_LEDGERS: u32 = 30 * DAY_IN_LEDGERS;

fn bump_instance(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD_LEDGERS, max_ttl);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD_LEDGERS, max_ttl);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

// ── Workflow ─────────────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
    bump_instance(env);
}

pub fn get_winning_proposal(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::WinningProposal)
        .unwrap_or(0u32)
}

pub fn set_winning_proposal(env: &Env, proposal_id: u32) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposal, &proposal_id);
    bump_instance(env);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, voter: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
}

pub fn has_voter(env: &Env, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voter(voter.clone()))
}

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    bump_persistent(env, &key);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &count);
    bump_instance(env);
}

pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn save_proposal(env: &Env, proposal_id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}
