use soroban_sdk::{log, Env};

use crate::storage;

/// Pick the winning proposal from `(id, vote_count)` pairs given in ascending id order.
///
/// The leader only changes on a strictly higher count, so ties go to the lowest
/// id. With no proposals the winner is id 0.
pub fn select_winner<I>(vote_counts: I) -> u32
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut winner = 0u32;
    let mut best = 0u32;

    for (proposal_id, vote_count) in vote_counts {
        if vote_count > best {
            best = vote_count;
            winner = proposal_id;
        }
    }

    winner
}

/// Scan every stored proposal and return the winning id.
pub fn count_votes(env: &Env) -> u32 {
    let proposal_count = storage::get_proposal_count(env);

    let winner = select_winner((0..proposal_count).map(|proposal_id| {
        let vote_count = storage::get_proposal(env, proposal_id)
            .map(|proposal| proposal.vote_count)
            .unwrap_or(0);
        (proposal_id, vote_count)
    }));

    log!(env, "votes tallied", proposal_count, winner);

    winner
}
