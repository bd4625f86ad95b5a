//! Caller guards shared by every entry point.
//!
//! Each guard first asks the host to authenticate `caller`, then checks the
//! role the operation requires.

use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::storage;
use crate::types::Voter;

/// Require that `caller` is the election administrator.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();

    let admin = storage::get_admin(env).ok_or(VotingError::NotInitialized)?;
    if *caller != admin {
        return Err(VotingError::NotAdmin);
    }

    Ok(())
}

/// Require that `caller` is a registered voter and return its record.
pub fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    caller.require_auth();

    match storage::get_voter(env, caller) {
        Some(voter) if voter.is_registered => Ok(voter),
        _ => Err(VotingError::NotVoter),
    }
}
