//! Crate error type and result alias.

use thiserror::Error;

/// Errors surfaced by `catena-core`.
///
/// Authorization outcomes are never errors: a denied action is `false`, an
/// absent user is "no match". The fallible surface is limited to parsing
/// wire-level enum names handed in by the REST/RPC layers.
#[derive(Debug, Error)]
pub enum CatenaError {
    #[error("unknown requested action: {name}")]
    UnknownAction { name: String },

    #[error("unknown user group: {name}")]
    UnknownUserGroup { name: String },

    #[error("unknown visibility: {name}")]
    UnknownVisibility { name: String },
}

pub type Result<T> = std::result::Result<T, CatenaError>;
