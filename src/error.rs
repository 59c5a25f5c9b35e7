use thiserror::Error;

/// The attributes of the SCRAM message grammar that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `s=`, the Base64-encoded password salt.
    Salt,
    /// `i=`, the PBKDF2 iteration count.
    Iterations,
}

/// The reasons a SCRAM session latches its fault flag.
///
/// These never escape [`Mechanism::proceed`](crate::Mechanism::proceed) as
/// errors; the session records the first one and keeps answering with empty
/// lines. [`Scram::fault`](crate::Scram::fault) exposes the recorded value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// A server message segment was shorter than three characters or did not
    /// have `=` as its second character.
    #[error("malformed attribute {0:?} in server message")]
    MalformedAttribute(String),
    /// The server nonce does not begin with the client nonce, which is
    /// evidence of a replay or a confused session.
    #[error("server nonce does not begin with the client nonce")]
    NonceMismatch,
    /// An attribute was recognized but its value could not be decoded.
    #[error("invalid value in field {0:?}")]
    InvalidField(Field),
}
