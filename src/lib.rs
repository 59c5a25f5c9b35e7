//! # Client-side SASL mechanisms
//!
//! This crate implements the client half of three SASL (RFC 4422)
//! authentication mechanisms: SCRAM (RFC 5802) over SHA-1 or SHA-256, PLAIN
//! (RFC 4616) and LOGIN. Channel binding is not supported; the GS2 header is
//! always of the `n,...` form.
//!
//! Every mechanism implements the [`Mechanism`] trait, a line-oriented
//! challenge/response surface: supply the credentials once, then alternate
//! between handing the mechanism the latest decoded line from the server and
//! sending back the line it returns, until it returns an empty line. The
//! crate performs no I/O and no line framing itself; transporting the lines
//! (and any outer encoding such as Base64-over-SMTP) is the caller's job.
//!
//! ```no_run
//! use sasl_client::{Mechanism, Scram, ScramAlgorithm};
//!
//! // This function represents your I/O implementation.
//! fn send_and_receive(line: &str) -> String {
//!     unimplemented!()
//! }
//!
//! let mut mechanism = Scram::new(ScramAlgorithm::Sha256);
//! mechanism.set_credentials("pencil", "user", None);
//!
//! let mut inbound = String::new();
//! loop {
//!     let outbound = mechanism.proceed(&inbound);
//!     if outbound.is_empty() {
//!         break;
//!     }
//!     inbound = send_and_receive(&outbound);
//! }
//!
//! assert!(mechanism.succeeded());
//! assert!(!mechanism.faulted());
//! ```
//!
//! Protocol failures never unwind out of [`Mechanism::proceed`]; the session
//! latches its outcome instead. Poll [`Mechanism::faulted`] and
//! [`Mechanism::succeeded`] after each step. An exchange that completes
//! without `succeeded()` turning true must be treated as a failed
//! authentication attempt.

mod crypto;
mod error;
mod login;
mod mechanism;
mod message;
mod nonce;
mod plain;
mod scram;

pub use crypto::ScramAlgorithm;
pub use error::{Field, ProtocolError};
pub use login::Login;
pub use mechanism::Mechanism;
pub use plain::Plain;
pub use scram::Scram;
