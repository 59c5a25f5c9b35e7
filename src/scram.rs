//! The SCRAM client state machine.

use std::num::NonZeroU32;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::crypto::{self, ScramAlgorithm};
use crate::error::{Field, ProtocolError};
use crate::mechanism::Mechanism;
use crate::message::{self, Attribute};
use crate::nonce;

/// Stage of the four-message SCRAM exchange. Forward-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The client introduces itself with its username and a fresh nonce; no
    /// server message has been seen yet.
    ClientNonce,
    /// Waiting for the server challenge carrying nonce, salt and iteration
    /// count, which the client answers with its proof.
    ServerChallenge,
    /// Waiting for the server to prove its own knowledge of the password.
    ServerSignature,
    /// No further messages are exchanged.
    Done,
}

/// SASLprep (RFC 4013) stand-in.
///
/// TODO: apply the SASLprep profile of stringprep for non-ASCII input. Until
/// then the secret passes through unchanged, which is correct for ASCII.
fn normalize(input: &str) -> String {
    input.to_string()
}

/// A client-side SCRAM session.
///
/// The hash family is fixed at construction; credentials are supplied
/// through [`Mechanism::set_credentials`], which also draws the client
/// nonce. One `Scram` value covers one authentication attempt and is not
/// meant to be shared across threads.
///
/// `OsRng`, the default nonce source, draws from the operating system on
/// every call and is safe to use from any number of concurrent sessions. A
/// deterministic source can be injected with
/// [`with_nonce_source`](Scram::with_nonce_source) for testing.
pub struct Scram<R: RngCore + CryptoRng = OsRng> {
    algorithm: ScramAlgorithm,
    rng: R,
    step: Step,
    normalized_password: Vec<u8>,
    encoded_channel_binding: String,
    client_nonce: String,
    client_first: String,
    client_first_bare: String,
    expected_server_signature: Vec<u8>,
    succeeded: bool,
    fault: Option<ProtocolError>,
}

impl Scram<OsRng> {
    /// Creates a session running on the given hash family, drawing nonces
    /// from the operating system.
    pub fn new(algorithm: ScramAlgorithm) -> Self {
        Scram::with_nonce_source(algorithm, OsRng)
    }
}

impl<R: RngCore + CryptoRng> Scram<R> {
    /// Creates a session with a caller-supplied nonce source. Use a
    /// cryptographically secure source anywhere near production.
    pub fn with_nonce_source(algorithm: ScramAlgorithm, rng: R) -> Self {
        Scram {
            algorithm,
            rng,
            step: Step::ClientNonce,
            normalized_password: Vec::new(),
            encoded_channel_binding: String::new(),
            client_nonce: String::new(),
            client_first: String::new(),
            client_first_bare: String::new(),
            expected_server_signature: Vec::new(),
            succeeded: false,
            fault: None,
        }
    }

    /// The protocol violation that latched the fault flag, if any.
    pub fn fault(&self) -> Option<&ProtocolError> {
        self.fault.as_ref()
    }

    /// Handles the server challenge and produces the client final message.
    fn handle_challenge(&mut self, message: &str) -> Result<String, ProtocolError> {
        let mut server_nonce = String::new();
        let mut salt = Vec::new();
        let mut iterations = NonZeroU32::MIN;
        for attribute in message::attributes(message) {
            let Attribute { key, value } = attribute?;
            match key {
                b'r' => {
                    if !value.starts_with(&self.client_nonce) {
                        return Err(ProtocolError::NonceMismatch);
                    }
                    server_nonce = value.to_string();
                }
                b's' => {
                    salt = base64::decode(value)
                        .map_err(|_| ProtocolError::InvalidField(Field::Salt))?;
                }
                b'i' => {
                    iterations = value
                        .parse()
                        .map_err(|_| ProtocolError::InvalidField(Field::Iterations))?;
                }
                // Unrecognized attributes are ignored for forward
                // compatibility.
                _ => {}
            }
        }
        self.step = Step::ServerSignature;
        let salted_password = crypto::salt_password(
            self.algorithm,
            &self.normalized_password,
            &salt,
            iterations,
        );
        let client_final_without_proof =
            format!("c={},r={}", self.encoded_channel_binding, server_nonce);
        // The transcript binds the challenge exactly as received, not a
        // reserialization of it.
        let auth_message = format!(
            "{},{},{}",
            self.client_first_bare, message, client_final_without_proof
        );
        let proofs =
            crypto::derive_proofs(self.algorithm, &salted_password, auth_message.as_bytes());
        self.expected_server_signature = proofs.server_signature;
        debug!(target: "sasl::scram", "C: {},p=*******", client_final_without_proof);
        Ok(format!(
            "{},p={}",
            client_final_without_proof,
            base64::encode(&proofs.client_proof)
        ))
    }
}

impl<R: RngCore + CryptoRng> Mechanism for Scram<R> {
    fn set_credentials(&mut self, secret: &str, authcid: &str, authzid: Option<&str>) {
        self.normalized_password = normalize(secret).into_bytes();
        self.client_nonce = nonce::generate(&mut self.rng);
        self.client_first_bare = format!("n={},r={}", authcid, self.client_nonce);
        let gs2_header = message::gs2_header(authzid.unwrap_or(""));
        self.client_first = format!("{}{}", gs2_header, self.client_first_bare);
        self.encoded_channel_binding = base64::encode(gs2_header.as_bytes());
    }

    fn initial_response(&self) -> String {
        debug!(target: "sasl::scram", "C: AUTH SCRAM* {}", self.client_first);
        self.client_first.clone()
    }

    fn proceed(&mut self, message: &str) -> String {
        if self.fault.is_some() {
            return String::new();
        }
        match self.step {
            Step::ClientNonce => {
                self.step = Step::ServerChallenge;
                debug!(target: "sasl::scram", "C: AUTH SCRAM* {}", self.client_first);
                self.client_first.clone()
            }
            Step::ServerChallenge => match self.handle_challenge(message) {
                Ok(client_final) => client_final,
                Err(error) => {
                    debug!(target: "sasl::scram", "S: rejected challenge: {}", error);
                    self.fault = Some(error);
                    String::new()
                }
            },
            Step::ServerSignature => {
                self.step = Step::Done;
                let expected = format!(
                    "v={}",
                    base64::encode(&self.expected_server_signature)
                );
                // A mismatch leaves `succeeded` false without faulting; the
                // exchange still ran to completion, the server just failed
                // to prove itself.
                if message == expected {
                    self.succeeded = true;
                }
                String::new()
            }
            Step::Done => String::new(),
        }
    }

    fn succeeded(&self) -> bool {
        self.succeeded
    }

    fn faulted(&self) -> bool {
        self.fault.is_some()
    }

    fn reset(&mut self) {
        // Outcome flags only; the step is not rewound. A fresh exchange
        // needs a fresh session with a fresh nonce.
        self.succeeded = false;
        self.fault = None;
    }
}
