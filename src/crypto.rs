//! The SCRAM key derivation pipeline on top of `ring`.

use std::num::NonZeroU32;

use ring::{digest, hmac, pbkdf2};

/// The hash family a SCRAM session runs on.
///
/// Selects matching digest, HMAC and PBKDF2 primitives. SHA-1 is provided
/// for servers that only advertise `SCRAM-SHA-1`; prefer
/// [`Sha256`](ScramAlgorithm::Sha256) whenever the server offers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScramAlgorithm {
    /// SCRAM-SHA-1 (RFC 5802).
    Sha1,
    /// SCRAM-SHA-256 (RFC 7677).
    Sha256,
}

impl ScramAlgorithm {
    pub(crate) fn digest(self) -> &'static digest::Algorithm {
        match self {
            ScramAlgorithm::Sha1 => &digest::SHA1_FOR_LEGACY_USE_ONLY,
            ScramAlgorithm::Sha256 => &digest::SHA256,
        }
    }

    pub(crate) fn hmac(self) -> hmac::Algorithm {
        match self {
            ScramAlgorithm::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            ScramAlgorithm::Sha256 => hmac::HMAC_SHA256,
        }
    }

    pub(crate) fn pbkdf2(self) -> pbkdf2::Algorithm {
        match self {
            ScramAlgorithm::Sha1 => pbkdf2::PBKDF2_HMAC_SHA1,
            ScramAlgorithm::Sha256 => pbkdf2::PBKDF2_HMAC_SHA256,
        }
    }

    /// The size of this family's digests, in bytes. Salted passwords, keys,
    /// proofs and signatures all have this length.
    pub fn digest_len(self) -> usize {
        self.digest().output_len
    }
}

/// The two values RFC 5802 derives from the authentication transcript: the
/// proof the client sends and the signature it expects back.
pub(crate) struct Proofs {
    pub client_proof: Vec<u8>,
    pub server_signature: Vec<u8>,
}

/// Stretches the normalized password over the server-provided salt.
pub(crate) fn salt_password(
    algorithm: ScramAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: NonZeroU32,
) -> Vec<u8> {
    let mut salted = vec![0u8; algorithm.digest_len()];
    pbkdf2::derive(algorithm.pbkdf2(), iterations, salt, password, &mut salted);
    salted
}

/// Computes the client proof and the expected server signature for the given
/// authentication message.
pub(crate) fn derive_proofs(
    algorithm: ScramAlgorithm,
    salted_password: &[u8],
    auth_message: &[u8],
) -> Proofs {
    let salted_key = hmac::Key::new(algorithm.hmac(), salted_password);
    let client_key = hmac::sign(&salted_key, b"Client Key");
    let stored_key = digest::digest(algorithm.digest(), client_key.as_ref());
    let stored_key = hmac::Key::new(algorithm.hmac(), stored_key.as_ref());
    let client_signature = hmac::sign(&stored_key, auth_message);
    let client_proof = client_key
        .as_ref()
        .iter()
        .zip(client_signature.as_ref())
        .map(|(key, signature)| key ^ signature)
        .collect();
    let server_key = hmac::sign(&salted_key, b"Server Key");
    let server_key = hmac::Key::new(algorithm.hmac(), server_key.as_ref());
    let server_signature = hmac::sign(&server_key, auth_message).as_ref().to_vec();
    Proofs {
        client_proof,
        server_signature,
    }
}
