//! Client nonce generation.

use rand::{CryptoRng, RngCore};

/// The examples in RFC 5802 use 24-character nonces and say nothing further
/// about the length, so 24 it is.
pub(crate) const NONCE_LENGTH: usize = 24;

/// Printable ASCII (`!` through `~`) minus the comma, which is the wire
/// format's separator.
const ALPHABET_SIZE: u8 = 93;

/// Generates a fresh nonce from the given random source, one random byte per
/// character.
///
/// 256 is not a multiple of 93, so characters early in the alphabet come out
/// slightly more often than the rest. RFC 5802 only asks nonces to be
/// unpredictable, not uniform; changing the reduction would change emitted
/// nonces for no protocol benefit.
pub(crate) fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    let mut bytes = [0u8; NONCE_LENGTH];
    rng.fill_bytes(&mut bytes);
    bytes.iter().map(|&byte| printable(byte)).collect()
}

/// Maps a random byte onto the nonce alphabet, skipping over the comma.
fn printable(byte: u8) -> char {
    let ch = b'!' + byte % ALPHABET_SIZE;
    if ch < b',' {
        ch as char
    } else {
        (ch + 1) as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn nonce_has_fixed_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate(&mut rng).len(), NONCE_LENGTH);
    }

    #[test]
    fn nonce_never_contains_a_comma_or_unprintable_character() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            for ch in generate(&mut rng).chars() {
                assert!(ch.is_ascii_graphic(), "unprintable {:?}", ch);
                assert_ne!(ch, ',');
            }
        }
    }

    #[test]
    fn alphabet_covers_every_printable_except_comma() {
        let alphabet: Vec<char> = (0..ALPHABET_SIZE).map(printable).collect();
        let expected: Vec<char> = ('!'..='~').filter(|&ch| ch != ',').collect();
        assert_eq!(alphabet, expected);
    }

    #[test]
    fn reduction_wraps_at_the_alphabet_size() {
        assert_eq!(printable(0), '!');
        assert_eq!(printable(ALPHABET_SIZE), '!');
        assert_eq!(printable(ALPHABET_SIZE - 1), '~');
    }

    #[test]
    fn distinct_draws_give_distinct_nonces() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_ne!(generate(&mut rng), generate(&mut rng));
    }
}
