//! Random secret generator for password and shared-secret fields.

use rand::Rng;

/// First character code of the secret alphabet (`'@'`).
const ALPHABET_START: u8 = b'@';
/// Number of consecutive characters in the alphabet, `'@'..='Y'`.
const ALPHABET_LEN: u8 = 26;

/// Generate a secret of `len` characters from the thread-local RNG.
pub fn random_secret(len: usize) -> String {
    random_secret_with(&mut rand::rng(), len)
}

/// Generate a secret of `len` characters, each drawn uniformly from `'@'..='Y'`.
pub fn random_secret_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(ALPHABET_START + rng.random_range(0..ALPHABET_LEN)))
        .collect()
}
