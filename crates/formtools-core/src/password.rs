//! Random password generation for new client accounts and password resets.

use rand::seq::index;
use rand::Rng;

/// Characters a generated password is drawn from.
///
/// Easily confused letters (`e`, `i`, `l`, `o`, `u`) are left out of the
/// lowercase range.
pub const PASSWORD_ALPHABET: &str =
    "0123456789abcdfghjkmnpqrstvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_-";

/// Default length of a generated password.
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;

/// Generate a password of `length` distinct characters.
///
/// No character appears twice, so `length` is capped at the alphabet size.
#[must_use]
pub fn generate_password(length: usize) -> String {
    generate_password_with(&mut rand::thread_rng(), length)
}

/// Generate a password using the supplied random source.
#[must_use]
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let alphabet: Vec<char> = PASSWORD_ALPHABET.chars().collect();
    let length = length.min(alphabet.len());

    index::sample(rng, alphabet.len(), length)
        .into_iter()
        .map(|i| alphabet[i])
        .collect()
}
