//! Short code generation.

use rand::Rng;

/// Alphabet used for short codes: digits plus lowercase and uppercase ASCII
/// letters (62 characters).
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a random short code of `length` characters.
///
/// Each character is drawn independently and uniformly from [`ALPHABET`].
/// The result is not guaranteed unique; callers enforce uniqueness against
/// the store and retry on collision.
///
/// # Examples
///
/// ```
/// use shortlink::utils::code_generator::generate_code;
///
/// let code = generate_code(7);
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
