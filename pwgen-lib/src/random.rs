pub mod shared;

use log::debug;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::alphabet::Alphabet;
use crate::error::GeneratorError;
use crate::password::{Password, PasswordLength};

pub use shared::SharedGenerator;

// Largest multiple of 26 that fits in a u32 word, words at or above it are redrawn
static UNBIASED_ZONE: u32 = (u32::MAX / 26) * 26;

/// Draws `length` letters uniformly from a-z, in draw order.
///
/// The source is advanced once per letter (plus a redraw in the rare case a
/// word falls in the biased tail). Errors from the source are returned as
/// `GeneratorError::RandomSource` without retrying.
pub fn generate<R: RngCore + ?Sized>(
    length: PasswordLength,
    rng: &mut R,
) -> Result<Password, GeneratorError> {
    debug!("generating password of length {}", length);

    let mut password = Password::with_capacity(length);
    for _ in 0..length.get() {
        password.push(draw_letter(rng)?);
    }

    Ok(password)
}

/// Validates a signed length before generating. Negative lengths fail with
/// `InvalidArgument` and leave the source untouched.
pub fn generate_raw<R: RngCore + ?Sized>(
    length: i64,
    rng: &mut R,
) -> Result<Password, GeneratorError> {
    let length = PasswordLength::try_from(length)?;
    generate(length, rng)
}

pub fn generate_many<R: RngCore + ?Sized>(
    count: usize,
    length: PasswordLength,
    rng: &mut R,
) -> Result<Vec<Password>, GeneratorError> {
    debug!("generating {} passwords of length {}", count, length);

    let mut passwords = Vec::new();
    for _ in 0..count {
        passwords.push(generate(length, rng)?);
    }

    Ok(passwords)
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn entropy_rng() -> Result<StdRng, GeneratorError> {
    Ok(StdRng::from_rng(OsRng)?)
}

fn draw_letter<R: RngCore + ?Sized>(rng: &mut R) -> Result<char, GeneratorError> {
    let mut word = [0u8; 4];
    loop {
        rng.try_fill_bytes(&mut word)?;
        let value = u32::from_le_bytes(word);
        if value < UNBIASED_ZONE {
            return Ok(Alphabet::wrapping_letter(value));
        }
    }
}
