use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use crate::{CringeLevel, ZodiacSign};

/// Derives the shareable seed from `sign|date|cringe`.
///
/// DJB2 over the key string, 32-bit wrapping, absolute value of the
/// signed result. The formula is a wire contract: the same inputs must
/// hash to the same integer on every machine and in every port.
pub fn generate_deterministic_seed(
    sign: ZodiacSign,
    date: &str,
    cringe: CringeLevel,
) -> Result<u32, String> {
    validate_date(date)?;
    let key = format!("{}|{}|{}", sign.token(), date, cringe.index());
    Ok(djb2(&key))
}

/// Seed for the non-deterministic path: OS entropy, with a thread-rng
/// fallback when the OS source is unavailable. Not reproducible.
pub fn generate_random_seed() -> u32 {
    let mut bytes = [0u8; 4];
    if OsRng.try_fill_bytes(&mut bytes).is_ok() {
        return u32::from_le_bytes(bytes);
    }
    rand::thread_rng().gen()
}

pub fn validate_date(date: &str) -> Result<(), String> {
    let bytes = date.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(format!("invalid date (expected YYYY-MM-DD): {}", date));
    }
    Ok(())
}

fn djb2(value: &str) -> u32 {
    let mut hash: i32 = 5381;
    for byte in value.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_add(hash)
            .wrapping_add(byte as i32);
    }
    hash.unsigned_abs()
}
