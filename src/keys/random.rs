//! Unique random key generation for the "generate structure" action.

use hashbrown::HashSet;
use rand::Rng;

use crate::error::ValidationError;

/// Inclusive value range for keys of exactly `digits` decimal digits.
/// Single-digit keys allow 0; wider keys exclude leading zeros.
fn digit_range(digits: u8) -> (u32, u32) {
    if digits <= 1 {
        (0, 9)
    } else {
        let min = 10u32.pow(u32::from(digits) - 1);
        (min, min * 10 - 1)
    }
}

/// Draws `count` distinct uniformly-random keys of exactly `digits`
/// decimal digits, in generation order.
///
/// Fails with [`ValidationError::CapacityExceeded`] when `count` exceeds
/// the number of representable values (10 for one digit, `9 * 10^(d-1)`
/// otherwise), which would otherwise loop forever.
pub fn generate_unique(count: usize, digits: u8) -> Result<Vec<u32>, ValidationError> {
    let (min, max) = digit_range(digits);
    let available = (max - min + 1) as usize;
    if count > available {
        return Err(ValidationError::CapacityExceeded {
            requested: count,
            available,
        });
    }

    let mut rng = rand::thread_rng();
    let mut seen = HashSet::with_capacity(count);
    let mut keys = Vec::with_capacity(count);
    while keys.len() < count {
        let key = rng.gen_range(min..=max);
        if seen.insert(key) {
            keys.push(key);
        }
    }
    Ok(keys)
}
