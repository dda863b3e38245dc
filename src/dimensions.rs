use rand::Rng;

use crate::grid::{MAX_DIMENSION, MIN_DIMENSION};

/// Upper bound used when the coin flip comes up lucky.
pub const LUCKY_MAX_DIMENSION: usize = 35;

/// Draw a maze side length.
///
/// A fair coin picks the small range [5, 35] or the full range [5, 155];
/// even draws are bumped to the next odd number.
pub fn random_dimension<R: Rng + ?Sized>(rng: &mut R) -> usize {
    let lucky: bool = rng.gen();
    let upper = if lucky { LUCKY_MAX_DIMENSION } else { MAX_DIMENSION };
    let value = rng.gen_range(MIN_DIMENSION..=upper);
    if value % 2 == 0 {
        value + 1
    } else {
        value
    }
}
