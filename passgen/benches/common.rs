use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ      ";

/// Generates `count` random seed strings for the transforms to work on.
/// Uses a fixed seed for reproducible benchmark results.
pub fn generate_random_seeds(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(8..=64);
            (0..length)
                .map(|_| SEED_CHARS[rng.gen_range(0..SEED_CHARS.len())] as char)
                .collect()
        })
        .collect()
}

pub const REVIEW_TEXT: &str = "The film opens slowly but the second act is a triumph. \
    Every actor brings real warmth to the screen. I would happily watch it again tomorrow! \
    Sadly the ending feels rushed and a little too neat. Still, a lovely evening at the cinema.";
