//! CountBits: number of set bits in 3·K, where K = Σ 2^A[i] and A is
//! strictly increasing.

use crate::errors::Result;
use crate::generator::{RandomArray, SortedUnique};
use crate::harness::Harness;
use crate::types::RunConfig;

pub const NAME: &str = "TestCountBits";

pub fn config() -> RunConfig<u32> {
    RunConfig::new(NAME, 1, 14, 0, 14)
}

pub fn naive(a: &[u32]) -> u32 {
    let sum: u64 = a.iter().map(|&i| 1u64 << i).sum();
    (sum * 3).count_ones()
}

/// Single pass over the exponents of K, tracking the carry of K + 2K.
///
/// `pending` is the position of the carry bit produced so far.
pub fn streaming(a: &[u32]) -> u32 {
    let Some((&first, rest)) = a.split_first() else {
        return 0;
    };

    let mut count = 1;
    let mut pending = first + 1;
    for &bit in rest {
        if bit == pending {
            pending = bit + 2;
        } else if bit + 1 == pending {
            pending = bit + 2;
            count += 1;
        } else if bit > pending {
            pending = bit + 1;
            count += 2;
        }
    }
    count + 1
}

pub fn harness(seed: Option<u64>) -> Result<Harness<u32, u32>> {
    let mut cfg = config();
    cfg.seed = seed;
    let generator = SortedUnique::new(RandomArray::from_config(&cfg));
    let mut h = Harness::new(cfg)?.with_generator(generator);
    h.register_fixed_case(vec![1, 4, 5], 4);
    h.register_named_implementation("naive", naive);
    h.register_named_implementation("streaming", streaming);
    Ok(h)
}
