//! Binarian: number of set bits in Σ 2^A[i].

use std::collections::BTreeMap;

use crate::errors::Result;
use crate::harness::Harness;
use crate::types::RunConfig;

pub const NAME: &str = "TestBinarian";

pub fn config() -> RunConfig<u32> {
    RunConfig::new(NAME, 1, 1000, 0, 10)
}

/// Sum the powers directly, then count bits.
pub fn naive(a: &[u32]) -> u32 {
    let sum: u64 = a.iter().map(|&i| 1u64 << i).sum();
    sum.count_ones()
}

/// Carry counts of equal exponents upwards without materializing the sum.
///
/// `counts[k]` holds how many 2^k terms are pending; each entry is replaced
/// by the binary expansion of its count, shifted to `k`.
pub fn carried(a: &[u32]) -> u32 {
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    for &k in a {
        *counts.entry(k).or_insert(0) += 1;
    }

    let mut binarian = 0;
    let mut cursor: u32 = 0;
    loop {
        let next = counts.range(cursor..).next().map(|(&k, &c)| (k, c));
        let Some((key, count)) = next else {
            break;
        };
        counts.insert(key, 0);
        let mut value = count;
        let mut shift = 0;
        while value > 0 {
            if value & 1 == 1 {
                *counts.entry(key + shift).or_insert(0) += 1;
            }
            value >>= 1;
            shift += 1;
        }
        if counts.get(&key).copied().unwrap_or(0) != 0 {
            binarian += 1;
        }
        cursor = key + 1;
    }
    binarian
}

pub fn harness(seed: Option<u64>) -> Result<Harness<u32, u32>> {
    let mut cfg = config();
    cfg.seed = seed;
    let mut h = Harness::new(cfg)?;
    h.register_fixed_case(vec![1, 0, 2, 0, 0, 2], 3);
    h.register_named_implementation("naive", naive);
    h.register_named_implementation("carried", carried);
    Ok(h)
}
