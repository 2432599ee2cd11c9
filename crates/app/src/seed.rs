//! Where a session's seed comes from: the `--seed` flag, or a value drawn from
//! the clock, the process id and a per-process draw counter.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionSeed {
    Given(u64),
    Generated(u64),
}

impl SessionSeed {
    pub fn value(self) -> u64 {
        match self {
            Self::Given(seed) | Self::Generated(seed) => seed,
        }
    }

    pub fn is_generated(self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

static DRAWS: AtomicU64 = AtomicU64::new(0);

/// Fresh seed for a run started without `--seed`. Two calls in one process never
/// share their counter input.
pub fn generate_runtime_seed() -> u64 {
    let nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |elapsed| elapsed.as_nanos());
    let draw = DRAWS.fetch_add(1, Ordering::Relaxed);
    let folded_clock = (nanos as u64) ^ ((nanos >> 64) as u64);
    let pid = u64::from(process::id()) << 32;

    splitmix64(folded_clock ^ pid ^ draw.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// The flag's seed when one was passed, otherwise `generated`.
pub fn resolve_seed(flag: Option<u64>, generated: u64) -> SessionSeed {
    flag.map_or(SessionSeed::Generated(generated), SessionSeed::Given)
}

fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_seed_is_used_without_a_flag() {
        let choice = resolve_seed(None, 9_876_543);
        assert_eq!(choice, SessionSeed::Generated(9_876_543));
        assert!(choice.is_generated());
    }

    #[test]
    fn flag_seed_wins_over_generated_seed() {
        let choice = resolve_seed(Some(4_242), 1);
        assert_eq!(choice, SessionSeed::Given(4_242));
        assert_eq!(choice.value(), 4_242);
        assert!(!choice.is_generated());
    }

    #[test]
    fn runtime_seeds_differ_between_draws() {
        let seeds: Vec<u64> = (0..16).map(|_| generate_runtime_seed()).collect();
        for (i, seed) in seeds.iter().enumerate() {
            assert!(!seeds[i + 1..].contains(seed), "draw {i} repeated");
        }
    }

    #[test]
    fn runtime_seed_feeds_resolution_unchanged() {
        let generated = generate_runtime_seed();
        assert_eq!(resolve_seed(None, generated).value(), generated);
    }
}
