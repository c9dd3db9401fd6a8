//! Linear-congruential generator and the selections built on it.
//!
//! Every engine draws from this one generator so a reading is a pure
//! function of its seed.

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS: u64 = 1 << 31;

/// The classic ANSI C LCG: `state = (state × 1103515245 + 12345) mod 2³¹`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a generator. Seeds at or above 2³¹ are reduced.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Current state, i.e. the last value produced (or the seed).
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance and return the raw state in `0..2³¹`.
    pub fn next_raw(&mut self) -> u64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state
    }

    /// Advance and return a uniform draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_raw() as f64 / MODULUS as f64
    }

    /// Advance and return an index in `0..len`. Returns 0 when `len` is 0.
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len - 1)
    }

    /// Advance and return an integer in `lo..=hi`.
    pub fn next_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_index((hi - lo + 1) as usize) as u32
    }

    /// Advance and return `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Reverse Fisher-Yates shuffle driven by an LCG seeded with `seed`.
///
/// At each step `i` from `len - 1` down to 1 the generator advances and
/// `j = floor(state / 2³¹ × (i + 1))` is swapped with `i`. The input is not
/// mutated.
pub fn shuffle<T: Clone>(deck: &[T], seed: u64) -> Vec<T> {
    let mut lcg = Lcg::new(seed);
    shuffle_with(deck, &mut lcg)
}

/// [`shuffle`] continuing from an existing generator.
pub fn shuffle_with<T: Clone>(deck: &[T], lcg: &mut Lcg) -> Vec<T> {
    let mut out = deck.to_vec();
    for i in (1..out.len()).rev() {
        let j = lcg.next_index(i + 1);
        out.swap(i, j);
    }
    out
}

/// Pick `count` distinct indices from `0..pool_len`, tracking used indices.
///
/// `count` is clamped to `pool_len`.
pub fn draw_distinct(pool_len: usize, count: usize, lcg: &mut Lcg) -> Vec<usize> {
    let count = count.min(pool_len);
    let mut used = vec![false; pool_len];
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count {
        let mut idx = lcg.next_index(pool_len);
        while used[idx] {
            idx = (idx + 1) % pool_len;
        }
        used[idx] = true;
        picked.push(idx);
    }
    picked
}

/// Pick one element of a slice by `seed mod len`. `None` for an empty slice.
pub fn pick_by_seed<T>(items: &[T], seed: u64) -> Option<&T> {
    if items.is_empty() {
        None
    } else {
        items.get((seed % items.len() as u64) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lcg_known_sequence() {
        let mut lcg = Lcg::new(1);
        assert_eq!(lcg.next_raw(), 1_103_527_590);
        assert_eq!(lcg.next_raw(), 377_401_575);
        assert_eq!(lcg.next_raw(), 662_824_084);
    }

    #[test]
    fn lcg_f64_in_unit_interval() {
        let mut lcg = Lcg::new(123_456);
        for _ in 0..10_000 {
            let x = lcg.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn next_index_handles_empty() {
        let mut lcg = Lcg::new(5);
        assert_eq!(lcg.next_index(0), 0);
        assert_eq!(lcg.next_in_range(3, 3), 3);
    }

    #[test]
    fn shuffle_is_deterministic() {
        let deck: Vec<u32> = (0..78).collect();
        assert_eq!(shuffle(&deck, 42), shuffle(&deck, 42));
        assert_ne!(shuffle(&deck, 42), shuffle(&deck, 43));
    }

    #[test]
    fn shuffle_known_small_case() {
        // seed 1: first draw 1103527590 / 2^31 ≈ 0.5139 → j = floor(0.5139 × 3) = 1
        //         second draw 377401575 / 2^31 ≈ 0.1757 → j = floor(0.1757 × 2) = 0
        let out = shuffle(&['a', 'b', 'c'], 1);
        assert_eq!(out, vec!['c', 'a', 'b']);
    }

    #[test]
    fn shuffle_does_not_mutate_input() {
        let deck = vec![1, 2, 3, 4];
        let _ = shuffle(&deck, 9);
        assert_eq!(deck, vec![1, 2, 3, 4]);
    }

    #[test]
    fn shuffle_empty_and_single() {
        let empty: Vec<u8> = Vec::new();
        assert!(shuffle(&empty, 1).is_empty());
        assert_eq!(shuffle(&[7], 1), vec![7]);
    }

    #[test]
    fn draw_distinct_clamps() {
        let mut lcg = Lcg::new(3);
        let picks = draw_distinct(5, 10, &mut lcg);
        assert_eq!(picks.len(), 5);
        let mut sorted = picks.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        assert!(draw_distinct(0, 3, &mut lcg).is_empty());
    }

    #[test]
    fn pick_by_seed_wraps() {
        let items = ["a", "b", "c"];
        assert_eq!(pick_by_seed(&items, 4), Some(&"b"));
        let none: [&str; 0] = [];
        assert_eq!(pick_by_seed(&none, 4), None);
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(deck in proptest::collection::vec(any::<u16>(), 0..100), seed in any::<u64>()) {
            let out = shuffle(&deck, seed);
            let mut a = deck.clone();
            let mut b = out.clone();
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn draw_distinct_never_repeats(len in 1usize..100, count in 0usize..120, seed in any::<u64>()) {
            let mut lcg = Lcg::new(seed);
            let picks = draw_distinct(len, count, &mut lcg);
            prop_assert_eq!(picks.len(), count.min(len));
            let mut seen = std::collections::HashSet::new();
            for p in picks {
                prop_assert!(p < len);
                prop_assert!(seen.insert(p));
            }
        }
    }
}
