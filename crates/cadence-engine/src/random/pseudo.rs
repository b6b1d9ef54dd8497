use std::fmt;

use super::seed;
use super::sfc32::Sfc32;

/// An item paired with a non-negative selection weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedItem<T> {
    pub item: T,
    pub weight: f64,
}

/// Failures from the drawing operations.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RandomError {
    /// A choice was requested from an empty collection.
    EmptyInput,
    /// A weighted choice exhausted its candidates without selecting one.
    /// Indicates a caller-supplied weight-sum bug (negative weights, NaN).
    InternalInvariant,
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomError::EmptyInput => write!(f, "cannot choose from an empty collection"),
            RandomError::InternalInvariant => {
                write!(f, "weighted choice found no result; check the supplied weights")
            }
        }
    }
}

impl std::error::Error for RandomError {}

/// Seedable random number generator with replayable sequences.
///
/// Owns the seed string, the generator state and a monotonically increasing
/// step counter: every value draw increments `steps`, so two instances can
/// be compared for drift. Reseeding replaces the generator state entirely
/// and leaves the counter untouched.
#[derive(Debug, Clone)]
pub struct PseudoRandom {
    seed: String,
    generator: Sfc32,
    steps: u64,
}

impl PseudoRandom {
    /// Creates a generator with a synthesized (non-deterministic) seed.
    pub fn new() -> Self {
        Self::from_seed(&seed::synthesize())
    }

    /// Creates a generator from an explicit seed. Fully deterministic.
    pub fn from_seed(seed: &str) -> Self {
        Self {
            seed: seed.to_owned(),
            generator: Sfc32::new(seed::digest(seed)),
            steps: 0,
        }
    }

    /// Creates a seeded generator and discards `preheat` draws up front,
    /// decorrelating early output from seed structure.
    pub fn with_preheat(seed: &str, preheat: u32) -> Self {
        let mut random = Self::from_seed(seed);
        random.preheat(preheat);
        random
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of value draws performed since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Replaces the generator state from `seed`, synthesizing one when
    /// `None`. The step counter is not reset.
    pub fn reseed(&mut self, seed: Option<&str>) {
        self.seed = match seed {
            Some(s) => s.to_owned(),
            None => seed::synthesize(),
        };
        self.generator = Sfc32::new(seed::digest(&self.seed));
    }

    /// Discards `times` draws. Each discard counts as a step.
    pub fn preheat(&mut self, times: u32) {
        for _ in 0..times {
            self.int_range(0.0, 2.0);
        }
    }

    /// Returns an integer drawn uniformly from `[ceil(min), floor(max))`.
    /// `max` is exclusive.
    pub fn int_range(&mut self, min: f64, max: f64) -> i64 {
        self.steps += 1;
        let minimum = min.ceil();
        let maximum = max.floor();
        (self.generator.next() * (maximum - minimum) + minimum).floor() as i64
    }

    /// Returns a float drawn uniformly from `[min, max)`.
    pub fn num(&mut self, min: f64, max: f64) -> f64 {
        self.steps += 1;
        self.generator.next() * (max - min) + min
    }

    /// Returns a uniformly selected element of `items`.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RandomError> {
        if items.is_empty() {
            return Err(RandomError::EmptyInput);
        }
        let index = self.int_range(0.0, items.len() as f64) as usize;
        Ok(&items[index])
    }

    /// Returns the first item whose cumulative weight range contains a draw
    /// from `[0, total_weight)`.
    pub fn weighted_choice<'a, T>(
        &mut self,
        items: &'a [WeightedItem<T>],
    ) -> Result<&'a T, RandomError> {
        let total: f64 = items.iter().map(|weighted| weighted.weight).sum();
        let value = self.num(0.0, total);

        let mut upto = 0.0;
        for weighted in items {
            if upto + weighted.weight >= value {
                return Ok(&weighted.item);
            }
            upto += weighted.weight;
        }

        Err(RandomError::InternalInvariant)
    }
}

impl Default for PseudoRandom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn identical_seeds_replay_identically() {
        let mut a = PseudoRandom::from_seed("stormlight");
        let mut b = PseudoRandom::from_seed("stormlight");

        for _ in 0..64 {
            assert_eq!(a.int_range(0.0, 100.0), b.int_range(0.0, 100.0));
            assert_eq!(a.num(-1.0, 1.0).to_bits(), b.num(-1.0, 1.0).to_bits());
            assert_eq!(
                a.choice(&["x", "y", "z"]).unwrap(),
                b.choice(&["x", "y", "z"]).unwrap()
            );
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = PseudoRandom::from_seed("alpha");
        let mut b = PseudoRandom::from_seed("beta");
        let seq_a: Vec<i64> = (0..16).map(|_| a.int_range(0.0, 1_000_000.0)).collect();
        let seq_b: Vec<i64> = (0..16).map(|_| b.int_range(0.0, 1_000_000.0)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn reseed_restarts_the_sequence() {
        let mut random = PseudoRandom::from_seed("first");
        let initial: Vec<i64> = (0..8).map(|_| random.int_range(0.0, 1000.0)).collect();

        random.reseed(Some("first"));
        let replay: Vec<i64> = (0..8).map(|_| random.int_range(0.0, 1000.0)).collect();
        assert_eq!(initial, replay);
    }

    #[test]
    fn reseed_leaves_step_counter_untouched() {
        let mut random = PseudoRandom::from_seed("first");
        random.num(0.0, 1.0);
        random.num(0.0, 1.0);
        random.reseed(Some("second"));
        assert_eq!(random.steps(), 2);
    }

    #[test]
    fn preheat_advances_the_sequence_and_counts_steps() {
        let mut preheated = PseudoRandom::with_preheat("ember", 5);
        assert_eq!(preheated.steps(), 5);

        let mut manual = PseudoRandom::from_seed("ember");
        for _ in 0..5 {
            manual.int_range(0.0, 2.0);
        }
        assert_eq!(preheated.num(0.0, 1.0).to_bits(), manual.num(0.0, 1.0).to_bits());
    }

    // ── ranges ────────────────────────────────────────────────────────────

    #[test]
    fn int_range_respects_bounds() {
        let mut random = PseudoRandom::from_seed("bounds");
        for _ in 0..2048 {
            let v = random.int_range(-3.0, 7.0);
            assert!((-3..7).contains(&v), "{v} out of [-3, 7)");
        }
    }

    #[test]
    fn int_range_rounds_fractional_bounds_inward() {
        let mut random = PseudoRandom::from_seed("fractional");
        for _ in 0..512 {
            let v = random.int_range(0.2, 3.9);
            assert!((1..3).contains(&v), "{v} out of [ceil(0.2), floor(3.9))");
        }
    }

    #[test]
    fn num_respects_bounds() {
        let mut random = PseudoRandom::from_seed("floats");
        for _ in 0..2048 {
            let v = random.num(2.5, 2.75);
            assert!((2.5..2.75).contains(&v));
        }
    }

    #[test]
    fn steps_count_every_draw() {
        let mut random = PseudoRandom::from_seed("counted");
        random.int_range(0.0, 10.0);
        random.num(0.0, 10.0);
        random.choice(&[1, 2, 3]).unwrap();
        random.weighted_choice(&[WeightedItem { item: 1, weight: 1.0 }]).unwrap();
        assert_eq!(random.steps(), 4);
    }

    // ── choice ────────────────────────────────────────────────────────────

    #[test]
    fn choice_from_empty_fails() {
        let mut random = PseudoRandom::from_seed("empty");
        let items: [u8; 0] = [];
        assert_eq!(random.choice(&items).unwrap_err(), RandomError::EmptyInput);
    }

    #[test]
    fn choice_from_singleton_is_that_element() {
        let mut random = PseudoRandom::from_seed("single");
        for _ in 0..32 {
            assert_eq!(*random.choice(&["only"]).unwrap(), "only");
        }
    }

    #[test]
    fn choice_eventually_covers_all_elements() {
        let mut random = PseudoRandom::from_seed("coverage");
        let items = [0usize, 1, 2, 3];
        let mut seen = [false; 4];
        for _ in 0..256 {
            seen[*random.choice(&items).unwrap()] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    // ── weighted choice ───────────────────────────────────────────────────

    #[test]
    fn weighted_choice_from_empty_is_an_invariant_failure() {
        let mut random = PseudoRandom::from_seed("empty");
        let items: [WeightedItem<u8>; 0] = [];
        assert_eq!(
            random.weighted_choice(&items).unwrap_err(),
            RandomError::InternalInvariant
        );
    }

    #[test]
    fn weighted_choice_with_one_candidate_always_selects_it() {
        let mut random = PseudoRandom::from_seed("lonely");
        let items = [WeightedItem { item: "it", weight: 0.25 }];
        for _ in 0..32 {
            assert_eq!(*random.weighted_choice(&items).unwrap(), "it");
        }
    }

    #[test]
    fn weighted_choice_skews_toward_heavy_items() {
        let mut random = PseudoRandom::from_seed("skew");
        let items = [
            WeightedItem { item: "light", weight: 1.0 },
            WeightedItem { item: "heavy", weight: 99.0 },
        ];
        let heavy = (0..1000)
            .filter(|_| *random.weighted_choice(&items).unwrap() == "heavy")
            .count();
        assert!(heavy > 900, "heavy selected only {heavy}/1000 times");
    }

    #[test]
    fn weighted_choice_ignores_zero_weight_items() {
        let mut random = PseudoRandom::from_seed("zero");
        let items = [
            WeightedItem { item: "never", weight: 0.0 },
            WeightedItem { item: "always", weight: 1.0 },
        ];
        for _ in 0..256 {
            assert_eq!(*random.weighted_choice(&items).unwrap(), "always");
        }
    }
}
