use std::fmt;

use rand::Rng;

/// Number of ordered two-die outcomes.
pub const NUM_OUTCOMES: usize = 36;

/// An ordered pair of die faces in 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice {
    pub first: u8,
    pub second: u8,
}

impl Dice {
    pub fn new(first: u8, second: u8) -> Self {
        debug_assert!((1..=6).contains(&first) && (1..=6).contains(&second));
        Dice { first, second }
    }

    /// Roll two independent dice from the given source.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Dice::new(rng.random_range(1..=6), rng.random_range(1..=6))
    }

    pub fn is_double(self) -> bool {
        self.first == self.second
    }

    /// All 36 ordered outcomes, each with probability 1/36.
    pub fn all_pairs() -> impl Iterator<Item = Dice> {
        (1..=6u8).flat_map(|first| (1..=6u8).map(move |second| Dice::new(first, second)))
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roll_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let dice = Dice::roll(&mut rng);
            assert!((1..=6).contains(&dice.first));
            assert!((1..=6).contains(&dice.second));
        }
    }

    #[test]
    fn test_all_pairs_covers_every_outcome() {
        let pairs: Vec<Dice> = Dice::all_pairs().collect();
        assert_eq!(pairs.len(), NUM_OUTCOMES);
        for first in 1..=6 {
            for second in 1..=6 {
                assert!(pairs.contains(&Dice::new(first, second)));
            }
        }
    }

    #[test]
    fn test_doubles() {
        assert!(Dice::new(4, 4).is_double());
        assert!(!Dice::new(4, 5).is_double());
        assert_eq!(Dice::all_pairs().filter(|d| d.is_double()).count(), 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dice::new(3, 5).to_string(), "3-5");
    }
}
