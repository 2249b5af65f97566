//! Spawn value distribution - the engine's only randomness boundary.

use rand::Rng;

use crate::types::SPAWN_TWO_PROBABILITY;

/// Draw the value of a newly spawned tile: 2 with probability 0.9, else 4.
///
/// Cell selection is the session's job; only the value distribution lives
/// here. Any `rand` source can be injected, so tests use a seeded one.
pub fn spawn_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen::<f64>() < SPAWN_TWO_PROBABILITY {
        2
    } else {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn only_twos_and_fours() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let v = spawn_value(&mut rng);
            assert!(v == 2 || v == 4, "unexpected spawn value {}", v);
        }
    }

    #[test]
    fn four_rate_is_about_ten_percent() {
        let mut rng = SmallRng::seed_from_u64(2028);
        let draws = 10_000;
        let fours = (0..draws).filter(|_| spawn_value(&mut rng) == 4).count();
        let rate = fours as f64 / draws as f64;
        assert!((0.08..=0.12).contains(&rate), "4-rate {} outside 8-12%", rate);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SmallRng::seed_from_u64(99);
        let mut b = SmallRng::seed_from_u64(99);
        for _ in 0..100 {
            assert_eq!(spawn_value(&mut a), spawn_value(&mut b));
        }
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut rng: Box<dyn rand::RngCore> = Box::new(SmallRng::seed_from_u64(1));
        let v = spawn_value(&mut *rng);
        assert!(v == 2 || v == 4);
    }
}
