//! Weighted selection pools.

use rand::distributions::WeightedIndex;
use rand::Rng;

/// A pool of values, each repeated `weight` times.
///
/// Choosing from the pool is equivalent to picking uniformly from the list
/// with every entry expanded `weight` times, without building that list.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPool<T> {
    values: Vec<T>,
    weights: Vec<u32>,
    /// `None` when there is nothing to pick (no entries or all weights zero).
    index: Option<WeightedIndex<u32>>,
}

impl<T: Clone> WeightedPool<T> {
    /// Build a pool from `(value, weight)` entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, u32)>,
    {
        let (values, weights): (Vec<T>, Vec<u32>) = entries.into_iter().unzip();
        let index = WeightedIndex::new(&weights).ok();
        Self {
            values,
            weights,
            index,
        }
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u32 {
        self.weights.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_none()
    }

    /// Weight of the first entry equal to `value`, 0 if absent.
    pub fn weight_of(&self, value: &T) -> u32
    where
        T: PartialEq,
    {
        self.values
            .iter()
            .position(|v| v == value)
            .map(|i| self.weights[i])
            .unwrap_or(0)
    }

    /// Pick a value; `None` only when the pool is empty.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<T> {
        let index = self.index.as_ref()?;
        self.values.get(rng.sample(index)).cloned()
    }
}

/// Entries for `values`, all with the same weight.
pub fn repeated<T, I>(values: I, weight: u32) -> impl Iterator<Item = (T, u32)>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().map(move |value| (value, weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool: WeightedPool<u8> = WeightedPool::from_entries([]);
        assert!(pool.is_empty());
        assert_eq!(pool.choose(&mut rng), None);
    }

    #[test]
    fn test_all_zero_weights_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = WeightedPool::from_entries([("a", 0), ("b", 0)]);
        assert!(pool.is_empty());
        assert_eq!(pool.choose(&mut rng), None);
    }

    #[test]
    fn test_zero_weight_never_chosen() {
        let pool = WeightedPool::from_entries([("a", 0), ("b", 3)]);
        assert_eq!(pool.total_weight(), 3);
        assert_eq!(pool.weight_of(&"a"), 0);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(pool.choose(&mut rng), Some("b"));
        }
    }

    #[test]
    fn test_repeated() {
        let pool = WeightedPool::from_entries(repeated(["x", "y"], 20).chain([("z", 1)]));
        assert_eq!(pool.total_weight(), 41);
        assert_eq!(pool.weight_of(&"y"), 20);
        assert_eq!(pool.weight_of(&"z"), 1);
    }

    #[test]
    fn test_weights_respected() {
        let pool = WeightedPool::from_entries([('a', 99), ('b', 1)]);
        let mut rng = StdRng::seed_from_u64(42);

        let a_count = (0..10_000)
            .filter(|_| pool.choose(&mut rng) == Some('a'))
            .count();

        // Expected ~9900
        assert!(a_count > 9700, "a chosen {a_count} times");
    }

    #[test]
    fn test_deterministic_choice() {
        let pool = WeightedPool::from_entries(repeated(1..=10, 5));
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let picks1: Vec<_> = (0..20).map(|_| pool.choose(&mut rng1)).collect();
        let picks2: Vec<_> = (0..20).map(|_| pool.choose(&mut rng2)).collect();
        assert_eq!(picks1, picks2);
    }
}
