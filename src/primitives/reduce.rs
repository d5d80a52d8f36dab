//! Parallel reduce over a monoid.

use rayon::prelude::*;

/// Reduces `items` with an associative `op` and `identity` element, in
/// unspecified order (as required of a monoid).
pub fn reduce<T, F>(items: &[T], identity: T, op: F) -> T
where
    T: Send + Sync + Clone,
    F: Fn(T, T) -> T + Sync + Send,
{
    items
        .par_iter()
        .cloned()
        .reduce(|| identity.clone(), |a, b| op(a, b))
}

/// Sums a sequence of `usize`, a common specialization of `reduce`.
pub fn reduce_sum(items: &[usize]) -> usize {
    items.par_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_sum_matches_sequential() {
        let items: Vec<usize> = (0..1000).collect();
        let expected: usize = items.iter().sum();
        assert_eq!(reduce_sum(&items), expected);
        assert_eq!(reduce(&items, 0usize, |a, b| a + b), expected);
    }

    #[test]
    fn reduce_max() {
        let items = vec![3usize, 7, 1, 9, 4];
        assert_eq!(reduce(&items, 0, |a, b| a.max(b)), 9);
    }
}
