//! Splitting an [`ElementSet`] into parts, and checking whether a list of sets partitions another.

use crate::prelude::*;

/// An ordered list of sets, as produced by [`ElementSet::partition`].
pub type Partition<E> = Vec<ElementSet<E>>;

impl<E: Ord + Clone> ElementSet<E> {
    /// Splits the set, in iteration order, into contiguous chunks of balanced size.
    ///
    /// Produces `m = min(segments, |x|)` chunks. The first `|x| mod m` chunks hold one element more
    /// than the remaining ones, so that every chunk is non-empty and sizes differ by at most one.
    /// The empty set is split into no chunks.
    ///
    /// ## Errors
    ///
    /// [`SetError::InvalidPartitionCount`] if `segments` is zero.
    pub fn partition(&self, segments: usize) -> Result<Partition<E>> {
        if segments == 0 {
            return Err(SetError::InvalidPartitionCount(segments));
        }

        let card = self.cardinality();
        let count = segments.min(card);
        if count == 0 {
            return Ok(Vec::new());
        }

        let (size, extra) = (card / count, card % count);
        tracing::trace!(segments, count, size, extra, "partitioning set");

        let mut iter = self.iter();
        let parts: Partition<E> = (0..count)
            .map(|i| {
                let len = if i < extra { size + 1 } else { size };
                iter.by_ref().take(len).cloned().collect()
            })
            .collect();
        Ok(parts)
    }

    /// Whether `parts` is a partition of this set.
    ///
    /// This holds when no part is empty, the union of the parts is this set, and the parts are
    /// pairwise disjoint. The empty list only partitions the empty set.
    pub fn is_partition(&self, parts: &[Self]) -> bool {
        if parts.iter().any(ElementSet::is_empty) {
            return false;
        }

        if Self::union_of(parts) != *self {
            return false;
        }

        // Each unordered pair is checked once.
        parts.iter().enumerate().all(|(i, fst)| {
            parts[(i + 1)..]
                .iter()
                .all(|snd| fst.is_disjoint_with(snd))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even() {
        let set: ElementSet<_> = (1..=6).collect();
        let parts = set.partition(3).unwrap();
        let expected: Partition<_> = vec![[1, 2].into(), [3, 4].into(), [5, 6].into()];
        assert_eq!(parts, expected);
        assert!(set.is_partition(&parts));
    }

    #[test]
    fn uneven() {
        let set: ElementSet<_> = [1, 2, 3].into();
        let parts = set.partition(2).unwrap();
        let expected: Partition<_> = vec![[1, 2].into(), [3].into()];
        assert_eq!(parts, expected);
        assert!(set.is_partition(&parts));

        let set: ElementSet<_> = (0..10).collect();
        let sizes: Vec<_> = set
            .partition(4)
            .unwrap()
            .iter()
            .map(ElementSet::cardinality)
            .collect();
        assert_eq!(sizes, vec![3, 3, 2, 2]);
    }

    #[test]
    fn more_segments_than_elements() {
        let set: ElementSet<_> = ['a', 'b'].into();
        let parts = set.partition(5).unwrap();
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(ElementSet::is_unit));
        assert!(set.is_partition(&parts));
    }

    #[test]
    fn single_segment() {
        let set: ElementSet<_> = [7, 8, 9].into();
        assert_eq!(set.partition(1), Ok(vec![set.clone()]));
    }

    #[test]
    fn empty() {
        let set = ElementSet::<u8>::new();
        assert_eq!(set.partition(3), Ok(Vec::new()));
        assert!(set.is_partition(&[]));
    }

    #[test]
    fn zero_segments() {
        let set: ElementSet<_> = [1].into();
        assert_eq!(set.partition(0), Err(SetError::InvalidPartitionCount(0)));
    }

    #[test]
    fn not_a_partition() {
        let set: ElementSet<_> = [1, 2, 3, 4].into();

        // Empty part.
        let parts: Partition<_> = vec![[1, 2].into(), [3, 4].into(), ElementSet::new()];
        assert!(!set.is_partition(&parts));

        // Missing element.
        let parts: Partition<_> = vec![[1, 2].into(), [3].into()];
        assert!(!set.is_partition(&parts));

        // Foreign element.
        let parts: Partition<_> = vec![[1, 2].into(), [3, 4, 5].into()];
        assert!(!set.is_partition(&parts));

        // Overlapping parts.
        let parts: Partition<_> = vec![[1, 2, 3].into(), [3, 4].into()];
        assert!(!set.is_partition(&parts));

        // Nothing partitions a non-empty set.
        assert!(!set.is_partition(&[]));
    }
}
