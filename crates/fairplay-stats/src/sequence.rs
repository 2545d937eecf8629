//! Helpers for interleaved per-ply sequences.

/// Yields every element whose index `i` satisfies `(i + offset) % 2 == 0`.
///
/// With an interleaved move-time sequence, offset `0` selects the first mover's entries and
/// offset `1` the second mover's.
///
/// # Examples
///
/// ```
/// # use fairplay_stats::sequence::skip_alternate;
/// let plies = ["m0", "m1", "m2", "m3", "m4"];
/// assert_eq!(skip_alternate(&plies, 0).copied().collect::<Vec<_>>(), ["m0", "m2", "m4"]);
/// assert_eq!(skip_alternate(&plies, 1).copied().collect::<Vec<_>>(), ["m1", "m3"]);
/// ```
pub fn skip_alternate<T>(values: &[T], offset: usize) -> impl Iterator<Item = &T> + '_ {
    values.iter().skip(offset % 2).step_by(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence() {
        let values: [u32; 0] = [];
        assert_eq!(skip_alternate(&values, 0).count(), 0);
        assert_eq!(skip_alternate(&values, 1).count(), 0);
    }

    #[test]
    fn test_single_element() {
        let values = [7];
        assert_eq!(skip_alternate(&values, 0).collect::<Vec<_>>(), [&7]);
        assert_eq!(skip_alternate(&values, 1).count(), 0);
    }

    #[test]
    fn test_offset_parity() {
        let values = [0, 1, 2, 3, 4, 5];
        let even = skip_alternate(&values, 0).copied().collect::<Vec<_>>();
        let odd = skip_alternate(&values, 1).copied().collect::<Vec<_>>();
        assert_eq!(even, [0, 2, 4]);
        assert_eq!(odd, [1, 3, 5]);
        // Only the parity of the offset matters
        assert_eq!(skip_alternate(&values, 2).copied().collect::<Vec<_>>(), even);
        assert_eq!(skip_alternate(&values, 3).copied().collect::<Vec<_>>(), odd);
    }
}
