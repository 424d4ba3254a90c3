//! Bubble sort with early exit.
//!
//! Each pass bubbles the largest remaining element of the unsorted prefix to the end of that
//! prefix. A pass that performs no swap proves the prefix is already sorted, at which point the
//! sort stops. Elements are only swapped on a strict `>` so equal elements never move past each
//! other, which makes the sort stable.

/// Counters collected while sorting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of outer passes, including the final pass that found nothing to swap.
    pub passes: usize,
    /// Number of adjacent element comparisons.
    pub comparisons: usize,
    /// Number of adjacent element swaps.
    pub swaps: usize,
}

/// Sorts `v` in place in ascending order.
#[inline]
pub fn sort(v: &mut [i32]) {
    sort_by(v, |a, b| a > b);
}

/// Sorts `v` in place in ascending order and reports how much work it took.
///
/// Already sorted input of length >= 2 finishes after a single pass without swaps, reverse
/// sorted input of length `n` needs `n - 1` passes.
#[inline]
pub fn sort_with_stats(v: &mut [i32]) -> SortStats {
    sort_by(v, |a, b| a > b)
}

/// Swaps `v[j]` and `v[j + 1]` whenever `is_greater(&v[j], &v[j + 1])`.
pub(crate) fn sort_by<T, F>(v: &mut [T], mut is_greater: F) -> SortStats
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut stats = SortStats::default();

    // len < 2 has nothing to compare, and `len - 1` would underflow.
    if len < 2 {
        return stats;
    }

    for i in 0..len - 1 {
        let mut pass_swaps = 0;

        // The last `i` elements are already in their final position.
        for j in 0..len - i - 1 {
            stats.comparisons += 1;
            if is_greater(&v[j], &v[j + 1]) {
                v.swap(j, j + 1);
                pass_swaps += 1;
            }
        }

        stats.passes += 1;
        stats.swaps += pass_swaps;
        tracing::trace!(pass = i, swaps = pass_swaps, "bubble pass done");

        if pass_swaps == 0 {
            break;
        }
    }

    tracing::debug!(
        len,
        passes = stats.passes,
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "bubble sort done"
    );

    stats
}
