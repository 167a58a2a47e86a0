//! Decade partition of the observed record.

use std::ops::Range;

/// Splits `len` rows into `n_decades` contiguous, non-overlapping chunks.
///
/// Every chunk gets `len / n_decades` rows and the first `len % n_decades`
/// chunks get one extra row, so the chunks cover `0..len` in order.
/// Returns an empty vector when `n_decades` is zero.
pub fn decade_bounds(len: usize, n_decades: usize) -> Vec<Range<usize>> {
    if n_decades == 0 {
        return Vec::new();
    }
    let base = len / n_decades;
    let extra = len % n_decades;

    let mut bounds = Vec::with_capacity(n_decades);
    let mut start = 0;
    for d in 0..n_decades {
        let size = base + usize::from(d < extra);
        bounds.push(start..start + size);
        start += size;
    }
    bounds
}
