//! Median of two sorted arrays.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MedianError {
    #[error("both arrays are empty")]
    Empty,
    /// Only detected when the partition search fails to converge.
    #[error("input arrays are not sorted in ascending order")]
    NotSorted,
}

/// Median of the multiset union of two ascending slices.
///
/// Binary-searches the partition of the shorter slice, so it runs in
/// O(log(min(m, n))) without merging.
pub fn median_sorted_arrays(a: &[i64], b: &[i64]) -> Result<f64, MedianError> {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let (m, n) = (short.len(), long.len());
    if m + n == 0 {
        return Err(MedianError::Empty);
    }

    // Number of elements on the left side of the partition.
    let half = (m + n + 1) / 2;
    let (mut lo, mut hi) = (0, m);
    while lo <= hi {
        let i = (lo + hi) / 2;
        let j = half - i;

        let short_left = if i == 0 { i64::MIN } else { short[i - 1] };
        let short_right = if i == m { i64::MAX } else { short[i] };
        let long_left = if j == 0 { i64::MIN } else { long[j - 1] };
        let long_right = if j == n { i64::MAX } else { long[j] };

        if short_left > long_right {
            hi = i - 1;
        } else if long_left > short_right {
            lo = i + 1;
        } else {
            let left = short_left.max(long_left);
            if (m + n) % 2 == 1 {
                return Ok(left as f64);
            }
            let right = short_right.min(long_right);
            return Ok((left as f64 + right as f64) / 2.0);
        }
    }
    Err(MedianError::NotSorted)
}
