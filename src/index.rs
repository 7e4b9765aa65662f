use crate::cut::{CutRange, CutRanges};
use crate::error::SliceError;

// ---------------------------------------------------------------------------
// Nearest-value lookup
// ---------------------------------------------------------------------------

/// Index of the value in `xs` closest to `q`.
///
/// Ties resolve to the lowest index (strict `<` scan keeps the first
/// minimum). The axis is not required to be sorted, so this is a plain O(N)
/// scan; NaN entries in `xs` never win the comparison and are skipped.
pub fn nearest_index(xs: &[f64], q: f64) -> Result<usize, SliceError> {
    if !q.is_finite() {
        return Err(SliceError::InvalidRange { value: q });
    }
    if xs.is_empty() {
        return Err(SliceError::EmptyAxis);
    }

    let mut best = 0usize;
    let mut best_dist = (xs[0] - q).abs();
    for (i, &x) in xs.iter().enumerate().skip(1) {
        let dist = (x - q).abs();
        // A NaN best_dist (NaN axis entry) is beatable by any real distance.
        if dist < best_dist || (best_dist.is_nan() && !dist.is_nan()) {
            best = i;
            best_dist = dist;
        }
    }
    Ok(best)
}

// ---------------------------------------------------------------------------
// Range → index sequence
// ---------------------------------------------------------------------------

/// Inclusive index run between the nearest matches of the two range bounds.
///
/// Counts downward when the lower bound resolves to a higher index than the
/// upper one, which is the common case for descending wavenumber axes.
pub fn range_indices(xaxis: &[f64], range: CutRange) -> Result<Vec<usize>, SliceError> {
    let from = nearest_index(xaxis, range.lower)?;
    let to = nearest_index(xaxis, range.upper)?;

    let indices = if from <= to {
        (from..=to).collect()
    } else {
        (to..=from).rev().collect()
    };
    Ok(indices)
}

/// Concatenation of the per-range index runs, in the order the ranges were
/// given. Overlapping ranges keep their duplicate indices; nothing is
/// sorted, merged, or deduplicated.
pub fn combined_indices(xaxis: &[f64], ranges: &CutRanges) -> Result<Vec<usize>, SliceError> {
    let mut combined = Vec::new();
    for range in ranges {
        combined.extend(range_indices(xaxis, *range)?);
    }
    Ok(combined)
}
