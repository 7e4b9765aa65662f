use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CutRange – one region of the x-axis to keep
// ---------------------------------------------------------------------------

/// A `(lower, upper)` bound pair in x-axis units defining a region to keep.
///
/// The bounds do not have to satisfy `lower < upper`: each one maps
/// independently to the index of its closest axis value, and the resulting
/// index run counts downward when the lower bound resolves past the upper
/// one. On an axis stored in descending wavenumber order the natural call is
/// therefore `CutRange::new(1500.0, 1000.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutRange {
    pub lower: f64,
    pub upper: f64,
}

impl CutRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

impl From<(f64, f64)> for CutRange {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self { lower, upper }
    }
}

// ---------------------------------------------------------------------------
// CutRanges – the normalized, ordered list of regions
// ---------------------------------------------------------------------------

/// An ordered list of [`CutRange`]s.
///
/// This is the single normalized form the slicing code works with: a bare
/// pair, a list of pairs, or nothing at all, all convert into a `CutRanges`
/// at the API boundary via [`From`]/[`Into`], so nothing downstream ever
/// branches on "one range vs. many". Order is preserved through slicing and
/// overlapping ranges are not merged.
///
/// An empty list means "no slicing": [`slice_xvalues`] treats it as a no-op.
///
/// [`slice_xvalues`]: crate::slice::slice_xvalues
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutRanges(Vec<CutRange>);

impl CutRanges {
    /// The empty list (slicing no-op).
    pub fn none() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[CutRange] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CutRange> {
        self.0.iter()
    }
}

impl From<CutRange> for CutRanges {
    fn from(range: CutRange) -> Self {
        Self(vec![range])
    }
}

impl From<(f64, f64)> for CutRanges {
    fn from(pair: (f64, f64)) -> Self {
        Self(vec![pair.into()])
    }
}

impl From<Vec<CutRange>> for CutRanges {
    fn from(ranges: Vec<CutRange>) -> Self {
        Self(ranges)
    }
}

impl From<Vec<(f64, f64)>> for CutRanges {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        Self(pairs.into_iter().map(CutRange::from).collect())
    }
}

impl From<&[(f64, f64)]> for CutRanges {
    fn from(pairs: &[(f64, f64)]) -> Self {
        Self(pairs.iter().copied().map(CutRange::from).collect())
    }
}

impl<T: Into<CutRanges>> From<Option<T>> for CutRanges {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or_default()
    }
}

impl FromIterator<CutRange> for CutRanges {
    fn from_iter<I: IntoIterator<Item = CutRange>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CutRanges {
    type Item = &'a CutRange;
    type IntoIter = std::slice::Iter<'a, CutRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
