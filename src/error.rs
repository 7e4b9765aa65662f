use thiserror::Error;

/// Everything that can go wrong while slicing a [`SpectralTable`].
///
/// All variants abort the whole operation; there is no partial per-row
/// recovery. A failed call leaves the input table unmodified.
///
/// [`SpectralTable`]: crate::model::SpectralTable
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliceError {
    /// The requested column name does not exist in the table.
    #[error("column '{name}' not found in table")]
    MissingColumn { name: String },

    /// The column exists but holds the wrong kind of data
    /// (e.g. a metadata column requested as the x-axis).
    #[error("column '{name}' is not an {expected} column")]
    ColumnKind { name: String, expected: &'static str },

    /// A row's x-axis has zero length; nearest-value lookup is undefined.
    #[error("x-axis is empty, nearest-value lookup is undefined")]
    EmptyAxis,

    /// A cut range bound is NaN or infinite.
    #[error("cut range bound {value} is not finite")]
    InvalidRange { value: f64 },

    /// A row's spectrum column count disagrees with its x-axis length.
    #[error("row {row}: x-axis has {axis_len} values but spectrum has {spectrum_cols} columns")]
    DimensionMismatch {
        row: usize,
        axis_len: usize,
        spectrum_cols: usize,
    },

    /// A matrix spectrum's value buffer disagrees with its declared shape.
    #[error("matrix claims {rows}×{cols} values but holds {values_len}")]
    MalformedMatrix {
        rows: usize,
        cols: usize,
        values_len: usize,
    },

    /// A column inserted into a table does not match the table's row count.
    #[error("column '{name}' has {actual} values but table has {expected} rows")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}
