use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SliceError;

// ---------------------------------------------------------------------------
// MetadataValue – a single cell in a scalar metadata column
// ---------------------------------------------------------------------------

/// A dynamically-typed metadata value mirroring common data-frame dtypes.
/// Metadata columns are carried through a slice untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// ISO-8601 date string kept as text for simplicity.
    Date(String),
    Null,
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::String(s) => write!(f, "{s}"),
            MetadataValue::Integer(i) => write!(f, "{i}"),
            MetadataValue::Float(v) => write!(f, "{v:.4}"),
            MetadataValue::Bool(b) => write!(f, "{b}"),
            MetadataValue::Date(d) => write!(f, "{d}"),
            MetadataValue::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// SpectrumData – one row's intensity data
// ---------------------------------------------------------------------------

/// Per-row intensity storage. A row either holds a dense matrix (several
/// samples sharing one axis) or a single intensity series; the slicing
/// algorithm only ever talks to [`column_count`] and [`select_columns`], so
/// it never branches on the variant.
///
/// [`column_count`]: SpectrumData::column_count
/// [`select_columns`]: SpectrumData::select_columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpectrumData {
    /// Dense row-major matrix: `rows` samples × `cols` axis positions,
    /// `values.len() == rows * cols`.
    Matrix {
        rows: usize,
        cols: usize,
        values: Vec<f64>,
    },
    /// A single intensity sequence, one value per axis position.
    Series(Vec<f64>),
}

impl SpectrumData {
    /// Build a matrix spectrum, checking that the value buffer matches the
    /// declared shape.
    pub fn matrix(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, SliceError> {
        if values.len() != rows * cols {
            return Err(SliceError::MalformedMatrix {
                rows,
                cols,
                values_len: values.len(),
            });
        }
        Ok(SpectrumData::Matrix { rows, cols, values })
    }

    /// Verify the storage invariant. Matrices built through the public
    /// fields or deserialized from untrusted data may claim a shape their
    /// value buffer does not back; series are always well-formed.
    pub fn check_shape(&self) -> Result<(), SliceError> {
        match self {
            SpectrumData::Matrix { rows, cols, values } if values.len() != rows * cols => {
                Err(SliceError::MalformedMatrix {
                    rows: *rows,
                    cols: *cols,
                    values_len: values.len(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Number of axis positions this spectrum covers.
    pub fn column_count(&self) -> usize {
        match self {
            SpectrumData::Matrix { cols, .. } => *cols,
            SpectrumData::Series(values) => values.len(),
        }
    }

    /// Subset by axis position, preserving the order (and any duplicates)
    /// of `indices`. Every index must be below [`column_count`].
    ///
    /// [`column_count`]: SpectrumData::column_count
    pub fn select_columns(&self, indices: &[usize]) -> SpectrumData {
        match self {
            SpectrumData::Matrix { rows, cols, values } => {
                let mut out = Vec::with_capacity(rows * indices.len());
                for sample in 0..*rows {
                    let base = sample * cols;
                    out.extend(indices.iter().map(|&i| values[base + i]));
                }
                SpectrumData::Matrix {
                    rows: *rows,
                    cols: indices.len(),
                    values: out,
                }
            }
            SpectrumData::Series(values) => {
                SpectrumData::Series(indices.iter().map(|&i| values[i]).collect())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Column – one named column of the table
// ---------------------------------------------------------------------------

/// A table column: either a list-column (one sequence/matrix per row) or a
/// plain scalar column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    /// Per-row x-axis sequences (wavenumbers/wavelengths).
    Axis(Vec<Vec<f64>>),
    /// Per-row intensity data.
    Spectra(Vec<SpectrumData>),
    /// Per-row scalar metadata.
    Metadata(Vec<MetadataValue>),
}

impl Column {
    /// Number of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            Column::Axis(v) => v.len(),
            Column::Spectra(v) => v.len(),
            Column::Metadata(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// SpectralTable – named columns of equal row count
// ---------------------------------------------------------------------------

/// A table of spectra: named columns, all with the same row count, in
/// insertion order. Column access is by name with existence and kind checks
/// instead of duck typing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpectralTable {
    /// Column order as inserted.
    names: Vec<String>,
    columns: BTreeMap<String, Column>,
}

impl SpectralTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows, defined by the first column (0 for an empty table).
    pub fn row_count(&self) -> usize {
        self.names
            .first()
            .and_then(|name| self.columns.get(name))
            .map_or(0, Column::len)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Insert a column, or replace an existing one in place (keeping its
    /// position). The column must match the table's row count; the first
    /// column inserted defines it.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<(), SliceError> {
        let name = name.into();
        if !self.names.is_empty() {
            let expected = self.row_count();
            if column.len() != expected {
                return Err(SliceError::LengthMismatch {
                    name,
                    expected,
                    actual: column.len(),
                });
            }
        }
        if !self.columns.contains_key(&name) {
            self.names.push(name.clone());
        }
        self.columns.insert(name, column);
        Ok(())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column, SliceError> {
        self.columns
            .get(name)
            .ok_or_else(|| SliceError::MissingColumn {
                name: name.to_string(),
            })
    }

    /// Look up an x-axis list-column by name.
    pub fn axis_column(&self, name: &str) -> Result<&[Vec<f64>], SliceError> {
        match self.column(name)? {
            Column::Axis(axes) => Ok(axes),
            _ => Err(SliceError::ColumnKind {
                name: name.to_string(),
                expected: "axis",
            }),
        }
    }

    /// Look up a spectra list-column by name.
    pub fn spectra_column(&self, name: &str) -> Result<&[SpectrumData], SliceError> {
        match self.column(name)? {
            Column::Spectra(spectra) => Ok(spectra),
            _ => Err(SliceError::ColumnKind {
                name: name.to_string(),
                expected: "spectra",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_table() -> SpectralTable {
        let mut table = SpectralTable::new();
        table
            .insert_column(
                "wavenumbers",
                Column::Axis(vec![vec![10.0, 20.0], vec![5.0, 6.0]]),
            )
            .unwrap();
        table
            .insert_column(
                "spc",
                Column::Spectra(vec![
                    SpectrumData::Series(vec![1.0, 2.0]),
                    SpectrumData::Series(vec![3.0, 4.0]),
                ]),
            )
            .unwrap();
        table
    }

    #[test]
    fn row_count_follows_first_column() {
        let table = two_row_table();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_names(), ["wavenumbers", "spc"]);
    }

    #[test]
    fn insert_rejects_wrong_length() {
        let mut table = two_row_table();
        let err = table
            .insert_column("sample", Column::Metadata(vec![MetadataValue::Null]))
            .unwrap_err();
        assert_eq!(
            err,
            SliceError::LengthMismatch {
                name: "sample".into(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn replace_keeps_column_position() {
        let mut table = two_row_table();
        table
            .insert_column(
                "wavenumbers",
                Column::Axis(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
            )
            .unwrap();
        assert_eq!(table.column_names(), ["wavenumbers", "spc"]);
    }

    #[test]
    fn missing_and_wrong_kind_columns_are_reported() {
        let table = two_row_table();
        assert_eq!(
            table.column("nope").unwrap_err(),
            SliceError::MissingColumn { name: "nope".into() }
        );
        assert!(matches!(
            table.axis_column("spc").unwrap_err(),
            SliceError::ColumnKind { expected: "axis", .. }
        ));
        assert!(matches!(
            table.spectra_column("wavenumbers").unwrap_err(),
            SliceError::ColumnKind { expected: "spectra", .. }
        ));
    }

    #[test]
    fn series_select_preserves_order_and_duplicates() {
        let spc = SpectrumData::Series(vec![5.0, 4.0, 3.0]);
        assert_eq!(
            spc.select_columns(&[2, 1, 1]),
            SpectrumData::Series(vec![3.0, 4.0, 4.0])
        );
    }

    #[test]
    fn matrix_constructor_checks_the_shape() {
        assert!(SpectrumData::matrix(2, 3, vec![0.0; 6]).is_ok());
        assert_eq!(
            SpectrumData::matrix(2, 3, vec![0.0; 5]).unwrap_err(),
            SliceError::MalformedMatrix {
                rows: 2,
                cols: 3,
                values_len: 5,
            }
        );
    }

    #[test]
    fn check_shape_catches_understated_value_buffers() {
        // Built through the public fields, bypassing the constructor.
        let spc = SpectrumData::Matrix {
            rows: 2,
            cols: 3,
            values: vec![1.0, 2.0],
        };
        assert!(matches!(
            spc.check_shape(),
            Err(SliceError::MalformedMatrix { values_len: 2, .. })
        ));
        assert_eq!(SpectrumData::Series(vec![1.0]).check_shape(), Ok(()));
    }

    #[test]
    fn matrix_select_subsets_every_sample() {
        let spc = SpectrumData::Matrix {
            rows: 2,
            cols: 3,
            values: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        };
        assert_eq!(
            spc.select_columns(&[0, 2]),
            SpectrumData::Matrix {
                rows: 2,
                cols: 2,
                values: vec![1.0, 3.0, 4.0, 6.0],
            }
        );
        assert_eq!(spc.column_count(), 3);
    }
}
