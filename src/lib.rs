//! X-axis range slicing for spectroscopic data tables.
//!
//! Given a table where each row holds a full spectrum (a wavenumber or
//! wavelength axis paired with intensity values), [`slice_xvalues`] restricts
//! every spectrum to one or more x-axis sub-ranges and discards the rest of
//! the axis together with the corresponding intensity columns.
//!
//! ```text
//!   SpectralTable ──┬── "wavenumbers" axis list-column
//!                   ├── "spc" spectra list-column
//!                   └── metadata columns (untouched)
//!         │
//!         ▼
//!   ┌──────────────┐   per row, per range: nearest-index lookup
//!   │ slice_xvalues │   of both bounds → inclusive index run →
//!   └──────────────┘   concatenated subset of axis + spectrum
//!         │
//!         ▼
//!   SpectralTable with the two list-columns replaced
//! ```
//!
//! Range bounds snap to the closest axis value (ties to the lowest index),
//! so axes do not need to be sorted and bounds do not need to hit exact
//! values. Ranges are applied in the order given and their index runs are
//! concatenated without deduplication; overlapping ranges therefore repeat
//! positions, which is intentional.
//!
//! ```
//! use wavecut::{slice_xvalues, Column, SpectralTable, SpectrumData};
//!
//! let mut table = SpectralTable::new();
//! table.insert_column("wavenumbers", Column::Axis(vec![vec![1500.0, 1300.0, 1100.0]]))?;
//! table.insert_column(
//!     "spc",
//!     Column::Spectra(vec![SpectrumData::Series(vec![5.0, 4.0, 3.0])]),
//! )?;
//!
//! slice_xvalues(&mut table, (1300.0, 1100.0))?;
//! assert_eq!(table.axis_column("wavenumbers")?[0], vec![1300.0, 1100.0]);
//! # Ok::<(), wavecut::SliceError>(())
//! ```

pub mod cut;
pub mod error;
pub mod index;
pub mod model;
pub mod slice;

pub use cut::{CutRange, CutRanges};
pub use error::SliceError;
pub use model::{Column, MetadataValue, SpectralTable, SpectrumData};
pub use slice::{
    slice_xvalues, slice_xvalues_columns, DEFAULT_SPECTRUM_COLUMN, DEFAULT_XAXIS_COLUMN,
};
