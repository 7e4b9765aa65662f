use log::{debug, trace};

use crate::cut::CutRanges;
use crate::error::SliceError;
use crate::index::combined_indices;
use crate::model::{Column, SpectralTable};

/// Default name of the x-axis list-column.
pub const DEFAULT_XAXIS_COLUMN: &str = "wavenumbers";
/// Default name of the spectra list-column.
pub const DEFAULT_SPECTRUM_COLUMN: &str = "spc";

/// Restrict every spectrum in `table` to the given x-axis ranges, using the
/// default column names (`"wavenumbers"` / `"spc"`).
///
/// See [`slice_xvalues_columns`] for the full contract.
pub fn slice_xvalues(
    table: &mut SpectralTable,
    ranges: impl Into<CutRanges>,
) -> Result<(), SliceError> {
    slice_xvalues_columns(table, DEFAULT_XAXIS_COLUMN, DEFAULT_SPECTRUM_COLUMN, ranges)
}

/// Restrict every spectrum in `table` to the given x-axis ranges.
///
/// For each row, each range's bounds map to the indices of their closest
/// axis values (ties to the lowest index), spanning an inclusive index run;
/// the runs are concatenated in range order, duplicates and all, and the
/// combined sequence subsets both the axis and the spectrum of that row.
/// Each row is matched against its own axis; one range list applies to the
/// whole table.
///
/// Exactly the two named columns are replaced. Every other column, the row
/// count, and the column order stay as they were. An empty `ranges` is a
/// no-op. On error the table is left unmodified.
pub fn slice_xvalues_columns(
    table: &mut SpectralTable,
    xaxis_column: &str,
    spectrum_column: &str,
    ranges: impl Into<CutRanges>,
) -> Result<(), SliceError> {
    let ranges = ranges.into();
    if ranges.is_empty() {
        return Ok(());
    }

    for range in &ranges {
        for bound in [range.lower, range.upper] {
            if !bound.is_finite() {
                return Err(SliceError::InvalidRange { value: bound });
            }
        }
    }

    let axes = table.axis_column(xaxis_column)?;
    let spectra = table.spectra_column(spectrum_column)?;

    // Build both replacement columns completely before touching the table,
    // so a failing row leaves the input unchanged.
    let mut new_axes = Vec::with_capacity(axes.len());
    let mut new_spectra = Vec::with_capacity(spectra.len());

    for (row, (xaxis, spectrum)) in axes.iter().zip(spectra).enumerate() {
        spectrum.check_shape()?;
        if spectrum.column_count() != xaxis.len() {
            return Err(SliceError::DimensionMismatch {
                row,
                axis_len: xaxis.len(),
                spectrum_cols: spectrum.column_count(),
            });
        }

        let indices = combined_indices(xaxis, &ranges)?;
        trace!(
            "row {row}: keeping {} of {} axis positions",
            indices.len(),
            xaxis.len()
        );

        new_axes.push(indices.iter().map(|&i| xaxis[i]).collect::<Vec<f64>>());
        new_spectra.push(spectrum.select_columns(&indices));
    }

    debug!(
        "slice_xvalues: {} rows × {} ranges on '{xaxis_column}'/'{spectrum_column}'",
        new_axes.len(),
        ranges.len()
    );

    table.insert_column(xaxis_column, Column::Axis(new_axes))?;
    table.insert_column(spectrum_column, Column::Spectra(new_spectra))?;
    Ok(())
}
