//! CSV export for the horizon projection table.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::finance::types::HorizonProjection;

/// Column header for the projection table.
const HEADER: &str = "years,roi_plant_pct,roi_smart_pct,npv_plant,npv_smart";

/// Exports projections to a CSV file at the given path.
///
/// Writes a header row followed by one row per horizon. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an error if file creation or writing fails.
pub fn export_csv(projections: &[HorizonProjection], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(projections, io::BufWriter::new(file))
}

/// Writes projections as CSV to any writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv(projections: &[HorizonProjection], writer: impl Write) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;
    for p in projections {
        wtr.write_record(&[
            p.years.to_string(),
            format!("{:.4}", p.roi_plant),
            format!("{:.4}", p.roi_smart),
            format!("{:.2}", p.npv_plant),
            format!("{:.2}", p.npv_smart),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
