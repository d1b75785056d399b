//! Export views to CSV, JSON and XLSX.
//!
//! Every format uses the record's fixed column order: the CSV header row,
//! the key order of each JSON object and the XLSX header row all follow
//! [`Record::COLUMNS`].

use std::fs;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::{
    cli::types::ExportFormat,
    dataset::{Cell, Record},
    error::{Result, StatsError},
    view::View,
};


/// Encode a view in memory.
pub fn encode<R: Record>(view: &View<'_, R>, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => encode_csv(view),
        ExportFormat::Json => encode_json(view),
        ExportFormat::Xlsx => encode_xlsx(view),
    }
}

/// Encode a view and write it to `destination`, replacing any existing file.
pub fn export<R: Record>(
    view: &View<'_, R>,
    format: ExportFormat,
    destination: &Path,
) -> Result<()> {
    info!(
        "Exporting {} {} rows to {}: {}",
        view.len(),
        R::KIND,
        format,
        destination.display()
    );

    let bytes = encode(view, format).map_err(|e| {
        error!("Error encoding {}: {}", format, e);
        e
    })?;

    if let Err(source) = fs::write(destination, bytes) {
        error!("Error saving to {}: {}", format, source);
        return Err(StatsError::Destination {
            path: destination.to_path_buf(),
            source,
        });
    }

    info!("Successfully exported data to {}: {}", format, destination.display());
    Ok(())
}

fn encode_csv<R: Record>(view: &View<'_, R>) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(R::COLUMNS)?;
    for record in view.iter() {
        writer.write_record(record.cells().iter().map(Cell::to_field))?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

fn encode_json<R: Record>(view: &View<'_, R>) -> Result<Vec<u8>> {
    let rows: Vec<Value> = view
        .iter()
        .map(|record| {
            let object: Map<String, Value> = R::COLUMNS
                .iter()
                .zip(record.cells())
                .map(|(column, cell)| (column.to_string(), cell.to_json()))
                .collect();
            Value::Object(object)
        })
        .collect();

    Ok(serde_json::to_vec_pretty(&rows)?)
}

fn encode_xlsx<R: Record>(view: &View<'_, R>) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(R::SHEET_NAME)?;

    for (col, column) in (0u16..).zip(R::COLUMNS.iter()) {
        worksheet.write_string_with_format(0, col, *column, &header)?;
    }

    for (row, record) in (1u32..).zip(view.iter()) {
        for (col, cell) in (0u16..).zip(record.cells()) {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text)?;
                }
                Cell::Int(n) => {
                    worksheet.write_number(row, col, n as f64)?;
                }
                Cell::Float(f) => {
                    worksheet.write_number(row, col, f)?;
                }
                Cell::Empty => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
