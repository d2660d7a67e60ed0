//! Excel export of a comparison

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use showcase_types::{Error, Result};
use std::path::Path;

use crate::app::ComparisonView;

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Write the side-by-side table and the scores to an .xlsx file
pub fn export_comparison(view: &ComparisonView, output_path: &Path) -> Result<()> {
    if !view.is_comparable() {
        return Err(Error::Excel(
            "select at least two vehicles to export a comparison".to_string(),
        ));
    }

    let mut workbook = Workbook::new();

    let comparison_sheet = workbook.add_worksheet();
    write_comparison_sheet(comparison_sheet, view)?;

    let scores_sheet = workbook.add_worksheet();
    write_scores_sheet(scores_sheet, view)?;

    workbook.save(output_path).map_err(xlsx_err)?;
    tracing::info!(path = %output_path.display(), "comparison exported");

    Ok(())
}

fn write_comparison_sheet(sheet: &mut Worksheet, view: &ComparisonView) -> Result<()> {
    sheet.set_name("Comparison").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let best_format = Format::new().set_bold().set_font_color(rust_xlsxwriter::Color::Green);

    sheet
        .write_string_with_format(0, 0, "Specification", &header_format)
        .map_err(xlsx_err)?;
    for (col, vehicle) in view.vehicles.iter().enumerate() {
        sheet
            .write_string_with_format(0, (col + 1) as u16, vehicle.display_name(), &header_format)
            .map_err(xlsx_err)?;
    }

    for (row_idx, row) in view.rows.iter().enumerate() {
        let row_num = (row_idx + 1) as u32;
        sheet.write_string(row_num, 0, row.label).map_err(xlsx_err)?;
        for (col, cell) in row.cells.iter().enumerate() {
            let col = (col + 1) as u16;
            if cell.highlighted {
                sheet
                    .write_string_with_format(row_num, col, &cell.text, &best_format)
                    .map_err(xlsx_err)?;
            } else {
                sheet.write_string(row_num, col, &cell.text).map_err(xlsx_err)?;
            }
        }
    }

    if let Some(ref summary) = view.summary {
        let row_num = (view.rows.len() + 2) as u32;
        sheet
            .write_string_with_format(row_num, 0, summary, &header_format)
            .map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 20).map_err(xlsx_err)?;
    for col in 1..=view.vehicles.len() {
        sheet.set_column_width(col as u16, 24).map_err(xlsx_err)?;
    }

    Ok(())
}

fn write_scores_sheet(sheet: &mut Worksheet, view: &ComparisonView) -> Result<()> {
    sheet.set_name("Scores").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let headers = ["Vehicle", "Score", "Winner"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (row_idx, vehicle) in view.vehicles.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let score = view.result.score(&vehicle.id).unwrap_or(0);
        let is_winner = view.result.winner.as_deref() == Some(vehicle.id.as_str());

        sheet.write_string(row, 0, vehicle.display_name()).map_err(xlsx_err)?;
        sheet.write_number(row, 1, f64::from(score)).map_err(xlsx_err)?;
        sheet
            .write_string(row, 2, if is_winner { "Yes" } else { "" })
            .map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 28).map_err(xlsx_err)?;

    Ok(())
}
