//! Отчёт: сводка по самому дешёвому номеру и таблица итоговых цен.
//!
//! Консоль и файл получают один и тот же текст.

use crate::{
    error::{PricingError, Result},
    formats::{
        grid::{Align, GridTable},
        text::TextReport,
    },
    model::{CheapestResult, Report, TotalPriceEntry},
    traits::WriteFormat,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const TOTALS_HEADING: &str = "Total prices for all rooms:";

pub fn render_cheapest(result: &CheapestResult) -> String {
    let (room_type, guests) = match &result.cheapest_room {
        Some(room) => (room.room_type.clone(), room.guests.to_string()),
        None => ("N/A".to_string(), "N/A".to_string()),
    };
    format!(
        "Cheapest price: {}\nRoom type: {room_type}, Guests: {guests}",
        result.cheapest_price
    )
}

pub fn render_totals_table(totals: &[TotalPriceEntry]) -> String {
    let mut table = GridTable::new([("Room Type", Align::Left), ("Total Price", Align::Decimal)]);
    for entry in totals {
        table.push_row([
            entry.room_type.clone(),
            entry.total_price.normalize().to_string(),
        ]);
    }
    table.render()
}

/// Полный текст отчёта, без завершающего перевода строки.
pub fn render_report(report: &Report) -> String {
    format!(
        "{}\n{TOTALS_HEADING}\n{}",
        render_cheapest(&report.cheapest),
        render_totals_table(&report.totals)
    )
}

/// Перезаписывает файл отчёта. Текст собирается до открытия файла.
pub fn write_report(
    path: impl AsRef<Path>,
    cheapest: &CheapestResult,
    totals: &[TotalPriceEntry],
) -> Result<()> {
    let path = path.as_ref();
    let report = Report {
        cheapest: cheapest.clone(),
        totals: totals.to_vec(),
    };
    let mut buf = Vec::new();
    TextReport::write(&mut buf, &report)?;

    let write_err = |source| PricingError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(write_err)?);
    out.write_all(&buf).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    tracing::info!(path = %path.display(), rows = totals.len(), "report written");
    Ok(())
}
