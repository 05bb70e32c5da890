//! Полный прогон: загрузка → расчёты → консоль и файл отчёта.

use crate::{
    error::Result,
    loader::load,
    model::Report,
    pricing::{compute_totals, find_cheapest},
    report::{render_report, write_report},
};
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "prices.json";
pub const DEFAULT_OUTPUT: &str = "lower_price.txt";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Печатать отчёт в `console` (файл пишется всегда).
    pub echo: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            output: DEFAULT_OUTPUT.into(),
            echo: true,
        }
    }
}

/// Всё или ничего: при ошибке загрузки или расчёта ничего не печатается
/// и файл отчёта не создаётся.
pub fn run<W: Write>(config: &RunConfig, mut console: W) -> Result<Report> {
    let records = load(&config.input)?;

    let report = Report {
        cheapest: find_cheapest(&records)?,
        totals: compute_totals(&records)?,
    };

    if config.echo {
        writeln!(console, "{}", render_report(&report))?;
    }
    write_report(&config.output, &report.cheapest, &report.totals)?;
    Ok(report)
}
