//! Текстовый отчёт (`lower_price.txt`).

use crate::{error::Result, model::Report, report::render_report};
use std::io::Write;

pub struct TextReport;

impl crate::traits::WriteFormat for TextReport {
    fn write<W: Write>(mut w: W, report: &Report) -> Result<()> {
        writeln!(w, "{}", render_report(report))?;
        Ok(())
    }
}
