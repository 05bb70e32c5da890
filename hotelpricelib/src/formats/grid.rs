//! Текстовая таблица в стиле "grid":
//!
//! ```text
//! +-------------+---------------+
//! | Room Type   |   Total Price |
//! +=============+===============+
//! | Single Room |            55 |
//! +-------------+---------------+
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;

/// Заголовок колонки шире содержимого минимум на столько символов.
const MIN_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    /// По правому краю, с выравниванием десятичной точки.
    Decimal,
}

#[derive(Debug, Clone)]
pub struct GridTable {
    headers: Vec<(String, Align)>,
    rows: Vec<Vec<String>>,
}

impl GridTable {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = (S, Align)>) -> Self {
        Self {
            headers: headers.into_iter().map(|(h, a)| (h.into(), a)).collect(),
            rows: Vec::new(),
        }
    }

    /// Лишние ячейки отбрасываются, недостающие считаются пустыми.
    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let columns: Vec<Vec<String>> = (0..self.headers.len())
            .map(|col| self.align_column(col))
            .collect();
        let widths: Vec<usize> = columns
            .iter()
            .zip(&self.headers)
            .map(|(cells, (header, _))| {
                cells
                    .iter()
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(header.chars().count() + MIN_PADDING))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let border = |fill: char| -> String {
            let mut line = String::from("+");
            for w in &widths {
                line.extend(std::iter::repeat(fill).take(w + 2));
                line.push('+');
            }
            line
        };
        let row_line = |cells: Vec<String>| -> String { format!("| {} |", cells.join(" | ")) };

        let mut lines = Vec::with_capacity(self.rows.len() * 2 + 4);
        lines.push(border('-'));
        lines.push(row_line(
            self.headers
                .iter()
                .zip(&widths)
                .map(|((h, a), &w)| pad(h, *a, w))
                .collect(),
        ));
        lines.push(border('='));
        for (i, _) in self.rows.iter().enumerate() {
            if i > 0 {
                lines.push(border('-'));
            }
            lines.push(row_line(
                columns
                    .iter()
                    .zip(&self.headers)
                    .zip(&widths)
                    .map(|((cells, (_, a)), &w)| pad(&cells[i], *a, w))
                    .collect(),
            ));
        }
        lines.push(border('-'));
        lines.join("\n")
    }

    fn align_column(&self, col: usize) -> Vec<String> {
        let cells = self.rows.iter().map(|r| r[col].clone());
        if self.headers[col].1 != Align::Decimal {
            return cells.collect();
        }
        let cells: Vec<String> = cells.collect();
        let decimals: Vec<isize> = cells.iter().map(|c| after_point(c)).collect();
        let max = decimals.iter().copied().max().unwrap_or(-1);
        cells
            .into_iter()
            .zip(decimals)
            .map(|(c, d)| format!("{c}{}", " ".repeat((max - d) as usize)))
            .collect()
    }
}

/// Количество знаков после точки; -1 для целых и нечисловых строк.
fn after_point(cell: &str) -> isize {
    if Decimal::from_str(cell).is_err() {
        return -1;
    }
    match cell.rfind('.') {
        Some(pos) => (cell.len() - pos - 1) as isize,
        None => -1,
    }
}

fn pad(s: &str, align: Align, width: usize) -> String {
    match align {
        Align::Left => format!("{s:<width$}"),
        Align::Decimal => format!("{s:>width$}"),
    }
}
