//! Унифицированные трэйты чтения котировок и записи отчёта поверх std::io::{BufRead, Write}.

use crate::{
    error::Result,
    model::{AssignmentRecord, Report},
};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Vec<AssignmentRecord>>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, report: &Report) -> Result<()>;
}
