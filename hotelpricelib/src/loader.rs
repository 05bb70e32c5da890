//! Загрузка котировок из файла.

use crate::{
    error::{PricingError, Result},
    formats::json::PriceJson,
    model::AssignmentRecord,
    traits::ReadFormat,
};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

pub fn load(path: impl AsRef<Path>) -> Result<Vec<AssignmentRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PricingError::NotFound {
            path: path.to_path_buf(),
        },
        _ => PricingError::Io(e),
    })?;

    let records = PriceJson::read(BufReader::new(file)).map_err(|e| match e {
        PricingError::Format(msg) => PricingError::Format(format!(
            "Error decoding JSON from the file {}: {msg}",
            path.display()
        )),
        other => other,
    })?;

    tracing::debug!(path = %path.display(), records = records.len(), "loaded price quotes");
    Ok(records)
}
