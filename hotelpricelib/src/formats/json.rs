//! Входной JSON: `{"assignment_results": [ {...}, ... ]}`.

use crate::{
    error::{PricingError, Result},
    model::AssignmentRecord,
};
use serde::Deserialize;
use std::io::BufRead;

#[derive(Deserialize, Debug)]
struct PriceDocument {
    #[serde(default)]
    assignment_results: Option<Vec<AssignmentRecord>>,
}

pub struct PriceJson;

impl crate::traits::ReadFormat for PriceJson {
    fn read<R: BufRead>(r: R) -> Result<Vec<AssignmentRecord>> {
        let doc: PriceDocument = serde_json::from_reader(r).map_err(|e| {
            if e.is_io() {
                PricingError::Io(e.into())
            } else {
                PricingError::Format(format!("{e}"))
            }
        })?;
        // нет ключа — не ошибка, просто пустой список
        Ok(doc.assignment_results.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ReadFormat;
    use std::io::Cursor;

    #[test]
    fn missing_key_is_empty() {
        let records = PriceJson::read(Cursor::new(r#"{"other": 1}"#)).expect("read");
        assert!(records.is_empty());
    }

    #[test]
    fn keeps_room_order() {
        let s = r#"{"assignment_results":[{"shown_price":{"Suite":"300","Double Room":"75","Single Room":"50"}}]}"#;
        let records = PriceJson::read(Cursor::new(s)).expect("read");
        let rooms: Vec<&str> = records[0].shown_price.keys().map(String::as_str).collect();
        assert_eq!(rooms, ["Suite", "Double Room", "Single Room"]);
    }

    #[test]
    fn truncated_document_is_format_error() {
        let err = PriceJson::read(Cursor::new(r#"{"assignment_results": ["#)).unwrap_err();
        assert!(matches!(err, PricingError::Format(_)));
    }
}
