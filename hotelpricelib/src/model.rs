//! Доменные модели: входные котировки и производные результаты.

use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Одна котировка из `assignment_results`.
///
/// `shown_price` хранится как упорядоченная `Map` (serde_json собран с
/// `preserve_order`), поэтому обход идёт в порядке документа. Значения не
/// проверяются при загрузке: цены разбираются только при расчётах.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AssignmentRecord {
    #[serde(default)]
    pub shown_price: Map<String, Value>,
    #[serde(default)]
    pub ext_data: Option<ExtData>,
    #[serde(default)]
    pub number_of_guests: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ExtData {
    /// JSON, упакованный в строку: `{"<tax name>": <amount>, ...}`.
    #[serde(default)]
    pub taxes: Option<String>,
}

impl AssignmentRecord {
    pub fn guests(&self) -> Guests {
        match self.number_of_guests {
            Some(n) => Guests::Count(n),
            None => Guests::NotAvailable,
        }
    }

    /// Пары (тип номера, цена нетто) в порядке документа.
    pub fn room_prices(&self) -> impl Iterator<Item = Result<(&str, Decimal)>> + '_ {
        self.shown_price.iter().map(|(room_type, raw)| {
            parse_decimal(raw)
                .map(move |price| (room_type.as_str(), price))
                .map_err(|e| PricingError::Format(format!("price of {room_type:?}: {e}")))
        })
    }

    /// Сумма всех налогов из `ext_data.taxes`. Поле обязательно.
    pub fn total_taxes(&self) -> Result<Decimal> {
        let raw = self
            .ext_data
            .as_ref()
            .and_then(|ext| ext.taxes.as_deref())
            .ok_or_else(|| PricingError::Format("missing ext_data.taxes".into()))?;

        let taxes: Map<String, Value> = serde_json::from_str(raw)
            .map_err(|e| PricingError::Format(format!("ext_data.taxes is not a JSON object: {e}")))?;

        let mut total = Decimal::ZERO;
        for (name, amount) in &taxes {
            let amount = parse_decimal(amount)
                .map_err(|e| PricingError::Format(format!("tax {name:?}: {e}")))?;
            total = total
                .checked_add(amount)
                .ok_or_else(|| PricingError::Format(format!("tax {name:?}: sum of taxes overflows")))?;
        }
        Ok(total)
    }
}

/// Цена в JSON может прийти строкой (`"50"`) или числом (`50`).
pub(crate) fn parse_decimal(value: &Value) -> std::result::Result<Decimal, String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => return Err(format!("expected a decimal, got {other}")),
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| format!("{text:?} is not a decimal ({e})"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guests {
    Count(i64),
    NotAvailable,
}

impl fmt::Display for Guests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guests::Count(n) => write!(f, "{n}"),
            Guests::NotAvailable => f.write_str("N/A"),
        }
    }
}

/// Текущий минимум поиска. Любая конечная цена меньше `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriceCeiling {
    Finite(Decimal),
    Infinite,
}

impl fmt::Display for PriceCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceCeiling::Finite(d) => write!(f, "{}", d.normalize()),
            PriceCeiling::Infinite => f.write_str("inf"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheapestRoom {
    pub room_type: String,
    pub guests: Guests,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheapestResult {
    pub cheapest_price: PriceCeiling,
    pub cheapest_room: Option<CheapestRoom>,
}

impl Default for CheapestResult {
    fn default() -> Self {
        Self {
            cheapest_price: PriceCeiling::Infinite,
            cheapest_room: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalPriceEntry {
    pub room_type: String,
    pub total_price: Decimal,
}

/// Всё, что попадает в отчёт.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub cheapest: CheapestResult,
    pub totals: Vec<TotalPriceEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_strings_and_numbers() {
        assert_eq!(parse_decimal(&json!("50")).unwrap(), Decimal::new(50, 0));
        assert_eq!(parse_decimal(&json!(" 12.50 ")).unwrap(), Decimal::new(1250, 2));
        assert_eq!(parse_decimal(&json!(7)).unwrap(), Decimal::new(7, 0));
        assert_eq!(parse_decimal(&json!("1e2")).unwrap(), Decimal::new(100, 0));
        assert!(parse_decimal(&json!("fifty")).is_err());
        assert!(parse_decimal(&json!(null)).is_err());
    }

    #[test]
    fn ceiling_orders_infinite_last() {
        assert!(PriceCeiling::Finite(Decimal::MAX) < PriceCeiling::Infinite);
        assert_eq!(PriceCeiling::Infinite.to_string(), "inf");
        assert_eq!(PriceCeiling::Finite(Decimal::new(4500, 2)).to_string(), "45");
    }

    #[test]
    fn taxes_are_mandatory() {
        let rec = AssignmentRecord::default();
        assert!(matches!(rec.total_taxes(), Err(PricingError::Format(_))));
    }
}
