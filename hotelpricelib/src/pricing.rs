//! Расчёты: самый дешёвый номер и итоговые цены с налогами.

use crate::{
    error::{PricingError, Result},
    model::{AssignmentRecord, CheapestResult, CheapestRoom, PriceCeiling, TotalPriceEntry},
};
use rust_decimal::{Decimal, RoundingStrategy};

/// Итоговая цена округляется до центов банковским округлением (половина к чётному).
pub const TOTAL_PRICE_SCALE: u32 = 2;

/// Глобальный минимум цены нетто по всем записям и типам номеров.
///
/// При равенстве побеждает первая встреченная пара. Если цен нет вовсе,
/// возвращается `PriceCeiling::Infinite` без номера.
pub fn find_cheapest(records: &[AssignmentRecord]) -> Result<CheapestResult> {
    let mut best = CheapestResult::default();

    for (idx, record) in records.iter().enumerate() {
        for pair in record.room_prices() {
            let (room_type, price) = pair.map_err(|e| in_record(idx, e))?;
            let candidate = PriceCeiling::Finite(price);
            if candidate < best.cheapest_price {
                best = CheapestResult {
                    cheapest_price: candidate,
                    cheapest_room: Some(CheapestRoom {
                        room_type: room_type.to_string(),
                        guests: record.guests(),
                    }),
                };
            }
        }
    }

    if best.cheapest_room.is_none() {
        tracing::warn!(records = records.len(), "no room prices found");
    }
    Ok(best)
}

/// Цена нетто + сумма налогов записи, по одной строке на каждую пару (запись, тип номера).
pub fn compute_totals(records: &[AssignmentRecord]) -> Result<Vec<TotalPriceEntry>> {
    let mut out = Vec::with_capacity(records.iter().map(|r| r.shown_price.len()).sum());

    for (idx, record) in records.iter().enumerate() {
        let total_taxes = record.total_taxes().map_err(|e| in_record(idx, e))?;
        for pair in record.room_prices() {
            let (room_type, net) = pair.map_err(|e| in_record(idx, e))?;
            let total = net.checked_add(total_taxes).ok_or_else(|| {
                in_record(idx, PricingError::Format(format!("{room_type:?}: total overflows")))
            })?;
            out.push(TotalPriceEntry {
                room_type: room_type.to_string(),
                total_price: round_total(total),
            });
        }
    }

    tracing::debug!(entries = out.len(), "computed total prices");
    Ok(out)
}

pub fn round_total(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(TOTAL_PRICE_SCALE, RoundingStrategy::MidpointNearestEven)
}

// добавляем номер записи к сообщению
fn in_record(idx: usize, e: PricingError) -> PricingError {
    match e {
        PricingError::Format(msg) => PricingError::Format(format!("assignment_results[{idx}]: {msg}")),
        other => other,
    }
}
