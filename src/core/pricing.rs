use crate::domain::model::{Amount, Zone, ZONES};
use crate::utils::error::{ExerciseError, Result};
use crate::utils::validation::validate_non_negative;

/// 低於這個分鐘數打九折
pub const DISCOUNT_THRESHOLD_MINUTES: i64 = 30;

pub fn zones() -> &'static [Zone] {
    &ZONES
}

pub fn zone(key: i64) -> Option<&'static Zone> {
    ZONES.iter().find(|z| z.key == key)
}

/// 一通已計價的通話
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallQuote {
    pub zone: &'static Zone,
    pub minutes: i64,
    pub total: Amount,
}

pub fn compute_call_cost(zone_key: i64, minutes: i64) -> Result<Amount> {
    Ok(quote_call(zone_key, minutes)?.total)
}

/// 計算國際通話費用。
///
/// 單價以分為單位，基本費用是精確整數；未滿 30 分鐘時乘以 0.9，
/// 結果以四捨五入 (half-up) 取到分。
pub fn quote_call(zone_key: i64, minutes: i64) -> Result<CallQuote> {
    validate_non_negative("minutes", minutes)?;

    let zone = zone(zone_key).ok_or_else(|| {
        tracing::debug!("compute_call_cost rejected zone key {}", zone_key);
        ExerciseError::UnknownZone { key: zone_key }
    })?;

    let overflow = || ExerciseError::InvalidInput {
        field: "minutes".to_string(),
        value: minutes.to_string(),
        reason: "Call cost exceeds the representable amount".to_string(),
    };

    let base = zone
        .price_per_minute
        .cents()
        .checked_mul(minutes)
        .ok_or_else(overflow)?;

    let total = if minutes < DISCOUNT_THRESHOLD_MINUTES {
        // base * 0.9，+5 後整除 10 即 half-up
        (base * 9 + 5) / 10
    } else {
        base
    };

    Ok(CallQuote {
        zone,
        minutes,
        total: Amount::from_cents(total),
    })
}
