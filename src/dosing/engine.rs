//! Chemical dosing rules for pH, free chlorine and total alkalinity.

use thiserror::Error;

use super::messages;
use super::models::{Locale, Recommendation, RuleId, WaterReading};

// pH: 10 g of product per m³ per 0.1 pH unit away from target
const PH_MIN: f64 = 7.2;
const PH_MAX: f64 = 7.6;
const PH_TARGET: f64 = 7.4;
const PH_STEP: f64 = 0.1;
const PH_RATE: f64 = 10.0;

// Free chlorine: 2 g of dichlor per m³ per ppm below the shock target
const CHLORINE_MIN: f64 = 1.0;
const CHLORINE_WAIT_ABOVE: f64 = 5.0;
const CHLORINE_TARGET: f64 = 2.0;
const CHLORINE_RATE: f64 = 2.0;

// Alkalinity: 18 g of bicarbonate per m³ per 10 ppm below target
const ALKALINITY_MIN: f64 = 80.0;
const ALKALINITY_TARGET: f64 = 100.0;
const ALKALINITY_STEP: f64 = 10.0;
const ALKALINITY_RATE: f64 = 18.0;

/// Dosing error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DosingError {
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
}

impl DosingError {
    /// Name of the offending reading field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}

/// A rule firing before it is rendered into a language.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Dose {
    rule: RuleId,
    /// Measured value quoted in the reason
    measured: f64,
    amount: u64,
}

/// Round half up to a whole gram or milliliter. Doses are never negative.
fn round_dose(raw: f64) -> u64 {
    raw.round().max(0.0) as u64
}

fn ph_dose(ph: f64, volume_m3: f64) -> Option<Dose> {
    if ph < PH_MIN {
        let deficit = PH_TARGET - ph;
        Some(Dose {
            rule: RuleId::IncreasePh,
            measured: ph,
            amount: round_dose(volume_m3 * (deficit / PH_STEP) * PH_RATE),
        })
    } else if ph > PH_MAX {
        let excess = ph - PH_TARGET;
        Some(Dose {
            rule: RuleId::DecreasePh,
            measured: ph,
            amount: round_dose(volume_m3 * (excess / PH_STEP) * PH_RATE),
        })
    } else {
        None
    }
}

fn chlorine_dose(free_chlorine: f64, volume_m3: f64) -> Option<Dose> {
    if free_chlorine < CHLORINE_MIN {
        let deficit = CHLORINE_TARGET - free_chlorine;
        Some(Dose {
            rule: RuleId::ShockChlorine,
            measured: free_chlorine,
            amount: round_dose(volume_m3 * deficit * CHLORINE_RATE),
        })
    } else if free_chlorine > CHLORINE_WAIT_ABOVE {
        Some(Dose {
            rule: RuleId::WaitChlorine,
            measured: free_chlorine,
            amount: 0,
        })
    } else {
        None
    }
}

// There is no rule for lowering high alkalinity.
fn alkalinity_dose(alkalinity: f64, volume_m3: f64) -> Option<Dose> {
    if alkalinity < ALKALINITY_MIN {
        let deficit = ALKALINITY_TARGET - alkalinity;
        Some(Dose {
            rule: RuleId::IncreaseAlkalinity,
            measured: alkalinity,
            amount: round_dose(volume_m3 * (deficit / ALKALINITY_STEP) * ALKALINITY_RATE),
        })
    } else {
        None
    }
}

fn render(dose: Dose, locale: Locale) -> Recommendation {
    let template = messages::template(dose.rule, locale);
    let unit = dose.rule.unit();
    Recommendation {
        rule: dose.rule,
        action: template.action.to_string(),
        product: template.product.to_string(),
        amount: dose.amount,
        unit,
        amount_label: format!("{} {}", dose.amount, unit.symbol()),
        reason: template.reason_for(dose.measured),
        priority: dose.rule.priority(),
    }
}

/// Compute corrective actions for a reading, most urgent first.
///
/// A reading inside every ideal band yields an empty list. Invalid input is
/// rejected before any rule runs.
pub fn compute_recommendations(
    reading: &WaterReading,
    locale: Locale,
) -> Result<Vec<Recommendation>, DosingError> {
    reading.validate()?;

    let volume_m3 = reading.pool_volume_liters / 1000.0;

    let mut recommendations: Vec<Recommendation> = [
        ph_dose(reading.ph, volume_m3),
        chlorine_dose(reading.free_chlorine_ppm, volume_m3),
        alkalinity_dose(reading.total_alkalinity_ppm, volume_m3),
    ]
    .into_iter()
    .flatten()
    .map(|dose| render(dose, locale))
    .collect();

    // Stable, so ties keep evaluation order
    recommendations.sort_by_key(|r| r.priority);

    tracing::debug!(
        count = recommendations.len(),
        %locale,
        "computed dosing recommendations"
    );

    Ok(recommendations)
}
