//! Data types for dosing recommendations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::engine::DosingError;

/// Ideal pH band (inclusive).
pub const PH_IDEAL: (f64, f64) = (7.2, 7.6);
/// Ideal free chlorine band in ppm (inclusive).
pub const CHLORINE_IDEAL: (f64, f64) = (1.0, 3.0);
/// Ideal total alkalinity band in ppm (inclusive).
pub const ALKALINITY_IDEAL: (f64, f64) = (80.0, 120.0);

/// Language used for action, product and reason strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Parse a language tag. `es` and any `es-*` region are Spanish,
    /// everything else falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.trim().split(&['-', '_'][..]).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("es") {
            Locale::Es
        } else {
            Locale::En
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single water-chemistry measurement plus the pool volume it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct WaterReading {
    /// pH, typically 6.8-8.4
    pub ph: f64,
    /// Free chlorine in ppm
    #[serde(rename = "free_chlorine", alias = "free_chlorine_ppm")]
    pub free_chlorine_ppm: f64,
    /// Total alkalinity in ppm
    #[serde(rename = "alkalinity", alias = "total_alkalinity_ppm")]
    pub total_alkalinity_ppm: f64,
    /// Pool volume in liters
    #[serde(rename = "volume", alias = "pool_volume_liters")]
    pub pool_volume_liters: f64,
}

impl WaterReading {
    /// Reject readings the dosing math cannot work with.
    ///
    /// Fields are checked in a fixed order and the first failure wins.
    pub fn validate(&self) -> Result<(), DosingError> {
        let fields = [
            ("ph", self.ph),
            ("free_chlorine", self.free_chlorine_ppm),
            ("alkalinity", self.total_alkalinity_ppm),
            ("volume", self.pool_volume_liters),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(DosingError::InvalidInput {
                    field,
                    reason: "must be a finite number",
                });
            }
        }
        if self.free_chlorine_ppm < 0.0 {
            return Err(DosingError::InvalidInput {
                field: "free_chlorine",
                reason: "must not be negative",
            });
        }
        if self.total_alkalinity_ppm < 0.0 {
            return Err(DosingError::InvalidInput {
                field: "alkalinity",
                reason: "must not be negative",
            });
        }
        if self.pool_volume_liters <= 0.0 {
            return Err(DosingError::InvalidInput {
                field: "volume",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    /// True when every parameter sits inside its ideal band.
    pub fn is_balanced(&self) -> bool {
        let within = |v: f64, (lo, hi): (f64, f64)| (lo..=hi).contains(&v);
        within(self.ph, PH_IDEAL)
            && within(self.free_chlorine_ppm, CHLORINE_IDEAL)
            && within(self.total_alkalinity_ppm, ALKALINITY_IDEAL)
    }
}

/// Corrective rule that produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    IncreasePh,
    DecreasePh,
    ShockChlorine,
    WaitChlorine,
    IncreaseAlkalinity,
}

impl RuleId {
    /// Lower is more urgent.
    pub fn priority(self) -> u8 {
        match self {
            RuleId::IncreasePh | RuleId::DecreasePh => 1,
            RuleId::ShockChlorine | RuleId::WaitChlorine => 2,
            RuleId::IncreaseAlkalinity => 3,
        }
    }

    /// Unit the dose amount is expressed in.
    pub fn unit(self) -> DoseUnit {
        match self {
            RuleId::DecreasePh => DoseUnit::MillilitersOrGrams,
            _ => DoseUnit::Grams,
        }
    }
}

/// Unit of a dose amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoseUnit {
    #[serde(rename = "g")]
    Grams,
    /// Liquid or granular pH reducer
    #[serde(rename = "ml/g")]
    MillilitersOrGrams,
}

impl DoseUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            DoseUnit::Grams => "g",
            DoseUnit::MillilitersOrGrams => "ml/g",
        }
    }
}

/// One corrective action for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub rule: RuleId,
    /// Short imperative label, e.g. "Increase pH"
    pub action: String,
    /// Product to dose
    pub product: String,
    /// Rounded dose amount
    pub amount: u64,
    pub unit: DoseUnit,
    /// Amount with unit, e.g. "2000 g"
    pub amount_label: String,
    /// Justification referencing the measured value
    pub reason: String,
    /// 1 = pH, 2 = chlorine, 3 = alkalinity
    pub priority: u8,
}

/// Request payload for a recommendation run.
#[derive(Debug, Deserialize, Serialize)]
pub struct RecommendRequest {
    pub reading: WaterReading,
    /// Language tag; the configured default applies when absent
    #[serde(default)]
    pub locale: Option<String>,
}

/// Response payload from a recommendation run.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub locale: Locale,
    /// Whether every parameter is inside its ideal band
    pub in_range: bool,
    pub recommendations: Vec<Recommendation>,
    /// SHA256 hash of the reading
    pub input_hash: String,
}

/// Request payload for building a history record.
#[derive(Debug, Deserialize, Serialize)]
pub struct MeasurementRequest {
    pub pool_id: Uuid,
    pub reading: WaterReading,
    #[serde(default)]
    pub locale: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(ph: f64, cl: f64, alk: f64, vol: f64) -> WaterReading {
        WaterReading {
            ph,
            free_chlorine_ppm: cl,
            total_alkalinity_ppm: alk,
            pool_volume_liters: vol,
        }
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("es"), Locale::Es);
        assert_eq!(Locale::from_tag("ES-mx"), Locale::Es);
        assert_eq!(Locale::from_tag("es_AR"), Locale::Es);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn test_reading_accepts_app_field_names() {
        let json = r#"{"ph": 7.4, "free_chlorine": 2.0, "alkalinity": 100, "volume": 50000}"#;
        let r: WaterReading = serde_json::from_str(json).unwrap();
        assert_eq!(r, reading(7.4, 2.0, 100.0, 50000.0));

        let json = r#"{"ph": 7.4, "free_chlorine_ppm": 2.0, "total_alkalinity_ppm": 100, "pool_volume_liters": 50000}"#;
        let r: WaterReading = serde_json::from_str(json).unwrap();
        assert_eq!(r.pool_volume_liters, 50000.0);
    }

    #[test]
    fn test_validate_names_first_bad_field() {
        let err = reading(f64::NAN, f64::INFINITY, 100.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, DosingError::InvalidInput { field: "ph", .. }));

        let err = reading(7.4, 2.0, 100.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, DosingError::InvalidInput { field: "volume", .. }));

        let err = reading(7.4, 2.0, 100.0, -10.0).validate().unwrap_err();
        assert!(matches!(err, DosingError::InvalidInput { field: "volume", .. }));

        let err = reading(7.4, -0.5, 100.0, 1000.0).validate().unwrap_err();
        assert!(matches!(err, DosingError::InvalidInput { field: "free_chlorine", .. }));

        let err = reading(7.4, 2.0, -1.0, 1000.0).validate().unwrap_err();
        assert_eq!(
            err,
            DosingError::InvalidInput {
                field: "alkalinity",
                reason: "must not be negative"
            }
        );
    }

    #[test]
    fn test_is_balanced_bands_are_inclusive() {
        assert!(reading(7.2, 1.0, 80.0, 1000.0).is_balanced());
        assert!(reading(7.6, 3.0, 120.0, 1000.0).is_balanced());
        assert!(!reading(7.4, 4.0, 100.0, 1000.0).is_balanced());
    }

    #[test]
    fn test_rule_priority_and_unit() {
        assert_eq!(RuleId::DecreasePh.priority(), 1);
        assert_eq!(RuleId::WaitChlorine.priority(), 2);
        assert_eq!(RuleId::IncreaseAlkalinity.priority(), 3);
        assert_eq!(RuleId::DecreasePh.unit().symbol(), "ml/g");
        assert_eq!(RuleId::ShockChlorine.unit().symbol(), "g");
    }
}
