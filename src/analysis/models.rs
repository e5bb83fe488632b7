//! Data types for vision analysis responses and treatment plans.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dosing::{Recommendation, WaterReading};
use crate::pool::{PoolMaterial, PoolShape};

/// Calcium hardness assumed when the strip has no hardness pad.
pub const DEFAULT_HARDNESS_PPM: f64 = 250.0;
/// Cyanuric acid assumed when the strip has no CYA pad.
pub const DEFAULT_CYA_PPM: f64 = 40.0;

/// Values read off a photographed test strip.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StripAnalysis {
    pub ph: f64,
    pub free_chlorine: f64,
    pub alkalinity: f64,
    /// Calcium hardness in ppm, if the strip has the pad
    #[serde(default)]
    pub hardness: Option<f64>,
    /// Cyanuric acid in ppm, if the strip has the pad
    #[serde(default)]
    pub cya: Option<f64>,
    /// Model confidence (0.0-1.0); informational only
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl StripAnalysis {
    /// Zero counts as missing.
    pub fn hardness_or_default(&self) -> f64 {
        self.hardness.filter(|v| *v != 0.0).unwrap_or(DEFAULT_HARDNESS_PPM)
    }

    pub fn cya_or_default(&self) -> f64 {
        self.cya.filter(|v| *v != 0.0).unwrap_or(DEFAULT_CYA_PPM)
    }

    /// Combine the strip values with the pool volume.
    pub fn to_reading(&self, pool_volume_liters: f64) -> WaterReading {
        WaterReading {
            ph: self.ph,
            free_chlorine_ppm: self.free_chlorine,
            total_alkalinity_ppm: self.alkalinity,
            pool_volume_liters,
        }
    }
}

/// Visual water state from a photo of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Clarity {
    Clear,
    Cloudy,
    Algae,
    VeryDirty,
}

impl Clarity {
    pub fn as_str(self) -> &'static str {
        match self {
            Clarity::Clear => "clear",
            Clarity::Cloudy => "cloudy",
            Clarity::Algae => "algae",
            Clarity::VeryDirty => "very_dirty",
        }
    }
}

impl std::fmt::Display for Clarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WaterQuality {
    pub clarity: Clarity,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub suggestion: String,
}

/// Pool details quoted in the treatment plan prompt.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PoolProfile {
    pub name: String,
    /// Volume in liters
    pub volume: f64,
    #[serde(default)]
    pub material: PoolMaterial,
    #[serde(default)]
    pub shape: PoolShape,
}

/// Current measurements quoted in the treatment plan prompt.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlanMeasurements {
    pub ph: f64,
    pub free_chlorine: f64,
    pub alkalinity: f64,
    #[serde(default)]
    pub clarity: Option<Clarity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanPriority {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ImmediateStep {
    pub action: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlanTask {
    pub action: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlanDay {
    /// Days from today, 0 to 29
    pub day_index: i64,
    #[serde(default)]
    pub tasks: Vec<PlanTask>,
}

/// Treatment plan as returned by the model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TreatmentPlan {
    #[serde(default)]
    pub status_summary: String,
    #[serde(default)]
    pub priority: PlanPriority,
    #[serde(default)]
    pub immediate_steps: Vec<ImmediateStep>,
    #[serde(default)]
    pub maintenance_plan_daily: Vec<PlanDay>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub final_summary: String,
}

/// A dated task derived from a plan.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MaintenanceTask {
    pub pool_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub action: String,
    pub note: String,
    pub is_completed: bool,
}

// ---- request / response payloads ----

#[derive(Debug, Deserialize, Serialize)]
pub struct StripRequest {
    /// Raw model output
    pub response: String,
    /// Pool volume in liters
    pub volume: f64,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StripResponse {
    pub analysis: StripAnalysis,
    pub hardness: f64,
    pub cya: f64,
    pub reading: WaterReading,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RawResponseRequest {
    pub response: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PlanRequest {
    pub response: String,
    pub pool_id: Uuid,
    /// First day of the schedule; today (UTC) when absent
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PlanResponse {
    pub plan: TreatmentPlan,
    pub tasks: Vec<MaintenanceTask>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TreatmentPromptRequest {
    pub pool: PoolProfile,
    pub measurements: PlanMeasurements,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LocaleQuery {
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}
