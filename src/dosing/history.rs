//! History records for a reading and the recommendations it produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::models::{Recommendation, WaterReading};

/// One row of measurement history, ready for the caller to store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub pool_id: Uuid,
    pub ph: f64,
    pub free_chlorine: f64,
    /// Stored as a whole number of ppm
    pub total_alkalinity: i64,
    /// Opaque payload of the computed recommendations
    pub recommendation_json: Vec<Recommendation>,
    /// SHA256 hash of the reading
    pub input_hash: String,
    pub recorded_at: DateTime<Utc>,
}

/// Compute a stable `sha256:`-prefixed hash of a reading.
pub fn reading_hash(reading: &WaterReading) -> String {
    let canonical = serde_json::to_string(reading).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// Build the history record for a reading.
pub fn build_record(
    pool_id: Uuid,
    reading: &WaterReading,
    recommendations: Vec<Recommendation>,
    recorded_at: DateTime<Utc>,
) -> MeasurementRecord {
    MeasurementRecord {
        pool_id,
        ph: reading.ph,
        free_chlorine: reading.free_chlorine_ppm,
        total_alkalinity: reading.total_alkalinity_ppm.trunc() as i64,
        recommendation_json: recommendations,
        input_hash: reading_hash(reading),
        recorded_at,
    }
}
