//! Parsing of raw model output into typed results.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::dosing::DosingError;

use super::models::{StripAnalysis, TreatmentPlan, WaterQuality};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("model response is empty")]
    EmptyResponse,
    #[error("model response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("strip values rejected: {0}")]
    InvalidReading(#[from] DosingError),
    #[error("plan day_index {0} is outside 0..=29")]
    DayIndexOutOfRange(i64),
}

impl AnalysisError {
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::EmptyResponse => "empty_response",
            Self::Malformed(_) => "malformed_response",
            Self::InvalidReading(_) => "invalid_input",
            Self::DayIndexOutOfRange(_) => "invalid_plan",
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidReading(e) => Some(e.field()),
            Self::DayIndexOutOfRange(_) => Some("day_index"),
            _ => None,
        }
    }
}

/// Drop markdown code fences the model wraps its JSON in.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, AnalysisError> {
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Err(AnalysisError::EmptyResponse);
    }
    Ok(serde_json::from_str(&cleaned)?)
}

pub fn parse_strip_analysis(text: &str) -> Result<StripAnalysis, AnalysisError> {
    parse_json(text)
}

pub fn parse_water_quality(text: &str) -> Result<WaterQuality, AnalysisError> {
    parse_json(text)
}

pub fn parse_treatment_plan(text: &str) -> Result<TreatmentPlan, AnalysisError> {
    parse_json(text)
}
