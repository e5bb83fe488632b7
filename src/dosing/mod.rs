//! Water-chemistry dosing module.
//!
//! Maps a pH / free chlorine / alkalinity reading and the pool volume to a
//! prioritized list of corrective actions with product amounts. Pure and
//! deterministic; the HTTP routes are a thin wrapper.

mod engine;
pub mod history;
mod messages;
mod models;
mod routes;

pub use engine::{compute_recommendations, DosingError};
pub use messages::{template, MessageTemplate};
pub use models::{
    DoseUnit, Locale, MeasurementRequest, RecommendRequest, RecommendResponse, Recommendation,
    RuleId, WaterReading, ALKALINITY_IDEAL, CHLORINE_IDEAL, PH_IDEAL,
};
pub use routes::router;
