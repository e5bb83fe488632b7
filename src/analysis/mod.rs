//! Vision analysis boundary.
//!
//! The image analysis itself runs in an external model. This module builds
//! the prompts sent to it, parses what comes back, and turns a returned
//! treatment plan into dated maintenance tasks.

mod models;
mod parser;
mod prompts;
mod routes;
mod schedule;

pub use models::*;
pub use parser::{
    parse_strip_analysis, parse_treatment_plan, parse_water_quality, strip_code_fences,
    AnalysisError,
};
pub use prompts::{strip_analysis_prompt, treatment_plan_prompt, water_quality_prompt};
pub use routes::router;
pub use schedule::{schedule_tasks, PLAN_DAYS};
