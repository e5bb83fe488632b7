//! Prompt text sent to the vision model.
//!
//! The JSON shapes requested here are the ones `parser` reads back, so
//! keep the two in sync.

use crate::dosing::Locale;

use super::models::{PlanMeasurements, PoolProfile};

/// Prompt for reading a photographed test strip.
pub fn strip_analysis_prompt(locale: Locale) -> String {
    let language = match locale {
        Locale::Es => "Spanish",
        Locale::En => "English",
    };
    format!(
        r#"Analyze this pool test strip.
Identify the values of these parameters based on the color pads:
- pH
- Free Chlorine
- Total Alkalinity
- Calcium Hardness (if present)
- Cyanuric Acid (CYA) (if present)

Respond in JSON format with estimated numerical values:
{{
  "ph": number,
  "free_chlorine": number,
  "alkalinity": number,
  "hardness": number | null,
  "cya": number | null,
  "confidence": number (0-1)
}}
Output only the JSON.
Language preference for internal processing: {language}."#
    )
}

/// Prompt for judging water clarity from a photo of the pool.
pub fn water_quality_prompt(locale: Locale) -> String {
    let (intro, fields_note) = match locale {
        Locale::Es => (
            "Analiza esta imagen de una piscina y determina la calidad del agua.\n\
             Busca signos de turbidez, algas o suciedad.\n\
             Responde en formato JSON con la siguiente estructura:",
            "Sé preciso y honesto sobre tu confianza.\n\
             IMPORTANTE: \"diagnosis\" y \"suggestion\" DEBEN estar en ESPAÑOL.",
        ),
        Locale::En => (
            "Analyze this pool image and determine water quality.\n\
             Look for signs of turbidity, algae, or dirt.\n\
             Respond with JSON in this structure:",
            "Be precise and honest about your confidence.\n\
             IMPORTANT: \"diagnosis\" and \"suggestion\" MUST be in ENGLISH.",
        ),
    };
    format!(
        r#"{intro}
{{
  "clarity": "clear" | "cloudy" | "algae" | "very_dirty",
  "diagnosis": "Short description of the water state",
  "confidence": number (0-1),
  "suggestion": "Immediate recommended action"
}}
{fields_note}"#
    )
}

/// Prompt asking for a 30-day treatment and maintenance plan.
pub fn treatment_plan_prompt(
    pool: &PoolProfile,
    measurements: &PlanMeasurements,
    locale: Locale,
) -> String {
    let (tone, language) = match locale {
        Locale::Es => ("Tu tono debe ser profesional y práctico.", "SPANISH"),
        Locale::En => ("Your tone should be professional and practical.", "ENGLISH"),
    };
    let clarity = measurements
        .clarity
        .map(|c| c.as_str())
        .unwrap_or("Unknown");

    format!(
        r#"Act as a professional pool maintenance specialist for home pools.
{tone}

Pool Info: {name}, {volume}L, material {material}, shape {shape}.
Current Measurements: pH {ph}, Chlorine {chlorine}ppm, Alkalinity {alkalinity}ppm, Clarity: {clarity}.

Objective: Generate a clear, simple, and actionable maintenance plan.
Constraints:
- Max 1-2 tasks per day.
- pH testing max 1-2 times per week.
- Simple and repeatable routines.
- Avoid unnecessary technical jargon.

JSON STRUCTURE (MANDATORY):
{{
  "status_summary": "Initial diagnosis and urgency level.",
  "priority": "high" | "medium" | "low",
  "immediate_steps": [
    {{
      "action": "Recovery task",
      "product": "Product name",
      "amount": "Estimated amount",
      "instructions": "Brief explanation"
    }}
  ],
  "maintenance_plan_daily": [
    {{
      "day_index": number (0 to 29),
      "tasks": [
        {{
          "action": "Task name (max 2 per day)",
          "note": "Brief practical note"
        }}
      ]
    }}
  ],
  "warnings": ["Safety rules and red flags"],
  "final_summary": "Expected outcome and message of reassurance."
}}

IMPORTANT: All text in the JSON fields MUST be in {language}."#,
        name = pool.name,
        volume = pool.volume,
        material = pool.material,
        shape = pool.shape,
        ph = measurements.ph,
        chlorine = measurements.free_chlorine,
        alkalinity = measurements.alkalinity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::Clarity;
    use crate::pool::{PoolMaterial, PoolShape};

    fn pool() -> PoolProfile {
        PoolProfile {
            name: "Backyard".to_string(),
            volume: 45000.0,
            material: PoolMaterial::Fiberglass,
            shape: PoolShape::Kidney,
        }
    }

    #[test]
    fn test_treatment_prompt_embeds_pool_and_readings() {
        let m = PlanMeasurements {
            ph: 7.8,
            free_chlorine: 0.5,
            alkalinity: 90.0,
            clarity: Some(Clarity::Cloudy),
        };
        let prompt = treatment_plan_prompt(&pool(), &m, Locale::En);

        assert!(prompt.contains("Pool Info: Backyard, 45000L, material fiberglass, shape kidney."));
        assert!(prompt.contains("pH 7.8, Chlorine 0.5ppm, Alkalinity 90ppm, Clarity: cloudy."));
        assert!(prompt.contains("\"day_index\": number (0 to 29)"));
        assert!(prompt.ends_with("MUST be in ENGLISH."));
    }

    #[test]
    fn test_treatment_prompt_spanish_unknown_clarity() {
        let m = PlanMeasurements {
            ph: 7.4,
            free_chlorine: 2.0,
            alkalinity: 100.0,
            clarity: None,
        };
        let prompt = treatment_plan_prompt(&pool(), &m, Locale::Es);

        assert!(prompt.contains("Tu tono debe ser profesional y práctico."));
        assert!(prompt.contains("Clarity: Unknown."));
        assert!(prompt.ends_with("MUST be in SPANISH."));
    }

    #[test]
    fn test_strip_prompt_language() {
        assert!(strip_analysis_prompt(Locale::Es).ends_with("Spanish."));
        assert!(strip_analysis_prompt(Locale::En).contains("\"free_chlorine\": number"));
    }

    #[test]
    fn test_water_prompt_lists_clarity_values() {
        let prompt = water_quality_prompt(Locale::Es);
        assert!(prompt.starts_with("Analiza esta imagen"));
        assert!(prompt.contains("\"very_dirty\""));
    }
}
