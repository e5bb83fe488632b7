//! Localized strings for each dosing rule.

use super::models::{Locale, RuleId};

/// Presentation strings for one rule in one language.
///
/// `reason` carries a `{value}` placeholder for the measured value.
#[derive(Debug)]
pub struct MessageTemplate {
    pub action: &'static str,
    pub product: &'static str,
    pub reason: &'static str,
}

impl MessageTemplate {
    /// Fill the reason template with the measured value.
    pub fn reason_for(&self, value: f64) -> String {
        self.reason.replace("{value}", &display_number(value))
    }
}

/// Shortest decimal form, switching to exponent notation below 1e-6 and
/// from 1e21 up (`1e-7`, `1.5e+21`), the way the app prints numbers.
fn display_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude.is_finite() && !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}

const INCREASE_PH_EN: MessageTemplate = MessageTemplate {
    action: "Increase pH",
    product: "pH Increaser (Sodium Carbonate)",
    reason: "The pH is low ({value}). Acidic water irritates eyes and damages equipment.",
};

const INCREASE_PH_ES: MessageTemplate = MessageTemplate {
    action: "Subir pH",
    product: "Incrementador de pH (Carbonato de Sodio)",
    reason: "El pH está bajo ({value}). Un pH ácido irrita ojos y daña equipos.",
};

const DECREASE_PH_EN: MessageTemplate = MessageTemplate {
    action: "Decrease pH",
    product: "pH Reducer (Muriatic Acid/Bisulfate)",
    reason: "The pH is high ({value}). It reduces chlorine effectiveness and can cloud water.",
};

const DECREASE_PH_ES: MessageTemplate = MessageTemplate {
    action: "Bajar pH",
    product: "Reductor de pH (Ácido Clorhídrico/Bisulfato)",
    reason: "El pH está alto ({value}). Reduce la eficacia del cloro y puede enturbiar el agua.",
};

const SHOCK_CHLORINE_EN: MessageTemplate = MessageTemplate {
    action: "Shock Chlorination",
    product: "Granular Chlorine (Dichlor)",
    reason: "Chlorine level is insufficient ({value} ppm) to disinfect water.",
};

const SHOCK_CHLORINE_ES: MessageTemplate = MessageTemplate {
    action: "Cloración de Choque",
    product: "Cloro Granulado (Dicloro)",
    reason: "El nivel de cloro es insuficiente ({value} ppm) para desinfectar el agua.",
};

const WAIT_CHLORINE_EN: MessageTemplate = MessageTemplate {
    action: "Wait for decrease",
    product: "Natural Neutralization (Sun/UV)",
    reason: "Chlorine is high ({value} ppm). The sun will naturally reduce it. Avoid use until below 5ppm.",
};

const WAIT_CHLORINE_ES: MessageTemplate = MessageTemplate {
    action: "Esperar a que baje",
    product: "Neutralización Natural (Sol/UV)",
    reason: "El cloro está alto ({value} ppm). El sol lo reducirá naturalmente. Evita el uso hasta que baje de 5ppm.",
};

const INCREASE_ALKALINITY_EN: MessageTemplate = MessageTemplate {
    action: "Increase Alkalinity",
    product: "Sodium Bicarbonate",
    reason: "Low alkalinity ({value} ppm) makes pH unstable.",
};

const INCREASE_ALKALINITY_ES: MessageTemplate = MessageTemplate {
    action: "Subir Alcalinidad",
    product: "Bicarbonato de Sodio",
    reason: "La alcalinidad baja ({value} ppm) hace que el pH sea inestable.",
};

/// Look up the template for a rule in the given language.
pub fn template(rule: RuleId, locale: Locale) -> &'static MessageTemplate {
    match (rule, locale) {
        (RuleId::IncreasePh, Locale::En) => &INCREASE_PH_EN,
        (RuleId::IncreasePh, Locale::Es) => &INCREASE_PH_ES,
        (RuleId::DecreasePh, Locale::En) => &DECREASE_PH_EN,
        (RuleId::DecreasePh, Locale::Es) => &DECREASE_PH_ES,
        (RuleId::ShockChlorine, Locale::En) => &SHOCK_CHLORINE_EN,
        (RuleId::ShockChlorine, Locale::Es) => &SHOCK_CHLORINE_ES,
        (RuleId::WaitChlorine, Locale::En) => &WAIT_CHLORINE_EN,
        (RuleId::WaitChlorine, Locale::Es) => &WAIT_CHLORINE_ES,
        (RuleId::IncreaseAlkalinity, Locale::En) => &INCREASE_ALKALINITY_EN,
        (RuleId::IncreaseAlkalinity, Locale::Es) => &INCREASE_ALKALINITY_ES,
    }
}
