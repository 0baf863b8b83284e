//! Severity classification of percentage deltas

use console::Style;

/// Discrete severity bucket for a gas delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Large improvement, celebrated loudly
    StrongImprovement,
    /// Within the noise band
    Neutral,
    /// Noticeable increase, below the failure threshold
    Caution,
    /// Increase at or beyond the failure band
    Regression,
}

/// Ascending threshold table. A delta maps to the first entry it does not
/// exceed; the final infinite bound makes the table exhaustive over the
/// reals.
const THRESHOLDS: &[(f64, Severity)] = &[
    (-10.0, Severity::StrongImprovement),
    (-5.0, Severity::Neutral),
    (1.0, Severity::Neutral),
    (5.0, Severity::Caution),
    (f64::INFINITY, Severity::Regression),
];

/// Classify a percentage delta into its severity bucket.
pub fn classify(delta: f64) -> Severity {
    THRESHOLDS
        .iter()
        .find(|(bound, _)| delta <= *bound)
        .map(|(_, severity)| *severity)
        .unwrap_or(Severity::Neutral)
}

impl Severity {
    /// Terminal style for this bucket
    pub fn style(self) -> Style {
        match self {
            Severity::StrongImprovement => Style::new().black().on_green(),
            Severity::Neutral => Style::new().white(),
            Severity::Caution => Style::new().yellow(),
            Severity::Regression => Style::new().black().on_red(),
        }
    }

    /// Apply this bucket's style to `text`
    pub fn paint(self, text: &str) -> String {
        self.style().apply_to(text).to_string()
    }
}
