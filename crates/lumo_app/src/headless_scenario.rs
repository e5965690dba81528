//! Scenario definition for headless diagnostics runs
//!
//! A scenario is an ordered list of steps: advance time, drive theme
//! inputs (clicks, preference changes, OS scheme emissions), and assert
//! on the resulting observable state.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use lumo_theme::{ColorScheme, ThemePreference};

/// Sequence of headless diagnostic steps
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// One step of a headless scenario
///
/// Action steps mutate the app; assert steps only read the latest
/// snapshot. Assertions about state an action changed on the same frame
/// see the change immediately, but element content only updates after a
/// `tick` gives the app a frame to rebuild.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Wait { ms: u64 },
    Tick { frames: u32 },
    Click { id: String },
    SetPreference { value: ThemePreference },
    EmitSystemScheme { value: ColorScheme },
    AssertExists { id: String },
    AssertTextContains { id: String, value: String },
    AssertClass { id: String, class: String, present: bool },
    AssertPreference { value: ThemePreference },
    AssertScheme { value: ColorScheme },
    AssertDarkMarker { value: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_full_step_vocabulary() {
        let scenario = HeadlessScenario::from_json(
            r#"{
                "steps": [
                    {"type": "wait", "ms": 32},
                    {"type": "tick", "frames": 2},
                    {"type": "click", "id": "theme-toggle"},
                    {"type": "set_preference", "value": "dark"},
                    {"type": "emit_system_scheme", "value": "light"},
                    {"type": "assert_exists", "id": "app-root"},
                    {"type": "assert_text_contains", "id": "title", "value": "Lumo"},
                    {"type": "assert_class", "id": "app-root", "class": "dark", "present": true},
                    {"type": "assert_preference", "value": "system"},
                    {"type": "assert_scheme", "value": "dark"},
                    {"type": "assert_dark_marker", "value": false}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.steps.len(), 11);
        assert!(matches!(
            scenario.steps[3],
            ScenarioStep::SetPreference {
                value: ThemePreference::Dark
            }
        ));
        assert!(matches!(
            scenario.steps[9],
            ScenarioStep::AssertScheme {
                value: ColorScheme::Dark
            }
        ));
    }

    #[test]
    fn unknown_step_types_fail_to_parse() {
        let result = HeadlessScenario::from_json(r#"{"steps": [{"type": "screenshot"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn preference_values_are_lowercase_literals() {
        let result = HeadlessScenario::from_json(
            r#"{"steps": [{"type": "set_preference", "value": "Dark"}]}"#,
        );
        assert!(result.is_err());
    }
}
