//! Assertion helpers for headless diagnostics
//!
//! [`DiagnosticsSnapshot`] is the app-observable state a scenario can
//! assert against: registered elements plus the theme triple the store
//! publishes (preference, resolved scheme, root dark marker).

use std::collections::HashMap;

use lumo_theme::{ColorScheme, ThemePreference};

/// Snapshot of observable state at one probe point
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsSnapshot {
    pub elements: HashMap<String, DiagnosticsElement>,
    pub preference: ThemePreference,
    pub resolved_scheme: ColorScheme,
    pub dark_marker: bool,
}

/// Minimal element representation for diagnostics checks
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsElement {
    pub text: Option<String>,
    pub classes: Vec<String>,
}

/// Assertion result with structured failure details
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

pub fn evaluate_assert_exists(id: &str, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.elements.contains_key(id) {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "missing_element".to_string(),
            message: format!("{id}: element not found"),
        }
    }
}

pub fn evaluate_assert_text_contains(
    id: &str,
    expected: &str,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(element) = snapshot.elements.get(id) else {
        return AssertionResult::Failed {
            code: "missing_element".to_string(),
            message: format!("{id}: element not found"),
        };
    };
    let Some(text) = element.text.as_deref() else {
        return AssertionResult::Failed {
            code: "missing_text".to_string(),
            message: format!("{id}: text not available"),
        };
    };
    if text.contains(expected) {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "text_mismatch".to_string(),
            message: format!("{id}: expected substring '{expected}', got '{text}'"),
        }
    }
}

pub fn evaluate_assert_class(
    id: &str,
    class: &str,
    present: bool,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(element) = snapshot.elements.get(id) else {
        return AssertionResult::Failed {
            code: "missing_element".to_string(),
            message: format!("{id}: element not found"),
        };
    };
    let has = element.classes.iter().any(|c| c == class);
    if has == present {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "class_mismatch".to_string(),
            message: format!(
                "{id}: expected class '{class}' {}, classes are {:?}",
                if present { "present" } else { "absent" },
                element.classes
            ),
        }
    }
}

pub fn evaluate_assert_preference(
    expected: ThemePreference,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    if snapshot.preference == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "preference_mismatch".to_string(),
            message: format!(
                "expected preference {expected}, store holds {}",
                snapshot.preference
            ),
        }
    }
}

pub fn evaluate_assert_scheme(
    expected: ColorScheme,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    if snapshot.resolved_scheme == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "scheme_mismatch".to_string(),
            message: format!(
                "expected resolved scheme {expected}, store resolves {}",
                snapshot.resolved_scheme
            ),
        }
    }
}

pub fn evaluate_assert_dark_marker(
    expected: bool,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    if snapshot.dark_marker == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "marker_mismatch".to_string(),
            message: format!(
                "expected dark marker {expected}, root element has {}",
                snapshot.dark_marker
            ),
        }
    }
}
