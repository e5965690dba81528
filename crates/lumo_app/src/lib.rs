//! Lumo Application Shell
//!
//! Wires a theme store, an OS scheme signal, and a UI tree into one
//! application context, with TOML configuration and a headless
//! diagnostics runner for scenario-driven checks.
//!
//! # Example
//!
//! ```ignore
//! use lumo_app::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = LumoConfig::load_or_default(Path::new("."))?;
//!     let mut app = AppContext::new(config, showcase_view())?;
//!
//!     app.set_preference(ThemePreference::Dark);
//!     app.advance_frame();
//!     assert!(app.has_dark_marker());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context;
pub mod demos;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;

#[cfg(test)]
mod tests;

pub use config::{LumoConfig, ThemeConfig, WindowConfig};
pub use context::{AppContext, RootClassMarker, ViewFn, DARK_CLASS, ROOT_ELEMENT_ID};
pub use demos::{showcase_view, ShowcaseDemo};
pub use headless_assert::{AssertionResult, DiagnosticsElement, DiagnosticsSnapshot};
pub use headless_report::{HeadlessReport, ReportStatus};
pub use headless_runner::{
    run_loaded_scenario, run_scenario, run_scenario_from_path, RunOutcome, ScenarioHost,
};
pub use headless_runtime::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
pub use headless_scenario::{HeadlessScenario, ScenarioStep};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::LumoConfig;
    pub use crate::context::{AppContext, ViewFn, ROOT_ELEMENT_ID};
    pub use crate::demos::{showcase_view, ShowcaseDemo};
    pub use crate::headless_runner::{run_scenario, RunOutcome, ScenarioHost};
    pub use crate::headless_runtime::HeadlessRunConfig;
    pub use crate::headless_scenario::HeadlessScenario;

    // Component and layout builders
    pub use lumo_ui::prelude::*;

    // Theme handles
    pub use lumo_theme::{
        ColorScheme, SchemeSignal, ThemePreference, ThemePreset, ThemeStore, ThemeStoreConfig,
    };

    pub use anyhow::Result;
}
