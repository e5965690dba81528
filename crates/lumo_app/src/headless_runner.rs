//! Scenario runner that executes headless diagnostics against a host
//!
//! The runner owns step sequencing and report construction; everything
//! app-specific sits behind [`ScenarioHost`]. `AppContext` is the real
//! host, tests substitute scripted ones.

use anyhow::Result;
use std::path::Path;

use lumo_theme::{ColorScheme, ThemePreference};

use crate::context::AppContext;
use crate::headless_assert::{
    evaluate_assert_class, evaluate_assert_dark_marker, evaluate_assert_exists,
    evaluate_assert_preference, evaluate_assert_scheme, evaluate_assert_text_contains,
    AssertionResult, DiagnosticsSnapshot,
};
use crate::headless_report::HeadlessReport;
use crate::headless_runtime::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};

/// Application surface a scenario drives
pub trait ScenarioHost {
    /// Advance one frame (process pending rebuilds)
    fn advance(&mut self, ctx: &HeadlessContext);

    /// Capture observable state for assertions
    fn snapshot(&self) -> DiagnosticsSnapshot;

    /// Synthesize a click on the element with `id`
    fn click(&mut self, id: &str) -> AssertionResult;

    /// Commit a theme preference
    fn set_preference(&mut self, preference: ThemePreference);

    /// Push an OS scheme change
    fn emit_system_scheme(&mut self, scheme: ColorScheme);
}

impl ScenarioHost for AppContext {
    fn advance(&mut self, _ctx: &HeadlessContext) {
        self.advance_frame();
    }

    fn snapshot(&self) -> DiagnosticsSnapshot {
        self.capture_snapshot()
    }

    fn click(&mut self, id: &str) -> AssertionResult {
        if self.registry().node_of(id).is_none() {
            return AssertionResult::Failed {
                code: "missing_element".to_string(),
                message: format!("{id}: element not found"),
            };
        }
        if AppContext::click(self, id) {
            AssertionResult::Passed
        } else {
            AssertionResult::Failed {
                code: "unhandled_click".to_string(),
                message: format!("{id}: no click handler along the element path"),
            }
        }
    }

    fn set_preference(&mut self, preference: ThemePreference) {
        AppContext::set_preference(self, preference);
    }

    fn emit_system_scheme(&mut self, scheme: ColorScheme) {
        AppContext::emit_system_scheme(self, scheme);
    }
}

/// Final outcome of a scenario run
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a host
pub fn run_scenario<H: ScenarioHost>(
    input: &str,
    runtime_cfg: HeadlessRunConfig,
    host: &mut H,
) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, runtime_cfg, host)
}

/// Execute a scenario file against a host
pub fn run_scenario_from_path<H: ScenarioHost>(
    path: &Path,
    runtime_cfg: HeadlessRunConfig,
    host: &mut H,
) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_path(path)?;
    run_loaded_scenario(&scenario, runtime_cfg, host)
}

/// Execute a pre-loaded scenario against a host
///
/// Assertion failures end the run with a failed report; structural
/// problems (unparseable scenario, zero-budget runtime config) surface
/// as errors instead.
pub fn run_loaded_scenario<H: ScenarioHost>(
    scenario: &HeadlessScenario,
    runtime_cfg: HeadlessRunConfig,
    host: &mut H,
) -> Result<RunOutcome> {
    let mut elapsed_frames: u64 = 0;
    let mut elapsed_ms: u64 = 0;
    let mut latest_snapshot: Option<DiagnosticsSnapshot> = None;
    let probe_every = runtime_cfg.probe_every_frames.max(1);

    for (step_index, step) in scenario.steps.iter().enumerate() {
        let assertion = match step {
            ScenarioStep::Wait { ms } => {
                let frames = wait_frames(*ms, runtime_cfg.tick_ms);
                let mut remaining_ms = *ms;
                run_sampled_frames(
                    runtime_cfg,
                    frames,
                    probe_every,
                    &mut elapsed_frames,
                    &mut elapsed_ms,
                    &mut latest_snapshot,
                    host,
                    || {
                        let step_ms = remaining_ms.min(runtime_cfg.tick_ms);
                        remaining_ms = remaining_ms.saturating_sub(step_ms);
                        step_ms
                    },
                )?;
                continue;
            }
            ScenarioStep::Tick { frames } => {
                run_sampled_frames(
                    runtime_cfg,
                    *frames,
                    probe_every,
                    &mut elapsed_frames,
                    &mut elapsed_ms,
                    &mut latest_snapshot,
                    host,
                    || runtime_cfg.tick_ms,
                )?;
                continue;
            }
            ScenarioStep::Click { id } => {
                let result = host.click(id);
                latest_snapshot = None;
                if let AssertionResult::Failed { message, .. } = result {
                    let report = HeadlessReport::failed(
                        "click",
                        step_index,
                        message,
                        elapsed_frames,
                        elapsed_ms,
                    );
                    return Ok(RunOutcome::Failed { report });
                }
                continue;
            }
            ScenarioStep::SetPreference { value } => {
                host.set_preference(*value);
                latest_snapshot = None;
                continue;
            }
            ScenarioStep::EmitSystemScheme { value } => {
                host.emit_system_scheme(*value);
                latest_snapshot = None;
                continue;
            }
            ScenarioStep::AssertExists { id } => {
                let snapshot = ensure_snapshot(&mut latest_snapshot, host);
                ("assert_exists", evaluate_assert_exists(id, snapshot))
            }
            ScenarioStep::AssertTextContains { id, value } => {
                let snapshot = ensure_snapshot(&mut latest_snapshot, host);
                (
                    "assert_text_contains",
                    evaluate_assert_text_contains(id, value, snapshot),
                )
            }
            ScenarioStep::AssertClass { id, class, present } => {
                let snapshot = ensure_snapshot(&mut latest_snapshot, host);
                (
                    "assert_class",
                    evaluate_assert_class(id, class, *present, snapshot),
                )
            }
            ScenarioStep::AssertPreference { value } => {
                let snapshot = ensure_snapshot(&mut latest_snapshot, host);
                (
                    "assert_preference",
                    evaluate_assert_preference(*value, snapshot),
                )
            }
            ScenarioStep::AssertScheme { value } => {
                let snapshot = ensure_snapshot(&mut latest_snapshot, host);
                ("assert_scheme", evaluate_assert_scheme(*value, snapshot))
            }
            ScenarioStep::AssertDarkMarker { value } => {
                let snapshot = ensure_snapshot(&mut latest_snapshot, host);
                (
                    "assert_dark_marker",
                    evaluate_assert_dark_marker(*value, snapshot),
                )
            }
        };

        let (name, result) = assertion;
        if let AssertionResult::Failed { message, .. } = result {
            let report =
                HeadlessReport::failed(name, step_index, message, elapsed_frames, elapsed_ms);
            return Ok(RunOutcome::Failed { report });
        }
    }

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(scenario.steps.len(), elapsed_frames, elapsed_ms),
    })
}

fn ensure_snapshot<'a, H: ScenarioHost>(
    latest_snapshot: &'a mut Option<DiagnosticsSnapshot>,
    host: &H,
) -> &'a DiagnosticsSnapshot {
    latest_snapshot.get_or_insert_with(|| host.snapshot())
}

#[allow(clippy::too_many_arguments)]
fn run_sampled_frames<H: ScenarioHost, A>(
    runtime_cfg: HeadlessRunConfig,
    frames: u32,
    probe_every: u32,
    elapsed_frames: &mut u64,
    elapsed_ms: &mut u64,
    latest_snapshot: &mut Option<DiagnosticsSnapshot>,
    host: &mut H,
    mut advance_ms: A,
) -> Result<()>
where
    A: FnMut() -> u64,
{
    if frames == 0 {
        *latest_snapshot = Some(host.snapshot());
        return Ok(());
    }

    let mut cfg = runtime_cfg;
    cfg.max_frames = frames;
    let mut sampled_frames = 0u32;
    HeadlessRuntime::run(cfg, |ctx| {
        host.advance(ctx);
        *elapsed_frames = (*elapsed_frames).saturating_add(1);
        *elapsed_ms = (*elapsed_ms).saturating_add(advance_ms());
        sampled_frames = sampled_frames.saturating_add(1);

        if sampled_frames % probe_every == 0 || sampled_frames == frames {
            *latest_snapshot = Some(host.snapshot());
        }
    })?;

    Ok(())
}

fn wait_frames(wait_ms: u64, tick_ms: u64) -> u32 {
    if wait_ms == 0 {
        return 0;
    }
    let tick = tick_ms.max(1);
    let frames = wait_ms.saturating_add(tick.saturating_sub(1)) / tick;
    frames.min(u32::MAX as u64) as u32
}
