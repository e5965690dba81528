//! Lumo demo driver
//!
//! Runs the showcase screen headlessly: either a plain frame budget with
//! a state summary, or a diagnostics scenario with a JSON report.

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use lumo_app::demos::ShowcaseDemo;
use lumo_app::{run_scenario_from_path, AppContext, HeadlessRunConfig, HeadlessRuntime, LumoConfig};
use lumo_theme::ThemePreset;

/// Headless demo and diagnostics driver for Lumo
#[derive(Parser, Debug)]
#[command(name = "lumo-demo")]
#[command(about = "Run the Lumo showcase screen headlessly")]
#[command(version)]
struct Args {
    /// Directory containing lumo.toml (or a path to the file itself)
    #[arg(short, long, default_value = ".")]
    config: PathBuf,

    /// Theme preset override (lumo, slate, zinc, stone, neutral)
    #[arg(long)]
    preset: Option<String>,

    /// Theme preference override (light, dark, system)
    #[arg(long)]
    preference: Option<String>,

    /// Frames to run when no scenario is given
    #[arg(long, default_value = "60")]
    frames: u32,

    /// Scenario JSON file to execute
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Where to write the JSON report (workspace-relative)
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the resolved CSS variable map after the run
    #[arg(long)]
    print_css_vars: bool,

    /// List available theme presets and exit
    #[arg(long)]
    list_presets: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.list_presets {
        for preset in ThemePreset::all() {
            println!("{:<10} {}", preset.id(), preset.display_name());
        }
        return Ok(());
    }

    let mut config = LumoConfig::load_or_default(&args.config)?;
    if let Some(preset) = &args.preset {
        config.theme.preset = preset.clone();
    }
    if let Some(preference) = &args.preference {
        config.theme.default_preference = preference.parse()?;
    }

    let window = config.window.clone();
    let demo = ShowcaseDemo::new();
    let mut app = AppContext::new(config, demo.view())?;

    tracing::info!(
        "{} - preference {} resolves to {}",
        window.title,
        app.preference(),
        app.resolved_scheme()
    );

    let runtime_cfg = HeadlessRunConfig {
        width: window.width,
        height: window.height,
        max_frames: args.frames.max(1),
        ..Default::default()
    };

    if let Some(path) = &args.scenario {
        let outcome = run_scenario_from_path(path, runtime_cfg, &mut app)?;
        let report = outcome.report();
        match &args.report {
            Some(report_path) => report.write_to_path(report_path)?,
            None => {
                let mut stdout = std::io::stdout();
                report.write_to_writer(&mut stdout)?;
                stdout.flush()?;
            }
        }
        eprintln!("{}", report.summary());
        if outcome.is_failed() {
            std::process::exit(1);
        }
        return Ok(());
    }

    // With the watcher feature the OS scheme is polled for real; the
    // stop below joins the polling thread.
    #[cfg(feature = "watcher")]
    let mut watcher = lumo_theme::SystemSchemeWatcher::spawn(
        app.signal().clone(),
        lumo_theme::WatcherConfig::default(),
    );

    HeadlessRuntime::run(runtime_cfg, |_ctx| {
        app.advance_frame();
    })?;

    #[cfg(feature = "watcher")]
    watcher.stop();

    println!("resolved scheme : {}", app.resolved_scheme());
    println!("dark marker     : {}", app.has_dark_marker());
    println!("elements        : {}", app.registry().len());
    println!("cta clicks      : {}", demo.clicks());

    if args.print_css_vars {
        let mut vars: Vec<(String, String)> =
            app.store().to_css_variable_map().into_iter().collect();
        vars.sort();
        for (name, value) in vars {
            println!("--{name}: {value}");
        }
    }

    Ok(())
}
