//! Deterministic frame loop for headless runs
//!
//! No clock and no vsync: time is synthesized from `tick_ms`, so a run
//! produces identical frame timing everywhere.

use anyhow::{bail, Result};

/// Configuration for a headless frame budget
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Logical viewport width
    pub width: u32,
    /// Logical viewport height
    pub height: u32,
    /// Number of frames to execute
    pub max_frames: u32,
    /// Logical milliseconds per frame
    pub tick_ms: u64,
    /// Probe sampling interval in frames (1 = every frame)
    pub probe_every_frames: u32,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            max_frames: 1,
            tick_ms: 16,
            probe_every_frames: 4,
        }
    }
}

impl HeadlessRunConfig {
    /// Reject configurations that cannot advance
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("headless dimensions must be non-zero");
        }
        if self.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }
        if self.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }
        Ok(())
    }
}

/// Frame context passed to headless frame callbacks
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u32,
    pub width: u32,
    pub height: u32,
    pub elapsed_ms: u64,
}

/// Fixed-budget headless frame driver
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run `max_frames` frames, invoking `on_frame` for each
    pub fn run<F>(cfg: HeadlessRunConfig, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&HeadlessContext),
    {
        cfg.validate()?;

        for frame in 0..cfg.max_frames {
            let elapsed_ms = cfg.tick_ms.saturating_mul(frame as u64);
            on_frame(&HeadlessContext {
                frame_index: frame,
                width: cfg.width,
                height: cfg.height,
                elapsed_ms,
            });
        }

        Ok(())
    }
}
