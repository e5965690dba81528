//! OS color scheme detection

use crate::scheme::ColorScheme;
use dark_light::{detect as detect_os_scheme, Mode as OsSchemeMode};

/// Query the operating system for its current color scheme
///
/// Platforms without a reported preference come back as `Light`.
pub fn detect_system_color_scheme() -> ColorScheme {
    let scheme = match detect_os_scheme() {
        OsSchemeMode::Dark => ColorScheme::Dark,
        OsSchemeMode::Light => ColorScheme::Light,
    };
    tracing::debug!("detect_system_color_scheme - OS reports {:?}", scheme);
    scheme
}
