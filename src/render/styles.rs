//! Style block backing the pulsing update badge

use tracing::debug;

use crate::render::target::RenderTarget;

pub const PULSE_STYLE_ID: &str = "version-notice-pulse";

pub const PULSE_CSS: &str = "@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.6; } } \
.animate-pulse { animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite; }";

/// Register the badge animation on `target` once.
///
/// Returns false when it was already registered.
pub fn register_styles(target: &mut dyn RenderTarget) -> bool {
    if target.has_style(PULSE_STYLE_ID) {
        debug!("Style {} already registered", PULSE_STYLE_ID);
        return false;
    }

    target.add_style(PULSE_STYLE_ID, PULSE_CSS);
    true
}
