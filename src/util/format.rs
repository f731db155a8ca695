#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a playback position the way the transport UI shows it: one
/// decimal place with a seconds unit, e.g. `12.3s`.
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.1}s")
}
