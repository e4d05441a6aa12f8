//! Display formatting shared by the TUI and CLI output.

/// Format simulated seconds as `"{m}m {ss}s"`.
///
/// Minutes are unpadded, seconds are zero-padded to two digits.
pub fn format_elapsed(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}m {:02}s", mins, secs)
}
