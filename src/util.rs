// Small formatting helpers shared by components.

/// CSS pixel length, trimmed to two decimals.
pub fn px(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    format!("{}px", rounded)
}

pub fn format_percent(percent: u32) -> String {
    format!("{}%", percent)
}

pub fn rotation_label(display_degrees: i32) -> String {
    format!("Rotate {}°", display_degrees)
}
