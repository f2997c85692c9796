//----------------------------------------
// Number formatting shown to the learner
//----------------------------------------

/// Bounds and means: three decimals
pub fn format_bound(x: f64) -> String {
    format!("{x:.3}")
}

pub fn format_p(p: f64) -> String {
    format!("{p:.3}")
}

/// `"0.007 (0.7%)"`
pub fn format_p_value(p: f64) -> String {
    format!("{:.3} ({:.1}%)", p, p * 100.)
}

/// Rejection threshold `1 - alpha`: two decimals
pub fn format_threshold(threshold: f64) -> String {
    format!("{threshold:.2}")
}

/// `0.95` -> `"95%"`
pub fn format_percent_whole(x: f64) -> String {
    format!("{:.0}%", x * 100.)
}

/// Hypothesised means are echoed as entered: `12`, `12.5`
pub fn format_mean(x: f64) -> String {
    format!("{x}")
}
