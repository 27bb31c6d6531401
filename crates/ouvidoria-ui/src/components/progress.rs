//! Progress Bar

use dioxus::prelude::*;

/// Clamp a percentage into `0..=100`, mapping NaN to zero.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Horizontal bar filled to `value` percent
#[component]
pub fn ProgressBar(value: f64) -> Element {
    let pct = clamp_percent(value);

    rsx! {
        div {
            class: "progress-track",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{pct:.0}",
            div { class: "progress-fill", style: "width: {pct}%;" }
        }
    }
}
