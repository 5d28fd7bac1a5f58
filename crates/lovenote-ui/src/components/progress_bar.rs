//! Progress Bar
//!
//! Thin rose bar under the memory gallery showing how many cards are flipped.

use dioxus::prelude::*;

/// Clamp to 0..=100 and format as a CSS width.
pub fn progress_width(percent: f64) -> String {
    let clamped = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("{:.1}%", clamped)
}

#[component]
pub fn ProgressBar(percent: f64, #[props(default)] label: Option<String>) -> Element {
    let width = progress_width(percent);

    rsx! {
        div { class: "progress",
            if let Some(label) = label {
                div { class: "progress__label", "{label}" }
            }
            div {
                class: "progress__track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{percent:.0}",
                div { class: "progress__fill", style: "width: {width};" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_clamped() {
        assert_eq!(progress_width(33.333), "33.3%");
        assert_eq!(progress_width(150.0), "100.0%");
        assert_eq!(progress_width(-5.0), "0.0%");
        assert_eq!(progress_width(f64::NAN), "0.0%");
    }
}
