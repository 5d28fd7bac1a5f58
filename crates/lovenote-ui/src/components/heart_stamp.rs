//! Heart Stamp
//!
//! Postage-style stamp in the corner of the love letter: a perforated ring,
//! two inner circles, a heart, and two arcs of text ("LOVE" on top,
//! "STAMPED" underneath) that are typed in by the letter choreography.
//!
//! The SVG uses filters and `textPath`, so it is assembled as markup and
//! injected with `dangerous_inner_html`.

use std::f64::consts::TAU;

use dioxus::prelude::*;

const ROSE: &str = "#f04299";
const ROSE_DARK: &str = "#b23a4b";
const CENTER: f64 = 100.0;
const PERFORATION_RADIUS: f64 = 88.0;
const PERFORATION_COUNT: usize = 24;

/// Evenly spaced points on the perforation ring, starting at 3 o'clock and
/// going clockwise in SVG coordinates.
pub fn perforation_dots(count: usize, radius: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            (CENTER + radius * angle.cos(), CENTER + radius * angle.sin())
        })
        .collect()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Complete stamp markup with the given arc texts.
pub fn heart_stamp_svg(top: &str, bottom: &str) -> String {
    let dots: String = perforation_dots(PERFORATION_COUNT, PERFORATION_RADIUS)
        .iter()
        .map(|(x, y)| format!(r#"<circle cx="{x:.3}" cy="{y:.3}" r="3" />"#))
        .collect();

    format!(
        r##"<svg width="120" height="120" viewBox="0 0 200 200" xmlns="http://www.w3.org/2000/svg" class="heart-stamp__svg" role="img" aria-label="Heart Stamp">
<defs>
  <filter id="grain" x="-20%" y="-20%" width="140%" height="140%">
    <feTurbulence type="fractalNoise" baseFrequency="1" numOctaves="2" stitchTiles="stitch" result="noise" />
    <feColorMatrix type="saturate" values="0" in="noise" result="mono" />
    <feComponentTransfer in="mono" result="grain"><feFuncA type="table" tableValues="0 0 0.15 0.45" /></feComponentTransfer>
    <feBlend in="SourceGraphic" in2="grain" mode="multiply" />
  </filter>
</defs>
<g fill="{ROSE}" opacity="0.9" filter="url(#grain)">{dots}</g>
<circle cx="100" cy="100" r="72" stroke="{ROSE}" stroke-width="5" fill="none" opacity="0.95" />
<circle cx="100" cy="100" r="55" stroke="{ROSE}" stroke-width="2.5" fill="none" opacity="0.8" />
<path d="M100 82 C100 68 82 68 82 82 C82 96 100 108 100 108 C100 108 118 96 118 82 C118 68 100 68 100 82 Z" fill="{ROSE}" stroke="#9e2b3d" stroke-width="1" opacity="0.95" filter="url(#grain)" />
<path id="topArc" d="M50 90 A45 45 0 0 1 150 95" fill="none" />
<text font-size="14" text-anchor="middle" fill="{ROSE}" style="font-family: Montserrat, sans-serif; letter-spacing: 0.2em; font-weight: 600;"><textPath href="#topArc" startOffset="50%">{top}</textPath></text>
<path id="bottomArc" d="M155 110 A55 50 0 0 1 45 110" fill="none" />
<text font-size="12" text-anchor="middle" fill="{ROSE_DARK}" style="font-family: Montserrat, sans-serif; letter-spacing: 0.15em; font-weight: 500;"><textPath href="#bottomArc" startOffset="50%">{bottom}</textPath></text>
</svg>"##,
        top = escape(top),
        bottom = escape(bottom),
    )
}

/// Heart stamp with partially typed arc texts
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HeartStamp {
///         top: card.stamp_text(StampLine::Love).to_string(),
///         bottom: card.stamp_text(StampLine::Stamped).to_string(),
///     }
/// }
/// ```
#[component]
pub fn HeartStamp(top: String, bottom: String) -> Element {
    let markup = heart_stamp_svg(&top, &bottom);

    rsx! {
        div {
            class: "heart-stamp float-slow",
            dangerous_inner_html: "{markup}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perforation_starts_at_three_oclock() {
        let dots = perforation_dots(24, 88.0);
        assert_eq!(dots.len(), 24);
        let (x, y) = dots[0];
        assert!((x - 188.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
        // Quarter turn lands straight below the centre
        let (x, y) = dots[6];
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 188.0).abs() < 1e-9);
    }

    #[test]
    fn stamp_contains_typed_text() {
        let svg = heart_stamp_svg("LO", "");
        assert!(svg.contains(r##"<textPath href="#topArc" startOffset="50%">LO</textPath>"##));
        assert!(svg.contains(r##"<textPath href="#bottomArc" startOffset="50%"></textPath>"##));
        assert_eq!(svg.matches(r#"r="3""#).count(), 24);
    }

    #[test]
    fn stamp_text_is_escaped() {
        let svg = heart_stamp_svg("<3", "A&B");
        assert!(svg.contains("&lt;3"));
        assert!(svg.contains("A&amp;B"));
    }
}
