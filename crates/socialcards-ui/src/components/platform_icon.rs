//! Platform glyphs
//!
//! Stroke icons on a 24x24 grid, keyed by lowercased platform name.
//! Unknown platforms fall back to a globe.

use dioxus::prelude::*;

/// One SVG primitive of a glyph
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Rect { x: f32, y: f32, w: f32, h: f32, rx: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
}

const GITHUB: &[Shape] = &[
    Shape::Path("M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"),
    Shape::Path("M9 18c-4.51 2-5-2-7-2"),
];

const INSTAGRAM: &[Shape] = &[
    Shape::Rect { x: 2.0, y: 2.0, w: 20.0, h: 20.0, rx: 5.0 },
    Shape::Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
    Shape::Line { x1: 17.5, y1: 6.5, x2: 17.51, y2: 6.5 },
];

const YOUTUBE: &[Shape] = &[
    Shape::Path("M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"),
    Shape::Path("m10 15 5-3-5-3z"),
];

const LINKEDIN: &[Shape] = &[
    Shape::Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
    Shape::Rect { x: 2.0, y: 9.0, w: 4.0, h: 12.0, rx: 0.0 },
    Shape::Circle { cx: 4.0, cy: 4.0, r: 2.0 },
];

const FACEBOOK: &[Shape] = &[Shape::Path(
    "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
)];

const PINTEREST: &[Shape] = &[
    Shape::Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
    Shape::Circle { cx: 12.0, cy: 10.0, r: 3.0 },
];

const GLOBE: &[Shape] = &[
    Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 },
    Shape::Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
    Shape::Path("M2 12h20"),
];

const CHEVRON_RIGHT: &[Shape] = &[Shape::Path("m9 18 6-6-6-6")];

/// Glyph for a platform key (`"github"`, `"instagram"`, ...)
pub fn glyph_for(key: &str) -> &'static [Shape] {
    match key {
        "github" => GITHUB,
        "instagram" => INSTAGRAM,
        "youtube" => YOUTUBE,
        "linkedin" => LINKEDIN,
        "facebook" => FACEBOOK,
        "pinterest" => PINTEREST,
        "chevron-right" => CHEVRON_RIGHT,
        _ => GLOBE,
    }
}

/// Inline SVG icon drawn in `currentColor`
#[component]
pub fn PlatformIcon(
    /// Lowercased platform name
    key_name: String,
    /// Edge length in pixels
    #[props(default = 24)]
    size: u32,
    #[props(default)]
    class: Option<String>,
) -> Element {
    let shapes = glyph_for(&key_name);
    let class = class.unwrap_or_default();

    rsx! {
        svg {
            class: "icon {class}",
            "data-icon": "{key_name}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for shape in shapes.iter() {
                {
                    match *shape {
                        Shape::Path(d) => rsx! { path { d: "{d}" } },
                        Shape::Rect { x, y, w, h, rx } => rsx! {
                            rect { x: "{x}", y: "{y}", width: "{w}", height: "{h}", rx: "{rx}", ry: "{rx}" }
                        },
                        Shape::Circle { cx, cy, r } => rsx! { circle { cx: "{cx}", cy: "{cy}", r: "{r}" } },
                        Shape::Line { x1, y1, x2, y2 } => rsx! {
                            line { x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}" }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_platforms_have_glyphs() {
        for key in ["github", "instagram", "youtube", "linkedin", "facebook", "pinterest"] {
            assert_ne!(glyph_for(key), GLOBE, "{key} fell back to the globe");
        }
    }

    #[test]
    fn unknown_platform_falls_back() {
        assert_eq!(glyph_for("mastodon"), GLOBE);
    }
}
