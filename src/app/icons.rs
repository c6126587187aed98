//! Inline SVG icons, drawn on a 256 unit grid and filled with the text color.

use leptos::prelude::*;

/// Renders one filled SVG path. Inner subpaths cut holes (even-odd fill).
#[component]
pub fn Icon(
    path: &'static str,
    #[prop(default = "20")] size: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path fill-rule="evenodd" d=path></path>
        </svg>
    }
}

/// Solid dot, used as a list bullet.
pub const ICON_CIRCLE: &str = "M128,64a64,64,0,1,0,64,64A64,64,0,0,0,128,64Z";

pub const ICON_BRIEFCASE: &str = "M216,64H176V56a24,24,0,0,0-24-24H104A24,24,0,0,0,80,56v8H40A16,16,0,0,0,24,80V200a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V80A16,16,0,0,0,216,64ZM96,56a8,8,0,0,1,8-8h48a8,8,0,0,1,8,8v8H96Z";

pub const ICON_MAIL: &str = "M224,48H32a8,8,0,0,0-8,8V192a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A8,8,0,0,0,224,48Zm-20.57,16L128,133.15,52.57,64ZM216,192H40V74.19l82.59,75.71a8,8,0,0,0,10.82,0L216,74.19V192Z";

/// Mobile handset.
pub const ICON_PHONE: &str = "M176,16H80A24,24,0,0,0,56,40V216a24,24,0,0,0,24,24h96a24,24,0,0,0,24-24V40A24,24,0,0,0,176,16ZM72,48H184V192H72Zm56,184a12,12,0,1,1,12-12A12,12,0,0,1,128,232Z";

pub const ICON_MAP_PIN: &str = "M128,16a88.1,88.1,0,0,0-88,88c0,75.3,80,132.17,83.41,134.55a8,8,0,0,0,9.18,0C136,236.17,216,179.3,216,104A88.1,88.1,0,0,0,128,16Zm0,56a32,32,0,1,1-32,32A32,32,0,0,1,128,72Z";

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&str; 5] = [ICON_CIRCLE, ICON_BRIEFCASE, ICON_MAIL, ICON_PHONE, ICON_MAP_PIN];

    #[test]
    fn test_icon_paths_are_closed_shapes() {
        for path in ALL {
            assert!(path.starts_with('M'), "{path}");
            assert!(path.ends_with('Z'), "{path}");
        }
    }
}
