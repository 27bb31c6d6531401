//! Lucide icons as inline SVG.
//!
//! Only the glyphs the site uses. All share the Lucide frame: 24x24 view
//! box, no fill, 2px round stroke in `currentColor`.

use dioxus::prelude::*;

use super::join_classes;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    AlertCircle,
    ArrowUp,
    Award,
    CheckCircle,
    Clock,
    Facebook,
    FileCheck,
    Instagram,
    Linkedin,
    Loader,
    Lock,
    Mail,
    MapPin,
    Menu,
    MessageSquare,
    Phone,
    Send,
    Shield,
    Star,
    Twitter,
    Users,
    X,
}

impl IconKind {
    /// Lucide name, used as a CSS hook (`icon-<name>`)
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::AlertCircle => "alert-circle",
            IconKind::ArrowUp => "arrow-up",
            IconKind::Award => "award",
            IconKind::CheckCircle => "check-circle",
            IconKind::Clock => "clock",
            IconKind::Facebook => "facebook",
            IconKind::FileCheck => "file-check",
            IconKind::Instagram => "instagram",
            IconKind::Linkedin => "linkedin",
            IconKind::Loader => "loader",
            IconKind::Lock => "lock",
            IconKind::Mail => "mail",
            IconKind::MapPin => "map-pin",
            IconKind::Menu => "menu",
            IconKind::MessageSquare => "message-square",
            IconKind::Phone => "phone",
            IconKind::Send => "send",
            IconKind::Shield => "shield",
            IconKind::Star => "star",
            IconKind::Twitter => "twitter",
            IconKind::Users => "users",
            IconKind::X => "x",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub kind: IconKind,
    /// Width and height in pixels
    #[props(default = 16)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let class = join_classes(&format!("icon icon-{}", props.kind.name()), props.class.as_deref());

    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {glyph(props.kind)}
        }
    }
}

/// Inner shapes of each icon
fn glyph(kind: IconKind) -> Element {
    match kind {
        IconKind::AlertCircle => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", x2: "12", y1: "8", y2: "12" }
            line { x1: "12", x2: "12.01", y1: "16", y2: "16" }
        },
        IconKind::ArrowUp => rsx! {
            path { d: "m5 12 7-7 7 7" }
            path { d: "M12 19V5" }
        },
        IconKind::Award => rsx! {
            circle { cx: "12", cy: "8", r: "6" }
            path { d: "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" }
        },
        IconKind::CheckCircle => rsx! {
            path { d: "M22 11.08V12a10 10 0 1 1-5.93-9.14" }
            polyline { points: "22 4 12 14.01 9 11.01" }
        },
        IconKind::Clock => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 14" }
        },
        IconKind::Facebook => rsx! {
            path { d: "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" }
        },
        IconKind::FileCheck => rsx! {
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            path { d: "m9 15 2 2 4-4" }
        },
        IconKind::Instagram => rsx! {
            rect { width: "20", height: "20", x: "2", y: "2", rx: "5", ry: "5" }
            path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
            line { x1: "17.5", x2: "17.51", y1: "6.5", y2: "6.5" }
        },
        IconKind::Linkedin => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { width: "4", height: "12", x: "2", y: "9" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        IconKind::Loader => rsx! {
            path { d: "M21 12a9 9 0 1 1-6.219-8.56" }
        },
        IconKind::Lock => rsx! {
            rect { width: "18", height: "11", x: "3", y: "11", rx: "2", ry: "2" }
            path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
        },
        IconKind::Mail => rsx! {
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        IconKind::MapPin => rsx! {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        IconKind::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
        IconKind::MessageSquare => rsx! {
            path { d: "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" }
        },
        IconKind::Phone => rsx! {
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        },
        IconKind::Send => rsx! {
            path { d: "m22 2-7 20-4-9-9-4Z" }
            path { d: "M22 2 11 13" }
        },
        IconKind::Shield => rsx! {
            path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
        },
        IconKind::Star => rsx! {
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        },
        IconKind::Twitter => rsx! {
            path { d: "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" }
        },
        IconKind::Users => rsx! {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        },
        IconKind::X => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_are_kebab_case() {
        for kind in [IconKind::AlertCircle, IconKind::MessageSquare, IconKind::X] {
            let name = kind.name();
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{name}");
        }
        assert_eq!(IconKind::MapPin.name(), "map-pin");
    }
}
