use leptos::prelude::*;

/// Inline SVG icon, stroked with `currentColor` so it follows the text color
/// of its container.
#[component]
pub fn Icon(
    /// Icon name from the [`icons`] module
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let d = match name {
        icons::TERMINAL => "M8 9l3 3-3 3m5 0h3M5 20h14a2 2 0 002-2V6a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
        icons::LOADER => "M4 12a8 8 0 018-8V2.5M20 12a8 8 0 01-8 8v1.5",
        icons::CHECK_CIRCLE => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::SPARKLES => "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z",
        icons::CHEVRON_RIGHT => "M9 5l7 7-7 7",
        icons::SHIELD => "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
        icons::ZAP => "M13 10V3L4 14h7v7l9-11h-7z",
        icons::GLOBE => "M3.055 11H5a2 2 0 012 2v1a2 2 0 002 2 2 2 0 012 2v2.945M8 3.935V5.5A2.5 2.5 0 0010.5 8h.5a2 2 0 012 2 2 2 0 104 0 2 2 0 012-2h1.064M15 20.488V18a2 2 0 012-2h3.064M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::MONITOR => "M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
        icons::SETTINGS => "M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065zM15 12a3 3 0 11-6 0 3 3 0 016 0z",
        icons::LOCK => "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z",
        icons::MESSAGE => "M8 10h.01M12 10h.01M16 10h.01M9 16H5a2 2 0 01-2-2V6a2 2 0 012-2h14a2 2 0 012 2v8a2 2 0 01-2 2h-5l-5 5v-5z",
        icons::GIT_BRANCH => "M6 3v12m0 0a3 3 0 103 3m-3-3a3 3 0 013-3h6a3 3 0 003-3m0 0a3 3 0 10-3-3m3 3V6",
        icons::CODE => "M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
        icons::HEART => "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z",
        _ => "M13 10V3L4 14h7v7l9-11h-7z",
    };

    view! {
        <svg class=class fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=d />
        </svg>
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const TERMINAL: &str = "terminal";
    pub const LOADER: &str = "loader";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const SPARKLES: &str = "sparkles";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const SHIELD: &str = "shield";
    pub const ZAP: &str = "zap";
    pub const GLOBE: &str = "globe";
    pub const MONITOR: &str = "monitor";
    pub const SETTINGS: &str = "settings";
    pub const LOCK: &str = "lock";
    pub const MESSAGE: &str = "message";
    pub const GIT_BRANCH: &str = "git-branch";
    pub const CODE: &str = "code";
    pub const HEART: &str = "heart";
}
