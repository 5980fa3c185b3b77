//! "Why Schemerr?" feature grid.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

struct Feature {
    icon: &'static str,
    icon_color: &'static str,
    title: &'static str,
    description: &'static str,
    /// Optional terminal-style chip shown under the description
    chip: Option<&'static str>,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: icons::TERMINAL,
        icon_color: "text-emerald-400",
        title: "One Command Deploys",
        description: "Ship any project with a single CLI command. No dashboards, no YAML archaeology, no clicking through wizards.",
        chip: Some("$ schemerr deploy"),
    },
    Feature {
        icon: icons::GLOBE,
        icon_color: "text-cyan-400",
        title: "Any Provider",
        description: "Target AWS, Vercel, Fly, or your own servers through one unified interface. Switch providers without rewriting configs.",
        chip: None,
    },
    Feature {
        icon: icons::SPARKLES,
        icon_color: "text-violet-400",
        title: "AI-Assisted Setup",
        description: "Schemerr reads your project and generates the right deployment configuration for your stack automatically.",
        chip: None,
    },
    Feature {
        icon: icons::MONITOR,
        icon_color: "text-teal-400",
        title: "Live Build Output",
        description: "Watch builds and deploys stream in real time, straight in your terminal, with clear status for every stage.",
        chip: None,
    },
    Feature {
        icon: icons::SETTINGS,
        icon_color: "text-amber-400",
        title: "Zero Config by Default",
        description: "Sensible defaults for every framework we detect. Override only what you need in a single .schemerrc file.",
        chip: None,
    },
    Feature {
        icon: icons::LOCK,
        icon_color: "text-rose-400",
        title: "Secrets Done Right",
        description: "Tokens and environment secrets are validated, encrypted, and scoped per project. Never pasted into config files.",
        chip: None,
    },
    Feature {
        icon: icons::MESSAGE,
        icon_color: "text-sky-400",
        title: "Instant Feedback",
        description: "Failed deploys explain themselves. Get the failing step, the log excerpt, and a suggested fix in one message.",
        chip: None,
    },
    Feature {
        icon: icons::GIT_BRANCH,
        icon_color: "text-lime-400",
        title: "Preview Every Branch",
        description: "Each branch gets its own preview URL on push, torn down automatically when the branch is merged or deleted.",
        chip: None,
    },
    Feature {
        icon: icons::CODE,
        icon_color: "text-fuchsia-400",
        title: "Built for Developers",
        description: "A fast CLI, a scriptable API, and output designed to be piped. Schemerr fits your workflow, not the other way around.",
        chip: None,
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="relative max-w-6xl mx-auto px-6 py-24">
            <div class="text-center mb-14">
                <div class="inline-flex items-center gap-1.5 px-3 py-1 mb-4 text-xs font-medium text-emerald-400 bg-emerald-500/10 border border-emerald-500/20 rounded-full">
                    <Icon name=icons::ZAP class="w-3.5 h-3.5" />
                    <span>"Why Schemerr?"</span>
                </div>
                <h2 class="text-3xl sm:text-4xl font-bold text-white tracking-tight">
                    "Everything you need to ship"
                </h2>
                <p class="max-w-xl mx-auto mt-4 text-slate-400">
                    "Stop wrestling with deployment pipelines. Schemerr turns shipping into a single command, whatever you build and wherever you host it."
                </p>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-5">
                {FEATURES
                    .iter()
                    .map(|f| view! { <FeatureCard feature=f /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    // Icons stroke with currentColor, so the wrapper sets the tint
    let icon_wrap = format!(
        "w-10 h-10 flex items-center justify-center bg-white/5 rounded-lg mb-4 {}",
        feature.icon_color
    );

    view! {
        <div class="group relative p-6 bg-slate-900/50 border border-white/5 hover:border-white/15 rounded-xl backdrop-blur-sm transition-colors duration-300">
            <div class=icon_wrap>
                <Icon name=feature.icon class="w-5 h-5" />
            </div>
            <h3 class="text-white font-semibold mb-2">{feature.title}</h3>
            <p class="text-sm text-slate-400 leading-relaxed">{feature.description}</p>
            {feature.chip.map(|chip| view! {
                <div class="inline-block mt-4 px-3 py-1.5 bg-[#0d1117] border border-white/10 rounded-md font-mono text-xs text-emerald-400">
                    {chip}
                </div>
            })}
        </div>
    }
}
