//! The landing page.

use leptos::prelude::*;
use leptos_meta::Meta;

use crate::ui::background::Background;
use crate::ui::cli_demo::CliDemo;
use crate::ui::features::Features;
use crate::ui::footer::Footer;
use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::Navbar;
use crate::ui::waitlist_form::WaitlistForm;

#[component]
pub fn WaitlistPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <Background />
        <Navbar />

        <main class="relative pt-32 pb-8 px-6">
            <div class="max-w-4xl mx-auto text-center">
                // Early access badge
                <div class="inline-flex items-center gap-1.5 px-3.5 py-1.5 mb-8 text-xs font-medium text-emerald-400 bg-emerald-500/10 border border-emerald-500/20 rounded-full fade-in-up">
                    <Icon name=icons::SPARKLES class="w-3.5 h-3.5" />
                    <span>"Early Access Open"</span>
                    <Icon name=icons::CHEVRON_RIGHT class="w-3 h-3" />
                </div>

                <h1 class="text-5xl sm:text-7xl font-black tracking-tight leading-[1.05]">
                    <AnimatedLine text="Deploy faster" offset=0 class="text-white" />
                    <AnimatedLine
                        text="with Schemerr"
                        offset=13
                        class="bg-gradient-to-r from-emerald-400 via-teal-300 to-emerald-400 bg-clip-text text-transparent hero-shimmer"
                    />
                </h1>

                <p class="max-w-2xl mx-auto mt-8 text-lg text-slate-400 leading-relaxed fade-in-up fade-delay-2">
                    "The AI-assisted CLI that deploys any project to any provider with a single command. Stop fighting pipelines and start shipping."
                </p>

                <WaitlistForm />
                <CliDemo />
            </div>

            <Features />
        </main>

        <Footer />
        <PageStyles />
    }
}

/// One line of the hero headline, revealed letter by letter.
#[component]
fn AnimatedLine(
    text: &'static str,
    /// Number of letters animated before this line starts
    offset: usize,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("block {class}")>
            {text
                .chars()
                .enumerate()
                .map(|(i, ch)| {
                    let style = format!("animation-delay: {}ms", (offset + i) * 30);
                    view! {
                        <span class="inline-block hero-letter" style=style>
                            {if ch == ' ' { '\u{a0}' } else { ch }}
                        </span>
                    }
                })
                .collect_view()}
        </span>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Meta
            name="description"
            content="Schemerr is the AI-assisted CLI that deploys any project to any provider with a single command. Join the waitlist for early access."
        />
        <Meta
            name="keywords"
            content="deploy, cli, devops, deployment tool, ai, developer tools"
        />
        <Meta property="og:title" content="Schemerr | The ultimate AI-assisted development tool" />
        <Meta
            property="og:description"
            content="Deploy any project to any provider with a single command. Join the waitlist for early access."
        />
        <Meta property="og:type" content="website" />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content="Schemerr | The ultimate AI-assisted development tool" />
        <Meta
            name="twitter:description"
            content="Deploy any project to any provider with a single command."
        />
    }
}

/// Keyframes shared by the hero section
#[component]
fn PageStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes hero-letter-in {
                from { opacity: 0; transform: translateY(24px) rotateX(40deg); }
                to { opacity: 1; transform: translateY(0) rotateX(0); }
            }

            .hero-letter {
                opacity: 0;
                animation: hero-letter-in 0.5s cubic-bezier(0.22, 1, 0.36, 1) forwards;
            }

            @keyframes hero-shimmer-slide {
                from { background-position: 200% center; }
                to { background-position: -200% center; }
            }

            .hero-shimmer {
                background-size: 200% auto;
                animation: hero-shimmer-slide 5s linear infinite;
            }

            @keyframes fade-in-up {
                from { opacity: 0; transform: translateY(16px); }
                to { opacity: 1; transform: translateY(0); }
            }

            .fade-in-up {
                opacity: 0;
                animation: fade-in-up 0.7s ease-out forwards;
            }

            .fade-delay-2 {
                animation-delay: 0.6s;
            }

            @keyframes avatar-pop-in {
                from { opacity: 0; transform: scale(0.5); }
                to { opacity: 1; transform: scale(1); }
            }

            .avatar-pop {
                opacity: 0;
                animation: avatar-pop-in 0.4s ease-out forwards;
            }
            "#
        </style>
    }
}
