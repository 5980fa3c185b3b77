//! Full-page animated background.
//!
//! Pure CSS animation layers behind the page content. Orb and star positions
//! are derived from their index so the server-rendered markup matches what
//! the client produces during hydration.

use leptos::prelude::*;

const ORB_COUNT: usize = 18;

#[component]
pub fn Background() -> impl IntoView {
    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden bg-slate-950" aria-hidden="true">
            // Aurora blobs
            <div class="absolute -top-40 -left-40 w-[500px] h-[500px] rounded-full bg-emerald-600/20 blur-[120px] bg-aurora"></div>
            <div class="absolute top-1/3 -right-40 w-[450px] h-[450px] rounded-full bg-teal-500/15 blur-[120px] bg-aurora" style="animation-delay: -7s"></div>
            <div class="absolute -bottom-40 left-1/4 w-[400px] h-[400px] rounded-full bg-cyan-600/10 blur-[120px] bg-aurora" style="animation-delay: -14s"></div>

            // Central glow
            <div class="absolute top-1/4 left-1/2 -translate-x-1/2 w-[600px] h-[300px] rounded-full bg-emerald-500/10 blur-[100px] bg-glow-pulse"></div>

            // Animated grid
            <div class="absolute inset-0 bg-grid"></div>

            // Floating orbs
            {(0..ORB_COUNT)
                .map(|i| {
                    let style = format!(
                        "left: {}%; top: {}%; animation-delay: {}ms; animation-duration: {}s",
                        (i * 53) % 100,
                        (i * 29) % 100,
                        i * 700,
                        8 + (i % 5),
                    );
                    view! {
                        <div
                            class="absolute w-1 h-1 rounded-full bg-emerald-400/40 bg-orb-float"
                            style=style
                        ></div>
                    }
                })
                .collect_view()}

            // Shooting stars
            {(0..3)
                .map(|i| {
                    let style = format!(
                        "top: {}%; animation-delay: {}s",
                        10 + i * 25,
                        i * 4,
                    );
                    view! {
                        <div class="absolute left-0 w-24 h-px bg-gradient-to-r from-transparent via-emerald-400/60 to-transparent bg-shooting-star" style=style></div>
                    }
                })
                .collect_view()}

            // Rotating rings around the hero
            <div class="absolute top-[20%] left-1/2 -translate-x-1/2 w-[700px] h-[700px] rounded-full border border-emerald-500/5 bg-ring-spin"></div>
            <div class="absolute top-[15%] left-1/2 -translate-x-1/2 w-[900px] h-[900px] rounded-full border border-teal-500/5 bg-ring-spin" style="animation-duration: 60s; animation-direction: reverse"></div>
            <div class="absolute top-[10%] left-1/2 -translate-x-1/2 w-[1100px] h-[1100px] rounded-full border border-white/[0.02] bg-ring-spin" style="animation-duration: 90s"></div>

            <BackgroundStyles />
        </div>
    }
}

#[component]
fn BackgroundStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes bg-aurora-drift {
                0%, 100% { transform: translate(0, 0) scale(1); }
                33% { transform: translate(40px, -30px) scale(1.1); }
                66% { transform: translate(-30px, 20px) scale(0.95); }
            }

            .bg-aurora {
                animation: bg-aurora-drift 20s ease-in-out infinite;
            }

            @keyframes bg-glow {
                0%, 100% { opacity: 0.6; transform: translateX(-50%) scale(1); }
                50% { opacity: 1; transform: translateX(-50%) scale(1.08); }
            }

            .bg-glow-pulse {
                animation: bg-glow 6s ease-in-out infinite;
            }

            .bg-grid {
                background-image:
                    linear-gradient(rgba(148, 163, 184, 0.04) 1px, transparent 1px),
                    linear-gradient(90deg, rgba(148, 163, 184, 0.04) 1px, transparent 1px);
                background-size: 60px 60px;
                mask-image: radial-gradient(ellipse 80% 60% at 50% 30%, black 30%, transparent 80%);
                animation: bg-grid-scroll 30s linear infinite;
            }

            @keyframes bg-grid-scroll {
                from { background-position: 0 0; }
                to { background-position: 0 60px; }
            }

            @keyframes bg-orb {
                0%, 100% { transform: translateY(0); opacity: 0.2; }
                50% { transform: translateY(-30px); opacity: 0.7; }
            }

            .bg-orb-float {
                animation: bg-orb 10s ease-in-out infinite;
            }

            @keyframes bg-star {
                0% { transform: translateX(-10vw) translateY(0); opacity: 0; }
                10% { opacity: 1; }
                40%, 100% { transform: translateX(110vw) translateY(12vh); opacity: 0; }
            }

            .bg-shooting-star {
                animation: bg-star 12s linear infinite;
            }

            @keyframes bg-ring {
                from { transform: translateX(-50%) rotate(0deg); }
                to { transform: translateX(-50%) rotate(360deg); }
            }

            .bg-ring-spin {
                animation: bg-ring 40s linear infinite;
            }
            "#
        </style>
    }
}
