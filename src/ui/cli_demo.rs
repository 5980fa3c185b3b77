//! Animated terminal demo.
//!
//! Renders the looping Schemerr CLI demo driven by the playback state machine
//! in [`crate::core`]. The component owns a single `Playback` signal; a
//! client-side task delivers the machine's scheduled events one at a time, so
//! there is never more than one pending timer, and a cancel flag set on
//! cleanup guarantees no timer callback touches state after unmount.

use leptos::prelude::*;

use crate::core::{CompletedStep, Playback, demo_script};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn CliDemo() -> impl IntoView {
    let playback = RwSignal::new(Playback::new(demo_script()));

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        let cancelled = Rc::new(Cell::new(false));
        let cancel_flag = cancelled.clone();

        Effect::new(move |_| {
            let cancelled = cancelled.clone();
            spawn_local(async move {
                // One timer chain: each applied event yields the next one to
                // schedule. The loop only ends on teardown (or if the script
                // were empty).
                let mut next = playback.try_with_untracked(|p| p.start()).flatten();
                while let Some(scheduled) = next {
                    TimeoutFuture::new(scheduled.delay_ms).await;
                    if cancelled.get() {
                        break;
                    }
                    next = playback.try_update(|p| p.apply(scheduled.event)).flatten();
                }
            });
        });

        on_cleanup(move || cancel_flag.set(true));
    }

    view! {
        <div class="w-full max-w-2xl mx-auto mt-16">
            <div class="relative group">
                // Glow behind the terminal
                <div class="absolute -inset-1 bg-gradient-to-r from-emerald-600/30 via-teal-500/30 to-emerald-600/30 rounded-2xl blur-xl cli-glow-pulse"></div>

                <div class="relative bg-[#0d1117] border border-white/10 rounded-xl overflow-hidden shadow-2xl">
                    // Title bar
                    <div class="flex items-center gap-2 px-4 py-3 bg-[#161b22] border-b border-white/5">
                        <div class="flex gap-2">
                            <div class="w-3 h-3 rounded-full bg-[#ff5f56]"></div>
                            <div class="w-3 h-3 rounded-full bg-[#ffbd2e]"></div>
                            <div class="w-3 h-3 rounded-full bg-[#27c93f]"></div>
                        </div>
                        <div class="flex-1 flex items-center justify-center gap-2 text-xs text-slate-500 font-medium">
                            <Icon name=icons::TERMINAL class="w-3 h-3" />
                            <span>"Terminal"</span>
                        </div>
                        // Spacer for centering
                        <div class="w-14"></div>
                    </div>

                    // Terminal content
                    <div class="p-4 font-mono text-sm min-h-[320px] max-h-[400px] overflow-hidden text-left">
                        // Completed steps, replayed in full and dimmed
                        {move || {
                            playback
                                .with(|p| p.history().to_vec())
                                .into_iter()
                                .map(|entry| view! { <HistoryEntry entry=entry /> })
                                .collect_view()
                        }}

                        // Actively-typing step
                        <Show when=move || !playback.with(Playback::is_complete)>
                            <div class="mb-2">
                                <div class="flex items-center gap-2">
                                    <span class="text-emerald-500">"$"</span>
                                    <span class="text-white">
                                        {move || playback.with(|p| p.typed_prefix().to_string())}
                                    </span>
                                    // Block cursor: solid while typing, blinking otherwise
                                    <span
                                        class="inline-block w-2 h-4 bg-emerald-500"
                                        class:cli-cursor-blink=move || !playback.with(Playback::is_typing)
                                    ></span>
                                </div>
                                <div class="mt-2 ml-4 space-y-1">
                                    {move || {
                                        playback
                                            .with(|p| p.visible_output_lines().to_vec())
                                            .into_iter()
                                            .map(|line| view! { <OutputLine line=line /> })
                                            .collect_view()
                                    }}
                                </div>
                            </div>
                        </Show>

                        // Synthetic completion block before the loop restarts
                        <Show when=move || playback.with(Playback::is_complete)>
                            <div class="mb-4">
                                <div class="flex items-center gap-2 text-slate-400">
                                    <span class="text-emerald-500">"$"</span>
                                    <span class="text-white">{r#"echo "Done!""#}</span>
                                </div>
                                <div class="mt-1 ml-4 space-y-0.5">
                                    <div class="text-xs text-emerald-400">
                                        "✓ All commands completed successfully!"
                                    </div>
                                </div>
                            </div>
                        </Show>
                    </div>

                    // Bottom gradient fade
                    <div class="absolute bottom-0 left-0 right-0 h-8 bg-gradient-to-t from-[#0d1117] to-transparent pointer-events-none"></div>
                </div>
            </div>

            <p class="text-center text-xs text-slate-500 mt-4">
                "Deploy your projects to your favourite providers using a unified CLI command"
            </p>

            <CliDemoStyles />
        </div>
    }
}

/// One completed command and its output, shown dimmed above the active line.
#[component]
fn HistoryEntry(entry: CompletedStep) -> impl IntoView {
    view! {
        <div class="mb-4 opacity-60">
            <div class="flex items-center gap-2 text-slate-400">
                <span class="text-emerald-500">"$"</span>
                <span>{entry.command}</span>
            </div>
            <div class="mt-1 ml-4 space-y-0.5">
                {entry
                    .output
                    .into_iter()
                    .map(|line| {
                        let class = format!("text-xs {}", output_line_class(&line));
                        view! { <div class=class>{line}</div> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One freshly-revealed output line, colour-coded by its leading glyph.
/// In-progress lines (`◐`) swap the glyph for a spinning loader.
#[component]
fn OutputLine(line: String) -> impl IntoView {
    let class = format!("text-xs flex items-center gap-2 {}", output_line_class(&line));
    let in_progress = line.trim_start().starts_with('◐');
    let text = if in_progress {
        line.trim_start()
            .trim_start_matches('◐')
            .trim_start()
            .to_string()
    } else {
        line
    };

    view! {
        <div class=class>
            {in_progress.then(|| view! {
                <Icon name=icons::LOADER class="w-2.5 h-2.5 animate-spin text-yellow-400" />
            })}
            {text}
        </div>
    }
}

/// Colour class for an output line based on its leading glyph.
pub(crate) fn output_line_class(line: &str) -> &'static str {
    let trimmed = line.trim_start();
    if trimmed.starts_with('✓') {
        "text-emerald-400"
    } else if trimmed.starts_with('→') {
        "text-cyan-400"
    } else if trimmed.starts_with('◐') {
        "text-yellow-400"
    } else {
        "text-slate-400"
    }
}

/// Keyframes local to the terminal demo
#[component]
fn CliDemoStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes cli-blink {
                0%, 100% { opacity: 1; }
                50% { opacity: 0; }
            }

            .cli-cursor-blink {
                animation: cli-blink 0.8s ease-in-out infinite;
            }

            @keyframes cli-glow {
                0%, 100% { opacity: 0.3; }
                50% { opacity: 0.5; }
            }

            .cli-glow-pulse {
                animation: cli-glow 3s ease-in-out infinite;
            }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::output_line_class;

    #[test]
    fn test_output_line_colours_by_glyph() {
        assert_eq!(output_line_class("✓ Token validated"), "text-emerald-400");
        assert_eq!(
            output_line_class("  → https://my-app.schemerr.dev"),
            "text-cyan-400"
        );
        assert_eq!(output_line_class("◐ Building project..."), "text-yellow-400");
        assert_eq!(output_line_class("plain text"), "text-slate-400");
    }
}
