//! Email signup form for the waitlist.

use leptos::prelude::*;

use crate::core::waitlist::SubmitState;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn WaitlistForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let state = RwSignal::new(SubmitState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Ignore submits while a request is already in flight
        if state.get_untracked().is_submitting() {
            return;
        }

        let value = email.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }

        state.set(SubmitState::Submitting);

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::waitlist::join_waitlist;
            use leptos::task::spawn_local;

            spawn_local(async move {
                let result = join_waitlist(&value).await;
                let (next, clear_input) = SubmitState::settle(result);
                if clear_input {
                    email.set(String::new());
                }
                state.set(next);
            });
        }
    };

    view! {
        <div class="w-full max-w-md mx-auto mt-12">
            <form on:submit=on_submit class="relative group">
                // Glow ring behind the input
                <div class="absolute -inset-0.5 bg-gradient-to-r from-emerald-600/50 to-teal-500/50 rounded-xl blur opacity-40 group-focus-within:opacity-70 transition duration-300"></div>

                <div class="relative flex gap-2 p-1.5 bg-slate-900/90 border border-white/10 rounded-xl backdrop-blur-sm">
                    <input
                        type="email"
                        placeholder="Enter your email address"
                        class="flex-1 min-w-0 px-4 py-2.5 bg-transparent text-white placeholder-slate-500 text-sm focus:outline-none"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        required
                    />
                    <button
                        type="submit"
                        class="flex items-center gap-1.5 px-5 py-2.5 bg-gradient-to-r from-emerald-600 to-teal-500 hover:from-emerald-500 hover:to-teal-400 text-white text-sm font-semibold rounded-lg transition-all duration-200 disabled:opacity-60 disabled:cursor-not-allowed whitespace-nowrap"
                        disabled=move || state.with(SubmitState::is_submitting)
                    >
                        <Show
                            when=move || state.with(SubmitState::is_submitting)
                            fallback=|| view! {
                                <span>"Get Early Access"</span>
                                <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4" />
                            }
                        >
                            <Icon name=icons::LOADER class="w-4 h-4 animate-spin" />
                            <span>"Joining..."</span>
                        </Show>
                    </button>
                </div>
            </form>

            // Result message, success or failure
            {move || {
                state
                    .with(|s| s.message().map(|msg| (msg.to_string(), s.is_success())))
                    .map(|(msg, success)| {
                        let (container, icon) = if success {
                            (
                                "flex items-center gap-2 mt-4 px-4 py-3 bg-emerald-500/10 border border-emerald-500/30 rounded-lg text-emerald-400 text-sm",
                                icons::CHECK_CIRCLE,
                            )
                        } else {
                            (
                                "flex items-center gap-2 mt-4 px-4 py-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
                                icons::ALERT_CIRCLE,
                            )
                        };
                        view! {
                            <div class=container>
                                <Icon name=icon class="w-4 h-4 flex-shrink-0" />
                                <span>{msg}</span>
                            </div>
                        }
                    })
            }}

            // Social proof
            <div class="flex items-center justify-center gap-3 mt-6">
                <div class="flex -space-x-2">
                    {["A", "B", "C", "D", "E"]
                        .into_iter()
                        .enumerate()
                        .map(|(i, letter)| {
                            let style = format!("animation-delay: {}ms", 1000 + i * 100);
                            view! {
                                <div
                                    class="w-7 h-7 rounded-full bg-gradient-to-br from-emerald-600 to-teal-500 border-2 border-slate-950 flex items-center justify-center text-[10px] font-bold text-white avatar-pop"
                                    style=style
                                >
                                    {letter}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <span class="text-xs text-slate-500">
                    <span class="text-slate-300 font-semibold">"2,847+"</span>
                    " developers waiting"
                </span>
            </div>

            <div class="flex items-center justify-center gap-1.5 mt-3 text-xs text-slate-600">
                <Icon name=icons::SHIELD class="w-3.5 h-3.5" />
                <span>"No spam. Unsubscribe anytime."</span>
            </div>
        </div>
    }
}
