use leptos::prelude::*;

use crate::ui::navbar::GithubMark;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative border-t border-white/5 bg-slate-950/50">
            <div class="max-w-6xl mx-auto px-6 py-12">
                <div class="flex flex-col md:flex-row items-center md:items-start justify-between gap-8">
                    <div class="max-w-sm text-center md:text-left">
                        <div class="flex items-center justify-center md:justify-start gap-2.5 mb-3">
                            <div class="w-7 h-7 rounded-lg bg-gradient-to-br from-emerald-500 to-teal-400 flex items-center justify-center text-slate-950 font-black text-xs">
                                "S"
                            </div>
                            <span class="text-white font-bold">"Schemerr"</span>
                        </div>
                        <p class="text-sm text-slate-500 leading-relaxed">
                            "The ultimate AI-assisted deployment tool for developers. Deploy any project with a single command."
                        </p>
                    </div>

                    <div class="flex items-center gap-3">
                        <SocialLink href="https://twitter.com/schemerr" label="Twitter">
                            <svg class="w-4 h-4" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                                <path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z" />
                            </svg>
                        </SocialLink>
                        <SocialLink href="https://linkedin.com/company/schemerr" label="LinkedIn">
                            <svg class="w-4 h-4" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                                <path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433a2.062 2.062 0 01-2.063-2.065 2.064 2.064 0 112.063 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z" />
                            </svg>
                        </SocialLink>
                        <SocialLink href="https://github.com/schemerr" label="GitHub">
                            <GithubMark class="w-4 h-4" />
                        </SocialLink>
                    </div>
                </div>

                <div class="flex flex-col sm:flex-row items-center justify-between gap-2 mt-10 pt-6 border-t border-white/5 text-xs text-slate-600">
                    <span>"© 2025 Schemerr. All rights reserved."</span>
                    <span>"Made with ♥ by developers, for developers."</span>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn SocialLink(href: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            class="w-9 h-9 flex items-center justify-center rounded-lg border border-white/10 text-slate-400 hover:text-white hover:border-white/25 transition-colors"
        >
            {children()}
        </a>
    }
}
