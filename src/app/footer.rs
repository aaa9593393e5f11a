use chrono::Datelike;
use leptos::prelude::*;

use crate::content::SITE;

#[component]
pub fn Footer() -> impl IntoView {
    let site = &*SITE;
    let year = chrono::Utc::now().year();
    let hover = site.theme.accent_hover();
    view! {
        <footer class="bg-black border-t border-white/10">
            <div class="max-w-6xl mx-auto px-6 py-10 flex flex-col md:flex-row items-center justify-between gap-4 text-white/70 text-sm">
                <div>{format!("© {year} {}. All rights reserved.", site.profile.name)}</div>
                <div class="flex items-center gap-4">
                    <a href=format!("mailto:{}", site.profile.email) class=hover>
                        "Email"
                    </a>
                    <a
                        href=site.profile.linkedin.as_str()
                        target="_blank"
                        rel="noreferrer"
                        class=hover
                    >
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </footer>
    }
}
