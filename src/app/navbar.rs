use std::time::Duration;

use leptos::prelude::*;

use super::{
    browser::section_tops,
    icons::{Glyph, Icon},
    Commands, ScrollOffset,
};
use crate::{
    content::{NavItem, SectionId, SITE},
    navigation::{active_section, Command},
};

// fixed bar height plus breathing room, in px
const ACTIVE_LINE_OFFSET: f64 = 120.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let site = &*SITE;
    let theme = site.theme;
    let commands = expect_context::<Commands>();
    let scroll = expect_context::<ScrollOffset>();
    let menu = commands.menu();
    let is_open = Signal::derive(move || menu.get().is_open());

    let (active, set_active) = signal(None::<SectionId>);
    let ids = site
        .nav
        .iter()
        .map(|item| item.id.clone())
        .collect::<Vec<_>>();
    Effect::new(move |_| {
        let y = scroll.get();
        let tops = section_tops(&ids);
        let current = active_section(&tops, y, ACTIVE_LINE_OFFSET).cloned();
        if current != active.get_untracked() {
            set_active.set(current);
        }
    });

    let item_class = move |item: &'static NavItem| {
        move || {
            let is_active = active.with(|a| a.as_ref() == Some(&item.id));
            if is_active {
                format!("text-sm transition-colors {}", theme.accent_text())
            } else {
                format!("text-sm text-white/80 transition-colors {}", theme.accent_hover())
            }
        }
    };

    let connect = move || {
        view! {
            <a
                href=site.profile.linkedin.as_str()
                target="_blank"
                rel="noreferrer"
                class=format!(
                    "inline-flex items-center gap-2 w-max px-4 py-2 rounded-full text-sm font-semibold transition-colors {}",
                    theme.button(),
                )
            >
                <Icon glyph=Glyph::Linkedin />
                "Connect"
            </a>
        }
    };

    view! {
        <div class="fixed top-0 left-0 right-0 z-50">
            <div class="max-w-6xl mx-auto px-4">
                <div class="mt-4 backdrop-blur-xl bg-black/50 border border-white/10 rounded-2xl shadow-lg">
                    <nav class="flex items-center justify-between px-4 py-3">
                        <button
                            on:click=move |_| commands.send(Command::NavigateTo("home".into()))
                            class="flex items-center gap-2"
                        >
                            <div class=format!("w-8 h-8 rounded-full {}", theme.brand_dot()) />
                            <span class="text-white font-semibold tracking-wide">
                                {site.profile.name.as_str()}
                            </span>
                        </button>

                        <div class="hidden md:flex items-center gap-6">
                            {site
                                .nav
                                .iter()
                                .map(|item| {
                                    view! {
                                        <button
                                            on:click=move |_| {
                                                commands.send(Command::NavigateTo(item.id.clone()))
                                            }
                                            class=item_class(item)
                                        >
                                            {item.label.as_str()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                            {connect()}
                        </div>

                        <button
                            on:click=move |_| commands.send(Command::ToggleMenu)
                            class="md:hidden text-white"
                            aria-label="Toggle menu"
                            aria-expanded=move || is_open.get().to_string()
                        >
                            {move || {
                                let glyph = if is_open.get() { Glyph::Close } else { Glyph::Menu };
                                view! { <Icon glyph size=24 /> }
                            }}
                        </button>
                    </nav>

                    <AnimatedShow
                        when=is_open
                        show_class="menu-enter"
                        hide_class="menu-exit"
                        hide_delay=Duration::from_millis(200)
                    >
                        <div class="md:hidden overflow-hidden border-t border-white/10">
                            <div class="px-4 py-3 grid gap-2">
                                {site
                                    .nav
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <button
                                                on:click=move |_| {
                                                    commands.send(Command::SelectMenuItem(item.id.clone()))
                                                }
                                                class=format!(
                                                    "text-left text-white/90 py-2 {}",
                                                    theme.accent_hover(),
                                                )
                                            >
                                                {item.label.as_str()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                                {connect()}
                            </div>
                        </div>
                    </AnimatedShow>
                </div>
            </div>
        </div>
    }
}
