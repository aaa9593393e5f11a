use leptos::prelude::*;

use super::{
    icons::{Glyph, Icon},
    Commands, ScrollOffset,
};
use crate::{content::SITE, navigation::Command, parallax::HeroParallax};

const ENTER: &str = "transition-all duration-700 ease-out";

fn stage(entered: bool) -> &'static str {
    if entered {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-3"
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let site = &*SITE;
    let profile = &site.profile;
    let theme = site.theme;
    let commands = expect_context::<Commands>();
    let scroll = expect_context::<ScrollOffset>();
    let parallax = HeroParallax::default();

    // flip after the first paint so the CSS transitions have a start state
    let (entered, set_entered) = signal(false);
    Effect::new(move |_| request_animation_frame(move || set_entered.set(true)));

    view! {
        <section id="home" class="relative min-h-[90vh] w-full bg-black text-white overflow-hidden">
            <div class="absolute inset-0">
                <spline-viewer url=profile.scene_url.as_str() class="block w-full h-full"></spline-viewer>
            </div>
            {theme
                .has_backdrop()
                .then(|| {
                    view! {
                        <div class="absolute inset-0 pointer-events-none">
                            <div class="absolute -top-24 -left-24 w-96 h-96 rounded-full bg-violet-600/30 blur-3xl animate-pulse" />
                            <div class="absolute top-1/3 -right-24 w-96 h-96 rounded-full bg-cyan-500/20 blur-3xl animate-pulse" />
                        </div>
                    }
                })}
            <div class="absolute inset-0 bg-gradient-to-b from-black/60 via-black/60 to-black/80 pointer-events-none" />

            <div
                class="relative z-10 max-w-6xl mx-auto px-6 pt-40 pb-24"
                style:transform=move || parallax.transform(scroll.get())
                style:opacity=move || parallax.opacity(scroll.get()).to_string()
            >
                <p
                    class=move || {
                        format!(
                            "{} font-semibold tracking-wide {ENTER} {}",
                            theme.accent_text(),
                            stage(entered.get()),
                        )
                    }
                    style="transition-delay: 100ms"
                >
                    {profile.tagline.as_str()}
                </p>
                <h1
                    class=move || {
                        format!(
                            "mt-3 text-4xl sm:text-5xl md:text-6xl font-extrabold leading-tight {} {ENTER} {}",
                            theme.headline(),
                            stage(entered.get()),
                        )
                    }
                    style="transition-delay: 200ms"
                >
                    {profile.headline.as_str()}
                </h1>
                <p
                    class=move || format!("mt-6 max-w-2xl text-white/80 {ENTER} {}", stage(entered.get()))
                    style="transition-delay: 300ms"
                >
                    {profile.summary.as_str()}
                </p>
                <div
                    class=move || {
                        format!("mt-8 flex flex-wrap items-center gap-4 {ENTER} {}", stage(entered.get()))
                    }
                    style="transition-delay: 400ms"
                >
                    <button
                        on:click=move |_| commands.send(Command::NavigateTo("projects".into()))
                        class=format!(
                            "inline-flex items-center gap-2 font-semibold px-6 py-3 rounded-full transition-colors {}",
                            theme.button(),
                        )
                    >
                        "View My Work"
                        <Icon glyph=Glyph::ArrowRight />
                    </button>
                    <a
                        href=profile.linkedin.as_str()
                        target="_blank"
                        rel="noreferrer"
                        class=format!("inline-flex items-center gap-2 text-white {}", theme.accent_hover())
                    >
                        <Icon glyph=Glyph::Linkedin />
                        "LinkedIn"
                    </a>
                </div>
                <div
                    class=move || {
                        format!("mt-24 flex items-center gap-2 text-white/70 {ENTER} {}", stage(entered.get()))
                    }
                    style="transition-delay: 600ms"
                >
                    <Icon glyph=Glyph::ArrowDown class="animate-bounce" />
                    <span>"Scroll to explore"</span>
                </div>
            </div>
        </section>
    }
}
