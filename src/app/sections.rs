use leptos::{either::Either, prelude::*};

use super::{
    icons::{Glyph, Icon},
    section::{Reveal, Section},
};
use crate::content::SITE;

const CARD: &str = "p-6 rounded-2xl border border-white/10 bg-white/5";
const STAGGER_MS: u32 = 50;

#[component]
pub fn About() -> impl IntoView {
    let about = &SITE.about;
    view! {
        <Section id="about" title="About">
            <div class="grid md:grid-cols-3 gap-8 items-start">
                <Reveal key="about/bio" class="md:col-span-2 text-white/80 leading-relaxed">
                    {about
                        .paragraphs
                        .iter()
                        .enumerate()
                        .map(|(i, p)| {
                            let class = if i == 0 { "" } else { "mt-4" };
                            view! { <p class=class>{p.as_str()}</p> }
                        })
                        .collect_view()}
                </Reveal>
                <Reveal key="about/education" class=CARD>
                    <div class="text-sm text-white/70">"Education"</div>
                    <div class="mt-2 font-semibold">{about.education.degree.as_str()}</div>
                    <div class="text-white/70">
                        {format!("{}, {}", about.education.institution, about.education.period)}
                    </div>
                </Reveal>
            </div>
        </Section>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let theme = SITE.theme;
    view! {
        <Section id="experience" title="Experience">
            <div class="grid gap-6">
                {SITE
                    .experience
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! {
                            <Reveal
                                key=format!("experience/{i}")
                                delay_ms={i as u32 * STAGGER_MS}
                                class="p-6 rounded-2xl border border-white/10 bg-white/5 hover:bg-white/10 transition-colors"
                            >
                                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-2">
                                    <div>
                                        <div class=format!(
                                            "{} font-semibold",
                                            theme.accent_text(),
                                        )>{item.role.as_str()}</div>
                                        <div class="text-white text-lg">
                                            {item.organization.as_str()}
                                        </div>
                                    </div>
                                    <div class="text-white/60 text-sm">{item.period.as_str()}</div>
                                </div>
                                <p class="mt-3 text-white/80">{item.description.as_str()}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let theme = SITE.theme;
    view! {
        <Section id="projects" title="Projects">
            <div class="grid md:grid-cols-3 gap-6">
                {SITE
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        let card = view! {
                            <div class="flex items-center justify-between">
                                <h3 class="text-lg font-semibold text-white">{p.title.as_str()}</h3>
                                <span class=format!(
                                    "text-white/40 transition-colors {}",
                                    theme.group_hover_accent(),
                                )>
                                    <Icon glyph=Glyph::ExternalLink />
                                </span>
                            </div>
                            <p class="mt-3 text-white/80 text-sm leading-relaxed">
                                {p.description.as_str()}
                            </p>
                        };
                        let class = "group block p-6 rounded-2xl border border-white/10 bg-white/5 hover:bg-white/10 transition-all hover:-translate-y-0.5";
                        view! {
                            <Reveal key=format!("projects/{i}") delay_ms={i as u32 * STAGGER_MS}>
                                {if p.is_external() {
                                    Either::Left(
                                        view! {
                                            <a
                                                href=p.link.as_str()
                                                target="_blank"
                                                rel="noreferrer"
                                                class=class
                                            >
                                                {card}
                                            </a>
                                        },
                                    )
                                } else {
                                    Either::Right(
                                        view! {
                                            <a href=p.link.as_str() class=class>
                                                {card}
                                            </a>
                                        },
                                    )
                                }}
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let theme = SITE.theme;
    view! {
        <Section id="skills" title="Skills">
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {SITE
                    .skills
                    .iter()
                    .map(|group| {
                        view! {
                            <Reveal key=format!("skills/{}", group.title) class=CARD>
                                <div class=format!(
                                    "{} font-semibold",
                                    theme.accent_text(),
                                )>{group.title.as_str()}</div>
                                <div class="mt-3 flex flex-wrap gap-2">
                                    {group
                                        .items
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <span class=format!(
                                                    "px-3 py-1 rounded-full text-sm border {}",
                                                    theme.chip(),
                                                )>{skill.as_str()}</span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
