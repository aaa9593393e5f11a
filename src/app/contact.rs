use leptos::{html, prelude::*};

use super::{
    icons::{Glyph, Icon},
    section::{Reveal, Section},
    Commands,
};
use crate::content::SITE;

const FIELD: &str = "w-full px-4 py-2 rounded-md bg-black/60 border border-white/10 text-white placeholder-white/40 focus:outline-none focus:ring-2";

#[component]
pub fn Contact() -> impl IntoView {
    let site = &*SITE;
    let theme = site.theme;
    let commands = expect_context::<Commands>();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (name, email, message) = match (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) {
            (Some(n), Some(e), Some(m)) => (n.value(), e.value(), m.value()),
            _ => return,
        };
        match commands.submit_contact(&name, &email, &message) {
            Ok(()) => set_error.set(None),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let field_class = format!("{FIELD} {}", theme.focus_ring());
    let link_class = format!(
        "inline-flex items-center gap-2 text-white/90 transition-colors {}",
        theme.accent_hover()
    );

    view! {
        <Section id="contact" title="Contact" tint=true>
            <div class="grid md:grid-cols-2 gap-10">
                <Reveal key="contact/intro">
                    <p class="text-white/80">{site.contact_blurb.as_str()}</p>
                    <div class="mt-6 flex flex-col gap-3">
                        <a href=format!("mailto:{}", site.profile.email) class=link_class.clone()>
                            <Icon glyph=Glyph::Mail />
                            {site.profile.email.as_str()}
                        </a>
                        <a
                            href=site.profile.linkedin.as_str()
                            target="_blank"
                            rel="noreferrer"
                            class=link_class
                        >
                            <Icon glyph=Glyph::Linkedin />
                            "LinkedIn"
                        </a>
                    </div>
                </Reveal>

                <Reveal key="contact/form">
                    <form
                        on:submit=on_submit
                        class="p-6 rounded-2xl border border-white/10 bg-white/5"
                    >
                        <div class="grid gap-4">
                            <div>
                                <label for="contact-name" class="block text-sm text-white/70 mb-1">
                                    "Name"
                                </label>
                                <input
                                    node_ref=name_ref
                                    id="contact-name"
                                    name="name"
                                    required
                                    class=field_class.clone()
                                    placeholder="Your name"
                                />
                            </div>
                            <div>
                                <label for="contact-email" class="block text-sm text-white/70 mb-1">
                                    "Email"
                                </label>
                                <input
                                    node_ref=email_ref
                                    id="contact-email"
                                    type="email"
                                    name="email"
                                    required
                                    class=field_class.clone()
                                    placeholder="you@example.com"
                                />
                            </div>
                            <div>
                                <label
                                    for="contact-message"
                                    class="block text-sm text-white/70 mb-1"
                                >
                                    "Message"
                                </label>
                                <textarea
                                    node_ref=message_ref
                                    id="contact-message"
                                    name="message"
                                    rows="5"
                                    required
                                    class=field_class
                                    placeholder="Tell me about your project or opportunity"
                                ></textarea>
                            </div>
                            {move || {
                                error
                                    .get()
                                    .map(|e| view! { <p class="text-sm text-red-400">{e}</p> })
                            }}
                            <button
                                type="submit"
                                class=format!(
                                    "inline-flex items-center justify-center gap-2 font-semibold px-6 py-3 rounded-full transition-colors {}",
                                    theme.button(),
                                )
                            >
                                "Send Message"
                                <Icon glyph=Glyph::ArrowRight />
                            </button>
                        </div>
                    </form>
                </Reveal>
            </div>
        </Section>
    }
}
