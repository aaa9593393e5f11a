use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use super::Reveals;

const HIDDEN: &str = "opacity-0 translate-y-3";
const SHOWN: &str = "opacity-100 translate-y-0";

/// Titled, anchorable page section.
#[component]
pub fn Section(
    id: &'static str,
    title: &'static str,
    #[prop(optional)] tint: bool,
    children: Children,
) -> impl IntoView {
    let bg = if tint {
        "bg-black bg-gradient-to-b from-black to-black/95"
    } else {
        "bg-black"
    };
    view! {
        <section id=id class=format!("{bg} text-white py-20 scroll-mt-24")>
            <div class="max-w-6xl mx-auto px-6">
                <Reveal key=format!("{id}/title") root_margin="-100px">
                    <h2 class="text-3xl md:text-4xl font-bold">{title}</h2>
                </Reveal>
                <div class="mt-8">{children()}</div>
            </div>
        </section>
    }
}

/// Fades and lifts its children the first time they scroll into view.
///
/// `key` must be unique on the page; it identifies the block to the shared
/// [`Reveals`] tracker, which never lets a block animate twice.
#[component]
pub fn Reveal(
    #[prop(into)] key: String,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] class: &'static str,
    #[prop(default = "0px")] root_margin: &'static str,
    children: Children,
) -> impl IntoView {
    let reveals = expect_context::<Reveals>();
    let target = NodeRef::<html::Div>::new();
    // a remounted block that already played stays visible
    let (revealed, set_revealed) = signal(reveals.is_seen(&key));

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries.iter().any(|e| e.is_intersecting());
            if reveals.observe(&key, intersecting) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().root_margin(root_margin),
    );

    view! {
        <div
            node_ref=target
            class=move || {
                format!(
                    "{class} transition-all duration-700 ease-out {}",
                    if revealed.get() { SHOWN } else { HIDDEN },
                )
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
