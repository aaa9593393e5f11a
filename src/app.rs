mod browser;
mod contact;
mod footer;
mod hero;
mod homepage;
mod icons;
mod navbar;
mod section;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

use crate::{
    contact::ContactError,
    content::SITE,
    navigation::{run_effects, Command, Dispatcher, Effect, MenuState},
    reveal::{RevealState, RevealTracker},
};
use browser::BrowserViewport;
use homepage::HomePage;

const SPLINE_VIEWER: &str = "https://unpkg.com/@splinetool/viewer@1.9.82/build/spline-viewer.js";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content=SITE.profile.summary.as_str() />
                <link rel="preconnect" href="https://rsms.me/" />
                <link rel="stylesheet" href="https://rsms.me/inter/inter.css" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="module" src=SPLINE_VIEWER></script>
                <MetaTags />
            </head>
            <body class="bg-black scroll-smooth">
                <App />
            </body>
        </html>
    }
}

/// Live vertical scroll offset of the window, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScrollOffset(Signal<f64>);

impl ScrollOffset {
    pub fn get(&self) -> f64 {
        self.0.get()
    }
}

/// Single entry point for user commands. Effects run against the browser in
/// the order the dispatcher emits them.
#[derive(Debug, Clone, Copy)]
pub struct Commands {
    dispatcher: StoredValue<Dispatcher>,
    menu: RwSignal<MenuState>,
}

impl Commands {
    fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: StoredValue::new(dispatcher),
            menu: RwSignal::new(MenuState::Closed),
        }
    }

    pub fn menu(&self) -> ReadSignal<MenuState> {
        self.menu.read_only()
    }

    pub fn send(&self, cmd: Command) {
        let menu = self.menu.get_untracked();
        let effects = self.dispatcher.with_value(|d| d.dispatch(menu, cmd));
        self.apply(effects);
    }

    pub fn submit_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), ContactError> {
        let menu = self.menu.get_untracked();
        let effects = self
            .dispatcher
            .with_value(|d| d.submit_contact(menu, name, email, message))?;
        self.apply(effects);
        Ok(())
    }

    fn apply(&self, effects: Vec<Effect>) {
        let menu = self.menu;
        run_effects(effects, &BrowserViewport, move |state| menu.set(state));
    }
}

/// Page-wide record of which blocks have played their entrance.
#[derive(Debug, Clone, Copy)]
pub struct Reveals(StoredValue<RevealTracker>);

impl Reveals {
    fn new() -> Self {
        Self(StoredValue::new(RevealTracker::new()))
    }

    pub fn is_seen(&self, key: &str) -> bool {
        self.0.with_value(|t| t.state(key) == RevealState::Seen)
    }

    pub fn observe(&self, key: &str, intersecting: bool) -> bool {
        self.0
            .try_update_value(|t| t.observe(key, intersecting))
            .unwrap_or(false)
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site = &*SITE;
    let (_, scroll_y) = use_window_scroll();
    provide_context(ScrollOffset(scroll_y));
    provide_context(Commands::new(Dispatcher::new(site.profile.email.as_str())));
    provide_context(Reveals::new());

    view! {
        <Title formatter=move |title| format!("{} - {title}", site.profile.name) />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
