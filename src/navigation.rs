use crate::{
    contact::{mailto_link, ContactError, ContactForm},
    content::SectionId,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// User intent, produced by click and submit handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Jump to a section from the desktop bar or an in-page button.
    NavigateTo(SectionId),
    /// Jump to a section from the mobile menu.
    SelectMenuItem(SectionId),
    ToggleMenu,
    SubmitContact(ContactForm),
}

/// Side effect to run at the browser boundary, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetMenu(MenuState),
    ScrollTo(SectionId),
    OpenUrl(String),
}

/// Browser surface the effects are executed against.
pub trait Viewport {
    /// Smooth-scrolls the anchor with this id to the top of the viewport.
    /// Returns `false` without scrolling when no such anchor is mounted.
    fn scroll_to_anchor(&self, id: &SectionId) -> bool;

    /// Points the current browsing context at `url`.
    fn open_url(&self, url: &str);
}

/// Turns commands into effects. Holds no state of its own besides the
/// address contact mail goes to.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    recipient: String,
}

impl Dispatcher {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn dispatch(&self, menu: MenuState, cmd: Command) -> Vec<Effect> {
        match cmd {
            Command::NavigateTo(id) => {
                log::debug!("navigate to #{id}");
                vec![Effect::ScrollTo(id)]
            }
            Command::SelectMenuItem(id) => {
                log::debug!("menu selected #{id}");
                // collapse first so the closing menu doesn't fight the scroll
                vec![Effect::SetMenu(MenuState::Closed), Effect::ScrollTo(id)]
            }
            Command::ToggleMenu => vec![Effect::SetMenu(menu.toggled())],
            Command::SubmitContact(form) => {
                log::debug!("composing contact mail");
                vec![Effect::OpenUrl(mailto_link(&self.recipient, &form))]
            }
        }
    }

    /// Validates raw form fields and dispatches the submit. Invalid input
    /// produces no effects.
    pub fn submit_contact(
        &self,
        menu: MenuState,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<Vec<Effect>, ContactError> {
        let form = ContactForm::new(name, email, message).inspect_err(|e| {
            log::warn!("contact form rejected: {e}");
        })?;
        Ok(self.dispatch(menu, Command::SubmitContact(form)))
    }
}

pub fn run_effects<V, F>(effects: Vec<Effect>, viewport: &V, mut set_menu: F)
where
    V: Viewport + ?Sized,
    F: FnMut(MenuState),
{
    for effect in effects {
        match effect {
            Effect::SetMenu(state) => set_menu(state),
            Effect::ScrollTo(id) => {
                if !viewport.scroll_to_anchor(&id) {
                    log::debug!("no anchor #{id} in document, ignoring");
                }
            }
            Effect::OpenUrl(url) => viewport.open_url(&url),
        }
    }
}

/// Picks the section the reader is in: the last one whose top edge is at or
/// above `scroll_y + offset`. `tops` must be in document order. Falls back to
/// the first section above the fold.
pub fn active_section(
    tops: &[(SectionId, f64)],
    scroll_y: f64,
    offset: f64,
) -> Option<&SectionId> {
    let line = scroll_y + offset;
    tops.iter()
        .take_while(|(_, top)| *top <= line)
        .last()
        .or_else(|| tops.first())
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Menu(MenuState),
        Scroll(String),
        Open(String),
    }

    struct FakeViewport {
        anchors: Vec<&'static str>,
        calls: RefCell<Vec<Call>>,
        scroll_y: RefCell<f64>,
    }

    impl FakeViewport {
        fn new(anchors: Vec<&'static str>) -> Self {
            Self {
                anchors,
                calls: RefCell::new(Vec::new()),
                scroll_y: RefCell::new(0.0),
            }
        }

        fn top_of(&self, id: &str) -> Option<f64> {
            self.anchors
                .iter()
                .position(|a| *a == id)
                .map(|i| i as f64 * 800.0)
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_to_anchor(&self, id: &SectionId) -> bool {
            match self.top_of(id.as_str()) {
                Some(top) => {
                    *self.scroll_y.borrow_mut() = top;
                    self.calls.borrow_mut().push(Call::Scroll(id.to_string()));
                    true
                }
                None => false,
            }
        }

        fn open_url(&self, url: &str) {
            self.calls.borrow_mut().push(Call::Open(url.to_string()));
        }
    }

    fn run(viewport: &FakeViewport, menu: &mut MenuState, effects: Vec<Effect>) {
        run_effects(effects, viewport, |state| {
            *menu = state;
            viewport.calls.borrow_mut().push(Call::Menu(state));
        });
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for start in [MenuState::Open, MenuState::Closed] {
            assert_eq!(start.toggled().toggled(), start);
            assert_ne!(start.toggled(), start);
        }
    }

    #[test]
    fn test_toggle_command_round_trip() {
        let dispatcher = Dispatcher::new("me@example.com");
        let viewport = FakeViewport::new(vec![]);
        let mut menu = MenuState::Closed;
        let effects = dispatcher.dispatch(menu, Command::ToggleMenu);
        run(&viewport, &mut menu, effects);
        assert!(menu.is_open());
        let effects = dispatcher.dispatch(menu, Command::ToggleMenu);
        run(&viewport, &mut menu, effects);
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_navigate_scrolls_to_present_anchor() {
        let dispatcher = Dispatcher::new("me@example.com");
        let viewport = FakeViewport::new(vec!["home", "about", "projects"]);
        let mut menu = MenuState::Closed;
        let effects = dispatcher.dispatch(menu, Command::NavigateTo("projects".into()));
        run(&viewport, &mut menu, effects);
        assert_eq!(*viewport.scroll_y.borrow(), 1600.0);
        assert_eq!(
            *viewport.calls.borrow(),
            vec![Call::Scroll("projects".to_string())]
        );
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let dispatcher = Dispatcher::new("me@example.com");
        let viewport = FakeViewport::new(vec!["home"]);
        *viewport.scroll_y.borrow_mut() = 120.0;
        let mut menu = MenuState::Closed;
        let effects = dispatcher.dispatch(menu, Command::NavigateTo("nowhere".into()));
        run(&viewport, &mut menu, effects);
        assert_eq!(*viewport.scroll_y.borrow(), 120.0);
        assert!(viewport.calls.borrow().is_empty());
    }

    #[test]
    fn test_menu_item_closes_before_scrolling() {
        let dispatcher = Dispatcher::new("me@example.com");
        let viewport = FakeViewport::new(vec!["home", "skills"]);
        let mut menu = MenuState::Open;
        let effects = dispatcher.dispatch(menu, Command::SelectMenuItem("skills".into()));
        assert_eq!(
            effects,
            vec![
                Effect::SetMenu(MenuState::Closed),
                Effect::ScrollTo("skills".into())
            ]
        );
        run(&viewport, &mut menu, effects);
        assert_eq!(menu, MenuState::Closed);
        assert_eq!(
            *viewport.calls.borrow(),
            vec![
                Call::Menu(MenuState::Closed),
                Call::Scroll("skills".to_string())
            ]
        );
    }

    #[test]
    fn test_menu_item_with_missing_anchor_still_closes() {
        let dispatcher = Dispatcher::new("me@example.com");
        let viewport = FakeViewport::new(vec!["home"]);
        let mut menu = MenuState::Open;
        let effects = dispatcher.dispatch(menu, Command::SelectMenuItem("gone".into()));
        run(&viewport, &mut menu, effects);
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_submit_opens_mailto() {
        let dispatcher = Dispatcher::new("me@example.com");
        let viewport = FakeViewport::new(vec![]);
        let mut menu = MenuState::Closed;
        let effects = dispatcher
            .submit_contact(menu, "Ada", "ada@example.com", "Hello")
            .unwrap();
        run(&viewport, &mut menu, effects);
        let calls = viewport.calls.borrow();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            Call::Open(url) => {
                assert!(url.starts_with("mailto:me@example.com?subject=Portfolio%20Inquiry"))
            }
            other => panic!("expected mail link, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_with_empty_field_opens_nothing() {
        let dispatcher = Dispatcher::new("me@example.com");
        for (name, email, message) in [
            ("", "ada@example.com", "Hello"),
            ("Ada", "", "Hello"),
            ("Ada", "ada@example.com", ""),
        ] {
            let res = dispatcher.submit_contact(MenuState::Closed, name, email, message);
            assert!(matches!(res, Err(ContactError::MissingField(_))));
        }
    }

    #[test]
    fn test_active_section() {
        let tops = vec![
            (SectionId::from("home"), 0.0),
            (SectionId::from("about"), 900.0),
            (SectionId::from("experience"), 1600.0),
        ];
        let at = |y| active_section(&tops, y, 120.0).map(SectionId::as_str);
        assert_eq!(at(0.0), Some("home"));
        assert_eq!(at(779.0), Some("home"));
        assert_eq!(at(780.0), Some("about"));
        assert_eq!(at(5000.0), Some("experience"));
        assert_eq!(active_section(&[], 10.0, 0.0), None);

        // page scrolled before the first section's top still highlights it
        let offset_tops = vec![(SectionId::from("about"), 500.0)];
        assert_eq!(
            active_section(&offset_tops, 0.0, 0.0).map(SectionId::as_str),
            Some("about")
        );
    }
}
