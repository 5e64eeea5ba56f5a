mod keys;
mod menu;
mod scroll;
mod theme;

pub use keys::{is_editable_target, Shortcut};
pub use scroll::{progress_percent, reading_progress, ArticleBounds, ScrollSnapshot, SectionBounds};

use std::collections::HashMap;

use keys::KeyboardReactor;
use menu::{AnchorReactor, OutsideClickReactor, ResizeReactor, ToggleReactor};
use scroll::{
    ActiveSectionReactor, BackToTopReactor, NavbarReactor, ProgressReactor, ReadingProgressReactor,
};
use theme::DarkModeReactor;

use crate::config::InteractionConfig;

/// Something the browser told us about.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll(ScrollSnapshot),
    Resize { inner_width: f64 },
    KeyDown { key: String, document_height: f64 },
    DocumentClick { inside_menu: bool },
    MenuToggle,
    AnchorClick { target_top: Option<f64> },
    BackToTop,
    DarkModeToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Resize,
    KeyDown,
    DocumentClick,
    MenuToggle,
    AnchorClick,
    BackToTop,
    DarkModeToggle,
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Scroll(_) => EventKind::Scroll,
            Self::Resize { .. } => EventKind::Resize,
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::DocumentClick { .. } => EventKind::DocumentClick,
            Self::MenuToggle => EventKind::MenuToggle,
            Self::AnchorClick { .. } => EventKind::AnchorClick,
            Self::BackToTop => EventKind::BackToTop,
            Self::DarkModeToggle => EventKind::DarkModeToggle,
        }
    }
}

/// What the page should change in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    /// Progress bar width in percent, already clamped to `[0, 100]`.
    SetProgress(f64),
    /// Article reading indicator in percent; `None` when the page has no article.
    SetReadingProgress(Option<f64>),
    SetNavbarHidden(bool),
    SetNavbarScrolled(bool),
    SetActiveSection(Option<String>),
    SetBackToTopVisible(bool),
    SetMenuOpen(bool),
    /// Smooth scroll to an absolute vertical offset.
    ScrollTo { top: f64 },
    SetDarkMode(bool),
}

/// State that outlives a single event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub last_scroll_offset: f64,
    pub menu_open: bool,
    pub dark_mode: bool,
}

pub trait Reactor: Send + Sync {
    fn react(
        &self,
        event: &PageEvent,
        state: &mut PageState,
        config: &InteractionConfig,
    ) -> Vec<PageAction>;
}

pub struct PageController {
    config: InteractionConfig,
    state: PageState,
    reactors: HashMap<EventKind, Vec<Box<dyn Reactor>>>,
}

impl PageController {
    pub fn new(config: InteractionConfig) -> Self {
        let mut controller = Self {
            config,
            state: PageState::default(),
            reactors: HashMap::new(),
        };
        controller.initialize_scroll_reactors();
        controller.initialize_navigation_reactors();
        controller.register(EventKind::KeyDown, KeyboardReactor);
        controller.register(EventKind::DarkModeToggle, DarkModeReactor);
        controller
    }

    fn initialize_scroll_reactors(&mut self) {
        self.register(EventKind::Scroll, ProgressReactor);
        self.register(EventKind::Scroll, ReadingProgressReactor);
        self.register(EventKind::Scroll, NavbarReactor);
        self.register(EventKind::Scroll, ActiveSectionReactor);
        self.register(EventKind::Scroll, BackToTopReactor);
        self.register(EventKind::BackToTop, BackToTopReactor);
    }

    fn initialize_navigation_reactors(&mut self) {
        self.register(EventKind::MenuToggle, ToggleReactor);
        self.register(EventKind::DocumentClick, OutsideClickReactor);
        self.register(EventKind::Resize, ResizeReactor);
        self.register(EventKind::AnchorClick, AnchorReactor);
    }

    pub fn register(&mut self, kind: EventKind, reactor: impl Reactor + 'static) {
        self.reactors.entry(kind).or_default().push(Box::new(reactor));
    }

    /// Runs every reactor registered for the event's kind, in registration order.
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<PageAction> {
        let kind = event.kind();
        let Some(reactors) = self.reactors.get(&kind) else {
            return Vec::new();
        };
        let actions = reactors
            .iter()
            .flat_map(|r| r.react(&event, &mut self.state, &self.config))
            .collect::<Vec<_>>();
        log::trace!("{kind:?} -> {} action(s)", actions.len());
        actions
    }

    /// Seeds the dark mode flag from persisted storage.
    pub fn restore_dark_mode(&mut self, enabled: bool) -> PageAction {
        self.state.dark_mode = enabled;
        PageAction::SetDarkMode(enabled)
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(offset: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            offset,
            scroll_height: 3000.0,
            client_height: 1000.0,
            viewport_height: 1000.0,
            sections: vec![
                SectionBounds::new("intro", 0.0, 800.0),
                SectionBounds::new("tools", 800.0, 900.0),
                SectionBounds::new("downloads", 1700.0, 1300.0),
            ],
            article: None,
        }
    }

    fn find_progress(actions: &[PageAction]) -> Option<f64> {
        actions.iter().find_map(|a| match a {
            PageAction::SetProgress(p) => Some(*p),
            _ => None,
        })
    }

    fn find_hidden(actions: &[PageAction]) -> Option<bool> {
        actions.iter().find_map(|a| match a {
            PageAction::SetNavbarHidden(h) => Some(*h),
            _ => None,
        })
    }

    fn find_active(actions: &[PageAction]) -> Option<Option<String>> {
        actions.iter().find_map(|a| match a {
            PageAction::SetActiveSection(s) => Some(s.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_scroll_dispatch_runs_every_reactor() {
        let mut controller = PageController::default();
        let actions = controller.dispatch(PageEvent::Scroll(snapshot(0.0)));

        assert_eq!(find_progress(&actions), Some(0.0));
        assert_eq!(find_hidden(&actions), Some(false));
        assert!(actions.contains(&PageAction::SetNavbarScrolled(false)));
        assert!(actions.contains(&PageAction::SetBackToTopVisible(false)));
        assert_eq!(find_active(&actions), Some(Some("intro".to_string())));
    }

    #[test]
    fn test_progress_bounds() {
        let mut controller = PageController::default();

        let actions = controller.dispatch(PageEvent::Scroll(snapshot(2000.0)));
        assert_eq!(find_progress(&actions), Some(100.0));

        // overscroll past the end still reads exactly 100
        let actions = controller.dispatch(PageEvent::Scroll(snapshot(2600.0)));
        assert_eq!(find_progress(&actions), Some(100.0));
    }

    #[test]
    fn test_article_page_keeps_scroll_fraction() {
        let mut controller = PageController::default();
        let mut snap = snapshot(1000.0);
        snap.article = Some(ArticleBounds {
            top: 200.0,
            height: 2200.0,
        });
        let actions = controller.dispatch(PageEvent::Scroll(snap));

        assert_eq!(find_progress(&actions), Some(50.0));
        let progress_actions = actions
            .iter()
            .filter(|a| matches!(a, PageAction::SetProgress(_)))
            .count();
        assert_eq!(progress_actions, 1);
        assert!(actions
            .iter()
            .any(|a| matches!(a, PageAction::SetReadingProgress(Some(_)))));
    }

    #[test]
    fn test_navbar_hides_on_increasing_offsets() {
        let mut controller = PageController::default();
        let mut last = None;
        for offset in [20.0, 60.0, 90.0, 120.0, 400.0, 900.0] {
            last = find_hidden(&controller.dispatch(PageEvent::Scroll(snapshot(offset))));
        }
        assert_eq!(last, Some(true));
        assert_eq!(controller.state().last_scroll_offset, 900.0);
    }

    #[test]
    fn test_navbar_shows_when_scrolling_back_up() {
        let mut controller = PageController::default();
        for offset in [200.0, 400.0, 600.0] {
            controller.dispatch(PageEvent::Scroll(snapshot(offset)));
        }
        let mut last = None;
        for offset in [300.0, 150.0, 80.0] {
            last = find_hidden(&controller.dispatch(PageEvent::Scroll(snapshot(offset))));
        }
        assert_eq!(last, Some(false));
    }

    #[test]
    fn test_exactly_one_active_section() {
        let mut controller = PageController::default();
        let actions = controller.dispatch(PageEvent::Scroll(snapshot(1000.0)));
        let active = actions
            .iter()
            .filter(|a| matches!(a, PageAction::SetActiveSection(Some(_))))
            .count();
        assert_eq!(active, 1);
        assert_eq!(find_active(&actions), Some(Some("tools".to_string())));
    }

    #[test]
    fn test_menu_shared_toggle() {
        let mut controller = PageController::default();
        assert_eq!(
            controller.dispatch(PageEvent::MenuToggle),
            vec![PageAction::SetMenuOpen(true)]
        );
        // clicking inside the menu keeps it open
        assert!(controller
            .dispatch(PageEvent::DocumentClick { inside_menu: true })
            .is_empty());
        assert!(controller.state().menu_open);

        assert_eq!(
            controller.dispatch(PageEvent::KeyDown {
                key: "Escape".to_string(),
                document_height: 3000.0,
            }),
            vec![PageAction::SetMenuOpen(false)]
        );
        assert!(!controller.state().menu_open);
    }

    #[test]
    fn test_anchor_click_closes_menu() {
        let mut controller = PageController::default();
        controller.dispatch(PageEvent::MenuToggle);
        let actions = controller.dispatch(PageEvent::AnchorClick {
            target_top: Some(900.0),
        });
        assert_eq!(
            actions,
            vec![
                PageAction::ScrollTo { top: 820.0 },
                PageAction::SetMenuOpen(false)
            ]
        );
    }

    #[test]
    fn test_dark_mode_restore_then_toggle() {
        let mut controller = PageController::default();
        assert_eq!(controller.restore_dark_mode(true), PageAction::SetDarkMode(true));
        assert_eq!(
            controller.dispatch(PageEvent::DarkModeToggle),
            vec![PageAction::SetDarkMode(false)]
        );
        assert!(!controller.state().dark_mode);
    }

    #[test]
    fn test_custom_reactor_registration() {
        struct Echo;
        impl Reactor for Echo {
            fn react(
                &self,
                _event: &PageEvent,
                _state: &mut PageState,
                _config: &InteractionConfig,
            ) -> Vec<PageAction> {
                vec![PageAction::ScrollTo { top: 42.0 }]
            }
        }

        let mut controller = PageController::default();
        controller.register(EventKind::Resize, Echo);
        let actions = controller.dispatch(PageEvent::Resize { inner_width: 320.0 });
        // built-in resize reactor emits nothing for narrow windows
        assert_eq!(actions, vec![PageAction::ScrollTo { top: 42.0 }]);
    }
}
