use super::{PageAction, PageEvent, PageState, Reactor};
use crate::config::InteractionConfig;

/// Closes the mobile menu if it is open.
pub(super) fn close_menu(state: &mut PageState) -> Option<PageAction> {
    if !state.menu_open {
        return None;
    }
    state.menu_open = false;
    Some(PageAction::SetMenuOpen(false))
}

/// The hamburger button; menu and button share one open flag.
pub struct ToggleReactor;

impl Reactor for ToggleReactor {
    fn react(
        &self,
        event: &PageEvent,
        state: &mut PageState,
        _config: &InteractionConfig,
    ) -> Vec<PageAction> {
        if !matches!(event, PageEvent::MenuToggle) {
            return Vec::new();
        }
        state.menu_open = !state.menu_open;
        vec![PageAction::SetMenuOpen(state.menu_open)]
    }
}

pub struct OutsideClickReactor;

impl Reactor for OutsideClickReactor {
    fn react(
        &self,
        event: &PageEvent,
        state: &mut PageState,
        _config: &InteractionConfig,
    ) -> Vec<PageAction> {
        match event {
            PageEvent::DocumentClick { inside_menu: false } => {
                close_menu(state).into_iter().collect()
            }
            _ => Vec::new(),
        }
    }
}

pub struct ResizeReactor;

impl Reactor for ResizeReactor {
    fn react(
        &self,
        event: &PageEvent,
        state: &mut PageState,
        config: &InteractionConfig,
    ) -> Vec<PageAction> {
        match event {
            PageEvent::Resize { inner_width } if *inner_width > config.mobile_breakpoint => {
                close_menu(state).into_iter().collect()
            }
            _ => Vec::new(),
        }
    }
}

/// In-page `#anchor` links: scroll below the fixed navbar and fold the menu away.
pub struct AnchorReactor;

impl Reactor for AnchorReactor {
    fn react(
        &self,
        event: &PageEvent,
        state: &mut PageState,
        config: &InteractionConfig,
    ) -> Vec<PageAction> {
        let PageEvent::AnchorClick {
            target_top: Some(top),
        } = event
        else {
            return Vec::new();
        };
        let mut actions = vec![PageAction::ScrollTo {
            top: top - config.anchor_offset,
        }];
        actions.extend(close_menu(state));
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_state() -> PageState {
        PageState {
            menu_open: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_flips() {
        let config = InteractionConfig::default();
        let mut state = PageState::default();
        assert_eq!(
            ToggleReactor.react(&PageEvent::MenuToggle, &mut state, &config),
            vec![PageAction::SetMenuOpen(true)]
        );
        assert_eq!(
            ToggleReactor.react(&PageEvent::MenuToggle, &mut state, &config),
            vec![PageAction::SetMenuOpen(false)]
        );
    }

    #[test]
    fn test_outside_click() {
        let config = InteractionConfig::default();

        let mut state = open_state();
        let inside = PageEvent::DocumentClick { inside_menu: true };
        assert!(OutsideClickReactor.react(&inside, &mut state, &config).is_empty());
        assert!(state.menu_open);

        let outside = PageEvent::DocumentClick { inside_menu: false };
        assert_eq!(
            OutsideClickReactor.react(&outside, &mut state, &config),
            vec![PageAction::SetMenuOpen(false)]
        );
        // already closed, nothing to do
        assert!(OutsideClickReactor.react(&outside, &mut state, &config).is_empty());
    }

    #[test]
    fn test_resize_breakpoint() {
        let config = InteractionConfig::default();
        let mut state = open_state();

        let at_breakpoint = PageEvent::Resize { inner_width: 768.0 };
        assert!(ResizeReactor.react(&at_breakpoint, &mut state, &config).is_empty());
        assert!(state.menu_open);

        let wide = PageEvent::Resize { inner_width: 1024.0 };
        assert_eq!(
            ResizeReactor.react(&wide, &mut state, &config),
            vec![PageAction::SetMenuOpen(false)]
        );
    }

    #[test]
    fn test_anchor_without_target() {
        let config = InteractionConfig::default();
        let mut state = open_state();
        let missing = PageEvent::AnchorClick { target_top: None };
        assert!(AnchorReactor.react(&missing, &mut state, &config).is_empty());
        assert!(state.menu_open);
    }

    #[test]
    fn test_anchor_with_closed_menu() {
        let config = InteractionConfig::default();
        let mut state = PageState::default();
        let click = PageEvent::AnchorClick {
            target_top: Some(40.0),
        };
        assert_eq!(
            AnchorReactor.react(&click, &mut state, &config),
            vec![PageAction::ScrollTo { top: -40.0 }]
        );
    }
}
