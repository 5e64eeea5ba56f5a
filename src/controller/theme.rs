use super::{PageAction, PageEvent, PageState, Reactor};
use crate::config::InteractionConfig;

pub struct DarkModeReactor;

impl Reactor for DarkModeReactor {
    fn react(
        &self,
        event: &PageEvent,
        state: &mut PageState,
        _config: &InteractionConfig,
    ) -> Vec<PageAction> {
        if !matches!(event, PageEvent::DarkModeToggle) {
            return Vec::new();
        }
        state.dark_mode = !state.dark_mode;
        vec![PageAction::SetDarkMode(state.dark_mode)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_flag() {
        let config = InteractionConfig::default();
        let mut state = PageState::default();
        assert_eq!(
            DarkModeReactor.react(&PageEvent::DarkModeToggle, &mut state, &config),
            vec![PageAction::SetDarkMode(true)]
        );
        assert!(state.dark_mode);
        assert!(DarkModeReactor
            .react(&PageEvent::MenuToggle, &mut state, &config)
            .is_empty());
        assert!(state.dark_mode);
    }
}
