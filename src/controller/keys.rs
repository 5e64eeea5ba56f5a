use super::menu::close_menu;
use super::{PageAction, PageEvent, PageState, Reactor};
use crate::config::InteractionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Top,
    Bottom,
    CloseMenu,
}

impl Shortcut {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "t" | "T" => Some(Self::Top),
            "b" | "B" => Some(Self::Bottom),
            "Escape" => Some(Self::CloseMenu),
            _ => None,
        }
    }
}

/// Whether a keystroke landed somewhere the user is typing.
pub fn is_editable_target(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || matches!(
            tag_name.to_ascii_uppercase().as_str(),
            "INPUT" | "TEXTAREA" | "SELECT"
        )
}

pub struct KeyboardReactor;

impl Reactor for KeyboardReactor {
    fn react(
        &self,
        event: &PageEvent,
        state: &mut PageState,
        _config: &InteractionConfig,
    ) -> Vec<PageAction> {
        let PageEvent::KeyDown {
            key,
            document_height,
        } = event
        else {
            return Vec::new();
        };
        match Shortcut::from_key(key) {
            Some(Shortcut::Top) => vec![PageAction::ScrollTo { top: 0.0 }],
            Some(Shortcut::Bottom) => vec![PageAction::ScrollTo {
                top: *document_height,
            }],
            Some(Shortcut::CloseMenu) => close_menu(state).into_iter().collect(),
            None => Vec::new(),
        }
    }
}
