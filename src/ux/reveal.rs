/// Class added once an observed element has entered the viewport.
pub const REVEALED_CLASS: &str = "animate-in";

/// One-way visibility latch for an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    /// Feeds one batch of intersection entries. Returns `true` only on the
    /// batch that first reveals the element.
    pub fn observe(&mut self, intersecting: impl IntoIterator<Item = bool>) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = intersecting.into_iter().any(|i| i);
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// An `<img>` whose real source waits in `data-src` until it is first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    data_src: String,
    state: RevealState,
}

impl LazyImage {
    pub fn new(data_src: impl Into<String>) -> Self {
        Self {
            data_src: data_src.into(),
            state: RevealState::default(),
        }
    }

    /// The source to load, once. `None` means keep waiting or already loaded.
    pub fn observe(&mut self, intersecting: impl IntoIterator<Item = bool>) -> Option<&str> {
        if self.state.observe(intersecting) {
            Some(&self.data_src)
        } else {
            None
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_revealed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_way() {
        let mut state = RevealState::default();
        assert!(!state.observe([false]));
        assert!(!state.is_revealed());
        assert!(state.observe([false, true]));
        assert!(state.is_revealed());
        // leaving the viewport never hides it again
        assert!(!state.observe([false]));
        assert!(state.is_revealed());
    }

    #[test]
    fn test_lazy_image_loads_once() {
        let mut img = LazyImage::new("/img/cargo.webp");
        assert_eq!(img.observe([false]), None);
        assert_eq!(img.observe([true]), Some("/img/cargo.webp"));
        assert!(img.is_loaded());
        assert_eq!(img.observe([true]), None);
    }
}
