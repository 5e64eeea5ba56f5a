pub const HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const REST_TRANSFORM: &str = "translateY(0) scale(1)";

/// Entrance delay for the card at `index`, e.g. `0.3s`.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    format!("{:.1}s", index as f64 * step_secs)
}

/// `getBoundingClientRect()` of the clicked card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    /// A circle as large as the card's longest side, centred on the click.
    pub fn at_click(id: u64, rect: CardRect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            id,
            size,
            x: client_x - rect.left - size / 2.0,
            y: client_y - rect.top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {x}px; top: {y}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s ease-out; pointer-events: none;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

/// Searchable text of a tool card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl CardText {
    /// Case-insensitive substring match on title, description or tags.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        if query.is_empty() {
            return true;
        }
        let tags = self
            .tags
            .iter()
            .map(|t| t.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || tags.contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 0.1), "0.0s");
        assert_eq!(stagger_delay(3, 0.1), "0.3s");
        assert_eq!(stagger_delay(12, 0.1), "1.2s");
    }

    #[test]
    fn test_ripple_geometry() {
        let rect = CardRect {
            left: 100.0,
            top: 50.0,
            width: 300.0,
            height: 200.0,
        };
        let ripple = Ripple::at_click(7, rect, 250.0, 150.0);
        assert_eq!(ripple.size, 300.0);
        assert_eq!(ripple.x, 0.0);
        assert_eq!(ripple.y, -50.0);
        assert!(ripple.style().contains("width: 300px"));
        assert!(ripple.style().contains("top: -50px"));
    }

    #[test]
    fn test_card_search() {
        let card = CardText {
            title: "Ripgrep".to_string(),
            description: "Recursively search directories".to_string(),
            tags: vec!["CLI".to_string(), "Search Tools".to_string()],
        };
        assert!(card.matches(""));
        assert!(card.matches("RIP"));
        assert!(card.matches("directories"));
        assert!(card.matches("cli"));
        // tags are joined, so a query may straddle two of them
        assert!(card.matches("cli search"));
        assert!(!card.matches("editor"));
    }
}
