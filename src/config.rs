use serde::{Deserialize, Serialize};

/// Thresholds and timings shared by every page behaviour.
///
/// Distances are CSS pixels, durations are milliseconds unless the field name
/// says otherwise. Missing fields fall back to [`Default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub navbar_hide_after: f64,
    pub navbar_scrolled_after: f64,
    pub section_lead: f64,
    pub anchor_offset: f64,
    pub back_to_top_after: f64,
    pub mobile_breakpoint: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub copy_revert_ms: u64,
    pub toast_visible_ms: u64,
    pub toast_exit_ms: u64,
    pub ripple_ms: u64,
    pub card_stagger_secs: f64,
    pub dark_mode_key: String,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            navbar_hide_after: 100.0,
            navbar_scrolled_after: 50.0,
            section_lead: 100.0,
            anchor_offset: 80.0, // fixed navbar height
            back_to_top_after: 300.0,
            mobile_breakpoint: 768.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            copy_revert_ms: 2000,
            toast_visible_ms: 3000,
            toast_exit_ms: 300,
            ripple_ms: 600,
            card_stagger_secs: 0.1,
            dark_mode_key: "darkMode".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InteractionConfig::default();
        assert_eq!(config.navbar_hide_after, 100.0);
        assert_eq!(config.navbar_scrolled_after, 50.0);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.dark_mode_key, "darkMode");
        assert_eq!(config.copy_revert_ms, 2000);
        assert_eq!(config.toast_visible_ms, 3000);
    }

    #[test]
    fn test_partial_override() {
        let config: InteractionConfig =
            serde_json::from_str(r#"{ "navbar_hide_after": 250.0, "dark_mode_key": "theme" }"#)
                .expect("config should parse");
        assert_eq!(config.navbar_hide_after, 250.0);
        assert_eq!(config.dark_mode_key, "theme");
        // untouched fields keep their defaults
        assert_eq!(config.section_lead, 100.0);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }
}
