use chrono::DateTime;
use leptos::prelude::*;

use super::share::ShareButtons;

fn build_date() -> String {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <ShareButtons />
            <p class="footer-note">
                "Press " <kbd>"T"</kbd> " for top, " <kbd>"B"</kbd> " for bottom, "
                <kbd>"Esc"</kbd> " to close the menu."
            </p>
            <p class="footer-note">"Built " {build_date()}</p>
        </footer>
    }
}
