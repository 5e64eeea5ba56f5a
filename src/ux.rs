//! Self-contained helpers behind the page's small UX affordances.

pub mod card;
pub mod copy;
pub mod perf;
pub mod reveal;
pub mod share;
pub mod toast;
pub mod validate;
