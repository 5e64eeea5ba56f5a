use super::{PageAction, PageEvent, PageState, Reactor};
use crate::config::InteractionConfig;

/// Layout of a `section[id]` as measured at scroll time.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, offset: f64, lead: f64) -> bool {
        let start = self.top - lead;
        offset >= start && offset < start + self.height
    }
}

/// The long-form article region, when the page has one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleBounds {
    pub top: f64,
    pub height: f64,
}

/// Everything the scroll reactors need, read fresh from the DOM on each event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: f64,
    /// `documentElement.scrollHeight`
    pub scroll_height: f64,
    /// `documentElement.clientHeight`
    pub client_height: f64,
    /// `window.innerHeight`
    pub viewport_height: f64,
    pub sections: Vec<SectionBounds>,
    pub article: Option<ArticleBounds>,
}

/// Scroll position as a percentage of the scrollable distance, clamped to `[0, 100]`.
///
/// A document that fits in the viewport has nothing to scroll and reads 0.
pub fn progress_percent(offset: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

/// How far through the article the reader is, in `[0, 1]`.
pub fn reading_progress(offset: f64, article: ArticleBounds, viewport_height: f64) -> f64 {
    let readable = article.height - viewport_height;
    if readable <= 0.0 {
        return if offset >= article.top { 1.0 } else { 0.0 };
    }
    ((offset - article.top) / readable).clamp(0.0, 1.0)
}

/// Last section in document order whose lead-adjusted span holds `offset`.
pub(super) fn active_section(
    sections: &[SectionBounds],
    offset: f64,
    lead: f64,
) -> Option<String> {
    sections
        .iter()
        .rev()
        .find(|s| !s.id.is_empty() && s.contains(offset, lead))
        .map(|s| s.id.clone())
}

pub struct ProgressReactor;

impl Reactor for ProgressReactor {
    fn react(
        &self,
        event: &PageEvent,
        _state: &mut PageState,
        _config: &InteractionConfig,
    ) -> Vec<PageAction> {
        let PageEvent::Scroll(snap) = event else {
            return Vec::new();
        };
        vec![PageAction::SetProgress(progress_percent(
            snap.offset,
            snap.scroll_height,
            snap.client_height,
        ))]
    }
}

/// Drives the article indicator; leaves the page progress bar alone.
pub struct ReadingProgressReactor;

impl Reactor for ReadingProgressReactor {
    fn react(
        &self,
        event: &PageEvent,
        _state: &mut PageState,
        _config: &InteractionConfig,
    ) -> Vec<PageAction> {
        let PageEvent::Scroll(snap) = event else {
            return Vec::new();
        };
        let percent = snap
            .article
            .map(|article| reading_progress(snap.offset, article, snap.viewport_height) * 100.0);
        vec![PageAction::SetReadingProgress(percent)]
    }
}

pub struct NavbarReactor;

impl Reactor for NavbarReactor {
    fn react(
        &self,
        event: &PageEvent,
        state: &mut PageState,
        config: &InteractionConfig,
    ) -> Vec<PageAction> {
        let PageEvent::Scroll(snap) = event else {
            return Vec::new();
        };
        let offset = snap.offset;
        let hidden = offset > state.last_scroll_offset && offset > config.navbar_hide_after;
        state.last_scroll_offset = offset;
        vec![
            PageAction::SetNavbarScrolled(offset > config.navbar_scrolled_after),
            PageAction::SetNavbarHidden(hidden),
        ]
    }
}

pub struct ActiveSectionReactor;

impl Reactor for ActiveSectionReactor {
    fn react(
        &self,
        event: &PageEvent,
        _state: &mut PageState,
        config: &InteractionConfig,
    ) -> Vec<PageAction> {
        let PageEvent::Scroll(snap) = event else {
            return Vec::new();
        };
        vec![PageAction::SetActiveSection(active_section(
            &snap.sections,
            snap.offset,
            config.section_lead,
        ))]
    }
}

/// Shows the back-to-top button past a threshold and handles its click.
pub struct BackToTopReactor;

impl Reactor for BackToTopReactor {
    fn react(
        &self,
        event: &PageEvent,
        _state: &mut PageState,
        config: &InteractionConfig,
    ) -> Vec<PageAction> {
        match event {
            PageEvent::Scroll(snap) => vec![PageAction::SetBackToTopVisible(
                snap.offset > config.back_to_top_after,
            )],
            PageEvent::BackToTop => vec![PageAction::ScrollTo { top: 0.0 }],
            _ => Vec::new(),
        }
    }
}
