use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use crate::config::InteractionConfig;
use crate::controller::{PageAction, PageController, PageEvent};

/// Reactive mirror of everything the controller can change on the page.
#[derive(Debug, Clone, Copy)]
pub struct PageSignals {
    pub progress: RwSignal<f64>,
    pub reading_progress: RwSignal<Option<f64>>,
    pub navbar_hidden: RwSignal<bool>,
    pub navbar_scrolled: RwSignal<bool>,
    pub active_section: RwSignal<Option<String>>,
    pub back_to_top_visible: RwSignal<bool>,
    pub menu_open: RwSignal<bool>,
    pub dark_mode: RwSignal<bool>,
}

impl PageSignals {
    fn new() -> Self {
        Self {
            progress: RwSignal::new(0.0),
            reading_progress: RwSignal::new(None),
            navbar_hidden: RwSignal::new(false),
            navbar_scrolled: RwSignal::new(false),
            active_section: RwSignal::new(None),
            back_to_top_visible: RwSignal::new(false),
            menu_open: RwSignal::new(false),
            dark_mode: RwSignal::new(false),
        }
    }
}

/// Handle to the page controller, shared through context.
#[derive(Clone, Copy)]
pub struct PageHandle {
    controller: StoredValue<Arc<Mutex<PageController>>>,
    pub signals: PageSignals,
}

impl PageHandle {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            controller: StoredValue::new(Arc::new(Mutex::new(PageController::new(config)))),
            signals: PageSignals::new(),
        }
    }

    pub fn dispatch(&self, event: PageEvent) {
        let actions = self.controller.with_value(|c| {
            c.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .dispatch(event)
        });
        for action in actions {
            self.apply(action);
        }
    }

    pub fn restore_dark_mode(&self, enabled: bool) {
        let action = self.controller.with_value(|c| {
            c.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .restore_dark_mode(enabled)
        });
        self.apply(action);
    }

    pub fn config(&self) -> InteractionConfig {
        self.controller.with_value(|c| {
            c.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .config()
                .clone()
        })
    }

    fn apply(&self, action: PageAction) {
        let s = &self.signals;
        match action {
            PageAction::SetProgress(p) => s.progress.set(p),
            PageAction::SetReadingProgress(p) => s.reading_progress.set(p),
            PageAction::SetNavbarHidden(h) => s.navbar_hidden.set(h),
            PageAction::SetNavbarScrolled(v) => s.navbar_scrolled.set(v),
            PageAction::SetActiveSection(id) => {
                if s.active_section.get_untracked() != id {
                    s.active_section.set(id);
                }
            }
            PageAction::SetBackToTopVisible(v) => s.back_to_top_visible.set(v),
            PageAction::SetMenuOpen(open) => s.menu_open.set(open),
            PageAction::ScrollTo { top } => smooth_scroll_to(top),
            PageAction::SetDarkMode(on) => s.dark_mode.set(on),
        }
    }
}

pub fn provide_page(config: InteractionConfig) -> PageHandle {
    let page = PageHandle::new(config);
    provide_context(page);
    page
}

pub fn use_page() -> PageHandle {
    expect_context::<PageHandle>()
}

/// Vertical offset of the element with `id`, if it is on the page.
pub fn anchor_top(id: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        document()
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| f64::from(el.offset_top()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Adds or removes a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = document().body() else {
            log::warn!("{}", crate::error::PageError::MissingElement("body"));
            return;
        };
        if let Err(e) = body.class_list().toggle_with_force(class, on) {
            log::warn!("{}", crate::error::PageError::from(e));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (class, on);
    }
}

/// Attaches the window-level listeners once, at bootstrap.
#[cfg(feature = "hydrate")]
pub fn install_page_listeners(page: PageHandle) {
    use leptos::ev;

    use crate::controller::is_editable_target;

    // listeners live for the page, so their handles are dropped
    let _ = window_event_listener(ev::scroll, move |_| {
        page.dispatch(PageEvent::Scroll(dom::scroll_snapshot()));
    });

    let _ = window_event_listener(ev::resize, move |_| {
        let inner_width = window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        page.dispatch(PageEvent::Resize { inner_width });
    });

    let _ = window_event_listener(ev::click, move |ev| {
        let inside_menu = dom::inside_menu(ev.target());
        page.dispatch(PageEvent::DocumentClick { inside_menu });
    });

    let _ = window_event_listener(ev::keydown, move |ev| {
        if let Some((tag, editable)) = dom::target_tag(ev.target()) {
            if is_editable_target(&tag, editable) {
                return;
            }
        }
        page.dispatch(PageEvent::KeyDown {
            key: ev.key(),
            document_height: dom::document_height(),
        });
    });

    if document().ready_state() == "complete" {
        dom::log_page_load_time();
    } else {
        let _ = window_event_listener(ev::load, move |_| dom::log_page_load_time());
    }

    // reloads can land mid-page
    page.dispatch(PageEvent::Scroll(dom::scroll_snapshot()));
    log::info!("page listeners installed");
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::time::Duration;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{EventTarget, HtmlElement, Node};

    use crate::controller::{ArticleBounds, ScrollSnapshot, SectionBounds};
    use crate::ux::perf::PageLoadTiming;

    pub fn scroll_snapshot() -> ScrollSnapshot {
        let window = window();
        let document = document();
        let mut snap = ScrollSnapshot {
            offset: window.scroll_y().unwrap_or_default(),
            viewport_height: window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default(),
            ..Default::default()
        };
        if let Some(root) = document.document_element() {
            snap.scroll_height = f64::from(root.scroll_height());
            snap.client_height = f64::from(root.client_height());
        }
        if let Ok(sections) = document.query_selector_all("section[id]") {
            snap.sections = (0..sections.length())
                .filter_map(|i| sections.item(i))
                .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
                .map(|el| {
                    SectionBounds::new(
                        el.id(),
                        f64::from(el.offset_top()),
                        f64::from(el.client_height()),
                    )
                })
                .collect();
        }
        snap.article = document
            .query_selector(".main-content")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| ArticleBounds {
                top: f64::from(el.offset_top()),
                height: f64::from(el.scroll_height()),
            });
        snap
    }

    pub fn document_height() -> f64 {
        document()
            .body()
            .map(|b| f64::from(b.scroll_height()))
            .unwrap_or_default()
    }

    /// Whether a click landed on the menu toggle or inside the menu.
    pub fn inside_menu(target: Option<EventTarget>) -> bool {
        let Some(node) = target.and_then(|t| t.dyn_into::<Node>().ok()) else {
            return false;
        };
        let document = document();
        ["navToggle", "navMenu"].iter().any(|id| {
            document
                .get_element_by_id(id)
                .is_some_and(|el| el.contains(Some(&node)))
        })
    }

    pub fn target_tag(target: Option<EventTarget>) -> Option<(String, bool)> {
        let el = target?.dyn_into::<HtmlElement>().ok()?;
        Some((el.tag_name(), el.is_content_editable()))
    }

    /// `loadEventEnd` is only written after the load handlers return, so read it a tick later.
    pub fn log_page_load_time() {
        set_timeout(
            || {
                let timing = window().performance().map(|p| {
                    let t = p.timing();
                    PageLoadTiming {
                        navigation_start: t.navigation_start(),
                        load_event_end: t.load_event_end(),
                    }
                });
                match timing.and_then(|t| t.duration_ms()) {
                    Some(ms) => log::info!("Page load time: {ms}ms"),
                    None => log::debug!("page load timing unavailable"),
                }
            },
            Duration::ZERO,
        );
    }
}
