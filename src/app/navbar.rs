use leptos::{ev::MouseEvent, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::bindings::{anchor_top, set_body_class, use_page};
use crate::controller::PageEvent;

/// A same-page link that scrolls smoothly below the fixed navbar.
#[component]
pub fn AnchorLink(
    target: &'static str,
    #[prop(into)] label: String,
    #[prop(default = "nav-link")] class: &'static str,
) -> impl IntoView {
    let page = use_page();
    let active = page.signals.active_section;
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        page.dispatch(PageEvent::AnchorClick {
            target_top: anchor_top(target),
        });
    };
    view! {
        <a
            href=format!("#{target}")
            class=move || {
                if active.with(|a| a.as_deref() == Some(target)) {
                    format!("{class} active")
                } else {
                    class.to_string()
                }
            }
            on:click=on_click
        >
            {label}
        </a>
    }
}

#[component]
pub fn ProgressBar() -> impl IntoView {
    let progress = use_page().signals.progress;
    view! {
        <div class="progress-container">
            <div
                id="progressBar"
                class="progress-bar"
                style=move || format!("width: {}%", progress.get())
            ></div>
        </div>
    }
}

/// Article-relative reading position, shown beside the article rather than in the page bar.
#[component]
pub fn ReadingIndicator() -> impl IntoView {
    let reading = use_page().signals.reading_progress;
    view! {
        <Show when=move || reading.with(Option::is_some)>
            <div class="reading-indicator" aria-hidden="true">
                {move || format!("{:.0}% read", reading.get().unwrap_or_default())}
            </div>
        </Show>
    }
}

#[component]
pub fn Navbar(links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    let page = use_page();
    let s = page.signals;
    let menu_class = move |base: &'static str| {
        move || {
            if s.menu_open.get() {
                format!("{base} active")
            } else {
                base.to_string()
            }
        }
    };

    view! {
        <nav
            class=move || if s.navbar_scrolled.get() { "navbar scrolled" } else { "navbar" }
            style=move || {
                if s.navbar_hidden.get() {
                    "transform: translateY(-100%)"
                } else {
                    "transform: translateY(0)"
                }
            }
        >
            <div class="nav-container">
                <a href="/" class="nav-logo">"Dev Toolbox"</a>
                <ul id="navMenu" class=menu_class("nav-menu")>
                    {links
                        .iter()
                        .map(|(target, label)| view! { <li><AnchorLink target=*target label=*label /></li> })
                        .collect_view()}
                </ul>
                <DarkModeToggle />
                <button
                    id="navToggle"
                    type="button"
                    class=menu_class("nav-toggle")
                    aria-label="Toggle navigation"
                    aria-expanded=move || s.menu_open.get().to_string()
                    on:click=move |_| page.dispatch(PageEvent::MenuToggle)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let page = use_page();
    let visible = page.signals.back_to_top_visible;
    view! {
        <button
            id="backToTop"
            type="button"
            class=move || if visible.get() { "back-to-top visible" } else { "back-to-top" }
            aria-label="Back to top"
            on:click=move |_| page.dispatch(PageEvent::BackToTop)
        >
            "↑"
        </button>
    }
}

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let page = use_page();
    let dark_mode = page.signals.dark_mode;

    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) =
        use_local_storage::<bool, FromToStringCodec>(page.config().dark_mode_key);

    #[cfg(feature = "hydrate")]
    Effect::watch(
        move || stored.get(),
        move |enabled, _, _| page.restore_dark_mode(*enabled),
        true,
    );

    Effect::new(move |_| set_body_class("dark-mode", dark_mode.get()));

    let on_change = move |_| {
        page.dispatch(PageEvent::DarkModeToggle);
        #[cfg(feature = "hydrate")]
        set_stored.set(dark_mode.get_untracked());
    };

    view! {
        <label class="dark-mode-switch" title="Dark mode">
            <input
                id="darkModeToggle"
                type="checkbox"
                prop:checked=move || dark_mode.get()
                on:change=on_change
            />
            <span class="slider"></span>
        </label>
    }
}
