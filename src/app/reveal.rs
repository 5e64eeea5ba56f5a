use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use super::bindings::use_page;
use crate::ux::reveal::{LazyImage, RevealState, REVEALED_CLASS};

/// Latches to `true` the first time `target` scrolls into view.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let config = use_page().config();
    let state = RwSignal::new(RevealState::default());
    use_intersection_observer_with_options(
        target,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            let first = state
                .try_update(|s| s.observe(entries.iter().map(|e| e.is_intersecting())))
                .unwrap_or_default();
            if first {
                log::trace!("element revealed");
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![config.reveal_threshold])
            .root_margin(config.reveal_root_margin),
    );
    Signal::derive(move || state.with(RevealState::is_revealed))
}

pub fn reveal_class(base: &'static str, revealed: Signal<bool>) -> impl Fn() -> String {
    move || {
        if revealed.get() {
            format!("{base} {REVEALED_CLASS}")
        } else {
            base.to_string()
        }
    }
}

/// Wraps children in a block that animates in once it is scrolled to.
#[component]
pub fn Reveal(#[prop(default = "content-section")] class: &'static str, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target);
    view! {
        <div node_ref=target class=reveal_class(class, revealed)>
            {children()}
        </div>
    }
}

/// An image whose `src` is only filled in once it is about to be seen.
#[component]
pub fn LazyImg(#[prop(into)] src: String, #[prop(into)] alt: String) -> impl IntoView {
    let config = use_page().config();
    let target = NodeRef::<html::Img>::new();
    let lazy = RwSignal::new(LazyImage::new(src.clone()));
    let (loaded_src, set_loaded_src) = signal(None::<String>);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            let next = lazy
                .try_update(|l| {
                    l.observe(entries.iter().map(|e| e.is_intersecting()))
                        .map(str::to_string)
                })
                .flatten();
            if let Some(next) = next {
                set_loaded_src.set(Some(next));
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![config.reveal_threshold])
            .root_margin(config.reveal_root_margin),
    );

    Effect::watch(
        move || loaded_src.get().is_some(),
        move |loaded, _, _| {
            if *loaded {
                stop();
            }
        },
        false,
    );

    view! {
        <img
            node_ref=target
            data-src=src
            src=move || loaded_src.get()
            alt=alt
            class=move || if loaded_src.get().is_some() { "" } else { "lazy" }
            loading="lazy"
        />
    }
}
