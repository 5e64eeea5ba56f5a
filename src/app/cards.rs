use std::time::Duration;

use leptos::{ev::MouseEvent, html, prelude::*};

use super::bindings::use_page;
use super::reveal::{reveal_class, use_reveal};
use crate::ux::card::{stagger_delay, CardRect, CardText, Ripple, HOVER_TRANSFORM, REST_TRANSFORM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub href: &'static str,
}

impl Tool {
    fn card_text(&self) -> CardText {
        CardText {
            title: self.title.to_string(),
            description: self.description.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[component]
pub fn ToolCard(index: usize, tool: Tool, #[prop(into)] query: Signal<String>) -> impl IntoView {
    let page = use_page();
    let config = page.config();
    let card_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(card_ref);
    let (hovered, set_hovered) = signal(false);
    let ripples = RwSignal::new(Vec::<Ripple>::new());
    let next_ripple = StoredValue::new(0u64);

    let delay = stagger_delay(index, config.card_stagger_secs);
    let ripple_ttl = Duration::from_millis(config.ripple_ms);
    let text = tool.card_text();
    let visible = move || query.with(|q| text.matches(q));

    let on_click = move |ev: MouseEvent| {
        let Some(card) = card_ref.get_untracked() else {
            return;
        };
        let r = card.get_bounding_client_rect();
        let rect = CardRect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        };
        next_ripple.update_value(|n| *n += 1);
        let id = next_ripple.get_value();
        ripples.update(|v| {
            v.push(Ripple::at_click(
                id,
                rect,
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
            ))
        });
        set_timeout(move || ripples.update(|v| v.retain(|r| r.id != id)), ripple_ttl);
    };

    let style = move || {
        let transform = if hovered.get() {
            HOVER_TRANSFORM
        } else {
            REST_TRANSFORM
        };
        let display = if visible() { "block" } else { "none" };
        format!(
            "animation-delay: {delay}; transform: {transform}; display: {display}; position: relative; overflow: hidden;"
        )
    };

    view! {
        <div
            node_ref=card_ref
            class=reveal_class("tool-card", revealed)
            style=style
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:click=on_click
        >
            <h3>{tool.title}</h3>
            <p>{tool.description}</p>
            <div class="tool-tags">
                {tool.tags.iter().map(|t| view! { <span>{*t}</span> }).collect_view()}
            </div>
            <a href=tool.href target="_blank" rel="noopener noreferrer">
                "Visit →"
            </a>
            <For
                each=move || ripples.get()
                key=|r: &Ripple| r.id
                children=|r: Ripple| view! { <div class="ripple" style=r.style()></div> }
            />
        </div>
    }
}

/// Searchable grid of tool cards.
#[component]
pub fn ToolGrid(tools: Vec<Tool>) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    view! {
        <div class="tool-search">
            <input
                id="searchInput"
                type="search"
                placeholder="Filter tools by name, description or tag..."
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
        </div>
        <div class="tool-grid">
            {tools
                .into_iter()
                .enumerate()
                .map(|(index, tool)| view! { <ToolCard index tool query /> })
                .collect_view()}
        </div>
    }
}
