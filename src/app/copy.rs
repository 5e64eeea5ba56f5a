use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::bindings::use_page;
use crate::error::PageError;
use crate::ux::copy::{CopyFeedback, COPY_LABEL};

/// Copies `text` to the clipboard and flashes "Copied!" for a moment.
#[component]
pub fn CopyButton(
    #[prop(into)] text: String,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let config = use_page().config();
    let feedback = RwSignal::new(CopyFeedback::new(
        label.unwrap_or_else(|| COPY_LABEL.to_string()),
    ));
    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| feedback.update(CopyFeedback::revert),
        config.copy_revert_ms as f64,
    );

    let data_copy = text.clone();
    view! {
        <button
            type="button"
            class=move || {
                if feedback.with(CopyFeedback::is_copied) { "copy-button copied" } else { "copy-button" }
            }
            data-copy=data_copy
            on:click=move |_| {
                let text = text.clone();
                let start = start.clone();
                let stop = stop.clone();
                leptos::task::spawn_local(async move {
                    let outcome = write_clipboard(&text).await;
                    match feedback.try_update(|f| f.settle(outcome)) {
                        Some(Ok(())) => {
                            // a repeat copy restarts the revert
                            stop();
                            start(());
                        }
                        Some(Err(e)) => log::error!("Failed to copy text: {e}"),
                        None => {}
                    }
                });
            }
        >
            {move || feedback.with(|f| f.label().to_string())}
        </button>
    }
}

#[cfg(feature = "hydrate")]
async fn write_clipboard(text: &str) -> Result<(), PageError> {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let navigator = window().navigator();
    // insecure contexts have no `navigator.clipboard`
    if js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?.is_undefined() {
        return Err(PageError::Clipboard);
    }
    JsFuture::from(navigator.clipboard().write_text(text)).await?;
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
async fn write_clipboard(_text: &str) -> Result<(), PageError> {
    Err(PageError::Clipboard)
}
