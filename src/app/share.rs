use leptos::{ev::MouseEvent, prelude::*};

use crate::ux::share::Platform;

#[component]
pub fn ShareButtons() -> impl IntoView {
    view! {
        <div class="share-buttons">
            <span class="share-label">"Share:"</span>
            {Platform::all()
                .into_iter()
                .map(|p| {
                    view! {
                        <button type="button" class="share-button" data-platform=p.as_str() on:click=move |ev| open_share(ev, p)>
                            {p.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn open_share(ev: MouseEvent, platform: Platform) {
    ev.prevent_default();
    #[cfg(feature = "hydrate")]
    {
        use crate::error::PageError;
        use crate::ux::share::SHARE_WINDOW_FEATURES;

        let href = match window().location().href() {
            Ok(href) => href,
            Err(e) => {
                log::warn!("{}", PageError::from(e));
                return;
            }
        };
        let url = platform.share_url(&href, &document().title());
        if let Err(e) =
            window().open_with_url_and_target_and_features(&url, "_blank", SHARE_WINDOW_FEATURES)
        {
            log::warn!("{}", PageError::from(e));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = platform;
}
