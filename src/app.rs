mod bindings;
mod cards;
mod contact;
mod copy;
mod footer;
mod guide;
mod homepage;
mod navbar;
mod reveal;
mod share;
mod toast;

pub use bindings::{use_page, PageHandle, PageSignals};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::InteractionConfig;
use guide::GuidePage;
use homepage::HomePage;
use toast::{provide_toaster, ToastStack};

const KEYFRAMES: &str = r#"
@keyframes ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}

@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
"#;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/tool-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = InteractionConfig::default();
    provide_toaster(&config);
    let page = bindings::provide_page(config);

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| bindings::install_page_listeners(page),
        true,
    );
    #[cfg(not(feature = "hydrate"))]
    let _ = page;

    view! {
        <Title formatter=|title| format!("Dev Toolbox - {title}") />
        <Style id="page-keyframes">{KEYFRAMES}</Style>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/guide") view=GuidePage />
            </Routes>
        </Router>
        <ToastStack />
    }
}
