use std::time::Duration;

use leptos::prelude::*;

use crate::config::InteractionConfig;
use crate::ux::toast::{Toast, ToastKind, ToastQueue, TOAST_STACK_STYLE};

#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    visible: Duration,
    exit: Duration,
}

impl Toaster {
    /// Shows a toast, then slides it out and drops it on independent timers.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        log::debug!("toast ({}): {message}", kind.as_str());
        let Some(id) = self.queue.try_update(|q| q.push(message, kind)) else {
            return;
        };
        let queue = self.queue;
        let exit = self.exit;
        set_timeout(
            move || {
                queue.update(|q| q.begin_exit(id));
                set_timeout(move || queue.update(|q| q.remove(id)), exit);
            },
            self.visible,
        );
    }
}

pub fn provide_toaster(config: &InteractionConfig) -> Toaster {
    let toaster = Toaster {
        queue: RwSignal::new(ToastQueue::default()),
        visible: Duration::from_millis(config.toast_visible_ms),
        exit: Duration::from_millis(config.toast_exit_ms),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <div style=TOAST_STACK_STYLE aria-live="polite">
            <For
                each=move || toaster.queue.with(|q| q.toasts().to_vec())
                key=|t: &Toast| (t.id, t.leaving)
                children=move |toast: Toast| {
                    view! {
                        <div class=toast.class() style=toast.style() role="status">
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
