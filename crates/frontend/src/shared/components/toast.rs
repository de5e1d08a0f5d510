use contracts::shared::toast::ToastState;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

/// Show `message` now and hide it after `dismiss_after`.
///
/// The timer is fire-and-forget; a newer toast started meanwhile is left alone.
pub fn show_toast(toast: RwSignal<ToastState>, message: String, dismiss_after: Duration) {
    let mut generation = 0;
    toast.update(|t| generation = t.show(message));

    let millis = u32::try_from(dismiss_after.as_millis()).unwrap_or(u32::MAX);
    spawn_local(async move {
        TimeoutFuture::new(millis).await;
        toast.update(|t| {
            t.dismiss(generation);
        });
    });
}

#[component]
pub fn Toast(toast: RwSignal<ToastState>) -> impl IntoView {
    view! {
        <div
            class="toast-message"
            class:show=move || toast.with(|t| t.is_visible())
            role="status"
            aria-live="polite"
        >
            {move || toast.with(|t| t.message().unwrap_or_default().to_string())}
        </div>
    }
}
