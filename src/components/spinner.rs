//! Blocking loading indicator shown while the session resolves.

use leptos::prelude::*;

/// Centered spinner filling the viewport.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-overlay" role="status">
            <div class="spinner"></div>
        </div>
    }
}
