//! Dashboard landing page.

use leptos::prelude::*;

use crate::i18n::t;
use crate::state::auth::AuthState;
use crate::state::lang::Language;

/// Dashboard page with a greeting and placeholder stat cards.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <section class="dashboard">
            <header>
                <h1>{move || t(lang.get(), "dashboard").to_owned()}</h1>
                <p>{move || auth.get().user.map(|u| u.name).unwrap_or_default()}</p>
            </header>
            <div class="dashboard__cards">
                <div class="dashboard__card">
                    <span class="dashboard__metric">{move || t(lang.get(), "liveChat").to_owned()}</span>
                </div>
                <div class="dashboard__card">
                    <span class="dashboard__metric">{move || t(lang.get(), "broadcast").to_owned()}</span>
                </div>
                <div class="dashboard__card">
                    <span class="dashboard__metric">{move || t(lang.get(), "contacts").to_owned()}</span>
                </div>
            </div>
        </section>
    }
}
