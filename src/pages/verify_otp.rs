//! OTP verification page.
//!
//! On success the tokens and the admin flag are persisted and the session
//! re-enters its loading state for a fresh profile fetch; the layout guard
//! then moves the now-authenticated user off this auth route on its own.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::i18n::t;
use crate::state::auth::AuthState;
use crate::state::lang::Language;

/// App-user OTP verification page.
#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    view! { <OtpVerifyForm admin=false/> }
}

/// Admin OTP verification page.
#[component]
pub fn AdminVerifyOtpPage() -> impl IntoView {
    view! { <OtpVerifyForm admin=true/> }
}

#[component]
fn OtpVerifyForm(admin: bool) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();

    let otp = RwSignal::new(String::new());
    let verifying = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code = otp.get_untracked().trim().to_owned();
        if code.is_empty() || verifying.get_untracked() {
            return;
        }
        verifying.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            use crate::net::types::VerifyOtpPayload;
            use crate::storage::{KeyValueStore, LocalStore, keys};

            let q = query.get_untracked();
            let payload = VerifyOtpPayload {
                kind: q.get("type").unwrap_or_else(|| "phone".to_owned()),
                target: q.get("target").unwrap_or_default(),
                otp: code,
                secret_code: q.get("secret").unwrap_or_default(),
            };
            leptos::task::spawn_local(async move {
                match api::verify_otp(&payload, admin).await {
                    Ok(tokens) => {
                        if let Some(token) = tokens.token {
                            LocalStore.set(keys::ACCESS_TOKEN, &token);
                        }
                        if let Some(refresh) = tokens.refresh_token {
                            LocalStore.set(keys::REFRESH_TOKEN, &refresh);
                        }
                        LocalStore.set(keys::ADMIN, if admin { "true" } else { "false" });
                        lang.get_untracked().persist(&LocalStore);

                        // Fresh loading window; once the profile resolves
                        // the auth gate leaves this page.
                        auth.set(AuthState {
                            is_admin: admin,
                            ..AuthState::default()
                        });
                        let user = api::fetch_profile(admin).await;
                        auth.update(|a| a.resolve(user));
                    }
                    Err(e) => {
                        error.set(Some(e));
                        verifying.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&query, &auth);
            verifying.set(false);
        }
    };

    view! {
        <div class="auth-page" dir=move || lang.get().dir()>
            <div class="auth-card">
                <h1>{move || t(lang.get(), "otpCode").to_owned()}</h1>
                <form on:submit=on_submit>
                    <input
                        type="text"
                        inputmode="numeric"
                        autocomplete="one-time-code"
                        prop:value=otp
                        on:input=move |ev| otp.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button type="submit" disabled=move || verifying.get()>
                        {move || {
                            let key = if verifying.get() { "verifying" } else { "verifyAndLogin" };
                            t(lang.get(), key).to_owned()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
