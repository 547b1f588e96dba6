//! Login page: request an OTP for a phone number.
//!
//! On success the user is pushed (not replaced — this is a user action, not
//! a guard redirect) to the verification page with the delivery target and
//! server secret carried in the query string.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::lang_switch::LangSwitch;
use crate::i18n::t;
use crate::state::lang::Language;

/// App-user login page.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <OtpRequestForm admin=false/> }
}

/// Admin login page.
#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <OtpRequestForm admin=true/> }
}

#[component]
fn OtpRequestForm(admin: bool) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let navigate = use_navigate();

    let phone = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let target = phone.get_untracked().trim().to_owned();
        if target.is_empty() || sending.get_untracked() {
            return;
        }
        sending.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            use crate::net::types::SendOtpPayload;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let payload = SendOtpPayload {
                    kind: "phone".to_owned(),
                    target: target.clone(),
                };
                match api::send_otp(&payload, admin).await {
                    Ok(body) => {
                        let prefix = if admin { "/admin" } else { "" };
                        let to = format!(
                            "/{}{prefix}/verify-otp?type=phone&target={target}&secret={}",
                            lang.get_untracked().code(),
                            body.secret_code,
                        );
                        navigate(&to, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(e));
                        sending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
            sending.set(false);
        }
    };

    view! {
        <div class="auth-page" dir=move || lang.get().dir()>
            <div class="auth-card">
                <LangSwitch/>
                <h1>{move || t(lang.get(), "loginTitle").to_owned()}</h1>
                <p class="auth-card__subtitle">{move || t(lang.get(), "loginSubtitle").to_owned()}</p>
                <form on:submit=on_submit>
                    <label>{move || t(lang.get(), "phone").to_owned()}</label>
                    <input
                        type="tel"
                        prop:value=phone
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button type="submit" disabled=move || sending.get()>
                        {move || t(lang.get(), "sendOtp").to_owned()}
                    </button>
                </form>
            </div>
        </div>
    }
}
