//! Two-factor verification route.
//!
//! Collects the emailed one-time code for the address recorded by the login
//! step, submits it, and admits the session only when the returned token carries
//! the Admin role. Every other outcome stays on this page with an inline message.

use crate::components::{Alert, AlertKind, AuthCard, Button};
use crate::features::auth::{
    client::HttpAuthApi,
    state::{now_unix, use_session},
};
use admin_session::{
    VerificationAttempt, VerifyOutcome, is_valid_code, messages, paths, resend_code,
    verification::{CODE_LENGTH, CODE_PATTERN},
    verify_code,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[derive(Clone)]
struct VerifyInput {
    email: String,
    code: String,
}

#[component]
pub fn TwoFactorPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (code, set_code) = signal(String::new());
    let attempt = RwSignal::new(VerificationAttempt::new());

    let verify_action = Action::new_local(move |input: &VerifyInput| {
        let input = input.clone();
        async move { verify_code(&HttpAuthApi, &input.email, &input.code, now_unix()).await }
    });

    let resend_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move { resend_code(&HttpAuthApi, &email).await }
    });

    Effect::new(move |_| {
        if let Some(outcome) = verify_action.value().get() {
            attempt.update(|state| state.finish(&outcome));
            if let VerifyOutcome::Admitted(record) = outcome {
                session.admit(record);
                navigate(paths::DASHBOARD, Default::default());
            }
        }
    });

    Effect::new(move |_| {
        if let Some(Some(message)) = resend_action.value().get() {
            attempt.update(|state| state.set_error(message));
        }
    });

    let is_pending = Signal::derive(move || attempt.with(VerificationAttempt::is_pending));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let code_value = code.get_untracked();
        if !is_valid_code(&code_value) {
            attempt.update(|state| state.set_error(messages::CODE_FORMAT));
            return;
        }
        if !attempt.try_update(VerificationAttempt::begin).unwrap_or(false) {
            return;
        }

        verify_action.dispatch(VerifyInput {
            email: session.email.get_untracked(),
            code: code_value,
        });
    };

    let on_resend = move |_| {
        attempt.update(VerificationAttempt::clear_error);
        resend_action.dispatch(session.email.get_untracked());
    };

    view! {
        <AuthCard icon="🔐" heading="Xác minh bảo mật" tagline="Nhập mã xác minh để hoàn tất đăng nhập">
            <h2 class="text-4xl font-bold text-gray-800 mb-2">"Xác minh 2 bước"</h2>
            <p class="text-lg text-gray-500 mb-4">
                "Vui lòng nhập mã xác thực được gửi đến email: "
                <span class="font-semibold text-[#A67396]">{move || session.email.get()}</span>
            </p>

            {move || {
                attempt
                    .with(|state| state.last_error().map(str::to_string))
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}

            <form class="space-y-6" on:submit=on_submit>
                <div>
                    <label class="text-base font-medium text-gray-700" for="otp">
                        "Mã xác minh"
                    </label>
                    <input
                        id="otp"
                        type="text"
                        inputmode="numeric"
                        autocomplete="one-time-code"
                        placeholder="Nhập mã gồm 6 chữ số"
                        class="w-full mt-2 px-5 py-3 border border-gray-300 rounded-lg text-lg focus:outline-none focus:ring-2 focus:ring-purple-400"
                        required
                        pattern=CODE_PATTERN
                        maxlength=CODE_LENGTH.to_string()
                        prop:value=move || code.get()
                        on:input=move |event| set_code.set(event_target_value(&event))
                    />
                </div>

                <Button button_type="submit" disabled=is_pending>
                    {move || if is_pending.get() { "Đang xử lý..." } else { "Xác minh" }}
                </Button>
            </form>

            <div class="text-sm text-center text-gray-500 mt-6 space-y-2">
                <p>
                    "Không nhận được mã? "
                    <button
                        type="button"
                        class="text-[#A67396] font-semibold hover:underline cursor-pointer"
                        class:opacity-50=move || resend_action.pending().get()
                        disabled=move || resend_action.pending().get()
                        on:click=on_resend
                    >
                        "Gửi lại"
                    </button>
                </p>
                <p>
                    <A href=paths::LOGIN {..} class="hover:underline">
                        "Quay lại đăng nhập"
                    </A>
                </p>
            </div>
        </AuthCard>
    }
}
