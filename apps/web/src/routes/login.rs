use crate::components::{Alert, AlertKind, AlreadySignedInPanel, AuthCard, Button, Spinner};
use crate::features::auth::{client::HttpAuthApi, state::use_session};
use admin_session::{login::login, paths};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move { login(&HttpAuthApi, &input.email, &input.password).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(record) => {
                    session.start_verification(record);
                    navigate(paths::TWO_FACTOR, Default::default());
                }
                Err(message) => set_error.set(Some(message)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        login_action.dispatch(LoginInput {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <AuthCard icon="💅" heading="Chào mừng trở lại" tagline="Đăng nhập để quản lý salon">
            <Show
                when=move || !session.is_authenticated.get()
                fallback=|| view! { <AlreadySignedInPanel /> }
            >
                <h2 class="text-4xl font-bold text-gray-800 mb-2">"Đăng nhập"</h2>
                <p class="text-lg text-gray-500 mb-4">"Dành cho quản trị viên"</p>

                {move || {
                    error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}

                <form class="space-y-6" on:submit=on_submit>
                    <div>
                        <label class="text-base font-medium text-gray-700" for="email">
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="email"
                            placeholder="admin@flawless.vn"
                            class="w-full mt-2 px-5 py-3 border border-gray-300 rounded-lg text-lg focus:outline-none focus:ring-2 focus:ring-purple-400"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class="text-base font-medium text-gray-700" for="password">
                            "Mật khẩu"
                        </label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            class="w-full mt-2 px-5 py-3 border border-gray-300 rounded-lg text-lg focus:outline-none focus:ring-2 focus:ring-purple-400"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=login_action.pending()>
                        {move || {
                            if login_action.pending().get() { "Đang xử lý..." } else { "Đăng nhập" }
                        }}
                    </Button>
                </form>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4 flex justify-center"><Spinner /></div> })
                }}
            </Show>
        </AuthCard>
    }
}
