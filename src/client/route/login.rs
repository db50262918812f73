use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::auth::{get_user, login};

#[component]
pub fn Login() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    // Handle redirect for already-authenticated admins
    {
        let auth_context = use_context::<AuthContext>();
        use_effect(move || {
            let state = auth_context.read();
            if matches!(&*state, AuthState::Authenticated(_)) {
                nav.push(Route::AdminSubscribers {});
            }
        });
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let mut auth_context = auth_context;
            is_submitting.set(true);
            error_message.set(None);

            spawn(async move {
                match login(email(), password()).await {
                    Ok(()) => match get_user().await {
                        Ok(admin) => {
                            auth_context.set(AuthState::from(admin));
                        }
                        Err(err) => {
                            tracing::error!("Failed to fetch admin after login: {}", err);
                            error_message.set(Some(err.message));
                        }
                    },
                    Err(err) => {
                        error_message.set(Some(err.message));
                    }
                }
                is_submitting.set(false);
            });
        }
    };

    let state = auth_context.read();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing => rsx! {
                LoadingPage {}
            },
            AuthState::Authenticated(_) => rsx! {
                // Render nothing while redirecting
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                    div {
                        class: "flex flex-col items-center gap-2",
                        p {
                            class: "text-2xl font-semibold",
                            {SITE_NAME}
                        }
                        p {
                            class: "opacity-70",
                            "Admin login"
                        }
                    }
                    form {
                        class: "flex flex-col gap-4 w-full max-w-sm",
                        onsubmit: on_submit,
                        input {
                            r#type: "email",
                            class: "input input-bordered w-full",
                            placeholder: "Email",
                            required: true,
                            value: "{email()}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            r#type: "password",
                            class: "input input-bordered w-full",
                            placeholder: "Password",
                            required: true,
                            value: "{password()}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        if let Some(message) = error_message() {
                            p {
                                class: "text-error text-sm",
                                "{message}"
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary w-full",
                            disabled: is_submitting(),
                            if is_submitting() {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Logging in..."
                            } else {
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    }
}
