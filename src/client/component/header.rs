use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[cfg(feature = "web")]
use crate::client::{api::auth::logout, model::auth::AuthState};

#[component]
pub fn Header() -> Element {
    let auth = use_context::<AuthContext>();

    let is_admin = auth.read().is_authenticated();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl font-semibold",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if is_admin {
                Link {
                    to: Route::AdminSubscribers {},
                    class: "btn btn-outline",
                    p {
                        "Dashboard"
                    }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        #[cfg(feature = "web")]
                        {
                            let mut auth = auth;
                            let nav = navigator();
                            spawn(async move {
                                if logout().await.is_ok() {
                                    auth.set(AuthState::NotLoggedIn);
                                    nav.push(Route::Home {});
                                }
                            });
                        }
                    },
                    p {
                        "Logout"
                    }
                }
            }
        }
    })
}
