use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[cfg(feature = "web")]
use crate::client::{api::auth::get_user, model::auth::AuthState};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let auth = use_context_provider(AuthContext::new);

    // Resolve the session once on first load; guarded pages wait on it.
    #[cfg(feature = "web")]
    {
        let mut auth = auth;
        use_future(move || async move {
            match get_user().await {
                Ok(admin) => auth.set(AuthState::from(admin)),
                Err(error) => auth.set(AuthState::Error(error)),
            }
        });
    }

    #[cfg(not(feature = "web"))]
    let _ = auth;

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Prayer times and WhatsApp announcements for your mosque"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
