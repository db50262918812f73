use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Guards the admin routes: waits for the initial session check, then
/// redirects unauthenticated visitors to the login page.
#[component]
pub fn RequiresAdmin() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let state = auth.read().clone();
    let not_logged_in = matches!(state, AuthState::NotLoggedIn);

    use_effect(use_reactive!(|(not_logged_in,)| {
        if not_logged_in {
            nav.push(Route::Login {});
        }
    }));

    match state {
        AuthState::Initializing => rsx! {
            LoadingPage {  }
        },
        AuthState::Authenticated(_) => rsx! {
            Outlet::<Route> {}
        },
        // Render nothing while the use_effect redirect runs
        AuthState::NotLoggedIn => rsx! {},
        AuthState::Error(error) => rsx! {
            ErrorPage { status: error.status, message: error.message }
        },
    }
}
