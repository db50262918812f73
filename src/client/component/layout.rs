use dioxus::prelude::*;

use crate::client::{component::Header, constant::SITE_NAME, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(
        div {
            class: "min-h-screen flex flex-col",
            Header {}
            div {
                class: "flex-1",
                Outlet::<Route> {}
            }
            footer {
                class: "footer footer-center p-4 text-sm opacity-60",
                p { "{SITE_NAME}" }
            }
        }
    )
}
