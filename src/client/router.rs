use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin};
use crate::client::route::{
    admin::{AdminAudio, AdminMessages, AdminSettings, AdminSubscribers},
    Home, Login, NotFound,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/admin/login")]
    Login {},

    #[layout(RequiresAdmin)]
    #[nest("/admin")]
        #[route("/")]
        AdminSubscribers {},

        #[route("/messages")]
        AdminMessages {},

        #[route("/audio")]
        AdminAudio {},

        #[route("/settings")]
        AdminSettings {},
    #[end_nest]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
