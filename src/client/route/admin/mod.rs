mod audio;
mod messages;
mod settings;
mod subscribers;

pub use audio::AdminAudio;
pub use messages::AdminMessages;
pub use settings::AdminSettings;
pub use subscribers::AdminSubscribers;

use dioxus::prelude::*;

use crate::client::router::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum AdminTab {
    Subscribers,
    Messages,
    Audio,
    Settings,
}

impl AdminTab {
    fn label(&self) -> &'static str {
        match self {
            AdminTab::Subscribers => "Subscribers",
            AdminTab::Messages => "Messages",
            AdminTab::Audio => "Audio",
            AdminTab::Settings => "Settings",
        }
    }

    fn route(&self) -> Route {
        match self {
            AdminTab::Subscribers => Route::AdminSubscribers {},
            AdminTab::Messages => Route::AdminMessages {},
            AdminTab::Audio => Route::AdminAudio {},
            AdminTab::Settings => Route::AdminSettings {},
        }
    }
}

/// Tab bar shared by all dashboard pages.
#[component]
pub fn AdminTabs(active_tab: AdminTab) -> Element {
    let tabs = [
        AdminTab::Subscribers,
        AdminTab::Messages,
        AdminTab::Audio,
        AdminTab::Settings,
    ];

    rsx!(
        div {
            class: "tabs tabs-boxed mb-6",
            for tab in tabs {
                Link {
                    to: tab.route(),
                    class: if tab == active_tab { "tab tab-active" } else { "tab" },
                    "{tab.label()}"
                }
            }
        }
    )
}
