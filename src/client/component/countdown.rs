use chrono::Local;
use dioxus::prelude::*;

use crate::model::prayer::{format_countdown, next_prayer, PrayerTimesDto};

/// Live countdown to the next prayer, ticking once per second.
#[component]
pub fn PrayerCountdown(times: PrayerTimesDto) -> Element {
    let mut now = use_signal(|| Local::now().time());

    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            now.set(Local::now().time());
        }
    });

    #[cfg(not(feature = "web"))]
    let _ = &mut now;

    let Some(next) = next_prayer(&times, now()) else {
        return rsx! {};
    };

    let label = if next.tomorrow {
        format!("{} (tomorrow)", next.name)
    } else {
        next.name.to_string()
    };

    rsx!(
        div {
            class: "flex flex-col items-center gap-1",
            p {
                class: "text-sm uppercase tracking-wide opacity-70",
                "Next prayer: {label} at {next.time}"
            }
            p {
                class: "text-4xl font-mono font-bold",
                "{format_countdown(next.seconds_until)}"
            }
        }
    )
}
