use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaWhatsapp, Icon};

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page, PrayerCountdown,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::{
        mosque::MosqueInfoDto,
        phone::is_valid_sa_phone_number,
        subscriber::SubscribeRequestDto,
    },
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::{mosque::get_mosque_info, subscribe::subscribe};

#[component]
pub fn Home() -> Element {
    let mut info = use_signal(|| None::<Result<MosqueInfoDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_mosque_info().await });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch mosque info: {}", err);
                }
                info.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        if let Some(Ok(data)) = info() {
            Page {
                class: "flex flex-col items-center w-full h-full gap-8",
                div {
                    class: "flex flex-col items-center gap-2 text-center",
                    h1 {
                        class: "text-3xl sm:text-4xl font-bold",
                        "{data.mosque.name}"
                    }
                    if data.mosque.ramadan_mode {
                        span {
                            class: "badge badge-accent",
                            "Ramadan Kareem"
                        }
                    }
                }

                if let Some(times) = data.prayer_times.clone() {
                    PrayerCountdown { times: times.clone() }
                    PrayerTimesCard { times }
                } else {
                    p {
                        class: "opacity-70",
                        "Prayer times for today have not been published yet."
                    }
                }

                SubscribeForm {  }
            }
        } else if let Some(Err(err)) = info() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {  }
        }
    }
}

#[component]
fn PrayerTimesCard(times: crate::model::prayer::PrayerTimesDto) -> Element {
    rsx!(
        div {
            class: "card bg-base-200 w-full max-w-2xl",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Prayer Times - {times.date}"
                }
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table w-full",
                        tbody {
                            for (name, time) in times.daily() {
                                tr {
                                    td { class: "font-semibold", "{name}" }
                                    td { class: "text-right font-mono", "{time}" }
                                }
                            }
                            if let Some(jumuah) = &times.jumuah {
                                tr {
                                    td { class: "font-semibold", "Jumu'ah" }
                                    td { class: "text-right font-mono", "{jumuah}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn SubscribeForm() -> Element {
    let mut phone = use_signal(String::new);
    let mut notify_announcements = use_signal(|| true);
    let mut notify_prayer_reminders = use_signal(|| false);
    let mut notify_audio = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut subscribed = use_signal(|| false);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if !is_valid_sa_phone_number(&phone()) {
            error_message.set(Some(
                "Please enter a valid South African phone number.".to_string(),
            ));
            return;
        }

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);
            error_message.set(None);

            spawn(async move {
                let dto = SubscribeRequestDto {
                    phone: phone(),
                    notify_announcements: notify_announcements(),
                    notify_prayer_reminders: notify_prayer_reminders(),
                    notify_audio: notify_audio(),
                };

                match subscribe(dto).await {
                    Ok(_) => {
                        subscribed.set(true);
                    }
                    Err(err) => {
                        tracing::error!("Failed to subscribe: {}", err);
                        error_message.set(Some(err.message));
                    }
                }
                is_submitting.set(false);
            });
        }
    };

    rsx!(
        div {
            class: "card bg-base-200 w-full max-w-2xl",
            div {
                class: "card-body",
                h2 {
                    class: "card-title flex items-center gap-2",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaWhatsapp
                    }
                    "Get WhatsApp Updates"
                }
                if subscribed() {
                    p {
                        class: "text-success",
                        "You're subscribed! You'll receive updates on WhatsApp."
                    }
                } else {
                    form {
                        class: "flex flex-col gap-4",
                        onsubmit: on_submit,
                        input {
                            r#type: "tel",
                            class: "input input-bordered w-full",
                            placeholder: "Phone number, e.g. 082 123 4567",
                            required: true,
                            value: "{phone()}",
                            oninput: move |evt| phone.set(evt.value()),
                        }
                        div {
                            class: "flex flex-col gap-2",
                            label {
                                class: "label cursor-pointer justify-start gap-3",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox",
                                    checked: notify_announcements(),
                                    onchange: move |evt| notify_announcements.set(evt.checked()),
                                }
                                span { class: "label-text", "Announcements" }
                            }
                            label {
                                class: "label cursor-pointer justify-start gap-3",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox",
                                    checked: notify_prayer_reminders(),
                                    onchange: move |evt| notify_prayer_reminders.set(evt.checked()),
                                }
                                span { class: "label-text", "Prayer reminders" }
                            }
                            label {
                                class: "label cursor-pointer justify-start gap-3",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox",
                                    checked: notify_audio(),
                                    onchange: move |evt| notify_audio.set(evt.checked()),
                                }
                                span { class: "label-text", "New lectures and recitations" }
                            }
                        }
                        if let Some(message) = error_message() {
                            p {
                                class: "text-error text-sm",
                                "{message}"
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting(),
                            if is_submitting() {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Subscribing..."
                            } else {
                                "Subscribe"
                            }
                        }
                    }
                }
            }
        }
    )
}
