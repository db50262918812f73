use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        route::admin::{AdminTab, AdminTabs},
    },
    model::{mosque::MosqueSettingsDto, prayer::PrayerTimesDto},
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::settings::{
    get_prayer_times, get_settings, update_settings, upsert_prayer_times,
};

#[component]
pub fn AdminSettings() -> Element {
    let mut settings = use_signal(|| None::<Result<MosqueSettingsDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_settings().await });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch settings: {}", err);
                }
                settings.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Settings | {SITE_NAME}" }
        if let Some(Ok(data)) = settings() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-6xl",
                    h1 {
                        class: "text-lg sm:text-2xl mb-6",
                        "Dashboard"
                    }

                    AdminTabs { active_tab: AdminTab::Settings }

                    div {
                        class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                        SettingsForm { settings: data }
                        PrayerTimesEditor { }
                    }
                }
            }
        } else if let Some(Err(err)) = settings() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}

#[component]
fn SettingsForm(settings: MosqueSettingsDto) -> Element {
    let mut name = use_signal(|| settings.name.clone());
    let mut timezone = use_signal(|| settings.timezone.clone());
    let mut calculation_method = use_signal(|| settings.calculation_method.clone());
    let mut madhab = use_signal(|| settings.madhab.clone());
    let mut ramadan_mode = use_signal(|| settings.ramadan_mode);
    let mut reminder_offset = use_signal(|| settings.reminder_offset_minutes.to_string());
    let mut whatsapp_number = use_signal(|| settings.whatsapp_number.clone().unwrap_or_default());

    let mut saved = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Ok(offset) = reminder_offset().parse::<i32>() else {
            error_message.set(Some("Reminder offset must be a number.".to_string()));
            return;
        };

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);
            saved.set(false);
            error_message.set(None);

            spawn(async move {
                let dto = MosqueSettingsDto {
                    name: name(),
                    timezone: timezone(),
                    calculation_method: calculation_method(),
                    madhab: madhab(),
                    ramadan_mode: ramadan_mode(),
                    reminder_offset_minutes: offset,
                    whatsapp_number: Some(whatsapp_number()).filter(|value| !value.is_empty()),
                };

                match update_settings(dto).await {
                    Ok(_) => {
                        saved.set(true);
                    }
                    Err(err) => {
                        tracing::error!("Failed to update settings: {}", err);
                        error_message.set(Some(err.message));
                    }
                }
                is_submitting.set(false);
            });
        }

        #[cfg(not(feature = "web"))]
        let _ = offset;
    };

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 {
                    class: "card-title mb-2",
                    "Mosque Settings"
                }
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: on_submit,
                    label {
                        class: "form-control w-full",
                        span { class: "label-text mb-1", "Name" }
                        input {
                            r#type: "text",
                            class: "input input-bordered w-full",
                            required: true,
                            value: "{name()}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    label {
                        class: "form-control w-full",
                        span { class: "label-text mb-1", "Timezone" }
                        input {
                            r#type: "text",
                            class: "input input-bordered w-full",
                            placeholder: "Africa/Johannesburg",
                            required: true,
                            value: "{timezone()}",
                            oninput: move |evt| timezone.set(evt.value()),
                        }
                    }
                    label {
                        class: "form-control w-full",
                        span { class: "label-text mb-1", "Calculation method" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{calculation_method()}",
                            onchange: move |evt| calculation_method.set(evt.value()),
                            option { value: "muslim_world_league", "Muslim World League" }
                            option { value: "egyptian", "Egyptian" }
                            option { value: "karachi", "Karachi" }
                            option { value: "umm_al_qura", "Umm al-Qura" }
                        }
                    }
                    label {
                        class: "form-control w-full",
                        span { class: "label-text mb-1", "Madhab (Asr)" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{madhab()}",
                            onchange: move |evt| madhab.set(evt.value()),
                            option { value: "shafi", "Shafi" }
                            option { value: "hanafi", "Hanafi" }
                        }
                    }
                    label {
                        class: "label cursor-pointer justify-start gap-3",
                        input {
                            r#type: "checkbox",
                            class: "toggle",
                            checked: ramadan_mode(),
                            onchange: move |evt| ramadan_mode.set(evt.checked()),
                        }
                        span { class: "label-text", "Ramadan mode" }
                    }
                    label {
                        class: "form-control w-full",
                        span { class: "label-text mb-1", "Prayer reminder offset (minutes)" }
                        input {
                            r#type: "number",
                            class: "input input-bordered w-full",
                            min: "0",
                            max: "60",
                            value: "{reminder_offset()}",
                            oninput: move |evt| reminder_offset.set(evt.value()),
                        }
                    }
                    label {
                        class: "form-control w-full",
                        span { class: "label-text mb-1", "WhatsApp number (optional)" }
                        input {
                            r#type: "tel",
                            class: "input input-bordered w-full",
                            value: "{whatsapp_number()}",
                            oninput: move |evt| whatsapp_number.set(evt.value()),
                        }
                    }
                    if saved() {
                        p { class: "text-success text-sm", "Settings saved." }
                    }
                    if let Some(message) = error_message() {
                        p { class: "text-error text-sm", "{message}" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        if is_submitting() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Saving..."
                        } else {
                            "Save Settings"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn PrayerTimesEditor() -> Element {
    let mut from = use_signal(String::new);
    let mut to = use_signal(String::new);
    let mut days = use_signal(|| None::<Vec<PrayerTimesDto>>);
    let mut fetch_requested = use_signal(|| 0u32);

    let mut saved = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            if fetch_requested() > 0 {
                let from_value = from.peek().clone();
                let to_value = to.peek().clone();
                Some(get_prayer_times(&from_value, &to_value).await)
            } else {
                None
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(list) => {
                        days.set(Some(list.clone()));
                        error_message.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch prayer times: {}", err);
                        error_message.set(Some(err.message.clone()));
                    }
                }
            }
        });
    }

    let on_save = move |_| {
        let Some(current) = days() else {
            return;
        };

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);
            saved.set(false);
            error_message.set(None);

            spawn(async move {
                match upsert_prayer_times(current).await {
                    Ok(()) => {
                        saved.set(true);
                    }
                    Err(err) => {
                        tracing::error!("Failed to save prayer times: {}", err);
                        error_message.set(Some(err.message));
                    }
                }
                is_submitting.set(false);
            });
        }

        #[cfg(not(feature = "web"))]
        let _ = current;
    };

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 {
                    class: "card-title mb-2",
                    "Prayer Timetable"
                }
                form {
                    class: "flex items-end gap-2 mb-4",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        saved.set(false);
                        fetch_requested.set(fetch_requested() + 1);
                    },
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "From" }
                        input {
                            r#type: "date",
                            class: "input input-bordered input-sm",
                            required: true,
                            value: "{from()}",
                            oninput: move |evt| from.set(evt.value()),
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "To" }
                        input {
                            r#type: "date",
                            class: "input input-bordered input-sm",
                            required: true,
                            value: "{to()}",
                            oninput: move |evt| to.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-sm",
                        "Load"
                    }
                }

                if let Some(day_list) = days() {
                    if day_list.is_empty() {
                        div {
                            class: "text-center py-4 opacity-50",
                            "No timetable rows in this range yet"
                        }
                    } else {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-sm w-full",
                                thead {
                                    tr {
                                        th { "Date" }
                                        th { "Fajr" }
                                        th { "Dhuhr" }
                                        th { "Asr" }
                                        th { "Maghrib" }
                                        th { "Isha" }
                                        th { "Jumu'ah" }
                                    }
                                }
                                tbody {
                                    for (index, day) in day_list.iter().enumerate() {
                                        PrayerDayRow {
                                            index,
                                            day: day.clone(),
                                            days
                                        }
                                    }
                                }
                            }
                        }
                        if saved() {
                            p { class: "text-success text-sm mt-2", "Timetable saved." }
                        }
                        if let Some(message) = error_message() {
                            p { class: "text-error text-sm mt-2", "{message}" }
                        }
                        button {
                            class: "btn btn-primary mt-4",
                            disabled: is_submitting(),
                            onclick: on_save,
                            if is_submitting() {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Saving..."
                            } else {
                                "Save Timetable"
                            }
                        }
                    }
                } else if let Some(message) = error_message() {
                    p { class: "text-error text-sm", "{message}" }
                } else {
                    p {
                        class: "opacity-70 text-sm",
                        "Pick a date range to load and edit the timetable."
                    }
                }
            }
        }
    )
}

#[component]
fn PrayerDayRow(index: usize, day: PrayerTimesDto, days: Signal<Option<Vec<PrayerTimesDto>>>) -> Element {
    let mut update_field = move |apply: fn(&mut PrayerTimesDto, String), value: String| {
        if let Some(list) = days.write().as_mut() {
            if let Some(row) = list.get_mut(index) {
                apply(row, value);
            }
        }
    };

    rsx!(
        tr {
            td { class: "whitespace-nowrap", "{day.date}" }
            td {
                input {
                    r#type: "time",
                    class: "input input-bordered input-xs",
                    value: "{day.fajr}",
                    oninput: move |evt| update_field(|row, v| row.fajr = v, evt.value()),
                }
            }
            td {
                input {
                    r#type: "time",
                    class: "input input-bordered input-xs",
                    value: "{day.dhuhr}",
                    oninput: move |evt| update_field(|row, v| row.dhuhr = v, evt.value()),
                }
            }
            td {
                input {
                    r#type: "time",
                    class: "input input-bordered input-xs",
                    value: "{day.asr}",
                    oninput: move |evt| update_field(|row, v| row.asr = v, evt.value()),
                }
            }
            td {
                input {
                    r#type: "time",
                    class: "input input-bordered input-xs",
                    value: "{day.maghrib}",
                    oninput: move |evt| update_field(|row, v| row.maghrib = v, evt.value()),
                }
            }
            td {
                input {
                    r#type: "time",
                    class: "input input-bordered input-xs",
                    value: "{day.isha}",
                    oninput: move |evt| update_field(|row, v| row.isha = v, evt.value()),
                }
            }
            td {
                input {
                    r#type: "time",
                    class: "input input-bordered input-xs",
                    value: day.jumuah.clone().unwrap_or_default(),
                    oninput: move |evt| update_field(
                        |row, v| row.jumuah = Some(v).filter(|v| !v.is_empty()),
                        evt.value(),
                    ),
                }
            }
        }
    )
}
