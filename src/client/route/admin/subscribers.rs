use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            ConfirmationModal, Modal, Page, Pagination, PaginationData,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        route::admin::{AdminTab, AdminTabs},
    },
    model::{
        phone::is_valid_sa_phone_number,
        subscriber::{
            ImportSubscriberDto, PaginatedSubscribersDto, SubscribeRequestDto, SubscriberDto,
            UpdateSubscriberDto,
        },
    },
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::subscriber::{
    create_subscriber, delete_subscriber, get_subscribers, import_subscribers, update_subscriber,
};

#[component]
pub fn AdminSubscribers() -> Element {
    let mut subscribers = use_signal(|| None::<Result<PaginatedSubscribersDto, ApiError>>);
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 25u64);
    let refetch_trigger = use_signal(|| 0u32);

    let mut show_add_modal = use_signal(|| false);
    let mut show_import_modal = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_subscribers(page(), per_page()).await
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch subscribers: {}", err);
                }
                subscribers.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Subscribers | {SITE_NAME}" }
        if let Some(Ok(data)) = subscribers() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-6xl",
                    h1 {
                        class: "text-lg sm:text-2xl mb-6",
                        "Dashboard"
                    }

                    AdminTabs { active_tab: AdminTab::Subscribers }

                    div {
                        class: "flex items-center justify-between gap-4 mb-6",
                        h2 {
                            class: "text-lg font-semibold",
                            "Subscribers ({data.total})"
                        }
                        div {
                            class: "flex gap-2",
                            button {
                                class: "btn",
                                onclick: move |_| show_import_modal.set(true),
                                "Import"
                            }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| show_add_modal.set(true),
                                "Add Subscriber"
                            }
                        }
                    }

                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            SubscriberTable {
                                subscribers: data.subscribers.clone(),
                                refetch_trigger
                            }
                            Pagination {
                                page,
                                per_page,
                                data: PaginationData {
                                    page: data.page,
                                    per_page: data.per_page,
                                    total: data.total,
                                    total_pages: data.total_pages,
                                },
                                on_page_change: move |_| {},
                                on_per_page_change: move |_| {},
                            }
                        }
                    }
                }
            }

            AddSubscriberModal {
                show: show_add_modal,
                refetch_trigger
            }

            ImportModal {
                show: show_import_modal,
                refetch_trigger
            }
        } else if let Some(Err(err)) = subscribers() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}

#[component]
fn SubscriberTable(subscribers: Vec<SubscriberDto>, refetch_trigger: Signal<u32>) -> Element {
    let mut subscriber_to_edit = use_signal(|| None::<SubscriberDto>);
    let mut show_edit_modal = use_signal(|| false);

    let mut subscriber_to_delete = use_signal(|| None::<(i32, String)>);
    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let mut refetch_trigger = refetch_trigger;
        let delete_future = use_resource(move || async move {
            if is_deleting() {
                if let Some((id, _)) = subscriber_to_delete() {
                    Some(delete_subscriber(id).await)
                } else {
                    None
                }
            } else {
                None
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show_delete_modal.set(false);
                        is_deleting.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to delete subscriber: {}", err);
                        is_deleting.set(false);
                    }
                }
            }
        });
    }

    rsx! {
        if subscribers.is_empty() {
            div {
                class: "text-center py-8 opacity-50",
                "No subscribers yet"
            }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Phone" }
                            th { "Status" }
                            th { "Announcements" }
                            th { "Reminders" }
                            th { "Audio" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for subscriber in &subscribers {
                            {
                                let edit_copy = subscriber.clone();
                                let delete_id = subscriber.id;
                                let delete_phone = subscriber.phone.clone();
                                rsx! {
                                    tr {
                                        td { class: "font-mono", "{subscriber.phone}" }
                                        td {
                                            span {
                                                class: match subscriber.status.as_str() {
                                                    "active" => "badge badge-success",
                                                    "paused" => "badge badge-warning",
                                                    _ => "badge badge-ghost",
                                                },
                                                "{subscriber.status}"
                                            }
                                        }
                                        td { PrefBadge { enabled: subscriber.notify_announcements } }
                                        td { PrefBadge { enabled: subscriber.notify_prayer_reminders } }
                                        td { PrefBadge { enabled: subscriber.notify_audio } }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm",
                                                    onclick: move |_| {
                                                        subscriber_to_edit.set(Some(edit_copy.clone()));
                                                        show_edit_modal.set(true);
                                                    },
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    onclick: move |_| {
                                                        subscriber_to_delete.set(Some((delete_id, delete_phone.clone())));
                                                        show_delete_modal.set(true);
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(subscriber) = subscriber_to_edit() {
            EditSubscriberModal {
                show: show_edit_modal,
                subscriber,
                refetch_trigger
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Subscriber".to_string(),
            message: rsx!(
                if let Some((_, phone)) = subscriber_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold font-mono", "{phone}" }
                        "? They will no longer receive any messages."
                    }
                }
            ),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| {
                is_deleting.set(true);
            },
        }
    }
}

#[component]
fn PrefBadge(enabled: bool) -> Element {
    rsx!(
        if enabled {
            span { class: "badge badge-sm badge-primary", "on" }
        } else {
            span { class: "badge badge-sm badge-ghost", "off" }
        }
    )
}

#[component]
fn AddSubscriberModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut phone = use_signal(String::new);
    let mut notify_announcements = use_signal(|| true);
    let mut notify_prayer_reminders = use_signal(|| false);
    let mut notify_audio = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            phone.set(String::new());
            notify_announcements.set(true);
            notify_prayer_reminders.set(false);
            notify_audio.set(false);
            error_message.set(None);
            is_submitting.set(false);
        }
    });

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

            spawn(async move {
                let dto = SubscribeRequestDto {
                    phone: phone(),
                    notify_announcements: notify_announcements(),
                    notify_prayer_reminders: notify_prayer_reminders(),
                    notify_audio: notify_audio(),
                };

                match create_subscriber(dto).await {
                    Ok(_) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to add subscriber: {}", err);
                        error_message.set(Some(err.message));
                    }
                }
                is_submitting.set(false);
            });
        }
    };

    rsx!(
        Modal {
            show,
            title: "Add Subscriber".to_string(),
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                input {
                    r#type: "tel",
                    class: "input input-bordered w-full",
                    placeholder: "Phone number",
                    required: true,
                    value: "{phone()}",
                    oninput: move |evt| phone.set(evt.value()),
                }
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
                    span { class: "label-text", "New audio" }
                }
                if let Some(message) = error_message() {
                    p { class: "text-error text-sm", "{message}" }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_submitting(),
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        if is_submitting() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Adding..."
                        } else {
                            "Add"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn EditSubscriberModal(
    mut show: Signal<bool>,
    subscriber: SubscriberDto,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut status = use_signal(|| subscriber.status.clone());
    let mut notify_announcements = use_signal(|| subscriber.notify_announcements);
    let mut notify_prayer_reminders = use_signal(|| subscriber.notify_prayer_reminders);
    let mut notify_audio = use_signal(|| subscriber.notify_audio);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let subscriber_id = subscriber.id;
    let reminder_offset_minutes = subscriber.reminder_offset_minutes;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);

            spawn(async move {
                let dto = UpdateSubscriberDto {
                    status: status(),
                    notify_announcements: notify_announcements(),
                    notify_prayer_reminders: notify_prayer_reminders(),
                    notify_audio: notify_audio(),
                    reminder_offset_minutes,
                };

                match update_subscriber(subscriber_id, dto).await {
                    Ok(_) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to update subscriber: {}", err);
                        error_message.set(Some(err.message));
                    }
                }
                is_submitting.set(false);
            });
        }
    };

    rsx!(
        Modal {
            show,
            title: "Edit {subscriber.phone}".to_string(),
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                label {
                    class: "form-control w-full",
                    span { class: "label-text mb-1", "Status" }
                    select {
                        class: "select select-bordered w-full",
                        value: "{status()}",
                        onchange: move |evt| status.set(evt.value()),
                        option { value: "active", "Active" }
                        option { value: "paused", "Paused" }
                        option { value: "unsubscribed", "Unsubscribed" }
                    }
                }
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
                    span { class: "label-text", "New audio" }
                }
                if let Some(message) = error_message() {
                    p { class: "text-error text-sm", "{message}" }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_submitting(),
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        if is_submitting() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Saving..."
                        } else {
                            "Save"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ImportModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut raw_input = use_signal(String::new);
    let mut result_message = use_signal(|| None::<String>);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            raw_input.set(String::new());
            result_message.set(None);
            error_message.set(None);
            is_submitting.set(false);
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let records: Vec<ImportSubscriberDto> = raw_input()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| ImportSubscriberDto {
                phone: line.to_string(),
                notify_announcements: true,
                notify_prayer_reminders: false,
                notify_audio: false,
            })
            .collect();

        if records.is_empty() {
            error_message.set(Some("Enter at least one phone number.".to_string()));
            return;
        }

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);
            error_message.set(None);

            spawn(async move {
                match import_subscribers(records).await {
                    Ok(outcome) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        result_message.set(Some(format!(
                            "Imported {}, skipped {} invalid, {} failed.",
                            outcome.imported, outcome.skipped, outcome.errors
                        )));
                    }
                    Err(err) => {
                        tracing::error!("Failed to import subscribers: {}", err);
                        error_message.set(Some(err.message));
                    }
                }
                is_submitting.set(false);
            });
        }
    };

    rsx!(
        Modal {
            show,
            title: "Import Subscribers".to_string(),
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                p {
                    class: "text-sm opacity-70",
                    "Paste phone numbers, one per line. Up to 1000 numbers per import. Numbers already subscribed keep their existing preferences."
                }
                textarea {
                    class: "textarea textarea-bordered w-full h-48 font-mono",
                    placeholder: "082 123 4567\n+27831234567\n...",
                    value: "{raw_input()}",
                    oninput: move |evt| raw_input.set(evt.value()),
                }
                if let Some(message) = result_message() {
                    p { class: "text-success text-sm", "{message}" }
                }
                if let Some(message) = error_message() {
                    p { class: "text-error text-sm", "{message}" }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_submitting(),
                        onclick: move |_| show.set(false),
                        "Close"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        if is_submitting() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Importing..."
                        } else {
                            "Import"
                        }
                    }
                }
            }
        }
    )
}
