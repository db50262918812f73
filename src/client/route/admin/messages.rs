use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

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
    model::message::{CreateMessageDto, MessageDto, PaginatedMessagesDto, UpdateMessageDto},
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::message::{
    create_message, delete_message, get_messages, send_message, update_message,
};

#[component]
pub fn AdminMessages() -> Element {
    let mut messages = use_signal(|| None::<Result<PaginatedMessagesDto, ApiError>>);
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    let refetch_trigger = use_signal(|| 0u32);

    let mut show_create_modal = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_messages(page(), per_page()).await
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch messages: {}", err);
                }
                messages.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Messages | {SITE_NAME}" }
        if let Some(Ok(data)) = messages() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-6xl",
                    h1 {
                        class: "text-lg sm:text-2xl mb-6",
                        "Dashboard"
                    }

                    AdminTabs { active_tab: AdminTab::Messages }

                    div {
                        class: "flex items-center justify-between gap-4 mb-6",
                        h2 {
                            class: "text-lg font-semibold",
                            "Messages ({data.total})"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_create_modal.set(true),
                            "New Message"
                        }
                    }

                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            MessageTable {
                                messages: data.messages.clone(),
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

            MessageFormModal {
                show: show_create_modal,
                message: None::<MessageDto>,
                refetch_trigger
            }
        } else if let Some(Err(err)) = messages() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}

fn status_badge_class(status: &str) -> &'static str {
    match status {
        "sent" => "badge badge-success",
        "scheduled" => "badge badge-info",
        "sending" => "badge badge-warning",
        "failed" => "badge badge-error",
        _ => "badge badge-ghost",
    }
}

#[component]
fn MessageTable(messages: Vec<MessageDto>, refetch_trigger: Signal<u32>) -> Element {
    let mut message_to_edit = use_signal(|| None::<MessageDto>);
    let mut show_edit_modal = use_signal(|| false);

    let mut message_to_view = use_signal(|| None::<MessageDto>);
    let mut show_view_modal = use_signal(|| false);

    let mut message_to_delete = use_signal(|| None::<(i32, String)>);
    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    let mut message_to_send = use_signal(|| None::<(i32, String)>);
    let mut show_send_modal = use_signal(|| false);
    let mut is_sending = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let mut refetch_trigger = refetch_trigger;
        let delete_future = use_resource(move || async move {
            if is_deleting() {
                if let Some((id, _)) = message_to_delete() {
                    Some(delete_message(id).await)
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
                        tracing::error!("Failed to delete message: {}", err);
                        is_deleting.set(false);
                    }
                }
            }
        });

        let send_future = use_resource(move || async move {
            if is_sending() {
                if let Some((id, _)) = message_to_send() {
                    Some(send_message(id).await)
                } else {
                    None
                }
            } else {
                None
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = send_future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show_send_modal.set(false);
                        is_sending.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to send message: {}", err);
                        is_sending.set(false);
                    }
                }
            }
        });
    }

    rsx! {
        if messages.is_empty() {
            div {
                class: "text-center py-8 opacity-50",
                "No messages yet"
            }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Category" }
                            th { "Status" }
                            th { "Scheduled" }
                            th { "Recipients" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for message in &messages {
                            {
                                let editable = message.status == "draft" || message.status == "scheduled";
                                let view_copy = message.clone();
                                let edit_copy = message.clone();
                                let send_id = message.id;
                                let send_title = message.title.clone();
                                let delete_id = message.id;
                                let delete_title = message.title.clone();
                                rsx! {
                                    tr {
                                        td { "{message.title}" }
                                        td { "{message.category}" }
                                        td {
                                            span {
                                                class: status_badge_class(&message.status),
                                                "{message.status}"
                                            }
                                        }
                                        td {
                                            if let Some(scheduled_at) = &message.scheduled_at {
                                                "{scheduled_at}"
                                            } else {
                                                span { class: "opacity-50", "-" }
                                            }
                                        }
                                        td {
                                            if message.status == "sent" {
                                                "{message.recipient_count}"
                                            } else {
                                                span { class: "opacity-50", "-" }
                                            }
                                        }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm",
                                                    onclick: move |_| {
                                                        message_to_view.set(Some(view_copy.clone()));
                                                        show_view_modal.set(true);
                                                    },
                                                    "View"
                                                }
                                                if editable {
                                                    button {
                                                        class: "btn btn-sm",
                                                        onclick: move |_| {
                                                            message_to_edit.set(Some(edit_copy.clone()));
                                                            show_edit_modal.set(true);
                                                        },
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-primary",
                                                        onclick: move |_| {
                                                            message_to_send.set(Some((send_id, send_title.clone())));
                                                            show_send_modal.set(true);
                                                        },
                                                        "Send Now"
                                                    }
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    onclick: move |_| {
                                                        message_to_delete.set(Some((delete_id, delete_title.clone())));
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

        if let Some(message) = message_to_edit() {
            MessageFormModal {
                show: show_edit_modal,
                message: Some(message),
                refetch_trigger
            }
        }

        if let Some(message) = message_to_view() {
            MessageViewModal {
                show: show_view_modal,
                message
            }
        }

        ConfirmationModal {
            show: show_send_modal,
            title: "Send Message".to_string(),
            message: rsx!(
                if let Some((_, title)) = message_to_send() {
                    p {
                        class: "py-4",
                        "Send "
                        span { class: "font-bold", "\"{title}\"" }
                        " to all matching subscribers now?"
                    }
                }
            ),
            confirm_text: "Send Now".to_string(),
            confirm_class: "btn-primary".to_string(),
            is_processing: is_sending(),
            processing_text: "Sending...".to_string(),
            on_confirm: move |_| {
                is_sending.set(true);
            },
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Message".to_string(),
            message: rsx!(
                if let Some((_, title)) = message_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{title}\"" }
                        "?"
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
fn MessageViewModal(show: Signal<bool>, message: MessageDto) -> Element {
    rsx!(
        Modal {
            show,
            title: message.title.clone(),
            prevent_close: false,
            div {
                class: "flex flex-col gap-4",
                div {
                    class: "flex items-center gap-2",
                    span {
                        class: status_badge_class(&message.status),
                        "{message.status}"
                    }
                    span { class: "badge badge-outline", "{message.category}" }
                    if let Some(scheduled_at) = &message.scheduled_at {
                        span { class: "text-sm opacity-70", "{scheduled_at}" }
                    }
                }
                div {
                    class: "textarea textarea-bordered min-h-32 max-h-96 w-full bg-base-200 overflow-y-auto prose prose-sm max-w-none",
                    if !message.body.is_empty() {
                        // Parse markdown to HTML
                        {
                            let options = Options::all();
                            let parser = Parser::new_ext(&message.body, options);
                            let mut html_output = String::new();
                            html::push_html(&mut html_output, parser);
                            rsx! {
                                div {
                                    dangerous_inner_html: "{html_output}"
                                }
                            }
                        }
                    } else {
                        span { class: "opacity-50 italic", "No message body" }
                    }
                }
            }
        }
    )
}

/// Create and edit share one modal; `message` is `Some` when editing.
#[component]
fn MessageFormModal(
    mut show: Signal<bool>,
    message: Option<MessageDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let editing = message.clone();
    let message_id = editing.as_ref().map(|m| m.id);

    let mut title = use_signal(|| editing.as_ref().map(|m| m.title.clone()).unwrap_or_default());
    let mut body = use_signal(|| editing.as_ref().map(|m| m.body.clone()).unwrap_or_default());
    let mut category = use_signal(|| {
        editing
            .as_ref()
            .map(|m| m.category.clone())
            .unwrap_or_else(|| "announcement".to_string())
    });
    let mut scheduled_at = use_signal(|| {
        editing
            .as_ref()
            .and_then(|m| m.scheduled_at.clone())
            .unwrap_or_default()
    });
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let modal_title = if message_id.is_some() {
        "Edit Message"
    } else {
        "New Message"
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);
            error_message.set(None);

            spawn(async move {
                let schedule = Some(scheduled_at()).filter(|value| !value.is_empty());

                let result = if let Some(id) = message_id {
                    update_message(
                        id,
                        UpdateMessageDto {
                            title: title(),
                            body: body(),
                            category: category(),
                            scheduled_at: schedule,
                        },
                    )
                    .await
                } else {
                    create_message(CreateMessageDto {
                        title: title(),
                        body: body(),
                        category: category(),
                        scheduled_at: schedule,
                    })
                    .await
                };

                match result {
                    Ok(_) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to save message: {}", err);
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
            title: modal_title.to_string(),
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                input {
                    r#type: "text",
                    class: "input input-bordered w-full",
                    placeholder: "Title",
                    required: true,
                    value: "{title()}",
                    oninput: move |evt| title.set(evt.value()),
                }
                textarea {
                    class: "textarea textarea-bordered w-full h-32",
                    placeholder: "Message body",
                    required: true,
                    value: "{body()}",
                    oninput: move |evt| body.set(evt.value()),
                }
                label {
                    class: "form-control w-full",
                    span { class: "label-text mb-1", "Category" }
                    select {
                        class: "select select-bordered w-full",
                        value: "{category()}",
                        onchange: move |evt| category.set(evt.value()),
                        option { value: "announcement", "Announcement" }
                        option { value: "prayer_reminder", "Prayer reminder" }
                        option { value: "audio", "Audio" }
                    }
                }
                label {
                    class: "form-control w-full",
                    span { class: "label-text mb-1", "Schedule (UTC, optional)" }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        placeholder: "2026-09-01T17:00:00Z",
                        value: "{scheduled_at()}",
                        oninput: move |evt| scheduled_at.set(evt.value()),
                    }
                    span {
                        class: "label-text-alt opacity-70 mt-1",
                        "Leave empty to save as a draft."
                    }
                }
                if let Some(msg) = error_message() {
                    p { class: "text-error text-sm", "{msg}" }
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
