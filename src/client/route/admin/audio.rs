use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            ConfirmationModal, Modal, Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        route::admin::{AdminTab, AdminTabs},
    },
    model::audio::{
        AudioCollectionDto, AudioFileDto, CreateAudioFileDto, CreateCollectionDto, UploadUrlDto,
        UploadUrlRequestDto,
    },
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::audio::{
    create_collection, create_file, create_upload_url, delete_collection, delete_file,
    get_collections, get_files,
};

#[component]
pub fn AdminAudio() -> Element {
    let mut collections = use_signal(|| None::<Result<Vec<AudioCollectionDto>, ApiError>>);
    let mut selected_collection_id = use_signal(|| None::<i32>);
    let refetch_trigger = use_signal(|| 0u32);

    let mut show_create_modal = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_collections().await
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch collections: {}", err);
                }
                collections.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Audio | {SITE_NAME}" }
        if let Some(Ok(collection_list)) = collections() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-6xl",
                    h1 {
                        class: "text-lg sm:text-2xl mb-6",
                        "Dashboard"
                    }

                    AdminTabs { active_tab: AdminTab::Audio }

                    div {
                        class: "flex items-center justify-between gap-4 mb-6",
                        h2 {
                            class: "text-lg font-semibold",
                            "Audio Collections"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_create_modal.set(true),
                            "New Collection"
                        }
                    }

                    if collection_list.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No collections yet"
                        }
                    } else {
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 mb-6",
                            for collection in &collection_list {
                                {
                                    let id = collection.id;
                                    let is_selected = selected_collection_id() == Some(id);
                                    rsx! {
                                        button {
                                            class: if is_selected {
                                                "card bg-base-300 text-left"
                                            } else {
                                                "card bg-base-200 hover:bg-base-300 transition-colors text-left"
                                            },
                                            onclick: move |_| selected_collection_id.set(Some(id)),
                                            div {
                                                class: "card-body",
                                                h3 {
                                                    class: "font-semibold",
                                                    "{collection.title}"
                                                }
                                                if let Some(description) = &collection.description {
                                                    p {
                                                        class: "text-sm opacity-70",
                                                        "{description}"
                                                    }
                                                }
                                                p {
                                                    class: "text-sm opacity-70",
                                                    "{collection.file_count} files"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if let Some(collection_id) = selected_collection_id() {
                        CollectionFiles {
                            collection_id,
                            selected_collection_id,
                            refetch_trigger
                        }
                    }
                }
            }

            CreateCollectionModal {
                show: show_create_modal,
                refetch_trigger
            }
        } else if let Some(Err(err)) = collections() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}

#[component]
fn CollectionFiles(
    collection_id: i32,
    mut selected_collection_id: Signal<Option<i32>>,
    refetch_trigger: Signal<u32>,
) -> Element {
    let mut files = use_signal(|| None::<Result<Vec<AudioFileDto>, ApiError>>);
    let files_refetch = use_signal(|| 0u32);

    let mut show_add_file_modal = use_signal(|| false);

    let mut show_delete_collection_modal = use_signal(|| false);
    let mut is_deleting_collection = use_signal(|| false);

    let mut file_to_delete = use_signal(|| None::<(i32, String)>);
    let mut show_delete_file_modal = use_signal(|| false);
    let mut is_deleting_file = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = files_refetch();
            get_files(collection_id).await
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch audio files: {}", err);
                }
                files.set(Some(result.clone()));
            }
        });

        let mut refetch_trigger = refetch_trigger;
        let delete_collection_future = use_resource(move || async move {
            if is_deleting_collection() {
                Some(delete_collection(collection_id).await)
            } else {
                None
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = delete_collection_future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        selected_collection_id.set(None);
                        refetch_trigger.set(refetch_trigger() + 1);
                        show_delete_collection_modal.set(false);
                        is_deleting_collection.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to delete collection: {}", err);
                        is_deleting_collection.set(false);
                    }
                }
            }
        });

        let mut files_refetch = files_refetch;
        let delete_file_future = use_resource(move || async move {
            if is_deleting_file() {
                if let Some((id, _)) = file_to_delete() {
                    Some(delete_file(collection_id, id).await)
                } else {
                    None
                }
            } else {
                None
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = delete_file_future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        files_refetch.set(files_refetch() + 1);
                        refetch_trigger.set(refetch_trigger() + 1);
                        show_delete_file_modal.set(false);
                        is_deleting_file.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to delete audio file: {}", err);
                        is_deleting_file.set(false);
                    }
                }
            }
        });
    }

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex items-center justify-between gap-4 mb-4",
                    h3 {
                        class: "font-semibold",
                        "Files"
                    }
                    div {
                        class: "flex gap-2",
                        button {
                            class: "btn btn-sm btn-primary",
                            onclick: move |_| show_add_file_modal.set(true),
                            "Add File"
                        }
                        button {
                            class: "btn btn-sm btn-error",
                            onclick: move |_| show_delete_collection_modal.set(true),
                            "Delete Collection"
                        }
                    }
                }

                if let Some(Ok(file_list)) = files() {
                    if file_list.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No files in this collection"
                        }
                    } else {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Title" }
                                        th { "Duration" }
                                        th { "Size" }
                                        th { class: "text-right", "Actions" }
                                    }
                                }
                                tbody {
                                    for file in &file_list {
                                        {
                                            let delete_id = file.id;
                                            let delete_title = file.title.clone();
                                            let duration = file
                                                .duration_seconds
                                                .map(|s| format!("{}:{:02}", s / 60, s % 60));
                                            let size = file
                                                .size_bytes
                                                .map(|b| format!("{:.1} MB", b as f64 / (1024.0 * 1024.0)));
                                            rsx! {
                                                tr {
                                                    td {
                                                        a {
                                                            href: "{file.storage_url}",
                                                            target: "_blank",
                                                            class: "link",
                                                            "{file.title}"
                                                        }
                                                    }
                                                    td {
                                                        if let Some(duration) = duration {
                                                            "{duration}"
                                                        } else {
                                                            span { class: "opacity-50", "-" }
                                                        }
                                                    }
                                                    td {
                                                        if let Some(size) = size {
                                                            "{size}"
                                                        } else {
                                                            span { class: "opacity-50", "-" }
                                                        }
                                                    }
                                                    td {
                                                        div {
                                                            class: "flex gap-2 justify-end",
                                                            button {
                                                                class: "btn btn-sm btn-error",
                                                                onclick: move |_| {
                                                                    file_to_delete.set(Some((delete_id, delete_title.clone())));
                                                                    show_delete_file_modal.set(true);
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
                } else if let Some(Err(err)) = files() {
                    p { class: "text-error", "{err.message}" }
                } else {
                    div {
                        class: "flex justify-center py-8",
                        span { class: "loading loading-spinner" }
                    }
                }
            }
        }

        AddFileModal {
            show: show_add_file_modal,
            collection_id,
            files_refetch,
            refetch_trigger
        }

        ConfirmationModal {
            show: show_delete_collection_modal,
            title: "Delete Collection".to_string(),
            message: rsx!(
                p {
                    class: "py-4",
                    "Are you sure you want to delete this collection and all of its file records? The audio files themselves remain in storage."
                }
            ),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting_collection(),
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| {
                is_deleting_collection.set(true);
            },
        }

        ConfirmationModal {
            show: show_delete_file_modal,
            title: "Delete File".to_string(),
            message: rsx!(
                if let Some((_, title)) = file_to_delete() {
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
            is_processing: is_deleting_file(),
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| {
                is_deleting_file.set(true);
            },
        }
    }
}

#[component]
fn CreateCollectionModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            title.set(String::new());
            description.set(String::new());
            error_message.set(None);
            is_submitting.set(false);
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);

            spawn(async move {
                let dto = CreateCollectionDto {
                    title: title(),
                    description: Some(description()).filter(|value| !value.is_empty()),
                };

                match create_collection(dto).await {
                    Ok(_) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to create collection: {}", err);
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
            title: "New Collection".to_string(),
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                input {
                    r#type: "text",
                    class: "input input-bordered w-full",
                    placeholder: "Title, e.g. Friday Khutbahs",
                    required: true,
                    value: "{title()}",
                    oninput: move |evt| title.set(evt.value()),
                }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Description (optional)",
                    value: "{description()}",
                    oninput: move |evt| description.set(evt.value()),
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
                            "Creating..."
                        } else {
                            "Create"
                        }
                    }
                }
            }
        }
    )
}

/// Two-step flow: request a signed upload URL for the file, then register
/// the metadata once the upload has completed out of band.
#[component]
fn AddFileModal(
    mut show: Signal<bool>,
    collection_id: i32,
    mut files_refetch: Signal<u32>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut file_name = use_signal(String::new);
    let mut content_type = use_signal(|| "audio/mpeg".to_string());
    let mut upload_urls = use_signal(|| None::<UploadUrlDto>);

    let mut title = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    // Reset the whole flow when the modal opens
    use_effect(move || {
        if show() {
            file_name.set(String::new());
            content_type.set("audio/mpeg".to_string());
            upload_urls.set(None);
            title.set(String::new());
            error_message.set(None);
            is_submitting.set(false);
        }
    });

    let on_request_url = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);
            error_message.set(None);

            spawn(async move {
                let dto = UploadUrlRequestDto {
                    file_name: file_name(),
                    content_type: content_type(),
                };

                match create_upload_url(collection_id, dto).await {
                    Ok(urls) => {
                        upload_urls.set(Some(urls));
                    }
                    Err(err) => {
                        tracing::error!("Failed to create upload URL: {}", err);
                        error_message.set(Some(err.message));
                    }
                }
                is_submitting.set(false);
            });
        }
    };

    let on_register = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let Some(urls) = upload_urls() else {
                return;
            };

            is_submitting.set(true);
            error_message.set(None);

            spawn(async move {
                let dto = CreateAudioFileDto {
                    title: title(),
                    storage_url: urls.public_url.clone(),
                    duration_seconds: None,
                    size_bytes: None,
                };

                match create_file(collection_id, dto).await {
                    Ok(_) => {
                        files_refetch.set(files_refetch() + 1);
                        refetch_trigger.set(refetch_trigger() + 1);
                        show.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to register audio file: {}", err);
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
            title: "Add File".to_string(),
            prevent_close: is_submitting(),
            if let Some(urls) = upload_urls() {
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: on_register,
                    p {
                        class: "text-sm opacity-70",
                        "Upload the file with a PUT request to the signed URL below, then register it."
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full font-mono text-xs",
                        readonly: true,
                        value: "{urls.upload_url}",
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        placeholder: "Title shown to listeners",
                        required: true,
                        value: "{title()}",
                        oninput: move |evt| title.set(evt.value()),
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
                                "Registering..."
                            } else {
                                "Register File"
                            }
                        }
                    }
                }
            } else {
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: on_request_url,
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        placeholder: "File name, e.g. khutbah-2026-08-28.mp3",
                        required: true,
                        value: "{file_name()}",
                        oninput: move |evt| file_name.set(evt.value()),
                    }
                    label {
                        class: "form-control w-full",
                        span { class: "label-text mb-1", "Content type" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{content_type()}",
                            onchange: move |evt| content_type.set(evt.value()),
                            option { value: "audio/mpeg", "MP3" }
                            option { value: "audio/mp4", "M4A" }
                            option { value: "audio/ogg", "OGG" }
                        }
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
                                "Requesting..."
                            } else {
                                "Get Upload URL"
                            }
                        }
                    }
                }
            }
        }
    )
}
