use dioxus::prelude::*;

use super::Modal;

#[derive(Clone, PartialEq)]
pub struct PaginationData {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// Table pagination bar with a per-page selector and a page-jump modal.
///
/// `page` is zero-indexed in signals and data; only the labels shown to the
/// admin are one-indexed.
#[component]
pub fn Pagination(
    page: Signal<u64>,
    per_page: Signal<u64>,
    data: PaginationData,
    on_page_change: EventHandler<u64>,
    on_per_page_change: EventHandler<u64>,
) -> Element {
    let mut show_page_jump = use_signal(|| false);
    let mut jump_page_input = use_signal(String::new);

    // An empty table still renders as "page 1 of 1"
    let last_page = data.total_pages.max(1) - 1;
    let showing_from = (data.page * data.per_page + 1).min(data.total);
    let showing_to = ((data.page + 1) * data.per_page).min(data.total);

    let mut go_to = move |new_page: u64| {
        page.set(new_page);
        on_page_change.call(new_page);
    };

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{per_page()}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            per_page.set(value);
                            go_to(0);
                            on_per_page_change.call(value);
                        }
                    },
                    option { value: "10", "10" }
                    option { value: "25", "25" }
                    option { value: "50", "50" }
                    option { value: "100", "100" }
                }
                span { "entries" }
            }

            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "Showing {showing_from} to {showing_to} of {data.total}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.page == 0,
                        onclick: move |_| {
                            if page() > 0 {
                                go_to(page() - 1);
                            }
                        },
                        "«"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        onclick: move |_| {
                            jump_page_input.set((data.page + 1).to_string());
                            show_page_jump.set(true);
                        },
                        "Page {data.page + 1} of {last_page + 1}"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.page >= last_page,
                        onclick: move |_| {
                            if page() < last_page {
                                go_to(page() + 1);
                            }
                        },
                        "»"
                    }
                }
            }
        }

        Modal {
            show: show_page_jump,
            title: "Jump to Page".to_string(),
            prevent_close: false,
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Ok(target_page) = jump_page_input().parse::<u64>() {
                        if target_page >= 1 && target_page <= last_page + 1 {
                            go_to(target_page - 1);
                            show_page_jump.set(false);
                        }
                    }
                },
                div {
                    class: "form-control w-full flex flex-col gap-3",
                    label {
                        class: "label",
                        span {
                            class: "label-text",
                            "Page number (1-{last_page + 1})"
                        }
                    }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        min: "1",
                        max: "{last_page + 1}",
                        value: "{jump_page_input()}",
                        oninput: move |evt| jump_page_input.set(evt.value()),
                        autofocus: true,
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show_page_jump.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        "Jump"
                    }
                }
            }
        }
    )
}
