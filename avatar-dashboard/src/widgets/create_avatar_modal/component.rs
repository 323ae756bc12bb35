use avatar_shared::{AvatarType, DismissReason};
use dioxus::prelude::*;
use strum::IntoEnumIterator;

/// Floating action button that opens the creation dialog.
#[component]
pub fn CreateButton(on_create: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "fab",
            r#type: "button",
            onclick: move |e| on_create.call(e),
            span { class: "btn-icon", "+" }
            span { "Create New Avatar" }
        }
    }
}

/// Button that closes the dialog, tagged with the reason it reports.
#[component]
fn DismissButton(
    class: String,
    label: String,
    reason: DismissReason,
    on_dismiss: EventHandler<DismissReason>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class,
            r#type: "button",
            aria_label: "{label}",
            "data-dismiss": "{reason}",
            onclick: move |_| on_dismiss.call(reason),
            {children}
        }
    }
}

/// Static creation dialog. Nothing entered here is submitted anywhere.
#[component]
pub fn CreateAvatarModal(on_dismiss: EventHandler<DismissReason>) -> Element {
    let backdrop = DismissReason::Backdrop;
    let type_options = AvatarType::iter().map(|avatar_type| {
        let label = avatar_type.short_label();
        rsx! {
            option { value: avatar_type.form_value(), "{label}" }
        }
    });

    rsx! {
        div { class: "modal",
            // Sibling of the surface, so clicks on the surface never reach it.
            div {
                class: "modal-backdrop",
                "data-dismiss": "{backdrop}",
                onclick: move |_| on_dismiss.call(backdrop),
            }

            div { class: "modal-surface", role: "dialog",
                div { class: "modal-header",
                    h3 { "Create New Avatar" }
                    DismissButton {
                        class: "modal-close".to_string(),
                        label: "Close".to_string(),
                        reason: DismissReason::CloseButton,
                        on_dismiss,
                        "✕"
                    }
                }

                div { class: "modal-body",
                    div { class: "avatar-slot",
                        span { class: "avatar-slot-icon", "🤖" }
                    }

                    div { class: "form-group",
                        label { r#for: "name", "Avatar Name" }
                        input {
                            r#type: "text",
                            id: "name",
                            placeholder: "Enter avatar name",
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "type", "Avatar Type" }
                        select { id: "type",
                            option { value: "", "Select avatar type" }
                            {type_options}
                        }
                    }

                    div { class: "form-group",
                        label { "Upload Image" }
                        div { class: "drop-zone",
                            span { class: "drop-zone-icon", "+" }
                            p { "Click to upload or drag and drop" }
                            p { class: "drop-zone-hint", "PNG, JPG up to 5MB" }
                        }
                    }
                }

                div { class: "modal-footer",
                    DismissButton {
                        class: "btn-secondary".to_string(),
                        label: "Cancel".to_string(),
                        reason: DismissReason::Cancel,
                        on_dismiss,
                        "Cancel"
                    }
                    button { class: "btn-primary", r#type: "button", "Create Avatar" }
                }
            }
        }
    }
}
