use dioxus::prelude::*;

/// Keys that dismiss an open dialog.
fn dismisses(key: &Key) -> bool {
    matches!(key, Key::Escape)
}

/// Full-screen backdrop holding one dialog card.
///
/// Takes focus when mounted so Escape closes it, as does a click on the
/// backdrop. Clicks inside the card stay inside.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default = "Dialog".to_string())] label: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                if dismisses(&evt.key()) {
                    on_close.call(());
                }
            },
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{label}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no confirmation shown before a destructive action.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            label: "Confirm {confirm_label}",
            div {
                class: "confirm-dialog",
                p { "{message}" }
                div {
                    class: "confirm-actions",
                    button {
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
