use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Centered dialog closed by Escape, the overlay or the close button.
///
/// `dismissable` is read before closing so a running submit cannot be interrupted.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(into, optional)] dismissable: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let can_close = move || dismissable.map(|d| d.get_untracked()).unwrap_or(true);
    let close = move || {
        if can_close() {
            on_close.run(());
        }
    };

    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div class="modal" role="dialog" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| close()>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Yes/no confirmation used before destructive actions.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal
            title=title
            on_close=on_cancel
            dismissable=Signal::derive(move || !busy.get())
        >
            <p>{message}</p>
            <div class="modal-footer">
                <button class="button button--secondary" on:click=move |_| on_cancel.run(()) disabled=move || busy.get()>
                    "Batal"
                </button>
                <button class="button button--danger" on:click=move |_| on_confirm.run(()) disabled=move || busy.get()>
                    {move || if busy.get() { "Menghapus..." } else { "Hapus" }}
                </button>
            </div>
        </Modal>
    }
}
