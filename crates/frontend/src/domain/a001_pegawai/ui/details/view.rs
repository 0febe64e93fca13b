use contracts::domain::a001_pegawai::aggregate::{PegawaiForm, GOLONGAN_OPTIONS};
use contracts::system::auth::Role;
use leptos::prelude::*;

use super::view_model::{PegawaiDetailsViewModel, PegawaiDraft};
use crate::shared::components::form_field::{FormField, SelectField};
use crate::shared::dialog::DialogState;
use crate::shared::modal::Modal;

#[component]
pub fn PegawaiDetails(
    dialog: RwSignal<DialogState<PegawaiDraft>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = PegawaiDetailsViewModel::new(dialog);
    let busy = Signal::derive(move || vm.is_submitting());

    let text = move |read: fn(&PegawaiForm) -> &String| {
        Signal::derive(move || vm.field(|f| read(f).clone()))
    };

    let role_options: Vec<(String, String)> = Role::SELECTABLE
        .iter()
        .map(|r| (r.as_str().to_string(), r.label()))
        .collect();
    let golongan_options: Vec<(String, String)> = GOLONGAN_OPTIONS
        .iter()
        .map(|g| (g.to_string(), g.to_string()))
        .collect();

    let title = if vm.is_edit_mode() {
        "Edit Pegawai"
    } else {
        "Tambah Pegawai Baru"
    };

    view! {
        <Modal
            title=title
            on_close=Callback::new(move |_| {
                dialog.update(|d| {
                    d.close();
                });
            })
            dismissable=Signal::derive(move || !busy.get())
        >
            {move || dialog.with(|d| d.error().map(|e| e.to_string())).map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <div class="details-form">
                <FormField
                    label="Nama Lengkap"
                    value=text(|f| &f.nama)
                    on_input=Callback::new(move |v| vm.set_field(|f| f.nama = v))
                    disabled=busy
                />
                <FormField
                    label="Email"
                    input_type="email"
                    value=text(|f| &f.email)
                    on_input=Callback::new(move |v| vm.set_field(|f| f.email = v))
                    disabled=busy
                />
                <Show when=move || !vm.is_edit_mode()>
                    <FormField
                        label="Password"
                        input_type="password"
                        placeholder="Minimal 6 karakter"
                        value=Signal::derive(move || vm.field(|f| f.password.clone().unwrap_or_default()))
                        on_input=Callback::new(move |v| vm.set_field(|f| f.password = Some(v)))
                        disabled=busy
                    />
                </Show>
                <FormField
                    label="NIP"
                    value=text(|f| &f.nip)
                    on_input=Callback::new(move |v| vm.set_field(|f| f.nip = v))
                    disabled=busy
                />
                <FormField
                    label="Jabatan"
                    value=text(|f| &f.jabatan)
                    on_input=Callback::new(move |v| vm.set_field(|f| f.jabatan = v))
                    disabled=busy
                />
                <SelectField
                    label="Golongan"
                    value=text(|f| &f.golongan)
                    on_change=Callback::new(move |v| vm.set_field(|f| f.golongan = v))
                    options=golongan_options
                    disabled=busy
                />
                <SelectField
                    label="Role"
                    value=text(|f| &f.role)
                    on_change=Callback::new(move |v| vm.set_field(|f| f.role = v))
                    options=role_options
                    disabled=busy
                />
            </div>

            <div class="modal-footer">
                <button
                    class="button button--secondary"
                    on:click=move |_| dialog.update(|d| {
                        d.close();
                    })
                    disabled=move || busy.get()
                >
                    "Batal"
                </button>
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Menyimpan..." } else { "Simpan" }}
                </button>
            </div>
        </Modal>
    }
}
