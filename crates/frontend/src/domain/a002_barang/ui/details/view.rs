use leptos::prelude::*;

use super::view_model::{BarangDetailsViewModel, BarangDraft};
use crate::shared::components::form_field::FormField;
use crate::shared::dialog::DialogState;
use crate::shared::modal::Modal;

#[component]
pub fn BarangDetails(
    dialog: RwSignal<DialogState<BarangDraft>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = BarangDetailsViewModel::new(dialog);
    let busy = Signal::derive(move || vm.is_submitting());
    let close = move || {
        dialog.update(|d| {
            d.close();
        })
    };

    view! {
        <Modal
            title=format!("Edit Barang {}", vm.read(|d| d.item_code.clone()))
            on_close=Callback::new(move |_| close())
            dismissable=Signal::derive(move || !busy.get())
        >
            {move || dialog.with(|d| d.error().map(|e| e.to_string())).map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <div class="details-form">
                <FormField
                    label="Nama Barang"
                    value=Signal::derive(move || vm.read(|d| d.form.item_name.clone()))
                    on_input=Callback::new(move |v| vm.write(|d| d.form.item_name = v))
                    disabled=busy
                />
                <FormField
                    label="Kategori"
                    value=Signal::derive(move || vm.read(|d| d.form.category.clone()))
                    on_input=Callback::new(move |v| vm.write(|d| d.form.category = v))
                    disabled=busy
                />
                <FormField
                    label="Satuan"
                    value=Signal::derive(move || vm.read(|d| d.form.unit.clone()))
                    on_input=Callback::new(move |v| vm.write(|d| d.form.unit = v))
                    disabled=busy
                />
                <FormField
                    label="Tanggal Pengadaan"
                    input_type="date"
                    value=Signal::derive(move || vm.read(|d| d.form.procurement_date.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.write(|d| {
                        d.form.procurement_date = (!v.is_empty()).then_some(v);
                    }))
                    disabled=busy
                />
                <FormField
                    label="Stok Awal"
                    input_type="number"
                    value=Signal::derive(move || vm.read(|d| d.initial_stock.clone()))
                    on_input=Callback::new(move |v| vm.write(|d| d.initial_stock = v))
                    disabled=busy
                />
                <FormField
                    label="Harga Satuan"
                    input_type="number"
                    value=Signal::derive(move || vm.read(|d| d.form.unit_price.clone()))
                    on_input=Callback::new(move |v| vm.write(|d| d.form.unit_price = v))
                    disabled=busy
                />
            </div>

            <div class="modal-footer">
                <button class="button button--secondary" on:click=move |_| close() disabled=move || busy.get()>
                    "Batal"
                </button>
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Menyimpan..." } else { "Simpan Perubahan" }}
                </button>
            </div>
        </Modal>
    }
}
