use contracts::domain::a003_barang_keluar::aggregate::SATUAN_OPTIONS;
use leptos::prelude::*;

use super::view_model::{item_options, pegawai_options, BarangKeluarAddViewModel, BarangKeluarDraft};
use crate::shared::components::form_field::{FormField, SelectField};
use crate::shared::dialog::DialogState;
use crate::shared::format::{input_date_value, parse_input_date};
use crate::shared::modal::Modal;

#[component]
pub fn BarangKeluarAdd(
    dialog: RwSignal<DialogState<BarangKeluarDraft>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = BarangKeluarAddViewModel::new(dialog);
    vm.load_options();

    let busy = Signal::derive(move || vm.is_submitting() || vm.loading_options.get());
    let close = move || {
        dialog.update(|d| {
            d.close();
        })
    };

    let satuan_options: Vec<(String, String)> = SATUAN_OPTIONS
        .iter()
        .map(|s| (s.to_string(), s.to_string()))
        .collect();

    view! {
        <Modal
            title="Tambah Barang Keluar"
            on_close=Callback::new(move |_| close())
            dismissable=Signal::derive(move || !vm.is_submitting())
        >
            {move || dialog.with(|d| d.error().map(|e| e.to_string())).map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <div class="details-form">
                <FormField
                    label="Tanggal"
                    input_type="date"
                    value=Signal::derive(move || vm.field(|d| input_date_value(d.form.tanggal)))
                    on_input=Callback::new(move |v: String| vm.set_field(|d| d.form.tanggal = parse_input_date(&v)))
                    disabled=busy
                />
                <SelectField
                    label="Nama Barang"
                    placeholder="-- Pilih Barang --"
                    value=Signal::derive(move || vm.field(|d| d.form.barang_id.map(|id| id.to_string()).unwrap_or_default()))
                    on_change=Callback::new(move |v| vm.choose_item(v))
                    options=Signal::derive(move || vm.items.with(|items| item_options(items)))
                    disabled=busy
                />
                <SelectField
                    label="Penerima"
                    placeholder="-- Pilih Pegawai --"
                    value=Signal::derive(move || vm.field(|d| d.form.pegawai_id.map(|id| id.to_string()).unwrap_or_default()))
                    on_change=Callback::new(move |v: String| vm.set_field(|d| d.form.pegawai_id = v.parse().ok()))
                    options=Signal::derive(move || vm.pegawai.with(|p| pegawai_options(p)))
                    disabled=busy
                />
                <SelectField
                    label="Satuan"
                    value=Signal::derive(move || vm.field(|d| d.form.satuan.clone()))
                    on_change=Callback::new(move |v| vm.set_field(|d| d.form.satuan = v))
                    options=satuan_options
                    disabled=busy
                />
                <FormField
                    label="Jumlah"
                    input_type="number"
                    value=Signal::derive(move || vm.field(|d| d.form.qty.clone()))
                    on_input=Callback::new(move |v| vm.set_field(|d| d.form.qty = v))
                    disabled=busy
                />
                {move || vm.dialog.with(|d| d.draft().and_then(|draft| draft.available_stock)).map(|stock| view! {
                    <p class="form-hint">{format!("Stok tersedia: {}", stock)}</p>
                })}
                <FormField
                    label="Keterangan"
                    placeholder="Opsional"
                    value=Signal::derive(move || vm.field(|d| d.form.keterangan.clone()))
                    on_input=Callback::new(move |v| vm.set_field(|d| d.form.keterangan = v))
                    disabled=busy
                />
            </div>

            <div class="modal-footer">
                <button
                    class="button button--secondary"
                    on:click=move |_| close()
                    disabled=move || vm.is_submitting()
                >
                    "Batal"
                </button>
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || busy.get()
                >
                    {move || if vm.is_submitting() { "Menyimpan..." } else { "Simpan" }}
                </button>
            </div>
        </Modal>
    }
}
