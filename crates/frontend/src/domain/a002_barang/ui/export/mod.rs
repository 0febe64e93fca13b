//! Column picker that downloads the item master as an Excel workbook.

pub mod workbook;

use leptos::prelude::*;
use leptos::task::spawn_local;

use self::workbook::{build_workbook, ColumnSelection, ExportColumn, DEFAULT_FILE_NAME};
use crate::domain::a002_barang::api;
use crate::shared::api_utils::ApiError;
use crate::shared::components::form_field::FormField;
use crate::shared::export::{download_bytes, xlsx_file_name, XLSX_MIME};
use crate::shared::modal::Modal;
use crate::shared::notify::use_notifications;
use crate::system::auth::context::{use_api, use_error_reporter};

#[component]
pub fn BarangExport(on_close: Callback<()>) -> impl IntoView {
    let backend = use_api();
    let reporter = use_error_reporter();
    let notifications = use_notifications();

    let selection = RwSignal::new(ColumnSelection::default());
    let file_name = RwSignal::new(String::new());
    let exporting = RwSignal::new(false);

    let export = move |_| {
        if exporting.get_untracked() {
            return;
        }
        let columns = match selection.with_untracked(ColumnSelection::active) {
            Ok(columns) => columns,
            Err(message) => {
                notifications.error("Tidak ada kolom terpilih", message);
                return;
            }
        };
        let target = xlsx_file_name(&file_name.get_untracked(), DEFAULT_FILE_NAME);
        exporting.set(true);
        let client = backend.client();
        spawn_local(async move {
            let result = match api::fetch_all(&client).await {
                Ok(items) => {
                    log::info!("xlsx export of {} items, {} columns", items.len(), columns.len());
                    build_workbook(&items, &columns)
                        .map_err(|e| ApiError::Encode(e.to_string()))
                        .and_then(|bytes| {
                            download_bytes(&bytes, &target, XLSX_MIME).map_err(ApiError::Encode)
                        })
                }
                Err(e) => Err(e),
            };
            exporting.set(false);
            match result {
                Ok(()) => {
                    notifications.success(
                        "Ekspor Berhasil",
                        "Data barang telah berhasil diekspor ke Excel.",
                    );
                    on_close.run(());
                }
                Err(e) => reporter.report("Export Data", e),
            }
        });
    };

    let busy = Signal::derive(move || exporting.get());

    view! {
        <Modal
            title="Export Data Barang ke Excel"
            on_close=on_close
            dismissable=Signal::derive(move || !exporting.get())
        >
            <div class="details-form">
                <FormField
                    label="Nama File"
                    value=Signal::derive(move || file_name.get())
                    on_input=Callback::new(move |v: String| file_name.set(v))
                    placeholder="Contoh: data_barang_2024"
                    disabled=busy
                />
                <div class="form-group">
                    <label>"Pilih Kolom untuk Diekspor"</label>
                    <div class="checkbox-grid">
                        {ExportColumn::ALL
                            .into_iter()
                            .map(|column| view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selection.with(|s| s.is_selected(column))
                                        on:change=move |_| selection.update(|s| s.toggle(column))
                                        disabled=move || exporting.get()
                                    />
                                    {column.label()}
                                </label>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="modal-footer">
                <button
                    class="button button--secondary"
                    on:click=move |_| on_close.run(())
                    disabled=move || exporting.get()
                >
                    "Batal"
                </button>
                <button
                    class="button button--primary"
                    on:click=export
                    disabled=move || exporting.get()
                >
                    {move || if exporting.get() { "Mengekspor..." } else { "Export" }}
                </button>
            </div>
        </Modal>
    }
}
