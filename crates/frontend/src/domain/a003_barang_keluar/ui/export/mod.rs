//! Date range and recipient picker that opens the BEND 29 voucher.

use chrono::NaiveDate;
use contracts::domain::a001_pegawai::aggregate::Pegawai;
use contracts::domain::a003_barang_keluar::aggregate::ExportQuery;
use contracts::domain::a003_barang_keluar::bend29::Bend29Document;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_pegawai;
use crate::domain::a003_barang_keluar::api;
use crate::domain::a003_barang_keluar::ui::add::pegawai_options;
use crate::layout::global_context::use_global_context;
use crate::shared::components::form_field::{FormField, SelectField};
use crate::shared::format::{input_date_value, parse_input_date};
use crate::shared::modal::Modal;
use crate::shared::notify::use_notifications;
use crate::system::auth::context::{use_api, use_error_reporter};

#[derive(Debug, Clone, Default, PartialEq)]
struct ExportDraft {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    pegawai_id: Option<i64>,
}

#[component]
pub fn BarangKeluarExport(on_close: Callback<()>) -> impl IntoView {
    let backend = use_api();
    let reporter = use_error_reporter();
    let notifications = use_notifications();
    let ctx = use_global_context();

    let draft = RwSignal::new(ExportDraft::default());
    let pegawai = RwSignal::new(Vec::<Pegawai>::new());
    let exporting = RwSignal::new(false);

    let client = backend.client();
    spawn_local(async move {
        match a001_pegawai::api::fetch_all(&client).await {
            Ok(list) => pegawai.set(list),
            Err(e) => reporter.report("Memuat Data Pegawai", e),
        }
    });

    let export = move |_| {
        if exporting.get_untracked() {
            return;
        }
        let ExportDraft { start, end, pegawai_id } = draft.get_untracked();
        let query = match ExportQuery::build(start, end, pegawai_id) {
            Ok(query) => query,
            Err(message) => {
                notifications.error("Input Tidak Lengkap", message);
                return;
            }
        };
        exporting.set(true);
        let client = backend.client();
        spawn_local(async move {
            match api::fetch_by_employee(&client, &query).await {
                Ok(items) => {
                    let recipient = pegawai.with_untracked(|list| {
                        list.iter().find(|p| p.id == query.pegawai_id).cloned()
                    });
                    log::info!(
                        "export of {} outflow rows for pegawai {}",
                        items.len(),
                        query.pegawai_id
                    );
                    let document = Bend29Document::new(items, recipient.as_ref(), &query);
                    // The print view replaces the shell, so the dialog closes first.
                    exporting.set(false);
                    on_close.run(());
                    ctx.open_print(document);
                }
                Err(e) => {
                    exporting.set(false);
                    reporter.report("Mengekspor Data", e);
                }
            }
        });
    };

    let busy = Signal::derive(move || exporting.get());

    view! {
        <Modal
            title="Ekspor Data Barang Keluar"
            on_close=on_close
            dismissable=Signal::derive(move || !exporting.get())
        >
            <div class="details-form">
                <FormField
                    label="Tanggal Awal"
                    input_type="date"
                    value=Signal::derive(move || draft.with(|d| input_date_value(d.start)))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.start = parse_input_date(&v)))
                    disabled=busy
                />
                <FormField
                    label="Tanggal Akhir"
                    input_type="date"
                    value=Signal::derive(move || draft.with(|d| input_date_value(d.end)))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.end = parse_input_date(&v)))
                    disabled=busy
                />
                <SelectField
                    label="Pegawai"
                    placeholder="-- Pilih Pegawai --"
                    value=Signal::derive(move || draft.with(|d| d.pegawai_id.map(|id| id.to_string()).unwrap_or_default()))
                    on_change=Callback::new(move |v: String| draft.update(|d| d.pegawai_id = v.parse().ok()))
                    options=Signal::derive(move || pegawai.with(|p| pegawai_options(p)))
                    disabled=busy
                />
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
                    {move || if exporting.get() { "Mengekspor..." } else { "Ekspor" }}
                </button>
            </div>
        </Modal>
    }
}
