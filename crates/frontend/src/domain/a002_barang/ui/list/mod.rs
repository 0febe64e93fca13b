pub mod state;

use self::state::create_state;
use contracts::domain::a002_barang::aggregate::{Item, ItemStatus};
use contracts::domain::a004_jadwal::aggregate::StatusTone;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_barang::api;
use crate::domain::a002_barang::ui::details::{BarangDetails, BarangDraft};
use crate::domain::a002_barang::ui::export::BarangExport;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::dialog::DialogState;
use crate::shared::format::{format_rupiah_text, format_wire_date};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::notify::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::search::use_debounced_search;
use crate::system::auth::context::{use_api, use_error_reporter};

fn status_tone(status: &ItemStatus) -> StatusTone {
    match status {
        ItemStatus::StokBaru => StatusTone::Success,
        ItemStatus::StokLama => StatusTone::Warning,
        ItemStatus::Kosong => StatusTone::Danger,
        ItemStatus::Other(_) => StatusTone::Neutral,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BarangList() -> impl IntoView {
    let backend = use_api();
    let reporter = use_error_reporter();
    let notifications = use_notifications();
    let state = create_state();
    let dialog = RwSignal::new(DialogState::<BarangDraft>::Closed);

    let search = use_debounced_search("Mengambil Data Barang", move |request| {
        let client = backend.client();
        async move { api::fetch_page(&client, &request).await }
    });
    let session = search.session;
    let loading = move || session.with(|s| s.is_loading());

    let on_saved = Callback::new(move |_| {
        notifications.success("Berhasil", "Data barang berhasil diperbarui.");
        search.refresh();
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(target) = state.pending_delete.get_untracked() else {
            return;
        };
        if state.deleting.get_untracked() {
            return;
        }
        state.deleting.set(true);
        let client = backend.client();
        spawn_local(async move {
            match api::delete(&client, target.item_id).await {
                Ok(()) => {
                    notifications.success(
                        "Berhasil",
                        format!("Barang {} berhasil dihapus.", target.item_name),
                    );
                    search.refresh_after_delete();
                }
                Err(e) => reporter.report("Menghapus Barang", e),
            }
            state.deleting.set(false);
            state.pending_delete.set(None);
        });
    });

    view! {
        <PageFrame page_id="a002_barang--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Master Data Barang"</h1>
                </div>
                <div class="page__header-right">
                    <div class="search-box">
                        {icon("search")}
                        <input
                            type="search"
                            placeholder="Cari kode, nama, atau kategori barang..."
                            prop:value=move || session.with(|s| s.query().to_string())
                            on:input=move |ev| search.input(event_target_value(&ev))
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| search.reset()
                        disabled=Signal::derive(move || session.with(|s| s.query().is_empty()))
                    >
                        "Reset"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| state.export_open.set(true)
                    >
                        {icon("download")}
                        "Export"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || session.with(|s| s.error().map(str::to_string)).map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <Show
                    when=move || !(loading() && session.with(|s| s.items().is_empty()))
                    fallback=|| view! { <div class="page__loading"><Spinner /></div> }
                >
                    <div class="table-wrapper" class:table-wrapper--loading=loading>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Kode"</TableHeaderCell>
                                    <TableHeaderCell>"Nama Barang"</TableHeaderCell>
                                    <TableHeaderCell>"Kategori"</TableHeaderCell>
                                    <TableHeaderCell>"Satuan"</TableHeaderCell>
                                    <TableHeaderCell>"Tgl Pengadaan"</TableHeaderCell>
                                    <TableHeaderCell>"Stok Awal"</TableHeaderCell>
                                    <TableHeaderCell>"Stok Saat Ini"</TableHeaderCell>
                                    <TableHeaderCell>"Harga Satuan"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Aksi"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || session.with(|s| s.items().to_vec())
                                    key=|item: &Item| item.item_id
                                    children=move |item| {
                                        let status = item.status();
                                        let for_edit = item.clone();
                                        let for_delete = item.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>{item.item_code.clone()}</TableCell>
                                                <TableCell>{item.item_name.clone()}</TableCell>
                                                <TableCell>{item.category.clone()}</TableCell>
                                                <TableCell>{item.unit.clone()}</TableCell>
                                                <TableCell>
                                                    {format_wire_date(item.procurement_date.as_deref().unwrap_or_default())}
                                                </TableCell>
                                                <TableCell>{item.initial_stock}</TableCell>
                                                <TableCell>{item.current_stock}</TableCell>
                                                <TableCell>{format_rupiah_text(&item.unit_price)}</TableCell>
                                                <TableCell>
                                                    <StatusBadge label=status.label() tone=status_tone(&status) />
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <button
                                                            class="button button--icon"
                                                            title="Edit"
                                                            on:click=move |_| dialog.update(|d| d.open(BarangDraft::edit(&for_edit)))
                                                        >
                                                            {icon("pencil")}
                                                        </button>
                                                        <button
                                                            class="button button--icon button--danger"
                                                            title="Hapus"
                                                            on:click=move |_| state.pending_delete.set(Some(for_delete.clone()))
                                                        >
                                                            {icon("trash")}
                                                        </button>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        <Show when=move || !loading() && session.with(|s| s.items().is_empty())>
                            <div class="table__empty">
                                {move || if session.with(|s| s.query().trim().is_empty()) {
                                    "Belum ada data barang.".to_string()
                                } else {
                                    format!("Tidak ada barang yang cocok dengan \"{}\".", session.with(|s| s.query().to_string()))
                                }}
                            </div>
                        </Show>
                    </div>
                </Show>

                <PaginationControls
                    current_page=Signal::derive(move || session.with(|s| s.page()))
                    total_pages=Signal::derive(move || session.with(|s| s.total_pages()))
                    on_page_change=Callback::new(move |page| search.change_page(page))
                />
            </div>

            <Show when=move || dialog.with(DialogState::is_open)>
                <BarangDetails dialog=dialog on_saved=on_saved />
            </Show>

            <Show when=move || state.export_open.get()>
                <BarangExport on_close=Callback::new(move |_| state.export_open.set(false)) />
            </Show>

            {move || state.pending_delete.get().map(|target| view! {
                <ConfirmDialog
                    title="Apakah Anda yakin?"
                    message=format!(
                        "Tindakan ini tidak dapat dibatalkan. Barang {} akan dihapus secara permanen.",
                        target.item_name
                    )
                    busy=state.deleting
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| state.pending_delete.set(None))
                />
            })}
        </PageFrame>
    }
}
