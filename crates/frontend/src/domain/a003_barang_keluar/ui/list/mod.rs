use contracts::domain::a003_barang_keluar::aggregate::ItemOut;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_barang_keluar::api;
use crate::domain::a003_barang_keluar::ui::add::{BarangKeluarAdd, BarangKeluarDraft};
use crate::domain::a003_barang_keluar::ui::export::BarangKeluarExport;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::dialog::DialogState;
use crate::shared::format::{format_rupiah_text, format_wire_date, today};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::notify::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::search::use_debounced_search;
use crate::system::auth::context::{use_api, use_error_reporter};

#[component]
#[allow(non_snake_case)]
pub fn BarangKeluarList() -> impl IntoView {
    let backend = use_api();
    let reporter = use_error_reporter();
    let notifications = use_notifications();
    let dialog = RwSignal::new(DialogState::<BarangKeluarDraft>::Closed);
    let export_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(Option::<ItemOut>::None);
    let deleting = RwSignal::new(false);

    let search = use_debounced_search("Mengambil Data Barang Keluar", move |request| {
        let client = backend.client();
        async move { api::fetch_page(&client, &request).await }
    });
    let session = search.session;
    let loading = move || session.with(|s| s.is_loading());

    let on_saved = Callback::new(move |_| {
        notifications.success("Berhasil", "Data barang keluar berhasil ditambahkan.");
        search.refresh();
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(target) = pending_delete.get_untracked() else {
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        let client = backend.client();
        spawn_local(async move {
            match api::delete(&client, target.id).await {
                Ok(()) => {
                    notifications.success("Berhasil", "Data barang keluar berhasil dihapus.");
                    search.refresh_after_delete();
                }
                Err(e) => reporter.report("Menghapus Barang Keluar", e),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    });

    view! {
        <PageFrame page_id="a003_barang_keluar--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Barang Keluar"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| export_open.set(true)
                    >
                        {icon("download")}
                        "Ekspor BEND 29"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| dialog.update(|d| d.open(BarangKeluarDraft::new(today())))
                    >
                        {icon("plus")}
                        "Tambah"
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
                                    <TableHeaderCell>"Tanggal"</TableHeaderCell>
                                    <TableHeaderCell>"Nama Barang"</TableHeaderCell>
                                    <TableHeaderCell>"Penerima"</TableHeaderCell>
                                    <TableHeaderCell>"Satuan"</TableHeaderCell>
                                    <TableHeaderCell>"Qty"</TableHeaderCell>
                                    <TableHeaderCell>"Harga Satuan"</TableHeaderCell>
                                    <TableHeaderCell>"Total Harga"</TableHeaderCell>
                                    <TableHeaderCell>"Aksi"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || session.with(|s| s.items().to_vec())
                                    key=|row: &ItemOut| row.id
                                    children=move |row| {
                                        let for_delete = row.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>{format_wire_date(&row.tanggal)}</TableCell>
                                                <TableCell>{row.nama_barang.clone()}</TableCell>
                                                <TableCell>{row.penerima.clone()}</TableCell>
                                                <TableCell>{row.satuan.clone()}</TableCell>
                                                <TableCell>{row.qty}</TableCell>
                                                <TableCell>{format_rupiah_text(&row.harga_satuan)}</TableCell>
                                                <TableCell>{format_rupiah_text(&row.total_harga)}</TableCell>
                                                <TableCell>
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title="Hapus"
                                                        on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        <Show when=move || !loading() && session.with(|s| s.items().is_empty())>
                            <div class="table__empty">"Belum ada data barang keluar."</div>
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
                <BarangKeluarAdd dialog=dialog on_saved=on_saved />
            </Show>

            <Show when=move || export_open.get()>
                <BarangKeluarExport on_close=Callback::new(move |_| export_open.set(false)) />
            </Show>

            {move || pending_delete.get().map(|target| view! {
                <ConfirmDialog
                    title="Apakah Anda yakin?"
                    message=format!(
                        "Data barang keluar {} ({}) akan dihapus secara permanen.",
                        target.nama_barang,
                        format_wire_date(&target.tanggal)
                    )
                    busy=deleting
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            })}
        </PageFrame>
    }
}
