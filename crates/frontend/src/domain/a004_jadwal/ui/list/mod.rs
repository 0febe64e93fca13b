use contracts::domain::a004_jadwal::aggregate::{status_label, Schedule, ScheduleDraft};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_jadwal::api;
use crate::domain::a004_jadwal::ui::form::JadwalForm;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::dialog::DialogState;
use crate::shared::format::{format_wire_date, today};
use crate::shared::icons::icon;
use crate::shared::notify::{use_notifications, Notifications};
use crate::shared::page_frame::PageFrame;
use crate::shared::search::use_debounced_search;
use crate::system::auth::context::use_api;

/// Opens the slide deck in a new tab, or explains why there is none yet.
fn open_slide(schedule: &Schedule, notifications: Notifications) {
    let Some(url) = schedule.finished_slide_url() else {
        notifications.error(
            "Pengerjaan Belum Selesai",
            "Slide hanya tersedia untuk jadwal yang sudah selesai.",
        );
        return;
    };
    if let Some(w) = web_sys::window() {
        if let Err(e) = w.open_with_url_and_target(url, "_blank") {
            log::warn!("failed to open slide {}: {:?}", url, e);
        }
    }
}

#[component]
fn StatusCell(value: String) -> impl IntoView {
    let (label, tone) = status_label(&value);
    view! { <StatusBadge label=label tone=tone /> }
}

#[component]
#[allow(non_snake_case)]
pub fn JadwalList() -> impl IntoView {
    let backend = use_api();
    let notifications = use_notifications();
    let dialog = RwSignal::new(DialogState::<ScheduleDraft>::Closed);

    let search = use_debounced_search("Mengambil Data Jadwal", move |request| {
        let client = backend.client();
        async move { api::fetch_page(&client, &request).await }
    });
    let session = search.session;
    let loading = move || session.with(|s| s.is_loading());

    let on_saved = Callback::new(move |count: usize| {
        notifications.success("Berhasil", format!("{} jadwal berhasil ditambahkan.", count));
        search.refresh();
    });

    let open_form = move |_| {
        dialog.update(|d| {
            d.open(ScheduleDraft {
                tanggal: Some(today()),
                ..ScheduleDraft::default()
            })
        })
    };

    view! {
        <PageFrame page_id="a004_jadwal--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Jadwal Pemeriksaan"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_form>
                        {icon("plus")}
                        "Tambah Jadwal"
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
                                    <TableHeaderCell>"Hari"</TableHeaderCell>
                                    <TableHeaderCell>"Lokasi"</TableHeaderCell>
                                    <TableHeaderCell>"PIC"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Kondisi"</TableHeaderCell>
                                    <TableHeaderCell>"Catatan"</TableHeaderCell>
                                    <TableHeaderCell>"Slide"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || session.with(|s| s.items().to_vec())
                                    key=|row: &Schedule| row.id
                                    children=move |row| {
                                        let ready = row.finished_slide_url().is_some();
                                        let for_slide = row.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>{format_wire_date(&row.tanggal)}</TableCell>
                                                <TableCell>{row.hari.clone()}</TableCell>
                                                <TableCell>{row.nama_lokasi.clone()}</TableCell>
                                                <TableCell>{row.nama_pegawai.clone()}</TableCell>
                                                <TableCell><StatusCell value=row.status.clone() /></TableCell>
                                                <TableCell><StatusCell value=row.kondisi.clone() /></TableCell>
                                                <TableCell>
                                                    {if row.catatan.trim().is_empty() { "-".to_string() } else { row.catatan.clone() }}
                                                </TableCell>
                                                <TableCell>
                                                    <button
                                                        class="button button--icon"
                                                        class:button--muted=!ready
                                                        title="Lihat Slide"
                                                        on:click=move |_| open_slide(&for_slide, notifications)
                                                    >
                                                        {icon("external-link")}
                                                    </button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        <Show when=move || !loading() && session.with(|s| s.items().is_empty())>
                            <div class="table__empty">"Belum ada jadwal pemeriksaan."</div>
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
                <JadwalForm dialog=dialog on_saved=on_saved />
            </Show>
        </PageFrame>
    }
}
