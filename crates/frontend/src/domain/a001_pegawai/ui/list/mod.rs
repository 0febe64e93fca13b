use contracts::domain::a001_pegawai::aggregate::Pegawai;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_pegawai::api;
use crate::domain::a001_pegawai::ui::details::{PegawaiDetails, PegawaiDraft};
use crate::shared::dialog::DialogState;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::notify::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::system::auth::context::{use_api, use_error_reporter};

/// Display text of one table row; the record itself is kept for the row actions.
#[derive(Debug, Clone, PartialEq)]
struct PegawaiRow {
    nip: String,
    nama: String,
    email: String,
    jabatan: String,
    golongan: String,
    role: String,
}

impl PegawaiRow {
    fn from_pegawai(pegawai: &Pegawai) -> Self {
        Self {
            nip: pegawai.nip_display().to_string(),
            nama: pegawai.nama.clone(),
            email: pegawai.email.clone(),
            jabatan: pegawai.jabatan.clone(),
            golongan: pegawai.golongan_display().to_string(),
            role: pegawai.role().label(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PegawaiList() -> impl IntoView {
    let backend = use_api();
    let reporter = use_error_reporter();
    let notifications = use_notifications();

    let items = RwSignal::new(Vec::<Pegawai>::new());
    let loading = RwSignal::new(false);
    let dialog = RwSignal::new(DialogState::<PegawaiDraft>::Closed);
    let pending_delete = RwSignal::new(None::<Pegawai>);
    let deleting = RwSignal::new(false);

    let fetch = move || {
        let client = backend.client();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_all(&client).await {
                Ok(list) => items.set(list),
                Err(e) => reporter.report("Mengambil Data Pegawai", e),
            }
            loading.set(false);
        });
    };

    let on_saved = Callback::new(move |_| {
        notifications.success("Berhasil", "Data pegawai berhasil disimpan.");
        fetch();
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
                    notifications.success(
                        "Berhasil",
                        format!("Pegawai {} berhasil dihapus.", target.nama),
                    );
                    fetch();
                }
                Err(e) => reporter.report("Menghapus Pegawai", e),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    });

    fetch();

    view! {
        <PageFrame page_id="a001_pegawai--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Master Data Pegawai"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || items.with(Vec::len).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| dialog.update(|d| d.open(PegawaiDraft::new()))
                    >
                        {icon("plus")}
                        "Tambah Pegawai"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Memuat..." } else { "Muat Ulang" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || !(loading.get() && items.with(Vec::is_empty))
                    fallback=|| view! { <div class="page__loading"><Spinner /></div> }
                >
                    <div class="table-wrapper">
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"NIP"</TableHeaderCell>
                                    <TableHeaderCell>"Nama"</TableHeaderCell>
                                    <TableHeaderCell>"Email"</TableHeaderCell>
                                    <TableHeaderCell>"Jabatan"</TableHeaderCell>
                                    <TableHeaderCell>"Golongan"</TableHeaderCell>
                                    <TableHeaderCell>"Role"</TableHeaderCell>
                                    <TableHeaderCell>"Aksi"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || items.get()
                                    key=|p| p.id
                                    children=move |pegawai| {
                                        let PegawaiRow { nip, nama, email, jabatan, golongan, role } =
                                            PegawaiRow::from_pegawai(&pegawai);
                                        let for_edit = pegawai.clone();
                                        let for_delete = pegawai;
                                        view! {
                                            <TableRow>
                                                <TableCell>{nip}</TableCell>
                                                <TableCell>{nama}</TableCell>
                                                <TableCell>{email}</TableCell>
                                                <TableCell>{jabatan}</TableCell>
                                                <TableCell>{golongan}</TableCell>
                                                <TableCell>{role}</TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <button
                                                            class="button button--icon"
                                                            title="Edit"
                                                            on:click=move |_| dialog.update(|d| d.open(PegawaiDraft::edit(&for_edit)))
                                                        >
                                                            {icon("pencil")}
                                                        </button>
                                                        <button
                                                            class="button button--icon button--danger"
                                                            title="Hapus"
                                                            on:click=move |_| pending_delete.set(Some(for_delete.clone()))
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
                        <Show when=move || !loading.get() && items.with(Vec::is_empty)>
                            <div class="table__empty">"Belum ada data pegawai."</div>
                        </Show>
                    </div>
                </Show>
            </div>

            <Show when=move || dialog.with(DialogState::is_open)>
                <PegawaiDetails dialog=dialog on_saved=on_saved />
            </Show>

            {move || pending_delete.get().map(|target| view! {
                <ConfirmDialog
                    title="Apakah Anda yakin?"
                    message=format!(
                        "Tindakan ini tidak dapat dibatalkan. Data pegawai {} akan dihapus secara permanen.",
                        target.nama
                    )
                    busy=deleting
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pegawai(nip: Option<&str>, golongan: Option<&str>) -> Pegawai {
        Pegawai {
            id: 7,
            nip: nip.map(str::to_string),
            nama: "Budi Santoso".into(),
            email: "budi@example.go.id".into(),
            jabatan: "Pengelola Barang".into(),
            golongan: golongan.map(str::to_string),
            role: "admin".into(),
            photo_url: None,
        }
    }

    #[test]
    fn test_row_text_from_record() {
        let record = pegawai(Some("198501012010011001"), Some("III/a"));
        let row = PegawaiRow::from_pegawai(&record);
        assert_eq!(row.nip, "198501012010011001");
        assert_eq!(row.golongan, "III/a");
        assert_eq!(row.role, "Admin");
        assert_eq!(row.nama, record.nama);
    }

    #[test]
    fn test_row_text_dashes_missing_nip_and_golongan() {
        let row = PegawaiRow::from_pegawai(&pegawai(None, Some("")));
        assert_eq!(row.nip, "-");
        assert_eq!(row.golongan, "-");
    }
}
