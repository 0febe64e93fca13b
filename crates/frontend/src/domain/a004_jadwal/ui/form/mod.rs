//! "Tambah Jadwal" dialog: one date and up to five PIC/location pairs.

use contracts::domain::a004_jadwal::aggregate::{
    Assignment, Location, Pic, ScheduleDraft, ASSIGNMENT_SLOTS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_jadwal::api;
use crate::shared::api_utils::ApiError;
use crate::shared::components::form_field::{FormField, SelectField};
use crate::shared::dialog::{submit_dialog, DialogState};
use crate::shared::format::{input_date_value, parse_input_date};
use crate::shared::modal::Modal;
use crate::system::auth::context::{use_api, use_error_reporter};

fn id_options<T>(rows: &[T], pick: impl Fn(&T) -> (i64, &str)) -> Vec<(String, String)> {
    rows.iter()
        .map(|row| {
            let (id, label) = pick(row);
            (id.to_string(), label.to_string())
        })
        .collect()
}

fn id_value(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

#[component]
pub fn JadwalForm(
    dialog: RwSignal<DialogState<ScheduleDraft>>,
    on_saved: Callback<usize>,
) -> impl IntoView {
    let backend = use_api();
    let reporter = use_error_reporter();
    let pics = RwSignal::new(Vec::<Pic>::new());
    let locations = RwSignal::new(Vec::<Location>::new());

    let client = backend.client();
    spawn_local(async move {
        match api::fetch_pics(&client).await {
            Ok(list) => pics.set(list),
            Err(e) => reporter.report("Memuat Data PIC", e),
        }
        match api::fetch_locations(&client).await {
            Ok(list) => locations.set(list),
            Err(e) => reporter.report("Memuat Data Lokasi", e),
        }
    });

    let busy = Signal::derive(move || dialog.with(DialogState::is_submitting));
    let close = move || {
        dialog.update(|d| {
            d.close();
        })
    };
    let read = move |f: fn(&ScheduleDraft) -> String| dialog.with(|d| d.draft().map(f).unwrap_or_default());
    let pic_options = Signal::derive(move || pics.with(|p| id_options(p, |pic| (pic.id, pic.nama.as_str()))));
    let location_options =
        Signal::derive(move || locations.with(|l| id_options(l, |loc| (loc.id, loc.nama.as_str()))));

    let save = move |_| {
        let client = backend.client();
        let count = dialog.with_untracked(|d| {
            d.draft()
                .and_then(|draft| draft.to_requests().ok())
                .map(|requests| requests.len())
                .unwrap_or(0)
        });
        submit_dialog(
            dialog,
            reporter,
            "Menambah Jadwal",
            |draft| draft.to_requests().map(|_| ()),
            move |draft| async move {
                let requests = draft
                    .to_requests()
                    .map_err(|message| ApiError::Server { status: 400, message })?;
                api::create(&client, &requests).await
            },
            move || on_saved.run(count),
        );
    };

    let rows = (0..ASSIGNMENT_SLOTS)
        .map(|slot| {
            view! {
                <div class="assignment-row">
                    <span class="assignment-row__index">{slot + 1}</span>
                    <SelectField
                        label="PIC"
                        placeholder="-- Pilih PIC --"
                        value=Signal::derive(move || read_slot(dialog, slot, |a| id_value(a.pic_id)))
                        on_change=Callback::new(move |v: String| {
                            dialog.update(|d| d.edit(|draft| draft.assignments[slot].pic_id = v.parse().ok()))
                        })
                        options=pic_options
                        disabled=busy
                    />
                    <SelectField
                        label="Lokasi"
                        placeholder="-- Pilih Lokasi --"
                        value=Signal::derive(move || read_slot(dialog, slot, |a| id_value(a.location_id)))
                        on_change=Callback::new(move |v: String| {
                            dialog.update(|d| d.edit(|draft| draft.assignments[slot].location_id = v.parse().ok()))
                        })
                        options=location_options
                        disabled=busy
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <Modal
            title="Tambah Jadwal Pemeriksaan"
            on_close=Callback::new(move |_| close())
            dismissable=Signal::derive(move || !busy.get())
        >
            {move || dialog.with(|d| d.error().map(|e| e.to_string())).map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <div class="details-form">
                <FormField
                    label="Tanggal"
                    input_type="date"
                    value=Signal::derive(move || read(|d| input_date_value(d.tanggal)))
                    on_input=Callback::new(move |v: String| {
                        dialog.update(|d| d.edit(|draft| draft.tanggal = parse_input_date(&v)))
                    })
                    disabled=busy
                />
                <p class="form-hint">"Isi PIC dan Lokasi secara berpasangan."</p>
                {rows}
            </div>

            <div class="modal-footer">
                <button
                    class="button button--secondary"
                    on:click=move |_| close()
                    disabled=move || busy.get()
                >
                    "Batal"
                </button>
                <button
                    class="button button--primary"
                    on:click=save
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Menyimpan..." } else { "Simpan" }}
                </button>
            </div>
        </Modal>
    }
}

fn read_slot(
    dialog: RwSignal<DialogState<ScheduleDraft>>,
    slot: usize,
    f: impl Fn(&Assignment) -> String,
) -> String {
    dialog.with(|d| {
        d.draft()
            .and_then(|draft| draft.assignments.get(slot))
            .map(f)
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_options() {
        let locations = vec![
            Location { id: 3, nama: "Gedung A".into() },
            Location { id: 8, nama: "Aula".into() },
        ];
        let options = id_options(&locations, |l| (l.id, l.nama.as_str()));
        assert_eq!(options[1], ("8".to_string(), "Aula".to_string()));
        assert_eq!(id_value(None), "");
        assert_eq!(id_value(Some(8)), "8");
    }
}
