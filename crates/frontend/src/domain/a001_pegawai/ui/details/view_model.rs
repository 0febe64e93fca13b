use contracts::domain::a001_pegawai::aggregate::{Pegawai, PegawaiForm};
use leptos::prelude::*;

use crate::domain::a001_pegawai::api;
use crate::shared::dialog::{submit_dialog, DialogState};
use crate::system::auth::context::{use_api, use_error_reporter, ApiHandle, ErrorReporter};

/// Dialog draft: `id` is `None` for a new employee.
#[derive(Debug, Clone, PartialEq)]
pub struct PegawaiDraft {
    pub id: Option<i64>,
    pub form: PegawaiForm,
}

impl PegawaiDraft {
    pub fn new() -> Self {
        Self {
            id: None,
            form: PegawaiForm::new_for_insert(),
        }
    }

    pub fn edit(pegawai: &Pegawai) -> Self {
        Self {
            id: Some(pegawai.id),
            form: PegawaiForm::from_pegawai(pegawai),
        }
    }
}

impl Default for PegawaiDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct PegawaiDetailsViewModel {
    pub dialog: RwSignal<DialogState<PegawaiDraft>>,
    api: ApiHandle,
    reporter: ErrorReporter,
}

impl PegawaiDetailsViewModel {
    pub fn new(dialog: RwSignal<DialogState<PegawaiDraft>>) -> Self {
        Self {
            dialog,
            api: use_api(),
            reporter: use_error_reporter(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.dialog
            .with(|d| d.draft().map(|draft| draft.id.is_some()).unwrap_or(false))
    }

    pub fn is_submitting(&self) -> bool {
        self.dialog.with(DialogState::is_submitting)
    }

    pub fn field(&self, read: impl Fn(&PegawaiForm) -> String) -> String {
        self.dialog
            .with(|d| d.draft().map(|draft| read(&draft.form)).unwrap_or_default())
    }

    pub fn set_field(&self, write: impl FnOnce(&mut PegawaiForm)) {
        self.dialog.update(|d| d.edit(|draft| write(&mut draft.form)));
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let client = self.api.client();
        let context = if self.is_edit_mode() {
            "Memperbarui Pegawai"
        } else {
            "Menambah Pegawai"
        };
        submit_dialog(
            self.dialog,
            self.reporter,
            context,
            |draft| draft.form.validate(),
            move |draft| async move {
                match draft.id {
                    Some(id) => api::update(&client, id, &draft.form).await,
                    None => api::create(&client, &draft.form).await,
                }
            },
            move || on_saved.run(()),
        );
    }
}
