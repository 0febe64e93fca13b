use chrono::NaiveDate;
use contracts::domain::a001_pegawai::aggregate::Pegawai;
use contracts::domain::a002_barang::aggregate::Item;
use contracts::domain::a003_barang_keluar::aggregate::{ItemOutDraft, NewItemOut};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_barang_keluar::api;
use crate::domain::{a001_pegawai, a002_barang};
use crate::shared::api_utils::ApiError;
use crate::shared::dialog::{submit_dialog, DialogState};
use crate::system::auth::context::{use_api, use_error_reporter, ApiHandle, ErrorReporter};

/// Outflow form plus the stock of the item picked in it.
#[derive(Debug, Clone, PartialEq)]
pub struct BarangKeluarDraft {
    pub form: ItemOutDraft,
    pub available_stock: Option<i64>,
}

impl BarangKeluarDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: ItemOutDraft::new(today),
            available_stock: None,
        }
    }

    pub fn select_item(&mut self, item: &Item) {
        self.form.select_item(item);
        self.available_stock = Some(item.current_stock);
    }

    pub fn request(&self) -> Result<NewItemOut, String> {
        self.form.to_request(self.available_stock)
    }
}

/// `(value, label)` pairs for the item select, showing remaining stock.
pub fn item_options(items: &[Item]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|item| {
            (
                item.item_id.to_string(),
                format!("{} (Stok: {})", item.item_name, item.current_stock),
            )
        })
        .collect()
}

pub fn pegawai_options(pegawai: &[Pegawai]) -> Vec<(String, String)> {
    pegawai
        .iter()
        .map(|p| (p.id.to_string(), p.nama.clone()))
        .collect()
}

#[derive(Clone, Copy)]
pub struct BarangKeluarAddViewModel {
    pub dialog: RwSignal<DialogState<BarangKeluarDraft>>,
    pub items: RwSignal<Vec<Item>>,
    pub pegawai: RwSignal<Vec<Pegawai>>,
    pub loading_options: RwSignal<bool>,
    api: ApiHandle,
    reporter: ErrorReporter,
}

impl BarangKeluarAddViewModel {
    pub fn new(dialog: RwSignal<DialogState<BarangKeluarDraft>>) -> Self {
        Self {
            dialog,
            items: RwSignal::new(Vec::new()),
            pegawai: RwSignal::new(Vec::new()),
            loading_options: RwSignal::new(false),
            api: use_api(),
            reporter: use_error_reporter(),
        }
    }

    /// Loads the item and employee selects.
    pub fn load_options(&self) {
        let this = *self;
        let client = self.api.client();
        this.loading_options.set(true);
        spawn_local(async move {
            match a002_barang::api::fetch_all(&client).await {
                Ok(items) => this.items.set(items),
                Err(e) => this.reporter.report("Memuat Data Barang", e),
            }
            match a001_pegawai::api::fetch_all(&client).await {
                Ok(pegawai) => this.pegawai.set(pegawai),
                Err(e) => this.reporter.report("Memuat Data Pegawai", e),
            }
            this.loading_options.set(false);
        });
    }

    pub fn is_submitting(&self) -> bool {
        self.dialog.with(DialogState::is_submitting)
    }

    pub fn field(&self, read: impl Fn(&BarangKeluarDraft) -> String) -> String {
        self.dialog.with(|d| d.draft().map(read).unwrap_or_default())
    }

    pub fn set_field(&self, write: impl FnOnce(&mut BarangKeluarDraft)) {
        self.dialog.update(|d| d.edit(write));
    }

    pub fn choose_item(&self, value: String) {
        let picked = value
            .parse::<i64>()
            .ok()
            .and_then(|id| self.items.with_untracked(|items| items.iter().find(|i| i.item_id == id).cloned()));
        self.set_field(|draft| match picked {
            Some(item) => draft.select_item(&item),
            None => {
                draft.form.barang_id = None;
                draft.available_stock = None;
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let client = self.api.client();
        submit_dialog(
            self.dialog,
            self.reporter,
            "Menambah Barang Keluar",
            |draft| draft.request().map(|_| ()),
            move |draft| async move {
                let request = draft
                    .request()
                    .map_err(|message| ApiError::Server { status: 400, message })?;
                api::create(&client, &request).await
            },
            move || on_saved.run(()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, stock: i64) -> Item {
        serde_json::from_str(&format!(
            r#"{{"item_id":{},"item_name":"Kertas A4","unit":"Rim","current_stock":{}}}"#,
            id, stock
        ))
        .unwrap()
    }

    #[test]
    fn test_selected_item_caps_qty() {
        let mut draft = BarangKeluarDraft::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        draft.select_item(&item(3, 5));
        draft.form.pegawai_id = Some(9);
        draft.form.qty = "6".into();
        assert_eq!(draft.request().unwrap_err(), "Jumlah melebihi stok tersedia (5)");

        draft.form.qty = "5".into();
        let request = draft.request().unwrap();
        assert_eq!(request.barang_id, 3);
        assert_eq!(request.satuan, "Rim");
    }

    #[test]
    fn test_item_options_show_stock() {
        let options = item_options(&[item(3, 12)]);
        assert_eq!(options, vec![("3".to_string(), "Kertas A4 (Stok: 12)".to_string())]);
    }
}
