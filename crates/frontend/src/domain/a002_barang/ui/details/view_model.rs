use contracts::domain::a002_barang::aggregate::{Item, ItemUpdate};
use leptos::prelude::*;

use crate::domain::a002_barang::api;
use crate::shared::api_utils::ApiError;
use crate::shared::dialog::{submit_dialog, DialogState};
use crate::system::auth::context::{use_api, use_error_reporter, ApiHandle, ErrorReporter};

/// Edit draft; the stock is kept as typed until it is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct BarangDraft {
    pub item_id: i64,
    pub item_code: String,
    pub form: ItemUpdate,
    pub initial_stock: String,
}

impl BarangDraft {
    pub fn edit(item: &Item) -> Self {
        Self {
            item_id: item.item_id,
            item_code: item.item_code.clone(),
            form: ItemUpdate::from_item(item),
            initial_stock: item.initial_stock.to_string(),
        }
    }

    pub fn to_update(&self) -> Result<ItemUpdate, String> {
        let initial_stock = self
            .initial_stock
            .trim()
            .parse::<i64>()
            .map_err(|_| "Stok awal harus berupa angka".to_string())?;
        let update = ItemUpdate {
            initial_stock,
            unit_price: self.form.unit_price.trim().to_string(),
            ..self.form.clone()
        };
        update.validate()?;
        Ok(update)
    }
}

#[derive(Clone, Copy)]
pub struct BarangDetailsViewModel {
    pub dialog: RwSignal<DialogState<BarangDraft>>,
    api: ApiHandle,
    reporter: ErrorReporter,
}

impl BarangDetailsViewModel {
    pub fn new(dialog: RwSignal<DialogState<BarangDraft>>) -> Self {
        Self {
            dialog,
            api: use_api(),
            reporter: use_error_reporter(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.dialog.with(DialogState::is_submitting)
    }

    pub fn read(&self, f: impl Fn(&BarangDraft) -> String) -> String {
        self.dialog.with(|d| d.draft().map(&f).unwrap_or_default())
    }

    pub fn write(&self, f: impl FnOnce(&mut BarangDraft)) {
        self.dialog.update(|d| d.edit(f));
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let client = self.api.client();
        submit_dialog(
            self.dialog,
            self.reporter,
            "Memperbarui Barang",
            |draft| draft.to_update().map(|_| ()),
            move |draft| {
                let update = draft.to_update();
                async move {
                    let update = update.map_err(ApiError::Decode)?;
                    api::update(&client, draft.item_id, &update).await
                }
            },
            move || on_saved.run(()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        serde_json::from_str(
            r#"{"item_id":5,"item_code":"BRG-005","item_name":"Kertas A4","category":"ATK",
                "unit":"Rim","procurement_date":"2024-01-15T00:00:00.000Z","initial_stock":20,
                "current_stock":12,"unit_price":"55000.00","status":"stok_baru"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_draft_round_trips_item() {
        let update = BarangDraft::edit(&item()).to_update().unwrap();
        assert_eq!(update.initial_stock, 20);
        assert_eq!(update.procurement_date.as_deref(), Some("2024-01-15"));
        assert_eq!(update.unit_price, "55000.00");
    }

    #[test]
    fn test_draft_rejects_bad_numbers() {
        let mut draft = BarangDraft::edit(&item());
        draft.initial_stock = "dua puluh".into();
        assert_eq!(draft.to_update().unwrap_err(), "Stok awal harus berupa angka");

        let mut draft = BarangDraft::edit(&item());
        draft.initial_stock = "-1".into();
        assert!(draft.to_update().is_err());

        let mut draft = BarangDraft::edit(&item());
        draft.form.unit_price = "abc".into();
        assert!(draft.to_update().is_err());
    }
}
