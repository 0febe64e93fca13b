use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::text::require;

// ============================================================================
// Item (master data barang)
// ============================================================================

/// Item as returned by `GET /api/items` and `GET /api/items/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: i64,
    #[serde(default)]
    pub item_code: String,
    pub item_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub procurement_date: Option<String>,
    #[serde(default)]
    pub initial_stock: i64,
    #[serde(default)]
    pub current_stock: i64,
    /// Decimal string, e.g. `"15000.00"`.
    #[serde(default)]
    pub unit_price: String,
    #[serde(default)]
    pub status: String,
}

impl Item {
    pub fn status(&self) -> ItemStatus {
        ItemStatus::parse(&self.status)
    }

    pub fn unit_price_value(&self) -> Option<f64> {
        parse_decimal(&self.unit_price)
    }

    pub fn procurement_date(&self) -> Option<NaiveDate> {
        self.procurement_date.as_deref().and_then(parse_wire_date)
    }
}

/// Parses `yyyy-MM-dd`, also when followed by a time part (`2024-01-15T00:00:00.000Z`).
pub fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parses backend decimal strings; non-finite values are rejected.
pub fn parse_decimal(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    Kosong,
    StokLama,
    StokBaru,
    Other(String),
}

impl ItemStatus {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "kosong" => ItemStatus::Kosong,
            "stok_lama" => ItemStatus::StokLama,
            "stok_baru" => ItemStatus::StokBaru,
            _ => ItemStatus::Other(value.trim().to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            ItemStatus::Kosong => "Kosong".into(),
            ItemStatus::StokLama => "Stok Lama".into(),
            ItemStatus::StokBaru => "Stok Baru".into(),
            ItemStatus::Other(value) if value.is_empty() => "-".into(),
            ItemStatus::Other(value) => value.clone(),
        }
    }
}

/// Body of `PUT /api/items/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub item_name: String,
    pub category: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procurement_date: Option<String>,
    pub initial_stock: i64,
    pub unit_price: String,
}

impl ItemUpdate {
    pub fn from_item(item: &Item) -> Self {
        Self {
            item_name: item.item_name.clone(),
            category: item.category.clone(),
            unit: item.unit.clone(),
            procurement_date: item
                .procurement_date()
                .map(|d| d.format("%Y-%m-%d").to_string()),
            initial_stock: item.initial_stock,
            unit_price: item.unit_price.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require(&self.item_name, "Nama barang tidak boleh kosong")?;
        require(&self.category, "Kategori tidak boleh kosong")?;
        require(&self.unit, "Satuan tidak boleh kosong")?;
        if self.initial_stock < 0 {
            return Err("Stok awal tidak boleh negatif".into());
        }
        match parse_decimal(&self.unit_price) {
            Some(price) if price >= 0.0 => {}
            _ => return Err("Harga satuan harus berupa angka positif".into()),
        }
        if let Some(date) = &self.procurement_date {
            if parse_wire_date(date).is_none() {
                return Err("Tanggal pengadaan tidak valid".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        serde_json::from_str(
            r#"{
                "item_id": 12,
                "item_code": "1.1.7.01.03.01.001",
                "item_name": "Kertas HVS A4",
                "category": "ATK",
                "unit": "Rim",
                "procurement_date": "2024-01-15T00:00:00.000Z",
                "initial_stock": 50,
                "current_stock": 32,
                "unit_price": "55000.00",
                "status": "stok_baru"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_item_decoding() {
        let item = item();
        assert_eq!(item.status(), ItemStatus::StokBaru);
        assert_eq!(item.status().label(), "Stok Baru");
        assert_eq!(item.unit_price_value(), Some(55000.0));
        assert_eq!(
            item.procurement_date(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ItemStatus::parse("KOSONG").label(), "Kosong");
        assert_eq!(ItemStatus::parse("stok_lama").label(), "Stok Lama");
        assert_eq!(ItemStatus::parse("rusak").label(), "rusak");
        assert_eq!(ItemStatus::parse("").label(), "-");
    }

    #[test]
    fn test_update_from_item_is_valid() {
        let update = ItemUpdate::from_item(&item());
        assert_eq!(update.procurement_date.as_deref(), Some("2024-01-15"));
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_update_validation() {
        let base = ItemUpdate::from_item(&item());
        let bad_price = ItemUpdate {
            unit_price: "abc".into(),
            ..base.clone()
        };
        assert!(bad_price.validate().is_err());

        let negative = ItemUpdate {
            initial_stock: -1,
            ..base.clone()
        };
        assert_eq!(
            negative.validate().unwrap_err(),
            "Stok awal tidak boleh negatif"
        );

        let bad_date = ItemUpdate {
            procurement_date: Some("15/01/2024".into()),
            ..base
        };
        assert!(bad_date.validate().is_err());
    }
}
