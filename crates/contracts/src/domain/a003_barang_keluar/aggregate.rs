use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_barang::aggregate::{parse_decimal, Item};
use crate::shared::text::require;

// ============================================================================
// Barang keluar (inventory outflow)
// ============================================================================

/// Row of `GET /api/items-out` and of the by-employee export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOut {
    pub id: i64,
    pub tanggal: String,
    pub nama_barang: String,
    #[serde(default)]
    pub penerima: String,
    #[serde(default)]
    pub satuan: String,
    #[serde(default)]
    pub qty: i64,
    #[serde(default)]
    pub harga_satuan: String,
    #[serde(default)]
    pub total_harga: String,
}

impl ItemOut {
    pub fn harga_satuan_value(&self) -> f64 {
        parse_decimal(&self.harga_satuan).unwrap_or(0.0)
    }

    pub fn total_harga_value(&self) -> f64 {
        parse_decimal(&self.total_harga).unwrap_or(0.0)
    }
}

/// Body of `POST /api/items-out`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItemOut {
    /// `yyyy-MM-dd`
    pub tanggal: String,
    pub barang_id: i64,
    pub pegawai_id: i64,
    pub satuan: String,
    pub qty: i64,
    #[serde(default)]
    pub keterangan: String,
}

/// Units offered by the satuan select.
pub const SATUAN_OPTIONS: &[&str] = &[
    "Rim", "Buah", "Pak", "Pcs", "Unit", "Batang", "Kaleng", "Botol",
];

/// Unsubmitted state of the "Tambah Barang Keluar" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemOutDraft {
    pub tanggal: Option<NaiveDate>,
    pub barang_id: Option<i64>,
    pub pegawai_id: Option<i64>,
    pub satuan: String,
    pub qty: String,
    pub keterangan: String,
}

impl ItemOutDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            tanggal: Some(today),
            qty: "1".into(),
            ..Self::default()
        }
    }

    /// Picks the item and takes over its unit.
    pub fn select_item(&mut self, item: &Item) {
        self.barang_id = Some(item.item_id);
        if !item.unit.trim().is_empty() {
            self.satuan = item.unit.trim().to_string();
        }
    }

    /// Validates the draft and builds the request body.
    ///
    /// `available_stock` is the selected item's current stock when known.
    pub fn to_request(&self, available_stock: Option<i64>) -> Result<NewItemOut, String> {
        let tanggal = self.tanggal.ok_or("Tanggal harus diisi.")?;
        let barang_id = self.barang_id.ok_or("Nama barang harus dipilih.")?;
        let pegawai_id = self.pegawai_id.ok_or("Penerima harus dipilih.")?;
        require(&self.satuan, "Satuan harus dipilih.")?;
        let qty = self
            .qty
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|q| *q >= 1)
            .ok_or("Jumlah harus lebih dari 0.")?;
        if let Some(stock) = available_stock {
            if qty > stock {
                return Err(format!("Jumlah melebihi stok tersedia ({})", stock));
            }
        }
        Ok(NewItemOut {
            tanggal: tanggal.format("%Y-%m-%d").to_string(),
            barang_id,
            pegawai_id,
            satuan: self.satuan.trim().to_string(),
            qty,
            keterangan: self.keterangan.trim().to_string(),
        })
    }
}

/// Query of `GET /api/items-out/by-employee`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportQuery {
    pub start_date: String,
    pub end_date: String,
    pub pegawai_id: i64,
}

impl ExportQuery {
    pub fn build(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        pegawai_id: Option<i64>,
    ) -> Result<Self, String> {
        let incomplete = || "Harap pastikan rentang tanggal dan pegawai sudah dipilih.".to_string();
        let (start, end, pegawai_id) = match (start, end, pegawai_id) {
            (Some(s), Some(e), Some(p)) => (s, e, p),
            _ => return Err(incomplete()),
        };
        if start > end {
            return Err("Tanggal awal harus sebelum tanggal akhir.".into());
        }
        Ok(Self {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            pegawai_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft() -> ItemOutDraft {
        ItemOutDraft {
            barang_id: Some(3),
            pegawai_id: Some(9),
            satuan: "Rim".into(),
            qty: "4".into(),
            keterangan: " rapat ".into(),
            ..ItemOutDraft::new(date(2024, 5, 2))
        }
    }

    #[test]
    fn test_draft_to_request() {
        let request = draft().to_request(Some(10)).unwrap();
        assert_eq!(request.tanggal, "2024-05-02");
        assert_eq!(request.qty, 4);
        assert_eq!(request.keterangan, "rapat");
    }

    #[test]
    fn test_draft_rejects_missing_fields() {
        let no_item = ItemOutDraft {
            barang_id: None,
            ..draft()
        };
        assert_eq!(no_item.to_request(None).unwrap_err(), "Nama barang harus dipilih.");

        let zero = ItemOutDraft {
            qty: "0".into(),
            ..draft()
        };
        assert_eq!(zero.to_request(None).unwrap_err(), "Jumlah harus lebih dari 0.");

        let text = ItemOutDraft {
            qty: "dua".into(),
            ..draft()
        };
        assert!(text.to_request(None).is_err());
    }

    #[test]
    fn test_draft_rejects_qty_above_stock() {
        assert!(draft().to_request(Some(3)).is_err());
        assert!(draft().to_request(Some(4)).is_ok());
    }

    #[test]
    fn test_select_item_fills_unit() {
        let item: Item = serde_json::from_str(
            r#"{"item_id":3,"item_name":"Kertas A4","unit":"Rim","current_stock":10}"#,
        )
        .unwrap();
        let mut d = ItemOutDraft::new(date(2024, 5, 2));
        d.select_item(&item);
        assert_eq!(d.barang_id, Some(3));
        assert_eq!(d.satuan, "Rim");
    }

    #[test]
    fn test_export_query() {
        let query = ExportQuery::build(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)), Some(5)).unwrap();
        assert_eq!(query.start_date, "2024-01-01");
        assert_eq!(query.end_date, "2024-01-31");

        assert!(ExportQuery::build(Some(date(2024, 2, 1)), Some(date(2024, 1, 1)), Some(5)).is_err());
        assert!(ExportQuery::build(Some(date(2024, 1, 1)), None, Some(5)).is_err());
        assert!(ExportQuery::build(Some(date(2024, 1, 1)), Some(date(2024, 1, 1)), None).is_err());
    }

    #[test]
    fn test_item_out_amounts() {
        let row: ItemOut = serde_json::from_str(
            r#"{"id":1,"tanggal":"2024-05-02","nama_barang":"Map","qty":2,"harga_satuan":"2500.00","total_harga":"5000.00"}"#,
        )
        .unwrap();
        assert_eq!(row.harga_satuan_value(), 2500.0);
        assert_eq!(row.total_harga_value(), 5000.0);
        assert_eq!(row.penerima, "");
    }
}
