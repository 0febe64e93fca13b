use chrono::NaiveDate;
use contracts::domain::a003_barang_keluar::bend29::{
    kepala_sub_bagian, pengurus_barang, Bend29Document, Signatory,
};

use crate::shared::format::{format_amount_or_dash, format_date, format_wire_date};
use crate::shared::terbilang::terbilang_normalized;

/// Warehouse every row is issued from.
pub const ORIGIN_UNIT: &str = "BPSDM";
/// Place printed next to the signing date.
pub const SIGNING_PLACE: &str = "Cimahi";

#[derive(Debug, Clone, PartialEq)]
pub struct Bend29Row {
    pub tanggal: String,
    pub asal: &'static str,
    pub nama_barang: String,
    pub satuan: String,
    pub qty: i64,
    pub qty_terbilang: String,
    pub harga_satuan: String,
    pub total_harga: String,
}

/// Display-ready voucher.
#[derive(Debug, Clone, PartialEq)]
pub struct Bend29Sheet {
    pub rows: Vec<Bend29Row>,
    pub total_harga: String,
    pub periode: String,
    pub signed_on: String,
    pub penerima: Signatory,
    pub pengurus_barang: Signatory,
    pub kepala_sub_bagian: Signatory,
}

impl Bend29Sheet {
    pub fn build(document: &Bend29Document, today: NaiveDate) -> Self {
        let rows = document
            .items
            .iter()
            .map(|item| Bend29Row {
                tanggal: format_wire_date(&item.tanggal),
                asal: ORIGIN_UNIT,
                nama_barang: item.nama_barang.clone(),
                satuan: item.satuan.clone(),
                qty: item.qty,
                qty_terbilang: terbilang_normalized(item.qty),
                harga_satuan: format_amount_or_dash(item.harga_satuan_value()),
                total_harga: format_amount_or_dash(item.total_harga_value()),
            })
            .collect();

        Self {
            rows,
            total_harga: format_amount_or_dash(document.total_harga()),
            periode: format!(
                "{} s.d. {}",
                format_wire_date(&document.range.start_date),
                format_wire_date(&document.range.end_date)
            ),
            signed_on: format!("{}, {}", SIGNING_PLACE, format_date(today)),
            penerima: document.penerima.clone(),
            pengurus_barang: pengurus_barang(),
            kepala_sub_bagian: kepala_sub_bagian(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// `-` for a missing or blank signatory field.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_barang_keluar::aggregate::{ExportQuery, ItemOut};

    fn document() -> Bend29Document {
        let items: Vec<ItemOut> = serde_json::from_str(
            r#"[
                {"id":1,"tanggal":"2024-05-02T00:00:00.000Z","nama_barang":"Kertas A4","satuan":"Rim",
                 "qty":12,"harga_satuan":"55000.00","total_harga":"660000.00"},
                {"id":2,"tanggal":"2024-05-06","nama_barang":"Map Plastik","satuan":"Buah",
                 "qty":1500,"harga_satuan":"0","total_harga":"0"}
            ]"#,
        )
        .unwrap();
        let query = ExportQuery {
            start_date: "2024-05-01".into(),
            end_date: "2024-05-31".into(),
            pegawai_id: 7,
        };
        Bend29Document::new(items, None, &query)
    }

    #[test]
    fn test_rows_are_formatted_for_print() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let sheet = Bend29Sheet::build(&document(), today);

        assert_eq!(sheet.rows.len(), 2);
        let first = &sheet.rows[0];
        assert_eq!(first.tanggal, "02-05-2024");
        assert_eq!(first.asal, "BPSDM");
        assert_eq!(first.qty_terbilang, "Dua Belas");
        assert_eq!(first.harga_satuan, "55.000");
        assert_eq!(first.total_harga, "660.000");

        let second = &sheet.rows[1];
        assert_eq!(second.qty_terbilang, "Seribu Lima Ratus");
        assert_eq!(second.harga_satuan, "-");
        assert_eq!(second.total_harga, "-");

        assert_eq!(sheet.total_harga, "660.000");
        assert_eq!(sheet.periode, "01-05-2024 s.d. 31-05-2024");
        assert_eq!(sheet.signed_on, "Cimahi, 03-06-2024");
        assert_eq!(sheet.pengurus_barang.nama, "Fitriani Hamidah");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("III/a")), "III/a");
    }
}
