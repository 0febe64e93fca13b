//! Data handed to the BEND 29 print view (bukti pengeluaran barang).

use serde::{Deserialize, Serialize};

use super::aggregate::{ExportQuery, ItemOut};
use crate::domain::a001_pegawai::aggregate::Pegawai;

/// Person signing the voucher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signatory {
    pub nama: String,
    #[serde(default)]
    pub nip: Option<String>,
    #[serde(default)]
    pub pangkat_golongan: Option<String>,
}

impl Signatory {
    pub fn new(nama: &str, nip: &str, pangkat_golongan: &str) -> Self {
        Self {
            nama: nama.to_string(),
            nip: Some(nip.to_string()),
            pangkat_golongan: Some(pangkat_golongan.to_string()),
        }
    }

    /// Recipient block of the voucher; `-` stands in for missing NIP or grade.
    pub fn recipient(pegawai: Option<&Pegawai>) -> Self {
        match pegawai {
            Some(p) => Self::new(&p.nama, p.nip_display(), p.golongan_display()),
            None => Self::new("Tidak Ditemukan", "-", "-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

/// Outflow rows for one recipient over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bend29Document {
    pub items: Vec<ItemOut>,
    pub penerima: Signatory,
    pub range: DateRange,
}

impl Bend29Document {
    pub fn new(items: Vec<ItemOut>, pegawai: Option<&Pegawai>, query: &ExportQuery) -> Self {
        Self {
            items,
            penerima: Signatory::recipient(pegawai),
            range: DateRange {
                start_date: query.start_date.clone(),
                end_date: query.end_date.clone(),
            },
        }
    }

    pub fn total_harga(&self) -> f64 {
        self.items.iter().map(ItemOut::total_harga_value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Storekeeper signing every voucher.
pub fn pengurus_barang() -> Signatory {
    Signatory::new("Fitriani Hamidah", "199506222025212001", "V")
}

/// Head of the administration sub-division, countersigning every voucher.
pub fn kepala_sub_bagian() -> Signatory {
    Signatory::new(
        "Firmansyah, S.Sos., M.Si.",
        "197507242010011007",
        "Penata Tingkat I (III/d)",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> ExportQuery {
        ExportQuery {
            start_date: "2024-05-01".into(),
            end_date: "2024-05-31".into(),
            pegawai_id: 7,
        }
    }

    #[test]
    fn test_total_ignores_unparsable_amounts() {
        let items: Vec<ItemOut> = serde_json::from_str(
            r#"[
                {"id":1,"tanggal":"2024-05-02","nama_barang":"Map","qty":2,"harga_satuan":"2500","total_harga":"5000"},
                {"id":2,"tanggal":"2024-05-03","nama_barang":"Pena","qty":1,"harga_satuan":"","total_harga":""}
            ]"#,
        )
        .unwrap();
        let document = Bend29Document::new(items, None, &query());
        assert_eq!(document.total_harga(), 5000.0);
        assert!(!document.is_empty());
        assert_eq!(document.range.end_date, "2024-05-31");
    }

    #[test]
    fn test_recipient_from_pegawai() {
        let pegawai = Pegawai {
            id: 7,
            nip: None,
            nama: "Budi Santoso".into(),
            email: "budi@bpsdm.go.id".into(),
            jabatan: "Analis".into(),
            golongan: Some("III/a".into()),
            role: "user".into(),
            photo_url: None,
        };
        let document = Bend29Document::new(Vec::new(), Some(&pegawai), &query());
        assert_eq!(document.penerima.nama, "Budi Santoso");
        assert_eq!(document.penerima.nip.as_deref(), Some("-"));
        assert_eq!(document.penerima.pangkat_golongan.as_deref(), Some("III/a"));
        assert!(document.is_empty());

        let missing = Signatory::recipient(None);
        assert_eq!(missing.nama, "Tidak Ditemukan");
    }
}
