use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::shared::text::title_case;

// ============================================================================
// Jadwal (recurring inspection schedule)
// ============================================================================

/// Row of `GET /api/schedules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub tanggal: String,
    #[serde(default)]
    pub hari: String,
    #[serde(default)]
    pub nama_lokasi: String,
    #[serde(default)]
    pub nama_pegawai: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub kondisi: String,
    #[serde(default)]
    pub catatan: String,
    #[serde(default)]
    pub slide_url: String,
}

impl Schedule {
    /// Slide deck of the inspection, available once its status is `selesai`.
    pub fn finished_slide_url(&self) -> Option<&str> {
        let finished = self.status.trim().eq_ignore_ascii_case("selesai");
        (finished && !self.slide_url.trim().is_empty()).then_some(self.slide_url.as_str())
    }
}

/// Person in charge, a subset of `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pic {
    pub id: i64,
    pub nama: String,
}

/// Row of `GET /api/locations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub nama: String,
}

/// One element of the `POST /api/schedules` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSchedule {
    pub tanggal: String,
    pub hari: String,
    pub status: String,
    pub kondisi: String,
    pub catatan: String,
    pub pegawai_id: i64,
    pub lokasi_id: i64,
    pub photo_url: String,
}

pub const ASSIGNMENT_SLOTS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Assignment {
    pub pic_id: Option<i64>,
    pub location_id: Option<i64>,
}

impl Assignment {
    fn is_blank(&self) -> bool {
        self.pic_id.is_none() && self.location_id.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleDraft {
    pub tanggal: Option<NaiveDate>,
    pub assignments: [Assignment; ASSIGNMENT_SLOTS],
}

impl ScheduleDraft {
    /// Builds one schedule per complete PIC/location pair.
    pub fn to_requests(&self) -> Result<Vec<NewSchedule>, String> {
        let tanggal = self.tanggal.ok_or("Tanggal harus diisi.")?;

        let filled: Vec<&Assignment> = self.assignments.iter().filter(|a| !a.is_blank()).collect();
        if filled
            .iter()
            .any(|a| a.pic_id.is_none() || a.location_id.is_none())
        {
            return Err("PIC dan Lokasi harus diisi berpasangan.".into());
        }
        if filled.is_empty() {
            return Err("Minimal harus ada satu penugasan PIC & Lokasi yang diisi.".into());
        }

        let date = tanggal.format("%Y-%m-%d").to_string();
        let hari = hari_name(tanggal.weekday()).to_string();
        Ok(filled
            .into_iter()
            .filter_map(|a| Some((a.pic_id?, a.location_id?)))
            .map(|(pegawai_id, lokasi_id)| NewSchedule {
                tanggal: date.clone(),
                hari: hari.clone(),
                status: "antri".into(),
                kondisi: "baik".into(),
                catatan: String::new(),
                pegawai_id,
                lokasi_id,
                photo_url: String::new(),
            })
            .collect())
    }
}

/// Indonesian weekday name.
pub fn hari_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Caution,
    Danger,
    Outline,
    Neutral,
}

/// Display label and badge tone for a schedule status or condition.
pub fn status_label(status: &str) -> (String, StatusTone) {
    if status.trim().is_empty() {
        return ("Unknown".into(), StatusTone::Neutral);
    }
    let spaced = status.replace('_', " ");
    let label = if spaced.eq_ignore_ascii_case("antri") {
        "Antrian".to_string()
    } else {
        title_case(&spaced)
    };
    let tone = match label.as_str() {
        "Selesai" | "Baik" => StatusTone::Success,
        "Proses" | "Perlu Perbaikan" => StatusTone::Warning,
        "Rusak Ringan" => StatusTone::Caution,
        "Rusak Berat" => StatusTone::Danger,
        "Antrian" => StatusTone::Outline,
        _ => StatusTone::Neutral,
    };
    (label, tone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ScheduleDraft {
        ScheduleDraft {
            // 2024-05-03 is a Friday
            tanggal: NaiveDate::from_ymd_opt(2024, 5, 3),
            ..ScheduleDraft::default()
        }
    }

    #[test]
    fn test_slide_only_after_finish() {
        let mut schedule: Schedule = serde_json::from_str(
            r#"{"id":4,"tanggal":"2024-05-03","status":"proses","slide_url":"https://slides.example/4"}"#,
        )
        .unwrap();
        assert_eq!(schedule.finished_slide_url(), None);

        schedule.status = "Selesai".into();
        assert_eq!(schedule.finished_slide_url(), Some("https://slides.example/4"));

        schedule.slide_url.clear();
        assert_eq!(schedule.finished_slide_url(), None);
    }

    #[test]
    fn test_complete_pairs_become_requests() {
        let mut d = draft();
        d.assignments[0] = Assignment {
            pic_id: Some(1),
            location_id: Some(10),
        };
        d.assignments[3] = Assignment {
            pic_id: Some(2),
            location_id: Some(11),
        };
        let requests = d.to_requests().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].tanggal, "2024-05-03");
        assert_eq!(requests[0].hari, "Jumat");
        assert_eq!(requests[0].status, "antri");
        assert_eq!(requests[1].lokasi_id, 11);
    }

    #[test]
    fn test_half_filled_pair_rejected() {
        let mut d = draft();
        d.assignments[1].pic_id = Some(4);
        assert_eq!(
            d.to_requests().unwrap_err(),
            "PIC dan Lokasi harus diisi berpasangan."
        );
    }

    #[test]
    fn test_empty_assignments_rejected() {
        assert!(draft().to_requests().is_err());
        let no_date = ScheduleDraft::default();
        assert_eq!(no_date.to_requests().unwrap_err(), "Tanggal harus diisi.");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label("antri"), ("Antrian".into(), StatusTone::Outline));
        assert_eq!(status_label("rusak_berat"), ("Rusak Berat".into(), StatusTone::Danger));
        assert_eq!(
            status_label("perlu_perbaikan"),
            ("Perlu Perbaikan".into(), StatusTone::Warning)
        );
        assert_eq!(status_label("selesai").1, StatusTone::Success);
        assert_eq!(status_label("").0, "Unknown");
    }
}
