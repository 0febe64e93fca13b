use serde::{Deserialize, Serialize};

use crate::shared::text::{looks_like_email, require};
use crate::system::auth::Role;

// ============================================================================
// Pegawai (employee master data)
// ============================================================================

/// Employee record as returned by `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pegawai {
    pub id: i64,
    #[serde(default)]
    pub nip: Option<String>,
    pub nama: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub jabatan: String,
    #[serde(default)]
    pub golongan: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Pegawai {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }

    /// NIP for display, `-` when unset.
    pub fn nip_display(&self) -> &str {
        self.nip.as_deref().filter(|v| !v.is_empty()).unwrap_or("-")
    }

    pub fn golongan_display(&self) -> &str {
        self.golongan
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or("-")
    }
}

/// PNS and PPPK grades offered by the golongan select.
pub const GOLONGAN_OPTIONS: &[&str] = &[
    "I/a", "I/b", "I/c", "I/d", "II/a", "II/b", "II/c", "II/d", "III/a", "III/b", "III/c",
    "III/d", "IV/a", "IV/b", "IV/c", "IV/d", "IV/e", "PPPK I", "PPPK II", "PPPK III", "PPPK IV",
    "PPPK V", "PPPK VI", "PPPK VII", "PPPK VIII", "PPPK IX", "PPPK X", "PPPK XI", "PPPK XII",
    "PPPK XIII", "PPPK XIV", "PPPK XV", "PPPK XVI", "PPPK XVII", "None",
];

pub const MIN_PASSWORD_LEN: usize = 6;

/// Form body for both create and update.
///
/// `POST /api/users` takes a one-element array of this; `PUT /api/users/{id}` the bare object
/// without `password`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PegawaiForm {
    pub nama: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub nip: String,
    pub jabatan: String,
    pub golongan: String,
    pub role: String,
}

impl PegawaiForm {
    /// Blank form for the "Tambah Pegawai" dialog.
    pub fn new_for_insert() -> Self {
        Self {
            password: Some(String::new()),
            ..Self::default()
        }
    }

    /// Prefilled form for editing; the password is never edited here.
    pub fn from_pegawai(p: &Pegawai) -> Self {
        Self {
            nama: p.nama.clone(),
            email: p.email.clone(),
            password: None,
            nip: p.nip.clone().unwrap_or_default(),
            jabatan: p.jabatan.clone(),
            golongan: p.golongan.clone().unwrap_or_default(),
            role: p.role.clone(),
        }
    }

    pub fn is_insert(&self) -> bool {
        self.password.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        require(&self.nama, "Nama tidak boleh kosong")?;
        if !looks_like_email(&self.email) {
            return Err("Email tidak valid".into());
        }
        if let Some(password) = &self.password {
            if password.chars().count() < MIN_PASSWORD_LEN {
                return Err(format!(
                    "Password minimal {} karakter",
                    MIN_PASSWORD_LEN
                ));
            }
        }
        require(&self.jabatan, "Jabatan tidak boleh kosong")?;
        require(&self.role, "Role harus dipilih")?;
        if !self.golongan.is_empty() && !GOLONGAN_OPTIONS.contains(&self.golongan.as_str()) {
            return Err(format!("Golongan '{}' tidak dikenal", self.golongan));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PegawaiForm {
        PegawaiForm {
            nama: "Andi Wijaya".into(),
            email: "andi@bpsdm.go.id".into(),
            password: Some("rahasia1".into()),
            nip: "199001012020121001".into(),
            jabatan: "Pengurus Barang".into(),
            golongan: "III/a".into(),
            role: "staff_barang".into(),
        }
    }

    #[test]
    fn test_valid_insert_form() {
        assert!(filled().validate().is_ok());
        assert!(filled().is_insert());
    }

    #[test]
    fn test_short_password_rejected() {
        let form = PegawaiForm {
            password: Some("123".into()),
            ..filled()
        };
        assert_eq!(form.validate().unwrap_err(), "Password minimal 6 karakter");
    }

    #[test]
    fn test_unknown_golongan_rejected() {
        let form = PegawaiForm {
            golongan: "V/z".into(),
            ..filled()
        };
        assert!(form.validate().is_err());

        let empty = PegawaiForm {
            golongan: String::new(),
            ..filled()
        };
        assert!(empty.validate().is_ok());
    }

    #[test]
    fn test_update_form_omits_password() {
        let pegawai = Pegawai {
            id: 7,
            nip: None,
            nama: "Citra".into(),
            email: "citra@bpsdm.go.id".into(),
            jabatan: "Staf".into(),
            golongan: Some("II/b".into()),
            role: "user".into(),
            photo_url: None,
        };
        let form = PegawaiForm::from_pegawai(&pegawai);
        assert!(!form.is_insert());
        assert!(form.validate().is_ok());

        let json = serde_json::to_value(&form).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["golongan"], "II/b");
        assert_eq!(pegawai.nip_display(), "-");
    }
}
