use serde::{Deserialize, Serialize};

use crate::shared::text::{looks_like_email, title_case};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !looks_like_email(&self.email) {
            return Err("Masukkan alamat email yang valid.".into());
        }
        if self.password.is_empty() {
            return Err("Password tidak boleh kosong.".into());
        }
        Ok(())
    }
}

/// Body of `POST /api/auth/login`.
///
/// The backend answers HTTP 200 for some failures too, so `code` must be checked as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<LoginData>,
}

impl LoginResponse {
    /// Token and user when the login succeeded, otherwise the backend message.
    pub fn into_result(self) -> Result<LoginData, String> {
        match (self.code, self.data) {
            (Some(200), Some(data)) if !data.token.is_empty() => Ok(data),
            _ => Err(self
                .message
                .unwrap_or_else(|| "Email atau password salah.".to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Employee role as stored by the backend (`users.role`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    StaffBarang,
    Pic,
    Pimpinan,
    StaffGudang,
    Other(String),
}

impl Role {
    pub const SELECTABLE: [Role; 6] = [
        Role::Admin,
        Role::User,
        Role::StaffBarang,
        Role::Pic,
        Role::Pimpinan,
        Role::StaffGudang,
    ];

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "user" => Role::User,
            "staff_barang" => Role::StaffBarang,
            "pic" => Role::Pic,
            "pimpinan" => Role::Pimpinan,
            "staff_gudang" => Role::StaffGudang,
            _ => Role::Other(value.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::StaffBarang => "staff_barang",
            Role::Pic => "pic",
            Role::Pimpinan => "pimpinan",
            Role::StaffGudang => "staff_gudang",
            Role::Other(value) => value,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Role::Admin => "Admin".into(),
            Role::User => "User".into(),
            Role::StaffBarang => "Staff Barang".into(),
            Role::Pic => "PIC".into(),
            Role::Pimpinan => "Pimpinan".into(),
            Role::StaffGudang => "Staff Gudang".into(),
            Role::Other(value) if value.is_empty() => "Tidak Diketahui".into(),
            Role::Other(value) => title_case(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "admin@bpsdm.go.id".into(),
            password: "secret".into(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = LoginRequest {
            email: "admin".into(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let empty_password = LoginRequest {
            password: String::new(),
            ..ok
        };
        assert_eq!(
            empty_password.validate().unwrap_err(),
            "Password tidak boleh kosong."
        );
    }

    #[test]
    fn test_login_response_success() {
        let json = r#"{"code":200,"data":{"token":"abc","user":{"name":"Andi","role":"admin"}}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        let data = response.into_result().unwrap();
        assert_eq!(data.token, "abc");
        assert_eq!(data.user.name, "Andi");
    }

    #[test]
    fn test_login_response_failure_uses_backend_message() {
        let json = r#"{"code":401,"message":"Password salah"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_result().unwrap_err(), "Password salah");

        let json = r#"{"code":200}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_result().unwrap_err(), "Email atau password salah.");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::parse("STAFF_BARANG").label(), "Staff Barang");
        assert_eq!(Role::parse("pic").label(), "PIC");
        assert_eq!(Role::parse("operator").label(), "Operator");
        assert_eq!(Role::parse("").label(), "Tidak Diketahui");
        assert_eq!(Role::parse("pimpinan").as_str(), "pimpinan");
    }
}
