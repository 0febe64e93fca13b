use contracts::domain::a001_pegawai::aggregate::{Pegawai, PegawaiForm};
use contracts::shared::api::ApiEnvelope;

use crate::shared::api_utils::{ApiClient, ApiError, Verb};

/// `GET /api/users`, unpaged.
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Pegawai>, ApiError> {
    let envelope: ApiEnvelope<Vec<Pegawai>> = client.get_json("/api/users").await?;
    Ok(envelope.into_data())
}

/// bcrypt work factor the backend's login check expects.
pub const PASSWORD_HASH_COST: u32 = 10;

/// Copy of `form` with the password replaced by its bcrypt hash.
/// The backend stores whatever it receives, so hashing happens here.
pub fn with_hashed_password(form: &PegawaiForm) -> Result<PegawaiForm, ApiError> {
    let mut hashed = form.clone();
    if let Some(plain) = form.password.as_deref() {
        let digest = bcrypt::hash(plain, PASSWORD_HASH_COST)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        hashed.password = Some(digest);
    }
    Ok(hashed)
}

/// `POST /api/users`; the backend takes a batch, so the form is wrapped in an array.
pub async fn create(client: &ApiClient, form: &PegawaiForm) -> Result<(), ApiError> {
    let body = with_hashed_password(form)?;
    let _: serde_json::Value = client
        .send_json(Verb::Post, "/api/users", &[body])
        .await?;
    Ok(())
}

pub async fn update(client: &ApiClient, id: i64, form: &PegawaiForm) -> Result<(), ApiError> {
    let _: serde_json::Value = client
        .send_json(Verb::Put, &format!("/api/users/{}", id), form)
        .await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/api/users/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_password(password: &str) -> PegawaiForm {
        let mut form = PegawaiForm::new_for_insert();
        form.nama = "Siti Rahma".into();
        form.email = "siti@example.go.id".into();
        form.password = Some(password.into());
        form
    }

    #[test]
    fn test_new_employee_password_is_sent_as_bcrypt_hash() {
        let form = form_with_password("rahasia123");
        let hashed = with_hashed_password(&form).unwrap();
        let digest = hashed.password.unwrap();
        assert!(digest.starts_with("$2"));
        assert_ne!(digest, "rahasia123");
        assert!(digest.contains("$10$"));
        assert!(bcrypt::verify("rahasia123", &digest).unwrap());
        assert!(!bcrypt::verify("salah", &digest).unwrap());
    }

    #[test]
    fn test_hashing_keeps_other_fields() {
        let form = form_with_password("rahasia123");
        let hashed = with_hashed_password(&form).unwrap();
        assert_eq!(hashed.nama, form.nama);
        assert_eq!(hashed.email, form.email);
        assert_eq!(hashed.role, form.role);
    }

    #[test]
    fn test_form_without_password_is_unchanged() {
        let mut form = form_with_password("x");
        form.password = None;
        assert_eq!(with_hashed_password(&form).unwrap().password, None);
    }
}
