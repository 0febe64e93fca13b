//! Small text helpers shared by labels and form validation.

/// Uppercases the first character of every space-separated word.
///
/// `"rusak_berat"` is not split here; callers replace underscores first.
pub fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Loose e-mail shape check: one `@`, non-empty local part, dotted domain.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
                    .unwrap_or(false)
        }
        None => false,
    }
}

/// Returns `Err(message)` when the trimmed value is empty.
pub fn require(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("perlu perbaikan"), "Perlu Perbaikan");
        assert_eq!(title_case("staff"), "Staff");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("andi@bpsdm.jabarprov.go.id"));
        assert!(looks_like_email(" budi@mail.com "));
        assert!(!looks_like_email("budi@"));
        assert!(!looks_like_email("@mail.com"));
        assert!(!looks_like_email("budi@mail"));
        assert!(!looks_like_email("bu di@mail.com"));
        assert!(!looks_like_email("a@b@c.com"));
    }
}
