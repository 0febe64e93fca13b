//! Indonesian number-to-words ("terbilang") used for the quantity-in-words column of BEND 29.
//!
//! [`spell`] keeps the raw concatenation rules, including the trailing space left by a zero
//! remainder (`spell(20) == "Dua Puluh "`). The voucher prints [`terbilang_normalized`], which
//! collapses that whitespace.

/// Words for 0..=11; zero is intentionally empty.
const UNITS: [&str; 12] = [
    "", "Satu", "Dua", "Tiga", "Empat", "Lima", "Enam", "Tujuh", "Delapan", "Sembilan",
    "Sepuluh", "Sebelas",
];

/// Quantities from here on are not spelled out.
const CEILING: i64 = 1_000_000;
const LARGE_AMOUNT: &str = "Jumlah besar";

/// Raw recursive speller. First matching range wins.
pub fn spell(n: i64) -> String {
    match n {
        n if n < 0 => {
            // i64::MIN has no positive counterpart; it is far above the ceiling anyway.
            format!("Minus {}", spell(n.checked_neg().unwrap_or(i64::MAX)))
        }
        0..=11 => UNITS[n as usize].to_string(),
        12..=19 => format!("{} Belas", spell(n - 10)),
        20..=99 => format!("{} Puluh {}", spell(n / 10), spell(n % 10)),
        100..=199 => format!("Seratus {}", spell(n - 100)),
        200..=999 => format!("{} Ratus {}", spell(n / 100), spell(n % 100)),
        1000..=1999 => format!("Seribu {}", spell(n - 1000)),
        n if n < CEILING => format!("{} Ribu {}", spell(n / 1000), spell(n % 1000)),
        _ => LARGE_AMOUNT.to_string(),
    }
}

/// Entry point for quantities: zero renders as an empty cell.
pub fn terbilang(n: i64) -> String {
    if n == 0 {
        return String::new();
    }
    spell(n)
}

/// Entry point for untyped input (form fields, decimal strings from the API).
///
/// Unparsable, non-finite and zero values render as `""`; fractions are truncated.
pub fn terbilang_text(input: &str) -> String {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => terbilang(value.trunc() as i64),
        _ => String::new(),
    }
}

/// [`terbilang`] with runs of whitespace collapsed and trimmed.
pub fn terbilang_normalized(n: i64) -> String {
    terbilang(n).split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_and_teens() {
        assert_eq!(spell(0), "");
        assert_eq!(spell(1), "Satu");
        assert_eq!(spell(10), "Sepuluh");
        assert_eq!(spell(11), "Sebelas");
        assert_eq!(spell(12), "Dua Belas");
        assert_eq!(spell(13), "Tiga Belas");
        assert_eq!(spell(19), "Sembilan Belas");
    }

    #[test]
    fn test_raw_rules_keep_trailing_space() {
        assert_eq!(spell(20), "Dua Puluh ");
        assert_eq!(spell(100), "Seratus ");
        assert_eq!(spell(1500), "Seribu Lima Ratus ");
        assert_eq!(spell(2000), "Dua Ribu ");
    }

    #[test]
    fn test_compound_numbers() {
        assert_eq!(spell(21), "Dua Puluh Satu");
        assert_eq!(spell(111), "Seratus Sebelas");
        assert_eq!(spell(245), "Dua Ratus Empat Puluh Lima");
        assert_eq!(spell(1001), "Seribu Satu");
        assert_eq!(spell(12_345), "Dua Belas Ribu Tiga Ratus Empat Puluh Lima");
        assert_eq!(
            spell(999_999),
            "Sembilan Ratus Sembilan Puluh Sembilan Ribu Sembilan Ratus Sembilan Puluh Sembilan"
        );
    }

    #[test]
    fn test_ceiling_and_negatives() {
        assert_eq!(spell(1_000_000), "Jumlah besar");
        assert_eq!(spell(2_500_000), "Jumlah besar");
        assert_eq!(spell(-5), "Minus Lima");
        assert_eq!(spell(i64::MIN), "Minus Jumlah besar");
    }

    #[test]
    fn test_entry_points_guard_zero_and_invalid_input() {
        assert_eq!(terbilang(0), "");
        assert_eq!(terbilang_text("0"), "");
        assert_eq!(terbilang_text(""), "");
        assert_eq!(terbilang_text("abc"), "");
        assert_eq!(terbilang_text("NaN"), "");
        assert_eq!(terbilang_text("inf"), "");
        assert_eq!(terbilang_text(" 13 "), "Tiga Belas");
        assert_eq!(terbilang_text("7.9"), "Tujuh");
    }

    #[test]
    fn test_normalized_output() {
        assert_eq!(terbilang_normalized(20), "Dua Puluh");
        assert_eq!(terbilang_normalized(1500), "Seribu Lima Ratus");
        assert_eq!(terbilang_normalized(300_000), "Tiga Ratus Ribu");
        assert_eq!(terbilang_normalized(0), "");
    }
}
