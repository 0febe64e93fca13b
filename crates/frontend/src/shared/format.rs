//! Indonesian (id-ID) number, currency and date formatting.

use chrono::NaiveDate;
use contracts::domain::a002_barang::aggregate::{parse_decimal, parse_wire_date};

/// Groups the integer part with `.` and uses `,` for up to two decimals, trailing zeros dropped.
///
/// ```
/// use frontend::shared::format::format_number_id;
/// assert_eq!(format_number_id(1234567.5), "1.234.567,5");
/// ```
pub fn format_number_id(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let decimals = decimal_part.trim_end_matches('0');
    let sign = if grouped.chars().all(|c| c == '0' || c == '.') && decimals.is_empty() {
        ""
    } else {
        sign
    };
    if decimals.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, decimals)
    }
}

/// `Rp 1.500.000`, rounded to whole rupiah.
pub fn format_rupiah(value: f64) -> String {
    if value < 0.0 {
        format!("-Rp {}", format_number_id(value.abs().round()))
    } else {
        format!("Rp {}", format_number_id(value.round()))
    }
}

/// Rupiah from a backend decimal string, `-` when unparsable.
pub fn format_rupiah_text(value: &str) -> String {
    parse_decimal(value)
        .map(format_rupiah)
        .unwrap_or_else(|| "-".to_string())
}

/// Voucher amounts: plain grouping, `-` for zero.
pub fn format_amount_or_dash(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        "-".to_string()
    } else {
        format_number_id(value)
    }
}

/// Local calendar date of the browser.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `dd-mm-yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// `dd-mm-yyyy` from a wire date; `-` when empty, the input itself when unparsable.
pub fn format_wire_date(value: &str) -> String {
    if value.trim().is_empty() {
        return "-".to_string();
    }
    parse_wire_date(value)
        .map(format_date)
        .unwrap_or_else(|| value.to_string())
}

/// Value for `<input type="date">`.
pub fn input_date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parses the value of `<input type="date">`.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_id() {
        assert_eq!(format_number_id(0.0), "0");
        assert_eq!(format_number_id(999.0), "999");
        assert_eq!(format_number_id(1500000.0), "1.500.000");
        assert_eq!(format_number_id(2500.5), "2.500,5");
        assert_eq!(format_number_id(-1234.0), "-1.234");
        assert_eq!(format_number_id(-0.001), "0");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(1500000.0), "Rp 1.500.000");
        assert_eq!(format_rupiah(55000.4), "Rp 55.000");
        assert_eq!(format_rupiah(-2000.0), "-Rp 2.000");
        assert_eq!(format_rupiah_text("15000.00"), "Rp 15.000");
        assert_eq!(format_rupiah_text("abc"), "-");
    }

    #[test]
    fn test_format_amount_or_dash() {
        assert_eq!(format_amount_or_dash(0.0), "-");
        assert_eq!(format_amount_or_dash(12500.0), "12.500");
    }

    #[test]
    fn test_dates() {
        assert_eq!(format_wire_date("2024-03-15T00:00:00.000Z"), "15-03-2024");
        assert_eq!(format_wire_date("2024-03-15"), "15-03-2024");
        assert_eq!(format_wire_date(""), "-");
        assert_eq!(format_wire_date("kemarin"), "kemarin");

        let date = parse_input_date("2024-12-31").unwrap();
        assert_eq!(input_date_value(Some(date)), "2024-12-31");
        assert_eq!(input_date_value(None), "");
        assert_eq!(parse_input_date(""), None);
    }
}
