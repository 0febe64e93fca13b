use contracts::domain::a002_barang::aggregate::Item;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

pub const SHEET_NAME: &str = "Data Barang";
pub const DEFAULT_FILE_NAME: &str = "data_barang";
const PRICE_FORMAT: &str = "#,##0";

/// Item columns offered in the export dialog, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportColumn {
    Kode,
    Nama,
    Kategori,
    Satuan,
    TglPengadaan,
    StokAwal,
    StokSaatIni,
    HargaSatuan,
    Status,
}

impl ExportColumn {
    pub const ALL: [ExportColumn; 9] = [
        ExportColumn::Kode,
        ExportColumn::Nama,
        ExportColumn::Kategori,
        ExportColumn::Satuan,
        ExportColumn::TglPengadaan,
        ExportColumn::StokAwal,
        ExportColumn::StokSaatIni,
        ExportColumn::HargaSatuan,
        ExportColumn::Status,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExportColumn::Kode => "Kode Barang",
            ExportColumn::Nama => "Nama Barang",
            ExportColumn::Kategori => "Kategori",
            ExportColumn::Satuan => "Satuan",
            ExportColumn::TglPengadaan => "Tgl. Pengadaan",
            ExportColumn::StokAwal => "Stok Awal",
            ExportColumn::StokSaatIni => "Stok Saat Ini",
            ExportColumn::HargaSatuan => "Harga Satuan",
            ExportColumn::Status => "Status",
        }
    }

    fn cell(self, item: &Item) -> ExportCell {
        match self {
            ExportColumn::Kode => text_or_dash(&item.item_code),
            ExportColumn::Nama => text_or_dash(&item.item_name),
            ExportColumn::Kategori => text_or_dash(&item.category),
            ExportColumn::Satuan => text_or_dash(&item.unit),
            ExportColumn::TglPengadaan => match item.procurement_date() {
                Some(date) => ExportCell::Text(date.format("%d-%m-%Y").to_string()),
                None => text_or_dash(item.procurement_date.as_deref().unwrap_or_default()),
            },
            ExportColumn::StokAwal => ExportCell::Number(item.initial_stock as f64),
            ExportColumn::StokSaatIni => ExportCell::Number(item.current_stock as f64),
            ExportColumn::HargaSatuan => match item.unit_price_value() {
                Some(price) => ExportCell::Price(price),
                None => ExportCell::Text("-".into()),
            },
            ExportColumn::Status => ExportCell::Text(item.status().label()),
        }
    }
}

fn text_or_dash(value: &str) -> ExportCell {
    let value = value.trim();
    if value.is_empty() {
        ExportCell::Text("-".into())
    } else {
        ExportCell::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportCell {
    Text(String),
    Number(f64),
    /// Written as a number with the thousands format.
    Price(f64),
}

/// Checkbox state of the export dialog; every column starts selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSelection {
    selected: Vec<(ExportColumn, bool)>,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self {
            selected: ExportColumn::ALL.iter().map(|c| (*c, true)).collect(),
        }
    }
}

impl ColumnSelection {
    pub fn toggle(&mut self, column: ExportColumn) {
        if let Some(entry) = self.selected.iter_mut().find(|(c, _)| *c == column) {
            entry.1 = !entry.1;
        }
    }

    pub fn is_selected(&self, column: ExportColumn) -> bool {
        self.selected
            .iter()
            .any(|(c, on)| *c == column && *on)
    }

    /// Selected columns in sheet order; an empty selection is rejected.
    pub fn active(&self) -> Result<Vec<ExportColumn>, String> {
        let active: Vec<ExportColumn> = self
            .selected
            .iter()
            .filter(|(_, on)| *on)
            .map(|(c, _)| *c)
            .collect();
        if active.is_empty() {
            return Err("Silakan pilih setidaknya satu kolom untuk diekspor.".into());
        }
        Ok(active)
    }
}

pub fn build_rows(items: &[Item], columns: &[ExportColumn]) -> Vec<Vec<ExportCell>> {
    items
        .iter()
        .map(|item| columns.iter().map(|c| c.cell(item)).collect())
        .collect()
}

/// Serialized `.xlsx` with a bold header row and autofitted columns.
pub fn build_workbook(items: &[Item], columns: &[ExportColumn]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let price = Format::new().set_num_format(PRICE_FORMAT);

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    for (col, column) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, column.label(), &header)?;
    }
    for (index, row) in build_rows(items, columns).iter().enumerate() {
        let row_num = index as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                ExportCell::Text(text) => sheet.write_string(row_num, col, text)?,
                ExportCell::Number(n) => sheet.write_number(row_num, col, *n)?,
                ExportCell::Price(p) => sheet.write_number_with_format(row_num, col, *p, &price)?,
            };
        }
    }
    sheet.autofit();

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(code: &str, date: Option<&str>, price: &str, status: &str) -> Item {
        Item {
            item_id: 1,
            item_code: code.into(),
            item_name: "Kertas A4".into(),
            category: "ATK".into(),
            unit: "Rim".into(),
            procurement_date: date.map(str::to_string),
            initial_stock: 20,
            current_stock: 0,
            unit_price: price.into(),
            status: status.into(),
        }
    }

    #[test]
    fn test_all_columns_selected_by_default() {
        let selection = ColumnSelection::default();
        assert_eq!(selection.active().unwrap(), ExportColumn::ALL.to_vec());
    }

    #[test]
    fn test_toggle_keeps_sheet_order() {
        let mut selection = ColumnSelection::default();
        for column in ExportColumn::ALL {
            selection.toggle(column);
        }
        selection.toggle(ExportColumn::Status);
        selection.toggle(ExportColumn::Kode);
        assert!(!selection.is_selected(ExportColumn::Nama));
        assert_eq!(
            selection.active().unwrap(),
            vec![ExportColumn::Kode, ExportColumn::Status]
        );
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let mut selection = ColumnSelection::default();
        for column in ExportColumn::ALL {
            selection.toggle(column);
        }
        assert!(selection.active().is_err());
    }

    #[test]
    fn test_row_formats_date_price_and_status() {
        let items = vec![item("BRG-001", Some("2024-01-15T00:00:00.000Z"), "15000.00", "stok_lama")];
        let columns = [
            ExportColumn::TglPengadaan,
            ExportColumn::HargaSatuan,
            ExportColumn::Status,
            ExportColumn::StokSaatIni,
        ];
        let rows = build_rows(&items, &columns);
        assert_eq!(
            rows,
            vec![vec![
                ExportCell::Text("15-01-2024".into()),
                ExportCell::Price(15000.0),
                ExportCell::Text("Stok Lama".into()),
                ExportCell::Number(0.0),
            ]]
        );
    }

    #[test]
    fn test_missing_values_become_dash() {
        let mut row_item = item("", None, "abc", "");
        row_item.unit = "  ".into();
        let columns = [
            ExportColumn::Kode,
            ExportColumn::Satuan,
            ExportColumn::TglPengadaan,
            ExportColumn::HargaSatuan,
            ExportColumn::Status,
        ];
        let rows = build_rows(&[row_item], &columns);
        assert!(rows[0].iter().all(|c| *c == ExportCell::Text("-".into())));
    }

    #[test]
    fn test_workbook_is_a_zip_container() {
        let items = vec![item("BRG-001", Some("2024-01-15"), "2500000", "stok_baru")];
        let bytes = build_workbook(&items, &ExportColumn::ALL).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
