use std::collections::HashMap;

use contracts::domain::a003_barang_keluar::bend29::Bend29Document;
use leptos::prelude::*;
use web_sys::window;

/// Screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Pegawai,
    Barang,
    BarangKeluar,
    Jadwal,
    Tautan,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Pegawai,
        Section::Barang,
        Section::BarangKeluar,
        Section::Jadwal,
        Section::Tautan,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Pegawai => "master-data-pegawai",
            Section::Barang => "master-data-barang",
            Section::BarangKeluar => "barang-keluar",
            Section::Jadwal => "scheduling",
            Section::Tautan => "tautan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Pegawai => "Master Data Pegawai",
            Section::Barang => "Master Data Barang",
            Section::BarangKeluar => "Barang Keluar",
            Section::Jadwal => "Jadwal Pemeriksaan",
            Section::Tautan => "Tautan",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Pegawai => "users",
            Section::Barang => "package",
            Section::BarangKeluar => "arrow-right-left",
            Section::Jadwal => "calendar",
            Section::Tautan => "link",
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Reads `active` from a `?active=..&..` query string.
fn active_from_query(search: &str) -> Option<Section> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| Section::from_key(key))
}

/// `?active=<key>` for the given section.
fn query_for(section: Section) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("active", section.key())])).unwrap_or_default();
    format!("?{}", query_string)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
    /// Voucher shown full-page instead of the shell while set.
    pub print: RwSignal<Option<Bend29Document>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Pegawai),
            left_open: RwSignal::new(true),
            print: RwSignal::new(None),
        }
    }

    pub fn activate(&self, section: Section) {
        self.active.set(section);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn open_print(&self, document: Bend29Document) {
        self.print.set(Some(document));
    }

    pub fn close_print(&self) {
        self.print.set(None);
    }

    /// Restores the section from `?active=` and keeps the URL in sync afterwards.
    pub fn init_location_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(section) = active_from_query(&search) {
            self.active.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("dashboard"), None);
    }

    #[test]
    fn test_active_from_query() {
        assert_eq!(active_from_query("?active=tautan"), Some(Section::Tautan));
        assert_eq!(
            active_from_query("?foo=1&active=barang-keluar"),
            Some(Section::BarangKeluar)
        );
        assert_eq!(active_from_query("?active=unknown"), None);
        assert_eq!(active_from_query(""), None);
    }

    #[test]
    fn test_active_from_query_decodes_percent_escapes() {
        assert_eq!(
            active_from_query("?active=barang%2Dkeluar"),
            Some(Section::BarangKeluar)
        );
    }

    #[test]
    fn test_query_for_round_trips() {
        assert_eq!(query_for(Section::Jadwal), "?active=scheduling");
        for section in Section::ALL {
            assert_eq!(active_from_query(&query_for(section)), Some(section));
        }
    }
}
