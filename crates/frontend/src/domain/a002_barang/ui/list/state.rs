use contracts::domain::a002_barang::aggregate::Item;
use leptos::prelude::*;

/// Row-level UI state of the item list; paging and search live in the search session.
#[derive(Clone, Copy)]
pub struct BarangListState {
    pub pending_delete: RwSignal<Option<Item>>,
    pub deleting: RwSignal<bool>,
    pub export_open: RwSignal<bool>,
}

pub fn create_state() -> BarangListState {
    BarangListState {
        pending_delete: RwSignal::new(None),
        deleting: RwSignal::new(false),
        export_open: RwSignal::new(false),
    }
}
