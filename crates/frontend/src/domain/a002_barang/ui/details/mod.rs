mod view;
mod view_model;

pub use view::BarangDetails;
pub use view_model::BarangDraft;
