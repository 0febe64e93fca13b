mod view;
mod view_model;

pub use view::BarangKeluarAdd;
pub use view_model::{pegawai_options, BarangKeluarDraft};
