//! Full-page BEND 29 voucher (bukti pengeluaran barang).

mod view;
mod view_model;

pub use view::Bend29Print;
