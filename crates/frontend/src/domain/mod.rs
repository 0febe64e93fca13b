pub mod a001_pegawai;
pub mod a002_barang;
pub mod a003_barang_keluar;
pub mod a004_jadwal;
pub mod a005_tautan;
