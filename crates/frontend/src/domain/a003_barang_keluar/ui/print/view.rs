use contracts::domain::a003_barang_keluar::bend29::{Bend29Document, Signatory};
use leptos::prelude::*;
use thaw::*;

use super::view_model::{or_dash, Bend29Sheet};
use crate::layout::global_context::use_global_context;
use crate::shared::format::today;
use crate::shared::icons::icon;

#[component]
fn SignatoryBlock(#[prop(into)] role: String, signatory: Signatory) -> impl IntoView {
    view! {
        <div class="bend29__signatory">
            <p class="bend29__signatory-role">{role}</p>
            <div class="bend29__signature-space"></div>
            <p class="bend29__signatory-name">{signatory.nama.clone()}</p>
            <p>{format!("NIP: {}", or_dash(signatory.nip.as_deref()))}</p>
            <p>{format!("Pangkat/Gol: {}", or_dash(signatory.pangkat_golongan.as_deref()))}</p>
        </div>
    }
}

/// Printable BEND 29 voucher, rendered in place of the shell.
#[component]
pub fn Bend29Print(document: Bend29Document) -> impl IntoView {
    let ctx = use_global_context();
    let sheet = Bend29Sheet::build(&document, today());

    let print = move |_| {
        if let Some(w) = web_sys::window() {
            if let Err(e) = w.print() {
                log::warn!("window.print failed: {:?}", e);
            }
        }
    };

    if sheet.is_empty() {
        return view! {
            <div class="bend29 bend29--empty">
                <p>"Tidak ada data untuk ditampilkan. Silakan kembali dan ekspor data terlebih dahulu."</p>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.close_print()>
                    "Kembali"
                </Button>
            </div>
        }
        .into_any();
    }

    let Bend29Sheet {
        rows,
        total_harga,
        periode,
        signed_on,
        penerima,
        pengurus_barang,
        kepala_sub_bagian,
    } = sheet;

    view! {
        <div class="bend29">
            <div class="bend29__toolbar print-hidden">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.close_print()>
                    {icon("chevron-left")}
                    "Kembali"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=print>
                    {icon("printer")}
                    "Cetak"
                </Button>
            </div>

            <div class="bend29__sheet">
                <div class="bend29__header">
                    <div class="bend29__meta">
                        <p>"DAERAH/UNIT:"</p>
                        <p>"Model :"</p>
                        <p>"No :"</p>
                    </div>
                    <div class="bend29__code">"BEND 29"</div>
                </div>
                <div class="bend29__title">
                    <p>"PEMERINTAH DAERAH PROVINSI JAWA BARAT"</p>
                    <p>"GUDANG : BADAN PENGEMBANGAN SUMBER DAYA MANUSIA"</p>
                    <p>"BUKTI BARANG DARI DAERAH / UNIT : BPSDM JAWA BARAT"</p>
                    <p>"KEPADA DAERAH / UNIT : SEKRETARIAT"</p>
                    <p class="bend29__period">{format!("Periode: {}", periode)}</p>
                </div>

                <table class="bend29__table">
                    <thead>
                        <tr>
                            <th rowspan="2">"Tanggal Penyerahan Barang Menurut Permintaan"</th>
                            <th rowspan="2">"Barang diterima dari Gudang"</th>
                            <th rowspan="2">"Nama dan Kode Barang"</th>
                            <th rowspan="2">"Satuan"</th>
                            <th colspan="2">"Jumlah Barang"</th>
                            <th rowspan="2">"Harga Satuan"</th>
                            <th rowspan="2">"Jumlah Harga"</th>
                        </tr>
                        <tr>
                            <th>"Angka"</th>
                            <th>"Huruf"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.tanggal}</td>
                                    <td>{row.asal}</td>
                                    <td>{row.nama_barang}</td>
                                    <td>{row.satuan}</td>
                                    <td class="bend29__number">{row.qty}</td>
                                    <td>{row.qty_terbilang}</td>
                                    <td class="bend29__number">{row.harga_satuan}</td>
                                    <td class="bend29__number">{row.total_harga}</td>
                                </tr>
                            })
                            .collect_view()}
                        <tr class="bend29__total">
                            <td colspan="7">"TOTAL"</td>
                            <td class="bend29__number">{total_harga}</td>
                        </tr>
                    </tbody>
                </table>

                <div class="bend29__signatures">
                    <div class="bend29__place">
                        <p>"Daerah / Unit Umum"</p>
                        <p>{signed_on.clone()}</p>
                        <p>{format!("Dibuat di {}", signed_on)}</p>
                    </div>
                    <div class="bend29__signatory-row">
                        <SignatoryBlock role="Yang Menerima" signatory=penerima />
                        <SignatoryBlock role="Pengurus Barang Pengguna" signatory=pengurus_barang />
                    </div>
                    <div class="bend29__signatory-row bend29__signatory-row--center">
                        <SignatoryBlock
                            role="MENGETAHUI : KEPALA SUB BAGIAN TATA USAHA"
                            signatory=kepala_sub_bagian
                        />
                    </div>
                </div>
            </div>
        </div>
    }
    .into_any()
}
