use crate::domain::a001_pegawai::ui::list::PegawaiList;
use crate::domain::a002_barang::ui::list::BarangList;
use crate::domain::a003_barang_keluar::ui::list::BarangKeluarList;
use crate::domain::a003_barang_keluar::ui::print::Bend29Print;
use crate::domain::a004_jadwal::ui::list::JadwalList;
use crate::domain::a005_tautan::ui::TautanPage;
use crate::layout::global_context::{use_global_context, Section};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

fn section_view(section: Section) -> AnyView {
    match section {
        Section::Pegawai => view! { <PegawaiList /> }.into_any(),
        Section::Barang => view! { <BarangList /> }.into_any(),
        Section::BarangKeluar => view! { <BarangKeluarList /> }.into_any(),
        Section::Jadwal => view! { <JadwalList /> }.into_any(),
        Section::Tautan => view! { <TautanPage /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    // Runs once when the layout is created.
    ctx.init_location_sync();

    view! {
        {move || match ctx.print.get() {
            Some(document) => view! { <Bend29Print document=document /> }.into_any(),
            None => view! {
                <Shell
                    left=|| view! { <Sidebar /> }.into_any()
                    center=move || (move || section_view(ctx.active.get())).into_any()
                />
            }
            .into_any(),
        }}
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
