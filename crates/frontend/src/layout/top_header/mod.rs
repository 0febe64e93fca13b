//! Top navigation bar: sidebar toggle, title, current user and logout.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();
    let notifications = use_notifications();

    let logout = move |_| {
        auth.sign_out();
        log::info!("logged out");
        notifications.success("Logout Berhasil", "Anda telah keluar dari sesi.");
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Sembunyikan navigasi" } else { "Tampilkan navigasi" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"SIMANJA"</span>
                <span class="top-header__section">{move || ctx.active.get().label()}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth.session.with(|s| match s {
                            Some(s) => format!("{} ({})", s.user.name, s.role().label()),
                            None => "Tamu".to_string(),
                        })}
                    </span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
