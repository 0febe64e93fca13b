use contracts::domain::a005_tautan::directory::{filter_groups, total_links, FilteredGroup};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;

#[component]
fn LinkGroupCard(group: FilteredGroup) -> impl IntoView {
    view! {
        <section class="link-group">
            <h2 class="link-group__title">{group.title}</h2>
            <div class="link-group__cards">
                {group
                    .links
                    .into_iter()
                    .map(|link| view! {
                        <a class="link-card" href=link.url target="_blank" rel="noopener noreferrer">
                            <div class="link-card__body">
                                <h3 class="link-card__title">{link.title}</h3>
                                <p class="link-card__description">{link.description}</p>
                            </div>
                            {icon("external-link")}
                        </a>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TautanPage() -> impl IntoView {
    let term = RwSignal::new(String::new());
    let groups = Memo::new(move |_| term.with(|t| filter_groups(t)));

    view! {
        <PageFrame page_id="a005_tautan--directory">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tautan"</h1>
                    <span class="page__subtitle">{format!("{} tautan", total_links())}</span>
                </div>
                <div class="page__header-right">
                    <div class="search-box">
                        {icon("search")}
                        <Input value=term placeholder="Cari tautan..." />
                    </div>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || groups.with(|g| !g.is_empty())
                    fallback=move || view! {
                        <div class="table__empty">
                            {format!("Tidak ada tautan yang cocok dengan \"{}\".", term.get())}
                        </div>
                    }
                >
                    {move || groups
                        .get()
                        .into_iter()
                        .map(|group| view! { <LinkGroupCard group=group /> })
                        .collect_view()}
                </Show>
            </div>
        </PageFrame>
    }
}
