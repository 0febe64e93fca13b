use crate::shared::icons::icon;
use crate::shared::pagination::{build_window, can_go_next, can_go_previous, PageMarker};
use leptos::prelude::*;

/// Numbered pager: previous, a window of page links with gaps, next.
///
/// Pages are 1-based. Nothing is rendered when there is at most one page.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    /// Only called for pages the user may actually move to
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination-controls" aria-label="Navigasi halaman">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if can_go_previous(page) {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || !can_go_previous(current_page.get())
                    title="Sebelumnya"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    build_window(current, total_pages.get())
                        .into_iter()
                        .map(|marker| match marker {
                            PageMarker::Page(page) => view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=page == current
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                            .into_any(),
                            PageMarker::Gap => view! { <span class="pagination-gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if can_go_next(page, total_pages.get()) {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || !can_go_next(current_page.get(), total_pages.get())
                    title="Berikutnya"
                >
                    {icon("chevron-right")}
                </button>
            </nav>
        </Show>
    }
}
