//! PageFrame: root wrapper for every screen rendered in the content area.

use leptos::prelude::*;

/// Sets `id` (`"{entity}--{category}"`, e.g. `"a002_barang--list"`) on the page root.
#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// Additional CSS classes appended after `page`.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div id=page_id class=full_class>
            {children()}
        </div>
    }
}
