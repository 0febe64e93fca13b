//! Sidebar with collapsible menu groups.

use crate::layout::global_context::{use_global_context, Section};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<Section>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "master-data",
            label: "Master Data",
            icon: "users",
            items: vec![Section::Pegawai, Section::Barang],
        },
        MenuGroup {
            id: "inventaris",
            label: "Inventaris",
            icon: "package",
            items: vec![Section::BarangKeluar],
        },
        MenuGroup {
            id: "scheduling",
            label: "Scheduling",
            icon: "calendar",
            items: vec![Section::Jadwal],
        },
        MenuGroup {
            id: "tautan",
            label: "Tautan",
            icon: "link",
            items: vec![],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let expanded_groups = RwSignal::new(vec!["master-data", "inventaris", "scheduling"]);

    view! {
        <nav class="app-sidebar__content" class:hidden=move || !ctx.left_open.get()>
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let has_children = !group.items.is_empty();
                // Childless groups navigate directly.
                let direct = Section::from_key(group_id);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                !has_children && direct == Some(ctx.active.get())
                            }
                            on:click=move |_| {
                                if has_children {
                                    expanded_groups.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                            items.remove(pos);
                                        } else {
                                            items.push(group_id);
                                        }
                                    });
                                } else if let Some(section) = direct {
                                    ctx.activate(section);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let items = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&group_id)>
                                    <div class="app-sidebar__children">
                                        {items.get_value().into_iter().map(|section| view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || ctx.active.get() == section
                                                on:click=move |_| ctx.activate(section)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(section.icon())}
                                                    <span>{section.label()}</span>
                                                </div>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
