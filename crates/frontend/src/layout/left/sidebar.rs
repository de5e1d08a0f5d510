//! Sidebar with a grouped, searchable menu

use crate::layout::global_context::use_global_context;
use crate::shared::components::search_box::SearchBox;
use crate::shared::icons::fa;
use contracts::shared::menu::{filter_menu, MenuGroup, MenuItem, MenuNode, MenuVisibility};
use leptos::prelude::*;

fn menu_tree() -> Vec<MenuNode> {
    vec![
        MenuNode::Group(MenuGroup {
            id: "uretim",
            label: "Üretim",
            icon: "fa-industry",
            children: vec![MenuNode::Item(MenuItem {
                id: "uretim_bildirme",
                label: "Üretim Bildirme",
                href: "/UretimBildirme01/Index",
                icon: "fa-clipboard-check",
            })],
        }),
        MenuNode::Group(MenuGroup {
            id: "sistem",
            label: "Sistem",
            icon: "fa-gear",
            children: vec![MenuNode::Item(MenuItem {
                id: "yapilandirma",
                label: "Yapılandırma",
                href: "/Yapilandirma/Liste",
                icon: "fa-sliders",
            })],
        }),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let query = RwSignal::new(String::new());
    // Groups opened by the user through the accordion
    let expanded = RwSignal::new(Vec::<&'static str>::new());

    let tree = StoredValue::new(menu_tree());
    let visibility = Memo::new(move |_| {
        let q = query.get();
        tree.with_value(|nodes| filter_menu(nodes, &q))
    });

    view! {
        <div class="sidebar__header">
            <span class="sidebar__logo">"Hednova"</span>
        </div>
        <div class="sidebar__search">
            <SearchBox
                id="sidebarSearch"
                placeholder="Menüde ara..."
                value=query
            />
        </div>
        <nav id="menuTree" class="sidebar__tree">
            {tree
                .get_value()
                .into_iter()
                .map(|node| render_node(node, expanded, visibility))
                .collect_view()}
        </nav>
    }
}

fn render_node(
    node: MenuNode,
    expanded: RwSignal<Vec<&'static str>>,
    visibility: Memo<MenuVisibility>,
) -> AnyView {
    match node {
        MenuNode::Item(item) => view! { <MenuLink item=item visibility=visibility /> }.into_any(),
        MenuNode::Group(group) => {
            let id = group.id;
            let is_open = move || {
                expanded.with(|e| e.contains(&id)) || visibility.with(|v| v.expanded.contains(id))
            };
            let toggle = move |_| {
                let currently_open = is_open();
                expanded.update(|e| {
                    e.retain(|g| *g != id);
                    if !currently_open {
                        e.push(id);
                    }
                });
            };
            let children = group
                .children
                .into_iter()
                .map(|child| render_node(child, expanded, visibility))
                .collect_view();

            view! {
                <div class="group" class:d-none=move || visibility.with(|v| v.is_hidden(id))>
                    <button
                        type="button"
                        class="group-toggle"
                        aria-expanded=move || if is_open() { "true" } else { "false" }
                        on:click=toggle
                    >
                        {fa(group.icon)}
                        <span>{group.label}</span>
                        <i class="fa-solid fa-chevron-right group-chevron"></i>
                    </button>
                    <div class="group-body" class:show=is_open>
                        {children}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn MenuLink(item: MenuItem, visibility: Memo<MenuVisibility>) -> impl IntoView {
    let ctx = use_global_context();
    let id = item.id;

    view! {
        <a
            class="item"
            class:d-none=move || visibility.with(|v| v.is_hidden(id))
            href=item.href
            on:click=move |_| ctx.close_sidebar()
        >
            {fa(item.icon)}
            <span>{item.label}</span>
        </a>
    }
}
