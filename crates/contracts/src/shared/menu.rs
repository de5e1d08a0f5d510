//! Sidebar menu tree and its search.
//!
//! Search hides items whose label does not match, hides groups left without
//! any visible child, and reports which groups hold a hit so they can be
//! expanded.

use std::collections::BTreeSet;

use super::text_fold::fold_tr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub children: Vec<MenuNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    Item(MenuItem),
    Group(MenuGroup),
}

/// Outcome of a menu search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuVisibility {
    pub hidden: BTreeSet<&'static str>,
    pub expanded: BTreeSet<&'static str>,
    /// `true` while a non-empty query is applied (the clear button is shown)
    pub searching: bool,
}

impl MenuVisibility {
    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.contains(id)
    }
}

/// Apply `query` to the whole tree. An empty query hides nothing and
/// expands nothing, leaving the accordion state to the user.
pub fn filter_menu(nodes: &[MenuNode], query: &str) -> MenuVisibility {
    let term = fold_tr(query);
    let mut visibility = MenuVisibility {
        searching: !term.is_empty(),
        ..Default::default()
    };
    if term.is_empty() {
        return visibility;
    }
    for node in nodes {
        visit(node, &term, &mut visibility);
    }
    visibility
}

/// Returns whether the node stays visible
fn visit(node: &MenuNode, term: &str, out: &mut MenuVisibility) -> bool {
    match node {
        MenuNode::Item(item) => {
            let hit = fold_tr(item.label).contains(term);
            if !hit {
                out.hidden.insert(item.id);
            }
            hit
        }
        MenuNode::Group(group) => {
            let mut any = false;
            for child in &group.children {
                any |= visit(child, term, out);
            }
            if any {
                out.expanded.insert(group.id);
            } else {
                out.hidden.insert(group.id);
            }
            any
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &'static str, label: &'static str) -> MenuNode {
        MenuNode::Item(MenuItem {
            id,
            label,
            href: "/",
            icon: "fa-circle",
        })
    }

    fn group(id: &'static str, children: Vec<MenuNode>) -> MenuNode {
        MenuNode::Group(MenuGroup {
            id,
            label: id,
            icon: "fa-folder",
            children,
        })
    }

    fn tree() -> Vec<MenuNode> {
        vec![
            group(
                "uretim",
                vec![
                    item("bildirme", "Üretim Bildirme"),
                    group("raporlar", vec![item("fire", "Fire Raporu")]),
                ],
            ),
            group("sistem", vec![item("yapilandirma", "Yapılandırma")]),
        ]
    }

    #[test]
    fn empty_query_hides_nothing() {
        let v = filter_menu(&tree(), "  ");
        // whitespace is a real query; only the empty string resets
        assert!(v.searching);
        let v = filter_menu(&tree(), "");
        assert!(!v.searching);
        assert!(v.hidden.is_empty());
        assert!(v.expanded.is_empty());
    }

    #[test]
    fn hits_expand_every_ancestor() {
        let v = filter_menu(&tree(), "FİRE");
        assert!(v.expanded.contains("uretim"));
        assert!(v.expanded.contains("raporlar"));
        assert!(v.is_hidden("bildirme"));
        assert!(!v.is_hidden("fire"));
    }

    #[test]
    fn groups_without_hits_are_hidden() {
        let v = filter_menu(&tree(), "yapı");
        assert!(v.is_hidden("uretim"));
        assert!(v.is_hidden("raporlar"));
        assert!(!v.is_hidden("sistem"));
        assert!(!v.is_hidden("yapilandirma"));
    }
}
