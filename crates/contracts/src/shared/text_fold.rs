//! Turkish-locale case folding and the name filter built on it.
//!
//! Plain `to_lowercase` maps `I` to `i` and `İ` to `i̇` (with a combining dot),
//! which breaks matching for Turkish labels. Here `I` folds to dotless `ı`
//! and `İ` folds to plain `i`; every other character follows Unicode lowercasing.

/// Lowercase `s` the way the `tr-TR` locale does
pub fn fold_tr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            other => out.extend(other.to_lowercase()),
        }
    }
    out
}

/// `true` when the folded query is empty or is a substring of the folded name
pub fn name_matches(name: &str, query: &str) -> bool {
    folded_name_matches(name, &fold_tr(query))
}

fn folded_name_matches(name: &str, folded_query: &str) -> bool {
    folded_query.is_empty() || fold_tr(name).contains(folded_query)
}

/// Anything that can be shown or hidden by the name filter
pub trait NameFilterable {
    fn filter_name(&self) -> &str;
    fn set_visible(&mut self, visible: bool);
}

/// Recompute visibility of every item against `query`.
///
/// Order is preserved; an empty query makes everything visible again.
/// Returns the number of visible items.
pub fn apply_name_filter<T: NameFilterable>(items: &mut [T], query: &str) -> usize {
    let term = fold_tr(query);
    let mut visible = 0;
    for item in items.iter_mut() {
        let show = folded_name_matches(item.filter_name(), &term);
        item.set_visible(show);
        if show {
            visible += 1;
        }
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: &'static str,
        visible: bool,
    }

    impl NameFilterable for Item {
        fn filter_name(&self) -> &str {
            self.name
        }
        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    fn items(names: &[&'static str]) -> Vec<Item> {
        names
            .iter()
            .map(|name| Item {
                name,
                visible: true,
            })
            .collect()
    }

    #[test]
    fn dotted_and_dotless_i_fold_apart() {
        assert_eq!(fold_tr("İŞ"), "iş");
        assert_eq!(fold_tr("ISI"), "ısı");
        assert_eq!(fold_tr("Üretim"), "üretim");
        // ASCII folding would give "isi" here
        assert_ne!(fold_tr("ISI"), "ISI".to_lowercase());
    }

    #[test]
    fn turkish_matching_differs_from_ascii() {
        assert!(name_matches("İş emri", "iş"));
        assert!(name_matches("Isı ayarı", "ısı"));
        assert!(!name_matches("Isı ayarı", "isi"));
        // naive ASCII lowercase would have matched
        assert!("Isı ayarı".to_lowercase().contains("is"));
        assert!(!name_matches("Isı ayarı", "is"));
    }

    #[test]
    fn filter_hides_without_reordering() {
        let mut list = items(&["Satış", "Satınalma", "Üretim"]);
        let visible = apply_name_filter(&mut list, "sati");
        assert_eq!(visible, 0, "ASCII i never matches dotless ı");

        // uppercase I folds to ı
        let visible = apply_name_filter(&mut list, "SATI");
        assert_eq!(visible, 2);
        let names: Vec<_> = list.iter().map(|i| (i.name, i.visible)).collect();
        assert_eq!(
            names,
            vec![("Satış", true), ("Satınalma", true), ("Üretim", false)]
        );
    }

    #[test]
    fn empty_query_restores_everything() {
        let mut list = items(&["Alpha", "beta", "Gamma"]);
        apply_name_filter(&mut list, "zzz");
        assert!(list.iter().all(|i| !i.visible));
        assert_eq!(apply_name_filter(&mut list, ""), 3);
        assert!(list.iter().all(|i| i.visible));
    }

    #[test]
    fn filter_visibility_agrees_with_name_matches() {
        let names = ["İş emri", "Isı ayarı", "Satış", "ışık"];
        for query in ["i", "ı", "I", "İŞ", "sat", ""] {
            let mut list = items(&names);
            apply_name_filter(&mut list, query);
            for item in &list {
                assert_eq!(item.visible, name_matches(item.name, query), "{} / {}", item.name, query);
            }
        }
    }
}
