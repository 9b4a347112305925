use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};

static LIST_ITEM_LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li a").expect("`li a` is a valid selector"));

/// Titles linked from list items of a disambiguation page, in document order.
/// Links without a `title` are skipped and repeats keep their first position.
pub fn candidates(markup: &str) -> Vec<String> {
    let document = Html::parse_fragment(markup);
    let mut seen = HashSet::new();
    document
        .select(&LIST_ITEM_LINKS)
        .filter_map(|a| a.value().attr("title"))
        .filter(|title| !title.is_empty() && seen.insert(*title))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::candidates;

    #[test]
    fn dedups_in_document_order() {
        let html = r#"
            <ul>
                <li><a href="/wiki/X" title="X">X</a></li>
                <li><a href="/wiki/Y" title="Y">Y</a></li>
                <li><a href="/wiki/X" title="X">X again</a></li>
            </ul>"#;
        assert_eq!(candidates(html), ["X", "Y"]);
    }

    #[test]
    fn ignores_links_outside_list_items() {
        let html = r#"
            <p><a title="Intro">intro</a></p>
            <ul>
                <li>Mercury (<a title="Mercury (planet)">planet</a>),
                    <a title="Mercury (element)">element</a></li>
                <li><a href="/wiki/Untitled">no title</a><a title="">empty</a></li>
            </ul>
            <a title="See also">see also</a>"#;
        assert_eq!(
            candidates(html),
            ["Mercury (planet)", "Mercury (element)"]
        );
    }

    #[test]
    fn nested_lists_count_once() {
        let html = r#"
            <ul><li>Places
                <ul><li><a title="Paris, Texas">Paris, Texas</a></li></ul>
            </li></ul>"#;
        assert_eq!(candidates(html), ["Paris, Texas"]);
    }

    #[test]
    fn plain_text_has_no_candidates() {
        assert!(candidates("'''Mercury''' may refer to:").is_empty());
    }
}
