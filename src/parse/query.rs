//! Tree-walk queries over parsed documents.
//!
//! Document-level lookups use CSS selectors. Inside a located section the
//! extractors need child-axis steps and raw text nodes, which CSS cannot
//! express, so `NodeExt` adds them on top of `scraper::ElementRef`.

use scraper::ElementRef;

/// Child, descendant and text-node queries on an element.
///
/// Children and descendants are returned in document order. Text methods
/// return text nodes exactly as parsed (whitespace included) unless noted.
pub trait NodeExt<'a> {
    /// Element children with the given tag name.
    fn children_named(&self, tag: &str) -> Vec<ElementRef<'a>>;

    /// First element child with the given tag name.
    fn child(&self, tag: &str) -> Option<ElementRef<'a>>;

    /// First element child with the given tag name carrying `class`.
    fn child_with_class(&self, tag: &str, class: &str) -> Option<ElementRef<'a>>;

    /// Descendant elements (excluding `self`) with the given tag name.
    fn descendants_named(&self, tag: &str) -> Vec<ElementRef<'a>>;

    /// Text nodes that are direct children of this element.
    fn own_text(&self) -> Vec<&'a str>;

    /// First direct text node that is not blank.
    fn first_own_text(&self) -> Option<&'a str>;

    /// Text nodes whose parent is a descendant `tag` element, in document order.
    fn texts_under(&self, tag: &str) -> Vec<&'a str>;

    /// Concatenated text of the whole subtree.
    fn text_content(&self) -> String;

    fn attr_value(&self, name: &str) -> Option<&'a str>;

    fn has_class_name(&self, class: &str) -> bool;
}

impl<'a> NodeExt<'a> for ElementRef<'a> {
    fn children_named(&self, tag: &str) -> Vec<ElementRef<'a>> {
        self.children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == tag)
            .collect()
    }

    fn child(&self, tag: &str) -> Option<ElementRef<'a>> {
        self.children()
            .filter_map(ElementRef::wrap)
            .find(|child| child.value().name() == tag)
    }

    fn child_with_class(&self, tag: &str, class: &str) -> Option<ElementRef<'a>> {
        self.children()
            .filter_map(ElementRef::wrap)
            .find(|child| child.value().name() == tag && child.has_class_name(class))
    }

    fn descendants_named(&self, tag: &str) -> Vec<ElementRef<'a>> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().name() == tag)
            .collect()
    }

    fn own_text(&self) -> Vec<&'a str> {
        self.children()
            .filter_map(|node| node.value().as_text().map(|text| &**text))
            .collect()
    }

    fn first_own_text(&self) -> Option<&'a str> {
        self.own_text()
            .into_iter()
            .find(|text| !text.trim().is_empty())
    }

    fn texts_under(&self, tag: &str) -> Vec<&'a str> {
        let scope = self.id();
        self.descendants()
            .skip(1)
            .filter_map(|node| {
                let text = node.value().as_text()?;
                let parent = node.parent()?;
                if parent.id() == scope {
                    return None;
                }
                let element = parent.value().as_element()?;
                (element.name() == tag).then_some(&**text)
            })
            .collect()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn attr_value(&self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn has_class_name(&self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn root(html: &Html) -> ElementRef<'_> {
        html.root_element()
    }

    #[test]
    fn test_children_named_skips_grandchildren() {
        let html = Html::parse_fragment(
            r#"<div><p>one</p><span><p>nested</p></span><p>two</p></div>"#,
        );
        let div = root(&html).descendants_named("div")[0];
        let texts: Vec<String> = div
            .children_named("p")
            .iter()
            .map(|p| p.text_content())
            .collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_child_with_class() {
        let html = Html::parse_fragment(
            r#"<div><p class="genre">Drama</p><p class="origin big">Česko</p></div>"#,
        );
        let div = root(&html).descendants_named("div")[0];
        assert_eq!(
            div.child_with_class("p", "origin").map(|p| p.text_content()),
            Some("Česko".to_string())
        );
        assert!(div.child_with_class("p", "names").is_none());
    }

    #[test]
    fn test_descendants_named_excludes_self() {
        let html = Html::parse_fragment(r#"<div id="outer"><div id="inner"></div></div>"#);
        let outer = root(&html).descendants_named("div")[0];
        let found = outer.descendants_named("div");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].attr_value("id"), Some("inner"));
    }

    #[test]
    fn test_own_text_and_first_own_text() {
        let html = Html::parse_fragment("<h1>\n  <span>badge</span> Pelíšky </h1>");
        let h1 = root(&html).descendants_named("h1")[0];
        assert_eq!(h1.own_text(), vec!["\n  ", " Pelíšky "]);
        assert_eq!(h1.first_own_text(), Some(" Pelíšky "));
    }

    #[test]
    fn test_texts_under_document_order() {
        let html = Html::parse_fragment(
            "<section><div>a<div>b</div>c</div><p>skip</p></section>",
        );
        let section = root(&html).descendants_named("section")[0];
        assert_eq!(section.texts_under("div"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_texts_under_ignores_scope_own_text() {
        let html = Html::parse_fragment("<div>outer<div>inner</div></div>");
        let outer = root(&html).descendants_named("div")[0];
        assert_eq!(outer.texts_under("div"), vec!["inner"]);
    }
}
