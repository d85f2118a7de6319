// Selective document rewriting: text node payloads go through the swap,
// attribute values never do. Content is transformed, addresses are not.

use crate::replacer::WordSwap;
use scraper::{Html, Node};
use std::borrow::Cow;

/// A serialized document after replacement, plus its (post-replacement)
/// title text when the document has one.
#[derive(Debug, Clone)]
pub struct RewrittenPage {
    pub html: String,
    pub title: Option<String>,
}

/// Parse `html`, apply `swap` to every visible text node, and serialize the
/// tree back out.
///
/// Walked: titles, headings, paragraph text, link text — any text node not
/// inside `<script>` or `<style>`. Skipped: attribute values (href, src,
/// alt, ...) and script/style bodies, whose payloads are addresses and code
/// rather than visible text. The input is parsed as a full document, so
/// fragments come back wrapped in html/head/body.
pub fn rewrite_document(html: &str, swap: &WordSwap) -> RewrittenPage {
    let mut document = Html::parse_document(html);

    // Collect edits first: ego-tree hands out node ids, and mutating while
    // traversing would hold two borrows of the tree.
    let edits: Vec<_> = document
        .tree
        .root()
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(element) => {
                    let name = element.name();
                    name == "script" || name == "style"
                }
                _ => false,
            })
        })
        .filter_map(|node| match node.value() {
            Node::Text(text) => match swap.replace(text) {
                Cow::Owned(replaced) => Some((node.id(), replaced)),
                Cow::Borrowed(_) => None,
            },
            _ => None,
        })
        .collect();

    for (id, replaced) in edits {
        if let Some(mut node) = document.tree.get_mut(id) {
            if let Node::Text(text) = node.value() {
                text.text = replaced.as_str().into();
            }
        }
    }

    let title = document_title(&document);

    RewrittenPage {
        html: document.html(),
        title,
    }
}

/// Concatenated text of the first `<title>` element, if any.
fn document_title(document: &Html) -> Option<String> {
    document
        .tree
        .root()
        .descendants()
        .find_map(|node| match node.value() {
            Node::Element(element) if element.name() == "title" => Some(
                node.descendants()
                    .filter_map(|child| match child.value() {
                        Node::Text(text) => Some(&**text),
                        _ => None,
                    })
                    .collect::<String>(),
            ),
            _ => None,
        })
}
