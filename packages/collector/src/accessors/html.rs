//! Visible text extraction from HTML documents.

use scraper::{Html, Node, Selector};

/// Elements whose text never renders.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Concatenate the visible text of every `<body>` in `html`.
///
/// Text nodes are joined as they appear in the document and each body's
/// text is trimmed.
pub(crate) fn extract_body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let body_selector = match Selector::parse("body") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    let mut content = String::new();
    for body in document.select(&body_selector) {
        let mut text = String::new();
        for node in body.descendants() {
            let Node::Text(fragment) = node.value() else {
                continue;
            };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
            });
            if !hidden {
                text.push_str(fragment);
            }
        }
        content.push_str(text.trim());
    }

    content
}
