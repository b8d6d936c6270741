use scraper::{ElementRef, Html, Selector};
use scraper::node::Node;

/// An owned element handle detached from its source document.
///
/// Playwright-style locators hold a live DOM reference; here every
/// match is snapshotted instead (tag, attributes, outer HTML and
/// pre-rendered text), so handles can outlive the parsed document
/// and cross `await` points freely.
///
/// Sub-selection re-parses the outer HTML as a fragment. Table
/// elements are re-wrapped in their required ancestors first,
/// because the HTML5 fragment algorithm drops a bare `<tr>`/`<td>`.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    outer_html: String,
    text: String,
}

impl Element {
    pub(crate) fn from_element_ref(el: ElementRef<'_>) -> Self {
        Element {
            tag: el.value().name().to_string(),
            attrs: el
                .value()
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            outer_html: el.html(),
            text: render_text(el),
        }
    }

    /// Tag name, lowercase.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by name, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Rendered text content of this element.
    ///
    /// Block-level children and `<br>` produce line breaks, so the
    /// line-oriented heuristics in the adapters see roughly what a
    /// browser's `innerText` would give them. Non-breaking spaces
    /// are normalized to regular spaces.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All descendants matching `selector`, in document order.
    ///
    /// An unparseable selector yields no matches; selectors are
    /// fixed constants in this codebase, so that path is a bug.
    pub fn select(&self, selector: &str) -> Vec<Element> {
        let Ok(sel) = Selector::parse(selector) else {
            log::error!("invalid selector `{selector}`");
            return Vec::new();
        };
        let fragment = Html::parse_fragment(&self.wrapped());
        fragment
            .select(&sel)
            .map(Element::from_element_ref)
            .collect()
    }

    /// First descendant matching `selector`.
    pub fn select_first(&self, selector: &str) -> Option<Element> {
        self.select(selector).into_iter().next()
    }

    /// Outer HTML needed to survive fragment re-parsing.
    ///
    /// Table rows and cells are only valid inside their table
    /// ancestors; parsed bare, the HTML5 tree builder discards the
    /// tags and fosters their text out.
    fn wrapped(&self) -> String {
        match self.tag.as_str() {
            "tr" => format!("<table><tbody>{}</tbody></table>", self.outer_html),
            "td" | "th" => {
                format!("<table><tbody><tr>{}</tr></tbody></table>", self.outer_html)
            }
            "thead" | "tbody" | "tfoot" => format!("<table>{}</table>", self.outer_html),
            _ => self.outer_html.clone(),
        }
    }
}

/// Runs `selector` against a full HTML document and snapshots every
/// match. This is the single entry point both the live page backend
/// and fixture pages in tests go through.
pub fn select_in_document(html: &str, selector: &str) -> Vec<Element> {
    let Ok(sel) = Selector::parse(selector) else {
        log::error!("invalid selector `{selector}`");
        return Vec::new();
    };
    let doc = Html::parse_document(html);
    doc.select(&sel).map(Element::from_element_ref).collect()
}

/// True if `selector` matches anything in the document.
pub fn document_has(html: &str, selector: &str) -> bool {
    !select_in_document(html, selector).is_empty()
}

// ------------------------------------------------------------
// Text rendering
// ------------------------------------------------------------

fn render_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    render_children(el, &mut out);
    out.replace('\u{a0}', " ")
}

fn render_children(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                if e.name() == "br" {
                    out.push('\n');
                    continue;
                }
                let block = is_block(e.name());
                if block && !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    render_children(child_el, out);
                }
                if block && !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div"
            | "li"
            | "ul"
            | "ol"
            | "table"
            | "thead"
            | "tbody"
            | "tfoot"
            | "tr"
            | "td"
            | "th"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "section"
            | "article"
            | "header"
            | "footer"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_render_cells_on_separate_lines() {
        let rows = select_in_document(
            "<table><tr><td><b>Труба</b> стальная</td>\
             <td>15.12.2025 14:36</td><td>Москва</td></tr></table>",
            "tr",
        );
        assert_eq!(rows.len(), 1);
        let lines: Vec<&str> = rows[0]
            .text()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(lines, vec!["Труба стальная", "15.12.2025 14:36", "Москва"]);
    }

    #[test]
    fn sub_selection_inside_a_bare_row_keeps_table_semantics() {
        let rows = select_in_document(
            "<table><tr><td><b>первый</b></td><td><b>второй</b></td></tr></table>",
            "tr",
        );
        let row = &rows[0];
        assert_eq!(row.select("td").len(), 2);
        let first = row.select_first("td:first-child b").unwrap();
        assert_eq!(first.text(), "первый");
    }

    #[test]
    fn nbsp_is_normalized() {
        let els = select_in_document("<p>Лист\u{a0}горячекатаный</p>", "p");
        assert_eq!(els[0].text(), "Лист горячекатаный");
    }

    #[test]
    fn attributes_survive_the_snapshot() {
        let els = select_in_document(
            "<ul><li class=\"row date\">15 декабря</li></ul>",
            "li",
        );
        assert_eq!(els[0].attr("class"), Some("row date"));
        assert_eq!(els[0].tag(), "li");
    }

    #[test]
    fn br_breaks_lines() {
        let els = select_in_document("<p>a<br>b</p>", "p");
        assert_eq!(els[0].text(), "a\nb");
    }
}
