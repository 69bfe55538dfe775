use quick_xml::escape::{escape, partial_escape};

/// Indentation added per nesting level in [`Layout::Indented`].
const INDENT: &str = "  ";

/// How rendered elements are laid out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Child elements one per line, indented two spaces per level.
    #[default]
    Indented,
    /// No whitespace between elements.
    Compact,
}

/// What an element holds between its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Nothing; rendered self-closed.
    Empty,
    /// Character data, escaped on output.
    Text(String),
    /// Nested elements, in order.
    Children(Vec<Element>),
}

/// An immutable XML element.
///
/// Elements are assembled bottom-up and rendered in one pass; whitespace is
/// produced by the renderer from the nesting depth and never stored in the
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name:       &'static str,
    attributes: Vec<(&'static str, String)>,
    content:    Content,
}

impl Element {
    /// Creates an element with no attributes and no content.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name,
               attributes: Vec::new(),
               content: Content::Empty }
    }

    /// Adds an attribute. Attributes render in the order they were added.
    #[must_use]
    pub fn with_attribute(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Sets the child elements.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.content = Content::Children(children);
        self
    }

    /// Renders the element and everything below it.
    ///
    /// Elements with neither text nor children render as `<name />`. No XML
    /// declaration and no trailing newline are emitted.
    ///
    /// # Example
    /// ```
    /// use octconf::xml::element::{Element, Layout};
    ///
    /// let root = Element::new("config").with_children(vec![Element::new("string").with_text("a<b")]);
    ///
    /// assert_eq!(root.render(Layout::Indented), "<config>\n  <string>a&lt;b</string>\n</config>");
    /// assert_eq!(root.render(Layout::Compact), "<config><string>a&lt;b</string></config>");
    /// ```
    #[must_use]
    pub fn render(&self, layout: Layout) -> String {
        let mut out = String::new();
        self.write(&mut out, layout, 0);
        out
    }

    fn write(&self, out: &mut String, layout: Layout, depth: usize) {
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }

        match &self.content {
            Content::Text(text) if !text.is_empty() => {
                out.push('>');
                out.push_str(&partial_escape(text.as_str()));
            },
            Content::Children(children) if !children.is_empty() => {
                out.push('>');
                for child in children {
                    newline(out, layout, depth + 1);
                    child.write(out, layout, depth + 1);
                }
                newline(out, layout, depth);
            },
            _ => {
                out.push_str(" />");
                return;
            },
        }

        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

fn newline(out: &mut String, layout: Layout, depth: usize) {
    if layout == Layout::Indented {
        out.push('\n');
        out.push_str(&INDENT.repeat(depth));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_content_self_closes() {
        assert_eq!(Element::new("array").render(Layout::Indented), "<array />");
        assert_eq!(Element::new("string").with_text("").render(Layout::Indented),
                   "<string />");
        assert_eq!(Element::new("array").with_children(vec![])
                                        .render(Layout::Indented),
                   "<array />");
    }

    #[test]
    fn nesting_indents_two_spaces_per_level() {
        let tree =
            Element::new("a").with_children(vec![Element::new("b").with_children(vec![Element::new("c").with_text("x")]),
                                                 Element::new("d")]);

        assert_eq!(tree.render(Layout::Indented),
                   "<a>\n  <b>\n    <c>x</c>\n  </b>\n  <d />\n</a>");
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let element = Element::new("const").with_attribute("name", "a\"&b")
                                           .with_text("1 < 2 & \"3\" > 0");

        assert_eq!(element.render(Layout::Compact),
                   "<const name=\"a&quot;&amp;b\">1 &lt; 2 &amp; \"3\" &gt; 0</const>");
    }

    #[test]
    fn whitespace_text_is_kept() {
        assert_eq!(Element::new("string").with_text("  ").render(Layout::Indented),
                   "<string>  </string>");
    }
}
