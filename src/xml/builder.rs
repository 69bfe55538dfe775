use tracing::debug;

use crate::{
    interpreter::{evaluator::core::Constant, value::core::Value},
    xml::element::{Element, Layout},
};

/// Builds the indented XML document for evaluated constants.
///
/// # Example
/// ```
/// use octconf::{
///     interpreter::{evaluator::core::Constant, value::core::Value},
///     xml::builder::build,
/// };
///
/// let constants = [Constant { name:  "port".to_string(),
///                             value: Value::from(10), }];
///
/// assert_eq!(build(&constants),
///            "<config>\n  <const name=\"port\">\n    <number format=\"decimal\">10</number>\n  </const>\n</config>");
/// ```
#[must_use]
pub fn build(constants: &[Constant]) -> String {
    build_with(constants, Layout::default())
}

/// Builds the XML document for evaluated constants with the given layout.
///
/// The root is `<config>`, holding one `<const name="...">` per constant in
/// the order given.
#[must_use]
pub fn build_with(constants: &[Constant], layout: Layout) -> String {
    let root = Element::new("config").with_children(constants.iter()
                                                             .map(const_element)
                                                             .collect());
    let xml = root.render(layout);

    debug!(constants = constants.len(), bytes = xml.len(), "xml built");
    xml
}

fn const_element(constant: &Constant) -> Element {
    Element::new("const").with_attribute("name", constant.name.as_str())
                         .with_children(vec![value_element(&constant.value)])
}

/// Maps a value to the element that represents it.
///
/// Scalars carry their display text; lists wrap each member in an `<item>`.
#[must_use]
pub fn value_element(value: &Value) -> Element {
    match value {
        Value::Bool(_) => Element::new("boolean").with_text(value.to_string()),
        Value::Integer(_) => Element::new("number").with_attribute("format", "decimal")
                                                   .with_text(value.to_string()),
        Value::Float(_) => Element::new("number").with_attribute("format", "float")
                                                 .with_text(value.to_string()),
        Value::Str(s) => Element::new("string").with_text(s.as_str()),
        Value::List(items) => {
            let items = items.iter()
                             .map(|item| Element::new("item").with_children(vec![value_element(item)]))
                             .collect();
            Element::new("array").with_children(items)
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn compact(value: &Value) -> String {
        value_element(value).render(Layout::Compact)
    }

    #[test]
    fn scalars_map_to_typed_elements() {
        assert_eq!(compact(&Value::from(-7)), "<number format=\"decimal\">-7</number>");
        assert_eq!(compact(&Value::Float(2.0)), "<number format=\"float\">2.0</number>");
        assert_eq!(compact(&Value::from("db")), "<string>db</string>");
        assert_eq!(compact(&Value::Bool(false)), "<boolean>false</boolean>");
    }

    #[test]
    fn booleans_are_not_numbers() {
        assert_eq!(compact(&Value::Bool(true)), "<boolean>true</boolean>");
    }

    #[test]
    fn lists_wrap_members_in_items() {
        let value = Value::List(vec![Value::from(1),
                                     Value::List(vec![Value::from(2), Value::from(3)])]);

        assert_eq!(compact(&value),
                   "<array><item><number format=\"decimal\">1</number></item><item><array><item><number format=\"decimal\">2</number></item><item><number format=\"decimal\">3</number></item></array></item></array>");
    }

    #[test]
    fn empty_program_is_an_empty_root() {
        assert_eq!(build(&[]), "<config />");
    }
}
