/// Value-to-markup mapping.
///
/// Turns the ordered constants into the `<config>` document: one `<const>`
/// per constant, typed value elements, `<item>`-wrapped list members.
pub mod builder;
/// Immutable XML element tree and its renderer.
///
/// Handles escaping through `quick-xml` and produces indented or compact
/// output from nesting depth alone.
pub mod element;
