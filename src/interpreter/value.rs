/// Runtime values.
///
/// Defines the `Value` enum and its display rendering, used verbatim by
/// `print` and for the text of scalar XML elements.
pub mod core;
