/// Numeric conversion and rendering helpers.
///
/// This module provides the integer-to-float promotion used by mixed
/// arithmetic and the canonical float rendering shared by `print` and the
/// XML builder, so both always agree on how a float reads.
pub mod num;
