use tracing::debug;

use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        utils::single_argument,
    },
    value::core::Value,
};

impl Context {
    /// Logs a value and returns it unchanged.
    ///
    /// Accepts exactly one argument. The value is rendered with its
    /// `Display` implementation, which is also how the XML builder renders
    /// scalars, and appended to the print log instead of any stream.
    ///
    /// # Parameters
    /// - `args`: The evaluated arguments.
    ///
    /// # Returns
    /// The printed value, so `print` can be nested inside other values.
    pub fn eval_print(&mut self, args: Vec<Value>) -> EvalResult<Value> {
        let value = single_argument(args)?;
        let text = value.to_string();
        debug!(output = %text, "print");

        self.print_log.push(text);
        Ok(value)
    }
}
