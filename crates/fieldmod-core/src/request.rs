//! Transform requests
//!
//! A request bundles the modifier name, the attribute label, the positional
//! arguments and the value to transform. It is built by the host layer and
//! consumed by a single top-level call.

use crate::value::Value;

/// The single unit of work handed to the engine
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRequest {
    /// Semantic field label, e.g. "name", "size", "time"
    pub attribute: String,
    /// Value of any shape
    pub value: Value,
    /// Modifier identifier, matched case-insensitively
    pub name: String,
    /// Positional modifier arguments
    pub args: Vec<String>,
}

impl TransformRequest {
    /// Create a request without arguments
    pub fn new(name: impl Into<String>, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append one positional argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several positional arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Positional argument at `index`, if supplied
    pub fn get_arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}
