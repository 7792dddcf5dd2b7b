//! Fieldmod Core - Modifier engine for templating and formatting layers
//!
//! This crate applies named modifiers to values of arbitrary shape on behalf of a
//! host layer that supplies per-field rules ("format this field as a size in
//! kilobytes", "uppercase this field").
//!
//! # Main Components
//!
//! - **Values**: A closed tagged value model with a serde_json bridge
//! - **Shapes**: Classification of values into scalar, sequence or map
//! - **Traversal**: Recursive application of a request through sequences and maps
//! - **Modifiers**: A process-wide registry of `FORMAT`, `UPPER` and `LOWER`
//! - **Settings**: Opt-in alternatives for map rebuilding and size units
//!
//! # Example
//!
//! ```
//! use fieldmod_core::{transform, TransformRequest, Value};
//!
//! let request = TransformRequest::new("FORMAT", "size", "2").arg("KB");
//! assert_eq!(transform(request).unwrap(), Value::from(2048.0));
//!
//! let request = TransformRequest::new("upper", "name", Value::sequence(vec!["a", "b"]));
//! assert_eq!(transform(request).unwrap(), Value::sequence(vec!["A", "B"]));
//! ```

pub mod error;
pub mod modifier;
pub mod request;
pub mod settings;
pub mod shape;
pub mod traverse;
pub mod value;

// Re-export main types for convenience
pub use error::{Error, ErrorKind, Result};
pub use modifier::{Modifier, ModifierContext, ModifierKind, ModifierRegistry};
pub use request::TransformRequest;
pub use settings::{EngineSettings, MapPolicy, SizeUnits};
pub use shape::{classify, Shape};
pub use traverse::{transform, Engine, SENTINEL};
pub use value::{Map, Scalar, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
        assert_send_sync::<ModifierRegistry>();
    }
}
