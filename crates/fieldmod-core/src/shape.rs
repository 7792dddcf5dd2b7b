//! Value shape classification
//!
//! The traversal path is chosen from the shape alone. Anything that is not a
//! sequence or a map is a scalar and goes to the modifier dispatcher.

use crate::value::Value;
use std::fmt;

/// Structural classification of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Sequence,
    Map,
}

/// Report the shape of a value
pub fn classify(value: &Value) -> Shape {
    match value {
        Value::Sequence(_) => Shape::Sequence,
        Value::Map(_) => Shape::Map,
        Value::Scalar(_) => Shape::Scalar,
    }
}

impl Value {
    pub fn shape(&self) -> Shape {
        classify(self)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => write!(f, "scalar"),
            Shape::Sequence => write!(f, "sequence"),
            Shape::Map => write!(f, "map"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;

    #[test]
    fn test_classify() {
        assert_eq!(classify(&Value::from("abc")), Shape::Scalar);
        assert_eq!(classify(&Value::from(1.5)), Shape::Scalar);
        assert_eq!(classify(&Value::null()), Shape::Scalar);
        assert_eq!(classify(&Value::sequence(vec!["a", "b"])), Shape::Sequence);
        assert_eq!(classify(&Value::Sequence(vec![])), Shape::Sequence);
        assert_eq!(classify(&Value::Map(Map::new())), Shape::Map);
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(Value::from(true).shape().to_string(), "scalar");
    }
}
