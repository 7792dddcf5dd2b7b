//! Case conversion modifiers
//!
//! Both use the locale-insensitive Unicode case mapping of `str`.

use super::{expect_string, Modifier, ModifierContext, ModifierKind};
use crate::error::Result;
use crate::value::{Scalar, Value};

/// `UPPER`: uppercase a string scalar
#[derive(Debug, Clone, Copy, Default)]
pub struct Upper;

/// `LOWER`: lowercase a string scalar
#[derive(Debug, Clone, Copy, Default)]
pub struct Lower;

impl Modifier for Upper {
    fn kind(&self) -> ModifierKind {
        ModifierKind::Upper
    }

    fn apply(&self, _ctx: &ModifierContext<'_>, value: &Scalar) -> Result<Value> {
        let s = expect_string(self.kind(), value)?;
        Ok(Value::string(s.to_uppercase()))
    }
}

impl Modifier for Lower {
    fn kind(&self) -> ModifierKind {
        ModifierKind::Lower
    }

    fn apply(&self, _ctx: &ModifierContext<'_>, value: &Scalar) -> Result<Value> {
        let s = expect_string(self.kind(), value)?;
        Ok(Value::string(s.to_lowercase()))
    }
}
