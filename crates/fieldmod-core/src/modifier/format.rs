//! `FORMAT` modifier
//!
//! Sub-dispatches on the attribute label:
//! - `name`: apply the naming convention selected by `args[0]`
//! - `size`: parse a decimal number and scale it by the unit in `args[0]`
//! - `time`: parse a timestamp with the layout selected by `args[0]`
//!
//! Any other attribute is not implemented.

use super::{expect_string, naming, time, Modifier, ModifierContext, ModifierKind};
use crate::error::{Error, Result};
use crate::settings::SizeUnits;
use crate::value::{Scalar, Value};

/// `FORMAT` strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Format;

impl Modifier for Format {
    fn kind(&self) -> ModifierKind {
        ModifierKind::Format
    }

    fn apply(&self, ctx: &ModifierContext<'_>, value: &Scalar) -> Result<Value> {
        match ctx.attribute {
            "name" => {
                let s = expect_string(self.kind(), value)?;
                format_name(ctx.arg(0), s)
            }
            "size" => {
                let s = expect_string(self.kind(), value)?;
                format_size(ctx.settings.size_units, ctx.arg(0), s)
            }
            "time" => {
                let s = expect_string(self.kind(), value)?;
                let layout = time::TimeLayout::select(ctx.arg(0));
                Ok(layout.parse(s)?.into())
            }
            _ => Err(Error::not_implemented(ctx.name, ctx.attribute)),
        }
    }
}

fn format_name(convention: Option<&str>, value: &str) -> Result<Value> {
    let convention = convention.unwrap_or_default();
    naming::NamingConvention::from_name(convention)
        .map(|c| Value::string(c.apply(value)))
        .ok_or_else(|| Error::unsupported_format(convention, "name"))
}

/// Parse `value` as a float and scale it by `unit`
///
/// The number is parsed before the unit is looked at, so a malformed number
/// wins over an unknown unit.
pub fn format_size(units: SizeUnits, unit: Option<&str>, value: &str) -> Result<Value> {
    let size: f64 = value.parse()?;
    let unit = unit.unwrap_or_default();
    let factor = units
        .factor(unit)
        .ok_or_else(|| Error::unsupported_format(unit, "size"))?;

    Ok(Value::from(size * factor))
}
