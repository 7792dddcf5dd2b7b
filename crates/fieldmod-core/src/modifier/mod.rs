//! Modifier registry and dispatch
//!
//! A modifier is a named transformation applied to one scalar value, parameterized
//! by an attribute label and positional string arguments. Modifier names resolve
//! case-insensitively to a closed set of kinds, each backed by one strategy
//! implementation held in a process-wide registry that is built once and never
//! mutated.
//!
//! # Module Organization
//!
//! - [`case`] - `UPPER` and `LOWER`
//! - [`format`] - `FORMAT`, sub-dispatching on the attribute
//! - [`naming`] - naming conventions used by `FORMAT` on `name`
//! - [`time`] - timestamp layouts used by `FORMAT` on `time`
//!
//! Copyright (c) 2025 Fieldmod Team
//! Licensed under the Apache-2.0 license

pub mod case;
pub mod format;
pub mod naming;
pub mod time;

#[cfg(test)]
mod tests;

use crate::error::{Error, Result};
use crate::settings::EngineSettings;
use crate::value::{Scalar, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

static REGISTRY: OnceLock<ModifierRegistry> = OnceLock::new();

/// Closed set of modifier kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Format,
    Upper,
    Lower,
}

impl ModifierKind {
    /// All kinds, in registration order
    pub const ALL: [ModifierKind; 3] = [ModifierKind::Format, ModifierKind::Upper, ModifierKind::Lower];

    /// Resolve a modifier name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            ModifierKind::Format => "FORMAT",
            ModifierKind::Upper => "UPPER",
            ModifierKind::Lower => "LOWER",
        }
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a modifier sees besides the scalar itself
#[derive(Debug, Clone, Copy)]
pub struct ModifierContext<'a> {
    /// Modifier name as supplied by the caller
    pub name: &'a str,
    /// Attribute label
    pub attribute: &'a str,
    /// Positional arguments
    pub args: &'a [String],
    /// Engine settings
    pub settings: &'a EngineSettings,
}

impl<'a> ModifierContext<'a> {
    pub fn new(
        name: &'a str,
        attribute: &'a str,
        args: &'a [String],
        settings: &'a EngineSettings,
    ) -> Self {
        Self {
            name,
            attribute,
            args,
            settings,
        }
    }

    /// Positional argument at `index`, if supplied
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }
}

/// A modifier strategy
pub trait Modifier: Send + Sync {
    /// The kind this strategy implements
    fn kind(&self) -> ModifierKind;

    /// Transform one scalar
    ///
    /// The scalar is borrowed, so a failing call leaves it as it was.
    fn apply(&self, ctx: &ModifierContext<'_>, value: &Scalar) -> Result<Value>;
}

/// Require a string scalar, reporting a type mismatch otherwise
pub(crate) fn expect_string(kind: ModifierKind, value: &Scalar) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| Error::type_mismatch(kind.as_str(), "string", value.type_name()))
}

/// Mapping from modifier kind to strategy
pub struct ModifierRegistry {
    modifiers: HashMap<ModifierKind, Box<dyn Modifier>>,
}

impl ModifierRegistry {
    /// Build a registry holding the built-in modifiers
    pub fn with_builtins() -> Self {
        let builtins: [Box<dyn Modifier>; 3] = [
            Box::new(format::Format),
            Box::new(case::Upper),
            Box::new(case::Lower),
        ];

        Self {
            modifiers: builtins.into_iter().map(|m| (m.kind(), m)).collect(),
        }
    }

    /// The process-wide registry, built on first use
    pub fn global() -> &'static ModifierRegistry {
        REGISTRY.get_or_init(Self::with_builtins)
    }

    /// Resolve a modifier name to its strategy
    pub fn lookup(&self, name: &str) -> Option<&dyn Modifier> {
        ModifierKind::from_name(name)
            .and_then(|kind| self.modifiers.get(&kind))
            .map(|m| &**m)
    }

    /// Number of registered modifiers
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Run the modifier named in `ctx` on one scalar
    pub fn dispatch(&self, ctx: &ModifierContext<'_>, value: &Scalar) -> Result<Value> {
        let modifier = self
            .lookup(ctx.name)
            .ok_or_else(|| Error::not_implemented(ctx.name, ctx.attribute))?;

        log::debug!(
            "Dispatching {} on attribute '{}' with {} arg(s)",
            modifier.kind(),
            ctx.attribute,
            ctx.args.len()
        );

        modifier.apply(ctx, value)
    }
}

impl fmt::Debug for ModifierRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&ModifierKind> = self.modifiers.keys().collect();
        kinds.sort_by_key(|k| k.as_str());
        f.debug_struct("ModifierRegistry").field("modifiers", &kinds).finish()
    }
}
