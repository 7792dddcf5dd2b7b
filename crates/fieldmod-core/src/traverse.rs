//! Shape-aware traversal
//!
//! The engine applies one modifier request to a value of any shape. Sequences
//! are rewritten element by element in index order, maps are rebuilt from their
//! transformed keys, and scalars go to the modifier registry.
//!
//! Failure is never rolled back: the first error at any depth aborts the call,
//! and with [`Engine::transform_in_place`] the elements rewritten before the
//! failing one stay rewritten.
//!
//! Copyright (c) 2025 Fieldmod Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::modifier::{ModifierContext, ModifierRegistry};
use crate::request::TransformRequest;
use crate::settings::{EngineSettings, MapPolicy};
use crate::shape::{classify, Shape};
use crate::value::{Map, Value};

/// Payload stored under every transformed key with [`MapPolicy::KeySet`]
pub const SENTINEL: bool = true;

/// Modifier engine
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    settings: EngineSettings,
    registry: &'static ModifierRegistry,
}

impl Engine {
    /// Create an engine over the global registry
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            registry: ModifierRegistry::global(),
        }
    }

    /// Create an engine from default settings merged with the environment
    pub fn from_env() -> Self {
        let mut settings = EngineSettings::default();
        settings.merge_with_env();
        Self::new(settings)
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Apply a request, consuming it
    pub fn transform(&self, request: TransformRequest) -> Result<Value> {
        let TransformRequest {
            attribute,
            mut value,
            name,
            args,
        } = request;

        let ctx = ModifierContext::new(&name, &attribute, &args, &self.settings);
        self.apply(&ctx, &mut value)?;
        Ok(value)
    }

    /// Apply a modifier to `value` in place
    ///
    /// On error, sequence elements before the failing one keep their new value.
    pub fn transform_in_place(
        &self,
        value: &mut Value,
        name: &str,
        attribute: &str,
        args: &[String],
    ) -> Result<()> {
        let ctx = ModifierContext::new(name, attribute, args, &self.settings);
        self.apply(&ctx, value)
    }

    fn apply(&self, ctx: &ModifierContext<'_>, value: &mut Value) -> Result<()> {
        match classify(value) {
            Shape::Sequence => {
                if let Value::Sequence(items) = value {
                    log::trace!("Descending into sequence of {} element(s)", items.len());
                    for item in items.iter_mut() {
                        self.apply(ctx, item)?;
                    }
                }
                Ok(())
            }
            Shape::Map => {
                if let Value::Map(map) = value {
                    log::trace!("Rebuilding map of {} key(s)", map.len());
                    *map = self.rebuild_map(ctx, map)?;
                }
                Ok(())
            }
            Shape::Scalar => {
                if let Value::Scalar(scalar) = value {
                    *value = self.registry.dispatch(ctx, scalar)?;
                }
                Ok(())
            }
        }
    }

    /// Build a new map from transformed keys
    ///
    /// Keys that transform to equal values collapse into one entry. The source
    /// map is left untouched when a key fails.
    fn rebuild_map(&self, ctx: &ModifierContext<'_>, map: &Map) -> Result<Map> {
        let mut result = Map::with_capacity(map.len());

        for (key, payload) in map.iter() {
            let mut key = key.clone();
            self.apply(ctx, &mut key)?;
            let payload = match self.settings.map_policy {
                MapPolicy::KeySet => Value::from(SENTINEL),
                MapPolicy::PreserveValues => payload.clone(),
            };
            result.insert(key, payload);
        }

        Ok(result)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

/// Apply a request with default settings
pub fn transform(request: TransformRequest) -> Result<Value> {
    Engine::default().transform(request)
}
