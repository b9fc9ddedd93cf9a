use std::collections::BTreeMap;

use psyscore_core::ResponseTable;

use crate::definition::QuestionnaireDefinition;
use crate::error::InstrumentError;
use crate::{Instrument, compile, instruments};

/// Prefix-keyed collection of instruments used for detection and dispatch.
///
/// Registering a prefix that is already present replaces the earlier
/// instrument (last write wins). The replacement is logged but not an
/// error. Enumeration is in prefix order.
#[derive(Default)]
pub struct Registry {
    entries: BTreeMap<String, Box<dyn Instrument>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with every built-in questionnaire.
    pub fn builtin() -> Result<Self, InstrumentError> {
        Self::from_definitions(instruments::all_definitions().into_iter().cloned())
    }

    /// Compile and register each definition. Stops at the first definition
    /// that fails to compile.
    pub fn from_definitions<I>(definitions: I) -> Result<Self, InstrumentError>
    where
        I: IntoIterator<Item = QuestionnaireDefinition>,
    {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register_definition(definition)?;
        }
        Ok(registry)
    }

    /// Register an instrument under its prefix, returning the instrument it
    /// replaced, if any.
    pub fn register(&mut self, instrument: Box<dyn Instrument>) -> Option<Box<dyn Instrument>> {
        let prefix = instrument.prefix().to_string();
        let replaced = self.entries.insert(prefix.clone(), instrument);
        if let Some(previous) = &replaced {
            tracing::warn!(
                prefix = %prefix,
                replaced = %previous.id(),
                "prefix already registered, replacing"
            );
        } else {
            tracing::debug!(prefix = %prefix, "registered instrument");
        }
        replaced
    }

    pub fn register_definition(&mut self, definition: QuestionnaireDefinition) -> Result<(), InstrumentError> {
        let procedure = compile(definition)?;
        self.register(Box::new(procedure));
        Ok(())
    }

    pub fn get(&self, prefix: &str) -> Option<&dyn Instrument> {
        self.entries.get(prefix).map(|i| i.as_ref() as &dyn Instrument)
    }

    /// Look up by questionnaire name rather than prefix.
    pub fn find(&self, id: &str) -> Option<&dyn Instrument> {
        self.iter().find(|i| i.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Instrument> {
        self.entries.values().map(|i| i.as_ref() as &dyn Instrument)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered instruments with at least one column in `table` starting
    /// with their prefix.
    pub fn detect(&self, table: &ResponseTable) -> Vec<&dyn Instrument> {
        self.iter().filter(|i| i.detects(table)).collect()
    }
}
