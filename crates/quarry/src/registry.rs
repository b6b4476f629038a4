use crate::{Config, Connector, QueryCache};

use quarry_core::{driver::Driver, Error, Result};

use indexmap::{map::Entry, IndexMap};
use std::sync::Arc;

/// Connectors by name, all sharing one result cache.
#[derive(Debug, Default)]
pub struct Registry {
    config: Config,
    cache: Arc<QueryCache>,
    connectors: IndexMap<String, Connector>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Connectors defined on this registry use `config`, and the shared cache
    /// follows its cache policy.
    pub fn from_config(config: Config) -> Registry {
        Registry {
            cache: Arc::new(QueryCache::new(config.cache.clone())),
            config,
            connectors: IndexMap::new(),
        }
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Defines a connector, replacing any previous one with the same name.
    pub fn define(&mut self, name: impl Into<String>, driver: impl Driver) -> &mut Connector {
        let name = name.into();
        let connector = Connector::builder(name.clone())
            .config(&self.config)
            .cache(self.cache.clone())
            .build(driver);

        tracing::debug!(connector = %name, "connector defined");

        match self.connectors.entry(name) {
            Entry::Occupied(mut entry) => {
                entry.insert(connector);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(connector),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Connector> {
        self.connectors
            .get(name)
            .ok_or_else(|| Error::unknown_connector(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Connector> {
        self.connectors
            .get_mut(name)
            .ok_or_else(|| Error::unknown_connector(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.connectors.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.connectors.keys().map(String::as_str)
    }
}
