use super::{Connect, Connector};
use crate::{CachePolicy, Config, QueryCache};

use quarry_core::{driver::Driver, Result};
use quarry_sql::{Coercer, CoercionMode, Serializer};

use std::sync::Arc;

/// Configures a [`Connector`] before it is created.
#[derive(Debug)]
pub struct Builder {
    name: String,

    /// Shared cache; a private one is created from `cache_policy` when unset
    cache: Option<Arc<QueryCache>>,

    cache_policy: CachePolicy,

    coercion: CoercionMode,

    lang: Option<String>,

    remember_total: Option<String>,
}

impl Builder {
    pub(super) fn new(name: impl Into<String>) -> Builder {
        Builder {
            name: name.into(),
            cache: None,
            cache_policy: CachePolicy::default(),
            coercion: CoercionMode::default(),
            lang: None,
            remember_total: None,
        }
    }

    /// Applies the coercion mode, language and cache policy from `config`.
    ///
    /// The cache policy only takes effect when no shared cache is set.
    pub fn config(&mut self, config: &Config) -> &mut Self {
        self.coercion = config.coercion;
        self.cache_policy = config.cache.clone();
        if config.lang.is_some() {
            self.lang = config.lang.clone();
        }
        self
    }

    /// Stores results in `cache` instead of a private cache.
    pub fn cache(&mut self, cache: Arc<QueryCache>) -> &mut Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache_policy(&mut self, policy: CachePolicy) -> &mut Self {
        self.cache_policy = policy;
        self
    }

    pub fn coercion(&mut self, mode: CoercionMode) -> &mut Self {
        self.coercion = mode;
        self
    }

    pub fn lang(&mut self, lang: impl Into<String>) -> &mut Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn remember_total(&mut self, name: impl Into<String>) -> &mut Self {
        self.remember_total = Some(name.into());
        self
    }

    /// Creates a connector for the database at `url`.
    ///
    /// The URL is validated now; the connection itself is opened on first
    /// use.
    pub fn connect(&mut self, url: &str) -> Result<Connector> {
        Ok(self.build(Connect::new(url)?))
    }

    pub fn build(&mut self, driver: impl Driver) -> Connector {
        let cache = match &self.cache {
            Some(cache) => cache.clone(),
            None => Arc::new(QueryCache::new(self.cache_policy.clone())),
        };

        Connector {
            name: self.name.clone(),
            driver: Box::new(driver),
            connection: None,
            cache,
            serializer: Serializer::new(),
            coercer: Coercer::new(self.coercion),
            lang: self.lang.clone(),
            remember_total: self.remember_total.clone(),
            ignore_cache: false,
            force_refresh: false,
        }
    }
}
