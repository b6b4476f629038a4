pub mod cache;
pub use cache::{CachePolicy, QueryCache};

mod config;
pub use config::Config;

pub mod connector;
pub use connector::Connector;

mod registry;
pub use registry::Registry;

pub use quarry_core::{driver, schema, stmt::Value, Error, Result, Schema};
pub use quarry_sql::{
    stmt::{self, Join, JoinKind, JoinRelation, Literal},
    CoercionMode, Query, Serializer, StatementKind,
};
