pub mod coerce;
pub use coerce::{CoercionMode, Coercer};

pub mod column;

mod escape;

pub mod projection;

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::{Query, Statement, StatementKind};
