mod file;
pub use file::File;

mod num;

mod row;
pub use row::{Row, Rows};

mod value;
pub use value::Value;

mod value_jiff;
