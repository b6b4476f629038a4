/// A file-like value, such as an upload handed over by a web framework.
///
/// Only the file's name is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> File {
        File { name: name.into() }
    }
}
