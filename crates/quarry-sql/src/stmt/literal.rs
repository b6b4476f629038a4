/// A value ready to be embedded in an assignment list.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),

    /// Text, quoted and escaped when rendered
    Text(String),

    /// A pre-rendered SQL fragment, such as a `COMPRESS(...)` call. Embedded
    /// verbatim.
    Expr(String),
}

impl Literal {
    /// Prefix identifying a pre-rendered compression call.
    pub const COMPRESS: &'static str = "COMPRESS(";

    /// Returns `true` if the literal is embedded without quoting.
    ///
    /// Text that already starts with a compression call is passed through as
    /// well. Detection is a plain prefix match.
    pub fn is_verbatim(&self) -> bool {
        match self {
            Literal::Expr(_) => true,
            Literal::Text(text) => text.starts_with(Self::COMPRESS),
            Literal::Int(_) | Literal::Float(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Text(text) | Literal::Expr(text) => Some(text),
            _ => None,
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Int(value as i64)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Text(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Text(value)
    }
}
