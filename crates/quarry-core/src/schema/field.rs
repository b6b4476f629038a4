#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Key the field is projected as and read from in data maps
    pub key: String,

    /// Column name in the database
    pub column: String,

    /// What kind of value the field stores
    pub kind: FieldKind,

    /// True when the column is stored through `COMPRESS()`.
    pub compressed: bool,

    /// Table the column lives in, when it is not the schema's primary table.
    pub table: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Email,
    Boolean,
    Integer,
    Float,
    Html,
    Json,
    UnixTimestamp,
    DateTime,
    File,
    ForeignKey(Relation),
    RelatedKeys(Relation),
    RelatedKeysArray(Relation),
    Related(Relation),
    Pivot(Relation),
    Computed,
    Concat(Vec<String>),
}

/// Target of a relation field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Name of the related schema
    pub target: String,
}

macro_rules! constructors {
    ( $( $name:ident => $kind:ident, )* ) => {
        $(
            pub fn $name(key: impl Into<String>) -> Field {
                Field::new(key, FieldKind::$kind)
            }
        )*
    };
}

macro_rules! relation_constructors {
    ( $( $name:ident => $kind:ident, )* ) => {
        $(
            pub fn $name(key: impl Into<String>, target: impl Into<String>) -> Field {
                Field::new(key, FieldKind::$kind(Relation { target: target.into() }))
            }
        )*
    };
}

impl Field {
    /// Creates a field whose column is named after its key.
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Field {
        let key = key.into();
        Field {
            column: key.clone(),
            key,
            kind,
            compressed: false,
            table: None,
        }
    }

    constructors! {
        string => String,
        email => Email,
        boolean => Boolean,
        integer => Integer,
        float => Float,
        html => Html,
        json => Json,
        unix_timestamp => UnixTimestamp,
        datetime => DateTime,
        file => File,
        computed => Computed,
    }

    relation_constructors! {
        foreign_key => ForeignKey,
        related_keys => RelatedKeys,
        related_keys_array => RelatedKeysArray,
        related => Related,
        pivot => Pivot,
    }

    pub fn concat(
        key: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Field {
        Field::new(
            key,
            FieldKind::Concat(fields.into_iter().map(Into::into).collect()),
        )
    }

    /// Sets the column name.
    pub fn column(mut self, column: impl Into<String>) -> Field {
        self.column = column.into();
        self
    }

    /// Marks the column as stored compressed.
    pub fn compressed(mut self) -> Field {
        self.compressed = true;
        self
    }

    /// Places the column in a table other than the schema's own.
    pub fn in_table(mut self, table: impl Into<String>) -> Field {
        self.table = Some(table.into());
        self
    }

    pub fn is_virtual(&self) -> bool {
        self.kind.is_virtual()
    }

    pub fn is_persisted(&self) -> bool {
        self.kind.is_persisted()
    }

    pub fn is_foreign_key(&self) -> bool {
        self.kind.is_foreign_key()
    }

    /// True when values are written through `COMPRESS()` and read back
    /// through `UNCOMPRESS()`. Only textual kinds can be compressed.
    pub fn is_compressed(&self) -> bool {
        self.compressed && self.kind.is_textual()
    }

    /// Key to read this field's value from in a mutation data map.
    ///
    /// Foreign keys are supplied as `<key>Id`.
    pub fn input_key(&self) -> String {
        if self.is_foreign_key() {
            format!("{}Id", self.key)
        } else {
            self.key.clone()
        }
    }

    /// If the field is a relation, return the name of the related schema.
    pub fn relation_target(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::ForeignKey(relation)
            | FieldKind::RelatedKeys(relation)
            | FieldKind::RelatedKeysArray(relation)
            | FieldKind::Related(relation)
            | FieldKind::Pivot(relation) => Some(&relation.target),
            _ => None,
        }
    }
}

impl FieldKind {
    /// True for kinds resolved outside the primary table. They never project
    /// a column.
    pub fn is_virtual(&self) -> bool {
        match self {
            FieldKind::Pivot(_)
            | FieldKind::Related(_)
            | FieldKind::RelatedKeys(_)
            | FieldKind::Computed
            | FieldKind::Concat(_) => true,
            FieldKind::String
            | FieldKind::Email
            | FieldKind::Boolean
            | FieldKind::Integer
            | FieldKind::Float
            | FieldKind::Html
            | FieldKind::Json
            | FieldKind::UnixTimestamp
            | FieldKind::DateTime
            | FieldKind::File
            | FieldKind::ForeignKey(_)
            | FieldKind::RelatedKeysArray(_) => false,
        }
    }

    /// True for kinds that can be written. Related keys are stored by the
    /// owning model even though they are never projected back.
    pub fn is_persisted(&self) -> bool {
        !self.is_virtual() || matches!(self, FieldKind::RelatedKeys(_))
    }

    pub fn is_foreign_key(&self) -> bool {
        matches!(self, FieldKind::ForeignKey(_))
    }

    /// True for kinds persisted as free text.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            FieldKind::String
                | FieldKind::Email
                | FieldKind::Html
                | FieldKind::Json
                | FieldKind::ForeignKey(_)
                | FieldKind::RelatedKeys(_)
                | FieldKind::RelatedKeysArray(_)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Email => "email",
            FieldKind::Boolean => "boolean",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Html => "html",
            FieldKind::Json => "json",
            FieldKind::UnixTimestamp => "unix-timestamp",
            FieldKind::DateTime => "datetime",
            FieldKind::File => "file",
            FieldKind::ForeignKey(_) => "foreign-key",
            FieldKind::RelatedKeys(_) => "related-keys",
            FieldKind::RelatedKeysArray(_) => "related-keys-array",
            FieldKind::Related(_) => "related",
            FieldKind::Pivot(_) => "pivot",
            FieldKind::Computed => "computed",
            FieldKind::Concat(_) => "concatenated",
        }
    }
}
