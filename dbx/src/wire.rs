use rusqlite::types::Type;
use std::fmt::{self, Display};

/// The declared SQL type of a bound parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WireTag {
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Double,
    Boolean,
    Varchar,
    Date,
    Time,
    Timestamp,
    TimestampWithTimezone,
}

impl WireTag {
    pub fn sql_name(&self) -> &'static str {
        match self {
            WireTag::TinyInt => "TINYINT",
            WireTag::SmallInt => "SMALLINT",
            WireTag::Integer => "INTEGER",
            WireTag::BigInt => "BIGINT",
            WireTag::Float => "FLOAT",
            WireTag::Double => "DOUBLE",
            WireTag::Boolean => "BOOLEAN",
            WireTag::Varchar => "VARCHAR",
            WireTag::Date => "DATE",
            WireTag::Time => "TIME",
            WireTag::Timestamp => "TIMESTAMP",
            WireTag::TimestampWithTimezone => "TIMESTAMP WITH TIME ZONE",
        }
    }

    /// The SQLite storage class values with this tag are bound as. Dates and
    /// times are stored as ISO-8601 text.
    pub fn storage(&self) -> Type {
        match self {
            WireTag::TinyInt
            | WireTag::SmallInt
            | WireTag::Integer
            | WireTag::BigInt
            | WireTag::Boolean => Type::Integer,
            WireTag::Float | WireTag::Double => Type::Real,
            WireTag::Varchar
            | WireTag::Date
            | WireTag::Time
            | WireTag::Timestamp
            | WireTag::TimestampWithTimezone => Type::Text,
        }
    }

    /// `NULL` is accepted for every tag.
    pub fn accepts(&self, storage: Type) -> bool {
        storage == Type::Null || storage == self.storage()
    }
}

impl Display for WireTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}
