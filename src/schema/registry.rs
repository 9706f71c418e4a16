use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::marker::PhantomData;

/// Column types accepted as the first segment of a column spec
pub const COLUMN_TYPES: &[&str] = &[
    "bigIncrements",
    "bigInteger",
    "binary",
    "boolean",
    "char",
    "date",
    "dateTime",
    "dateTimeTz",
    "decimal",
    "double",
    "enum",
    "float",
    "geometry",
    "increments",
    "integer",
    "ipAddress",
    "json",
    "jsonb",
    "longText",
    "macAddress",
    "mediumIncrements",
    "mediumInteger",
    "mediumText",
    "morphs",
    "nullableMorphs",
    "nullableTimestamps",
    "point",
    "rememberToken",
    "smallIncrements",
    "smallInteger",
    "softDeletes",
    "softDeletesTz",
    "string",
    "text",
    "time",
    "timeTz",
    "timestamp",
    "timestampTz",
    "timestamps",
    "timestampsTz",
    "tinyIncrements",
    "tinyInteger",
    "unsignedBigInteger",
    "unsignedInteger",
    "unsignedMediumInteger",
    "unsignedSmallInteger",
    "unsignedTinyInteger",
    "uuid",
    "year",
];

/// Column modifiers and index declarations accepted after the type segment
pub const COLUMN_MODIFIERS: &[&str] = &[
    "after",
    "autoIncrement",
    "charset",
    "collation",
    "comment",
    "default",
    "first",
    "nullable",
    "storedAs",
    "unsigned",
    "useCurrent",
    "virtualAs",
    // Indexes
    "primary",
    "unique",
    "index",
    "spatialIndex",
    "foreign",
];

static DEFAULT_TYPES: Lazy<TypeRegistry> = Lazy::new(|| TypeRegistry::new(COLUMN_TYPES));

static DEFAULT_MODIFIERS: Lazy<ModifierRegistry> =
    Lazy::new(|| ModifierRegistry::new(COLUMN_MODIFIERS));

/// Marker for the column type vocabulary
#[derive(Debug, Clone, Copy)]
pub enum ColumnTypes {}

/// Marker for the column modifier vocabulary
#[derive(Debug, Clone, Copy)]
pub enum ColumnModifiers {}

/// Case-sensitive set of allowed names, tagged with the vocabulary it holds
#[derive(Debug, Clone)]
pub struct Registry<K> {
    names: HashSet<&'static str>,
    kind: PhantomData<K>,
}

pub type TypeRegistry = Registry<ColumnTypes>;
pub type ModifierRegistry = Registry<ColumnModifiers>;

impl<K> Registry<K> {
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.iter().copied().collect(),
            kind: PhantomData,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.names.iter().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Registry<ColumnTypes> {
    /// Shared registry built from [`COLUMN_TYPES`]
    pub fn standard() -> &'static Self {
        &DEFAULT_TYPES
    }
}

impl Registry<ColumnModifiers> {
    /// Shared registry built from [`COLUMN_MODIFIERS`]
    pub fn standard() -> &'static Self {
        &DEFAULT_MODIFIERS
    }
}

/// Check a bare type name against the standard registry
pub fn is_valid_column_type(name: &str) -> bool {
    TypeRegistry::standard().contains(name)
}

/// Check a bare modifier name against the standard registry
pub fn is_valid_column_modifier(name: &str) -> bool {
    ModifierRegistry::standard().contains(name)
}
