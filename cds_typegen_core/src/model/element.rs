use bon::Builder;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Upper bound of an association: to-one or to-many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Cardinality {
    One,
    Many,
}

impl Cardinality {
    fn from_bound(bound: &str) -> Option<Self> {
        match bound {
            "one" | "1" => Some(Cardinality::One),
            "many" | "*" => Some(Cardinality::Many),
            _ => None,
        }
    }

    fn from_max(max: &Value) -> Option<Self> {
        match max {
            Value::String(bound) => Self::from_bound(bound),
            Value::Number(n) => n.as_u64().map(|n| {
                if n <= 1 {
                    Cardinality::One
                } else {
                    Cardinality::Many
                }
            }),
            _ => None,
        }
    }

    /// Accepts `"one"`/`"many"` as well as CSN bounds like `{ "max": "*" }`.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(bounds) => match bounds.get("max") {
                Some(max) => Self::from_max(max),
                None => Some(Cardinality::One),
            },
            other => Self::from_max(other),
        }
    }
}

impl<'de> Deserialize<'de> for Cardinality {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Cardinality::from_value(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid association cardinality: {}", value))
        })
    }
}

/// One foreign key of a managed association, e.g. `{ "ref": ["ID"] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KeyRef {
    #[serde(rename = "ref", default)]
    pub path: Vec<String>,
}

impl KeyRef {
    pub fn new(path: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Field of the target entity this key points at.
    pub fn field(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

/// Literal of one enum member. A missing `val` means the member name is the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnumLiteral {
    #[serde(default)]
    pub val: Option<Value>,
}

impl EnumLiteral {
    pub fn new(val: impl Into<Value>) -> Self {
        Self {
            val: Some(val.into()),
        }
    }

    pub fn unset() -> Self {
        Self { val: None }
    }
}

/// A field of an entity or a parameter of an operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Builder)]
pub struct Element {
    #[serde(default, rename = "type")]
    #[builder(into)]
    pub type_name: Option<String>,

    #[serde(default)]
    pub cardinality: Option<Cardinality>,

    /// Model name of the associated entity.
    #[serde(default)]
    #[builder(into)]
    pub target: Option<String>,

    #[serde(default)]
    #[builder(default)]
    pub keys: Vec<KeyRef>,

    #[serde(default, rename = "enum")]
    #[builder(default)]
    pub enum_values: IndexMap<String, EnumLiteral>,

    /// Element type of an arrayed element (`many String`).
    #[serde(default)]
    pub items: Option<Box<Element>>,

    #[serde(default)]
    #[builder(default)]
    pub key: bool,
}

impl Element {
    /// Shorthand for a plain element of the given type.
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Default::default()
        }
    }

    pub fn is_association(&self) -> bool {
        matches!(
            self.type_name.as_deref(),
            Some("cds.Association" | "cds.Composition")
        )
    }

    pub fn is_to_one(&self) -> bool {
        self.cardinality == Some(Cardinality::One)
    }

    pub fn is_to_many(&self) -> bool {
        self.cardinality == Some(Cardinality::Many)
    }
}
