//! Product records as returned by the product lookup.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Hardware category of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Motherboard,
    Memory,
    Gpu,
    Psu,
    Case,
    Cooler,
    Storage,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Cpu,
        Category::Motherboard,
        Category::Memory,
        Category::Gpu,
        Category::Psu,
        Category::Case,
        Category::Cooler,
        Category::Storage,
        Category::Unknown,
    ];

    /// Identifier used in build files and configuration tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Motherboard => "motherboard",
            Category::Memory => "memory",
            Category::Gpu => "gpu",
            Category::Psu => "psu",
            Category::Case => "case",
            Category::Cooler => "cooler",
            Category::Storage => "storage",
            Category::Unknown => "unknown",
        }
    }

    /// Finnish noun in the nominative case ("X on prosessori").
    pub fn nominative(&self) -> &'static str {
        match self {
            Category::Cpu => "prosessori",
            Category::Motherboard => "emolevy",
            Category::Memory => "muisti",
            Category::Gpu => "näytönohjain",
            Category::Psu => "virtalähde",
            Category::Case => "kotelo",
            Category::Cooler => "jäähdytin",
            Category::Storage => "tallennustila",
            Category::Unknown => "tuntematon komponentti",
        }
    }

    /// Finnish noun in the allative case ("tarkoitettu prosessorille").
    pub fn allative(&self) -> &'static str {
        match self {
            Category::Cpu => "prosessorille",
            Category::Motherboard => "emolevylle",
            Category::Memory => "muistille",
            Category::Gpu => "näytönohjaimelle",
            Category::Psu => "virtalähteelle",
            Category::Case => "kotelolle",
            Category::Cooler => "jäähdyttimelle",
            Category::Storage => "tallennustilalle",
            Category::Unknown => "tuntemattomalle komponentille",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text specification sheet: label/value pairs in source order.
///
/// Deserializes from a JSON object. Non-string values are stringified so a
/// numeric `"TDP": 65` still reaches the extractors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specs(Vec<(String, String)>);

impl Specs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Specs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut specs = Specs::new();
        for (k, v) in iter {
            specs.insert(k, v);
        }
        specs
    }
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Array(items) => items
            .into_iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

impl Serialize for Specs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Specs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecsVisitor;

        impl<'de> Visitor<'de> for SpecsVisitor {
            type Value = Specs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of specification labels to values")
            }

            fn visit_unit<E>(self) -> Result<Specs, E> {
                Ok(Specs::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Specs, A::Error> {
                let mut specs = Specs::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    specs.insert(key, value_to_text(value));
                }
                Ok(specs)
            }
        }

        deserializer.deserialize_any(SpecsVisitor)
    }
}

/// One hardware item. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    #[serde(default)]
    pub product_code: String,
    /// Category assigned by the caller when the item was placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub specs: Specs,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            product_code: String::new(),
            category: None,
            specs: Specs::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.product_code = code.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specs.insert(key, value);
        self
    }

    pub(crate) fn lower_name(&self) -> String {
        self.name.to_lowercase()
    }
}
