//! Line Customization
//!
//! Attribute → choice map attached to a cart line. Values are normalized
//! on insert so that equal selections always serialize identically.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::NOTE_ATTRIBUTE;

/// Chosen value(s) for one attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    One(String),
    Many(Vec<String>),
}

impl Choice {
    /// Human readable form, list values joined with ", "
    pub fn display(&self) -> String {
        match self {
            Choice::One(value) => value.clone(),
            Choice::Many(values) => values.join(", "),
        }
    }

    /// Trimmed, sorted, de-duplicated; `None` when nothing is left
    fn normalized(self) -> Option<Choice> {
        match self {
            Choice::One(value) => {
                let value = value.trim();
                (!value.is_empty()).then(|| Choice::One(value.to_string()))
            }
            Choice::Many(values) => {
                let mut values: Vec<String> = values
                    .iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect();
                values.sort();
                values.dedup();
                (!values.is_empty()).then_some(Choice::Many(values))
            }
        }
    }
}

/// Attribute name → choice, ordered by attribute name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customization(BTreeMap<String, Choice>);

impl Customization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_one(mut self, attribute: &str, value: &str) -> Self {
        self.insert(attribute, Choice::One(value.to_string()));
        self
    }

    pub fn with_many<I, V>(mut self, attribute: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.insert(attribute, Choice::Many(values));
        self
    }

    /// Insert a normalized choice; empty choices remove the attribute
    pub fn insert(&mut self, attribute: &str, choice: Choice) {
        match choice.normalized() {
            Some(choice) => {
                self.0.insert(attribute.to_string(), choice);
            }
            None => {
                self.0.remove(attribute);
            }
        }
    }

    pub fn get(&self, attribute: &str) -> Option<&Choice> {
        self.0.get(attribute)
    }

    pub fn note(&self) -> Option<&str> {
        match self.0.get(NOTE_ATTRIBUTE) {
            Some(Choice::One(note)) => Some(note.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Choice)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Display values of every attribute except the note
    pub fn details(&self) -> Vec<String> {
        self.iter()
            .filter(|(attr, _)| *attr != NOTE_ATTRIBUTE)
            .map(|(_, choice)| choice.display())
            .collect()
    }

    /// Every value, note included, joined with " | "
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(_, choice)| choice.display())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Re-apply normalization, e.g. after deserializing a stored snapshot
    pub fn normalized(self) -> Self {
        let mut out = Self::new();
        for (attribute, choice) in self.0 {
            out.insert(&attribute, choice);
        }
        out
    }

    /// Canonical serialization used for line identity
    pub fn canonical(&self) -> String {
        // BTreeMap<String, Choice> always serializes
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

/// Identity of a cart line: title plus canonical customization
pub fn line_key(title: &str, customization: &Customization) -> String {
    format!("{}#{}", title, customization.canonical())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order_does_not_matter() {
        let a = Customization::new()
            .with_one("sweetness", "หวานน้อย")
            .with_one("temp", "เย็น");
        let b = Customization::new()
            .with_one("temp", "เย็น")
            .with_one("sweetness", "หวานน้อย");
        assert_eq!(line_key("ชาเย็น", &a), line_key("ชาเย็น", &b));
    }

    #[test]
    fn test_checkbox_order_does_not_matter() {
        let a = Customization::new().with_many("topping", ["ไข่มุก", "วิปครีม"]);
        let b = Customization::new().with_many("topping", ["วิปครีม", "ไข่มุก", "ไข่มุก"]);
        assert_eq!(a, b);
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn test_empty_values_are_dropped() {
        let c = Customization::new()
            .with_one("note", "   ")
            .with_many("addon", Vec::<String>::new());
        assert!(c.is_empty());
        assert_eq!(c.canonical(), "{}");
    }

    #[test]
    fn test_different_titles_give_different_keys() {
        let c = Customization::new();
        assert_ne!(line_key("Pad Thai", &c), line_key("Tom Yum", &c));
    }

    #[test]
    fn test_details_skip_note() {
        let c = Customization::new()
            .with_one("spiciness", "เผ็ดน้อย")
            .with_many("addon", ["ไข่ดาว", "เพิ่มกุ้ง"])
            .with_one("note", "ไม่ใส่ผัก");
        assert_eq!(c.details(), vec!["เพิ่มกุ้ง, ไข่ดาว".to_string(), "เผ็ดน้อย".to_string()]);
        assert_eq!(c.note(), Some("ไม่ใส่ผัก"));
        assert_eq!(c.summary(), "เพิ่มกุ้ง, ไข่ดาว | ไม่ใส่ผัก | เผ็ดน้อย");
    }
}
