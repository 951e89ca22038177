// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Options described by JSON records and a table of field names.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{OptionAccess, OptionGroup, OptionSource};

/// Names of the record fields that carry each option property.
///
/// Every field is optional. Names may be dotted paths (`"meta.code"`) into
/// nested objects. A missing field falls back to the whole record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Field holding the display label.
    pub label: Option<String>,
    /// Field holding the selection value.
    pub value: Option<String>,
    /// Field holding a unique key; also the equality key when `value` is unset.
    pub data_key: Option<String>,
    /// Field holding a boolean disabled flag.
    pub disabled: Option<String>,
    /// Field holding a group's header label. Setting it makes the source grouped.
    pub group_label: Option<String>,
    /// Field holding a group's array of child records.
    pub group_children: Option<String>,
}

/// Reasons a JSON document cannot become an [`OptionSource`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum JsonSourceError {
    /// The document (or a group's children) is not an array.
    #[error("expected an array of options, found {found}")]
    NotAnArray {
        /// JSON type that was found instead.
        found: &'static str,
    },
    /// `group_label` is set without `group_children`.
    #[error("`groupLabel` is set but `groupChildren` is not")]
    MissingChildrenField,
}

impl FieldConfig {
    /// Checks that the field table is usable.
    pub fn validate(&self) -> Result<(), JsonSourceError> {
        if self.group_label.is_some() && self.group_children.is_none() {
            return Err(JsonSourceError::MissingChildrenField);
        }
        Ok(())
    }

    /// Builds an option source from a JSON array.
    ///
    /// With `group_label` set, each element is a group record whose children sit
    /// under `group_children`.
    pub fn source(&self, options: Value) -> Result<OptionSource<Value>, JsonSourceError> {
        self.validate()?;
        let records = into_array(options)?;
        let (Some(label_field), Some(children_field)) = (&self.group_label, &self.group_children)
        else {
            return Ok(OptionSource::Flat(records));
        };
        let mut groups = Vec::with_capacity(records.len());
        for mut record in records {
            let label = resolve(&record, label_field)
                .map(text_of)
                .unwrap_or_default()
                .into_owned();
            let children = take_field(&mut record, children_field).unwrap_or(Value::Null);
            let items = match children {
                Value::Null => Vec::new(),
                other => into_array(other)?,
            };
            groups.push(OptionGroup::new(label, items));
        }
        Ok(OptionSource::Grouped(groups))
    }
}

/// [`OptionAccess`] for JSON records, driven by a [`FieldConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JsonFields {
    fields: FieldConfig,
}

impl JsonFields {
    /// Creates an accessor.
    #[must_use]
    pub fn new(fields: FieldConfig) -> Self {
        Self { fields }
    }

    /// The field table.
    #[must_use]
    pub fn fields(&self) -> &FieldConfig {
        &self.fields
    }

    fn equality_key(&self) -> Option<&str> {
        if self.fields.value.is_some() {
            None
        } else {
            self.fields.data_key.as_deref()
        }
    }
}

impl OptionAccess<Value> for JsonFields {
    type Value = Value;

    fn value(&self, option: &Value) -> Value {
        self.fields
            .value
            .as_deref()
            .and_then(|field| resolve(option, field))
            .unwrap_or(option)
            .clone()
    }

    fn label<'a>(&self, option: &'a Value) -> Cow<'a, str> {
        let field = self
            .fields
            .label
            .as_deref()
            .and_then(|field| resolve(option, field));
        text_of(field.unwrap_or(option))
    }

    fn is_disabled(&self, option: &Value) -> bool {
        self.fields
            .disabled
            .as_deref()
            .and_then(|field| resolve(option, field))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    fn data_key(&self, option: &Value) -> Option<String> {
        let field = resolve(option, self.fields.data_key.as_deref()?)?;
        Some(text_of(field).into_owned())
    }

    fn field_text<'a>(&self, option: &'a Value, field: &str) -> Option<Cow<'a, str>> {
        resolve(option, field).map(text_of)
    }

    fn values_equal(&self, a: &Value, b: &Value) -> bool {
        match self.equality_key() {
            Some(key) => resolve(a, key) == resolve(b, key),
            None => a == b,
        }
    }
}

fn resolve<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(direct) = record.get(path) {
        return Some(direct);
    }
    path.split('.').try_fold(record, |at, part| at.get(part))
}

fn take_field(record: &mut Value, field: &str) -> Option<Value> {
    record.as_object_mut()?.remove(field)
}

fn text_of(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

fn into_array(value: Value) -> Result<Vec<Value>, JsonSourceError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(JsonSourceError::NotAnArray {
            found: type_name(&other),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{FieldConfig, JsonFields, JsonSourceError};
    use crate::{Filter, OptionAccess, OptionRef, VisibleEntry, render_key};

    fn currency_fields() -> FieldConfig {
        serde_json::from_value(json!({
            "label": "name",
            "value": "code",
            "disabled": "delisted",
        }))
        .unwrap()
    }

    #[test]
    fn declared_fields_are_read() {
        let access = JsonFields::new(currency_fields());
        let usd = json!({ "name": "US Dollar", "code": "USD" });
        let ats = json!({ "name": "Schilling", "code": "ATS", "delisted": true });
        assert_eq!(access.value(&usd), json!("USD"));
        assert_eq!(access.label(&usd), "US Dollar");
        assert!(!access.is_disabled(&usd));
        assert!(access.is_disabled(&ats));
        assert_eq!(render_key(&access, &usd, 4), "US Dollar_4");
    }

    #[test]
    fn missing_fields_fall_back_to_the_record() {
        let access = JsonFields::new(currency_fields());
        let bare = json!("EUR");
        assert_eq!(access.value(&bare), json!("EUR"));
        assert_eq!(access.label(&bare), "EUR");

        let numeric = json!({ "code": 7 });
        assert_eq!(access.label(&numeric), r#"{"code":7}"#);
    }

    #[test]
    fn data_key_is_the_equality_key_only_without_a_value_field() {
        let keyed = JsonFields::new(FieldConfig {
            data_key: Some("id".into()),
            ..FieldConfig::default()
        });
        let a = json!({ "id": 1, "name": "old" });
        let b = json!({ "id": 1, "name": "renamed" });
        assert!(keyed.values_equal(&a, &b));
        assert_eq!(keyed.data_key(&a).as_deref(), Some("1"));

        let valued = JsonFields::new(FieldConfig {
            data_key: Some("id".into()),
            value: Some("name".into()),
            ..FieldConfig::default()
        });
        assert!(!valued.values_equal(&valued.value(&a), &valued.value(&b)));
    }

    #[test]
    fn dotted_paths_reach_nested_fields() {
        let access = JsonFields::new(FieldConfig {
            label: Some("meta.title".into()),
            ..FieldConfig::default()
        });
        let record = json!({ "meta": { "title": "Nested" } });
        assert_eq!(access.label(&record), "Nested");
    }

    #[test]
    fn grouped_documents_become_grouped_sources() {
        let fields = FieldConfig {
            label: Some("label".into()),
            group_label: Some("label".into()),
            group_children: Some("items".into()),
            ..FieldConfig::default()
        };
        let source = fields
            .source(json!([
                { "label": "Fruit", "items": [{ "label": "Apple" }, { "label": "Banana" }] },
                { "label": "Veg", "items": [{ "label": "Leek" }] },
            ]))
            .unwrap();
        assert!(source.is_grouped());
        assert_eq!(source.group(0).map(|g| g.label.as_str()), Some("Fruit"));

        let access = JsonFields::new(fields);
        let entries = Filter::new().apply(&source, &access, "ap");
        assert_eq!(
            entries,
            [
                VisibleEntry::Group {
                    group: 0,
                    child_count: 1
                },
                VisibleEntry::Option(OptionRef::grouped(0, 0)),
            ]
        );
    }

    #[test]
    fn malformed_documents_are_rejected() {
        let flat = FieldConfig::default();
        assert_eq!(
            flat.source(json!({ "not": "a list" })),
            Err(JsonSourceError::NotAnArray { found: "an object" })
        );

        let half_grouped = FieldConfig {
            group_label: Some("label".into()),
            ..FieldConfig::default()
        };
        assert_eq!(
            half_grouped.source(json!([])),
            Err(JsonSourceError::MissingChildrenField)
        );
    }
}
