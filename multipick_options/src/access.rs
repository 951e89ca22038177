// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field accessors: how values, labels, and keys are read out of an option.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::Debug;

use crate::OptionSource;

/// Reads the parts of an option that the widget cares about.
///
/// Every method must be a pure function of its arguments. Accessors that are not
/// overridden fall back to treating the whole option as the value.
pub trait OptionAccess<T> {
    /// What gets stored in the selection for an option.
    type Value: Clone + Debug;

    /// Extracts the selection value.
    fn value(&self, option: &T) -> Self::Value;

    /// Display text of the option.
    fn label<'a>(&self, option: &'a T) -> Cow<'a, str>;

    /// Whether the option rejects selection.
    fn is_disabled(&self, _option: &T) -> bool {
        false
    }

    /// A caller-declared unique key, used for render keys.
    fn data_key(&self, _option: &T) -> Option<String> {
        None
    }

    /// Text of a named field, used when filtering on fields other than the label.
    fn field_text<'a>(&self, _option: &'a T, _field: &str) -> Option<Cow<'a, str>> {
        None
    }

    /// Whether two values denote the same option.
    ///
    /// This is either structural equality or a comparison of one declared key
    /// field, never a mix. It must not change over the lifetime of a widget.
    fn values_equal(&self, a: &Self::Value, b: &Self::Value) -> bool;
}

/// Accessor for options that are their own label and value, such as strings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> OptionAccess<T> for Identity
where
    T: AsRef<str> + Clone + Debug + PartialEq,
{
    type Value = T;

    fn value(&self, option: &T) -> T {
        option.clone()
    }

    fn label<'a>(&self, option: &'a T) -> Cow<'a, str> {
        Cow::Borrowed(option.as_ref())
    }

    fn values_equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Key used by the host to reconcile rendered option rows.
///
/// Uses the declared data key when there is one, else `label_index`. The fallback
/// collides when the same label appears twice at the same position across
/// renders, and nothing here tries to avoid that.
pub fn render_key<T, A>(access: &A, option: &T, index: usize) -> String
where
    A: OptionAccess<T> + ?Sized,
{
    match access.data_key(option) {
        Some(key) => key,
        None => format!("{}_{index}", access.label(option)),
    }
}

/// Label of an option as an owned string.
pub fn label_string<T, A>(access: &A, option: &T) -> String
where
    A: OptionAccess<T> + ?Sized,
{
    access.label(option).to_string()
}

/// Label of the option whose value equals `value`, searched over the whole source.
///
/// Selected values are labelled even while the filter hides their options.
/// Returns `None` when no option carries the value, which happens for initial
/// values whose options have not arrived yet.
pub fn label_of_value<'a, T, A>(
    source: &'a OptionSource<T>,
    access: &A,
    value: &A::Value,
) -> Option<Cow<'a, str>>
where
    A: OptionAccess<T> + ?Sized,
{
    source
        .options()
        .map(|(_, option)| option)
        .find(|option| access.values_equal(&access.value(option), value))
        .map(|option| access.label(option))
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::{String, ToString};
    use alloc::vec;

    use super::{Identity, OptionAccess, label_of_value, render_key};
    use crate::{OptionGroup, OptionSource};

    #[derive(Clone, Debug, PartialEq)]
    struct Currency {
        code: &'static str,
        name: &'static str,
        delisted: bool,
    }

    struct ByCode;

    impl OptionAccess<Currency> for ByCode {
        type Value = &'static str;

        fn value(&self, option: &Currency) -> &'static str {
            option.code
        }

        fn label<'a>(&self, option: &'a Currency) -> Cow<'a, str> {
            Cow::Borrowed(option.name)
        }

        fn is_disabled(&self, option: &Currency) -> bool {
            option.delisted
        }

        fn data_key(&self, option: &Currency) -> Option<String> {
            Some(option.code.to_string())
        }

        fn values_equal(&self, a: &&'static str, b: &&'static str) -> bool {
            a == b
        }
    }

    #[test]
    fn identity_uses_the_whole_option() {
        let option = String::from("Apple");
        assert_eq!(Identity.value(&option), "Apple");
        assert_eq!(Identity.label(&option), "Apple");
        assert!(!OptionAccess::<String>::is_disabled(&Identity, &option));
        assert_eq!(render_key(&Identity, &option, 3), "Apple_3");
    }

    #[test]
    fn declared_fields_drive_value_label_and_key() {
        let usd = Currency {
            code: "USD",
            name: "US Dollar",
            delisted: false,
        };
        assert_eq!(ByCode.value(&usd), "USD");
        assert_eq!(ByCode.label(&usd), "US Dollar");
        assert_eq!(render_key(&ByCode, &usd, 9), "USD");
    }

    #[test]
    fn duplicate_labels_share_a_fallback_key_shape() {
        // Same label at the same index yields the same key; this is accepted.
        let a = "Apple";
        let b = "Apple";
        assert_eq!(render_key(&Identity, &a, 0), render_key(&Identity, &b, 0));
    }

    #[test]
    fn labels_are_found_across_groups() {
        let usd = Currency {
            code: "USD",
            name: "US Dollar",
            delisted: false,
        };
        let ats = Currency {
            code: "ATS",
            name: "Schilling",
            delisted: true,
        };
        let source = OptionSource::grouped(vec![
            OptionGroup::new("Major", vec![usd]),
            OptionGroup::new("Old", vec![ats]),
        ]);
        assert_eq!(
            label_of_value(&source, &ByCode, &"ATS").as_deref(),
            Some("Schilling")
        );
        assert_eq!(label_of_value(&source, &ByCode, &"XXX"), None);
    }
}
