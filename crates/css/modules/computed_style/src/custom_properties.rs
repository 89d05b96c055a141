//! Custom property storage.
//! Spec: <https://www.w3.org/TR/css-variables-1/>
//!
//! A style keeps two maps: inherited custom properties live with the other
//! inherited rare data, non-inherited ones (registered with `inherits: false`)
//! with the non-inherited rare data. Values are the substituted token text.

use crate::data_ref::DataRef;
use crate::diff::{PropertyGroup, StyleDifference};
use crate::style::ComputedStyle;
use std::collections::BTreeMap;

/// Name to value map of custom properties. Names include the leading `--`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomPropertyData {
    values: BTreeMap<String, String>,
}

impl CustomPropertyData {
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    #[inline]
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for CustomPropertyData {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl PropertyGroup for CustomPropertyData {
    const NAME: &'static str = "CustomPropertyData";

    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        if self.values != other.values {
            out.push(StyleDifference::new(Self::NAME, "values"));
        }
    }
}

impl ComputedStyle {
    #[inline]
    pub fn inherited_custom_properties(&self) -> &DataRef<CustomPropertyData> {
        &self.rare_inherited.custom_properties
    }

    #[inline]
    pub fn non_inherited_custom_properties(&self) -> &DataRef<CustomPropertyData> {
        &self.rare.custom_properties
    }

    /// Value of the custom property `name`, looking at the non-inherited map
    /// before the inherited one.
    pub fn custom_property_value(&self, name: &str) -> Option<&str> {
        self.rare
            .custom_properties
            .get()
            .get(name)
            .or_else(|| self.rare_inherited.custom_properties.get().get(name))
    }

    /// Store `value` for `name` in the inherited or non-inherited map.
    ///
    /// Nothing is copied when the map already holds the same value.
    ///
    /// # Returns
    /// `true` when the map changed.
    pub fn set_custom_property_value(&mut self, name: &str, value: &str, is_inherited: bool) -> bool {
        if is_inherited {
            if self.rare_inherited.custom_properties.get().get(name) == Some(value) {
                return false;
            }
            self.rare_inherited
                .access()
                .custom_properties
                .access()
                .set(name, value);
        } else {
            if self.rare.custom_properties.get().get(name) == Some(value) {
                return false;
            }
            self.rare.access().custom_properties.access().set(name, value);
        }
        true
    }

    /// Whether `name` resolves to the same value in both styles.
    pub fn custom_property_value_equal(&self, other: &Self, name: &str) -> bool {
        if self.rare.custom_properties.ptr_eq(&other.rare.custom_properties)
            && self
                .rare_inherited
                .custom_properties
                .ptr_eq(&other.rare_inherited.custom_properties)
        {
            return true;
        }
        self.custom_property_value(name) == other.custom_property_value(name)
    }

    /// Both custom property maps are equal.
    pub fn custom_properties_equal(&self, other: &Self) -> bool {
        self.rare.custom_properties == other.rare.custom_properties
            && self.rare_inherited.custom_properties == other.rare_inherited.custom_properties
    }

    /// Share `other`'s custom property maps where they hold the same values
    /// as ours but are separate instances.
    pub fn deduplicate_custom_properties(&mut self, other: &Self) {
        let inherited = &other.rare_inherited.custom_properties;
        if !self.rare_inherited.custom_properties.ptr_eq(inherited)
            && *self.rare_inherited.custom_properties == **inherited
        {
            self.rare_inherited.access().custom_properties = DataRef::clone(inherited);
        }

        let non_inherited = &other.rare.custom_properties;
        if !self.rare.custom_properties.ptr_eq(non_inherited)
            && *self.rare.custom_properties == **non_inherited
        {
            self.rare.access().custom_properties = DataRef::clone(non_inherited);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_inherited_value_shadows_inherited() {
        let mut style = ComputedStyle::default();
        style.set_custom_property_value("--gap", "4px", true);
        assert_eq!(style.custom_property_value("--gap"), Some("4px"));
        style.set_custom_property_value("--gap", "8px", false);
        assert_eq!(style.custom_property_value("--gap"), Some("8px"));
        assert_eq!(style.custom_property_value("--missing"), None);
    }

    #[test]
    fn writing_the_same_value_keeps_sharing() {
        let mut parent = ComputedStyle::default();
        parent.set_custom_property_value("--accent", "red", true);
        let mut child = parent.clone();
        assert!(!child.set_custom_property_value("--accent", "red", true));
        assert!(
            child
                .inherited_custom_properties()
                .ptr_eq(parent.inherited_custom_properties())
        );
        assert!(child.set_custom_property_value("--accent", "blue", true));
        assert_eq!(parent.custom_property_value("--accent"), Some("red"));
    }

    #[test]
    fn deduplication_rebinds_equal_maps() {
        let mut first = ComputedStyle::default();
        let mut second = ComputedStyle::default();
        first.set_custom_property_value("--size", "1em", true);
        second.set_custom_property_value("--size", "1em", true);
        assert!(
            !first
                .inherited_custom_properties()
                .ptr_eq(second.inherited_custom_properties())
        );
        assert!(first.custom_properties_equal(&second));

        first.deduplicate_custom_properties(&second);
        assert!(
            first
                .inherited_custom_properties()
                .ptr_eq(second.inherited_custom_properties())
        );
    }

    #[test]
    fn value_equality_per_name() {
        let mut first = ComputedStyle::default();
        let mut second = ComputedStyle::default();
        first.set_custom_property_value("--one", "1", true);
        second.set_custom_property_value("--one", "1", false);
        second.set_custom_property_value("--two", "2", true);
        assert!(first.custom_property_value_equal(&second, "--one"));
        assert!(!first.custom_property_value_equal(&second, "--two"));
    }
}
