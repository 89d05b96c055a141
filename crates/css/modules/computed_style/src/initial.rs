//! Initial styles and registered custom properties.
//! Spec: <https://www.w3.org/TR/css-properties-values-api-1/#the-registerproperty-function>

use crate::pseudo::PseudoElementType;
use crate::style::ComputedStyle;
use anyhow::{Result, bail};
use css_values::Display;
use std::collections::BTreeMap;

/// A style holding the initial value of every property.
///
/// Styles created from it share its groups, so building many fresh styles
/// allocates nothing until they are written to.
#[derive(Debug, Default)]
pub struct InitialStyle {
    style: ComputedStyle,
}

impl InitialStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn style(&self) -> &ComputedStyle {
        &self.style
    }

    /// A new style sharing every group of the initial style.
    #[inline]
    pub fn create_style(&self) -> ComputedStyle {
        self.style.clone()
    }
}

/// One custom property registered with a syntax, like `@property`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisteredCustomProperty {
    /// Name including the leading `--`.
    pub name: String,
    /// `None` for the universal syntax, which has no initial value.
    pub initial_value: Option<String>,
    pub inherits: bool,
}

impl RegisteredCustomProperty {
    pub fn new(name: impl Into<String>, initial_value: Option<&str>, inherits: bool) -> Self {
        Self {
            name: name.into(),
            initial_value: initial_value.map(str::to_owned),
            inherits,
        }
    }
}

/// Registered custom properties and the style carrying their initial values.
#[derive(Debug)]
pub struct CustomPropertyRegistry {
    properties: BTreeMap<String, RegisteredCustomProperty>,
    prototype: ComputedStyle,
}

impl CustomPropertyRegistry {
    pub fn new(initial: &InitialStyle) -> Self {
        Self {
            properties: BTreeMap::new(),
            prototype: initial.create_style(),
        }
    }

    /// Register `property` and add its initial value to the prototype style.
    ///
    /// # Errors
    /// Returns an error when the name does not start with `--` or is already
    /// registered.
    pub fn register(&mut self, property: RegisteredCustomProperty) -> Result<()> {
        if !property.name.starts_with("--") {
            bail!("custom property name `{}` must start with `--`", property.name);
        }
        if self.properties.contains_key(&property.name) {
            bail!("custom property `{}` is already registered", property.name);
        }

        log::debug!(
            target: "computed_style",
            "registering {} (inherits: {})",
            property.name,
            property.inherits
        );
        if let Some(initial_value) = &property.initial_value {
            self.prototype
                .set_custom_property_value(&property.name, initial_value, property.inherits);
        }
        self.properties.insert(property.name.clone(), property);
        Ok(())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&RegisteredCustomProperty> {
        self.properties.get(name)
    }

    /// Unregistered custom properties always inherit.
    #[inline]
    pub fn is_inherited(&self, name: &str) -> bool {
        self.properties
            .get(name)
            .is_none_or(|property| property.inherits)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredCustomProperty> {
        self.properties.values()
    }

    /// The initial style with every registered initial value applied.
    #[inline]
    pub fn initial_value_prototype_style(&self) -> &ComputedStyle {
        &self.prototype
    }
}

impl ComputedStyle {
    /// A new style holding initial values, including those of registered
    /// custom properties.
    #[inline]
    pub fn create_with_registered_initial_values(registry: &CustomPropertyRegistry) -> Self {
        registry.prototype.clone()
    }

    /// Style of an anonymous box generated inside `parent`.
    pub fn create_anonymous_style_with_display(parent: &Self, display: Display) -> Self {
        let mut style = Self::default();
        style.inherit_from(parent);
        style.inherit_unicode_bidi_from(parent);
        style.set_display(display);
        style
    }

    /// Style for a box generated inside a `::before` or `::after`
    /// pseudo-element.
    pub fn create_style_inheriting_from_pseudo_style(pseudo_style: &Self) -> Self {
        debug_assert!(
            matches!(
                pseudo_style.pseudo_element_type(),
                Some(PseudoElementType::Before | PseudoElementType::After)
            ),
            "only ::before and ::after styles generate inner boxes"
        );
        let mut style = Self::default();
        style.inherit_from(pseudo_style);
        style
    }
}
