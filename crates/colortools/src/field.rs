//! Validating color slots for objects that store colors.
//!
//! A [`ColorField`] accepts anything a color can be built from and
//! always holds a resolved [`Color`], so consumers never see raw
//! strings or tuples.

use crate::arg::ColorArg;
use crate::color::Color;
use crate::context::ColorContext;
use crate::error::ColorError;

/// A value assigned to a [`ColorField`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Reset to the field's default.
    Unset,
    /// Store this color as is.
    Color(Color),
    /// Resolve this argument first.
    Arg(ColorArg),
}

impl From<Color> for FieldValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<ColorArg> for FieldValue {
    fn from(arg: ColorArg) -> Self {
        Self::Arg(arg)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}

macro_rules! field_value_from_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::Arg(ColorArg::from(value))
                }
            }
        )*
    };
}

field_value_from_arg!(
    &str,
    String,
    u32,
    Vec<i32>,
    [i32; 3],
    [i32; 4],
    (i32, i32, i32),
    (i32, i32, i32, i32),
);

/// A named, settable color attribute with an optional default.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorField {
    name: String,
    default: Option<Color>,
    /// Outer `Some` once assigned; the inner value may still be `None`
    /// when the field was reset without a default.
    value: Option<Option<Color>>,
}

impl ColorField {
    /// Create a field, resolving `default` through the global context.
    pub fn new(name: impl Into<String>, default: Option<ColorArg>) -> Result<Self, ColorError> {
        Self::with_context(name, default, ColorContext::global())
    }

    pub fn with_context(
        name: impl Into<String>,
        default: Option<ColorArg>,
        context: &ColorContext,
    ) -> Result<Self, ColorError> {
        let default = default.map(|arg| context.color(arg)).transpose()?;
        Ok(Self {
            name: name.into(),
            default,
            value: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored color, falling back to the default.
    pub fn get(&self) -> Option<Color> {
        self.value.unwrap_or(self.default)
    }

    pub fn default_color(&self) -> Option<Color> {
        self.default
    }

    /// Whether a value has been assigned since creation or the last [`ColorField::clear`].
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Assign a value, resolving it through the global context.
    ///
    /// On error the previous value is kept.
    pub fn set(&mut self, value: impl Into<FieldValue>) -> Result<(), ColorError> {
        self.set_with(value, ColorContext::global())
    }

    pub fn set_with(
        &mut self,
        value: impl Into<FieldValue>,
        context: &ColorContext,
    ) -> Result<(), ColorError> {
        self.value = Some(match value.into() {
            FieldValue::Unset => self.default,
            FieldValue::Color(color) => Some(color),
            FieldValue::Arg(arg) => Some(context.color(arg)?),
        });
        Ok(())
    }

    /// Drop the stored value so [`ColorField::get`] returns the default again.
    pub fn clear(&mut self) -> Result<(), ColorError> {
        match self.value.take() {
            Some(_) => Ok(()),
            None => Err(ColorError::UnsetField(self.name.clone())),
        }
    }
}

/// Build a [`ColorField`] named `name` with an optional default.
pub fn make_color_field(
    name: impl Into<String>,
    default: Option<impl Into<ColorArg>>,
) -> Result<ColorField, ColorError> {
    ColorField::new(name, default.map(Into::into))
}
