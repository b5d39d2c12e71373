//! Color construction arguments.
//!
//! Every way of describing a color is one [`ColorArg`] variant, and
//! [`ColorArg::resolve`] is the single dispatcher that turns it into a
//! [`Color`].

use crate::color::Color;
use crate::error::ColorError;
use crate::names::NamedColors;

/// String that produces a random color instead of a name lookup.
pub const RANDOM: &str = "random";

/// A description of a color, before it is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorArg {
    /// An existing color, copied as is.
    Color(Color),
    /// Positional red, green, blue and optional alpha.
    Components(i32, i32, i32, Option<i32>),
    /// A sequence of 3 or 4 components.
    Sequence(Vec<i32>),
    /// A `#`-prefixed hex code, with the alpha for codes that lack one.
    Hex { code: String, alpha: Option<i32> },
    /// A random opaque color.
    Random,
    /// A registry name.
    Name(String),
    /// A `0xRRGGBB` word.
    Packed { value: u32, alpha: Option<i32> },
}

impl ColorArg {
    /// Classify a string: `#...` is hex, `random` is random, anything else is a name.
    pub fn parse(value: &str) -> Self {
        if value.starts_with('#') {
            Self::Hex {
                code: value.to_string(),
                alpha: None,
            }
        } else if value == RANDOM {
            Self::Random
        } else {
            Self::Name(value.to_string())
        }
    }

    /// Attach an explicit alpha.
    ///
    /// Only hex codes, packed words and positional components take one.
    pub fn with_alpha(self, alpha: i32) -> Result<Self, ColorError> {
        match self {
            Self::Hex { code, .. } => Ok(Self::Hex {
                code,
                alpha: Some(alpha),
            }),
            Self::Packed { value, .. } => Ok(Self::Packed {
                value,
                alpha: Some(alpha),
            }),
            Self::Components(r, g, b, _) => Ok(Self::Components(r, g, b, Some(alpha))),
            other => Err(ColorError::InvalidArguments(format!(
                "alpha cannot be applied to {other:?}"
            ))),
        }
    }

    /// Whether repeated resolution of this argument yields the same color.
    ///
    /// Names are excluded: the registry can change under them, and a
    /// lookup is already a single hash probe.
    pub fn is_cacheable(&self) -> bool {
        !matches!(self, Self::Random | Self::Color(_) | Self::Name(_))
    }

    /// Build the color this argument describes.
    pub fn resolve(&self, names: &NamedColors) -> Result<Color, ColorError> {
        match self {
            Self::Color(color) => Ok(*color),
            Self::Components(r, g, b, a) => Ok(Color::from_rgba(*r, *g, *b, a.unwrap_or(255))),
            Self::Sequence(components) => match components.as_slice() {
                &[r, g, b] => Ok(Color::new(r, g, b)),
                &[r, g, b, a] => Ok(Color::from_rgba(r, g, b, a)),
                other => Err(ColorError::InvalidArguments(format!(
                    "expected 3 or 4 components, got {}",
                    other.len()
                ))),
            },
            Self::Hex { code, alpha } => Color::from_hex_with_alpha(code, alpha.unwrap_or(255)),
            Self::Random => Ok(Color::random()),
            Self::Name(name) => Color::from_name(name, names),
            Self::Packed { value, alpha } => {
                Ok(Color::from_packed_with_alpha(*value, alpha.unwrap_or(255)))
            }
        }
    }
}

impl From<Color> for ColorArg {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<(i32, i32, i32)> for ColorArg {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Self::Components(r, g, b, None)
    }
}

impl From<(i32, i32, i32, i32)> for ColorArg {
    fn from((r, g, b, a): (i32, i32, i32, i32)) -> Self {
        Self::Components(r, g, b, Some(a))
    }
}

impl From<[i32; 3]> for ColorArg {
    fn from([r, g, b]: [i32; 3]) -> Self {
        Self::Components(r, g, b, None)
    }
}

impl From<[i32; 4]> for ColorArg {
    fn from([r, g, b, a]: [i32; 4]) -> Self {
        Self::Components(r, g, b, Some(a))
    }
}

impl From<Vec<i32>> for ColorArg {
    fn from(components: Vec<i32>) -> Self {
        Self::Sequence(components)
    }
}

impl From<&[i32]> for ColorArg {
    fn from(components: &[i32]) -> Self {
        Self::Sequence(components.to_vec())
    }
}

impl From<&str> for ColorArg {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for ColorArg {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<u32> for ColorArg {
    fn from(value: u32) -> Self {
        Self::Packed { value, alpha: None }
    }
}
