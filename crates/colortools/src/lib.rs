//! Color values and their construction.
//!
//! This crate contains:
//! - The [`Color`] value type and its derived views (floats, packed words, HSI)
//! - [`ColorArg`], the single dispatcher from hex codes, names, packed words,
//!   components and `"random"` to a color
//! - The named color registry and a bounded construction cache
//! - [`ColorField`], a validating color slot for consumers

mod arg;
mod cache;
mod color;
mod config;
mod context;
mod error;
mod field;
mod hex;
mod names;

pub use arg::{ColorArg, RANDOM};
pub use cache::{CacheStats, ColorCache, LruCache, DEFAULT_CAPACITY};
pub use color::{Color, ColorOverrides};
pub use config::{CacheConfig, ColorConfig, NamesConfig};
pub use context::{color, rgb, rgba, ColorContext};
pub use error::ColorError;
pub use field::{make_color_field, ColorField, FieldValue};
pub use hex::parse_hex;
pub use names::{NamedColors, BASIC_COLORS, SVG_COLORS};
