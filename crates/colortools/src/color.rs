//! The color value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::slice::SliceIndex;

use rand::Rng;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::arg::ColorArg;
use crate::error::ColorError;
use crate::hex::parse_hex;
use crate::names::NamedColors;

const RED: usize = 0;
const GREEN: usize = 1;
const BLUE: usize = 2;
const ALPHA: usize = 3;

/// An RGBA color.
///
/// Components are meant to live in `0..=255` but are stored as given:
/// construction never clamps, so out-of-range and negative values
/// survive untouched. A `Color` is never mutated after it is built.
///
/// Equality against plain arrays and tuples is arity tolerant: a
/// 3-component value matches when the color is fully opaque.
///
/// ```
/// use colortools::Color;
///
/// assert_eq!(Color::from_rgba(10, 20, 30, 255), (10, 20, 30));
/// assert_ne!(Color::from_rgba(10, 20, 30, 128), (10, 20, 30));
/// ```
///
/// `Hash` goes through [`Color::packed_rgba`], so a `HashSet<Color>` will
/// not find a color by a 3-tuple that compares equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    components: [i32; 4],
}

/// Component overrides for [`Color::copy_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    pub red: Option<i32>,
    pub green: Option<i32>,
    pub blue: Option<i32>,
    pub alpha: Option<i32>,
}

impl Color {
    /// Create an opaque color.
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self::from_rgba(red, green, blue, 255)
    }

    pub const fn from_rgba(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        Self {
            components: [red, green, blue, alpha],
        }
    }

    /// Parse a `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` code.
    pub fn from_hex(code: &str) -> Result<Self, ColorError> {
        Self::from_hex_with_alpha(code, 255)
    }

    /// Parse a hex code, using `alpha` for the forms that have no alpha digits.
    pub fn from_hex_with_alpha(code: &str, alpha: i32) -> Result<Self, ColorError> {
        parse_hex(code, alpha).map(|components| Self { components })
    }

    /// Look up a color by name, ignoring case.
    pub fn from_name(name: &str, names: &NamedColors) -> Result<Self, ColorError> {
        names
            .get(name)
            .ok_or_else(|| ColorError::UnknownColorName(name.to_string()))
    }

    /// Unpack a `0xRRGGBB` word into an opaque color.
    pub const fn from_packed(value: u32) -> Self {
        Self::from_packed_with_alpha(value, 255)
    }

    /// Unpack a `0xRRGGBB` word. Bits above the low 24 are ignored.
    pub const fn from_packed_with_alpha(value: u32, alpha: i32) -> Self {
        Self::from_rgba(
            ((value >> 16) & 0xff) as i32,
            ((value >> 8) & 0xff) as i32,
            (value & 0xff) as i32,
            alpha,
        )
    }

    /// A random opaque color.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// A random opaque color drawn from `rng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.random_range(0..=255),
            rng.random_range(0..=255),
            rng.random_range(0..=255),
        )
    }

    #[inline]
    pub const fn red(&self) -> i32 {
        self.components[RED]
    }

    #[inline]
    pub const fn green(&self) -> i32 {
        self.components[GREEN]
    }

    #[inline]
    pub const fn blue(&self) -> i32 {
        self.components[BLUE]
    }

    /// Alpha component (0 is transparent, 255 is solid).
    #[inline]
    pub const fn alpha(&self) -> i32 {
        self.components[ALPHA]
    }

    #[inline]
    pub const fn rgb(&self) -> [i32; 3] {
        [self.red(), self.green(), self.blue()]
    }

    #[inline]
    pub const fn rgba(&self) -> [i32; 4] {
        self.components
    }

    /// RGB normalized to `0.0..=1.0`.
    pub fn rgb_f(&self) -> [f64; 3] {
        self.rgb().map(|c| f64::from(c) / 255.0)
    }

    /// RGBA normalized to `0.0..=1.0`.
    pub fn rgba_f(&self) -> [f64; 4] {
        self.components.map(|c| f64::from(c) / 255.0)
    }

    /// RGB packed as `0xRRGGBB`.
    ///
    /// Out-of-range components wrap into their neighbours.
    pub const fn packed_rgb(&self) -> u32 {
        ((self.red() as u32) << 16)
            .wrapping_add((self.green() as u32) << 8)
            .wrapping_add(self.blue() as u32)
    }

    /// RGBA packed as `0xRRGGBBAA`.
    pub const fn packed_rgba(&self) -> u32 {
        (self.packed_rgb() << 8).wrapping_add(self.alpha() as u32)
    }

    /// `#rrggbb`, dropping alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.packed_rgb() & 0x00ff_ffff)
    }

    /// `#rrggbbaa`.
    pub fn to_hex_rgba(&self) -> String {
        format!("#{:08x}", self.packed_rgba())
    }

    /// Hue (radians), saturation and intensity.
    ///
    /// With `r`, `g`, `b` normalized to `0..=1`:
    ///
    /// * `I = (r + g + b) / 3`
    /// * `S = 1 - min(r, g, b) / I`, and `0` for black
    /// * `H = acos(((r - g) + (r - b)) / 2) / sqrt((r - b)² + (r - b)(g - b))`
    ///
    /// The hue denominator vanishes for grays (`r == g == b`) and the
    /// radicand can go negative; both cases give a hue of `0`.
    pub fn hsi(&self) -> [f64; 3] {
        let [r, g, b] = self.rgb_f();

        let intensity = (r + g + b) / 3.0;
        let saturation = if intensity == 0.0 {
            0.0
        } else {
            1.0 - r.min(g).min(b) / intensity
        };

        let radicand = (r - b) * (r - b) + (r - b) * (g - b);
        let hue = if radicand > 0.0 {
            (((r - g) + (r - b)) / 2.0).clamp(-1.0, 1.0).acos() / radicand.sqrt()
        } else {
            0.0
        };

        [hue, saturation, intensity]
    }

    /// [`Color::hsi`] with the normalized alpha appended.
    pub fn hsia(&self) -> [f64; 4] {
        let [h, s, i] = self.hsi();
        [h, s, i, f64::from(self.alpha()) / 255.0]
    }

    /// [`Color::hsi`] with every element divided by 255.
    pub fn hsi_f(&self) -> [f64; 3] {
        self.hsi().map(|x| x / 255.0)
    }

    /// [`Color::hsia`] with every element divided by 255.
    pub fn hsia_f(&self) -> [f64; 4] {
        self.hsia().map(|x| x / 255.0)
    }

    /// Copy this color, replacing the components set in `overrides`.
    pub fn copy_with(&self, overrides: ColorOverrides) -> Self {
        Self::from_rgba(
            overrides.red.unwrap_or(self.red()),
            overrides.green.unwrap_or(self.green()),
            overrides.blue.unwrap_or(self.blue()),
            overrides.alpha.unwrap_or(self.alpha()),
        )
    }

    /// Copy this color, replacing components by name.
    ///
    /// Accepted keys are `red`, `green`, `blue` and `alpha`.
    pub fn copy_with_named(&self, overrides: &[(&str, i32)]) -> Result<Self, ColorError> {
        let mut components = self.components;
        for &(key, value) in overrides {
            let slot = match key {
                "red" => RED,
                "green" => GREEN,
                "blue" => BLUE,
                "alpha" => ALPHA,
                _ => return Err(ColorError::InvalidOverride(key.to_string())),
            };
            components[slot] = value;
        }
        Ok(Self { components })
    }

    #[inline]
    pub const fn with_red(self, red: i32) -> Self {
        Self::from_rgba(red, self.green(), self.blue(), self.alpha())
    }

    #[inline]
    pub const fn with_green(self, green: i32) -> Self {
        Self::from_rgba(self.red(), green, self.blue(), self.alpha())
    }

    #[inline]
    pub const fn with_blue(self, blue: i32) -> Self {
        Self::from_rgba(self.red(), self.green(), blue, self.alpha())
    }

    #[inline]
    pub const fn with_alpha(self, alpha: i32) -> Self {
        Self::from_rgba(self.red(), self.green(), self.blue(), alpha)
    }

    /// Component at `index`, counting from the end when negative.
    pub fn get(&self, index: isize) -> Option<i32> {
        let index = if index < 0 { index + 4 } else { index };
        usize::try_from(index)
            .ok()
            .and_then(|i| self.components.get(i).copied())
    }

    /// Always 4.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        4
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.components.iter()
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.packed_rgba().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.components;
        write!(f, "Color({r}, {g}, {b}, {a})")
    }
}

impl<I: SliceIndex<[i32]>> Index<I> for Color {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.components[index]
    }
}

impl IntoIterator for Color {
    type Item = i32;
    type IntoIter = std::array::IntoIter<i32, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a> IntoIterator for &'a Color {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Conversions

impl From<[i32; 4]> for Color {
    fn from(components: [i32; 4]) -> Self {
        Self { components }
    }
}

impl From<[i32; 3]> for Color {
    fn from([r, g, b]: [i32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(i32, i32, i32, i32)> for Color {
    fn from((r, g, b, a): (i32, i32, i32, i32)) -> Self {
        Self::from_rgba(r, g, b, a)
    }
}

impl From<(i32, i32, i32)> for Color {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [i32; 4] {
    fn from(color: Color) -> Self {
        color.components
    }
}

// Arity tolerant equality

impl PartialEq<[i32; 4]> for Color {
    fn eq(&self, other: &[i32; 4]) -> bool {
        self.components == *other
    }
}

impl PartialEq<[i32; 3]> for Color {
    fn eq(&self, other: &[i32; 3]) -> bool {
        self.alpha() == 255 && self.rgb() == *other
    }
}

impl PartialEq<(i32, i32, i32, i32)> for Color {
    fn eq(&self, &(r, g, b, a): &(i32, i32, i32, i32)) -> bool {
        *self == [r, g, b, a]
    }
}

impl PartialEq<(i32, i32, i32)> for Color {
    fn eq(&self, &(r, g, b): &(i32, i32, i32)) -> bool {
        *self == [r, g, b]
    }
}

impl PartialEq<Color> for [i32; 4] {
    fn eq(&self, other: &Color) -> bool {
        other == self
    }
}

impl PartialEq<Color> for [i32; 3] {
    fn eq(&self, other: &Color) -> bool {
        other == self
    }
}

impl PartialEq<Color> for (i32, i32, i32, i32) {
    fn eq(&self, other: &Color) -> bool {
        other == self
    }
}

impl PartialEq<Color> for (i32, i32, i32) {
    fn eq(&self, other: &Color) -> bool {
        other == self
    }
}

// Serde: written as `#rrggbbaa`, read from anything the dispatcher accepts.

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_rgba())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ColorVisitor)
    }
}

struct ColorVisitor;

impl ColorVisitor {
    fn resolve<E: de::Error>(arg: ColorArg) -> Result<Color, E> {
        crate::context::color(arg).map_err(E::custom)
    }
}

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a hex code, a color name, a packed integer or 3-4 components")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Color, E> {
        Self::resolve(ColorArg::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Color, E> {
        let value = u32::try_from(value)
            .map_err(|_| E::custom(format!("packed color out of range: {value:#x}")))?;
        Self::resolve(ColorArg::from(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Color, E> {
        let value = u64::try_from(value)
            .map_err(|_| E::custom(format!("packed color must not be negative: {value}")))?;
        self.visit_u64(value)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Color, A::Error> {
        let mut components = Vec::with_capacity(4);
        while let Some(c) = seq.next_element::<i32>()? {
            components.push(c);
        }
        Self::resolve(ColorArg::Sequence(components))
    }
}
