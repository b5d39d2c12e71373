//! Named color registry.
//!
//! The table is seeded from the HTML 4.01 basic colors and the SVG
//! extended color list. Names are stored lower-cased and looked up
//! case-insensitively.

use std::borrow::Cow;
use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::color::Color;

/// HTML 4.01 basic colors as `(name, 0xRRGGBB, alpha)`.
///
/// These win over the extended list. `fuschia` keeps the misspelling of the
/// HTML table it was copied from; the extended list adds `fuchsia`.
pub const BASIC_COLORS: [(&str, u32, i32); 18] = [
    ("white", 0xFFFFFF, 255),
    ("silver", 0xC0C0C0, 255),
    ("gray", 0x808080, 255),
    ("black", 0x000000, 255),
    ("red", 0xFF0000, 255),
    ("maroon", 0x800000, 255),
    ("yellow", 0xFFFF00, 255),
    ("olive", 0x808000, 255),
    ("lime", 0x00FF00, 255),
    ("green", 0x008000, 255),
    ("aqua", 0x00FFFF, 255),
    ("teal", 0x008080, 255),
    ("blue", 0x0000FF, 255),
    ("navy", 0x000080, 255),
    ("fuschia", 0xFF00FF, 255),
    ("purple", 0x800080, 255),
    ("transparent", 0xFFFFFF, 0),
    ("null", 0x000000, 0),
];

/// SVG extended colors as `(name, 0xRRGGBB)`, all opaque.
///
/// See <http://www.w3.org/TR/css3-color/#svg-color>.
pub const SVG_COLORS: [(&str, u32); 147] = [
    ("aliceblue", 0xF0F8FF),
    ("antiquewhite", 0xFAEBD7),
    ("aqua", 0x00FFFF),
    ("aquamarine", 0x7FFFD4),
    ("azure", 0xF0FFFF),
    ("beige", 0xF5F5DC),
    ("bisque", 0xFFE4C4),
    ("black", 0x000000),
    ("blanchedalmond", 0xFFEBCD),
    ("blue", 0x0000FF),
    ("blueviolet", 0x8A2BE2),
    ("brown", 0xA52A2A),
    ("burlywood", 0xDEB887),
    ("cadetblue", 0x5F9EA0),
    ("chartreuse", 0x7FFF00),
    ("chocolate", 0xD2691E),
    ("coral", 0xFF7F50),
    ("cornflowerblue", 0x6495ED),
    ("cornsilk", 0xFFF8DC),
    ("crimson", 0xDC143C),
    ("cyan", 0x00FFFF),
    ("darkblue", 0x00008B),
    ("darkcyan", 0x008B8B),
    ("darkgoldenrod", 0xB8860B),
    ("darkgray", 0xA9A9A9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xA9A9A9),
    ("darkkhaki", 0xBDB76B),
    ("darkmagenta", 0x8B008B),
    ("darkolivegreen", 0x556B2F),
    ("darkorange", 0xFF8C00),
    ("darkorchid", 0x9932CC),
    ("darkred", 0x8B0000),
    ("darksalmon", 0xE9967A),
    ("darkseagreen", 0x8FBC8F),
    ("darkslateblue", 0x483D8B),
    ("darkslategray", 0x2F4F4F),
    ("darkslategrey", 0x2F4F4F),
    ("darkturquoise", 0x00CED1),
    ("darkviolet", 0x9400D3),
    ("deeppink", 0xFF1493),
    ("deepskyblue", 0x00BFFF),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1E90FF),
    ("firebrick", 0xB22222),
    ("floralwhite", 0xFFFAF0),
    ("forestgreen", 0x228B22),
    ("fuchsia", 0xFF00FF),
    ("gainsboro", 0xDCDCDC),
    ("ghostwhite", 0xF8F8FF),
    ("gold", 0xFFD700),
    ("goldenrod", 0xDAA520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xADFF2F),
    ("grey", 0x808080),
    ("honeydew", 0xF0FFF0),
    ("hotpink", 0xFF69B4),
    ("indianred", 0xCD5C5C),
    ("indigo", 0x4B0082),
    ("ivory", 0xFFFFF0),
    ("khaki", 0xF0E68C),
    ("lavender", 0xE6E6FA),
    ("lavenderblush", 0xFFF0F5),
    ("lawngreen", 0x7CFC00),
    ("lemonchiffon", 0xFFFACD),
    ("lightblue", 0xADD8E6),
    ("lightcoral", 0xF08080),
    ("lightcyan", 0xE0FFFF),
    ("lightgoldenrodyellow", 0xFAFAD2),
    ("lightgray", 0xD3D3D3),
    ("lightgreen", 0x90EE90),
    ("lightgrey", 0xD3D3D3),
    ("lightpink", 0xFFB6C1),
    ("lightsalmon", 0xFFA07A),
    ("lightseagreen", 0x20B2AA),
    ("lightskyblue", 0x87CEFA),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xB0C4DE),
    ("lightyellow", 0xFFFFE0),
    ("lime", 0x00FF00),
    ("limegreen", 0x32CD32),
    ("linen", 0xFAF0E6),
    ("magenta", 0xFF00FF),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66CDAA),
    ("mediumblue", 0x0000CD),
    ("mediumorchid", 0xBA55D3),
    ("mediumpurple", 0x9370DB),
    ("mediumseagreen", 0x3CB371),
    ("mediumslateblue", 0x7B68EE),
    ("mediumspringgreen", 0x00FA9A),
    ("mediumturquoise", 0x48D1CC),
    ("mediumvioletred", 0xC71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xF5FFFA),
    ("mistyrose", 0xFFE4E1),
    ("moccasin", 0xFFE4B5),
    ("navajowhite", 0xFFDEAD),
    ("navy", 0x000080),
    ("oldlace", 0xFDF5E6),
    ("olive", 0x808000),
    ("olivedrab", 0x6B8E23),
    ("orange", 0xFFA500),
    ("orangered", 0xFF4500),
    ("orchid", 0xDA70D6),
    ("palegoldenrod", 0xEEE8AA),
    ("palegreen", 0x98FB98),
    ("paleturquoise", 0xAFEEEE),
    ("palevioletred", 0xDB7093),
    ("papayawhip", 0xFFEFD5),
    ("peachpuff", 0xFFDAB9),
    ("peru", 0xCD853F),
    ("pink", 0xFFC0CB),
    ("plum", 0xDDA0DD),
    ("powderblue", 0xB0E0E6),
    ("purple", 0x800080),
    ("red", 0xFF0000),
    ("rosybrown", 0xBC8F8F),
    ("royalblue", 0x4169E1),
    ("saddlebrown", 0x8B4513),
    ("salmon", 0xFA8072),
    ("sandybrown", 0xF4A460),
    ("seagreen", 0x2E8B57),
    ("seashell", 0xFFF5EE),
    ("sienna", 0xA0522D),
    ("silver", 0xC0C0C0),
    ("skyblue", 0x87CEEB),
    ("slateblue", 0x6A5ACD),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xFFFAFA),
    ("springgreen", 0x00FF7F),
    ("steelblue", 0x4682B4),
    ("tan", 0xD2B48C),
    ("teal", 0x008080),
    ("thistle", 0xD8BFD8),
    ("tomato", 0xFF6347),
    ("turquoise", 0x40E0D0),
    ("violet", 0xEE82EE),
    ("wheat", 0xF5DEB3),
    ("white", 0xFFFFFF),
    ("whitesmoke", 0xF5F5F5),
    ("yellow", 0xFFFF00),
    ("yellowgreen", 0x9ACD32),
];

/// Process-wide mapping from lower-case names to colors.
#[derive(Debug)]
pub struct NamedColors {
    table: RwLock<HashMap<String, Color>>,
}

impl NamedColors {
    /// Create a registry seeded with [`BASIC_COLORS`] and [`SVG_COLORS`].
    pub fn new() -> Self {
        let names = Self::empty();
        for (name, value, alpha) in BASIC_COLORS {
            names.register(name, Color::from_packed_with_alpha(value, alpha), true);
        }
        for (name, value) in SVG_COLORS {
            names.register(name, Color::from_packed(value), false);
        }
        debug!("Seeded {} named colors", names.len());
        names
    }

    /// Create a registry with no names at all.
    pub fn empty() -> Self {
        Self {
            table: RwLock::new(HashMap::with_capacity(BASIC_COLORS.len() + SVG_COLORS.len())),
        }
    }

    /// Register `color` under `name`.
    ///
    /// An existing entry is only replaced when `force` is set. Returns
    /// whether the table changed.
    pub fn register(&self, name: &str, color: Color, force: bool) -> bool {
        let key = normalize(name).into_owned();
        let mut table = self.table.write();
        if !force && table.contains_key(&key) {
            return false;
        }
        table.insert(key, color);
        true
    }

    /// Look up a name, ignoring case.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.table.read().get(normalize(name).as_ref()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.read().contains_key(normalize(name).as_ref())
    }

    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.table.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl Default for NamedColors {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower-case `name`, borrowing when it already is.
fn normalize(name: &str) -> Cow<'_, str> {
    if name.chars().any(char::is_uppercase) {
        Cow::Owned(name.to_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_count() {
        let names = NamedColors::new();
        // 147 extended names plus `fuschia`, `transparent` and `null`.
        assert_eq!(names.len(), 150);
        assert!(!names.is_empty());
        assert!(NamedColors::empty().is_empty());
    }

    #[test]
    fn test_every_seed_resolves() {
        let names = NamedColors::new();
        for (name, value, alpha) in BASIC_COLORS {
            assert_eq!(names.get(name), Some(Color::from_packed_with_alpha(value, alpha)), "{name}");
        }
        for (name, value) in SVG_COLORS {
            let color = names.get(name).unwrap();
            assert_eq!(color.packed_rgb(), value, "{name}");
            assert_eq!(color.alpha(), 255, "{name}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        let names = NamedColors::new();
        let red = names.get("red").unwrap();
        assert_eq!(names.get("Red"), Some(red));
        assert_eq!(names.get("RED"), Some(red));
        assert!(names.contains("AliceBlue"));
        assert_eq!(names.get("nosuchcolor"), None);
    }

    #[test]
    fn test_zero_alpha_entries() {
        let names = NamedColors::new();
        assert_eq!(names.get("transparent").unwrap(), (255, 255, 255, 0));
        assert_eq!(names.get("null").unwrap(), (0, 0, 0, 0));
    }

    #[test]
    fn test_register_force() {
        let names = NamedColors::new();
        let original = names.get("red").unwrap();

        assert!(!names.register("Red", Color::new(1, 2, 3), false));
        assert_eq!(names.get("red"), Some(original));

        assert!(names.register("RED", Color::new(1, 2, 3), true));
        assert_eq!(names.get("red").unwrap(), (1, 2, 3));

        assert!(names.register("Sunset", Color::new(250, 94, 83), false));
        assert_eq!(names.get("sunset").unwrap(), (250, 94, 83));
        assert_eq!(names.len(), 151);
    }

    #[test]
    fn test_names_sorted() {
        let names = NamedColors::new().names();
        assert_eq!(names.first().map(String::as_str), Some("aliceblue"));
        assert_eq!(names.last().map(String::as_str), Some("yellowgreen"));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }
}
