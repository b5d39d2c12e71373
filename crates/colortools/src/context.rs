//! Shared construction context.
//!
//! A [`ColorContext`] owns the named-color registry and the construction
//! cache. Code that wants isolation (tests, tools with their own
//! palettes) builds its own; everything else goes through
//! [`ColorContext::global`].

use std::sync::OnceLock;

use tracing::{info, warn};

use crate::arg::ColorArg;
use crate::cache::{CacheStats, ColorCache};
use crate::color::Color;
use crate::config::ColorConfig;
use crate::error::ColorError;
use crate::names::NamedColors;

static GLOBAL: OnceLock<ColorContext> = OnceLock::new();

/// Registry plus cache.
#[derive(Debug, Default)]
pub struct ColorContext {
    names: NamedColors,
    cache: ColorCache,
}

impl ColorContext {
    /// Create a context with the built-in names and the default cache size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with the built-in names and a cache of `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: NamedColors::new(),
            cache: ColorCache::new(capacity),
        }
    }

    /// Create a context from configuration.
    ///
    /// Extra names are registered in name order and may refer to
    /// built-in names.
    pub fn from_config(config: &ColorConfig) -> Result<Self, ColorError> {
        let context = Self::with_capacity(config.cache.capacity);
        for (name, value) in &config.names.entries {
            let color = ColorArg::parse(value)
                .resolve(&context.names)
                .inspect_err(|e| warn!("Bad color for name {name:?}: {e}"))?;
            if !context.names.register(name, color, config.names.override_builtin) {
                info!("Keeping built-in color for {name:?}");
            }
        }
        Ok(context)
    }

    /// The process-wide context, seeded on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Install `context` as the process-wide context.
    ///
    /// Fails, handing the context back, once the global has been
    /// initialized, including by an earlier call to [`ColorContext::global`].
    pub fn install(context: Self) -> Result<&'static Self, Self> {
        GLOBAL.set(context)?;
        Ok(Self::global())
    }

    pub fn names(&self) -> &NamedColors {
        &self.names
    }

    /// Build a color, reusing earlier results for identical arguments.
    pub fn color(&self, arg: impl Into<ColorArg>) -> Result<Color, ColorError> {
        let arg = arg.into();
        self.cache
            .get_or_try_insert_with(&arg, |arg| arg.resolve(&self.names))
    }

    /// Build a color without touching the cache.
    pub fn resolve(&self, arg: impl Into<ColorArg>) -> Result<Color, ColorError> {
        arg.into().resolve(&self.names)
    }

    pub fn from_name(&self, name: &str) -> Result<Color, ColorError> {
        Color::from_name(name, &self.names)
    }

    /// Register a name. See [`NamedColors::register`].
    pub fn register_name(&self, name: &str, color: Color, force: bool) -> bool {
        self.names.register(name, color, force)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// `(red, green, blue)` of `arg`, or of black when `arg` is `None`.
    pub fn rgb(&self, arg: Option<impl Into<ColorArg>>) -> Result<[i32; 3], ColorError> {
        self.rgba(arg).map(|[r, g, b, _]| [r, g, b])
    }

    /// `(red, green, blue, alpha)` of `arg`, or of black when `arg` is `None`.
    pub fn rgba(&self, arg: Option<impl Into<ColorArg>>) -> Result<[i32; 4], ColorError> {
        match arg {
            Some(arg) => self.color(arg).map(|c| c.rgba()),
            None => Ok(Color::default().rgba()),
        }
    }
}

/// Build a color through the global context's cache.
///
/// ```
/// let teal = colortools::color("teal").unwrap();
/// assert_eq!(teal, (0, 128, 128));
/// ```
pub fn color(arg: impl Into<ColorArg>) -> Result<Color, ColorError> {
    ColorContext::global().color(arg)
}

/// See [`ColorContext::rgb`].
pub fn rgb(arg: Option<impl Into<ColorArg>>) -> Result<[i32; 3], ColorError> {
    ColorContext::global().rgb(arg)
}

/// See [`ColorContext::rgba`].
pub fn rgba(arg: Option<impl Into<ColorArg>>) -> Result<[i32; 4], ColorError> {
    ColorContext::global().rgba(arg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_named_roundtrip_through_hex() {
        let ctx = ColorContext::new();
        for name in ctx.names().names() {
            let named = ctx.from_name(&name).unwrap();
            assert_eq!(Color::from_hex(&named.to_hex_rgba()).unwrap(), named, "{name}");
            assert_eq!(ctx.color(named.to_hex_rgba()).unwrap(), named, "{name}");
        }
    }

    #[test]
    fn test_case_insensitive_names() {
        let ctx = ColorContext::new();
        let red = ctx.color("red").unwrap();
        assert_eq!(ctx.color("Red").unwrap(), red);
        assert_eq!(ctx.color("RED").unwrap(), red);
    }

    #[test]
    fn test_documented_examples() {
        let ctx = ColorContext::new();
        assert_eq!(ctx.color("#FF0000FF").unwrap().rgba(), [255, 0, 0, 255]);
        assert_eq!(ctx.color("transparent").unwrap().rgba(), [255, 255, 255, 0]);
        assert_eq!(ctx.color(0x00FF00u32).unwrap().rgba(), [0, 255, 0, 255]);
        assert_eq!(
            ctx.color("no such color"),
            Err(ColorError::UnknownColorName("no such color".to_string()))
        );
    }

    #[test]
    fn test_cache_transparency() {
        let cached = ColorContext::new();
        let uncached = ColorContext::with_capacity(0);
        for arg in ["#abc", "#abcd", "olive", "#10203040"] {
            let a = cached.color(arg).unwrap();
            let b = cached.color(arg).unwrap();
            let c = uncached.color(arg).unwrap();
            assert_eq!(a, b);
            assert_eq!(a, c);
        }
        // Names skip the cache.
        assert_eq!(cached.cache_stats().hits, 3);
        assert_eq!(uncached.cache_stats().len, 0);
    }

    #[test]
    fn test_random_is_not_memoized() {
        let ctx = ColorContext::new();
        let distinct: std::collections::HashSet<Color> =
            (0..64).map(|_| ctx.color("random").unwrap()).collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_register_name() {
        let ctx = ColorContext::new();
        assert!(ctx.register_name("Brand", Color::new(12, 34, 56), false));
        assert_eq!(ctx.color("brand").unwrap(), (12, 34, 56));
        assert!(!ctx.register_name("white", Color::new(0, 0, 0), false));
        assert_eq!(ctx.color("white").unwrap(), (255, 255, 255));
    }

    #[test]
    fn test_forced_registration_after_lookup() {
        let ctx = ColorContext::new();
        assert_eq!(ctx.color("red").unwrap(), (255, 0, 0));
        assert_eq!(ctx.color("Red").unwrap(), (255, 0, 0));

        assert!(ctx.register_name("red", Color::new(1, 2, 3), true));
        assert_eq!(ctx.color("red").unwrap(), (1, 2, 3));
        assert_eq!(ctx.color("RED").unwrap(), ctx.from_name("red").unwrap());

        // Registering straight on the registry is seen as well.
        ctx.names().register("red", Color::new(4, 5, 6), true);
        assert_eq!(ctx.color("red").unwrap(), (4, 5, 6));
    }

    #[test]
    fn test_rgb_helpers() {
        let ctx = ColorContext::new();
        assert_eq!(ctx.rgb(Some("#102030")).unwrap(), [16, 32, 48]);
        assert_eq!(ctx.rgba(Some("null")).unwrap(), [0, 0, 0, 0]);
        assert_eq!(ctx.rgb(None::<ColorArg>).unwrap(), [0, 0, 0]);
        assert_eq!(ctx.rgba(None::<&str>).unwrap(), [0, 0, 0, 255]);
        assert!(ctx.rgb(Some("#1")).is_err());
    }

    #[test]
    fn test_from_config() {
        let config = ColorConfig::from_toml(
            r##"
            [cache]
            capacity = 8

            [names.entries]
            sky = "#87ceeb"
            shadow = "null"
            white = "#000"
            "##,
        )
        .unwrap();
        let ctx = ColorContext::from_config(&config).unwrap();
        assert_eq!(ctx.color("Sky").unwrap(), (135, 206, 235));
        assert_eq!(ctx.color("shadow").unwrap(), (0, 0, 0, 0));
        // Built-ins are kept unless the config asks to override them.
        assert_eq!(ctx.color("white").unwrap(), (255, 255, 255));
        assert_eq!(ctx.cache_stats().capacity, 8);
    }

    #[test]
    fn test_from_config_override() {
        let config = ColorConfig::from_toml(
            r##"
            [names]
            override = true
            entries = { white = "#eee" }
            "##,
        )
        .unwrap();
        let ctx = ColorContext::from_config(&config).unwrap();
        assert_eq!(ctx.color("white").unwrap(), (0xee, 0xee, 0xee));
    }

    #[test]
    fn test_from_config_bad_entry() {
        let config = ColorConfig::from_toml("[names.entries]\nbroken = \"#12\"\n").unwrap();
        assert_eq!(
            ColorContext::from_config(&config).unwrap_err(),
            ColorError::InvalidFormat("#12".to_string())
        );
    }

    #[test]
    fn test_global_helpers() {
        assert_eq!(color("Teal").unwrap(), (0, 128, 128));
        assert_eq!(rgb(Some((1, 2, 3))).unwrap(), [1, 2, 3]);
        assert_eq!(rgba(Some([1, 2, 3, 4])).unwrap(), [1, 2, 3, 4]);
        assert!(std::ptr::eq(ColorContext::global(), ColorContext::global()));
        assert!(ColorContext::install(ColorContext::new()).is_err());
    }

    #[test]
    fn test_concurrent_use() {
        let ctx = Arc::new(ColorContext::with_capacity(16));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let ctx = Arc::clone(&ctx);
                thread::spawn(move || {
                    for i in 0..500 {
                        let v = (i * 7 + t) % 64;
                        assert_eq!(ctx.color((v, v, v)).unwrap(), (v, v, v));
                        assert_eq!(ctx.color("coral").unwrap(), (255, 127, 80));
                        if i % 100 == 0 {
                            ctx.register_name(&format!("t{t}-{i}"), Color::new(t, i, 0), false);
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(ctx.cache_stats().len <= 16);
        assert_eq!(ctx.from_name("T3-200").unwrap(), (3, 200, 0));
    }
}
