//! colortools - inspect and convert colors from the command line.
//!
//! ```text
//! colortools [--config PATH] [--names] <COLOR>...
//! ```
//!
//! A color is a hex code (`#abc`), a name (`teal`), `random`, a packed
//! word (`0x00ff00` or `65280`) or comma-separated components (`10,20,30`).

use anyhow::Context;
use clap::Parser;
use colortools::{Color, ColorArg, ColorConfig, ColorContext};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Inspect and convert colors.
#[derive(Debug, Parser)]
#[command(name = "colortools", version)]
struct Options {
    /// Color configuration file
    #[arg(long, default_value = "colors.toml")]
    config: String,

    /// List every named color
    #[arg(long)]
    names: bool,

    /// Hex code, name, `random`, packed word or comma-separated components
    #[arg(required_unless_present = "names")]
    colors: Vec<String>,
}

/// Read a command line argument into a color argument.
fn parse_color_arg(text: &str) -> anyhow::Result<ColorArg> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        let value = u32::from_str_radix(hex, 16).with_context(|| format!("bad packed color {text}"))?;
        return Ok(ColorArg::from(value));
    }
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        let value: u32 = text.parse().with_context(|| format!("bad packed color {text}"))?;
        return Ok(ColorArg::from(value));
    }
    if text.contains(',') {
        let components = text
            .split(',')
            .map(|c| c.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("bad component list {text}"))?;
        return Ok(ColorArg::from(components));
    }
    Ok(ColorArg::parse(text))
}

fn describe(label: &str, color: Color) {
    let [r, g, b, a] = color.rgba_f();
    let [h, s, i] = color.hsi();
    println!("{label}");
    println!("  rgba    {color}");
    println!("  hex     {}", color.to_hex_rgba());
    println!("  packed  {:#08x} / {:#010x}", color.packed_rgb(), color.packed_rgba());
    println!("  float   ({r:.3}, {g:.3}, {b:.3}, {a:.3})");
    println!("  hsi     ({h:.4} rad, {s:.4}, {i:.4})");
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    info!("colortools v{}", env!("CARGO_PKG_VERSION"));

    let options = Options::parse();

    // Load configuration
    let config = ColorConfig::load(&options.config)?;
    let context = ColorContext::from_config(&config)
        .with_context(|| format!("invalid names in {}", options.config))?;
    debug!("Cache capacity: {}", config.cache.capacity);

    if options.names {
        for name in context.names().names() {
            let color = context.from_name(&name)?;
            println!("{name:<24}{}", color.to_hex_rgba());
        }
    }

    for text in &options.colors {
        let arg = parse_color_arg(text)?;
        let color = context.color(arg).with_context(|| format!("cannot read {text:?}"))?;
        describe(text, color);
    }

    let stats = context.cache_stats();
    debug!("Cache: {} hits, {} misses", stats.hits, stats.misses);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_arg() {
        assert_eq!(parse_color_arg("0x00ff00").unwrap(), ColorArg::from(0x00ff00u32));
        assert_eq!(parse_color_arg("65280").unwrap(), ColorArg::from(65280u32));
        assert_eq!(parse_color_arg("1, 2,3").unwrap(), ColorArg::from(vec![1, 2, 3]));
        assert_eq!(parse_color_arg("#abc").unwrap(), ColorArg::parse("#abc"));
        assert_eq!(parse_color_arg("random").unwrap(), ColorArg::Random);
        assert_eq!(parse_color_arg("teal").unwrap(), ColorArg::Name("teal".into()));
        assert!(parse_color_arg("0xzz").is_err());
        assert!(parse_color_arg("1,x,3").is_err());
        assert!(parse_color_arg("99999999999").is_err());
    }

    #[test]
    fn test_parse_options() {
        let options =
            Options::try_parse_from(["colortools", "--config", "my.toml", "red", "#fff"]).unwrap();
        assert_eq!(options.config, "my.toml");
        assert_eq!(options.colors, vec!["red", "#fff"]);
        assert!(!options.names);

        let options = Options::try_parse_from(["colortools", "--names"]).unwrap();
        assert!(options.names);
        assert!(options.colors.is_empty());
        assert_eq!(options.config, "colors.toml");

        assert!(Options::try_parse_from(["colortools"]).is_err());
        assert!(Options::try_parse_from(["colortools", "--config"]).is_err());
        assert!(Options::try_parse_from(["colortools", "--bogus", "red"]).is_err());
    }

    #[test]
    fn test_command_is_consistent() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }
}
