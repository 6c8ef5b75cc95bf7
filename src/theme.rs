//! Brand palette for the site stylesheet
//! Built-in primary shades, optionally overridden from the site config

use serde_json::{json, Map, Value};
use std::fmt;

use crate::config::SiteConfig;

/// Files the stylesheet generator scans for class names
const CONTENT_GLOBS: &[&str] = &["./src/**/*.{html,js,svelte,ts}"];

/// Shade keys in output order
pub const SHADE_NAMES: [&str; 11] = [
    "DEFAULT", "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Primary colour scale, indexed like SHADE_NAMES
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shades([Rgb; 11]);

impl Default for Shades {
    fn default() -> Self {
        Self([
            Rgb(0xdd, 0x20, 0x6b), // DEFAULT
            Rgb(0xfe, 0xf2, 0xf7),
            Rgb(0xfe, 0xe5, 0xf0),
            Rgb(0xfc, 0xcc, 0xe3),
            Rgb(0xfa, 0xa3, 0xcd),
            Rgb(0xf6, 0x6b, 0xab),
            Rgb(0xdd, 0x20, 0x6b),
            Rgb(0xc0, 0x12, 0x52),
            Rgb(0x9f, 0x12, 0x44),
            Rgb(0x85, 0x14, 0x3c),
            Rgb(0x6d, 0x12, 0x32),
        ])
    }
}

impl Shades {
    pub fn get(&self, shade: &str) -> Option<Rgb> {
        SHADE_NAMES
            .iter()
            .position(|s| *s == shade)
            .map(|i| self.0[i])
    }

    fn set(&mut self, shade: &str, color: Rgb) -> bool {
        match SHADE_NAMES.iter().position(|s| *s == shade) {
            Some(i) => {
                self.0[i] = color;
                true
            }
            None => false,
        }
    }
}

/// Site theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub content: Vec<String>,
    pub primary: Shades,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            content: CONTENT_GLOBS.iter().map(|s| s.to_string()).collect(),
            primary: Shades::default(),
        }
    }
}

impl Theme {
    /// Built-in palette with the site config's overrides applied
    pub fn load(site: &SiteConfig) -> Self {
        let mut theme = Self::default();

        for (shade, value) in &site.theme.primary {
            let Some(color) = Self::parse_hex_color(value) else {
                tracing::warn!("Ignoring invalid colour for primary.{}: {}", shade, value);
                continue;
            };
            if !theme.primary.set(shade, color) {
                tracing::warn!("Ignoring unknown shade primary.{}", shade);
            }
        }

        theme
    }

    /// Stylesheet generator config: content globs, extended colours, no plugins
    pub fn to_tailwind_json(&self) -> Value {
        let primary: Map<String, Value> = SHADE_NAMES
            .iter()
            .filter_map(|name| {
                let color = self.primary.get(name)?;
                Some((name.to_string(), Value::String(color.to_string())))
            })
            .collect();

        json!({
            "content": self.content,
            "theme": {
                "extend": {
                    "colors": { "primary": primary }
                }
            },
            "plugins": []
        })
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    pub fn parse_hex_color(s: &str) -> Option<Rgb> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return None;
        }

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Rgb(r, g, b))
        } else {
            None
        }
    }
}
