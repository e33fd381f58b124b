//! # Theming
//!
//! Widgets take their colors and class names from a [`Theme`] passed to
//! their constructor. Applications normally build one from [`crate::Config`]
//! at start-up and hand the same value to every widget:
//!
//! ```rust
//! use tether_core::*;
//!
//! let light = Theme {
//!     background: Color::WHITE,
//!     surface: Color::from_hex("#F5F5F5"),
//!     on_surface: Color::from_hex("#222222"),
//!     ..Theme::default()
//! };
//! assert_eq!(light.primary, Theme::default().primary);
//! ```

use serde::{Deserialize, Serialize};

use crate::{Color, Modifier};

/// High‑level palette plus the class prefix used on generated markup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Page background.
    pub background: Color,
    /// Default container surface (notification boxes, accordion panels).
    pub surface: Color,
    /// Foreground on top of `surface`/`background`.
    pub on_surface: Color,

    /// Accent for active accordion headers and buttons.
    pub primary: Color,
    /// Foreground on top of `primary`.
    pub on_primary: Color,

    /// Low‑emphasis outline/border color.
    pub outline: Color,
    pub error: Color,

    pub corner_radius: f32,
    pub spacing: f32,

    /// Prefix for every generated CSS class, e.g. `tether-accordion`.
    pub class_prefix: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#121212"),
            surface: Color::from_hex("#1E1E1E"),
            on_surface: Color::from_hex("#DDDDDD"),
            primary: Color::from_hex("#34AF82"),
            on_primary: Color::WHITE,
            outline: Color::from_hex("#555555"),
            error: Color::from_hex("#ae3636"),
            corner_radius: 6.0,
            spacing: 8.0,
            class_prefix: "tether".to_string(),
        }
    }
}

impl Theme {
    /// `{prefix}-{name}`.
    pub fn class(&self, name: &str) -> String {
        format!("{}-{name}", self.class_prefix)
    }

    /// Modifier for a boxed surface: background, border and padding from the palette.
    pub fn surface_box(&self) -> Modifier {
        Modifier::new()
            .background(self.surface)
            .color(self.on_surface)
            .border(1.0, self.outline, self.corner_radius)
            .padding(self.spacing)
    }
}
