//! Configuration types for cipher-wheel rendering.
//!
//! This module provides the configuration structures that describe a
//! wheel: the ring list, the canvas profile, and the adjustment rules.
//! All types implement [`serde::Deserialize`] so a complete wheel can
//! be loaded from an external source such as a TOML file.
//!
//! # Overview
//!
//! - [`WheelConfig`] - Top-level description of one wheel.
//! - [`RingSpec`] - One ring: its characters, radial width, and the
//!   spacing to the next ring.
//! - [`Canvas`] - Canvas sizing strategy (auto-sized pixel canvas or a
//!   fixed physical page).
//! - [`RuleSet`] - The per-character adjustment rules with their
//!   documented defaults.
//!
//! # Example
//!
//! ```
//! # use cipherwheel_core::config::WheelConfig;
//! let config = WheelConfig::dial();
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use crate::{
    error::Error,
    geometry::Point,
    glyph::SmallGlyphRule,
    notch::NotchRule,
};

/// Default margin, in canvas units, around an auto-sized wheel.
pub const DEFAULT_MARGIN: f64 = 10.0;

/// Default page width in millimeters (A4 portrait).
pub const DEFAULT_PAGE_WIDTH: f64 = 210.0;

/// Default page height in millimeters (A4 portrait).
pub const DEFAULT_PAGE_HEIGHT: f64 = 297.0;

/// Default radius of the stroked circle separating the rotor from the
/// stator on a fixed page.
pub const DEFAULT_SEPARATOR_RADIUS: f64 = 60.0;

/// Default radius of the filled center-hole marker on a fixed page.
pub const DEFAULT_HUB_RADIUS: f64 = 0.2;

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

fn default_page_width() -> f64 {
    DEFAULT_PAGE_WIDTH
}

fn default_page_height() -> f64 {
    DEFAULT_PAGE_HEIGHT
}

fn default_separator_radius() -> f64 {
    DEFAULT_SEPARATOR_RADIUS
}

fn default_hub_radius() -> f64 {
    DEFAULT_HUB_RADIUS
}

/// One ring of the wheel: an ordered character sequence, the radial
/// width of its annulus, and the clearance before the next ring.
///
/// Characters are stored as raw byte values (0–255) because they are
/// serialized as numeric character references, never as literal
/// glyphs. Ring specs are immutable: built once by configuration and
/// consumed read-only.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RingSpecToml")]
pub struct RingSpec {
    text: Vec<u8>,
    radial_width: f64,
    spacing_after: f64,
}

impl RingSpec {
    /// Creates a ring spec from raw byte values.
    pub fn from_bytes(text: Vec<u8>, radial_width: f64, spacing_after: f64) -> Self {
        Self {
            text,
            radial_width,
            spacing_after,
        }
    }

    /// Creates a ring spec from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CharOutOfRange`] if any character has a code
    /// point above 255. Out-of-range characters are rejected rather
    /// than truncated to a byte, so a wheel never silently renders a
    /// different character than was configured.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cipherwheel_core::config::RingSpec;
    /// let ring = RingSpec::from_text("ABC", 20.0, 2.0).unwrap();
    /// assert_eq!(ring.text(), b"ABC");
    ///
    /// assert!(RingSpec::from_text("А", 20.0, 2.0).is_err()); // Cyrillic A
    /// ```
    pub fn from_text(text: &str, radial_width: f64, spacing_after: f64) -> Result<Self, Error> {
        let bytes = text
            .chars()
            .map(|ch| {
                let code = u32::from(ch);
                u8::try_from(code).map_err(|_| Error::CharOutOfRange { ch, code })
            })
            .collect::<Result<Vec<u8>, Error>>()?;

        Ok(Self::from_bytes(bytes, radial_width, spacing_after))
    }

    /// Returns the character codes, one per sector.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Returns the radial width of the annulus.
    pub fn radial_width(&self) -> f64 {
        self.radial_width
    }

    /// Returns the clearance between this ring and the next one.
    pub fn spacing_after(&self) -> f64 {
        self.spacing_after
    }
}

/// Serde surface for [`RingSpec`]: text arrives as a string and is
/// validated on conversion.
#[derive(Debug, Deserialize)]
struct RingSpecToml {
    text: String,
    radial_width: f64,
    #[serde(default)]
    spacing_after: f64,
}

impl TryFrom<RingSpecToml> for RingSpec {
    type Error = Error;

    fn try_from(raw: RingSpecToml) -> Result<Self, Self::Error> {
        RingSpec::from_text(&raw.text, raw.radial_width, raw.spacing_after)
    }
}

/// Canvas sizing strategy for the rendered document.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Canvas {
    /// A square pixel canvas derived from the wheel: each side is
    /// `outer_diameter + 2·margin` and the wheel sits in the middle.
    Auto {
        #[serde(default = "default_margin")]
        margin: f64,
    },

    /// A fixed physical page in millimeters, with the wheel centered
    /// on it. The page also carries a stroked separator circle and a
    /// filled center-hole marker for cutting and mounting the disk.
    Page {
        #[serde(default = "default_page_width")]
        width: f64,
        #[serde(default = "default_page_height")]
        height: f64,
        #[serde(default = "default_separator_radius")]
        separator_radius: f64,
        #[serde(default = "default_hub_radius")]
        hub_radius: f64,
    },
}

impl Canvas {
    /// An A4 page with the default separator and hub radii.
    pub fn a4() -> Self {
        Self::Page {
            width: default_page_width(),
            height: default_page_height(),
            separator_radius: default_separator_radius(),
            hub_radius: default_hub_radius(),
        }
    }

    /// Returns the center point of the wheel on this canvas.
    pub fn center(&self, outer_diameter: f64) -> Point {
        match *self {
            Self::Auto { margin } => {
                let c = outer_diameter / 2.0 + margin;
                Point::new(c, c)
            }
            Self::Page { width, height, .. } => Point::new(width / 2.0, height / 2.0),
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::Auto {
            margin: default_margin(),
        }
    }
}

/// The per-character adjustment rules applied while composing a wheel.
///
/// Both rules default to the observed behavior: commas are enlarged
/// and pulled toward the outer edge, and the space character on the
/// second ring gets a decorative home-position notch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    small_glyph: SmallGlyphRule,
    notch: NotchRule,
}

impl RuleSet {
    /// Creates a rule set from explicit rules.
    pub fn new(small_glyph: SmallGlyphRule, notch: NotchRule) -> Self {
        Self { small_glyph, notch }
    }

    /// Returns the small-glyph placement rule.
    pub fn small_glyph(&self) -> &SmallGlyphRule {
        &self.small_glyph
    }

    /// Returns the notch annotation rule.
    pub fn notch(&self) -> &NotchRule {
        &self.notch
    }
}

/// Top-level description of one cipher wheel.
///
/// Rings are listed outermost first. The composer starts a radius
/// cursor at `outer_diameter / 2` and steps inward by each ring's
/// width plus spacing, so the ring order in the configuration is also
/// the drawing order.
#[derive(Debug, Clone, Deserialize)]
pub struct WheelConfig {
    outer_diameter: f64,
    font_size: f64,
    #[serde(default)]
    rings: Vec<RingSpec>,
    #[serde(default)]
    canvas: Canvas,
    #[serde(default)]
    rules: RuleSet,
}

impl WheelConfig {
    /// Creates a new wheel configuration.
    pub fn new(
        outer_diameter: f64,
        font_size: f64,
        rings: Vec<RingSpec>,
        canvas: Canvas,
        rules: RuleSet,
    ) -> Self {
        Self {
            outer_diameter,
            font_size,
            rings,
            canvas,
            rules,
        }
    }

    /// The built-in single-ring dial: the full substitution alphabet
    /// on one 500-pixel wheel with an auto-sized canvas.
    pub fn dial() -> Self {
        Self::new(
            500.0,
            28.0,
            vec![RingSpec::from_bytes(
                b"ABCDEFGHIJKLMNOPQRSTUVWXYZ .,&#;".to_vec(),
                80.0,
                0.0,
            )],
            Canvas::default(),
            RuleSet::default(),
        )
    }

    /// The built-in printable disk: three rings on an A4 page, sized
    /// in millimeters, with the separator circle falling into the gap
    /// between the first and second ring.
    pub fn a4() -> Self {
        Self::new(
            160.0,
            6.0,
            vec![
                RingSpec::from_bytes(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_vec(), 18.0, 4.0),
                RingSpec::from_bytes(b"abcdefghijklmnopqrstuvwxyz .".to_vec(), 10.0, 4.0),
                RingSpec::from_bytes(b"0123456789".to_vec(), 10.0, 0.0),
            ],
            Canvas::a4(),
            RuleSet::default(),
        )
    }

    /// Returns the outer diameter of the outermost ring
    pub fn outer_diameter(&self) -> f64 {
        self.outer_diameter
    }

    /// Returns the base font size
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Returns the rings, outermost first
    pub fn rings(&self) -> &[RingSpec] {
        &self.rings
    }

    /// Returns the canvas sizing strategy
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Returns the adjustment rules
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validates the configuration before any output is produced.
    ///
    /// Walks the radius cursor across all rings and checks:
    ///
    /// - `outer_diameter` and `font_size` are positive,
    /// - every radial width is positive and every spacing non-negative,
    /// - no ring's inner radius goes negative
    ///   ([`Error::RingTooWide`], reported with the ring's 1-based
    ///   ordinal and the computed radius),
    /// - no ring holds exactly one character
    ///   ([`Error::SingleCharRing`]): a lone sector would span the
    ///   full circle, which the fixed short-arc outline cannot draw.
    ///
    /// Rings with empty text are fine; they contribute no geometry but
    /// still consume their width and spacing.
    pub fn validate(&self) -> Result<(), Error> {
        if self.outer_diameter <= 0.0 {
            return Err(Error::Config(format!(
                "outer diameter must be positive, got {}",
                self.outer_diameter
            )));
        }
        if self.font_size <= 0.0 {
            return Err(Error::Config(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }

        let mut cursor = self.outer_diameter / 2.0;
        for (index, ring) in self.rings.iter().enumerate() {
            let ordinal = index + 1;

            if ring.radial_width() <= 0.0 {
                return Err(Error::Config(format!(
                    "ring {ordinal}: radial width must be positive, got {}",
                    ring.radial_width()
                )));
            }
            if ring.spacing_after() < 0.0 {
                return Err(Error::Config(format!(
                    "ring {ordinal}: spacing must be non-negative, got {}",
                    ring.spacing_after()
                )));
            }
            if ring.text().len() == 1 {
                return Err(Error::SingleCharRing { ordinal });
            }

            let inner = cursor - ring.radial_width();
            if inner < 0.0 {
                return Err(Error::RingTooWide {
                    ordinal,
                    inner_radius: inner,
                });
            }
            cursor = inner - ring.spacing_after();
        }

        Ok(())
    }
}
