//! Glyph anchoring and rotation within ring sectors.
//!
//! Each character sits at its sector's angular midpoint, rotated so
//! the baseline reads tangentially with "up" pointing away from the
//! wheel center. The anchor radius is normally the ring midline; the
//! [`SmallGlyphRule`] overrides both radius and size for one
//! punctuation character whose glyph is too small to read at the
//! default placement.

use serde::Deserialize;

use crate::{
    geometry::{Point, project},
    layout::Sector,
};

fn default_small_glyph_code() -> u8 {
    b','
}

fn default_radius_weight() -> f64 {
    7.0
}

fn default_font_scale() -> f64 {
    2.0
}

/// Placement override for a visually small glyph.
///
/// When a character matches `code`, its anchor radius becomes the
/// weighted mean `(weight·outer + inner) / (weight + 1)` instead of
/// the ring midline, and its font size is multiplied by `font_scale`.
/// With the default weight of 7 the glyph is pulled sharply toward the
/// outer edge, giving the enlarged comma room to render inside the
/// annulus.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SmallGlyphRule {
    code: u8,
    radius_weight: f64,
    font_scale: f64,
}

impl SmallGlyphRule {
    /// Creates a rule for the given character code.
    pub fn new(code: u8, radius_weight: f64, font_scale: f64) -> Self {
        Self {
            code,
            radius_weight,
            font_scale,
        }
    }

    /// Returns the character code the rule applies to
    pub fn code(&self) -> u8 {
        self.code
    }
}

impl Default for SmallGlyphRule {
    fn default() -> Self {
        Self {
            code: default_small_glyph_code(),
            radius_weight: default_radius_weight(),
            font_scale: default_font_scale(),
        }
    }
}

/// Anchor point, rotation, and effective font size for one character.
///
/// Transient: computed per character cell and discarded once the text
/// element has been serialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    anchor: Point,
    rotation_deg: f64,
    font_size: f64,
}

impl GlyphPlacement {
    /// Returns the anchor point of the glyph
    pub fn anchor(self) -> Point {
        self.anchor
    }

    /// Returns the rotation about the anchor, in degrees
    pub fn rotation_deg(self) -> f64 {
        self.rotation_deg
    }

    /// Returns the effective font size
    pub fn font_size(self) -> f64 {
        self.font_size
    }
}

/// Computes where and how a character is drawn inside its sector.
///
/// The anchor sits at the sector's angular midpoint, on the ring
/// midline `(outer + inner) / 2` unless `rule` matches `code`. The
/// rotation is `midpoint·180/π + 90` degrees, applied about the
/// anchor, which turns "up" on the glyph away from the wheel center.
pub fn place_glyph(
    sector: Sector,
    center: Point,
    outer: f64,
    inner: f64,
    base_font_size: f64,
    code: u8,
    rule: &SmallGlyphRule,
) -> GlyphPlacement {
    let (radius, font_size) = if code == rule.code {
        let w = rule.radius_weight;
        ((w.mul_add(outer, inner)) / (w + 1.0), base_font_size * rule.font_scale)
    } else {
        ((outer + inner) / 2.0, base_font_size)
    };

    let mid = sector.midpoint();
    GlyphPlacement {
        anchor: project(center, radius, mid),
        rotation_deg: mid.to_degrees() + 90.0,
        font_size,
    }
}
