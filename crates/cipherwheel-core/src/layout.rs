//! Ring partitioning and annulus-sector outlines.
//!
//! A ring holding `n` characters is divided into `n` equal angular
//! sectors. The sectors partition the full circle exactly: sector `i`
//! spans `[i·step − π/2, (i+1)·step − π/2)` with `step = 2π/n`, so
//! sector 0 starts at 12 o'clock and the sequence runs clockwise.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::geometry::{Point, project};

/// One angular slice of a ring, bounded by two angles in radians.
///
/// Sectors are transient: they are derived per character while a ring
/// is being composed and discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    a1: f64,
    a2: f64,
}

impl Sector {
    /// Creates a sector spanning `[a1, a2)`.
    pub fn new(a1: f64, a2: f64) -> Self {
        Self { a1, a2 }
    }

    /// Returns the starting angle in radians
    pub fn a1(self) -> f64 {
        self.a1
    }

    /// Returns the ending angle in radians
    pub fn a2(self) -> f64 {
        self.a2
    }

    /// Returns the angular midpoint of the sector
    pub fn midpoint(self) -> f64 {
        (self.a1 + self.a2) / 2.0
    }
}

/// Partitions a full circle into `char_count` equal sectors.
///
/// Returns an empty sequence for `char_count == 0`; a ring without
/// characters contributes no geometry. The annulus-outline builder
/// assumes each sector spans at most a half circle, so callers must
/// reject single-character rings up front (see
/// [`WheelConfig::validate`](crate::config::WheelConfig::validate)).
///
/// # Examples
///
/// ```
/// # use cipherwheel_core::layout::ring_sectors;
/// use std::f64::consts::FRAC_PI_2;
///
/// let sectors = ring_sectors(2);
/// assert_eq!(sectors.len(), 2);
/// assert!((sectors[0].a1() + FRAC_PI_2).abs() < 1e-12);
/// assert!((sectors[0].a2() - FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn ring_sectors(char_count: usize) -> Vec<Sector> {
    if char_count == 0 {
        return Vec::new();
    }

    let step = TAU / char_count as f64;
    (0..char_count)
        .map(|i| {
            let a1 = (i as f64).mul_add(step, -FRAC_PI_2);
            let a2 = (i as f64 + 1.0).mul_add(step, -FRAC_PI_2);
            Sector::new(a1, a2)
        })
        .collect()
}

/// Builds the path data for one closed annulus-wedge outline.
///
/// The outline is: move to the outer-arc start, arc clockwise to the
/// outer-arc end, line inward to the inner boundary, arc back
/// counter-clockwise along the inner boundary, close. The large-arc
/// flag is fixed to 0, which is only correct while each sector spans
/// at most a half circle.
///
/// Coordinates are formatted with exactly 3 fractional digits.
pub fn sector_outline_data(center: Point, outer: f64, inner: f64, sector: Sector) -> String {
    let p1 = project(center, outer, sector.a1());
    let p2 = project(center, outer, sector.a2());
    let p3 = project(center, inner, sector.a2());
    let p4 = project(center, inner, sector.a1());

    format!(
        "M {:.3} {:.3} A {:.3} {:.3} 0 0 1 {:.3} {:.3} L {:.3} {:.3} A {:.3} {:.3} 0 0 0 {:.3} {:.3} Z",
        p1.x(),
        p1.y(),
        outer,
        outer,
        p2.x(),
        p2.y(),
        p3.x(),
        p3.y(),
        inner,
        inner,
        p4.x(),
        p4.y(),
    )
}

/// Builds the path data for an open arc spanning a sector's angular
/// bounds at the given radius. Unlike [`sector_outline_data`], the path
/// is not closed and has no radial edges; it is drawn as a bare
/// stroked arc.
pub fn open_arc_data(center: Point, radius: f64, sector: Sector) -> String {
    let p1 = project(center, radius, sector.a1());
    let p2 = project(center, radius, sector.a2());

    format!(
        "M {:.3} {:.3} A {:.3} {:.3} 0 0 1 {:.3} {:.3}",
        p1.x(),
        p1.y(),
        radius,
        radius,
        p2.x(),
        p2.y(),
    )
}
