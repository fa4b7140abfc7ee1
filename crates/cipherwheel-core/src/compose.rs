//! Wheel composition: rings to ordered SVG elements.
//!
//! The composer walks the ring list outermost first, keeping a radius
//! cursor that starts at `outer_diameter / 2` and steps inward by each
//! ring's width plus spacing. Output order is deterministic: rings in
//! configuration order, characters in text order, and within one
//! character cell the sector outline, then an optional notch, then the
//! text element.

use log::{debug, trace};
use svg::node::{Blob, Node, element as svg_element};

use crate::{
    config::{Canvas, WheelConfig},
    error::Error,
    geometry::Point,
    glyph::{self, GlyphPlacement},
    layout,
};

/// A boxed SVG node ready to be added to a document.
pub type SvgNode = Box<dyn svg::Node>;

/// Composes a validated wheel configuration into an ordered sequence
/// of SVG elements, without the document envelope.
///
/// The configuration is validated first; nothing is emitted for an
/// invalid wheel. Rings with empty text contribute no elements but
/// still consume their radial width and spacing, so the rings inside
/// them keep their configured radii.
///
/// # Errors
///
/// Returns any error from [`WheelConfig::validate`].
pub fn compose(config: &WheelConfig) -> Result<Vec<SvgNode>, Error> {
    config.validate()?;

    let center = config.canvas().center(config.outer_diameter());
    let mut elements: Vec<SvgNode> = Vec::new();

    let mut cursor = config.outer_diameter() / 2.0;
    for (index, ring) in config.rings().iter().enumerate() {
        let ordinal = index + 1;
        let outer = cursor;
        let inner = outer - ring.radial_width();

        debug!(ordinal, outer, inner, chars = ring.text().len(); "Composing ring");

        let sectors = layout::ring_sectors(ring.text().len());
        for (&sector, &code) in sectors.iter().zip(ring.text()) {
            elements.push(Box::new(stroked_path(layout::sector_outline_data(
                center, outer, inner, sector,
            ))));

            if let Some(data) = config
                .rules()
                .notch()
                .maybe_notch(ordinal, code, sector, center, inner)
            {
                trace!(ordinal, code; "Emitting notch");
                elements.push(Box::new(stroked_path(data)));
            }

            let placement = glyph::place_glyph(
                sector,
                center,
                outer,
                inner,
                config.font_size(),
                code,
                config.rules().small_glyph(),
            );
            elements.push(Box::new(glyph_text(placement, code)));
        }

        cursor = inner - ring.spacing_after();
    }

    if let Canvas::Page {
        separator_radius,
        hub_radius,
        ..
    } = *config.canvas()
    {
        elements.push(Box::new(stroked_circle(center, separator_radius)));
        elements.push(Box::new(hub_circle(center, hub_radius)));
    }

    debug!(elements = elements.len(); "Wheel composed");
    Ok(elements)
}

fn stroked_path(data: String) -> svg_element::Path {
    svg_element::Path::new()
        .set("d", data)
        .set("fill", "none")
        .set("stroke", "black")
}

/// Serializes one placed character as a rotated `<text>` element.
///
/// The content is a numeric character reference (`&#<code>;`) for the
/// raw byte value, never a literal glyph, so `&`, `<`, and unprintable
/// codes need no further escaping. The reference goes through a raw
/// [`Blob`] node: a text node would escape the `&` and the reference
/// itself would end up printed on the wheel.
fn glyph_text(placement: GlyphPlacement, code: u8) -> svg_element::Element {
    let x = placement.anchor().x();
    let y = placement.anchor().y();

    let mut text = svg_element::Element::new("text");
    text.assign("x", format!("{x:.3}"));
    text.assign("y", format!("{y:.3}"));
    text.assign("font-size", format!("{:.3}", placement.font_size()));
    text.assign("text-anchor", "middle");
    text.assign("dominant-baseline", "middle");
    text.assign(
        "transform",
        format!("rotate({:.3} {x:.3} {y:.3})", placement.rotation_deg()),
    );
    text.append(Blob::new(format!("&#{};", code)));
    text
}

fn stroked_circle(center: Point, radius: f64) -> svg_element::Circle {
    svg_element::Circle::new()
        .set("cx", format!("{:.3}", center.x()))
        .set("cy", format!("{:.3}", center.y()))
        .set("r", format!("{radius:.3}"))
        .set("fill", "none")
        .set("stroke", "black")
}

fn hub_circle(center: Point, radius: f64) -> svg_element::Circle {
    svg_element::Circle::new()
        .set("cx", format!("{:.3}", center.x()))
        .set("cy", format!("{:.3}", center.y()))
        .set("r", format!("{radius:.3}"))
        .set("fill", "black")
}
