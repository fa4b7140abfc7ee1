//! SVG document assembly and file output.
//!
//! The composer produces bare elements; this module wraps them in the
//! document envelope (XML declaration, `<svg>` root sized per the
//! canvas profile, white background rectangle) and writes the result
//! to a file. The output sink is always checked: a failure to open or
//! write is reported as [`Error::Io`](crate::Error::Io) and never
//! leaves a silently empty file behind.

use std::{fs::File, io::Write};

use log::{error, info};
use svg::{Document, node::element as svg_element};

use crate::{
    compose::SvgNode,
    config::{Canvas, WheelConfig},
    error::Error,
};

/// Wraps composed elements in a complete SVG document.
///
/// - [`Canvas::Auto`]: explicit pixel width and height equal to
///   `outer_diameter + 2·margin`.
/// - [`Canvas::Page`]: physical `mm` dimensions with a matching
///   `viewBox`, so user units are millimeters.
///
/// A full-canvas white background rectangle precedes the elements.
pub fn assemble(config: &WheelConfig, elements: Vec<SvgNode>) -> Document {
    let mut doc = Document::new();

    doc = match *config.canvas() {
        Canvas::Auto { margin } => {
            let side = 2.0f64.mul_add(margin, config.outer_diameter());
            doc.set("width", format!("{side:.3}"))
                .set("height", format!("{side:.3}"))
        }
        Canvas::Page { width, height, .. } => doc
            .set("width", format!("{width}mm"))
            .set("height", format!("{height}mm"))
            .set("viewBox", format!("0 0 {width} {height}")),
    };

    doc = doc.add(
        svg_element::Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", "white"),
    );

    for element in elements {
        doc = doc.add(element);
    }

    doc
}

/// SVG file sink.
pub struct Svg {
    file_name: String,
}

impl Svg {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
        }
    }

    /// Writes the XML declaration and an SVG document to the file.
    pub fn write_document(&self, doc: &Document) -> Result<(), Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let mut f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(Error::Io(err));
            }
        };

        if let Err(err) = writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)
            .and_then(|()| writeln!(f, "{doc}"))
        {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(Error::Io(err));
        }

        Ok(())
    }
}
