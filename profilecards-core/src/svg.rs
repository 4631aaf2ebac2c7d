//! SVG serialization of laid-out cards.
//!
//! Output contains only `rect`, `circle`, and `text` elements with literal
//! coordinates. Arcs become stroked circles with a dash array, rotated so
//! the dash starts at the top. Geometry is written as given.

use std::fmt::Write;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::fs::{FileSystem, StdFileSystem};
use crate::layout::{Arc, CardSpec, Circle, Primitive, Rect, Text};
use crate::style::CardStyle;

/// Serialize a card into a standalone SVG document.
pub fn render_svg(card: &CardSpec, style: &CardStyle) -> String {
    let mut out = String::new();
    let width = number(card.width);
    let height = number(card.height);
    let title = xml_escape(&card.title);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img" aria-label="{title}">"#,
    );
    let _ = writeln!(out, "  <title>{title}</title>");

    let font_family = xml_escape(&style.font_family);
    for primitive in &card.primitives {
        match primitive {
            Primitive::Rect(rect) => write_rect(&mut out, rect),
            Primitive::Circle(circle) => write_circle(&mut out, circle),
            Primitive::Arc(arc) => write_arc(&mut out, arc),
            Primitive::Text(text) => write_text(&mut out, text, &font_family),
        }
    }

    out.push_str("</svg>\n");
    out
}

/// Render a card and write it to `path`, creating parent directories.
pub fn emit(card: &CardSpec, style: &CardStyle, path: &Path) -> Result<()> {
    emit_with(&StdFileSystem::new(), card, style, path)
}

/// [`emit`] against an injected filesystem.
pub fn emit_with<F: FileSystem>(
    fs: &F,
    card: &CardSpec,
    style: &CardStyle,
    path: &Path,
) -> Result<()> {
    let document = render_svg(card, style);
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs.create_dir_all(parent)?;
    }
    fs.write(path, &document)?;
    info!("wrote {}", path.display());
    Ok(())
}

fn write_rect(out: &mut String, rect: &Rect) {
    let _ = writeln!(
        out,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"#,
        number(rect.x),
        number(rect.y),
        number(rect.width),
        number(rect.height),
        number(rect.rx),
        xml_escape(&rect.fill),
    );
}

fn write_circle(out: &mut String, circle: &Circle) {
    let fill = circle.fill.as_deref().unwrap_or("none");
    let _ = write!(
        out,
        r#"  <circle cx="{}" cy="{}" r="{}" fill="{}""#,
        number(circle.cx),
        number(circle.cy),
        number(circle.r),
        xml_escape(fill),
    );
    if let Some(stroke) = &circle.stroke {
        let _ = write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            xml_escape(stroke),
            number(circle.stroke_width),
        );
    }
    if circle.opacity < 1.0 {
        let _ = write!(out, r#" opacity="{}""#, number(circle.opacity));
    }
    out.push_str("/>\n");
}

fn write_arc(out: &mut String, arc: &Arc) {
    let cx = number(arc.cx);
    let cy = number(arc.cy);
    let _ = writeln!(
        out,
        r#"  <circle cx="{cx}" cy="{cy}" r="{}" fill="none" stroke="{}" stroke-width="{}" stroke-dasharray="{} {}" transform="rotate(-90 {cx} {cy})"/>"#,
        number(arc.r),
        xml_escape(&arc.stroke),
        number(arc.stroke_width),
        number(arc.dash),
        number(arc.gap),
    );
}

fn write_text(out: &mut String, text: &Text, font_family: &str) {
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="{}" font-family="{font_family}" font-size="{}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
        number(text.x),
        number(text.y),
        text.size,
        text.weight,
        xml_escape(&text.fill),
        text.anchor.as_str(),
        xml_escape(&text.content),
    );
}

/// Integers without a fraction, everything else with at most two decimals.
fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.2}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
