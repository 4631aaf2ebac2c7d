//! Card layout engine.
//!
//! Layouts are pure: they take normalized data plus a [`CardStyle`] and
//! return a [`CardSpec`] with literal coordinates. Only the height depends on
//! the content; fonts and row increments are fixed and text is never
//! measured.

mod language_list;
mod stats;
mod top_languages;

pub use language_list::{LIST_ROW_HEIGHT, language_list_card, split_columns};
pub use stats::{RING_RADIUS, ring_arc, stats_card};
pub use top_languages::{
    BAR_HEIGHT, DEFAULT_TOP_N, MIN_BAR_WIDTH, TOP_ROW_HEIGHT, top_languages_card,
};

use crate::style::CardStyle;

/// Space around the card content.
pub const PADDING: f64 = 20.0;
/// Baseline of the card title.
pub const TITLE_BASELINE: f64 = 32.0;
/// Space below the last row.
pub const BOTTOM_MARGIN: f64 = 50.0;
/// Corner radius of the card background.
pub const CARD_RADIUS: f64 = 12.0;
/// Shown instead of rows when there is no language data.
pub const EMPTY_PLACEHOLDER: &str = "No language data";

const TITLE_SIZE: u32 = 20;
const TITLE_WEIGHT: u32 = 700;

/// Horizontal anchor of a text element.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// Left aligned at `x`.
    Start,
    /// Centred on `x`.
    Middle,
    /// Right aligned at `x`.
    End,
}

impl Anchor {
    /// SVG `text-anchor` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Filled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Corner radius.
    pub rx: f64,
    /// Fill colour.
    pub fill: String,
}

/// Circle, filled or stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Centre x.
    pub cx: f64,
    /// Centre y.
    pub cy: f64,
    /// Radius.
    pub r: f64,
    /// Fill colour, `none` when absent.
    pub fill: Option<String>,
    /// Stroke colour.
    pub stroke: Option<String>,
    /// Stroke width, ignored without a stroke.
    pub stroke_width: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Stroked arc along a circle, starting at the top and sweeping clockwise.
///
/// `dash` is the visible length and `gap` the remainder of the
/// circumference.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Centre x.
    pub cx: f64,
    /// Centre y.
    pub cy: f64,
    /// Radius.
    pub r: f64,
    /// Stroke colour.
    pub stroke: String,
    /// Stroke width.
    pub stroke_width: f64,
    /// Visible arc length.
    pub dash: f64,
    /// Remaining circumference.
    pub gap: f64,
}

/// Single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Anchor x.
    pub x: f64,
    /// Baseline y.
    pub y: f64,
    /// Unescaped text.
    pub content: String,
    /// Font size in pixels.
    pub size: u32,
    /// Font weight.
    pub weight: u32,
    /// Text colour.
    pub fill: String,
    /// Horizontal alignment.
    pub anchor: Anchor,
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// See [`Rect`].
    Rect(Rect),
    /// See [`Circle`].
    Circle(Circle),
    /// See [`Arc`].
    Arc(Arc),
    /// See [`Text`].
    Text(Text),
}

/// A laid-out card, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSpec {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Accessible title of the document.
    pub title: String,
    /// Primitives in paint order.
    pub primitives: Vec<Primitive>,
}

impl CardSpec {
    /// Text primitives in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Rectangle primitives in paint order.
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    /// Circle primitives in paint order.
    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    /// Arc primitives in paint order.
    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Arc(arc) => Some(arc),
            _ => None,
        })
    }
}

/// Card height for `rows` rows of `row_height`.
pub fn card_height(rows: usize, row_height: f64) -> f64 {
    PADDING + TITLE_BASELINE + rows as f64 * row_height + BOTTOM_MARGIN
}

/// Start a card with its background and title.
fn begin_card(style: &CardStyle, title: &str, height: f64) -> CardSpec {
    let primitives = vec![
        Primitive::Rect(Rect {
            x: 0.0,
            y: 0.0,
            width: style.width,
            height,
            rx: CARD_RADIUS,
            fill: style.background.clone(),
        }),
        Primitive::Text(Text {
            x: PADDING,
            y: TITLE_BASELINE,
            content: title.to_string(),
            size: TITLE_SIZE,
            weight: TITLE_WEIGHT,
            fill: style.title_color.clone(),
            anchor: Anchor::Start,
        }),
    ];
    CardSpec {
        width: style.width,
        height,
        title: title.to_string(),
        primitives,
    }
}

fn body_text(
    style: &CardStyle,
    x: f64,
    y: f64,
    content: impl Into<String>,
    size: u32,
    weight: u32,
    anchor: Anchor,
) -> Primitive {
    Primitive::Text(Text {
        x,
        y,
        content: content.into(),
        size,
        weight,
        fill: style.text_color.clone(),
        anchor,
    })
}
