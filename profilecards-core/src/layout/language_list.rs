//! Two-column breakdown of every language.

use super::{
    Anchor, CardSpec, Circle, EMPTY_PLACEHOLDER, PADDING, Primitive, TITLE_BASELINE, begin_card,
    body_text, card_height,
};
use crate::domain::NormalizedEntry;
use crate::style::CardStyle;

/// Vertical distance between rows.
pub const LIST_ROW_HEIGHT: f64 = 24.0;

const TITLE: &str = "Languages Breakdown";
const FIRST_ROW_OFFSET: f64 = 22.0;
const SECOND_COLUMN_OFFSET: f64 = 10.0;
const DOT_RADIUS: f64 = 5.0;
const DOT_OFFSET: f64 = 6.0;
const LABEL_OFFSET: f64 = 20.0;
const TEXT_LIFT: f64 = 2.0;
const PERCENT_INSET: f64 = 6.0;
const ROW_TEXT_SIZE: u32 = 12;
const ROW_TEXT_WEIGHT: u32 = 600;

/// Entries in the first and second column for `count` entries.
///
/// The first column takes the larger half.
pub fn split_columns(count: usize) -> (usize, usize) {
    (count.div_ceil(2), count / 2)
}

/// Lay out all entries in two columns with a colour dot, label, and
/// right-aligned percentage each.
pub fn language_list_card(entries: &[NormalizedEntry], style: &CardStyle) -> CardSpec {
    let (per_column, _) = split_columns(entries.len());
    let mut card = begin_card(style, TITLE, card_height(per_column, LIST_ROW_HEIGHT));

    let first_row = TITLE_BASELINE + FIRST_ROW_OFFSET;
    if entries.is_empty() {
        card.primitives.push(body_text(
            style,
            PADDING,
            first_row,
            EMPTY_PLACEHOLDER,
            ROW_TEXT_SIZE,
            ROW_TEXT_WEIGHT,
            Anchor::Start,
        ));
        return card;
    }

    let half = (style.width / 2.0).floor();
    let column_x = [PADDING, half + SECOND_COLUMN_OFFSET];
    let column_span = half - PADDING;

    for (index, entry) in entries.iter().enumerate() {
        let (column, row) = if index < per_column {
            (0, index)
        } else {
            (1, index - per_column)
        };
        let x = column_x[column];
        let y = first_row + row as f64 * LIST_ROW_HEIGHT;

        card.primitives.push(Primitive::Circle(Circle {
            cx: x + DOT_OFFSET,
            cy: y - DOT_OFFSET,
            r: DOT_RADIUS,
            fill: Some(style.resolve_color(&entry.label, index).to_string()),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
        }));
        card.primitives.push(body_text(
            style,
            x + LABEL_OFFSET,
            y - TEXT_LIFT,
            entry.label.as_str(),
            ROW_TEXT_SIZE,
            ROW_TEXT_WEIGHT,
            Anchor::Start,
        ));
        card.primitives.push(body_text(
            style,
            x + column_span - PERCENT_INSET,
            y - TEXT_LIFT,
            entry.display_percentage(),
            ROW_TEXT_SIZE,
            ROW_TEXT_WEIGHT,
            Anchor::End,
        ));
    }

    card
}
