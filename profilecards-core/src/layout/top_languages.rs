//! Ranked bar list of the most used languages.

use super::{
    Anchor, CardSpec, EMPTY_PLACEHOLDER, PADDING, Primitive, Rect, TITLE_BASELINE, begin_card,
    body_text, card_height,
};
use crate::domain::NormalizedEntry;
use crate::style::CardStyle;

/// Rows shown when the caller does not choose.
pub const DEFAULT_TOP_N: usize = 5;
/// Vertical distance between rows.
pub const TOP_ROW_HEIGHT: f64 = 34.0;
/// Height of the bar track.
pub const BAR_HEIGHT: f64 = 10.0;
/// Narrowest filled bar, so tiny shares stay visible.
pub const MIN_BAR_WIDTH: f64 = 2.0;

const TITLE: &str = "Most Used Languages";
const LABEL_COLUMN: f64 = 130.0;
const PERCENT_COLUMN: f64 = 60.0;
const PERCENT_GAP: f64 = 8.0;
const FIRST_ROW_OFFSET: f64 = 22.0;
const BAR_RADIUS: f64 = 5.0;
const ROW_TEXT_SIZE: u32 = 13;
const ROW_TEXT_WEIGHT: u32 = 600;

/// Lay out the first `top_n` entries as labelled horizontal bars.
pub fn top_languages_card(
    entries: &[NormalizedEntry],
    top_n: usize,
    style: &CardStyle,
) -> CardSpec {
    let top = &entries[..entries.len().min(top_n)];
    let mut card = begin_card(style, TITLE, card_height(top.len(), TOP_ROW_HEIGHT));

    let first_row = TITLE_BASELINE + FIRST_ROW_OFFSET;
    if top.is_empty() {
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

    let bar_x = PADDING + LABEL_COLUMN;
    let bar_width = (style.width - bar_x - PADDING - PERCENT_COLUMN).max(0.0);

    for (index, entry) in top.iter().enumerate() {
        let y = first_row + index as f64 * TOP_ROW_HEIGHT;
        let track_y = y - BAR_HEIGHT;

        card.primitives.push(body_text(
            style,
            PADDING,
            y,
            entry.label.as_str(),
            ROW_TEXT_SIZE,
            ROW_TEXT_WEIGHT,
            Anchor::Start,
        ));
        card.primitives.push(Primitive::Rect(Rect {
            x: bar_x,
            y: track_y,
            width: bar_width,
            height: BAR_HEIGHT,
            rx: BAR_RADIUS,
            fill: style.track_color.clone(),
        }));
        card.primitives.push(Primitive::Rect(Rect {
            x: bar_x,
            y: track_y,
            width: fill_width(entry.percentage, bar_width),
            height: BAR_HEIGHT,
            rx: BAR_RADIUS,
            fill: style.resolve_color(&entry.label, index).to_string(),
        }));
        card.primitives.push(body_text(
            style,
            bar_x + bar_width + PERCENT_GAP,
            y,
            entry.display_percentage(),
            ROW_TEXT_SIZE,
            ROW_TEXT_WEIGHT,
            Anchor::Start,
        ));
    }

    card
}

fn fill_width(percentage: f64, track_width: f64) -> f64 {
    (percentage / 100.0 * track_width)
        .max(MIN_BAR_WIDTH)
        .min(track_width)
}
