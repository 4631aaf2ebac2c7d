//! Activity statistics with a grade ring.

use std::f64::consts::PI;

use super::{
    Anchor, Arc, CardSpec, Circle, PADDING, Primitive, TITLE_BASELINE, Text, begin_card, body_text,
    card_height,
};
use crate::domain::ActivityCounters;
use crate::scoring::Assessment;
use crate::style::CardStyle;

/// Radius of the grade ring.
pub const RING_RADIUS: f64 = 32.0;

const TITLE: &str = "GitHub Stats";
const ROW_HEIGHT: f64 = 34.0;
const FIRST_ROW_OFFSET: f64 = 24.0;
const RING_STROKE: f64 = 6.0;
const RING_INSET: f64 = 50.0;
const RING_LIFT: f64 = 8.0;
const TRACK_OPACITY: f64 = 0.18;
const VALUE_GAP: f64 = 40.0;
const GRADE_BASELINE_SHIFT: f64 = 7.0;
const GRADE_SIZE: u32 = 20;
const GRADE_WEIGHT: u32 = 800;
const ROW_TEXT_SIZE: u32 = 13;
const LABEL_WEIGHT: u32 = 600;
const VALUE_WEIGHT: u32 = 700;

/// Arc covering `score` percent of a circle's circumference.
pub fn ring_arc(cx: f64, cy: f64, r: f64, score: f64, stroke: &str, stroke_width: f64) -> Arc {
    let circumference = 2.0 * PI * r;
    let fraction = if score.is_finite() {
        score.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    };
    let dash = circumference * fraction;
    Arc {
        cx,
        cy,
        r,
        stroke: stroke.to_string(),
        stroke_width,
        dash,
        gap: circumference - dash,
    }
}

/// Lay out the counter rows on the left and the grade ring on the right.
pub fn stats_card(
    counters: &ActivityCounters,
    assessment: &Assessment,
    year: i32,
    style: &CardStyle,
) -> CardSpec {
    let rows = [
        ("Stars".to_string(), counters.stars),
        (format!("Commits ({year})"), counters.commits),
        ("Pull Requests".to_string(), counters.pull_requests),
        ("Issues".to_string(), counters.issues),
        ("Contributed repos".to_string(), counters.contributed_repos),
    ];
    let mut card = begin_card(style, TITLE, card_height(rows.len(), ROW_HEIGHT));

    let ring_cx = style.width - PADDING - RING_INSET;
    let value_x = ring_cx - RING_RADIUS - RING_STROKE / 2.0 - VALUE_GAP;
    let first_row = TITLE_BASELINE + FIRST_ROW_OFFSET;

    for (index, (label, value)) in rows.iter().enumerate() {
        let y = first_row + index as f64 * ROW_HEIGHT;
        card.primitives.push(body_text(
            style,
            PADDING,
            y,
            label.as_str(),
            ROW_TEXT_SIZE,
            LABEL_WEIGHT,
            Anchor::Start,
        ));
        card.primitives.push(body_text(
            style,
            value_x,
            y,
            value.to_string(),
            ROW_TEXT_SIZE,
            VALUE_WEIGHT,
            Anchor::End,
        ));
    }

    let ring_cy = first_row + rows.len() as f64 * ROW_HEIGHT / 2.0 - RING_LIFT;
    card.primitives.push(Primitive::Circle(Circle {
        cx: ring_cx,
        cy: ring_cy,
        r: RING_RADIUS,
        fill: None,
        stroke: Some(style.ring_color.clone()),
        stroke_width: RING_STROKE,
        opacity: TRACK_OPACITY,
    }));
    card.primitives.push(Primitive::Arc(ring_arc(
        ring_cx,
        ring_cy,
        RING_RADIUS,
        assessment.score,
        &style.ring_color,
        RING_STROKE,
    )));
    card.primitives.push(Primitive::Text(Text {
        x: ring_cx,
        y: ring_cy + GRADE_BASELINE_SHIFT,
        content: assessment.grade.as_str().to_string(),
        size: GRADE_SIZE,
        weight: GRADE_WEIGHT,
        fill: style.title_color.clone(),
        anchor: Anchor::Middle,
    }));

    card
}
