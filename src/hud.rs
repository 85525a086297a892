//! HUD data: elapsed-time counter and box edge labels
//!
//! Produces strings and anchor points only; drawing text is left to the
//! renderer.

use glam::Vec2;

use crate::consts::BOX_SIZE_METERS;

/// Gap between a label and the box edge (pixels)
const LABEL_MARGIN: f32 = 10.0;

/// Format elapsed milliseconds as `HH:MM:SS:JJ`
///
/// `JJ` counts jiffies (1/60 s, approximated as 16 ms) within the second.
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let jiffies = (elapsed_ms % 1000) / 16;
    let seconds = (elapsed_ms / 1000) % 60;
    let minutes = (elapsed_ms / 60_000) % 60;
    let hours = elapsed_ms / 3_600_000;
    format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, seconds, jiffies)
}

/// Convert meters to pixels for a box `box_side` pixels wide
#[inline]
pub fn meters_to_pixels(meters: f32, box_side: f32) -> f32 {
    meters * box_side / BOX_SIZE_METERS
}

/// Convert pixels to meters for a box `box_side` pixels wide
#[inline]
pub fn pixels_to_meters(pixels: f32, box_side: f32) -> f32 {
    pixels * BOX_SIZE_METERS / box_side
}

/// Text shown on every box edge
pub fn box_label_text() -> String {
    format!("{:.0}m", BOX_SIZE_METERS)
}

/// Top-left anchors for the four edge labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxLabels {
    pub bottom: Vec2,
    pub top: Vec2,
    pub left: Vec2,
    pub right: Vec2,
}

/// Place a label of `text_size` just outside each edge of the un-rotated box
pub fn box_labels(center: Vec2, box_side: f32, text_size: Vec2) -> BoxLabels {
    let half = box_side / 2.0;
    BoxLabels {
        bottom: Vec2::new(center.x - text_size.x / 2.0, center.y + half + LABEL_MARGIN),
        top: Vec2::new(
            center.x - text_size.x / 2.0,
            center.y - half - text_size.y - LABEL_MARGIN,
        ),
        left: Vec2::new(
            center.x - half - text_size.x - LABEL_MARGIN,
            center.y - text_size.y / 2.0,
        ),
        right: Vec2::new(center.x + half + LABEL_MARGIN, center.y - text_size.y / 2.0),
    }
}
