// SPDX-License-Identifier: MPL-2.0
//! Hand rotation and face geometry for the analog clock.
//!
//! All geometry lives in a 200×200 view box centred on (100, 100). Angles are
//! in degrees, measured clockwise from 3 o'clock (screen coordinates grow
//! downwards), with a fixed −90° offset so that zero time points at 12.

use std::sync::OnceLock;

/// Side length of the square view box the face is drawn in.
pub const VIEW_BOX: f64 = 200.0;

/// Centre of the face in view-box units.
pub const CENTER: f64 = VIEW_BOX / 2.0;

/// Rotation applied to every angle so 12 o'clock points up.
pub const ZERO_OFFSET_DEG: f64 = -90.0;

pub const FACE_RADIUS: f64 = 95.0;
pub const FACE_STROKE_WIDTH: f64 = 4.0;

pub const MARKER_OUTER_RADIUS: f64 = 85.0;
pub const MARKER_INNER_RADIUS: f64 = 75.0;
pub const MARKER_STROKE_WIDTH: f64 = 3.0;
pub const MARKER_COUNT: usize = 12;

pub const HOUR_HAND_LENGTH: f64 = 50.0;
pub const MINUTE_HAND_LENGTH: f64 = 70.0;
pub const SECOND_HAND_LENGTH: f64 = 80.0;

pub const HOUR_HAND_WIDTH: f64 = 6.0;
pub const MINUTE_HAND_WIDTH: f64 = 4.0;
pub const SECOND_HAND_WIDTH: f64 = 2.0;

pub const CENTER_DOT_RADIUS: f64 = 6.0;

/// Rotation of the three hands, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    /// Returns the same rotations folded into `[0, 360)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            hour: normalize_degrees(self.hour),
            minute: normalize_degrees(self.minute),
            second: normalize_degrees(self.second),
        }
    }
}

/// Computes hand rotations for a wall-clock reading.
///
/// Seconds and minutes move 6° per unit. The minute hand creeps 0.1° per
/// second and the hour hand 0.5° per minute so both sweep instead of
/// jumping. Fractional degrees are kept as-is.
#[must_use]
pub fn hand_angles(hours: u32, minutes: u32, seconds: u32) -> HandAngles {
    let h = f64::from(hours % 12);
    let m = f64::from(minutes);
    let s = f64::from(seconds);

    HandAngles {
        hour: h * 30.0 + m * 0.5 + ZERO_OFFSET_DEG,
        minute: m * 6.0 + s * 0.1 + ZERO_OFFSET_DEG,
        second: s * 6.0 + ZERO_OFFSET_DEG,
    }
}

/// Folds an angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Point on a circle around the face centre at `angle_deg`.
#[must_use]
pub fn point_on_face(angle_deg: f64, radius: f64) -> (f64, f64) {
    let radians = angle_deg.to_radians();
    (
        CENTER + radius * radians.cos(),
        CENTER + radius * radians.sin(),
    )
}

/// End point of a hand of `length` rotated by `angle_deg`.
#[must_use]
pub fn hand_tip(angle_deg: f64, length: f64) -> (f64, f64) {
    point_on_face(angle_deg, length)
}

/// One hour tick on the face, from the outer to the inner radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub outer: (f64, f64),
    pub inner: (f64, f64),
}

/// The twelve hour markers, computed on first use.
pub fn hour_markers() -> &'static [Marker; MARKER_COUNT] {
    static MARKERS: OnceLock<[Marker; MARKER_COUNT]> = OnceLock::new();
    MARKERS.get_or_init(|| {
        std::array::from_fn(|i| {
            // i < 12, exact in f64
            #[allow(clippy::cast_precision_loss)]
            let angle = i as f64 * 30.0 + ZERO_OFFSET_DEG;
            let outer = point_on_face(angle, MARKER_OUTER_RADIUS);
            let inner = point_on_face(angle, MARKER_INNER_RADIUS);
            Marker {
                outer: (round2(outer.0), round2(outer.1)),
                inner: (round2(inner.0), round2(inner.1)),
            }
        })
    })
}

// Two decimals keep the static geometry identical between runs and platforms.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
