use std::f32::consts::{PI, TAU};

/// Fold an angle into (-PI, PI].
pub fn normalize_angle(mut angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    // Shifting by TAU stops making progress once the ulp exceeds it
    if angle.abs() > 64.0 * TAU {
        angle %= TAU;
    }
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Interpolate between two angles along the shorter arc.
pub fn lerp_angle(start: f32, end: f32, t: f32) -> f32 {
    let from = normalize_angle(start);
    let to = normalize_angle(end);

    // Endpoints are returned as-is, the arc shift below can cost an ulp
    if t == 0.0 {
        return from;
    }
    if t == 1.0 {
        return to;
    }

    let (mut a, mut b) = (from, to);
    if (b - a).abs() > PI {
        if b > a {
            a += TAU;
        } else {
            b += TAU;
        }
    }
    normalize_angle(a + (b - a) * t)
}
