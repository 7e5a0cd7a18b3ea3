//! Channel-level conversion math between RGB and HSL.
//! Channels are normalized f64 in 0.0–1.0; hue is in degrees.

/// RGB → HSL. Channels 0.0–1.0 in; (hue 0–360, saturation 0–100,
/// lightness 0–100) out.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Pure black and pure white hit 0/0 in the saturation formula below;
    // both are achromatic with hue 0.
    if delta == 0.0 && max == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    if delta == 0.0 && max == 1.0 {
        return (0.0, 0.0, 100.0);
    }

    let mut h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }

    let l = (max + min) / 2.0;
    // Inner quotient first: ties like 7/8 stay exact through the scale
    // by 100 and round away from zero.
    let s = 100.0 * (delta / (1.0 - (2.0 * l - 1.0).abs()));

    (h, s, l * 100.0)
}

/// HSL → RGB. Hue in degrees, saturation/lightness 0–100 in; channels
/// 0.0–1.0 out.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = (h % 360.0) / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
