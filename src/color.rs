//! `Rgb` and `Hsl` value types and the string conversions between them.
//!
//! Three string shapes travel through a drawing UI: hex as a color input
//! produces it (`"#3B82F6"`), `rgb(R, G, B)` as cells render it, and
//! `hsl(H S% L%)` for lightness edits. The scanners here accept any
//! string carrying the right numeric groups and ignore the punctuation
//! around them, so `"rgb(0, 0, 0)"`, `"0 0 0"` and `"rgba(0,0,0,1)"`
//! all read as the same color.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::MalformedColorString;
use crate::math;

const HEX_EXPECTED: &str = "three two-digit hex channels";
const RGB_EXPECTED: &str = "three decimal channels in 0-255";
const HSL_EXPECTED: &str = "three decimal hsl components";

/// RGB color with 0–255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create from 0–255 channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red channel (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Parse a hex color string.
    ///
    /// Scans for pairs of word characters and reads the first three pairs
    /// as base-16 channels. A leading `#` is skipped over, as is any other
    /// punctuation, so `"#3B82F6"`, `"3b82f6"` and `"3B 82 F6"` all parse.
    /// Fails when fewer than three pairs are found or a pair is not hex.
    pub fn from_hex(hex: &str) -> Result<Self, MalformedColorString> {
        let mut channels = [0u8; 3];
        let mut found = 0;
        let bytes = hex.as_bytes();
        let mut i = 0;
        while i + 1 < bytes.len() && found < 3 {
            if is_word_byte(bytes[i]) && is_word_byte(bytes[i + 1]) {
                channels[found] = u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| MalformedColorString::new(hex, HEX_EXPECTED))?;
                found += 1;
                i += 2;
            } else {
                i += 1;
            }
        }
        if found < 3 {
            return Err(MalformedColorString::new(hex, HEX_EXPECTED));
        }
        Ok(Self {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        })
    }

    /// Uniformly random color, one draw per channel.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// Convert to HSL, rounding each component to the nearest integer.
    pub fn to_hsl(self) -> Hsl {
        let (h, s, l) = math::rgb_to_hsl(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        );
        Hsl::new(h.round() as u16, s.round() as u8, l.round() as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = MalformedColorString;

    /// Read the first three decimal digit groups as 0–255 channels.
    /// A group above 255 is malformed, not clamped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MalformedColorString::new(s, RGB_EXPECTED);
        let mut groups = digit_groups(s);
        let r = groups.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let g = groups.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let b = groups.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        Ok(Self { r, g, b })
    }
}

/// HSL color: hue in degrees `[0, 360)`, saturation and lightness as
/// integer percentages in `[0, 100]`.
///
/// Construction normalizes, so a value always satisfies those ranges.
/// Deserialization funnels through [`Hsl::new`] and holds the same
/// invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "HslParts"))]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

/// Serialized shape of [`Hsl`]: raw components before normalization.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct HslParts {
    h: u16,
    s: u8,
    l: u8,
}

#[cfg(feature = "serde")]
impl From<HslParts> for Hsl {
    fn from(parts: HslParts) -> Self {
        Self::new(parts.h, parts.s, parts.l)
    }
}

impl Hsl {
    /// Create from components, wrapping hue into `[0, 360)` and clamping
    /// saturation and lightness to 100.
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Hue in degrees (0–359).
    pub fn h(&self) -> u16 {
        self.h
    }
    /// Saturation percentage (0–100).
    pub fn s(&self) -> u8 {
        self.s
    }
    /// Lightness percentage (0–100).
    pub fn l(&self) -> u8 {
        self.l
    }

    /// Raise lightness by one brush step.
    ///
    /// The step shrinks as lightness climbs, so repeated application
    /// converges on 100 instead of jumping there. Hue and saturation are
    /// untouched; the result never leaves `[0, 100]`.
    pub fn lighten(self) -> Self {
        if self.l >= 100 {
            return Self { l: 100, ..self };
        }
        let step = (f64::from(100 - self.l) / 10.0).round() as u8;
        Self {
            l: (3 + self.l + step).min(100),
            ..self
        }
    }

    /// Lower lightness by one brush step.
    ///
    /// Mirror of [`Hsl::lighten`]: the step shrinks as lightness falls,
    /// converging on 0 without going below it.
    pub fn darken(self) -> Self {
        if self.l == 0 {
            return self;
        }
        let step = (f64::from(self.l) / 10.0).round() as u8;
        Self {
            l: self.l.saturating_sub(step + 3),
            ..self
        }
    }

    /// Convert to RGB, rounding each channel to the nearest integer.
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = math::hsl_to_rgb(f64::from(self.h), f64::from(self.s), f64::from(self.l));
        Rgb {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({} {}% {}%)", self.h, self.s, self.l)
    }
}

impl FromStr for Hsl {
    type Err = MalformedColorString;

    /// Read the first three decimal digit groups as hue, saturation and
    /// lightness. Out-of-range components are normalized the same way
    /// [`Hsl::new`] normalizes them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MalformedColorString::new(s, HSL_EXPECTED);
        let mut groups = digit_groups(s);
        let mut component = || -> Result<u32, MalformedColorString> {
            groups.next().ok_or_else(err)?.parse().map_err(|_| err())
        };
        let h = component()?;
        let sat = component()?;
        let l = component()?;
        Ok(Self::new(
            (h % 360) as u16,
            sat.min(100) as u8,
            l.min(100) as u8,
        ))
    }
}

/// Convert a hex color string to its `rgb(R, G, B)` form.
pub fn hex_to_rgb(hex: &str) -> Result<String, MalformedColorString> {
    Ok(Rgb::from_hex(hex)?.to_string())
}

/// Convert an `rgb(R, G, B)` string to its `hsl(H S% L%)` form.
pub fn rgb_to_hsl(rgb: &str) -> Result<String, MalformedColorString> {
    Ok(rgb.parse::<Rgb>()?.to_hsl().to_string())
}

/// Raise the lightness of an `hsl(H S% L%)` string by one brush step.
pub fn lighten(hsl: &str) -> Result<String, MalformedColorString> {
    Ok(hsl.parse::<Hsl>()?.lighten().to_string())
}

/// Lower the lightness of an `hsl(H S% L%)` string by one brush step.
pub fn darken(hsl: &str) -> Result<String, MalformedColorString> {
    Ok(hsl.parse::<Hsl>()?.darken().to_string())
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Maximal runs of ascii digits in `s`, left to right.
fn digit_groups(s: &str) -> impl Iterator<Item = &str> + '_ {
    s.split(|c: char| !c.is_ascii_digit()).filter(|g| !g.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_hash() {
        assert_eq!(Rgb::from_hex("#3B82F6").unwrap(), Rgb::new(59, 130, 246));
    }

    #[test]
    fn test_from_hex_bare_lowercase() {
        assert_eq!(Rgb::from_hex("3b82f6").unwrap(), Rgb::new(59, 130, 246));
    }

    #[test]
    fn test_from_hex_scans_past_noise() {
        assert_eq!(Rgb::from_hex("#FF 00 7F").unwrap(), Rgb::new(255, 0, 127));
        // Extra pairs beyond the third are ignored.
        assert_eq!(Rgb::from_hex("#aabbccdd").unwrap(), Rgb::new(170, 187, 204));
    }

    #[test]
    fn test_from_hex_rejects_short_input() {
        assert!(Rgb::from_hex("#ab").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_rejects_non_hex_pairs() {
        let err = Rgb::from_hex("#zzzzzz").unwrap_err();
        assert_eq!(err.input, "#zzzzzz");
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(0, 128, 255).to_string(), "rgb(0, 128, 255)");
    }

    #[test]
    fn test_rgb_parse_functional_form() {
        assert_eq!("rgb(12, 34, 56)".parse::<Rgb>().unwrap(), Rgb::new(12, 34, 56));
    }

    #[test]
    fn test_rgb_parse_is_lenient_about_punctuation() {
        assert_eq!("12 34 56".parse::<Rgb>().unwrap(), Rgb::new(12, 34, 56));
        // A fourth group does not bother the scanner.
        assert_eq!(
            "rgba(12, 34, 56, 1)".parse::<Rgb>().unwrap(),
            Rgb::new(12, 34, 56)
        );
    }

    #[test]
    fn test_rgb_parse_rejects_out_of_range_channel() {
        assert!("rgb(999, 0, 0)".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rgb_parse_rejects_missing_channels() {
        assert!("rgb(1, 2)".parse::<Rgb>().is_err());
        assert!("no numbers here".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hsl_display_is_space_separated() {
        assert_eq!(Hsl::new(217, 91, 60).to_string(), "hsl(217 91% 60%)");
    }

    #[test]
    fn test_hsl_parse_accepts_comma_and_space_forms() {
        let want = Hsl::new(120, 50, 30);
        assert_eq!("hsl(120 50% 30%)".parse::<Hsl>().unwrap(), want);
        assert_eq!("hsl(120, 50%, 30%)".parse::<Hsl>().unwrap(), want);
    }

    #[test]
    fn test_hsl_parse_normalizes_out_of_range() {
        // Hue wraps, saturation and lightness clamp.
        assert_eq!("hsl(400 150% 120%)".parse::<Hsl>().unwrap(), Hsl::new(40, 100, 100));
    }

    #[test]
    fn test_hsl_new_wraps_hue() {
        assert_eq!(Hsl::new(360, 0, 50).h(), 0);
        assert_eq!(Hsl::new(540, 0, 50).h(), 180);
    }

    #[test]
    fn test_to_hsl_black_and_white() {
        assert_eq!(Rgb::BLACK.to_hsl(), Hsl::new(0, 0, 0));
        assert_eq!(Rgb::WHITE.to_hsl(), Hsl::new(0, 0, 100));
    }

    #[test]
    fn test_to_hsl_primaries() {
        assert_eq!(Rgb::new(255, 0, 0).to_hsl(), Hsl::new(0, 100, 50));
        assert_eq!(Rgb::new(0, 255, 0).to_hsl(), Hsl::new(120, 100, 50));
        assert_eq!(Rgb::new(0, 0, 255).to_hsl(), Hsl::new(240, 100, 50));
    }

    #[test]
    fn test_to_hsl_gray_is_achromatic() {
        assert_eq!(Rgb::new(128, 128, 128).to_hsl(), Hsl::new(0, 0, 50));
    }

    #[test]
    fn test_to_hsl_negative_hue_wraps_high() {
        // Red max with blue above green lands the raw hue negative.
        assert_eq!(Rgb::new(255, 0, 128).to_hsl(), Hsl::new(330, 100, 50));
    }

    #[test]
    fn test_to_hsl_hue_rounding_to_360_wraps_to_zero() {
        // The raw hue is 359.76, which rounds to 360 and must wrap.
        assert_eq!(Rgb::new(255, 0, 1).to_hsl(), Hsl::new(0, 100, 50));
    }

    #[test]
    fn test_to_hsl_mixed_color() {
        assert_eq!(Rgb::new(59, 130, 246).to_hsl(), Hsl::new(217, 91, 60));
    }

    #[test]
    fn test_to_hsl_saturation_tie_rounds_up() {
        // Saturation is exactly 87.5 and 92.5 for these inputs; the tie
        // must land on the high side.
        assert_eq!(Rgb::new(15, 15, 225).to_hsl(), Hsl::new(240, 88, 47));
        assert_eq!(Rgb::new(3, 3, 77).to_hsl(), Hsl::new(240, 93, 16));
    }

    #[test]
    fn test_to_rgb_achromatic() {
        assert_eq!(Hsl::new(0, 0, 87).to_rgb(), Rgb::new(222, 222, 222));
        assert_eq!(Hsl::new(0, 0, 100).to_rgb(), Rgb::WHITE);
    }

    #[test]
    fn test_to_rgb_primary() {
        assert_eq!(Hsl::new(120, 100, 50).to_rgb(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_lighten_steps_up_from_black() {
        assert_eq!(Hsl::new(0, 0, 0).lighten(), Hsl::new(0, 0, 13));
    }

    #[test]
    fn test_lighten_clamps_near_the_top() {
        // 98 would step to 101 unclamped.
        assert_eq!(Hsl::new(0, 0, 98).lighten().l(), 100);
        assert_eq!(Hsl::new(0, 0, 100).lighten().l(), 100);
    }

    #[test]
    fn test_darken_steps_down_from_white() {
        assert_eq!(Hsl::new(0, 0, 100).darken(), Hsl::new(0, 0, 87));
    }

    #[test]
    fn test_darken_clamps_near_the_bottom() {
        // 2 would step to -1 unclamped.
        assert_eq!(Hsl::new(0, 0, 2).darken().l(), 0);
        assert_eq!(Hsl::new(0, 0, 0).darken().l(), 0);
    }

    #[test]
    fn test_lighten_and_darken_leave_hue_and_saturation() {
        let c = Hsl::new(217, 91, 60);
        assert_eq!((c.lighten().h(), c.lighten().s()), (217, 91));
        assert_eq!((c.darken().h(), c.darken().s()), (217, 91));
    }

    #[test]
    fn test_hex_to_rgb_string() {
        assert_eq!(hex_to_rgb("#ff0000").unwrap(), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_rgb_to_hsl_string() {
        assert_eq!(rgb_to_hsl("rgb(0, 0, 0)").unwrap(), "hsl(0 0% 0%)");
        assert_eq!(rgb_to_hsl("rgb(255, 255, 255)").unwrap(), "hsl(0 0% 100%)");
    }

    #[test]
    fn test_lighten_string() {
        assert_eq!(lighten("hsl(0 0% 0%)").unwrap(), "hsl(0 0% 13%)");
    }

    #[test]
    fn test_darken_string() {
        assert_eq!(darken("hsl(0 0% 100%)").unwrap(), "hsl(0 0% 87%)");
    }

    #[test]
    fn test_random_is_deterministic_for_a_seed() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let a = Rgb::random(&mut StdRng::seed_from_u64(7));
        let b = Rgb::random(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_hsl_deserialization_normalizes() {
        // Out-of-range stored components come back wrapped and clamped.
        let hsl: Hsl = serde_json::from_str(r#"{"h":500,"s":200,"l":200}"#).unwrap();
        assert_eq!(hsl, Hsl::new(140, 100, 100));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_hsl_serde_round_trip() {
        let before = Hsl::new(240, 88, 47);
        let json = serde_json::to_string(&before).unwrap();
        assert_eq!(serde_json::from_str::<Hsl>(&json).unwrap(), before);
    }
}
