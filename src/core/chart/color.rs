use std::fmt::{Display, Formatter};

use serde_with::SerializeDisplay;

use crate::core::statistics::Summary;

#[derive(Copy, Clone, Debug, PartialEq, Eq, SerializeDisplay)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Self = Self(0, 0, 0);
    pub const BLUE: Self = Self(0, 0, 255);
    pub const GREEN: Self = Self(0, 128, 0);
    pub const PURPLE: Self = Self(128, 0, 128);
    pub const RED: Self = Self(255, 0, 0);
    pub const YELLOW: Self = Self(255, 255, 0);

    fn interpolate(self, other: Self, t: f64) -> Self {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = |from: u8, to: u8| {
            (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round().clamp(0.0, 255.0)
                as u8
        };
        Self(channel(self.0, other.0), channel(self.1, other.1), channel(self.2, other.2))
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Green-yellow-red gradient over the price range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorScale {
    domain: [f64; 3],
}

impl ColorScale {
    const STOPS: [Rgb; 3] = [Rgb::GREEN, Rgb::YELLOW, Rgb::RED];

    pub fn new(low: f64, high: f64) -> Self {
        Self { domain: [low, f64::midpoint(low, high), high] }
    }

    /// Values outside the domain are clamped, and a flat domain is all yellow.
    pub fn color(&self, value: f64) -> Rgb {
        let [low, middle, high] = self.domain;
        if low == high {
            return Self::STOPS[1];
        }
        if value <= low {
            return Self::STOPS[0];
        }
        if value >= high {
            return Self::STOPS[2];
        }
        let (index, from, to) = if value < middle { (0, low, middle) } else { (1, middle, high) };
        Self::STOPS[index].interpolate(Self::STOPS[index + 1], (value - from) / (to - from))
    }
}

impl From<&Summary> for ColorScale {
    fn from(summary: &Summary) -> Self {
        Self::new(summary.min.0, summary.max.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Rgb::GREEN.to_string(), "#008000");
        assert_eq!(serde_json::to_string(&Rgb::PURPLE).unwrap(), r##""#800080""##);
    }

    #[test]
    fn test_stops() {
        let scale = ColorScale::new(100.0, 300.0);
        assert_eq!(scale.color(50.0), Rgb::GREEN);
        assert_eq!(scale.color(100.0), Rgb::GREEN);
        assert_eq!(scale.color(200.0), Rgb::YELLOW);
        assert_eq!(scale.color(300.0), Rgb::RED);
        assert_eq!(scale.color(400.0), Rgb::RED);
    }

    #[test]
    fn test_interpolation() {
        let scale = ColorScale::new(100.0, 300.0);
        assert_eq!(scale.color(150.0), Rgb(128, 192, 0));
        assert_eq!(scale.color(250.0), Rgb(255, 128, 0));
    }

    #[test]
    fn test_monotonic_towards_red() {
        let scale = ColorScale::new(0.0, 100.0);
        let colors = (0..=100).map(|value| scale.color(f64::from(value))).collect::<Vec<_>>();
        // Red never decreases, green rises then falls:
        assert!(colors.windows(2).all(|pair| pair[0].0 <= pair[1].0));
        assert!(colors[..=50].windows(2).all(|pair| pair[0].1 <= pair[1].1));
        assert!(colors[50..].windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn test_flat_domain() {
        assert_eq!(ColorScale::new(42.0, 42.0).color(42.0), Rgb::YELLOW);
    }
}
