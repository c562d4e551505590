/// Categorical scale that splits a range into evenly spaced bands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BandScale {
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Spread `n_bands` over `0..length`, with the same `padding` between and around the bands.
    pub fn new(n_bands: u32, length: f64, padding: f64) -> Self {
        let n_bands = f64::from(n_bands);
        let step = length / (n_bands - padding + 2.0 * padding).max(1.0);
        let start = (length - step * (n_bands - padding)) / 2.0;
        Self { start, step, bandwidth: step * (1.0 - padding) }
    }

    /// Left edge of the band.
    pub fn position(&self, index: u32) -> f64 {
        self.start + self.step * f64::from(index)
    }

    /// Horizontal center of the band.
    pub fn center(&self, index: u32) -> f64 {
        self.position(index) + self.bandwidth / 2.0
    }

    pub const fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

/// Linear mapping from a value domain onto a pixel range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map the value onto the range.
    ///
    /// A degenerate domain maps everything onto the start of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 { r0 } else { r0 + (value - d0) / (d1 - d0) * (r1 - r0) }
    }

    /// Human-friendly tick values spanning the domain.
    pub fn ticks(&self, count: u32) -> Vec<f64> {
        let (d0, d1) = self.domain;
        ticks(d0.min(d1), d0.max(d1), count)
    }
}

/// Round tick values in `start..=stop` spaced 1, 2 or 5 times a power of ten.
pub fn ticks(start: f64, stop: f64, count: u32) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let step = (stop - start) / f64::from(count);
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };

    // Negative powers are handled through the inverse increment to keep the ticks exact.
    if power < 0.0 {
        let inverse = 10_f64.powf(-power) / factor;
        let (first, last) = ((start * inverse).ceil(), (stop * inverse).floor());
        steps(first, last).map(|i| i / inverse).collect()
    } else {
        let increment = 10_f64.powf(power) * factor;
        let (first, last) = ((start / increment).ceil(), (stop / increment).floor());
        steps(first, last).map(|i| i * increment).collect()
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn steps(first: f64, last: f64) -> impl Iterator<Item = f64> {
    (first as i64..=last as i64).map(|i| i as f64)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_band_scale() {
        let scale = BandScale::new(24, 920.0, 0.3);
        let step = 920.0 / 24.3;
        assert_abs_diff_eq!(scale.position(0), 0.3 * step, epsilon = 1e-9);
        assert_abs_diff_eq!(scale.bandwidth(), 0.7 * step, epsilon = 1e-9);
        let end = scale.position(23) + scale.bandwidth() + 0.3 * step;
        assert_abs_diff_eq!(end, 920.0, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 200.0), (350.0, 0.0));
        assert_abs_diff_eq!(scale.apply(0.0), 350.0);
        assert_abs_diff_eq!(scale.apply(100.0), 175.0);
        assert_abs_diff_eq!(scale.apply(200.0), 0.0);
    }

    #[test]
    fn test_degenerate_linear_scale() {
        let scale = LinearScale::new((0.0, 0.0), (350.0, 0.0));
        assert_abs_diff_eq!(scale.apply(42.0), 350.0);
        assert_eq!(scale.ticks(10), vec![0.0]);
    }

    #[test]
    fn test_ticks() {
        let ticks = ticks(0.0, 280.4, 10);
        assert_eq!(ticks.len(), 15);
        assert_abs_diff_eq!(ticks[1], 20.0);
        assert_abs_diff_eq!(ticks[14], 280.0);
    }

    #[test]
    fn test_fractional_ticks() {
        assert_eq!(
            ticks(0.0, 1.0, 10),
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
        );
    }
}
