quantity!(MegawattHourRate, "€/MWh");
quantity!(KilowattHourRate, "€/kWh");

impl MegawattHourRate {
    pub const ZERO: Self = Self(0.0);
}

impl From<MegawattHourRate> for KilowattHourRate {
    fn from(rate: MegawattHourRate) -> Self {
        Self(rate.0 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_from_megawatt_hour_rate() {
        assert_abs_diff_eq!(KilowattHourRate::from(MegawattHourRate(123.4)).0, 0.1234);
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.3}", KilowattHourRate(0.12345)), "0.123 €/kWh");
    }

    #[test]
    fn test_ordering() {
        assert!(MegawattHourRate(-1.0) < MegawattHourRate::ZERO);
        assert_eq!(
            [MegawattHourRate(2.0), MegawattHourRate(1.0)].into_iter().min(),
            Some(MegawattHourRate(1.0))
        );
    }
}
