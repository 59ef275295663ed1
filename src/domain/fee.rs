/// Flat charge covering the first [`BASE_HOURS`].
pub const BASE_CHARGE: u64 = 10;
pub const BASE_HOURS: u32 = 2;
/// Charged for every whole hour beyond [`BASE_HOURS`].
pub const HOURLY_RATE: u64 = 10;

/// Parking charge for a stay of `hours` whole hours.
///
/// Depends on the duration alone: 10 up to and including two hours,
/// then 10 more for each additional hour.
pub fn charge(hours: u32) -> u64 {
    if hours <= BASE_HOURS {
        return BASE_CHARGE;
    }
    BASE_CHARGE + u64::from(hours - BASE_HOURS) * HOURLY_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_tiers() {
        let cases = [
            (0, 10),
            (1, 10),
            (2, 10),
            (3, 20),
            (5, 40),
            (10, 90),
            (24, 230),
        ];

        for (hours, expected) in cases {
            assert_eq!(charge(hours), expected, "charge for {} hours", hours);
        }
    }

    #[test]
    fn test_charge_does_not_overflow() {
        let expected = BASE_CHARGE + u64::from(u32::MAX - BASE_HOURS) * HOURLY_RATE;
        assert_eq!(charge(u32::MAX), expected);
    }
}
