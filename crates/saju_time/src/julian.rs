//! Julian Day Number conversions for whole civil days.
//!
//! Integer arithmetic only (Fliegel & Van Flandern). The JDN of a civil
//! date is the Julian Date at the following noon, so consecutive dates
//! differ by exactly one.

/// JDN of 2000-01-01.
pub const J2000_JDN: i64 = 2_451_545;

/// Proleptic Gregorian (year, month, day) to Julian Day Number.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Julian Day Number back to proleptic Gregorian (year, month, day).
pub fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000() {
        assert_eq!(julian_day_number(2000, 1, 1), J2000_JDN);
    }

    #[test]
    fn known_dates() {
        assert_eq!(julian_day_number(1900, 1, 1), 2_415_021);
        assert_eq!(julian_day_number(1900, 2, 20), 2_415_071);
        assert_eq!(julian_day_number(1858, 11, 17), 2_400_001);
    }

    #[test]
    fn consecutive_days_across_month_end() {
        let feb28 = julian_day_number(2024, 2, 28);
        assert_eq!(julian_day_number(2024, 2, 29), feb28 + 1);
        assert_eq!(julian_day_number(2024, 3, 1), feb28 + 2);
        assert_eq!(julian_day_number(2023, 3, 1) - julian_day_number(2023, 2, 28), 1);
    }

    #[test]
    fn inverse() {
        for jdn in [2_415_021, 2_451_545, 2_460_000, 2_488_069] {
            let (y, m, d) = jdn_to_calendar(jdn);
            assert_eq!(julian_day_number(y, m, d), jdn);
        }
        assert_eq!(jdn_to_calendar(J2000_JDN), (2000, 1, 1));
    }
}
