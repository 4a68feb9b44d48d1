//! GPS/Unix conversion across every tabulated leap second
//!
//! Walks a window of GPS seconds around each table entry and checks that
//! Unix → GPS inverts GPS → Unix, including the half-second mapping of the
//! leap seconds themselves.

use voltage_convert::gps_time::{
    count_leap_seconds, gps_to_unix, is_leap_second, unix_to_gps, Direction,
    GPS_UNIX_EPOCH_OFFSET, LEAP_SECONDS,
};

#[test]
fn test_inverse_around_every_leap_second() {
    for (i, &leap) in LEAP_SECONDS.iter().enumerate() {
        for delta in -3..=3 {
            let gps = (leap + delta) as f64;
            let unix = gps_to_unix(gps);

            if delta == 0 {
                assert_eq!(unix.fract(), 0.5, "leap second {} ({})", i, leap);
            } else {
                assert_eq!(unix.fract(), 0.0, "gps {} near leap {}", gps, leap);
            }

            assert_eq!(unix_to_gps(unix), gps, "gps {} -> unix {}", gps, unix);
        }
    }
}

#[test]
fn test_leap_second_shares_unix_second_with_predecessor() {
    for &leap in &LEAP_SECONDS {
        let before = gps_to_unix((leap - 1) as f64);
        let at = gps_to_unix(leap as f64);
        let after = gps_to_unix((leap + 1) as f64);

        assert_eq!(at, before + 0.5);
        assert_eq!(after, before + 1.0);
    }
}

#[test]
fn test_offset_grows_by_one_per_entry() {
    for (i, &leap) in LEAP_SECONDS.iter().enumerate() {
        let gps = (leap + 1) as f64;
        let offset = gps + GPS_UNIX_EPOCH_OFFSET - gps_to_unix(gps);
        assert_eq!(offset, (i + 1) as f64);
    }
}

#[test]
fn test_known_dates() {
    // 2017-01-01T00:00:00Z, 18 leap seconds in reality; table ends in 2012
    assert_eq!(unix_to_gps(1_483_228_800.0), 1_167_264_016.0);
    assert_eq!(gps_to_unix(1_167_264_016.0), 1_483_228_800.0);

    // 1980-01-06, before any leap second
    assert_eq!(gps_to_unix(86_400.0), 316_051_200.0);
}

#[test]
fn test_negative_and_fractional_inputs() {
    assert_eq!(gps_to_unix(-315_964_800.0), 0.0);
    assert_eq!(unix_to_gps(0.0), -315_964_800.0);
    assert!(!is_leap_second(-1.0));

    // Any fraction is read as the leap marker
    assert_eq!(unix_to_gps(315_964_800.5), 1.0);
}

#[test]
fn test_counts_saturate_at_table_length() {
    assert_eq!(count_leap_seconds(f64::MAX, Direction::GpsToUnix), 16);
    assert_eq!(count_leap_seconds(f64::MAX, Direction::UnixToGps), 16);
    assert_eq!(count_leap_seconds(f64::MIN, Direction::GpsToUnix), 0);
}
