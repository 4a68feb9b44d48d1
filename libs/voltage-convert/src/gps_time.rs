//! GPS ↔ Unix time conversion
//!
//! GPS time counts seconds from 1980-01-06T00:00:00 UTC and never inserts
//! leap seconds; Unix time does. The offset between the two scales is the
//! fixed epoch distance minus the leap seconds inserted so far, looked up in
//! a static table.
//!
//! A GPS second that falls exactly on an inserted leap second has no Unix
//! counterpart, so it maps to the half second before the next Unix second
//! (`xxx.5`). [`unix_to_gps`] recognises that half second and recovers the
//! original GPS second.
//!
//! # Examples
//!
//! ```rust
//! use voltage_convert::gps_time::{gps_to_unix, unix_to_gps};
//!
//! assert_eq!(gps_to_unix(0.0), 315_964_800.0);
//! assert_eq!(unix_to_gps(315_964_800.0), 0.0);
//!
//! // 1981-07-01 leap second
//! let unix = gps_to_unix(46_828_800.0);
//! assert_eq!(unix, 362_793_599.5);
//! assert_eq!(unix_to_gps(unix), 46_828_800.0);
//! ```

use tracing::debug;

/// Seconds between the Unix epoch and the GPS epoch
pub const GPS_UNIX_EPOCH_OFFSET: f64 = 315_964_800.0;

/// Leap second insertion instants, in GPS seconds, ascending
///
/// Ends with the 2012-07-01 leap second. There is no runtime update path.
pub const LEAP_SECONDS: [i64; 16] = [
    46_828_800,
    78_364_801,
    109_900_802,
    173_059_203,
    252_028_804,
    315_187_205,
    346_723_206,
    393_984_007,
    425_520_008,
    457_056_009,
    504_489_610,
    551_750_411,
    599_184_012,
    820_108_813,
    914_803_214,
    1_025_136_015,
];

/// Which time scale the argument of [`count_leap_seconds`] is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Argument is a GPS time
    GpsToUnix,
    /// Argument is a Unix time already shifted by the epoch offset
    UnixToGps,
}

/// Count the leap seconds that precede `time`
///
/// For `GpsToUnix` an entry counts once `time >= entry`. For `UnixToGps` the
/// argument lacks the leap seconds that came before each entry, so entry `i`
/// counts once `time >= entry - i`.
pub fn count_leap_seconds(time: f64, direction: Direction) -> u32 {
    let mut count = 0;
    for (i, &leap) in LEAP_SECONDS.iter().enumerate() {
        let threshold = match direction {
            Direction::GpsToUnix => leap,
            Direction::UnixToGps => leap - i as i64,
        };
        if time >= threshold as f64 {
            count += 1;
        }
    }
    count
}

/// Check whether `gps` is exactly one of the tabulated leap seconds
pub fn is_leap_second(gps: f64) -> bool {
    LEAP_SECONDS.iter().any(|&leap| gps == leap as f64)
}

/// Convert GPS seconds to Unix seconds
pub fn gps_to_unix(gps: f64) -> f64 {
    let leaps = count_leap_seconds(gps, Direction::GpsToUnix);
    let mut unix = gps + GPS_UNIX_EPOCH_OFFSET - f64::from(leaps);
    if is_leap_second(gps) {
        debug!(gps, "GPS time falls on a leap second");
        unix += 0.5;
    }
    unix
}

/// Convert Unix seconds to GPS seconds
///
/// Any fractional part is read as the half-second marker produced by
/// [`gps_to_unix`] for a leap second.
pub fn unix_to_gps(unix: f64) -> f64 {
    let (unix, is_leap) = if unix.fract() != 0.0 {
        (unix - 0.5, 1.0)
    } else {
        (unix, 0.0)
    };

    let gps = unix - GPS_UNIX_EPOCH_OFFSET;
    let leaps = count_leap_seconds(gps, Direction::UnixToGps);
    gps + f64::from(leaps) + is_leap
}
