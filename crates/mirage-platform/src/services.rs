//! Host service traits and desktop implementations.

use serde::{Deserialize, Serialize};

use mirage_types::error::Result;

// ---------------------------------------------------------------------------
// Wall clock
// ---------------------------------------------------------------------------

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// The kanji used in the fixed ja-JP date rendering (日曜日, 月曜日, ...).
    pub fn kanji(&self) -> &'static str {
        match self {
            Self::Sunday => "日",
            Self::Monday => "月",
            Self::Tuesday => "火",
            Self::Wednesday => "水",
            Self::Thursday => "木",
            Self::Friday => "金",
            Self::Saturday => "土",
        }
    }

    fn from_index(idx: u32) -> Self {
        match idx {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }
}

/// A broken-down wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl WallClock {
    /// Day of the week for this date (Tomohiko Sakamoto's algorithm).
    pub fn weekday(&self) -> Weekday {
        let t = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let year = i32::from(self.year);
        let y = if self.month < 3 { year - 1 } else { year };
        let idx =
            (y + y / 4 - y / 100 + y / 400 + t[(self.month - 1) as usize] + i32::from(self.day))
                % 7;
        Weekday::from_index(idx as u32)
    }
}

/// The fixed ja-JP rendering used by the `date` command:
/// `2026年8月6日木曜日 12:34:56`. Month and day are unpadded, the time is
/// zero-padded. No timezone handling.
impl std::fmt::Display for WallClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}月{}日{}曜日 {:02}:{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.weekday().kanji(),
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Abstraction over the host wall clock.
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> Result<WallClock>;
}

// ---------------------------------------------------------------------------
// Scheduled navigation
// ---------------------------------------------------------------------------

/// A navigation side effect scheduled by the `exit` command.
///
/// The interpreter only records the descriptor; performing (or ignoring, or
/// cancelling) the navigation after the delay is entirely up to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledNavigation {
    /// Target URL to open in a new browsing context.
    pub url: String,
    /// Delay before the host should act, in milliseconds.
    pub delay_ms: u64,
}

impl ScheduledNavigation {
    pub fn new(url: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            url: url.into(),
            delay_ms,
        }
    }
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default clock implementation for desktop hosts using `std` facilities.
#[derive(Debug, Default)]
pub struct DesktopClock;

impl DesktopClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for DesktopClock {
    fn now(&self) -> Result<WallClock> {
        use std::time::SystemTime as StdTime;
        let dur = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default();
        let secs = dur.as_secs();

        // Simple UTC breakdown (no TZ handling -- good enough for a facade).
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let hour = (time_of_day / 3600) as u8;
        let minute = ((time_of_day % 3600) / 60) as u8;
        let second = (time_of_day % 60) as u8;

        let (year, month, day) = days_to_ymd(days);

        Ok(WallClock {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }
}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Convert days since Unix epoch to (year, month, day).
pub(crate) fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let leap = is_leap(year);
    let month_days: [u64; 12] = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 0u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    if month == 0 {
        month = 12;
    }
    (year, month, (days + 1) as u8)
}

pub(crate) fn is_leap(y: u16) -> bool {
    (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
}
