use std::fmt;

use time::macros::time;
use time::{Date, Duration, OffsetDateTime, Time, UtcOffset};

use crate::models::TimeRange;

const END_OF_DAY: Time = time!(23:59:59.999);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start.date(), self.end.date())
    }
}

impl TimeRange {
    /// Calendar window for this range in the offset of `now`. Weeks start on
    /// Sunday.
    pub fn date_range(self, now: OffsetDateTime) -> DateRange {
        let today = now.date();
        let offset = now.offset();

        let (first, last) = match self {
            Self::All => {
                return DateRange {
                    start: OffsetDateTime::UNIX_EPOCH,
                    end: now,
                }
            }
            Self::Today => (today, today),
            Self::Week => {
                let back = i64::from(today.weekday().number_days_from_sunday());
                let sunday = today.saturating_sub(Duration::days(back));
                (sunday, sunday.saturating_add(Duration::days(6)))
            }
            Self::Month => {
                let first = today.saturating_sub(Duration::days(i64::from(today.day()) - 1));
                let length = today.month().length(today.year());
                (first, first.saturating_add(Duration::days(i64::from(length) - 1)))
            }
            Self::Year => {
                let first = today.saturating_sub(Duration::days(i64::from(today.ordinal()) - 1));
                let length = time::util::days_in_year(today.year());
                (first, first.saturating_add(Duration::days(i64::from(length) - 1)))
            }
        };

        DateRange {
            start: at(first, Time::MIDNIGHT, offset),
            end: at(last, END_OF_DAY, offset),
        }
    }
}

fn at(date: Date, time: Time, offset: UtcOffset) -> OffsetDateTime {
    date.with_time(time).assume_offset(offset)
}

/// Current wall-clock time in the browser's (or host's) local offset.
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
