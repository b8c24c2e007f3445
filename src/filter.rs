//! Client-side date-range narrowing of fetched records.
//!
//! The banner list and the contact list use different boundary rules and both
//! are kept: the banner list keeps records strictly between two instants, the
//! contact list keeps records from the start of the first day through the end
//! of the last day (inclusive, in a fixed UTC offset).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};

/// Records carrying a creation timestamp.
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// Open interval: `start < t < end`.
    Open {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Closed interval from 00:00:00.000 of the first day to 23:59:59.999 of
    /// the last day, both taken in the given offset.
    WholeDays {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl DateRange {
    pub fn open(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        DateRange::Open { start, end }
    }

    pub fn whole_days(first: NaiveDate, last: NaiveDate, offset: FixedOffset) -> Self {
        let start = first.and_time(NaiveTime::MIN);
        let end = last
            .and_time(NaiveTime::MIN)
            .checked_add_signed(TimeDelta::days(1) - TimeDelta::milliseconds(1))
            .unwrap_or(NaiveDateTime::MAX);
        DateRange::WholeDays {
            start: local_to_utc(start, offset),
            end: local_to_utc(end, offset),
        }
    }

    /// Open interval from 00:00 of `first` to 00:00 of the day after `last`,
    /// both in `offset`.
    pub fn open_days(first: NaiveDate, last: NaiveDate, offset: FixedOffset) -> Self {
        let start = local_to_utc(first.and_time(NaiveTime::MIN), offset);
        let end = match last.succ_opt() {
            Some(next) => local_to_utc(next.and_time(NaiveTime::MIN), offset),
            None => DateTime::<Utc>::MAX_UTC,
        };
        DateRange::Open { start, end }
    }

    /// Builds a whole-day range only when both ends are picked.
    pub fn from_picked_days(first: Option<NaiveDate>, last: Option<NaiveDate>, offset: FixedOffset) -> Option<Self> {
        match (first, last) {
            (Some(first), Some(last)) => Some(Self::whole_days(first, last, offset)),
            _ => None,
        }
    }

    /// Open-interval counterpart of [`DateRange::from_picked_days`].
    pub fn from_picked_open_days(first: Option<NaiveDate>, last: Option<NaiveDate>, offset: FixedOffset) -> Option<Self> {
        match (first, last) {
            (Some(first), Some(last)) => Some(Self::open_days(first, last, offset)),
            _ => None,
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        match *self {
            DateRange::Open { start, end } => at > start && at < end,
            DateRange::WholeDays { start, end } => at >= start && at <= end,
        }
    }
}

/// Wall-clock time in `offset` as UTC, clamped to the representable range.
fn local_to_utc(local: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    match local.checked_sub_signed(shift) {
        Some(utc) => Utc.from_utc_datetime(&utc),
        None if shift > TimeDelta::zero() => DateTime::<Utc>::MIN_UTC,
        None => DateTime::<Utc>::MAX_UTC,
    }
}

/// Keeps the records whose creation time falls in `range`, in input order.
/// `None` returns the input unchanged.
pub fn filter_by_created<T: Timestamped + Clone>(records: &[T], range: Option<&DateRange>) -> Vec<T> {
    match range {
        None => records.to_vec(),
        Some(range) => records
            .iter()
            .filter(|r| range.contains(r.created_at()))
            .cloned()
            .collect(),
    }
}
