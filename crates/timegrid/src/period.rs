//! ISO-8601 periods.
//!
//! A [`Period`] is a bag of calendar-unit fields (years through seconds),
//! printed and parsed in the ISO-8601 standard form: `P1D`, `PT1H`,
//! `P2W3DT4H5M6S`. Each field carries its own sign, so `PT-33M` is a valid
//! period of minus thirty-three minutes.
//!
//! Year and month fields have no fixed length in seconds, so
//! [`Period::to_standard_duration`] refuses them; every other field
//! converts at its standard length (a week is 7 days, a day is 24 hours).

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TimeGridError};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;
const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * 24;
const DAYS_PER_WEEK: i64 = 7;

/// An immutable ISO-8601 period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Period {
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Period {
    pub fn of_years(years: i64) -> Period {
        Period {
            years,
            ..Period::default()
        }
    }

    pub fn of_months(months: i64) -> Period {
        Period {
            months,
            ..Period::default()
        }
    }

    pub fn of_weeks(weeks: i64) -> Period {
        Period {
            weeks,
            ..Period::default()
        }
    }

    pub fn of_days(days: i64) -> Period {
        Period {
            days,
            ..Period::default()
        }
    }

    pub fn of_hours(hours: i64) -> Period {
        Period {
            hours,
            ..Period::default()
        }
    }

    pub fn of_minutes(minutes: i64) -> Period {
        Period {
            minutes,
            ..Period::default()
        }
    }

    pub fn of_seconds(seconds: i64) -> Period {
        Period {
            seconds,
            ..Period::default()
        }
    }

    pub fn years(&self) -> i64 {
        self.years
    }

    pub fn months(&self) -> i64 {
        self.months
    }

    pub fn weeks(&self) -> i64 {
        self.weeks
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Whether every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Period::default()
    }

    /// Parse the ISO-8601 standard form.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::InvalidPeriod`] for anything that is not a
    /// well-formed period: missing `P`, a number without a unit, a unit
    /// without a number, an unknown unit, or a time unit outside the `T`
    /// section.
    ///
    /// # Examples
    ///
    /// ```
    /// use timegrid::Period;
    ///
    /// assert_eq!(Period::parse("P1D").unwrap(), Period::of_days(1));
    /// assert_eq!(Period::parse("PT-33M").unwrap(), Period::of_minutes(-33));
    /// ```
    pub fn parse(s: &str) -> Result<Period> {
        let rest = s.strip_prefix('P').ok_or_else(|| {
            TimeGridError::InvalidPeriod(format!("'{s}': must start with 'P'"))
        })?;

        let mut period = Period::default();
        let mut in_time = false;
        let mut buf = String::new();
        let mut found_any = false;
        let mut found_time = false;

        for ch in rest.chars() {
            match ch {
                'T' => {
                    if !buf.is_empty() {
                        return Err(TimeGridError::InvalidPeriod(format!(
                            "'{s}': number without unit before 'T'"
                        )));
                    }
                    if in_time {
                        return Err(TimeGridError::InvalidPeriod(format!(
                            "'{s}': duplicate 'T' designator"
                        )));
                    }
                    in_time = true;
                }
                '0'..='9' | '-' | '+' => buf.push(ch),
                unit => {
                    if buf.is_empty() {
                        return Err(TimeGridError::InvalidPeriod(format!(
                            "'{s}': expected a number before '{unit}'"
                        )));
                    }
                    let n: i64 = buf.parse().map_err(|_| {
                        TimeGridError::InvalidPeriod(format!("'{s}': invalid number '{buf}'"))
                    })?;
                    buf.clear();
                    found_any = true;

                    found_time |= in_time;
                    let field = match (in_time, unit) {
                        (false, 'Y') => &mut period.years,
                        (false, 'M') => &mut period.months,
                        (false, 'W') => &mut period.weeks,
                        (false, 'D') => &mut period.days,
                        (true, 'H') => &mut period.hours,
                        (true, 'M') => &mut period.minutes,
                        (true, 'S') => &mut period.seconds,
                        _ => {
                            return Err(TimeGridError::InvalidPeriod(format!(
                                "'{s}': unknown unit '{unit}'"
                            )));
                        }
                    };
                    *field = n;
                }
            }
        }

        if !buf.is_empty() {
            return Err(TimeGridError::InvalidPeriod(format!(
                "'{s}': number without unit at end"
            )));
        }
        if !found_any {
            return Err(TimeGridError::InvalidPeriod(format!(
                "'{s}': no fields present"
            )));
        }
        if in_time && !found_time {
            return Err(TimeGridError::InvalidPeriod(format!(
                "'{s}': 'T' designator without time fields"
            )));
        }

        Ok(period)
    }

    /// Print the ISO-8601 standard form. Only non-zero fields appear; the
    /// all-zero period prints as `PT0S`.
    pub fn print(&self) -> String {
        if self.is_zero() {
            return "PT0S".to_string();
        }

        let mut out = String::from("P");
        for (value, unit) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                out.push_str(&format!("{value}{unit}"));
            }
        }
        if self.hours != 0 || self.minutes != 0 || self.seconds != 0 {
            out.push('T');
            for (value, unit) in [
                (self.hours, 'H'),
                (self.minutes, 'M'),
                (self.seconds, 'S'),
            ] {
                if value != 0 {
                    out.push_str(&format!("{value}{unit}"));
                }
            }
        }
        out
    }

    /// Convert to an exact duration using standard field lengths.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::InvalidPeriod`] if the year or month field
    /// is non-zero (neither has a standard length), or
    /// [`TimeGridError::Overflow`] if the summed seconds overflow.
    pub fn to_standard_duration(&self) -> Result<Duration> {
        if self.years != 0 || self.months != 0 {
            return Err(TimeGridError::InvalidPeriod(format!(
                "'{}': years and months have no standard duration",
                self.print()
            )));
        }

        let overflow =
            || TimeGridError::Overflow(format!("'{}': seconds overflow", self.print()));

        let day_count = self
            .weeks
            .checked_mul(DAYS_PER_WEEK)
            .and_then(|w| w.checked_add(self.days))
            .ok_or_else(overflow)?;
        let mut total = day_count.checked_mul(SECONDS_PER_DAY).ok_or_else(overflow)?;
        total = self
            .hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|h| total.checked_add(h))
            .ok_or_else(overflow)?;
        total = self
            .minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(|m| total.checked_add(m))
            .ok_or_else(overflow)?;
        total = total.checked_add(self.seconds).ok_or_else(overflow)?;

        Duration::try_seconds(total).ok_or_else(overflow)
    }

    /// Convert to whole milliseconds using standard field lengths.
    ///
    /// # Errors
    ///
    /// Same conditions as [`to_standard_duration`](Period::to_standard_duration).
    pub fn to_standard_millis(&self) -> Result<i64> {
        Ok(self.to_standard_duration()?.num_milliseconds())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl FromStr for Period {
    type Err = TimeGridError;

    fn from_str(s: &str) -> Result<Period> {
        Period::parse(s)
    }
}

impl Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.print())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Period, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Period::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── parsing ─────────────────────────────────────────────────────────

    #[test]
    fn test_parse_single_fields() {
        assert_eq!(Period::parse("P1Y").unwrap(), Period::of_years(1));
        assert_eq!(Period::parse("P2M").unwrap(), Period::of_months(2));
        assert_eq!(Period::parse("P3W").unwrap(), Period::of_weeks(3));
        assert_eq!(Period::parse("P1D").unwrap(), Period::of_days(1));
        assert_eq!(Period::parse("PT1H").unwrap(), Period::of_hours(1));
        assert_eq!(Period::parse("PT1M").unwrap(), Period::of_minutes(1));
        assert_eq!(Period::parse("PT30S").unwrap(), Period::of_seconds(30));
    }

    #[test]
    fn test_parse_negative_field() {
        assert_eq!(Period::parse("PT-33M").unwrap(), Period::of_minutes(-33));
        assert_eq!(Period::parse("P-1D").unwrap(), Period::of_days(-1));
    }

    #[test]
    fn test_parse_combined_fields() {
        let p = Period::parse("P1Y2M3W4DT5H6M7S").unwrap();
        assert_eq!(p.years(), 1);
        assert_eq!(p.months(), 2);
        assert_eq!(p.weeks(), 3);
        assert_eq!(p.days(), 4);
        assert_eq!(p.hours(), 5);
        assert_eq!(p.minutes(), 6);
        assert_eq!(p.seconds(), 7);
    }

    #[test]
    fn test_parse_month_minute_disambiguation() {
        let p = Period::parse("P1MT1M").unwrap();
        assert_eq!(p.months(), 1);
        assert_eq!(p.minutes(), 1);
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!(Period::parse("PT0S").unwrap(), Period::default());
        assert!(Period::parse("PT0S").unwrap().is_zero());
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for s in ["", "1D", "P", "PT", "P1", "PT1", "PX", "P1X", "P1S", "PTT1M", "P1DT"] {
            assert!(Period::parse(s).is_err(), "expected error for '{s}'");
        }
    }

    // ── printing ────────────────────────────────────────────────────────

    #[test]
    fn test_print_forms() {
        assert_eq!(Period::of_days(1).print(), "P1D");
        assert_eq!(Period::of_hours(1).print(), "PT1H");
        assert_eq!(Period::of_minutes(-33).print(), "PT-33M");
        assert_eq!(Period::default().print(), "PT0S");
        assert_eq!(
            Period::parse("P1Y2M3W4DT5H6M7S").unwrap().print(),
            "P1Y2M3W4DT5H6M7S"
        );
    }

    #[test]
    fn test_print_parse_round_trip() {
        for s in ["P1D", "PT1H", "PT-33M", "P2W", "P1MT1M", "PT0S", "P3DT12H"] {
            let p = Period::parse(s).unwrap();
            assert_eq!(Period::parse(&p.print()).unwrap(), p, "via '{s}'");
        }
    }

    #[test]
    fn test_display_and_from_str() {
        let p: Period = "PT1M".parse().unwrap();
        assert_eq!(p, Period::of_minutes(1));
        assert_eq!(p.to_string(), "PT1M");
    }

    // ── duration conversion ─────────────────────────────────────────────

    #[test]
    fn test_to_standard_duration() {
        assert_eq!(
            Period::parse("P1D").unwrap().to_standard_duration().unwrap(),
            Duration::seconds(86_400)
        );
        assert_eq!(
            Period::parse("P1W").unwrap().to_standard_duration().unwrap(),
            Duration::seconds(7 * 86_400)
        );
        assert_eq!(
            Period::parse("PT1H").unwrap().to_standard_duration().unwrap(),
            Duration::seconds(3_600)
        );
        assert_eq!(
            Period::parse("PT-33M").unwrap().to_standard_duration().unwrap(),
            Duration::seconds(-1_980)
        );
        assert_eq!(Period::parse("PT1M").unwrap().to_standard_millis().unwrap(), 60_000);
    }

    #[test]
    fn test_to_standard_duration_rejects_imprecise_fields() {
        assert!(Period::of_years(1).to_standard_duration().is_err());
        assert!(Period::of_months(1).to_standard_duration().is_err());
        let err = Period::parse("P1Y2M").unwrap().to_standard_duration();
        assert!(err.unwrap_err().to_string().contains("no standard duration"));
    }

    #[test]
    fn test_to_standard_duration_overflow() {
        assert!(Period::of_days(i64::MAX).to_standard_duration().is_err());
        assert!(Period::of_weeks(i64::MAX).to_standard_duration().is_err());
    }

    // ── serde ───────────────────────────────────────────────────────────

    #[test]
    fn test_serde_round_trip() {
        let p = Period::parse("P1DT2H").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"P1DT2H\"");
        assert_eq!(serde_json::from_str::<Period>(&json).unwrap(), p);
    }

    #[test]
    fn test_serde_rejects_malformed_text() {
        assert!(serde_json::from_str::<Period>("\"1D\"").is_err());
    }
}
