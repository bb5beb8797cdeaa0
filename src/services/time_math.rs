use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat,
    TimeZone,
};

/// Minimum gap between submission and appointment, in minutes.
pub const MIN_LEAD_MINUTES: i64 = 3 * 60 + 5;

/// Gap between the reminder and the appointment, in minutes.
pub const REMINDER_OFFSET_MINUTES: i64 = 3 * 60;

/// Offset used to prefill the booking form, in minutes.
pub const FORM_DEFAULT_MINUTES: i64 = 3 * 60 + 10;

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Source of "now" and of the local time zone used to interpret submitted times.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Resolve a wall-clock time in the local zone. `None` when the time does not exist
    /// (e.g. skipped by a DST transition). Ambiguous times resolve to the earlier instant.
    fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>>;

    /// Re-express an instant with the local zone's offset at that instant.
    fn to_local(&self, dt: DateTime<FixedOffset>) -> DateTime<FixedOffset>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.fixed_offset())
    }

    fn to_local(&self, dt: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        dt.with_timezone(&Local).fixed_offset()
    }
}

/// A clock frozen at a single instant, interpreting local times in that instant's offset.
#[derive(Clone, Debug)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    /// Build from a local wall-clock string ("YYYY-MM-DD HH:MM") at the given UTC offset.
    pub fn at(local: &str, offset_secs: i32) -> Option<Self> {
        let offset = FixedOffset::east_opt(offset_secs)?;
        let naive = NaiveDateTime::parse_from_str(local, DISPLAY_FORMAT).ok()?;
        let now = offset.from_local_datetime(&naive).single()?;
        Some(Self { now })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        self.now.offset().from_local_datetime(&naive).single()
    }

    fn to_local(&self, dt: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        dt.with_timezone(self.now.offset())
    }
}


/// Combine a `YYYY-MM-DD` date and `HH:mm` (or `HH:mm:ss`) time into a local timestamp.
pub fn parse_appointment(clock: &dyn Clock, date: &str, time: &str) -> Option<DateTime<FixedOffset>> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()?;
    clock.localize(date.and_time(time))
}

pub fn earliest_bookable(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    now + Duration::minutes(MIN_LEAD_MINUTES)
}

pub fn reminder_time(appointment_at: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    appointment_at - Duration::minutes(REMINDER_OFFSET_MINUTES)
}

pub fn form_default(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    now + Duration::minutes(FORM_DEFAULT_MINUTES)
}

pub fn format_display(dt: &DateTime<FixedOffset>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

pub fn format_clock(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%H:%M").to_string()
}

/// ISO-8601 with offset, e.g. `2024-05-01T11:10:00+02:00`.
pub fn format_iso(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(local: &str) -> FixedClock {
        FixedClock::at(local, 2 * 3600).unwrap()
    }

    #[test]
    fn test_parse_appointment_uses_local_offset() {
        let c = clock("2024-05-01 10:00");
        let dt = parse_appointment(&c, "2024-05-01", "14:10").unwrap();
        assert_eq!(format_iso(&dt), "2024-05-01T14:10:00+02:00");
    }

    #[test]
    fn test_parse_appointment_accepts_seconds() {
        let c = clock("2024-05-01 10:00");
        let dt = parse_appointment(&c, "2024-05-01", "14:10:30").unwrap();
        assert_eq!(format_iso(&dt), "2024-05-01T14:10:30+02:00");
    }

    #[test]
    fn test_parse_appointment_rejects_garbage() {
        let c = clock("2024-05-01 10:00");
        assert!(parse_appointment(&c, "tomorrow", "14:10").is_none());
        assert!(parse_appointment(&c, "2024-02-30", "14:10").is_none());
        assert!(parse_appointment(&c, "2024-05-01", "25:00").is_none());
    }

    #[test]
    fn test_earliest_bookable_adds_slack() {
        let c = clock("2024-05-01 10:00");
        assert_eq!(format_display(&earliest_bookable(c.now())), "2024-05-01 13:05");
    }

    #[test]
    fn test_reminder_time_is_exactly_three_hours_before() {
        let c = clock("2024-05-01 10:00");
        let appt = parse_appointment(&c, "2024-05-01", "14:10").unwrap();
        let reminder = reminder_time(appt);
        assert_eq!(appt - reminder, Duration::hours(3));
        assert_eq!(format_display(&reminder), "2024-05-01 11:10");
    }

    #[test]
    fn test_transition_clock_skips_missing_hour() {
        let c = test_support::TransitionClock::amsterdam_spring_2024("2024-03-30 20:00");
        assert!(parse_appointment(&c, "2024-03-31", "02:30").is_none());
        let dt = parse_appointment(&c, "2024-03-31", "04:30").unwrap();
        assert_eq!(format_iso(&dt), "2024-03-31T04:30:00+02:00");
    }

    #[test]
    fn test_reminder_across_dst_change_shows_local_wall_time() {
        let c = test_support::TransitionClock::amsterdam_spring_2024("2024-03-30 20:00");
        let appt = parse_appointment(&c, "2024-03-31", "04:30").unwrap();
        let reminder = c.to_local(reminder_time(appt));
        assert_eq!(appt - reminder, Duration::hours(3));
        assert_eq!(format_display(&reminder), "2024-03-31 00:30");
        assert_eq!(format_iso(&reminder), "2024-03-31T00:30:00+01:00");
    }

    #[test]
    fn test_reminder_crosses_midnight() {
        let c = clock("2024-05-01 10:00");
        let appt = parse_appointment(&c, "2024-05-02", "01:30").unwrap();
        assert_eq!(format_display(&reminder_time(appt)), "2024-05-01 22:30");
        assert_eq!(format_clock(&appt), "01:30");
    }
}
