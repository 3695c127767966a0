//! Age from date of birth.
//!
//! The only derived value the client computes itself. Age is the number of
//! completed years between the birth date and today, never negative.

#[cfg(test)]
#[path = "age_test.rs"]
mod age_test;

use time::Date;
use time::macros::format_description;

/// Parse an HTML `<input type="date">` value (`YYYY-MM-DD`).
pub fn parse_birth_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Completed years between `birth` and `today`.
pub fn age_on(birth: Date, today: Date) -> u32 {
    if birth >= today {
        return 0;
    }
    let mut years = today.year() - birth.year();
    let birthday_pending = (u8::from(today.month()), today.day()) < (u8::from(birth.month()), birth.day());
    if birthday_pending {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Age today for a raw date-of-birth string, if it parses.
pub fn age_from_birth_date(raw: &str) -> Option<u32> {
    parse_birth_date(raw).map(|birth| age_on(birth, today()))
}

/// Current local calendar date.
///
/// In the browser this reads the JS clock; on the server it reads the system
/// clock in UTC.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation)]
        let year = now.get_full_year() as i32;
        #[allow(clippy::cast_possible_truncation)]
        let month = time::Month::try_from((now.get_month() + 1) as u8).unwrap_or(time::Month::January);
        #[allow(clippy::cast_possible_truncation)]
        let day = now.get_date() as u8;
        Date::from_calendar_date(year, month, day).unwrap_or_else(|_| time::OffsetDateTime::UNIX_EPOCH.date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}
