#[macro_export]
macro_rules! api_funcs {
    ( $( ( $method:ident, $func_name:ident, $url:expr $(, $arg:ident : $arg_ty:ty )* ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[$method($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    $( $arg: $arg_ty, )*
                ) -> Result<HttpResponse, crate::error::Error> {
                    let response = [<$func_name _impl>](pool $(, $arg )*).await?;
                    Ok(HttpResponse::Ok().json(response))
                }
            }
        )+
    };
}

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::Error;

pub fn parse_date_str(s: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| Error::BadRequest(format!("Wrong format on date '{}'", s)))
}

pub fn parse_hhmm_str(s: &str) -> Result<NaiveTime, Error> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| Error::BadRequest(format!("Wrong format on time '{}'", s)))
}

pub fn format_hhmm(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Legacy schedule tables store either a clock time or a duration token
/// (hours may exceed 23). Best effort: anything unrecognized comes back
/// unchanged instead of failing.
pub fn format_hhmm_lenient(raw: &str) -> String {
    if let Ok(time) = parse_hhmm_str(raw) {
        return format_hhmm(&time);
    }

    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() == 2 || parts.len() == 3 {
        let hours = parts[0].trim().parse::<u32>();
        let minutes = parts[1].parse::<u32>();
        let seconds_ok = parts
            .get(2)
            .map_or(true, |s| s.parse::<u32>().map_or(false, |sec| sec < 60));
        if let (Ok(hours), Ok(minutes)) = (hours, minutes) {
            if minutes < 60 && seconds_ok {
                return format!("{:02}:{:02}", hours, minutes);
            }
        }
    }

    raw.to_string()
}

pub fn weekday_name(date: &NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn assert_day_str(day: &str) -> Result<(), Error> {
    const DAYS: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    if DAYS.contains(&day) {
        Ok(())
    } else {
        Err(Error::BadRequest(format!("Unknown weekday '{}'", day)))
    }
}

pub fn format_time_str(time: &NaiveDateTime) -> String {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    format!("{}+00:00", time.format(TIME_FMT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_times_parse_with_and_without_seconds() {
        assert_eq!(
            parse_hhmm_str("09:30").unwrap(),
            NaiveTime::from_hms(9, 30, 0)
        );
        assert_eq!(
            parse_hhmm_str("9:00:00").unwrap(),
            NaiveTime::from_hms(9, 0, 0)
        );
        assert!(parse_hhmm_str("half past nine").is_err());
    }

    #[test]
    fn lenient_formatter_pads_both_representations() {
        assert_eq!(format_hhmm_lenient("9:05:00"), "09:05");
        assert_eq!(format_hhmm_lenient("13:00"), "13:00");
        // duration token past midnight, as MySQL TIME allows
        assert_eq!(format_hhmm_lenient("26:30:00"), "26:30");
    }

    #[test]
    fn lenient_formatter_passes_garbage_through() {
        assert_eq!(format_hhmm_lenient("out to lunch"), "out to lunch");
        assert_eq!(format_hhmm_lenient("10:99"), "10:99");
        assert_eq!(format_hhmm_lenient(""), "");
    }

    #[test]
    fn weekday_names_are_full_words() {
        let monday = NaiveDate::from_ymd(2024, 3, 4);
        assert_eq!(weekday_name(&monday), "Monday");
        assert_eq!(weekday_name(&monday.succ()), "Tuesday");
        assert!(assert_day_str("Sunday").is_ok());
        assert!(assert_day_str("Caturday").is_err());
    }
}
