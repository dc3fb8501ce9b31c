use crate::api::Time;

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

fn plural(n: i64, unit: &str) -> String {
    match n {
        1 => format!("1 {unit}"),
        n => format!("{n} {unit}s"),
    }
}

/// Human-readable distance between `then` and `now`, eg. "about 2 hours ago"
/// or "in 3 days"
pub fn format_relative(then: Time, now: Time) -> String {
    let seconds = (now - then).num_seconds();
    let in_future = seconds < 0;
    let seconds = seconds.abs();
    let minutes = (seconds as f64 / 60.).round() as i64;

    let distance = if minutes < 1 {
        String::from("less than a minute")
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        String::from("about 1 hour")
    } else if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / MINUTES_IN_HOUR as f64).round() as i64;
        format!("about {}", plural(hours, "hour"))
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        String::from("1 day")
    } else if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        plural(days, "day")
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        format!("about {}", plural(months, "month"))
    } else {
        let months = minutes / MINUTES_IN_MONTH;
        if months < 12 {
            let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
            plural(months, "month")
        } else {
            let years = months / 12;
            match months % 12 {
                m if m < 3 => format!("about {}", plural(years, "year")),
                m if m < 9 => format!("over {}", plural(years, "year")),
                _ => format!("almost {}", plural(years + 1, "year")),
            }
        }
    };

    match in_future {
        true => format!("in {distance}"),
        false => format!("{distance} ago"),
    }
}
