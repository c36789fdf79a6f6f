//! Relative timestamps for comment rows ("5 minutes ago").

use chrono::{DateTime, Utc};

pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    if seconds < 45 {
        "just now".to_string()
    } else if minutes < 2 {
        "a minute ago".to_string()
    } else if minutes < 60 {
        format!("{minutes} minutes ago")
    } else if hours < 2 {
        "an hour ago".to_string()
    } else if hours < 24 {
        format!("{hours} hours ago")
    } else if days < 2 {
        "yesterday".to_string()
    } else if days < 30 {
        format!("{days} days ago")
    } else if months < 2 {
        "a month ago".to_string()
    } else if days < 365 {
        format!("{months} months ago")
    } else if years < 2 {
        "a year ago".to_string()
    } else {
        format!("{years} years ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(now: DateTime<Utc>, back: Duration) -> String {
        format_time_ago(now - back, now)
    }

    #[test]
    fn buckets_read_naturally() {
        let now = Utc::now();
        assert_eq!(at(now, Duration::seconds(10)), "just now");
        assert_eq!(at(now, Duration::seconds(70)), "a minute ago");
        assert_eq!(at(now, Duration::minutes(5)), "5 minutes ago");
        assert_eq!(at(now, Duration::minutes(90)), "an hour ago");
        assert_eq!(at(now, Duration::hours(6)), "6 hours ago");
        assert_eq!(at(now, Duration::hours(30)), "yesterday");
        assert_eq!(at(now, Duration::days(12)), "12 days ago");
        assert_eq!(at(now, Duration::days(40)), "a month ago");
        assert_eq!(at(now, Duration::days(200)), "6 months ago");
        assert_eq!(at(now, Duration::days(400)), "a year ago");
        assert_eq!(at(now, Duration::days(800)), "2 years ago");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now + Duration::seconds(30), now), "just now");
    }
}
