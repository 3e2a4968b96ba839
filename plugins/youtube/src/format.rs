//! Text helpers that turn raw API values into the strings shown in Alfred.

use jiff::{Timestamp, Unit, tz::TimeZone};

/// Shown when a publish time can't be interpreted.
pub const UNKNOWN_ELAPSED: &str = "unknown";

/// Replaces HTML numeric and named character references with their literal characters.
///
/// The search endpoint returns titles such as `Rock &amp; Roll` or `Don&#39;t Stop`. Anything
/// that doesn't look like a reference is left untouched.
pub fn decode_entities(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}

/// Formats a count the way YouTube does, e.g. `1.5K`, `2M`, or `1B`.
///
/// The value is scaled by the largest applicable threshold and rounded to one decimal place,
/// with a trailing `.0` dropped. Counts below 1,000 are printed as-is. The decimal separator is
/// always `.`.
pub fn format_count(n: u64) -> String {
    const SCALES: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for (threshold, suffix) in SCALES {
        if n < threshold {
            continue;
        }

        // integer rounding to tenths so that large counts don't pick up float noise
        let threshold = u128::from(threshold);
        let tenths = (u128::from(n) * 10 + threshold / 2) / threshold;
        let (whole, fraction) = (tenths / 10, tenths % 10);
        return if fraction == 0 {
            format!("{whole}{suffix}")
        } else {
            format!("{whole}.{fraction}{suffix}")
        };
    }

    n.to_string()
}

/// Describes how long ago `timestamp` was relative to `now`, e.g. `3 days ago`.
///
/// The difference is computed on the UTC calendar and reported in its largest non-zero unit
/// (years, months, days, hours, then minutes). Differences of 14 to 31 days are reported in
/// whole weeks instead. Anything under a minute, or in the future, is `Just now`.
pub fn format_elapsed(timestamp: Timestamp, now: Timestamp) -> String {
    let then = timestamp.to_zoned(TimeZone::UTC);
    let now = now.to_zoned(TimeZone::UTC);
    let span = match then.until((Unit::Year, &now)) {
        Ok(span) => span,
        Err(error) => {
            tracing::warn!(%error, %timestamp, "could not compute elapsed time");
            return UNKNOWN_ELAPSED.to_string();
        }
    };

    if span.is_negative() {
        return "Just now".to_string();
    }

    let years = i64::from(span.get_years());
    let months = i64::from(span.get_months());
    let days = i64::from(span.get_days());
    let hours = i64::from(span.get_hours());
    let minutes = span.get_minutes();

    let (amount, unit) = if years > 0 {
        (years, "year")
    } else if months > 0 {
        (months, "month")
    } else if (14..=31).contains(&days) {
        (days / 7, "week")
    } else if days > 0 {
        (days, "day")
    } else if hours > 0 {
        (hours, "hour")
    } else if minutes > 0 {
        (minutes, "minute")
    } else {
        return "Just now".to_string();
    };

    let plural = if amount > 1 { "s" } else { "" };
    format!("{amount} {unit}{plural} ago")
}

/// Parses an API `publishedAt` value.
///
/// Only the RFC 3339 profile of ISO 8601 the API sends is accepted: `YYYY-MM-DDTHH:MM:SS`, an
/// optional fraction of a second, then `Z` or a `+HH:MM`/`-HH:MM` offset.
pub fn parse_published(raw: &str) -> Option<Timestamp> {
    if !is_rfc3339(raw) {
        tracing::debug!(raw, "publish time is not RFC 3339");
        return None;
    }
    match raw.parse::<Timestamp>() {
        Ok(timestamp) => Some(timestamp),
        Err(error) => {
            tracing::debug!(%error, raw, "unparseable publish time");
            None
        }
    }
}

/// Parses an API `publishedAt` value and describes it with [`format_elapsed`].
///
/// Anything [`parse_published`] rejects yields [`UNKNOWN_ELAPSED`].
pub fn format_published(raw: &str, now: Timestamp) -> String {
    match parse_published(raw) {
        Some(timestamp) => format_elapsed(timestamp, now),
        None => UNKNOWN_ELAPSED.to_string(),
    }
}

fn is_rfc3339(raw: &str) -> bool {
    let b = raw.as_bytes();
    let digits =
        |at: std::ops::Range<usize>| b.get(at).is_some_and(|s| s.iter().all(u8::is_ascii_digit));
    let shaped = digits(0..4)
        && b.get(4) == Some(&b'-')
        && digits(5..7)
        && b.get(7) == Some(&b'-')
        && digits(8..10)
        && matches!(b.get(10), Some(b'T' | b't'))
        && digits(11..13)
        && b.get(13) == Some(&b':')
        && digits(14..16)
        && b.get(16) == Some(&b':')
        && digits(17..19);
    if !shaped {
        return false;
    }

    let mut rest = &b[19..];
    if let Some(fraction) = rest.strip_prefix(b".") {
        let len = fraction.iter().take_while(|c| c.is_ascii_digit()).count();
        if len == 0 {
            return false;
        }
        rest = &fraction[len..];
    }
    match rest {
        [b'Z' | b'z'] => true,
        [b'+' | b'-', h1, h2, b':', m1, m2] => {
            [h1, h2, m1, m2].iter().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;
    use pretty_assertions::assert_eq;

    fn now() -> Timestamp {
        "2026-10-16T12:00:00Z".parse().unwrap()
    }

    fn days_before(now: Timestamp, days: i64) -> Timestamp {
        now - SignedDuration::from_hours(24 * days)
    }

    #[test]
    fn small_counts_are_verbatim() {
        for n in 0..=999 {
            assert_eq!(format_count(n), n.to_string());
        }
    }

    #[test]
    fn counts_get_suffixes() {
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(12_345), "12.3K");
        assert_eq!(format_count(2_000_000), "2M");
        assert_eq!(format_count(2_960_000), "3M");
        assert_eq!(format_count(1_000_000_000), "1B");
        assert_eq!(format_count(7_250_000_000), "7.3B");
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        assert_eq!(format_count(u64::MAX), "18446744073.7B");
    }

    #[test]
    fn elapsed_picks_largest_unit() {
        let now = now();
        assert_eq!(format_elapsed(days_before(now, 400), now), "1 year ago");
        assert_eq!(format_elapsed(days_before(now, 5), now), "5 days ago");
        assert_eq!(format_elapsed(days_before(now, 1), now), "1 day ago");
        assert_eq!(
            format_elapsed(now - SignedDuration::from_hours(3), now),
            "3 hours ago"
        );
        assert_eq!(
            format_elapsed(now - SignedDuration::from_mins(1), now),
            "1 minute ago"
        );
    }

    #[test]
    fn elapsed_uses_weeks_for_two_to_four_weeks() {
        let now = now();
        assert_eq!(format_elapsed(days_before(now, 20), now), "2 weeks ago");
        assert_eq!(format_elapsed(days_before(now, 14), now), "2 weeks ago");
        assert_eq!(format_elapsed(days_before(now, 13), now), "13 days ago");
    }

    #[test]
    fn elapsed_months() {
        let now = now();
        assert_eq!(format_elapsed(days_before(now, 70), now), "2 months ago");
    }

    #[test]
    fn elapsed_just_now() {
        let now = now();
        assert_eq!(format_elapsed(now, now), "Just now");
        assert_eq!(
            format_elapsed(now - SignedDuration::from_secs(30), now),
            "Just now"
        );
        assert_eq!(
            format_elapsed(now + SignedDuration::from_hours(2), now),
            "Just now"
        );
    }

    #[test]
    fn published_requires_offset() {
        let now = now();
        assert_eq!(format_published("2026-10-11T12:00:00Z", now), "5 days ago");
        assert_eq!(
            format_published("2026-10-11T14:00:00+02:00", now),
            "5 days ago"
        );
        assert_eq!(format_published("2026-10-11T12:00:00.250Z", now), "5 days ago");
        assert_eq!(format_published("2026-10-11T12:00:00", now), "unknown");
        assert_eq!(format_published("last tuesday", now), "unknown");
    }

    #[test]
    fn published_rejects_loose_iso8601() {
        let now = now();
        for raw in [
            "2026-10-11 12:00:00Z",
            "2026-10-11T12Z",
            "2026-10-11T12:00Z",
            "2026-10-11T12:00:00+02",
            "2026-10-11T12:00:00+0200",
            "2026-10-11T12:00:00.Z",
            "2026-10-11T12:00:00Z[UTC]",
            "",
        ] {
            assert_eq!(format_published(raw, now), "unknown", "{raw}");
            assert_eq!(parse_published(raw), None, "{raw}");
        }
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(decode_entities("Rock &amp; Roll"), "Rock & Roll");
        assert_eq!(decode_entities("Don&#39;t Stop"), "Don't Stop");
        assert_eq!(decode_entities("&quot;Live&quot; &#x2764;"), "\"Live\" \u{2764}");
        assert_eq!(decode_entities("plain title"), "plain title");
    }
}
