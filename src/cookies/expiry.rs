//! Expiry resolution and HTTP-date rendering.

use crate::base::cookieerror::CookieError;
use crate::cookies::attributes::Expires;
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// `Www, dd Mon yyyy HH:MM:SS GMT` (RFC 1123 as used by `toUTCString`).
const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const US_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

/// Resolve an expiry to the point in time written into the cookie.
///
/// `None` means the `expires` attribute is left out: the input was absent,
/// unparseable, overflowed, or lies before the Unix epoch.
pub fn resolve_expiry(expires: Option<&Expires>, now: OffsetDateTime) -> Option<OffsetDateTime> {
    let at = match expires? {
        Expires::Days(days) => offset_by_days(now, *days),
        Expires::At(at) => Some(*at),
        Expires::Text(text) => match parse_date(text) {
            Ok(at) => Some(at),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unparseable cookie expiry");
                None
            }
        },
    }?;

    if at < OffsetDateTime::UNIX_EPOCH {
        tracing::debug!(expires = %at, "ignoring cookie expiry before the epoch");
        return None;
    }

    Some(at)
}

fn offset_by_days(now: OffsetDateTime, days: f64) -> Option<OffsetDateTime> {
    let offset = Duration::checked_seconds_f64(days * SECONDS_PER_DAY)?;
    now.checked_add(offset)
}

/// Best-effort date parsing for free-form `expires` text.
///
/// Accepted, in order: HTTP date (`Tue, 24 Dec 2030 23:15:30 GMT`),
/// RFC 2822, RFC 3339, `YYYY-MM-DD` and `MM/DD/YYYY`. Dates without a time
/// are taken as midnight UTC.
pub fn parse_date(text: &str) -> Result<OffsetDateTime, CookieError> {
    let text = text.trim();

    if let Ok(at) = PrimitiveDateTime::parse(text, HTTP_DATE) {
        return Ok(at.assume_utc());
    }
    if let Ok(at) = OffsetDateTime::parse(text, &Rfc2822) {
        return Ok(at);
    }
    if let Ok(at) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(at);
    }
    if let Ok(date) = Date::parse(text, ISO_DATE) {
        return Ok(date.midnight().assume_utc());
    }
    if let Ok(date) = Date::parse(text, US_DATE) {
        return Ok(date.midnight().assume_utc());
    }

    Err(CookieError::invalid_expiry(text))
}

/// Render a point in time as an HTTP date in GMT.
pub fn format_http_date(at: OffsetDateTime) -> Result<String, CookieError> {
    at.to_offset(UtcOffset::UTC)
        .format(HTTP_DATE)
        .map_err(|_| CookieError::ExpiryOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2030-12-20 23:15:30 UTC);

    fn http(expires: Expires) -> Option<String> {
        resolve_expiry(Some(&expires), NOW).map(|at| format_http_date(at).unwrap())
    }

    #[test]
    fn test_absent_is_session() {
        assert_eq!(resolve_expiry(None, NOW), None);
    }

    #[test]
    fn test_days() {
        assert_eq!(http(Expires::Days(4.0)).as_deref(), Some("Tue, 24 Dec 2030 23:15:30 GMT"));
        assert_eq!(http(Expires::Days(5.0)).as_deref(), Some("Wed, 25 Dec 2030 23:15:30 GMT"));
        assert_eq!(http(Expires::Days(30.0)).as_deref(), Some("Sun, 19 Jan 2031 23:15:30 GMT"));
        assert_eq!(http(Expires::Days(14.0)).as_deref(), Some("Fri, 03 Jan 2031 23:15:30 GMT"));
    }

    #[test]
    fn test_fractional_and_negative_days() {
        assert_eq!(http(Expires::Days(1.5)).as_deref(), Some("Sun, 22 Dec 2030 11:15:30 GMT"));
        assert_eq!(http(Expires::Days(-1.0)).as_deref(), Some("Thu, 19 Dec 2030 23:15:30 GMT"));
    }

    #[test]
    fn test_absolute_used_as_is() {
        let at = datetime!(2031-01-20 00:00:00 UTC);
        assert_eq!(resolve_expiry(Some(&Expires::At(at)), NOW), Some(at));
    }

    #[test]
    fn test_offset_is_normalized_to_gmt() {
        let at = datetime!(2031-01-20 02:00:00 +02:00);
        assert_eq!(format_http_date(at).unwrap(), "Mon, 20 Jan 2031 00:00:00 GMT");
    }

    #[test]
    fn test_text_formats() {
        let expected = datetime!(2031-01-08 00:00:00 UTC);
        assert_eq!(parse_date("01/08/2031").unwrap(), expected);
        assert_eq!(parse_date("1/8/2031").unwrap(), expected);
        assert_eq!(parse_date("2031-01-08").unwrap(), expected);
        assert_eq!(parse_date("2031-01-08T00:00:00Z").unwrap(), expected);
        assert_eq!(parse_date("Wed, 08 Jan 2031 00:00:00 GMT").unwrap(), expected);
        assert_eq!(parse_date("Wed, 08 Jan 2031 00:00:00 +0000").unwrap(), expected);
    }

    #[test]
    fn test_invalid_text_fails_open() {
        assert!(matches!(
            parse_date("anInvalidDateString"),
            Err(CookieError::InvalidExpiry { .. })
        ));
        assert_eq!(resolve_expiry(Some(&Expires::Text("not-a-date".into())), NOW), None);
    }

    #[test]
    fn test_non_finite_and_overflow_fail_open() {
        assert_eq!(resolve_expiry(Some(&Expires::Days(f64::NAN)), NOW), None);
        assert_eq!(resolve_expiry(Some(&Expires::Days(f64::INFINITY)), NOW), None);
        assert_eq!(resolve_expiry(Some(&Expires::Days(1e12)), NOW), None);
    }

    #[test]
    fn test_before_epoch_fails_open() {
        let at = datetime!(1960-01-01 00:00:00 UTC);
        assert_eq!(resolve_expiry(Some(&Expires::At(at)), NOW), None);
    }
}
