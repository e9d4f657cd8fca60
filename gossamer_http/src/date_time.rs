use chrono::NaiveDateTime;

use nom::bytes::complete::take_while1;

use gossamer_core::grammar::is_alphanum_char;

use gossamer_core::{TextEntity, ParserInput, ParserResult, ParserError, impl_text_entity_traits};

/// The preferred format: IMF-fixdate, e.g. "Sun, 06 Nov 1994 08:49:37 GMT".
const IMF_FIXDATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Obsolete RFC 850 format, e.g. "Sunday, 06-Nov-94 08:49:37 GMT".
const RFC850_DATE: &str = "%A, %d-%b-%y %H:%M:%S GMT";

/// Obsolete asctime format, e.g. "Sun Nov  6 08:49:37 1994".
const ASCTIME_DATE: &str = "%a %b %e %H:%M:%S %Y";

// HTTP-date     = IMF-fixdate / obs-date
// obs-date      = rfc850-date / asctime-date
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-7.1.1.1
//
// All three input formats are accepted (chrono also rejects a day name that
// contradicts the date); rendering always emits IMF-fixdate, so the obsolete
// forms normalize on a parse/render round trip. HTTP dates are always GMT.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct HttpDate(pub NaiveDateTime);

impl TextEntity for HttpDate {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        let (remaining, candidate) = take_while1(|value: char| {
            is_alphanum_char(value) || matches!(value, ',' | ' ' | ':' | '-')
        })(input)?;

        let candidate = candidate.to_string();

        for format in [IMF_FIXDATE, RFC850_DATE, ASCTIME_DATE] {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(&candidate, format) {
                return Ok((remaining, Self(date_time)));
            }
        }

        Err(
            nom::Err::Error(
                ParserError::new(String::from("expected RFC-7231 HTTP-date"), input)
            )
        )
    }

    fn render_text(&self) -> String {
        self.0.format(IMF_FIXDATE).to_string()
    }
}

impl_text_entity_traits!(HttpDate);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use chrono::NaiveDate;

    fn reference_date() -> HttpDate {
        HttpDate(
            NaiveDate::from_ymd_opt(1994, 11, 6)
                .unwrap()
                .and_hms_opt(8, 49, 37)
                .unwrap(),
        )
    }

    #[test]
    fn parse_text_accepts_all_three_formats() {
        assert_eq!(
            HttpDate::from_str("Sun, 06 Nov 1994 08:49:37 GMT"),
            Ok(reference_date()),
        );

        assert_eq!(
            HttpDate::from_str("Sunday, 06-Nov-94 08:49:37 GMT"),
            Ok(reference_date()),
        );

        assert_eq!(
            HttpDate::from_str("Sun Nov  6 08:49:37 1994"),
            Ok(reference_date()),
        );
    }

    #[test]
    fn parse_text_rejects_contradicting_day_name() {
        assert!(HttpDate::from_str("Mon, 06 Nov 1994 08:49:37 GMT").is_err());
    }

    #[test]
    fn render_text_emits_imf_fixdate() {
        assert_eq!(
            reference_date().render_text(),
            String::from("Sun, 06 Nov 1994 08:49:37 GMT"),
        );

        // The obsolete forms normalize to IMF-fixdate.
        let parsed = HttpDate::from_str("Sunday, 06-Nov-94 08:49:37 GMT").unwrap();

        assert_eq!(parsed.to_string(), String::from("Sun, 06 Nov 1994 08:49:37 GMT"));
    }
}
