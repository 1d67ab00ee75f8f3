// Module name shadows the `serde` crate; use `::serde` for the external crate.
use ::serde::Serializer;
use chrono::NaiveDate;

/// Wire format for calendar dates: `dd-MM-yyyy`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a `dd-MM-yyyy` date. Returns `None` when the text does not match.
pub fn parse_dmy(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Serialize a `NaiveDate` as `dd-MM-yyyy`.
pub fn to_dmy<S>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.collect_str(&date.format(DATE_FORMAT))
}
