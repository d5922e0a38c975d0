pub mod forecast;
pub mod history;
pub mod markets;

use chrono::NaiveDate;

pub(crate) fn d(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture dates are well-formed")
}
