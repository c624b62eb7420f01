use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a user-supplied meeting date: "today" or YYYY-MM-DD.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.eq_ignore_ascii_case("today") {
        return Some(today());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Long display form used in banners, e.g. "June 18, 2026".
pub fn display_date(d: &NaiveDate) -> String {
    d.format("%B %-d, %Y").to_string()
}
