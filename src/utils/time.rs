use chrono::NaiveDate;

/// Today's calendar date in the user's timezone, for the form default.
pub fn today_local() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Table display format, e.g. "Mar 01, 2024".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}
