use chrono::NaiveDate;

/// `Jan 5, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
