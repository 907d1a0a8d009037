use chrono::NaiveDate;

/// Whole days from `today` until `date`; negative once `date` has passed.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// A lease is active on every day of `[start, end]`, both ends inclusive.
pub fn is_lease_active(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> bool {
    start <= today && today <= end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_days_until() {
        assert_eq!(days_until(d("2024-12-31"), d("2024-12-15")), 16);
        assert_eq!(days_until(d("2024-12-31"), d("2024-12-31")), 0);
        assert_eq!(days_until(d("2024-12-31"), d("2025-01-01")), -1);
    }

    #[test]
    fn test_active_range_is_inclusive() {
        assert!(is_lease_active(d("2024-01-01"), d("2024-12-31"), d("2024-01-01")));
        assert!(is_lease_active(d("2024-01-01"), d("2024-12-31"), d("2024-12-31")));
        assert!(!is_lease_active(d("2024-01-01"), d("2024-12-31"), d("2025-01-01")));
        assert!(!is_lease_active(d("2024-01-01"), d("2024-12-31"), d("2023-12-31")));
    }
}
