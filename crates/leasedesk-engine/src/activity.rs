use crate::calendar::{days_until, is_lease_active};
use chrono::NaiveDate;
use leasedesk_types::Lease;
use serde::Serialize;
use std::fmt;

/// Active leases with fewer days left than this are flagged as expiring.
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// Lease state derived from its dates relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LeaseActivity {
    Active,
    ExpiringSoon { days_left: i64 },
    Expired,
    Upcoming,
}

impl LeaseActivity {
    pub fn label(&self) -> &'static str {
        match self {
            LeaseActivity::Active => "Active",
            LeaseActivity::ExpiringSoon { .. } => "Expiring Soon",
            LeaseActivity::Expired => "Expired",
            LeaseActivity::Upcoming => "Upcoming",
        }
    }

    /// Both `Active` and `ExpiringSoon` fall inside the lease term
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            LeaseActivity::Active | LeaseActivity::ExpiringSoon { .. }
        )
    }
}

impl fmt::Display for LeaseActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaseActivity::ExpiringSoon { days_left } => {
                write!(f, "{} ({}d)", self.label(), days_left)
            }
            _ => f.write_str(self.label()),
        }
    }
}

pub fn classify_lease(lease: &Lease, today: NaiveDate) -> LeaseActivity {
    let active = is_lease_active(lease.start_date, lease.end_date, today);
    let days_left = days_until(lease.end_date, today);

    if active && days_left < EXPIRING_SOON_DAYS {
        LeaseActivity::ExpiringSoon { days_left }
    } else if active {
        LeaseActivity::Active
    } else if days_left < 0 {
        LeaseActivity::Expired
    } else {
        LeaseActivity::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn lease(start: &str, end: &str) -> Lease {
        Lease {
            id: 1,
            tenant_id: 1,
            unit_id: 1,
            start_date: d(start),
            end_date: d(end),
            rent_amount: Decimal::from(1200),
        }
    }

    #[test]
    fn test_expiring_soon_inside_threshold() {
        let activity = classify_lease(&lease("2024-01-01", "2024-12-31"), d("2024-12-15"));
        assert_eq!(activity, LeaseActivity::ExpiringSoon { days_left: 16 });
        assert_eq!(activity.to_string(), "Expiring Soon (16d)");
        assert!(activity.is_active());
    }

    #[test]
    fn test_active_mid_term() {
        let activity = classify_lease(&lease("2024-01-01", "2024-12-31"), d("2024-06-01"));
        assert_eq!(activity, LeaseActivity::Active);
    }

    #[test]
    fn test_expired_after_end() {
        let activity = classify_lease(&lease("2024-01-01", "2024-12-31"), d("2025-01-01"));
        assert_eq!(activity, LeaseActivity::Expired);
        assert!(!activity.is_active());
    }

    #[test]
    fn test_upcoming_before_start() {
        let activity = classify_lease(&lease("2030-01-01", "2030-12-31"), d("2024-06-01"));
        assert_eq!(activity, LeaseActivity::Upcoming);
    }

    #[test]
    fn test_last_day_is_expiring_with_zero_days() {
        let activity = classify_lease(&lease("2024-01-01", "2024-12-31"), d("2024-12-31"));
        assert_eq!(activity, LeaseActivity::ExpiringSoon { days_left: 0 });
    }

    #[test]
    fn test_serializes_with_state_tag() {
        let json = serde_json::to_value(LeaseActivity::ExpiringSoon { days_left: 5 }).unwrap();
        assert_eq!(json, serde_json::json!({"state": "expiring_soon", "days_left": 5}));
    }
}
