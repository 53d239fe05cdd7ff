#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::error::ValidationError;

// ── Recurrence ────────────────────────────────────────────────

#[test]
fn test_recurrence_parse() {
    assert_eq!(Recurrence::parse("Weekly"), Some(Recurrence::Weekly));
    assert_eq!(Recurrence::parse("monthly"), Some(Recurrence::Monthly));
    assert_eq!(Recurrence::parse("ANNUALLY"), Some(Recurrence::Annually));
    assert_eq!(Recurrence::parse("yearly"), Some(Recurrence::Annually));
    assert_eq!(Recurrence::parse("fortnightly"), None);
    assert_eq!(Recurrence::parse(""), None);
}

#[test]
fn test_recurrence_roundtrip() {
    for r in Recurrence::all() {
        assert_eq!(Recurrence::parse(r.as_str()), Some(*r));
    }
}

#[test]
fn test_recurrence_display() {
    assert_eq!(format!("{}", Recurrence::Weekly), "Weekly");
    assert_eq!(format!("{}", Recurrence::Annually), "Annually");
}

// ── LeadTime ──────────────────────────────────────────────────

#[test]
fn test_lead_time_parse() {
    assert_eq!(LeadTime::parse("1 day"), LeadTime::OneDay);
    assert_eq!(LeadTime::parse("3 days"), LeadTime::ThreeDays);
    assert_eq!(LeadTime::parse("1 week"), LeadTime::OneWeek);
    assert_eq!(LeadTime::parse("1d"), LeadTime::OneDay);
    assert_eq!(LeadTime::parse("3d"), LeadTime::ThreeDays);
    assert_eq!(LeadTime::parse("1w"), LeadTime::OneWeek);
    assert_eq!(LeadTime::parse("none"), LeadTime::None);
    // Unknown values fall back to no offset, never an error
    assert_eq!(LeadTime::parse("2 weeks"), LeadTime::None);
    assert_eq!(LeadTime::parse(""), LeadTime::None);
}

#[test]
fn test_lead_time_days() {
    assert_eq!(LeadTime::None.days(), 0);
    assert_eq!(LeadTime::OneDay.days(), 1);
    assert_eq!(LeadTime::ThreeDays.days(), 3);
    assert_eq!(LeadTime::OneWeek.days(), 7);
}

#[test]
fn test_lead_time_roundtrip() {
    for lt in LeadTime::all() {
        assert_eq!(LeadTime::parse(lt.as_str()), *lt);
    }
}

// ── Subscription::create ──────────────────────────────────────

#[test]
fn test_create_derives_category_and_reminder() {
    let sub = Subscription::create(
        1,
        "Netflix".into(),
        dec!(15.49),
        "2024-01-15",
        LeadTime::ThreeDays,
        Some(Recurrence::Monthly),
    )
    .unwrap();

    assert!(sub.id.is_none());
    assert_eq!(sub.user_id, 1);
    assert_eq!(sub.category, "Streaming");
    assert_eq!(
        sub.purchase_date,
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    );
    assert_eq!(
        sub.reminder_date,
        NaiveDate::from_ymd_opt(2024, 2, 12).unwrap()
    );
    assert!(!sub.created_at.is_empty());
}

#[test]
fn test_create_unknown_service_gets_empty_category() {
    let sub = Subscription::create(
        1,
        "Gym Membership".into(),
        dec!(30),
        "2024-01-15",
        LeadTime::None,
        Some(Recurrence::Monthly),
    )
    .unwrap();
    assert!(sub.category.is_empty());
}

#[test]
fn test_create_rejects_negative_cost() {
    let err = Subscription::create(
        1,
        "Netflix".into(),
        dec!(-1),
        "2024-01-15",
        LeadTime::None,
        Some(Recurrence::Monthly),
    )
    .unwrap_err();
    assert_eq!(err, ValidationError::NegativeCost(dec!(-1)));
}

#[test]
fn test_create_accepts_zero_cost() {
    let sub = Subscription::create(
        1,
        "Netflix".into(),
        dec!(0),
        "2024-01-15",
        LeadTime::None,
        Some(Recurrence::Monthly),
    );
    assert!(sub.is_ok());
}

#[test]
fn test_create_rejects_unparseable_date() {
    for bad in ["01/15/2024", "2024-13-01", "not-a-date", ""] {
        let err = Subscription::create(
            1,
            "Netflix".into(),
            dec!(10),
            bad,
            LeadTime::None,
            Some(Recurrence::Monthly),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidPurchaseDate(bad.to_string()));
    }
}

// ── recompute_reminder ────────────────────────────────────────

#[test]
fn test_recompute_reminder_after_recurrence_change() {
    let mut sub = Subscription::create(
        1,
        "Netflix".into(),
        dec!(10),
        "2024-01-15",
        LeadTime::ThreeDays,
        Some(Recurrence::Monthly),
    )
    .unwrap();
    assert_eq!(
        sub.reminder_date,
        NaiveDate::from_ymd_opt(2024, 2, 12).unwrap()
    );

    sub.recurrence = Some(Recurrence::Weekly);
    sub.recompute_reminder();
    assert_eq!(
        sub.reminder_date,
        NaiveDate::from_ymd_opt(2024, 1, 19).unwrap()
    );
}

#[test]
fn test_recompute_reminder_is_idempotent() {
    let mut sub = Subscription::create(
        1,
        "Spotify".into(),
        dec!(10.99),
        "2024-01-31",
        LeadTime::OneDay,
        Some(Recurrence::Monthly),
    )
    .unwrap();
    let first = sub.reminder_date;
    sub.recompute_reminder();
    assert_eq!(sub.reminder_date, first);
}
