//! Reminder scheduling: pure calendar math over a subscription's purchase
//! date, recurrence period, and reminder lead time. Nothing here touches the
//! system clock; callers supply "now".

use chrono::{Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{LeadTime, Recurrence, RenewalAlert, Subscription};

/// Purchase date advanced by exactly one recurrence interval.
///
/// Monthly and annual advances use clamped calendar-month arithmetic, so a
/// month-end origin lands on the target month's native last day (Jan 31 ->
/// Feb 28/29, Feb 29 -> Feb 28 in a non-leap year). An unrecognized
/// recurrence (`None`) leaves the date unchanged.
pub fn renewal_date(purchase: NaiveDate, recurrence: Option<Recurrence>) -> NaiveDate {
    let advanced = match recurrence {
        Some(Recurrence::Weekly) => purchase.checked_add_days(Days::new(7)),
        Some(Recurrence::Monthly) => purchase.checked_add_months(Months::new(1)),
        Some(Recurrence::Annually) => purchase.checked_add_months(Months::new(12)),
        None => Some(purchase),
    };
    advanced.unwrap_or(purchase)
}

/// The date the user should be reminded of the next renewal: the renewal
/// date shifted back by the lead-time offset. Deterministic and idempotent
/// for the same inputs; day precision only.
pub fn reminder_date(
    purchase: NaiveDate,
    recurrence: Option<Recurrence>,
    lead_time: LeadTime,
) -> NaiveDate {
    let renewal = renewal_date(purchase, recurrence);
    renewal
        .checked_sub_days(Days::new(lead_time.days()))
        .unwrap_or(renewal)
}

/// Signed whole days from `now` until midnight starting `reminder`,
/// rounding the fractional day up. A reminder due later today reports 0,
/// not -1; the sign flips exactly at the day boundary.
pub fn days_until(reminder: NaiveDate, now: NaiveDateTime) -> i64 {
    let secs = reminder
        .and_time(NaiveTime::MIN)
        .signed_duration_since(now)
        .num_seconds();
    let days = secs.div_euclid(86_400);
    if secs.rem_euclid(86_400) > 0 {
        days + 1
    } else {
        days
    }
}

/// One alert row per subscription, with days-left recomputed against the
/// supplied now.
pub fn renewal_alerts(subs: &[Subscription], now: NaiveDateTime) -> Vec<RenewalAlert> {
    subs.iter()
        .map(|sub| RenewalAlert {
            service: sub.service.clone(),
            cost: sub.cost,
            days_left: days_until(sub.reminder_date, now),
        })
        .collect()
}
