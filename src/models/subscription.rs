use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Billing interval of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    Weekly,
    Monthly,
    Annually,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Annually => "Annually",
        }
    }

    /// Unknown values parse to `None`: the scheduler treats them as a
    /// defined no-op, never an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "annually" | "annual" | "yearly" => Some(Self::Annually),
            _ => None,
        }
    }

    pub fn all() -> &'static [Recurrence] {
        &[Self::Weekly, Self::Monthly, Self::Annually]
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How far before the renewal the user wants the reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadTime {
    None,
    OneDay,
    ThreeDays,
    OneWeek,
}

impl LeadTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::OneDay => "1 day",
            Self::ThreeDays => "3 days",
            Self::OneWeek => "1 week",
        }
    }

    /// Unknown values fall back to `None` (no offset).
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "1 day" | "1d" => Self::OneDay,
            "3 days" | "3d" => Self::ThreeDays,
            "1 week" | "1w" | "7 days" => Self::OneWeek,
            _ => Self::None,
        }
    }

    /// Days subtracted from the renewal date.
    pub fn days(&self) -> u64 {
        match self {
            Self::None => 0,
            Self::OneDay => 1,
            Self::ThreeDays => 3,
            Self::OneWeek => 7,
        }
    }

    pub fn all() -> &'static [LeadTime] {
        &[Self::None, Self::OneDay, Self::ThreeDays, Self::OneWeek]
    }
}

impl std::fmt::Display for LeadTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recurring subscription owned by a single user. Records are
/// replace/delete only; they are never edited in place.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: Option<i64>,
    pub user_id: i64,
    /// Provider label, e.g. "Netflix".
    pub service: String,
    /// Derived from `service` via the fixed lookup; empty when unmapped.
    pub category: String,
    /// Per-period amount, currency-agnostic.
    pub cost: Decimal,
    pub purchase_date: NaiveDate,
    pub lead_time: LeadTime,
    pub recurrence: Option<Recurrence>,
    /// Derived, stored: purchase date advanced one recurrence interval,
    /// then shifted back by the lead time.
    pub reminder_date: NaiveDate,
    pub created_at: String,
}

impl Subscription {
    /// Create-time flow: validate, classify, and derive the reminder date.
    /// Rejects a negative cost or an unparseable purchase date; unknown
    /// services are fine and get an empty category.
    pub fn create(
        user_id: i64,
        service: String,
        cost: Decimal,
        purchase_date: &str,
        lead_time: LeadTime,
        recurrence: Option<Recurrence>,
    ) -> Result<Self, ValidationError> {
        if cost < Decimal::ZERO {
            return Err(ValidationError::NegativeCost(cost));
        }
        let purchase = NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidPurchaseDate(purchase_date.to_string()))?;

        let category = crate::categorize::category_for(&service)
            .unwrap_or("")
            .to_string();
        let reminder_date = crate::schedule::reminder_date(purchase, recurrence, lead_time);

        Ok(Self {
            id: None,
            user_id,
            service,
            category,
            cost,
            purchase_date: purchase,
            lead_time,
            recurrence,
            reminder_date,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Re-derive `reminder_date` from the current inputs. Must be called
    /// instead of hand-editing the field whenever purchase date, recurrence,
    /// or lead time changes.
    pub fn recompute_reminder(&mut self) {
        self.reminder_date =
            crate::schedule::reminder_date(self.purchase_date, self.recurrence, self.lead_time);
    }
}
