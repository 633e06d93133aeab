use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Most destinations require this much validity beyond the travel date.
pub const MIN_PASSPORT_VALIDITY_MONTHS: i32 = 6;
const RENEWAL_WARNING_MONTHS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassportStatus {
    Valid,
    RenewSoon,
    NotValid,
}

/// Outcome of a passport validity check against a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassportCheck {
    pub status: PassportStatus,
    pub valid: bool,
    pub months_remaining: i32,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'static str>,
}

/// Whole months between the reference date and expiry; negative once the
/// passport has expired.
fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months
}

pub fn check_passport_validity(expires_on: NaiveDate, today: NaiveDate) -> PassportCheck {
    let months_remaining = whole_months_between(today, expires_on);

    if months_remaining >= MIN_PASSPORT_VALIDITY_MONTHS {
        PassportCheck {
            status: PassportStatus::Valid,
            valid: true,
            months_remaining,
            message: "Your passport meets the minimum validity requirement.",
            recommendation: None,
        }
    } else if months_remaining >= RENEWAL_WARNING_MONTHS {
        PassportCheck {
            status: PassportStatus::RenewSoon,
            valid: true,
            months_remaining,
            message: "Your passport is valid, but consider renewing soon.",
            recommendation: Some(
                "Some countries require 6 months validity. Consider renewing your passport.",
            ),
        }
    } else {
        PassportCheck {
            status: PassportStatus::NotValid,
            valid: false,
            months_remaining,
            message: "Your passport does not meet validity requirements.",
            recommendation: Some("You must renew your passport before applying for a visa."),
        }
    }
}
