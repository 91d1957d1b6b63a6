//! Account plans and their quotas.
//!
//! Plans are a fixed table; users reference one by index, stored as a string in the
//! `user.plan` column.

use crate::model::plan::AccountPlanDto;

/// Quotas and price of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
    pub name: &'static str,
    /// Maximum number of live shares a user may publish.
    pub note_upload_count: u64,
    pub ai_generate_day: u64,
    pub ai_generate_chars: u64,
    /// Per-image upload ceiling in megabytes.
    pub image_upload_size: u64,
    pub pay: u64,
}

const FREE: PlanLimits = PlanLimits {
    name: "Free",
    note_upload_count: 10,
    ai_generate_day: 100,
    ai_generate_chars: 1000,
    image_upload_size: 5,
    pay: 0,
};

const BASIC: PlanLimits = PlanLimits {
    name: "Basic",
    note_upload_count: 10_000,
    ai_generate_day: 1000,
    ai_generate_chars: 5000,
    image_upload_size: 10,
    pay: 0,
};

const PRO: PlanLimits = PlanLimits {
    name: "Pro",
    note_upload_count: 100_000,
    ai_generate_day: 10_000,
    ai_generate_chars: 10_000,
    image_upload_size: 20,
    pay: 10,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountPlan {
    #[default]
    Free,
    Basic,
    Pro,
}

impl AccountPlan {
    pub const ALL: [AccountPlan; 3] = [AccountPlan::Free, AccountPlan::Basic, AccountPlan::Pro];

    /// Resolves the value stored in `user.plan`.
    ///
    /// Anything that is not a known plan index resolves to `Free`.
    pub fn from_stored(value: &str) -> Self {
        match value.trim() {
            "1" => Self::Basic,
            "2" => Self::Pro,
            _ => Self::Free,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Basic => 1,
            Self::Pro => 2,
        }
    }

    /// Value written to `user.plan`.
    pub fn stored(self) -> String {
        self.index().to_string()
    }

    pub fn limits(self) -> &'static PlanLimits {
        match self {
            Self::Free => &FREE,
            Self::Basic => &BASIC,
            Self::Pro => &PRO,
        }
    }

    pub fn into_dto(self) -> AccountPlanDto {
        let limits = self.limits();

        AccountPlanDto {
            index: self.index(),
            name: limits.name.to_string(),
            note_upload_count: limits.note_upload_count,
            ai_generate_day: limits.ai_generate_day,
            ai_generate_chars: limits.ai_generate_chars,
            image_upload_size: limits.image_upload_size,
            pay: limits.pay,
        }
    }
}
