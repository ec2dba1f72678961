//! User profile, derived goals and the daily ledger.

/// Attributes collected once during onboarding.
///
/// Immutable after onboarding completes; re-running `/set_profile` replaces
/// the whole record.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    /// Minutes of physical activity per day
    pub daily_activity_minutes: u32,
    pub city: String,
}

/// Daily targets derived once at the end of onboarding.
///
/// Not recomputed automatically if inputs change later; re-running
/// onboarding is the only refresh path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goals {
    pub water_ml: u32,
    pub calorie_kcal: u32,
}

/// Running daily counters.
///
/// `water_ml` is signed and deliberately not clamped at zero on write:
/// workout hydration debits may push it negative, and only the *displayed*
/// remaining value is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ledger {
    /// Cumulative water logged (mL), minus workout hydration debits
    pub water_ml: i64,
    /// Cumulative food intake (kcal); fractional because food entries are
    /// rounded to one decimal
    pub food_kcal: f64,
    /// Cumulative workout expenditure (kcal)
    pub burned_kcal: u32,
}

impl Ledger {
    /// Calorie balance: intake minus expenditure. May be negative.
    pub fn calorie_balance(&self) -> f64 {
        self.food_kcal - f64::from(self.burned_kcal)
    }
}

/// A fully onboarded user: profile, derived goals and the ledger.
///
/// Exists only after the onboarding questionnaire completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub profile: Profile,
    pub goals: Goals,
    pub ledger: Ledger,
    /// When onboarding completed (RFC 3339)
    pub created_at: String,
}
