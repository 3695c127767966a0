//! Product comparison selection and settings.
//!
//! DESIGN
//! ======
//! The products page lets the advisor tick products and tune the customer
//! profile the backend scores against. Selection is capped so the comparison
//! table stays readable, and a request is only built once at least two
//! products are ticked and the settings parse.

#[cfg(test)]
#[path = "comparison_test.rs"]
mod comparison_test;

use crate::net::types::{ComparisonRequest, CustomerProfile, Gender, RecordId, RiskAppetite};

pub const MIN_COMPARE: usize = 2;
pub const MAX_COMPARE: usize = 4;

/// Premium frequencies the backend prices.
pub const PREMIUM_FREQUENCIES: [&str; 4] = ["yearly", "half_yearly", "quarterly", "monthly"];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    #[error("Select at least {MIN_COMPARE} products to compare.")]
    TooFew,
    #[error("{field} must be a positive number.")]
    InvalidSetting { field: &'static str },
}

// =============================================================================
// SELECTION
// =============================================================================

/// Ordered set of ticked product ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    ids: Vec<RecordId>,
}

impl ComparisonSelection {
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }

    /// Tick or untick `id`. Returns false when the tick was refused because
    /// the selection is already full.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
            return true;
        }
        if self.is_full() {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn can_compare(&self) -> bool {
        self.ids.len() >= MIN_COMPARE
    }

    /// Hint shown next to the compare button while it is disabled.
    pub fn blocked_reason(&self) -> Option<String> {
        match self.ids.len() {
            0 => Some(format!("Select {MIN_COMPARE} to {MAX_COMPARE} products to compare.")),
            n if n < MIN_COMPARE => Some(format!("Select {} more product to compare.", MIN_COMPARE - n)),
            _ => None,
        }
    }
}

// =============================================================================
// SETTINGS
// =============================================================================

/// Raw comparison settings as bound to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonSettings {
    pub age: String,
    pub gender: String,
    pub annual_income: String,
    pub risk_appetite: String,
    pub sum_assured: String,
    pub policy_term: String,
    pub premium_frequency: String,
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            age: "30".to_owned(),
            gender: Gender::default().as_str().to_owned(),
            annual_income: "1000000".to_owned(),
            risk_appetite: RiskAppetite::default().as_str().to_owned(),
            sum_assured: "10000000".to_owned(),
            policy_term: "20".to_owned(),
            premium_frequency: PREMIUM_FREQUENCIES[0].to_owned(),
        }
    }
}

impl ComparisonSettings {
    /// Build the `/products/compare/` body for `selection`.
    ///
    /// # Errors
    ///
    /// `TooFew` when fewer than two products are ticked, otherwise
    /// `InvalidSetting` naming the first field that does not parse.
    pub fn build_request(&self, selection: &ComparisonSelection) -> Result<ComparisonRequest, CompareError> {
        if !selection.can_compare() {
            return Err(CompareError::TooFew);
        }
        let age = positive_u32(&self.age, "Age")?;
        let annual_income = positive_f64(&self.annual_income, "Annual income")?;
        let sum_assured = positive_f64(&self.sum_assured, "Sum assured")?;
        let policy_term = positive_u32(&self.policy_term, "Policy term")?;
        let premium_frequency = PREMIUM_FREQUENCIES
            .into_iter()
            .find(|f| *f == self.premium_frequency.trim())
            .unwrap_or(PREMIUM_FREQUENCIES[0])
            .to_owned();

        Ok(ComparisonRequest {
            product_ids: selection.ids().to_vec(),
            customer_profile: CustomerProfile {
                age,
                gender: Gender::parse(self.gender.trim()).unwrap_or_default(),
                annual_income,
                risk_appetite: RiskAppetite::parse(self.risk_appetite.trim()).unwrap_or_default(),
            },
            sum_assured,
            policy_term,
            premium_frequency,
        })
    }
}

fn positive_u32(raw: &str, field: &'static str) -> Result<u32, CompareError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CompareError::InvalidSetting { field }),
    }
}

fn positive_f64(raw: &str, field: &'static str) -> Result<f64, CompareError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(CompareError::InvalidSetting { field }),
    }
}

/// Human label for a premium frequency code.
pub fn frequency_label(code: &str) -> &'static str {
    match code {
        "half_yearly" => "Half-yearly",
        "quarterly" => "Quarterly",
        "monthly" => "Monthly",
        _ => "Yearly",
    }
}
