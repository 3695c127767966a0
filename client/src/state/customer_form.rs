//! Customer intake draft.
//!
//! The form binds raw strings; `CustomerDraft::validate` turns them into the
//! `NewCustomer` payload that is posted verbatim. Only shape checks happen
//! here (required fields, numbers that parse, a birth date in the past). The
//! backend owns every business rule.

#[cfg(test)]
#[path = "customer_form_test.rs"]
mod customer_form_test;

use time::Date;

use crate::net::types::{Customer, CustomerUpdate, Gender, NewCustomer, RiskAppetite};
use crate::util::age::{age_on, parse_birth_date};

/// Key under `existing_insurance` carrying the customer's current sum assured.
pub const EXISTING_COVER_KEY: &str = "total_coverage";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Enter the customer's name.")]
    MissingName,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Enter a valid date of birth.")]
    InvalidBirthDate,
    #[error("Date of birth cannot be in the future.")]
    FutureBirthDate,
    #[error("{field} must be a non-negative number.")]
    InvalidNumber { field: &'static str },
}

/// Raw form values, exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub gender: String,
    pub occupation: String,
    pub annual_income: String,
    pub family_size: String,
    pub dependents: String,
    pub existing_cover: String,
    pub health_conditions: String,
    pub lifestyle_factors: String,
    pub risk_appetite: String,
    pub investment_goals: String,
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: String::new(),
            gender: Gender::default().as_str().to_owned(),
            occupation: String::new(),
            annual_income: String::new(),
            family_size: String::new(),
            dependents: String::new(),
            existing_cover: String::new(),
            health_conditions: String::new(),
            lifestyle_factors: String::new(),
            risk_appetite: RiskAppetite::default().as_str().to_owned(),
            investment_goals: String::new(),
        }
    }
}

impl CustomerDraft {
    /// Draft pre-filled from a stored customer, for the edit form.
    pub fn from_customer(customer: &Customer) -> Self {
        let p = &customer.profile;
        Self {
            name: p.name.clone(),
            email: p.email.clone(),
            phone: p.phone.clone().unwrap_or_default(),
            date_of_birth: p.date_of_birth.clone().unwrap_or_default(),
            gender: p.gender.unwrap_or_default().as_str().to_owned(),
            occupation: p.occupation.clone().unwrap_or_default(),
            annual_income: amount_text(p.annual_income),
            family_size: p.family_size.map(|n| n.to_string()).unwrap_or_default(),
            dependents: p.dependents.map(|n| n.to_string()).unwrap_or_default(),
            existing_cover: amount_text(recorded_cover(p.existing_insurance.as_ref())),
            health_conditions: join_list(p.health_conditions.as_deref()),
            lifestyle_factors: join_list(p.lifestyle_factors.as_deref()),
            risk_appetite: p.risk_appetite.unwrap_or_default().as_str().to_owned(),
            investment_goals: join_list(p.investment_goals.as_deref()),
        }
    }

    /// Age shown next to the birth-date field while typing.
    pub fn derived_age(&self, today: Date) -> Option<u32> {
        parse_birth_date(&self.date_of_birth)
            .filter(|birth| *birth <= today)
            .map(|birth| age_on(birth, today))
    }

    /// Build the creation payload.
    ///
    /// # Errors
    ///
    /// Returns the first `DraftError` found, in form order.
    pub fn validate(&self, today: Date) -> Result<NewCustomer, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(DraftError::InvalidEmail);
        }

        let (date_of_birth, age) = match non_empty(&self.date_of_birth) {
            None => (None, None),
            Some(raw) => {
                let birth = parse_birth_date(&raw).ok_or(DraftError::InvalidBirthDate)?;
                if birth > today {
                    return Err(DraftError::FutureBirthDate);
                }
                (Some(raw), Some(age_on(birth, today)))
            }
        };

        let annual_income = parse_amount(&self.annual_income, "Annual income")?;
        let family_size = parse_count(&self.family_size, "Family size")?;
        let dependents = parse_count(&self.dependents, "Dependents")?;
        let existing_cover = parse_amount(&self.existing_cover, "Existing cover")?;

        Ok(NewCustomer {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: non_empty(&self.phone),
            date_of_birth,
            age,
            gender: Gender::parse(self.gender.trim()),
            occupation: non_empty(&self.occupation),
            annual_income,
            family_size,
            dependents,
            existing_insurance: existing_cover.map(|cover| serde_json::json!({ EXISTING_COVER_KEY: cover })),
            health_conditions: split_list(&self.health_conditions),
            lifestyle_factors: split_list(&self.lifestyle_factors),
            risk_appetite: RiskAppetite::parse(self.risk_appetite.trim()),
            investment_goals: split_list(&self.investment_goals),
        })
    }
}

impl CustomerDraft {
    /// Build the `PUT /customers/{id}` body. Identity fields are not part of
    /// an update; a blank optional field clears the stored value.
    ///
    /// # Errors
    ///
    /// Returns the first `DraftError` found, in form order.
    pub fn validate_update(&self) -> Result<CustomerUpdate, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }
        let annual_income = parse_amount(&self.annual_income, "Annual income")?;
        let family_size = parse_count(&self.family_size, "Family size")?;
        let dependents = parse_count(&self.dependents, "Dependents")?;
        let existing_cover = parse_amount(&self.existing_cover, "Existing cover")?;

        Ok(CustomerUpdate {
            name: Some(name.to_owned()),
            phone: non_empty(&self.phone),
            occupation: non_empty(&self.occupation),
            annual_income,
            family_size,
            dependents,
            existing_insurance: existing_cover.map(|cover| serde_json::json!({ EXISTING_COVER_KEY: cover })),
            health_conditions: split_list(&self.health_conditions),
            lifestyle_factors: split_list(&self.lifestyle_factors),
            risk_appetite: RiskAppetite::parse(self.risk_appetite.trim()),
            investment_goals: split_list(&self.investment_goals),
        })
    }
}

/// Current sum assured recorded under `existing_insurance`, if numeric.
pub fn recorded_cover(existing_insurance: Option<&serde_json::Value>) -> Option<f64> {
    existing_insurance?.get(EXISTING_COVER_KEY)?.as_f64()
}

#[allow(clippy::cast_possible_truncation)]
fn amount_text(amount: Option<f64>) -> String {
    match amount {
        Some(n) if n.fract() == 0.0 => format!("{}", n as i64),
        Some(n) => n.to_string(),
        None => String::new(),
    }
}

fn join_list(items: Option<&[String]>) -> String {
    items.map(|items| items.join(", ")).unwrap_or_default()
}

fn looks_like_email(raw: &str) -> bool {
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Rupee amount; grouping commas are accepted (`12,00,000`).
fn parse_amount(raw: &str, field: &'static str) -> Result<Option<f64>, DraftError> {
    let Some(value) = non_empty(raw) else {
        return Ok(None);
    };
    let cleaned: String = value.chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(Some(n)),
        _ => Err(DraftError::InvalidNumber { field }),
    }
}

fn parse_count(raw: &str, field: &'static str) -> Result<Option<u32>, DraftError> {
    let Some(value) = non_empty(raw) else {
        return Ok(None);
    };
    value.parse::<u32>().map(Some).map_err(|_| DraftError::InvalidNumber { field })
}

/// Comma-separated free text to a list; empty input means "not provided".
fn split_list(raw: &str) -> Option<Vec<String>> {
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect();
    if items.is_empty() { None } else { Some(items) }
}
