// src/criteria.rs

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::{CatalogError, Result};
use crate::models::{Amount, Investment};

// Selector value meaning "no restriction"
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accreditation {
    #[default]
    All,
    Accredited,
    NonAccredited,
}

impl Accreditation {
    pub fn matches(self, accredited_only: bool) -> bool {
        match self {
            Accreditation::All => true,
            Accreditation::Accredited => accredited_only,
            Accreditation::NonAccredited => !accredited_only,
        }
    }
}

impl FromStr for Accreditation {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | ALL => Ok(Accreditation::All),
            "accredited" => Ok(Accreditation::Accredited),
            "non-accredited" => Ok(Accreditation::NonAccredited),
            other => Err(CatalogError::InvalidCriteria(format!("Unknown accreditation filter: {:?}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Rating,
    Correlation,
    MinInvestment,
}

impl SortKey {
    /// Ordering for a stable sort: rating high to low, correlation and
    /// minimum investment low to high.
    pub fn compare(self, a: &Investment, b: &Investment) -> Ordering {
        match self {
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Correlation => a.market_correlation.ordinal().cmp(&b.market_correlation.ordinal()),
            SortKey::MinInvestment => a.min_investment.cmp(&b.min_investment),
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rating" => Ok(SortKey::Rating),
            "correlation" => Ok(SortKey::Correlation),
            "mininvestment" | "min_investment" | "min-investment" => Ok(SortKey::MinInvestment),
            other => Err(CatalogError::InvalidCriteria(format!("Unknown sort key: {:?}", other))),
        }
    }
}

/// Parses a selector value where "all" (or nothing) means no restriction.
pub fn parse_selection<T>(raw: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|e| CatalogError::InvalidCriteria(format!("{:?}: {}", raw, e)))
}

/// The user's filter and sort choices. Changing a choice produces a new value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Criteria {
    pub category: Option<String>,
    pub risk_level: Option<u8>,
    // Keep listings whose minimum investment is at or below this amount
    pub max_min_investment: Option<Amount>,
    pub accreditation: Accreditation,
    pub liquidity_level: Option<u8>,
    pub sort: SortKey,
}

impl Criteria {
    pub fn with_category(self, category: Option<String>) -> Self {
        Criteria { category, ..self }
    }

    pub fn with_risk_level(self, risk_level: Option<u8>) -> Self {
        Criteria { risk_level, ..self }
    }

    pub fn with_max_min_investment(self, max_min_investment: Option<Amount>) -> Self {
        Criteria { max_min_investment, ..self }
    }

    pub fn with_accreditation(self, accreditation: Accreditation) -> Self {
        Criteria { accreditation, ..self }
    }

    pub fn with_liquidity_level(self, liquidity_level: Option<u8>) -> Self {
        Criteria { liquidity_level, ..self }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        Criteria { sort, ..self }
    }

    /// Builds criteria from the raw selector strings of a filter bar.
    pub fn from_selections(
        category: &str,
        risk_level: &str,
        max_min_investment: &str,
        accreditation: &str,
        liquidity_level: &str,
        sort: &str,
    ) -> Result<Self> {
        Ok(Criteria {
            category: parse_selection::<String>(category)?,
            risk_level: parse_selection::<u8>(risk_level)?,
            max_min_investment: parse_selection::<Amount>(max_min_investment)?,
            accreditation: accreditation.parse()?,
            liquidity_level: parse_selection::<u8>(liquidity_level)?,
            sort: sort.parse()?,
        })
    }

    pub fn matches(&self, investment: &Investment) -> bool {
        self.category.as_deref().map_or(true, |c| investment.category == c)
            && self.risk_level.map_or(true, |r| investment.risk_level == r)
            && self.max_min_investment.map_or(true, |max| investment.min_investment <= max)
            && self.accreditation.matches(investment.accredited_only)
            && self.liquidity_level.map_or(true, |l| investment.liquidity_level == l)
    }

    /// Filtered and sorted references into `investments`, in display order.
    /// Ties keep their catalog order.
    pub fn apply<'a>(&self, investments: &'a [Investment]) -> Vec<&'a Investment> {
        let mut rows: Vec<&Investment> = investments.iter().filter(|i| self.matches(i)).collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }
}
