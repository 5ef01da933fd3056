// src/loader.rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::models::{Amount, Correlation, Icon, Investment};

// Hand-authored listings plus the value lists the generator draws from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub investments: Vec<Investment>,
    pub categories: Vec<String>,
    pub platforms: Vec<String>,
    pub correlation_labels: Vec<String>,
}

impl SeedData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(json)?;
        seed.check_records()?;
        Ok(seed)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let seed = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.as_ref().display(),
            investments = seed.investments.len(),
            "loaded seed data"
        );
        Ok(seed)
    }

    pub fn check_records(&self) -> Result<()> {
        for investment in &self.investments {
            investment.check_invariants()?;
        }
        for label in &self.correlation_labels {
            label.parse::<Correlation>()?;
        }
        Ok(())
    }

    /// The six listings featured on the site, with the category, platform and
    /// correlation lists used to pad the catalog.
    pub fn builtin() -> Self {
        let investments = vec![
            seed_record(
                1, "Flagship Real Estate Fund", "Fundrise", "Real Estate",
                "Diversified portfolio of private apartment and industrial properties across the U.S.",
                10, 4.5, Correlation::Low, 3, 2, false,
                &["Real Estate", "Income", "Beginner Friendly"], Icon::Building,
            ),
            seed_record(
                2, "Blue-Chip Art Shares", "Masterworks", "Art",
                "Invest in shares of paintings by established artists such as Banksy and Basquiat.",
                500, 4.2, Correlation::VeryLow, 4, 1, false,
                &["Art", "Collectibles", "Low Correlation"], Icon::Palette,
            ),
            seed_record(
                3, "Fine Wine Portfolio", "Vinovest", "Wine",
                "Professionally curated investment-grade wine, stored and insured on your behalf.",
                1000, 4.3, Correlation::VeryLow, 3, 1, false,
                &["Wine", "Collectibles", "Tangible"], Icon::Wine,
            ),
            seed_record(
                4, "Short-Term Credit Notes", "Yieldstreet", "Private Credit",
                "Asset-backed lending opportunities with terms from six months to three years.",
                10000, 4.0, Correlation::Medium, 4, 2, true,
                &["Private Credit", "Income", "Fixed Income"], Icon::Landmark,
            ),
            seed_record(
                5, "Midwest Farmland Offering", "AcreTrader", "Farmland",
                "Own shares of individual farms and earn a portion of annual lease income.",
                10000, 4.4, Correlation::Low, 2, 1, true,
                &["Farmland", "Real Assets", "Inflation Hedge"], Icon::Leaf,
            ),
            seed_record(
                6, "Sports Memorabilia Collection", "Rally", "Collectibles",
                "Buy equity shares in rare cards, memorabilia and classic cars.",
                50, 3.9, Correlation::Low, 5, 3, false,
                &["Collectibles", "Alternative", "Passion Assets"], Icon::Coins,
            ),
        ];

        SeedData {
            investments,
            categories: to_strings(&[
                "Real Estate", "Art", "Wine", "Private Credit",
                "Farmland", "Collectibles", "Venture Capital", "Commodities",
            ]),
            platforms: to_strings(&[
                "Fundrise", "Masterworks", "Vinovest", "Yieldstreet",
                "AcreTrader", "Rally", "Percent", "Republic",
            ]),
            correlation_labels: Correlation::ALL.iter().map(|c| c.label().to_string()).collect(),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn seed_record(
    id: u32,
    name: &str,
    platform: &str,
    category: &str,
    description: &str,
    min_investment: u64,
    rating: f64,
    market_correlation: Correlation,
    risk_level: u8,
    liquidity_level: u8,
    accredited_only: bool,
    tags: &[&str],
    icon: Icon,
) -> Investment {
    Investment {
        id,
        name: name.to_string(),
        platform: platform.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        min_investment: Amount::new(min_investment),
        rating,
        market_correlation,
        risk_level,
        liquidity_level,
        accredited_only,
        tags: to_strings(tags),
        pros: crate::templates::pros_for(category),
        cons: crate::templates::cons_for(category),
        icon,
    }
}
