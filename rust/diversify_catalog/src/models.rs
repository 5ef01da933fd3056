// src/models.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::error::{CatalogError, Result};

// Whole-dollar amount. Display strings like "$1,000" are parsed at the input
// boundary and produced again only through Display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    pub const fn new(dollars: u64) -> Self {
        Amount(dollars)
    }

    pub fn dollars(self) -> u64 {
        self.0
    }

    /// Keeps only the digits of `raw` and parses them. Anything that does not
    /// yield a number (no digits, overflow) becomes zero.
    pub fn parse_lenient(raw: &str) -> Self {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        Amount(digits.parse::<u64>().unwrap_or(0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        write!(f, "${}", grouped)
    }
}

// Strict form used for user input: at least one digit is required.
impl FromStr for Amount {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        if !s.chars().any(|c| c.is_ascii_digit()) {
            return Err(CatalogError::InvalidCriteria(format!("Not an amount: {:?}", s)));
        }
        Ok(Amount::parse_lenient(s))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Integer(n) => Amount(n),
            NumberOrText::Float(x) if x.is_finite() && x >= 0.0 => Amount(x as u64),
            NumberOrText::Float(_) => Amount(0),
            NumberOrText::Text(s) => Amount::parse_lenient(&s),
        })
    }
}

// Ratings arrive either as numbers or as numeric strings ("4.5"). Anything
// that is not a finite number becomes zero.
fn lenient_rating<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let rating = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Integer(n) => n as f64,
        NumberOrText::Float(x) => x,
        NumberOrText::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
    };
    Ok(if rating.is_finite() { rating } else { 0.0 })
}

// NaN slips through range checks, so finiteness is checked on its own
fn finite_rating(rating: f64) -> std::result::Result<(), ValidationError> {
    if rating.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite_rating"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Correlation {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
}

impl Correlation {
    pub const ALL: [Correlation; 4] = [
        Correlation::VeryLow,
        Correlation::Low,
        Correlation::Medium,
        Correlation::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Correlation::VeryLow => "Very Low",
            Correlation::Low => "Low",
            Correlation::Medium => "Medium",
            Correlation::High => "High",
        }
    }

    /// Sort position: Very Low 0, Low 1, Medium 2, High 3.
    pub fn ordinal(self) -> u8 {
        match self {
            Correlation::VeryLow => 0,
            Correlation::Low => 1,
            Correlation::Medium => 2,
            Correlation::High => 3,
        }
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Correlation {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Correlation::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::Configuration(format!("Unknown correlation label: {:?}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Building,
    Palette,
    Wine,
    Landmark,
    Leaf,
    Coins,
    Chart,
    #[default]
    #[serde(other)]
    Briefcase,
}

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::Building,
        Icon::Palette,
        Icon::Wine,
        Icon::Landmark,
        Icon::Leaf,
        Icon::Coins,
        Icon::Briefcase,
        Icon::Chart,
    ];
}

// One alternative-investment listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: u32,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub platform: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub min_investment: Amount,
    #[serde(deserialize_with = "lenient_rating")]
    #[validate(range(min = 0.0, max = 5.0), custom(function = "finite_rating"))]
    pub rating: f64,
    pub market_correlation: Correlation,
    #[validate(range(min = 1, max = 5))]
    pub risk_level: u8,
    #[validate(range(min = 1, max = 4))]
    pub liquidity_level: u8,
    pub accredited_only: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub icon: Icon,
}

impl Investment {
    pub fn check_invariants(&self) -> Result<()> {
        self.validate().map_err(|source| CatalogError::InvalidRecord { id: self.id, source })
    }

    // Rating as shown on a listing card, e.g. "4.5"
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample_investment() -> Investment {
        Investment {
            id: 1,
            name: "Flagship Real Estate Fund".to_string(),
            platform: "Fundrise".to_string(),
            category: "Real Estate".to_string(),
            description: "Diversified private real estate.".to_string(),
            min_investment: Amount::new(10),
            rating: 4.5,
            market_correlation: Correlation::Low,
            risk_level: 3,
            liquidity_level: 2,
            accredited_only: false,
            tags: vec!["Real Estate".to_string()],
            pros: vec![],
            cons: vec![],
            icon: Icon::Building,
        }
    }

    #[test]
    fn test_parse_lenient_amounts() {
        assert_eq!(Amount::parse_lenient("$1,000"), Amount::new(1000));
        assert_eq!(Amount::parse_lenient("$25,000"), Amount::new(25000));
        assert_eq!(Amount::parse_lenient("10"), Amount::new(10));
        assert_eq!(Amount::parse_lenient("Contact us"), Amount::new(0));
        assert_eq!(Amount::parse_lenient(""), Amount::new(0));
        // Overflow degrades to zero as well
        assert_eq!(Amount::parse_lenient("$99999999999999999999999"), Amount::new(0));
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::new(0).to_string(), "$0");
        assert_eq!(Amount::new(10).to_string(), "$10");
        assert_eq!(Amount::new(500).to_string(), "$500");
        assert_eq!(Amount::new(1000).to_string(), "$1,000");
        assert_eq!(Amount::new(25000).to_string(), "$25,000");
        assert_eq!(Amount::new(1234567).to_string(), "$1,234,567");
    }

    #[test]
    fn test_amount_from_str_requires_digits() {
        assert_eq!("$2,500".parse::<Amount>().unwrap(), Amount::new(2500));
        assert!("all".parse::<Amount>().is_err());
    }

    #[test]
    fn test_correlation_labels_and_ordinals() {
        assert_eq!("Very Low".parse::<Correlation>().unwrap(), Correlation::VeryLow);
        assert_eq!("medium".parse::<Correlation>().unwrap(), Correlation::Medium);
        assert!("Extreme".parse::<Correlation>().is_err());

        let ordinals: Vec<u8> = Correlation::ALL.iter().map(|c| c.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
        assert_eq!(Correlation::VeryLow.to_string(), "Very Low");
    }

    #[test]
    fn test_deserialize_display_strings() {
        let json = r#"
        {
            "id": 3,
            "name": "Blue-Chip Art",
            "platform": "Masterworks",
            "category": "Art",
            "description": "Shares in contemporary paintings.",
            "minInvestment": "$1,000",
            "rating": "4.2",
            "marketCorrelation": "Very Low",
            "riskLevel": 4,
            "liquidityLevel": 1,
            "accreditedOnly": false,
            "tags": ["Art", "Collectibles"],
            "icon": "palette"
        }"#;

        let investment: Investment = serde_json::from_str(json).unwrap();

        assert_eq!(investment.min_investment, Amount::new(1000));
        assert_eq!(investment.rating, 4.2);
        assert_eq!(investment.market_correlation, Correlation::VeryLow);
        assert_eq!(investment.icon, Icon::Palette);
        assert!(investment.pros.is_empty());
        assert!(investment.check_invariants().is_ok());
    }

    #[test]
    fn test_unparseable_fields_default_to_zero() {
        let json = r#"
        {
            "id": 4,
            "name": "Mystery Fund",
            "platform": "Unknown",
            "category": "Other",
            "minInvestment": "Call for pricing",
            "rating": "n/a",
            "marketCorrelation": "High",
            "riskLevel": 2,
            "liquidityLevel": 2,
            "accreditedOnly": true
        }"#;

        let investment: Investment = serde_json::from_str(json).unwrap();

        assert_eq!(investment.min_investment, Amount::new(0));
        assert_eq!(investment.rating, 0.0);
        assert_eq!(investment.icon, Icon::Briefcase);
    }

    #[test]
    fn test_non_finite_ratings_default_to_zero() {
        for raw in ["\"NaN\"", "\"inf\"", "\"-infinity\""] {
            let json = format!(
                r#"{{
                    "id": 5,
                    "name": "Odd Rating Fund",
                    "platform": "Somewhere",
                    "category": "Art",
                    "minInvestment": "$100",
                    "rating": {},
                    "marketCorrelation": "Low",
                    "riskLevel": 2,
                    "liquidityLevel": 2,
                    "accreditedOnly": false
                }}"#,
                raw
            );

            let investment: Investment = serde_json::from_str(&json).unwrap();
            assert_eq!(investment.rating, 0.0, "rating {}", raw);
            assert!(investment.check_invariants().is_ok());

            let value = serde_json::to_value(&investment).unwrap();
            assert_eq!(value["rating"], 0.0);
        }
    }

    #[test]
    fn test_nan_rating_fails_validation() {
        let mut investment = sample_investment();
        investment.rating = f64::NAN;

        match investment.check_invariants() {
            Err(CatalogError::InvalidRecord { source, .. }) => {
                assert!(source.field_errors().contains_key("rating"));
            }
            other => panic!("Expected InvalidRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_icon_falls_back_to_briefcase() {
        let json = r#"
        {
            "id": 6,
            "name": "Rocket Fund",
            "platform": "Orbit",
            "category": "Space",
            "minInvestment": "$100",
            "rating": 4,
            "marketCorrelation": "Medium",
            "riskLevel": 5,
            "liquidityLevel": 1,
            "accreditedOnly": false,
            "icon": "rocket"
        }"#;

        let investment: Investment = serde_json::from_str(json).unwrap();
        assert_eq!(investment.icon, Icon::Briefcase);
    }

    #[test]
    fn test_serialize_amount_as_display_string() {
        let value = serde_json::to_value(sample_investment()).unwrap();
        assert_eq!(value["minInvestment"], "$10");
        assert_eq!(value["marketCorrelation"], "Low");
        assert_eq!(value["icon"], "building");
    }

    #[test]
    fn test_validate_investment() {
        let investment = sample_investment();
        assert!(investment.check_invariants().is_ok());

        let mut invalid = sample_investment();
        invalid.risk_level = 6;
        invalid.liquidity_level = 0;
        invalid.name = "".to_string();

        match invalid.check_invariants() {
            Err(CatalogError::InvalidRecord { id, source }) => {
                assert_eq!(id, 1);
                let fields = source.field_errors();
                assert!(fields.contains_key("risk_level"));
                assert!(fields.contains_key("liquidity_level"));
                assert!(fields.contains_key("name"));
            }
            other => panic!("Expected InvalidRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_rating_label() {
        let mut investment = sample_investment();
        investment.rating = 4.0;
        assert_eq!(investment.rating_label(), "4.0");
    }
}
