// src/templates.rs
//
// Per-category copy used when fabricating listings. Everything here depends on
// the category only; the random parts of a listing are picked by the generator.

use lazy_static::lazy_static;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct CategoryTemplate {
    pub names: [&'static str; 4],
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

lazy_static! {
    pub static ref CATEGORY_TEMPLATES: HashMap<&'static str, CategoryTemplate> = {
        let mut m = HashMap::new();
        m.insert("Real Estate", CategoryTemplate {
            names: ["Income Property Fund", "Sunbelt Rental Portfolio", "Commercial REIT Access", "Multifamily Growth Fund"],
            description: "Fractional ownership of professionally managed income-producing real estate.",
            tags: &["Real Estate", "Income", "Inflation Hedge"],
            pros: &["Rental income distributions", "Tangible underlying assets"],
            cons: &["Multi-year hold periods", "Sensitive to interest rates"],
        });
        m.insert("Art", CategoryTemplate {
            names: ["Blue-Chip Art Collection", "Contemporary Masters Fund", "Post-War Painting Shares", "Emerging Artists Portfolio"],
            description: "Shares in authenticated artworks held in climate-controlled storage.",
            tags: &["Art", "Collectibles", "Low Correlation"],
            pros: &["Historically low correlation to equities", "Expert acquisition team"],
            cons: &["No cash flow until sale", "High platform fees"],
        });
        m.insert("Wine", CategoryTemplate {
            names: ["Fine Wine Cellar", "Bordeaux Vintage Fund", "Burgundy Reserve Portfolio", "Collector Wine Basket"],
            description: "Investment-grade wine stored in bonded warehouses and sold as it matures.",
            tags: &["Wine", "Collectibles", "Tangible"],
            pros: &["Supply shrinks as bottles are consumed", "Insured bonded storage"],
            cons: &["Illiquid secondary market", "Storage and insurance fees"],
        });
        m.insert("Private Credit", CategoryTemplate {
            names: ["Senior Secured Notes", "Short-Term Credit Fund", "Asset-Backed Income Note", "Private Lending Portfolio"],
            description: "Loans to private businesses secured by collateral, paying fixed interest.",
            tags: &["Private Credit", "Income", "Fixed Income"],
            pros: &["Predictable interest payments", "Short durations available"],
            cons: &["Borrower default risk", "Limited transparency"],
        });
        m.insert("Farmland", CategoryTemplate {
            names: ["Midwest Farmland Offering", "Permanent Crop Fund", "Row Crop Land Portfolio", "Orchard Income Partnership"],
            description: "Ownership stakes in U.S. farmland earning crop and lease income.",
            tags: &["Farmland", "Real Assets", "Inflation Hedge"],
            pros: &["Stable long-run land appreciation", "Annual lease income"],
            cons: &["Weather and commodity exposure", "Long lockup periods"],
        });
        m.insert("Collectibles", CategoryTemplate {
            names: ["Sports Memorabilia Shares", "Rare Watch Collection", "Vintage Car Fund", "Trading Card Vault"],
            description: "Equity in rare collectibles sourced, authenticated and stored by the platform.",
            tags: &["Collectibles", "Alternative", "Passion Assets"],
            pros: &["Access to assets normally out of reach", "Secondary trading windows"],
            cons: &["Valuations driven by sentiment", "No income"],
        });
        m.insert("Venture Capital", CategoryTemplate {
            names: ["Early-Stage Startup Fund", "Seed Syndicate Access", "Growth Equity Portfolio", "Founder Network Fund"],
            description: "Stakes in private startups alongside experienced venture investors.",
            tags: &["Venture Capital", "Growth", "Private Equity"],
            pros: &["Outsized upside potential", "Exposure to innovation"],
            cons: &["High failure rate", "Ten-year horizons are common"],
        });
        m.insert("Commodities", CategoryTemplate {
            names: ["Precious Metals Vault", "Energy Transition Metals", "Physical Gold Holdings", "Diversified Commodity Basket"],
            description: "Direct exposure to physical commodities held with a custodian.",
            tags: &["Commodities", "Real Assets", "Inflation Hedge"],
            pros: &["Tends to hold value during inflation", "Easy to understand"],
            cons: &["No yield", "Price swings can be sharp"],
        });
        m
    };
}

pub fn template_for(category: &str) -> Option<&'static CategoryTemplate> {
    CATEGORY_TEMPLATES.get(category)
}

// Unknown categories get a "<Category> Portfolio" name and generic copy.
pub fn fallback_name(category: &str) -> String {
    format!("{} Portfolio", category)
}

pub fn description_for(category: &str) -> String {
    match template_for(category) {
        Some(template) => template.description.to_string(),
        None => format!("A curated {} opportunity offered through an alternative investment platform.", category.to_lowercase()),
    }
}

pub fn tags_for(category: &str) -> Vec<String> {
    match template_for(category) {
        Some(template) => template.tags.iter().map(|t| t.to_string()).collect(),
        None => vec![category.to_string(), "Alternative".to_string()],
    }
}

pub fn pros_for(category: &str) -> Vec<String> {
    match template_for(category) {
        Some(template) => template.pros.iter().map(|p| p.to_string()).collect(),
        None => vec![format!("Exposure to {}", category.to_lowercase()), "Low minimums available".to_string()],
    }
}

pub fn cons_for(category: &str) -> Vec<String> {
    match template_for(category) {
        Some(template) => template.cons.iter().map(|c| c.to_string()).collect(),
        None => vec!["Limited liquidity".to_string(), "Limited track record".to_string()],
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_four_distinct_names() {
        for (category, template) in CATEGORY_TEMPLATES.iter() {
            let mut names = template.names.to_vec();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), 4, "duplicate names for {}", category);
        }
    }

    #[test]
    fn test_known_category_copy() {
        assert_eq!(tags_for("Real Estate"), vec!["Real Estate", "Income", "Inflation Hedge"]);
        assert!(description_for("Wine").contains("wine"));
    }

    #[test]
    fn test_unknown_category_fallbacks() {
        assert!(template_for("Sneakers").is_none());
        assert_eq!(fallback_name("Sneakers"), "Sneakers Portfolio");
        assert_eq!(tags_for("Sneakers"), vec!["Sneakers", "Alternative"]);
        assert!(description_for("Sneakers").contains("sneakers"));
        assert_eq!(pros_for("Sneakers").len(), 2);
        assert_eq!(cons_for("Sneakers").len(), 2);
    }
}
