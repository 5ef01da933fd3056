// src/generator.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::{CatalogError, Result};
use crate::models::{Amount, Correlation, Icon, Investment};
use crate::templates;

/// Fabricates extra listings to pad a catalog.
///
/// The random source is injected so tests can pass a seeded generator;
/// [`FixtureGenerator::from_entropy`] is what a live session uses.
pub struct FixtureGenerator<R: Rng> {
    rng: R,
    config: GeneratorConfig,
}

impl FixtureGenerator<StdRng> {
    pub fn from_entropy(config: GeneratorConfig) -> Self {
        FixtureGenerator::new(StdRng::from_entropy(), config)
    }

    pub fn seeded(seed: u64, config: GeneratorConfig) -> Self {
        FixtureGenerator::new(StdRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> FixtureGenerator<R> {
    pub fn new(rng: R, config: GeneratorConfig) -> Self {
        FixtureGenerator { rng, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates `generated_count` listings with ids starting right after the
    /// seed records. The seed list only anchors the id offset.
    pub fn generate(
        &mut self,
        seed_investments: &[Investment],
        categories: &[String],
        platforms: &[String],
        correlation_labels: &[String],
    ) -> Result<Vec<Investment>> {
        self.config.check()?;
        require_non_empty("categories", categories)?;
        require_non_empty("platforms", platforms)?;
        require_non_empty("correlation labels", correlation_labels)?;

        let correlations = correlation_labels
            .iter()
            .map(|label| label.parse::<Correlation>())
            .collect::<Result<Vec<_>>>()?;

        let first_id = u32::try_from(seed_investments.len() + 1)
            .map_err(|_| CatalogError::Configuration("Seed list is too large".to_string()))?;
        let count = self.config.generated_count;

        let mut generated = Vec::with_capacity(count);
        for offset in 0..count {
            let id = u32::try_from(offset)
                .ok()
                .and_then(|offset| first_id.checked_add(offset))
                .ok_or_else(|| CatalogError::Configuration("Generated ids overflow".to_string()))?;
            let investment = self.generate_one(id, categories, platforms, &correlations);
            investment.check_invariants()?;
            generated.push(investment);
        }

        debug!(first_id, count, "generated synthetic investments");
        Ok(generated)
    }

    fn generate_one(
        &mut self,
        id: u32,
        categories: &[String],
        platforms: &[String],
        correlations: &[Correlation],
    ) -> Investment {
        let category = &categories[self.rng.gen_range(0..categories.len())];
        let platform = &platforms[self.rng.gen_range(0..platforms.len())];
        let icon = Icon::ALL[self.rng.gen_range(0..Icon::ALL.len())];
        let market_correlation = correlations[self.rng.gen_range(0..correlations.len())];
        let risk_level = self.rng.gen_range(1..=5u8);
        let choices = &self.config.min_investment_choices;
        let min_investment = Amount::new(choices[self.rng.gen_range(0..choices.len())]);
        let liquidity_level = self.rng.gen_range(1..=4u8);
        let accredited_only = self.rng.gen_bool(self.config.accredited_probability);

        let name = match templates::template_for(category) {
            Some(template) => template.names[self.rng.gen_range(0..template.names.len())].to_string(),
            None => templates::fallback_name(category),
        };

        let raw_rating = self.config.rating_floor + self.rng.gen::<f64>() * self.config.rating_spread;
        let rating = (raw_rating * 10.0).round() / 10.0;

        Investment {
            id,
            name,
            platform: platform.clone(),
            category: category.clone(),
            description: templates::description_for(category),
            min_investment,
            rating,
            market_correlation,
            risk_level,
            liquidity_level,
            accredited_only,
            tags: templates::tags_for(category),
            pros: templates::pros_for(category),
            cons: templates::cons_for(category),
            icon,
        }
    }
}

fn require_non_empty(what: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(CatalogError::Configuration(format!("Cannot generate investments: no {} given", what)));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_INVESTMENT_CHOICES;
    use crate::loader::SeedData;
    use more_asserts::{assert_ge, assert_le};

    fn generate_from_builtin(seed: u64) -> Vec<Investment> {
        let data = SeedData::builtin();
        let mut generator = FixtureGenerator::seeded(seed, GeneratorConfig::default());
        generator
            .generate(&data.investments, &data.categories, &data.platforms, &data.correlation_labels)
            .unwrap()
    }

    #[test]
    fn test_generated_ids_are_contiguous_after_seed() {
        let generated = generate_from_builtin(7);
        let ids: Vec<u32> = generated.iter().map(|i| i.id).collect();
        assert_eq!(ids, (7..=30).collect::<Vec<u32>>());
    }

    #[test]
    fn test_generated_values_stay_in_range() {
        for seed in 0..20 {
            for investment in generate_from_builtin(seed) {
                assert_ge!(investment.risk_level, 1);
                assert_le!(investment.risk_level, 5);
                assert_ge!(investment.liquidity_level, 1);
                assert_le!(investment.liquidity_level, 4);
                assert_ge!(investment.rating, 3.5);
                assert_le!(investment.rating, 5.0);
                assert!(MIN_INVESTMENT_CHOICES.contains(&investment.min_investment.dollars()));
            }
        }
    }

    #[test]
    fn test_names_come_from_category_templates() {
        for investment in generate_from_builtin(3) {
            let template = templates::template_for(&investment.category).unwrap();
            assert!(template.names.contains(&investment.name.as_str()));
            assert_eq!(investment.tags, templates::tags_for(&investment.category));
        }
    }

    #[test]
    fn test_unknown_category_uses_fallback_name() {
        let mut generator = FixtureGenerator::seeded(1, GeneratorConfig::default());
        let generated = generator
            .generate(&[], &["Sneakers".to_string()], &["Drop".to_string()], &["High".to_string()])
            .unwrap();

        assert_eq!(generated[0].id, 1);
        assert!(generated.iter().all(|i| i.name == "Sneakers Portfolio"));
        assert!(generated.iter().all(|i| i.market_correlation == Correlation::High));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        assert_eq!(generate_from_builtin(42), generate_from_builtin(42));
    }

    #[test]
    fn test_accredited_probability_extremes() {
        let data = SeedData::builtin();
        for (probability, expected) in [(0.0, false), (1.0, true)] {
            let config = GeneratorConfig { accredited_probability: probability, ..GeneratorConfig::default() };
            let mut generator = FixtureGenerator::seeded(5, config);
            let generated = generator
                .generate(&data.investments, &data.categories, &data.platforms, &data.correlation_labels)
                .unwrap();
            assert!(generated.iter().all(|i| i.accredited_only == expected));
        }
    }

    #[test]
    fn test_empty_inputs_are_configuration_errors() {
        let data = SeedData::builtin();
        let mut generator = FixtureGenerator::seeded(0, GeneratorConfig::default());

        let result = generator.generate(&data.investments, &[], &data.platforms, &data.correlation_labels);
        assert!(matches!(result, Err(CatalogError::Configuration(_))));

        let result = generator.generate(&data.investments, &data.categories, &[], &data.correlation_labels);
        assert!(matches!(result, Err(CatalogError::Configuration(_))));

        let result = generator.generate(&data.investments, &data.categories, &data.platforms, &[]);
        assert!(matches!(result, Err(CatalogError::Configuration(_))));
    }

    #[test]
    fn test_unknown_correlation_label_is_rejected() {
        let data = SeedData::builtin();
        let mut generator = FixtureGenerator::seeded(0, GeneratorConfig::default());
        let result = generator.generate(&data.investments, &data.categories, &data.platforms, &["Sideways".to_string()]);
        assert!(matches!(result, Err(CatalogError::Configuration(_))));
    }

    #[test]
    fn test_generated_count_follows_config() {
        let data = SeedData::builtin();
        let config = GeneratorConfig { generated_count: 0, ..GeneratorConfig::default() };
        let mut generator = FixtureGenerator::seeded(0, config);
        let generated = generator
            .generate(&data.investments, &data.categories, &data.platforms, &data.correlation_labels)
            .unwrap();
        assert!(generated.is_empty());
    }
}
