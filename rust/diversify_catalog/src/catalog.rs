// src/catalog.rs

use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, warn};

use crate::criteria::Criteria;
use crate::error::{CatalogError, Result};
use crate::generator::FixtureGenerator;
use crate::loader::SeedData;
use crate::models::Investment;
use crate::pipeline::{self, CatalogPage};

/// Seed plus generated listings for one session. Never mutated after build;
/// browsing only derives views from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    investments: Vec<Investment>,
}

impl Catalog {
    pub fn from_investments(investments: Vec<Investment>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(investments.len());
        for investment in &investments {
            investment.check_invariants()?;
            if !seen.insert(investment.id) {
                warn!(id = investment.id, "duplicate investment id in catalog");
                return Err(CatalogError::DuplicateId(investment.id));
            }
        }
        Ok(Catalog { investments })
    }

    pub fn build<R: Rng>(seed: &SeedData, generator: &mut FixtureGenerator<R>) -> Result<Self> {
        let generated = generator.generate(
            &seed.investments,
            &seed.categories,
            &seed.platforms,
            &seed.correlation_labels,
        )?;

        let mut investments = Vec::with_capacity(seed.investments.len() + generated.len());
        investments.extend(seed.investments.iter().cloned());
        investments.extend(generated);

        let catalog = Self::from_investments(investments)?;
        info!(
            seed = seed.investments.len(),
            total = catalog.len(),
            "built investment catalog"
        );
        Ok(catalog)
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    pub fn len(&self) -> usize {
        self.investments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Investment> {
        self.investments.iter().find(|i| i.id == id)
    }

    // Distinct categories in the order they first appear
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.investments
            .iter()
            .map(|i| i.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn view(&self, criteria: &Criteria, page_size: usize, page_number: usize) -> CatalogPage<'_> {
        pipeline::view(&self.investments, criteria, page_size, page_number)
    }
}
