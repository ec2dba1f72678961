// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Food calorie lookup.
//!
//! Resolution chain: the OpenFoodFacts search API first, then a built-in
//! table of six common foods, then a flat 100 kcal/100 g default. The chain
//! always resolves; lookup failures only demote to the next step.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::LookupError;
use crate::text::capitalize;

/// Calories per 100 g assumed for food nothing else could resolve.
pub const FALLBACK_KCAL_PER_100G: u32 = 100;

/// kJ per kcal, for products that only report energy in kJ.
const KJ_PER_KCAL: f64 = 4.184;

/// Short fixed timeout for the food search request.
const FOOD_TIMEOUT: Duration = Duration::from_secs(5);

/// Built-in fallback table of common foods.
const BUILTIN_FOODS: [(&str, &str, u32); 6] = [
    ("банан", "Банан", 89),
    ("яблоко", "Яблоко", 52),
    ("гречка", "Гречка", 132),
    ("рис", "Рис", 130),
    ("курица", "Курица", 165),
    ("говядина", "Говядина", 250),
];

/// A resolved food: display name and energy density.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodInfo {
    pub name: String,
    pub kcal_per_100g: u32,
}

/// Source of per-100 g calorie data for a free-text food name.
#[async_trait]
pub trait FoodLookupSource: Send + Sync {
    /// Best candidate for the given name, or `None` when the source has no
    /// usable match.
    async fn lookup(&self, name: &str) -> Result<Option<FoodInfo>, LookupError>;
}

/// Resolve a food name, never failing.
///
/// Falls through the chain: external source, built-in table, flat default.
pub async fn resolve_food(source: &dyn FoodLookupSource, name: &str) -> FoodInfo {
    match source.lookup(name).await {
        Ok(Some(info)) => return info,
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, food = %name, "Food lookup failed, using local table");
        }
    }

    builtin_food(name).unwrap_or_else(|| FoodInfo {
        name: capitalize(name),
        kcal_per_100g: FALLBACK_KCAL_PER_100G,
    })
}

/// Match against the built-in table: exact key first, then substring in
/// either direction. Case-insensitive.
fn builtin_food(name: &str) -> Option<FoodInfo> {
    let normalized = name.to_lowercase();

    let entry = BUILTIN_FOODS
        .iter()
        .find(|(key, _, _)| *key == normalized)
        .or_else(|| {
            BUILTIN_FOODS
                .iter()
                .find(|(key, _, _)| normalized.contains(key) || key.contains(&normalized))
        })?;

    Some(FoodInfo {
        name: entry.1.to_string(),
        kcal_per_100g: entry.2,
    })
}

/// OpenFoodFacts search API client.
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl FoodLookupSource for OpenFoodFactsClient {
    async fn lookup(&self, name: &str) -> Result<Option<FoodInfo>, LookupError> {
        let url = format!("{}/cgi/search.pl", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("action", "process"),
                ("search_terms", name),
                ("json", "true"),
            ])
            .timeout(FOOD_TIMEOUT)
            .send()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Request(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Payload(e.to_string()))?;

        let Some(product) = body.products.into_iter().next() else {
            return Ok(None);
        };

        let Some(kcal_per_100g) = product.kcal_per_100g() else {
            return Ok(None);
        };

        let display_name = product
            .product_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| capitalize(name));

        Ok(Some(FoodInfo {
            name: display_name,
            kcal_per_100g,
        }))
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct Product {
    product_name: Option<String>,
    #[serde(default)]
    nutriments: Nutriments,
}

#[derive(Deserialize, Default)]
struct Nutriments {
    /// Energy in kcal per 100 g (preferred)
    #[serde(rename = "energy-kcal_100g")]
    energy_kcal_100g: Option<f64>,
    /// Energy in kJ per 100 g (converted when kcal is absent)
    #[serde(rename = "energy_100g")]
    energy_100g: Option<f64>,
}

impl Product {
    /// Per-100 g energy in kcal, preferring the kcal field and converting
    /// from kJ otherwise. Zero or missing energy counts as unusable.
    fn kcal_per_100g(&self) -> Option<u32> {
        if let Some(kcal) = self.nutriments.energy_kcal_100g {
            if kcal > 0.0 {
                return Some(kcal as u32);
            }
        }
        let kj = self.nutriments.energy_100g?;
        let kcal = (kj / KJ_PER_KCAL).round();
        (kcal > 0.0).then_some(kcal as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_exact_match() {
        let info = builtin_food("банан").expect("known food");
        assert_eq!(info.name, "Банан");
        assert_eq!(info.kcal_per_100g, 89);
    }

    #[test]
    fn test_builtin_match_is_case_insensitive() {
        assert_eq!(builtin_food("Рис").expect("known food").kcal_per_100g, 130);
    }

    #[test]
    fn test_builtin_substring_both_directions() {
        // input contains the key
        assert_eq!(
            builtin_food("спелый банан").expect("match").name,
            "Банан"
        );
        // key contains the input
        assert_eq!(builtin_food("греч").expect("match").name, "Гречка");
    }

    #[test]
    fn test_builtin_unknown_food() {
        assert!(builtin_food("пицца").is_none());
    }

    #[test]
    fn test_kj_conversion() {
        let product = Product {
            product_name: None,
            nutriments: Nutriments {
                energy_kcal_100g: None,
                energy_100g: Some(418.4),
            },
        };
        assert_eq!(product.kcal_per_100g(), Some(100));
    }

    #[test]
    fn test_kcal_preferred_over_kj() {
        let product = Product {
            product_name: None,
            nutriments: Nutriments {
                energy_kcal_100g: Some(89.4),
                energy_100g: Some(1000.0),
            },
        };
        assert_eq!(product.kcal_per_100g(), Some(89));
    }

    #[test]
    fn test_zero_energy_is_unusable() {
        let product = Product {
            product_name: None,
            nutriments: Nutriments {
                energy_kcal_100g: Some(0.0),
                energy_100g: None,
            },
        };
        assert_eq!(product.kcal_per_100g(), None);
    }
}
