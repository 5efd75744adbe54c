//! Popularity expansion: qualitative category labels per region into
//! the fixed 57-column numeric vector the external schema demands.

use std::collections::BTreeMap;

use rand::Rng;

use rosterforge_core::record::{PopularityCategory, Region};
use rosterforge_core::schema::POPULARITY_COLUMN_COUNT;
use rosterforge_core::tuning::Tuning;

/// Expand region categories into the 57-value popularity vector.
///
/// Every sub-column a region owns is sampled independently from the
/// category's range. Regions missing from the map default silently to
/// `Unknown`.
pub fn expand(
    categories: &BTreeMap<Region, PopularityCategory>,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Vec<i64> {
    let mut values = Vec::with_capacity(POPULARITY_COLUMN_COUNT);
    for region in Region::ALL {
        let category = categories
            .get(&region)
            .copied()
            .unwrap_or(PopularityCategory::Unknown);
        let range = tuning.popularity_range(category);
        for _ in 0..region.column_count() {
            let value = if range.is_pinned() {
                range.min
            } else {
                rng.random_range(range.min..=range.max)
            };
            values.push(i64::from(value));
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn expansion_is_always_57_wide() {
        let tuning = Tuning::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let empty = BTreeMap::new();
        assert_eq!(expand(&empty, &tuning, &mut rng).len(), 57);

        let mut full = BTreeMap::new();
        for region in Region::ALL {
            full.insert(region, PopularityCategory::Superstar);
        }
        assert_eq!(expand(&full, &tuning, &mut rng).len(), 57);
    }

    #[test]
    fn america_block_respects_the_chosen_category_bounds() {
        let tuning = Tuning::default();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut categories = BTreeMap::new();
        categories.insert(Region::America, PopularityCategory::WellKnown);

        for _ in 0..100 {
            let values = expand(&categories, &tuning, &mut rng);
            for value in &values[..11] {
                assert!((35..=65).contains(value), "America value {value} escaped");
            }
        }
    }

    #[test]
    fn missing_regions_expand_to_unknown_zeroes() {
        let tuning = Tuning::default();
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let mut categories = BTreeMap::new();
        categories.insert(Region::America, PopularityCategory::Superstar);

        let values = expand(&categories, &tuning, &mut rng);
        // Everything past America's 11 columns defaults to Unknown.
        for value in &values[11..] {
            assert_eq!(*value, 0);
        }
    }
}
