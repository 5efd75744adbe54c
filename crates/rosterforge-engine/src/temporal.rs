//! Temporal coherence heuristics.
//!
//! Derives birth, debut, and contract-begin dates that respect
//! `birth < debut < contract_begin < campaign_start`. This is a
//! best-effort heuristic, not a scheduler: it never errors and always
//! produces some valid-looking date, clamping when a naive
//! construction would land past the campaign start.

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;

/// Youngest age at which a debut can occur.
const MIN_DEBUT_AGE: u32 = 16;
/// Offset subtracted from the campaign start when a debut would
/// otherwise land past it.
const DEBUT_CLAMP_DAYS: i64 = 30;
/// Same, for contract begin dates.
const CONTRACT_CLAMP_DAYS: i64 = 60;

/// Random date within a year. Day-of-month stays in 1..=28 to
/// sidestep calendar edge cases.
fn date_in_year(year: i32, rng: &mut impl Rng) -> NaiveDate {
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Derive `(birth, debut)` for a wrestler of roughly `age` years at
/// the campaign start, with the debut between age 16 and `age`.
pub fn birth_and_debut(age: u32, campaign_start: NaiveDate, rng: &mut impl Rng) -> (NaiveDate, NaiveDate) {
    let age = age.max(MIN_DEBUT_AGE);
    let birth_year = campaign_start.year() - age as i32;
    let birth = date_in_year(birth_year, rng);
    let debut_age = rng.random_range(MIN_DEBUT_AGE..=age);
    let mut debut = date_in_year(birth_year + debut_age as i32, rng);
    if debut >= campaign_start {
        debut = campaign_start - Duration::days(DEBUT_CLAMP_DAYS);
    }
    if debut <= birth {
        debut = campaign_start - Duration::days(DEBUT_CLAMP_DAYS);
    }
    (birth, debut)
}

/// Contract begin date: uniform over the five years preceding the
/// campaign start, clamped 60 days back when it lands past it.
pub fn contract_began(campaign_start: NaiveDate, rng: &mut impl Rng) -> NaiveDate {
    let year = rng.random_range(campaign_start.year() - 5..=campaign_start.year() - 1);
    let began = date_in_year(year, rng);
    if began >= campaign_start {
        campaign_start - Duration::days(CONTRACT_CLAMP_DAYS)
    } else {
        began
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn campaign_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    }

    #[test]
    fn birth_precedes_debut_precedes_campaign_start() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for age in [16, 18, 25, 40, 60] {
            for _ in 0..200 {
                let (birth, debut) = birth_and_debut(age, campaign_start(), &mut rng);
                assert!(birth < debut, "age {age}: {birth} !< {debut}");
                assert!(debut < campaign_start(), "age {age}: {debut} past start");
            }
        }
    }

    #[test]
    fn tiny_age_is_lifted_to_the_debut_minimum() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let (birth, debut) = birth_and_debut(3, campaign_start(), &mut rng);
        assert!(birth < debut);
        assert!(debut < campaign_start());
    }

    #[test]
    fn contract_begin_stays_before_campaign_start() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..500 {
            let began = contract_began(campaign_start(), &mut rng);
            assert!(began < campaign_start());
            assert!(began.year() >= campaign_start().year() - 5);
        }
    }

    #[test]
    fn days_of_month_avoid_calendar_edges() {
        let mut rng = ChaCha8Rng::seed_from_u64(33);
        for _ in 0..500 {
            let (birth, debut) = birth_and_debut(30, campaign_start(), &mut rng);
            assert!(birth.day() <= 28);
            // A clamped debut may fall outside 1..=28; unclamped ones stay in.
            if debut != campaign_start() - Duration::days(30) {
                assert!(debut.day() <= 28);
            }
        }
    }
}
