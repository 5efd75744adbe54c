//! Contract synthesis: attaches a wrestler to at most one company.
//!
//! A selector that cannot be satisfied degrades to a freelance worker
//! with a structured warning; it never fails the run.

use chrono::NaiveDate;
use rand::Rng;
use tracing::warn;

use rosterforge_core::record::{Alignment, Company, CompanySelector, Contract, Wrestler};
use rosterforge_core::{contract_debut_date, fit};
use rosterforge_core::schema::widths;

use crate::model::RunReport;
use crate::temporal;

/// Resolve a selector against the companies known to this run.
///
/// `Named` requires an exact name match; a miss is reported and yields
/// no attachment. `Random` draws uniformly, and also degrades with a
/// warning when the run knows no companies at all.
pub fn resolve_company<'a>(
    selector: &CompanySelector,
    companies: &'a [Company],
    worker_name: &str,
    rng: &mut impl Rng,
    report: &mut RunReport,
) -> Option<&'a Company> {
    match selector {
        CompanySelector::Freelancer => None,
        CompanySelector::Named(name) => {
            let found = companies.iter().find(|company| company.name == *name);
            if found.is_none() {
                warn!(company = %name, worker = %worker_name, "named company not found");
                report.record_warning(
                    "company_not_found",
                    format!("no company named '{name}'; '{worker_name}' left freelance"),
                    Some(worker_name.to_string()),
                );
            }
            found
        }
        CompanySelector::Random => {
            if companies.is_empty() {
                warn!(worker = %worker_name, "no companies available for random attachment");
                report.record_warning(
                    "no_companies",
                    format!("random attachment requested but no companies exist; '{worker_name}' left freelance"),
                    Some(worker_name.to_string()),
                );
                return None;
            }
            let index = rng.random_range(0..companies.len());
            companies.get(index)
        }
    }
}

/// Assemble a contract row for an attached wrestler.
///
/// Exclusivity is a fair coin unless forced; iron-clad always mirrors
/// it. The begin date lands in the five years before the campaign
/// start and the debut column carries its fixed sentinel.
pub fn build(
    uid: i64,
    company: &Company,
    wrestler: &Wrestler,
    alignment: Alignment,
    exclusive: Option<bool>,
    campaign_start: NaiveDate,
    rng: &mut impl Rng,
) -> Contract {
    let exclusive = exclusive.unwrap_or_else(|| rng.random_bool(0.5));
    Contract {
        uid,
        fed_uid: company.uid,
        worker_uid: wrestler.uid,
        name: fit(&wrestler.name, widths::NAME),
        short_name: fit(&wrestler.short_name, widths::SHORT_NAME),
        picture: wrestler.picture.clone(),
        alignment,
        exclusive,
        iron_clad: exclusive,
        written: true,
        began: temporal::contract_began(campaign_start, rng),
        debut: contract_debut_date(),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use rosterforge_core::record::CompanySize;

    use super::*;

    fn company(uid: i64, name: &str) -> Company {
        Company {
            uid,
            name: name.to_string(),
            initials: "TC".to_string(),
            url: String::new(),
            logo: String::new(),
            backdrop: String::new(),
            banner: String::new(),
            based_in: 1,
            prestige: 50,
            influence: 50,
            money: CompanySize::Medium.money(),
            size: CompanySize::Medium,
            momentum: 50,
            description: String::new(),
            bio: String::new(),
        }
    }

    fn report() -> RunReport {
        RunReport::new("test".to_string())
    }

    #[test]
    fn freelancer_never_attaches() {
        let companies = vec![company(1, "Ring Masters")];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut report = report();
        let found = resolve_company(
            &CompanySelector::Freelancer,
            &companies,
            "Rico Steel",
            &mut rng,
            &mut report,
        );
        assert!(found.is_none());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn named_miss_degrades_with_a_warning() {
        let companies = vec![company(1, "Ring Masters")];
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut report = report();
        let found = resolve_company(
            &CompanySelector::Named("Slam Nation".to_string()),
            &companies,
            "Rico Steel",
            &mut rng,
            &mut report,
        );
        assert!(found.is_none());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].code, "company_not_found");
    }

    #[test]
    fn named_hit_requires_the_exact_name() {
        let companies = vec![company(1, "Ring Masters"), company(2, "Slam Nation")];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut report = report();
        let found = resolve_company(
            &CompanySelector::Named("Slam Nation".to_string()),
            &companies,
            "Rico Steel",
            &mut rng,
            &mut report,
        );
        assert_eq!(found.map(|c| c.uid), Some(2));
    }

    #[test]
    fn random_with_no_companies_degrades_with_a_warning() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut report = report();
        let found = resolve_company(
            &CompanySelector::Random,
            &[],
            "Rico Steel",
            &mut rng,
            &mut report,
        );
        assert!(found.is_none());
        assert_eq!(report.warnings[0].code, "no_companies");
    }

    #[test]
    fn forced_exclusivity_mirrors_into_iron_clad() {
        let promo = company(7, "Ring Masters");
        let wrestler = sample_wrestler();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let contract = build(
            100,
            &promo,
            &wrestler,
            Alignment::Face,
            Some(true),
            start,
            &mut rng,
        );
        assert!(contract.exclusive);
        assert!(contract.iron_clad);
        assert!(contract.written);
        assert_eq!(contract.fed_uid, 7);
        assert_eq!(contract.worker_uid, wrestler.uid);
        assert!(contract.began < start);
        assert_eq!(contract.debut, contract_debut_date());
    }

    fn sample_wrestler() -> Wrestler {
        use rosterforge_core::record::*;
        Wrestler {
            uid: 42,
            name: "Rico Steel".to_string(),
            short_name: "Rico".to_string(),
            gender: Gender::Male,
            sexuality: 1,
            outside_rel: 0,
            birthday: NaiveDate::from_ymd_opt(1990, 6, 15).expect("valid date"),
            debut_date: NaiveDate::from_ymd_opt(2010, 3, 10).expect("valid date"),
            body_type: 4,
            height: 30,
            weight: 220,
            min_weight: 200,
            max_weight: 250,
            picture: "ricosteel.jpg".to_string(),
            nationality: 1,
            race: 1,
            based_in: 1,
            celebrity: 0,
            style: 1,
            loyalty: 0,
            moveset: 0,
            mask: 0,
            languages: LanguageLevels::default(),
            roles: RoleFlags::default(),
            user: false,
            regen: 0,
            active: true,
            left_business: false,
            dead: false,
            retired: false,
            non_wrestler: false,
            freelance: false,
            true_born: true,
            travels: [true; 8],
            organic_bio: true,
            age_matures: 0,
            age_declines: 0,
            age_talk_declines: 0,
            age_retires: 0,
            face_gimmick: String::new(),
            face_basis: 1,
            heel_gimmick: String::new(),
            heel_basis: 1,
            career_goal: 0,
            bio: String::new(),
            description: String::new(),
            preset_name: "Default".to_string(),
            skills: SkillSet::new(),
            popularity: PopularityProfile::default(),
        }
    }
}
