//! Record-to-row serialization.
//!
//! Each builder emits one row in the exact column order the external
//! schema dictates, with booleans already encoded for the target sink
//! and text truncated to its column budget. Both sinks share these
//! builders so a record can never serialize two different ways.

use rosterforge_core::record::{Alignment, Company, Contract, SkillSet, Wrestler};
use rosterforge_core::schema::{
    CONTRACT_RESERVED_BYTES, CONTRACT_RESERVED_FLAGS, SKILL_NAMES, widths,
};
use rosterforge_core::{
    BoolEncoding, UNNEGOTIATED_MONEY, Value, contract_debut_date, fit, not_applicable_date,
};

/// Worker row, 68 values.
pub fn worker_row(wrestler: &Wrestler, bools: BoolEncoding) -> Vec<Value> {
    let mut row = vec![
        Value::Int(wrestler.uid),
        bools.encode(wrestler.user),
        Value::Int(i64::from(wrestler.regen)),
        bools.encode(wrestler.active),
        Value::Text(fit(&wrestler.name, widths::NAME)),
        Value::Text(fit(&wrestler.short_name, widths::SHORT_NAME)),
        Value::Int(i64::from(wrestler.gender.code())),
        Value::Int(i64::from(wrestler.gender.pronouns())),
        Value::Int(i64::from(wrestler.sexuality)),
        Value::Int(i64::from(wrestler.gender.competes_against())),
        Value::Int(i64::from(wrestler.outside_rel)),
        Value::Date(wrestler.birthday),
        Value::Date(wrestler.debut_date),
        Value::Date(not_applicable_date()),
        Value::Int(i64::from(wrestler.body_type)),
        Value::Int(i64::from(wrestler.height)),
        Value::Int(i64::from(wrestler.weight)),
        Value::Int(i64::from(wrestler.min_weight)),
        Value::Int(i64::from(wrestler.max_weight)),
        Value::Text(wrestler.picture.clone()),
        Value::Int(i64::from(wrestler.nationality)),
        Value::Int(i64::from(wrestler.race)),
        Value::Int(i64::from(wrestler.based_in)),
        bools.encode(wrestler.left_business),
        bools.encode(wrestler.dead),
        bools.encode(wrestler.retired),
        bools.encode(wrestler.non_wrestler),
        Value::Int(i64::from(wrestler.celebrity)),
        Value::Int(i64::from(wrestler.style)),
        bools.encode(wrestler.freelance),
        Value::Int(wrestler.loyalty),
        bools.encode(wrestler.true_born),
    ];
    // Travel columns run USA, Canada, Mexico, Japan, UK, Europe, Oz,
    // India; `travels` is indexed by `Region::ALL`, which puts the
    // British Isles before Japan.
    for index in [0, 1, 2, 4, 3, 5, 6, 7] {
        row.push(bools.encode(wrestler.travels[index]));
    }
    let languages = &wrestler.languages;
    for level in [
        languages.english,
        languages.japanese,
        languages.spanish,
        languages.french,
        languages.germanic,
        languages.mediterranean,
        languages.slavic,
        languages.hindi,
    ] {
        row.push(Value::Int(i64::from(level)));
    }
    row.push(Value::Int(wrestler.moveset));
    let roles = &wrestler.roles;
    for flag in [
        roles.wrestler,
        roles.occasional,
        roles.referee,
        roles.announcer,
        roles.colour,
        roles.manager,
        roles.personality,
        roles.road_agent,
    ] {
        row.push(bools.encode(flag));
    }
    row.extend([
        Value::Int(i64::from(wrestler.mask)),
        Value::Int(i64::from(wrestler.age_matures)),
        Value::Int(i64::from(wrestler.age_declines)),
        Value::Int(i64::from(wrestler.age_talk_declines)),
        Value::Int(i64::from(wrestler.age_retires)),
        bools.encode(wrestler.organic_bio),
        Value::Text(fit(&wrestler.face_gimmick, widths::GIMMICK)),
        Value::Int(i64::from(wrestler.face_basis)),
        Value::Text(fit(&wrestler.heel_gimmick, widths::GIMMICK)),
        Value::Int(i64::from(wrestler.heel_basis)),
        Value::Int(i64::from(wrestler.career_goal)),
    ]);
    row
}

/// Company row, 41 values. Fields the engine does not compute carry
/// the placeholder values the external schema expects.
pub fn company_row(company: &Company, bools: BoolEncoding) -> Vec<Value> {
    vec![
        Value::Int(company.uid),
        Value::Text(fit(&company.name, widths::NAME)),
        Value::Text(fit(&company.initials, widths::INITIALS)),
        Value::Text(fit(&company.url, widths::URL)),
        Value::Date(not_applicable_date()),
        Value::Date(not_applicable_date()),
        bools.encode(true), // Trading
        Value::Int(0),      // Mediagroup
        Value::Text(fit(&company.logo, widths::LOGO)),
        Value::Text(fit(&company.backdrop, widths::BACKDROP)),
        Value::Text(fit(&company.banner, widths::BANNER)),
        Value::Int(i64::from(company.based_in)),
        Value::Int(i64::from(company.prestige)),
        Value::Int(i64::from(company.influence)),
        Value::Int(company.money),
        Value::Int(0),  // Size (computed downstream from money)
        Value::Int(10), // LimitSize
        Value::Int(i64::from(company.momentum)),
        Value::Int(0), // Announce1
        Value::Int(0), // Announce2
        Value::Int(0), // Announce3
        bools.encode(false), // FixBelts
        Value::Date(not_applicable_date()),
        Value::Date(not_applicable_date()),
        Value::Int(0), // AlliancePreset
        Value::Int(0), // Ace
        Value::Int(0), // AceLength
        Value::Int(0), // Heir
        Value::Int(0), // HeirLength
        bools.encode(true), // TVFirst
        bools.encode(true), // TVAsc
        bools.encode(true), // EventAsc
        bools.encode(true), // TrueBorn
        bools.encode(false), // YoungLion
        Value::Int(0), // HomeArena
        bools.encode(false), // TippyToe
        Value::Text(String::new()), // GeogTag1
        Value::Text(String::new()), // GeogTag2
        Value::Text(String::new()), // GeogTag3
        bools.encode(false), // HQ
        bools.encode(true),  // HOF
    ]
}

/// Contract row, 82 values. Monetary columns carry the "not yet
/// negotiated" sentinel; the trailing reserved blocks are always
/// false/0.
pub fn contract_row(contract: &Contract, bools: BoolEncoding) -> Vec<Value> {
    let mut row = vec![
        Value::Int(contract.uid),
        Value::Int(contract.fed_uid),
        Value::Int(contract.worker_uid),
        Value::Text(fit(&contract.name, widths::NAME)),
        Value::Text(fit(&contract.short_name, widths::SHORT_NAME)),
        Value::Text(contract.picture.clone()),
        bools.encode(contract.alignment == Alignment::Face),
        bools.encode(contract.exclusive),
        bools.encode(contract.iron_clad),
        bools.encode(contract.written),
        bools.encode(false), // TouringContract
        bools.encode(false), // PaidMonthly
        Value::Int(UNNEGOTIATED_MONEY),
        Value::Int(UNNEGOTIATED_MONEY),
        Value::Int(UNNEGOTIATED_MONEY),
        Value::Int(UNNEGOTIATED_MONEY),
        Value::Date(contract.began),
        Value::Date(contract_debut_date()),
        Value::Date(not_applicable_date()),
        Value::Int(0), // ContractLength
        Value::Int(0), // DaysLeft
        bools.encode(true),  // Position_Wrestler
        bools.encode(false), // Position_Occasional
        bools.encode(false), // Position_Referee
        bools.encode(false), // Position_Announcer
        bools.encode(false), // Position_Colour
        bools.encode(false), // Position_Manager
        bools.encode(false), // Position_Personality
        bools.encode(false), // Position_Roadagent
        bools.encode(false), // Leaving
        Value::Date(not_applicable_date()),
        bools.encode(false), // NoCompete
        Value::Date(not_applicable_date()),
        bools.encode(false), // OnLoan
        Value::Int(0), // LoanedTo
        Value::Int(0), // Developmental
        Value::Int(0), // AmountDates
        bools.encode(false), // Pushed
        Value::Int(0), // Push
        Value::Date(not_applicable_date()), // LastTurn
        Value::Int(0), // TurnAmount
        Value::Int(0), // Momentum
        bools.encode(false), // Loyal
        Value::Int(0), // Mask
        bools.encode(false), // TVRole
        bools.encode(false), // HouseShowRole
        bools.encode(false), // Storyline
        bools.encode(false), // Injured
        Value::Int(0), // InjuryDays
        Value::Text(String::new()), // Gimmick
        Value::Int(0), // GimmickRating
    ];
    for _ in 0..CONTRACT_RESERVED_FLAGS {
        row.push(bools.encode(false));
    }
    for _ in 0..CONTRACT_RESERVED_BYTES {
        row.push(Value::Int(0));
    }
    row
}

/// Skills row: `WorkerUID` then one value per skill, in vocabulary
/// order. Skills the set lacks are written as 0.
pub fn skills_row(uid: i64, skills: &SkillSet) -> Vec<Value> {
    let mut row = Vec::with_capacity(SKILL_NAMES.len() + 1);
    row.push(Value::Int(uid));
    for name in SKILL_NAMES {
        let value = skills.get(name).copied().unwrap_or(0);
        row.push(Value::Int(i64::from(value)));
    }
    row
}

/// Popularity row: `WorkerUID` then the 57-value expansion.
pub fn popularity_row(uid: i64, values: &[i64]) -> Vec<Value> {
    let mut row = Vec::with_capacity(values.len() + 1);
    row.push(Value::Int(uid));
    row.extend(values.iter().map(|value| Value::Int(*value)));
    row
}

/// Bio row for either entity kind.
pub fn bio_row(uid: i64, bio: &str) -> Vec<Value> {
    vec![Value::Int(uid), Value::Text(bio.to_string())]
}

/// Worker notes row: operator-facing provenance, not schema data.
pub fn worker_notes_row(wrestler: &Wrestler) -> Vec<Value> {
    vec![
        Value::Int(wrestler.uid),
        Value::Text(wrestler.name.clone()),
        Value::Text(wrestler.preset_name.clone()),
        Value::Text(wrestler.description.clone()),
    ]
}

/// Company notes row.
pub fn company_notes_row(company: &Company) -> Vec<Value> {
    vec![
        Value::Text(company.name.clone()),
        Value::Text(company.description.clone()),
        Value::Text(company.size.label().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use rosterforge_core::record::{
        CompanySize, Gender, LanguageLevels, PopularityProfile, RoleFlags,
    };
    use rosterforge_core::schema::{COMPANY_COLUMNS, CONTRACT_COLUMNS, WORKER_COLUMNS};

    use super::*;

    fn wrestler() -> Wrestler {
        Wrestler {
            uid: 7,
            name: "Rico Steel".to_string(),
            short_name: "Rico".to_string(),
            gender: Gender::Female,
            sexuality: 1,
            outside_rel: 0,
            birthday: NaiveDate::from_ymd_opt(1992, 4, 3).expect("valid date"),
            debut_date: NaiveDate::from_ymd_opt(2012, 9, 14).expect("valid date"),
            body_type: 4,
            height: 28,
            weight: 180,
            min_weight: 160,
            max_weight: 210,
            picture: "ricosteel.jpg".to_string(),
            nationality: 1,
            race: 2,
            based_in: 1,
            celebrity: 0,
            style: 9,
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
            freelance: true,
            true_born: true,
            travels: [true; 8],
            organic_bio: true,
            age_matures: 0,
            age_declines: 0,
            age_talk_declines: 0,
            age_retires: 0,
            face_gimmick: "The Iron Hand".to_string(),
            face_basis: 1,
            heel_gimmick: "Cold Steel".to_string(),
            heel_basis: 1,
            career_goal: 0,
            bio: "A bio.".to_string(),
            description: "A veteran.".to_string(),
            preset_name: "Default".to_string(),
            skills: SkillSet::new(),
            popularity: PopularityProfile::default(),
        }
    }

    fn company() -> Company {
        Company {
            uid: 3,
            name: "Ring Masters".to_string(),
            initials: "RM".to_string(),
            url: "www.ringmasters.com".to_string(),
            logo: "ringmasters.jpg".to_string(),
            backdrop: "ringmastersBD.jpg".to_string(),
            banner: "ringmastersBanner.jpg".to_string(),
            based_in: 1,
            prestige: 61,
            influence: 0,
            money: CompanySize::Small.money(),
            size: CompanySize::Small,
            momentum: 44,
            description: "Regional promotion.".to_string(),
            bio: "Founded in a gym.".to_string(),
        }
    }

    fn contract() -> Contract {
        Contract {
            uid: 9,
            fed_uid: 3,
            worker_uid: 7,
            name: "Rico Steel".to_string(),
            short_name: "Rico".to_string(),
            picture: "ricosteel.jpg".to_string(),
            alignment: Alignment::Heel,
            exclusive: true,
            iron_clad: true,
            written: true,
            began: NaiveDate::from_ymd_opt(2021, 5, 2).expect("valid date"),
            debut: contract_debut_date(),
        }
    }

    #[test]
    fn rows_match_their_column_counts() {
        assert_eq!(
            worker_row(&wrestler(), BoolEncoding::TriState).len(),
            WORKER_COLUMNS.len()
        );
        assert_eq!(
            company_row(&company(), BoolEncoding::Native).len(),
            COMPANY_COLUMNS.len()
        );
        assert_eq!(
            contract_row(&contract(), BoolEncoding::TriState).len(),
            CONTRACT_COLUMNS.len()
        );
        assert_eq!(skills_row(7, &SkillSet::new()).len(), SKILL_NAMES.len() + 1);
        assert_eq!(popularity_row(7, &[0; 57]).len(), 58);
    }

    #[test]
    fn tri_state_worker_row_has_no_native_booleans() {
        let row = worker_row(&wrestler(), BoolEncoding::TriState);
        assert!(row.iter().all(|value| !matches!(value, Value::Bool(_))));
        // Active is the fourth column and the wrestler is active.
        assert_eq!(row[3], Value::Int(-1));
        // Freelance column.
        assert_eq!(row[29], Value::Int(-1));
    }

    #[test]
    fn native_worker_row_keeps_booleans() {
        let row = worker_row(&wrestler(), BoolEncoding::Native);
        assert_eq!(row[3], Value::Bool(true));
        assert_eq!(row[1], Value::Bool(false));
    }

    #[test]
    fn gender_codes_land_in_the_row() {
        let row = worker_row(&wrestler(), BoolEncoding::Native);
        assert_eq!(row[6], Value::Int(5)); // Gender
        assert_eq!(row[7], Value::Int(2)); // Pronouns
        assert_eq!(row[9], Value::Int(3)); // CompetesAgainst
    }

    #[test]
    fn contract_money_columns_carry_the_sentinel() {
        let row = contract_row(&contract(), BoolEncoding::TriState);
        for index in 12..=15 {
            assert_eq!(row[index], Value::Int(-1));
        }
        // Heel alignment: the Face column is false.
        assert_eq!(row[6], Value::Int(0));
        assert_eq!(row[17], Value::Date(contract_debut_date()));
    }

    #[test]
    fn skills_row_follows_the_vocabulary_order() {
        let mut skills = BTreeMap::new();
        skills.insert("Brawl".to_string(), 73u8);
        let row = skills_row(7, &skills);
        assert_eq!(row[0], Value::Int(7));
        assert_eq!(row[1], Value::Int(73)); // Brawl is first in the vocabulary
        assert_eq!(row[2], Value::Int(0)); // Air, absent
    }

    #[test]
    fn company_row_keeps_schema_placeholders() {
        let row = company_row(&company(), BoolEncoding::TriState);
        assert_eq!(row[4], Value::Date(not_applicable_date()));
        assert_eq!(row[6], Value::Int(-1)); // Trading
        assert_eq!(row[14], Value::Int(CompanySize::Small.money()));
        assert_eq!(row[16], Value::Int(10)); // LimitSize
        assert_eq!(row[40], Value::Int(-1)); // HOF
    }
}
