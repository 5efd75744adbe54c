//! The fixed external schema both sinks must reproduce exactly.
//!
//! Column names, order, and text width budgets are dictated by the
//! consuming simulation database. Nothing here is negotiable: the
//! sinks emit columns in exactly this order and truncate text to
//! exactly these budgets immediately before writing.

use crate::record::Region;

/// Worker table columns, in insert order.
pub const WORKER_COLUMNS: [&str; 68] = [
    "UID",
    "User",
    "Regen",
    "Active",
    "Name",
    "Shortname",
    "Gender",
    "Pronouns",
    "Sexuality",
    "CompetesAgainst",
    "Outsiderel",
    "Birthday",
    "DebutDate",
    "DeathDate",
    "BodyType",
    "WorkerHeight",
    "WorkerWeight",
    "WorkerMinWeight",
    "WorkerMaxWeight",
    "Picture",
    "Nationality",
    "Race",
    "Based_In",
    "LeftBusiness",
    "Dead",
    "Retired",
    "NonWrestler",
    "Celebridad",
    "Style",
    "Freelance",
    "Loyalty",
    "TrueBorn",
    "USA",
    "Canada",
    "Mexico",
    "Japan",
    "UK",
    "Europe",
    "Oz",
    "India",
    "Speak_English",
    "Speak_Japanese",
    "Speak_Spanish",
    "Speak_French",
    "Speak_Germanic",
    "Speak_Med",
    "Speak_Slavic",
    "Speak_Hindi",
    "Moveset",
    "Position_Wrestler",
    "Position_Occasional",
    "Position_Referee",
    "Position_Announcer",
    "Position_Colour",
    "Position_Manager",
    "Position_Personality",
    "Position_Roadagent",
    "Mask",
    "Age_Matures",
    "Age_Declines",
    "Age_TalkDeclines",
    "Age_Retires",
    "OrganicBio",
    "PlasterCaster_Face",
    "PlasterCaster_FaceBasis",
    "PlasterCaster_Heel",
    "PlasterCaster_HeelBasis",
    "CareerGoal",
];

/// Company table columns, in insert order.
pub const COMPANY_COLUMNS: [&str; 41] = [
    "UID",
    "Name",
    "Initials",
    "URL",
    "CompanyOpening",
    "CompanyClosing",
    "Trading",
    "Mediagroup",
    "Logo",
    "Backdrop",
    "Banner",
    "Based_In",
    "Prestige",
    "Influence",
    "Money",
    "Size",
    "LimitSize",
    "Momentum",
    "Announce1",
    "Announce2",
    "Announce3",
    "FixBelts",
    "CompanyNotBefore",
    "CompanyNotAfter",
    "AlliancePreset",
    "Ace",
    "AceLength",
    "Heir",
    "HeirLength",
    "TVFirst",
    "TVAsc",
    "EventAsc",
    "TrueBorn",
    "YoungLion",
    "HomeArena",
    "TippyToe",
    "GeogTag1",
    "GeogTag2",
    "GeogTag3",
    "HQ",
    "HOF",
];

/// The fixed skill vocabulary. The skills sheet/table carries a
/// leading `WorkerUID` column followed by these, in order.
pub const SKILL_NAMES: [&str; 41] = [
    "Brawl",
    "Air",
    "Technical",
    "Power",
    "Athletic",
    "Stamina",
    "Psych",
    "Basics",
    "Tough",
    "Sell",
    "Charisma",
    "Mic",
    "Menace",
    "Respect",
    "Reputation",
    "Safety",
    "Looks",
    "Star",
    "Consistency",
    "Act",
    "Injury",
    "Puroresu",
    "Flash",
    "Hardcore",
    "Announcing",
    "Colour",
    "Refereeing",
    "Experience",
    "PotentialPrimary",
    "PotentialMental",
    "PotentialPerformance",
    "PotentialFundamental",
    "PotentialPhysical",
    "PotentialAnnouncing",
    "PotentialColour",
    "PotentialRefereeing",
    "ScoutRing",
    "ScoutPhysical",
    "ScoutEnt",
    "ScoutBroadcast",
    "ScoutRef",
];

/// Contract table columns, in insert order. The trailing reserved
/// blocks (25 boolean flags, 6 byte fields) are consumed downstream
/// and always written as false/0 by this engine.
pub const CONTRACT_COLUMNS: [&str; 82] = [
    "UID",
    "FedUID",
    "WorkerUID",
    "Name",
    "Shortname",
    "Picture",
    "Face",
    "Exclusive",
    "IronClad",
    "Written",
    "TouringContract",
    "PaidMonthly",
    "Money",
    "Downside",
    "SigningBonus",
    "MerchPercent",
    "ContractBeganDate",
    "ContractDebutDate",
    "ContractExpireDate",
    "ContractLength",
    "DaysLeft",
    "Position_Wrestler",
    "Position_Occasional",
    "Position_Referee",
    "Position_Announcer",
    "Position_Colour",
    "Position_Manager",
    "Position_Personality",
    "Position_Roadagent",
    "Leaving",
    "LeaveDate",
    "NoCompete",
    "NoCompeteDate",
    "OnLoan",
    "LoanedTo",
    "Developmental",
    "AmountDates",
    "Pushed",
    "Push",
    "LastTurn",
    "TurnAmount",
    "Momentum",
    "Loyal",
    "Mask",
    "TVRole",
    "HouseShowRole",
    "Storyline",
    "Injured",
    "InjuryDays",
    "Gimmick",
    "GimmickRating",
    "PlasterCaster1",
    "PlasterCaster2",
    "PlasterCaster3",
    "PlasterCaster4",
    "PlasterCaster5",
    "PlasterCaster6",
    "PlasterCaster7",
    "PlasterCaster8",
    "PlasterCaster9",
    "PlasterCaster10",
    "PlasterCaster11",
    "PlasterCaster12",
    "PlasterCaster13",
    "PlasterCaster14",
    "PlasterCaster15",
    "PlasterCaster16",
    "PlasterCaster17",
    "PlasterCaster18",
    "PlasterCaster19",
    "PlasterCaster20",
    "PlasterCaster21",
    "PlasterCaster22",
    "PlasterCaster23",
    "PlasterCaster24",
    "PlasterCaster25",
    "Reserved1",
    "Reserved2",
    "Reserved3",
    "Reserved4",
    "Reserved5",
    "Reserved6",
];

/// Number of reserved boolean contract flags.
pub const CONTRACT_RESERVED_FLAGS: usize = 25;
/// Number of reserved contract byte fields.
pub const CONTRACT_RESERVED_BYTES: usize = 6;

/// Total popularity sub-columns across all regions.
pub const POPULARITY_COLUMN_COUNT: usize = 57;

/// Popularity table columns: `WorkerUID` then one block per region.
pub fn popularity_columns() -> Vec<String> {
    let mut columns = Vec::with_capacity(POPULARITY_COLUMN_COUNT + 1);
    columns.push("WorkerUID".to_string());
    for region in Region::ALL {
        for index in 1..=region.column_count() {
            columns.push(format!("{}{}", region.prefix(), index));
        }
    }
    columns
}

/// Text width budgets, in characters.
pub mod widths {
    pub const NAME: usize = 30;
    pub const SHORT_NAME: usize = 20;
    pub const INITIALS: usize = 12;
    /// Picture filename stem, before the `.jpg` extension.
    pub const PICTURE_STEM: usize = 26;
    pub const URL: usize = 40;
    pub const LOGO: usize = 35;
    pub const BACKDROP: usize = 35;
    pub const BANNER: usize = 30;
    pub const GIMMICK: usize = 30;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popularity_columns_cover_every_region_block() {
        let columns = popularity_columns();
        assert_eq!(columns.len(), POPULARITY_COLUMN_COUNT + 1);
        assert_eq!(columns[0], "WorkerUID");
        assert_eq!(columns[1], "USA1");
        assert_eq!(columns[11], "USA11");
        assert_eq!(columns[12], "Canada1");
        assert_eq!(columns[57], "India4");
    }

    #[test]
    fn column_tables_keep_their_external_lengths() {
        assert_eq!(WORKER_COLUMNS.len(), 68);
        assert_eq!(WORKER_COLUMNS[0], "UID");
        assert_eq!(WORKER_COLUMNS[67], "CareerGoal");
        assert_eq!(COMPANY_COLUMNS.len(), 41);
        assert_eq!(SKILL_NAMES.len(), 41);
        assert_eq!(CONTRACT_COLUMNS.len(), 82);
        assert_eq!(CONTRACT_COLUMNS[81], "Reserved6");
    }

    #[test]
    fn contract_reserved_blocks_are_present() {
        let flags = CONTRACT_COLUMNS
            .iter()
            .filter(|name| name.starts_with("PlasterCaster"))
            .count();
        let bytes = CONTRACT_COLUMNS
            .iter()
            .filter(|name| name.starts_with("Reserved"))
            .count();
        assert_eq!(flags, CONTRACT_RESERVED_FLAGS);
        assert_eq!(bytes, CONTRACT_RESERVED_BYTES);
    }
}
