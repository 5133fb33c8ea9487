use crate::{
    models::{CategoryFormat, RoundFormat, TournamentStatus},
    scoring::Side,
};

#[derive(Clone, Copy, Debug, poise::ChoiceParameter)]
pub enum CategoryFormatChoice {
    #[name = "WCA"]
    Wca,
    #[name = "Red Bull"]
    RedBull,
}

impl From<CategoryFormatChoice> for CategoryFormat {
    fn from(value: CategoryFormatChoice) -> Self {
        match value {
            CategoryFormatChoice::Wca => CategoryFormat::Wca,
            CategoryFormatChoice::RedBull => CategoryFormat::RedBull,
        }
    }
}

#[derive(Clone, Copy, Debug, poise::ChoiceParameter)]
pub enum RoundFormatChoice {
    #[name = "Average of 3"]
    Ao3,
    #[name = "Average of 5"]
    Ao5,
}

impl From<RoundFormatChoice> for RoundFormat {
    fn from(value: RoundFormatChoice) -> Self {
        match value {
            RoundFormatChoice::Ao3 => RoundFormat::Ao3,
            RoundFormatChoice::Ao5 => RoundFormat::Ao5,
        }
    }
}

#[derive(Clone, Copy, Debug, poise::ChoiceParameter)]
pub enum StatusChoice {
    #[name = "Active"]
    Active,
    #[name = "Finalized"]
    Finalized,
    #[name = "Upcoming"]
    Upcoming,
}

impl From<StatusChoice> for TournamentStatus {
    fn from(value: StatusChoice) -> Self {
        match value {
            StatusChoice::Active => TournamentStatus::Active,
            StatusChoice::Finalized => TournamentStatus::Finalized,
            StatusChoice::Upcoming => TournamentStatus::Upcoming,
        }
    }
}

#[derive(Clone, Copy, Debug, poise::ChoiceParameter)]
pub enum SideChoice {
    #[name = "First competitor"]
    First,
    #[name = "Second competitor"]
    Second,
}

impl From<SideChoice> for Side {
    fn from(value: SideChoice) -> Self {
        match value {
            SideChoice::First => Side::First,
            SideChoice::Second => Side::Second,
        }
    }
}
