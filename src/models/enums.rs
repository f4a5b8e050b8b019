//! Closed sets of string values the API reports.

use crate::error::ChessError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A string-valued field restricted to a fixed set of codes.
pub trait ApiEnum: Sized + Copy + 'static {
    /// Every accepted value, in declaration order
    const VARIANTS: &'static [Self];

    /// The code exactly as the API sends it
    fn as_str(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
    }
}

macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl ApiEnum for $name {
            const VARIANTS: &'static [Self] = &[$( $name::$variant ),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

api_enum! {
    /// Outcome of one game from a single player's point of view.
    pub enum GameResult {
        Win => "win",
        Checkmated => "checkmated",
        Agreed => "agreed",
        Repetition => "repetition",
        Timeout => "timeout",
        Resigned => "resigned",
        Stalemate => "stalemate",
        Lose => "lose",
        Insufficient => "insufficient",
        FiftyMove => "50move",
        Abandoned => "abandoned",
        KingOfTheHill => "kingofthehill",
        ThreeCheck => "threecheck",
        TimeVsInsufficient => "timevsinsufficient",
        BughousePartnerLose => "bughousepartnerlose",
    }
}

impl GameResult {
    pub fn description(&self) -> &'static str {
        match self {
            GameResult::Win => "Win",
            GameResult::Checkmated => "Checkmated",
            GameResult::Agreed => "Draw agreed",
            GameResult::Repetition => "Draw by repetition",
            GameResult::Timeout => "Timeout",
            GameResult::Resigned => "Resigned",
            GameResult::Stalemate => "Stalemate",
            GameResult::Lose => "Lose",
            GameResult::Insufficient => "Insufficient material",
            GameResult::FiftyMove => "Draw by 50-move rule",
            GameResult::Abandoned => "Abandoned",
            GameResult::KingOfTheHill => "Opponent king reached the hill",
            GameResult::ThreeCheck => "Checked for the 3rd time",
            GameResult::TimeVsInsufficient => "Draw by timeout vs insufficient material",
            GameResult::BughousePartnerLose => "Bughouse partner lost",
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, GameResult::Win)
    }

    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            GameResult::Agreed
                | GameResult::Repetition
                | GameResult::Stalemate
                | GameResult::Insufficient
                | GameResult::FiftyMove
                | GameResult::TimeVsInsufficient
        )
    }
}

api_enum! {
    /// Membership status of an account.
    pub enum AccountStatus {
        Closed => "closed",
        ClosedFairPlay => "closed:fair_play_violations",
        Basic => "basic",
        Premium => "premium",
        Moderator => "mod",
        Staff => "staff",
    }
}

impl AccountStatus {
    pub fn is_closed(&self) -> bool {
        matches!(self, AccountStatus::Closed | AccountStatus::ClosedFairPlay)
    }
}

api_enum! {
    /// Chess titles with a titled-player list endpoint.
    pub enum Title {
        Gm => "GM",
        Wgm => "WGM",
        Im => "IM",
        Wim => "WIM",
        Fm => "FM",
        Wfm => "WFM",
        Nm => "NM",
        Wnm => "WNM",
        Cm => "CM",
        Wcm => "WCM",
    }
}

impl FromStr for Title {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Title::parse(&s.to_ascii_uppercase()).ok_or_else(|| {
            ChessError::invalid_parameter("title", format!("unknown chess title {s:?}"))
        })
    }
}
