//! Sentence rankers
//!
//! Each ranker implements [`Ranker`](crate::pipeline::traits::Ranker):
//! - Luhn: densest cluster of significant words
//! - Edmundson: weighted cue / title / location / frequency features
//! - LSA: sentence length in the strongest SVD topics
//! - LexRank / TextRank: centrality in the sentence similarity graph
//! - SumBasic: greedy unigram-probability coverage with decay
//! - KL-Sum: greedy minimization of summary-to-document divergence
//!
//! [`Variant::Lead`] selects the position baseline,
//! [`LeadRanker`](crate::pipeline::traits::LeadRanker).

pub mod edmundson;
pub mod kl_sum;
pub mod lex_rank;
pub mod lsa;
pub mod luhn;
pub mod sum_basic;

pub use edmundson::{Edmundson, EdmundsonConfig};
pub use kl_sum::{Divergence, KlSum, KlSumConfig};
pub use lex_rank::{LexRank, LexRankConfig};
pub use lsa::{Lsa, LsaConfig};
pub use luhn::{Luhn, LuhnConfig};
pub use sum_basic::{SumBasic, SumBasicConfig};

use crate::errors::SummarizerError;
use serde::{Deserialize, Serialize};

/// Ranking method selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Luhn,
    Edmundson,
    Lsa,
    #[default]
    LexRank,
    TextRank,
    SumBasic,
    KlSum,
    /// Earliest sentences first
    Lead,
}

impl Variant {
    /// All variants, in declaration order
    pub const ALL: [Variant; 8] = [
        Variant::Luhn,
        Variant::Edmundson,
        Variant::Lsa,
        Variant::LexRank,
        Variant::TextRank,
        Variant::SumBasic,
        Variant::KlSum,
        Variant::Lead,
    ];

    /// Canonical snake_case name
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Luhn => "luhn",
            Variant::Edmundson => "edmundson",
            Variant::Lsa => "lsa",
            Variant::LexRank => "lex_rank",
            Variant::TextRank => "text_rank",
            Variant::SumBasic => "sum_basic",
            Variant::KlSum => "kl_sum",
            Variant::Lead => "lead",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        let variant = match value.to_lowercase().as_str() {
            "luhn" => Variant::Luhn,
            "edmundson" => Variant::Edmundson,
            "lsa" => Variant::Lsa,
            "lex_rank" | "lexrank" => Variant::LexRank,
            "text_rank" | "textrank" => Variant::TextRank,
            "sum_basic" | "sumbasic" => Variant::SumBasic,
            "kl_sum" | "klsum" | "kl" => Variant::KlSum,
            "lead" => Variant::Lead,
            _ => return None,
        };
        Some(variant)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Variant {
    type Err = SummarizerError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Variant::parse(value).ok_or_else(|| {
            SummarizerError::invalid_config(format!("unknown summarization method {value:?}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("LexRank".parse::<Variant>().unwrap(), Variant::LexRank);
        assert_eq!("text_rank".parse::<Variant>().unwrap(), Variant::TextRank);
        assert_eq!("sumbasic".parse::<Variant>().unwrap(), Variant::SumBasic);
        assert_eq!("kl".parse::<Variant>().unwrap(), Variant::KlSum);
        assert_eq!("Lead".parse::<Variant>().unwrap(), Variant::Lead);
        assert!("random".parse::<Variant>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
    }
}
