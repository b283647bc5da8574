//! Training objectives as named in XGBoost JSON.
//!
//! The objective decides two things at load time: how the declared
//! `base_score` is mapped into margin space, and which [`Transformation`]
//! turns margins into predictions.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::Transformation;

/// Training objective, parsed from `learner.objective.name`.
///
/// Names this crate has no special handling for are kept verbatim in
/// [`Objective::Other`]; they leave the base score untouched and produce raw
/// margins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Objective {
    RegSquaredError,
    RegSquaredLogError,
    RegPseudoHuberError,
    RegAbsoluteError,
    RegQuantileError,
    RegLinear,
    RegLogistic,
    BinaryLogistic,
    BinaryLogitRaw,
    BinaryHinge,
    CountPoisson,
    RegGamma,
    RegTweedie,
    SurvivalCox,
    SurvivalAft,
    MultiSoftmax,
    MultiSoftprob,
    RankPairwise,
    RankNdcg,
    RankMap,
    Other(String),
}

impl Objective {
    /// The objective name as it appears in XGBoost JSON.
    pub fn name(&self) -> &str {
        match self {
            Objective::RegSquaredError => "reg:squarederror",
            Objective::RegSquaredLogError => "reg:squaredlogerror",
            Objective::RegPseudoHuberError => "reg:pseudohubererror",
            Objective::RegAbsoluteError => "reg:absoluteerror",
            Objective::RegQuantileError => "reg:quantileerror",
            Objective::RegLinear => "reg:linear",
            Objective::RegLogistic => "reg:logistic",
            Objective::BinaryLogistic => "binary:logistic",
            Objective::BinaryLogitRaw => "binary:logitraw",
            Objective::BinaryHinge => "binary:hinge",
            Objective::CountPoisson => "count:poisson",
            Objective::RegGamma => "reg:gamma",
            Objective::RegTweedie => "reg:tweedie",
            Objective::SurvivalCox => "survival:cox",
            Objective::SurvivalAft => "survival:aft",
            Objective::MultiSoftmax => "multi:softmax",
            Objective::MultiSoftprob => "multi:softprob",
            Objective::RankPairwise => "rank:pairwise",
            Objective::RankNdcg => "rank:ndcg",
            Objective::RankMap => "rank:map",
            Objective::Other(name) => name,
        }
    }

    /// Transformation applied to margins when predictions are requested.
    pub fn transformation(&self) -> Transformation {
        match self {
            Objective::MultiSoftprob => Transformation::Softmax,
            Objective::RegLogistic | Objective::BinaryLogistic => Transformation::Sigmoid,
            _ => Transformation::Identity,
        }
    }

    /// Map a declared base score into the additive margin space of this objective.
    ///
    /// - logistic family: logit, `-ln(1/b - 1)`; `b` must lie strictly in (0, 1)
    /// - log-link family: `ln(b)`, taken as is (`-inf` at 0, NaN below)
    /// - everything else: unchanged
    ///
    /// Returns `None` only for a logistic base score outside (0, 1).
    pub fn base_score_to_margin(&self, base_score: f32) -> Option<f32> {
        match self {
            Objective::RegLogistic | Objective::BinaryLogistic | Objective::BinaryLogitRaw => {
                (base_score > 0.0 && base_score < 1.0).then(|| -(1.0 / base_score - 1.0).ln())
            }
            Objective::RegGamma
            | Objective::RegTweedie
            | Objective::CountPoisson
            | Objective::SurvivalAft
            | Objective::SurvivalCox => Some(base_score.ln()),
            _ => Some(base_score),
        }
    }
}

impl FromStr for Objective {
    type Err = Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "reg:squarederror" => Objective::RegSquaredError,
            "reg:squaredlogerror" => Objective::RegSquaredLogError,
            "reg:pseudohubererror" => Objective::RegPseudoHuberError,
            "reg:absoluteerror" => Objective::RegAbsoluteError,
            "reg:quantileerror" => Objective::RegQuantileError,
            "reg:linear" => Objective::RegLinear,
            "reg:logistic" => Objective::RegLogistic,
            "binary:logistic" => Objective::BinaryLogistic,
            "binary:logitraw" => Objective::BinaryLogitRaw,
            "binary:hinge" => Objective::BinaryHinge,
            "count:poisson" => Objective::CountPoisson,
            "reg:gamma" => Objective::RegGamma,
            "reg:tweedie" => Objective::RegTweedie,
            "survival:cox" => Objective::SurvivalCox,
            "survival:aft" => Objective::SurvivalAft,
            "multi:softmax" => Objective::MultiSoftmax,
            "multi:softprob" => Objective::MultiSoftprob,
            "rank:pairwise" => Objective::RankPairwise,
            "rank:ndcg" => Objective::RankNdcg,
            "rank:map" => Objective::RankMap,
            other => Objective::Other(other.to_string()),
        })
    }
}

impl From<&str> for Objective {
    fn from(name: &str) -> Self {
        match name.parse() {
            Ok(objective) => objective,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
