use std::fmt;

use crate::error::Error;

/// 5-point Likert scale shared by both study statements
/// ("This image is random." / "This image is organized.").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LikertScore {
    StronglyDisagree,
    Disagree,
    /// Midpoint; the pre-selected answer when the rater just hits Enter.
    #[default]
    Neutral,
    Agree,
    StronglyAgree,
}

impl LikertScore {
    pub const ALL: [LikertScore; 5] = [
        LikertScore::StronglyDisagree,
        LikertScore::Disagree,
        LikertScore::Neutral,
        LikertScore::Agree,
        LikertScore::StronglyAgree,
    ];

    /// Ordinal value recorded in the rating log.
    pub fn value(self) -> u8 {
        match self {
            LikertScore::StronglyDisagree => 1,
            LikertScore::Disagree => 2,
            LikertScore::Neutral => 3,
            LikertScore::Agree => 4,
            LikertScore::StronglyAgree => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LikertScore::StronglyDisagree => "Strongly disagree",
            LikertScore::Disagree => "Disagree",
            LikertScore::Neutral => "Neutral",
            LikertScore::Agree => "Agree",
            LikertScore::StronglyAgree => "Strongly agree",
        }
    }

    /// Defensive conversion from a raw answer; the host UI is expected to
    /// only ever offer 1-5 in the first place.
    pub fn from_value(value: u8) -> Result<Self, Error> {
        match value {
            1 => Ok(LikertScore::StronglyDisagree),
            2 => Ok(LikertScore::Disagree),
            3 => Ok(LikertScore::Neutral),
            4 => Ok(LikertScore::Agree),
            5 => Ok(LikertScore::StronglyAgree),
            _ => Err(Error::InvalidScore { value }),
        }
    }
}

impl fmt::Display for LikertScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.value(), self.label())
    }
}
