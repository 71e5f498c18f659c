use crate::error::FuelError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

/// Threshold percentage used to compare the alcohol price against the
/// gasoline price. Reflects the relative energy content of the two fuels:
/// alcohol pays off while it costs at most this fraction of gasoline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Percentage {
    #[default]
    Seventy,
    SeventyFive,
}

impl Percentage {
    pub fn as_u32(self) -> u32 {
        match self {
            Percentage::Seventy => 70,
            Percentage::SeventyFive => 75,
        }
    }

    fn factor(self) -> Decimal {
        match self {
            Percentage::Seventy => dec!(0.70),
            Percentage::SeventyFive => dec!(0.75),
        }
    }
}

impl TryFrom<u32> for Percentage {
    type Error = FuelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            70 => Ok(Percentage::Seventy),
            75 => Ok(Percentage::SeventyFive),
            other => Err(FuelError::Validation(format!(
                "percentage must be 70 or 75, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Outcome of the fuel-choice calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Alcohol,
    Gasoline,
    MissingInput,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Alcohol => write!(f, "Fill up with alcohol"),
            Recommendation::Gasoline => write!(f, "Fill up with gasoline"),
            Recommendation::MissingInput => write!(f, "Both prices are required"),
        }
    }
}

/// Decides which fuel is more economical for the given pump prices.
///
/// Inputs are raw text as entered by the user. Unparsable input is a normal
/// branch (`MissingInput`), not a fault. Alcohol wins ties on the boundary.
pub fn recommend(alcohol: &str, gasoline: &str, percentage: Percentage) -> Recommendation {
    let Ok(alcohol) = Decimal::from_str(alcohol.trim()) else {
        return Recommendation::MissingInput;
    };
    let Ok(gasoline) = Decimal::from_str(gasoline.trim()) else {
        return Recommendation::MissingInput;
    };

    if alcohol <= gasoline * percentage.factor() {
        Recommendation::Alcohol
    } else {
        Recommendation::Gasoline
    }
}
