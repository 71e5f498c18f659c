use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user-entered observation of fuel prices at a station.
///
/// Field names match the persisted camelCase layout. Numeric fields are
/// lenient on input: an absent or unparsable value becomes zero rather than
/// failing the whole record.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub name: String,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub alcohol_price_per_liter: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub gasoline_price_per_liter: Decimal,
    pub location: String,
    pub date_recorded: String,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub latitude: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub longitude: Decimal,
}

impl StationRecord {
    /// Builds a record from raw dialog input. Unparsable numeric text
    /// defaults to zero, mirroring the persisted-form leniency.
    pub fn from_input(
        name: &str,
        alcohol_price: &str,
        gasoline_price: &str,
        location: &str,
        date_recorded: &str,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            alcohol_price_per_liter: parse_or_zero(alcohol_price),
            gasoline_price_per_liter: parse_or_zero(gasoline_price),
            location: location.to_string(),
            date_recorded: date_recorded.to_string(),
            latitude: latitude.map(parse_or_zero).unwrap_or_default(),
            longitude: longitude.map(parse_or_zero).unwrap_or_default(),
        }
    }

    pub fn has_coordinates(&self) -> bool {
        !self.latitude.is_zero() || !self.longitude.is_zero()
    }
}

impl fmt::Display for StationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | alcohol {} | gasoline {} | {} | {}",
            self.name,
            self.alcohol_price_per_liter,
            self.gasoline_price_per_liter,
            self.location,
            self.date_recorded
        )?;
        if self.has_coordinates() {
            write!(f, " | {},{}", self.latitude, self.longitude)?;
        }
        Ok(())
    }
}

fn parse_or_zero(text: &str) -> Decimal {
    Decimal::from_str(text.trim()).unwrap_or(Decimal::ZERO)
}

/// Accepts a number or a string, substituting zero for anything unparsable.
fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct LenientDecimal;

    impl serde::de::Visitor<'_> for LenientDecimal {
        type Value = Decimal;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a decimal number or string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
        where
            E: serde::de::Error,
        {
            Ok(parse_or_zero(value))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Decimal, E>
        where
            E: serde::de::Error,
        {
            Ok(Decimal::from_f64(value).unwrap_or(Decimal::ZERO))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Decimal, E>
        where
            E: serde::de::Error,
        {
            Ok(Decimal::from(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Decimal, E>
        where
            E: serde::de::Error,
        {
            Ok(Decimal::from(value))
        }

        fn visit_unit<E>(self) -> Result<Decimal, E>
        where
            E: serde::de::Error,
        {
            Ok(Decimal::ZERO)
        }

        fn visit_none<E>(self) -> Result<Decimal, E>
        where
            E: serde::de::Error,
        {
            Ok(Decimal::ZERO)
        }
    }

    deserializer.deserialize_any(LenientDecimal)
}
