use crate::error::ChessError;
use crate::normalize::{Fields, Schema};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryDetails {
    /// Self-referencing API URL of this profile
    pub id: String,
    pub name: String,
    /// ISO-3166-1 alpha-2 code (or one of the API's `X?` extensions)
    pub code: String,
}

impl Schema for CountryDetails {
    const NAME: &'static str = "CountryDetails";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            id: fields.string("id")?,
            name: fields.string("name")?,
            code: fields.string("code")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{construct, from_raw};
    use serde_json::json;

    #[test]
    fn test_country_details() {
        let payload = json!({
            "@id": "https://api.chess.com/pub/country/AU",
            "name": "Australia",
            "code": "AU"
        });
        let country: CountryDetails = from_raw(payload.clone()).unwrap();
        assert_eq!(country.id, "https://api.chess.com/pub/country/AU");
        assert_eq!(country.code, "AU");

        // the rewrite is part of from_raw, not of validation
        assert!(construct::<CountryDetails>(payload).is_err());
    }
}
