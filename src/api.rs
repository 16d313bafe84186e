//! Pokedex API client

use serde::Deserialize;

use crate::state::Pokemon;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5001/api/pokemon";

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid data")]
    InvalidData,
}

/// Validate a response body and pull the entries out of it.
///
/// The body must be a JSON object whose `data` field holds an array of
/// entries (`{ "success": true, "data": [...] }`); any other shape is
/// rejected as invalid data.
pub fn parse_pokedex(body: &str) -> Result<Vec<Pokemon>, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value.get("data") {
        Some(data) if data.is_array() => Ok(Vec::<Pokemon>::deserialize(data)?),
        _ => Err(FetchError::InvalidData),
    }
}

/// Fetch the whole pokedex in one request
pub async fn fetch_pokedex(url: &str) -> Result<Vec<Pokemon>, FetchError> {
    tracing::debug!(url, "requesting pokedex");
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.text().await?;
    let entries = parse_pokedex(&body).inspect_err(|error| {
        tracing::warn!(%error, "pokedex response rejected");
    })?;
    tracing::info!(count = entries.len(), "pokedex received");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope_with_entries() {
        let body = r#"{
            "success": true,
            "data": [{
                "id": 1,
                "generation": 1,
                "name": {"fr": "Bulbizarre", "en": "Bulbasaur"},
                "image": "a.png",
                "image_shiny": "b.png",
                "height": 0.7,
                "weight": 6.9,
                "stats": {"hp": 45, "atk": 49, "def": 49, "spe_atk": 65, "spe_def": 65, "vit": 45},
                "types": [12, 4],
                "evolvedFrom": null,
                "evolvesTo": {"fr": "Herbizarre", "en": "Ivysaur"}
            }]
        }"#;
        let entries = parse_pokedex(body).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name.en, "Bulbasaur");
        assert_eq!(entries[0].types, vec![12, 4]);
    }

    #[test]
    fn test_parse_empty_data_is_ok() {
        let entries = parse_pokedex(r#"{"data": []}"#).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_data_field_is_invalid() {
        let error = parse_pokedex("{}").unwrap_err();
        assert!(matches!(error, FetchError::InvalidData));
        assert_eq!(error.to_string(), "invalid data");

        let error = parse_pokedex(r#"{"success": false, "data": null}"#).unwrap_err();
        assert!(matches!(error, FetchError::InvalidData));
    }

    #[test]
    fn test_non_object_body_is_invalid() {
        assert!(matches!(parse_pokedex("[]"), Err(FetchError::InvalidData)));
        assert!(matches!(
            parse_pokedex(r#"{"data": {"id": 1}}"#),
            Err(FetchError::InvalidData)
        ));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let error = parse_pokedex("<html>").unwrap_err();
        assert!(matches!(error, FetchError::Decode(_)));
        assert!(!error.to_string().is_empty());
    }
}
