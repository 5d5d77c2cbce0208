//! ID resolution against live responses
//!
//! The API keys everything by string IDs, so the cases first resolve the
//! IDs they need from human-readable names: country name -> country ID,
//! country ID + region name -> region ID, search text + area -> employer ID.
//!
//! Selection is positional: the first entry in response order whose name
//! matches exactly wins, and an employer search resolves to `items[0]`.
//! A miss is a descriptive error, never a silent absence.

use serde_json::Value;

use super::ApiClient;
use crate::common::{Error, Result};

/// Scan a JSON array for the first object whose `name` equals `name`
/// (case-sensitive, no normalization) and return its `id`.
pub fn id_of_first_named<'a>(collection: &'a Value, name: &str) -> Option<&'a str> {
    collection
        .as_array()?
        .iter()
        .find(|entry| entry["name"].as_str() == Some(name))
        .and_then(|entry| entry["id"].as_str())
}

/// The `id` of `items[0]` in a paginated search result, if any.
pub fn first_item_id(response: &Value) -> Option<&str> {
    response["items"].get(0).and_then(|item| item["id"].as_str())
}

/// Resolve a country name to its ID via `/areas/countries`.
pub async fn resolve_country_id(client: &ApiClient, name: &str) -> Result<String> {
    let countries = client.get_json("/areas/countries", &[]).await?;
    id_of_first_named(&countries, name)
        .map(str::to_string)
        .ok_or_else(|| Error::lookup_miss("country", name))
}

/// Resolve a region name to its ID among the immediate children of a
/// country's area tree. Deeper levels are not searched.
pub async fn resolve_region_id(
    client: &ApiClient,
    country_id: &str,
    region_name: &str,
) -> Result<String> {
    let country = client
        .get_json(&format!("/areas/{country_id}"), &[])
        .await?;
    id_of_first_named(&country["areas"], region_name)
        .map(str::to_string)
        .ok_or_else(|| Error::lookup_miss("region", region_name))
}

/// Resolve an employer search to the ID of its first hit.
pub async fn resolve_first_employer_id(
    client: &ApiClient,
    text: &str,
    area_id: &str,
) -> Result<String> {
    let result = client
        .get_json("/employers", &[("text", text), ("area", area_id)])
        .await?;
    first_item_id(&result)
        .map(str::to_string)
        .ok_or_else(|| Error::EmptySearch {
            text: text.to_string(),
        })
}
