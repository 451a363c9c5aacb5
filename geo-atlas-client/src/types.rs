//! Wire types
//!
//! Response DTOs accept numbers or numeric strings for ids, coordinates and years.
//! Query structs serialize to the PascalCase query parameters the API expects;
//! unset filters are left out of the query string.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ImageError;
use crate::ids::GeoId;

// ============ Countries ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryListItem {
    pub id: GeoId,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetails {
    pub id: GeoId,
    pub name: String,
    pub code: String,
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRequest {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deleted: Option<bool>,
}

// ============ Regions ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionListItem {
    pub id: GeoId,
    pub country_id: GeoId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub region_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDetails {
    pub id: GeoId,
    pub country_id: GeoId,
    #[serde(default)]
    pub country_name: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub region_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRequest {
    pub country_id: GeoId,
    pub name: String,
    #[serde(rename = "type")]
    pub region_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<GeoId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deleted: Option<bool>,
}

// ============ Cities ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityListItem {
    pub id: GeoId,
    pub country_id: GeoId,
    #[serde(default)]
    pub region_id: Option<GeoId>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDetails {
    pub id: GeoId,
    pub country_id: GeoId,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub region_id: Option<GeoId>,
    #[serde(default)]
    pub region_name: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRequest {
    pub country_id: GeoId,
    pub region_id: Option<GeoId>,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CityQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<GeoId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<GeoId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deleted: Option<bool>,
}

// ============ Landmarks ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkListItem {
    pub id: GeoId,
    pub city_id: GeoId,
    #[serde(default)]
    pub city_name: String,
    pub name: String,
    pub protection_status: i32,
    pub physical_condition: i32,
    pub accessibility_status: i32,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkDetails {
    pub id: GeoId,
    pub city_id: GeoId,
    #[serde(default)]
    pub city_name: String,
    #[serde(default)]
    pub region_id: Option<GeoId>,
    #[serde(default)]
    pub region_name: Option<String>,
    pub country_id: GeoId,
    #[serde(default)]
    pub country_name: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub first_mention_year: Option<i32>,
    pub protection_status: i32,
    pub physical_condition: i32,
    pub accessibility_status: i32,
    #[serde(default)]
    pub external_registry_url: Option<String>,
    #[serde(default)]
    pub uploaded_image_path: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkRequest {
    pub city_id: GeoId,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub first_mention_year: Option<i32>,
    pub protection_status: i32,
    pub physical_condition: i32,
    pub accessibility_status: i32,
    pub external_registry_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LandmarkQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<GeoId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<GeoId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<GeoId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_condition: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_status: Option<i32>,
}

// ============ Image upload ============

/// Image accepted by the landmark image endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Builds an upload from in-memory bytes, checking the image type by extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ImageError> {
        let file_name = file_name.into();
        let mime_type = image_mime_type(&file_name).ok_or(ImageError::UnsupportedType)?;
        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    /// Reads an image from disk.
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        // Validate the type before touching the file.
        image_mime_type(&file_name).ok_or(ImageError::UnsupportedType)?;
        let bytes = std::fs::read(path).map_err(|source| ImageError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::new(file_name, bytes)
    }
}

/// MIME type for the accepted image extensions.
pub fn image_mime_type(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

// ============ Lenient number decoding ============

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<NumberOrText>::deserialize(deserializer)? {
            None => None,
            Some(NumberOrText::Number(n)) => Some(n),
            Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
        },
    )
}

#[allow(clippy::cast_possible_truncation)]
fn lenient_i32<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_f64(deserializer)?.map(|n| n.trunc() as i32))
}
