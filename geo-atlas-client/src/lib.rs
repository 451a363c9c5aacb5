//! # geo-atlas-client
//!
//! Typed REST client for the Geo Atlas backend: countries, regions, cities and
//! landmarks, plus landmark image attachments.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls for HTTPS.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geo_atlas_client::{Cities, CityQuery, EntityRepository, GeoApiClient, GeoId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeoApiClient::new("http://localhost:5000")?;
//!
//!     let query = CityQuery {
//!         country_id: Some(GeoId(1)),
//!         ..CityQuery::default()
//!     };
//!     let cities = EntityRepository::<Cities>::list(&client, &query).await?;
//!     for city in &cities {
//!         println!("{} ({})", city.name, city.id);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, RemoteError>`](RemoteError). The error carries
//! the HTTP status when a response arrived and a message resolved from the server's
//! `message` field, the transport failure, or a generic fallback.
//! Requests are not retried and carry no timeout.

mod client;
mod enums;
mod error;
mod http_client;
mod ids;
mod traits;
mod types;

pub use client::GeoApiClient;
pub use enums::{AccessibilityStatus, CodedEnum, PhysicalCondition, ProtectionStatus};
pub use error::{GENERIC_ERROR_MESSAGE, ImageError, RemoteError, Result};
pub use ids::{GeoId, RawId, to_canonical_id};
pub use traits::{Cities, Countries, Entity, EntityRepository, LandmarkImageStore, Landmarks, Regions};
pub use types::{
    CityDetails, CityListItem, CityQuery, CityRequest, CountryDetails, CountryListItem,
    CountryQuery, CountryRequest, ImageUpload, LandmarkDetails, LandmarkListItem, LandmarkQuery,
    LandmarkRequest, RegionDetails, RegionListItem, RegionQuery, RegionRequest, image_mime_type,
};
