use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::ids::GeoId;
use crate::types::{
    CityDetails, CityListItem, CityQuery, CityRequest, CountryDetails, CountryListItem,
    CountryQuery, CountryRequest, ImageUpload, LandmarkDetails, LandmarkListItem, LandmarkQuery,
    LandmarkRequest, RegionDetails, RegionListItem, RegionQuery, RegionRequest,
};

/// A resource collection exposed under `/api/<Collection>`.
///
/// Each marker type ties the collection path to its wire types, so one generic
/// repository implementation serves all four collections.
pub trait Entity: Send + Sync + 'static {
    /// Path of the collection, e.g. `/api/Countries`.
    const PATH: &'static str;
    /// Singular name for messages ("Country created successfully").
    const NAME: &'static str;

    type ListItem: DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static;
    type Details: DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static;
    type Request: Serialize + std::fmt::Debug + Send + Sync + 'static;
    type Query: Serialize + Clone + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static;
}

/// Countries collection.
#[derive(Debug, Clone, Copy)]
pub struct Countries;

/// Regions collection.
#[derive(Debug, Clone, Copy)]
pub struct Regions;

/// Cities collection.
#[derive(Debug, Clone, Copy)]
pub struct Cities;

/// Landmarks collection.
#[derive(Debug, Clone, Copy)]
pub struct Landmarks;

impl Entity for Countries {
    const PATH: &'static str = "/api/Countries";
    const NAME: &'static str = "Country";
    type ListItem = CountryListItem;
    type Details = CountryDetails;
    type Request = CountryRequest;
    type Query = CountryQuery;
}

impl Entity for Regions {
    const PATH: &'static str = "/api/Regions";
    const NAME: &'static str = "Region";
    type ListItem = RegionListItem;
    type Details = RegionDetails;
    type Request = RegionRequest;
    type Query = RegionQuery;
}

impl Entity for Cities {
    const PATH: &'static str = "/api/Cities";
    const NAME: &'static str = "City";
    type ListItem = CityListItem;
    type Details = CityDetails;
    type Request = CityRequest;
    type Query = CityQuery;
}

impl Entity for Landmarks {
    const PATH: &'static str = "/api/Landmarks";
    const NAME: &'static str = "Landmark";
    type ListItem = LandmarkListItem;
    type Details = LandmarkDetails;
    type Request = LandmarkRequest;
    type Query = LandmarkQuery;
}

/// CRUD operations on one collection.
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// `GET <path>` with the query as URL parameters.
    async fn list(&self, query: &E::Query) -> Result<Vec<E::ListItem>>;

    /// `GET <path>/{id}`
    async fn get(&self, id: GeoId) -> Result<E::Details>;

    /// `POST <path>`, returns the created entity.
    async fn create(&self, request: &E::Request) -> Result<E::Details>;

    /// `PUT <path>/{id}`, returns the updated entity.
    async fn update(&self, id: GeoId, request: &E::Request) -> Result<E::Details>;

    /// `DELETE <path>/{id}`
    async fn delete(&self, id: GeoId) -> Result<()>;
}

/// Landmark image attachment.
#[async_trait]
pub trait LandmarkImageStore: Send + Sync {
    /// Uploads the image as multipart field `file`.
    async fn upload_image(&self, landmark_id: GeoId, image: ImageUpload) -> Result<()>;

    /// Removes the uploaded image.
    async fn delete_image(&self, landmark_id: GeoId) -> Result<()>;
}
