//! HTTP implementation of the repositories

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};

use crate::error::{RemoteError, Result};
use crate::http_client::HttpUtils;
use crate::ids::GeoId;
use crate::traits::{Entity, EntityRepository, LandmarkImageStore, Landmarks};
use crate::types::ImageUpload;

/// REST client for the geographic admin API.
///
/// Requests carry no timeout and are never retried.
#[derive(Debug, Clone)]
pub struct GeoApiClient {
    client: Client,
    origin: String,
}

impl GeoApiClient {
    /// Creates a client for the API served at `origin` (scheme, host and port).
    pub fn new(origin: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| RemoteError::transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self::with_client(client, origin))
    }

    /// Uses an existing `reqwest::Client`.
    pub fn with_client(client: Client, origin: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self { client, origin }
    }

    /// Origin the client talks to, without a trailing slash.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    fn item_path<E: Entity>(id: GeoId) -> String {
        format!("{}/{}", E::PATH, id)
    }

    fn image_path(id: GeoId) -> String {
        format!("{}/image", Self::item_path::<Landmarks>(id))
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for GeoApiClient {
    async fn list(&self, query: &E::Query) -> Result<Vec<E::ListItem>> {
        let path = E::PATH;
        let request = self.client.get(self.url(path)).query(query);
        let (status, body) = HttpUtils::execute_request(request, "GET", path).await?;
        HttpUtils::parse_json(status, &body)
    }

    async fn get(&self, id: GeoId) -> Result<E::Details> {
        let path = Self::item_path::<E>(id);
        let request = self.client.get(self.url(&path));
        let (status, body) = HttpUtils::execute_request(request, "GET", &path).await?;
        HttpUtils::parse_json(status, &body)
    }

    async fn create(&self, request: &E::Request) -> Result<E::Details> {
        let path = E::PATH;
        let builder = self.client.post(self.url(path)).json(request);
        let (status, body) = HttpUtils::execute_request(builder, "POST", path).await?;
        HttpUtils::parse_json(status, &body)
    }

    async fn update(&self, id: GeoId, request: &E::Request) -> Result<E::Details> {
        let path = Self::item_path::<E>(id);
        let builder = self.client.put(self.url(&path)).json(request);
        let (status, body) = HttpUtils::execute_request(builder, "PUT", &path).await?;
        HttpUtils::parse_json(status, &body)
    }

    async fn delete(&self, id: GeoId) -> Result<()> {
        let path = Self::item_path::<E>(id);
        let builder = self.client.delete(self.url(&path));
        HttpUtils::execute_request(builder, "DELETE", &path).await?;
        Ok(())
    }
}

#[async_trait]
impl LandmarkImageStore for GeoApiClient {
    async fn upload_image(&self, landmark_id: GeoId, image: ImageUpload) -> Result<()> {
        let path = Self::image_path(landmark_id);
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(image.mime_type)
            .map_err(|e| RemoteError::transport(e.to_string()))?;
        let form = Form::new().part("file", part);
        let builder = self.client.post(self.url(&path)).multipart(form);
        HttpUtils::execute_request(builder, "POST", &path).await?;
        Ok(())
    }

    async fn delete_image(&self, landmark_id: GeoId) -> Result<()> {
        let path = Self::image_path(landmark_id);
        let builder = self.client.delete(self.url(&path));
        HttpUtils::execute_request(builder, "DELETE", &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Cities, Countries};
    use crate::types::{CityQuery, LandmarkQuery};

    #[test]
    fn origin_trailing_slash_is_dropped() {
        let client = GeoApiClient::with_client(Client::new(), "http://localhost:5000/");
        assert_eq!(client.origin(), "http://localhost:5000");
        assert_eq!(client.url("/api/Countries"), "http://localhost:5000/api/Countries");
    }

    #[test]
    fn item_and_image_paths() {
        assert_eq!(GeoApiClient::item_path::<Countries>(GeoId(3)), "/api/Countries/3");
        assert_eq!(GeoApiClient::item_path::<Cities>(GeoId(12)), "/api/Cities/12");
        assert_eq!(GeoApiClient::image_path(GeoId(5)), "/api/Landmarks/5/image");
    }

    #[test]
    fn query_omits_unset_filters() {
        let client = GeoApiClient::with_client(Client::new(), "http://localhost:5000");
        let query = CityQuery {
            country_id: Some(GeoId(7)),
            name_contains: Some("War".into()),
            ..CityQuery::default()
        };
        let request = client
            .client
            .get(client.url(Cities::PATH))
            .query(&query)
            .build()
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(request.url().query(), Some("CountryId=7&NameContains=War"));
    }

    #[test]
    fn empty_query_has_no_parameters() {
        let client = GeoApiClient::with_client(Client::new(), "http://localhost:5000");
        let request = client
            .client
            .get(client.url(Landmarks::PATH))
            .query(&LandmarkQuery::default())
            .build()
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(request.url().query().unwrap_or_default(), "");
    }
}
