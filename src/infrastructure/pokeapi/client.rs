//! PokéAPI HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{
    PokemonListResponse, PokemonResponse, SpeciesResponse, TypeDetailResponse, TypeListResponse,
};
use super::status_messages::{CONNECTION_FAILED, TIMED_OUT, message_for_status};
use crate::domain::entities::{
    NamedResource, PageWindow, Pokemon, PokemonId, PokemonPage, PokemonRef, PokemonSpecies,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::PokedexPort;

pub const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("pokedex-tui/", env!("CARGO_PKG_VERSION"));

/// Read-only PokéAPI client. No retries; every failure is returned to the caller.
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates new client against the public API.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(POKEAPI_BASE, DEFAULT_TIMEOUT)
    }

    /// Creates client with custom base URL and request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{path}", self.base_url);

        debug!(url = %url, "GET");

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| {
            warn!(url = %url, method = %Method::GET, error = %e, "Request failed");
            if e.is_timeout() {
                ApiError::network(TIMED_OUT)
            } else if e.is_connect() {
                ApiError::network(CONNECTION_FAILED)
            } else {
                ApiError::network(e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                url = %url,
                method = %Method::GET,
                "Request returned error status"
            );
            return Err(ApiError::http(status.as_u16(), message_for_status(status)));
        }

        response.json::<T>().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to parse response");
            ApiError::decode(e.to_string())
        })
    }
}

#[async_trait]
impl PokedexPort for PokeApiClient {
    async fn fetch_pokemon_page(&self, window: PageWindow) -> Result<PokemonPage, ApiError> {
        let response: PokemonListResponse = self
            .get_json(
                "pokemon",
                &[
                    ("offset", window.offset.to_string()),
                    ("limit", window.limit.to_string()),
                ],
            )
            .await?;

        debug!(
            offset = window.offset,
            limit = window.limit,
            count = response.count,
            returned = response.results.len(),
            "Fetched Pokémon page"
        );

        Ok(response.into_page(window))
    }

    async fn fetch_pokemon(&self, reference: &PokemonRef) -> Result<Pokemon, ApiError> {
        let response: PokemonResponse = self
            .get_json(&format!("pokemon/{reference}"), &[])
            .await?;
        Ok(response.into())
    }

    async fn fetch_species(&self, id: PokemonId) -> Result<PokemonSpecies, ApiError> {
        let response: SpeciesResponse = self
            .get_json(&format!("pokemon-species/{id}"), &[])
            .await?;
        Ok(response.into())
    }

    async fn fetch_types(&self) -> Result<Vec<NamedResource>, ApiError> {
        let response: TypeListResponse = self.get_json("type", &[]).await?;
        Ok(response.results)
    }

    async fn fetch_type_members(&self, type_name: &str) -> Result<Vec<NamedResource>, ApiError> {
        let response: TypeDetailResponse = self
            .get_json(&format!("type/{type_name}"), &[])
            .await?;
        Ok(response.pokemon.into_iter().map(|m| m.pokemon).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> PokeApiClient {
        PokeApiClient::with_base_url(server.url(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = PokeApiClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), POKEAPI_BASE);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client =
            PokeApiClient::with_base_url("http://localhost/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost/api");
    }

    #[tokio::test]
    async fn test_fetch_pokemon_page() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/pokemon")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("offset".into(), "0".into()),
                Matcher::UrlEncoded("limit".into(), "2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"count": 1302, "next": "n", "previous": null, "results": [
                    {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                    {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
                ]}"#,
            )
            .create_async()
            .await;

        let page = client_for(&server)
            .fetch_pokemon_page(PageWindow::new(0, 2))
            .await
            .unwrap();

        assert_eq!(page.count, 1302);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "ivysaur");
        assert!(page.has_next());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_pokemon_by_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/pokemon/pikachu")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id": 25, "name": "pikachu", "height": 4, "weight": 60,
                    "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
                    "stats": [], "abilities": [], "sprites": {},
                    "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"}}"#,
            )
            .create_async()
            .await;

        let pokemon = client_for(&server)
            .fetch_pokemon(&PokemonRef::Name("pikachu".to_string()))
            .await
            .unwrap();

        assert_eq!(pokemon.id(), PokemonId(25));
        assert_eq!(pokemon.primary_type(), Some("electric"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_not_found_maps_to_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/pokemon/99999")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_pokemon(&PokemonRef::Id(PokemonId(99999)))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "We could not find what you are looking for.");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/type")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client_for(&server).fetch_types().await.unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_fetch_type_members() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/type/fire")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"name": "fire", "pokemon": [
                    {"slot": 1, "pokemon": {"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/"}}
                ]}"#,
            )
            .create_async()
            .await;

        let members = client_for(&server).fetch_type_members("fire").await.unwrap();

        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id_from_url(), Some(4));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client =
            PokeApiClient::with_base_url("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();

        let err = client.fetch_types().await.unwrap_err();

        assert!(err.is_network_error());
    }
}
