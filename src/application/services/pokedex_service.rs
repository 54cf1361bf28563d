//! Remote data gateway with session-lifetime response memoization.

use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{debug, info, warn};

use crate::domain::entities::{
    NamedResource, PageWindow, Pokemon, PokemonId, PokemonPage, PokemonRef, PokemonSpecies,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::{
    CacheKey, CacheStats, CachedResponse, PokedexPort, ResponseCachePort,
};

/// Type names the API lists that no Pokémon actually carries.
const PLACEHOLDER_TYPES: [&str; 2] = ["unknown", "shadow"];

/// Number of references returned by [`PokedexService::get_pokemon_by_type`].
pub const TYPE_MEMBER_LIMIT: usize = 20;

/// Fetches catalog data through a [`PokedexPort`], memoizing details and the type list.
#[derive(Clone)]
pub struct PokedexService {
    port: Arc<dyn PokedexPort>,
    cache: Arc<dyn ResponseCachePort>,
}

impl PokedexService {
    #[must_use]
    pub fn new(port: Arc<dyn PokedexPort>, cache: Arc<dyn ResponseCachePort>) -> Self {
        Self { port, cache }
    }

    /// Fetches one window of the list. Never cached.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn fetch_page(&self, offset: u32, limit: u32) -> Result<PokemonPage, ApiError> {
        self.port
            .fetch_pokemon_page(PageWindow::new(offset, limit))
            .await
    }

    /// Returns one Pokémon, from cache when possible.
    ///
    /// A fetched Pokémon is cached under the requested key as well as its
    /// numeric ID and its name, so later lookups by either form are hits.
    ///
    /// # Errors
    /// Returns error if the Pokémon is not cached and the request fails.
    pub async fn get_pokemon(&self, reference: &PokemonRef) -> Result<Arc<Pokemon>, ApiError> {
        let key = CacheKey::Pokemon(reference.cache_key());
        if let Some(CachedResponse::Pokemon(pokemon)) = self.cache.get(&key) {
            return Ok(pokemon);
        }

        let pokemon = Arc::new(self.port.fetch_pokemon(reference).await.map_err(|e| {
            warn!(reference = %reference, error = %e, "Failed to fetch Pokémon");
            e
        })?);

        let id_key = CacheKey::Pokemon(pokemon.id().to_string());
        let name_key = CacheKey::Pokemon(pokemon.name().to_string());
        for alias in [id_key, name_key] {
            if alias != key {
                self.cache.put(alias, CachedResponse::Pokemon(Arc::clone(&pokemon)));
            }
        }
        self.cache.put(key, CachedResponse::Pokemon(Arc::clone(&pokemon)));

        Ok(pokemon)
    }

    /// Fetches details for every reference concurrently.
    ///
    /// The batch fails as a unit: one failed member fails the whole call.
    /// Results keep the input order.
    ///
    /// # Errors
    /// Returns the first error produced by any member.
    pub async fn get_pokemon_batch(
        &self,
        references: &[NamedResource],
    ) -> Result<Vec<Arc<Pokemon>>, ApiError> {
        debug!(count = references.len(), "Fetching Pokémon batch");

        try_join_all(references.iter().map(|resource| {
            let reference = PokemonRef::from(resource);
            async move { self.get_pokemon(&reference).await }
        }))
        .await
    }

    /// Fetches species metadata. Never cached.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_species(&self, id: PokemonId) -> Result<PokemonSpecies, ApiError> {
        self.port.fetch_species(id).await.map_err(|e| {
            warn!(id = %id, error = %e, "Failed to fetch species");
            e
        })
    }

    /// Returns every real type name, fetching the list at most once per cache lifetime.
    ///
    /// # Errors
    /// Returns error if the list is not cached and the request fails.
    pub async fn get_all_types(&self) -> Result<Arc<[String]>, ApiError> {
        if let Some(CachedResponse::TypeList(types)) = self.cache.get(&CacheKey::TypeList) {
            return Ok(types);
        }

        let types: Arc<[String]> = self
            .port
            .fetch_types()
            .await?
            .into_iter()
            .map(|resource| resource.name)
            .filter(|name| !PLACEHOLDER_TYPES.contains(&name.as_str()))
            .collect();

        info!(count = types.len(), "Loaded type list");
        self.cache.put(
            CacheKey::TypeList,
            CachedResponse::TypeList(Arc::clone(&types)),
        );

        Ok(types)
    }

    /// Returns the first [`TYPE_MEMBER_LIMIT`] Pokémon references of a type.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_pokemon_by_type(
        &self,
        type_name: &str,
    ) -> Result<Vec<NamedResource>, ApiError> {
        let mut members = self.port.fetch_type_members(type_name).await?;
        members.truncate(TYPE_MEMBER_LIMIT);
        Ok(members)
    }

    /// Drops every cached Pokémon and the cached type list.
    pub fn clear_cache(&self) {
        info!(stats = %self.cache.stats(), "Clearing response cache");
        self.cache.clear();
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockPokedexPort;
    use crate::infrastructure::cache::MemoryResponseCache;

    fn service_with(port: MockPokedexPort) -> (PokedexService, Arc<MockPokedexPort>) {
        let port = Arc::new(port);
        let service = PokedexService::new(port.clone(), Arc::new(MemoryResponseCache::new()));
        (service, port)
    }

    fn starters() -> Vec<Pokemon> {
        vec![
            Pokemon::new(1, "bulbasaur").with_types(["grass", "poison"]),
            Pokemon::new(4, "charmander").with_types(["fire"]),
            Pokemon::new(7, "squirtle").with_types(["water"]),
        ]
    }

    #[tokio::test]
    async fn test_repeated_fetch_hits_cache() {
        let (service, port) = service_with(MockPokedexPort::new(starters()));
        let reference = PokemonRef::Id(PokemonId(4));

        let first = service.get_pokemon(&reference).await.unwrap();
        let second = service.get_pokemon(&reference).await.unwrap();

        assert_eq!(first.name(), "charmander");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(port.detail_calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_by_name_is_cached_under_id() {
        let (service, port) = service_with(MockPokedexPort::new(starters()));

        service.get_pokemon(&PokemonRef::from("Squirtle")).await.unwrap();
        let by_id = service.get_pokemon(&PokemonRef::from("7")).await.unwrap();

        assert_eq!(by_id.name(), "squirtle");
        assert_eq!(port.detail_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let (service, port) = service_with(MockPokedexPort::new(starters()));
        port.set_fail_all(true);

        let reference = PokemonRef::Id(PokemonId(1));
        assert!(service.get_pokemon(&reference).await.is_err());

        port.set_fail_all(false);
        assert!(service.get_pokemon(&reference).await.is_ok());
        assert_eq!(port.detail_calls(), 2);
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        let (service, _) = service_with(MockPokedexPort::new(starters()));
        let page = service.fetch_page(0, 3).await.unwrap();
        let mut refs = page.results;
        refs.reverse();

        let batch = service.get_pokemon_batch(&refs).await.unwrap();
        let names: Vec<_> = batch.iter().map(|p| p.name()).collect();

        assert_eq!(names, ["squirtle", "charmander", "bulbasaur"]);
    }

    #[tokio::test]
    async fn test_list_pages_are_never_cached() {
        let (service, port) = service_with(MockPokedexPort::new(starters()));

        service.fetch_page(0, 3).await.unwrap();
        service.fetch_page(0, 3).await.unwrap();

        assert_eq!(port.page_calls(), 2);
    }

    #[tokio::test]
    async fn test_batch_falls_back_to_name_without_url_id() {
        let (service, _) = service_with(MockPokedexPort::new(starters()));
        let refs = vec![NamedResource::new("charmander", "not-a-url")];

        let batch = service.get_pokemon_batch(&refs).await.unwrap();

        assert_eq!(batch[0].id(), PokemonId(4));
    }

    #[tokio::test]
    async fn test_batch_fails_as_a_unit() {
        let (service, port) = service_with(MockPokedexPort::new(starters()));
        port.fail_id(4);
        let page = service.fetch_page(0, 3).await.unwrap();

        let result = service.get_pokemon_batch(&page.results).await;

        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_placeholder_types_are_dropped_and_cached() {
        let (service, port) =
            service_with(MockPokedexPort::new(vec![]).with_types(&["normal", "unknown", "shadow"]));

        let types = service.get_all_types().await.unwrap();
        let again = service.get_all_types().await.unwrap();

        assert_eq!(types.to_vec(), vec!["normal".to_string()]);
        assert_eq!(again, types);
        assert_eq!(port.type_calls(), 1);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let (service, port) = service_with(MockPokedexPort::new(starters()).with_types(&["fire"]));
        let reference = PokemonRef::Id(PokemonId(1));

        service.get_pokemon(&reference).await.unwrap();
        service.get_all_types().await.unwrap();
        assert!(service.cache_stats().size > 0);

        service.clear_cache();
        assert_eq!(service.cache_stats().size, 0);

        service.get_pokemon(&reference).await.unwrap();
        service.get_all_types().await.unwrap();
        assert_eq!(port.detail_calls(), 2);
        assert_eq!(port.type_calls(), 2);
    }

    #[tokio::test]
    async fn test_cache_stats_count_lookups() {
        let (service, _) = service_with(MockPokedexPort::new(starters()));
        let reference = PokemonRef::Id(PokemonId(4));

        service.get_pokemon(&reference).await.unwrap();
        service.get_pokemon(&reference).await.unwrap();

        let stats = service.cache_stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(
            stats.to_string(),
            format!("{} entries, 50.0% hit rate (1 hits, 1 misses)", stats.size)
        );
    }

    #[tokio::test]
    async fn test_pokemon_by_type_is_truncated() {
        let many: Vec<Pokemon> = (1..=30)
            .map(|id| Pokemon::new(id, format!("mon-{id}")).with_types(["bug"]))
            .collect();
        let (service, _) = service_with(MockPokedexPort::new(many));

        let members = service.get_pokemon_by_type("bug").await.unwrap();

        assert_eq!(members.len(), TYPE_MEMBER_LIMIT);
        assert_eq!(members[0].name, "mon-1");
    }

    #[tokio::test]
    async fn test_species_is_not_cached() {
        let (service, port) = service_with(
            MockPokedexPort::new(starters()).with_species(1, PokemonSpecies::default()),
        );

        service.get_species(PokemonId(1)).await.unwrap();
        service.get_species(PokemonId(1)).await.unwrap();

        assert_eq!(port.species_calls(), 2);
    }
}
