//! Resource services for characters and planets

use super::models::{Character, Planet};
use crate::api::{DetailApi, HttpListApi};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::PaginatedCollection;

const CHARACTERS: &str = "characters";
const PLANETS: &str = "planets";

/// Character endpoints: `GET /characters` and `GET /characters/{id}`
#[derive(Debug, Clone)]
pub struct CharacterService {
    api: HttpListApi<Character>,
}

impl CharacterService {
    pub fn new(client: HttpClient) -> Self {
        Self {
            api: HttpListApi::new(client, CHARACTERS),
        }
    }

    /// The paginated list capability
    pub fn list(&self) -> HttpListApi<Character> {
        self.api.clone()
    }

    /// Full character, including origin planet and transformations
    pub async fn get_character_by_id(&self, id: u64) -> Result<Character> {
        self.api.fetch_one(id).await
    }
}

/// Planet endpoints: `GET /planets` and `GET /planets/{id}`
#[derive(Debug, Clone)]
pub struct PlanetService {
    api: HttpListApi<Planet>,
}

impl PlanetService {
    pub fn new(client: HttpClient) -> Self {
        Self {
            api: HttpListApi::new(client, PLANETS),
        }
    }

    /// The paginated list capability
    pub fn list(&self) -> HttpListApi<Planet> {
        self.api.clone()
    }

    pub async fn get_planet_by_id(&self, id: u64) -> Result<Planet> {
        self.api.fetch_one(id).await
    }
}

/// Entry point tying one shared HTTP client to every catalog resource
#[derive(Debug, Clone)]
pub struct CatalogClient {
    characters: CharacterService,
    planets: PlanetService,
    page_size: u32,
}

impl CatalogClient {
    /// Build a client from validated configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::with_config(config.http_client_config())?;
        Ok(Self::with_client(client, config.page_size))
    }

    /// Build a client around an existing HTTP client
    pub fn with_client(client: HttpClient, page_size: u32) -> Self {
        Self {
            characters: CharacterService::new(client.clone()),
            planets: PlanetService::new(client),
            page_size,
        }
    }

    pub fn characters(&self) -> &CharacterService {
        &self.characters
    }

    pub fn planets(&self) -> &PlanetService {
        &self.planets
    }

    /// A fresh, uninitialized character collection
    pub fn character_collection(&self) -> PaginatedCollection<Character> {
        PaginatedCollection::new(self.characters.list()).with_page_size(self.page_size)
    }

    /// A fresh, uninitialized planet collection
    pub fn planet_collection(&self) -> PaginatedCollection<Planet> {
        PaginatedCollection::new(self.planets.list()).with_page_size(self.page_size)
    }
}
