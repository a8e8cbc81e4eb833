//! Character/planet catalog
//!
//! Domain models for the public catalog API and the services that bind them
//! to its endpoints. List endpoints are consumed through
//! [`PaginatedCollection`](crate::pagination::PaginatedCollection).

mod models;
mod service;

pub use models::{Character, Identified, OriginPlanet, Planet, Transformation};
pub use service::{CatalogClient, CharacterService, PlanetService};
