//! Catalog domain models
//!
//! Field names follow the API's camelCase JSON. Ki values are free-form
//! strings on the wire ("60.000.000", "90 Septillion") and are kept as such.

use serde::{Deserialize, Serialize};

/// Anything with a stable identifier a consumer can key rows by
pub trait Identified {
    fn id(&self) -> u64;
}

/// A catalog character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub ki: String,
    #[serde(default)]
    pub max_ki: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
    /// Only present on the detail endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_planet: Option<OriginPlanet>,
    /// Only present on the detail endpoint
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transformations: Vec<Transformation>,
}

impl Identified for Character {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A catalog planet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub is_destroyed: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

impl Identified for Planet {
    fn id(&self) -> u64 {
        self.id
    }
}

/// The planet embedded in a character detail response
pub type OriginPlanet = Planet;

/// One transformation of a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformation {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ki: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

impl Identified for Transformation {
    fn id(&self) -> u64 {
        self.id
    }
}
