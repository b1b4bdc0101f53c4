// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Adoption catalog
//!
//! The catalog is a read-only collection of adoptable pets. It is defined
//! once at startup and never mutated; the listing screen only reads it.
//! Consumers go through the [`CatalogSource`] trait so the bundled data can
//! later be swapped for a real provider without touching the view.

use serde::Serialize;

use crate::error::{PawhavenError, Result};

/// A single adoptable pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    /// Unique id, assigned when the catalog is authored
    pub id: u32,
    /// Display name
    pub name: String,
    /// Identifier of a bundled image asset
    pub image: &'static str,
    /// Free-text location
    pub location: String,
    /// Whether the pet has been vaccinated
    pub vaccinated: bool,
}

impl Pet {
    pub fn new(id: u32, name: &str, image: &'static str, location: &str, vaccinated: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            image,
            location: location.to_string(),
            vaccinated,
        }
    }

    /// Badge text shown on the pet's tile
    pub fn badge_label(&self) -> &'static str {
        if self.vaccinated {
            "Vaccinated"
        } else {
            "Not Vaccinated"
        }
    }
}

/// Read-only source of catalog entries
pub trait CatalogSource: Send + Sync {
    /// All pets, in catalog order
    fn list_pets(&self) -> &[Pet];
}

/// In-memory catalog backed by a fixed list of pets
#[derive(Debug)]
pub struct StaticCatalog {
    pets: Vec<Pet>,
}

impl StaticCatalog {
    /// Build a catalog from a fixed list, rejecting duplicate ids.
    pub fn new(pets: Vec<Pet>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for pet in &pets {
            if !seen.insert(pet.id) {
                return Err(PawhavenError::Catalog(format!(
                    "duplicate pet id {}",
                    pet.id
                )));
            }
        }
        Ok(Self { pets })
    }

    /// The catalog shipped with the application.
    pub fn bundled() -> Self {
        // Ids are hand-assigned and unique, so new() cannot fail here.
        Self {
            pets: vec![
                Pet::new(1, "Buddy", "pet-buddy", "New York, NY", true),
                Pet::new(2, "Milo", "pet-milo", "Los Angeles, CA", false),
                Pet::new(3, "Bella", "pet-bella", "Chicago, IL", true),
                Pet::new(4, "Timo", "pet-timo", "Washington, DC", false),
            ],
        }
    }
}

impl CatalogSource for StaticCatalog {
    fn list_pets(&self) -> &[Pet] {
        &self.pets
    }
}
