//! House service — use-cases for managing the house aggregate.

use domo_domain::error::{DomoError, NotFoundError};
use domo_domain::house::{House, Location};
use domo_domain::id::HouseName;

use crate::ports::{HouseRepository, Repository};

/// Application service for house setup and location reconfiguration.
pub struct HouseService<R> {
    repo: R,
}

impl<R: HouseRepository> HouseService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a house.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, location), fields(house = %name))]
    pub async fn add_house(&self, name: HouseName, location: Location) -> Result<House, DomoError> {
        self.repo.save(House::new(name, location)).await
    }

    /// Look a house up by name, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when no house with `name` exists.
    pub async fn get_house(&self, name: &HouseName) -> Result<House, DomoError> {
        self.repo.find_by_identity(name).await?.ok_or_else(|| {
            NotFoundError {
                entity: "House",
                id: name.to_string(),
            }
            .into()
        })
    }

    /// List all houses.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_houses(&self) -> Result<Vec<House>, DomoError> {
        self.repo.find_all().await
    }

    /// Replace the location of an existing house.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] if the house does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, location), fields(house = %name))]
    pub async fn configure_location(
        &self,
        name: &HouseName,
        location: Location,
    ) -> Result<House, DomoError> {
        let mut house = self.get_house(name).await?;
        house.configure_location(location);
        self.repo.save(house).await
    }
}
