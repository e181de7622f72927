//! Catalog service implementation
//!
//! Reference-data management for categories and cities. Mutations and the
//! city listing are admin-gated; the category listing is open to every user
//! because the event filter needs it.

use tracing::debug;
use uuid::Uuid;

use crate::database::repositories::{CategoryRepository, CityRepository};
use crate::models::category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::models::city::{City, CreateCityRequest, UpdateCityRequest};
use crate::session::Session;
use crate::utils::errors::{Result, SportsyError};
use crate::utils::logging;

#[derive(Debug, Clone)]
pub struct CatalogService {
    category_repository: CategoryRepository,
    city_repository: CityRepository,
}

impl CatalogService {
    pub fn new(category_repository: CategoryRepository, city_repository: CityRepository) -> Self {
        Self {
            category_repository,
            city_repository,
        }
    }

    fn ensure_admin(session: &Session, action: &str) -> Result<()> {
        if !session.is_admin() {
            return Err(SportsyError::PermissionDenied(format!(
                "Admin role required to {}",
                action
            )));
        }
        Ok(())
    }

    /// List categories; available to all users for event filtering
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        debug!("Listing categories");
        self.category_repository.list().await
    }

    pub async fn create_category(
        &self,
        session: &Session,
        request: CreateCategoryRequest,
    ) -> Result<Category> {
        Self::ensure_admin(session, "create categories")?;
        request.validate().map_err(SportsyError::InvalidInput)?;

        let category = self.category_repository.create(request).await?;
        logging::log_admin_action(
            session.user_id,
            "create_category",
            Some(&category.name),
            None,
        );
        Ok(category)
    }

    pub async fn update_category(
        &self,
        session: &Session,
        category_id: Uuid,
        request: UpdateCategoryRequest,
    ) -> Result<Category> {
        Self::ensure_admin(session, "update categories")?;

        self.category_repository
            .find_by_id(category_id)
            .await?
            .ok_or(SportsyError::CategoryNotFound { category_id })?;

        let category = self.category_repository.update(category_id, request).await?;
        logging::log_admin_action(
            session.user_id,
            "update_category",
            Some(&category.name),
            None,
        );
        Ok(category)
    }

    pub async fn delete_category(&self, session: &Session, category_id: Uuid) -> Result<()> {
        Self::ensure_admin(session, "delete categories")?;

        self.category_repository
            .find_by_id(category_id)
            .await?
            .ok_or(SportsyError::CategoryNotFound { category_id })?;

        self.category_repository.delete(category_id).await?;
        logging::log_admin_action(
            session.user_id,
            "delete_category",
            Some(&category_id.to_string()),
            None,
        );
        Ok(())
    }

    /// List cities; admin-only reference data
    pub async fn list_cities(&self, session: &Session) -> Result<Vec<City>> {
        Self::ensure_admin(session, "list cities")?;
        self.city_repository.list().await
    }

    pub async fn create_city(
        &self,
        session: &Session,
        request: CreateCityRequest,
    ) -> Result<City> {
        Self::ensure_admin(session, "create cities")?;
        request.validate().map_err(SportsyError::InvalidInput)?;

        let city = self.city_repository.create(request).await?;
        logging::log_admin_action(session.user_id, "create_city", Some(&city.name), None);
        Ok(city)
    }

    pub async fn update_city(
        &self,
        session: &Session,
        city_id: Uuid,
        request: UpdateCityRequest,
    ) -> Result<City> {
        Self::ensure_admin(session, "update cities")?;

        self.city_repository
            .find_by_id(city_id)
            .await?
            .ok_or(SportsyError::CityNotFound { city_id })?;

        let city = self.city_repository.update(city_id, request).await?;
        logging::log_admin_action(session.user_id, "update_city", Some(&city.name), None);
        Ok(city)
    }

    pub async fn delete_city(&self, session: &Session, city_id: Uuid) -> Result<()> {
        Self::ensure_admin(session, "delete cities")?;

        self.city_repository
            .find_by_id(city_id)
            .await?
            .ok_or(SportsyError::CityNotFound { city_id })?;

        self.city_repository.delete(city_id).await?;
        logging::log_admin_action(
            session.user_id,
            "delete_city",
            Some(&city_id.to_string()),
            None,
        );
        Ok(())
    }
}
