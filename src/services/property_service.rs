use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::dto::{PropertyBlockResponse, PropertyResponse, UpsertPropertyRequest};
use crate::interceptors::{AppError, AppResult};
use crate::models::{Property, PropertyBlock};
use crate::repositories::{
    PropertyBlockRepository, PropertyRepository, Repositories, UserRepository,
};
use crate::services::AvailabilityService;
use crate::utils::validate_request;

/// Property CRUD plus per-date block management. Blocking a date makes it
/// unavailable to bookings without a booking existing for it.
#[derive(Clone)]
pub struct PropertyService {
    properties: Arc<dyn PropertyRepository>,
    users: Arc<dyn UserRepository>,
    blocks: Arc<dyn PropertyBlockRepository>,
    availability: AvailabilityService,
}

impl PropertyService {
    pub fn new(repos: Repositories) -> Self {
        Self {
            availability: AvailabilityService::new(repos.bookings, repos.blocks.clone()),
            properties: repos.properties,
            users: repos.users,
            blocks: repos.blocks,
        }
    }

    /// Get a property by id
    pub async fn retrieve_property(&self, property_id: Uuid) -> AppResult<PropertyResponse> {
        let property = self.find_property(property_id).await?;

        Ok(property.to_response())
    }

    /// Create a property. The owner must be an existing user.
    pub async fn create_property(
        &self,
        request: UpsertPropertyRequest,
    ) -> AppResult<PropertyResponse> {
        validate_request(&request)?;

        self.check_owner_exists(request.owner_user_id).await?;

        let property = Property::new(request);
        let saved = self.properties.insert(property).await?;

        tracing::info!("Created property {}", saved.id);

        Ok(saved.to_response())
    }

    /// Replace all fields of a property. A changed owner must reference an
    /// existing user; the current owner is trusted as-is.
    pub async fn update_property(
        &self,
        property_id: Uuid,
        request: UpsertPropertyRequest,
    ) -> AppResult<PropertyResponse> {
        validate_request(&request)?;

        let mut property = self.find_property(property_id).await?;

        if request.owner_user_id != property.owner_user_id {
            self.check_owner_exists(request.owner_user_id).await?;
        }

        property.apply(request);

        let saved = self.properties.update(property).await?;

        Ok(saved.to_response())
    }

    /// Delete a property and its blocks. Idempotent.
    pub async fn delete_property(&self, property_id: Uuid) -> AppResult<()> {
        self.blocks.delete_by_property(property_id).await?;
        self.properties.delete_by_id(property_id).await?;

        Ok(())
    }

    /// Block individual dates. Each date is processed independently: an
    /// already-blocked date gets its reason overwritten, a free date gets a
    /// new block, and a date covered by an active booking aborts the batch
    /// with a conflict.
    pub async fn block_property_dates(
        &self,
        property_id: Uuid,
        dates: BTreeSet<NaiveDate>,
        reason: Option<String>,
    ) -> AppResult<()> {
        if dates.is_empty() {
            return Ok(());
        }

        self.find_property(property_id).await?;

        for date in dates {
            self.create_or_update_block(property_id, date, reason.clone())
                .await?;
        }

        Ok(())
    }

    /// Remove blocks for the given dates in one batch. Dates that were never
    /// blocked are silently ignored.
    pub async fn unblock_property_dates(
        &self,
        property_id: Uuid,
        dates: BTreeSet<NaiveDate>,
    ) -> AppResult<()> {
        if dates.is_empty() {
            return Ok(());
        }

        self.blocks
            .delete_by_property_and_dates(property_id, dates.into_iter().collect())
            .await?;

        Ok(())
    }

    /// List a property's blocks with date within [start_date, end_date]
    pub async fn retrieve_blocked_dates(
        &self,
        property_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<PropertyBlockResponse>> {
        if start_date > end_date {
            return Err(AppError::InvalidArgument(
                "start_date cannot be after end_date".to_string(),
            ));
        }

        let blocks = self
            .blocks
            .find_by_property_and_range(property_id, start_date, end_date)
            .await?;

        Ok(blocks.iter().map(PropertyBlock::to_response).collect())
    }

    async fn find_property(&self, property_id: Uuid) -> AppResult<Property> {
        self.properties
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No property found with id {property_id}")))
    }

    async fn check_owner_exists(&self, owner_user_id: Uuid) -> AppResult<()> {
        self.users.find_by_id(owner_user_id).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "No user found with provided owner_user_id {owner_user_id}"
            ))
        })?;

        Ok(())
    }

    async fn create_or_update_block(
        &self,
        property_id: Uuid,
        date: NaiveDate,
        reason: Option<String>,
    ) -> AppResult<()> {
        // An already-blocked date is an upsert on the reason, never a conflict
        if let Some(mut existing) = self.blocks.find_by_property_and_date(property_id, date).await? {
            existing.reason = reason;
            self.blocks.update(existing).await?;

            return Ok(());
        }

        let booked = self
            .availability
            .booked_dates(property_id, date, date, None)
            .await?;

        if !booked.is_empty() {
            return Err(AppError::dates_conflict(
                "Cannot block dates that overlap with active bookings",
                booked,
            ));
        }

        self.blocks
            .insert(PropertyBlock::new(property_id, date, reason))
            .await?;

        Ok(())
    }
}
