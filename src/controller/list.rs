//! Generic list screen controller.
//!
//! One [`ListController`] exists per entity kind. It holds the last successful fetch (`all`)
//! and derives the rendered view (`visible`) from three filters that are always AND-ed:
//!
//! - the pinned filter set by cross-navigation: exact, case-insensitive equality on one field
//! - the status facet (`ALL`/`ACTIVE`/`CLOSED`) for kinds with a status
//! - free text: case-insensitive substring match over the kind's searchable fields
//!
//! Setting one filter never clears another. A numeric sort applies to the current view only
//! and is dropped by the next load or filter change.
//!
//! Loads are two-phase so that a superseded or post-teardown completion cannot overwrite
//! newer state: [`begin_load`](ListController::begin_load) stamps a [`LoadRequest`] with a
//! generation, and [`complete_load`](ListController::complete_load) applies a response only
//! if it carries the latest generation and the controller is still active.

use dioxus_logger::tracing;
use entity::{Entity, EntitySchema, FieldType};

use crate::{
    api::CatalogClient,
    controller::notification::{Notification, RetryAction},
    error::{validation::ValidationError, Error},
    model::api::Ack,
    service::{form::build_record, id::next_id, FormInput},
};

/// Status facet value meaning "no status filter".
const STATUS_ALL: &str = "ALL";

/// Exact-match filter on one field, set by cross-navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedFilter {
    /// Canonical camelCase field name
    pub field: &'static str,
    pub value: String,
}

/// Outcome of applying a load response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The response replaced the list
    Applied,
    /// A newer load was issued after this one; the response was ignored
    Superseded,
    /// The screen was torn down; the response was ignored
    Inactive,
}

/// A fetch issued by [`ListController::begin_load`], detached from the controller.
pub struct LoadRequest<E> {
    catalog: CatalogClient<E>,
    generation: u64,
}

impl<E: Entity> LoadRequest<E> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Performs the fetch. Never touches controller state.
    pub async fn send(self) -> LoadResponse<E> {
        let result = self.catalog.list().await;

        LoadResponse {
            generation: self.generation,
            result,
        }
    }
}

/// Result of a [`LoadRequest`], to be handed back to [`ListController::complete_load`].
pub struct LoadResponse<E> {
    pub generation: u64,
    pub result: Result<Vec<E>, Error>,
}

pub struct ListController<E: Entity> {
    catalog: CatalogClient<E>,
    all: Vec<E>,
    visible: Vec<E>,
    free_text: String,
    pinned: Option<PinnedFilter>,
    status: Option<String>,
    sorted_by: Option<&'static str>,
    /// Generation of the most recently issued load
    generation: u64,
    loading: bool,
    active: bool,
    last_error: Option<String>,
    notifications: Vec<Notification<E>>,
}

impl<E: Entity> ListController<E> {
    /// Creates an empty, active controller. Nothing is fetched until [`load`](Self::load).
    pub fn new(catalog: CatalogClient<E>) -> Self {
        Self {
            catalog,
            all: Vec::new(),
            visible: Vec::new(),
            free_text: String::new(),
            pinned: None,
            status: None,
            sorted_by: None,
            generation: 0,
            loading: false,
            active: true,
            last_error: None,
            notifications: Vec::new(),
        }
    }

    pub fn schema(&self) -> &'static EntitySchema {
        E::KIND.schema()
    }

    /// Records of the last successful fetch, in backend order.
    pub fn all(&self) -> &[E] {
        &self.all
    }

    /// Records passing every active filter, sorted if a sort was requested.
    pub fn visible(&self) -> &[E] {
        &self.visible
    }

    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    pub fn pinned(&self) -> Option<&PinnedFilter> {
        self.pinned.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn sorted_by(&self) -> Option<&'static str> {
        self.sorted_by
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Message of the last failure, cleared by the next successful load.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Drains pending notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification<E>> {
        std::mem::take(&mut self.notifications)
    }

    /// Marks the screen as gone. Later load completions are ignored.
    pub fn teardown(&mut self) {
        tracing::debug!("{} screen torn down", E::KIND);
        self.active = false;
        self.loading = false;
    }

    /// Issues a new load, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadRequest<E> {
        self.generation += 1;
        self.loading = true;

        LoadRequest {
            catalog: self.catalog.clone(),
            generation: self.generation,
        }
    }

    /// Applies a load response.
    ///
    /// On success the list is replaced, the sort is dropped, filters are re-applied and the
    /// error state is cleared. On failure `all` and `visible` keep their last good contents
    /// and an error notification offering a retry is queued.
    ///
    /// # Returns
    /// - `Ok(LoadStatus::Applied)` - The list was replaced
    /// - `Ok(LoadStatus::Superseded | LoadStatus::Inactive)` - The response was ignored
    /// - `Err(Error)` - The fetch failed; state is unchanged apart from the error
    pub fn complete_load(&mut self, response: LoadResponse<E>) -> Result<LoadStatus, Error> {
        if !self.active {
            tracing::warn!(
                "Ignoring {} load #{} completed after teardown",
                E::KIND,
                response.generation
            );
            return Ok(LoadStatus::Inactive);
        }

        if response.generation != self.generation {
            tracing::warn!(
                "Ignoring superseded {} load #{} (latest is #{})",
                E::KIND,
                response.generation,
                self.generation
            );
            return Ok(LoadStatus::Superseded);
        }

        self.loading = false;

        match response.result {
            Ok(records) => {
                tracing::debug!("Loaded {} {} records", records.len(), E::KIND);

                self.all = records;
                self.sorted_by = None;
                self.last_error = None;
                self.apply_filters();

                Ok(LoadStatus::Applied)
            }
            Err(err) => {
                self.report("Failed to load data", &err, Some(RetryAction::Load));
                Err(err)
            }
        }
    }

    /// Fetches the whole collection and applies it.
    pub async fn load(&mut self) -> Result<LoadStatus, Error> {
        let request = self.begin_load();
        let response = request.send().await;

        self.complete_load(response)
    }

    /// Pull-to-refresh: drops the pinned filter, then reloads.
    pub async fn refresh(&mut self) -> Result<LoadStatus, Error> {
        self.pinned = None;
        self.apply_filters();

        self.load().await
    }

    pub fn set_free_text(&mut self, text: &str) {
        self.free_text = text.to_string();
        self.apply_filters();
    }

    /// Pins `field` to exactly `value`, compared case-insensitively. A blank value clears
    /// the pin.
    ///
    /// `field` may be given in camelCase or wire form. `value` is stored as given, so
    /// surrounding whitespace takes part in the comparison.
    pub fn set_pinned(&mut self, field: &str, value: &str) -> Result<(), Error> {
        let def = self
            .schema()
            .field(field)
            .ok_or_else(|| ValidationError::UnknownField {
                kind: E::KIND,
                field: field.to_string(),
            })?;

        self.pinned = (!value.trim().is_empty()).then(|| PinnedFilter {
            field: def.name,
            value: value.to_string(),
        });
        self.apply_filters();

        Ok(())
    }

    pub fn clear_pinned(&mut self) {
        self.pinned = None;
        self.apply_filters();
    }

    /// Sets the status facet. `None`, blank or `ALL` removes it.
    pub fn set_status(&mut self, status: Option<&str>) -> Result<(), Error> {
        if !self.schema().has_field("status") {
            return Err(ValidationError::NoStatusField { kind: E::KIND }.into());
        }

        self.status = status
            .map(str::trim)
            .filter(|status| !status.is_empty() && !status.eq_ignore_ascii_case(STATUS_ALL))
            .map(str::to_string);
        self.apply_filters();

        Ok(())
    }

    /// Sorts the current view by a numeric field, largest first. Ties keep their order.
    pub fn sort_by(&mut self, field: &str) -> Result<(), Error> {
        let def = self
            .schema()
            .field(field)
            .ok_or_else(|| ValidationError::UnknownField {
                kind: E::KIND,
                field: field.to_string(),
            })?;

        if def.ty != FieldType::Number {
            return Err(ValidationError::NotNumeric {
                kind: E::KIND,
                field: def.name,
            }
            .into());
        }

        let number = |record: &E| {
            record
                .field(def.name)
                .and_then(|value| value.as_number())
                .unwrap_or(0.0)
        };
        self.visible.sort_by(|a, b| number(b).total_cmp(&number(a)));
        self.sorted_by = Some(def.name);

        Ok(())
    }

    /// Creates `draft` under the next free id, then reloads.
    pub async fn add(&mut self, draft: E) -> Result<Ack, Error> {
        let mut record = draft;
        record.set_primary_key(next_id(&self.all));

        self.create(record).await
    }

    /// Validates `form`, then creates it under the next free id and reloads.
    pub async fn add_from_form(&mut self, form: &FormInput) -> Result<Ack, Error> {
        let id = next_id(&self.all);
        let record = match build_record::<E>(&id, form) {
            Ok(record) => record,
            Err(err) => {
                self.report("Failed to add", &err, None);
                return Err(err);
            }
        };

        self.create(record).await
    }

    /// Replaces record `id` with `patch`, keeping the primary key fixed, then reloads.
    pub async fn edit(&mut self, id: &str, patch: E) -> Result<Ack, Error> {
        let mut record = patch;
        record.set_primary_key(id.trim().to_string());

        self.update(id.trim().to_string(), record).await
    }

    /// Validates `form` as the new contents of record `id`, then updates and reloads.
    pub async fn edit_from_form(&mut self, id: &str, form: &FormInput) -> Result<Ack, Error> {
        let record = match build_record::<E>(id, form) {
            Ok(record) => record,
            Err(err) => {
                self.report("Failed to update", &err, None);
                return Err(err);
            }
        };

        self.update(id.trim().to_string(), record).await
    }

    /// Deletes record `id`, then reloads.
    pub async fn remove(&mut self, id: &str) -> Result<Ack, Error> {
        let id = id.trim().to_string();

        match self.catalog.delete(&id).await {
            Ok(ack) => {
                tracing::info!("Deleted {} {}", E::KIND, id);
                self.written(format!("{} deleted successfully", E::KIND)).await;
                Ok(ack)
            }
            Err(err) => {
                self.report("Failed to delete", &err, Some(RetryAction::Delete(id)));
                Err(err)
            }
        }
    }

    /// Re-invokes the operation behind a retry affordance.
    pub async fn retry(&mut self, action: RetryAction<E>) -> Result<(), Error> {
        match action {
            RetryAction::Load => self.load().await.map(|_| ()),
            RetryAction::Create(record) => self.create(record).await.map(|_| ()),
            RetryAction::Update(id, record) => self.update(id, record).await.map(|_| ()),
            RetryAction::Delete(id) => self.remove(&id).await.map(|_| ()),
        }
    }

    async fn create(&mut self, record: E) -> Result<Ack, Error> {
        match self.catalog.create(&record).await {
            Ok(ack) => {
                tracing::info!("Created {} {}", E::KIND, record.primary_key());
                self.written(format!("{} added successfully", E::KIND)).await;
                Ok(ack)
            }
            Err(err) => {
                self.report("Failed to add", &err, Some(RetryAction::Create(record)));
                Err(err)
            }
        }
    }

    async fn update(&mut self, id: String, record: E) -> Result<Ack, Error> {
        match self.catalog.update(&id, &record).await {
            Ok(ack) => {
                tracing::info!("Updated {} {}", E::KIND, id);
                self.written(format!("{} updated successfully", E::KIND)).await;
                Ok(ack)
            }
            Err(err) => {
                self.report("Failed to update", &err, Some(RetryAction::Update(id, record)));
                Err(err)
            }
        }
    }

    /// Announces a successful write and refetches; the backend is the source of truth.
    ///
    /// Both are skipped once the screen is torn down. A failing reload reports its own error and does not undo the write.
    async fn written(&mut self, message: String) {
        if !self.active {
            tracing::debug!("{} screen torn down, not announcing: {}", E::KIND, message);
            return;
        }

        self.notifications.push(Notification::success(message));
        let _ = self.load().await;
    }

    fn report(&mut self, context: &str, err: &Error, action: Option<RetryAction<E>>) {
        tracing::error!("{} {}: {}", E::KIND, context.to_lowercase(), err);

        let notification = Notification::failure(context, err, action);
        self.last_error = Some(notification.message.clone());
        self.notifications.push(notification);
    }

    fn apply_filters(&mut self) {
        self.sorted_by = None;
        self.visible = self
            .all
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();
    }

    fn matches(&self, record: &E) -> bool {
        if let Some(pinned) = &self.pinned {
            if !field_equals(record, pinned.field, &pinned.value) {
                return false;
            }
        }

        if let Some(status) = &self.status {
            if !field_equals(record, "status", status) {
                return false;
            }
        }

        if self.free_text.is_empty() {
            return true;
        }

        let needle = self.free_text.to_lowercase();
        self.schema().searchable.iter().any(|name| {
            record
                .field(name)
                .is_some_and(|value| value.as_text().to_lowercase().contains(&needle))
        })
    }
}

fn field_equals<E: Entity>(record: &E, field: &str, expected: &str) -> bool {
    record
        .field(field)
        .is_some_and(|value| value.as_text().to_lowercase() == expected.to_lowercase())
}
