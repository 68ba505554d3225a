//! Cross-navigation between list screens.
//!
//! Tapping a key field on one screen opens another kind's screen pinned to that value. The
//! [`Navigator`] owns at most one controller per kind, creates it on first use and reuses it
//! afterwards. Navigating never fetches: the presentation layer loads the target screen
//! when it displays it.

use std::{any::Any, collections::HashMap};

use dioxus_logger::tracing;
use entity::{
    Entity, EntityKind, FundMaster, LegalEntity, Link, ManagementEntity, ShareClass, SubFund,
};

use crate::{
    api::{ApiClient, CatalogClient},
    controller::list::{ListController, PinnedFilter},
    error::{validation::ValidationError, Error},
};

/// Kind-erased view of a list screen, enough for navigation.
pub trait Screen: Send {
    fn kind(&self) -> EntityKind;
    fn pinned(&self) -> Option<&PinnedFilter>;
    fn set_pinned(&mut self, field: &str, value: &str) -> Result<(), Error>;
    fn clear_pinned(&mut self);
    fn teardown(&mut self);
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<E: Entity> Screen for ListController<E> {
    fn kind(&self) -> EntityKind {
        E::KIND
    }

    fn pinned(&self) -> Option<&PinnedFilter> {
        ListController::pinned(self)
    }

    fn set_pinned(&mut self, field: &str, value: &str) -> Result<(), Error> {
        ListController::set_pinned(self, field, value)
    }

    fn clear_pinned(&mut self) {
        ListController::clear_pinned(self)
    }

    fn teardown(&mut self) {
        ListController::teardown(self)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Screen the presentation layer should display next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub kind: EntityKind,
    pub pinned: Option<PinnedFilter>,
}

pub struct Navigator {
    api: ApiClient,
    screens: HashMap<EntityKind, Box<dyn Screen>>,
}

impl Navigator {
    /// Creates a new instance of [`Navigator`] with no open screens.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            screens: HashMap::new(),
        }
    }

    /// Typed access to the controller of `E`, created on first use.
    pub fn controller<E: Entity>(&mut self) -> Result<&mut ListController<E>, Error> {
        let screen = self.screen(E::KIND);
        let found = screen.kind();

        screen
            .as_any_mut()
            .downcast_mut::<ListController<E>>()
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "screen registered for {} is a {} screen",
                    E::KIND,
                    found
                ))
            })
    }

    pub fn is_open(&self, kind: EntityKind) -> bool {
        self.screens.contains_key(&kind)
    }

    /// Follows foreign key `field` of a `from` record to the referenced kind, pinned by its
    /// primary key.
    ///
    /// # Returns
    /// - `Ok(Route)` - The target screen, already pinned to `value`
    /// - `Err(Error::ValidationError)` - `field` is not a foreign key of `from`
    pub fn navigate(&mut self, from: EntityKind, field: &str, value: &str) -> Result<Route, Error> {
        let fk = from
            .schema()
            .foreign_key(field)
            .ok_or_else(|| ValidationError::NotForeignKey {
                kind: from,
                field: field.to_string(),
            })?;
        let target = fk.target;

        self.open(target, target.schema().primary_key, value)
    }

    /// Follows a tap on `field` of a `from` record to the `target` screen.
    ///
    /// Unlike [`navigate`](Self::navigate) this also handles primary keys and siblings, e.g.
    /// a fund's `fundId` opens its sub-funds pinned by `parentFundId`.
    pub fn navigate_to(
        &mut self,
        from: EntityKind,
        field: &str,
        value: &str,
        target: EntityKind,
    ) -> Result<Route, Error> {
        let pinned_field = from.resolve_link(field, target).ok_or_else(|| {
            ValidationError::NoNavigationTarget {
                from,
                field: field.to_string(),
                target,
            }
        })?;

        self.open(target, pinned_field, value)
    }

    /// Tap targets a `kind` row exposes.
    pub fn links(&self, kind: EntityKind) -> &'static [Link] {
        kind.schema().links
    }

    /// Shows the `kind` screen with whatever filter it already has.
    pub fn show(&mut self, kind: EntityKind) -> Route {
        let screen = self.screen(kind);

        Route {
            kind,
            pinned: screen.pinned().cloned(),
        }
    }

    /// Tears the `kind` screen down and forgets it. The next visit starts fresh.
    pub fn close(&mut self, kind: EntityKind) {
        if let Some(mut screen) = self.screens.remove(&kind) {
            tracing::debug!("Closing {} screen", screen.kind());
            screen.teardown();
        }
    }

    fn open(&mut self, kind: EntityKind, field: &str, value: &str) -> Result<Route, Error> {
        tracing::debug!("Navigating to {} with {} = {:?}", kind, field, value);

        let screen = self.screen(kind);
        screen.set_pinned(field, value)?;

        Ok(Route {
            kind,
            pinned: screen.pinned().cloned(),
        })
    }

    pub(super) fn screen(&mut self, kind: EntityKind) -> &mut Box<dyn Screen> {
        let api = &self.api;
        self.screens
            .entry(kind)
            .or_insert_with(|| new_screen(kind, api.clone()))
    }
}

fn new_screen(kind: EntityKind, api: ApiClient) -> Box<dyn Screen> {
    fn boxed<E: Entity>(api: ApiClient) -> Box<dyn Screen> {
        Box::new(ListController::<E>::new(CatalogClient::new(api)))
    }

    match kind {
        EntityKind::LegalEntity => boxed::<LegalEntity>(api),
        EntityKind::ManagementEntity => boxed::<ManagementEntity>(api),
        EntityKind::FundMaster => boxed::<FundMaster>(api),
        EntityKind::SubFund => boxed::<SubFund>(api),
        EntityKind::ShareClass => boxed::<ShareClass>(api),
    }
}
