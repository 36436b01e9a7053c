//! # Repository: typed reads and writes over an abstract record store
//!
//! [`Repository`] is the only place that knows which query answers which
//! question. Backends implement the two-method [`RecordStore`] trait, so the
//! same helpers run against the PostgREST service ([`crate::RestStore`]) in
//! production and an in-memory store ([`crate::MemoryStore`]) in tests.
//!
//! ## Read path
//!
//! | Method | Query |
//! |--------|-------|
//! | [`user_projects`](Repository::user_projects) | `projects` by `user_id`, newest `updated_at` first |
//! | [`project`](Repository::project) | one `projects` row by `id` and owner |
//! | [`user_profile`](Repository::user_profile) | `profiles` by `id`, missing is `None` |
//! | [`templates`](Repository::templates) | every `templates` row by `name` |
//! | [`public_portfolio`](Repository::public_portfolio) | public profile plus its public projects, newest `created_at` first |
//! | [`user_settings`](Repository::user_settings) / [`settings_by_slug`](Repository::settings_by_slug) | `user_settings` by owner or by portfolio slug |
//!
//! ## Write path
//!
//! Every save is a single upsert keyed by the collection's
//! [`upsert_key`](crate::Table::upsert_key); the stored row is returned.

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoreError;
use crate::models::{Profile, Project, Template, UserSettings};
use crate::portfolio::PublicPortfolio;
use crate::query::{Query, Table};

/// Async interface to a collection-oriented data service.
pub trait RecordStore {
    fn select<T>(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<Vec<T>, StoreError>> + Send
    where
        T: DeserializeOwned + Send;

    /// Insert-or-update `record`, resolving conflicts on `on_conflict`.
    fn upsert<T>(
        &self,
        table: Table,
        on_conflict: &str,
        record: &T,
    ) -> impl Future<Output = Result<T, StoreError>> + Send
    where
        T: Serialize + DeserializeOwned + Send + Sync;
}

/// A record kind bound to its collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    const TABLE: Table;
}

impl Record for Profile {
    const TABLE: Table = Table::Profiles;
}

impl Record for Project {
    const TABLE: Table = Table::Projects;
}

impl Record for Template {
    const TABLE: Table = Table::Templates;
}

impl Record for UserSettings {
    const TABLE: Table = Table::UserSettings;
}

#[derive(Clone, Debug)]
pub struct Repository<S> {
    store: S,
}

impl<S: RecordStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn fetch_all<T: Record>(&self, query: &Query) -> Result<Vec<T>, StoreError> {
        self.store.select(query).await
    }

    /// Expect exactly one row.
    pub async fn fetch_single<T: Record>(&self, query: &Query) -> Result<T, StoreError> {
        let mut rows: Vec<T> = self.store.select(query).await?;
        match rows.len() {
            0 => Err(StoreError::NotFound {
                table: query.table.name(),
            }),
            1 => Ok(rows.remove(0)),
            count => Err(StoreError::Ambiguous {
                table: query.table.name(),
                count,
            }),
        }
    }

    /// Like [`fetch_single`](Self::fetch_single) but a missing row is `None`.
    pub async fn fetch_optional<T: Record>(&self, query: &Query) -> Result<Option<T>, StoreError> {
        match self.fetch_single(query).await {
            Ok(row) => Ok(Some(row)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn save<T: Record>(&self, record: &T) -> Result<T, StoreError> {
        self.store
            .upsert(T::TABLE, T::TABLE.upsert_key(), record)
            .await
    }

    // ---- projects ----

    pub async fn user_projects(&self, user_id: &str) -> Result<Vec<Project>, StoreError> {
        let query = Query::from(Table::Projects)
            .eq("user_id", user_id)
            .order("updated_at", false);
        self.fetch_all(&query).await
    }

    /// One project, scoped to its owner so ids from other accounts never resolve.
    pub async fn project(&self, project_id: &str, owner: &str) -> Result<Project, StoreError> {
        let query = Query::from(Table::Projects)
            .eq("id", project_id)
            .eq("user_id", owner);
        self.fetch_single(&query).await
    }

    pub async fn save_project(&self, project: &Project) -> Result<Project, StoreError> {
        self.save(project).await
    }

    // ---- profiles ----

    pub async fn user_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        let query = Query::from(Table::Profiles).eq("id", user_id);
        self.fetch_optional(&query).await
    }

    pub async fn save_profile(&self, profile: &Profile) -> Result<Profile, StoreError> {
        self.save(profile).await
    }

    // ---- templates ----

    pub async fn templates(&self) -> Result<Vec<Template>, StoreError> {
        let query = Query::from(Table::Templates).order("name", true);
        self.fetch_all(&query).await
    }

    // ---- public portfolio ----

    /// `None` when the profile does not exist or is private.
    pub async fn public_portfolio(
        &self,
        user_id: &str,
    ) -> Result<Option<PublicPortfolio>, StoreError> {
        let query = Query::from(Table::Profiles)
            .eq("id", user_id)
            .eq("is_public", true);
        let Some(profile) = self.fetch_optional::<Profile>(&query).await? else {
            return Ok(None);
        };

        let query = Query::from(Table::Projects)
            .eq("user_id", user_id)
            .eq("is_public", true)
            .order("created_at", false);
        let projects = self.fetch_all(&query).await?;

        Ok(PublicPortfolio::assemble(profile, projects))
    }

    // ---- settings ----

    pub async fn user_settings(&self, user_id: &str) -> Result<Option<UserSettings>, StoreError> {
        let query = Query::from(Table::UserSettings).eq("user_id", user_id);
        self.fetch_optional(&query).await
    }

    pub async fn settings_by_slug(&self, slug: &str) -> Result<Option<UserSettings>, StoreError> {
        let query = Query::from(Table::UserSettings).eq("portfolio_url_slug", slug);
        self.fetch_optional(&query).await
    }

    pub async fn save_settings(&self, settings: &UserSettings) -> Result<UserSettings, StoreError> {
        self.save(settings).await
    }
}
