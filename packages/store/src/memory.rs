use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::query::{Query, Table};
use crate::repo::RecordStore;

/// In-memory RecordStore for tests and offline development.
///
/// Rows are kept as JSON objects so filtering and ordering behave like the
/// data service: filters compare the textual form of a column, and upserts
/// merge the incoming columns into an existing row.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<HashMap<Table, Vec<Map<String, Value>>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held in `table`.
    pub fn len(&self, table: Table) -> usize {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&table)
            .map_or(0, Vec::len)
    }

    pub fn is_empty(&self, table: Table) -> bool {
        self.len(table) == 0
    }
}

fn column_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn compare_columns(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Null) | None, Some(Value::Null) | None) => Ordering::Equal,
        // nulls sort last, as they do on the service
        (Some(Value::Null) | None, _) => Ordering::Greater,
        (_, Some(Value::Null) | None) => Ordering::Less,
        (Some(x), Some(y)) => column_text(x).cmp(&column_text(y)),
    }
}

fn row_matches(row: &Map<String, Value>, query: &Query) -> bool {
    query.filters.iter().all(|filter| {
        row.get(&filter.column)
            .is_some_and(|value| column_text(value) == filter.value)
    })
}

impl RecordStore for MemoryStore {
    async fn select<T>(&self, query: &Query) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Send,
    {
        let mut rows: Vec<Map<String, Value>> = {
            let tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
            tables
                .get(&query.table)
                .map(|rows| rows.iter().filter(|row| row_matches(row, query)).cloned().collect())
                .unwrap_or_default()
        };

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ord = compare_columns(a.get(&order.column), b.get(&order.column));
                if order.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }

        rows.into_iter()
            .map(|row| serde_json::from_value(Value::Object(row)).map_err(StoreError::from))
            .collect()
    }

    async fn upsert<T>(&self, table: Table, on_conflict: &str, record: &T) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        let Value::Object(incoming) =
            serde_json::to_value(record).map_err(|e| StoreError::Encode(e.to_string()))?
        else {
            return Err(StoreError::Encode(format!(
                "{table} records must serialize to an object"
            )));
        };
        let key = incoming.get(on_conflict).map(column_text);

        let stored = {
            let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
            let rows = tables.entry(table).or_default();
            let position = key.as_ref().and_then(|key| {
                rows.iter()
                    .position(|row| row.get(on_conflict).map(column_text).as_ref() == Some(key))
            });
            match position {
                Some(index) => {
                    rows[index].extend(incoming);
                    rows[index].clone()
                }
                None => {
                    rows.push(incoming.clone());
                    incoming
                }
            }
        };

        Ok(serde_json::from_value(Value::Object(stored))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Profile, Project, Template, UserSettings};
    use crate::repo::Repository;

    fn project(id: &str, user_id: &str, public: bool, created: &str, updated: &str) -> Project {
        let mut project = Project::new(id, user_id);
        project.title = format!("Project {id}");
        project.is_public = public;
        project.created_at = Some(created.to_string());
        project.updated_at = Some(updated.to_string());
        project
    }

    fn template(id: &str, name: &str) -> Template {
        Template {
            id: id.to_string(),
            created_at: None,
            name: name.to_string(),
            description: None,
            preview_url: format!("https://cdn.example.com/{id}.png"),
            is_premium: false,
        }
    }

    #[tokio::test]
    async fn test_user_projects_newest_first() {
        let repo = Repository::new(MemoryStore::new());
        repo.save_project(&project("a", "u1", true, "2024-01-01", "2024-01-05"))
            .await
            .unwrap();
        repo.save_project(&project("b", "u1", true, "2024-01-02", "2024-03-01"))
            .await
            .unwrap();
        repo.save_project(&project("c", "u2", true, "2024-01-03", "2024-04-01"))
            .await
            .unwrap();

        let projects = repo.user_projects("u1").await.unwrap();
        let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_project_is_scoped_to_owner() {
        let repo = Repository::new(MemoryStore::new());
        repo.save_project(&project("a", "u1", true, "2024-01-01", "2024-01-01"))
            .await
            .unwrap();

        assert_eq!(repo.project("a", "u1").await.unwrap().id, "a");
        let err = repo.project("a", "u2").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_single_rejects_many_rows() {
        let repo = Repository::new(MemoryStore::new());
        repo.save_project(&project("a", "u1", true, "2024-01-01", "2024-01-01"))
            .await
            .unwrap();
        repo.save_project(&project("b", "u1", true, "2024-01-01", "2024-01-01"))
            .await
            .unwrap();

        let query = Query::from(Table::Projects).eq("user_id", "u1");
        let err = repo.fetch_single::<Project>(&query).await.unwrap_err();
        assert!(matches!(err, StoreError::Ambiguous { count: 2, .. }));
    }

    #[tokio::test]
    async fn test_missing_profile_is_none() {
        let repo = Repository::new(MemoryStore::new());
        assert_eq!(repo.user_profile("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_updates_in_place() {
        let store = MemoryStore::new();
        let repo = Repository::new(store.clone());

        let mut profile = Profile::new("u1");
        profile.full_name = Some("Ada".to_string());
        repo.save_profile(&profile).await.unwrap();

        profile.skills.push("Go".to_string());
        let saved = repo.save_profile(&profile).await.unwrap();

        assert_eq!(store.len(Table::Profiles), 1);
        assert_eq!(saved.skills, vec!["Go".to_string()]);
        assert_eq!(saved.full_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_settings_upsert_keyed_by_user() {
        let store = MemoryStore::new();
        let repo = Repository::new(store.clone());

        let mut settings = UserSettings::defaults_for("u1");
        repo.save_settings(&settings).await.unwrap();
        settings.portfolio_url_slug = Some("ada".to_string());
        repo.save_settings(&settings).await.unwrap();

        assert_eq!(store.len(Table::UserSettings), 1);
        let by_slug = repo.settings_by_slug("ada").await.unwrap().unwrap();
        assert_eq!(by_slug.user_id, "u1");
        assert!(repo.settings_by_slug("grace").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_templates_sorted_by_name() {
        let repo = Repository::new(MemoryStore::new());
        for (id, name) in [("t1", "Modern"), ("t2", "Classic"), ("t3", "Minimal")] {
            repo.store()
                .upsert(Table::Templates, "id", &template(id, name))
                .await
                .unwrap();
        }

        let names: Vec<_> = repo
            .templates()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Classic", "Minimal", "Modern"]);
    }

    #[tokio::test]
    async fn test_public_portfolio_hides_private_records() {
        let repo = Repository::new(MemoryStore::new());

        let mut profile = Profile::new("u1");
        profile.is_public = true;
        repo.save_profile(&profile).await.unwrap();
        repo.save_project(&project("old", "u1", true, "2024-01-01", "2024-01-01"))
            .await
            .unwrap();
        repo.save_project(&project("new", "u1", true, "2024-02-01", "2024-02-01"))
            .await
            .unwrap();
        repo.save_project(&project("hidden", "u1", false, "2024-03-01", "2024-03-01"))
            .await
            .unwrap();

        let portfolio = repo.public_portfolio("u1").await.unwrap().unwrap();
        let ids: Vec<_> = portfolio.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);

        profile.is_public = false;
        repo.save_profile(&profile).await.unwrap();
        assert!(repo.public_portfolio("u1").await.unwrap().is_none());
    }
}
