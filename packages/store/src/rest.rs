//! PostgREST-backed [`RecordStore`].
//!
//! Every request carries the service key twice, as the `apikey` header and as
//! a bearer token, which is what the hosted data service expects from an
//! anonymous client. Selects are `GET /rest/v1/{table}` with the query encoded
//! as PostgREST operators; upserts are `POST` with
//! `Prefer: resolution=merge-duplicates` so an existing row is updated in place.

use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::StoreError;
use crate::query::{Query, Table};
use crate::repo::RecordStore;

const UPSERT_PREFERENCE: &str = "resolution=merge-duplicates,return=representation";

#[derive(Clone, Debug)]
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Error body returned by PostgREST.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url, table.name())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    Err(StoreError::Status {
        status: status.as_u16(),
        message,
    })
}

impl RecordStore for RestStore {
    async fn select<T>(&self, query: &Query) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Send,
    {
        tracing::debug!(table = %query.table, filters = query.filters.len(), "select");
        let request = self
            .client
            .get(self.table_url(query.table))
            .query(&query.to_params());
        let response = check_status(self.authorize(request).send().await?).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn upsert<T>(&self, table: Table, on_conflict: &str, record: &T) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        tracing::debug!(table = %table, on_conflict, "upsert");
        let body = serde_json::to_vec(record).map_err(|e| StoreError::Encode(e.to_string()))?;
        let request = self
            .client
            .post(self.table_url(table))
            .query(&[("on_conflict", on_conflict)])
            .header("Prefer", UPSERT_PREFERENCE)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        let response = check_status(self.authorize(request).send().await?).await?;
        let body = response.text().await?;
        let rows: Vec<T> = serde_json::from_str(&body)?;
        rows.into_iter().next().ok_or(StoreError::NotFound {
            table: table.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, ProjectStatus, UserSettings};
    use crate::repo::Repository;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_select_sends_filters_order_and_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/projects"))
            .and(query_param("select", "*"))
            .and(query_param("user_id", "eq.u1"))
            .and(query_param("order", "updated_at.desc"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "p1", "user_id": "u1", "title": "Lamp", "status": "completed",
                 "technologies": null, "is_public": true},
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let repo = Repository::new(RestStore::new(server.uri(), "anon-key"));
        let projects = repo.user_projects("u1").await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].status, ProjectStatus::Completed);
        assert!(projects[0].technologies.is_empty());
    }

    #[tokio::test]
    async fn test_upsert_merges_on_conflict_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/user_settings"))
            .and(query_param("on_conflict", "user_id"))
            .and(header("prefer", UPSERT_PREFERENCE))
            .and(body_partial_json(json!({"user_id": "u1", "theme_preference": "dark"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([
                {"id": "s1", "user_id": "u1", "theme_preference": "dark",
                 "email_notifications": false, "portfolio_url_slug": null}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let repo = Repository::new(RestStore::new(format!("{}/", server.uri()), "anon-key"));
        let mut settings = UserSettings::defaults_for("u1");
        settings.theme_preference = crate::models::ThemePreference::Dark;
        settings.email_notifications = false;

        let saved = repo.save_settings(&settings).await.unwrap();
        assert_eq!(saved.id.as_deref(), Some("s1"));
        assert!(!saved.email_notifications);
    }

    #[tokio::test]
    async fn test_error_status_carries_service_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/projects"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})),
            )
            .mount(&server)
            .await;

        let repo = Repository::new(RestStore::new(server.uri(), "wrong"));
        let err = repo.project("p1", "u1").await.unwrap_err();
        match err {
            StoreError::Status { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_single_row_read_with_no_rows_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/projects"))
            .and(query_param("id", "eq.missing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let repo = Repository::new(RestStore::new(server.uri(), "anon-key"));
        let err = repo.project("missing", "u1").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/projects"))
            .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
            .mount(&server)
            .await;

        let repo = Repository::new(RestStore::new(server.uri(), "anon-key"));
        let err = repo
            .save_project(&Project::new("p1", "u1"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
