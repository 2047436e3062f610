//! Firebase Realtime Database REST client
//!
//! Direct implementation of the `Database` trait over the REST protocol:
//! every node is reachable at `{database_url}/{path}.json` and the HTTP verb
//! selects the operation.
//!
//! | operation | request                     | response            |
//! |-----------|-----------------------------|---------------------|
//! | push      | `POST`                      | `{"name": "<key>"}` |
//! | set       | `PUT`                       | empty (silent)      |
//! | update    | `PATCH`                     | empty (silent)      |
//! | remove    | `DELETE`                    | `null`              |
//! | once      | `GET`                       | value or `null`     |

use crate::client::Database;
use crate::error::DatabaseError;
use crate::path::DbPath;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

/// Builder for `RestDatabase`
#[derive(Debug, Clone, Default)]
pub struct RestDatabaseBuilder {
    database_url: Option<String>,
    auth_token: Option<String>,
    timeout: Option<Duration>,
}

impl RestDatabaseBuilder {
    /// Database root, e.g. `https://my-app.firebaseio.com`
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Credential sent as the `auth` query parameter
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<RestDatabase, DatabaseError> {
        let raw_url = self
            .database_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| DatabaseError::NotConfigured("database URL is missing".to_string()))?;

        let database_url = Url::parse(&raw_url).map_err(|e| {
            DatabaseError::NotConfigured(format!("invalid database URL '{}': {}", raw_url, e))
        })?;
        if database_url.cannot_be_a_base() {
            return Err(DatabaseError::NotConfigured(format!(
                "database URL '{}' cannot hold paths",
                raw_url
            )));
        }

        let client = Client::builder()
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )
            .build()?;

        Ok(RestDatabase {
            client,
            database_url,
            auth_token: self.auth_token.filter(|token| !token.is_empty()),
        })
    }
}

/// Database client speaking the Firebase REST protocol
#[derive(Debug, Clone)]
pub struct RestDatabase {
    client: Client,
    database_url: Url,
    auth_token: Option<String>,
}

impl RestDatabase {
    pub fn builder() -> RestDatabaseBuilder {
        RestDatabaseBuilder::default()
    }

    pub fn database_url(&self) -> &str {
        self.database_url.as_str()
    }

    /// REST endpoint for a node
    ///
    /// Every segment is percent-encoded on its own, the last one carries the
    /// `.json` suffix.
    fn endpoint(&self, path: &DbPath) -> Url {
        let mut url = self.database_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            if let Some((last, parents)) = path.segments().split_last() {
                segments.extend(parents);
                segments.push(&format!("{}.json", last));
            }
        }
        url
    }

    fn request(&self, method: Method, path: &DbPath) -> RequestBuilder {
        let url = self.endpoint(path);
        debug!("rest: {} {}", method, url);

        let request = self.client.request(method, url);
        match &self.auth_token {
            Some(token) => request.query(&[("auth", token.as_str())]),
            None => request,
        }
    }

    /// Turn non-success statuses into `DatabaseError::Status`
    async fn check(response: Response) -> Result<Response, DatabaseError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, body))
    }
}

fn status_error(status: StatusCode, body: String) -> DatabaseError {
    DatabaseError::Status {
        status: status.as_u16(),
        body,
    }
}

/// Key from a push reply, `{"name": "<key>"}`
fn decode_push(body: &str) -> Result<String, DatabaseError> {
    match serde_json::from_str::<PushResponse>(body) {
        Ok(pushed) if !pushed.name.is_empty() => Ok(pushed.name),
        _ => Err(DatabaseError::UnexpectedResponse(body.to_string())),
    }
}

/// Value from a read reply; `null` means nothing is stored
fn decode_value(body: &str) -> Result<Option<Value>, DatabaseError> {
    Ok(match serde_json::from_str(body)? {
        Value::Null => None,
        value => Some(value),
    })
}

#[async_trait]
impl Database for RestDatabase {
    async fn push(&self, path: &DbPath, value: Value) -> Result<String, DatabaseError> {
        let response = self.request(Method::POST, path).json(&value).send().await?;
        let body = Self::check(response).await?.text().await?;
        decode_push(&body)
    }

    async fn set(&self, path: &DbPath, value: Value) -> Result<(), DatabaseError> {
        let response = self
            .request(Method::PUT, path)
            .query(&[("print", "silent")])
            .json(&value)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update(
        &self,
        path: &DbPath,
        fields: Map<String, Value>,
    ) -> Result<(), DatabaseError> {
        // Validate keys locally, the server would only answer 400
        for key in fields.keys() {
            path.child(key)?;
        }

        let response = self
            .request(Method::PATCH, path)
            .query(&[("print", "silent")])
            .json(&fields)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn remove(&self, path: &DbPath) -> Result<(), DatabaseError> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn once(&self, path: &DbPath) -> Result<Option<Value>, DatabaseError> {
        let response = self.request(Method::GET, path).send().await?;
        let body = Self::check(response).await?.text().await?;
        decode_value(&body)
    }
}
