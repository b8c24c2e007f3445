use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::api::error::ApiError;
use crate::api::models::{Banner, BannerPatch, Contact, ProfileImageUpdate, RecordId, UserProfile};
use crate::api::service::{BannerApi, ContactApi, UserApi};

pub const APP_USER_AGENT: &str = concat!("broker-admin/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base: Self::base_api(base_url)?,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// The base always ends with a slash so relative joins keep its path.
    fn base_api(base_url: &str) -> Result<Url, ApiError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ApiError::Config("API base URL is empty".into()));
        }
        let with_slash = format!("{}/", trimmed.trim_end_matches('/'));
        Ok(Url::parse(&with_slash)?)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    fn with_auth(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(t) = &self.token {
            req = req.header("Authorization", format!("Bearer {}", t));
        }
        req
    }

    /// Sends the request and reads the body, turning non-success statuses into errors.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let resp = self.with_auth(req).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            log::warn!("request failed with HTTP {}", status.as_u16());
            return Err(ApiError::from_status(status.as_u16(), body));
        }
        Ok(body)
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);
        let body = self.send(self.http.get(url)).await?;
        let json = parse_body(&body)?;
        let items = unwrap_list(json)?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(serde_json::from_value(item)?);
        }
        Ok(out)
    }

    async fn fetch_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);
        let body = self.send(self.http.get(url)).await?;
        let json = unwrap_record(parse_body(&body)?)?;
        Ok(serde_json::from_value(json)?)
    }
}

fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::EmptyResponse);
    }
    Ok(serde_json::from_str(body)?)
}

/// List bodies arrive bare or wrapped in `data` / `items`.
fn unwrap_list(json: Value) -> Result<Vec<Value>, ApiError> {
    match json {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            for key in ["data", "items"] {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return Ok(items);
                }
            }
            Err(ApiError::Decode("expected a list of records".into()))
        }
        Value::Null => Err(ApiError::EmptyResponse),
        _ => Err(ApiError::Decode("expected a list of records".into())),
    }
}

fn unwrap_record(json: Value) -> Result<Value, ApiError> {
    match json {
        Value::Null => Err(ApiError::EmptyResponse),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Null) => Err(ApiError::EmptyResponse),
            Some(inner @ Value::Object(_)) => Ok(inner),
            Some(other) => {
                map.insert("data".into(), other);
                Ok(Value::Object(map))
            }
            None => Ok(Value::Object(map)),
        },
        other => Err(ApiError::Decode(format!("expected a record, got {}", other))),
    }
}

#[async_trait]
impl BannerApi for ApiClient {
    async fn list_banners(&self) -> Result<Vec<Banner>, ApiError> {
        self.fetch_list("banners").await
    }

    async fn update_banner(&self, id: &RecordId, patch: BannerPatch) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("banners/{}", id))?;
        log::debug!("PATCH {}", url);
        self.send(self.http.patch(url).json(&patch)).await?;
        Ok(())
    }

    async fn delete_banner(&self, id: &RecordId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("banners/{}", id))?;
        log::debug!("DELETE {}", url);
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}

#[async_trait]
impl ContactApi for ApiClient {
    async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.fetch_list("contacts").await
    }

    async fn delete_contact(&self, id: &RecordId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("contacts/{}", id))?;
        log::debug!("DELETE {}", url);
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}

#[async_trait]
impl UserApi for ApiClient {
    async fn get_user(&self, id: &RecordId) -> Result<UserProfile, ApiError> {
        self.fetch_one(&format!("users/{}", id)).await
    }

    async fn update_user_image(&self, id: &RecordId, update: ProfileImageUpdate) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("users/{}/image", id))?;
        log::debug!("PATCH {} ({} bytes)", url, update.image.bytes.len());
        let part = Part::bytes(update.image.bytes)
            .file_name(update.image.file_name)
            .mime_str(&update.image.mime)?;
        let form = Form::new()
            .part("image", part)
            .text("oldImage", update.old_image);
        self.send(self.http.patch(url).multipart(form)).await?;
        Ok(())
    }
}
