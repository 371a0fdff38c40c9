use crate::domain::model::Profile;
use crate::utils::error::{Result, WhoArtError};
use reqwest::Client;
use serde_json::{Map, Value};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Zero,
}

impl FieldDefault {
    fn to_value(self) -> Value {
        match self {
            FieldDefault::Zero => Value::from(0u64),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub remote: &'static str,
    pub internal: &'static str,
    pub default: Option<FieldDefault>,
}

const fn field(
    remote: &'static str,
    internal: &'static str,
    default: Option<FieldDefault>,
) -> FieldMapping {
    FieldMapping {
        remote,
        internal,
        default,
    }
}

/// GitHub `/users/{login}` 欄位 -> Profile 欄位
pub const PROFILE_FIELD_MAP: &[FieldMapping] = &[
    field("login", "username", None),
    field("name", "display_name", None),
    field("bio", "bio", None),
    field("public_repos", "public_repo_count", Some(FieldDefault::Zero)),
    field("followers", "follower_count", Some(FieldDefault::Zero)),
    field("public_gists", "public_gist_count", None),
    field("avatar_url", "avatar_url", None),
    field("html_url", "profile_url", None),
];

pub const BIO_PLACEHOLDER: &str = "No bio available";
pub const NOT_PROVIDED: &str = "Not provided";

/// 依照 PROFILE_FIELD_MAP 投影，JSON null 視為缺少
pub fn project_profile(json: &Value) -> Result<Profile> {
    let source = json.as_object();
    let mut projected = Map::new();

    for mapping in PROFILE_FIELD_MAP {
        let value = source
            .and_then(|obj| obj.get(mapping.remote))
            .filter(|v| !v.is_null())
            .cloned()
            .or_else(|| mapping.default.map(FieldDefault::to_value));

        if let Some(value) = value {
            projected.insert(mapping.internal.to_string(), value);
        }
    }

    let profile = serde_json::from_value(Value::Object(projected))?;
    Ok(profile)
}

pub fn users_endpoint(base_url: &str, username: &str) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| WhoArtError::InvalidConfigValueError {
        field: "api.base_url".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    url.path_segments_mut()
        .map_err(|_| WhoArtError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: base_url.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        })?
        .pop_if_empty()
        .push("users")
        .push(username);

    Ok(url)
}

pub struct ProfileFetcher {
    client: Client,
    base_url: String,
}

impl ProfileFetcher {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// 單次 GET，不重試
    pub async fn fetch(&self, username: &str) -> Result<Profile> {
        if username.is_empty() {
            return Err(WhoArtError::MalformedInput {
                value: username.to_string(),
                reason: "username cannot be empty".to_string(),
            });
        }

        let endpoint = users_endpoint(&self.base_url, username)?;
        tracing::debug!("Making API request to: {}", endpoint);
        let response = self.client.get(endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(WhoArtError::LookupFailed {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        let json_data: Value = serde_json::from_slice(&body)?;
        project_profile(&json_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorSeverity;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_project_full_profile() {
        let json = json!({
            "login": "octocat",
            "name": "The Octocat",
            "bio": "Mascot",
            "public_repos": 8,
            "followers": 9000,
            "public_gists": 8,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "company": "@github"
        });

        let profile = project_profile(&json).unwrap();
        assert_eq!(profile.username, "octocat");
        assert_eq!(profile.display_name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.bio.as_deref(), Some("Mascot"));
        assert_eq!(profile.public_repo_count, 8);
        assert_eq!(profile.follower_count, 9000);
        assert_eq!(profile.public_gist_count, Some(8));
        assert_eq!(profile.profile_url.as_deref(), Some("https://github.com/octocat"));
    }

    #[test]
    fn test_project_null_and_missing_fields() {
        let json = json!({"login": "ghost", "bio": null, "name": null});

        let profile = project_profile(&json).unwrap();
        assert_eq!(profile.username, "ghost");
        assert_eq!(profile.bio, None);
        assert_eq!(profile.display_name, None);
        assert_eq!(profile.public_repo_count, 0);
        assert_eq!(profile.follower_count, 0);
        assert_eq!(profile.public_gist_count, None);
        assert_eq!(profile.avatar_url, None);
    }

    #[test]
    fn test_project_without_login_fails() {
        let err = project_profile(&json!({"name": "Nobody"})).unwrap_err();
        assert!(matches!(err, WhoArtError::SerializationError(_)));
    }

    #[test]
    fn test_users_endpoint_encodes_username() {
        let url = users_endpoint("https://api.github.com", "John Doe").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/John%20Doe");

        let url = users_endpoint("http://localhost:8080/api/", "octocat").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/users/octocat");
    }

    #[tokio::test]
    async fn test_fetch_successful_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/users/octocat");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"login": "octocat", "public_repos": 3, "followers": 4}));
        });

        let fetcher = ProfileFetcher::new(Client::new(), server.base_url());
        let profile = fetcher.fetch("octocat").await.unwrap();

        api_mock.assert();
        assert_eq!(profile.username, "octocat");
        assert_eq!(profile.public_repo_count, 3);
        assert_eq!(profile.follower_count, 4);
    }

    #[tokio::test]
    async fn test_fetch_not_found_reports_status_text() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/users/nobody");
            then.status(404)
                .json_body(json!({"message": "Not Found"}));
        });

        let fetcher = ProfileFetcher::new(Client::new(), server.base_url());
        let err = fetcher.fetch("nobody").await.unwrap_err();

        api_mock.assert_hits(1);
        match err {
            WhoArtError::LookupFailed { status, reason } => {
                assert_eq!(status, 404);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_serialization_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/octocat");
            then.status(200).body("<html>not json</html>");
        });

        let fetcher = ProfileFetcher::new(Client::new(), server.base_url());
        let err = fetcher.fetch("octocat").await.unwrap_err();
        assert!(matches!(err, WhoArtError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_fetch_rejects_empty_username() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200);
        });

        let fetcher = ProfileFetcher::new(Client::new(), server.base_url());
        assert!(fetcher.fetch("").await.is_err());
        api_mock.assert_hits(0);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_api_error() {
        // port 1 沒有服務，連線層失敗
        let fetcher = ProfileFetcher::new(Client::new(), "http://127.0.0.1:1");
        let err = fetcher.fetch("x").await.unwrap_err();

        assert!(matches!(err, WhoArtError::ApiError(_)));
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }
}
