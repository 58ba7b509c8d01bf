use regex::Regex;
use reqwest::StatusCode;

use super::types::{PrRef, PullRequest, RateLimit};
use crate::error::BackportError;

const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = "backporter";

/// GitHub API client wrapper
pub struct GitHubClient {
    http: reqwest::Client,
    token: String,
    api_base: String,
}

impl GitHubClient {
    /// Create a client talking to the public GitHub API
    pub fn new(token: String) -> Self {
        Self::with_base(token, API_BASE.to_string())
    }

    /// Create a client against a different API root (tests)
    pub fn with_base(token: String, api_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
            api_base,
        }
    }

    /// Parse a pull request web URL into its components.
    ///
    /// The match is whole-pattern: anything before or after the
    /// `https://<host>/<owner>/<repo>/pull/<digits>` shape is rejected.
    pub fn parse_pr_url(url: &str) -> Result<PrRef, BackportError> {
        let re = Regex::new(r"^https://[^/]+/([^/]+)/([^/]+)/pull/(\d+)$").unwrap();
        let caps = re
            .captures(url)
            .ok_or_else(|| BackportError::InvalidUrl(url.to_string()))?;

        let number = caps[3]
            .parse()
            .map_err(|_| BackportError::InvalidUrl(url.to_string()))?;

        Ok(PrRef {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
            number,
        })
    }

    /// Fetch PR metadata along with the quota left on the current window.
    ///
    /// The rate-limit headers are read before the status check so a 403/429
    /// with nothing remaining surfaces as `RateLimited` rather than a
    /// generic API error.
    pub async fn get_pr(
        &self,
        pr_ref: &PrRef,
    ) -> Result<(PullRequest, RateLimit), BackportError> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_base, pr_ref.owner, pr_ref.repo, pr_ref.number
        );

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await?;

        let rate = RateLimit::from_headers(response.headers());
        let status = response.status();

        if status.is_success() {
            let pr: PullRequest = response.json().await?;
            return Ok((pr, rate));
        }

        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => BackportError::NotFound {
                owner: pr_ref.owner.clone(),
                repo: pr_ref.repo.clone(),
                number: pr_ref.number,
            },
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if rate.exhausted() => {
                BackportError::RateLimited { rate }
            }
            _ => BackportError::Api {
                status,
                message: error_message(&body),
            },
        })
    }
}

/// GitHub error bodies are JSON with a `message` field; fall back to the
/// raw body when they are not.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
