//! GitHub GraphQL API client implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::ports::{
    AnnotatedTag, CommitTarget, GithubClient, RawRefEntry, RawReference, RefTarget,
};
use crate::error::GithubError;

const TAG_REFS_QUERY: &str = r#"
query($repositoryOwner: String!, $repositoryName: String!, $refPrefix: String!, $count: Int!) {
  rateLimit {
    cost
    remaining
  }
  repository(owner: $repositoryOwner, name: $repositoryName) {
    url
    refs(refPrefix: $refPrefix, first: $count, orderBy: {field: TAG_COMMIT_DATE, direction: DESC}) {
      edges {
        node {
          name
          target {
            __typename
            ... on Tag {
              name
              tagger {
                date
              }
              target {
                ... on Commit {
                  committedDate
                }
              }
            }
            ... on Commit {
              committedDate
            }
          }
        }
      }
    }
  }
}
"#;

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Implementation of the GitHub GraphQL client
pub struct GithubClientImpl {
    http: Client,
    endpoint: String,
}

impl GithubClientImpl {
    pub fn new(endpoint: String, token: &str) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| GithubError::Unauthorized)?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("release-feeder/", env!("CARGO_PKG_VERSION"))),
        );

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self { http, endpoint })
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GithubError> {
        let status = response.status();

        if status.is_success() {
            let body: GraphQlResponse<T> = response
                .json()
                .await
                .map_err(|e| GithubError::Deserialization(e.to_string()))?;
            body.into_data()
        } else if status.as_u16() == 401 {
            Err(GithubError::Unauthorized)
        } else if status.as_u16() == 403 || status.as_u16() == 429 {
            Err(GithubError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GithubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Request types for the GraphQL endpoint
#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TagRefsVariables<'a> {
    repository_owner: &'a str,
    repository_name: &'a str,
    ref_prefix: &'a str,
    count: u32,
}

/// Response types from the GraphQL endpoint
#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

impl<T> GraphQlResponse<T> {
    fn into_data(self) -> Result<T, GithubError> {
        if !self.errors.is_empty() {
            let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(GithubError::GraphQl(messages.join("; ")));
        }
        self.data
            .ok_or_else(|| GithubError::Deserialization("response carried no data".to_string()))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TagRefsData {
    rate_limit: Option<RateLimitResponse>,
    repository: Option<RepositoryResponse>,
}

#[derive(Deserialize)]
struct RateLimitResponse {
    cost: i64,
    remaining: i64,
}

#[derive(Deserialize)]
struct RepositoryResponse {
    url: String,
    refs: Option<RefConnectionResponse>,
}

/// Either connection shape: `edges { node }` or `nodes`
#[derive(Deserialize, Default)]
struct RefConnectionResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    edges: Vec<RefEdgeResponse>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    nodes: Vec<Option<RefNodeResponse>>,
}

#[derive(Deserialize)]
struct RefEdgeResponse {
    node: Option<RefNodeResponse>,
}

#[derive(Deserialize)]
struct RefNodeResponse {
    name: Option<String>,
    target: Option<TargetResponse>,
}

#[derive(Deserialize)]
#[serde(tag = "__typename")]
enum TargetResponse {
    Tag(TagResponse),
    Commit(CommitResponse),
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct TagResponse {
    name: Option<String>,
    tagger: Option<TaggerResponse>,
    target: Option<PeeledCommitResponse>,
}

#[derive(Deserialize)]
struct TaggerResponse {
    date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PeeledCommitResponse {
    committed_date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommitResponse {
    committed_date: DateTime<Utc>,
}

impl From<Option<RefNodeResponse>> for RawRefEntry {
    fn from(node: Option<RefNodeResponse>) -> Self {
        let Some(node) = node else {
            return RawRefEntry {
                name: None,
                target: None,
            };
        };

        let target = match node.target {
            Some(TargetResponse::Tag(tag)) => Some(RefTarget::AnnotatedTag(AnnotatedTag {
                name: tag.name,
                tagger_date: tag.tagger.and_then(|t| t.date),
                commit_date: tag.target.and_then(|c| c.committed_date),
            })),
            Some(TargetResponse::Commit(commit)) => Some(RefTarget::Commit(CommitTarget {
                committed_date: commit.committed_date,
            })),
            Some(TargetResponse::Other) | None => None,
        };

        RawRefEntry {
            name: node.name,
            target,
        }
    }
}

impl RefConnectionResponse {
    fn into_entries(self) -> Vec<RawRefEntry> {
        if self.edges.is_empty() {
            self.nodes.into_iter().map(RawRefEntry::from).collect()
        } else {
            self.edges
                .into_iter()
                .map(|edge| RawRefEntry::from(edge.node))
                .collect()
        }
    }
}

fn into_raw_reference(
    data: TagRefsData,
    owner: &str,
    name: &str,
) -> Result<RawReference, GithubError> {
    if let Some(rate) = &data.rate_limit {
        tracing::debug!(
            cost = rate.cost,
            remaining = rate.remaining,
            "GraphQL rate limit"
        );
    }

    let repository = data.repository.ok_or_else(|| GithubError::RepoNotFound {
        owner: owner.to_string(),
        repo: name.to_string(),
    })?;

    Ok(RawReference {
        repository_url: repository.url,
        entries: repository.refs.unwrap_or_default().into_entries(),
    })
}

#[async_trait]
impl GithubClient for GithubClientImpl {
    async fn list_tag_refs(
        &self,
        owner: &str,
        name: &str,
        ref_prefix: &str,
        count: u32,
    ) -> Result<RawReference, GithubError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest {
                query: TAG_REFS_QUERY,
                variables: TagRefsVariables {
                    repository_owner: owner,
                    repository_name: name,
                    ref_prefix,
                    count,
                },
            })
            .send()
            .await?;

        let data: TagRefsData = self.handle_response(resp).await?;
        let raw = into_raw_reference(data, owner, name)?;
        tracing::debug!(
            repository = %raw.repository_url,
            entries = raw.entries.len(),
            "Retrieved tag references"
        );

        Ok(raw)
    }
}
