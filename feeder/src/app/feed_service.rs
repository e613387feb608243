//! Feed service
//!
//! Drives a run: for each tracked repository, query its tags, extract
//! releases, build the feed and hand it to the sink. A failure on one
//! repository is recorded and the run moves on to the next.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{build_feed, extract_releases};
use crate::domain::entities::RepositorySpec;
use crate::domain::ports::{FeedSink, GithubClient, TAG_REF_PREFIX};
use crate::error::AppError;

/// Result of processing one repository
#[derive(Debug)]
pub enum RepoOutcome {
    Written { items: usize, location: String },
    Failed(AppError),
}

/// Per-repository outcomes of a run, in configuration order
#[derive(Debug)]
pub struct RunReport {
    pub created_at: DateTime<Utc>,
    pub outcomes: Vec<(String, RepoOutcome)>,
}

impl RunReport {
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, RepoOutcome::Failed(_)))
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Service that turns tracked repositories into written feeds
pub struct FeedService<GC, FS>
where
    GC: GithubClient,
    FS: FeedSink,
{
    github: Arc<GC>,
    sink: Arc<FS>,
    max_items: u32,
}

impl<GC, FS> FeedService<GC, FS>
where
    GC: GithubClient,
    FS: FeedSink,
{
    pub fn new(github: Arc<GC>, sink: Arc<FS>, max_items: u32) -> Self {
        Self {
            github,
            sink,
            max_items,
        }
    }

    /// Process every repository with a single creation time for the run
    pub async fn run(&self, repos: &[RepositorySpec]) -> RunReport {
        self.run_at(repos, Utc::now()).await
    }

    /// Process every repository, stamping all feeds with `created_at`
    pub async fn run_at(&self, repos: &[RepositorySpec], created_at: DateTime<Utc>) -> RunReport {
        let mut outcomes = Vec::with_capacity(repos.len());

        for repo in repos {
            let outcome = match self.process(repo, created_at).await {
                Ok((items, location)) => {
                    tracing::info!(
                        repo_id = %repo.id,
                        filename = %location,
                        items,
                        "Feed written"
                    );
                    RepoOutcome::Written { items, location }
                }
                Err(e) => {
                    tracing::error!(repo_id = %repo.id, error = %e, "Failed to produce feed");
                    RepoOutcome::Failed(e)
                }
            };
            outcomes.push((repo.id.clone(), outcome));
        }

        RunReport {
            created_at,
            outcomes,
        }
    }

    async fn process(
        &self,
        repo: &RepositorySpec,
        created_at: DateTime<Utc>,
    ) -> Result<(usize, String), AppError> {
        tracing::info!(
            repo_id = %repo.id,
            repository = %repo.full_name(),
            "Creating feed from repo..."
        );

        let raw = self
            .github
            .list_tag_refs(&repo.owner, &repo.name, TAG_REF_PREFIX, self.max_items)
            .await?;
        tracing::debug!(repo_id = %repo.id, entries = raw.entries.len(), "Retrieved tag refs");

        let records = extract_releases(&raw)?;
        let feed = build_feed(repo, &raw.repository_url, &records, created_at)?;

        let location = self.sink.write_feed(&repo.id, &feed).await?;

        Ok((feed.items.len(), location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{RawRefEntry, RawReference};
    use crate::error::{DomainError, GithubError};
    use crate::test_utils::{
        date, test_raw_reference, test_repository, InMemoryFeedSink, MockGithubClient,
    };

    fn create_service(
        github: MockGithubClient,
        sink: Arc<InMemoryFeedSink>,
    ) -> FeedService<MockGithubClient, InMemoryFeedSink> {
        FeedService::new(Arc::new(github), sink, 30)
    }

    #[tokio::test]
    async fn run_writes_one_feed_per_repository() {
        let sink = Arc::new(InMemoryFeedSink::new());
        let github = MockGithubClient::new().with_refs("acme", "widget", test_raw_reference());
        let service = create_service(github, sink.clone());

        let report = service
            .run_at(&[test_repository()], date("2024-02-01T00:00:00Z"))
            .await;

        assert!(report.is_success());
        let feed = sink.feed("widget").unwrap();
        assert_eq!(feed.items.len(), 2);
        assert_eq!(feed.created_at, date("2024-02-01T00:00:00Z"));
        assert!(matches!(
            report.outcomes[0].1,
            RepoOutcome::Written { items: 2, .. }
        ));
    }

    #[tokio::test]
    async fn run_requests_tag_refs_with_configured_count() {
        let github = Arc::new(MockGithubClient::new().with_refs(
            "acme",
            "widget",
            test_raw_reference(),
        ));
        let service = FeedService::new(github.clone(), Arc::new(InMemoryFeedSink::new()), 12);

        service.run(&[test_repository()]).await;

        assert_eq!(
            github.requests(),
            vec![("acme/widget".to_string(), "refs/tags/".to_string(), 12)]
        );
    }

    #[tokio::test]
    async fn run_shares_created_at_across_feeds() {
        let sink = Arc::new(InMemoryFeedSink::new());
        let other = RepositorySpec::new("gadget", "Gadget", "acme", "gadget");
        let github = MockGithubClient::new()
            .with_refs("acme", "widget", test_raw_reference())
            .with_refs(
                "acme",
                "gadget",
                RawReference {
                    repository_url: "https://github.com/acme/gadget".to_string(),
                    entries: vec![],
                },
            );
        let service = create_service(github, sink.clone());

        let report = service.run(&[test_repository(), other]).await;

        let widget = sink.feed("widget").unwrap();
        let gadget = sink.feed("gadget").unwrap();
        assert_eq!(widget.created_at, report.created_at);
        assert_eq!(gadget.created_at, report.created_at);
        assert!(gadget.items.is_empty());
        assert_eq!(gadget.title, "Gadget releases");
    }

    #[tokio::test]
    async fn failing_repository_does_not_stop_the_run() {
        let sink = Arc::new(InMemoryFeedSink::new());
        let broken = RepositorySpec::new("broken", "Broken", "acme", "missing");
        let github = MockGithubClient::new().with_refs("acme", "widget", test_raw_reference());
        let service = create_service(github, sink.clone());

        let report = service.run(&[broken, test_repository()]).await;

        assert_eq!(report.failed_count(), 1);
        assert!(matches!(
            report.outcomes[0].1,
            RepoOutcome::Failed(AppError::Github(GithubError::RepoNotFound { .. }))
        ));
        assert!(sink.feed("broken").is_none());
        assert!(sink.feed("widget").is_some());
    }

    #[tokio::test]
    async fn malformed_entry_fails_only_that_repository() {
        let sink = Arc::new(InMemoryFeedSink::new());
        let github = MockGithubClient::new().with_refs(
            "acme",
            "widget",
            RawReference {
                repository_url: "https://github.com/acme/widget".to_string(),
                entries: vec![RawRefEntry {
                    name: Some("v1.0.0".to_string()),
                    target: None,
                }],
            },
        );
        let service = create_service(github, sink.clone());

        let report = service.run(&[test_repository()]).await;

        assert!(!report.is_success());
        assert!(matches!(
            report.outcomes[0].1,
            RepoOutcome::Failed(AppError::Domain(DomainError::Extraction { index: 0, .. }))
        ));
        assert!(sink.feed("widget").is_none());
    }

    #[tokio::test]
    async fn sink_failure_is_reported() {
        let sink = Arc::new(InMemoryFeedSink::failing());
        let github = MockGithubClient::new().with_refs("acme", "widget", test_raw_reference());
        let service = create_service(github, sink);

        let report = service.run(&[test_repository()]).await;

        assert!(matches!(
            report.outcomes[0].1,
            RepoOutcome::Failed(AppError::Sink(_))
        ));
    }
}
