//! Blog index page
//!
//! Filter state (category pill, tag box, free-text search), 1-based
//! pagination, and the fetch sequencing that keeps slow responses from
//! overwriting newer ones. Filter widgets feed [`PageEvent`]s into
//! [`BlogPage::drive`]; category clicks reload immediately while typing
//! is debounced against a shared deadline.

use crate::config::BlogSettings;
use sleeve_client::{Direction, Nulls, Query, SleeveClient};
use sleeve_core::types::BLOG_POSTS_TABLE;
use sleeve_core::PostSummary;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, error};

/// Default number of posts per page
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Default debounce for typed filter input, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// One fetch the page has decided to make.
///
/// The sequence token identifies this fetch when the rows come back;
/// [`BlogPage::apply`] drops anything older than what it already shows.
#[derive(Debug, Clone)]
pub struct FetchPlan {
    pub seq: u64,
    pub query: Query,
}

/// Filter and pager input for [`BlogPage::drive`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Category pill clicked; empty string means all categories
    Category(String),
    /// Free-text search input changed
    Query(String),
    /// Tag box input changed
    Tag(String),
    NextPage,
    PrevPage,
}

/// Blog index state
#[derive(Debug)]
pub struct BlogPage {
    category: String,
    query: String,
    tag: String,
    /// 1-based
    page: u32,
    page_size: u32,
    debounce: Duration,
    posts: Vec<PostSummary>,
    /// Row count of the last applied fetch, for the has-more heuristic
    last_count: usize,
    seq: u64,
    last_applied: u64,
}

impl BlogPage {
    pub fn new(page_size: u32) -> Self {
        Self {
            category: String::new(),
            query: String::new(),
            tag: String::new(),
            page: 1,
            page_size,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            posts: Vec::new(),
            last_count: 0,
            seq: 0,
            last_applied: 0,
        }
    }

    pub fn from_settings(settings: &BlogSettings) -> Self {
        let mut page = Self::new(settings.page_size);
        page.debounce = Duration::from_millis(settings.debounce_ms);
        page
    }

    // ===== Filters =====

    /// Select a category; empty clears the filter. Resets to page 1.
    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.page = 1;
    }

    /// Update the free-text search. Resets to page 1.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_string();
        self.page = 1;
    }

    /// Update the tag filter. Resets to page 1.
    pub fn set_tag(&mut self, tag: &str) {
        self.tag = tag.trim().to_string();
        self.page = 1;
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    // ===== Fetch sequencing =====

    /// Plan a fetch for the current filters and page.
    ///
    /// Every plan gets a fresh sequence token, so planning twice and
    /// letting both requests race is safe.
    pub fn plan(&mut self) -> FetchPlan {
        self.seq += 1;
        FetchPlan {
            seq: self.seq,
            query: self.build_query(),
        }
    }

    /// Accept fetched rows unless a newer fetch already landed.
    ///
    /// Returns whether the rows were applied.
    pub fn apply(&mut self, seq: u64, rows: Vec<PostSummary>) -> bool {
        if seq <= self.last_applied {
            debug!(seq, newest = self.last_applied, "Dropped stale blog fetch");
            return false;
        }
        self.last_count = rows.len();
        self.posts = rows;
        self.last_applied = seq;
        true
    }

    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    // ===== Pager =====

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether another page may exist.
    ///
    /// The service never reports a total, so a full page is read as
    /// "probably more". The last page of an exactly-divisible result set
    /// offers one empty page beyond the end; that is the accepted cost.
    pub fn next_enabled(&self) -> bool {
        self.last_count == self.page_size as usize
    }

    pub fn prev_enabled(&self) -> bool {
        self.page > 1
    }

    /// Advance one page; `None` when the last fetch looked final.
    pub fn next(&mut self) -> Option<FetchPlan> {
        if !self.next_enabled() {
            return None;
        }
        self.page += 1;
        Some(self.plan())
    }

    /// Go back one page; `None` on page 1.
    pub fn prev(&mut self) -> Option<FetchPlan> {
        if !self.prev_enabled() {
            return None;
        }
        self.page -= 1;
        Some(self.plan())
    }

    fn build_query(&self) -> Query {
        Query::new()
            .select(PostSummary::SELECT)
            .eq("category", &self.category)
            .contains("tags", &self.tag)
            .ilike_any(&["title", "body_md"], &self.query)
            .order("publish_at", Direction::Desc, Some(Nulls::Last))
            .page(self.page, self.page_size)
    }

    // ===== Event loop =====

    /// Consume page events until the channel closes.
    ///
    /// Loads once up front, reloads immediately on category and pager
    /// events, and debounces typed input: each keystroke re-arms one
    /// shared deadline, and only its expiry fetches. Fetch failures are
    /// logged and leave the current list in place.
    pub async fn drive(&mut self, client: &SleeveClient, mut events: mpsc::Receiver<PageEvent>) {
        let plan = self.plan();
        self.fetch(client, plan).await;

        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else { break };
                    match event {
                        PageEvent::Category(category) => {
                            self.set_category(&category);
                            deadline = None;
                            let plan = self.plan();
                            self.fetch(client, plan).await;
                        }
                        PageEvent::Query(query) => {
                            self.set_query(&query);
                            deadline = Some(Instant::now() + self.debounce);
                        }
                        PageEvent::Tag(tag) => {
                            self.set_tag(&tag);
                            deadline = Some(Instant::now() + self.debounce);
                        }
                        PageEvent::NextPage => {
                            if let Some(plan) = self.next() {
                                deadline = None;
                                self.fetch(client, plan).await;
                            }
                        }
                        PageEvent::PrevPage => {
                            if let Some(plan) = self.prev() {
                                deadline = None;
                                self.fetch(client, plan).await;
                            }
                        }
                    }
                }
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    deadline = None;
                    let plan = self.plan();
                    self.fetch(client, plan).await;
                }
            }
        }
    }

    async fn fetch(&mut self, client: &SleeveClient, plan: FetchPlan) {
        match client.rows(BLOG_POSTS_TABLE, &plan.query).await {
            Ok(rows) => {
                self.apply(plan.seq, rows);
            }
            Err(e) => error!("Failed to load blog posts: {}", e),
        }
    }
}

impl Default for BlogPage {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summaries(count: usize) -> Vec<PostSummary> {
        (0..count)
            .map(|i| {
                serde_json::from_value(json!({
                    "id": i as i64 + 1,
                    "slug": format!("post-{i}"),
                    "title": format!("Post {i}"),
                    "author": "",
                    "category": "",
                    "tags": [],
                    "publish_at": null
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_fresh_page_query() {
        let mut page = BlogPage::new(9);
        assert_eq!(
            page.plan().query.to_query_string(),
            "select=id,slug,title,author,category,tags,publish_at\
             &order=publish_at.desc.nullslast&limit=9&offset=0"
        );
    }

    #[test]
    fn test_filters_appear_only_when_set() {
        let mut page = BlogPage::new(9);
        page.set_category("Mixes");
        page.set_tag("synth");
        page.set_query("tape");

        let rendered = page.plan().query.to_query_string();
        assert!(rendered.contains("category=eq.Mixes"));
        assert!(rendered.contains("tags=cs.{synth}"));
        assert!(rendered.contains("or=(title.ilike.*tape*,body_md.ilike.*tape*)"));

        page.set_category("");
        page.set_tag("");
        page.set_query("  ");
        let rendered = page.plan().query.to_query_string();
        assert!(!rendered.contains("category"));
        assert!(!rendered.contains("tags"));
        assert!(!rendered.contains("or="));
    }

    #[test]
    fn test_filter_change_resets_to_page_one() {
        let mut page = BlogPage::new(9);
        let plan = page.plan();
        page.apply(plan.seq, summaries(9));
        page.next();
        page.next();
        assert_eq!(page.page(), 3);

        page.set_category("Mixes");
        assert_eq!(page.page(), 1);
    }

    #[test]
    fn test_pager_heuristic() {
        let mut page = BlogPage::new(9);
        assert!(!page.next_enabled());
        assert!(!page.prev_enabled());

        let plan = page.plan();
        page.apply(plan.seq, summaries(9));
        assert!(page.next_enabled());

        let plan = page.next().unwrap();
        assert_eq!(page.page(), 2);
        assert!(page.prev_enabled());
        assert!(plan.query.to_query_string().contains("limit=9&offset=9"));

        page.apply(plan.seq, summaries(4));
        assert!(!page.next_enabled());
        assert!(page.next().is_none());

        page.prev().unwrap();
        assert_eq!(page.page(), 1);
        assert!(page.prev().is_none());
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let mut page = BlogPage::new(9);
        let older = page.plan();
        let newer = page.plan();

        assert!(page.apply(newer.seq, summaries(3)));
        assert!(!page.apply(older.seq, summaries(9)));

        assert_eq!(page.posts().len(), 3);
        assert!(!page.next_enabled());
    }

    #[test]
    fn test_reapplying_the_same_seq_is_a_no_op() {
        let mut page = BlogPage::new(9);
        let plan = page.plan();
        assert!(page.apply(plan.seq, summaries(2)));
        assert!(!page.apply(plan.seq, summaries(5)));
        assert_eq!(page.posts().len(), 2);
    }

    #[test]
    fn test_settings_carry_page_size_and_debounce() {
        let page = BlogPage::from_settings(&BlogSettings {
            page_size: 6,
            debounce_ms: 100,
        });
        assert_eq!(page.page_size, 6);
        assert_eq!(page.debounce, Duration::from_millis(100));
    }
}
