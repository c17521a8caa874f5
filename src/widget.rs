//! The search widget: index lifecycle plus the visible query state.
//!
//! A widget starts [`IndexState::NotReady`]. [`SearchWidget::initialize`]
//! loads the artifact and builds the index; on success the widget is
//! [`IndexState::Ready`] and every query runs synchronously against the shared
//! index. Until then, and after a failed load, queries return nothing.

use std::sync::Arc;

use crate::config::{Config, IndexOptions, SearchOptions};
use crate::error::LoadError;
use crate::search::{GroupedResults, SearchIndex, SearchMatch, group_results};
use crate::source::IndexSource;

/// Whether the widget has an index to query.
#[derive(Debug, Clone, Default)]
pub enum IndexState {
    #[default]
    NotReady,
    Ready(Arc<SearchIndex>),
}

#[derive(Debug, Default)]
pub struct SearchWidget {
    state: IndexState,
    index_options: IndexOptions,
    search_options: SearchOptions,
    /// What the user typed last
    term: String,
    /// Results for `term`, replaced on every keystroke
    results: GroupedResults,
}

impl SearchWidget {
    pub fn new(index_options: IndexOptions, search_options: SearchOptions) -> Self {
        Self {
            index_options,
            search_options,
            ..Self::default()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.index, config.search)
    }

    /// Creates a widget that is already ready, sharing an existing index.
    ///
    /// A later `initialize` rebuilds with the resolutions `index` was built with.
    pub fn with_index(index: Arc<SearchIndex>, search_options: SearchOptions) -> Self {
        Self {
            index_options: index.options(),
            state: IndexState::Ready(index),
            search_options,
            ..Self::default()
        }
    }

    /// Loads the article list from `source` and builds a fresh index.
    ///
    /// Any previous index is discarded first, so a failed reload leaves the
    /// widget `NotReady`. There is no retry; the error is logged and returned.
    pub async fn initialize(&mut self, source: &IndexSource) -> Result<(), LoadError> {
        self.state = IndexState::NotReady;

        let start = std::time::Instant::now();
        let result = match load_index(source, &self.index_options).await {
            Ok(index) => {
                tracing::info!(
                    "Search index ready from {} ({} documents) in {:?}",
                    source,
                    index.document_count(),
                    start.elapsed()
                );
                self.state = IndexState::Ready(Arc::new(index));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    "Search index unavailable, queries will return no results: {}",
                    e
                );
                Err(e)
            }
        };

        self.refresh();
        result
    }

    pub const fn state(&self) -> &IndexState {
        &self.state
    }

    pub const fn is_ready(&self) -> bool {
        matches!(self.state, IndexState::Ready(_))
    }

    pub fn index(&self) -> Option<&Arc<SearchIndex>> {
        match &self.state {
            IndexState::Ready(index) => Some(index),
            IndexState::NotReady => None,
        }
    }

    /// Runs `term` against the index without touching the visible state.
    ///
    /// Blank terms and a widget that is not ready both yield no matches.
    pub fn query(&self, term: &str) -> Vec<SearchMatch> {
        if term.trim().is_empty() {
            return vec![];
        }
        match &self.state {
            IndexState::Ready(index) => index.search(term, &self.search_options),
            IndexState::NotReady => vec![],
        }
    }

    /// Keystroke handler: records `term` and replaces the visible results.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.refresh();
    }

    fn refresh(&mut self) {
        let matches = self.query(&self.term);
        self.results = group_results(matches);
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub const fn results(&self) -> &GroupedResults {
        &self.results
    }

    /// The dropdown shows only for a non-blank term with at least one result.
    pub fn is_panel_visible(&self) -> bool {
        !self.term.trim().is_empty() && !self.results.is_empty()
    }

    /// Picks the `position`-th visible result (display order, zero-based),
    /// returning it and clearing the widget as navigation would.
    pub fn select(&mut self, position: usize) -> Option<SearchMatch> {
        let selected = self.results.flatten().nth(position).cloned();
        if selected.is_some() {
            self.clear();
        }
        selected
    }

    /// Resets the term and every result group to empty.
    pub fn clear(&mut self) {
        self.term.clear();
        self.results = GroupedResults::default();
    }
}

async fn load_index(
    source: &IndexSource,
    options: &IndexOptions,
) -> Result<SearchIndex, LoadError> {
    let articles = source.load().await?;
    Ok(SearchIndex::build(&articles, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{Article, Group};
    use assert2::check;
    use rstest::rstest;

    fn ready_widget() -> SearchWidget {
        let articles = vec![
            Article::new("/a", "Getting Started", Group::Docs, "install guide"),
            Article::new("/b", "Example One", Group::Example, "installing and running"),
        ];
        let index = SearchIndex::build(&articles, &IndexOptions::default()).unwrap();
        SearchWidget::with_index(Arc::new(index), SearchOptions::default())
    }

    #[test]
    fn test_not_ready_returns_empty() {
        let mut widget = SearchWidget::default();
        check!(!widget.is_ready());
        check!(widget.query("inst").is_empty());

        widget.set_term("inst");
        check!(widget.term() == "inst");
        check!(widget.results().is_empty());
        check!(!widget.is_panel_visible());
    }

    #[test]
    fn test_set_term_groups_results() {
        let mut widget = ready_widget();
        widget.set_term("inst");

        check!(widget.is_panel_visible());
        check!(widget.results().get(Group::Docs)[0].slug == "/a");
        check!(widget.results().get(Group::Example)[0].slug == "/b");
        check!(widget.results().principle.is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case("\t\n")]
    fn test_blank_term_hides_panel(#[case] term: &str) {
        let mut widget = ready_widget();
        widget.set_term("inst");
        widget.set_term(term);

        check!(widget.results().is_empty());
        check!(!widget.is_panel_visible());
    }

    #[test]
    fn test_last_term_wins() {
        let mut widget = ready_widget();
        widget.set_term("inst");
        widget.set_term("Example");

        check!(widget.results().len() == 1);
        check!(widget.results().example[0].slug == "/b");
    }

    #[test]
    fn test_no_match_hides_panel() {
        let mut widget = ready_widget();
        widget.set_term("zzzzzz");
        check!(!widget.is_panel_visible());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut widget = ready_widget();
        widget.set_term("inst");
        widget.clear();

        check!(widget.term().is_empty());
        check!(widget.results() == &GroupedResults::default());
        check!(!widget.is_panel_visible());
        // The index itself survives
        check!(widget.is_ready());
    }

    #[test]
    fn test_with_index_keeps_build_options() {
        let options = IndexOptions {
            title_resolution: 5,
            content_resolution: 1,
        };
        let articles = vec![Article::new("/a", "Getting Started", Group::Docs, "")];
        let index = SearchIndex::build(&articles, &options).unwrap();

        let widget = SearchWidget::with_index(Arc::new(index), SearchOptions::default());
        check!(widget.index_options == options);
    }

    #[test]
    fn test_unknown_group_does_not_hide_displayable_match() {
        let articles = vec![
            Article::new("/x", "Hooks blog", Group::Unknown, ""),
            Article::new("/d", "Hooks docs", Group::Docs, ""),
        ];
        let index = SearchIndex::build(&articles, &IndexOptions::default()).unwrap();
        let options = SearchOptions {
            limit: 1,
            ..SearchOptions::default()
        };
        let mut widget = SearchWidget::with_index(Arc::new(index), options);

        widget.set_term("hooks");
        check!(widget.is_panel_visible());
        check!(widget.results().docs[0].slug == "/d");
        check!(widget.results().dropped == 1);
    }

    #[test]
    fn test_select_clears_and_returns_match() {
        let mut widget = ready_widget();
        widget.set_term("inst");

        let selected = widget.select(1).unwrap();
        check!(selected.slug == "/b");
        check!(widget.term().is_empty());

        check!(widget.select(0).is_none());
    }
}
