//! Forward-tokenized inverted index over article titles and bodies.

use ahash::{AHashMap, AHashSet, AHasher};
use serde::Serialize;
use std::{
    fmt,
    hash::{Hash, Hasher},
};

use super::tokenize::{forward_prefixes, tokenize, word_count};
use crate::article::{Article, Group, StoredFields, ensure_unique_slugs};
use crate::config::IndexOptions;
use crate::error::BuildError;

/// Term hash for fast lookup
type TermHash = u64;

/// Position of a document in [`SearchIndex::docs`]
pub(crate) type DocId = usize;

/// Indexed field of an article. Declaration order is ranking priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Content,
}

/// A document containing a term, and how early in the field the term occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Posting {
    pub(crate) doc: DocId,
    /// Rank slot in `0..resolution`; lower is better
    pub(crate) slot: u8,
}

/// Postings and vocabulary for a single field.
pub(crate) struct FieldIndex {
    field: Field,
    /// Map from prefix hash to postings, sorted by slot then document
    postings: AHashMap<TermHash, Vec<Posting>>,
    /// Distinct whole words seen in this field, sorted
    vocabulary: Vec<String>,
}

impl FieldIndex {
    pub(crate) const fn field(&self) -> Field {
        self.field
    }

    /// Postings for every document with a word starting with `term`.
    pub(crate) fn lookup(&self, term: &str) -> &[Posting] {
        self.postings
            .get(&hash_term(term))
            .map_or(&[], Vec::as_slice)
    }

    pub(crate) fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    fn term_count(&self) -> usize {
        self.postings.len()
    }
}

/// Accumulates best slots per (prefix, document) before finalization.
struct FieldBuilder {
    field: Field,
    resolution: u8,
    slots: AHashMap<(TermHash, DocId), u8>,
    vocabulary: AHashSet<String>,
}

impl FieldBuilder {
    fn new(field: Field, resolution: u8) -> Self {
        Self {
            field,
            resolution: resolution.max(1),
            slots: AHashMap::new(),
            vocabulary: AHashSet::new(),
        }
    }

    /// Indexes every prefix of every word in `text` for `doc`.
    fn add_text(&mut self, text: &str, doc: DocId) {
        let tokens = tokenize(text);
        let words = word_count(&tokens);

        for token in &tokens {
            let slot = slot_for(token.position, words, self.resolution);
            for prefix in forward_prefixes(&token.term) {
                let best = self.slots.entry((hash_term(prefix), doc)).or_insert(slot);
                *best = (*best).min(slot);
            }
            if !self.vocabulary.contains(&token.term) {
                self.vocabulary.insert(token.term.clone());
            }
        }
    }

    fn finalize(self) -> FieldIndex {
        let mut postings: AHashMap<TermHash, Vec<Posting>> = AHashMap::new();
        for ((term_hash, doc), slot) in self.slots {
            postings
                .entry(term_hash)
                .or_default()
                .push(Posting { doc, slot });
        }
        for list in postings.values_mut() {
            list.sort_by_key(|p| (p.slot, p.doc));
        }

        let mut vocabulary: Vec<String> = self.vocabulary.into_iter().collect();
        vocabulary.sort_unstable();

        FieldIndex {
            field: self.field,
            postings,
            vocabulary,
        }
    }
}

/// Maps a word position onto one of `resolution` rank slots.
fn slot_for(position: u32, words: u32, resolution: u8) -> u8 {
    if words <= 1 || resolution <= 1 {
        return 0;
    }
    let slot = u64::from(position) * u64::from(resolution) / u64::from(words);
    u8::try_from(slot).unwrap_or(u8::MAX).min(resolution - 1)
}

/// Hashes an encoded term for fast lookup.
pub(crate) fn hash_term(term: &str) -> u64 {
    let mut hasher = AHasher::default();
    term.hash(&mut hasher);
    hasher.finish()
}

pub(crate) struct IndexedDoc {
    pub(crate) slug: String,
    pub(crate) stored: StoredFields,
}

/// Read-only search index built once from the full article list.
///
/// Construction and querying are separate: build with [`SearchIndex::build`],
/// share behind an `Arc`, query with [`SearchIndex::search`].
pub struct SearchIndex {
    docs: Vec<IndexedDoc>,
    /// Title first, then content
    fields: [FieldIndex; 2],
    options: IndexOptions,
}

impl fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("documents", &self.docs.len())
            .field("title_terms", &self.fields[0].term_count())
            .field("content_terms", &self.fields[1].term_count())
            .field("options", &self.options)
            .finish()
    }
}

impl SearchIndex {
    /// Builds an index over the title and content of every article.
    ///
    /// Fails if two articles share a slug. Articles with an unrecognized group
    /// are indexed but will never be displayed; a warning is logged for each.
    pub fn build(articles: &[Article], options: &IndexOptions) -> Result<Self, BuildError> {
        let start = std::time::Instant::now();
        ensure_unique_slugs(articles)?;

        let mut title = FieldBuilder::new(Field::Title, options.title_resolution);
        let mut content = FieldBuilder::new(Field::Content, options.content_resolution);
        let mut docs = Vec::with_capacity(articles.len());

        for (doc, article) in articles.iter().enumerate() {
            if article.group == Group::Unknown {
                tracing::warn!(
                    "Article '{}' has an unrecognized group and will not be displayed",
                    article.slug
                );
            }

            title.add_text(&article.title, doc);
            content.add_text(&article.content, doc);
            docs.push(IndexedDoc {
                slug: article.slug.clone(),
                stored: StoredFields::from(article),
            });
        }

        let index = Self {
            docs,
            fields: [title.finalize(), content.finalize()],
            options: *options,
        };

        tracing::info!(
            "Built search index: {} documents, {} title terms, {} content terms in {:?}",
            index.document_count(),
            index.fields[0].term_count(),
            index.fields[1].term_count(),
            start.elapsed()
        );

        Ok(index)
    }

    /// Get the number of documents in the index
    pub fn document_count(&self) -> usize {
        self.docs.len()
    }

    /// Get the number of distinct indexed prefixes across both fields
    pub fn term_count(&self) -> usize {
        self.fields.iter().map(FieldIndex::term_count).sum()
    }

    /// Field resolutions the index was built with.
    pub const fn options(&self) -> IndexOptions {
        self.options
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.docs.iter().any(|d| d.slug == slug)
    }

    pub(crate) fn fields(&self) -> &[FieldIndex] {
        &self.fields
    }

    pub(crate) fn doc(&self, doc: DocId) -> &IndexedDoc {
        &self.docs[doc]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    fn corpus() -> Vec<Article> {
        vec![
            Article::new("/a", "Getting Started", Group::Docs, "install guide"),
            Article::new("/b", "Example One", Group::Example, "installing and running"),
        ]
    }

    #[rstest]
    #[case(0, 2, 9, 0)]
    #[case(1, 2, 9, 4)]
    #[case(0, 1, 9, 0)]
    #[case(9, 10, 3, 2)]
    #[case(5, 10, 3, 1)]
    #[case(3, 10, 0, 0)]
    fn test_slot_for(
        #[case] position: u32,
        #[case] words: u32,
        #[case] resolution: u8,
        #[case] expected: u8,
    ) {
        check!(slot_for(position, words, resolution) == expected);
    }

    #[test]
    fn test_prefix_lookup() {
        let index = SearchIndex::build(&corpus(), &IndexOptions::default()).unwrap();
        let content = &index.fields()[1];

        let docs: Vec<DocId> = content.lookup("inst").iter().map(|p| p.doc).collect();
        check!(docs == vec![0, 1]);

        // Collapsed spelling: "installing" is stored as "instaling"
        let docs: Vec<DocId> = content.lookup("instaling").iter().map(|p| p.doc).collect();
        check!(docs == vec![1]);

        check!(content.lookup("xyz").is_empty());
    }

    #[test]
    fn test_title_slots_follow_word_position() {
        let index = SearchIndex::build(&corpus(), &IndexOptions::default()).unwrap();
        let title = &index.fields()[0];

        check!(title.lookup("geting") == [Posting { doc: 0, slot: 0 }]);
        check!(title.lookup("started") == [Posting { doc: 0, slot: 4 }]);
    }

    #[test]
    fn test_vocabulary_holds_whole_words() {
        let index = SearchIndex::build(&corpus(), &IndexOptions::default()).unwrap();
        let content = &index.fields()[1];

        check!(content.vocabulary().contains(&"instal".to_string()));
        check!(!content.vocabulary().contains(&"inst".to_string()));
    }

    #[test]
    fn test_duplicate_slug_fails_build() {
        let mut articles = corpus();
        articles.push(Article::new("/a", "Again", Group::Docs, ""));

        let result = SearchIndex::build(&articles, &IndexOptions::default());
        let_assert!(Err(BuildError::DuplicateSlug { slug, .. }) = result);
        check!(slug == "/a");
    }

    #[test]
    fn test_unknown_group_still_indexed() {
        let articles = vec![Article::new("/blog", "Release notes", Group::Unknown, "")];
        let index = SearchIndex::build(&articles, &IndexOptions::default()).unwrap();

        check!(index.contains("/blog"));
        check!(index.document_count() == 1);
    }

    #[test]
    fn test_empty_corpus() {
        let index = SearchIndex::build(&[], &IndexOptions::default()).unwrap();
        check!(index.document_count() == 0);
        check!(index.term_count() == 0);
    }
}
