//! Query execution: prefix lookup, suggest relaxation, fuzzy expansion and
//! merged ranking across both fields.

use ahash::AHashMap;
use rapidfuzz::distance::jaro_winkler;
use serde::Serialize;

use super::index::{DocId, Field, FieldIndex, SearchIndex};
use super::tokenize::query_terms;
use crate::article::StoredFields;
use crate::config::SearchOptions;

/// Query words shorter than this are never fuzzily expanded.
const MIN_FUZZY_TERM_CHARS: usize = 3;

/// A ranked search hit enriched with the document's stored fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    pub slug: String,
    pub doc: StoredFields,
    /// Best field the document matched in
    pub field: Field,
    /// Whether the best hit only came from a fuzzy expansion
    pub fuzzy: bool,
}

/// Quality of a single hit. Derived ordering puts better hits first:
/// title before content, earlier slot first, exact before fuzzy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HitRank {
    field: Field,
    slot: u8,
    fuzzy: bool,
}

/// Everything one document collected over the query's terms.
struct DocHits {
    matched: Vec<bool>,
    best: HitRank,
}

impl DocHits {
    fn matched_terms(&self) -> usize {
        self.matched.iter().filter(|m| **m).count()
    }
}

struct Collector {
    term_count: usize,
    hits: AHashMap<DocId, DocHits>,
}

impl Collector {
    fn new(term_count: usize) -> Self {
        Self {
            term_count,
            hits: AHashMap::new(),
        }
    }

    fn record(&mut self, doc: DocId, term_idx: usize, rank: HitRank) {
        let hits = self.hits.entry(doc).or_insert_with(|| DocHits {
            matched: vec![false; self.term_count],
            best: rank,
        });
        hits.matched[term_idx] = true;
        hits.best = hits.best.min(rank);
    }

    fn record_field(
        &mut self,
        field: &FieldIndex,
        term: &str,
        term_idx: usize,
        fuzzy: bool,
    ) -> bool {
        let postings = field.lookup(term);
        for posting in postings {
            self.record(
                posting.doc,
                term_idx,
                HitRank {
                    field: field.field(),
                    slot: posting.slot,
                    fuzzy,
                },
            );
        }
        !postings.is_empty()
    }
}

impl SearchIndex {
    /// Searches both fields and returns one merged, ranked match per document.
    ///
    /// Each query word is matched as a prefix of indexed words. With
    /// `options.suggest` set, documents matching only some of the words are
    /// kept, and a word without any prefix hit is expanded to similar
    /// vocabulary words. Results are ordered by:
    /// 1. number of query words matched
    /// 2. best hit field (title before content)
    /// 3. best hit slot
    /// 4. exact before fuzzy
    /// 5. article order in the index
    ///
    /// `options.limit` counts displayable matches only; unknown-group matches
    /// ranked among them are kept but never take a displayable match's place.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchMatch> {
        let terms = query_terms(query);
        if terms.is_empty() {
            return vec![];
        }

        let mut collector = Collector::new(terms.len());

        for (term_idx, term) in terms.iter().enumerate() {
            let mut found = false;
            for field in self.fields() {
                found |= collector.record_field(field, term, term_idx, false);
            }

            if !found && options.suggest && term.chars().count() >= MIN_FUZZY_TERM_CHARS {
                for field in self.fields() {
                    let similar: Vec<&str> = field
                        .vocabulary()
                        .iter()
                        .map(String::as_str)
                        .filter(|word| similarity(term, word) >= options.fuzzy_threshold)
                        .collect();
                    tracing::debug!(
                        "Fuzzy expansion of '{}' in {:?}: {:?}",
                        term,
                        field.field(),
                        similar
                    );
                    for word in similar {
                        collector.record_field(field, word, term_idx, true);
                    }
                }
            }
        }

        let required = terms.len();
        let mut ranked: Vec<(usize, HitRank, DocId)> = collector
            .hits
            .into_iter()
            .map(|(doc, hits)| (hits.matched_terms(), hits.best, doc))
            .filter(|(matched, _, _)| options.suggest || *matched == required)
            .collect();

        ranked.sort_by(|(a_matched, a_rank, a_doc), (b_matched, b_rank, b_doc)| {
            b_matched
                .cmp(a_matched)
                .then(a_rank.cmp(b_rank))
                .then(a_doc.cmp(b_doc))
        });
        let mut shown = 0;
        ranked.retain(|(_, _, doc)| {
            if shown >= options.limit {
                return false;
            }
            if self.doc(*doc).stored.group.is_displayed() {
                shown += 1;
            }
            true
        });

        tracing::debug!(
            "Query '{}' ({} terms) matched {} documents",
            query,
            terms.len(),
            ranked.len()
        );

        ranked
            .into_iter()
            .map(|(_, rank, doc)| {
                let indexed = self.doc(doc);
                SearchMatch {
                    slug: indexed.slug.clone(),
                    doc: indexed.stored.clone(),
                    field: rank.field,
                    fuzzy: rank.fuzzy,
                }
            })
            .collect()
    }
}

/// Similarity of a query word to an indexed word, also comparing against the
/// word's head so a misspelled prefix can still reach a longer word.
fn similarity(term: &str, word: &str) -> f64 {
    let whole = jaro_winkler::similarity(term.chars(), word.chars());

    let term_chars = term.chars().count();
    let head = word
        .char_indices()
        .nth(term_chars)
        .map_or(word, |(i, _)| &word[..i]);
    let prefix = jaro_winkler::similarity(term.chars(), head.chars());

    whole.max(prefix)
}
