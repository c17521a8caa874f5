//! Partitioning of ranked matches into the dropdown's display groups.

use serde::Serialize;

use super::query::SearchMatch;
use crate::article::Group;

/// Matches split by display group, each group in rank order.
///
/// Matches whose article has an unrecognized group are not placed in any
/// bucket; they are only counted in `dropped`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedResults {
    pub docs: Vec<SearchMatch>,
    pub example: Vec<SearchMatch>,
    pub principle: Vec<SearchMatch>,
    #[serde(skip)]
    pub dropped: usize,
}

impl GroupedResults {
    /// Matches shown under `group`; always empty for [`Group::Unknown`].
    pub fn get(&self, group: Group) -> &[SearchMatch] {
        match group {
            Group::Docs => &self.docs,
            Group::Example => &self.example,
            Group::Principle => &self.principle,
            Group::Unknown => &[],
        }
    }

    /// Non-empty groups in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Group, &[SearchMatch])> {
        Group::DISPLAYED
            .into_iter()
            .map(|group| (group, self.get(group)))
            .filter(|(_, matches)| !matches.is_empty())
    }

    /// All displayed matches, group by group, in display order.
    pub fn flatten(&self) -> impl Iterator<Item = &SearchMatch> {
        self.iter().flat_map(|(_, matches)| matches.iter())
    }

    /// Number of displayed matches.
    pub fn len(&self) -> usize {
        self.docs.len() + self.example.len() + self.principle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions matches into the three display groups, keeping rank order
/// within each group.
pub fn group_results(matches: impl IntoIterator<Item = SearchMatch>) -> GroupedResults {
    let mut grouped = GroupedResults::default();

    for m in matches {
        match m.doc.group {
            Group::Docs => grouped.docs.push(m),
            Group::Example => grouped.example.push(m),
            Group::Principle => grouped.principle.push(m),
            Group::Unknown => grouped.dropped += 1,
        }
    }

    if grouped.dropped > 0 {
        tracing::debug!("Dropped {} matches with an unrecognized group", grouped.dropped);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::StoredFields;
    use crate::search::Field;
    use assert2::check;

    fn hit(slug: &str, group: Group) -> SearchMatch {
        SearchMatch {
            slug: slug.to_string(),
            doc: StoredFields {
                title: slug.trim_start_matches('/').to_uppercase(),
                group,
            },
            field: Field::Title,
            fuzzy: false,
        }
    }

    #[test]
    fn test_partition_preserves_rank_order() {
        let grouped = group_results(vec![
            hit("/p1", Group::Principle),
            hit("/d1", Group::Docs),
            hit("/p2", Group::Principle),
            hit("/e1", Group::Example),
            hit("/d2", Group::Docs),
        ]);

        let slugs = |ms: &[SearchMatch]| ms.iter().map(|m| m.slug.clone()).collect::<Vec<_>>();
        check!(slugs(&grouped.docs) == vec!["/d1", "/d2"]);
        check!(slugs(&grouped.example) == vec!["/e1"]);
        check!(slugs(&grouped.principle) == vec!["/p1", "/p2"]);
        check!(grouped.len() == 5);
        check!(grouped.dropped == 0);
    }

    #[test]
    fn test_unknown_group_dropped_and_counted() {
        let grouped = group_results(vec![hit("/d", Group::Docs), hit("/x", Group::Unknown)]);

        check!(grouped.len() == 1);
        check!(grouped.dropped == 1);
        check!(grouped.get(Group::Unknown).is_empty());
        check!(grouped.flatten().all(|m| m.doc.group.is_displayed()));
    }

    #[test]
    fn test_iter_skips_empty_groups_in_display_order() {
        let grouped = group_results(vec![hit("/p", Group::Principle), hit("/d", Group::Docs)]);
        let groups: Vec<Group> = grouped.iter().map(|(g, _)| g).collect();
        check!(groups == vec![Group::Docs, Group::Principle]);

        let flat: Vec<&str> = grouped.flatten().map(|m| m.slug.as_str()).collect();
        check!(flat == vec!["/d", "/p"]);
    }

    #[test]
    fn test_empty_input() {
        let grouped = group_results(Vec::new());
        check!(grouped.is_empty());
        check!(grouped == GroupedResults::default());
    }
}
