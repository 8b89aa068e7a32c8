use crate::util::split_lowercase;
use indexmap::IndexSet;

/// Ordered allow-list of lower-cased entries parsed from a comma-separated value.
///
/// Membership checks treat the list as a set, while [`TokenList::header_value`]
/// keeps the configured order so emitted header values are stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    values: IndexSet<String>,
}

impl TokenList {
    /// Parses `value` by splitting on commas, trimming, lower-casing and
    /// discarding empty entries. Duplicates keep their first position.
    pub fn parse(value: &str) -> Self {
        Self::list(split_lowercase(value))
    }

    /// Builds a list from already separated entries using the same normalization
    /// as [`TokenList::parse`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = values
            .into_iter()
            .flat_map(|value| {
                split_lowercase(value.as_ref())
                    .map(|entry| entry.into_owned())
                    .collect::<Vec<_>>()
            })
            .filter(|entry| !entry.is_empty())
            .collect();

        Self { values }
    }

    /// `candidate` must already be lower-cased.
    pub fn contains(&self, candidate: &str) -> bool {
        self.values.contains(candidate)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Comma-joined form used for `Access-Control-*` response values.
    pub fn header_value(&self) -> String {
        let mut joined = String::with_capacity(self.values.iter().map(|v| v.len() + 1).sum());
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                joined.push(',');
            }
            joined.push_str(value);
        }
        joined
    }
}

impl<S: AsRef<str>> FromIterator<S> for TokenList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::list(iter)
    }
}

#[cfg(test)]
#[path = "token_list_test.rs"]
mod token_list_test;
