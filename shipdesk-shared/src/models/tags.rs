use serde::{Deserialize, Deserializer, Serialize};

/// Tag collection of a customer or order record.
///
/// Tags are unique and keep their insertion order for display. Equality is
/// set equality: `{"a","b"} == {"b","a"}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Insert a tag, returning `false` if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Remove a tag, returning `false` if it was absent.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        before != self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl Eq for TagSet {}

impl<S: Into<String>> FromIterator<S> for TagSet {
    /// Entries are trimmed; blanks and duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            let tag: String = tag.into();
            let trimmed = tag.trim();
            if !trimmed.is_empty() {
                set.insert(trimmed);
            }
        }
        set
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The backend returns tags either as a list or as one comma-joined string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTags {
    List(Vec<String>),
    Joined(String),
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tags = match Option::<RawTags>::deserialize(deserializer)? {
            Some(RawTags::List(list)) => list.into_iter().collect(),
            Some(RawTags::Joined(joined)) => joined.split(',').collect(),
            None => TagSet::new(),
        };
        Ok(tags)
    }
}
