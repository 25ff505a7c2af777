//! PhotoSet - the category-keyed photo manifest
//!
//! A manifest is a JSON object mapping category names to arrays of
//! filenames. Document order is display order, so the set is kept as an
//! ordered list of categories rather than a hash map.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GalleryError, GalleryResult};

/// One category and its photos, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub files: Vec<String>,
}

/// Ordered mapping from category name to filenames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoSet {
    categories: Vec<Category>,
}

impl PhotoSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category.
    ///
    /// A name that is already present keeps its position and has its file
    /// list replaced.
    pub fn insert(&mut self, name: impl Into<String>, files: Vec<String>) {
        let name = name.into();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.files = files,
            None => self.categories.push(Category { name, files }),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_category<I, S>(mut self, name: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, files.into_iter().map(Into::into).collect());
        self
    }

    /// Categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in display order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Files for a category, if present
    pub fn files(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.files.as_slice())
    }

    /// Whether the category is a key of this set
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.name == category)
    }

    /// Every (category, filename) pair in display order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories.iter().flat_map(|c| {
            c.files
                .iter()
                .map(move |file| (c.name.as_str(), file.as_str()))
        })
    }

    /// Number of categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of photos across all categories
    pub fn photo_count(&self) -> usize {
        self.categories.iter().map(|c| c.files.len()).sum()
    }

    /// True when there are no categories at all
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Parse a manifest document.
    ///
    /// Syntax errors map to [`GalleryError::ManifestParse`]; well-formed JSON
    /// of the wrong shape maps to [`GalleryError::ManifestShape`].
    pub fn from_json(json: &str) -> GalleryResult<Self> {
        serde_json::from_str(json).map_err(|e| match e.classify() {
            serde_json::error::Category::Data => GalleryError::ManifestShape(e.to_string()),
            _ => GalleryError::ManifestParse(e),
        })
    }

    /// Serialize as a pretty-printed manifest document
    pub fn to_json_pretty(&self) -> GalleryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<N, F> FromIterator<(N, Vec<F>)> for PhotoSet
where
    N: Into<String>,
    F: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, Vec<F>)>>(iter: T) -> Self {
        let mut set = PhotoSet::new();
        for (name, files) in iter {
            set.insert(name, files.into_iter().map(Into::into).collect());
        }
        set
    }
}

impl Serialize for PhotoSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.files)?;
        }
        map.end()
    }
}

struct PhotoSetVisitor;

impl<'de> Visitor<'de> for PhotoSetVisitor {
    type Value = PhotoSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category names to arrays of filenames")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PhotoSet, A::Error> {
        let mut set = PhotoSet::new();
        while let Some((name, files)) = access.next_entry::<String, Vec<String>>()? {
            set.insert(name, files);
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for PhotoSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PhotoSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_document_order() {
        let set = PhotoSet::from_json(r#"{"Western": ["steak.jpg"], "Chinese": ["bao.png", "dumpling.jpg"]}"#)
            .unwrap();
        let names: Vec<&str> = set.category_names().collect();
        assert_eq!(names, vec!["Western", "Chinese"]);
        assert_eq!(set.photo_count(), 3);
    }

    #[test]
    fn test_entries_flatten_in_order() {
        let set = PhotoSet::new()
            .with_category("A", ["1.jpg", "2.jpg"])
            .with_category("B", ["3.jpg"]);
        let entries: Vec<(&str, &str)> = set.entries().collect();
        assert_eq!(entries, vec![("A", "1.jpg"), ("A", "2.jpg"), ("B", "3.jpg")]);
    }

    #[test]
    fn test_duplicate_key_replaces_in_place() {
        let set = PhotoSet::from_json(r#"{"A": ["1.jpg"], "B": [], "A": ["2.jpg"]}"#).unwrap();
        let names: Vec<&str> = set.category_names().collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(set.files("A").unwrap(), &["2.jpg".to_string()]);
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = PhotoSet::from_json("{\"A\": [").unwrap_err();
        assert!(matches!(err, GalleryError::ManifestParse(_)));
    }

    #[test]
    fn test_wrong_shape_is_shape_error() {
        for doc in [r#"["a.jpg"]"#, r#"{"A": "a.jpg"}"#, r#"{"A": [1, 2]}"#, "null"] {
            let err = PhotoSet::from_json(doc).unwrap_err();
            assert!(matches!(err, GalleryError::ManifestShape(_)), "doc: {}", doc);
        }
    }

    #[test]
    fn test_serialize_keeps_order() {
        let set = PhotoSet::new()
            .with_category("Zeta", ["z.jpg"])
            .with_category("Alpha", Vec::<String>::new());
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"Zeta":["z.jpg"],"Alpha":[]}"#);
    }

    #[test]
    fn test_empty_set() {
        let set = PhotoSet::from_json("{}").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.photo_count(), 0);
    }
}
