use serde::{Deserialize, Serialize};
use urlscope_core::{Property, enabled, to_definitions};

use crate::{Header, HeaderDefinition};

/// Ordered headers with case-insensitive lookup. A key may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderList {
    headers: Vec<Header>,
}

impl HeaderList {
    pub fn new(headers: Vec<Header>) -> Self {
        Self { headers }
    }

    pub fn parse(text: &str) -> Self {
        Self::new(Header::parse(text))
    }

    pub fn push(&mut self, header: Header) {
        self.headers.push(header);
    }

    /// First value for `key`, ignoring disabled headers.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).into_iter().next()
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        enabled(&self.headers)
            .filter(|header| header.key.eq_ignore_ascii_case(key))
            .map(|header| header.value.as_str())
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.headers
            .iter()
            .any(|header| header.key.eq_ignore_ascii_case(key))
    }

    /// Removes every header named `key` and returns how many went.
    pub fn remove(&mut self, key: &str) -> usize {
        let before = self.headers.len();
        self.headers
            .retain(|header| !header.key.eq_ignore_ascii_case(key));
        before - self.headers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn unparse(&self, separator: Option<&str>) -> String {
        Header::unparse(&self.headers, separator)
    }

    pub fn definitions(&self) -> Vec<HeaderDefinition> {
        to_definitions(&self.headers)
    }

    pub fn property_name(&self) -> &'static str {
        Header::PROPERTY_NAME
    }
}

impl From<Vec<Header>> for HeaderList {
    fn from(headers: Vec<Header>) -> Self {
        Self::new(headers)
    }
}

impl FromIterator<Header> for HeaderList {
    fn from_iter<I: IntoIterator<Item = Header>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
