use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::UrlError;

/// The parts of an absolute URL that match patterns look at, taken from the
/// input as written (no case folding, port elision or percent-encoding).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlParts {
    pub protocol: String,
    /// Host plus `:port` when the URL names a port.
    pub remote: String,
    pub path: String,
}

impl UrlParts {
    /// `Url::parse` decides whether the input is a valid absolute URL; the
    /// parts themselves are sliced out of the input text.
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        let url = Url::parse(input)?;
        let input = input.trim_matches(|ch: char| ch <= ' ');

        let Some((protocol, rest)) = input.split_once("://") else {
            return Ok(Self {
                protocol: url.scheme().to_string(),
                remote: String::new(),
                path: url.path().to_string(),
            });
        };

        let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (authority, tail) = rest.split_at(authority_end);
        let remote = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);

        let path_end = tail.find(['?', '#']).unwrap_or(tail.len());
        let path = match &tail[..path_end] {
            "" => "/",
            path => path,
        };

        Ok(Self {
            protocol: protocol.to_string(),
            remote: remote.to_string(),
            path: path.to_string(),
        })
    }
}

impl FromStr for UrlParts {
    type Err = UrlError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}
