use serde::Serialize;
use tracing::trace;

use crate::{ALLOWED_PROTOCOLS, MATCH_ALL, UrlMatchPattern, UrlParts};

pub fn match_any_host(host: &str) -> bool {
    host == MATCH_ALL
}

pub fn match_absolute_host(host: &str, remote: &str) -> bool {
    host == remote
}

/// `*.example.com` covers `example.com` itself and anything below it, but
/// not `notexample.com`.
pub fn match_suffix_host(host: &str, remote: &str) -> bool {
    let Some(suffix) = host.strip_prefix("*.") else {
        return false;
    };
    remote == suffix
        || remote
            .strip_suffix(suffix)
            .is_some_and(|rest| rest.ends_with('.'))
}

/// Per-stage outcome of a match. Stages that never ran are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchExplanation {
    pub pattern: String,
    pub match_all: bool,
    pub compiled: bool,
    pub url: Option<UrlParts>,
    pub url_error: Option<String>,
    pub protocol: Option<bool>,
    pub host: Option<bool>,
    pub path: Option<bool>,
    pub matched: bool,
}

impl UrlMatchPattern {
    /// Tests a URL string against the pattern. Never fails: invalid patterns
    /// and unparsable URLs simply do not match.
    pub fn test(&self, url: &str) -> bool {
        // Ordered cheapest first; the path regex runs last.
        if self.is_match_all() {
            return true;
        }
        if self.compiled().record().is_none() {
            return false;
        }

        match UrlParts::parse(url) {
            Ok(parts) => self.test_url(&parts),
            Err(err) => {
                trace!(url, error = %err, "candidate url did not parse");
                false
            }
        }
    }

    pub fn test_url(&self, url: &UrlParts) -> bool {
        if self.is_match_all() {
            return true;
        }
        self.test_protocol(&url.protocol) && self.test_host(&url.remote) && self.test_path(&url.path)
    }

    pub fn test_protocol(&self, protocol: &str) -> bool {
        let Some(record) = self.compiled().record() else {
            return false;
        };
        ALLOWED_PROTOCOLS.contains(&protocol)
            && record
                .protocols
                .iter()
                .any(|allowed| allowed == MATCH_ALL || allowed == protocol)
    }

    /// `remote` is host plus optional `:port`.
    pub fn test_host(&self, remote: &str) -> bool {
        let Some(record) = self.compiled().record() else {
            return false;
        };
        match_any_host(&record.host)
            || match_absolute_host(&record.host, remote)
            || match_suffix_host(&record.host, remote)
    }

    pub fn test_path(&self, path: &str) -> bool {
        self.compiled()
            .record()
            .is_some_and(|record| record.path.is_match(path))
    }

    pub fn explain(&self, url: &str) -> MatchExplanation {
        let mut explanation = MatchExplanation {
            pattern: self.to_string(),
            match_all: self.is_match_all(),
            compiled: self.compiled().record().is_some(),
            url: None,
            url_error: None,
            protocol: None,
            host: None,
            path: None,
            matched: false,
        };

        if explanation.match_all {
            explanation.matched = true;
            return explanation;
        }
        if !explanation.compiled {
            return explanation;
        }

        let parts = match UrlParts::parse(url) {
            Ok(parts) => parts,
            Err(err) => {
                explanation.url_error = Some(err.to_string());
                return explanation;
            }
        };

        let protocol = self.test_protocol(&parts.protocol);
        explanation.protocol = Some(protocol);
        if protocol {
            let host = self.test_host(&parts.remote);
            explanation.host = Some(host);
            if host {
                let path = self.test_path(&parts.path);
                explanation.path = Some(path);
                explanation.matched = path;
            }
        }
        explanation.url = Some(parts);
        explanation
    }
}
