mod error;
mod glob;
mod grammar;
mod matcher;
mod parts;
mod pattern;

pub use error::{PatternError, UrlError};
pub use glob::{glob_to_regex, glob_to_regex_source};
pub use grammar::{
    ALLOWED_PROTOCOLS, MATCH_ALL, PROTOCOL_DELIMITER, PatternSegments, split_pattern,
};
pub use matcher::{MatchExplanation, match_absolute_host, match_any_host, match_suffix_host};
pub use parts::UrlParts;
pub use pattern::{
    CompiledPattern, MATCH_ALL_URLS, MatchPatternRecord, PatternDefinition, UrlMatchPattern,
    as_raw,
};
pub use urlscope_core::Property;
