use regex::Regex;

use crate::PatternError;

const REGEX_META: [char; 12] = ['.', '+', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\'];

/// Translates a path glob into anchored regex source.
///
/// `?` matches one character and `*` any run of characters; everything else
/// is literal. Escaping runs first so the substituted `.` and `.*` survive.
pub fn glob_to_regex_source(glob: &str) -> String {
    let mut escaped = String::with_capacity(glob.len() * 2);
    for ch in glob.chars() {
        if REGEX_META.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }

    let translated = escaped.replace('?', ".").replace('*', ".*");
    format!(r"\A{translated}\z")
}

pub fn glob_to_regex(glob: &str) -> Result<Regex, PatternError> {
    Regex::new(&glob_to_regex_source(glob)).map_err(|err| PatternError::Glob(err.to_string()))
}
