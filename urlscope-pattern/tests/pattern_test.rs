use urlscope_pattern::{MATCH_ALL_URLS, PatternDefinition, Property, UrlMatchPattern};

#[test]
fn match_all_accepts_anything() {
    let pattern = UrlMatchPattern::new(MATCH_ALL_URLS);
    assert!(pattern.test("https://example.com/"));
    assert!(pattern.test("gopher://example.com/"));
    assert!(pattern.test("definitely not a url"));
    assert!(pattern.test(""));
}

#[test]
fn invalid_pattern_matches_nothing() {
    let pattern = UrlMatchPattern::new("not a pattern");
    assert!(!pattern.is_valid());
    for url in ["https://example.com/", "http://not a pattern/", "file:///"] {
        assert!(!pattern.test(url), "{url}");
    }
}

#[test]
fn google_scenario() {
    let pattern = UrlMatchPattern::new("https+http://*.google.com/foo*bar");
    assert!(pattern.test("https://mail.google.com/foo123bar"));
    assert!(pattern.test("http://mail.google.com/foobar"));
    assert!(!pattern.test("ftp://mail.google.com/foo123bar"));
    assert!(pattern.test("https://google.com/foo123bar"));
    assert!(!pattern.test("https://evilgoogle.com/foo123bar"));
    assert!(!pattern.test("https://mail.google.com/foo123baz"));
}

#[test]
fn suffix_host_law() {
    let pattern = UrlMatchPattern::new("https://*.example.com/*");
    assert!(pattern.test("https://example.com/"));
    assert!(pattern.test("https://sub.example.com/a/b"));
    assert!(!pattern.test("https://notexample.com/"));
}

#[test]
fn protocol_wildcard_law() {
    let pattern = UrlMatchPattern::new("*://example.com/*");
    assert!(pattern.test("http://example.com/x"));
    assert!(pattern.test("https://example.com/x"));
    assert!(!pattern.test("gopher://example.com/x"));
}

#[test]
fn escaping_and_glob_laws_through_urls() {
    let dotted = UrlMatchPattern::new("http://example.com/a.b");
    assert!(dotted.test("http://example.com/a.b"));
    assert!(!dotted.test("http://example.com/axb"));

    let starred = UrlMatchPattern::new("http://example.com/a*b");
    assert!(starred.test("http://example.com/ab"));
    assert!(starred.test("http://example.com/axyzb"));
    assert!(!starred.test("http://example.com/a"));
    assert!(!starred.test("http://example.com/b"));
}

#[test]
fn query_string_is_not_part_of_path() {
    let pattern = UrlMatchPattern::new("https://api.example.com/v?/users");
    assert!(pattern.test("https://api.example.com/v2/users?page=3"));
    assert!(!pattern.test("https://api.example.com/v12/users"));
}

#[test]
fn file_pattern_with_empty_host() {
    let pattern = UrlMatchPattern::new("file:///home/*");
    assert!(pattern.test("file:///home/user/notes.txt"));
    assert!(!pattern.test("file:///etc/passwd"));
    assert!(!pattern.test("http://home/user"));
}

#[test]
fn any_host_any_path() {
    let pattern = UrlMatchPattern::new("http+https://*/*");
    assert!(pattern.test("http://127.0.0.1:9000/anything"));
    assert!(pattern.test("https://example.org/"));
    assert!(!pattern.test("ftp://example.org/"));
}

#[test]
fn repeated_tests_are_deterministic() {
    let pattern = UrlMatchPattern::new("https://*.example.com/*");
    let url = "https://a.example.com/x";
    let first = pattern.test(url);
    for _ in 0..10 {
        assert_eq!(pattern.test(url), first);
    }
    assert_eq!(pattern.as_str(), "https://*.example.com/*");
}

#[test]
fn protocols_accessor() {
    assert_eq!(
        UrlMatchPattern::new("https+http+https://x.com/").protocols(),
        ["https", "http"]
    );
    assert!(UrlMatchPattern::default().protocols().is_empty());
}

#[test]
fn display_round_trips_raw_string() {
    for raw in [
        "https+http://*.google.com/foo*bar",
        "not a pattern",
        MATCH_ALL_URLS,
        "http://Example.COM/",
    ] {
        assert_eq!(UrlMatchPattern::new(raw).to_string(), raw);
    }
}

#[test]
fn serializes_as_pattern_record() {
    let pattern = UrlMatchPattern::new("https://*.example.com/*");
    let json = serde_json::to_value(&pattern).unwrap();
    assert_eq!(json, serde_json::json!({ "pattern": "https://*.example.com/*" }));
    assert_eq!(
        pattern.to_definition(),
        PatternDefinition::from("https://*.example.com/*")
    );

    let invalid = serde_json::to_string(&UrlMatchPattern::new("bogus")).unwrap();
    assert_eq!(invalid, r#"{"pattern":"bogus"}"#);
}

#[test]
fn deserializes_from_string_or_record() {
    let from_string: UrlMatchPattern = serde_json::from_str(r#""http://a.com/*""#).unwrap();
    let from_record: UrlMatchPattern =
        serde_json::from_str(r#"{ "pattern": "http://a.com/*" }"#).unwrap();
    assert_eq!(from_string, from_record);
    assert!(from_record.test("http://a.com/b"));
}

#[test]
fn deserializing_odd_shapes_falls_back_to_match_all() {
    for input in [r#"{ "pattern": 42 }"#, r#"{}"#, r#"{ "pattern": "" }"#, "7", "null"] {
        let pattern: UrlMatchPattern = serde_json::from_str(input).unwrap();
        assert!(pattern.is_match_all(), "{input}");
    }
}

#[test]
fn explicit_default_port_matches_as_written() {
    let pattern = UrlMatchPattern::new("https://example.com:443/*");
    assert!(pattern.test("https://example.com:443/x"));
    assert!(!pattern.test("https://example.com/x"));
}

#[test]
fn host_compared_as_written() {
    let pattern = UrlMatchPattern::new("http://Example.com/*");
    assert!(pattern.test("http://Example.com/"));
    assert!(!pattern.test("http://example.com/"));
}

#[test]
fn literal_paths_match_unencoded_input() {
    assert!(UrlMatchPattern::new("http://a.com/a b").test("http://a.com/a b"));
    assert!(UrlMatchPattern::new("http://a.com/café*").test("http://a.com/café/menu"));
    assert!(UrlMatchPattern::new("http://a.com/x/../admin").test("http://a.com/x/../admin"));
    assert!(!UrlMatchPattern::new("http://a.com/admin").test("http://a.com/x/../admin"));
}
