//! Integration tests for pattern compilation, matching, and formatting.

use pretty_assertions::assert_eq;
use resource_names::{Error, NamePattern, Segment};
use rstest::rstest;

#[test]
fn test_compile_constant_and_variable_segments() {
    let pattern = NamePattern::compile("/users/{user_id}/books/{book_id}");

    assert_eq!(
        pattern.segments(),
        &[
            Segment::Constant("users".to_string()),
            Segment::Variable("user_id".to_string()),
            Segment::Constant("books".to_string()),
            Segment::Variable("book_id".to_string()),
        ]
    );
    assert_eq!(
        pattern.variables().collect::<Vec<_>>(),
        vec!["user_id", "book_id"]
    );

    assert!(!pattern.segments()[0].is_variable());
    assert!(pattern.segments()[1].is_variable());
    assert_eq!(pattern.segments()[0].value(), "users");
    assert_eq!(pattern.segments()[1].value(), "user_id");
}

#[test]
fn test_compile_ignores_outer_separators() {
    assert_eq!(
        NamePattern::compile("users/{user_id}"),
        NamePattern::compile("///users/{user_id}///")
    );
}

#[rstest]
#[case("{}")]
#[case("{x")]
#[case("x}")]
#[case("users")]
fn test_compile_non_placeholder_is_constant(#[case] segment: &str) {
    let pattern = NamePattern::compile(segment);
    assert_eq!(pattern.segments(), &[Segment::Constant(segment.to_string())]);
}

#[test]
fn test_match_extracts_variables() {
    let pattern = NamePattern::compile("/users/{user_id}/books/{book_id}");
    let params = pattern.matches("/users/42/books/7").unwrap();

    assert_eq!(params.len(), 2);
    assert_eq!(params["user_id"], "42");
    assert_eq!(params["book_id"], "7");
}

#[test]
fn test_match_constant_mismatch() {
    let pattern = NamePattern::compile("/users/{user_id}");

    assert_eq!(
        pattern.matches("/groups/42"),
        Err(Error::ConstantMismatch {
            index: 0,
            expected: "users".to_string(),
            found: "groups".to_string(),
        })
    );
}

#[test]
fn test_match_segment_count_mismatch() {
    let pattern = NamePattern::compile("/a/b");

    assert_eq!(
        pattern.matches("/a/b/c"),
        Err(Error::SegmentCountMismatch {
            expected: 2,
            found: 3,
        })
    );
}

#[test]
fn test_count_mismatch_wins_over_constant_mismatch() {
    // A shorter name with a differing constant still reports the count.
    let pattern = NamePattern::compile("/users/{user_id}");

    assert_eq!(
        pattern.matches("/groups"),
        Err(Error::SegmentCountMismatch {
            expected: 2,
            found: 1,
        })
    );
}

#[test]
fn test_match_is_case_sensitive() {
    let pattern = NamePattern::compile("/users/{user_id}");
    assert!(matches!(
        pattern.matches("/Users/42"),
        Err(Error::ConstantMismatch { .. })
    ));
}

#[test]
fn test_match_trailing_slash_is_ignored() {
    let pattern = NamePattern::compile("/users/{user_id}");
    assert!(pattern.matches("/users/42/").is_ok());
    assert!(pattern.matches("users/42").is_ok());
}

#[test]
fn test_match_duplicate_variable_last_write_wins() {
    let pattern = NamePattern::compile("/pair/{id}/{id}");
    let params = pattern.matches("/pair/first/second").unwrap();

    assert_eq!(params.len(), 1);
    assert_eq!(params["id"], "second");
}

#[test]
fn test_match_constant_only_pattern_yields_empty_params() {
    let pattern = NamePattern::compile("/users/all");
    let params = pattern.matches("/users/all").unwrap();
    assert!(params.is_empty());
}

#[test]
fn test_format_renders_in_template_order() {
    let pattern = NamePattern::compile("/users/{user_id}/books/{book_id}");

    let name = pattern
        .format(|var| match var {
            "user_id" => Some("42".to_string()),
            "book_id" => Some("7".to_string()),
            _ => None,
        })
        .unwrap();

    assert_eq!(name, "/users/42/books/7");
}

#[test]
fn test_format_missing_variable() {
    let pattern = NamePattern::compile("/users/{user_id}");

    assert_eq!(
        pattern.format(|_| None),
        Err(Error::MissingVariable("user_id".to_string()))
    );
}

#[test]
fn test_format_constant_only_pattern() {
    let pattern = NamePattern::compile("/users/all");
    let name = pattern.format(|_| None).unwrap();
    assert_eq!(name, "/users/all");
}

#[rstest]
#[case("/users/{user_id}", "/users/42")]
#[case("/users/{user_id}/books/{book_id}", "/users/42/books/7")]
#[case("/projects/{project}/locations/{location}", "/projects/p1/locations/us-east1")]
#[case("/static/path", "/static/path")]
fn test_match_format_round_trip(#[case] template: &str, #[case] name: &str) {
    let pattern = NamePattern::compile(template);
    let params = pattern.matches(name).unwrap();

    let rendered = pattern.format(|var| params.get(var).cloned()).unwrap();
    assert_eq!(rendered, name);
}

#[test]
fn test_pattern_is_shareable_across_threads() {
    let pattern = std::sync::Arc::new(NamePattern::compile("/users/{user_id}"));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pattern = pattern.clone();
            std::thread::spawn(move || {
                let params = pattern.matches(&format!("/users/{i}")).unwrap();
                assert_eq!(params["user_id"], i.to_string());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
