//! End-to-end query resolution through `hrml::process`

use hrml::hrml::{
    process, Answer, CollectingDiagnostics, HrmlError, NullDiagnostics, ParserOptions,
};
use rstest::rstest;

fn answers(text: &str) -> Vec<String> {
    process(text, ParserOptions::default(), &NullDiagnostics)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn test_sample_fixture() {
    assert_eq!(
        answers(&fixture("sample.hrml")),
        vec!["Name1", "Not Found!", "HelloWorld"]
    );
}

#[test]
fn test_nested_fixture() {
    assert_eq!(
        answers(&fixture("nested.hrml")),
        vec!["GoodVal", "Not Found!", "10", "BadVal", "Not Found!", "2"]
    );
}

#[test]
fn test_duplicate_attribute_resolves_to_last() {
    assert_eq!(answers("2 1\n<a x=\"1\" x=\"2\">\n</a>\na~x\n"), vec!["2"]);
}

#[test]
fn test_sibling_roots_are_independent() {
    let text = "4 4\n<a k=\"1\">\n</a>\n<b k=\"2\">\n</b>\na~k\nb~k\na.b~k\nb.a~k\n";
    assert_eq!(answers(text), vec!["1", "2", "Not Found!", "Not Found!"]);
}

#[test]
fn test_sibling_count_does_not_matter() {
    let mut markup = vec!["<root>".to_string()];
    for i in 0..20 {
        markup.push(format!("<child{i} id=\"{i}\">"));
        markup.push(format!("</child{i}>"));
    }
    markup.push("</root>".to_string());

    let queries: Vec<String> = (0..20).map(|i| format!("root.child{i}~id")).collect();
    let text = format!(
        "{} {}\n{}\n{}\n",
        markup.len(),
        queries.len(),
        markup.join("\n"),
        queries.join("\n")
    );

    let expected: Vec<String> = (0..20).map(|i| i.to_string()).collect();
    assert_eq!(answers(&text), expected);
}

#[rstest]
#[case::missing_separator("tag1.tag2.name")]
#[case::two_separators("tag1~tag2~name")]
#[case::empty_line("")]
#[case::empty_attribute("tag1~")]
#[case::separator_only("~")]
fn test_malformed_query_aborts_batch(#[case] bad: &str) {
    let text = format!("2 3\n<tag1 name=\"x\">\n</tag1>\ntag1~name\n{}\ntag1~name\n", bad);
    let err = process(&text, ParserOptions::default(), &NullDiagnostics).unwrap_err();
    assert!(matches!(err, HrmlError::MalformedQuery { line_no: 2, .. }));
}

#[test]
fn test_invalid_intermediate_segment_stops_descent() {
    let sink = CollectingDiagnostics::new();
    let text = "4 1\n<a>\n<b k=\"v\">\n</b>\n</a>\na.x.b~k\n";
    let result = process(text, ParserOptions::default(), &sink).unwrap();

    assert_eq!(result, vec![Answer::NotFound]);
    let lookup_misses: Vec<String> = sink
        .warnings()
        .into_iter()
        .filter(|w| w.starts_with("Tag could not be found"))
        .collect();
    assert_eq!(lookup_misses, vec!["Tag could not be found, tag: x"]);
}

#[test]
fn test_trailing_dot_in_path_is_ignored() {
    assert_eq!(answers("2 1\n<a x=\"1\">\n</a>\na.~x\n"), vec!["1"]);
}

#[test]
fn test_unknown_attribute_on_valid_tag() {
    let text = "2 1\n<a k=\"v\">\n</a>\na~other\n";
    assert_eq!(answers(text), vec!["Not Found!"]);
}

#[test]
fn test_closing_without_opening_fails_before_queries() {
    let text = "1 1\n</a>\na~k\n";
    let err = process(text, ParserOptions::default(), &NullDiagnostics).unwrap_err();
    assert!(matches!(err, HrmlError::ClosingTagWithoutOpen { line_no: 1, .. }));
}
