//! Scenario tests for whole log lines
//!
//! Positive cases come from the kind of lines upstream services emit; negative
//! cases are genuinely malformed lines, one defect each.

use rstest::rstest;
use semistruct::testing::assert_log;
use semistruct::{parse_log_line, ParseError};

#[test]
fn test_featstore_session_line() {
    let log = parse_log_line(r#"!< 2 [cl7323:featstore:sess_fun] { ONE=two DOS="wah=hh-77" } >!"#)
        .unwrap();

    assert_log(&log)
        .priority(2)
        .tags(&["cl7323", "featstore", "sess_fun"])
        .attr_count(2)
        .attr("ONE", "two")
        .attr("DOS", "wah=hh-77");
}

#[test]
fn test_unstructured_message_line() {
    let log = parse_log_line(r#"!< 0 [cl2] { UNSTRUCT_MSG="some random debugging spam" } >!"#)
        .unwrap();

    assert_log(&log)
        .priority(0)
        .tags(&["cl2"])
        .attr_count(1)
        .attr("UNSTRUCT_MSG", "some random debugging spam");
}

#[test]
fn test_priority_only_line() {
    let log = parse_log_line("!< 2 >!").unwrap();
    assert_log(&log).priority(2).no_tags().no_attrs();
}

#[test]
fn test_tags_without_attributes() {
    let log = parse_log_line("!< 2 [a:b] >!").unwrap();
    assert_log(&log).priority(2).tags(&["a", "b"]).no_attrs();
}

#[test]
fn test_attributes_without_tags() {
    let log = parse_log_line("!< 5 { PROTO=icmp } >!").unwrap();
    assert_log(&log)
        .priority(5)
        .no_tags()
        .attr("PROTO", "icmp")
        .lacks_attr("ACTION");
}

#[rstest]
#[case(
    r#"!< 7 [local:pktproc:parsePkt] { PROTO=icmp ERROR="unassigned_type" ACTION=dropped } >!"#,
    7,
    &["local", "pktproc", "parsePkt"],
    &[("PROTO", "icmp"), ("ERROR", "unassigned_type"), ("ACTION", "dropped")]
)]
#[case(
    "!< 4 [cl610:featstore:sess_fun] { UNKNOWN_SESS=3e0a5ae3-7c2f-454e-828c-d838a18d5d8e } >!",
    4,
    &["cl610", "featstore", "sess_fun"],
    &[("UNKNOWN_SESS", "3e0a5ae3-7c2f-454e-828c-d838a18d5d8e")]
)]
#[case(
    r#"!< 6 [cl2:filestore:notify] { FILE="cas%20AV_!AA%20nvvpa.jpg" } >!"#,
    6,
    &["cl2", "filestore", "notify"],
    &[("FILE", "cas%20AV_!AA%20nvvpa.jpg")]
)]
#[case(
    r#"!< 0 [cl2:filestore:notify] { FILE2="some blah.jpg" } >!"#,
    0,
    &["cl2", "filestore", "notify"],
    &[("FILE2", "some blah.jpg")]
)]
fn test_service_lines(
    #[case] line: &str,
    #[case] priority: u8,
    #[case] tags: &[&str],
    #[case] attrs: &[(&str, &str)],
) {
    let log = parse_log_line(line).unwrap();

    let assertion = assert_log(&log)
        .priority(priority)
        .tags(tags)
        .attr_count(attrs.len());
    attrs
        .iter()
        .fold(assertion, |assertion, &(key, value)| assertion.attr(key, value));
}

#[test]
fn test_duplicate_tags_are_kept_in_order() {
    let log = parse_log_line("!< 1 [b:a:b] >!").unwrap();
    assert_log(&log).tags(&["b", "a", "b"]);
}

#[test]
fn test_repeated_key_keeps_last_value() {
    let log = parse_log_line("!< 1 { K=first K=\"second one\" } >!").unwrap();
    assert_log(&log).attr_count(1).attr("K", "second one");
}

#[test]
fn test_rejects_garbage() {
    assert_eq!(
        parse_log_line("no line to parse at all"),
        Err(ParseError::NoMatch {
            offset: 0,
            found: Some('n')
        })
    );
}

#[test]
fn test_rejects_letter_priority() {
    let err = parse_log_line("!< f [cl610:featstore:sess_fun] { UNKNOWN_SESS=abc } >!").unwrap_err();
    assert!(err.is_no_match(), "unexpected error {:?}", err);
}

#[rstest]
#[case::two_digit_priority("!< 10 [a] >!")]
#[case::negative_priority("!< -1 >!")]
#[case::missing_priority("!< [a] >!")]
#[case::lowercase_key("!< 1 { foo=bar } >!")]
#[case::underscore_key("!< 1 { _FOO=bar } >!")]
#[case::missing_open_sentinel("2 [a] >!")]
#[case::missing_end_sentinel("!< 2 [a]")]
#[case::reversed_sentinels("<! 2 !>")]
#[case::unterminated_tags("!< 2 [a:b >!")]
#[case::unterminated_attrs("!< 2 { A=b >!")]
#[case::unterminated_quote("!< 2 { A=\"b } >!")]
#[case::quote_inside_quote("!< 2 { A=\"b\"c\" } >!")]
#[case::space_in_tag("!< 2 [a b] >!")]
#[case::comma_separated_tags("!< 2 [a,b] >!")]
#[case::symbol_in_bare_value("!< 2 { A=b=c } >!")]
#[case::attrs_before_tags("!< 2 { A=b } [a] >!")]
#[case::trailing_text("!< 2 >! extra")]
#[case::newline_inside("!< 2\n[a] >!")]
#[case::empty("")]
fn test_rejects_malformed_lines(#[case] line: &str) {
    let err = parse_log_line(line).unwrap_err();
    assert!(err.is_no_match(), "{:?} gave {:?}", line, err);
}
