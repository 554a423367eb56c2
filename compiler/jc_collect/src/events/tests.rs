use jc_scanner::CommentListener;
use pretty_assertions::assert_eq;

use crate::{collect_events, CollectError, Comment, EventCollector, ScanEvent, ScopeEvent};

fn scope(opening: bool, delimiter: char, offset: u32, line: u32, column: u32) -> ScanEvent {
    ScanEvent::Scope(ScopeEvent {
        opening,
        delimiter,
        offset,
        line,
        column,
    })
}

#[test]
fn events_in_emission_order() {
    let source = "f() { // c\n}\n";
    assert_eq!(
        collect_events(source),
        Ok(vec![
            scope(true, '(', 1, 1, 2),
            scope(false, ')', 2, 1, 3),
            scope(true, '{', 4, 1, 5),
            ScanEvent::Comment(Comment {
                start_offset: 6,
                start_line: 1,
                start_char: 7,
                end_line: 1,
                text: "// c".to_owned(),
            }),
            ScanEvent::BlockEnd {
                target_line_offset: 0,
                target_line_num: 1,
            },
            scope(false, '}', 11, 2, 1),
            ScanEvent::EndOfInput,
        ])
    );
}

#[test]
fn template_substitution_scopes() {
    let events = collect_events("`${ f(x) }`").expect("scan should succeed");
    assert_eq!(
        events,
        vec![
            scope(true, '`', 0, 1, 1),
            scope(false, '`', 10, 1, 11),
            ScanEvent::EndOfInput,
        ]
    );
}

#[test]
fn fatal_error_is_last_event() {
    let events = collect_events("a = {\n  b: /\n}").expect("fatal errors are events");
    assert_eq!(
        events,
        vec![
            scope(true, '{', 4, 1, 5),
            ScanEvent::FatalError {
                message: "invalid regular expression".to_owned(),
                offset: 12,
                line: 2,
                column: 7,
            },
        ]
    );
}

#[test]
fn end_without_begin_is_reported() {
    let mut collector = EventCollector::new("");
    collector.end_comment(0, 1);
    assert_eq!(
        collector.into_events(),
        Err(CollectError::MissingBegin { offset: 0, line: 1 })
    );
}

#[test]
fn events_visible_while_collecting() {
    let mut collector = EventCollector::new("");
    collector.end_of_input();
    assert_eq!(collector.events(), &[ScanEvent::EndOfInput]);
}

#[test]
fn events_serialize_with_kind_tag() {
    let events = collect_events("(/* c */)").expect("scan should succeed");
    let json = serde_json::to_value(&events).expect("events serialize");
    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "scope", "opening": true, "char": "(", "offset": 0, "lineNum": 1, "charNum": 1 },
            {
                "kind": "comment",
                "startOffset": 1,
                "startLine": 1,
                "startChar": 2,
                "endLine": 1,
                "text": "/* c */",
            },
            { "kind": "scope", "opening": false, "char": ")", "offset": 8, "lineNum": 1, "charNum": 9 },
            { "kind": "blockEnd", "targetLineOffset": 0, "targetLineNum": 1 },
            { "kind": "endOfInput" },
        ])
    );
}

#[test]
fn events_deserialize_back() {
    let events = collect_events("// a\nb(`c`);\n").expect("scan should succeed");
    let json = serde_json::to_string(&events).expect("events serialize");
    let back: Vec<ScanEvent> = serde_json::from_str(&json).expect("events deserialize");
    assert_eq!(back, events);
}
