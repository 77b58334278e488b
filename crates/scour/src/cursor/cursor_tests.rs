use std::sync::Arc;

use scour_core::{Profile, SourceText};

use crate::test_utils::{c_profile, plain};
use crate::{Cursor, ScanError};

#[test]
fn clone_then_restore_round_trips() {
    let mut cursor = Cursor::new("a 'b' c", c_profile());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_str());

    let mut probe = cursor.clone();
    probe.advance();
    probe.advance();
    assert_ne!(cursor.state, probe.state);

    cursor.restore(&probe).unwrap();
    assert_eq!(cursor.state, probe.state);
    assert!(Arc::ptr_eq(cursor.profile(), probe.profile()));
}

#[test]
fn restore_rejects_a_different_buffer() {
    let mut cursor = Cursor::new("same text", plain());
    let other = Cursor::new("same text", plain());
    let before = cursor.state.clone();
    // Equal contents, distinct buffers: positions are not transferable.
    assert!(matches!(cursor.restore(&other), Err(ScanError::BufferMismatch)));
    assert_eq!(cursor.state, before);
}

#[test]
fn restore_accepts_a_shared_buffer() {
    let text = SourceText::from("shared");
    let mut cursor = Cursor::new(text.clone(), plain());
    let mut probe = Cursor::new(text, plain());
    probe.advance();
    cursor.restore(&probe).unwrap();
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn reset_returns_to_a_fresh_start() {
    let mut cursor = Cursor::new("(a\nb", c_profile());
    for _ in 0..3 {
        cursor.advance();
    }
    cursor.reset();
    let fresh = Cursor::new("(a\nb", c_profile());
    assert_eq!(cursor.state, fresh.state);
}

#[test]
fn stop_short_circuits_iteration() {
    let mut cursor = Cursor::new("abc", plain());
    cursor.advance();
    cursor.stop();
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.at_end());
    assert_eq!(cursor.ch(), None);
}

#[test]
fn jump_is_free_with_a_pattern_free_profile() {
    let mut cursor = Cursor::new("line1\nline2\nline3", plain());
    cursor.jump_to(8).unwrap();
    assert_eq!((cursor.pos(), cursor.line(), cursor.col()), (8, 2, 3));

    // Backward works too: position state is rebuilt from the start.
    cursor.jump_to(2).unwrap();
    assert_eq!((cursor.pos(), cursor.line(), cursor.col()), (2, 1, 3));

    // Past-the-end clamps.
    cursor.jump_to(999).unwrap();
    assert_eq!(cursor.pos(), 17);
    assert_eq!((cursor.line(), cursor.col()), (3, 6));
}

#[test]
fn forward_jump_with_patterns_scans_context() {
    let mut cursor = Cursor::new("ab // cd\nef", c_profile());
    cursor.jump_to(5).unwrap();
    assert_eq!(cursor.pos(), 5);
    assert!(cursor.is_comment());
}

#[test]
fn backward_jump_with_patterns_fails() {
    let mut cursor = Cursor::new("ab // cd\nef", c_profile());
    cursor.jump_to(5).unwrap();
    let err = cursor.jump_to(1).unwrap_err();
    assert!(matches!(err, ScanError::BackwardJump { from: 5, to: 1 }));
    insta::assert_snapshot!(
        err.to_string(),
        @"cannot jump backward from 5 to 1 while language patterns are active"
    );
    // The failed jump leaves the cursor where it was.
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn switch_profile_in_code_context() {
    let mut cursor = Cursor::new("abc # d", c_profile());
    for _ in 0..4 {
        cursor.advance();
    }
    assert_eq!(cursor.ch(), Some('#'));
    assert!(cursor.is_code());

    let rules = serde_json::json!({
        "name": "hash",
        "line_comment": { "open": "#" }
    });
    let hash = Arc::new(Profile::from_json(&rules.to_string()).unwrap());
    cursor.switch_profile(hash).unwrap();
    assert!(cursor.is_comment());
    assert_eq!(cursor.profile().name(), Some("hash"));
}

#[test]
fn switch_profile_is_locked_inside_a_literal() {
    let mut cursor = Cursor::new("'ab", c_profile());
    assert!(cursor.is_str());
    let err = cursor.switch_profile(plain()).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"cannot switch language profile inside a string literal"
    );
    assert_eq!(cursor.profile().name(), Some("c"));
}

#[test]
fn location_outlives_the_cursor() {
    let loc = {
        let mut cursor = Cursor::new("ab\ncd", c_profile());
        for _ in 0..3 {
            cursor.advance();
        }
        cursor.location()
    };
    assert_eq!((loc.line, loc.col, loc.pos), (2, 1, 3));
    assert_eq!(loc.to_string(), "line 2, column 1");
    assert_eq!(loc.remainder(), Some("cd"));
}

#[test]
fn default_options_scan_the_whole_buffer() {
    let cursor = Cursor::new("abc", plain());
    assert_eq!(cursor.end(), 3);
    assert_eq!(cursor.rest(), "abc");
}
