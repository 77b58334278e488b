use crate::test_utils::{c_profile, plain};
use crate::{Cursor, Walk};

#[test]
fn consume_while_returns_the_consumed_slice() {
    let mut cursor = Cursor::new("   abc", plain());
    let ws = cursor.consume_while(|c| c.is_whitespace());
    assert_eq!(ws, "   ");
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.ch(), Some('a'));
}

#[test]
fn consume_until_stops_at_the_predicate() {
    let mut cursor = Cursor::new("abc def", plain());
    let word = cursor.consume_until(|c| c.is_whitespace());
    assert_eq!(word, "abc");
    assert!(cursor.is_whitespace());
}

#[test]
fn consume_until_may_consume_nothing() {
    let mut cursor = Cursor::new("abc", plain());
    assert_eq!(cursor.consume_until(|_| true), "");
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn consume_line_rests_on_the_terminator() {
    let mut cursor = Cursor::new("abc\ndef", plain());
    assert_eq!(cursor.consume_line(), "abc");
    assert!(cursor.is_eol());
    cursor.advance();
    assert_eq!(cursor.consume_line(), "def");
    assert!(cursor.at_end());
}

#[test]
fn walk_visits_every_position() {
    let mut cursor = Cursor::new("ab\nc", plain());
    let mut visited = Vec::new();
    cursor.walk(|c| {
        visited.push(c.pos());
        Walk::Continue
    });
    assert_eq!(visited, vec![0, 1, 2, 3]);
    assert!(cursor.at_end());
}

#[test]
fn walk_stops_on_the_sentinel() {
    let mut cursor = Cursor::new("ab cd", plain());
    cursor.walk(|c| {
        if c.is_whitespace() {
            Walk::Stop
        } else {
            Walk::Continue
        }
    });
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn walk_does_not_double_step_an_advancing_visitor() {
    let mut cursor = Cursor::new("ab cd", plain());
    let mut words = Vec::new();
    cursor.walk(|c| {
        let word = c.consume_while(|c| !c.is_whitespace());
        if !word.is_empty() {
            words.push(word.to_string());
        }
        Walk::Continue
    });
    assert_eq!(words, vec!["ab", "cd"]);
    assert!(cursor.at_end());
}

#[test]
fn consume_comment_is_a_noop_in_code() {
    let mut cursor = Cursor::new("abc", c_profile());
    cursor.consume_comment();
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn consume_comment_jumps_past_a_line_comment() {
    let mut cursor = Cursor::new("x // rest\ny", c_profile());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_comment());
    cursor.consume_comment();
    assert_eq!(cursor.pos(), 10);
    assert_eq!(cursor.ch(), Some('y'));
    assert_eq!((cursor.line(), cursor.col()), (2, 1));
    assert!(cursor.is_code());
    assert!(cursor.at_sol());
}

#[test]
fn consume_comment_jumps_past_a_multiline_block() {
    let mut cursor = Cursor::new("a/*x\ny*/ b", c_profile());
    cursor.advance();
    assert!(cursor.is_comment());
    cursor.consume_comment();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.ch(), Some('b'));
    // Line/column bookkeeping stays exact across the jump.
    assert_eq!((cursor.line(), cursor.col()), (2, 5));
    assert!(cursor.is_code());
}

#[test]
fn consume_comment_matches_stepping() {
    let input = "a/*x\ny*/ b";
    let mut jumped = Cursor::new(input, c_profile());
    jumped.advance();
    jumped.consume_comment();

    let mut stepped = Cursor::new(input, c_profile());
    while stepped.is_comment() || stepped.pos() < jumped.pos() {
        stepped.advance();
    }
    assert_eq!(stepped.state, jumped.state);
}

#[test]
fn consume_comment_mid_comment_catches_a_straddling_close() {
    // Stepping to the close pattern's final `/` leaves one close
    // character already matched; the jump must still find that close
    // instead of searching past it.
    let mut cursor = Cursor::new("/* x */ y", c_profile());
    while cursor.pos() < 6 {
        cursor.advance();
    }
    assert!(cursor.is_comment());
    cursor.consume_comment();
    assert_eq!(cursor.pos(), 8);
    assert_eq!(cursor.ch(), Some('y'));
    assert!(cursor.is_code());
}

#[test]
fn consume_comment_after_the_close_fully_matched() {
    // One past the close's final character: a single step exits.
    let mut cursor = Cursor::new("/* x */ y", c_profile());
    while cursor.pos() < 7 {
        cursor.advance();
    }
    assert!(cursor.is_comment());
    cursor.consume_comment();
    assert_eq!(cursor.pos(), 8);
    assert!(cursor.is_code());
}

#[test]
fn consume_comment_matches_stepping_from_any_offset() {
    let input = "/* x */ y";
    let mut reference = Cursor::new(input, c_profile());
    while reference.is_comment() {
        reference.advance();
    }
    assert_eq!(reference.pos(), 8);

    for offset in 0..8 {
        let mut cursor = Cursor::new(input, c_profile());
        while cursor.pos() < offset {
            cursor.advance();
        }
        assert!(cursor.is_comment(), "offset {offset}");
        cursor.consume_comment();
        assert_eq!(cursor.state, reference.state, "offset {offset}");
    }
}

#[test]
fn consume_comment_stops_on_an_unterminated_block() {
    let mut cursor = Cursor::new("/* never closed", c_profile());
    assert!(cursor.is_comment());
    cursor.consume_comment();
    assert!(cursor.at_end());
    assert!(cursor.is_comment());
}

#[test]
fn escaped_close_does_not_end_a_block_comment() {
    let mut cursor = Cursor::new("/* a \\*/ */ b", c_profile());
    cursor.consume_comment();
    assert_eq!(cursor.ch(), Some('b'));
    assert!(cursor.is_code());
}
