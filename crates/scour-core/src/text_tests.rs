use crate::SourceText;

#[test]
fn clones_share_the_allocation() {
    let a = SourceText::from("let x = 1;");
    let b = a.clone();
    assert!(a.same_buffer(&b));
    assert_eq!(a.as_str(), b.as_str());
}

#[test]
fn equal_text_different_allocations_are_distinct_buffers() {
    let a = SourceText::from("same");
    let b = SourceText::from("same");
    assert!(!a.same_buffer(&b));
}

#[test]
fn derefs_to_str() {
    let text = SourceText::from("abc");
    assert_eq!(text.len(), 3);
    assert!(text.starts_with("ab"));
}

#[test]
fn debug_is_truncated() {
    let text = SourceText::from("x".repeat(100));
    let dbg = format!("{text:?}");
    assert!(dbg.contains("100 bytes"));
    assert!(dbg.len() < 100);
}
