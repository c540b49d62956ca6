use notelens_core::{find_front_matter_range, split_front_matter_and_body};

#[test]
fn splits_leading_yaml_block_and_trims_body() {
    let split = split_front_matter_and_body("---\ntitle: X\n---\nBody text");
    assert_eq!(split.front_matter, "---\ntitle: X\n---");
    assert_eq!(split.body, "Body text");
    assert!(split.has_front_matter());
}

#[test]
fn text_without_front_matter_is_returned_unchanged() {
    let split = split_front_matter_and_body("Body only, no front matter");
    assert_eq!(split.front_matter, "");
    assert_eq!(split.body, "Body only, no front matter");
    assert!(!split.has_front_matter());
}

#[test]
fn no_match_branch_does_not_trim() {
    let split = split_front_matter_and_body("  padded body \n\n");
    assert_eq!(split.body, "  padded body \n\n");
}

#[test]
fn delimiters_after_offset_zero_are_not_front_matter() {
    let text = "some text\n---\nnot-front-matter\n---";
    let split = split_front_matter_and_body(text);
    assert_eq!(split.front_matter, "");
    assert_eq!(split.body, text);
    assert_eq!(find_front_matter_range(" ---\na: 1\n---"), None);
    assert_eq!(find_front_matter_range("\n---\na: 1\n---"), None);
}

#[test]
fn multi_line_block_with_trailing_whitespace_body() {
    let text = "---\ntitle: Trip\ntags:\n  - travel\n  - food\n---\n\n\n  # Day one\n\n";
    let split = split_front_matter_and_body(text);
    assert_eq!(
        split.front_matter,
        "---\ntitle: Trip\ntags:\n  - travel\n  - food\n---"
    );
    assert_eq!(split.body, "# Day one");
}

#[test]
fn block_without_body_yields_empty_body() {
    let split = split_front_matter_and_body("---\na: 1\n---");
    assert_eq!(split.front_matter, "---\na: 1\n---");
    assert_eq!(split.body, "");
}

#[test]
fn unterminated_block_is_not_front_matter() {
    let text = "---\ntitle: draft\nno closing line";
    assert_eq!(find_front_matter_range(text), None);
    assert_eq!(split_front_matter_and_body(text).body, text);
}

#[test]
fn range_is_byte_based_for_multibyte_text() {
    let text = "---\n标题: 笔记\n---\n正文";
    let range = find_front_matter_range(text).expect("front matter should match");
    assert_eq!(range.start, 0);
    assert_eq!(&text[range.clone()], "---\n标题: 笔记\n---");
    assert_eq!(text[range.end..].trim(), "正文");
}

#[test]
fn long_hyphen_runs_do_not_blow_up() {
    let mut text = String::from("---\n");
    text.push_str(&"-".repeat(200_000));
    assert_eq!(find_front_matter_range(&text), None);
}

#[test]
fn split_is_idempotent() {
    let text = "---\na: 1\n---\nbody";
    assert_eq!(
        split_front_matter_and_body(text),
        split_front_matter_and_body(text)
    );
}
