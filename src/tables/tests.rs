use std::collections::HashMap;
use std::convert::TryFrom;

use crate::tables::code_map::{compile, compile_lines, CompiledTable, TableCompiler};
use crate::tables::errors::ParseFailure;
use crate::tables::record::{parse_line, EmojiRecord};

const GRINNING: &str = "1f600 ; fully-qualified # 😀 grinning face";
const KEYCAP_ONE: &str = "0031 fe0f 20e3 ; fully-qualified # 1️⃣ keycap: 1";

#[test]
fn single_codepoint() {
    let record = parse_line(GRINNING).unwrap();

    assert_eq!(record.match_fragment(), r"\x{1f600}");
    assert_eq!(record.key(), "😀");
    // Only the emoji itself is cut off
    assert_eq!(record.description(), " grinning face");
}

#[test]
fn multiple_codepoints() {
    let record = parse_line(KEYCAP_ONE).unwrap();

    assert_eq!(record.match_fragment(), r"\x{0031}\x{fe0f}\x{20e3}");
    assert_eq!(record.key(), "1\u{fe0f}\u{20e3}");
    assert_eq!(record.description(), " keycap: 1");
}

#[test]
fn zwj_sequence() {
    let line = "1F469 200D 1F4BB ; fully-qualified # 👩‍💻 Woman Technologist";
    let record = parse_line(line).unwrap();

    assert_eq!(record.match_fragment(), r"\x{1f469}\x{200d}\x{1f4bb}");
    assert_eq!(record.key(), "👩\u{200d}💻");
    assert_eq!(record.description(), " woman technologist");
}

#[test]
fn lower_case() {
    let record = parse_line("1F600 ; Fully-Qualified # 😀 GRINNING Face").unwrap();

    assert_eq!(record.match_fragment(), r"\x{1f600}");
    assert_eq!(record.description(), " grinning face");
}

#[test]
fn trailing_whitespace_is_kept() {
    let record = parse_line("1f600 ; fully-qualified # 😀 grinning face  \t").unwrap();

    assert_eq!(record.description(), " grinning face  \t");
}

#[test]
fn line_without_semicolon() {
    // Everything up to the end of the line counts as codepoints
    assert_eq!(
        parse_line("1f600 # 😀 grinning face"),
        Err(ParseFailure::MalformedCodepointToken(String::from("#")))
    );
    assert_eq!(parse_line("1f600 fe0f"), Err(ParseFailure::MissingEmojiField));
}

#[test]
fn try_from_line() {
    assert_eq!(EmojiRecord::try_from(GRINNING), parse_line(GRINNING));
}

#[test]
fn empty_codepoint_field() {
    let record = parse_line(" ; fully-qualified # 😀 grinning face").unwrap();

    assert_eq!(record.match_fragment(), "");
    assert_eq!(record.key(), "😀");
}

#[test]
fn missing_emoji_field() {
    assert_eq!(parse_line("1f600 ; fully-qualified"), Err(ParseFailure::MissingEmojiField));
    assert_eq!(parse_line("1f600 ; fully-qualified #"), Err(ParseFailure::MissingEmojiField));
    assert_eq!(parse_line("1f600 ; fully-qualified #😀"), Err(ParseFailure::MissingEmojiField));
    // Two spaces leave an empty emoji token
    assert_eq!(parse_line("1f600 ; fully-qualified #  😀 grinning face"), Err(ParseFailure::MissingEmojiField));
    assert_eq!(parse_line(""), Err(ParseFailure::MissingEmojiField));
}

#[test]
fn malformed_codepoints() {
    assert_eq!(
        parse_line("1f60g ; fully-qualified # 😀 grinning face"),
        Err(ParseFailure::MalformedCodepointToken(String::from("1f60g")))
    );
    assert_eq!(
        parse_line("0x1f600 ; fully-qualified # 😀 grinning face"),
        Err(ParseFailure::MalformedCodepointToken(String::from("0x1f600")))
    );
    // Comments of the raw Unicode files don't make it through either
    assert_eq!(
        parse_line("# group: Smileys & Emotion"),
        Err(ParseFailure::MalformedCodepointToken(String::from("#")))
    );
}

#[test]
fn description_uses_first_occurrence() {
    // The first codepoint of the emoji already appears in front of it,
    // so the description is cut too early.
    let record = parse_line("1f600 ; fully-qualified #😀 😀 grinning face").unwrap();

    assert_eq!(record.key(), "😀");
    assert_eq!(record.description(), " 😀 grinning face");
}

#[test]
fn description_out_of_bounds() {
    // `😀` is found inside the first token, but the emoji is one byte longer than
    // what follows it there, which ends up in the middle of `é`
    assert_eq!(
        parse_line("1f600 0061 ; fully-qualified #x😀é 😀a grinning face"),
        Err(ParseFailure::DescriptionOutOfBounds)
    );
}

#[test]
fn pattern_joining() {
    let table = compile(vec![
        EmojiRecord::new("A", "a", ""),
        EmojiRecord::new("B", "b", ""),
    ]);
    assert_eq!(table.pattern(), "A|B");

    let table = compile(vec![
        EmojiRecord::new("A", "a", ""),
        EmojiRecord::new("", "empty", ""),
        EmojiRecord::new("B", "b", ""),
    ]);
    assert_eq!(table.pattern(), "A||B");

    let table = compile(vec![
        EmojiRecord::new("", "empty", ""),
        EmojiRecord::new("B", "b", ""),
    ]);
    assert_eq!(table.pattern(), "|B");
}

#[test]
fn duplicate_keys() {
    let table = compile(vec![
        EmojiRecord::new("A", "😀", "a"),
        EmojiRecord::new("B", "😀", "b"),
    ]);

    assert_eq!(table.code_map().get("😀").map(String::as_str), Some("b"));
    assert_eq!(table.len(), 1);
    // Both records still end up in the pattern
    assert_eq!(table.pattern(), "A|B");
}

#[test]
fn skip_malformed_lines() {
    let with_malformed = compile_lines(vec![
        GRINNING,
        "1f603 ; fully-qualified",
        "this line has no emoji at all",
        KEYCAP_ONE,
    ]);
    let without = compile_lines(vec![GRINNING, KEYCAP_ONE]);

    assert_eq!(with_malformed, without);
    assert_eq!(with_malformed.pattern(), r"\x{1f600}|\x{0031}\x{fe0f}\x{20e3}");
    assert_eq!(with_malformed.len(), 2);
}

#[test]
fn empty_input() {
    let table = compile_lines(Vec::<String>::new());

    assert_eq!(table.pattern(), "");
    assert!(table.is_empty());
    assert_eq!(table, CompiledTable::default());
}

#[test]
fn compiler_counts() {
    let mut compiler = TableCompiler::new();

    assert!(compiler.push_line(GRINNING).is_ok());
    assert_eq!(compiler.push_line("nope"), Err(ParseFailure::MalformedCodepointToken(String::from("nope"))));
    assert!(compiler.push_line(KEYCAP_ONE).is_ok());

    assert_eq!(compiler.records(), 2);
    assert_eq!(compiler.skipped(), 1);

    let (pattern, code_map): (String, HashMap<String, String>) = compiler.finish().into();
    assert_eq!(pattern, r"\x{1f600}|\x{0031}\x{fe0f}\x{20e3}");
    assert_eq!(code_map.get("😀").map(String::as_str), Some(" grinning face"));
}

#[test]
fn from_reader_skips_comments() {
    let data = "\
# subgroup: face-smiling

1F600 ; fully-qualified # 😀 grinning face
  # another comment
0031 FE0F 20E3 ; fully-qualified # 1️⃣ keycap: 1
";
    let table = CompiledTable::from_reader(data.as_bytes()).unwrap();

    assert_eq!(table, compile_lines(vec![GRINNING, KEYCAP_ONE]));
}

#[test]
fn from_reader_skips_invalid_utf8() {
    let mut data = Vec::new();
    data.extend_from_slice(GRINNING.as_bytes());
    data.extend_from_slice(b"\n1f603 ; fully-qualified # \xff grinning face with big eyes\r\n");
    data.extend_from_slice(KEYCAP_ONE.as_bytes());
    data.extend_from_slice(b"\r\n");

    let table = CompiledTable::from_reader(data.as_slice()).unwrap();

    assert_eq!(table, compile_lines(vec![GRINNING, KEYCAP_ONE]));
}

#[test]
fn pattern_matches_emojis() {
    let table = compile_lines(vec![
        GRINNING,
        KEYCAP_ONE,
        "1f469 200d 1f4bb ; fully-qualified # 👩‍💻 woman technologist",
    ]);
    let regex = table.regex().unwrap();

    assert!(regex.is_match("😀"));
    assert!(regex.is_match("I am a 👩\u{200d}💻!"));
    assert_eq!(regex.find("x1\u{fe0f}\u{20e3}").map(|found| found.as_str()), Some("1\u{fe0f}\u{20e3}"));
    assert!(!regex.is_match("no emoji here"));
}
