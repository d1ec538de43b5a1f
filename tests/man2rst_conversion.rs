//! Conversion tests for the man → rst pipeline
//!
//! Single macros are checked through a table of cases; the `ls.1` fixture is
//! checked end to end with a snapshot of the converted lines.

use man2rst::man2rst::document::LineOrigin;
use man2rst::man2rst::loader::DocumentLoader;
use man2rst::man2rst::transforms::standard::{MAN_TO_DOCUMENT, MAN_TO_RST};
use rstest::rstest;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn convert_lines(source: &str) -> Vec<String> {
    MAN_TO_DOCUMENT
        .run(source.to_string())
        .unwrap()
        .texts()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[rstest]
#[case::comment(".\\\" generated by hand\n", &[".. generated by hand\n"])]
#[case::title(".TH NAME 1\n", &["NAME 1\n", "======\n"])]
#[case::section(".SH DESCRIPTION\n", &["Description\n", "-----------\n"])]
#[case::bold(".B bold text\n", &["**bold text** "])]
#[case::italic(".I italic text\n", &["*italic text* "])]
#[case::tagged_paragraph(".IP item\n", &["*item* "])]
#[case::paragraph(".PP\n", &["\n"])]
#[case::escaped_dash("use \\-\\-help\n", &["use --help\n"])]
#[case::plain("plain text\n", &["plain text\n"])]
#[case::unknown_macro(".BR ls (1)\n", &[".BR ls (1)\n"])]
#[case::relative_start(".RS\n", &["\n\n"])]
#[case::relative_end(".RE\n", &["\n"])]
fn converts_single_line(#[case] source: &str, #[case] expected: &[&str]) {
    assert_eq!(convert_lines(source), expected);
}

#[rstest]
#[case::one_level(".RS\n\n", 2)]
#[case::two_levels(".RS\n.RS\n\n", 4)]
#[case::closed(".RS\n.RE\n\n", 0)]
#[case::reopened(".RS\n.RS\n.RE\n\n", 2)]
fn nested_levels_are_cumulative(#[case] source: &str, #[case] width: usize) {
    let lines = convert_lines(source);
    let blank = lines.last().unwrap();
    let expected = format!("\n{}", " ".repeat(width.saturating_sub(1)));
    assert_eq!(blank, &expected);
}

#[test]
fn converts_ls_fixture() {
    let doc = DocumentLoader::from_path(fixture_path("ls.1"))
        .unwrap()
        .document()
        .unwrap();

    insta::assert_debug_snapshot!(doc.texts(), @r###"
    [
        ".. Manual page for ls\n",
        "LS 1\n",
        "====\n",
        "Name\n",
        "----\n",
        "ls - list directory contents\n",
        "Synopsis\n",
        "--------\n",
        "**ls** ",
        "*file* ",
        "Options\n",
        "-------\n",
        "*-a* ",
        "\n\n",
        "do not ignore entries starting with .\n",
        "\n ",
        "\n",
        "See the info page.\n",
    ]
    "###);
}

#[test]
fn fixture_keeps_one_line_per_input_line() {
    let source = std::fs::read_to_string(fixture_path("ls.1")).unwrap();
    let doc = MAN_TO_DOCUMENT.run(source.clone()).unwrap();

    assert_eq!(doc.source_line_count(), source.lines().count());
    let underlines = doc
        .lines()
        .iter()
        .filter(|line| matches!(line.origin, LineOrigin::Underline(_)))
        .count();
    assert_eq!(underlines, 4);
}

#[test]
fn rendered_text_joins_emphasis_with_next_line() {
    let rst = MAN_TO_RST
        .run(".B \\-v\nprint more\n".to_string())
        .unwrap();
    assert_eq!(rst, "**-v** print more\n");
}

#[test]
fn indented_block_in_rendered_text() {
    let rst = MAN_TO_RST.run("Intro\n.RS\n\nbody\n.RE\nend\n".to_string()).unwrap();
    assert_eq!(rst, "Intro\n\n\n\n body\n\n end\n");
}
