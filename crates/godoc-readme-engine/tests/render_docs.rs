use godoc_readme_engine::render_markdown;
use pretty_assertions::assert_eq;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

#[test]
fn empty_input_renders_empty_document() {
    assert_eq!(render_markdown(""), "");
}

#[test]
fn numbered_list_indents_continuation_paragraphs() {
    let input = "Install\n\n1. Apple\n\nGood fruit.\n\n2. Pear\n\nAlso good.\n";
    let expected = "Install\n\n1. Apple\n\n    Good fruit.\n\n2. Pear\n\n    Also good.\n\n";
    assert_eq!(render_markdown(input), expected);
}

#[test]
fn terminator_resets_list_and_is_dropped() {
    let input = "1. X\n\nY\n\n...\n\nZ\n";
    let output = render_markdown(input);
    assert_eq!(output, "1. X\n\n    Y\n\n\n\nZ\n\n");
    assert!(!output.contains("..."));
}

#[test]
fn bullet_list_indents_continuation_paragraphs() {
    let input = "* First point\n\nSupporting detail.\n\n* Second point\n";
    let expected = "* First point\n\n    Supporting detail.\n\n* Second point\n\n";
    assert_eq!(render_markdown(input), expected);
}

#[test]
fn list_state_does_not_cross_a_heading() {
    let input = "1. One\n\nCont.\n\nNext Steps\n\nAfter heading.\n";
    let expected = "1. One\n\n    Cont.\n\n## Next Steps\n\nAfter heading.\n\n";
    assert_eq!(render_markdown(input), expected);
}

#[test]
fn heading_and_go_fence() {
    let input =
        "Intro for the package.\n\nUsage\n\nRun this:\n\n\tx := New()\n\tx.Run()\n\nDone.\n";
    let expected = "Intro for the package.\n\n## Usage\n\nRun this:\n\n\
                    ```go\nx := New()\nx.Run()\n```\n\nDone.\n\n";
    assert_eq!(render_markdown(input), expected);
}

#[test]
fn package_keyword_forces_go_tag() {
    let input = "Example:\n\n\tpackage main\n";
    assert_eq!(render_markdown(input), "Example:\n\n```go\npackage main\n```\n\n");
}

#[test]
fn unrecognized_code_gets_untagged_fence() {
    let input = "Sample:\n\n\tsome opaque output text\n";
    assert_eq!(
        render_markdown(input),
        "Sample:\n\n```\nsome opaque output text\n```\n\n"
    );
}

#[test]
fn document_of_only_preformatted_text() {
    let input = "\tfmt.Println(1)\n";
    assert_eq!(render_markdown(input), "```go\nfmt.Println(1)\n```\n\n");
}

#[test]
fn fully_indented_document_stays_a_code_fence() {
    // The shared indent must not be read as document-level indentation and
    // stripped before segmentation.
    let input = "\tfoo()\n\tbar()\n";
    assert_eq!(render_markdown(input), "```\nfoo()\nbar()\n```\n\n");
}

#[test]
fn fence_tags_are_stable_across_renders() {
    let input = "Sample:\n\n\tdef f():\n\t    return 1\n";
    assert_eq!(render_markdown(input), render_markdown(input));
}

/// The emitted Markdown must actually nest continuation paragraphs under
/// their list item once parsed by a CommonMark implementation.
#[test]
fn continuation_paragraph_parses_inside_list_item() {
    let output = render_markdown("1. Apple\n\nGood fruit.\n");

    let mut item_depth = 0usize;
    let mut found_inside_item = false;
    for event in Parser::new(&output) {
        match event {
            Event::Start(Tag::Item) => item_depth += 1,
            Event::End(TagEnd::Item) => item_depth -= 1,
            Event::Text(text) => {
                if text.contains("Good fruit") && item_depth > 0 {
                    found_inside_item = true;
                }
            }
            _ => {}
        }
    }
    assert!(found_inside_item, "continuation did not nest: {output:?}");
}

#[test]
fn readable_snapshot_of_a_full_document() {
    let input = "Autoreadme generates READMEs.\n\n\
                 Lists and Bullets\n\n\
                 1. Apple\n\nAn apple a day.\n\n2. Pear\n\nNot a pair.\n\n...\n\n\
                 This trailing paragraph stands alone.\n\n\
                 Example:\n\n\tfmt.Println(\"hi\")\n";
    insta::assert_snapshot!(render_markdown(input).trim_end(), @r#"
    Autoreadme generates READMEs.

    ## Lists and Bullets

    1. Apple

        An apple a day.

    2. Pear

        Not a pair.



    This trailing paragraph stands alone.

    Example:

    ```go
    fmt.Println("hi")
    ```
    "#);
}
