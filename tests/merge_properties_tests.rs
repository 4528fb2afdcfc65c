//! Properties of the instructions merge, exercised through the library API

use aide::instructions::{MarkerSyntax, MergeStatus, default_template, extract_blocks, merge};

const OVERVIEW_ONLY: &str =
    "<!-- AIDE:BEGIN Project overview -->\nMy notes\n<!-- AIDE:END Project overview -->\n";

fn samples() -> Vec<String> {
    vec![
        OVERVIEW_ONLY.to_string(),
        "# Intro\n<!-- AIDE:BEGIN Coding conventions -->\nmine\n<!-- AIDE:END Coding conventions -->"
            .to_string(),
        "<!-- AIDE:BEGIN Unrelated -->\n<!-- AIDE:END Unrelated -->\n\n\n\n".to_string(),
        default_template().to_string(),
    ]
}

#[test]
fn create_when_absent() {
    for template in [default_template(), "", "plain text\n"] {
        let outcome = merge(None, template);
        assert_eq!(outcome.into_parts(), (template.to_string(), true));
    }
}

#[test]
fn unmarked_text_is_never_rewritten() {
    for text in ["", "\n", "# Notes\n", "<!-- AIDE:BEGIN only begin -->"] {
        let outcome = merge(Some(text), default_template());
        assert_eq!(outcome.status, MergeStatus::Unmanaged);
        assert_eq!(outcome.into_parts(), (text.to_string(), false));
    }
}

#[test]
fn merge_is_idempotent() {
    for text in samples() {
        let (first, _) = merge(Some(&text), default_template()).into_parts();
        let (second, changed) = merge(Some(&first), default_template()).into_parts();
        assert_eq!(second, first, "second merge changed output for {text:?}");
        assert!(!changed);
    }
}

#[test]
fn existing_blocks_are_preserved_verbatim() {
    let syntax = MarkerSyntax::default();
    for text in samples() {
        let (merged, _) = merge(Some(&text), default_template()).into_parts();
        for block in extract_blocks(&text, &syntax) {
            assert!(
                merged.contains(&block.content),
                "block {:?} lost from {text:?}",
                block.name
            );
        }
    }
}

#[test]
fn every_template_block_is_present_after_merge() {
    let syntax = MarkerSyntax::default();
    for text in samples() {
        let (merged, _) = merge(Some(&text), default_template()).into_parts();
        for block in extract_blocks(default_template(), &syntax) {
            assert!(syntax.contains_block(&merged, &block.name));
        }
    }
}

#[test]
fn concrete_scenario() {
    let outcome = merge(Some(OVERVIEW_ONLY), default_template());
    let blocks = extract_blocks(default_template(), &MarkerSyntax::default());

    let expected = format!(
        "{}\n\n{}\n\n{}\n",
        OVERVIEW_ONLY.trim_end(),
        blocks[1].content,
        blocks[2].content
    );
    assert_eq!(outcome.text, expected);
    assert!(outcome.changed);
}
