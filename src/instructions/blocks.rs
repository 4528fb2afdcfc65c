//! Extraction of named blocks from marker-delimited text

use super::markers::MarkerSyntax;

/// A named, delimited region of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block name as written in its markers
    pub name: String,
    /// Full region from the begin marker through the matching end marker
    pub content: String,
}

/// Extract all blocks from `text`, in the order they appear.
///
/// The first end marker carrying the same name closes a block. A begin marker
/// without a matching end marker yields nothing, and scanning resumes right
/// after it so later blocks are still found. Repeated names are returned
/// once per occurrence.
pub fn extract_blocks(text: &str, syntax: &MarkerSyntax) -> Vec<Block> {
    let mut blocks = Vec::new();
    if syntax.begin.is_empty() || syntax.close.is_empty() {
        return blocks;
    }
    let step = syntax.begin.chars().next().map_or(1, char::len_utf8);
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(&syntax.begin) {
        let start = cursor + offset;
        match block_at(text, start, syntax) {
            Some(block) => {
                cursor = start + block.content.len();
                blocks.push(block);
            }
            None => cursor = start + step,
        }
    }

    blocks
}

/// Names of all blocks in `text`, in order
pub fn block_names(text: &str, syntax: &MarkerSyntax) -> Vec<String> {
    extract_blocks(text, syntax)
        .into_iter()
        .map(|block| block.name)
        .collect()
}

/// Try to read a block whose begin marker starts at `start`
fn block_at(text: &str, start: usize, syntax: &MarkerSyntax) -> Option<Block> {
    let name_start = start + syntax.begin.len();
    let name_len = text[name_start..].find(&syntax.close)?;
    let name = &text[name_start..name_start + name_len];
    if !syntax.is_valid_name(name) {
        return None;
    }

    let body_start = name_start + name_len + syntax.close.len();
    let end_marker = syntax.end_marker(name);
    let end = body_start + text[body_start..].find(&end_marker)? + end_marker.len();

    Some(Block {
        name: name.to_string(),
        content: text[start..end].to_string(),
    })
}
