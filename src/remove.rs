//! Deleting `<style>` blocks from the document text.

use std::borrow::Cow;

use tracing::debug;

use crate::extract::style_block_regex;

/// Remove every `<style>...</style>` block and the whitespace after each.
///
/// Rules are only taken from the first block, but leaving later blocks in
/// place would make a second run pick them up. Returns the input unchanged
/// (borrowed) when there is no block.
pub fn remove_style_blocks(svg: &str) -> Cow<'_, str> {
    let out = style_block_regex().replace_all(svg, "");
    if let Cow::Owned(ref stripped) = out {
        debug!(bytes = svg.len() - stripped.len(), "removed style blocks");
    }
    out
}
