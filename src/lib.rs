//! unstyle - Inline SVG class styles
//!
//! unstyle moves the `.stN{...}` rules of an SVG's `<style>` block onto the
//! elements that reference them, then drops the block. The result renders the
//! same in pipelines that ignore or strip `<style>` elements.
//!
//! Matching is deliberately textual: only `class="stN"` written exactly that
//! way is rewritten, and no XML or CSS is parsed.

mod error;
mod extract;
mod file;
mod remove;
mod rewrite;

use std::path::Path;

pub use error::*;
pub use extract::*;
pub use file::*;
pub use remove::*;
pub use rewrite::*;

/// Inline class styles with default settings.
pub fn inline_styles(svg: &str) -> String {
    convert(svg, &Options::default()).svg
}

/// Run the conversion pipeline over a document.
///
/// The class mapping is taken from the original text, so it is complete
/// before the block is removed and references are rewritten.
pub fn convert(svg: &str, options: &Options) -> Conversion {
    let rules = extract_style_rules(svg);

    let (stripped, style_block_removed) = if options.remove_style_block {
        let stripped = remove_style_blocks(svg);
        let removed = stripped.len() != svg.len();
        (stripped, removed)
    } else {
        (svg.into(), false)
    };

    let (svg, replacements) = if options.inline_classes {
        let rewritten = inline_classes(&stripped, &rules);
        (rewritten.svg, rewritten.replacements)
    } else {
        (stripped.into_owned(), 0)
    };

    Conversion {
        svg,
        classes: rules.len(),
        replacements,
        style_block_removed,
    }
}

/// Read `input`, convert it, and write the result to `output`.
///
/// `input` and `output` may be the same path; the file is read completely
/// before it is overwritten.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &Options,
) -> Result<Conversion, UnstyleError> {
    let svg = read_document(input)?;
    let conversion = convert(&svg, options);
    write_document(output, &conversion.svg)?;
    Ok(conversion)
}

/// Outcome of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The rewritten document
    pub svg: String,
    /// Number of class rules found in the style block
    pub classes: usize,
    /// Number of class references replaced by inline styles
    pub replacements: usize,
    /// Whether a style block was found and deleted
    pub style_block_removed: bool,
}

/// Conversion options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Delete the `<style>` block
    pub remove_style_block: bool,
    /// Replace `class="stN"` with the rule's declarations
    pub inline_classes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            remove_style_block: true,
            inline_classes: true,
        }
    }
}
