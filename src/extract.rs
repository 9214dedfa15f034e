//! Locating the `<style>` block and pulling class rules out of it.
//!
//! Only rules of the shape `.st<digits>{...}` are recognized, which is what
//! Illustrator-style exports emit. Anything else in the block is ignored.

use std::ops::Range;
use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, trace};

/// Class name -> raw declaration body, in the order the classes were declared.
pub type StyleRules = IndexMap<String, String>;

/// The first `<style>...</style>` region of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBlock<'a> {
    /// Text between the opening and closing tags.
    pub css: &'a str,
    /// Byte range from `<style` through `</style>`.
    pub range: Range<usize>,
    /// `range` extended over the whitespace that follows the closing tag.
    pub removal: Range<usize>,
}

pub(crate) fn style_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<style[^>]*>(.*?)</style>\s*").unwrap())
}

fn class_rule_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.st(\d+)\{([^}]*)\}").unwrap())
}

/// Find the first style block in `svg`.
///
/// Only this block's rules are inlined, though removal deletes every block
/// matched by the same pattern.
pub fn find_style_block(svg: &str) -> Option<StyleBlock<'_>> {
    let caps = style_block_regex().captures(svg)?;
    let whole = caps.get(0)?;
    let css = caps.get(1)?;

    let block = StyleBlock {
        css: css.as_str(),
        range: whole.start()..css.end() + "</style>".len(),
        removal: whole.range(),
    };
    trace!(range = ?block.range, removal = ?block.removal, "found style block");
    Some(block)
}

/// Parse the `.stN{...}` rules of a stylesheet body.
pub fn parse_class_rules(css: &str) -> StyleRules {
    let mut rules = StyleRules::new();

    for caps in class_rule_regex().captures_iter(css) {
        let name = format!("st{}", &caps[1]);
        let body = caps[2].to_string();
        debug!(class = %name, declarations = %body, "extracted class rule");
        // IndexMap keeps the first position of a redefined class
        rules.insert(name, body);
    }

    rules
}

/// Extract the class rules declared in the document's first style block.
pub fn extract_style_rules(svg: &str) -> StyleRules {
    match find_style_block(svg) {
        Some(block) => parse_class_rules(block.css),
        None => StyleRules::new(),
    }
}
