//! Turning `class="stN"` references into inline `style` attributes.
//!
//! This is plain substring replacement, not attribute-aware rewriting:
//! `class="st0 st1"`, `class='st0'` or `class = "st0"` are left alone, and an
//! element that already has a `style` attribute ends up with two.

use tracing::debug;

use crate::extract::StyleRules;

/// Result of inlining class references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub svg: String,
    /// Number of `class="..."` occurrences that were replaced.
    pub replacements: usize,
}

/// Replace every literal `class="<name>"` with `style="<body>"`, one rule at a
/// time in declaration order.
pub fn inline_classes(svg: &str, rules: &StyleRules) -> Rewritten {
    let mut out = svg.to_string();
    let mut replacements = 0;

    for (name, body) in rules {
        let pattern = format!("class=\"{}\"", name);
        let count = out.matches(&pattern).count();
        if count == 0 {
            continue;
        }

        debug!(class = %name, count, "inlining class");
        out = out.replace(&pattern, &format!("style=\"{}\"", body));
        replacements += count;
    }

    Rewritten {
        svg: out,
        replacements,
    }
}
