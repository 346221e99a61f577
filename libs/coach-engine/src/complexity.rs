// Coarse complexity estimation from detected tags
use coach_common::types::{ComplexityLabel, Tag, TagSet};

/// Map a tag set to a complexity label.
///
/// Fixed-priority decision list, first match wins: nested loops dominate,
/// then loops (hashmap-assisted or plain, both linear), then recursion,
/// then sorting. Anything else is constant. Total over every tag set.
pub fn estimate(tags: &TagSet) -> ComplexityLabel {
    if tags.contains(&Tag::NestedLoop) {
        ComplexityLabel::Quadratic
    } else if tags.contains(&Tag::Loop) {
        ComplexityLabel::Linear
    } else if tags.contains(&Tag::Recursion) {
        ComplexityLabel::LinearToExponential
    } else if tags.contains(&Tag::Sorting) {
        ComplexityLabel::Linearithmic
    } else {
        ComplexityLabel::Constant
    }
}
