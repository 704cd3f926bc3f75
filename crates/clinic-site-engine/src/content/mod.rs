//! # Article Content Blocks
//!
//! Turns the flat string arrays translators edit into typed blocks a
//! renderer can style: headings, paragraphs and bulleted lists.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (trimmed text, blank status, bullet item)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` keeps an open list
//!    buffer and emits `ContentBlock`s in input order
//!
//! ## Modules
//!
//! - **`types`**: The `ContentBlock` enum
//! - **`kinds`**: Bullet glyph knowledge and the `HeadingPolicy` seam
//! - **`classify`**: `ContentLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blank lines produce nothing
//! - Each run of bullet lines becomes exactly one `List`, placed where the run began
//! - Block text in order reproduces the trimmed non-empty input, glyphs stripped

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;


pub use builder::BlockBuilder;
pub use classify::{ContentLineClassifier, LineClass};
pub use kinds::{Bullet, HeadingPolicy, PunctuationHeadingPolicy};
pub use types::ContentBlock;

/// Classifies article lines with the default punctuation heading policy.
pub fn classify_content<S: AsRef<str>>(lines: &[S]) -> Vec<ContentBlock> {
    classify_content_with(lines, &PunctuationHeadingPolicy)
}

/// Classifies article lines with a caller-supplied heading policy.
pub fn classify_content_with<S, P>(lines: &[S], policy: &P) -> Vec<ContentBlock>
where
    S: AsRef<str>,
    P: HeadingPolicy + ?Sized,
{
    let classifier = ContentLineClassifier;
    let mut builder = BlockBuilder::new(policy);

    for line in lines {
        let lc = classifier.classify(line.as_ref());
        builder.push(&lc);
    }

    builder.finish()
}

/// Expands blocks back into translator-style lines.
///
/// List items are re-prefixed with the bullet glyph, so classifying the
/// result yields the same blocks.
pub fn flatten_blocks(blocks: &[ContentBlock]) -> Vec<String> {
    blocks
        .iter()
        .flat_map(|block| match block {
            ContentBlock::Heading(text) | ContentBlock::Paragraph(text) => vec![text.clone()],
            ContentBlock::List(items) => items.iter().map(|item| Bullet::line(item)).collect(),
        })
        .collect()
}
