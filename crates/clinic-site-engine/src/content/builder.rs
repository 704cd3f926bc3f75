use super::{classify::LineClass, kinds::HeadingPolicy, types::ContentBlock};

/// Builds content blocks from classified lines.
///
/// Consecutive bullet lines accumulate into one open list, which is flushed
/// as soon as a non-bullet line arrives or at end of input.
pub struct BlockBuilder<'p, P: HeadingPolicy + ?Sized> {
    policy: &'p P,
    list: Option<Vec<String>>,
    out: Vec<ContentBlock>,
}

impl<'p, P: HeadingPolicy + ?Sized> BlockBuilder<'p, P> {
    pub fn new(policy: &'p P) -> Self {
        Self {
            policy,
            list: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        // Blank lines are spacing only; they neither emit nor close a list.
        if c.is_blank {
            return;
        }

        if let Some(item) = &c.bullet_item {
            self.list.get_or_insert_with(Vec::new).push(item.clone());
            return;
        }

        self.flush_list();

        let block = if self.policy.is_heading(&c.text) {
            ContentBlock::Heading(c.text.clone())
        } else {
            ContentBlock::Paragraph(c.text.clone())
        };
        self.out.push(block);
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn flush_list(&mut self) {
        if let Some(items) = self.list.take() {
            self.out.push(ContentBlock::List(items));
        }
    }
}
