/// Stack of list indents seen so far in the current list.
///
/// An indent deeper than the top pushes a new level; an indent at or below
/// an existing entry pops back to it. Levels are the stack depth, so item
/// markers never need to be consistent.
#[derive(Debug, Default, Clone)]
pub struct IndentStack(Vec<usize>);

impl IndentStack {
    /// Returns the list level (0 = outermost) for an item at `indent` columns.
    pub fn level_for(&mut self, indent: usize) -> u8 {
        while self.0.last().is_some_and(|&top| top > indent) {
            self.0.pop();
        }
        if self.0.last() != Some(&indent) {
            self.0.push(indent);
        }
        u8::try_from(self.0.len() - 1).unwrap_or(u8::MAX)
    }

    pub fn reset(&mut self) {
        self.0.clear();
    }
}
