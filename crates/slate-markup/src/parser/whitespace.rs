//! Whitespace-only text handling for a finished child list.

use slate_ast::Node;

use crate::options::WhitespaceMode;

impl WhitespaceMode {
    /// Apply the policy to one child list (the root's or an element's).
    pub(crate) fn apply(self, children: &mut Vec<Node>) {
        if self == Self::Preserve || children.is_empty() {
            return;
        }

        let last = children.len() - 1;
        let mut index = 0;
        children.retain(|child| {
            let position = index;
            index += 1;
            !child.as_text().is_some_and(|text| {
                text.is_whitespace_only()
                    && (position == 0 || position == last || text.value.contains('\n'))
            })
        });
    }
}
