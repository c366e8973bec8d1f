//! Resolution of a quoted prop value into one prop shape.

use slate_ast::{Prop, ValuePart};

/// Collects the fragments between a pair of quote marks.
///
/// Empty text is dropped on the way in and adjacent text is merged, so the
/// collected parts already satisfy the [`Prop::Mixed`] invariants.
#[derive(Debug, Default)]
pub(super) struct ValueBuilder {
    parts: Vec<ValuePart>,
}

impl ValueBuilder {
    pub(super) fn push_static(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(ValuePart::Static(previous)) = self.parts.last_mut() {
            previous.push_str(text);
        } else {
            self.parts.push(ValuePart::Static(text.to_string()));
        }
    }

    pub(super) fn push_slot(&mut self, slot: usize) {
        self.parts.push(ValuePart::Slot(slot));
    }

    /// - no parts: `Static` with an empty value
    /// - one text part: `Static`
    /// - one slot: `Expression`
    /// - anything longer: `Mixed`
    pub(super) fn finish(mut self, name: String, quote: char) -> Prop {
        if self.parts.len() > 1 {
            return Prop::Mixed {
                name,
                parts: self.parts,
                quote,
            };
        }
        match self.parts.pop() {
            None => Prop::Static {
                name,
                value: String::new(),
                quote,
            },
            Some(ValuePart::Static(value)) => Prop::Static { name, value, quote },
            Some(ValuePart::Slot(slot)) => Prop::Expression { name, slot },
        }
    }
}
