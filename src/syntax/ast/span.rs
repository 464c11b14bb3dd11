use std::rc::Rc;

/// A location in the source text
#[derive(Debug, Clone)]
pub struct ParsedSpan {
    input: Rc<str>,
    /// # Safety
    ///
    /// Must be a valid character boundary index into `input`.
    start: usize,
    /// # Safety
    ///
    /// Must be a valid character boundary index into `input`.
    end: usize,
}

#[derive(Debug, Clone)]
pub enum Span {
    /// A location in the source text
    Parsed(ParsedSpan),
    /// For expressions constructed during normalization
    Artificial,
}

impl ParsedSpan {
    pub fn to_input(&self) -> String {
        self.input.to_string()
    }
    pub fn as_byte_range(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

impl Span {
    pub fn make(input: Rc<str>, start: usize, end: usize) -> Self {
        Span::Parsed(ParsedSpan { input, start, end })
    }

    /// Takes the union of the two spans, i.e. the range of input covered by the two spans plus any
    /// input between them. Assumes that the spans come from the same input.
    pub fn union(&self, other: &Span) -> Self {
        use std::cmp::{max, min};
        use Span::*;
        match (self, other) {
            (Parsed(x), Parsed(y)) if Rc::ptr_eq(&x.input, &y.input) => {
                Parsed(ParsedSpan {
                    input: x.input.clone(),
                    start: min(x.start, y.start),
                    end: max(x.end, y.end),
                })
            }
            _ => Span::Artificial,
        }
    }

    /// Merges two spans assumed to point to a similar thing. If only one of them points to an
    /// input location, use that one.
    pub fn merge(&self, other: &Span) -> Self {
        use Span::*;
        match (self, other) {
            (Parsed(x), _) | (_, Parsed(x)) => Parsed(x.clone()),
            (Artificial, Artificial) => Artificial,
        }
    }
}
