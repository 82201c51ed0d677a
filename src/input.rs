use std::fmt;
use std::hash::{Hash, Hasher};

/// Immutable view over the unconsumed remainder of a text
///
/// An input is a source string plus a byte offset into it. Advancing never
/// mutates: `tail()` returns a new input one code point further along, so any
/// copy taken before a parse attempt still points at the original position.
/// This is what makes backtracking in `or_else` free.
///
/// Two inputs are equal when their remaining text is equal, regardless of
/// where in their source they start.
#[derive(Debug, Clone, Copy)]
pub struct Input<'code> {
    source: &'code str,
    /// Byte offset of the first unconsumed code point, always on a char boundary
    offset: usize,
}

impl<'code> Input<'code> {
    pub fn new(source: &'code str) -> Self {
        Input { source, offset: 0 }
    }

    /// An input with nothing left to consume
    pub fn empty() -> Self {
        Input::new("")
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// First unconsumed code point
    ///
    /// # Panics
    ///
    /// Panics if the input is empty. Check `is_empty()` first.
    pub fn head(&self) -> char {
        match self.as_str().chars().next() {
            Some(ch) => ch,
            None => panic!("Input::head called on empty input"),
        }
    }

    /// The input after the first code point
    ///
    /// # Panics
    ///
    /// Panics if the input is empty. Check `is_empty()` first.
    pub fn tail(&self) -> Self {
        let head = self.head();
        Input {
            source: self.source,
            offset: self.offset + head.len_utf8(),
        }
    }

    /// The remaining, unconsumed text
    pub fn as_str(&self) -> &'code str {
        &self.source[self.offset..]
    }

    /// The whole text this input was created from
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Number of bytes consumed from the source so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of code points left
    pub fn len(&self) -> usize {
        self.as_str().chars().count()
    }

    /// Human readable location of the first unconsumed code point
    pub fn loc(&self) -> CodeLoc {
        let consumed = &self.source[..self.offset];
        let mut line = 1;
        let mut line_offset = 0;
        let mut position = 0;

        for ch in consumed.chars() {
            position += 1;
            if ch == '\n' {
                line += 1;
                line_offset = 0;
            } else {
                line_offset += 1;
            }
        }

        CodeLoc {
            line,
            line_offset,
            position,
        }
    }
}

impl Default for Input<'_> {
    fn default() -> Self {
        Input::empty()
    }
}

impl PartialEq for Input<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Input<'_> {}

impl Hash for Input<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<'code> From<&'code str> for Input<'code> {
    fn from(source: &'code str) -> Self {
        Input::new(source)
    }
}

/// An absent source is treated as an empty one
impl<'code> From<Option<&'code str>> for Input<'code> {
    fn from(source: Option<&'code str>) -> Self {
        source.map_or_else(Input::empty, Input::new)
    }
}

/// Location of a code point within its source
///
/// We report the code point offset within the line rather than a display
/// column, since the rendered column depends on tab width and grapheme
/// clustering which this crate knows nothing about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeLoc {
    /// 1-based line number
    pub line: usize,
    /// Code points since the start of the line
    pub line_offset: usize,
    /// Code points since the start of the source
    pub position: usize,
}

impl fmt::Display for CodeLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, offset {} (absolute position: {})",
            self.line, self.line_offset, self.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(Input::empty().is_empty());
        assert!(Input::new("").is_empty());
        assert!(Input::from(None).is_empty());
        assert!(Input::default().is_empty());
        assert!(!Input::new("a").is_empty());
    }

    #[test]
    fn test_head_and_tail() {
        let input = Input::new("ABC");

        assert_eq!(input.head(), 'A');
        assert_eq!(input.tail().head(), 'B');
        assert_eq!(input.tail().as_str(), "BC");
        assert!(input.tail().tail().tail().is_empty());
    }

    #[test]
    fn test_tail_does_not_mutate() {
        let input = Input::new("xy");
        let saved = input;

        let advanced = input.tail();

        assert_eq!(input.as_str(), "xy");
        assert_eq!(saved.head(), 'x');
        assert_eq!(advanced.head(), 'y');
    }

    #[test]
    fn test_head_is_a_full_code_point() {
        // U+1F600 is outside the BMP and takes 4 bytes in UTF-8
        let input = Input::new("😀å!");

        assert_eq!(input.head(), '😀');
        assert_eq!(input.head() as u32, 0x1F600);
        assert_eq!(input.tail().head(), 'å');
        assert_eq!(input.tail().tail().as_str(), "!");
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_equality_is_by_remaining_content() {
        let advanced = Input::new("ABC").tail();

        assert_eq!(advanced, Input::new("BC"));
        assert_ne!(advanced, Input::new("ABC"));
        assert_eq!(Input::new("A").tail(), Input::empty());
    }

    #[test]
    #[should_panic(expected = "empty input")]
    fn test_head_on_empty_panics() {
        Input::empty().head();
    }

    #[test]
    #[should_panic(expected = "empty input")]
    fn test_tail_on_empty_panics() {
        Input::new("").tail();
    }

    #[test]
    fn test_loc_single_line() {
        let input = Input::new("hello").tail().tail();
        let loc = input.loc();

        assert_eq!(loc.line, 1);
        assert_eq!(loc.line_offset, 2);
        assert_eq!(loc.position, 2);
        assert_eq!(input.offset(), 2);
    }

    #[test]
    fn test_loc_after_newline() {
        let mut input = Input::new("ab\nçd");
        for _ in 0..4 {
            input = input.tail();
        }
        let loc = input.loc();

        assert_eq!(input.head(), 'd');
        assert_eq!(loc.line, 2);
        assert_eq!(loc.line_offset, 1);
        assert_eq!(loc.position, 4);
        // 'ç' is two bytes
        assert_eq!(input.offset(), 5);
        assert!(loc.to_string().contains("line 2"));
    }
}
