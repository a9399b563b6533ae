//! Character classification used at token boundaries

/// First codepoint treated as an ideograph by default (U+4E00)
pub const IDEOGRAPH_FIRST: u32 = 19968;

/// Last codepoint treated as an ideograph by default
///
/// This reaches well past the CJK Unified Ideographs block into the
/// supplementary planes. Kept as is; narrow it through
/// [`IdeographRange::new`] if a tighter range is wanted.
pub const IDEOGRAPH_LAST: u32 = 171941;

/// Classification of a single input codepoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// `\r` or `\n`, always skipped
    LineDelimiter,
    /// Any other whitespace
    Whitespace,
    /// `a-z` or `A-Z`
    AsciiLetter,
    /// `0-9`
    Digit,
    /// Codepoint inside the configured ideograph range
    Ideograph,
    /// Anything else
    Other,
}

/// Closed interval of codepoints that self-tokenize when not in the dictionary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdeographRange {
    first: u32,
    last: u32,
}

impl IdeographRange {
    /// Create a range; returns `None` when `first > last`
    pub fn new(first: u32, last: u32) -> Option<Self> {
        (first <= last).then_some(Self { first, last })
    }

    /// Lower bound (inclusive)
    pub fn first(&self) -> u32 {
        self.first
    }

    /// Upper bound (inclusive)
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Whether `ch` falls inside the range
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        (self.first..=self.last).contains(&(ch as u32))
    }
}

impl Default for IdeographRange {
    fn default() -> Self {
        Self {
            first: IDEOGRAPH_FIRST,
            last: IDEOGRAPH_LAST,
        }
    }
}

/// Classifier bound to an ideograph range
#[derive(Clone, Copy, Debug, Default)]
pub struct Classifier {
    ideographs: IdeographRange,
}

impl Classifier {
    /// Create a classifier for the given ideograph range
    pub fn new(ideographs: IdeographRange) -> Self {
        Self { ideographs }
    }

    /// Classify a codepoint
    pub fn classify(&self, ch: char) -> CharClass {
        match ch {
            '\r' | '\n' => CharClass::LineDelimiter,
            'a'..='z' | 'A'..='Z' => CharClass::AsciiLetter,
            '0'..='9' => CharClass::Digit,
            c if c.is_whitespace() => CharClass::Whitespace,
            c if self.ideographs.contains(c) => CharClass::Ideograph,
            _ => CharClass::Other,
        }
    }

    /// Whether `ch` is an ideograph under this classifier
    #[inline]
    pub fn is_ideograph(&self, ch: char) -> bool {
        self.ideographs.contains(ch)
    }
}

/// `\r` or `\n`
#[inline]
pub fn is_line_delimiter(ch: char) -> bool {
    matches!(ch, '\r' | '\n')
}

/// `a-z` or `A-Z`
#[inline]
pub fn is_ascii_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// `0-9`
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// True for an empty or whitespace-only sequence
pub fn is_blank(chars: &[char]) -> bool {
    chars.iter().all(|c| c.is_whitespace())
}

/// Lower-case a single codepoint
///
/// Codepoints whose lowercase form expands to several codepoints are left
/// unchanged, so one input codepoint always maps to one automaton step.
pub fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let classifier = Classifier::default();

        assert_eq!(classifier.classify('\n'), CharClass::LineDelimiter);
        assert_eq!(classifier.classify('\r'), CharClass::LineDelimiter);
        assert_eq!(classifier.classify(' '), CharClass::Whitespace);
        assert_eq!(classifier.classify('\u{3000}'), CharClass::Whitespace);
        assert_eq!(classifier.classify('Q'), CharClass::AsciiLetter);
        assert_eq!(classifier.classify('7'), CharClass::Digit);
        assert_eq!(classifier.classify('中'), CharClass::Ideograph);
        assert_eq!(classifier.classify('-'), CharClass::Other);
        assert_eq!(classifier.classify('é'), CharClass::Other);
        // Fullwidth forms sit inside the default ideograph range.
        assert_eq!(classifier.classify('３'), CharClass::Ideograph);
        assert_eq!(classifier.classify('，'), CharClass::Ideograph);
    }

    #[test]
    fn test_default_range_bounds() {
        let range = IdeographRange::default();
        assert_eq!(range.first(), 19968);
        assert_eq!(range.last(), 171941);
        assert!(range.contains('\u{4E00}'));
        assert!(!range.contains('\u{4DFF}'));
        assert!(range.contains('\u{29FA5}'));
        assert!(!range.contains('\u{29FA6}'));
        // Hangul syllables sit inside the wide default range.
        assert!(range.contains('한'));
    }

    #[test]
    fn test_custom_range() {
        assert!(IdeographRange::new(10, 5).is_none());

        let narrow = IdeographRange::new(0x4E00, 0x9FFF).unwrap();
        let classifier = Classifier::new(narrow);
        assert_eq!(classifier.classify('中'), CharClass::Ideograph);
        assert_eq!(classifier.classify('한'), CharClass::Other);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&[]));
        assert!(is_blank(&[' ', '\t']));
        assert!(!is_blank(&[' ', 'a']));
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case('A'), 'a');
        assert_eq!(fold_case('中'), '中');
        assert_eq!(fold_case('Ä'), 'ä');
        // 'İ' lower-cases to two codepoints and is kept as is.
        assert_eq!(fold_case('İ'), 'İ');
    }
}
