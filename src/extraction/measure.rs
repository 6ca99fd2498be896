pub trait LengthMeasure {
    fn length(&self, word: &str) -> usize;
}

/// Length in Unicode scalar values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharLength;

impl LengthMeasure for CharLength {
    fn length(&self, word: &str) -> usize {
        word.chars().count()
    }
}

/// Length in UTF-16 code units.
/// Characters outside the Basic Multilingual Plane count twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Length;

impl LengthMeasure for Utf16Length {
    fn length(&self, word: &str) -> usize {
        word.encode_utf16().count()
    }
}
