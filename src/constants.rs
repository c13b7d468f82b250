/// The largest Unicode scalar value (and code point).
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// The maximum code point value that can be represented in a single UTF-16 code
/// unit.
pub const MAX_BMP: u32 = 0xFFFF;

/// Placeholder in `DerivedName.txt` name templates, replaced by the hex digits
/// of each code point in the range.
pub const NAME_TEMPLATE_PLACEHOLDER: char = '*';

/// Minimum number of hex digits written for a code point.
pub const HEX_WIDTH: usize = 4;

/// Comment marker used by every UCD file.
pub const COMMENT_MARKER: char = '#';

/// Code points named in tests and in the command-line front end.
pub const CHARACTER_TABULATION: u32 = 0x0009;
pub const LINE_FEED: u32 = 0x000A;
pub const SPACE: u32 = 0x0020;
pub const LATIN_CAPITAL_LETTER_A: u32 = 0x0041;
pub const LATIN_SMALL_LETTER_A: u32 = 0x0061;
pub const LATIN_SMALL_LETTER_SHARP_S: u32 = 0x00DF;
pub const COMBINING_ACUTE_ACCENT: u32 = 0x0301;
pub const GREEK_CAPITAL_LETTER_SIGMA: u32 = 0x03A3;
pub const VULGAR_FRACTION_ONE_THIRD: u32 = 0x2153;
pub const CJK_UNIFIED_IDEOGRAPH_FIRST: u32 = 0x4E00;
pub const VARIATION_SELECTOR_16: u32 = 0xFE0F;
