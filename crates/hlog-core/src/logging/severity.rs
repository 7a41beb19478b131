//! Severity levels and their label/color table

/// ANSI escape sequences used on the console
pub mod color {
    /// Full reset, emitted at the end of every console line
    pub const RESET: &str = "\x1b[0m";
    /// Bright white; also used to un-color the text after a label
    pub const BRIGHT_WHITE: &str = "\x1b[97m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";

    /// Color applied between the label and the message
    pub const NEUTRAL: &str = BRIGHT_WHITE;
}

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    None = 0,
    Success = 1,
    Error = 2,
    Critical = 3,
}

impl Severity {
    /// All severities, in code order
    pub const ALL: [Severity; 4] = [
        Severity::None,
        Severity::Success,
        Severity::Error,
        Severity::Critical,
    ];

    /// Numeric code of this severity
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Severity for a raw numeric code, if the code is known
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Severity::None),
            1 => Some(Severity::Success),
            2 => Some(Severity::Error),
            3 => Some(Severity::Critical),
            _ => None,
        }
    }

    /// Label and console color for this severity
    pub fn tag(self) -> Tag {
        match self {
            Severity::None => Tag::new("[HLOG]", color::BRIGHT_WHITE),
            Severity::Success => Tag::new("[SUCCESS]", color::GREEN),
            Severity::Error => Tag::new("[ERROR]", color::YELLOW),
            Severity::Critical => Tag::new("[CRITICAL]", color::RED),
        }
    }
}

/// Label and console color for one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub label: &'static str,
    pub color: &'static str,
}

impl Tag {
    /// Tag used for codes outside the known severities
    pub const UNKNOWN: Tag = Tag::new("[UNKNOWN]", color::BRIGHT_WHITE);

    /// Width every label is padded to (the length of `[CRITICAL]`)
    pub const WIDTH: usize = 10;

    pub const fn new(label: &'static str, color: &'static str) -> Self {
        Self { label, color }
    }

    /// Tag for a raw numeric code; unknown codes never fail
    pub fn for_code(code: i32) -> Self {
        Severity::from_code(code).map_or(Tag::UNKNOWN, Severity::tag)
    }
}
