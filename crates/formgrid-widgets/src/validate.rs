#![forbid(unsafe_code)]

//! Regex validators for the five fixed form fields.
//!
//! Each field has one anchored pattern; a value is valid iff it matches the
//! whole pattern. Validation is pure and never errors — an unmatched value
//! simply yields `false`. The only fallible step is compiling the patterns
//! once at startup.

use std::fmt;

use regex::Regex;

/// The five fixed form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Surname plus two dotted initials ("Петренко П.І.").
    FullName,
    /// Formatted phone number ("(067)-123-45-67").
    Phone,
    /// ID card series and number ("МС №123456").
    IdCard,
    /// Birth date, shape only ("01.01.2000").
    BirthDate,
    /// E-mail address.
    Email,
}

impl Field {
    /// All fields in the fixed display order.
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Phone,
        Field::IdCard,
        Field::BirthDate,
        Field::Email,
    ];

    /// Stable identifier used to address the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Phone => "phone",
            Self::IdCard => "idCard",
            Self::BirthDate => "birthDate",
            Self::Email => "email",
        }
    }

    /// Row label shown in the result modal.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "ПІБ",
            Self::Phone => "Телефон",
            Self::IdCard => "ID-card",
            Self::BirthDate => "Дата народження",
            Self::Email => "E-mail",
        }
    }

    /// Position in [`Field::ALL`]; also indexes the compiled pattern table.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Phone => 1,
            Self::IdCard => 2,
            Self::BirthDate => 3,
            Self::Email => 4,
        }
    }

    // Digit classes are [0-9] rather than \d: the `regex` crate's \d is
    // Unicode-wide and would accept digits like "٣".
    const fn pattern(self) -> &'static str {
        match self {
            Self::FullName => r"^[А-ЯІЇЄҐ][а-яіїєґ]+ [А-ЯІЇЄҐ]\.[А-ЯІЇЄҐ]\.$",
            Self::Phone => r"^\([0-9]{3}\)-[0-9]{3}-[0-9]{2}-[0-9]{2}$",
            Self::IdCard => r"^[А-ЯІЇЄҐ]{2} №[0-9]{6}$",
            Self::BirthDate => r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$",
            Self::Email => r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field pattern failed to compile.
#[derive(Debug, Clone)]
pub struct PatternError {
    /// The field whose pattern was rejected.
    pub field: Field,
    /// The underlying regex error.
    pub source: regex::Error,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern for {}: {}", self.field, self.source)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Compiled validation patterns, built once at startup.
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    patterns: [Regex; 5],
}

impl FieldPatterns {
    /// Compile all five patterns.
    pub fn compile() -> Result<Self, PatternError> {
        let one = |field: Field| {
            Regex::new(field.pattern()).map_err(|source| PatternError { field, source })
        };
        Ok(Self {
            patterns: [
                one(Field::FullName)?,
                one(Field::Phone)?,
                one(Field::IdCard)?,
                one(Field::BirthDate)?,
                one(Field::Email)?,
            ],
        })
    }

    /// True iff `raw` (already trimmed by the caller) fully matches the
    /// pattern for `field`.
    #[must_use]
    pub fn validate(&self, field: Field, raw: &str) -> bool {
        self.patterns[field.index()].is_match(raw)
    }
}
