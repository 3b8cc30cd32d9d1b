//! Validation of the raw form input into table bounds.
//!
//! The validator reads the four raw field strings, coerces each one with the
//! loose numeric rules of [`Num::coerce`], and evaluates six independent
//! checks against the coerced values. Every check runs regardless of earlier
//! failures, so one submission can report several problems at once. When no
//! check fails the coerced values are returned as [`Bounds`]; otherwise the
//! messages of every failed check are concatenated, in the fixed
//! [`ErrorKind`] order, into a single display string.
//!
//! # Examples
//!
//! ```rust
//! use multtable::validate::{validate, FormInput};
//!
//! let input = FormInput {
//!     min_col: "2".into(),
//!     max_col: "3".into(),
//!     min_row: "5".into(),
//!     max_row: "6".into(),
//! };
//! let bounds = validate(&input).unwrap();
//! assert_eq!(bounds.min_col, 2);
//! assert_eq!(bounds.max_row, 6);
//! ```

/// Widest span allowed between a minimum and maximum bound.
pub const MAX_RANGE: f64 = 100.0;

/// Largest magnitude allowed for any single bound (one quadrillion).
pub const MAX_VALUE: f64 = 1e15;

/// The four raw field values as typed by the user, read fresh from the
/// fields on every submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    /// Raw text of the minimum column field.
    pub min_col: String,
    /// Raw text of the maximum column field.
    pub max_col: String,
    /// Raw text of the minimum row field.
    pub min_row: String,
    /// Raw text of the maximum row field.
    pub max_row: String,
}

/// Four validated integer bounds defining the table's row and column range.
///
/// Only produced by [`validate`] when every check passes; discarded after
/// the table is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// First column index, inclusive.
    pub min_col: i64,
    /// Last column index, inclusive.
    pub max_col: i64,
    /// First row index, inclusive.
    pub min_row: i64,
    /// Last row index, inclusive.
    pub max_row: i64,
}

/// Result of loosely coercing one raw field to a number.
///
/// Coercion is deliberately loose: a blank (or whitespace-only) field
/// counts as zero, anything that parses as a float is
/// a number, and everything else is [`Num::NotANumber`]. The coerced value is
/// computed once per field and the same value feeds every check, so a
/// non-numeric field also fails the integer check (NaN is not a whole
/// number) while passing the order, range, and magnitude comparisons the way
/// IEEE 754 comparisons against NaN always do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    /// The field coerced to a finite or infinite float.
    Number(f64),
    /// The field did not look like a number at all.
    NotANumber,
}

impl Num {
    /// Coerces a raw field string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multtable::validate::Num;
    ///
    /// assert_eq!(Num::coerce("7"), Num::Number(7.0));
    /// assert_eq!(Num::coerce(""), Num::Number(0.0));
    /// assert_eq!(Num::coerce(" 2.5 "), Num::Number(2.5));
    /// assert_eq!(Num::coerce("seven"), Num::NotANumber);
    /// ```
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Num::Number(0.0);
        }
        match trimmed.parse::<f64>() {
            Ok(v) if !v.is_nan() => Num::Number(v),
            _ => Num::NotANumber,
        }
    }

    /// The coerced value for arithmetic; NaN for [`Num::NotANumber`].
    pub fn value(self) -> f64 {
        match self {
            Num::Number(v) => v,
            Num::NotANumber => f64::NAN,
        }
    }

    /// Whether the coerced value is a whole number.
    pub fn is_integer(self) -> bool {
        match self {
            Num::Number(v) => v.is_finite() && v.fract() == 0.0,
            Num::NotANumber => false,
        }
    }
}

/// The six independent validation failures, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field was left blank.
    NoInput,
    /// A field did not coerce to a number.
    NotNumber,
    /// A coerced value was not a whole number.
    NotInteger,
    /// A maximum bound was below its minimum.
    WrongOrder,
    /// A row or column span exceeded [`MAX_RANGE`].
    OutsideRange,
    /// A bound's magnitude exceeded [`MAX_VALUE`].
    TooBig,
}

impl ErrorKind {
    /// Every kind, in the order messages are concatenated.
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::NoInput,
        ErrorKind::NotNumber,
        ErrorKind::NotInteger,
        ErrorKind::WrongOrder,
        ErrorKind::OutsideRange,
        ErrorKind::TooBig,
    ];

    /// The user-facing message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NoInput => "No text input may be blank!",
            ErrorKind::NotNumber => "Every text input must contain a number!",
            ErrorKind::NotInteger => "Every text input must contain an integer!",
            ErrorKind::WrongOrder => {
                "A minimum value may not be greater than the maximum value!"
            }
            ErrorKind::OutsideRange => "There cannot be more than 100 rows or 100 collumns!",
            ErrorKind::TooBig => {
                "Numbers cannot be larger than 1 quadrillion or smaller than negative 1 quadrillion!"
            }
        }
    }
}

/// The set of validation failures raised by one submission.
///
/// The kinds are not mutually exclusive; any combination can be set and
/// every set kind contributes its message to the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Errors {
    flags: [bool; 6],
}

impl Errors {
    fn index(kind: ErrorKind) -> usize {
        ErrorKind::ALL.iter().position(|&k| k == kind).unwrap_or(0)
    }

    /// Raises the given kind.
    pub fn set(&mut self, kind: ErrorKind) {
        self.flags[Self::index(kind)] = true;
    }

    /// Whether the given kind is raised.
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.flags[Self::index(kind)]
    }

    /// Whether no kind is raised.
    pub fn is_empty(&self) -> bool {
        self.flags.iter().all(|&f| !f)
    }

    /// Concatenates the messages of every raised kind, in [`ErrorKind::ALL`]
    /// order, each followed by a blank-line separator.
    pub fn message(&self) -> String {
        let mut out = String::new();
        for kind in ErrorKind::ALL {
            if self.contains(kind) {
                out.push_str(kind.message());
                out.push_str("\n\n");
            }
        }
        out
    }
}

/// Validates the raw form input.
///
/// Returns the coerced integer bounds when every check passes, or the
/// concatenated error report when any check fails. All six checks are
/// evaluated unconditionally.
pub fn validate(input: &FormInput) -> Result<Bounds, String> {
    let mut errors = Errors::default();

    let raw = [
        input.min_col.as_str(),
        input.max_col.as_str(),
        input.min_row.as_str(),
        input.max_row.as_str(),
    ];

    if raw.iter().any(|s| s.is_empty()) {
        errors.set(ErrorKind::NoInput);
    }

    let nums = raw.map(Num::coerce);
    let [min_col, max_col, min_row, max_row] = nums.map(Num::value);

    if nums.iter().any(|&n| matches!(n, Num::NotANumber)) {
        errors.set(ErrorKind::NotNumber);
    }
    if nums.iter().any(|n| !n.is_integer()) {
        errors.set(ErrorKind::NotInteger);
    }
    if max_col < min_col || max_row < min_row {
        errors.set(ErrorKind::WrongOrder);
    }
    if max_col - min_col > MAX_RANGE || max_row - min_row > MAX_RANGE {
        errors.set(ErrorKind::OutsideRange);
    }
    if [min_col, max_col, min_row, max_row]
        .iter()
        .any(|&v| v > MAX_VALUE || v < -MAX_VALUE)
    {
        errors.set(ErrorKind::TooBig);
    }

    if errors.is_empty() {
        Ok(Bounds {
            min_col: min_col as i64,
            max_col: max_col as i64,
            min_row: min_row as i64,
            max_row: max_row as i64,
        })
    } else {
        Err(errors.message())
    }
}
