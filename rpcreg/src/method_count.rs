use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

use derive_more::Display;

/// Number of RPC-callable methods a single registration macro supports.
///
/// Always at least 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Display)]
#[repr(transparent)]
pub struct MethodCount(usize);

impl MethodCount {
    pub const ONE: MethodCount = MethodCount(1);

    /// Creates a new `MethodCount`, rejecting non-positive values.
    ///
    /// # Example
    /// ```
    /// use rpcreg::method_count::MethodCount;
    ///
    /// assert_eq!(MethodCount::new(3).unwrap().get(), 3);
    /// assert!(MethodCount::new(0).is_err());
    /// assert!(MethodCount::new(-3).is_err());
    /// ```
    pub fn new(count: i64) -> Result<Self, ParseMethodCountError> {
        if count < 1 {
            return Err(ParseMethodCountError::NotPositive(count));
        }

        usize::try_from(count)
            .map(Self)
            .map_err(|_| ParseMethodCountError::TooLarge(count))
    }

    #[inline]
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Number of arguments the registration macro for this count takes,
    /// including the class name.
    #[inline]
    #[must_use]
    pub const fn arg_num(&self) -> usize {
        self.0 + 1
    }

    /// Returns every count from 1 up to and including `self`, in ascending
    /// order.
    ///
    /// # Example
    /// ```
    /// use rpcreg::method_count::MethodCount;
    ///
    /// let counts: Vec<_> = MethodCount::new(3).unwrap().up_to().map(|x| x.get()).collect();
    /// assert_eq!(counts, [1, 2, 3]);
    /// ```
    pub fn up_to(&self) -> impl Iterator<Item = MethodCount> {
        (1..=self.0).map(MethodCount)
    }
}

impl FromStr for MethodCount {
    type Err = ParseMethodCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| ParseMethodCountError::NotANumber(s.to_owned(), e))?;

        Self::new(value)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseMethodCountError {
    NotANumber(String, ParseIntError),
    NotPositive(i64),
    TooLarge(i64),
}

impl Display for ParseMethodCountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseMethodCountError::NotANumber(value, e) => {
                write!(f, "method count `{}` is not a valid integer: {}", value, e)
            }
            ParseMethodCountError::NotPositive(value) => {
                write!(f, "method count must be at least 1, got {}", value)
            }
            ParseMethodCountError::TooLarge(value) => {
                write!(f, "method count {} is too large for this platform", value)
            }
        }
    }
}

impl Error for ParseMethodCountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseMethodCountError::NotANumber(_, e) => Some(e),
            _ => None,
        }
    }
}
