//! Error types for generic (tuple, array and list based) application.
//!
//! Typed application through `apply` or `apply_tuple` cannot fail. Only
//! the type-erased entry points (`try_apply_tuple`, `apply_array`,
//! `apply_list` and `apply_values`) check their input at runtime, and they
//! report misuse with the errors defined here.

/// The number of supplied values differs from the arity of the function.
///
/// # Examples
///
/// ```rust
/// use arity_fn::function::ArityMismatchError;
///
/// let error = ArityMismatchError { expected: 2, actual: 3 };
/// assert_eq!(
///     format!("{}", error),
///     "arity mismatch: the function takes 2 argument(s) but 3 value(s) were supplied"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArityMismatchError {
    /// The arity of the function.
    pub expected: usize,
    /// The number of values that were supplied.
    pub actual: usize,
}

impl std::fmt::Display for ArityMismatchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "arity mismatch: the function takes {} argument(s) but {} value(s) were supplied",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for ArityMismatchError {}

/// A supplied value does not have the type of the argument at its position.
///
/// # Examples
///
/// ```rust
/// use arity_fn::function::TypeMismatchError;
///
/// let error = TypeMismatchError { position: 1, expected: "i32" };
/// assert_eq!(
///     format!("{}", error),
///     "type mismatch: the value at position 1 is not of type `i32`"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeMismatchError {
    /// The zero-based position of the offending value.
    pub position: usize,
    /// The name of the argument type expected at `position`.
    pub expected: &'static str,
}

impl std::fmt::Display for TypeMismatchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "type mismatch: the value at position {} is not of type `{}`",
            self.position, self.expected
        )
    }
}

impl std::error::Error for TypeMismatchError {}

/// Errors raised by generic application.
///
/// Both variants are caller errors: they are deterministic for a given
/// input, so retrying the same call cannot succeed.
///
/// # Examples
///
/// ```rust
/// use arity_fn::prelude::*;
///
/// let add = PairFn::new(|a: i32, b: i32| a + b);
///
/// let error = add.apply_list(vec![value(1)]).unwrap_err();
/// assert!(matches!(error, ApplyError::ArityMismatch(_)));
///
/// let error = add.apply_list(vec![value(1), value("two")]).unwrap_err();
/// assert!(matches!(error, ApplyError::TypeMismatch(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ApplyError {
    /// The number of values differs from the arity.
    ArityMismatch(ArityMismatchError),
    /// A value has the wrong type for its position.
    TypeMismatch(TypeMismatchError),
}

impl ApplyError {
    pub(crate) const fn arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::ArityMismatch(ArityMismatchError { expected, actual })
    }

    pub(crate) fn type_mismatch<T: ?Sized>(position: usize) -> Self {
        Self::TypeMismatch(TypeMismatchError {
            position,
            expected: std::any::type_name::<T>(),
        })
    }
}

impl std::fmt::Display for ApplyError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch(error) => write!(formatter, "{error}"),
            Self::TypeMismatch(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ArityMismatch(error) => Some(error),
            Self::TypeMismatch(error) => Some(error),
        }
    }
}

impl From<ArityMismatchError> for ApplyError {
    fn from(error: ArityMismatchError) -> Self {
        Self::ArityMismatch(error)
    }
}

impl From<TypeMismatchError> for ApplyError {
    fn from(error: TypeMismatchError) -> Self {
        Self::TypeMismatch(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_apply_error_display_delegates_to_variant() {
        let error = ApplyError::arity_mismatch(3, 1);
        assert_eq!(
            format!("{error}"),
            "arity mismatch: the function takes 3 argument(s) but 1 value(s) were supplied"
        );

        let error = ApplyError::type_mismatch::<String>(2);
        assert_eq!(
            format!("{error}"),
            "type mismatch: the value at position 2 is not of type `alloc::string::String`"
        );
    }

    #[rstest]
    fn test_apply_error_source_is_variant() {
        let error = ApplyError::from(ArityMismatchError {
            expected: 1,
            actual: 0,
        });
        let source = error.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("arity mismatch: the function takes 1 argument(s) but 0 value(s) were supplied")
        );
    }

    #[rstest]
    fn test_from_conversions() {
        let arity = ArityMismatchError {
            expected: 2,
            actual: 5,
        };
        let mismatch = TypeMismatchError {
            position: 0,
            expected: "u8",
        };

        assert_eq!(ApplyError::from(arity), ApplyError::ArityMismatch(arity));
        assert_eq!(ApplyError::from(mismatch), ApplyError::TypeMismatch(mismatch));
        assert_ne!(ApplyError::from(arity), ApplyError::from(mismatch));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_errors_serialize() {
        let error = ApplyError::arity_mismatch(2, 3);
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"ArityMismatch":{"expected":2,"actual":3}}"#);
    }
}
