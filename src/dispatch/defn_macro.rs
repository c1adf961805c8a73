//! The `defn!` macro for defining functions overloaded by arity.

/// Defines a function overloaded by argument count.
///
/// Each argument is a closure, function or [`Variant`](crate::dispatch::Variant);
/// the arity of a closure is its parameter count. All variants share the
/// same argument type and result type.
///
/// The macro evaluates to `Result<Overloaded<A, R>, MuseError>`: building
/// fails if two variants declare the same arity.
///
/// # Syntax
///
/// - `defn![f]` - a single variant
/// - `defn![f, g, ...]` - one variant per distinct arity
///
/// # Examples
///
/// ```
/// use muse::defn;
///
/// let area = defn![
///     |side: f64| side * side,
///     |width: f64, height: f64| width * height,
/// ]
/// .unwrap();
///
/// assert_eq!(area.call([3.0]), Ok(9.0));
/// assert_eq!(area.call([2.0, 5.0]), Ok(10.0));
/// ```
///
/// ## Duplicate arities are rejected
///
/// ```
/// use muse::{MuseError, defn};
///
/// let result = defn![|value: i32| value, |value: i32| value * 2];
/// assert_eq!(result.err(), Some(MuseError::DuplicateArity { arity: 1 }));
/// ```
#[macro_export]
macro_rules! defn {
    ($($variant:expr),+ $(,)?) => {
        $crate::dispatch::Overloaded::builder()
            $(.variant($variant))+
            .build()
    };
}
