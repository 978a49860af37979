//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level boolean conditional: `Elif<T, E>` where T, E are Bool.
    /// Returns a type guaranteed to implement Bool.
    type Elif<Then: Bool, Else: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;
}

/// Type-level True.
#[derive(Debug)]
pub struct Present;

/// Type-level False.
#[derive(Debug)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type Elif<Then: Bool, Else: Bool> = Then;
    type Or<Other: Bool> = Present;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type Elif<Then: Bool, Else: Bool> = Else;
    type Or<Other: Bool> = Other;
}

/// Proof that a type-level boolean is `Present`.
///
/// `Set` and `Query` only feed the diagnostic: when a skill set does not
/// grant an operator, the error names both.
#[diagnostic::on_unimplemented(
    message = "skill set `{Set}` does not grant `{Query}`",
    label = "`{Query}` is not part of this wrapper's skills",
    note = "add a skill granting it (e.g. `Addable` for `op::Add`) to the wrapper's skill list"
)]
pub trait IsTrue<Set: ?Sized, Query: ?Sized> {}

impl<S: ?Sized, Q: ?Sized> IsTrue<S, Q> for Present {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_and_elif_fold_to_expected_values() {
        assert!(<<Absent as Bool>::Or<Present> as Bool>::VALUE);
        assert!(!<<Absent as Bool>::Or<Absent> as Bool>::VALUE);
        assert!(<<Present as Bool>::Or<Absent> as Bool>::VALUE);
        assert!(!<<Present as Bool>::Elif<Absent, Present> as Bool>::VALUE);
        assert!(<<Absent as Bool>::Elif<Absent, Present> as Bool>::VALUE);
    }
}
