//! Shorthand for querying skill sets.

// =============================================================================
// skill_check! - runtime view of the skill table
// =============================================================================

/// Whether a skill set grants a combination of operators.
///
/// Operators are the names in [`skill::op`](crate::skill::op). `&` requires
/// all of them, `|` any of them, `!` negates a single one.
///
/// ```
/// use named_type::prelude::*;
/// use named_type::skill_check;
///
/// type Money = (Addable, Comparable, Hashable);
///
/// assert!(skill_check!(Money: Add));
/// assert!(skill_check!(Money: Add & AddAssign & Compare));
/// assert!(skill_check!(Money: Mul | Hash));
/// assert!(skill_check!(Money: !Mul));
/// assert!(!skill_check!(Arithmetic: Rem));
/// ```
#[macro_export]
macro_rules! skill_check {
    ($set:ty : ! $op:ident) => {
        !$crate::grants::<$set, $crate::skill::op::$op>()
    };
    ($set:ty : $($op:ident)&+) => {
        true $(&& $crate::grants::<$set, $crate::skill::op::$op>())+
    };
    ($set:ty : $($op:ident)|+) => {
        false $(|| $crate::grants::<$set, $crate::skill::op::$op>())+
    };
}

#[cfg(test)]
mod tests {
    use crate::skill::{Arithmetic, Callable, Divisible, Modulable};

    #[test]
    fn all_of() {
        assert!(skill_check!(Arithmetic: Add & Sub & Mul & Div & Hash & Print));
        assert!(!skill_check!(Arithmetic: Add & Rem));
        assert!(skill_check!(Callable: AsUnderlying & Deref));
    }

    #[test]
    fn any_of() {
        assert!(skill_check!((Divisible, Modulable): Mul | Rem));
        assert!(!skill_check!(Divisible: Mul | MulAssign));
    }

    #[test]
    fn negation() {
        assert!(skill_check!(Divisible: !Mul));
        assert!(!skill_check!(Divisible: !Div));
        assert!(skill_check!((): !Add));
    }
}
