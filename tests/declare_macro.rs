//! `#[named_type]` declarations.

#![allow(dead_code)]

use named_type::prelude::*;

// ============================================================================
// Declarations at module level
// ============================================================================

/// Distance in meters.
#[named_type(Addable, Comparable)]
pub type Distance = u32;

#[named_type(Arithmetic, tag = TemperatureUnit)]
pub type Celsius = i64;

#[named_type]
type Opaque = [u8; 4];

#[named_type(Callable)]
pub type Comparator<F> = F;

#[named_type(Comparable, Hashable, ImplicitlyConvertibleTo<String>)]
type Isbn = &'static str;

mod nested {
    use named_type::prelude::*;

    #[named_type(Printable)]
    pub type Label = String;
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn distance_end_to_end() {
    let ten = Distance::new(10);
    let twelve = Distance::new(12);
    assert!((ten + twelve) == Distance::new(22));
    assert!(ten < twelve);
    assert!(!(twelve < ten));
}

#[test]
fn default_tag_name_is_generated() {
    let distance: NamedType<u32, DistanceTag, (Addable, Comparable)> = Distance::new(3);
    assert_eq!(format!("{distance:?}"), "DistanceTag(3)");
}

#[test]
fn explicit_tag_name() {
    let freezing: NamedType<i64, TemperatureUnit, (Arithmetic,)> = Celsius::new(0);
    assert!(freezing - Celsius::new(5) < freezing);
}

#[test]
fn empty_skill_list() {
    let opaque = Opaque::new([1, 2, 3, 4]);
    assert_eq!(opaque.get(), &[1, 2, 3, 4]);
    assert_eq!(std::mem::size_of::<Opaque>(), 4);
}

#[test]
fn generic_alias() {
    fn apply<F: Fn(i32) -> i32>(comparator: Comparator<F>, value: i32) -> i32 {
        (*comparator)(value)
    }
    assert_eq!(apply(make_named(|v: i32| v * 3), 4), 12);
}

#[test]
fn parameterised_skills() {
    let isbn = Isbn::new("978-0");
    let text: String = isbn.convert();
    assert_eq!(text, "978-0");
    let set = std::collections::HashSet::from([isbn, Isbn::new("978-0"), Isbn::new("978-1")]);
    assert_eq!(set.len(), 2);
}

#[test]
fn declared_in_a_submodule() {
    let label = nested::Label::new("dock".into());
    assert_eq!(label.to_string(), "dock");
}
