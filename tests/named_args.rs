//! Named-argument tokens and order-independent calls.

use named_type::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

#[named_type(Printable, argument = FIRST_NAME)]
type FirstName = String;

#[named_type(Printable, argument = LAST_NAME)]
type LastName = String;

fn full_name(first: FirstName, last: LastName) -> String {
    first.into_inner() + last.get()
}

// ============================================================================
// Tokens
// ============================================================================

#[test]
fn named_arguments() {
    let name = full_name(FIRST_NAME.assign("James"), LAST_NAME.assign("Bond"));
    assert_eq!(name, "JamesBond");
}

#[test]
fn argument_accessor_matches_the_const_token() {
    let first = FirstName::argument().assign("James");
    assert_eq!(first.to_string(), FIRST_NAME.assign("James").to_string());
}

#[test]
fn named_arguments_with_list_values() {
    enum NumbersTag {}
    type Numbers = NamedType<Vec<i32>, NumbersTag>;
    const NUMBERS: Argument<Numbers> = Argument::new();

    fn get_numbers(numbers: Numbers) -> Vec<i32> {
        numbers.into_inner()
    }

    assert_eq!(get_numbers(NUMBERS.assign([1, 2, 3])), vec![1, 2, 3]);
}

// ============================================================================
// Any order
// ============================================================================

#[test]
fn named_arguments_in_any_order() {
    let get_full_name = make_named_arg_function::<(FirstName, LastName), _>(full_name);

    let full = get_full_name.call((LAST_NAME.assign("Bond"), FIRST_NAME.assign("James")));
    assert_eq!(full, "JamesBond");

    let other = get_full_name.call((FIRST_NAME.assign("James"), LAST_NAME.assign("Bond")));
    assert_eq!(other, "JamesBond");
}

#[test]
fn wider_functions_reorder_too() {
    #[named_type(Comparable, argument = HOST)]
    type Host = &'static str;
    #[named_type(Comparable, argument = PORT)]
    type Port = u16;
    #[named_type(argument = SECURE)]
    type Secure = bool;
    #[named_type(argument = RETRIES)]
    type Retries = u8;

    fn url(host: Host, port: Port, secure: Secure, retries: Retries) -> String {
        let scheme = if *secure.get() { "https" } else { "http" };
        format!("{scheme}://{}:{}?retries={}", host.get(), port.get(), retries.get())
    }

    let url = make_named_arg_function::<(Host, Port, Secure, Retries), _>(url);
    let expected = "https://example.org:8443?retries=3";
    assert_eq!(
        url.call((HOST.assign("example.org"), PORT.assign(8443u16), SECURE.assign(true), RETRIES.assign(3u8))),
        expected
    );
    assert_eq!(
        url.call((RETRIES.assign(3u8), SECURE.assign(true), PORT.assign(8443u16), HOST.assign("example.org"))),
        expected
    );
    assert_eq!(
        url.call((PORT.assign(8443u16), RETRIES.assign(3u8), HOST.assign("example.org"), SECURE.assign(true))),
        expected
    );
}

#[test]
fn adapters_with_closures() {
    let greet = make_named_arg_function::<(LastName, FirstName), _>(|last: LastName, first: FirstName| {
        format!("{last}, {first}")
    });
    assert_eq!(greet.call((FIRST_NAME.assign("James"), LAST_NAME.assign("Bond"))), "Bond, James");
}
