// Checks a `Result` against either an `Err(...)` pattern or an expected
// `Ok` value.
#[macro_export]
macro_rules! assert_case {
    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "< expected / got >");
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// One test function per engine field. The engine is assembled from
// `input()` and bound to `$engine` before `$body` runs.
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] $field:ident => $ty:ty, $engine:ident, $body:expr, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn $field() {
            #[allow(unused_mut)]
            let mut $engine = <$ty>::try_from(input()).unwrap();
            let result = (|| -> Result<_, dataengine::EngineError> { $body })();
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] array_list, $engine:ident, $body:expr, $expected:tt) => {
        handle_case! {[$($attrs)*] array_list => dataengine::ArrayList<i32>, $engine, $body, $expected}
    };

    ([$($attrs:meta)*] sorted_list, $engine:ident, $body:expr, $expected:tt) => {
        handle_case! {[$($attrs)*] sorted_list => dataengine::SortedList<i32>, $engine, $body, $expected}
    };

    ([$($attrs:meta)*] linked_list, $engine:ident, $body:expr, $expected:tt) => {
        handle_case! {[$($attrs)*] linked_list => dataengine::LinkedList<i32>, $engine, $body, $expected}
    };

    ([$($attrs:meta)*] frozen_list, $engine:ident, $body:expr, $expected:tt) => {
        handle_case! {[$($attrs)*] frozen_list => dataengine::FrozenList<i32>, $engine, $body, $expected}
    };

    ([$($attrs:meta)*] ring_deque, $engine:ident, $body:expr, $expected:tt) => {
        handle_case! {[$($attrs)*] ring_deque => dataengine::RingDeque<i32>, $engine, $body, $expected}
    };

    ([$($attrs:meta)*] linked_deque, $engine:ident, $body:expr, $expected:tt) => {
        handle_case! {[$($attrs)*] linked_deque => dataengine::LinkedDeque<i32>, $engine, $body, $expected}
    };

    ([$($attrs:meta)*] bounded_deque, $engine:ident, $body:expr, $expected:tt) => {
        handle_case! {[$($attrs)*] bounded_deque => dataengine::BoundedDeque<i32>, $engine, $body, $expected}
    };

    ([$($attrs:meta)*] $field:ident, $engine:ident, $body:expr, $expected:tt) => {
        compile_error!(concat!("Unknown engine field: ", stringify!($field)));
    };
}

// Recursively expands the engine fields of a case.
#[macro_export]
macro_rules! parse_engines {
    (@parse $engine:ident, $body:expr, [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse $engine:ident, $body:expr, [$($test_functions:tt)*]
        $(#[$attr:meta])* $field:ident: $expected:tt, $($rest:tt)*) => {
        parse_engines! {@parse $engine, $body, [
            $($test_functions)*
            handle_case! {[$($attr)*] $field, $engine, $body, $expected}
        ] $($rest)*}
    };
}

// Main macro - name, input and script first, then one field per engine
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        run: |$engine:ident| $body:expr,
        $($engine_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            fn input() -> Vec<i32> {
                Vec::from($input)
            }

            parse_engines! {@parse $engine, $body, [] $($engine_fields)*}
        }
    };
}
