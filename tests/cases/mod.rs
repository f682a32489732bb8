// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Some($($pattern:tt)*) }) => {
        match $result {
            Some($($pattern)*) => {},
            other => panic!("Expected Some({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { None }) => {
        match $result {
            None => {},
            other => panic!("Expected None but got {:#?}", other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] display, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_display() {
            let result: Result<String, ()> = Ok(input().to_string());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] debug, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_debug() {
            let result: Result<String, ()> = Ok(format!("{:?}", input()));
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] len, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_len() {
            let result: Result<usize, ()> = Ok(input().len());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] first, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_first() {
            let input = input();
            let result = input.iter().next();
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] equals, { $expected:expr }) => {
        $(#[$attrs])*
        #[test]
        fn validate_equals() {
            assert!(input() == $expected, "{:?} should equal {:?}", input(), $expected);
        }
    };

    ([$($attrs:meta)*] hash_like, { $other:expr }) => {
        $(#[$attrs])*
        #[test]
        fn validate_hash_like() {
            pretty_assertions::assert_eq!(input().hash_code(), $other.hash_code());
        }
    };

    ([$($attrs:meta)*] clear, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_clear() {
            let input = input();
            let result = input.clear();
            assert_case!(result, $expected);
            assert!(!input.is_empty(), "clear must leave the contents in place");
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, typed input second, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $ty:ty = $input:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            // Every test builds a fresh instance
            fn input() -> $ty {
                $input
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
