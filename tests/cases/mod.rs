// Shared helpers for the integration tests.

/// Declare a test that interprets `input` and checks the outcome.
///
/// `value:` compares the evaluated value, `printed:` compares what the REPL
/// would print for it, and `parse_error: _` expects the input to be rejected
/// before evaluation.
macro_rules! test_case {
    ($name:ident, input: $input:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            let result = rylisp::interpret($input)
                .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", $input, e));
            pretty_assertions::assert_eq!(result, $value);
        }
    };
    ($name:ident, input: $input:expr, printed: $printed:expr $(,)?) => {
        #[test]
        fn $name() {
            let result = rylisp::interpret($input)
                .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", $input, e));
            pretty_assertions::assert_eq!(result.to_string(), $printed);
        }
    };
    ($name:ident, input: $input:expr, parse_error: _ $(,)?) => {
        #[test]
        fn $name() {
            let result = rylisp::interpret($input);
            assert!(result.is_err(), "Expected {:?} to be rejected, got {:?}", $input, result);
        }
    };
}
