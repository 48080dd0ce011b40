use std::fs;

use cosmo::{
    RuntimeError,
    error::{CosmoError, ParseError},
    interpreter::output::buffer_handler,
    run_with_output,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Runs `src` and returns everything it printed alongside the outcome.
fn run_capturing(src: &str) -> (String, Result<(), CosmoError>) {
    let output = buffer_handler();
    let result = run_with_output(src, output.clone());
    (output.get_output(), result)
}

fn assert_output(src: &str, expected: &str) {
    let (output, result) = run_capturing(src);
    if let Err(e) = result {
        panic!("Script failed: {e}\n{src}");
    }
    assert_eq!(output, expected, "unexpected output for:\n{src}");
}

fn runtime_error(src: &str) -> (String, RuntimeError) {
    match run_capturing(src) {
        (output, Err(CosmoError::Runtime(error))) => (output, error),
        (_, other) => panic!("expected a runtime error, got {other:?}"),
    }
}

fn syntax_errors(src: &str) -> Vec<ParseError> {
    match run_capturing(src) {
        (output, Err(CosmoError::Syntax { parse_errors, .. })) => {
            assert_eq!(output, "", "nothing may run when parsing fails");
            parse_errors
        },
        (_, other) => panic!("expected syntax errors, got {other:?}"),
    }
}

#[test]
fn script_files_produce_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/scripts"))
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "cosmo"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        count += 1;
        let (output, result) = run_capturing(&source);
        if let Err(e) = result {
            panic!("Script {path:?} failed:\n{e}");
        }
        assert_eq!(output, expected, "output mismatch for {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn end_to_end_examples() {
    assert_output("create a = 5; if (a > 3) { output \"big\"; } else { output \"small\"; }",
                  "big\n");
    assert_output("func add(x, y) { return x + y; } output add(2, 3);", "5\n");
    assert_output("for (create i = 0; i < 3; i = i + 1) { output i; }", "0\n1\n2\n");
}

#[test]
fn arithmetic_precedence() {
    assert_output("output 1 + 2 * 3;", "7\n");
    assert_output("output (1 + 2) * 3;", "9\n");
    assert_output("output 10 - 4 - 3;", "3\n");
    assert_output("output 7 / 2;", "3.5\n");
    assert_output("output -2 * -3;", "6\n");
    assert_output("output 1 < 2 == 2 > 1;", "true\n");
}

#[test]
fn logical_operators_short_circuit() {
    assert_output("output false and (1 / 0);", "false\n");
    assert_output("output true or (1 / 0);", "true\n");
    assert_output("output nil or \"fallback\";", "fallback\n");
    assert_output("output 1 and 2;", "2\n");
    assert_output("create hit = false; func mark() { hit = true; return true; } false and mark(); output hit;",
                  "false\n");
}

#[test]
fn truthiness_and_equality() {
    assert_output("if (0) output \"zero is truthy\";", "zero is truthy\n");
    assert_output("if (\"\") output \"empty is truthy\";", "empty is truthy\n");
    assert_output("if (nil) output 1; else output 2;", "2\n");
    assert_output("output !nil;", "true\n");
    assert_output("output nil == false;", "false\n");
    assert_output("output 1 == \"1\";", "false\n");
    assert_output("output \"a\" == \"a\";", "true\n");
    assert_output("output nil == nil;", "true\n");
}

#[test]
fn string_concatenation_uses_display_forms() {
    assert_output("output \"a\" + \"b\";", "ab\n");
    assert_output("output \"n = \" + 4;", "n = 4\n");
    assert_output("output 2.5 + \"!\";", "2.5!\n");
    assert_output("output \"is \" + nil;", "is nil\n");
    assert_output("output \"ok: \" + true;", "ok: true\n");
}

#[test]
fn display_of_values() {
    assert_output("output nil;", "nil\n");
    assert_output("create x; output x;", "nil\n");
    assert_output("output 3.0;", "3\n");
    assert_output("output 0.1 + 0.2;", "0.30000000000000004\n");
    assert_output("func f() {} output f;", "<fn f>\n");
    assert_output("output sqrt;", "<native fn sqrt>\n");
    assert_output("func f() {} output f();", "nil\n");
}

#[test]
fn closures_capture_by_reference() {
    let src = "
        func makeCounter() {
            create count = 0;
            func counter() {
                count = count + 1;
                return count;
            }
            return counter;
        }
        create a = makeCounter();
        output a();
        output a();
        output a();
        create b = makeCounter();
        output b();
        output a();
    ";
    assert_output(src, "1\n2\n3\n1\n4\n");
}

#[test]
fn closures_see_later_assignments() {
    let src = "
        create x = \"before\";
        func show() { output x; }
        x = \"after\";
        show();
    ";
    assert_output(src, "after\n");
}

#[test]
fn recursion() {
    let src = "
        func fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        output fib(15);
    ";
    assert_output(src, "610\n");
}

#[test]
fn deep_recursion_does_not_overflow_the_stack() {
    let src = "
        func count(n) {
            if (n == 0) return 0;
            return 1 + count(n - 1);
        }
        output count(20000);
    ";
    assert_output(src, "20000\n");
}

#[test]
fn block_scoping_and_shadowing() {
    let src = "
        create a = \"global\";
        {
            create a = \"outer\";
            {
                create a = \"inner\";
                output a;
            }
            output a;
        }
        output a;
    ";
    assert_output(src, "inner\nouter\nglobal\n");
    assert_output("create a = 1; { a = 2; } output a;", "2\n");
    assert_output("create a = 1; create a = 2; output a;", "2\n");
}

#[test]
fn control_flow() {
    assert_output("create i = 0; while (i < 3) { output i; i = i + 1; }", "0\n1\n2\n");
    assert_output("if (true) if (false) output 1; else output 2;", "2\n");
    assert_output("for (create i = 0; i < 2;) { output i; i = i + 1; }", "0\n1\n");
    assert_output("func first() { for (create i = 0; ; i = i + 1) { if (i == 4) return i; } } output first();",
                  "4\n");
    assert_output("create i = 10; for (create i = 0; i < 1; i = i + 1) {} output i;", "10\n");
}

#[test]
fn natives() {
    assert_output("output add(2, 3);", "5\n");
    assert_output("output sqrt(16);", "4\n");
    assert_output("output sqrt(2);", "1.4142135623730951\n");
    assert_output("output sqrt(-1);", "NaN\n");

    let (_, error) = runtime_error("add(\"a\", 1);");
    assert_eq!(error.to_string(), "Error on line 1: Arguments to 'add' must be numbers.");
    let (_, error) = runtime_error("sqrt(nil);");
    assert_eq!(error.to_string(), "Error on line 1: Argument to 'sqrt' must be a number.");
}

#[test]
fn arity_is_enforced_before_binding() {
    let (output, error) = runtime_error("func f(a, b) { output \"ran\"; }\nf(1);");
    assert_eq!(output, "");
    assert_eq!(error,
               RuntimeError::ArityMismatch { expected: 2,
                                             found:    1,
                                             line:     2, });
    assert_eq!(error.to_string(), "Error on line 2: Expected 2 arguments but got 1.");

    let (_, error) = runtime_error("sqrt(1, 2);");
    assert!(matches!(error, RuntimeError::ArityMismatch { expected: 1, found: 2, .. }));
}

#[test]
fn division_by_zero_halts_the_program() {
    let (output, error) = runtime_error("output 1;\noutput 1 / 0;\noutput 2;");
    assert_eq!(output, "1\n");
    assert_eq!(error, RuntimeError::DivisionByZero { line: 2 });
}

#[test]
fn runtime_type_errors() {
    let (_, error) = runtime_error("output -\"a\";");
    assert!(matches!(error, RuntimeError::OperandMustBeNumber { .. }));

    let (_, error) = runtime_error("output 1 + true;");
    assert_eq!(error.to_string(), "Error on line 1: Operands must be two numbers or strings.");

    let (_, error) = runtime_error("output \"a\" * 2;");
    assert!(matches!(error, RuntimeError::OperandsMustBeNumbers { .. }));

    let (_, error) = runtime_error("create x = 1;\nx();");
    assert_eq!(error, RuntimeError::NotCallable { line: 2 });

    let (_, error) = runtime_error("output missing;");
    assert_eq!(error.to_string(), "Error on line 1: Undefined variable 'missing'.");

    let (_, error) = runtime_error("missing = 1;");
    assert!(matches!(error, RuntimeError::UndefinedVariable { .. }));
}

#[test]
fn syntax_errors_stop_the_whole_program() {
    let errors = syntax_errors("output 1;\ncreate = 2;\noutput 3;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line(), 2);

    let errors = syntax_errors("1 = 2;");
    assert_eq!(errors, vec![ParseError::InvalidAssignmentTarget { line: 1 }]);

    let errors = syntax_errors("return 1;");
    assert_eq!(errors, vec![ParseError::ReturnOutsideFunction { line: 1 }]);
}

#[test]
fn lexical_errors_do_not_stop_execution() {
    assert_output("output 1; @ output 2;", "1\n2\n");

    match run_capturing("output \"unterminated;") {
        (_, Err(CosmoError::Syntax { lex_errors, .. })) => assert_eq!(lex_errors.len(), 1),
        (_, other) => panic!("expected a syntax failure, got {other:?}"),
    }
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 10_000;
    let src = format!("output {}1{};", "(".repeat(depth), ")".repeat(depth));
    assert_output(&src, "1\n");

    let src = format!("output {}true;", "!".repeat(depth));
    assert_output(&src, "true\n");
}

#[test]
fn deeply_nested_blocks() {
    let depth = 10_000;
    let src = format!("create x = 1; {} x = x + 1; output x; {}",
                      "{".repeat(depth),
                      "}".repeat(depth));
    assert_output(&src, "2\n");

    let src = format!("{}if (true) output \"deep\";", "while (false) ".repeat(depth));
    assert_output(&src, "");
}

#[test]
fn comments_are_ignored() {
    assert_output("// nothing here\noutput 1; // trailing\n// output 2;", "1\n");
}
