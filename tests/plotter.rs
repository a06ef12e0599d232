use fplot::{
    GridPolicy, SampleRange,
    ast::{BinaryOperator, Constant, Expr, Function},
    error::{EvalError, ParseError, PlotError},
    evaluate,
    interpreter::parser::core::MAX_DEPTH,
    parse, plot_function, sample,
    plot::PlotRequest,
};

fn eval_at(src: &str, x: f64) -> f64 {
    let f = parse(src).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));
    f.evaluate(x)
     .unwrap_or_else(|e| panic!("'{src}' failed at x = {x}: {e}"))
}

fn assert_value(src: &str, x: f64, expected: f64) {
    let value = eval_at(src, x);
    assert!((value - expected).abs() < 1e-12,
            "'{src}' at x = {x} gave {value}, expected {expected}");
}

fn assert_parse_error(src: &str, expected: &ParseError) {
    match parse(src) {
        Ok(f) => panic!("'{src}' parsed as {} but was expected to fail", f.expr()),
        Err(e) => assert_eq!(&e, expected, "wrong error for '{src}'"),
    }
}

fn assert_domain_error(src: &str, x: f64) {
    let f = parse(src).unwrap();
    assert!(matches!(f.evaluate(x), Err(EvalError::DomainError { .. })),
            "'{src}' at x = {x} was expected to be a domain error");
}

#[test]
fn constant_expression() {
    assert_value("5", 0.0, 5.0);
    assert_value("5", 123.0, 5.0);
}

#[test]
fn double_star_power() {
    assert_value("x**2", 5.0, 25.0);
    assert_value("x**2", -5.0, 25.0);
}

#[test]
fn caret_power_first_sample() {
    let f = parse("x^2").unwrap();
    let samples = sample(&f, &SampleRange::new(-5.0, 5.0).unwrap()).unwrap();
    assert!(samples[0].1.eq(&25.0));
}

#[test]
fn inverted_range_is_rejected_by_the_caller() {
    let err = plot_function("x^2", "5", "-5").unwrap_err();
    assert!(matches!(err, PlotError::Input(_)));
    assert!(SampleRange::new(5.0, -5.0).is_err());
}

#[test]
fn no_implicit_multiplication() {
    assert!(parse("2x").is_err());
    assert_parse_error("2x", &ParseError::UnexpectedToken(1));
    assert_parse_error("2 pi", &ParseError::UnexpectedToken(1));
    assert_parse_error("x(2)", &ParseError::UnexpectedToken(1));
    assert_parse_error("(1)(2)", &ParseError::UnexpectedToken(3));
    assert_value("2*x", 3.0, 6.0);
}

#[test]
fn label_is_the_original_text() {
    let f = parse("sin(x) + 5").unwrap();
    assert_eq!(f.label(), "sin(x) + 5");
    assert_eq!(f.title(), "Function Plot: sin(x) + 5");
    for x in [-10.0, -1.0, 0.0, 0.5, 3.0, 100.0] {
        assert!(f.evaluate(x).unwrap().is_finite());
    }

    let plot = plot_function("SIN( X ) + 5", "-1", "1").unwrap();
    assert_eq!(plot.label(), "SIN( X ) + 5");
}

#[test]
fn parsing_and_evaluation_are_idempotent() {
    let src = "sin(x)^2 + cos(x)^2 - log10(x*x + 1) / exp(-x)";
    let a = parse(src).unwrap();
    let b = parse(src).unwrap();
    assert_eq!(a.expr(), b.expr());

    for x in [-3.5, 0.0, 0.1, 2.0] {
        let first = evaluate(a.expr(), x).unwrap();
        let second = evaluate(a.expr(), x).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}

#[test]
fn every_function_matches_std() {
    let v: f64 = 0.5;
    let expected = [(Function::Sin, v.sin()),
                    (Function::Cos, v.cos()),
                    (Function::Tan, v.tan()),
                    (Function::Asin, v.asin()),
                    (Function::Acos, v.acos()),
                    (Function::Atan, v.atan()),
                    (Function::Sinh, v.sinh()),
                    (Function::Cosh, v.cosh()),
                    (Function::Tanh, v.tanh()),
                    (Function::Asinh, v.asinh()),
                    (Function::Atanh, v.atanh()),
                    (Function::Log, v.ln()),
                    (Function::Log10, v.log10()),
                    (Function::Exp, v.exp()),
                    (Function::Sqrt, v.sqrt())];

    for (function, value) in expected {
        let src = format!("{}(0.5)", function.name());
        assert_eq!(eval_at(&src, 0.0).to_bits(), value.to_bits(), "{src}");
    }

    // 0.5 lies outside the domain of acosh.
    assert_domain_error("acosh(0.5)", 0.0);
    assert_value("acosh(1.5)", 0.0, 1.5_f64.acosh());

    for function in Function::ALL {
        assert!(parse(&format!("{}(0.5)", function.name())).is_ok());
    }
}

#[test]
fn sqrt_of_negative_fails_the_whole_run() {
    let f = parse("sqrt(x)").unwrap();
    assert_eq!(f.evaluate(-1.0), Err(EvalError::unary("sqrt", -1.0)));

    let result = sample(&f, &SampleRange::new(-1.0, 1.0).unwrap());
    assert!(result.is_err());

    let err = plot_function("sqrt(x)", "-1", "1").unwrap_err();
    assert_eq!(err.status_message(), "Invalid function");
}

#[test]
fn precedence_and_associativity() {
    assert_value("1 + 2 * 3", 0.0, 7.0);
    assert_value("(1 + 2) * 3", 0.0, 9.0);
    assert_value("10 - 4 - 3", 0.0, 3.0);
    assert_value("12 / 3 / 2", 0.0, 2.0);
    assert_value("2 ^ 3 ^ 2", 0.0, 512.0);
    assert_value("2 * 3 ^ 2", 0.0, 18.0);
    assert_value("2 ^ -1", 0.0, 0.5);
    assert_value("--x", 4.0, 4.0);
    assert_value("-x^2", 3.0, 9.0);
    assert_value("-(x^2)", 3.0, -9.0);
    assert_value("x - -1", 1.0, 2.0);
}

#[test]
fn tree_shape() {
    let f = parse("-x^2 + sin(pi)").unwrap();
    let expected =
        Expr::binary(BinaryOperator::Add,
                     Expr::binary(BinaryOperator::Pow,
                                  Expr::negate(Expr::Variable),
                                  Expr::Constant(2.0)),
                     Expr::call(Function::Sin, Expr::NamedConstant(Constant::Pi)));
    assert_eq!(f.expr(), &expected);
    assert_eq!(f.expr().to_string(), "(((-x) ^ 2) + sin(pi))");
}

#[test]
fn constants_and_case_insensitivity() {
    assert_value("pi", 0.0, std::f64::consts::PI);
    assert_value("E", 0.0, std::f64::consts::E);
    assert_value("LOG(E)", 0.0, 1.0);
    assert_value("Sqrt(X)", 16.0, 4.0);
    assert_value("2 * P I", 0.0, 2.0 * std::f64::consts::PI);
}

#[test]
fn function_names_are_not_substrings() {
    assert_value("asin(1)", 0.0, std::f64::consts::FRAC_PI_2);
    assert_value("sinh(0) + asinh(0) + sin(0)", 0.0, 0.0);
    assert_value("log10(100)", 0.0, 2.0);
    assert_value("log(exp(2))", 0.0, 2.0);
}

#[test]
fn parse_errors() {
    assert_parse_error("", &ParseError::EmptyExpression);
    assert_parse_error(" \t\n", &ParseError::EmptyExpression);
    assert_parse_error("(x + 1", &ParseError::UnmatchedParenthesis);
    assert_parse_error("x + 1)", &ParseError::UnmatchedParenthesis);
    assert_parse_error("sin(x", &ParseError::UnmatchedParenthesis);
    assert_parse_error("y + 1", &ParseError::UnknownIdentifier("y".into()));
    assert_parse_error("tau", &ParseError::UnknownIdentifier("tau".into()));
    assert_parse_error("sin", &ParseError::UnknownIdentifier("sin".into()));
    assert_parse_error("sin + 1", &ParseError::UnknownIdentifier("sin".into()));
    assert_parse_error("x +", &ParseError::MissingOperand);
    assert_parse_error("* x", &ParseError::MissingOperand);
    assert_parse_error("x + * 2", &ParseError::MissingOperand);
    assert_parse_error("()", &ParseError::MissingOperand);
    assert_parse_error("sin()", &ParseError::MissingOperand);
    assert_parse_error("-", &ParseError::MissingOperand);
    assert_parse_error("x $ 1", &ParseError::UnexpectedToken(1));
    assert_parse_error("pow(x, 2)", &ParseError::UnexpectedToken(5));
    assert_parse_error("__import__", &ParseError::UnknownIdentifier("__import__".into()));
}

#[test]
fn domain_errors() {
    assert_domain_error("1 / x", 0.0);
    assert_domain_error("0 ^ x", -1.0);
    assert_domain_error("x ^ 0.5", -4.0);
    assert_domain_error("asin(x)", 1.5);
    assert_domain_error("acos(x)", -1.01);
    assert_domain_error("acosh(x)", 0.0);
    assert_domain_error("atanh(x)", 1.0);
    assert_domain_error("log(x)", 0.0);
    assert_domain_error("log10(x)", -2.0);
    assert_domain_error("sqrt(x)", -0.5);
    assert_domain_error("exp(x)", 1000.0);
    assert_domain_error("x * 1e308 * 10", 1.0);

    assert_value("x ^ 3", -2.0, -8.0);
    assert_value("0 ^ 0", 0.0, 1.0);
    assert_value("sqrt(x)", 0.0, 0.0);
}

#[test]
fn domain_error_records_operation_and_input() {
    let err = parse("1 + 2 / (x - 3)").unwrap().evaluate(3.0).unwrap_err();
    assert_eq!(err,
               EvalError::DomainError { operation: "/",
                                        input:     vec![2.0, 0.0], });
    assert_eq!(err.to_string(), "Domain error: '/' is undefined for [2.0, 0.0].");
}

#[test]
fn counted_grid_reaches_the_endpoint() {
    let f = parse("x").unwrap();
    let range = SampleRange::new(-5.0, 5.0).unwrap()
                                           .with_policy(GridPolicy::Counted);
    let samples = sample(&f, &range).unwrap();

    assert_eq!(samples.len(), 1001);
    assert!((samples[1000].0 - 5.0).abs() < 1e-9);
}

#[test]
fn status_messages() {
    let cases = [(("", "0", "1"), "Invalid input the function or x min or x max is empty"),
                 (("x", "zero", "1"), "x min and x max must be numbers"),
                 (("x", "1", "1"), "x min must be less than x max"),
                 (("x +", "0", "1"), "Invalid function"),
                 (("log(x)", "-1", "1"), "Invalid function")];

    for ((f, lo, hi), message) in cases {
        match plot_function(f, lo, hi) {
            Ok(_) => panic!("'{f}' over [{lo}, {hi}] was expected to fail"),
            Err(e) => assert_eq!(e.status_message(), message),
        }
    }

    let steps = [(0.0, "step must be a positive number"),
                 (f64::NAN, "step must be a positive number"),
                 (1e-9, "too many points; increase the step or shrink the range")];

    for (step, message) in steps {
        match PlotRequest::new("x", "-1000", "1000").with_step(step).run() {
            Ok(_) => panic!("step {step} was expected to fail"),
            Err(e) => assert_eq!(e.status_message(), message),
        }
    }

    assert_eq!(plot_function("x", "0", "1").unwrap().status_message(), "Ready...");
}

#[test]
fn deep_nesting_is_a_parse_error() {
    let parens = format!("{}x{}", "(".repeat(100_000), ")".repeat(100_000));
    let negations = format!("{}x", "-".repeat(100_000));
    let powers = format!("{}x", "x^".repeat(100_000));
    let sums = format!("{}x", "x+".repeat(100_000));
    let calls = format!("{}x{}", "sin(".repeat(100_000), ")".repeat(100_000));

    for src in [&parens, &negations, &powers, &sums, &calls] {
        assert!(matches!(plot_function(src, "0", "1"), Err(PlotError::Parse(_))),
                "'{}...' was expected to be rejected",
                &src[..8]);
    }

    assert_parse_error(&parens, &ParseError::UnexpectedToken(MAX_DEPTH));
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let parens = format!("{}x{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert_value(&parens, 3.0, 3.0);

    let negations = format!("{}x", "-".repeat(MAX_DEPTH - 2));
    assert_value(&negations, 3.0, 3.0);

    let sums = format!("{}x", "x+".repeat(MAX_DEPTH - 1));
    let f = parse(&sums).unwrap();
    assert_eq!(f.expr().height(), MAX_DEPTH);
    #[allow(clippy::cast_precision_loss)]
    let expected = MAX_DEPTH as f64;
    assert_value(&sums, 1.0, expected);

    let one_more = format!("{}x", "x+".repeat(MAX_DEPTH));
    assert_parse_error(&one_more, &ParseError::UnexpectedToken(2 * MAX_DEPTH - 1));
}
