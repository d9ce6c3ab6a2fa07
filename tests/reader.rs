use forma::{
    ChainOptions, Numeric, order_source,
    error::{FormError, ParseError},
    reader::{parser::Literal, read},
};

fn parse_error(source: &str) -> ParseError {
    read(source).expect_err("source should not parse")
}

fn order(source: &str) -> String {
    order_source(source, &ChainOptions::default()).unwrap_or_else(|e| panic!("{source}: {e}"))
}

fn order_failure(source: &str, strict: bool) -> FormError {
    let err = order_source(source, &ChainOptions { strict }).expect_err("ordering should fail");
    err.downcast_ref::<FormError>().cloned().expect("expected a FormError")
}

#[test]
fn reads_integers_reals_and_forms() {
    let literals = read("{-1, 0 | 1} -2\n{ | }, 0.5 +3").unwrap();
    assert_eq!(literals.len(), 5);

    match &literals[0] {
        (Literal::Form(form), 1) => {
            assert_eq!(form.left(), &[-1.0, 0.0]);
            assert_eq!(form.right(), &[1.0]);
        },
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(literals[1], (Literal::Integer(-2), 1)));
    assert!(matches!(&literals[2], (Literal::Form(f), 2) if f.is_empty()));
    assert!(matches!(literals[3], (Literal::Real(r), 2) if r == 0.5));
    assert!(matches!(literals[4], (Literal::Integer(3), 2)));
}

#[test]
fn reads_reals_and_exponents_inside_forms() {
    let literals = read("{0.25,-1.5e1|2e3}").unwrap();
    let (Literal::Form(form), _) = &literals[0] else {
        panic!("expected a form");
    };
    assert_eq!(form.left(), &[0.25, -15.0]);
    assert_eq!(form.right(), &[2000.0]);
    assert_eq!(literals[0].0.to_string(), "{0.25,-15.0|2000.0}");
}

#[test]
fn comments_and_blank_input() {
    assert!(read("").unwrap().is_empty());
    assert!(read("// nothing here\n\n").unwrap().is_empty());
    assert_eq!(order("// zero\n{|} 0"), "{|} = 0");
}

#[test]
fn missing_pipe_is_reported() {
    assert_eq!(parse_error("{1}"), ParseError::ExpectedPipe { line: 1 });
    assert_eq!(parse_error("{}"), ParseError::ExpectedPipe { line: 1 });
}

#[test]
fn truncated_form_is_reported() {
    assert_eq!(parse_error("{1|"), ParseError::UnexpectedEndOfInput { line: 1 });
    assert_eq!(parse_error("\n{1,"), ParseError::UnexpectedEndOfInput { line: 2 });
}

#[test]
fn stray_tokens_are_reported() {
    assert!(matches!(parse_error("|"), ParseError::UnexpectedToken { line: 1, .. }));
    assert!(matches!(parse_error("1\n}"), ParseError::UnexpectedToken { line: 2, .. }));
    assert!(matches!(parse_error("{1|2|3}"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("{a|}"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn oversized_literals_are_reported() {
    assert_eq!(parse_error("99999999999999999999"), ParseError::LiteralTooLarge { line: 1 });
    assert_eq!(parse_error("{9007199254740993|}"), ParseError::LiteralTooLarge { line: 1 });
    assert_eq!(parse_error("9007199254740993"), ParseError::LiteralTooLarge { line: 1 });
    assert_eq!(parse_error("1\n2147483648"), ParseError::LiteralTooLarge { line: 2 });
    assert_eq!(parse_error("-2147483649"), ParseError::LiteralTooLarge { line: 1 });
    assert!(matches!(read("2147483647 -2147483648").unwrap()[..],
                     [(Literal::Integer(i32::MAX), 1), (Literal::Integer(i32::MIN), 1)]));
    assert!(read("{2147483648|}").is_ok());
}

#[test]
fn bare_real_is_an_invalid_variant() {
    let err = order_failure("1\n0.5", false);
    assert_eq!(err,
               FormError::InvalidVariant { found: "real 0.5".to_string(),
                                           line:  2, });
}

#[test]
fn literal_conversion() {
    assert!(matches!(Literal::Integer(4).into_numeric(1), Ok(Numeric::Integer(4))));
    assert!(Literal::Real(1.0).into_numeric(1).is_err());
}

#[test]
fn strict_mode_rejects_ill_formed_forms() {
    let err = order_failure("1\n{2|1}", true);
    assert_eq!(err,
               FormError::IllFormed { form: "{2.0|1.0}".to_string(),
                                      line: 2, });

    assert!(matches!(order_failure("{0.2|0.3}", true), FormError::IllFormed { line: 1, .. }));
}

#[test]
fn lenient_mode_orders_ill_formed_forms() {
    assert!(order_source("{0|0} 1 -1", &ChainOptions::default()).is_ok());
}

#[test]
fn orders_read_values() {
    assert_eq!(order("2 {0|1} -1 {|} 1 {1|}"), "-1 < {|} < {0.0|1.0} < 1 < 2 = {1.0|}");
}
