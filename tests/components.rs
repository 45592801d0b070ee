use pretty_assertions::assert_eq;
use rpnexpr::{
    Bindings, TypedValue,
    error::{ParseError, RuntimeError},
    execute,
    interpreter::{
        lexer::Tokenizer,
        operator::{Associativity, OPERATOR_TABLE, OpKind, OperatorClass, lookup},
        parser::{Parser, Rpn},
        stack::{EmptyStack, Stack},
        token::{Token, TokenKind},
    },
};

#[test]
fn stack_is_last_in_first_out() {
    let mut stack = Stack::new();
    assert_eq!(stack.count(), 0);
    assert!(stack.is_empty());

    stack.extend(["a", "b", "c"]);
    assert_eq!(stack.count(), 3);
    assert_eq!(stack.peek(), Ok(&"c"));
    assert_eq!(stack.count(), 3);

    assert_eq!(stack.pop(), Ok("c"));
    stack.push("d");
    assert_eq!(stack.pop(), Ok("d"));
    assert_eq!(stack.pop(), Ok("b"));
    assert_eq!(stack.pop(), Ok("a"));
    assert_eq!(stack.count(), 0);
}

#[test]
fn empty_stack_signals_instead_of_defaulting() {
    let mut stack: Stack<f64> = Stack::default();
    assert_eq!(stack.pop(), Err(EmptyStack));
    assert_eq!(stack.peek(), Err(EmptyStack));

    stack.push(1.0);
    assert_eq!(stack.pop(), Ok(1.0));
    assert_eq!(stack.pop(), Err(EmptyStack));
}

#[test]
fn stack_grows_without_bound() {
    let mut stack = Stack::with_capacity(1);
    for i in 0..10_000 {
        stack.push(i);
    }
    assert_eq!(stack.count(), 10_000);
    assert_eq!(stack.peek(), Ok(&9_999));
}

#[test]
fn tokenizer_ends_with_exactly_one_end_token() {
    let mut tokens = Tokenizer::new("foo_1>=2.5");

    let expected = [Token::new(TokenKind::Identifier, "foo_1", 0),
                    Token::new(TokenKind::Operator(OpKind::GreaterEqual), ">=", 5),
                    Token::new(TokenKind::Number, "2.5", 7),
                    Token::new(TokenKind::End, "", 10)];
    for want in expected {
        assert_eq!(tokens.next(), Some(Ok(want)));
    }
    assert_eq!(tokens.next(), None);
    assert_eq!(tokens.next(), None);
}

#[test]
fn tokenizer_on_empty_input_yields_only_end() {
    let kinds: Vec<_> = Tokenizer::new("").map(|t| t.map(|t| t.kind)).collect();
    assert_eq!(kinds, vec![Ok(TokenKind::End)]);
}

#[test]
fn tokenizer_peek_does_not_consume() {
    let mut tokens = Tokenizer::new("(x)");

    let peeked = tokens.peek().cloned();
    assert_eq!(peeked, Some(Ok(Token::new(TokenKind::LParen, "(", 0))));
    assert_eq!(tokens.next(), peeked);
    assert_eq!(tokens.next().map(|t| t.map(|t| t.kind)),
               Some(Ok(TokenKind::Identifier)));
}

#[test]
fn tokenizer_stops_after_unrecognized_symbol() {
    let mut tokens = Tokenizer::new("1+?");
    assert!(tokens.next().is_some_and(|t| t.is_ok()));
    assert!(tokens.next().is_some_and(|t| t.is_ok()));
    assert_eq!(tokens.next(),
               Some(Err(ParseError::UnrecognizedSymbol { symbol:   "?".to_string(),
                                                         position: 2, })));
    assert_eq!(tokens.next(), None);
}

#[test]
fn tokenizer_rejects_unstripped_whitespace() {
    let err = Tokenizer::new("1 + 2").find_map(Result::err);
    assert_eq!(err,
               Some(ParseError::UnrecognizedSymbol { symbol:   " ".to_string(),
                                                     position: 1, }));
}

#[test]
fn logical_operator_spellings_share_a_kind() {
    let kinds: Vec<_> = Tokenizer::new("|||&&&").filter_map(Result::ok)
                                                .map(|t| t.kind)
                                                .collect();
    assert_eq!(kinds,
               vec![TokenKind::Operator(OpKind::Or),
                    TokenKind::Operator(OpKind::Or),
                    TokenKind::Operator(OpKind::And),
                    TokenKind::Operator(OpKind::And),
                    TokenKind::End]);
}

#[test]
fn operator_table_is_indexed_by_kind() {
    assert_eq!(OPERATOR_TABLE.len(), OpKind::ALL.len());
    for op in OpKind::ALL {
        let spec = lookup(op).expect("every operator has a table row");
        assert_eq!(spec.kind, op);
        assert_eq!(spec.symbol, op.symbol());
    }
}

#[test]
fn operator_precedence_ranks() {
    let rank = |ops: &[OpKind]| ops.iter().map(|op| op.precedence()).collect::<Vec<_>>();

    assert_eq!(rank(&[OpKind::Or, OpKind::And]), vec![0, 0]);
    assert_eq!(rank(&[OpKind::Equal,
                      OpKind::Less,
                      OpKind::Greater,
                      OpKind::NotEqual,
                      OpKind::LessEqual,
                      OpKind::GreaterEqual]),
               vec![1; 6]);
    assert_eq!(rank(&[OpKind::Add, OpKind::Sub]), vec![2, 2]);
    assert_eq!(rank(&[OpKind::Mul, OpKind::Div]), vec![3, 3]);
    assert_eq!(rank(&[OpKind::Pow]), vec![4]);
}

#[test]
fn only_power_is_right_associative() {
    for op in OpKind::ALL {
        let expected = if op == OpKind::Pow {
            Associativity::Right
        } else {
            Associativity::Left
        };
        assert_eq!(op.associativity(), expected, "operator {op}");
    }
}

#[test]
fn operator_classes() {
    let classes: Vec<_> = OpKind::ALL.iter().map(|op| op.class()).collect();
    assert_eq!(classes,
               [vec![OperatorClass::Arithmetic; 5],
                vec![OperatorClass::Comparison; 6],
                vec![OperatorClass::Logical; 2]].concat());
}

#[test]
fn operator_classes_display_lowercase() {
    let names: Vec<_> = [OperatorClass::Arithmetic, OperatorClass::Comparison, OperatorClass::Logical]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, ["arithmetic", "comparison", "logical"]);
}

#[test]
fn parser_keeps_normalized_source() {
    let parser = Parser::new(" a >\t1 ");
    assert_eq!(parser.source(), "a>1");
    assert_eq!(parser.parse().unwrap().to_string(), "a 1 >");
}

#[test]
fn rpn_exposes_its_tokens() {
    let rpn = Parser::new("x+1").parse().unwrap();
    let kinds: Vec<_> = rpn.as_ref().iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::Identifier,
                    TokenKind::Number,
                    TokenKind::Operator(OpKind::Add)]);

    assert_eq!(rpn.len(), 3);
    assert!(!rpn.is_empty());
    assert!(Parser::new(" ").parse().unwrap().is_empty());

    let tokens = rpn.clone().into_inner();
    assert_eq!(tokens.len(), 3);
    assert_eq!(Rpn::from(tokens), rpn);
}

#[test]
fn boolean_operators_encode_results_as_zero_or_one() {
    assert_eq!(OpKind::GreaterEqual.apply(2.0, 2.0), 1.0);
    assert_eq!(OpKind::NotEqual.apply(2.0, 2.0), 0.0);
    assert_eq!(OpKind::Or.apply(0.0, 0.0), 0.0);
    assert_eq!(OpKind::Or.apply(0.0, 3.0), 1.0);
    assert_eq!(OpKind::And.apply(-1.0, 2.0), 1.0);
}

#[test]
fn typed_values_display_plainly() {
    assert_eq!(TypedValue::Number(7.0).to_string(), "7");
    assert_eq!(TypedValue::Number(0.5).to_string(), "0.5");
    assert_eq!(TypedValue::Boolean(true).to_string(), "true");
    assert_eq!(TypedValue::from(false).as_bool(), Some(false));
    assert_eq!(TypedValue::from(2.0).as_bool(), None);
}

#[test]
fn executor_pops_right_operand_first() {
    let rpn = [Token::new(TokenKind::Number, "8", 0),
               Token::new(TokenKind::Number, "2", 1),
               Token::new(TokenKind::Operator(OpKind::Sub), "-", 2)];
    assert_eq!(execute(&rpn, &Bindings::empty()), Ok(TypedValue::Number(6.0)));
}

#[test]
fn executor_rejects_parentheses_in_rpn() {
    let rpn = [Token::new(TokenKind::LParen, "(", 0),
               Token::new(TokenKind::Number, "1", 1)];
    assert_eq!(execute(&rpn, &Bindings::empty()),
               Err(RuntimeError::UnexpectedToken { token: "(".to_string() }));
}
