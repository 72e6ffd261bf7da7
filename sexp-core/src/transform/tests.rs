use super::prelude::{
    transform, CallExpression, Expression, ExpressionStatement, Identifier, NumberLiteral,
    Program, Statement, StringLiteral,
};
use crate::parser::prelude::{parse_program, Node, ParseError};

fn number(value: &str) -> Expression {
    Expression::Number(NumberLiteral {
        value: value.to_string(),
    })
}

fn string(value: &str) -> Expression {
    Expression::String(StringLiteral {
        value: value.to_string(),
    })
}

fn call(name: &str, arguments: Vec<Expression>) -> Expression {
    Expression::Call(CallExpression {
        callee: Identifier {
            name: name.to_string(),
        },
        arguments,
    })
}

fn statement(expression: Expression) -> Statement {
    Statement::Expression(ExpressionStatement { expression })
}

fn source_calls(node: &Node) -> usize {
    match node {
        Node::Call(call) => 1 + call.params.iter().map(source_calls).sum::<usize>(),
        _ => 0,
    }
}

fn target_calls(expression: &Expression) -> usize {
    match expression {
        Expression::Call(call) => {
            1 + call.arguments.iter().map(target_calls).sum::<usize>()
        }
        _ => 0,
    }
}

#[test]
fn test_nested_call_stays_bare() -> Result<(), ParseError> {
    let program = transform(&parse_program("(add 1 (subtract 6 5))")?);

    assert_eq!(
        program,
        Program {
            body: vec![statement(call(
                "add",
                vec![number("1"), call("subtract", vec![number("6"), number("5")])]
            ))],
        }
    );

    Ok(())
}

#[test]
fn test_sibling_calls_become_statements() -> Result<(), ParseError> {
    let program = transform(&parse_program("(add 1)\n(subtract 6 5)")?);

    assert_eq!(
        program,
        Program {
            body: vec![
                statement(call("add", vec![number("1")])),
                statement(call("subtract", vec![number("6"), number("5")])),
            ],
        }
    );

    Ok(())
}

#[test]
fn test_top_level_literals_stay_bare() -> Result<(), ParseError> {
    let program = transform(&parse_program("1 2")?);

    assert_eq!(
        program,
        Program {
            body: vec![
                Statement::Bare(number("1")),
                Statement::Bare(number("2")),
            ],
        }
    );

    Ok(())
}

#[test]
fn test_string_arguments() -> Result<(), ParseError> {
    let program = transform(&parse_program(r#"(foo "foo" (bar "bar"))"#)?);

    assert_eq!(
        program,
        Program {
            body: vec![statement(call(
                "foo",
                vec![string("foo"), call("bar", vec![string("bar")])]
            ))],
        }
    );

    Ok(())
}

#[test]
fn test_empty_arguments() -> Result<(), ParseError> {
    let program = transform(&parse_program("(f)")?);

    assert_eq!(
        program,
        Program {
            body: vec![statement(call("f", vec![]))],
        }
    );

    Ok(())
}

#[test]
fn test_argument_order_is_source_order() -> Result<(), ParseError> {
    let program = transform(&parse_program("(f 1 (g 2) 3)")?);

    assert_eq!(
        program,
        Program {
            body: vec![statement(call(
                "f",
                vec![number("1"), call("g", vec![number("2")]), number("3")]
            ))],
        }
    );

    Ok(())
}

#[test]
fn test_call_count_is_preserved() -> Result<(), ParseError> {
    let source = parse_program("(a 1 (b 2 (c 3)) (d) \"s\") (e 4)")?;
    let target = transform(&source);

    let source_count = source.body.iter().map(source_calls).sum::<usize>();
    let target_count = target
        .body
        .iter()
        .map(|statement| match statement {
            Statement::Expression(ExpressionStatement { expression }) => {
                target_calls(expression)
            }
            Statement::Bare(expression) => target_calls(expression),
        })
        .sum::<usize>();

    assert_eq!(source_count, 5);
    assert_eq!(source_count, target_count);

    Ok(())
}
