use crate::transform::prelude::{
    CallExpression, Expression, ExpressionStatement, Identifier, Program, Statement
};

/// Renders a rewritten tree to call-expression syntax. Pure recursion over
/// the tree, no state; calling it twice on the same tree yields the same
/// text.
pub fn generate(program: &Program) -> String {
    let statements = program.body.iter()
        .map(generate_statement)
        .collect::<Vec<String>>();

    statements.join("\n")
}

pub fn generate_statement(statement: &Statement) -> String {
    match statement {
        Statement::Expression(ExpressionStatement { expression }) => {
            format!("{};", generate_expression(expression))
        },
        Statement::Bare(expression) => generate_expression(expression)
    }
}

pub fn generate_expression(expression: &Expression) -> String {
    match expression {
        Expression::Call(call) => generate_call(call),
        Expression::Number(number) => number.value.clone(),
        Expression::String(string) => format!("\"{}\"", string.value)
    }
}

fn generate_call(call: &CallExpression) -> String {
    let arguments = call.arguments.iter()
        .map(generate_expression)
        .collect::<Vec<String>>();

    format!("{}({})", generate_identifier(&call.callee), arguments.join(", "))
}

fn generate_identifier(identifier: &Identifier) -> String {
    identifier.name.clone()
}
