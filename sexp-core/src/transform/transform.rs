use crate::parser::prelude as source;
use crate::traverse::prelude::{traverse, Parent, Visitor};
use super::ast::{
    CallExpression, Expression, ExpressionStatement, Identifier, NumberLiteral, Program,
    Statement, StringLiteral
};

/// Rewrites a source tree into the target vocabulary in a single walk.
///
/// Every translated form is appended to an explicit sink: the statement list
/// when the owning node is the program, the innermost open call's argument
/// list otherwise. `enter_call` opens a sink, `exit_call` closes it once the
/// arguments are complete, so a sink can never be read before it exists.
struct Transformer {
    statements: Vec<Statement>,
    sinks: Vec<Vec<Expression>>,
}

impl Transformer {
    fn new() -> Self {
        Self {
            statements: vec![],
            sinks: vec![],
        }
    }

    fn push_expression(&mut self, parent: Parent<'_>, expression: Expression) {
        if parent.is_call() {
            self.sinks
                .last_mut()
                .expect("an open call always has an argument sink")
                .push(expression);
        } else {
            self.statements.push(Statement::Bare(expression));
        }
    }
}

impl Visitor for Transformer {
    fn enter_number(&mut self, node: &source::NumberLiteral, parent: Parent<'_>) {
        self.push_expression(parent, Expression::Number(NumberLiteral {
            value: node.value.clone(),
        }));
    }

    fn enter_string(&mut self, node: &source::StringLiteral, parent: Parent<'_>) {
        self.push_expression(parent, Expression::String(StringLiteral {
            value: node.value.clone(),
        }));
    }

    fn enter_call(&mut self, node: &source::CallExpression, _parent: Parent<'_>) {
        self.sinks.push(Vec::with_capacity(node.params.len()));
    }

    fn exit_call(&mut self, node: &source::CallExpression, parent: Parent<'_>) {
        let arguments = self.sinks
            .pop()
            .expect("exit_call always follows its enter_call");

        let call = CallExpression {
            callee: Identifier { name: node.name.clone() },
            arguments,
        };

        // The wrapping decision keys on the immediate parent only: a call
        // used as an argument stays a bare expression, a call sitting
        // directly under the program becomes a statement.
        if parent.is_call() {
            self.sinks
                .last_mut()
                .expect("an open call always has an argument sink")
                .push(Expression::Call(call));
        } else {
            self.statements.push(Statement::Expression(ExpressionStatement {
                expression: Expression::Call(call),
            }));
        }
    }
}

pub fn transform(program: &source::Program) -> Program {
    let mut transformer = Transformer::new();

    traverse(program, &mut transformer);

    Program {
        body: transformer.statements,
    }
}
