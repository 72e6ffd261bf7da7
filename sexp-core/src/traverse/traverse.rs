use crate::parser::prelude::{CallExpression, Node, NumberLiteral, Program, StringLiteral};

/// The node owning the one being visited. The program root has no owner.
#[derive(Debug, Clone, Copy)]
pub enum Parent<'a> {
    Root,
    Program(&'a Program),
    Call(&'a CallExpression),
}

impl<'a> Parent<'a> {
    pub fn is_call(&self) -> bool {
        matches!(self, Parent::Call(_))
    }
}

/// Per-kind hooks for a depth-first walk: `enter_*` runs before the node's
/// children are visited, `exit_*` after all of them. Hooks default to doing
/// nothing, so a visitor only implements the kinds it cares about.
pub trait Visitor {
    fn enter_program(&mut self, _node: &Program, _parent: Parent<'_>) {}
    fn exit_program(&mut self, _node: &Program, _parent: Parent<'_>) {}

    fn enter_number(&mut self, _node: &NumberLiteral, _parent: Parent<'_>) {}
    fn exit_number(&mut self, _node: &NumberLiteral, _parent: Parent<'_>) {}

    fn enter_string(&mut self, _node: &StringLiteral, _parent: Parent<'_>) {}
    fn exit_string(&mut self, _node: &StringLiteral, _parent: Parent<'_>) {}

    fn enter_call(&mut self, _node: &CallExpression, _parent: Parent<'_>) {}
    fn exit_call(&mut self, _node: &CallExpression, _parent: Parent<'_>) {}
}

/// Walks the tree depth first, siblings in source order. Dispatch is an
/// exhaustive match over the node kinds; a new kind does not compile until
/// the walker and every visitor handle it.
pub fn traverse<V: Visitor>(program: &Program, visitor: &mut V) {
    visitor.enter_program(program, Parent::Root);

    for child in &program.body {
        traverse_node(child, Parent::Program(program), visitor);
    }

    visitor.exit_program(program, Parent::Root);
}

fn traverse_node<'a, V: Visitor>(node: &'a Node, parent: Parent<'a>, visitor: &mut V) {
    match node {
        Node::Number(number) => {
            visitor.enter_number(number, parent);
            visitor.exit_number(number, parent);
        },
        Node::String(string) => {
            visitor.enter_string(string, parent);
            visitor.exit_string(string, parent);
        },
        Node::Call(call) => {
            visitor.enter_call(call, parent);

            for param in &call.params {
                traverse_node(param, Parent::Call(call), visitor);
            }

            visitor.exit_call(call, parent);
        }
    }
}
