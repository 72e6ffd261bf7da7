use super::prelude::{traverse, Parent, Visitor};
use crate::parser::prelude::{
    parse_program, CallExpression, NumberLiteral, ParseError, Program, StringLiteral,
};

#[derive(Default)]
struct EventLog {
    events: Vec<String>,
}

impl EventLog {
    fn parent_tag(parent: &Parent<'_>) -> &'static str {
        match parent {
            Parent::Root => "root",
            Parent::Program(_) => "program",
            Parent::Call(_) => "call",
        }
    }
}

impl Visitor for EventLog {
    fn enter_program(&mut self, node: &Program, parent: Parent<'_>) {
        self.events
            .push(format!("enter program[{}] <{}", node.body.len(), Self::parent_tag(&parent)));
    }

    fn exit_program(&mut self, node: &Program, parent: Parent<'_>) {
        self.events
            .push(format!("exit program[{}] <{}", node.body.len(), Self::parent_tag(&parent)));
    }

    fn enter_number(&mut self, node: &NumberLiteral, parent: Parent<'_>) {
        self.events
            .push(format!("enter number {} <{}", node.value, Self::parent_tag(&parent)));
    }

    fn exit_number(&mut self, node: &NumberLiteral, parent: Parent<'_>) {
        self.events
            .push(format!("exit number {} <{}", node.value, Self::parent_tag(&parent)));
    }

    fn enter_string(&mut self, node: &StringLiteral, parent: Parent<'_>) {
        self.events
            .push(format!("enter string {} <{}", node.value, Self::parent_tag(&parent)));
    }

    fn enter_call(&mut self, node: &CallExpression, parent: Parent<'_>) {
        self.events
            .push(format!("enter call {} <{}", node.name, Self::parent_tag(&parent)));
    }

    fn exit_call(&mut self, node: &CallExpression, parent: Parent<'_>) {
        self.events
            .push(format!("exit call {} <{}", node.name, Self::parent_tag(&parent)));
    }
}

#[test]
fn test_enter_exit_ordering() -> Result<(), ParseError> {
    let program = parse_program("(add 1 (subtract 6 5))")?;

    let mut log = EventLog::default();
    traverse(&program, &mut log);

    assert_eq!(
        log.events,
        vec![
            "enter program[1] <root",
            "enter call add <program",
            "enter number 1 <call",
            "exit number 1 <call",
            "enter call subtract <call",
            "enter number 6 <call",
            "exit number 6 <call",
            "enter number 5 <call",
            "exit number 5 <call",
            "exit call subtract <call",
            "exit call add <program",
            "exit program[1] <root",
        ]
    );

    Ok(())
}

#[test]
fn test_siblings_in_source_order() -> Result<(), ParseError> {
    let program = parse_program(r#"1 "two" (three)"#)?;

    let mut log = EventLog::default();
    traverse(&program, &mut log);

    assert_eq!(
        log.events,
        vec![
            "enter program[3] <root",
            "enter number 1 <program",
            "exit number 1 <program",
            "enter string two <program",
            "enter call three <program",
            "exit call three <program",
            "exit program[3] <root",
        ]
    );

    Ok(())
}

#[derive(Default)]
struct CallCounter {
    calls: usize,
}

impl Visitor for CallCounter {
    fn enter_call(&mut self, _node: &CallExpression, _parent: Parent<'_>) {
        self.calls += 1;
    }
}

#[test]
fn test_default_hooks_do_nothing() -> Result<(), ParseError> {
    let program = parse_program("(a 1 (b 2 (c 3)) \"s\")")?;

    let mut counter = CallCounter::default();
    traverse(&program, &mut counter);

    assert_eq!(counter.calls, 3);

    Ok(())
}
