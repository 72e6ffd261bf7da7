// The rewritten tree: statements wrapping expressions, explicit callee
// identifiers. Spans are not carried over; nothing past the parser reports
// source positions.

// program -> {<statement>}
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
}

// statement -> <expression-statement> | <bare literal>
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    // a top level call, rendered with a `;` terminator
    Expression(ExpressionStatement),
    // a top level literal, rendered bare
    Bare(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Call(CallExpression),
    Number(NumberLiteral),
    String(StringLiteral),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}
