use std::fmt::Write;

use crate::ast::{Block, Expr, FunctionCall, FunctionDecl, Program, Return, Statement};

/// Number of spaces each nesting level is indented by.
pub const INDENT_STEP: usize = 4;

/// Renders a node and its children as an indented tree.
///
/// Each node writes one line holding its kind (and name or value where it has
/// one), then its children at `indent + INDENT_STEP`.
pub trait Dump {
    /// Appends the dump of `self` to `out`, starting at column `indent`.
    fn dump_into(&self, out: &mut String, indent: usize);
}

/// Dumps a node at indent level zero.
///
/// # Example
/// ```
/// use calc::{ast::dump::dump, parse, ScanPolicy};
///
/// let parsed = parse("return 1 + 2;", ScanPolicy::Recover).unwrap();
///
/// assert_eq!(dump(&parsed.program),
///            "Program\n    Block\n    Return\n        BinOp: Add\n            Number: 1\n            Number: 2\n");
/// ```
#[must_use]
pub fn dump(node: &impl Dump) -> String {
    let mut out = String::new();
    node.dump_into(&mut out, 0);
    out
}

fn line(out: &mut String, indent: usize, text: std::fmt::Arguments<'_>) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{:indent$}{text}", "");
}

impl Dump for Program {
    fn dump_into(&self, out: &mut String, indent: usize) {
        line(out, indent, format_args!("Program"));
        self.body.dump_into(out, indent + INDENT_STEP);
        self.return_stmt.dump_into(out, indent + INDENT_STEP);
    }
}

impl Dump for Block {
    fn dump_into(&self, out: &mut String, indent: usize) {
        line(out, indent, format_args!("Block"));
        for statement in &self.statements {
            statement.dump_into(out, indent + INDENT_STEP);
        }
    }
}

impl Dump for Return {
    fn dump_into(&self, out: &mut String, indent: usize) {
        line(out, indent, format_args!("Return"));
        self.value.dump_into(out, indent + INDENT_STEP);
    }
}

impl Dump for FunctionCall {
    fn dump_into(&self, out: &mut String, indent: usize) {
        line(out, indent, format_args!("Call {}", self.name));
        for argument in &self.arguments {
            argument.dump_into(out, indent + INDENT_STEP);
        }
    }
}

impl Dump for FunctionDecl {
    fn dump_into(&self, out: &mut String, indent: usize) {
        line(out,
             indent,
             format_args!("FunctionDecl {}({})", self.name, self.params.join(", ")));
        self.body.dump_into(out, indent + INDENT_STEP);
    }
}

impl Dump for Expr {
    fn dump_into(&self, out: &mut String, indent: usize) {
        match self {
            Self::Number { value, .. } => line(out, indent, format_args!("Number: {value}")),
            Self::Ident { name, .. } => line(out, indent, format_args!("Ident: {name}")),
            Self::BinaryOp { left, op, right, .. } => {
                line(out, indent, format_args!("BinOp: {}", op.name()));
                left.dump_into(out, indent + INDENT_STEP);
                right.dump_into(out, indent + INDENT_STEP);
            },
            Self::FunctionCall(call) => call.dump_into(out, indent),
        }
    }
}

impl Dump for Statement {
    fn dump_into(&self, out: &mut String, indent: usize) {
        match self {
            Self::Assign { name, value, .. } => {
                line(out, indent, format_args!("Assign {name}"));
                value.dump_into(out, indent + INDENT_STEP);
            },
            Self::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                line(out, indent, format_args!("If"));
                condition.dump_into(out, indent + INDENT_STEP);
                then_branch.dump_into(out, indent + INDENT_STEP);
                if let Some(else_branch) = else_branch {
                    else_branch.dump_into(out, indent + INDENT_STEP);
                }
            },
            Self::While { condition, body, .. } => {
                line(out, indent, format_args!("While"));
                condition.dump_into(out, indent + INDENT_STEP);
                body.dump_into(out, indent + INDENT_STEP);
            },
            Self::Block(block) => block.dump_into(out, indent),
            Self::Expression(call) => {
                line(out, indent, format_args!("ExpressionStatement"));
                call.dump_into(out, indent + INDENT_STEP);
            },
            Self::FunctionDecl(decl) => decl.dump_into(out, indent),
            Self::Empty => line(out, indent, format_args!("Empty")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScanPolicy, parse};

    fn dump_source(source: &str) -> String {
        dump(&parse(source, ScanPolicy::Recover).unwrap().program)
    }

    #[test]
    fn dumps_control_flow() {
        let expected = "\
Program
    Block
        While
            BinOp: LT
                Ident: i
                Number: 3
            Block
                Assign i
                    BinOp: Add
                        Ident: i
                        Number: 1
        If
            BinOp: EQ
                Ident: i
                Number: 3
            ExpressionStatement
                Call print
                    Ident: i
            Empty
    Return
        Ident: i
";
        let source = "while (i < 3) { i = i + 1; } if (i == 3) print(i); else ; return i;";
        assert_eq!(dump_source(source), expected);
    }

    #[test]
    fn dumps_function_declarations() {
        let expected = "\
Program
    Block
        FunctionDecl add(a, b)
            Program
                Block
                Return
                    BinOp: Add
                        Ident: a
                        Ident: b
    Return
        Call add
            Number: 2
            Number: 3
";
        assert_eq!(dump_source("fn add(a, b) { return a + b; } return add(2, 3);"),
                   expected);
    }

    #[test]
    fn dump_respects_starting_indent() {
        let expr = Expr::Number { value:    7,
                                  position: crate::ast::Position::default(), };
        let mut out = String::new();
        expr.dump_into(&mut out, 2);
        assert_eq!(out, "  Number: 7\n");
    }
}
