use std::rc::Rc;

/// Indented, human-readable rendering of AST nodes.
///
/// Purely diagnostic. Used by the CLI's `--dump-ast` flag and by tests that
/// check the shape of parsed programs.
pub mod dump;

/// A location in the source text.
///
/// Both coordinates are 1-based. The column counts bytes from the start of the
/// line, which matches characters for the ASCII-only token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} col {}", self.line, self.column)
    }
}

/// An expression node.
///
/// Expressions always produce an `i64`. Comparisons produce `0` or `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value, already wrapped to 64 bits by the scanner.
        value:    i64,
        /// Where the literal starts.
        position: Position,
    },
    /// A variable read.
    Ident {
        /// Name of the variable.
        name:     String,
        /// Where the identifier starts.
        position: Position,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand, evaluated first.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator token.
        position: Position,
    },
    /// A call used as a value.
    FunctionCall(FunctionCall),
}

impl Expr {
    /// Gets the source position of `self`.
    /// ## Example
    /// ```
    /// use calc::ast::{Expr, Position};
    ///
    /// let expr = Expr::Ident { name:     "x".to_string(),
    ///                          position: Position::new(5, 2), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 2));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Number { position, .. }
            | Self::Ident { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall(FunctionCall { position, .. }) => *position,
        }
    }
}

/// A call site `name(arguments...)`.
///
/// Shared by call expressions and call statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// Name of the function being called.
    pub name:      String,
    /// Argument expressions, in source order.
    pub arguments: Vec<Expr>,
    /// Where the callee name starts.
    pub position:  Position,
}

/// A binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating toward zero
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// The node name used by the AST dump (`Add`, `LT`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::Less => "LT",
            Self::Greater => "GT",
            Self::Equal => "EQ",
            Self::NotEqual => "NE",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// A statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `name = value;`, always written into the innermost scope.
    Assign {
        /// The variable being bound.
        name:     String,
        /// The value expression.
        value:    Expr,
        /// Where the variable name starts.
        position: Position,
    },
    /// `if (condition) then_branch [else else_branch]`
    If {
        /// The condition; any nonzero value is true.
        condition:   Expr,
        /// Statement executed when the condition holds.
        then_branch: Box<Self>,
        /// Optional statement executed otherwise.
        else_branch: Option<Box<Self>>,
        /// Position of the `if` keyword.
        position:    Position,
    },
    /// `while (condition) body`
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Position of the `while` keyword.
        position:  Position,
    },
    /// `{ statements }`
    Block(Block),
    /// A call evaluated for its side effects.
    Expression(FunctionCall),
    /// `fn name(params) { program }`
    FunctionDecl(Rc<FunctionDecl>),
    /// A bare `;`.
    Empty,
}

/// A braced statement list. Blocks do not open a new scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A user function declaration.
///
/// Held behind an `Rc` so environments can refer to the declaration without
/// copying its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// The function name.
    pub name:     String,
    /// Parameter names, in order.
    pub params:   Vec<String>,
    /// The function body, which must end in a `return`.
    pub body:     Program,
    /// Position of the `fn` keyword.
    pub position: Position,
}

/// `return value;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Return {
    /// The returned expression.
    pub value:    Expr,
    /// Position of the `return` keyword.
    pub position: Position,
}

/// A whole script or a function body: a statement list followed by a mandatory
/// `return`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Statements executed for their side effects.
    pub body:        Block,
    /// The statement whose value leaves the program.
    pub return_stmt: Return,
}
