/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all expression forms: literals, identifiers, prefix and
/// infix operations, conditionals, function literals, calls, indexing, and
/// the array and hash container literals. Each variant keeps the source line
/// of the token that introduced it.
///
/// The `Display` impl renders the canonical, fully parenthesized text form
/// used to pin down precedence and associativity, e.g. `-x * y` renders as
/// `((-x) * y)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal; the payload is the interior of the quotes.
    StringLiteral {
        /// The literal text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation (e.g. `!ok`, `-x`).
    Prefix {
        /// The prefix operator to apply.
        op:    PrefixOperator,
        /// The operand expression.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary operation (arithmetic or comparison).
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional expression with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStmt,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStmt>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function literal (e.g. `fn(x, y) { x + y }`).
    FunctionLiteral {
        /// Parameter names, in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStmt,
        /// Line number in the source code.
        line:       usize,
    },
    /// A call expression; the callee is an arbitrary expression.
    Call {
        /// The expression being called.
        function:  Box<Self>,
        /// Arguments to the call.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An index expression (e.g. `arr[0]`, `h["key"]`).
    Index {
        /// The collection being indexed.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Array literal expression.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Hash literal expression; pairs keep their source order.
    HashLiteral {
        /// `key: value` pairs of the literal.
        pairs: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use hilt::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. }
            | Self::Index { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::HashLiteral { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units a program is made of. Blocks are not statements
/// themselves; they only appear as conditional and function bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `return` statement unwinding to the enclosing function.
    Return {
        /// The returned value expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// A braced sequence of statements, used as `if` and function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number in the source code.
    pub line:       usize,
}

/// A parsed program: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (e.g. `!ok`).
    Not,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// Represents an infix operator.
///
/// Infix operators cover arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::Prefix { op, right, .. } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn(")?;
                for (index, parameter) in parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {body}")
            },
            Self::Call { function, arguments, .. } => {
                write!(f, "{function}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::HashLiteral { pairs, .. } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl std::fmt::Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Program {
    /// Renders the canonical text form of the whole program: the
    /// concatenation of its statements.
    ///
    /// ## Example
    /// ```
    /// use hilt::interpreter::{lexer::lex, parser::statement::parse_program};
    ///
    /// let tokens = lex("let x = 5 + 5;");
    /// let (program, errors) = parse_program(&mut tokens.iter().peekable());
    ///
    /// assert!(errors.is_empty());
    /// assert_eq!(program.to_string(), "let x = (5 + 5);");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
