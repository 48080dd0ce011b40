use std::{mem, rc::Rc};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant scalars that can appear directly in
/// source code: numbers, strings, booleans and `nil`. The scanner attaches it
/// to literal tokens and the parser copies it into [`Expr::Literal`] nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A double-precision number literal, such as `3` or `2.5`.
    Number(f64),
    /// A string literal without its surrounding quotes.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `nil` literal.
    Nil,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant that can fail at runtime keeps the line of the token that
/// introduced it, so errors can point back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or nil).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
    },
    /// A prefix operation (`-x`, `!x`).
    Unary {
        /// The unary operator to apply.
        op:    UnaryOperator,
        /// The operand expression.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// A short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when needed.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to an existing variable. Evaluates to the assigned value.
    Assign {
        /// Name of the assigned variable.
        name:  String,
        /// The value expression.
        value: Box<Self>,
        /// Line number of the target name.
        line:  usize,
    },
    /// Function call expression (e.g. `add(1, 2)`).
    Call {
        /// The expression producing the function.
        callee:    Box<Self>,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Line number of the closing parenthesis.
        line:      usize,
    },
}

impl Drop for Expr {
    /// Frees nested operands from an explicit worklist, so dropping a deeply
    /// nested tree does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_operands(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_operands(&mut pending);
        }
    }
}

impl Expr {
    /// Placeholder left behind in a box whose operand was moved out.
    const HOLLOW: Self = Self::Literal { value: LiteralValue::Nil };

    /// Moves `operand` onto `pending` unless it is a leaf.
    fn detach(operand: &mut Self, pending: &mut Vec<Self>) {
        if !matches!(operand, Self::Literal { .. } | Self::Variable { .. }) {
            pending.push(mem::replace(operand, Self::HOLLOW));
        }
    }

    fn detach_operands(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => {},
            Self::Grouping { expr: operand }
            | Self::Unary { right: operand, .. }
            | Self::Assign { value: operand, .. } => Self::detach(operand, pending),
            Self::Binary { left, right, .. } | Self::Logical { left, right, .. } => {
                Self::detach(left, pending);
                Self::detach(right, pending);
            },
            Self::Call { callee, arguments, .. } => {
                Self::detach(callee, pending);
                pending.append(arguments);
            },
        }
    }
}

/// A user-defined function declaration.
///
/// Shared behind an [`Rc`] so that every function value created from it can
/// keep it alive without cloning the body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in order.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Stmt>,
    /// Line number of the function name.
    pub line:   usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// `output expr;` writes the display form of a value.
    Output {
        /// The expression to print.
        expr: Expr,
    },
    /// A variable declaration using `create`.
    Create {
        /// The name of the variable.
        name:        String,
        /// The initial value; `nil` when absent.
        initializer: Option<Expr>,
        /// Line number of the name.
        line:        usize,
    },
    /// A braced sequence of statements with its own scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
    },
    /// Conditional execution.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed otherwise, if present.
        else_branch: Option<Box<Self>>,
    },
    /// Loop while the condition is truthy. `for` loops are lowered to this.
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
    /// A function declaration using `func`.
    Function(Rc<FunctionDecl>),
    /// `return` with an optional value.
    Return {
        /// The returned value; `nil` when absent.
        value: Option<Expr>,
        /// Line number of the `return` keyword.
        line:  usize,
    },
}

impl Drop for Stmt {
    /// Frees nested statements from an explicit worklist. Expressions inside
    /// take care of themselves.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut statement) = pending.pop() {
            statement.detach_children(&mut pending);
        }
    }
}

impl Stmt {
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        let hollow = || Self::Block { statements: Vec::new() };
        match self {
            Self::Expression { .. }
            | Self::Output { .. }
            | Self::Create { .. }
            | Self::Return { .. } => {},
            Self::Block { statements } => pending.append(statements),
            Self::If { then_branch,
                       else_branch,
                       .. } => {
                pending.push(mem::replace(then_branch.as_mut(), hollow()));
                if let Some(else_branch) = else_branch {
                    pending.push(mem::replace(else_branch.as_mut(), hollow()));
                }
            },
            Self::While { body, .. } => pending.push(mem::replace(body.as_mut(), hollow())),
            // A declaration still held by a function value stays alive.
            Self::Function(declaration) => {
                if let Some(declaration) = Rc::get_mut(declaration) {
                    pending.append(&mut declaration.body);
                }
            },
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}
