use std::fmt;

/// A named mathematical constant.
///
/// Constants are resolved at parse time from their lowercase name and carry
/// no data of their own; [`Constant::value`] yields the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// Archimedes' constant, `pi`.
    Pi,
    /// Euler's number, `e`.
    E,
}

impl Constant {
    /// Every constant known to the parser.
    pub const ALL: [Self; 2] = [Self::Pi, Self::E];

    /// Resolves a lowercase identifier to a constant.
    ///
    /// # Example
    /// ```
    /// use fplot::ast::Constant;
    ///
    /// assert_eq!(Constant::from_name("pi"), Some(Constant::Pi));
    /// assert_eq!(Constant::from_name("tau"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The identifier this constant is written as.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// The numeric value of this constant.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

/// A unary function from the fixed function table.
///
/// Identifiers are mapped to this enum once, while parsing. Nothing is ever
/// substituted textually, so `asin` can never be mistaken for `sin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `asin`
    Asin,
    /// `acos`
    Acos,
    /// `atan`
    Atan,
    /// `sinh`
    Sinh,
    /// `cosh`
    Cosh,
    /// `tanh`
    Tanh,
    /// `asinh`
    Asinh,
    /// `acosh`
    Acosh,
    /// `atanh`
    Atanh,
    /// Natural logarithm, `log`.
    Log,
    /// `log10`
    Log10,
    /// `exp`
    Exp,
    /// `sqrt`
    Sqrt,
}

impl Function {
    /// Every function known to the parser, in table order.
    pub const ALL: [Self; 16] = [Self::Sin,
                                 Self::Cos,
                                 Self::Tan,
                                 Self::Asin,
                                 Self::Acos,
                                 Self::Atan,
                                 Self::Sinh,
                                 Self::Cosh,
                                 Self::Tanh,
                                 Self::Asinh,
                                 Self::Acosh,
                                 Self::Atanh,
                                 Self::Log,
                                 Self::Log10,
                                 Self::Exp,
                                 Self::Sqrt];

    /// Resolves a lowercase identifier to a function.
    ///
    /// # Example
    /// ```
    /// use fplot::ast::Function;
    ///
    /// assert_eq!(Function::from_name("asin"), Some(Function::Asin));
    /// assert_eq!(Function::from_name("SIN"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// The identifier this function is written as.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Asinh => "asinh",
            Self::Acosh => "acosh",
            Self::Atanh => "atanh",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Exp => "exp",
            Self::Sqrt => "sqrt",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`, also written `**`.
    Pow,
}

impl BinaryOperator {
    /// The operator symbol, as used in diagnostics.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An abstract syntax tree node of a single-variable expression.
///
/// Every node exclusively owns its children, so a tree can be cloned, compared
/// and sent across threads freely. The only free variable is `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Constant(f64),
    /// The sampling parameter `x`.
    Variable,
    /// A named constant such as `pi`.
    NamedConstant(Constant),
    /// A call to a unary function, e.g. `sin(x)`.
    FunctionCall {
        /// The function being called.
        function: Function,
        /// Its single argument.
        argument: Box<Self>,
    },
    /// Arithmetic negation.
    UnaryMinus(Box<Self>),
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a function call node.
    #[must_use]
    pub fn call(function: Function, argument: Self) -> Self {
        Self::FunctionCall { function,
                             argument: Box::new(argument) }
    }

    /// Builds a negation node.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::UnaryMinus(Box::new(operand))
    }

    /// Returns `true` if the tree references the variable `x` anywhere.
    ///
    /// # Example
    /// ```
    /// use fplot::ast::{BinaryOperator, Expr};
    ///
    /// let e = Expr::binary(BinaryOperator::Add, Expr::Variable, Expr::Constant(1.0));
    /// assert!(e.depends_on_x());
    /// assert!(!Expr::Constant(2.0).depends_on_x());
    /// ```
    #[must_use]
    pub fn depends_on_x(&self) -> bool {
        match self {
            Self::Variable => true,
            Self::Constant(_) | Self::NamedConstant(_) => false,
            Self::FunctionCall { argument, .. } => argument.depends_on_x(),
            Self::UnaryMinus(operand) => operand.depends_on_x(),
            Self::BinaryOp { left, right, .. } => left.depends_on_x() || right.depends_on_x(),
        }
    }

    /// Returns the number of nodes on the longest path from this node to a
    /// leaf. A leaf has height 1.
    ///
    /// # Example
    /// ```
    /// use fplot::ast::{Expr, Function};
    ///
    /// assert_eq!(Expr::Variable.height(), 1);
    /// assert_eq!(Expr::call(Function::Sin, Expr::negate(Expr::Variable)).height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Variable | Self::NamedConstant(_) => 1,
            Self::FunctionCall { argument, .. } => argument.height() + 1,
            Self::UnaryMinus(operand) => operand.height() + 1,
            Self::BinaryOp { left, right, .. } => left.height().max(right.height()) + 1,
        }
    }
}

/// Renders the tree fully parenthesized, so precedence is explicit.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => write!(f, "{v}"),
            Self::Variable => f.write_str("x"),
            Self::NamedConstant(c) => f.write_str(c.name()),
            Self::FunctionCall { function, argument } => write!(f, "{function}({argument})"),
            Self::UnaryMinus(operand) => write!(f, "(-{operand})"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
