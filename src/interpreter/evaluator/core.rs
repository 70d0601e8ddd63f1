use std::{
    collections::HashMap,
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::{BlockStmt, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{builtin, index, infix, prefix},
        value::core::{FunctionValue, HashPair, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Interrupt`] describing why evaluation cannot continue downward.
pub type EvalResult<T> = Result<T, Interrupt>;

/// A non-local exit raised while walking the tree.
///
/// Both arms short-circuit every statement sequence they cross. A `Return`
/// is unwrapped back into a plain value at the function or program boundary;
/// an `Error` propagates all the way out and becomes the final result.
#[derive(Debug, Clone, PartialEq)]
pub enum Interrupt {
    /// A `return` statement unwinding to the enclosing function call.
    Return(Value),
    /// A runtime error aborting evaluation.
    Error(RuntimeError),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Walks the syntax tree and computes values.
///
/// The evaluator itself is almost stateless: all bindings live in the
/// [`Env`] passed alongside each node, so one evaluator can serve any number
/// of programs and environments. The only owned state is the sink the
/// `print` builtin writes to.
///
/// ## Usage
///
/// ```
/// use hilt::interpreter::{
///     environment::Environment,
///     evaluator::core::Evaluator,
///     lexer::lex,
///     parser::statement::parse_program,
///     value::core::Value,
/// };
///
/// let tokens = lex("let double = fn(x) { x * 2 }; double(21)");
/// let (program, errors) = parse_program(&mut tokens.iter().peekable());
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// let result = Evaluator::new().eval_program(&program, &env);
///
/// assert_eq!(result, Ok(Some(Value::Integer(42))));
/// ```
pub struct Evaluator {
    out: Box<dyn Write>,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates an evaluator whose `print` builtin writes to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self { out: Box::new(io::stdout()) }
    }

    /// Creates an evaluator with a custom `print` sink.
    #[must_use]
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Self { out }
    }

    /// Writes one value to the print sink, followed by a newline.
    pub(in crate::interpreter::evaluator) fn print_line(&mut self, value: &Value) {
        let _ = writeln!(self.out, "{value}");
    }

    /// Evaluates a whole program against an environment.
    ///
    /// Statements run in order. A `return` at the top level ends the program
    /// with the returned value; a runtime error ends it immediately and is
    /// the result. Otherwise the result is the last statement's value, which
    /// is `None` when that statement was a binding.
    ///
    /// # Parameters
    /// - `program`: The parsed program; must be free of parse errors.
    /// - `env`: The global environment to evaluate against.
    ///
    /// # Returns
    /// The program's final value, or the first runtime error raised.
    pub fn eval_program(&mut self,
                        program: &Program,
                        env: &Env)
                        -> Result<Option<Value>, RuntimeError> {
        let mut result = None;

        for statement in &program.statements {
            match self.eval_statement(statement, env) {
                Ok(value) => result = value,
                Err(Interrupt::Return(value)) => return Ok(Some(value)),
                Err(Interrupt::Error(error)) => return Err(error),
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// `let` evaluates its value and binds it in the current scope without
    /// producing a value; `return` raises [`Interrupt::Return`]; an
    /// expression statement produces its expression's value.
    pub(crate) fn eval_statement(&mut self,
                                 statement: &Statement,
                                 env: &Env)
                                 -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval_expression(value, env)?;
                env.borrow_mut().set(name.clone(), value);
                Ok(None)
            },
            Statement::Return { value, .. } => {
                let value = self.eval_expression(value, env)?;
                Err(Interrupt::Return(value))
            },
            Statement::Expression { expr, .. } => self.eval_expression(expr, env).map(Some),
        }
    }

    /// Evaluates a statement block.
    ///
    /// Unlike at the program boundary, a `Return` raised inside is passed on
    /// as-is so that it keeps unwinding until the enclosing function call
    /// unwraps it. Blocks do not open a scope of their own.
    pub(crate) fn eval_block(&mut self,
                             block: &BlockStmt,
                             env: &Env)
                             -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
        }

        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches on the expression variant; operator and call
    /// rules live in their own modules.
    pub(crate) fn eval_expression(&mut self, expr: &Expr, env: &Env) -> EvalResult<Value> {
        match expr {
            Expr::Identifier { name, .. } => Self::eval_identifier(name, env),
            Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
            Expr::StringLiteral { value, .. } => Ok(Value::from(value.as_str())),
            Expr::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),
            Expr::Prefix { op, right, .. } => {
                let right = self.eval_expression(right, env)?;
                Ok(prefix::eval_prefix(*op, &right)?)
            },
            Expr::Infix { left, op, right, .. } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Ok(infix::eval_infix(*op, &left, &right)?)
            },
            Expr::If { condition,
                       consequence,
                       alternative,
                       .. } => self.eval_if(condition, consequence, alternative.as_ref(), env),
            Expr::FunctionLiteral { parameters, body, .. } => {
                Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                           body:       body.clone(),
                                                           env:        env.clone(), })))
            },
            Expr::Call { function, arguments, .. } => self.eval_call(function, arguments, env),
            Expr::Index { left, index, .. } => {
                let left = self.eval_expression(left, env)?;
                let index = self.eval_expression(index, env)?;
                Ok(index::eval_index(&left, &index)?)
            },
            Expr::ArrayLiteral { elements, .. } => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval_expression(element, env)?);
                }
                Ok(Value::from(values))
            },
            Expr::HashLiteral { pairs, .. } => self.eval_hash_literal(pairs, env),
        }
    }

    /// Resolves an identifier: the environment chain first, the builtin
    /// table second.
    fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
        if let Some(value) = env.borrow().get(name) {
            return Ok(value);
        }
        if let Some(builtin) = builtin::lookup(name) {
            return Ok(Value::Builtin(builtin));
        }

        Err(RuntimeError::IdentifierNotFound { name: name.to_string() }.into())
    }

    /// Evaluates a conditional expression.
    ///
    /// The condition is truthy unless it is `Null` or `false`. A branch that
    /// produces no value, and a falsy condition without an `else`, read as
    /// `Null`.
    fn eval_if(&mut self,
               condition: &Expr,
               consequence: &BlockStmt,
               alternative: Option<&BlockStmt>,
               env: &Env)
               -> EvalResult<Value> {
        let condition = self.eval_expression(condition, env)?;

        if condition.is_truthy() {
            Ok(self.eval_block(consequence, env)?.unwrap_or(Value::Null))
        } else if let Some(alternative) = alternative {
            Ok(self.eval_block(alternative, env)?.unwrap_or(Value::Null))
        } else {
            Ok(Value::Null)
        }
    }

    /// Evaluates a hash literal.
    ///
    /// Pairs evaluate in source order, key before value; each key must be a
    /// hashable type. A key written twice keeps its last value.
    fn eval_hash_literal(&mut self, pairs: &[(Expr, Expr)], env: &Env) -> EvalResult<Value> {
        let mut map = HashMap::with_capacity(pairs.len());

        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr, env)?;
            let Some(hash_key) = key.hash_key() else {
                return Err(RuntimeError::UnusableAsHashKey { type_name: key.type_name() }.into());
            };

            let value = self.eval_expression(value_expr, env)?;
            map.insert(hash_key, HashPair { key, value });
        }

        Ok(Value::Hash(Rc::new(map)))
    }
}
