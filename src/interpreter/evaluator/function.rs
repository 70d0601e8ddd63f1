use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::{
            builtin::Arity,
            core::{EvalResult, Evaluator, Interrupt},
        },
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a call expression.
    ///
    /// The callee evaluates first, then every argument left to right; the
    /// first error among them is the call's result and nothing further
    /// runs.
    ///
    /// # Parameters
    /// - `function`: The callee expression.
    /// - `arguments`: The argument expressions, in source order.
    /// - `env`: The environment of the call site.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       function: &Expr,
                                                       arguments: &[Expr],
                                                       env: &Env)
                                                       -> EvalResult<Value> {
        let callee = self.eval_expression(function, env)?;

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_expression(argument, env)?);
        }

        self.apply_function(&callee, args)
    }

    /// Applies an evaluated callee to evaluated arguments.
    ///
    /// A user function gets a fresh scope enclosed by its captured
    /// environment, with each parameter bound positionally; its body runs as
    /// a block and a `return` raised inside is unwrapped here. A body that
    /// falls off the end without producing a value reads as `Null`. Builtins
    /// dispatch through their table entry.
    ///
    /// # Errors
    /// - `wrong number of arguments` when the argument count does not match
    ///   the parameter count (or a builtin's declared arity).
    /// - `not a function` when the callee is any other value.
    fn apply_function(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult<Value> {
        match callee {
            Value::Function(function) => {
                if args.len() != function.parameters.len() {
                    return Err(RuntimeError::WrongArgumentCount { got:  args.len(),
                                                                  want:
                                                                      function.parameters.len(), }
                                                                .into());
                }

                let scope = Environment::new_enclosed(function.env.clone());
                for (parameter, argument) in function.parameters.iter().zip(args) {
                    scope.borrow_mut().set(parameter.clone(), argument);
                }

                match self.eval_block(&function.body, &scope) {
                    Err(Interrupt::Return(value)) => Ok(value),
                    other => other.map(|value| value.unwrap_or(Value::Null)),
                }
            },
            Value::Builtin(builtin) => {
                if let Arity::Exact(want) = builtin.arity
                   && args.len() != want
                {
                    return Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                                                  want }.into());
                }

                (builtin.func)(self, &args)
            },
            other => Err(RuntimeError::NotAFunction { type_name: other.type_name() }.into()),
        }
    }
}
