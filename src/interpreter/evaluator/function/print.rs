use crate::{
    ast::{Expr, Position},
    interpreter::{
        environment::EnvironmentRef,
        evaluator::core::{Context, EvalResult},
    },
};

/// Writes its arguments to the output sink and returns `0`.
///
/// Every argument is evaluated in the caller's environment before anything is
/// written, so a failing argument produces no partial line. Values are
/// separated by `", "` and followed by a newline; `print()` writes an empty
/// line.
///
/// # Example
/// ```
/// use calc::{Config, Interpreter};
///
/// let mut output = Vec::new();
/// let outcome = Interpreter::new(Config::default()).run("x = 2; print(x, x * 10); return 0;",
///                                                       &mut output)
///                                                  .unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "2, 20\n");
/// assert_eq!(outcome.result, 0);
/// ```
pub fn print(context: &mut Context<'_>,
             env: &EnvironmentRef,
             args: &[Expr],
             _position: Position)
             -> EvalResult<i64> {
    let values = args.iter()
                     .map(|arg| context.eval(arg, env).map(|value| value.to_string()))
                     .collect::<EvalResult<Vec<_>>>()?;

    writeln!(context.output(), "{}", values.join(", "))?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use crate::{Config, Interpreter, error::Error};

    fn printed(source: &str) -> (Result<i64, Error>, String) {
        let mut output = Vec::new();
        let result = Interpreter::new(Config::default()).run(source, &mut output)
                                                        .map(|outcome| outcome.result);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn joins_arguments_with_commas() {
        let (result, output) = printed("print(1, 2 + 3, 0 - 4); print(); print(7); return 0;");
        assert_eq!(result.unwrap(), 0);
        assert_eq!(output, "1, 5, -4\n\n7\n");
    }

    #[test]
    fn failing_argument_writes_nothing() {
        let (result, output) = printed("print(1, 1 / 0); return 0;");
        assert!(result.is_err());
        assert_eq!(output, "");
    }

    #[test]
    fn value_of_a_print_call_is_zero() {
        assert_eq!(printed("return print(5) + 3;").0.unwrap(), 3);
    }
}
