//! The vectorized tree walk.

use log::trace;
use plot_error::Error;
use plot_parser::parser::{
    ast::{
        call::Call,
        expr::Expr,
        literal::{LitSym, Literal},
    },
    token::op::UnaryOpKind,
};
use super::{
    binding::VariableBinding,
    error::{UndefinedFunction, UndefinedVariable, VariableIsFunction, WrongArgumentCount},
    func::Func,
    value::Value,
    vocab::{similar, Vocabulary},
};

/// What a symbol in a formula refers to.
enum Symbol<'a> {
    /// A bound variable.
    Var(&'a [f64]),

    /// A constant from the vocabulary.
    Const(f64),
}

/// Evaluates formulas against one vocabulary and one variable binding.
///
/// Evaluation runs in two passes. The first pass checks every name in the formula and reports the
/// first structural problem with its span; no arithmetic happens until the whole formula checks.
/// The second pass walks the tree in post-order, computing every node over all samples at once.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    vocab: &'a Vocabulary,
    binding: &'a VariableBinding,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator.
    pub fn new(vocab: &'a Vocabulary, binding: &'a VariableBinding) -> Self {
        Self { vocab, binding }
    }

    /// Resolves a symbol to a bound variable or a constant. Bound variables shadow constants.
    fn resolve_symbol(&self, sym: &LitSym) -> Result<Symbol<'a>, Error> {
        if let Some(samples) = self.binding.get(&sym.name) {
            return Ok(Symbol::Var(samples));
        }
        if let Some(value) = self.vocab.constant(&sym.name) {
            return Ok(Symbol::Const(value));
        }
        if self.vocab.func(&sym.name).is_some() {
            return Err(Error::new(vec![sym.span.clone()], VariableIsFunction {
                name: sym.name.clone(),
            }));
        }

        let mut suggestions = similar(self.binding.names(), &sym.name);
        suggestions.extend(self.vocab.similar_consts(&sym.name));
        suggestions.sort();
        suggestions.dedup();

        Err(Error::new(vec![sym.span.clone()], UndefinedVariable {
            name: sym.name.clone(),
            suggestions,
        }))
    }

    /// Resolves a call to a function in the vocabulary and its single argument.
    fn resolve_call<'c>(&self, call: &'c Call) -> Result<(Func, &'c Expr), Error> {
        let Some(func) = self.vocab.func(&call.name.name) else {
            return Err(Error::new(call.outer_span().to_vec(), UndefinedFunction {
                name: call.name.name.clone(),
                suggestions: self.vocab.similar_funcs(&call.name.name),
            }));
        };

        match call.single_arg() {
            Some(arg) => Ok((func, arg)),
            None => Err(Error::new(call.outer_span().to_vec(), WrongArgumentCount {
                name: call.name.name.clone(),
                expected: func.arity(),
                given: call.args.len(),
            })),
        }
    }

    /// Checks that every variable and function in the formula can be resolved.
    pub fn check(&self, expr: &Expr) -> Result<(), Error> {
        for node in expr.post_order_iter() {
            match node {
                Expr::Literal(Literal::Symbol(sym)) => {
                    self.resolve_symbol(sym)?;
                },
                Expr::Call(call) => {
                    self.resolve_call(call)?;
                },
                _ => {},
            }
        }
        Ok(())
    }

    /// Evaluates one node, after its children.
    fn walk(&self, expr: &Expr) -> Result<Value, Error> {
        Ok(match expr {
            Expr::Literal(Literal::Number(num)) => Value::Scalar(num.value),
            Expr::Literal(Literal::Symbol(sym)) => match self.resolve_symbol(sym)? {
                Symbol::Var(samples) => Value::Array(samples.to_vec()),
                Symbol::Const(value) => Value::Scalar(value),
            },
            Expr::Unary(unary) => {
                let operand = self.walk(&unary.operand)?;
                match unary.op.kind {
                    UnaryOpKind::Neg => operand.map(|x| -x),
                }
            },
            Expr::Binary(binary) => {
                let lhs = self.walk(&binary.lhs)?;
                let rhs = self.walk(&binary.rhs)?;
                let kind = binary.op.kind;
                lhs.zip_with(rhs, |a, b| kind.apply(a, b))
            },
            Expr::Call(call) => {
                let (func, arg) = self.resolve_call(call)?;
                self.walk(arg)?.map(|x| func.apply(x))
            },
        })
    }

    /// Evaluates the formula at every sample of the binding.
    ///
    /// The result always has one entry per sample. Entries may be NaN or infinite where the
    /// formula is undefined; callers filter them.
    pub fn eval(&self, expr: &Expr) -> Result<Vec<f64>, Error> {
        self.check(expr)?;
        let len = self.binding.sample_len()?;
        trace!("evaluating `{}` at {} samples", expr, len);
        Ok(self.walk(expr)?.into_samples(len))
    }
}

/// Evaluates the formula against the standard vocabulary.
pub fn evaluate(expr: &Expr, binding: &VariableBinding) -> Result<Vec<f64>, Error> {
    Evaluator::new(Vocabulary::standard(), binding).eval(expr)
}
