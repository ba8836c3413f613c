//! Rectangle-rule numeric integration, in two flavors: one that resolves a
//! self-inlining expression in the loop body, and an ordinary
//! function-pointer version for comparison. Both run the exact same
//! arithmetic in the exact same order, so for the same inputs they agree
//! bit for bit.
use inlam::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IntegrateError {
    #[error("subdivision count must be positive")]
    ZeroSteps,

    #[error("integration bounds must be finite, got [{from}, {to}]")]
    NonFiniteBounds { from: f64, to: f64 },

    #[error("lower bound {from} exceeds upper bound {to}")]
    ReversedBounds { from: f64, to: f64 },
}

fn check_inputs(from: f64, to: f64, steps: u32) -> Result<(), IntegrateError> {
    if steps == 0 {
        return Err(IntegrateError::ZeroSteps);
    }
    if !from.is_finite() || !to.is_finite() {
        return Err(IntegrateError::NonFiniteBounds { from, to });
    }
    if from > to {
        return Err(IntegrateError::ReversedBounds { from, to });
    }
    Ok(())
}

/// Integrate the expression denoted by `f`'s type over `[from, to]` with
/// `steps` rectangle subdivisions. The expression is resolved inline in the
/// loop body; `f` itself is a zero-sized marker and is never called.
pub fn integrate<F: Eval<f64>>(
    f: F,
    from: f64,
    to: f64,
    steps: u32,
) -> Result<f64, IntegrateError> {
    check_inputs(from, to, steps)?;

    let delta = (to - from) / steps as f64;
    let mut area = 0.0;
    let mut x = from;
    for _ in 0..steps {
        let y = f.eval_at(x);
        area += y * delta;
        x += delta;
    }

    Ok(area)
}

/// The old-fashioned version: same rectangle rule, driven by a function
/// pointer instead of an expression type.
pub fn integrate_fn(
    f: fn(f64) -> f64,
    from: f64,
    to: f64,
    steps: u32,
) -> Result<f64, IntegrateError> {
    check_inputs(from, to, steps)?;

    let delta = (to - from) / steps as f64;
    let mut area = 0.0;
    let mut x = from;
    for _ in 0..steps {
        let y = f(x);
        area += y * delta;
        x += delta;
    }

    Ok(area)
}
