/// Smallest hessian handed back, keeps Newton steps finite when p saturates
const MIN_HESSIAN: f64 = 1e-16;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Value and derivatives of the logistic loss at one point
pub struct LogLoss {
    /// -y ln(p) - (1 - y) ln(1 - p)
    pub loss: f64,
    /// y - p, i.e. the direction the function should move
    pub negative_gradient: f64,
    /// p (1 - p)
    pub hessian: f64,
}

#[inline]
fn sigmoid(x: f64) -> f64 {
    1. / (1. + (-x).exp())
}

/// ln(1 + e^x) without overflowing for large x
#[inline]
fn softplus(x: f64) -> f64 {
    if x > 0. {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}

/// Logistic loss of label `y` in {0, 1} against the raw score `f`
pub fn compute_log_loss(y: f64, f: f64) -> LogLoss {
    let p = sigmoid(f);
    LogLoss {
        // -y ln(p) = y ln(1 + e^-f), -(1 - y) ln(1 - p) = (1 - y) ln(1 + e^f)
        loss: y * softplus(-f) + (1. - y) * softplus(f),
        negative_gradient: y - p,
        hessian: (p * (1. - p)).max(MIN_HESSIAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_loss_at_zero() {
        let l = compute_log_loss(1., 0.);
        assert!((l.loss - 2f64.ln()).abs() < 1e-12);
        assert!((l.negative_gradient - 0.5).abs() < 1e-12);
        assert!((l.hessian - 0.25).abs() < 1e-12);

        let l = compute_log_loss(0., 0.);
        assert!((l.loss - 2f64.ln()).abs() < 1e-12);
        assert!((l.negative_gradient + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_log_loss_is_stable() {
        let l = compute_log_loss(1., -1000.);
        assert!((l.loss - 1000.).abs() < 1e-9);
        assert!((l.negative_gradient - 1.).abs() < 1e-12);
        assert_eq!(l.hessian, MIN_HESSIAN);

        let l = compute_log_loss(1., 1000.);
        assert!(l.loss.abs() < 1e-12);
        assert!(l.negative_gradient.abs() < 1e-12);
    }
}
