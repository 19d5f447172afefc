//! Time-varying scalar quantities expressed as polynomials
//!
//! Every orbital element in the catalog is a polynomial in days since the
//! element epoch, typically a constant term plus a linear rate; the
//! evaluator accepts any number of coefficients.

/// A polynomial `c0 + c1*t + c2*t^2 + ...` over days since a reference epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from its coefficients, constant term first.
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Self {
        Polynomial {
            coefficients: coefficients.into(),
        }
    }

    /// A constant quantity with no rate of change.
    pub fn constant(c0: f64) -> Self {
        Polynomial {
            coefficients: vec![c0],
        }
    }

    /// A constant term plus a linear rate per day.
    pub fn linear(c0: f64, rate_per_day: f64) -> Self {
        Polynomial {
            coefficients: vec![c0, rate_per_day],
        }
    }

    /// Evaluate the polynomial at offset `t` (days since the epoch).
    ///
    /// A polynomial with no coefficients evaluates to zero.
    pub fn at(&self, t: f64) -> f64 {
        let mut power = 1.0;
        let mut result = 0.0;
        for c in &self.coefficients {
            result += power * c;
            power *= t;
        }
        result
    }
}

impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, c) in self.coefficients.iter().enumerate() {
            if i > 0 && *c >= 0.0 {
                write!(f, "+")?;
            }
            write!(f, "{}", c)?;
            for _ in 0..i {
                write!(f, "*t")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_polynomial_is_zero() {
        let p = Polynomial::new(Vec::new());
        assert_eq!(p.at(0.0), 0.0);
        assert_eq!(p.at(123.456), 0.0);
    }

    #[test]
    fn test_constant() {
        let p = Polynomial::constant(7.00487);
        assert_eq!(p.at(0.0), 7.00487);
        assert_eq!(p.at(36525.0), 7.00487);
    }

    #[test]
    fn test_linear_rate() {
        let p = Polynomial::linear(100.0, 0.5);
        assert_relative_eq!(p.at(0.0), 100.0);
        assert_relative_eq!(p.at(10.0), 105.0);
        assert_relative_eq!(p.at(-10.0), 95.0);
    }

    #[test]
    fn test_quadratic() {
        // 1 + 2t + 3t^2 at t=2 -> 17
        let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
        assert_relative_eq!(p.at(2.0), 17.0);
    }

    #[test]
    fn test_display() {
        let p = Polynomial::linear(1.5, -0.25);
        assert_eq!(format!("{}", p), "1.5-0.25*t");
    }
}
