use num_complex::Complex;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A single root: real, or one member of a complex conjugate pair.
/// Conjugates are stored with signed imaginary parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Root {
    Real(f64),
    Complex(Complex<f64>),
}

impl fmt::Display for Root {
    /// Four decimal places. Complex roots render as `<re> + <im>i` or
    /// `<re> - <im>i`, taking the sign from the stored imaginary part and
    /// printing its magnitude, so a source-negative imaginary part still
    /// reads with a single minus sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Real(value) => write!(f, "{value:.4}"),
            Root::Complex(z) => {
                let sign = if z.im < 0.0 { '-' } else { '+' };
                write!(f, "{:.4} {} {:.4}i", z.re, sign, z.im.abs())
            }
        }
    }
}

/// Renders the equation in descending powers of x, skipping zero
/// coefficients and joining terms with `" + "`. Coefficients print to two
/// decimal places; degree-0 terms carry no `x` suffix. An all-zero
/// polynomial renders as the empty string.
pub fn format_equation(coefficients: &[f64]) -> String {
    let mut equation = String::new();
    for (power, &coefficient) in coefficients.iter().enumerate().rev() {
        if coefficient == 0.0 {
            continue;
        }
        if !equation.is_empty() {
            equation.push_str(" + ");
        }
        equation.push_str(&format!("{coefficient:.2}"));
        if power > 0 {
            equation.push_str(&format!("x^{power}"));
        }
    }
    equation
}

/// Computes the roots of a polynomial from its coefficients in ascending
/// powers (index i holds the coefficient of x^i, degree = length - 1).
///
/// Closed forms exist here for degrees 2 and 3 only; any other degree
/// yields an empty set, which callers present as "unsupported". The leading
/// coefficient must be non-zero; enforcing that is the boundary's contract.
pub fn solve(coefficients: &[f64]) -> Vec<Root> {
    match coefficients.len().checked_sub(1) {
        Some(2) => solve_quadratic(coefficients[2], coefficients[1], coefficients[0]),
        Some(3) => solve_cubic(
            coefficients[3],
            coefficients[2],
            coefficients[1],
            coefficients[0],
        ),
        _ => Vec::new(),
    }
}

fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<Root> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        vec![
            Root::Real((-b + sqrt_d) / (2.0 * a)),
            Root::Real((-b - sqrt_d) / (2.0 * a)),
        ]
    } else if discriminant == 0.0 {
        vec![Root::Real(-b / (2.0 * a))]
    } else {
        let re = -b / (2.0 * a);
        let im = (-discriminant).sqrt() / (2.0 * a);
        vec![
            Root::Complex(Complex::new(re, im)),
            Root::Complex(Complex::new(re, -im)),
        ]
    }
}

fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<Root> {
    // Depressed cubic t^3 + p t + q under the substitution x = t - b/(3a).
    let p = c / a - b * b / (3.0 * a * a);
    let q = 2.0 * b.powi(3) / (27.0 * a.powi(3)) - b * c / (3.0 * a * a) + d / a;
    let shift = -b / (3.0 * a);
    let discriminant = q * q / 4.0 + p.powi(3) / 27.0;

    if discriminant > 0.0 {
        // Cardano: one real root, plus a conjugate pair built from the same
        // cube-root intermediates.
        let sqrt_d = discriminant.sqrt();
        let u = (-q / 2.0 + sqrt_d).cbrt();
        let v = (-q / 2.0 - sqrt_d).cbrt();
        let re = -(u + v) / 2.0 + shift;
        let im = (u - v) * 3.0_f64.sqrt() / 2.0;
        vec![
            Root::Real(u + v + shift),
            Root::Complex(Complex::new(re, im)),
            Root::Complex(Complex::new(re, -im)),
        ]
    } else {
        // Three real roots via the trigonometric method.
        let r = (-p.powi(3) / 27.0).sqrt();
        if r == 0.0 {
            // p = q = 0: the depressed cubic is t^3 = 0, a triple root.
            return vec![Root::Real(shift); 3];
        }
        // The acos argument sits in [-1, 1] whenever the discriminant is
        // non-positive; the clamp only absorbs float drift at the edges.
        let theta = (-q / (2.0 * r)).clamp(-1.0, 1.0).acos();
        (0..3)
            .map(|k| {
                let angle = (theta + 2.0 * PI * k as f64) / 3.0;
                Root::Real(2.0 * r.cbrt() * angle.cos() + shift)
            })
            .collect()
    }
}
