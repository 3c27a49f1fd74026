//! Catalog of textbook Cauchy problems with closed-form solutions.

use crate::{Float, solve::Parameters};

/// A catalog entry: right-hand side, closed-form solution and defaults.
///
/// `reference` takes an abscissa and the integration constant; `constant`
/// derives that constant from an initial condition `(x0, y0)`, so the same
/// closed form serves any starting point, not just the default one.
#[derive(Debug, Clone, Copy)]
pub struct Problem {
    pub describe: &'static str,
    pub rhs: fn(Float, Float) -> Float,
    pub reference: fn(Float, Float) -> Float,
    pub constant: fn(Float, Float) -> Float,
    /// Suggested parameters shown by the interactive driver.
    pub defaults: Parameters,
}

/// Built-in problems, in menu order.
pub fn catalog() -> &'static [Problem] {
    &CATALOG
}

static CATALOG: [Problem; 3] = [
    Problem {
        describe: "y' = y + (1 + x)y^2",
        rhs: riccati_rhs,
        reference: riccati_reference,
        constant: riccati_constant,
        defaults: Parameters { a: 1.0, b: 2.0, y0: -1.0, h: 0.05, e: 0.01 },
    },
    Problem {
        describe: "y' = (x + 1)^3 - y",
        rhs: cubic_rhs,
        reference: cubic_reference,
        constant: cubic_constant,
        defaults: Parameters { a: 0.0, b: 3.0, y0: 0.0, h: 0.1, e: 0.0001 },
    },
    Problem {
        describe: "y' = xy",
        rhs: gauss_rhs,
        reference: gauss_reference,
        constant: gauss_constant,
        defaults: Parameters { a: -1.0, b: 1.0, y0: 1.0, h: 0.01, e: 0.0001 },
    },
];

fn riccati_rhs(x: Float, y: Float) -> Float {
    y + (1.0 + x) * y * y
}

// y = -e^x / (x e^x + C); C vanishes at the default condition y(1) = -1.
fn riccati_reference(x: Float, c: Float) -> Float {
    -x.exp() / (x * x.exp() + c)
}

fn riccati_constant(x0: Float, y0: Float) -> Float {
    -x0.exp() / y0 - x0 * x0.exp()
}

fn cubic_rhs(x: Float, y: Float) -> Float {
    (x + 1.0).powi(3) - y
}

fn cubic_reference(x: Float, c: Float) -> Float {
    c * (-x).exp() + x.powi(3) + 3.0 * x - 2.0
}

fn cubic_constant(x0: Float, y0: Float) -> Float {
    (y0 - x0.powi(3) - 3.0 * x0 + 2.0) * x0.exp()
}

fn gauss_rhs(x: Float, y: Float) -> Float {
    x * y
}

fn gauss_reference(x: Float, c: Float) -> Float {
    c * (x * x / 2.0).exp()
}

fn gauss_constant(x0: Float, y0: Float) -> Float {
    y0 / (x0 * x0 / 2.0).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_three_problems_in_menu_order() {
        let problems = catalog();
        assert_eq!(problems.len(), 3);
        assert!(problems[0].describe.contains("y^2"));
        assert!(problems[1].describe.contains("(x + 1)^3"));
        assert_eq!(problems[2].describe, "y' = xy");
    }

    #[test]
    fn riccati_constant_vanishes_at_default_condition() {
        let d = CATALOG[0].defaults;
        assert_eq!(riccati_constant(d.a, d.y0), 0.0);
    }
}
