/// Evaluates `sum(coefficients[i] * x^i)`, accumulating powers of `x`
/// in ascending order.
pub fn evaluate_polynomial(coefficients: &[f64], x: f64) -> f64 {
    let mut sum = 0.0;
    let mut y = 1.0;

    for coefficient in coefficients {
        sum += coefficient * y;
        y *= x;
    }

    sum
}
