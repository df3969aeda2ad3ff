pub const MAX_ODDS_DENOMINATOR: u64 = 100;

// Beyond this a continued-fraction term would overflow the convergent math;
// prices that large are shown as whole numbers anyway.
const MAX_TERM: f64 = 1e12;

/// Closest fraction to `x` (non-negative) with a denominator no larger than
/// `max_den`, found by walking the continued-fraction convergents and then
/// checking the best semiconvergent below the bound.
fn best_rational(x: f64, max_den: u64) -> (u64, u64) {
    let (mut p0, mut q0, mut p1, mut q1) = (0u64, 1u64, 1u64, 0u64);
    let mut r = x;
    loop {
        let a = r.floor();
        if a > MAX_TERM {
            break;
        }
        let a = a as u64;
        let q2 = q0 + a * q1;
        if q2 > max_den {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
        let rem = r - a as f64;
        if rem < 1e-9 {
            return (p1, q1);
        }
        r = 1.0 / rem;
    }

    if q1 == 0 {
        return (x.round() as u64, 1);
    }
    let k = (max_den - q0) / q1;
    let lower = (p0 + k * p1, q0 + k * q1);
    let upper = (p1, q1);
    let err = |(p, q): (u64, u64)| (p as f64 / q as f64 - x).abs();
    if err(upper) <= err(lower) { upper } else { lower }
}

/// Decimal price to fractional odds text, e.g. `11.0` → `"10/1"`.
///
/// `None` and non-finite prices give `None`.
#[must_use]
pub fn decimal_to_fractional(decimal_odds: Option<f64>) -> Option<String> {
    let decimal = decimal_odds.filter(|d| d.is_finite())?;
    let profit = decimal - 1.0;
    let (num, den) = best_rational(profit.abs(), MAX_ODDS_DENOMINATOR);
    let sign = if profit < 0.0 && num != 0 { "-" } else { "" };
    Some(format!("{sign}{num}/{den}"))
}
