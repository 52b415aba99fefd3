/// Age-based degradation score in [0, 100].
///
/// The single reusable primitive behind structural and systems scoring.
/// The curve is piecewise linear over `ratio = age / expected_life`:
/// a plateau at 100 through 10% of expected life, then 100→90 by 50%,
/// 90→60 by 80%, 60→20 at 100%, and 20→0 by 120%. The step just past the
/// 10% boundary (100 → 98-and-falling) is intentional; do not smooth it.
///
/// Total over all inputs: negative `age` clamps to 0 and a non-positive
/// `expected_life` returns 0.
pub fn age_score(age: f64, expected_life: f64) -> f64 {
    let age = age.max(0.0);
    if expected_life <= 0.0 {
        return 0.0;
    }

    if age <= expected_life * 0.1 {
        return 100.0;
    }

    let ratio = age / expected_life;
    if ratio <= 0.5 {
        100.0 - ratio * 20.0
    } else if ratio <= 0.8 {
        90.0 - (ratio - 0.5) / 0.3 * 30.0
    } else if ratio < 1.0 {
        60.0 - (ratio - 0.8) / 0.2 * 40.0
    } else {
        let over_ratio = (age - expected_life) / (expected_life * 0.2);
        (20.0 - over_ratio * 20.0).max(0.0)
    }
}
