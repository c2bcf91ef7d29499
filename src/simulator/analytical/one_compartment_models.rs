/// Plasma concentration after a single IV bolus, `C0·e^(−k·t)`.
///
/// # Assumptions
/// - `c0` is the initial concentration, `dose / Vd`
/// - `k` is the elimination rate constant
/// - `t` is the time since administration and is not negative
#[inline]
pub fn iv_concentration(c0: f64, k: f64, t: f64) -> f64 {
    c0 * (-k * t).exp()
}

/// Plasma concentration after a single oral dose with first-order absorption.
///
/// ```text
/// C(t) = D·ka / (Vd·(ka − k)) · (e^(−k·t) − e^(−ka·t))
/// ```
///
/// When `ka` and `k` coincide (see [`rates_coincide`]) the expression is 0/0.
/// This function returns `0.0` for that case instead of the limiting curve
/// `D·k·t·e^(−k·t)/Vd`. Reported exposure for such regimens is therefore zero;
/// callers relying on the limit must handle `ka == k` themselves.
///
/// # Assumptions
/// - `dose`, `vd`, `ka` and `k` are positive
/// - `t` is the time since administration and is not negative
#[inline]
pub fn oral_concentration(dose: f64, vd: f64, ka: f64, k: f64, t: f64) -> f64 {
    if rates_coincide(ka, k) {
        return 0.0;
    }
    (dose * ka) / (vd * (ka - k)) * ((-k * t).exp() - (-ka * t).exp())
}

/// `true` when `ka` and `k` are equal up to a few ulps
#[inline]
pub fn rates_coincide(ka: f64, k: f64) -> bool {
    (ka - k).abs() <= 4.0 * f64::EPSILON * ka.abs().max(k.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn iv_starts_at_c0() {
        assert_eq!(iv_concentration(10.0, 0.2, 0.0), 10.0);
        assert_relative_eq!(
            iv_concentration(10.0, 0.2, 5.0),
            3.678794411714423,
            epsilon = 1e-12
        );
    }

    #[test]
    fn iv_is_non_increasing() {
        let mut previous = iv_concentration(10.0, 0.2, 0.0);
        for i in 1..=500 {
            let current = iv_concentration(10.0, 0.2, i as f64 * 0.1);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn oral_starts_at_zero() {
        assert_eq!(oral_concentration(500.0, 50.0, 1.0, 0.2, 0.0), 0.0);
    }

    #[test]
    fn oral_is_positive_after_administration() {
        for i in 1..=240 {
            let t = i as f64 * 0.1;
            assert!(oral_concentration(500.0, 50.0, 1.0, 0.2, t) > 0.0);
            // flip-flop kinetics (ka < k) stay positive as well
            assert!(oral_concentration(500.0, 50.0, 0.1, 0.5, t) > 0.0);
        }
    }

    #[test]
    fn both_routes_vanish_at_long_times() {
        let k = 0.2;
        let t = 1000.0 / k;
        assert!(iv_concentration(10.0, k, t) < 1e-6 * 10.0);
        assert!(oral_concentration(500.0, 50.0, 1.0, k, t) < 1e-6 * 10.0);
    }

    #[test]
    fn equal_rates_yield_zero_not_the_limit() {
        for i in 0..=100 {
            let t = i as f64 * 0.5;
            assert_eq!(oral_concentration(500.0, 50.0, 0.3, 0.3, t), 0.0);
        }
        // within a couple of ulps is treated the same way
        let k = 0.3_f64;
        let ka = f64::from_bits(k.to_bits() + 1);
        assert_eq!(oral_concentration(500.0, 50.0, ka, k, 2.0), 0.0);
    }

    #[test]
    fn distinct_rates_are_not_coincident() {
        assert!(!rates_coincide(1.0, 0.2));
        assert!(!rates_coincide(0.3, 0.3 + 1e-9));
    }
}
