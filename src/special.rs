use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const SERIES_CUTOFF: f64 = 12.0;
const MAX_SERIES_TERMS: u32 = 60;

/// Bessel function of the first kind J_n(x).
///
/// Series expansion below `SERIES_CUTOFF`, leading asymptotic term above.
/// The asymptotic branch is accurate to a few 1e-3, enough for plotting.
pub fn bessel_j(n: u32, x: f64) -> f64 {
    if x < 0.0 {
        // J_n(-x) = (-1)^n J_n(x)
        let value = bessel_j(n, -x);
        return if n % 2 == 0 { value } else { -value };
    }
    if x < SERIES_CUTOFF {
        bessel_j_series(n, x)
    } else {
        bessel_j_asymptotic(n, x)
    }
}

fn bessel_j_series(n: u32, x: f64) -> f64 {
    let half_x = x / 2.0;
    let mut term = half_x.powi(n as i32) / factorial(n as usize);
    let mut result = term;
    for k in 1..=MAX_SERIES_TERMS {
        term *= -(x * x / 4.0) / (k as f64 * (n + k) as f64);
        result += term;
        if term.abs() < 1e-16 * result.abs().max(1.0) {
            break;
        }
    }
    result
}

fn bessel_j_asymptotic(n: u32, x: f64) -> f64 {
    let phase = x - n as f64 * FRAC_PI_2 - FRAC_PI_4;
    (2.0 / (PI * x)).sqrt() * phase.cos()
}

pub fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use more_asserts::assert_le;

    use super::*;

    // reference values from Abramowitz & Stegun / scipy.special

    #[test]
    fn j0_reference_values() {
        assert_approx_eq!(bessel_j(0, 0.0), 1.0);
        assert_approx_eq!(bessel_j(0, 1.0), 0.7651976865579666, 1e-10);
        assert_approx_eq!(bessel_j(0, 5.0), -0.17759677131433830, 1e-10);
        // first zero of J0
        assert_le!(bessel_j(0, 2.404825557695773).abs(), 1e-9);
    }

    #[test]
    fn j1_reference_values() {
        assert_approx_eq!(bessel_j(1, 0.0), 0.0);
        assert_approx_eq!(bessel_j(1, 1.0), 0.4400505857449335, 1e-10);
        // first zero of J1
        assert_le!(bessel_j(1, 3.831705970207512).abs(), 1e-9);
    }

    #[test]
    fn higher_order_reference_values() {
        assert_approx_eq!(bessel_j(2, 2.0), 0.3528340286156377, 1e-10);
    }

    #[test]
    fn recurrence_identity_holds_in_series_region() {
        // J_{n-1}(x) + J_{n+1}(x) = (2n/x) J_n(x)
        for &x in &[0.5, 1.0, 3.0, 7.0, 11.0] {
            for n in 1..6u32 {
                let lhs = bessel_j(n - 1, x) + bessel_j(n + 1, x);
                let rhs = 2.0 * n as f64 / x * bessel_j(n, x);
                assert_approx_eq!(lhs, rhs, 1e-9);
            }
        }
    }

    #[test]
    fn asymptotic_region_is_plot_accurate() {
        assert_approx_eq!(bessel_j(0, 15.0), -0.014224472826780773, 1e-2);
        assert_approx_eq!(bessel_j(1, 20.0), 0.06683312417585004, 1e-2);
    }

    #[test]
    fn negative_arguments_use_parity() {
        assert_approx_eq!(bessel_j(0, -1.0), bessel_j(0, 1.0));
        assert_approx_eq!(bessel_j(1, -1.0), -bessel_j(1, 1.0));
    }

    #[test]
    fn factorial_values() {
        assert_approx_eq!(factorial(0), 1.0);
        assert_approx_eq!(factorial(5), 120.0);
        assert_approx_eq!(factorial(10), 3_628_800.0);
    }
}
