//! Normal distribution primitives.
//!
//! A sigma of zero or less is treated as a point mass at the mean, so callers
//! never see NaN from a zero-spread portfolio.

use std::f64::consts::PI;

use serde::Serialize;

pub const DEFAULT_CURVE_POINTS: usize = 120;
pub const DEFAULT_CURVE_SIGMAS: f64 = 3.5;

/// Beyond this many sigmas the CDF is reported as exactly 0 or 1.
const CDF_CUTOFF: f64 = 8.0;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalDistribution {
    Normal { mean: f64, sigma: f64 },
    PointMass { mean: f64 },
}

impl NormalDistribution {
    pub fn new(mean: f64, sigma: f64) -> Self {
        if sigma > 0.0 {
            NormalDistribution::Normal { mean, sigma }
        } else {
            NormalDistribution::PointMass { mean }
        }
    }

    pub fn mean(&self) -> f64 {
        match *self {
            NormalDistribution::Normal { mean, .. } | NormalDistribution::PointMass { mean } => {
                mean
            }
        }
    }

    pub fn pdf(&self, x: f64) -> f64 {
        match *self {
            NormalDistribution::Normal { mean, sigma } => {
                standard_normal_pdf((x - mean) / sigma) / sigma
            }
            NormalDistribution::PointMass { mean } if x == mean => f64::INFINITY,
            NormalDistribution::PointMass { .. } => 0.0,
        }
    }

    pub fn cdf(&self, x: f64) -> f64 {
        match *self {
            NormalDistribution::Normal { mean, sigma } => standard_normal_cdf((x - mean) / sigma),
            NormalDistribution::PointMass { mean } if x >= mean => 1.0,
            NormalDistribution::PointMass { .. } => 0.0,
        }
    }

    /// Smallest `x` with `cdf(x) >= probability`, found by bisection.
    pub fn quantile(&self, probability: f64) -> f64 {
        let (mean, sigma) = match *self {
            NormalDistribution::Normal { mean, sigma } => (mean, sigma),
            NormalDistribution::PointMass { mean } => return mean,
        };
        let probability = probability.clamp(0.0, 1.0);
        let mut low = mean - CDF_CUTOFF * sigma;
        let mut high = mean + CDF_CUTOFF * sigma;
        for _ in 0..100 {
            let mid = 0.5 * (low + high);
            if self.cdf(mid) < probability {
                low = mid;
            } else {
                high = mid;
            }
        }
        high
    }

    pub fn curve_points(&self, num_points: usize, num_sigma: f64) -> Vec<CurvePoint> {
        let (mean, sigma) = match *self {
            NormalDistribution::Normal { mean, sigma } => (mean, sigma),
            NormalDistribution::PointMass { .. } => return Vec::new(),
        };
        if num_points == 0 {
            return Vec::new();
        }
        let start = mean - num_sigma * sigma;
        if num_points == 1 {
            return vec![CurvePoint {
                x: mean,
                y: self.pdf(mean),
            }];
        }
        let step = 2.0 * num_sigma * sigma / (num_points - 1) as f64;
        (0..num_points)
            .map(|index| {
                let x = start + step * index as f64;
                CurvePoint { x, y: self.pdf(x) }
            })
            .collect()
    }
}

pub fn standard_normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / (2.0 * PI).sqrt()
}

pub fn normal_pdf(x: f64, mean: f64, sigma: f64) -> f64 {
    NormalDistribution::new(mean, sigma).pdf(x)
}

/// Abramowitz & Stegun 26.2.17, |error| < 7.5e-8.
///
/// The tail is computed for |z| and mirrored, so `cdf(-z) + cdf(z) == 1` and
/// `cdf(0) == 0.5` hold exactly.
pub fn standard_normal_cdf(z: f64) -> f64 {
    if z < -CDF_CUTOFF {
        return 0.0;
    }
    if z > CDF_CUTOFF {
        return 1.0;
    }
    if z == 0.0 {
        return 0.5;
    }

    const P: f64 = 0.231_641_9;
    const B1: f64 = 0.319_381_530;
    const B2: f64 = -0.356_563_782;
    const B3: f64 = 1.781_477_937;
    const B4: f64 = -1.821_255_978;
    const B5: f64 = 1.330_274_429;

    let x = z.abs();
    let t = 1.0 / (1.0 + P * x);
    let polynomial = t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));
    let upper_tail = standard_normal_pdf(x) * polynomial;

    if z > 0.0 { 1.0 - upper_tail } else { upper_tail }
}

pub fn normal_cdf(x: f64, mean: f64, sigma: f64) -> f64 {
    NormalDistribution::new(mean, sigma).cdf(x)
}

pub fn generate_gaussian_curve_points(
    mean: f64,
    sigma: f64,
    num_points: usize,
    num_sigma: f64,
) -> Vec<CurvePoint> {
    NormalDistribution::new(mean, sigma).curve_points(num_points, num_sigma)
}

/// Probability that the actual total stays at or below `hours`.
pub fn confidence_for_hours(mean: f64, sigma: f64, hours: f64) -> f64 {
    normal_cdf(hours, mean, sigma)
}

/// Hours needed to reach the given confidence (0..=1).
pub fn hours_for_confidence(mean: f64, sigma: f64, confidence: f64) -> f64 {
    NormalDistribution::new(mean, sigma).quantile(confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pdf_peak() {
        assert!((standard_normal_pdf(0.0) - 0.398_942_280_4).abs() < 1e-10);
        assert_eq!(standard_normal_pdf(1.5), standard_normal_pdf(-1.5));
    }

    #[test]
    fn normal_pdf_scales_by_sigma() {
        let value = normal_pdf(12.0, 10.0, 2.0);
        assert!((value - standard_normal_pdf(1.0) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn degenerate_sigma_is_a_point_mass() {
        assert_eq!(normal_pdf(5.0, 5.0, 0.0), f64::INFINITY);
        assert_eq!(normal_pdf(5.1, 5.0, 0.0), 0.0);
        assert_eq!(normal_pdf(4.0, 5.0, -1.0), 0.0);
        assert_eq!(normal_cdf(5.0, 5.0, 0.0), 1.0);
        assert_eq!(normal_cdf(4.9, 5.0, 0.0), 0.0);
        assert!(generate_gaussian_curve_points(5.0, 0.0, 120, 3.5).is_empty());
        assert_eq!(hours_for_confidence(5.0, 0.0, 0.9), 5.0);
    }

    #[test]
    fn cdf_matches_reference_values() {
        let test_cases = vec![
            (1.0, 0.841_344_746),
            (1.96, 0.975_002_105),
            (-1.0, 0.158_655_254),
            (2.5, 0.993_790_335),
        ];
        for (z, expected) in test_cases {
            let value = standard_normal_cdf(z);
            assert!(
                (value - expected).abs() < 7.5e-8,
                "cdf({z}) = {value}, expected {expected}"
            );
        }
    }

    #[test]
    fn cdf_is_symmetric_and_monotone() {
        assert_eq!(standard_normal_cdf(0.0), 0.5);
        assert_eq!(standard_normal_cdf(-8.5), 0.0);
        assert_eq!(standard_normal_cdf(8.5), 1.0);

        let mut previous = 0.0;
        for step in -900..=900 {
            let z = step as f64 / 100.0;
            let value = standard_normal_cdf(z);
            assert!(value >= previous, "cdf decreased at {z}");
            assert!((standard_normal_cdf(-z) + value - 1.0).abs() < 7.5e-8);
            previous = value;
        }
    }

    #[test]
    fn curve_is_symmetric_and_evenly_spaced() {
        let points = generate_gaussian_curve_points(100.0, 15.0, DEFAULT_CURVE_POINTS, DEFAULT_CURVE_SIGMAS);
        assert_eq!(points.len(), 120);
        assert!((points[0].x - 47.5).abs() < 1e-9);
        assert!((points[119].x - 152.5).abs() < 1e-9);

        let step = points[1].x - points[0].x;
        for (index, point) in points.iter().enumerate() {
            let mirror = &points[points.len() - 1 - index];
            assert!((point.y - mirror.y).abs() < 1e-12);
            if index > 0 {
                assert!((point.x - points[index - 1].x - step).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn confidence_and_quantile_are_inverse() {
        let mean = 828.4;
        let sigma = 108.88;
        assert_eq!(confidence_for_hours(mean, sigma, mean), 0.5);
        let hours = hours_for_confidence(mean, sigma, 0.841_344_746);
        assert!((hours - (mean + sigma)).abs() < 0.01);
        let back = confidence_for_hours(mean, sigma, hours_for_confidence(mean, sigma, 0.9));
        assert!((back - 0.9).abs() < 1e-6);
    }
}
