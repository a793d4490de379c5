//! Derived Information Statistics

use serde::{Deserialize, Serialize};

/// Entropies measured from the frequency tables
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MeasuredEntropies {
    pub h_c: f64,
    pub h_entire: f64,
    pub h_entire_c: f64,
    pub h_selected: f64,
    pub h_selected_c: f64,
}

/// Statistics of the entire versus selected feature set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of data rows
    pub instances: u64,
    /// Number of declared attributes, label included
    pub features: usize,
    /// H(C)
    pub h_c: f64,
    /// H(Entire)
    pub h_entire: f64,
    /// H(Entire, C)
    pub h_entire_c: f64,
    /// I(Entire; C)
    pub i_entire: f64,
    /// H(Selected)
    pub h_selected: f64,
    /// H(Selected, C)
    pub h_selected_c: f64,
    /// I(Selected; C)
    pub i_selected: f64,
    /// H(Selected | C)
    pub h_selected_given_c: f64,
    /// Harmonic-mean style ratio of retained information
    pub mu_h: f64,
    /// Geometric-mean style ratio of retained information
    pub mu_g: f64,
}

/// Value of a single named statistic
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Count(u64),
    Real(f64),
}

/// Report formatting options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFormat {
    /// Decimal places for real values
    pub precision: usize,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self { precision: 4 }
    }
}

impl Statistics {
    /// Derive mutual information and the mu ratios from measured entropies
    pub(crate) fn compute(instances: u64, features: usize, h: MeasuredEntropies) -> Self {
        let i_entire = h.h_entire + h.h_c - h.h_entire_c;
        let i_selected = h.h_selected + h.h_c - h.h_selected_c;
        let h_selected_given_c = h.h_selected - i_selected;

        let denom_h = i_entire + h.h_selected;
        let mu_h = if denom_h != 0.0 {
            2.0 * i_selected / denom_h
        } else {
            0.0
        };

        let mu_g = if i_entire > 0.0 && h.h_selected > 0.0 {
            i_selected / (i_entire * h.h_selected).sqrt()
        } else {
            0.0
        };

        Self {
            instances,
            features,
            h_c: h.h_c,
            h_entire: h.h_entire,
            h_entire_c: h.h_entire_c,
            i_entire,
            h_selected: h.h_selected,
            h_selected_c: h.h_selected_c,
            i_selected,
            h_selected_given_c,
            mu_h,
            mu_g,
        }
    }

    /// Named statistics in report order
    pub fn entries(&self) -> [(&'static str, StatValue); 12] {
        use StatValue::{Count, Real};
        [
            ("Number of instances", Count(self.instances)),
            ("Number of features", Count(self.features as u64)),
            ("H(C)", Real(self.h_c)),
            ("H(Entire)", Real(self.h_entire)),
            ("H(Entire, C)", Real(self.h_entire_c)),
            ("I(Entire; C)", Real(self.i_entire)),
            ("H(Selected)", Real(self.h_selected)),
            ("H(Selected, C)", Real(self.h_selected_c)),
            ("I(Selected; C)", Real(self.i_selected)),
            ("H(Selected | C)", Real(self.h_selected_given_c)),
            ("mu_H", Real(self.mu_h)),
            ("mu_G", Real(self.mu_g)),
        ]
    }

    /// Render as `<name> = <value>` lines
    pub fn render(&self, format: &ReportFormat) -> String {
        self.entries()
            .iter()
            .map(|(name, value)| match *value {
                StatValue::Count(n) => format!("{name} = {n}\n"),
                StatValue::Real(x) => format!(
                    "{name} = {:.*}\n",
                    format.precision,
                    positive_zero(x, format.precision)
                ),
            })
            .collect()
    }
}

/// Map values that print as zero to +0.0 so cancellation noise never shows as `-0.0000`
fn positive_zero(x: f64, precision: usize) -> f64 {
    let half_ulp = 0.5 * 10f64.powi(-(precision as i32));
    if x.abs() < half_ulp {
        0.0
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutual_information_identity() {
        let s = Statistics::compute(
            8,
            4,
            MeasuredEntropies {
                h_c: 1.0,
                h_entire: 2.0,
                h_entire_c: 2.0,
                h_selected: 1.5,
                h_selected_c: 2.0,
            },
        );
        assert!((s.i_entire - 1.0).abs() < 1e-12);
        assert!((s.i_selected - 0.5).abs() < 1e-12);
        assert!((s.h_selected_given_c - 1.0).abs() < 1e-12);
        assert!((s.mu_h - 2.0 * 0.5 / 2.5).abs() < 1e-12);
        assert!((s.mu_g - 0.5 / 1.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominators() {
        let s = Statistics::compute(3, 2, MeasuredEntropies::default());
        assert_eq!(s.mu_h, 0.0);
        assert_eq!(s.mu_g, 0.0);
        assert!(!s.mu_g.is_nan());
    }

    #[test]
    fn test_mu_g_needs_selected_entropy() {
        let s = Statistics::compute(
            4,
            3,
            MeasuredEntropies {
                h_c: 1.0,
                h_entire: 1.0,
                h_entire_c: 1.0,
                h_selected: 0.0,
                h_selected_c: 1.0,
            },
        );
        assert!(s.i_entire > 0.0);
        assert_eq!(s.mu_g, 0.0);
        assert_eq!(s.mu_h, 0.0);
    }

    #[test]
    fn test_render_layout() {
        let s = Statistics {
            instances: 2,
            features: 3,
            h_c: 1.0,
            mu_h: 0.123456,
            ..Default::default()
        };
        let text = s.render(&ReportFormat::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Number of instances = 2");
        assert_eq!(lines[1], "Number of features = 3");
        assert_eq!(lines[2], "H(C) = 1.0000");
        assert_eq!(lines[8], "I(Selected; C) = 0.0000");
        assert_eq!(lines[10], "mu_H = 0.1235");
        assert_eq!(lines[11], "mu_G = 0.0000");
    }

    #[test]
    fn test_render_hides_negative_zero() {
        let s = Statistics {
            i_entire: -1e-16,
            ..Default::default()
        };
        let text = s.render(&ReportFormat::default());
        assert!(text.contains("I(Entire; C) = 0.0000\n"));
        assert!(!text.contains("-0.0000"));
    }

    #[test]
    fn test_render_precision() {
        let s = Statistics {
            h_c: 0.5,
            ..Default::default()
        };
        let text = s.render(&ReportFormat { precision: 2 });
        assert!(text.contains("H(C) = 0.50\n"));
    }
}
