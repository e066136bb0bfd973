/// Raw measurements taken from the host window at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Distance the document can scroll. Zero or negative when the content
    /// fits in the viewport.
    pub fn max_offset(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// Fraction of the document scrolled through, always within `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const ZERO: Self = Self(0.0);

    /// Short documents (`max_offset <= 0`) and non-finite inputs read as 0
    /// instead of propagating NaN or infinity into the indicator width.
    pub fn from_offset(offset: f64, max_offset: f64) -> Self {
        if !(max_offset > 0.0) {
            return Self::ZERO;
        }
        let ratio = offset / max_offset;
        if !ratio.is_finite() {
            return Self::ZERO;
        }
        Self(ratio.clamp(0.0, 1.0))
    }

    pub fn from_metrics(metrics: &ScrollMetrics) -> Self {
        Self::from_offset(metrics.offset, metrics.max_offset())
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.value() * 100.0
    }

    pub fn width_style(self) -> String {
        format!("width: {}%;", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_halfway_reports_half() {
        let progress: Vec<f64> = [0.0, 250.0, 500.0]
            .iter()
            .map(|offset| ScrollProgress::from_offset(*offset, 500.0).value())
            .collect();
        assert_eq!(progress, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn overscroll_stays_clamped() {
        assert_eq!(ScrollProgress::from_offset(750.0, 500.0).value(), 1.0);
        assert_eq!(ScrollProgress::from_offset(-40.0, 500.0).value(), 0.0);
    }

    #[test]
    fn progress_is_monotonic_in_offset() {
        let mut last = 0.0;
        for step in 0..=120 {
            let value = ScrollProgress::from_offset(step as f64 * 5.0, 500.0).value();
            assert!(value >= last);
            assert!((0.0..=1.0).contains(&value));
            last = value;
        }
    }

    #[test]
    fn short_document_reads_zero() {
        for offset in [0.0, 10.0, 1_000.0] {
            assert_eq!(ScrollProgress::from_offset(offset, 0.0), ScrollProgress::ZERO);
            assert_eq!(ScrollProgress::from_offset(offset, -200.0), ScrollProgress::ZERO);
        }
    }

    #[test]
    fn non_finite_inputs_read_zero() {
        assert_eq!(ScrollProgress::from_offset(f64::NAN, 500.0), ScrollProgress::ZERO);
        assert_eq!(ScrollProgress::from_offset(100.0, f64::NAN), ScrollProgress::ZERO);
        assert_eq!(ScrollProgress::from_offset(f64::INFINITY, 500.0), ScrollProgress::ZERO);
        assert_eq!(ScrollProgress::from_offset(100.0, f64::INFINITY).value(), 0.0);
    }

    #[test]
    fn metrics_subtract_viewport_from_document() {
        let metrics = ScrollMetrics {
            offset: 300.0,
            document_height: 1_600.0,
            viewport_height: 1_000.0,
        };
        assert_eq!(metrics.max_offset(), 600.0);
        assert_eq!(ScrollProgress::from_metrics(&metrics).value(), 0.5);

        let fits = ScrollMetrics {
            offset: 0.0,
            document_height: 800.0,
            viewport_height: 1_000.0,
        };
        assert_eq!(ScrollProgress::from_metrics(&fits), ScrollProgress::ZERO);
    }

    #[test]
    fn width_style_uses_percent() {
        assert_eq!(ScrollProgress::from_offset(250.0, 500.0).width_style(), "width: 50%;");
        assert_eq!(ScrollProgress::ZERO.width_style(), "width: 0%;");
        assert_eq!(ScrollProgress::from_offset(500.0, 500.0).width_style(), "width: 100%;");
    }
}
