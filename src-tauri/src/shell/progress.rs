/// What the taskbar/dock progress indicator should display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressIndicator {
    /// No indicator at all.
    Cleared,
    /// Determinate progress in `(0, 1]`.
    Fraction(f64),
    /// Busy without a known fraction.
    Indeterminate,
}

impl ProgressIndicator {
    /// Map a reported fraction onto an indicator.
    ///
    /// Absent, zero, negative and NaN values clear the indicator rather than
    /// showing an empty bar; values above 1 show an indeterminate bar.
    pub fn from_report(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_nan() => Self::Cleared,
            Some(v) if v > 1.0 => Self::Indeterminate,
            Some(v) if v > 0.0 => Self::Fraction(v),
            Some(_) | None => Self::Cleared,
        }
    }

    /// Whole percentage for hosts that take an integer, `None` unless determinate.
    ///
    /// Never 0: a determinate fraction always shows at least 1%.
    #[allow(
        clippy::as_conversions,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is clamped to 1..=100 before the cast"
    )]
    pub fn percent(self) -> Option<u64> {
        match self {
            Self::Fraction(v) => Some((v * 100.0).round().clamp(1.0, 100.0) as u64),
            Self::Cleared | Self::Indeterminate => None,
        }
    }
}
