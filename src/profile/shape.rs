use super::error::ProfileError;

/// Base and peak load levels of a profile.
///
/// `peak_kw` below `base_kw` is legal: the same ramp formula then produces a
/// dip during operating hours instead of a bump.
///
/// # Examples
///
/// ```
/// use load_model::profile::LoadLevels;
///
/// let levels = LoadLevels::new(50.0, 150.0);
/// assert_eq!(levels.triangular_kw(true, 0.5), 100.0);
/// assert_eq!(levels.triangular_kw(false, 0.5), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadLevels {
    /// Load outside operating hours and at the window edges (kW).
    pub base_kw: f64,
    /// Load at the midpoint of the operating window (kW).
    pub peak_kw: f64,
}

impl LoadLevels {
    pub fn new(base_kw: f64, peak_kw: f64) -> Self {
        Self { base_kw, peak_kw }
    }

    /// Checks that both levels are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidLoad`] naming the offending level.
    pub fn validate(&self) -> Result<(), ProfileError> {
        for (name, value) in [("base load", self.base_kw), ("peak load", self.peak_kw)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::InvalidLoad(format!(
                    "{name} must be a non-negative number of kW, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Load on the triangular ramp for a position from
    /// [`OperatingSchedule::ramp_fraction`](super::OperatingSchedule::ramp_fraction).
    ///
    /// Rising half: `base + (peak - base) * fraction`.
    /// Falling half: `peak - (peak - base) * fraction`.
    pub fn triangular_kw(&self, rising: bool, fraction: f64) -> f64 {
        let span = self.peak_kw - self.base_kw;
        if rising {
            self.base_kw + span * fraction
        } else {
            self.peak_kw - span * fraction
        }
    }
}

impl Default for LoadLevels {
    fn default() -> Self {
        Self {
            base_kw: 50.0,
            peak_kw: 150.0,
        }
    }
}
