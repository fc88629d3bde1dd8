use crate::error::ArrayListError;

/// Growth by 100% when the buffer fills up.
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;
/// Shrink once the list drops to 25% of its capacity.
pub const DEFAULT_SHRINK_FACTOR: f64 = 0.25;

/// Controls how an `ArrayList` grows and shrinks its buffer.
///
/// - growth: when `len + n >= capacity` before adding `n` elements, the new
///   capacity is `floor((capacity + n) * growth_factor)`.
/// - shrink: after a removal, if `len <= floor(capacity * shrink_factor)` the
///   buffer is reallocated to exactly `len` slots. A factor of 0 never shrinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizePolicy {
    growth_factor: f64,
    shrink_factor: f64,
}

impl ResizePolicy {
    /// Creates a validated policy.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::InvalidConfiguration` if:
    /// - `growth_factor` is not a finite number greater than 1.0
    /// - `shrink_factor` is not in `[0.0, 1.0)`
    pub fn new(growth_factor: f64, shrink_factor: f64) -> Result<Self, ArrayListError> {
        if !growth_factor.is_finite() || growth_factor <= 1.0 {
            return Err(ArrayListError::InvalidConfiguration {
                parameter: "growth_factor",
                value: growth_factor,
            });
        }

        if !(0.0..1.0).contains(&shrink_factor) {
            return Err(ArrayListError::InvalidConfiguration {
                parameter: "shrink_factor",
                value: shrink_factor,
            });
        }

        Ok(Self {
            growth_factor,
            shrink_factor,
        })
    }

    /// Default growth with shrinking disabled.
    #[must_use]
    pub fn never_shrink() -> Self {
        Self {
            growth_factor: DEFAULT_GROWTH_FACTOR,
            shrink_factor: 0.0,
        }
    }

    #[must_use]
    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    #[must_use]
    pub fn shrink_factor(&self) -> f64 {
        self.shrink_factor
    }

    /// Capacity to reallocate to before adding `additional` elements, or
    /// `None` if the current buffer is kept.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub(crate) fn grown_capacity(
        &self,
        len: usize,
        capacity: usize,
        additional: usize,
    ) -> Option<usize> {
        if additional == 0 || len + additional < capacity {
            return None;
        }
        Some(((capacity + additional) as f64 * self.growth_factor) as usize)
    }

    /// Capacity to reallocate to after a removal, or `None` to keep the buffer.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub(crate) fn shrunk_capacity(&self, len: usize, capacity: usize) -> Option<usize> {
        if self.shrink_factor == 0.0 {
            return None;
        }
        let threshold = (capacity as f64 * self.shrink_factor) as usize;
        (len <= threshold).then_some(len)
    }
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self {
            growth_factor: DEFAULT_GROWTH_FACTOR,
            shrink_factor: DEFAULT_SHRINK_FACTOR,
        }
    }
}
