//! Explicit rounding direction for integer division.

/// Rounding direction for every division the engine performs.
///
/// Quotes paid out to a caller round [`Down`](Self::Down); amounts a caller
/// must pay in round [`Up`](Self::Up). Nothing in the engine divides
/// without naming a direction.
///
/// # Examples
///
/// ```
/// use hydra_exchange::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(!Rounding::Down.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}
