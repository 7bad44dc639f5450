use core::fmt;

/// Failure while bringing up the sculpture
///
/// There is no degraded mode: the firmware must stop and wait for an
/// operator when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError<E> {
    /// The distance sensor did not boot
    SensorInit(E),
}

impl<E: fmt::Debug> fmt::Display for SetupError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensorInit(err) => write!(f, "failed to boot distance sensor: {err:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for SetupError<E> {}
