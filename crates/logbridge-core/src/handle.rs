//! Opaque log handle token.

/// Platform-issued identifier naming a logging subsystem/category.
///
/// The bridge never looks inside a handle. It is carried as a pointer-sized
/// integer so it can cross the C boundary unchanged and be compared for
/// identity. Ownership stays with the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LogHandle(usize);

impl LogHandle {
    /// The null token. The bridge resolves it to the default handle.
    pub const NULL: LogHandle = LogHandle(0);

    #[must_use]
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_raw(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}
