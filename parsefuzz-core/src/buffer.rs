//! Null-terminated working copy of a fuzzer-supplied input.

use crate::error::HarnessError;

/// Byte written after the copied payload.
pub const TERMINATOR: u8 = 0;

/// A locally owned copy of one input plus a trailing [`TERMINATOR`].
///
/// Lives for a single invocation and is released on drop.
#[derive(Debug)]
pub struct WorkingBuffer {
    bytes: Vec<u8>,
}

impl WorkingBuffer {
    /// Copy `input` into a fresh buffer of `input.len() + 1` bytes.
    ///
    /// # Errors
    /// Returns [`HarnessError::Allocation`] if the buffer cannot be reserved.
    pub fn copy_from(input: &[u8]) -> Result<Self, HarnessError> {
        let mut bytes = allocate(input.len())?;
        bytes.extend_from_slice(input);
        bytes.push(TERMINATOR);
        Ok(Self { bytes })
    }

    /// The copied input, without the terminator.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// All bytes including the trailing terminator.
    #[must_use]
    pub fn as_bytes_with_terminator(&self) -> &[u8] {
        &self.bytes
    }

    /// The bytes a C string reader would see: everything before the first
    /// terminator. Equal to [`payload`](Self::payload) when the input has no
    /// embedded NUL.
    #[must_use]
    pub fn as_c_str_prefix(&self) -> &[u8] {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == TERMINATOR)
            .unwrap_or(self.bytes.len());
        &self.bytes[..end]
    }

    /// Length of the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reserve exactly `payload_len + 1` bytes without aborting on failure.
fn allocate(payload_len: usize) -> Result<Vec<u8>, HarnessError> {
    let requested = payload_len
        .checked_add(1)
        .ok_or(HarnessError::Allocation { requested: usize::MAX })?;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(requested)
        .map_err(|_| HarnessError::Allocation { requested })?;
    Ok(bytes)
}
