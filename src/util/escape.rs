/*!
Provides convenience routines for escaping raw bytes in error messages.
*/

/// Provides a human readable `Debug` implementation for a `u8`.
///
/// Printable ASCII is emitted as is. Everything else is emitted as an
/// escape sequence, with an uppercase hex escape for non-ASCII bytes.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.0 {
            b'\t' => f.write_str("\\t"),
            b'\n' => f.write_str("\\n"),
            b'\r' => f.write_str("\\r"),
            b'\\' => f.write_str("\\\\"),
            b'"' => f.write_str("\\\""),
            b @ 0x20..=0x7E => write!(f, "{}", char::from(b)),
            b => write!(f, "\\x{b:02X}"),
        }
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
