//! The comma-delimited `key=value` attribute lists used in SCRAM wire
//! messages (RFC 5802 section 7).

use crate::error::ProtocolError;

/// One `key=value` segment of a server message.
#[derive(Debug)]
pub(crate) struct Attribute<'a> {
    pub key: u8,
    pub value: &'a str,
}

/// Splits a server message into its attributes.
///
/// A segment is well formed when it is at least three characters long and
/// carries `=` at index 1; the value is everything after the `=` and is
/// never empty. Recognizing the key is the caller's business, so unknown
/// keys pass through here untouched.
pub(crate) fn attributes(line: &str) -> impl Iterator<Item = Result<Attribute<'_>, ProtocolError>> {
    line.split(',').map(|segment| {
        let bytes = segment.as_bytes();
        if bytes.len() < 3 || bytes[1] != b'=' {
            return Err(ProtocolError::MalformedAttribute(segment.to_string()));
        }
        Ok(Attribute {
            key: bytes[0],
            value: &segment[2..],
        })
    })
}

/// Builds the GS2 header for a client that neither supports nor uses channel
/// binding. The authorization identity is embedded verbatim.
pub(crate) fn gs2_header(authzid: &str) -> String {
    format!("n,{},", authzid)
}
