/// The common interface to all client-side SASL mechanisms.
///
/// A mechanism instance covers exactly one authentication attempt. The
/// caller drives it like a coroutine: set the credentials, then repeatedly
/// feed it the most recent decoded line from the server and transmit the
/// line it hands back, until that line is empty.
///
/// None of the methods perform I/O or block, and none of them panic on
/// protocol violations; a misbehaving server is reported through
/// [`faulted`](Mechanism::faulted) instead.
pub trait Mechanism {
    /// Sets the identities and secret used in the authentication attempt.
    ///
    /// * `secret` - the mechanism-specific credential, typically a password.
    /// * `authcid` - the identity whose credentials are being verified.
    /// * `authzid` - the identity to act as, if different from `authcid`.
    ///   `None` requests to act as whatever identity the server associates
    ///   with the credentials.
    ///
    /// Identities and the secret are embedded in outgoing messages verbatim;
    /// a `,` or `=` inside an identity is not escaped.
    fn set_credentials(&mut self, secret: &str, authcid: &str, authzid: Option<&str>);

    /// Returns the line to embed in the authentication request itself, or an
    /// empty string if this mechanism sends nothing before the first server
    /// challenge.
    ///
    /// This is an alternative first move to calling
    /// [`proceed`](Mechanism::proceed) with an empty message; use one entry
    /// point or the other, not both, or the first message is emitted twice.
    fn initial_response(&self) -> String;

    /// Consumes the next line received from the server and returns the next
    /// line to send back. The very first call, before any server line
    /// exists, takes an empty message. An empty return value means the
    /// exchange is finished from the client's point of view.
    fn proceed(&mut self, message: &str) -> String;

    /// Whether the mechanism has positively verified that authentication
    /// succeeded. `false` means "not known to have succeeded", which for
    /// mechanisms without mutual authentication (PLAIN, LOGIN) is the only
    /// answer they can ever give.
    fn succeeded(&self) -> bool;

    /// Whether the server supplied a message that violates the protocol or
    /// failed verification. Once set, the session stays faulted and
    /// [`proceed`](Mechanism::proceed) keeps returning empty lines.
    fn faulted(&self) -> bool;

    /// Clears the outcome of the previous exchange.
    ///
    /// PLAIN and LOGIN rewind to their initial state and can run a fresh
    /// exchange. SCRAM clears only the `succeeded`/`faulted` flags and does
    /// not rewind its step; a new SCRAM exchange needs a new session.
    fn reset(&mut self);
}
