//! The PLAIN mechanism (RFC 4616).

use crate::mechanism::Mechanism;

/// A client-side PLAIN session.
///
/// PLAIN discloses the secret to the server in a single message of the form
/// `authzid NUL authcid NUL secret`, so it belongs only on channels that are
/// otherwise protected. The mechanism can never observe the outcome;
/// [`succeeded`](Mechanism::succeeded) stays false.
#[derive(Debug, Default)]
pub struct Plain {
    encoded_credentials: String,
    credentials_sent: bool,
}

impl Plain {
    pub fn new() -> Self {
        Plain::default()
    }
}

impl Mechanism for Plain {
    fn set_credentials(&mut self, secret: &str, authcid: &str, authzid: Option<&str>) {
        self.encoded_credentials =
            format!("{}\0{}\0{}", authzid.unwrap_or(""), authcid, secret);
    }

    fn initial_response(&self) -> String {
        self.encoded_credentials.clone()
    }

    fn proceed(&mut self, _message: &str) -> String {
        if self.credentials_sent {
            String::new()
        } else {
            self.credentials_sent = true;
            self.encoded_credentials.clone()
        }
    }

    fn succeeded(&self) -> bool {
        false
    }

    fn faulted(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        self.credentials_sent = false;
    }
}
