//! The LOGIN mechanism.
//!
//! LOGIN predates the SASL framework and was never formally standardized;
//! the server prompts twice and the client answers with the username and
//! then the password.

use crate::mechanism::Mechanism;

/// A client-side LOGIN session.
///
/// The challenge texts are conventionally `Username:` and `Password:` but
/// this client answers by position, not by prompt content. Like PLAIN it can
/// never observe the outcome.
#[derive(Debug, Default)]
pub struct Login {
    username: String,
    password: String,
    challenges_answered: usize,
}

impl Login {
    pub fn new() -> Self {
        Login::default()
    }
}

impl Mechanism for Login {
    fn set_credentials(&mut self, secret: &str, authcid: &str, _authzid: Option<&str>) {
        self.username = authcid.to_string();
        self.password = secret.to_string();
    }

    fn initial_response(&self) -> String {
        String::new()
    }

    fn proceed(&mut self, _message: &str) -> String {
        self.challenges_answered += 1;
        match self.challenges_answered {
            1 => self.username.clone(),
            2 => self.password.clone(),
            _ => String::new(),
        }
    }

    fn succeeded(&self) -> bool {
        false
    }

    fn faulted(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        self.challenges_answered = 0;
    }
}
