/// How a login identifier should be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginIdentifier {
    Email,
    Username,
}

impl LoginIdentifier {
    /// An input containing both `@` and `.` is treated as an email address,
    /// anything else as a username — even if a username with that exact
    /// string exists.
    pub fn classify(user_input: &str) -> Self {
        if user_input.contains('@') && user_input.contains('.') {
            LoginIdentifier::Email
        } else {
            LoginIdentifier::Username
        }
    }

    /// Error message for an identifier with no matching record.
    pub fn not_found_message(self) -> &'static str {
        match self {
            LoginIdentifier::Email => "Email not found",
            LoginIdentifier::Username => "Username not found",
        }
    }

    /// Error message for a password that fails verification.
    pub fn bad_password_message(self) -> &'static str {
        match self {
            LoginIdentifier::Email => "Email does not match password",
            LoginIdentifier::Username => "Username does not match password",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_both_at_and_dot() {
        assert_eq!(LoginIdentifier::classify("j@x.com"), LoginIdentifier::Email);
        assert_eq!(LoginIdentifier::classify("j@x"), LoginIdentifier::Username);
        assert_eq!(LoginIdentifier::classify("j.doe"), LoginIdentifier::Username);
        assert_eq!(LoginIdentifier::classify("jdoe"), LoginIdentifier::Username);
    }

    #[test]
    fn email_shaped_usernames_still_route_to_email() {
        // A registered username like "a@b.c" is unreachable at login.
        assert_eq!(LoginIdentifier::classify("a@b.c"), LoginIdentifier::Email);
    }
}
