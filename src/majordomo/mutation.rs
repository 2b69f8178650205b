use serde::Serialize;

use crate::constants::{SUBSCRIBE_FUNCTION, UNSUBSCRIBE_FUNCTION, VICTIM_SEPARATOR};

/// Administrative membership changes supported by mj_wwwadm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Subscribe,
    Unsubscribe,
}

impl Mutation {
    pub fn function(self) -> &'static str {
        match self {
            Mutation::Subscribe => SUBSCRIBE_FUNCTION,
            Mutation::Unsubscribe => UNSUBSCRIBE_FUNCTION,
        }
    }
}

/// Form body posted to the admin endpoint
#[derive(Debug, Serialize)]
pub struct MutationForm<'a> {
    pub func: &'static str,
    pub victims: String,
    pub list: &'a str,
    pub passw: &'a str,
}

impl<'a> MutationForm<'a> {
    pub fn new<I, S>(mutation: Mutation, addresses: I, list: &'a str, password: &'a str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let victims = addresses
            .into_iter()
            .map(|a| a.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(VICTIM_SEPARATOR);
        Self {
            func: mutation.function(),
            victims,
            list,
            passw: password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_codes() {
        assert_eq!(Mutation::Subscribe.function(), "subscribe-set-welcome");
        assert_eq!(Mutation::Unsubscribe.function(), "unsubscribe-farewell");
    }

    #[test]
    fn test_victims_joined_with_crlf() {
        let form = MutationForm::new(
            Mutation::Unsubscribe,
            ["a@x.com", "b@x.com"],
            "staff",
            "secret",
        );
        assert_eq!(form.victims, "a@x.com\r\nb@x.com");
        assert_eq!(form.func, "unsubscribe-farewell");
        assert_eq!(form.list, "staff");
        assert_eq!(form.passw, "secret");
    }
}
