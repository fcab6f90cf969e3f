use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Esendex account username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Esendex account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Username/password pair sent as HTTP basic authentication on every request.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Validate both parts and build the credential pair.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Esendex account reference (for example `EX0123456`).
///
/// Invariant: non-empty after trimming.
pub struct AccountReference(String);

impl AccountReference {
    /// Element and query parameter name used by Esendex (`accountreference`).
    pub const FIELD: &'static str = "accountreference";

    /// Create a validated [`AccountReference`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A single outbound SMS.
///
/// Invariant: both `to` and `body` are non-empty after trimming. `to` is stored
/// trimmed; the body is kept verbatim, whitespace included.
pub struct Message {
    to: String,
    body: String,
}

impl Message {
    pub const TO_FIELD: &'static str = "to";
    pub const BODY_FIELD: &'static str = "body";

    /// Create a validated [`Message`].
    pub fn new(to: impl Into<String>, body: impl Into<String>) -> Result<Self, ValidationError> {
        let to = to.into();
        let body = body.into();
        if to.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::TO_FIELD,
            });
        }
        if body.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::BODY_FIELD,
            });
        }
        Ok(Self {
            to: to.trim().to_owned(),
            body,
        })
    }

    /// Destination address.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Message text as provided.
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered, non-empty batch of messages for a single dispatch.
///
/// The gateway reports accepted messages in the same order they were sent.
pub struct Messages(Vec<Message>);

impl Messages {
    /// Create a batch; fails when `messages` is empty.
    pub fn new(messages: Vec<Message>) -> Result<Self, ValidationError> {
        if messages.is_empty() {
            return Err(ValidationError::NoMessages);
        }
        Ok(Self(messages))
    }

    /// Batch containing exactly one message.
    pub fn one(message: Message) -> Self {
        Self(vec![message])
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Messages {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Message>> for Messages {
    type Error = ValidationError;

    fn try_from(value: Vec<Message>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
