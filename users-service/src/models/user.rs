use serde::Serialize;
use serde_json::Value;

/// Storage-assigned user identifier (`SERIAL` column)
pub type UserId = i32;

/// A user record as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// Attach a storage-assigned id to a request payload
    pub fn from_payload(id: UserId, payload: UserPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
        }
    }
}

/// Request body for create and update
///
/// Missing fields decode to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Decode a request body without rejecting it
    ///
    /// Only the first JSON value in the body is read. Each of `name` and
    /// `email` is taken on its own: a field that is missing, `null`, or not
    /// a string becomes empty without affecting the other.
    pub fn from_body_lenient(body: &[u8]) -> Self {
        let value = match serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()
        {
            Some(Ok(value)) => value,
            Some(Err(e)) => {
                tracing::warn!("Ignoring undecodable user payload: {}", e);
                return Self::default();
            }
            None => {
                tracing::warn!("Ignoring empty user payload");
                return Self::default();
            }
        };

        Self {
            name: string_field(&value, "name"),
            email: string_field(&value, "email"),
        }
    }
}

fn string_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => {
            tracing::warn!("Ignoring non-string user field {}: {}", key, other);
            String::new()
        }
    }
}
