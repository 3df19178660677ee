//! Strongly typed identifiers used across requests, results, and stores.

// std
use std::{borrow::Borrow, ops::Deref};
// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 256;
const MESSAGE_ID_BYTES: usize = 24;
const REQUEST_ID_BYTES: usize = 16;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (client, request, message).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (client, request, message).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (client, request, message).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! { ClientId, "OAuth 2.0 client identifier of the relying application.", "Client" }
def_id! { RequestId, "Correlation identifier of the inbound HTTP request.", "Request" }
def_id! { MessageId, "Store-assigned reference to a persisted sign-in message.", "Message" }

impl MessageId {
	/// Generates a URL-safe random identifier (192 bits of entropy).
	pub fn generate() -> Self {
		Self(random_url_safe(MESSAGE_ID_BYTES))
	}
}
impl RequestId {
	/// Generates a URL-safe random correlation identifier (128 bits of entropy).
	pub fn generate() -> Self {
		Self(random_url_safe(REQUEST_ID_BYTES))
	}
}

fn random_url_safe(len: usize) -> String {
	let mut bytes = vec![0_u8; len];

	rand::rng().fill_bytes(&mut bytes);

	URL_SAFE_NO_PAD.encode(bytes)
}

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_reject_blank_and_whitespace() {
		assert!(ClientId::new("").is_err());
		assert!(ClientId::new(" client").is_err());
		assert!(RequestId::new("req 1").is_err());

		let client = ClientId::new("implicit-client").expect("Client fixture should be valid.");

		assert_eq!(client.as_ref(), "implicit-client");
		assert_eq!(format!("{client:?}"), "Client(implicit-client)");
	}

	#[test]
	fn serde_enforces_validation() {
		let id: MessageId =
			serde_json::from_str("\"abc-123\"").expect("Message id should deserialize.");

		assert_eq!(&*id, "abc-123");
		assert!(serde_json::from_str::<MessageId>("\"\"").is_err());
	}

	#[test]
	fn generated_ids_are_url_safe_and_distinct() {
		let a = MessageId::generate();
		let b = MessageId::generate();

		assert_ne!(a, b);
		assert_eq!(a.len(), 32);
		assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
		assert!(RequestId::new(RequestId::generate()).is_ok());
	}

	#[test]
	fn length_limit_is_enforced() {
		assert!(ClientId::new("a".repeat(IDENTIFIER_MAX_LEN)).is_ok());
		assert!(ClientId::new("a".repeat(IDENTIFIER_MAX_LEN + 1)).is_err());
	}
}
