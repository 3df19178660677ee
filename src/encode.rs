//! Response-mode encoding of authorization result parameters.
//!
//! [`ResponseModeEncoder`] turns a base redirect URI plus a [`ResponseParameters`] set into the
//! artifact mandated by the negotiated `response_mode`: a redirect URI carrying the parameters
//! in its query string or fragment, or an auto-submitting HTML form for `form_post`. Parameters
//! are kept sorted by name, so identical inputs always produce byte-identical output.

mod form_post;

// crates.io
use url::form_urlencoded;
// self
use crate::{_prelude::*, error::ConfigError, request::ResponseMode};

/// Name/value parameters delivered to the client, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters(BTreeMap<String, String>);
impl ResponseParameters {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces a parameter.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.insert(name.into(), value.into());
	}

	/// Inserts the parameter only when a value is present.
	pub fn insert_opt(&mut self, name: impl Into<String>, value: Option<&str>) {
		if let Some(value) = value {
			self.insert(name, value);
		}
	}

	/// Returns the value of `name`, if set.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no parameter is set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over `(name, value)` pairs in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Serializes the set as `application/x-www-form-urlencoded`.
	pub fn to_urlencoded(&self) -> String {
		form_urlencoded::Serializer::new(String::new()).extend_pairs(self.iter()).finish()
	}
}
impl<K, V> FromIterator<(K, V)> for ResponseParameters
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

/// Artifact produced by [`ResponseModeEncoder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodedResponse {
	/// Plain redirect carrying the parameters in the query string or fragment.
	Redirect(Url),
	/// Auto-submitting HTML form posting the parameters to `uri`.
	FormPost {
		/// Form action target, identical to the base redirect URI.
		uri: Url,
		/// Complete HTML document.
		body: String,
	},
}
impl EncodedResponse {
	/// Redirect target or form action.
	pub fn uri(&self) -> &Url {
		match self {
			Self::Redirect(uri) | Self::FormPost { uri, .. } => uri,
		}
	}

	/// Returns `true` for form-post artifacts.
	pub fn is_post(&self) -> bool {
		matches!(self, Self::FormPost { .. })
	}

	/// Splits the artifact into its URI and optional post body.
	pub fn into_parts(self) -> (Url, Option<String>) {
		match self {
			Self::Redirect(uri) => (uri, None),
			Self::FormPost { uri, body } => (uri, Some(body)),
		}
	}
}

/// Encodes result parameters according to a response mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResponseModeEncoder;
impl ResponseModeEncoder {
	/// Encodes `params` against `base` using `mode`.
	pub fn encode(
		&self,
		base: &Url,
		params: &ResponseParameters,
		mode: ResponseMode,
	) -> EncodedResponse {
		match mode {
			ResponseMode::Query => EncodedResponse::Redirect(Self::append_query(base, params)),
			ResponseMode::Fragment =>
				EncodedResponse::Redirect(Self::append_fragment(base, params)),
			ResponseMode::FormPost => EncodedResponse::FormPost {
				uri: base.clone(),
				body: form_post::render(base, params),
			},
		}
	}

	/// Encodes using a raw `response_mode` value received from outside the crate.
	pub fn encode_str(
		&self,
		base: &Url,
		params: &ResponseParameters,
		mode: &str,
	) -> Result<EncodedResponse, ConfigError> {
		Ok(self.encode(base, params, ResponseMode::parse(mode)?))
	}

	fn append_query(base: &Url, params: &ResponseParameters) -> Url {
		let mut uri = base.clone();

		if !params.is_empty() {
			uri.query_pairs_mut().extend_pairs(params.iter());
		}

		uri
	}

	fn append_fragment(base: &Url, params: &ResponseParameters) -> Url {
		let mut uri = base.clone();

		if !params.is_empty() {
			uri.set_fragment(Some(&params.to_urlencoded()));
		}

		uri
	}
}
