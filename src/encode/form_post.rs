// self
use crate::{_prelude::*, encode::ResponseParameters};

/// Renders an HTML document whose single form posts `params` to `action` on load.
pub(super) fn render(action: &Url, params: &ResponseParameters) -> String {
	let mut inputs = String::new();

	for (name, value) in params.iter() {
		inputs.push_str(&format!(
			"<input type=\"hidden\" name=\"{}\" value=\"{}\"/>",
			escape(name),
			escape(value)
		));
	}

	format!(
		"<!DOCTYPE html>\
		<html><head><meta charset=\"utf-8\"/><title>Submit this form</title></head>\
		<body>\
		<form method=\"post\" action=\"{action}\">{inputs}\
		<noscript><button type=\"submit\">Click here to continue</button></noscript>\
		</form>\
		<script>\
		window.addEventListener(\"load\",function(){{document.forms[0].submit();}});\
		</script>\
		</body></html>",
		action = escape(action.as_str()),
	)
}

fn escape(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());

	for c in raw.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}

	out
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn form_has_one_hidden_input_per_parameter_and_autosubmits() {
		let action = Url::parse("https://client.example.com/cb").expect("Action should parse.");
		let params: ResponseParameters =
			[("code", "abc"), ("state", "s1"), ("session_state", "x.y")].into_iter().collect();
		let body = render(&action, &params);

		assert_eq!(body.matches("<form ").count(), 1);
		assert_eq!(body.matches("type=\"hidden\"").count(), 3);
		assert!(body.contains("action=\"https://client.example.com/cb\""));
		assert!(body.contains("document.forms[0].submit()"));
	}

	#[test]
	fn attribute_values_are_escaped() {
		let action = Url::parse("https://client.example.com/cb").expect("Action should parse.");
		let params: ResponseParameters =
			[("state", "\"><script>alert('x')</script>")].into_iter().collect();
		let body = render(&action, &params);

		assert!(!body.contains("<script>alert"));
		assert!(
			body.contains("value=\"&quot;&gt;&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;\"")
		);
	}
}
