//! URL path patterns with `{name}` parameters.

use std::collections::HashMap;

/// One segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	/// Must match verbatim.
	Literal(String),
	/// Captures the segment under the given name.
	Param(String),
}

/// A parsed path pattern, e.g. `/post/{id}`.
///
/// Matching is segment-wise; trailing slashes are ignored on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
	raw: String,
	segments: Vec<Segment>,
}

impl PathPattern {
	/// Parses a pattern string.
	pub fn new(pattern: &str) -> Self {
		let segments = pattern
			.trim_matches('/')
			.split('/')
			.filter(|s| !s.is_empty())
			.map(|s| {
				if let Some(name) = s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
					Segment::Param(name.to_string())
				} else {
					Segment::Literal(s.to_string())
				}
			})
			.collect();

		Self {
			raw: pattern.to_string(),
			segments,
		}
	}

	/// The original pattern string.
	pub fn raw(&self) -> &str {
		&self.raw
	}

	/// Matches a concrete path, returning captured parameters on success.
	pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
		let path = path.split(['?', '#']).next().unwrap_or(path);
		let parts: Vec<&str> = path
			.trim_matches('/')
			.split('/')
			.filter(|s| !s.is_empty())
			.collect();

		if parts.len() != self.segments.len() {
			return None;
		}

		let mut params = HashMap::new();
		for (segment, part) in self.segments.iter().zip(parts) {
			match segment {
				Segment::Literal(literal) => {
					if literal != part {
						return None;
					}
				}
				Segment::Param(name) => {
					let value = urlencoding::decode(part)
						.map(|v| v.into_owned())
						.unwrap_or_else(|_| part.to_string());
					params.insert(name.clone(), value);
				}
			}
		}

		Some(params)
	}

	/// Builds a concrete path from parameter values.
	///
	/// Returns `None` when a required parameter is missing.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
		if self.segments.is_empty() {
			return Some("/".to_string());
		}

		let mut path = String::new();
		for segment in &self.segments {
			path.push('/');
			match segment {
				Segment::Literal(literal) => path.push_str(literal),
				Segment::Param(name) => {
					let value = params.get(name)?;
					path.push_str(&urlencoding::encode(value));
				}
			}
		}
		Some(path)
	}
}
