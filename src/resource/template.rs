//! URL templates with `:name` route parameters
//!
//! Templates look like `https://host/v_beta/apps/:appId`. Rendering
//! substitutes bound parameter values into their placeholder segments and
//! drops placeholder segments whose parameter is unbound, so the same
//! template addresses both a single entity and its collection.

use std::collections::BTreeMap;

/// A URL string containing zero or more `:name` placeholder segments
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute route parameters into the template.
    ///
    /// Placeholder segments with a bound, non-empty value are replaced by the
    /// percent-encoded value. Unbound (or empty-valued) placeholders are
    /// removed entirely, yielding the collection URL. Duplicate slashes in
    /// the path are collapsed. Rendering never fails and never validates the
    /// base prefix; an empty base yields a scheme-less path.
    pub fn render(&self, params: &RouteParams) -> String {
        // The scheme-and-authority prefix is kept verbatim; substitution
        // applies only to path segments.
        let (prefix, path) = match self.0.find("://") {
            Some(idx) => {
                let after_scheme = idx + "://".len();
                match self.0[after_scheme..].find('/') {
                    Some(slash) => self.0.split_at(after_scheme + slash),
                    None => (self.0.as_str(), ""),
                }
            }
            None => ("", self.0.as_str()),
        };

        let mut rendered = String::from(prefix);
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            match segment.strip_prefix(':') {
                Some(name) => {
                    if let Some(value) = params.get(name).filter(|v| !v.is_empty()) {
                        rendered.push('/');
                        rendered.push_str(&urlencoding::encode(value));
                    }
                }
                None => {
                    rendered.push('/');
                    rendered.push_str(segment);
                }
            }
        }

        if rendered.is_empty() {
            "/".to_string()
        } else {
            rendered
        }
    }
}

impl std::fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named route-parameter bindings for a template
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a parameter; `None` leaves it unbound (collection wildcard).
    pub fn bind(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.0.insert(name.into(), value);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn apps_template(base: &str) -> UrlTemplate {
        UrlTemplate::new(format!("{base}/v_beta/apps/:appId"))
    }

    #[test]
    fn test_render_bound_instance_url() {
        let template = apps_template("https://api.example.com");
        let params = RouteParams::new().bind("appId", Some("42".to_string()));

        assert_eq!(
            template.render(&params),
            "https://api.example.com/v_beta/apps/42"
        );
    }

    #[test]
    fn test_render_unbound_collection_url() {
        let template = apps_template("https://api.example.com");

        assert_eq!(
            template.render(&RouteParams::new()),
            "https://api.example.com/v_beta/apps"
        );
    }

    #[test]
    fn test_render_empty_base_is_schemeless_path() {
        let template = apps_template("");
        let params = RouteParams::new().bind("appId", Some("1".to_string()));

        assert_eq!(template.render(&params), "/v_beta/apps/1");
    }

    #[test]
    fn test_render_collapses_duplicate_slashes() {
        let template = apps_template("http://localhost:9999/");
        let params = RouteParams::new().bind("appId", Some("web".to_string()));

        assert_eq!(template.render(&params), "http://localhost:9999/v_beta/apps/web");
    }

    #[test]
    fn test_render_base_with_path_prefix() {
        let template = apps_template("https://api.example.com/scheduler");

        assert_eq!(
            template.render(&RouteParams::new()),
            "https://api.example.com/scheduler/v_beta/apps"
        );
    }

    #[test]
    fn test_render_percent_encodes_values() {
        let template = apps_template("https://api.example.com");
        let params = RouteParams::new().bind("appId", Some("my app/v1".to_string()));

        assert_eq!(
            template.render(&params),
            "https://api.example.com/v_beta/apps/my%20app%2Fv1"
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    fn test_unbound_and_empty_values_render_alike(#[case] value: Option<String>) {
        let template = apps_template("https://api.example.com");
        let params = RouteParams::new().bind("appId", value);

        assert_eq!(
            template.render(&params),
            "https://api.example.com/v_beta/apps"
        );
    }

    #[test]
    fn test_bound_value_is_preserved_exactly() {
        let params = RouteParams::new().bind("appId", Some("my app".to_string()));
        assert_eq!(params.get("appId"), Some("my app"));
        assert_eq!(params.get("other"), None);
    }

    proptest! {
        #[test]
        fn prop_bound_render_ends_with_encoded_id(id in "[a-zA-Z0-9 ./_-]{1,64}") {
            let template = apps_template("https://api.example.com");
            let params = RouteParams::new().bind("appId", Some(id.clone()));

            let rendered = template.render(&params);
            prop_assert_eq!(
                rendered,
                format!("https://api.example.com/v_beta/apps/{}", urlencoding::encode(&id))
            );
        }

        #[test]
        fn prop_base_is_prefix_of_render(base in "https?://[a-z]{1,16}(:[0-9]{1,5})?") {
            let template = apps_template(&base);
            let rendered = template.render(&RouteParams::new());
            prop_assert_eq!(rendered, format!("{base}/v_beta/apps"));
        }
    }
}
