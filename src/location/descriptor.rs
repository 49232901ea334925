/// Raw key-value form of a shareable location.
///
/// Only the `view` and `id` fields are meaningful; anything else in the
/// input is dropped. Values are kept as strings here: interpretation,
/// including rejecting a non-integer `id`, happens when the navigation
/// state is resolved from the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub view: Option<String>,
    pub id: Option<String>,
}

impl Location {
    /// Parses a query-string encoding such as `view=details&id=27205`.
    ///
    /// Unknown keys and malformed pairs are ignored; parsing never fails.
    pub fn parse(raw: &str) -> Self {
        let mut location = Location::default();
        for pair in raw.trim().split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "view" => location.view = Some(value.to_string()),
                "id" => location.id = Some(value.to_string()),
                _ => {}
            }
        }
        location
    }

    /// Encodes back to the query-string form. Field order is fixed so the
    /// encoding is stable and comparable.
    pub fn encode(&self) -> String {
        let mut parts = Vec::new();
        if let Some(view) = &self.view {
            parts.push(format!("view={view}"));
        }
        if let Some(id) = &self.id {
            parts.push(format!("id={id}"));
        }
        parts.join("&")
    }

    pub fn home() -> Self {
        Self {
            view: Some("home".to_string()),
            id: None,
        }
    }

    pub fn details(tmdb_id: u64) -> Self {
        Self {
            view: Some("details".to_string()),
            id: Some(tmdb_id.to_string()),
        }
    }
}
