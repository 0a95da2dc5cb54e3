//! Pipeline stage request model
//! Everything here is pure: deriving identifiers and form fields never touches the network.

/// Entity identifier of the Applicants pipeline
pub const ENTITY_ID: &str = "DYNAMIC_1054_STAGE_18";

/// Prefix every stage of the Applicants pipeline carries in its status id
pub const STATUS_ID_PREFIX: &str = "DT1054_18";

/// Color sent when the caller does not pick one (green)
pub const DEFAULT_COLOR: &str = "#47A447";

/// Maximum length of a derived status code, in characters
pub const STATUS_CODE_MAX_LEN: usize = 10;

/// Derive the status code for a stage name.
///
/// Uppercases the name, replaces spaces with underscores and keeps the first
/// ten characters. Distinct names sharing a ten character prefix collide
/// ("Background Check" and "Background Screen" both give `BACKGROUND`).
pub fn derive_status_code(name: &str) -> String {
    name.to_uppercase()
        .replace(' ', "_")
        .chars()
        .take(STATUS_CODE_MAX_LEN)
        .collect()
}

/// Compose the full status id (`DT1054_18:UC_<CODE>`) for a stage name
pub fn status_id(name: &str) -> String {
    format!("{}:UC_{}", STATUS_ID_PREFIX, derive_status_code(name))
}

/// Validate a hex color (`#RGB` or `#RRGGBB`)
pub fn validate_color(color: &str) -> Result<(), String> {
    let digits = color.strip_prefix('#')
        .ok_or_else(|| format!("Invalid color: '{}'. Colors must start with '#'.", color))?;

    if (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(format!("Invalid color: '{}'. Expected #RGB or #RRGGBB.", color))
    }
}

/// A stage about to be submitted to the webhook.
/// Built at call time, submitted once, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRequest {
    pub name: String,
    pub sort_order: i64,
    pub color: String,
}

impl StageRequest {
    /// Create a request; `None` color falls back to [`DEFAULT_COLOR`]
    pub fn new(name: impl Into<String>, sort_order: i64, color: Option<&str>) -> Self {
        Self {
            name: name.into(),
            sort_order,
            color: color.unwrap_or(DEFAULT_COLOR).to_string(),
        }
    }

    pub fn status_code(&self) -> String {
        derive_status_code(&self.name)
    }

    pub fn status_id(&self) -> String {
        status_id(&self.name)
    }

    /// Form fields in the order `crm.status.add` receives them
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("fields[ENTITY_ID]", ENTITY_ID.to_string()),
            ("fields[STATUS_ID]", self.status_id()),
            ("fields[NAME]", self.name.clone()),
            ("fields[SORT]", self.sort_order.to_string()),
            ("fields[COLOR]", self.color.clone()),
        ]
    }
}
