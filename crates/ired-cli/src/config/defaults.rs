/// Tag that asks for the list of available bond vector tags instead of a script.
pub const LIST_TAG: &str = "?";

pub struct DefaultsConfig {
    pub vectors: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            vectors: LIST_TAG.to_string(),
        }
    }
}
