/// UpdateCheckRequest - input of the update check use case
#[derive(Debug, Clone, Default)]
pub struct UpdateCheckRequest {
    /// Display-name prefixes to drop, on top of the built-in ignore list
    pub ignore_prefixes: Vec<String>,
}

impl UpdateCheckRequest {
    pub fn new(ignore_prefixes: Vec<String>) -> Self {
        Self { ignore_prefixes }
    }
}
