/// InstalledComponent value object: one piece of software observed on the host
///
/// All three fields are free text exactly as the vendor registered them.
/// Names may carry version numbers, edition suffixes or locale markers
/// (`"Mozilla Firefox 91.0 (x64 en-US)"`), and versions may be empty or
/// disagree with the name. Nothing is normalized here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledComponent {
    display_name: String,
    display_version: String,
    publisher: String,
}

impl InstalledComponent {
    pub fn new(
        display_name: impl Into<String>,
        display_version: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            display_version: display_version.into(),
            publisher: publisher.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn display_version(&self) -> &str {
        &self.display_version
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installed_component_accessors() {
        let component =
            InstalledComponent::new("Mozilla Firefox 91.0 (x64 en-US)", "91.0.1", "Mozilla");
        assert_eq!(component.display_name(), "Mozilla Firefox 91.0 (x64 en-US)");
        assert_eq!(component.display_version(), "91.0.1");
        assert_eq!(component.publisher(), "Mozilla");
    }

    #[test]
    fn test_installed_component_default_is_empty() {
        let component = InstalledComponent::default();
        assert!(component.display_name().is_empty());
        assert!(component.display_version().is_empty());
        assert!(component.publisher().is_empty());
    }
}
