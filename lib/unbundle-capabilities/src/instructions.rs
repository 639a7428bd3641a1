use crate::config::Settings;

/// Follow-up commands shown once everything is on disk. Nothing here is
/// ever executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions {
    pub commit_message: String,
    pub branch: String,
}

impl Instructions {
    pub fn from_settings(settings: &Settings) -> Self {
        Instructions {
            commit_message: settings.commit_message.clone(),
            branch: settings.branch.clone(),
        }
    }

    pub fn headline(&self) -> &'static str {
        "🚀 Ready to push to GitHub!"
    }

    pub fn commands(&self) -> Vec<String> {
        vec![
            "git add .".to_string(),
            format!("git commit -m {:?}", self.commit_message),
            format!("git push origin {}", self.branch),
        ]
    }

    /// The full block as plain lines, in print order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            self.headline().to_string(),
            String::new(),
            "Run these commands:".to_string(),
        ];
        lines.extend(self.commands().into_iter().map(|c| format!("  {c}")));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_block() {
        let lines = Instructions::from_settings(&Settings::new(".")).lines();
        assert_eq!(
            lines,
            vec![
                "",
                "🚀 Ready to push to GitHub!",
                "",
                "Run these commands:",
                "  git add .",
                "  git commit -m \"Initial commit: Complete job-finder application\"",
                "  git push origin main",
            ]
        );
    }

    #[test]
    fn branch_is_configurable() {
        let mut settings = Settings::new(".");
        settings.branch = "trunk".into();
        let commands = Instructions::from_settings(&settings).commands();
        assert_eq!(commands.last().unwrap(), "git push origin trunk");
    }
}
