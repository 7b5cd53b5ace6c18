//! Outbound links for the support actions (translations, support, bug
//! report, idea).

use std::io;

use thiserror::Error;

use crate::config::LinksConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Translations,
    Support,
    BugReport,
    SuggestIdea,
}

impl LinkTarget {
    /// TOML key under `[links]`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Translations => "translations",
            Self::Support => "support",
            Self::BugReport => "bug_report",
            Self::SuggestIdea => "suggest_idea",
        }
    }
}

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("No link configured for '{0}' (set links.{0} in the config file)")]
    NotConfigured(&'static str),

    #[error("Failed to open '{url}': {source}")]
    Launch {
        url: String,
        #[source]
        source: io::Error,
    },
}

impl LinksConfig {
    /// URL configured for `target`, ignoring blank entries.
    pub fn url_for(&self, target: LinkTarget) -> Result<&str, LinkError> {
        let url = match target {
            LinkTarget::Translations => &self.translations,
            LinkTarget::Support => &self.support,
            LinkTarget::BugReport => &self.bug_report,
            LinkTarget::SuggestIdea => &self.suggest_idea,
        };
        url.as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(LinkError::NotConfigured(target.as_str()))
    }
}

/// Hands a URL to something that can show it.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<(), LinkError>;
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&mut self, url: &str) -> Result<(), LinkError> {
        // Detached: the handler must not block or write over the TUI.
        open::that_detached(url).map_err(|source| LinkError::Launch {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_returns_configured_value() {
        let links = LinksConfig {
            bug_report: Some("https://example.org/issues".into()),
            ..Default::default()
        };
        assert_eq!(
            links.url_for(LinkTarget::BugReport).unwrap(),
            "https://example.org/issues"
        );
    }

    #[test]
    fn blank_url_is_not_configured() {
        let links = LinksConfig {
            support: Some("   ".into()),
            ..Default::default()
        };
        let err = links.url_for(LinkTarget::Support).unwrap_err();
        assert!(matches!(err, LinkError::NotConfigured("support")));
        assert!(err.to_string().contains("links.support"));
    }
}
