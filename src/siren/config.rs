//! # Siren Configuration
//!
//! Rendering policy for the codec. The only knob is how templated links are rendered;
//! the value can come from code, from any serde-driven config file, or from the
//! `SIREN_RENDER_TEMPLATED_LINKS` environment variable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

pub const RENDER_TEMPLATED_LINKS_ENV: &str = "SIREN_RENDER_TEMPLATED_LINKS";

/// How a link whose href still contains template variables is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenderTemplatedLinks {
    /// Emit it as a plain link with the unexpanded template as href.
    AsLink,
    /// Leave it out of `links` and describe it as a `GET` action with one field per variable.
    #[default]
    AsAction,
}

impl RenderTemplatedLinks {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AsLink => "AS_LINK",
            Self::AsAction => "AS_ACTION",
        }
    }
}

impl fmt::Display for RenderTemplatedLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderTemplatedLinks {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AS_LINK" => Ok(Self::AsLink),
            "AS_ACTION" => Ok(Self::AsAction),
            other => Err(format!("Unknown templated link rendering: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SirenConfiguration {
    pub render_templated_links: RenderTemplatedLinks,
}

impl SirenConfiguration {
    pub fn new(render_templated_links: RenderTemplatedLinks) -> Self {
        Self {
            render_templated_links,
        }
    }

    pub fn should_render_templated_links_as(&self, policy: RenderTemplatedLinks) -> bool {
        self.render_templated_links == policy
    }

    /// Reads the policy from the environment, falling back to the default when the
    /// variable is unset or unparseable.
    pub fn from_env() -> Self {
        match std::env::var(RENDER_TEMPLATED_LINKS_ENV) {
            Ok(value) => Self::from_setting(&value),
            Err(_) => Self::default(),
        }
    }

    fn from_setting(value: &str) -> Self {
        match value.parse() {
            Ok(policy) => Self::new(policy),
            Err(error) => {
                warn!(%error, variable = RENDER_TEMPLATED_LINKS_ENV, "Falling back to default");
                Self::default()
            }
        }
    }
}
