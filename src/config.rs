//! Environment-derived configuration for siteutils.
//!
//! All external settings (API credentials, branch names, package manager)
//! come from the process environment, collected into explicit structs and
//! validated once at command startup. Missing required variables are reported
//! together as a single enumerated list rather than failing one lookup at a
//! time.
//!
//! Constructors take an injectable lookup closure so tests never mutate the
//! process environment.

use crate::error::{Result, SiteError};

/// Environment variable holding the edge-config API bearer token.
pub const ENV_ACCESS_TOKEN: &str = "VERCEL_ACCESS_TOKEN";
/// Environment variable holding the edge-config store ID.
pub const ENV_EDGE_CONFIG_ID: &str = "VERCEL_EDGE_CONFIG_ID";
/// Environment variable overriding the team ID query parameter.
pub const ENV_TEAM_ID: &str = "VERCEL_TEAM_ID";

/// Environment variable overriding the staging branch name.
pub const ENV_STAGING_BRANCH: &str = "SITE_STAGING_BRANCH";
/// Environment variable overriding the production branch name.
pub const ENV_PRODUCTION_BRANCH: &str = "SITE_PRODUCTION_BRANCH";
/// Environment variable overriding the package manager used for `run dev`.
pub const ENV_PACKAGE_MANAGER: &str = "SITE_PACKAGE_MANAGER";

const DEFAULT_TEAM_ID: &str = "junaydb";
const DEFAULT_STAGING_BRANCH: &str = "staging";
const DEFAULT_PRODUCTION_BRANCH: &str = "main";
const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Credentials and addressing for the remote edge-config store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeConfig {
    /// Bearer token for the API.
    pub access_token: String,
    /// Edge-config store ID, part of the request path.
    pub config_id: String,
    /// Team ID passed as a query parameter.
    pub team_id: String,
}

impl EdgeConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Empty values count as missing. All missing required variables are
    /// reported in one [`SiteError::Config`] message.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();

        let access_token = require(&lookup, ENV_ACCESS_TOKEN, &mut missing);
        let config_id = require(&lookup, ENV_EDGE_CONFIG_ID, &mut missing);

        if !missing.is_empty() {
            return Err(SiteError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let team_id = non_empty(lookup(ENV_TEAM_ID)).unwrap_or_else(|| DEFAULT_TEAM_ID.to_string());

        Ok(Self {
            access_token,
            config_id,
            team_id,
        })
    }
}

/// Branch names and tooling for the publish pipeline.
///
/// Every field has a default, so construction cannot fail; the environment
/// only overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// Branch content is authored and committed on.
    pub staging_branch: String,
    /// Branch the site is deployed from.
    pub production_branch: String,
    /// Package manager binary used to launch the dev server.
    pub package_manager: String,
}

impl PublishConfig {
    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            staging_branch: non_empty(lookup(ENV_STAGING_BRANCH))
                .unwrap_or_else(|| DEFAULT_STAGING_BRANCH.to_string()),
            production_branch: non_empty(lookup(ENV_PRODUCTION_BRANCH))
                .unwrap_or_else(|| DEFAULT_PRODUCTION_BRANCH.to_string()),
            package_manager: non_empty(lookup(ENV_PACKAGE_MANAGER))
                .unwrap_or_else(|| DEFAULT_PACKAGE_MANAGER.to_string()),
        }
    }
}

fn require<F>(lookup: &F, key: &'static str, missing: &mut Vec<&'static str>) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup(key)) {
        Some(value) => value,
        None => {
            missing.push(key);
            String::new()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
