//! Implementation of the `siteutils mode` command.
//!
//! Flips the site-wide `maintenance` flag in the remote edge config. The
//! site's middleware reads the flag and serves a maintenance page when it is
//! "1". The update is a single PATCH with no retries; a failure is surfaced
//! with the server's status and body.

use crate::cli::{ModeArgs, SiteMode};
use crate::config::EdgeConfig;
use crate::edge_config::{update_request, EdgeConfigClient};
use crate::error::Result;

/// Edge-config key holding the site mode flag.
pub const MAINTENANCE_KEY: &str = "maintenance";

/// Execute the `siteutils mode` command.
pub fn cmd_mode(args: ModeArgs) -> Result<()> {
    let config = EdgeConfig::from_env()?;
    let client = EdgeConfigClient::new(config);
    set_mode(&client, args.mode)
}

/// Send the flag update for `mode` through `client`.
pub fn set_mode(client: &EdgeConfigClient, mode: SiteMode) -> Result<()> {
    let request = update_request(&[(MAINTENANCE_KEY, flag_value(mode))]);
    let response = client.update_items(&request)?;

    match mode {
        SiteMode::Standard => println!("Site now in standard mode."),
        SiteMode::Maintenance => println!("Site now in maintenance mode."),
    }
    println!("Raw response: {}", response);

    Ok(())
}

/// Stored flag value for a mode.
fn flag_value(mode: SiteMode) -> &'static str {
    match mode {
        SiteMode::Standard => "0",
        SiteMode::Maintenance => "1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_mode_clears_the_flag() {
        assert_eq!(flag_value(SiteMode::Standard), "0");
    }

    #[test]
    fn maintenance_mode_sets_the_flag() {
        assert_eq!(flag_value(SiteMode::Maintenance), "1");
    }

    #[test]
    fn maintenance_request_body_matches_the_items_api() {
        let request = update_request(&[(MAINTENANCE_KEY, flag_value(SiteMode::Maintenance))]);

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"items":[{"operation":"update","key":"maintenance","value":"1"}]}"#
        );
    }
}
