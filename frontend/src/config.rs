//! Build-time configuration of the dashboard.
//!
//! Both values are baked in by the bundler's environment:
//! `SPACE_API_ORIGIN` points the gateway at the REST API and
//! `SPACE_LOG_LEVEL` caps what reaches the browser console.

use common::config::GatewayConfig;
use log::LevelFilter;

pub fn gateway_config() -> GatewayConfig {
    match option_env!("SPACE_API_ORIGIN") {
        Some(origin) if !origin.trim().is_empty() => GatewayConfig::new(origin),
        _ => GatewayConfig::default(),
    }
}

pub fn log_level() -> LevelFilter {
    parse_level(option_env!("SPACE_LOG_LEVEL"))
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|level| level.trim().parse().ok()).unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_fall_back_to_info() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("verbose")), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
    }
}
