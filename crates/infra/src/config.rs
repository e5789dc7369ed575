//! Configuration loading from environment variables.
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `BOXOFFICE_PRICE_ADULT` | adult unit price | 20 |
//! | `BOXOFFICE_PRICE_CHILD` | child unit price | 10 |
//! | `BOXOFFICE_PRICE_INFANT` | infant unit price | 0 |
//! | `BOXOFFICE_MAX_TICKETS` | tickets allowed per purchase | 20 |
//! | `BOXOFFICE_SEAT_EXEMPT` | comma-separated seatless categories (empty = none) | `INFANT` |

use boxoffice_tickets::{ConfigError, SeatExemptSet, TicketCategory, TicketServiceConfig};

pub const PRICE_ADULT: &str = "BOXOFFICE_PRICE_ADULT";
pub const PRICE_CHILD: &str = "BOXOFFICE_PRICE_CHILD";
pub const PRICE_INFANT: &str = "BOXOFFICE_PRICE_INFANT";
pub const MAX_TICKETS: &str = "BOXOFFICE_MAX_TICKETS";
pub const SEAT_EXEMPT: &str = "BOXOFFICE_SEAT_EXEMPT";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("{var}: expected a non-negative integer, got {value:?}")]
    NotAnInteger { var: &'static str, value: String },

    #[error("{var}: unknown ticket category {value:?}")]
    UnknownCategory { var: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Load configuration from the process environment.
pub fn load_config() -> Result<TicketServiceConfig, ConfigLoadError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Unset variables keep their defaults.
pub fn load_config_from<F>(lookup: F) -> Result<TicketServiceConfig, ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = TicketServiceConfig::default();

    if let Some(v) = lookup(PRICE_ADULT) {
        config.prices.adult = parse_u64(PRICE_ADULT, &v)?;
    }
    if let Some(v) = lookup(PRICE_CHILD) {
        config.prices.child = parse_u64(PRICE_CHILD, &v)?;
    }
    if let Some(v) = lookup(PRICE_INFANT) {
        config.prices.infant = parse_u64(PRICE_INFANT, &v)?;
    }
    if let Some(v) = lookup(MAX_TICKETS) {
        config.max_tickets_per_purchase = parse_u64(MAX_TICKETS, &v)?;
    }
    if let Some(v) = lookup(SEAT_EXEMPT) {
        config.seat_exempt = parse_categories(SEAT_EXEMPT, &v)?;
    }

    config.validate()?;
    Ok(config)
}

fn parse_u64(var: &'static str, value: &str) -> Result<u64, ConfigLoadError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigLoadError::NotAnInteger {
            var,
            value: value.to_string(),
        })
}

fn parse_categories(var: &'static str, value: &str) -> Result<SeatExemptSet, ConfigLoadError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<TicketCategory>()
                .map_err(|_| ConfigLoadError::UnknownCategory {
                    var,
                    value: s.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<TicketServiceConfig, ConfigLoadError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(load(&[]).unwrap(), TicketServiceConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            (PRICE_ADULT, "25"),
            (PRICE_CHILD, " 12 "),
            (MAX_TICKETS, "8"),
            (SEAT_EXEMPT, "infant, child"),
        ])
        .unwrap();

        assert_eq!(config.prices.adult, 25);
        assert_eq!(config.prices.child, 12);
        assert_eq!(config.prices.infant, 0);
        assert_eq!(config.max_tickets_per_purchase, 8);
        assert!(config.seat_exempt.contains(TicketCategory::Child));
        assert!(config.seat_exempt.contains(TicketCategory::Infant));
        assert!(!config.seat_exempt.contains(TicketCategory::Adult));
    }

    #[test]
    fn empty_exempt_list_means_every_ticket_takes_a_seat() {
        let config = load(&[(SEAT_EXEMPT, "")]).unwrap();
        assert_eq!(config.seat_exempt, SeatExemptSet::none());
    }

    #[test]
    fn bad_values_are_reported() {
        assert_eq!(
            load(&[(PRICE_ADULT, "-5")]),
            Err(ConfigLoadError::NotAnInteger {
                var: PRICE_ADULT,
                value: "-5".to_string(),
            })
        );
        assert_eq!(
            load(&[(SEAT_EXEMPT, "INFANT,SENIOR")]),
            Err(ConfigLoadError::UnknownCategory {
                var: SEAT_EXEMPT,
                value: "SENIOR".to_string(),
            })
        );
        assert_eq!(
            load(&[(MAX_TICKETS, "0")]),
            Err(ConfigLoadError::Invalid(ConfigError::ZeroTicketCap))
        );
    }
}
