use std::env;
use std::fmt;
use std::ops::RangeInclusive;

use chrono::Duration;

/// Distinguishes runtime behavior for different stages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the core library.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub validation: ValidationConfig,
    pub cache: CacheConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            validation: ValidationConfig::load()?,
            cache: CacheConfig::load()?,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Field-validation policy shared by every lead-capture form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    pub age_window: AgeWindow,
    pub carrier_prefixes: CarrierPrefixes,
}

impl ValidationConfig {
    fn load() -> Result<Self, ConfigError> {
        let min_age = parse_age("INTAKE_MIN_AGE", DEFAULT_MIN_AGE)?;
        let max_age = parse_age("INTAKE_MAX_AGE", DEFAULT_MAX_AGE)?;

        let carrier_prefixes = match env::var("INTAKE_CARRIER_PREFIXES") {
            Ok(raw) => CarrierPrefixes::parse(&raw)?,
            Err(_) => CarrierPrefixes::default(),
        };

        Ok(Self {
            age_window: AgeWindow::new(min_age, max_age),
            carrier_prefixes,
        })
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            age_window: AgeWindow::default(),
            carrier_prefixes: CarrierPrefixes::default(),
        }
    }
}

fn parse_age(var: &'static str, default: u8) -> Result<u8, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u8>()
            .map_err(|_| ConfigError::InvalidAge { var }),
        Err(_) => Ok(default),
    }
}

const DEFAULT_MIN_AGE: u8 = 13;
const DEFAULT_MAX_AGE: u8 = 20;

/// Inclusive age bracket applicants must fall into on the day they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeWindow {
    min_age: u8,
    max_age: u8,
}

impl AgeWindow {
    pub fn new(min_age: u8, max_age: u8) -> Self {
        if min_age <= max_age {
            Self { min_age, max_age }
        } else {
            Self::default()
        }
    }

    pub fn min_age(&self) -> u8 {
        self.min_age
    }

    pub fn max_age(&self) -> u8 {
        self.max_age
    }

    pub fn contains(&self, age: i32) -> bool {
        age >= i32::from(self.min_age) && age <= i32::from(self.max_age)
    }
}

impl Default for AgeWindow {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

/// Allow-listed three-digit mobile prefixes.
///
/// Carrier prefix allocations change over time, so the list is configuration
/// data rather than a literal inside the phone validator. The default is the
/// current snapshot of Turkish mobile assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierPrefixes {
    ranges: Vec<RangeInclusive<u16>>,
}

impl CarrierPrefixes {
    /// Builds an allow-list from prefix ranges, discarding anything outside
    /// the 500-599 mobile block. An empty result falls back to the default
    /// snapshot so a bad override cannot reject every caller.
    pub fn new(ranges: Vec<RangeInclusive<u16>>) -> Self {
        let sanitized: Vec<RangeInclusive<u16>> = ranges
            .into_iter()
            .filter(|range| *range.start() >= 500 && *range.end() <= 599)
            .filter(|range| range.start() <= range.end())
            .collect();

        if sanitized.is_empty() {
            Self::default()
        } else {
            Self { ranges: sanitized }
        }
    }

    /// Parses a comma-separated list of `NNN` or `NNN-NNN` entries, e.g.
    /// `"500-509,532,540-549"`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let mut ranges = Vec::new();
        for entry in value.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let range = match entry.split_once('-') {
                Some((start, end)) => {
                    let start = parse_prefix(start, value)?;
                    let end = parse_prefix(end, value)?;
                    start..=end
                }
                None => {
                    let single = parse_prefix(entry, value)?;
                    single..=single
                }
            };
            ranges.push(range);
        }

        if ranges.is_empty() {
            return Err(ConfigError::InvalidCarrierPrefixes {
                value: value.to_string(),
            });
        }

        Ok(Self::new(ranges))
    }

    pub fn allows(&self, prefix: u16) -> bool {
        self.ranges.iter().any(|range| range.contains(&prefix))
    }
}

fn parse_prefix(raw: &str, original: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidCarrierPrefixes {
            value: original.to_string(),
        })
}

impl Default for CarrierPrefixes {
    fn default() -> Self {
        Self {
            ranges: vec![500..=509, 530..=539, 540..=549, 550..=559],
        }
    }
}

const DEFAULT_EXAM_DATES_TTL_SECS: i64 = 300;
const DEFAULT_MEDIA_TTL_SECS: i64 = 600;
const DEFAULT_TESTIMONIALS_TTL_SECS: i64 = 300;

/// Per-list freshness windows for the consent-gated cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub exam_dates_ttl: Duration,
    pub media_ttl: Duration,
    pub testimonials_ttl: Duration,
}

impl CacheConfig {
    fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            exam_dates_ttl: parse_ttl("CACHE_EXAM_DATES_TTL_SECS", DEFAULT_EXAM_DATES_TTL_SECS)?,
            media_ttl: parse_ttl("CACHE_MEDIA_TTL_SECS", DEFAULT_MEDIA_TTL_SECS)?,
            testimonials_ttl: parse_ttl(
                "CACHE_TESTIMONIALS_TTL_SECS",
                DEFAULT_TESTIMONIALS_TTL_SECS,
            )?,
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            exam_dates_ttl: Duration::seconds(DEFAULT_EXAM_DATES_TTL_SECS),
            media_ttl: Duration::seconds(DEFAULT_MEDIA_TTL_SECS),
            testimonials_ttl: Duration::seconds(DEFAULT_TESTIMONIALS_TTL_SECS),
        }
    }
}

fn parse_ttl(var: &'static str, default_secs: i64) -> Result<Duration, ConfigError> {
    match env::var(var) {
        Ok(raw) => {
            let secs = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidTtl { var })?;
            if secs < 0 {
                return Err(ConfigError::InvalidTtl { var });
            }
            Ok(Duration::seconds(secs))
        }
        Err(_) => Ok(Duration::seconds(default_secs)),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAge { var: &'static str },
    InvalidTtl { var: &'static str },
    InvalidCarrierPrefixes { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAge { var } => {
                write!(f, "{var} must be a whole number of years")
            }
            ConfigError::InvalidTtl { var } => {
                write!(f, "{var} must be a non-negative number of seconds")
            }
            ConfigError::InvalidCarrierPrefixes { value } => {
                write!(
                    f,
                    "carrier prefix list '{value}' must be comma-separated NNN or NNN-NNN entries"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
