//! ==============================================================================
//! configure.rs - rate limit configuration requests
//! ==============================================================================
//!
//! purpose:
//!     builds the one-shot request that tells the backend which algorithm
//!     and parameters to apply to a category endpoint. the limiter itself
//!     lives in the backend; this side only describes it.
//!
//! api:
//!     POST {base}/urls
//!         body: {"url": "...", "algorithm": "...", "limit": 10,
//!                "windowSize": 60, "capacity": 0, "refillRate": 0,
//!                "refillInterval": 0}
//!
//! ==============================================================================

use serde::{Serialize, Serializer};

use crate::category::Category;
use crate::config::ClientConfig;
use crate::error::ClientError;

// ==============================================================================
// algorithms
// ==============================================================================

/// algorithms offered in the configuration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    FixedWindow,
    SlidingWindow,
    TokenBucket,
    LeakyBucket,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::FixedWindow,
        Algorithm::SlidingWindow,
        Algorithm::TokenBucket,
        Algorithm::LeakyBucket,
    ];

    /// identifier sent to the backend
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::FixedWindow => "fixed_window",
            Algorithm::SlidingWindow => "sliding_window",
            Algorithm::TokenBucket => "token_bucket",
            Algorithm::LeakyBucket => "leaky_bucket",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::FixedWindow => "Fixed Window",
            Algorithm::SlidingWindow => "Sliding Window",
            Algorithm::TokenBucket => "Token Bucket",
            Algorithm::LeakyBucket => "Leaky Bucket",
        }
    }

    /// window algorithms read limit/windowSize, bucket algorithms the rest
    pub fn uses_window(self) -> bool {
        matches!(self, Algorithm::FixedWindow | Algorithm::SlidingWindow)
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Algorithm::ALL.into_iter().find(|a| a.id() == id)
    }
}

// ==============================================================================
// form + request
// ==============================================================================

/// raw values of the configuration form, as typed
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigForm {
    pub target: Category,
    pub algorithm: String,
    pub limit: String,
    pub window_size: String,
    pub capacity: String,
    pub refill_rate: String,
    pub refill_interval: String,
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self {
            target: Category::default(),
            algorithm: Algorithm::FixedWindow.id().to_string(),
            limit: String::new(),
            window_size: String::new(),
            capacity: String::new(),
            refill_rate: String::new(),
            refill_interval: String::new(),
        }
    }
}

/// one of the five numeric inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Limit,
    WindowSize,
    Capacity,
    RefillRate,
    RefillInterval,
}

impl NumericField {
    pub const ALL: [NumericField; 5] = [
        NumericField::Limit,
        NumericField::WindowSize,
        NumericField::Capacity,
        NumericField::RefillRate,
        NumericField::RefillInterval,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NumericField::Limit => "Limit",
            NumericField::WindowSize => "Window Size",
            NumericField::Capacity => "Capacity",
            NumericField::RefillRate => "Refill Rate",
            NumericField::RefillInterval => "Refill Interval",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRequest {
    pub url: String,
    pub algorithm: String,
    #[serde(serialize_with = "serialize_number")]
    pub limit: f64,
    #[serde(serialize_with = "serialize_number")]
    pub window_size: f64,
    #[serde(serialize_with = "serialize_number")]
    pub capacity: f64,
    #[serde(serialize_with = "serialize_number")]
    pub refill_rate: f64,
    #[serde(serialize_with = "serialize_number")]
    pub refill_interval: f64,
}

impl ConfigForm {
    pub fn field(&self, field: NumericField) -> &str {
        match field {
            NumericField::Limit => &self.limit,
            NumericField::WindowSize => &self.window_size,
            NumericField::Capacity => &self.capacity,
            NumericField::RefillRate => &self.refill_rate,
            NumericField::RefillInterval => &self.refill_interval,
        }
    }

    pub fn set_field(&mut self, field: NumericField, value: String) {
        let slot = match field {
            NumericField::Limit => &mut self.limit,
            NumericField::WindowSize => &mut self.window_size,
            NumericField::Capacity => &mut self.capacity,
            NumericField::RefillRate => &mut self.refill_rate,
            NumericField::RefillInterval => &mut self.refill_interval,
        };
        *slot = value;
    }

    /// build the outbound request; unparseable numbers become 0
    pub fn to_request(&self, config: &ClientConfig) -> Result<ConfigurationRequest, ClientError> {
        let url = config.endpoint(self.target.descriptor().path)?;
        Ok(ConfigurationRequest {
            url: url.to_string(),
            algorithm: self.algorithm.clone(),
            limit: parse_number(&self.limit),
            window_size: parse_number(&self.window_size),
            capacity: parse_number(&self.capacity),
            refill_rate: parse_number(&self.refill_rate),
            refill_interval: parse_number(&self.refill_interval),
        })
    }
}

/// lenient numeric parse: blank, garbage and non-finite input all read as 0
pub fn parse_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// whole numbers go out as integers (`10`, not `10.0`)
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_number_defaults_to_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
        assert_eq!(parse_number(" 12 "), 12.0);
        assert_eq!(parse_number("0.5"), 0.5);
    }

    #[test]
    fn test_default_form_sends_zeros() {
        let form = ConfigForm::default();
        let request = form.to_request(&ClientConfig::default()).unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "url": "https://rate-limiter-pomz.onrender.com/api/trivia",
                "algorithm": "fixed_window",
                "limit": 0,
                "windowSize": 0,
                "capacity": 0,
                "refillRate": 0,
                "refillInterval": 0
            })
        );
    }

    #[test]
    fn test_request_targets_selected_category() {
        let mut form = ConfigForm {
            target: Category::Movies,
            algorithm: Algorithm::TokenBucket.id().to_string(),
            ..ConfigForm::default()
        };
        form.set_field(NumericField::Capacity, "20".into());
        form.set_field(NumericField::RefillRate, "2.5".into());

        let request = form.to_request(&ClientConfig::new("http://localhost:8080/api")).unwrap();
        let body = serde_json::to_string(&request).unwrap();
        assert!(body.contains("\"url\":\"http://localhost:8080/api/movies\""));
        assert!(body.contains("\"capacity\":20,"));
        assert!(body.contains("\"refillRate\":2.5"));
        assert_eq!(form.field(NumericField::Capacity), "20");
    }

    #[test]
    fn test_algorithm_ids() {
        assert_eq!(Algorithm::from_id("leaky_bucket"), Some(Algorithm::LeakyBucket));
        assert_eq!(Algorithm::from_id("gcra"), None);
        assert!(Algorithm::SlidingWindow.uses_window());
        assert!(!Algorithm::TokenBucket.uses_window());
    }
}
