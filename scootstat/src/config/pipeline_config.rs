use super::{
    AggregationConfig, CleaningConfig, RenderingConfig, RepresentativeDayConfig, RevenueConfig,
    ZoneLayerConfig,
};
use crate::ScootstatError;
use config::Config;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// every tunable constant of the trip analysis. sections missing from a
/// configuration file keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub cleaning: CleaningConfig,
    pub zones: ZoneLayerConfig,
    pub representative_day: RepresentativeDayConfig,
    pub aggregation: AggregationConfig,
    pub rendering: RenderingConfig,
    pub revenue: RevenueConfig,
}

impl PipelineConfig {
    /// reads a TOML configuration file, or returns the defaults when no file is given.
    pub fn load(filepath: Option<&str>) -> Result<PipelineConfig, ScootstatError> {
        let Some(filepath) = filepath else {
            log::info!("no configuration file provided, using defaults");
            return Ok(PipelineConfig::default());
        };
        let file = config::File::new(filepath, config::FileFormat::Toml);
        let config = Config::builder().add_source(file).build().map_err(|e| {
            ScootstatError::ConfigReadError {
                filepath: filepath.to_string(),
                source: e,
            }
        })?;
        let result = config
            .try_deserialize::<PipelineConfig>()
            .map_err(|e| ScootstatError::ConfigReadError {
                filepath: filepath.to_string(),
                source: e,
            })?;
        result.validate()?;
        Ok(result)
    }

    /// rejects settings that would make every row fail or every join empty.
    pub fn validate(&self) -> Result<(), ScootstatError> {
        let c = &self.cleaning;
        if c.min_speed_m_s.partial_cmp(&c.max_speed_m_s) != Some(Ordering::Less) {
            return Err(ScootstatError::ConfigurationError(format!(
                "cleaning speed range [{}, {}] is empty",
                c.min_speed_m_s, c.max_speed_m_s
            )));
        }
        let b = &c.bounding_box;
        if b.min_lat.partial_cmp(&b.max_lat) != Some(Ordering::Less)
            || b.min_lon.partial_cmp(&b.max_lon) != Some(Ordering::Less)
        {
            return Err(ScootstatError::ConfigurationError(format!(
                "bounding box {b} is empty"
            )));
        }
        if self.representative_day.weekdays.is_empty() {
            return Err(ScootstatError::ConfigurationError(String::from(
                "representative_day.weekdays must name at least one weekday",
            )));
        }
        if self.aggregation.transit_radius_m <= 0.0 {
            return Err(ScootstatError::ConfigurationError(format!(
                "transit radius must be positive, found {}",
                self.aggregation.transit_radius_m
            )));
        }
        if let Some(hour) = self.aggregation.peak_hours.iter().find(|h| **h > 23) {
            return Err(ScootstatError::ConfigurationError(format!(
                "peak hour {hour} is not an hour of the day"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operator;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        PipelineConfig::default()
            .validate()
            .expect("defaults should be valid");
    }

    #[test]
    fn test_bundled_resource_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/src/resources/scootstat-config.toml");
        let loaded = PipelineConfig::load(Some(path)).expect("bundled config loads");
        let defaults = PipelineConfig::default();
        assert_eq!(loaded.cleaning.min_speed_m_s, defaults.cleaning.min_speed_m_s);
        assert_eq!(loaded.aggregation.peak_hours, defaults.aggregation.peak_hours);
        assert_eq!(loaded.representative_day.weekdays, defaults.representative_day.weekdays);
        assert_eq!(
            loaded.revenue.per_minute.get(&Operator::Bird),
            defaults.revenue.per_minute.get(&Operator::Bird)
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = std::env::temp_dir().join("scootstat-config-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("partial.toml");
        let mut file = std::fs::File::create(&path).expect("temp file");
        writeln!(file, "[aggregation]\ntop_n = 10").expect("write");
        let loaded = PipelineConfig::load(path.to_str()).expect("partial config loads");
        assert_eq!(loaded.aggregation.top_n, 10);
        assert_eq!(loaded.aggregation.transit_radius_m, 300.0);
        assert_eq!(loaded.cleaning.max_speed_m_s, 6.94);
    }

    #[test]
    fn test_empty_speed_range_is_rejected() {
        let mut conf = PipelineConfig::default();
        conf.cleaning.min_speed_m_s = 7.0;
        assert!(matches!(
            conf.validate(),
            Err(ScootstatError::ConfigurationError(_))
        ));
    }
}
