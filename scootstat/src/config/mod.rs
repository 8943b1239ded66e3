mod aggregation_config;
mod cleaning_config;
mod pipeline_config;
mod rendering_config;
mod representative_day_config;
mod revenue_config;
mod zone_layer_config;

pub use aggregation_config::{AggregationConfig, HourWindow};
pub use cleaning_config::CleaningConfig;
pub use pipeline_config::PipelineConfig;
pub use rendering_config::RenderingConfig;
pub use representative_day_config::RepresentativeDayConfig;
pub use revenue_config::{OperatorValues, RevenueConfig};
pub use zone_layer_config::ZoneLayerConfig;
