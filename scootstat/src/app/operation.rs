use super::{parse_operator_input, pipeline_ops, OperatorInput};
use crate::config::PipelineConfig;
use crate::ScootstatError;
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum ScootstatOperation {
    /// normalize and clean operator exports into one trip table and one path table
    Clean {
        /// operator export as OPERATOR=PATH, repeated once per export
        #[arg(long = "input", value_parser = parse_operator_input, required = true)]
        inputs: Vec<OperatorInput>,
        #[arg(long)]
        output_directory: String,
        /// TOML file overriding the default analysis parameters
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// assign trips to zones and build origin-destination matrices
    Zones {
        /// cleaned trips written by the clean operation
        #[arg(long)]
        trips: String,
        /// zone boundary CSV with WKT geometries
        #[arg(long)]
        zones: String,
        #[arg(long)]
        output_directory: String,
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// classify zoned trips by the proximity of their endpoints to transit stops
    Transit {
        #[arg(long)]
        trips: String,
        #[arg(long)]
        zones: String,
        /// GeoJSON FeatureCollection of transit stop points
        #[arg(long)]
        stops: String,
        #[arg(long)]
        output_directory: String,
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// derive parking times between consecutive rentals and summarize them per zone
    Parking {
        #[arg(long)]
        trips: String,
        #[arg(long)]
        zones: String,
        #[arg(long)]
        output_directory: String,
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// select one representative weekday per month and export its GPS traces
    RepresentativeDays {
        /// path records written by the clean operation
        #[arg(long)]
        paths: String,
        /// GeoJSON file receiving the traces of the representative days
        #[arg(long)]
        output_file: String,
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// trip volumes per year, month and week, weekday by hour usage and fleet sizes
    Trends {
        #[arg(long)]
        trips: String,
        #[arg(long)]
        output_directory: String,
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// revenue, cost and margin estimate per operator
    Profitability {
        #[arg(long)]
        trips: String,
        #[arg(long)]
        output_file: String,
        #[arg(long)]
        configuration_file: Option<String>,
    },
}

impl ScootstatOperation {
    pub fn run(&self) -> Result<(), ScootstatError> {
        let config = PipelineConfig::load(self.configuration_file())?;
        match self {
            ScootstatOperation::Clean {
                inputs,
                output_directory,
                ..
            } => pipeline_ops::clean(inputs, Path::new(output_directory), &config),
            ScootstatOperation::Zones {
                trips,
                zones,
                output_directory,
                ..
            } => pipeline_ops::zones(
                Path::new(trips),
                Path::new(zones),
                Path::new(output_directory),
                &config,
            ),
            ScootstatOperation::Transit {
                trips,
                zones,
                stops,
                output_directory,
                ..
            } => pipeline_ops::transit(
                Path::new(trips),
                Path::new(zones),
                Path::new(stops),
                Path::new(output_directory),
                &config,
            ),
            ScootstatOperation::Parking {
                trips,
                zones,
                output_directory,
                ..
            } => pipeline_ops::parking(
                Path::new(trips),
                Path::new(zones),
                Path::new(output_directory),
                &config,
            ),
            ScootstatOperation::RepresentativeDays {
                paths, output_file, ..
            } => pipeline_ops::representative_days(
                Path::new(paths),
                Path::new(output_file),
                &config,
            ),
            ScootstatOperation::Trends {
                trips,
                output_directory,
                ..
            } => pipeline_ops::trends(Path::new(trips), Path::new(output_directory)),
            ScootstatOperation::Profitability {
                trips, output_file, ..
            } => pipeline_ops::profitability(Path::new(trips), Path::new(output_file), &config),
        }
    }

    fn configuration_file(&self) -> Option<&str> {
        let file = match self {
            ScootstatOperation::Clean {
                configuration_file, ..
            } => configuration_file,
            ScootstatOperation::Zones {
                configuration_file, ..
            } => configuration_file,
            ScootstatOperation::Transit {
                configuration_file, ..
            } => configuration_file,
            ScootstatOperation::Parking {
                configuration_file, ..
            } => configuration_file,
            ScootstatOperation::RepresentativeDays {
                configuration_file, ..
            } => configuration_file,
            ScootstatOperation::Trends {
                configuration_file, ..
            } => configuration_file,
            ScootstatOperation::Profitability {
                configuration_file, ..
            } => configuration_file,
        };
        file.as_deref()
    }
}
