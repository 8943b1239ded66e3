//! reductions over cleaned and zoned trips.
mod od_matrix;
mod parking;
mod profitability;
mod proximity_class;
mod transit_proximity;
mod trends;
mod zone_activity;

pub use od_matrix::{OdMatrices, OdMatrix, OdPairCount};
pub use parking::{parking_by_zone, parking_intervals, ParkingInterval, ZoneParking};
pub use profitability::{profitability, OperatorProfitability};
pub use proximity_class::ProximityClass;
pub use transit_proximity::{TransitIndex, TransitMapPoint, TransitSummary};
pub use trends::{MobilityTrends, UsageCell, WeekKey};
pub use zone_activity::{zone_activity, zone_operator_origins, ZoneActivity, ZoneOperatorOrigins};
