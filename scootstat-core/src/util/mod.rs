pub mod geo_utils;
pub mod projection;
