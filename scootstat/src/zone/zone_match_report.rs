use serde::Serialize;
use std::fmt::Display;

/// diagnostics of a two-sided zone join
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ZoneMatchReport {
    pub trips: usize,
    /// trips whose origin lies within a zone
    pub origin_matches: usize,
    /// trips whose destination lies within a zone
    pub destination_matches: usize,
    /// trips where both endpoints matched
    pub zoned: usize,
    /// endpoints contained in more than one zone, resolved to the first in layer order
    pub ambiguous_endpoints: usize,
}

impl ZoneMatchReport {
    pub fn origin_only(&self) -> usize {
        self.origin_matches - self.zoned
    }

    pub fn destination_only(&self) -> usize {
        self.destination_matches - self.zoned
    }
}

impl Display for ZoneMatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "zone join over {} trips: {} origins matched, {} destinations matched, {} trips zoned ({} origin only, {} destination only)",
            self.trips,
            self.origin_matches,
            self.destination_matches,
            self.zoned,
            self.origin_only(),
            self.destination_only()
        )?;
        if self.ambiguous_endpoints > 0 {
            write!(
                f,
                ", {} endpoints fell in overlapping zones",
                self.ambiguous_endpoints
            )?;
        }
        Ok(())
    }
}
