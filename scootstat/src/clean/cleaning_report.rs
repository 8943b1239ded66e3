use super::CleaningStage;
use serde::Serialize;
use std::fmt::Display;

/// row counts around one cleaning stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageCount {
    pub stage: CleaningStage,
    pub rows_before: usize,
    pub rows_after: usize,
}

impl StageCount {
    pub fn rejected(&self) -> usize {
        self.rows_before - self.rows_after
    }
}

/// outcome of a cleaning run, one entry per stage in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub stages: Vec<StageCount>,
}

impl CleaningReport {
    pub fn record(&mut self, stage: CleaningStage, rows_before: usize, rows_after: usize) {
        self.stages.push(StageCount {
            stage,
            rows_before,
            rows_after,
        });
    }

    pub fn rejected(&self, stage: CleaningStage) -> Option<usize> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.rejected())
    }

    pub fn input_rows(&self) -> usize {
        self.stages.first().map(|s| s.rows_before).unwrap_or_default()
    }

    pub fn output_rows(&self) -> usize {
        self.stages.last().map(|s| s.rows_after).unwrap_or_default()
    }
}

impl Display for CleaningReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "cleaning {} rows:", self.input_rows())?;
        for s in self.stages.iter() {
            writeln!(f, "  removed {:>8} ({})", s.rejected(), s.stage)?;
        }
        write!(f, "  retained {} rows", self.output_rows())
    }
}
