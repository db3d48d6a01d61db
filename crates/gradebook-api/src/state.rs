use gradebook_core::AggregationEngine;
use gradebook_report::ReportBuilder;

#[derive(Clone)]
pub struct ApiState {
    pub engine: AggregationEngine,
    pub reports: ReportBuilder,
}

impl ApiState {
    pub fn new(engine: AggregationEngine) -> Self {
        Self {
            engine,
            reports: ReportBuilder::new(),
        }
    }
}
