use std::sync::Arc;

use simple_backend_config::SimpleBackendConfig;

use crate::perf::PerfCounterData;

#[derive(Clone)]
pub struct SimpleBackendAppState {
    pub config: Arc<SimpleBackendConfig>,
    pub perf_data: Arc<PerfCounterData>,
}

impl SimpleBackendAppState {
    pub fn new(config: Arc<SimpleBackendConfig>, perf_data: Arc<PerfCounterData>) -> Self {
        Self { config, perf_data }
    }
}

pub trait PerfCounterDataProvider {
    fn perf_counter_data(&self) -> &PerfCounterData;
}
