//! Server performance info

use std::sync::atomic::{AtomicU32, Ordering};

use simple_backend_model::{
    PerfCounterCategoryValues, PerfCounterQueryResult, PerfCounterValue, UnixTime,
};

pub type AllCounters = &'static [&'static CounterCategory];

/// Request counter. Create counters with [crate::create_counters].
pub struct PerfCounter {
    name: &'static str,
    value: AtomicU32,
}

impl PerfCounter {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            value: AtomicU32::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn incr(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn load(&self) -> u32 {
        self.value.load(Ordering::Relaxed)
    }
}

pub struct CounterCategory {
    name: &'static str,
    counter_list: &'static [&'static PerfCounter],
}

impl CounterCategory {
    pub const fn new(name: &'static str, counter_list: &'static [&'static PerfCounter]) -> Self {
        Self { name, counter_list }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn counter_list(&self) -> &'static [&'static PerfCounter] {
        self.counter_list
    }
}

pub struct PerfCounterData {
    server_start_time: UnixTime,
    counters: AllCounters,
}

impl PerfCounterData {
    pub fn new(counters: AllCounters) -> Self {
        Self {
            server_start_time: UnixTime::current_time(),
            counters,
        }
    }

    pub fn query(&self) -> PerfCounterQueryResult {
        let categories = self
            .counters
            .iter()
            .map(|category| PerfCounterCategoryValues {
                category: category.name().to_string(),
                counters: category
                    .counter_list()
                    .iter()
                    .map(|counter| PerfCounterValue {
                        name: counter.name().to_string(),
                        value: counter.load(),
                    })
                    .collect(),
            })
            .collect();

        PerfCounterQueryResult {
            server_start_time: self.server_start_time,
            categories,
        }
    }
}

/// Create a struct containing [PerfCounter] for every listed handler,
/// a static instance of it and a static counter list for
/// [CounterCategory::new].
///
/// ```ignore
/// create_counters!(
///     PostCounters,
///     POST,
///     POST_COUNTERS_LIST,
///     get_post_comments,
/// );
///
/// POST.get_post_comments.incr();
/// ```
#[macro_export]
macro_rules! create_counters {
    (
        $counters_struct_type:ident,
        $counters_static_name:ident,
        $counter_list_name:ident,
        $( $name:ident , )*
    ) => {
        pub struct $counters_struct_type {
            $(
                pub $name: $crate::perf::PerfCounter,
            )*
        }

        impl $counters_struct_type {
            const fn new() -> Self {
                Self {
                    $(
                        $name: $crate::perf::PerfCounter::new(stringify!($name)),
                    )*
                }
            }
        }

        pub static $counters_static_name: $counters_struct_type = $counters_struct_type::new();

        pub static $counter_list_name: &[&$crate::perf::PerfCounter] = &[
            $(
                &$counters_static_name.$name,
            )*
        ];
    };
}
