//! Shared fixtures for the page result integration tests

#![allow(dead_code)]

use rhtmx_views::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct ClientsController;

rhtmx_views::controller! {
    impl Controller for ClientsController {
        legacy = true;
        proxy = ClientsProxy;

        fn list();
        fn show(id: i64);
    }
}

pub struct ReportsController;

rhtmx_views::controller! {
    impl Controller for ReportsController {
        legacy = false;
        proxy = ReportsProxy;

        fn summary();
    }
}

/// Views mapping that remembers every key it was asked for
pub struct RecordingLookup {
    inner: ViewsMapping,
    queried: Mutex<Vec<String>>,
}

impl RecordingLookup {
    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

impl OverrideLookup for RecordingLookup {
    fn forward_for(&self, key: &str) -> Option<String> {
        self.queried.lock().unwrap().push(key.to_string());
        self.inner.forward_for(key)
    }
}

#[derive(Default)]
pub struct CountingPaths {
    inner: ConventionPathResolver,
    calls: AtomicUsize,
}

impl CountingPaths {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PathResolver for CountingPaths {
    fn path_for(&self, method: &ResourceMethod) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.path_for(method)
    }
}

#[derive(Default)]
pub struct CountingEvaluator {
    inner: ExpressionEvaluator,
    calls: AtomicUsize,
}

impl CountingEvaluator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Evaluator for CountingEvaluator {
    fn parse_expression(
        &self,
        template: &str,
        ctx: &dyn VariableContext,
    ) -> Result<String, ExpressionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.parse_expression(template, ctx)
    }
}

pub struct RecordingLog {
    enabled: bool,
    records: Mutex<Vec<(String, String, String)>>,
}

impl RecordingLog {
    pub fn records(&self) -> Vec<(String, String, String)> {
        self.records.lock().unwrap().clone()
    }
}

impl DiagnosticLog for RecordingLog {
    fn debug_enabled(&self) -> bool {
        self.enabled
    }

    fn override_resolved(&self, key: &str, template: &str, result: &str) {
        self.records
            .lock()
            .unwrap()
            .push((key.to_string(), template.to_string(), result.to_string()));
    }
}

pub struct Fixture {
    pub lookup: Arc<RecordingLookup>,
    pub paths: Arc<CountingPaths>,
    pub evaluator: Arc<CountingEvaluator>,
    pub log: Arc<RecordingLog>,
    pub slot: Arc<ResponseSlot>,
}

impl Fixture {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self::with_debug(entries, true)
    }

    pub fn with_debug(entries: &[(&str, &str)], debug: bool) -> Self {
        Self {
            lookup: Arc::new(RecordingLookup {
                inner: ViewsMapping::from_entries(entries.iter().copied()),
                queried: Mutex::new(Vec::new()),
            }),
            paths: Arc::new(CountingPaths::default()),
            evaluator: Arc::new(CountingEvaluator::default()),
            log: Arc::new(RecordingLog {
                enabled: debug,
                records: Mutex::new(Vec::new()),
            }),
            slot: Arc::new(ResponseSlot::new()),
        }
    }

    pub fn resolvers(&self) -> ViewResolvers {
        ViewResolvers::new(self.lookup.clone())
            .with_paths(self.paths.clone())
            .with_evaluator(self.evaluator.clone())
            .with_log(self.log.clone())
    }

    pub fn page(
        &self,
        method: ResourceMethod,
        result: &str,
        request: RequestContext,
    ) -> LegacyPageResult {
        let info = MethodInfo::new(method).with_result(result);
        let scope = RequestScope::new(request, info, self.slot.clone());
        LegacyPageResult::new(&self.resolvers(), scope)
    }
}

pub fn clients(action: &str) -> ResourceMethod {
    ResourceMethod::instance_for::<ClientsController>(ActionMethod::new(action))
}

pub fn reports(action: &str) -> ResourceMethod {
    ResourceMethod::instance_for::<ReportsController>(ActionMethod::new(action))
}
