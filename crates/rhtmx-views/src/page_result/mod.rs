//! # Page results
//!
//! A page result decides what the response of a controller action renders.
//!
//! - [`DefaultPageResult`] forwards to the convention-based view of the action.
//! - [`LegacyPageResult`] first consults the legacy views mapping for actions of
//!   legacy components, falling back to the default behaviour otherwise.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use rhtmx_views::{
//!     ActionMethod, Dispatched, LegacyPageResult, MethodInfo, PageResult, RequestContext,
//!     RequestScope, ResourceClass, ResourceMethod, ResponseSlot, ViewResolvers, ViewsMapping,
//! };
//!
//! let mapping = ViewsMapping::from_entries([("clients.list.ok", "redirect:/home")]);
//! let resolvers = ViewResolvers::new(Arc::new(mapping));
//!
//! let method = ResourceMethod::new(
//!     ResourceClass::new("ClientsController").legacy(true),
//!     ActionMethod::new("list"),
//! );
//! let slot = Arc::new(ResponseSlot::new());
//! let scope = RequestScope::new(RequestContext::get("/clients"), MethodInfo::new(method), slot.clone());
//!
//! LegacyPageResult::new(&resolvers, scope).forward().unwrap();
//! assert_eq!(slot.outcome(), Some(Dispatched::Redirect("/home".into())));
//! ```

mod default;
mod legacy;

pub use default::DefaultPageResult;
pub use legacy::LegacyPageResult;

use crate::config::ViewsConfig;
use crate::dispatch::Dispatcher;
use crate::error::{DispatchError, ResultError};
use crate::expression::{Evaluator, ExpressionEvaluator};
use crate::log::{DiagnosticLog, TracingLog};
use crate::method_info::MethodInfo;
use crate::naming::{ConventionNaming, LegacyNaming};
use crate::overrides::{OverrideLookup, ViewsMapping};
use crate::path_resolver::{ConventionPathResolver, PathResolver};
use crate::proxy::{proxify, Controller, Invocation, MethodInterceptor};
use crate::request_context::RequestContext;
use crate::resource::ResourceMethod;
use std::sync::Arc;

/// What to render once an action has run
pub trait PageResult {
    /// Render the view of the executed action
    fn forward(&self) -> Result<(), ResultError>;

    /// Forward to an explicit path
    fn forward_to(&self, path: &str) -> Result<(), ResultError>;

    /// Redirect the client to `url`
    fn redirect(&self, url: &str) -> Result<(), ResultError>;

    /// Include the view of the executed action
    fn include(&self) -> Result<(), ResultError>;
}

/// Everything a page result needs from the current request
#[derive(Clone)]
pub struct RequestScope {
    pub request: Arc<RequestContext>,
    pub info: Arc<MethodInfo>,
    pub dispatcher: Arc<dyn Dispatcher>,
}

impl RequestScope {
    pub fn new(request: RequestContext, info: MethodInfo, dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            request: Arc::new(request),
            info: Arc::new(info),
            dispatcher,
        }
    }
}

/// Application-wide collaborators, built once and shared by every request
#[derive(Clone)]
pub struct ViewResolvers {
    pub(crate) lookup: Arc<dyn OverrideLookup>,
    pub(crate) paths: Arc<dyn PathResolver>,
    pub(crate) naming: Arc<dyn LegacyNaming>,
    pub(crate) evaluator: Arc<dyn Evaluator>,
    pub(crate) log: Arc<dyn DiagnosticLog>,
}

impl ViewResolvers {
    pub fn new(lookup: Arc<dyn OverrideLookup>) -> Self {
        Self {
            lookup,
            paths: Arc::new(ConventionPathResolver::default()),
            naming: Arc::new(ConventionNaming),
            evaluator: Arc::new(ExpressionEvaluator::new()),
            log: Arc::new(TracingLog),
        }
    }

    /// Views mapping and default paths taken from `[views]`
    pub fn from_config(config: &ViewsConfig) -> Self {
        Self::new(Arc::new(ViewsMapping::from_config(config)))
            .with_paths(Arc::new(ConventionPathResolver::from_config(&config.paths)))
    }

    pub fn with_paths(mut self, paths: Arc<dyn PathResolver>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_naming(mut self, naming: Arc<dyn LegacyNaming>) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_evaluator(mut self, evaluator: Arc<dyn Evaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_log(mut self, log: Arc<dyn DiagnosticLog>) -> Self {
        self.log = log;
        self
    }
}

/// Resolution of an arbitrary action, shared by direct and proxied calls
pub(crate) trait MethodForward: Clone + Send + Sync + 'static {
    fn forward_method(&self, method: &ResourceMethod) -> Result<(), DispatchError>;
}

struct ForwardInterceptor<F>(F);

impl<F: MethodForward> MethodInterceptor for ForwardInterceptor<F> {
    fn intercept(
        &self,
        invocation: &Invocation<'_>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let method = invocation.resource_method();
        tracing::trace!(%method, "Intercepted proxy call");
        self.0
            .forward_method(&method)
            .map_err(|err| ResultError::from(err).into())
    }
}

pub(crate) fn proxy_for<C: Controller, F: MethodForward>(forwarder: &F) -> C::Proxy {
    proxify::<C>(Arc::new(ForwardInterceptor(forwarder.clone())))
}
