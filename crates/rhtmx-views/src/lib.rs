// RHTMX Views - view resolution for controller actions
// Legacy views mapping, `${...}` view paths and typed controller proxies

pub mod config;
pub mod dispatch;
pub mod error;
pub mod expression;
pub mod key;
pub mod log;
pub mod method_info;
pub mod naming;
pub mod overrides;
pub mod page_result;
pub mod path_resolver;
pub mod proxy;
pub mod request_context;
pub mod resource;
pub mod value;

// Re-export core types
pub use config::{Config, PathsConfig, ViewsConfig};
pub use dispatch::{Dispatched, Dispatcher, ResponseSlot};
pub use error::{DispatchError, ExpressionError, ProxyInvocationError, ResultError};
pub use expression::{Evaluator, ExpressionEvaluator};
pub use key::{legacy_key, Directive, REDIRECT_PREFIX};
pub use log::{DiagnosticLog, TracingLog};
pub use method_info::MethodInfo;
pub use naming::{ConventionNaming, LegacyNaming};
pub use overrides::{OverrideLookup, ViewsMapping};
pub use page_result::{DefaultPageResult, LegacyPageResult, PageResult, RequestScope, ViewResolvers};
pub use path_resolver::{ConventionPathResolver, PathResolver};
pub use proxy::{Controller, Invocation, InvocationHandler, MethodInterceptor};
pub use request_context::{FormData, QueryParams, RequestContext, VariableContext};
pub use resource::{ActionMethod, ResourceClass, ResourceMethod};
pub use value::Value;
