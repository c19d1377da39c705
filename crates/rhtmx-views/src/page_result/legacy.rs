use super::{proxy_for, DefaultPageResult, MethodForward, PageResult, RequestScope, ViewResolvers};
use crate::error::{DispatchError, ResultError};
use crate::key::{legacy_key, Directive};
use crate::proxy::Controller;
use crate::resource::ResourceMethod;

/// Page result that honours the legacy views mapping.
///
/// For a legacy component the view is looked up under
/// `<component>.<logic>.<result>`. A configured template is evaluated against
/// the request and then either redirects (`redirect:` prefix) or forwards.
/// Without an entry the convention-based path is forwarded to. Actions of
/// other controllers, and the explicit `forward_to`, `redirect` and `include`
/// calls, go straight to [`DefaultPageResult`].
#[derive(Clone)]
pub struct LegacyPageResult {
    resolvers: ViewResolvers,
    scope: RequestScope,
    delegate: DefaultPageResult,
}

impl LegacyPageResult {
    pub fn new(resolvers: &ViewResolvers, scope: RequestScope) -> Self {
        let delegate = DefaultPageResult::new(resolvers.paths.clone(), scope.clone());
        Self {
            resolvers: resolvers.clone(),
            scope,
            delegate,
        }
    }

    /// Stand-in for `C`; each call resolves that action exactly as
    /// [`PageResult::forward`] resolves the executed one.
    pub fn of<C: Controller>(&self) -> C::Proxy {
        proxy_for::<C, _>(self)
    }

    fn legacy_forward(&self, method: &ResourceMethod) -> Result<(), DispatchError> {
        let naming = &self.resolvers.naming;
        let key = legacy_key(
            &naming.component_name(method.resource()),
            &naming.logic_name(method.method()),
            self.scope.info.result(),
        );

        let Some(template) = self.resolvers.lookup.forward_for(&key) else {
            let path = self.resolvers.paths.path_for(method);
            return self.scope.dispatcher.forward(&path);
        };

        let evaluated = self
            .resolvers
            .evaluator
            .parse_expression(&template, &*self.scope.request)
            .map_err(|source| DispatchError::Expression {
                key: key.clone(),
                template: template.clone(),
                source,
            })?;

        let log = &self.resolvers.log;
        if log.debug_enabled() {
            log.override_resolved(&key, &template, &evaluated);
        }

        match Directive::parse(&evaluated) {
            Directive::Redirect(location) => self.scope.dispatcher.send_redirect(location),
            Directive::Forward(path) => self.scope.dispatcher.forward(path),
        }
    }
}

impl MethodForward for LegacyPageResult {
    fn forward_method(&self, method: &ResourceMethod) -> Result<(), DispatchError> {
        if self.resolvers.naming.is_legacy(method.resource()) {
            self.legacy_forward(method)
        } else {
            self.delegate.forward_method(method)
        }
    }
}

impl PageResult for LegacyPageResult {
    fn forward(&self) -> Result<(), ResultError> {
        Ok(self.forward_method(self.scope.info.resource_method())?)
    }

    fn forward_to(&self, path: &str) -> Result<(), ResultError> {
        tracing::trace!(path, "Explicit forward bypasses the views mapping");
        self.delegate.forward_to(path)
    }

    fn redirect(&self, url: &str) -> Result<(), ResultError> {
        tracing::trace!(url, "Explicit redirect bypasses the views mapping");
        self.delegate.redirect(url)
    }

    fn include(&self) -> Result<(), ResultError> {
        tracing::trace!(
            method = %self.scope.info.resource_method(),
            "Include bypasses the views mapping"
        );
        self.delegate.include()
    }
}
