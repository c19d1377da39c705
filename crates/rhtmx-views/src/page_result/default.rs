use super::{proxy_for, MethodForward, PageResult, RequestScope};
use crate::error::{DispatchError, ResultError};
use crate::path_resolver::PathResolver;
use crate::proxy::Controller;
use crate::resource::ResourceMethod;
use std::sync::Arc;

/// Renders the convention-based view of an action
#[derive(Clone)]
pub struct DefaultPageResult {
    paths: Arc<dyn PathResolver>,
    scope: RequestScope,
}

impl DefaultPageResult {
    pub fn new(paths: Arc<dyn PathResolver>, scope: RequestScope) -> Self {
        Self { paths, scope }
    }

    /// Stand-in for `C`; calling one of its actions forwards to that action's view
    pub fn of<C: Controller>(&self) -> C::Proxy {
        proxy_for::<C, _>(self)
    }
}

impl MethodForward for DefaultPageResult {
    fn forward_method(&self, method: &ResourceMethod) -> Result<(), DispatchError> {
        let path = self.paths.path_for(method);
        tracing::trace!(%method, path = %path, "Forwarding to default view");
        self.scope.dispatcher.forward(&path)
    }
}

impl PageResult for DefaultPageResult {
    fn forward(&self) -> Result<(), ResultError> {
        Ok(self.forward_method(self.scope.info.resource_method())?)
    }

    fn forward_to(&self, path: &str) -> Result<(), ResultError> {
        tracing::trace!(path, "Forwarding to explicit path");
        Ok(self.scope.dispatcher.forward(path)?)
    }

    fn redirect(&self, url: &str) -> Result<(), ResultError> {
        tracing::trace!(url, "Redirecting");
        Ok(self.scope.dispatcher.send_redirect(url)?)
    }

    fn include(&self) -> Result<(), ResultError> {
        let path = self.paths.path_for(self.scope.info.resource_method());
        tracing::trace!(path = %path, "Including default view");
        Ok(self.scope.dispatcher.include(&path)?)
    }
}
