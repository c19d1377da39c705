// File: src/proxy.rs
// Purpose: Typed controller stand-ins whose calls are intercepted
//
// `page.of::<ClientsController>().list()` names an action without running it.
// The stand-in is generated by [`controller!`](crate::controller) and hands every
// call to a [`MethodInterceptor`] as an [`Invocation`].

use crate::error::ProxyInvocationError;
use crate::resource::{ActionMethod, ResourceClass, ResourceMethod};
use crate::value::Value;
use std::sync::Arc;

/// A controller type that can be proxied
pub trait Controller: 'static {
    /// The generated stand-in, one method per action
    type Proxy;

    fn resource() -> ResourceClass;

    fn proxy(handler: InvocationHandler) -> Self::Proxy;
}

/// One intercepted call
#[derive(Debug)]
pub struct Invocation<'a> {
    pub declaring: &'a ResourceClass,
    pub method: &'a ActionMethod,
    pub args: &'a [Value],
}

impl Invocation<'_> {
    pub fn resource_method(&self) -> ResourceMethod {
        ResourceMethod::new(self.declaring.clone(), self.method.clone())
    }
}

/// Decides what an intercepted call does
pub trait MethodInterceptor: Send + Sync {
    fn intercept(
        &self,
        invocation: &Invocation<'_>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Held by every generated proxy
#[derive(Clone)]
pub struct InvocationHandler {
    declaring: ResourceClass,
    interceptor: Arc<dyn MethodInterceptor>,
}

impl InvocationHandler {
    pub fn new(declaring: ResourceClass, interceptor: Arc<dyn MethodInterceptor>) -> Self {
        Self {
            declaring,
            interceptor,
        }
    }

    pub fn declaring(&self) -> &ResourceClass {
        &self.declaring
    }

    pub fn invoke(&self, method: ActionMethod, args: Vec<Value>) -> Result<(), ProxyInvocationError> {
        let invocation = Invocation {
            declaring: &self.declaring,
            method: &method,
            args: &args,
        };
        self.interceptor.intercept(&invocation).map_err(|source| {
            ProxyInvocationError::new(
                format!("{}::{}", self.declaring.type_name(), method.name()),
                source,
            )
        })
    }
}

/// Build the stand-in of `C` routing its calls to `interceptor`
pub fn proxify<C: Controller>(interceptor: Arc<dyn MethodInterceptor>) -> C::Proxy {
    C::proxy(InvocationHandler::new(C::resource(), interceptor))
}

/// Implements [`Controller`] for a type and generates its proxy.
///
/// ```
/// pub struct ClientsController;
///
/// rhtmx_views::controller! {
///     impl Controller for ClientsController {
///         legacy = true;
///         component = "clients";
///         proxy = ClientsProxy;
///
///         fn list();
///         fn show(id: i64);
///     }
/// }
/// ```
#[macro_export]
macro_rules! controller {
    (
        $(#[$meta:meta])*
        impl Controller for $ty:ident {
            legacy = $legacy:literal;
            $(component = $component:literal;)?
            proxy = $proxy:ident;

            $( fn $action:ident ( $( $arg:ident : $arg_ty:ty ),* $(,)? ); )*
        }
    ) => {
        $(#[$meta])*
        pub struct $proxy {
            handler: $crate::proxy::InvocationHandler,
        }

        #[allow(dead_code)]
        impl $proxy {
            $(
                pub fn $action(
                    &self $(, $arg: $arg_ty)*
                ) -> ::std::result::Result<(), $crate::ProxyInvocationError> {
                    self.handler.invoke(
                        $crate::ActionMethod::new(stringify!($action)),
                        ::std::vec![$($crate::Value::from($arg)),*],
                    )
                }
            )*
        }

        impl $crate::proxy::Controller for $ty {
            type Proxy = $proxy;

            fn resource() -> $crate::ResourceClass {
                let class = $crate::ResourceClass::new(stringify!($ty)).legacy($legacy);
                $( let class = class.with_component($component); )?
                class
            }

            fn proxy(handler: $crate::proxy::InvocationHandler) -> Self::Proxy {
                $proxy { handler }
            }
        }
    };
}
