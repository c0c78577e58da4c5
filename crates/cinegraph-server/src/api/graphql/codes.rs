//! Error code tagging
//!
//! Resolver errors already carry `extensions.code` (see `to_gql_error`).
//! Errors raised before any resolver runs do not: document parse failures,
//! wrong-typed argument literals, missing required arguments. Those have no
//! `path` and are tagged `INVALID_ARGUMENT`; any other untagged error is
//! tagged `INTERNAL`.

use async_graphql::extensions::{Extension, ExtensionContext, ExtensionFactory, NextRequest};
use async_graphql::{Response, ServerError};
use cinegraph_core::error::{INTERNAL, INVALID_ARGUMENT};
use std::sync::Arc;

/// Schema extension that gives every response error a `code`
pub struct ErrorCodes;

impl ExtensionFactory for ErrorCodes {
    fn create(&self) -> Arc<dyn Extension> {
        Arc::new(ErrorCodesExtension)
    }
}

struct ErrorCodesExtension;

#[async_trait::async_trait]
impl Extension for ErrorCodesExtension {
    async fn request(&self, ctx: &ExtensionContext<'_>, next: NextRequest<'_>) -> Response {
        let mut response = next.run(ctx).await;
        response.errors.iter_mut().for_each(tag);
        response
    }
}

fn tag(error: &mut ServerError) {
    let extensions = error.extensions.get_or_insert_with(Default::default);
    if extensions.get("code").is_some() {
        return;
    }

    let code = if error.path.is_empty() {
        INVALID_ARGUMENT
    } else {
        INTERNAL
    };
    extensions.set("code", code.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::{PathSegment, Value};

    fn code_of(error: &ServerError) -> Option<Value> {
        error.extensions.as_ref()?.get("code").cloned()
    }

    #[test]
    fn test_pathless_error_is_invalid_argument() {
        let mut error = ServerError::new("Invalid value for argument \"id\"", None);
        tag(&mut error);
        assert_eq!(
            code_of(&error),
            Some(Value::String("INVALID_ARGUMENT".to_string()))
        );
    }

    #[test]
    fn test_resolver_error_without_code_is_internal() {
        let mut error = ServerError::new("boom", None);
        error.path = vec![PathSegment::Field("movies".to_string())];
        tag(&mut error);
        assert_eq!(code_of(&error), Some(Value::String("INTERNAL".to_string())));
    }

    #[test]
    fn test_existing_code_is_kept() {
        let mut error = ServerError::new("store down", None);
        error
            .extensions
            .get_or_insert_with(Default::default)
            .set("code", "STORAGE_ERROR".to_string());
        tag(&mut error);
        assert_eq!(
            code_of(&error),
            Some(Value::String("STORAGE_ERROR".to_string()))
        );
    }
}
