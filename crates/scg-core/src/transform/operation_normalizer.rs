use http::StatusCode;

use crate::imports::DATE_TIME_FORMAT;
use crate::ir::{IrOperation, IrParameterLocation, IrResponse};

use super::type_normalizer::try_resolve;

/// Placeholder status the upstream parser uses for the default success response.
pub const SENTINEL_STATUS: &str = "0";

/// Vendor extension marking a header parameter as implicit.
pub const IMPLICIT_HEADER_EXTENSION: &str = "x-implicit-header";

/// Normalize one operation in place: response status codes, response types,
/// the operation's return type, then implicit headers.
///
/// Running it again on an already normalized operation changes nothing: a
/// type that already has a container is not split a second time.
pub fn normalize_operation(op: &mut IrOperation) {
    for response in &mut op.responses {
        normalize_response(response);
    }

    if op.return_container.is_none() {
        if let Some(resolved) = try_resolve(op.return_type.as_deref()) {
            op.return_type = Some(resolved.base_type);
            op.return_container = resolved.container;
        }
    }

    extract_implicit_headers(op);
}

/// Rewrite the sentinel status to `200` and split the declared type.
pub fn normalize_response(response: &mut IrResponse) {
    if response.code == SENTINEL_STATUS {
        response.code = StatusCode::OK.as_u16().to_string();
    }

    if !response.container.is_none() {
        return;
    }
    if let Some(resolved) = try_resolve(response.data_type.as_deref()) {
        response.data_type = Some(resolved.base_type);
        response.container = resolved.container;
    }
}

/// Move header parameters flagged `x-implicit-header: true` out of the
/// method signature.
fn extract_implicit_headers(op: &mut IrOperation) {
    let (implicit, explicit): (Vec<_>, Vec<_>) = std::mem::take(&mut op.parameters)
        .into_iter()
        .partition(|p| {
            p.location == IrParameterLocation::Header
                && p.vendor_extensions
                    .get(IMPLICIT_HEADER_EXTENSION)
                    .and_then(serde_json::Value::as_bool)
                    .unwrap_or(false)
        });
    op.parameters = explicit;
    op.implicit_headers.extend(implicit);
}

/// Require the temporal-formatting import when any parameter is a date or date-time.
pub fn annotate_operation(op: &mut IrOperation) {
    if op.parameters.iter().any(|p| p.is_date || p.is_date_time) {
        op.imports.add(DATE_TIME_FORMAT);
    }
}
