#![deny(missing_docs)]

//! # Collection Assembly
//!
//! Walks the document's paths and operations and assembles the Postman
//! collection envelope: requests, query/path parameter placeholders, and
//! example responses with materialized bodies.
//!
//! Materialization failures are contained per response: a malformed
//! schema yields an empty body for that one response and never aborts
//! the remaining paths, operations, or responses.

use crate::error::AppResult;
use crate::oas::document::OpenApiDocument;
use crate::oas::example::materialize;
use crate::oas::resolver::resolve;
use crate::postman::collection::{
    Collection, Header, Info, Item, Parameter, Request, RequestUrl, Response,
    COLLECTION_SCHEMA_URL,
};
use http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

/// Method keys recognized as operations inside a path item. Other keys
/// (`parameters`, `summary`, extensions) are path-level metadata.
const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Conversion settings threaded through the request builders.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Base URL prefix for request URLs. Postman variable syntax is
    /// allowed; the default defers resolution to the Postman client.
    pub base_url: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            base_url: "{{url}}".to_string(),
        }
    }
}

/// Converts a loaded OpenAPI document into a Postman collection.
///
/// Every path and every operation is visited in declaration order. A
/// response whose schema cannot be materialized keeps an empty body;
/// the rest of the collection is still fully populated.
pub fn convert(document: &OpenApiDocument, options: &ConvertOptions) -> AppResult<Collection> {
    let mut items = Vec::new();

    for (path, path_item) in document.paths() {
        let postman_path = convert_path(path);
        let Some(operations) = path_item.as_object() else {
            continue;
        };

        for (method, operation) in operations {
            if !HTTP_METHODS.contains(&method.as_str()) {
                continue;
            }
            items.push(build_item(
                document,
                options,
                method,
                path,
                &postman_path,
                operation,
            )?);
        }
    }

    Ok(Collection {
        info: Info {
            postman_id: Uuid::new_v4().to_string(),
            name: document.title().unwrap_or("API").to_string(),
            description: document.description().map(str::to_string),
            schema: COLLECTION_SCHEMA_URL.to_string(),
        },
        item: items,
    })
}

/// Rewrites OpenAPI path templates into Postman variable syntax
/// (`/pets/{petId}` -> `/pets/:petId`).
fn convert_path(path: &str) -> String {
    path.replace('{', ":").replace('}', "")
}

fn build_item(
    document: &OpenApiDocument,
    options: &ConvertOptions,
    method: &str,
    path: &str,
    postman_path: &str,
    operation: &Value,
) -> AppResult<Item> {
    let mut query = Vec::new();
    let mut variable = Vec::new();

    if let Some(params) = operation.get("parameters").and_then(Value::as_array) {
        for param in params {
            let resolved = resolve_parameter(param, document.root())?;
            match resolved.get("in").and_then(Value::as_str) {
                Some("query") => query.push(build_parameter(resolved)),
                Some("path") => variable.push(build_parameter(resolved)),
                _ => {}
            }
        }
    }

    let request = create_request(method, postman_path, query, variable, &options.base_url);
    let name = operation_name(operation, method, path);

    let mut responses = Vec::new();
    if let Some(declared) = operation.get("responses").and_then(Value::as_object) {
        for (code, response) in declared {
            responses.push(build_response(document, &request, &name, code, response));
        }
    }

    Ok(Item {
        name,
        request,
        response: responses,
    })
}

/// Resolves a parameter node that may itself be a `$ref`.
fn resolve_parameter<'a>(parameter: &'a Value, root: &'a Value) -> AppResult<&'a Value> {
    match parameter.get("$ref").and_then(Value::as_str) {
        Some(pointer) => resolve(pointer, root),
        None => Ok(parameter),
    }
}

/// Builds a disabled placeholder from a resolved parameter definition.
fn build_parameter(parameter: &Value) -> Parameter {
    Parameter {
        key: parameter
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        value: None,
        description: parameter
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        disabled: true,
    }
}

fn create_request(
    method: &str,
    path: &str,
    query: Vec<Parameter>,
    variable: Vec<Parameter>,
    base_url: &str,
) -> Request {
    Request {
        method: method.to_uppercase(),
        header: Vec::new(),
        url: RequestUrl {
            raw: format!("{}{}", base_url, path),
            host: vec![base_url.to_string()],
            path: path.split('/').map(str::to_string).collect(),
            query,
            variable,
        },
    }
}

/// Names an item after its operation summary, falling back to
/// `"METHOD /path"` for summary-less operations.
fn operation_name(operation: &Value, method: &str, path: &str) -> String {
    operation
        .get("summary")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} {}", method.to_uppercase(), path))
}

/// Assembles one example response.
///
/// This is the containment boundary for resolver and materializer
/// errors: a failed body keeps this response empty and the conversion
/// moves on.
fn build_response(
    document: &OpenApiDocument,
    request: &Request,
    operation_name: &str,
    code: &str,
    response: &Value,
) -> Response {
    let body = match response_body(response, document.root()) {
        Ok(Some(body)) => body,
        Ok(None) | Err(_) => String::new(),
    };

    let (code_num, status) = status_line(code);

    Response {
        name: format!("{} {}", operation_name, code),
        original_request: request.clone(),
        status,
        code: code_num,
        preview_language: "json".to_string(),
        header: response_headers(response),
        cookie: Vec::new(),
        body,
    }
}

/// Materializes the JSON example body for one response.
///
/// Returns `Ok(None)` when the response declares no JSON content.
fn response_body(response: &Value, root: &Value) -> AppResult<Option<String>> {
    let Some(schema) = response.pointer("/content/application~1json/schema") else {
        return Ok(None);
    };
    let example = materialize(schema, root)?;
    Ok(Some(serde_json::to_string_pretty(&example)?))
}

/// Mirrors the response's first declared media type as a Content-Type
/// header.
fn response_headers(response: &Value) -> Vec<Header> {
    response
        .get("content")
        .and_then(Value::as_object)
        .and_then(|content| content.keys().next())
        .map(|media_type| {
            vec![Header {
                key: "Content-Type".to_string(),
                value: media_type.clone(),
            }]
        })
        .unwrap_or_default()
}

/// Maps a response-code key to its numeric code and reason phrase.
///
/// Non-numeric keys such as `default` or `2XX` keep code `0` and use the
/// capitalized key as the phrase.
fn status_line(code: &str) -> (u16, String) {
    match code.parse::<u16>() {
        Ok(num) => {
            let status = StatusCode::from_u16(num)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown")
                .to_string();
            (num, status)
        }
        Err(_) => (0, capitalize(code)),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
