use crate::environment::VariableMap;
use crate::models::{ResolvedRequest, UNKNOWN_METHOD};
use crate::placeholder::substitute;
use serde_json::Value;

static NO_ITEMS: Value = Value::Null;

/// Shape of a node in a collection tree, decided by which fields it carries.
///
/// A folder may also carry a request of its own; that case is [`NodeShape::Both`]
/// and its children are always walked before its own request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeShape<'a> {
    Sequence(&'a [Value]),
    Container(&'a [Value]),
    Request(&'a Value),
    Both {
        children: &'a [Value],
        request: &'a Value,
    },
    Unrecognized,
}

impl<'a> NodeShape<'a> {
    pub fn of(node: &'a Value) -> Self {
        let fields = match node {
            Value::Array(children) => return NodeShape::Sequence(children),
            Value::Object(fields) => fields,
            _ => return NodeShape::Unrecognized,
        };

        let children = fields
            .get("item")
            .and_then(Value::as_array)
            .map(Vec::as_slice);
        let request = fields.get("request");

        match (children, request) {
            (Some(children), Some(request)) => NodeShape::Both { children, request },
            (Some(children), None) => NodeShape::Container(children),
            (None, Some(request)) => NodeShape::Request(request),
            (None, None) => NodeShape::Unrecognized,
        }
    }
}

/// Requests found during a walk, plus the number of request descriptors that
/// could not be extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    pub requests: Vec<ResolvedRequest>,
    pub skipped: usize,
}

/// Top-level `item` value of a collection document, or `Null` when there is none.
pub fn collection_items(document: &Value) -> &Value {
    document.get("item").unwrap_or(&NO_ITEMS)
}

/// Resolves every request in the tree rooted at `root`, depth-first and left to right.
pub fn resolve_requests(root: &Value, variables: &VariableMap) -> Vec<ResolvedRequest> {
    walk(root, variables).requests
}

pub fn walk(root: &Value, variables: &VariableMap) -> WalkReport {
    let mut report = WalkReport::default();
    walk_node(root, variables, &mut report);
    report
}

fn walk_node(node: &Value, variables: &VariableMap, report: &mut WalkReport) {
    match NodeShape::of(node) {
        NodeShape::Sequence(children) | NodeShape::Container(children) => {
            walk_children(children, variables, report);
        }
        NodeShape::Request(request) => {
            push_request(request, variables, report);
        }
        NodeShape::Both { children, request } => {
            walk_children(children, variables, report);
            push_request(request, variables, report);
        }
        NodeShape::Unrecognized => {}
    }
}

fn walk_children(children: &[Value], variables: &VariableMap, report: &mut WalkReport) {
    for child in children {
        walk_node(child, variables, report);
    }
}

fn push_request(request: &Value, variables: &VariableMap, report: &mut WalkReport) {
    match extract_request(request, variables) {
        Some(resolved) => report.requests.push(resolved),
        None => report.skipped += 1,
    }
}

fn extract_request(request: &Value, variables: &VariableMap) -> Option<ResolvedRequest> {
    let raw_url = request.get("url")?.get("raw")?.as_str()?;
    let method = match request.get("method") {
        None | Some(Value::Null) => UNKNOWN_METHOD.to_string(),
        Some(Value::String(method)) => method.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(_) | Value::Object(_)) => return None,
    };

    Some(ResolvedRequest::new(method, substitute(raw_url, variables)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(pairs: &[(&str, &str)]) -> VariableMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn request(method: &str, raw: &str) -> Value {
        json!({"request": {"method": method, "url": {"raw": raw}}})
    }

    #[test]
    fn test_node_shape_classification() {
        let seq = json!([]);
        assert!(matches!(NodeShape::of(&seq), NodeShape::Sequence(_)));

        let folder = json!({"item": []});
        assert!(matches!(NodeShape::of(&folder), NodeShape::Container(_)));

        let req = request("GET", "x");
        assert!(matches!(NodeShape::of(&req), NodeShape::Request(_)));

        let both = json!({"item": [], "request": {}});
        assert!(matches!(NodeShape::of(&both), NodeShape::Both { .. }));

        assert_eq!(NodeShape::of(&json!({"name": "x"})), NodeShape::Unrecognized);
        assert_eq!(NodeShape::of(&json!("text")), NodeShape::Unrecognized);
        assert_eq!(NodeShape::of(&json!({"item": "x"})), NodeShape::Unrecognized);
    }

    #[test]
    fn test_item_not_array_still_reads_request() {
        let node = json!({"item": 5, "request": {"method": "GET", "url": {"raw": "u"}}});
        assert!(matches!(NodeShape::of(&node), NodeShape::Request(_)));
        assert_eq!(
            resolve_requests(&node, &VariableMap::new()),
            vec![ResolvedRequest::new("GET", "u")]
        );
    }

    #[test]
    fn test_single_request_resolved() {
        let root = json!([request("GET", "https://api/{{token}}/users")]);
        let map = vars(&[("token", "abc123")]);

        assert_eq!(
            resolve_requests(&root, &map),
            vec![ResolvedRequest::new("GET", "https://api/abc123/users")]
        );
    }

    #[test]
    fn test_depth_first_left_to_right_order() {
        let root = json!([
            request("GET", "/1"),
            {"item": [
                request("POST", "/2"),
                {"item": [request("PUT", "/3")]},
                request("DELETE", "/4")
            ]},
            request("PATCH", "/5")
        ]);

        let urls: Vec<String> = resolve_requests(&root, &VariableMap::new())
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(urls, vec!["/1", "/2", "/3", "/4", "/5"]);
    }

    #[test]
    fn test_children_before_own_request() {
        let root = json!([{
            "item": [request("GET", "/child")],
            "request": {"method": "POST", "url": {"raw": "/folder"}}
        }]);

        assert_eq!(
            resolve_requests(&root, &VariableMap::new()),
            vec![
                ResolvedRequest::new("GET", "/child"),
                ResolvedRequest::new("POST", "/folder"),
            ]
        );
    }

    #[test]
    fn test_missing_method_defaults() {
        let root = json!([
            {"request": {"url": {"raw": "/a"}}},
            {"request": {"method": null, "url": {"raw": "/b"}}}
        ]);

        let methods: Vec<String> = resolve_requests(&root, &VariableMap::new())
            .into_iter()
            .map(|r| r.method)
            .collect();
        assert_eq!(methods, vec!["N/A", "N/A"]);
    }

    #[test]
    fn test_scalar_method_stringified() {
        let root = json!([
            {"request": {"method": 3, "url": {"raw": "/number"}}},
            {"request": {"method": true, "url": {"raw": "/bool"}}},
            {"request": {"method": {"name": "GET"}, "url": {"raw": "/object"}}}
        ]);

        let report = walk(&root, &VariableMap::new());
        assert_eq!(
            report.requests,
            vec![
                ResolvedRequest::new("3", "/number"),
                ResolvedRequest::new("true", "/bool"),
            ]
        );
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_malformed_requests_skipped() {
        let root = json!([
            {"request": {"method": "GET", "url": {}}},
            {"request": {"method": "GET", "url": "https://string-url"}},
            {"request": {"method": "GET"}},
            {"request": {"method": "GET", "url": {"raw": 12}}},
            {"request": {"method": ["GET"], "url": {"raw": "/bad-method"}}},
            {"request": "GET /x"},
            request("GET", "/ok")
        ]);

        let report = walk(&root, &VariableMap::new());
        assert_eq!(report.requests, vec![ResolvedRequest::new("GET", "/ok")]);
        assert_eq!(report.skipped, 6);
    }

    #[test]
    fn test_unrecognized_nodes_ignored() {
        let root = json!([null, 1, "x", {"name": "empty"}, {"item": null}]);
        let report = walk(&root, &VariableMap::new());
        assert!(report.requests.is_empty());
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_collection_items() {
        let doc = json!({"info": {}, "item": [request("GET", "/x")]});
        assert_eq!(collection_items(&doc).as_array().map(Vec::len), Some(1));
        assert!(collection_items(&json!({})).is_null());
        assert!(collection_items(&json!([1])).is_null());
    }

    #[test]
    fn test_walk_does_not_mutate_inputs() {
        let root = json!([request("GET", "{{host}}/a"), {"item": [request("GET", "{{host}}/b")]}]);
        let map = vars(&[("host", "h")]);
        let root_before = root.clone();
        let map_before = map.clone();

        let first = walk(&root, &map);
        let second = walk(&root, &map);

        assert_eq!(first, second);
        assert_eq!(root, root_before);
        assert_eq!(map, map_before);
    }
}
