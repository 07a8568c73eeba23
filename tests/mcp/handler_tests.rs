//! MCP handler unit tests
//!
//! These tests cover the protocol surface that never reaches a live
//! browser: handshake, discovery, argument validation, and the
//! unknown-tool envelope.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use std::sync::Arc;
    use tabelog_mcp::core::config::Config;
    use tabelog_mcp::core::services::Services;
    use tabelog_mcp::mcp::handlers::ProtocolHandlers;
    use tabelog_mcp::mcp::protocol::*;

    fn create_test_handlers() -> ProtocolHandlers {
        ProtocolHandlers::new(Arc::new(Services::new(Config::default())))
    }

    fn call_request(id: i64, params: serde_json::Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(id)),
            method: "tools/call".to_string(),
            params: Some(params),
        }
    }

    fn envelope_text(response: &JsonRpcResponse) -> (bool, String) {
        let result = response.result.as_ref().expect("tool envelope expected");
        let is_error = result["isError"].as_bool().expect("isError flag expected");
        let text = result["content"][0]["text"]
            .as_str()
            .expect("text content expected")
            .to_string();
        (is_error, text)
    }

    #[tokio::test]
    async fn test_initialize_handler() {
        let handlers = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "initialize".to_string(),
            params: Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {"name": "test", "version": "1.0"}
            })),
        };

        let response = handlers.handle_initialize(request).await.unwrap();

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "tabelog-mcp");
    }

    #[tokio::test]
    async fn test_initialize_with_empty_params() {
        let handlers = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "initialize".to_string(),
            params: None,
        };

        let response = handlers.handle_initialize(request).await.unwrap();
        assert!(response.result.is_some());
    }

    #[tokio::test]
    async fn test_tools_list_exposes_both_tools() {
        let handlers = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(2)),
            method: "tools/list".to_string(),
            params: None,
        };

        let response = handlers.handle_tools_list(request).await.unwrap();

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);

        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["tabelog_snapshot", "tabelog_top"]);

        for tool in tools {
            assert!(tool["inputSchema"]["properties"]["region"].is_object());
            assert_eq!(tool["inputSchema"]["required"], json!([]));
        }
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let handlers = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(3)),
            method: "tools/call".to_string(),
            params: None,
        };

        let response = handlers.handle_tools_call(request).await.unwrap();

        assert!(response.error.is_some());
        assert!(response.result.is_none());

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("Missing params"));
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool_returns_error_envelope() {
        let handlers = create_test_handlers();

        let request = call_request(4, json!({"name": "foo", "arguments": {}}));
        let response = handlers.handle_tools_call(request).await.unwrap();

        // Envelope, not a JSON-RPC error: the call itself succeeds.
        assert!(response.error.is_none());
        let (is_error, text) = envelope_text(&response);
        assert!(is_error);
        assert!(text.contains("Unknown tool: foo"));
    }

    #[tokio::test]
    async fn test_tools_call_top_malformed_limit() {
        let handlers = create_test_handlers();

        let request = call_request(
            5,
            json!({"name": "tabelog_top", "arguments": {"limit": "ten"}}),
        );
        let response = handlers.handle_tools_call(request).await.unwrap();

        assert!(response.error.is_none());
        let (is_error, text) = envelope_text(&response);
        assert!(is_error);
        assert!(text.contains("Invalid arguments for tabelog_top"));
    }

    #[tokio::test]
    async fn test_tools_call_top_malformed_price_range() {
        let handlers = create_test_handlers();

        let request = call_request(
            6,
            json!({"name": "tabelog_top", "arguments": {"priceRange": "cheap"}}),
        );
        let response = handlers.handle_tools_call(request).await.unwrap();

        let (is_error, _) = envelope_text(&response);
        assert!(is_error);
    }

    #[tokio::test]
    async fn test_tools_call_snapshot_malformed_region() {
        let handlers = create_test_handlers();

        let request = call_request(
            7,
            json!({"name": "tabelog_snapshot", "arguments": {"region": 42}}),
        );
        let response = handlers.handle_tools_call(request).await.unwrap();

        assert!(response.error.is_none());
        let (is_error, text) = envelope_text(&response);
        assert!(is_error);
        assert!(text.contains("Invalid arguments for tabelog_snapshot"));
    }

    #[tokio::test]
    async fn test_ping_handler() {
        let handlers = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(8)),
            method: "ping".to_string(),
            params: None,
        };

        let response = handlers.handle_ping(request).await.unwrap();
        assert_eq!(response.result, Some(json!({})));
        assert!(response.error.is_none());
    }
}
