//! Tests for the protocol module
//!
//! These tests cover envelope decoding, field validation, argument-key
//! translation, and reply serialization.

#[cfg(test)]
mod tests {
    use super::super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_envelope_defaults() {
        let call = RpcRequest::from_slice(br#"{"agent":"svc","action":"status"}"#)
            .unwrap()
            .into_call()
            .unwrap();
        assert_eq!(call.agent, "svc");
        assert_eq!(call.action, "status");
        assert!(call.args.is_empty());
        assert!(call.identity.is_none());
        assert_eq!(call.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_envelope_full() {
        let request = RpcRequest::from_slice(
            br#"{"agent":"svc","action":"start","arguments":{"name":"vm01"},"identity":"node-3","timeout":5}"#,
        )
        .unwrap();
        assert_eq!(request.identity.as_deref(), Some("node-3"));
        assert_eq!(request.timeout, Some(5));
        assert_eq!(
            request.arguments.as_ref().unwrap().get("name"),
            Some(&json!("vm01"))
        );
    }

    #[test]
    fn test_null_optionals_behave_as_absent() {
        let call = RpcRequest::from_slice(
            br#"{"agent":"svc","action":"status","arguments":null,"identity":null,"timeout":null}"#,
        )
        .unwrap()
        .into_call()
        .unwrap();
        assert!(call.args.is_empty());
        assert!(call.identity.is_none());
        assert_eq!(call.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_envelope_ignores_unknown_keys() {
        let request =
            RpcRequest::from_slice(br#"{"agent":"svc","action":"status","extra":true}"#).unwrap();
        assert_eq!(request.agent.as_deref(), Some("svc"));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = RpcRequest::from_slice(b"{not json").unwrap_err();
        assert!(matches!(err, FanrpcError::MalformedInput(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_non_object_top_level_is_malformed() {
        let err = RpcRequest::from_slice(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, FanrpcError::MalformedInput(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = RpcRequest::from_slice(b"").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_wrong_typed_field_is_malformed() {
        let err = RpcRequest::from_slice(br#"{"agent":5,"action":"status"}"#).unwrap_err();
        assert!(matches!(err, FanrpcError::MalformedInput(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_action_is_missing_field() {
        let request = RpcRequest::from_slice(br#"{"agent":"x"}"#).unwrap();
        let err = request.into_call().unwrap_err();
        assert!(matches!(err, FanrpcError::MissingField("action")));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_missing_agent_is_missing_field() {
        let request = RpcRequest::from_slice(br#"{"action":"status"}"#).unwrap();
        let err = request.into_call().unwrap_err();
        assert!(matches!(err, FanrpcError::MissingField("agent")));
    }

    #[test]
    fn test_empty_agent_is_missing_field() {
        let request = RpcRequest::from_slice(br#"{"agent":"","action":"status"}"#).unwrap();
        let err = request.into_call().unwrap_err();
        assert!(matches!(err, FanrpcError::MissingField("agent")));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_null_action_is_missing_field() {
        let request = RpcRequest::from_slice(br#"{"agent":"x","action":null}"#).unwrap();
        let err = request.into_call().unwrap_err();
        assert!(matches!(err, FanrpcError::MissingField("action")));
    }

    #[test]
    fn test_into_call_carries_fields_through() {
        let call = RpcRequest::from_slice(
            br#"{"agent":"svc","action":"status","identity":"node-7","timeout":5}"#,
        )
        .unwrap()
        .into_call()
        .unwrap();
        assert_eq!(call.agent, "svc");
        assert_eq!(call.action, "status");
        assert_eq!(call.identity.as_deref(), Some("node-7"));
        assert_eq!(call.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_symbol_key_translation() {
        let key = ArgKey::parse("_SYM_mode");
        assert_eq!(key, ArgKey::Symbol { name: "mode".to_string() });
        assert!(key.is_symbol());
        assert_eq!(key.name(), "mode");
    }

    #[test]
    fn test_plain_key_passes_through() {
        let key = ArgKey::parse("mode");
        assert_eq!(key, ArgKey::Plain { name: "mode".to_string() });
        assert!(!key.is_symbol());
        assert_eq!(key.name(), "mode");
    }

    #[test]
    fn test_bare_prefix_is_empty_symbol() {
        let key = ArgKey::parse("_SYM_");
        assert_eq!(key, ArgKey::Symbol { name: String::new() });
    }

    #[test]
    fn test_prefix_only_strips_once() {
        let key = ArgKey::parse("_SYM__SYM_x");
        assert_eq!(key, ArgKey::Symbol { name: "_SYM_x".to_string() });
    }

    #[test]
    fn test_translate_arguments_values_untouched() {
        let call = RpcRequest::from_slice(
            br#"{"agent":"a","action":"b","arguments":{"_SYM_mode":"fast","count":3,"nested":{"deep":[1,2]}}}"#,
        )
        .unwrap()
        .into_call()
        .unwrap();

        let symbol = call.args.iter().find(|a| a.key.is_symbol()).unwrap();
        assert_eq!(symbol.key.name(), "mode");
        assert_eq!(symbol.value, json!("fast"));

        let count = call.args.iter().find(|a| a.key.name() == "count").unwrap();
        assert!(!count.key.is_symbol());
        assert_eq!(count.value, json!(3));

        let nested = call.args.iter().find(|a| a.key.name() == "nested").unwrap();
        assert_eq!(nested.value, json!({"deep": [1, 2]}));
    }

    #[test]
    fn test_arg_key_wire_shape() {
        let serialized = serde_json::to_value(ArgKey::parse("_SYM_mode")).unwrap();
        assert_eq!(serialized, json!({"kind": "symbol", "name": "mode"}));

        let serialized = serde_json::to_value(ArgKey::parse("mode")).unwrap();
        assert_eq!(serialized, json!({"kind": "plain", "name": "mode"}));
    }

    #[test]
    fn test_node_reply_ok() {
        let reply = NodeReply::ok("node-a", json!({"uptime": 12}));
        assert_eq!(reply.sender, "node-a");
        assert_eq!(reply.statuscode, STATUS_OK);
        assert!(reply.succeeded());
    }

    #[test]
    fn test_node_reply_error() {
        let reply = NodeReply::error("node-b", responses::STATUS_UNKNOWN_ACTION, "unknown action");
        assert!(!reply.succeeded());
        assert_eq!(reply.data, serde_json::Value::Null);
    }

    #[test]
    fn test_node_reply_serialization_roundtrip() {
        let reply = NodeReply::ok("node-a", json!({"value": 42}));
        let serialized = serde_json::to_value(&reply).unwrap();
        let deserialized: NodeReply = serde_json::from_value(serialized).unwrap();
        assert_eq!(reply, deserialized);
    }

    #[test]
    fn test_node_reply_missing_data_defaults_to_null() {
        let reply: NodeReply = serde_json::from_str(
            r#"{"sender":"node-a","statuscode":0,"statusmsg":"OK"}"#,
        )
        .unwrap();
        assert_eq!(reply.data, serde_json::Value::Null);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(FanrpcError::MalformedInput("x".into()).exit_code(), 2);
        assert_eq!(FanrpcError::MissingField("agent").exit_code(), 3);
        assert_eq!(FanrpcError::Transport("down".into()).exit_code(), 4);
        assert_eq!(FanrpcError::Timeout(5).exit_code(), 4);
        assert_eq!(FanrpcError::RemoteCall("boom".into()).exit_code(), 4);
        let io = FanrpcError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 1);
    }
}
