// tests/tool_adapter.rs
use scopecheck_core::config::ScopeConfig;
use scopecheck_core::tool::analyze_scope;
use serde_json::json;

#[tokio::test]
async fn test_anti_pattern_reaches_result() {
    let args = json!({
        "files": ["src/button.css", "Dockerfile", "docker-compose.yml"],
        "description": "Fix CSS button alignment"
    });
    let out = analyze_scope(&args, &ScopeConfig::default()).await.unwrap();
    assert_eq!(out["result"]["approved"], true);
    let text = out["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Infrastructure files modified for UI issue!"));
}

#[tokio::test]
async fn test_moderate_summary() {
    let files: Vec<String> = (0..5).map(|i| format!("src/components/c{i}.css")).collect();
    let args = json!({ "files": files, "description": "Update color scheme across components" });
    let out = analyze_scope(&args, &ScopeConfig::default()).await.unwrap();
    assert_eq!(out["result"]["tier"], "MODERATE");
    let text = out["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Moderate scope - approved with caution"));
}
