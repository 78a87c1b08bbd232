use super::*;

fn sample() -> Repository {
    Repository {
        id: RepositoryId::new(1),
        name: "widgets".into(),
        url: "https://git.example.com/widgets.git".into(),
        user: "svc-agent".into(),
        token: "super-secret-token".into(),
        is_active: true,
    }
}

#[test]
fn debug_output_redacts_token() {
    let repo = sample();
    let debug = format!("{:?}", repo);
    assert!(!debug.contains("super-secret-token"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn deserializes_pascal_case_wire_format() {
    let json = r#"{
        "Id": 3, "Name": "widgets", "Url": "https://git.example.com/widgets.git",
        "User": "svc-agent", "Token": "t0k3n", "IsActive": true
    }"#;
    let repo: Repository = serde_json::from_str(json).expect("deserialize");
    assert_eq!(repo.name, "widgets");
    assert_eq!(repo.token, "t0k3n");
}
