mod common;

use common::{first_event, TestEnv};

#[test]
fn register_sow_allocates_an_id() {
    let env = TestEnv::new();
    let output = env.run(&["--json", "register", "sow", "--tag", "S-202"]);
    assert!(output.status.success());
    let event = first_event(&output);
    assert_eq!(event["event"], "registered");
    assert_eq!(event["animal"], "sow");
    assert_eq!(event["tag"], "S-202");

    let store = env.load_store();
    assert_eq!(store.sows().count(), 2);
}

#[test]
fn duplicate_tags_are_rejected() {
    let env = TestEnv::new();
    let output = env.run(&["register", "sow", "--tag", "S-101"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tag"), "got: {stderr}");
}

#[test]
fn entry_before_birth_is_rejected() {
    let env = TestEnv::new();
    let output = env.run(&[
        "register",
        "boar",
        "--tag",
        "B-9",
        "--birth-date",
        "2023-05-01",
        "--entry-date",
        "2023-04-01",
    ]);
    assert!(!output.status.success());
}

#[test]
fn list_shows_summaries_and_eligible_services() {
    let env = TestEnv::new();
    let service = env.submit_json(
        "service.json",
        &serde_json::json!({
            "kind": "service",
            "sow": 1,
            "boar": 2,
            "service_date": "2024-01-01",
        }),
    );

    let output = env.run(&["list", "service"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("service {service}")), "got: {stdout}");

    // The service is still eligible: no confirmed pregnancy yet.
    let output = env.run(&["--json", "list", "service", "--eligible-for", "1"]);
    assert!(output.status.success());
    assert_eq!(first_event(&output)["count"], 1);

    env.submit_json(
        "pregnancy.json",
        &serde_json::json!({
            "kind": "pregnancy",
            "sow": 1,
            "service": service,
            "conception_date": "2024-01-01",
            "confirmed": true,
            "confirmation_date": "2024-01-25",
        }),
    );
    let output = env.run(&["--json", "list", "service", "--eligible-for", "1"]);
    assert_eq!(first_event(&output)["count"], 0);
}
