#![cfg(test)]
//! End-to-end manifest scenarios, from raw route JSON to zone queries.

use ipdb_core::error::ManifestError;
use ipdb_core::manifest::{Manifest, ZoneMember};
use ipdb_core::records::{load_route_records, parse_route_records};
use serde_json::{Value, json};

fn fleet() -> Value {
    json!({
        "saltmaster.example": { "source": "10.1.10.20" },
        "linux-1.example": { "source": "10.2.10.20" }
    })
}

fn build(value: &Value) -> Manifest {
    let records = load_route_records(value).expect("route records");
    Manifest::build(&records).expect("manifest")
}

#[test]
fn manifest_from_fleet_routes() -> anyhow::Result<()> {
    let manifest = build(&fleet());

    assert_eq!(
        serde_json::to_value(&manifest)?,
        json!({
            "saltmaster": {
                "ip": "10.1.10.20",
                "reverse_ip": "20.10.1.10",
                "reverse_zone": "10.1.10",
                "reverse_entry": "20"
            },
            "linux-1": {
                "ip": "10.2.10.20",
                "reverse_ip": "20.10.2.10",
                "reverse_zone": "10.2.10",
                "reverse_entry": "20"
            }
        })
    );
    Ok(())
}

#[test]
fn reverse_zones_of_fleet() {
    assert_eq!(build(&fleet()).reverse_zones(), vec!["10.1.10", "10.2.10"]);
}

#[test]
fn zone_members_of_fleet() {
    assert_eq!(
        build(&fleet()).zone_members("10.2.10"),
        vec![ZoneMember {
            hostname: "linux-1".into(),
            reverse_entry: "20".into(),
        }]
    );
}

#[test]
fn manifest_survives_json_round_trip() -> anyhow::Result<()> {
    let manifest = build(&fleet());
    let text: String = serde_json::to_string(&manifest)?;
    let reloaded = Manifest::from_json(&serde_json::from_str(&text)?)?;

    assert_eq!(reloaded, manifest);
    assert_eq!(reloaded.zone_members("10.1.10")[0].hostname, "saltmaster");
    Ok(())
}

#[test]
fn members_serialize_with_hostname_and_entry() -> anyhow::Result<()> {
    let members = build(&fleet()).zone_members("10.1.10");
    assert_eq!(
        serde_json::to_value(&members)?,
        json!([{ "hostname": "saltmaster", "reverse_entry": "20" }])
    );
    Ok(())
}

// Non-object input keeps the legacy contract: empty results, no error.
#[test]
fn non_mapping_input_yields_empty_results() -> anyhow::Result<()> {
    let records = parse_route_records(r#"["saltmaster.example"]"#)?;
    let manifest = Manifest::build(&records)?;

    assert!(manifest.is_empty());
    assert!(manifest.reverse_zones().is_empty());
    assert!(Manifest::from_json(&json!("10.1.10"))?.zone_members("10.1.10").is_empty());
    Ok(())
}

#[test]
fn leading_zero_source_is_reported_verbatim() {
    let manifest = build(&json!({ "db-1.example": { "source": "10.1.10.020" } }));
    let entry = manifest.get("db-1").expect("db-1 entry");

    assert_eq!(entry.ip, "10.1.10.020");
    assert_eq!(entry.reverse_ip, "020.10.1.10");
    assert_eq!(entry.reverse_entry, "020");
    assert_eq!(entry.reverse_zone, "10.1.10");
    assert_eq!(manifest.zone_members("10.1.10")[0].reverse_entry, "020");
}

#[test]
fn host_without_source_lands_in_zero_zone() {
    let manifest = build(&json!({ "orphan.example": { "interface": "eth0" } }));
    assert_eq!(manifest.reverse_zones(), vec!["0.0.0"]);
    assert_eq!(manifest.get("orphan").map(|e| e.ip.as_str()), Some("0.0.0.0"));
}

#[test]
fn malformed_source_names_the_host() {
    let records = load_route_records(&json!({
        "good.example": { "source": "10.1.10.20" },
        "broken.example": { "source": "10.1.10.300" }
    }))
    .expect("route records");

    let err = Manifest::build(&records).unwrap_err();
    assert!(matches!(err, ManifestError::Address { ref key, .. } if key == "broken.example"));
    assert!(err.to_string().starts_with("host 'broken.example': malformed address"));
}
