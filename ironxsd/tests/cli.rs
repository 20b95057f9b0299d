use std::fs;
use std::process::Command;

const SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
           targetNamespace="urn:example:inventory">
    <xs:complexType name="item">
        <xs:sequence>
            <xs:element name="unit" type="xs:string" fixed="kg"/>
            <xs:element name="price" type="xs:decimal" fixed="1.50"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

fn ironxsd_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ironxsd"))
}

#[test]
fn cli_list_plugins() {
    let output = ironxsd_bin()
        .arg("--list-plugins")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-Xfixed-value"));
}

#[test]
fn cli_generates_with_fixed_value() {
    let dir = tempfile::tempdir().expect("temp dir");
    let schema = dir.path().join("inventory.xsd");
    fs::write(&schema, SCHEMA).expect("write schema");

    let output = ironxsd_bin()
        .arg(&schema)
        .arg("-Xfixed-value")
        .output()
        .expect("failed to run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pub mod inventory {"));
    assert!(stdout.contains("unit: String::from(\"kg\"),"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Did not create default value for field Item.price"));
}

#[test]
fn cli_writes_output_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let schema = dir.path().join("inventory.xsd");
    let target = dir.path().join("inventory.rs");
    fs::write(&schema, SCHEMA).expect("write schema");

    let output = ironxsd_bin()
        .arg(&schema)
        .arg("-o")
        .arg(&target)
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let code = fs::read_to_string(&target).expect("read output");
    assert!(code.contains("pub struct Item {"));
    assert!(!code.contains("impl Default for Item"));
}

#[test]
fn cli_rejects_unknown_plugin() {
    let dir = tempfile::tempdir().expect("temp dir");
    let schema = dir.path().join("inventory.xsd");
    fs::write(&schema, SCHEMA).expect("write schema");

    let output = ironxsd_bin()
        .arg(&schema)
        .arg("-Xbogus")
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown plugin option 'Xbogus'"));
}
