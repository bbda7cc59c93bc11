use std::fs;
use tempfile::NamedTempFile;
use unitforge::core::config::ConfigLoader;
use unitforge::core::types::{ErrorCategory, Toggle};

fn write_config(yaml: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    fs::write(file.path(), yaml).expect("write config");
    file
}

#[test]
fn loads_units_and_dropins_from_file() {
    let file = write_config(
        r#"
systemd:
  units:
    - name: etcd-member.service
      enable: true
      dropins:
        - name: 20-clct-etcd-member.conf
          contents: |
            [Service]
            Environment="ETCD_IMAGE_TAG=v3.2.0"
    - name: docker.socket
      mask: true
      enabled: false
"#,
    );
    let config = ConfigLoader::load_from_file(file.path()).expect("load config");
    assert_eq!(config.systemd.units.len(), 2);

    let etcd = &config.systemd.units[0];
    assert!(etcd.enable);
    assert_eq!(etcd.enabled, Toggle::Unset);
    assert_eq!(etcd.dropins[0].name, "20-clct-etcd-member.conf");
    assert_eq!(
        etcd.dropins[0].contents,
        "[Service]\nEnvironment=\"ETCD_IMAGE_TAG=v3.2.0\"\n"
    );

    let docker = &config.systemd.units[1];
    assert!(docker.mask);
    assert_eq!(docker.enabled, Toggle::Off);
}

#[test]
fn unknown_sections_are_ignored() {
    let file = write_config("storage:\n  files: []\nsystemd:\n  units: []\n");
    let config = ConfigLoader::load_from_file(file.path()).expect("load config");
    assert!(config.systemd.units.is_empty());
}

#[test]
fn unit_without_name_is_rejected_with_path_context() {
    let file = write_config("systemd:\n  units:\n    - enable: true\n");
    let err = ConfigLoader::load_from_file(file.path()).expect_err("name is required");
    assert_eq!(err.category, ErrorCategory::SerializationError);
    assert!(err.message.contains("name"));
    assert_eq!(
        err.context.get("path").map(String::as_str),
        Some(file.path().to_str().expect("utf-8 path"))
    );
}

#[test]
fn reader_input_behaves_like_file_input() {
    let yaml = "systemd:\n  units:\n    - name: a.service\n";
    let from_reader = ConfigLoader::load_from_reader(yaml.as_bytes()).expect("load config");
    let from_str = ConfigLoader::from_yaml_str(yaml).expect("load config");
    assert_eq!(from_reader, from_str);
}
