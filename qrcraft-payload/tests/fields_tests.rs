use qrcraft_payload::{ContentType, FieldSet, WifiSecurity};

// ── default_for ──────────────────────────────────────────────────

#[test]
fn default_for_url_is_empty_link() {
    assert_eq!(
        FieldSet::default_for(ContentType::Url),
        FieldSet::Link { link: String::new() }
    );
}

#[test]
fn default_for_pdf_presets_example_link() {
    assert_eq!(
        FieldSet::default_for(ContentType::Pdf),
        FieldSet::Link {
            link: "https://example.com/file.pdf".to_string()
        }
    );
}

#[test]
fn default_for_app_presets_store_link() {
    assert_eq!(
        FieldSet::default_for(ContentType::App),
        FieldSet::Link {
            link: "https://apps.apple.com/app-id".to_string()
        }
    );
}

#[test]
fn default_for_wifi_is_blank_wpa() {
    match FieldSet::default_for(ContentType::Wifi) {
        FieldSet::Wifi {
            ssid,
            password,
            security,
        } => {
            assert!(ssid.is_empty());
            assert!(password.is_empty());
            assert_eq!(security, WifiSecurity::Wpa);
        }
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn default_for_matches_its_type() {
    for &ty in ContentType::ALL {
        assert!(FieldSet::default_for(ty).matches(ty), "mismatch for {ty}");
    }
}

// ── matches ──────────────────────────────────────────────────────

#[test]
fn link_matches_all_link_types() {
    let fields = FieldSet::Link { link: String::new() };
    assert!(fields.matches(ContentType::Url));
    assert!(fields.matches(ContentType::Pdf));
    assert!(fields.matches(ContentType::App));
    assert!(fields.matches(ContentType::Multi));
    assert!(!fields.matches(ContentType::Text));
    assert!(!fields.matches(ContentType::Email));
}

#[test]
fn wifi_does_not_match_contact() {
    let fields = FieldSet::default_for(ContentType::Wifi);
    assert!(!fields.matches(ContentType::Contact));
}

// ── serde ────────────────────────────────────────────────────────

#[test]
fn field_set_serde_roundtrip() {
    let fields = FieldSet::Email {
        to: "a@b.com".to_string(),
        subject: "Hi".to_string(),
        body: "Hello".to_string(),
    };
    let json = serde_json::to_string(&fields).unwrap();
    let parsed: FieldSet = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, fields);
}

#[test]
fn field_set_deserialize_missing_fields_default_empty() {
    // every field carries #[serde(default)]
    let parsed: FieldSet = serde_json::from_str(r#"{"kind":"contact"}"#).unwrap();
    assert_eq!(
        parsed,
        FieldSet::Contact {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            organization: String::new(),
        }
    );
}

#[test]
fn field_set_deserialize_wifi_defaults_wpa() {
    let parsed: FieldSet = serde_json::from_str(r#"{"kind":"wifi","ssid":"Net"}"#).unwrap();
    match parsed {
        FieldSet::Wifi { ssid, security, .. } => {
            assert_eq!(ssid, "Net");
            assert_eq!(security, WifiSecurity::Wpa);
        }
        other => panic!("wrong variant: {other:?}"),
    }
}
