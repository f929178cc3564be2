// Test key validation, normalization and the key catalogue

use chordshift_wasm::{all_keys, is_valid_key, normalize_key, Key, KeyError, Mode, SpellingPreference, Tonic};

#[test]
fn test_is_valid_key() {
    assert!(is_valid_key("Bb"));
    assert!(is_valid_key("C"));
    assert!(is_valid_key("f#m"));
    assert!(is_valid_key("Ebmin"));
    assert!(!is_valid_key("H"));
    assert!(!is_valid_key(""));
    assert!(!is_valid_key("#"));
}

#[test]
fn test_normalize_key() {
    assert_eq!(normalize_key("amin"), "Am");
    assert_eq!(normalize_key("AMIN"), "Am");
    assert_eq!(normalize_key("c#m"), "C#m");
    assert_eq!(normalize_key("eb"), "Eb");
    assert_eq!(normalize_key("G"), "G");
}

#[test]
fn test_parse_key_from_str() {
    let key: Key = "bbm".parse().unwrap();
    assert_eq!(key.tonic, Tonic::Bb);
    assert_eq!(key.mode, Mode::Minor);
    assert_eq!(key.to_string(), "Bbm");
    assert_eq!(key.preference(), SpellingPreference::Flat);
}

#[test]
fn test_parse_key_errors() {
    assert_eq!("".parse::<Key>(), Err(KeyError::Empty));
    assert_eq!("H".parse::<Key>(), Err(KeyError::UnknownRoot("H".to_string())));
}

#[test]
fn test_every_listed_key_has_expected_preference() {
    let sharp = ["C", "G", "D", "A", "E", "B", "F#", "C#", "Am", "Em", "Bm", "F#m", "C#m", "G#m", "D#m", "A#m"];
    let flat = ["F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb", "Dm", "Gm", "Cm", "Fm", "Bbm", "Ebm", "Abm"];

    for name in sharp {
        assert_eq!(Key::resolve(name).unwrap().preference(), SpellingPreference::Sharp, "{}", name);
    }
    for name in flat {
        assert_eq!(Key::resolve(name).unwrap().preference(), SpellingPreference::Flat, "{}", name);
    }
}

#[test]
fn test_all_keys_catalogue() {
    let keys = all_keys();
    assert_eq!(keys.len(), 36);
    assert_eq!(&keys[..4], &["C", "C#", "Db", "D"]);
    assert!(keys.contains(&"Cb".to_string()));
    assert!(keys.contains(&"Bbm".to_string()));
    for name in &keys {
        assert_eq!(&Key::resolve(name).unwrap().name(), name);
    }
}
