// End-to-end generation through real files
use qfdmo_taxonomy::report::HEADER;
use qfdmo_taxonomy::{Generator, TaxonomyError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("qfdmo.json");
    fs::write(&path, content).unwrap();
    path
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn single_record_taxonomy() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"[{"fields": {"libelle": "Four micro-ondes", "code": "four_mo",
            "identifiant_qfdmod": 12, "sous_categorie": ["gros_electromenager_hors_refrigerant"]}}]"#,
    );
    let output = dir.path().join("qfdmo_taxonomy.txt");

    let stats = Generator::new().generate_file(&input, &output).unwrap();
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.categories, 1);

    let expected = format!(
        "{}{}{}",
        HEADER,
        "#\n\
         fr: Gros Electromenager Hors Refrigerant\n\
         code: gros_electromenager_hors_refrigerant\n\
         # Items in this category: 1\n",
        "\n# DETAILED ITEMS LIST\n#\n\
         \n## Gros Electromenager Hors Refrigerant (gros_electromenager_hors_refrigerant)\n\
         # 1 items\n\
         \n< fr: Gros Electromenager Hors Refrigerant\n\
         fr: Four micro-ondes\n\
         code: four_mo\n\
         identifiant_qfdmod: 12\n"
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn empty_category_list_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"[
            {"fields": {"libelle": "Chaise", "code": "chaise", "sous_categorie": []}},
            {"fields": {"libelle": "Table", "code": "table"}},
            {"fields": {"libelle": "Lampe", "code": "lampe", "sous_categorie": ["luminaires"]}}
        ]"#,
    );
    let output = dir.path().join("out.txt");

    let stats = Generator::new().generate_file(&input, &output).unwrap();
    assert_eq!(stats.entries, 3);
    assert_eq!(stats.categories, 1);

    let report = fs::read_to_string(&output).unwrap();
    assert!(!report.contains("Chaise"));
    assert!(!report.contains("Table"));
    assert!(report.contains("code: luminaires\n"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"[
            {"fields": {"libelle": "Vélo", "code": "velo", "identifiant_qfdmod": "V1",
                        "sous_categorie": ["cycles", "sport_et_loisirs"]}},
            {"fields": {"libelle": "Ballon", "code": "ballon", "sous_categorie": ["sport_et_loisirs"]}},
            {"fields": {"code": "casque", "sous_categorie": ["cycles"]}}
        ]"#,
    );
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    let generator = Generator::new();
    generator.generate_file(&input, &first).unwrap();
    generator.generate_file(&input, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn missing_input_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");
    let err = Generator::new()
        .generate_file(&dir.path().join("absent.json"), &output)
        .unwrap_err();

    assert!(matches!(err, TaxonomyError::InputNotFound { .. }));
    assert!(!output.exists());
}

#[test]
fn malformed_input_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "[{\"fields\": {\"libelle\": ");
    let output = dir.path().join("out.txt");

    let err = Generator::new().generate_file(&input, &output).unwrap_err();
    assert!(matches!(err, TaxonomyError::MalformedInput { .. }));
    assert!(err.to_string().contains("Invalid JSON in"));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "[]");
    let output = dir.path().join("missing_dir").join("out.txt");

    let err = Generator::new().generate_file(&input, &output).unwrap_err();
    assert!(matches!(err, TaxonomyError::OutputWrite { .. }));
}

#[test]
fn directory_input_names_the_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("qfdmo.json");
    fs::create_dir(&input).unwrap();
    let output = dir.path().join("out.txt");

    let err = Generator::new().generate_file(&input, &output).unwrap_err();
    assert!(matches!(err, TaxonomyError::InputRead { .. }));
    assert!(err.to_string().contains("qfdmo.json"));
    assert!(!output.exists());
}

#[test]
fn non_utf8_input_names_the_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("qfdmo.json");
    fs::write(&input, b"[\xff\xfe]").unwrap();
    let output = dir.path().join("out.txt");

    let err = Generator::new().generate_file(&input, &output).unwrap_err();
    assert!(matches!(err, TaxonomyError::InputRead { .. }));
    assert!(err
        .to_string()
        .starts_with(&format!("Could not read file '{}': ", input.display())));
}
