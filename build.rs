use std::collections::HashSet;
use std::path::Path;

const GENRES_PATH: &str = "catalogs/genres.json";
const BISAC_NAMES_PATH: &str = "catalogs/bisac_names.json";

const AUDIENCES: &[&str] = &[
    "Children",
    "Young Adult",
    "Adult",
    "Adults Only",
    "All Ages",
    "Research",
];

fn main() {
    let genres = read_catalog_file(Path::new(GENRES_PATH));
    validate_taxonomy_structure(&genres);

    let bisac = read_catalog_file(Path::new(BISAC_NAMES_PATH));
    validate_bisac_names(&bisac);

    set_build_dependencies();
}

fn read_catalog_file(catalog_path: &Path) -> serde_json::Value {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root of {} must be a JSON object\n",
        catalog_path.display()
    );
    assert!(
        catalog.get("version").and_then(serde_json::Value::as_str).is_some(),
        "\n\nCATALOG BUILD ERROR: {} is missing a 'version' string\n",
        catalog_path.display()
    );
    catalog
}

fn validate_taxonomy_structure(taxonomy: &serde_json::Value) {
    let mut seen = HashSet::new();
    for section in ["fiction", "nonfiction"] {
        let genres = taxonomy
            .get(section)
            .and_then(serde_json::Value::as_array)
            .unwrap_or_else(|| {
                panic!(
                    "\n\nCATALOG BUILD ERROR: Missing '{section}' array\n\
                     The taxonomy must have top-level 'fiction' and 'nonfiction' arrays.\n"
                );
            });
        for genre in genres {
            validate_genre(genre, &mut seen);
        }
    }

    println!("cargo:warning=Validated taxonomy: {} genres", seen.len());
}

fn validate_genre(genre: &serde_json::Value, seen: &mut HashSet<String>) {
    let name = match genre {
        serde_json::Value::String(name) => name.as_str(),
        serde_json::Value::Object(_) => genre
            .get("name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Genre missing 'name' field\nGot: {genre}\n");
            }),
        other => panic!("\n\nCATALOG BUILD ERROR: Genre must be a string or object\nGot: {other}\n"),
    };

    assert!(
        seen.insert(name.to_string()),
        "\n\nCATALOG BUILD ERROR: Duplicate genre '{name}'\n\
         Genre names must be unique across the whole taxonomy.\n"
    );

    if let Some(fiction) = genre.get("fiction") {
        assert!(
            fiction.is_boolean() || fiction.is_null(),
            "\n\nCATALOG BUILD ERROR: Genre '{name}' has a non-boolean 'fiction' field\n"
        );
    }

    if let Some(audiences) = genre.get("audience_restriction") {
        let audiences = audiences.as_array().unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Genre '{name}' 'audience_restriction' must be an array\n");
        });
        for audience in audiences {
            assert!(
                audience.as_str().is_some_and(|a| AUDIENCES.contains(&a)),
                "\n\nCATALOG BUILD ERROR: Genre '{name}' restricts to unknown audience {audience}\n"
            );
        }
    }

    if let Some(subgenres) = genre.get("subgenres").and_then(serde_json::Value::as_array) {
        for subgenre in subgenres {
            validate_genre(subgenre, seen);
        }
    }
}

fn validate_bisac_names(catalog: &serde_json::Value) {
    let names = catalog
        .get("names")
        .and_then(serde_json::Value::as_object)
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing 'names' object\n\
                 The BISAC table must map codes to names under 'names'.\n"
            );
        });

    for (code, name) in names {
        assert!(
            code.len() == 9 && code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            "\n\nCATALOG BUILD ERROR: Malformed BISAC code '{code}'\n"
        );
        assert!(
            name.as_str().is_some_and(|n| !n.is_empty()),
            "\n\nCATALOG BUILD ERROR: BISAC code '{code}' has no name\n"
        );
    }

    println!("cargo:warning=Validated BISAC table: {} codes", names.len());
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalogs change
    println!("cargo:rerun-if-changed={GENRES_PATH}");
    println!("cargo:rerun-if-changed={BISAC_NAMES_PATH}");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
