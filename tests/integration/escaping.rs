//! Names containing regex metacharacters are matched literally.

use packages_excluder::pattern::{GenerationRequest, escape_literal, generate_node_modules_pattern};

#[test]
fn test_dotted_name_matches_only_itself() {
    let request = GenerationRequest::from_names(["lodash.merge"]).unwrap();
    let m = generate_node_modules_pattern(&request).compile().unwrap();

    assert!(m.is_excluded("node_modules/lodash.merge/index.js").unwrap());
    assert!(!m.is_excluded("node_modules/lodashXmerge/index.js").unwrap());
}

#[test]
fn test_metacharacters_in_names() {
    let names = ["a+b", "c(d)", "e[f]", "g^h$", "i|j", "k*l?", "m{1}"];
    let request = GenerationRequest::from_names(names).unwrap();
    let m = generate_node_modules_pattern(&request).compile().unwrap();

    for name in names {
        let path = format!("node_modules/{name}/index.js");
        assert!(m.is_excluded(&path).unwrap(), "{path}");
    }

    for near in ["ab", "aab", "cd", "ef", "ij", "kl", "m1", "mm"] {
        let path = format!("node_modules/{near}/index.js");
        assert!(!m.is_excluded(&path).unwrap(), "{path}");
    }
}

#[test]
fn test_escaped_names_appear_in_pattern() {
    let request = GenerationRequest::from_names(["lodash.merge"]).unwrap();
    let pattern = generate_node_modules_pattern(&request);

    assert!(pattern.as_str().contains(&escape_literal("lodash.merge")));
    assert!(pattern.as_str().contains(r"lodash\.merge"));
}

#[test]
fn test_empty_name_rejected() {
    assert!(GenerationRequest::from_names(["react", ""]).is_err());
    assert!(GenerationRequest::from_names(["   "]).is_err());
}
