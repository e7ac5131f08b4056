//! Listed packages across every dependency storage layout.

use packages_excluder::pattern::{
    ExclusionMatcher, GenerationRequest, Layout, PatternBuilder, generate_node_modules_pattern,
};
use packages_excluder::test_utils::{StorePaths, init_test_logging};

const HOSTS: &[&str] = &["registry.npmjs.org", "registry.artifactory.something", "npm.pkg.github.com"];

fn matcher(names: &[&str]) -> ExclusionMatcher {
    init_test_logging(None);
    let request = GenerationRequest::from_names(names.iter().copied()).unwrap();
    generate_node_modules_pattern(&request).compile().unwrap()
}

#[test]
fn test_listed_packages_excluded_in_every_layout() {
    let listed = ["react", "@myorg", "@myorg/ui", "testing-library__dom", "@babel/runtime"];
    let m = matcher(&listed);

    for name in listed {
        let paths = StorePaths::new(name);
        for host in HOSTS {
            for path in paths.all(host) {
                assert!(m.is_excluded(&path).unwrap(), "{name} should be excluded: {path}");
            }
        }
        assert!(m.is_excluded(&paths.nested_store("file+local@1.0.0")).unwrap());
    }
}

#[test]
fn test_unlisted_packages_not_excluded_in_any_layout() {
    let m = matcher(&["react", "@myorg/ui"]);

    for name in ["not-excluded-package", "vue", "@other/ui", "@myorg/button"] {
        let paths = StorePaths::new(name);
        for host in HOSTS {
            for path in paths.all(host) {
                assert!(!m.is_excluded(&path).unwrap(), "{name} should not be excluded: {path}");
            }
        }
    }
}

#[test]
fn test_name_prefixes_do_not_leak() {
    let m = matcher(&["react", "@myorg/ui"]);

    for name in ["react-dom", "reactive", "@myorg/ui-kit", "@myorg/uikit"] {
        let paths = StorePaths::new(name);
        for path in paths.all("registry.npmjs.org") {
            assert!(!m.is_excluded(&path).unwrap(), "{name} leaked through: {path}");
        }
    }
}

#[test]
fn test_encoded_scope_is_not_a_registry_host() {
    // "@types+react" must not be read as host "@types" + package "react"
    let m = matcher(&["react"]);
    assert!(!m.is_excluded("node_modules/.pnpm/@types+react@18.2.0/node_modules/@types/react/index.d.ts").unwrap());
    assert!(m.is_excluded("node_modules/.pnpm/react@18.2.0/node_modules/react/index.js").unwrap());
}

#[test]
fn test_peer_suffixed_store_entries() {
    let m = matcher(&["@myorg/ui"]);
    let path = "node_modules/.pnpm/@myorg+ui@1.2.0_react@18.2.0/node_modules/@myorg/ui/dist/index.js";
    assert!(m.is_excluded(path).unwrap());
}

#[test]
fn test_marker_recurs_inside_store_entry() {
    let path = "node_modules/.pnpm/file+shohamgilad.test-new-env_ui_button@0.0.27_react@18.2.0/node_modules/@shohamgilad/test-new-env.ui.button/dist/index.js";

    assert!(matcher(&["@shohamgilad"]).is_excluded(path).unwrap());
    assert!(!matcher(&["react"]).is_excluded(path).unwrap());
}

#[test]
fn test_marker_anywhere_in_path() {
    let m = matcher(&["react"]);
    assert!(m.is_excluded("/home/dev/project/node_modules/react/index.js").unwrap());
    assert!(!m.is_excluded("/home/dev/project/node_modules/vue/index.js").unwrap());
    assert!(!m.is_excluded("/home/dev/project/packages/app/node_modules/vue/index.js").unwrap());
}

#[test]
fn test_path_ending_at_package_directory() {
    let m = matcher(&["react"]);
    assert!(m.is_excluded("node_modules/react").unwrap());
    assert!(!m.is_excluded("node_modules/vue").unwrap());
}

#[test]
fn test_empty_request_excludes_nothing() {
    let m = matcher(&[]);
    assert!(m.matches("node_modules/anything").unwrap());
    for path in StorePaths::new("@myorg/ui").all("registry.npmjs.org") {
        assert!(m.matches(&path).unwrap(), "{path}");
    }
}

#[test]
fn test_custom_layout() {
    let builder = PatternBuilder::new(Layout::new("deps", ".store").unwrap());
    let request = GenerationRequest::from_names(["react"]).unwrap();
    let m = builder.build(&request).compile().unwrap();

    let listed = StorePaths::new("react").with_layout("deps", ".store");
    let unlisted = StorePaths::new("vue").with_layout("deps", ".store");
    for path in listed.all("registry.npmjs.org") {
        assert!(m.is_excluded(&path).unwrap(), "{path}");
    }
    for path in unlisted.all("registry.npmjs.org") {
        assert!(!m.is_excluded(&path).unwrap(), "{path}");
    }

    // The default markers mean nothing to this layout
    assert!(m.is_excluded("node_modules/vue/index.js").unwrap());
}

#[test]
fn test_generation_is_deterministic() {
    let request = GenerationRequest::from_names(["react", "@myorg", "testing-library__dom"])
        .unwrap()
        .with_exclude_components(true);

    let first = generate_node_modules_pattern(&request);
    let second = generate_node_modules_pattern(&request.clone());
    assert_eq!(first, second);

    let reordered = GenerationRequest::from_names(["@myorg", "react", "testing-library__dom"])
        .unwrap()
        .with_exclude_components(true);
    assert_ne!(first, generate_node_modules_pattern(&reordered));
}

#[test]
fn test_concurrent_generation() {
    use std::sync::Arc;
    use std::thread;

    let request = Arc::new(GenerationRequest::from_names(["react", "@myorg"]).unwrap());
    let expected = generate_node_modules_pattern(&request);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let request = Arc::clone(&request);
            thread::spawn(move || generate_node_modules_pattern(&request))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
