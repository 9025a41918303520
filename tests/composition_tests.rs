use nested_a11y_ids::{
    compose,
    compose::composer::last_segment,
    Prefix,
};

// =========================================================================
// Concrete scenarios
// =========================================================================

#[test]
fn basic_composition_joins_with_dot() {
    assert_eq!(compose("login", "button"), "login.button", "Basic composition should join with a dot");
}

#[test]
fn empty_prefix_returns_fragment() {
    assert_eq!(compose("", "button"), "button", "Empty prefix should return just the fragment");
}

#[test]
fn empty_fragment_returns_prefix() {
    assert_eq!(compose("login", ""), "login", "Empty fragment should return just the prefix");
}

#[test]
fn duplicate_suffix_is_deduplicated() {
    assert_eq!(compose("login.button", "button"), "login.button");
}

#[test]
fn partial_duplicate_suffix_is_stripped() {
    assert_eq!(compose("login.form", "form.field"), "login.form.field");
}

#[test]
fn dots_in_fragment_are_preserved() {
    assert_eq!(compose("login", "user.name"), "login.user.name");
}

#[test]
fn deduplication_with_dotted_fragment() {
    assert_eq!(compose("login.user", "user.name"), "login.user.name");
    assert_eq!(
        compose("app.settings.account", "account.details"),
        "app.settings.account.details"
    );
}

#[test]
fn exact_match_on_deep_prefix() {
    assert_eq!(
        compose("app.settings.account.details", "details"),
        "app.settings.account.details"
    );
}

#[test]
fn multi_level_composition_from_empty() {
    let level1 = compose("", "login");
    let level2 = compose(&level1, "form");
    let level3 = compose(&level2, "username");

    assert_eq!(level1, "login", "First level should have no prefix");
    assert_eq!(level2, "login.form", "Second level should be prefixed with first");
    assert_eq!(level3, "login.form.username", "Third level should have full path");
}

#[test]
fn abc_chain() {
    let id = compose(&compose(&compose("", "a"), "b"), "c");
    assert_eq!(id, "a.b.c");
}

// =========================================================================
// Properties over a small corpus
// =========================================================================

const PREFIXES: &[&str] = &[
    "",
    "login",
    "login.form",
    "app.settings.account",
    "a.b.c.d",
    "x",
];

const FRAGMENTS: &[&str] = &["", "button", "form", "form.field", "a", "account.details", "zz.top"];

#[test]
fn empty_fragment_is_identity_for_every_prefix() {
    for p in PREFIXES {
        assert_eq!(compose(p, ""), *p, "prefix {:?}", p);
    }
}

#[test]
fn empty_prefix_is_identity_for_every_fragment() {
    for f in FRAGMENTS {
        assert_eq!(compose("", f), *f, "fragment {:?}", f);
    }
}

#[test]
fn repeating_last_segment_is_a_noop() {
    for p in PREFIXES.iter().filter(|p| !p.is_empty()) {
        assert_eq!(compose(p, last_segment(p)), *p, "prefix {:?}", p);
    }
}

#[test]
fn restated_last_segment_is_stripped() {
    for p in PREFIXES.iter().filter(|p| !p.is_empty()) {
        let fragment = format!("{}.tail.end", last_segment(p));
        assert_eq!(compose(p, &fragment), format!("{}.tail.end", p), "prefix {:?}", p);
    }
}

#[test]
fn non_overlapping_fragments_join_plainly() {
    for p in PREFIXES.iter().filter(|p| !p.is_empty()) {
        for f in FRAGMENTS.iter().filter(|f| !f.is_empty()) {
            let last = last_segment(p);
            if *f == last || f.starts_with(&format!("{}.", last)) {
                continue;
            }
            assert_eq!(compose(p, f), format!("{}.{}", p, f), "prefix {:?} fragment {:?}", p, f);
        }
    }
}

#[test]
fn reapplying_trailing_segment_is_idempotent() {
    for p in PREFIXES {
        for f in FRAGMENTS {
            let once = compose(p, f);
            let twice = compose(&once, last_segment(&once));
            assert_eq!(twice, once, "prefix {:?} fragment {:?}", p, f);
        }
    }
}

#[test]
fn composition_is_deterministic() {
    for p in PREFIXES {
        for f in FRAGMENTS {
            assert_eq!(compose(p, f), compose(p, f));
        }
    }
}

#[test]
fn well_formed_inputs_never_produce_empty_segments() {
    for p in PREFIXES {
        for f in FRAGMENTS {
            if p.is_empty() && f.is_empty() {
                continue;
            }
            let id = compose(p, f);
            assert!(
                !id.split('.').any(str::is_empty),
                "prefix {:?} fragment {:?} produced {:?}",
                p,
                f,
                id
            );
        }
    }
}

#[test]
fn earlier_segments_are_not_inspected() {
    assert_eq!(compose("login.form", "login"), "login.form.login");
    assert_eq!(compose("login.form", "login.form"), "login.form.login.form");
}

#[test]
fn dot_only_fragments_pass_through() {
    assert_eq!(compose("login", "."), "login..");
    assert_eq!(compose("", "..."), "...");
}

// =========================================================================
// Prefix value
// =========================================================================

#[test]
fn prefix_root_bypasses_composition() {
    let inherited = Prefix::empty().compose("app").compose("settings");
    let root = Prefix::root("settings");

    assert_eq!(inherited.as_str(), "app.settings");
    assert_eq!(root.as_str(), "settings", "Root ignores any ancestor prefix");
    assert_eq!(root.compose("details").to_string(), "settings.details");
}

#[test]
fn composer_is_callable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let prefix = format!("screen{}", i);
                compose(&prefix, "button")
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec!["screen0.button", "screen1.button", "screen2.button", "screen3.button"]
    );
}
