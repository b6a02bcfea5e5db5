//! How each derived fragment changes between development and production.

use kiln_config::{
    BuildConfig, CONTENT_HASH_PLACEHOLDER, Handler, Minimizer, Mode, NAME_PLACEHOLDER,
    PluginDescriptor, module_rules,
};
use serial_test::serial;

const EXTENSIONS: [&str; 4] = ["js", "css", "map", "woff2"];

#[test]
fn development_names_are_stable() {
    for ext in EXTENSIONS {
        let template = Mode::Development.filename(ext);
        assert_eq!(template.template(), format!("[name].{ext}"));
        assert!(!template.has_hash_pattern());
    }
}

#[test]
fn production_names_embed_content_hash() {
    for ext in EXTENSIONS {
        let template = Mode::Production.filename(ext);
        let raw = template.template();
        assert!(raw.contains(NAME_PLACEHOLDER));
        assert!(raw.contains(CONTENT_HASH_PLACEHOLDER));
        assert!(raw.ends_with(&format!(".{ext}")));

        let a = template.render("vendors", b"shared code");
        let b = template.render("vendors", b"shared code");
        let c = template.render("vendors", b"shared code!");
        assert_eq!(a, b, "identical content must give identical names");
        assert_ne!(a, c, "changed content must change the name");
        assert_ne!(a, format!("vendors.{ext}"));
    }
}

#[test]
fn analyzer_present_iff_production() {
    let has_analyzer =
        |mode| BuildConfig::for_mode(mode).plugins.iter().any(PluginDescriptor::is_analyzer);
    assert!(!has_analyzer(Mode::Development));
    assert!(has_analyzer(Mode::Production));
}

#[test]
fn minimizers_only_in_production() {
    let dev = BuildConfig::for_mode(Mode::Development).optimization;
    assert!(dev.minimizer.is_none());

    let prod = BuildConfig::for_mode(Mode::Production).optimization;
    assert_eq!(
        prod.minimizer,
        Some(vec![Minimizer::Script, Minimizer::Stylesheet])
    );
}

#[test]
fn rule_tables_differ_only_in_css_live_reload() {
    let dev = module_rules(Mode::Development);
    let prod = module_rules(Mode::Production);
    assert_eq!(dev.len(), prod.len());

    let mut differing = Vec::new();
    for (index, (d, p)) in dev.rules().iter().zip(prod.rules()).enumerate() {
        assert_eq!(d.test, p.test);
        assert_eq!(d.exclude, p.exclude);
        if d.handlers != p.handlers {
            differing.push(index);
        }
    }
    assert_eq!(differing, [3], "only the stylesheet rule may differ");

    let strip_hmr = |handlers: &[Handler]| -> Vec<Handler> {
        handlers
            .iter()
            .map(|h| match h {
                Handler::CssExtract { reload_all, .. } => Handler::CssExtract {
                    hmr: false,
                    reload_all: *reload_all,
                },
                other => other.clone(),
            })
            .collect()
    };
    assert_eq!(
        strip_hmr(&dev.rules()[3].handlers),
        strip_hmr(&prod.rules()[3].handlers)
    );
}

#[test]
#[serial]
fn unset_mode_matches_explicit_production() {
    unsafe {
        std::env::remove_var("NODE_ENV");
    }
    let unset = BuildConfig::for_mode(Mode::from_env());

    unsafe {
        std::env::set_var("NODE_ENV", "production");
    }
    let explicit = BuildConfig::for_mode(Mode::from_env());
    unsafe {
        std::env::remove_var("NODE_ENV");
    }

    assert_eq!(unset, explicit);
    assert_eq!(
        serde_json::to_string(&unset).unwrap(),
        serde_json::to_string(&explicit).unwrap()
    );
}

#[test]
#[serial]
fn development_sentinel_from_environment() {
    unsafe {
        std::env::set_var("NODE_ENV", "development");
    }
    let mode = Mode::from_env();
    unsafe {
        std::env::remove_var("NODE_ENV");
    }
    assert_eq!(mode, Mode::Development);
}

#[test]
fn derivation_is_deterministic() {
    for mode in [Mode::Development, Mode::Production] {
        assert_eq!(BuildConfig::for_mode(mode), BuildConfig::for_mode(mode));
    }
}
