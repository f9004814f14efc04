//! Behaviour-driven tests for naming configuration loading.

use std::cell::RefCell;
use std::error::Error;

use nomenclator::{ConfigFile, NamingSettings};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn config_source() -> RefCell<Option<String>> {
    RefCell::new(None)
}

#[fixture]
fn load_result() -> RefCell<Option<Result<NamingSettings, String>>> {
    RefCell::new(None)
}

fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn loaded(load_result: &RefCell<Option<Result<NamingSettings, String>>>) -> NamingSettings {
    match load_result.borrow().as_ref() {
        Some(Ok(settings)) => settings.clone(),
        Some(Err(error)) => panic!("expected configuration loading to succeed: {error}"),
        None => panic!("configuration should be loaded"),
    }
}

#[given("no naming configuration is provided")]
fn no_configuration(config_source: &RefCell<Option<String>>) {
    config_source.borrow_mut().take();
}

#[given("the configuration sets the blueprint prefix to {prefix}")]
fn override_blueprint_prefix(config_source: &RefCell<Option<String>>, prefix: String) {
    config_source.borrow_mut().replace(format!(
        concat!(
            "[naming]\n",
            "blueprint_prefix = \"{}\"\n",
            "rules = [{{ class = \"/Script/Engine.Material\", prefix = \"M_\" }}]\n",
        ),
        prefix
    ));
}

#[given("the configuration sets warn_on_unknown to an invalid value")]
fn invalid_value(config_source: &RefCell<Option<String>>) {
    config_source
        .borrow_mut()
        .replace(String::from("[naming]\nwarn_on_unknown = \"sometimes\"\n"));
}

#[given("the configuration includes unknown naming fields")]
fn unknown_fields(config_source: &RefCell<Option<String>>) {
    config_source
        .borrow_mut()
        .replace(String::from("[naming]\nunexpected = true\n"));
}

#[given("the configuration is not valid TOML")]
fn malformed(config_source: &RefCell<Option<String>>) {
    config_source
        .borrow_mut()
        .replace(String::from("[naming\nblueprint_prefix = "));
}

#[when("the naming configuration is loaded")]
fn load_config(
    config_source: &RefCell<Option<String>>,
    load_result: &RefCell<Option<Result<NamingSettings, String>>>,
) {
    let maybe_source = config_source.borrow().clone();
    let outcome = maybe_source.map_or_else(
        || Ok(NamingSettings::load_with(NamingSettings::SECTION, |_| NamingSettings::default())),
        |source| {
            ConfigFile::parse(&source)
                .and_then(|file| file.section::<NamingSettings>(NamingSettings::SECTION))
                .map_err(|error| error_chain(&error))
        },
    );

    load_result.borrow_mut().replace(outcome);
}

#[then("the blueprint prefix is {expected}")]
fn assert_blueprint_prefix(
    load_result: &RefCell<Option<Result<NamingSettings, String>>>,
    expected: String,
) {
    assert_eq!(loaded(load_result).blueprint_prefix, expected);
}

#[then("the built-in rules are used")]
fn assert_default_rules(load_result: &RefCell<Option<Result<NamingSettings, String>>>) {
    let settings = loaded(load_result);

    assert!(settings.rules.is_none());
    assert_eq!(
        settings.rule_settings().len(),
        nomenclator::defaults::default_rules().len()
    );
}

#[then("{count} naming rule is configured")]
fn assert_rule_count(
    load_result: &RefCell<Option<Result<NamingSettings, String>>>,
    count: usize,
) {
    assert_eq!(loaded(load_result).rule_settings().len(), count);
}

#[then("a configuration error mentioning {snippet} is reported")]
fn assert_error_with_snippet(
    load_result: &RefCell<Option<Result<NamingSettings, String>>>,
    snippet: String,
) {
    match load_result.borrow().as_ref() {
        Some(Err(error)) => assert!(
            error.contains(snippet.as_str()),
            "expected error '{error}' to mention '{snippet}'",
        ),
        Some(Ok(settings)) => {
            panic!("expected configuration loading to fail but succeeded with {settings:?}")
        }
        None => panic!("configuration should be loaded"),
    }
}

#[scenario("tests/features/config_loading.feature", index = 0)]
fn scenario_defaults(
    config_source: RefCell<Option<String>>,
    load_result: RefCell<Option<Result<NamingSettings, String>>>,
) {
    let _ = (config_source, load_result);
}

#[scenario("tests/features/config_loading.feature", index = 1)]
fn scenario_override(
    config_source: RefCell<Option<String>>,
    load_result: RefCell<Option<Result<NamingSettings, String>>>,
) {
    let _ = (config_source, load_result);
}

#[scenario("tests/features/config_loading.feature", index = 2)]
fn scenario_wrong_type(
    config_source: RefCell<Option<String>>,
    load_result: RefCell<Option<Result<NamingSettings, String>>>,
) {
    let _ = (config_source, load_result);
}

#[scenario("tests/features/config_loading.feature", index = 3)]
fn scenario_unknown_fields(
    config_source: RefCell<Option<String>>,
    load_result: RefCell<Option<Result<NamingSettings, String>>>,
) {
    let _ = (config_source, load_result);
}

#[scenario("tests/features/config_loading.feature", index = 4)]
fn scenario_malformed(
    config_source: RefCell<Option<String>>,
    load_result: RefCell<Option<Result<NamingSettings, String>>>,
) {
    let _ = (config_source, load_result);
}
