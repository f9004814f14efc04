//! Tests for pattern-based name validation.

use super::*;
use common::ClassTree;
use common::test_support::{asset, sample_hierarchy};
use nomenclator::{ConfigFile, NamingPipeline, NamingSettings, RuleSettings};
use rstest::{fixture, rstest};

const TEXTURE: &str = "/Script/Engine.Texture";
const TEXTURE_2D: &str = "/Script/Engine.Texture2D";
const MATERIAL: &str = "/Script/Engine.Material";

#[fixture]
fn hierarchy() -> Arc<ClassTree> {
    Arc::new(sample_hierarchy())
}

fn pattern(class: &str, pattern: &str) -> PatternSettings {
    PatternSettings {
        class: class.to_owned(),
        pattern: pattern.to_owned(),
        description: None,
    }
}

fn validator(hierarchy: &Arc<ClassTree>, patterns: Vec<PatternSettings>) -> PatternValidator {
    let config = PatternValidatorConfig {
        patterns,
        ..PatternValidatorConfig::default()
    };
    PatternValidator::new(&config, Arc::clone(hierarchy) as Arc<dyn ClassHierarchy + Send + Sync>)
        .expect("patterns should compile")
}

#[rstest]
fn reads_its_own_configuration_table() {
    let file = ConfigFile::parse(concat!(
        "[naming]\n",
        "blueprint_prefix = \"BP_\"\n",
        "[pattern_validator]\n",
        "enabled = false\n",
        "patterns = [{ class = \"/Script/Engine.Texture\", pattern = \"^T_\" }]\n",
    ))
    .expect("configuration should parse");

    let config: PatternValidatorConfig = file
        .section(PatternValidatorConfig::SECTION)
        .expect("section should decode");

    assert!(!config.enabled);
    assert_eq!(config.patterns, [pattern(TEXTURE, "^T_")]);
}

#[rstest]
fn load_with_passes_through_the_requested_section() {
    let config = PatternValidatorConfig::load_with(PatternValidatorConfig::SECTION, |section| {
        assert_eq!(section, "pattern_validator");
        PatternValidatorConfig::default()
    });

    assert!(config.enabled);
}

#[rstest]
fn invalid_patterns_are_rejected(hierarchy: Arc<ClassTree>) {
    let config = PatternValidatorConfig {
        patterns: vec![pattern(TEXTURE, "^T_(")],
        ..PatternValidatorConfig::default()
    };

    let error = PatternValidator::new(&config, hierarchy).expect_err("pattern should not compile");

    assert!(matches!(
        error,
        PatternError::InvalidPattern { ref class, .. } if class == TEXTURE
    ));
}

#[rstest]
fn patterns_for_unknown_classes_are_dropped(hierarchy: Arc<ClassTree>) {
    let validator = validator(
        &hierarchy,
        vec![pattern("/Script/Missing.Thing", "^X_"), pattern(TEXTURE, "^T_")],
    );

    assert_eq!(validator.len(), 1);
}

#[rstest]
fn declines_classes_without_a_pattern(hierarchy: Arc<ClassTree>) {
    let validator = validator(&hierarchy, vec![pattern(TEXTURE, "^T_")]);
    let rock = asset("M_Rock", MATERIAL, "Props");

    assert!(!validator.can_validate(&ClassPath::new(MATERIAL), &rock));
}

#[rstest]
#[case::matching("T_Noise", Verdict::Valid)]
#[case::not_matching(
    "Noise",
    Verdict::Invalid("Assets of class 'Texture' must have a name matching /^T_/".to_owned())
)]
fn judges_names_against_the_pattern(
    hierarchy: Arc<ClassTree>,
    #[case] name: &str,
    #[case] expected: Verdict,
) {
    let validator = validator(&hierarchy, vec![pattern(TEXTURE, "^T_")]);
    let class = ClassPath::new(TEXTURE_2D);

    let verdict = validator
        .validate(&class, &asset(name, TEXTURE_2D, "Textures"))
        .expect("validation should not fault");

    assert_eq!(verdict, expected);
}

#[rstest]
fn the_most_specific_pattern_applies(hierarchy: Arc<ClassTree>) {
    let validator = validator(
        &hierarchy,
        vec![pattern(TEXTURE_2D, "^T2D_"), pattern(TEXTURE, "^T_")],
    );
    let class = ClassPath::new(TEXTURE_2D);

    let verdict = validator
        .validate(&class, &asset("T2D_Noise", TEXTURE_2D, "Textures"))
        .expect("validation should not fault");

    assert_eq!(verdict, Verdict::Valid);
}

#[rstest]
fn descriptions_replace_the_raw_pattern(hierarchy: Arc<ClassTree>) {
    let validator = validator(
        &hierarchy,
        vec![PatternSettings {
            description: Some("T_ followed by PascalCase".to_owned()),
            ..pattern(TEXTURE, "^T_[A-Z]")
        }],
    );
    let class = ClassPath::new(TEXTURE);

    let verdict = validator
        .validate(&class, &asset("T_noise", TEXTURE, "Textures"))
        .expect("validation should not fault");

    assert_eq!(
        verdict.reason(),
        Some("Assets of class 'Texture' must have a name matching T_ followed by PascalCase")
    );
}

#[rstest]
fn takes_precedence_over_rules_inside_the_pipeline(hierarchy: Arc<ClassTree>) {
    let settings = NamingSettings {
        rules: Some(vec![RuleSettings::prefixed(TEXTURE, "T_")]),
        ..NamingSettings::default()
    };
    let mut pipeline = NamingPipeline::new(&settings, Arc::clone(&hierarchy));
    pipeline
        .registry_mut()
        .register(validator(&hierarchy, vec![pattern(TEXTURE, "^T_[A-Z][a-z]+$")]));

    let verdict = pipeline.validate_one(&asset("T_noise", TEXTURE, "Textures"));

    assert!(matches!(verdict, Verdict::Invalid(reason) if reason.contains("matching")));
}

#[rstest]
fn disabled_configuration_keeps_the_rule_table_in_charge(hierarchy: Arc<ClassTree>) {
    let config = PatternValidatorConfig {
        enabled: false,
        patterns: vec![pattern(TEXTURE, "^NEVER$")],
    };
    let settings = NamingSettings {
        rules: Some(vec![RuleSettings::prefixed(TEXTURE, "T_")]),
        ..NamingSettings::default()
    };
    let mut pipeline = NamingPipeline::new(&settings, Arc::clone(&hierarchy));
    pipeline.registry_mut().register(
        PatternValidator::new(&config, Arc::clone(&hierarchy) as Arc<dyn ClassHierarchy + Send + Sync>)
            .expect("patterns should compile"),
    );

    assert_eq!(
        pipeline.validate_one(&asset("T_Noise", TEXTURE, "Textures")),
        Verdict::Valid
    );
}
