//! Built-in naming rules used when configuration does not supply any.
//!
//! The table follows the widely used recommended asset naming conventions
//! for Unreal-style projects. Every rule is a prefix rule at priority zero.

use crate::config::RuleSettings;

const DEFAULT_PREFIXES: &[(&str, &str)] = &[
    ("/Script/Engine.ActorComponent", "AC_"),
    ("/Script/Engine.AnimInstance", "ABP_"),
    ("/Script/Engine.BlueprintFunctionLibrary", "BFL_"),
    ("/Script/AIModule.BTDecorator_BlueprintBase", "BTD_"),
    ("/Script/AIModule.BTService_BlueprintBase", "BTS_"),
    ("/Script/AIModule.BTTask_BlueprintBase", "BTT_"),
    ("/Script/AIModule.BehaviorTree", "BT_"),
    ("/Script/Engine.CurveTable", "CT_"),
    ("/Script/Engine.DataTable", "DT_"),
    ("/Script/CoreUObject.Enum", "E_"),
    ("/Script/GameplayAbilities.GameplayAbility", "GA_"),
    ("/Script/GameplayAbilities.GameplayAbilityTargetActor", "GATA_"),
    ("/Script/GameplayAbilities.GameplayEffect", "GE_"),
    ("/Script/GameplayAbilities.GameplayCueNotify_Actor", "GCN_"),
    ("/Script/GameplayTasks.GameplayTask", "GT_"),
    ("/Script/Engine.Material", "M_"),
    ("/Script/PhysicsCore.PhysicalMaterial", "PM_"),
    ("/Script/Engine.PhysicsAsset", "PHYS_"),
    ("/Script/Engine.SkeletalMesh", "SK_"),
    ("/Script/StateTreeModule.StateTree", "ST_"),
    ("/Script/StateTreeModule.StateTreeConditionBlueprintBase", "STC_"),
    ("/Script/StateTreeModule.StateTreeTaskBlueprintBase", "STT_"),
    ("/Script/Engine.StaticMesh", "SM_"),
    ("/Script/CoreUObject.Struct", "F_"),
    ("/Script/UMG.Widget", "WBP_"),
    ("/Script/Engine.Texture", "T_"),
    ("/Script/Engine.AnimMontage", "AM_"),
    ("/Script/LevelSequence.LevelSequence", "LS_"),
];

/// Returns the built-in rule set.
///
/// # Examples
///
/// ```
/// use nomenclator::defaults::default_rules;
///
/// let rules = default_rules();
/// assert!(rules.iter().any(|rule| rule.class == "/Script/Engine.Material" && rule.prefix == "M_"));
/// ```
#[must_use]
pub fn default_rules() -> Vec<RuleSettings> {
    DEFAULT_PREFIXES
        .iter()
        .map(|(class, prefix)| RuleSettings::prefixed(class, prefix))
        .collect()
}
