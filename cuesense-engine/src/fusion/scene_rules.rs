//! Threshold-rule scene matchers.
//!
//! Two matchers share one rule shape: an ordered list of named rules,
//! each a conjunction of simple comparisons over energy and tempo, where
//! the first fully satisfied rule wins. The audio matcher covers broad
//! scene archetypes at confidence 80; the target matcher covers a short
//! list of signature scenes at confidence 90, the highest of the
//! deterministic sources.

use cuesense_common::model::{FeatureVector, SceneMatch, SceneSource};

#[derive(Debug, Clone, Copy)]
enum Field {
    Energy,
    Tempo,
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy)]
struct Condition {
    field: Field,
    op: Op,
    value: f64,
}

impl Condition {
    fn holds(&self, features: &FeatureVector) -> bool {
        let actual = match self.field {
            Field::Energy => features.rms_energy,
            Field::Tempo => features.tempo,
        };
        match self.op {
            Op::Above => actual > self.value,
            Op::Below => actual < self.value,
        }
    }
}

struct SceneRule {
    name: &'static str,
    scene: &'static str,
    description: &'static str,
    conditions: &'static [Condition],
}

impl SceneRule {
    fn matches(&self, features: &FeatureVector) -> bool {
        self.conditions.iter().all(|c| c.holds(features))
    }
}

const fn energy_above(value: f64) -> Condition {
    Condition {
        field: Field::Energy,
        op: Op::Above,
        value,
    }
}

const fn energy_below(value: f64) -> Condition {
    Condition {
        field: Field::Energy,
        op: Op::Below,
        value,
    }
}

const fn tempo_above(value: f64) -> Condition {
    Condition {
        field: Field::Tempo,
        op: Op::Above,
        value,
    }
}

const fn tempo_below(value: f64) -> Condition {
    Condition {
        field: Field::Tempo,
        op: Op::Below,
        value,
    }
}

/// Broad archetypes, most demanding first
const AUDIO_RULES: &[SceneRule] = &[
    SceneRule {
        name: "battle",
        scene: "战斗",
        description: "full-tilt combat",
        conditions: &[energy_above(0.75), tempo_above(140.0)],
    },
    SceneRule {
        name: "chase",
        scene: "追逐",
        description: "pursuit on foot or wheels",
        conditions: &[energy_above(0.65), tempo_above(125.0)],
    },
    SceneRule {
        name: "celebration",
        scene: "庆典",
        description: "festive public celebration",
        conditions: &[energy_above(0.55), tempo_above(110.0)],
    },
    SceneRule {
        name: "standoff",
        scene: "对峙",
        description: "slow-burning confrontation",
        conditions: &[energy_above(0.45), energy_below(0.65), tempo_below(100.0)],
    },
    SceneRule {
        name: "love",
        scene: "爱情",
        description: "intimate romantic moment",
        conditions: &[energy_above(0.3), energy_below(0.5), tempo_below(95.0)],
    },
    SceneRule {
        name: "farewell",
        scene: "离别",
        description: "quiet parting of ways",
        conditions: &[energy_below(0.3), tempo_below(80.0)],
    },
];

/// Signature scenes gated by narrow feature bands
const TARGET_RULES: &[SceneRule] = &[
    SceneRule {
        name: "courtroom",
        scene: "法庭",
        description: "formal courtroom proceedings",
        conditions: &[
            energy_above(0.2),
            energy_below(0.45),
            tempo_above(60.0),
            tempo_below(90.0),
        ],
    },
    SceneRule {
        name: "interrogation",
        scene: "审讯",
        description: "pressured interrogation room",
        conditions: &[energy_below(0.35), tempo_above(85.0), tempo_below(110.0)],
    },
    SceneRule {
        name: "office",
        scene: "办公室",
        description: "workplace routine",
        conditions: &[
            energy_above(0.3),
            energy_below(0.55),
            tempo_above(95.0),
            tempo_below(120.0),
        ],
    },
    SceneRule {
        name: "stealth",
        scene: "潜行",
        description: "covert infiltration",
        conditions: &[energy_below(0.25), tempo_above(100.0), tempo_below(130.0)],
    },
    SceneRule {
        name: "funeral",
        scene: "葬礼",
        description: "funeral procession",
        conditions: &[energy_below(0.2), tempo_below(70.0)],
    },
];

fn first_match(
    rules: &[SceneRule],
    features: &FeatureVector,
    source: SceneSource,
) -> Option<SceneMatch> {
    let rule = rules.iter().find(|r| r.matches(features))?;
    Some(SceneMatch {
        scene: rule.scene.to_string(),
        confidence: source.default_confidence(),
        source,
        description: rule.description.to_string(),
        reasoning: format!(
            "rule {} satisfied at energy {:.2}, tempo {:.0}",
            rule.name, features.rms_energy, features.tempo
        ),
    })
}

/// Audio-rule matcher, confidence 80 on a hit
pub fn match_audio(features: &FeatureVector) -> Option<SceneMatch> {
    first_match(AUDIO_RULES, features, SceneSource::Audio)
}

/// Target-scene matcher, confidence 90 on a hit
pub fn match_target(features: &FeatureVector) -> Option<SceneMatch> {
    first_match(TARGET_RULES, features, SceneSource::Target)
}
