use std::io::Write;

use pokercards_engine::cards::Card;
use pokercards_engine::errors::ConfigError;
use pokercards_engine::evaluator::{Category, HandEvaluator};
use pokercards_engine::rules::{AceRule, Rules};

fn category(rules: Rules, cards: &str) -> Category {
    HandEvaluator::new(rules)
        .evaluate_cards(&Card::parse_list(cards).unwrap())
        .unwrap()
        .category()
}

#[test]
fn default_rules_are_standard_poker() {
    let rules = Rules::default();
    assert_eq!(rules.ace, AceRule::Both);
    assert!(rules.wheel_straight());
    assert_eq!(category(rules, "AH 2D 3C 4S 5H"), Category::Straight);
    assert_eq!(category(rules, "AH KD QC JS TH"), Category::Straight);
}

#[test]
fn ace_high_disables_the_wheel() {
    let rules = Rules::new(AceRule::High);
    assert!(!rules.wheel_straight());
    assert_eq!(category(rules, "AH 2D 3C 4S 5H"), Category::HighCard);
    assert_eq!(category(rules, "AH 2H 3H 4H 5H"), Category::Flush);
    assert_eq!(category(rules, "AH KD QC JS TH"), Category::Straight);
}

#[test]
fn ace_low_counts_the_ace_as_one() {
    let rules = Rules::new(AceRule::Low);
    let evaluator = HandEvaluator::new(rules);
    assert_eq!(category(rules, "AH 2D 3C 4S 5H"), Category::Straight);
    assert_eq!(category(rules, "AH KD QC JS TH"), Category::HighCard);

    // the ace is the weakest kicker
    let with_ace = evaluator
        .evaluate_cards(&Card::parse_list("9C 9H AD 7S 4C").unwrap())
        .unwrap();
    let with_deuce = evaluator
        .evaluate_cards(&Card::parse_list("9D 9S 2C 7H 4D").unwrap())
        .unwrap();
    assert!(with_ace.ranking < with_deuce.ranking);
}

#[test]
fn parses_rules_from_toml() {
    assert_eq!(
        Rules::from_toml_str(r#"ace = "low""#).unwrap(),
        Rules::new(AceRule::Low)
    );
    assert_eq!(Rules::from_toml_str("").unwrap(), Rules::default());
    assert!(matches!(
        Rules::from_toml_str(r#"ace = "sideways""#),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Rules::from_toml_str(r#"wild = "deuces""#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn loads_rules_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "ace = \"high\"").unwrap();
    let rules = Rules::load(file.path()).unwrap();
    assert_eq!(rules.ace, AceRule::High);

    let missing = file.path().with_extension("missing");
    assert!(matches!(Rules::load(missing), Err(ConfigError::Io(_))));
}
