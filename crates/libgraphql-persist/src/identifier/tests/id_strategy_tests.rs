use crate::ConfigError;
use crate::IdStrategy;

#[test]
fn parses_every_strategy_name() {
    for strategy in IdStrategy::ALL {
        assert_eq!(strategy.as_str().parse::<IdStrategy>(), Ok(strategy));
        assert_eq!(strategy.to_string(), strategy.as_str());
    }
}

#[test]
fn parsing_ignores_case_and_surrounding_whitespace() {
    assert_eq!("MD5".parse::<IdStrategy>(), Ok(IdStrategy::Md5));
    assert_eq!(" Sha256 ".parse::<IdStrategy>(), Ok(IdStrategy::Sha256));
}

#[test]
fn unknown_strategy_is_a_config_error() {
    assert_eq!(
        "crc32".parse::<IdStrategy>(),
        Err(ConfigError::UnknownIdStrategy("crc32".to_string())),
    );
}

#[test]
fn default_is_sequential() {
    assert_eq!(IdStrategy::default(), IdStrategy::Sequential);
}

#[test]
fn only_uuid_is_nondeterministic() {
    let nondeterministic: Vec<_> = IdStrategy::ALL.into_iter()
        .filter(|strategy| !strategy.is_deterministic())
        .collect();
    assert_eq!(nondeterministic, vec![IdStrategy::Uuid]);
}
