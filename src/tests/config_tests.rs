#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::config::{Config, Rules};
    use crate::game::{LINE_SCORES, MAX_SCORE, STARTUP_SCORE_GOAL};
    use std::time::Duration;

    fn approx(actual: Duration, expected_secs: f32) -> bool {
        (actual.as_secs_f32() - expected_secs).abs() < 0.001
    }

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();

        assert_eq!(rules.line_scores, LINE_SCORES);
        assert_eq!(rules.line_scores, [10, 25, 50, 100]);
        assert_eq!(rules.startup_score_goal, STARTUP_SCORE_GOAL);
        assert_eq!(rules.score_goal_multiplier, 2);
        assert_eq!(rules.max_score, MAX_SCORE);
    }

    #[test]
    fn test_fall_interval_per_level() {
        let rules = Rules::default();

        assert!(approx(rules.fall_interval(1), 1.0));
        assert!(approx(rules.fall_interval(2), 1.0 / 1.4));
        assert!(approx(rules.fall_interval(6), 1.0 / 3.0));
        assert!(rules.fall_interval(10) < rules.fall_interval(9));
    }

    #[test]
    fn test_intervals_are_clamped() {
        let rules = Rules {
            fall_start_delay: 0.0,
            key_delay: -1.0,
            ..Rules::default()
        };

        assert!(approx(rules.fall_interval(1), 0.01));
        assert!(approx(rules.key_repeat_interval(), 0.01));
    }

    #[test]
    fn test_huge_intervals_are_capped() {
        let rules: Rules = toml::from_str("key_delay = 1e20\nfall_start_delay = 3e38\n")
            .expect("Rules should parse");

        assert!(approx(rules.key_repeat_interval(), 3600.0));
        assert!(approx(rules.fall_interval(1), 3600.0));
        assert!(rules.fall_interval(50) <= rules.fall_interval(1));
    }

    #[test]
    fn test_nan_interval_falls_to_minimum() {
        let rules = Rules {
            key_delay: f32::NAN,
            ..Rules::default()
        };

        assert!(approx(rules.key_repeat_interval(), 0.01));
    }

    #[test]
    fn test_line_award() {
        let rules = Rules::default();

        assert_eq!(rules.line_award(0, 5), 0);
        assert_eq!(rules.line_award(1, 1), 10);
        assert_eq!(rules.line_award(2, 1), 25);
        assert_eq!(rules.line_award(3, 2), 100);
        assert_eq!(rules.line_award(4, 3), 300);
        assert_eq!(rules.line_award(6, 1), 100, "Oversized clears pay the four-line rate");
    }

    #[test]
    fn test_config_toml_layout() {
        let text = toml::to_string_pretty(&Config::default()).expect("serialize");

        assert!(text.contains("[settings]"));
        assert!(text.contains("helper_enabled = false"));
        assert!(text.contains("[rules]"));
        assert!(text.contains("max_score = 99999999"));
    }
}
