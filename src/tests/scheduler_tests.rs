#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::config::Rules;
    use crate::scheduler::{IntervalTimer, Scheduler, TimerId};
    use std::time::Duration;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn test_disarmed_timer_never_fires() {
        let mut timer = IntervalTimer::new(MS_100);

        assert!(!timer.is_armed());
        assert!(!timer.advance(Duration::from_secs(10)));
    }

    #[test]
    fn test_timer_fires_and_restarts() {
        let mut timer = IntervalTimer::new(MS_100);
        timer.arm();

        assert!(!timer.advance(Duration::from_millis(60)));
        assert!(timer.advance(Duration::from_millis(60)));
        assert!(timer.is_armed(), "Timer keeps running after firing");
        assert!(!timer.advance(Duration::from_millis(60)));
        assert!(timer.advance(Duration::from_millis(60)));
    }

    #[test]
    fn test_fires_once_per_advance() {
        let mut timer = IntervalTimer::new(MS_100);
        timer.arm();

        assert!(timer.advance(Duration::from_secs(1)));
        assert!(!timer.advance(Duration::ZERO));
    }

    #[test]
    fn test_arm_keeps_countdown_rearm_restarts() {
        let mut timer = IntervalTimer::new(MS_100);
        timer.arm();
        timer.advance(Duration::from_millis(80));

        timer.arm();
        assert!(timer.advance(Duration::from_millis(30)), "arm must not restart");

        timer.advance(Duration::from_millis(80));
        timer.rearm();
        assert!(!timer.advance(Duration::from_millis(30)), "rearm must restart");
    }

    #[test]
    fn test_cancel() {
        let mut timer = IntervalTimer::new(MS_100);
        timer.arm();
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.advance(Duration::from_secs(1)));
    }

    #[test]
    fn test_set_interval_keeps_countdown() {
        let mut timer = IntervalTimer::new(Duration::from_secs(1));
        timer.arm();
        timer.advance(Duration::from_millis(150));

        timer.set_interval(Duration::from_millis(200));
        assert_eq!(timer.interval(), Duration::from_millis(200));
        assert!(timer.advance(Duration::from_millis(60)));
    }

    #[test]
    fn test_scheduler_fires_in_order() {
        let mut scheduler = Scheduler::new(&Rules::default());
        for id in [
            TimerId::DownRepeat,
            TimerId::RightRepeat,
            TimerId::LeftRepeat,
            TimerId::Gravity,
        ] {
            let timer = scheduler.timer_mut(id);
            timer.set_interval(MS_100);
            timer.arm();
        }

        let fired = scheduler.advance(MS_100);

        assert_eq!(
            fired,
            vec![
                TimerId::Gravity,
                TimerId::LeftRepeat,
                TimerId::RightRepeat,
                TimerId::DownRepeat
            ]
        );
    }

    #[test]
    fn test_scheduler_restart_arms_only_gravity() {
        let rules = Rules::default();
        let mut scheduler = Scheduler::new(&rules);
        scheduler.left_repeat.arm();
        scheduler.gravity.set_interval(MS_100);

        scheduler.restart(&rules);

        assert!(scheduler.gravity.is_armed());
        assert_eq!(scheduler.gravity.interval(), rules.fall_interval(1));
        assert!(!scheduler.left_repeat.is_armed());
        assert!(!scheduler.right_repeat.is_armed());
        assert!(!scheduler.down_repeat.is_armed());
    }

    #[test]
    fn test_cancel_all() {
        let mut scheduler = Scheduler::default();
        scheduler.gravity.arm();
        scheduler.down_repeat.arm();

        scheduler.cancel_all();

        assert!(scheduler.advance(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_repeat_interval_from_rules() {
        let scheduler = Scheduler::new(&Rules::default());

        assert_eq!(
            scheduler.left_repeat.interval(),
            Duration::from_secs_f32(0.18)
        );
    }
}
