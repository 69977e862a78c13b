mod tests {
    use myrtio_light_sync::membership::MembershipSnapshot;
    use myrtio_light_sync::{Duration, RenderContext, cylon_signal, frame_number, odometer_signal};
    use proptest::prelude::*;

    #[test]
    fn test_odometer_signal() {
        let values: Vec<usize> = (0..8).map(|c| odometer_signal(c, 1, 3)).collect();
        assert_eq!(values, [0, 1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_odometer_signal_prescaler() {
        let values: Vec<usize> = (0..8).map(|c| odometer_signal(c, 2, 3)).collect();
        assert_eq!(values, [0, 0, 1, 1, 2, 2, 0, 0]);
    }

    #[test]
    fn test_odometer_signal_degenerate() {
        assert_eq!(odometer_signal(7, 0, 3), 1);
        assert_eq!(odometer_signal(7, 1, 0), 0);
    }

    #[test]
    fn test_cylon_signal() {
        let values: Vec<usize> = (0..10).map(|c| cylon_signal(c, 1, 4)).collect();
        assert_eq!(values, [0, 1, 2, 3, 2, 1, 0, 1, 2, 3]);
    }

    #[test]
    fn test_cylon_signal_degenerate_ranges() {
        for counter in 0..10 {
            assert_eq!(cylon_signal(counter, 1, 1), 0);
            assert_eq!(cylon_signal(counter, 1, 0), 0);
        }
        let values: Vec<usize> = (0..4).map(|c| cylon_signal(c, 1, 2)).collect();
        assert_eq!(values, [0, 1, 0, 1]);
    }

    #[test]
    fn test_frame_number() {
        let snapshot = MembershipSnapshot::<4>::solo(1);
        // 1.5 s into epoch 2
        let ctx = RenderContext::compute(13_500_000, &snapshot, 10, Duration::from_millis(6_000));
        assert_eq!(frame_number(&ctx, 250), 6);
        assert_eq!(frame_number(&ctx, 20), 75);
        assert_eq!(frame_number(&ctx, 0), 1_500);
    }

    proptest! {
        #[test]
        fn odometer_is_periodic(counter in 0u64..1_000_000, range in 1usize..256) {
            let range_u64 = range as u64;
            prop_assert_eq!(
                odometer_signal(counter, 1, range),
                odometer_signal(counter + range_u64, 1, range)
            );
        }

        #[test]
        fn odometer_covers_range_once_per_period(start in 0u64..1_000_000, range in 1usize..128) {
            let mut seen = vec![0usize; range];
            for counter in start..start + range as u64 {
                seen[odometer_signal(counter, 1, range)] += 1;
            }
            prop_assert!(seen.iter().all(|count| *count == 1));
        }

        #[test]
        fn cylon_is_symmetric_and_bounded(range in 2usize..128, seed in 0u64..1_000) {
            let period = 2 * range as u64 - 2;
            let counter = seed % period;
            let value = cylon_signal(counter, 1, range);
            prop_assert!(value < range);
            prop_assert_eq!(value, cylon_signal(period - counter, 1, range));
        }

        #[test]
        fn cylon_moves_one_step_at_a_time(range in 2usize..64, counter in 0u64..10_000) {
            let a = cylon_signal(counter, 1, range);
            let b = cylon_signal(counter + 1, 1, range);
            prop_assert_eq!(a.abs_diff(b), 1);
        }
    }
}
