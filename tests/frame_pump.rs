mod tests {
    use std::cell::Cell;

    use myrtio_light_sync::color::BLACK;
    use myrtio_light_sync::membership::StaticMembership;
    use myrtio_light_sync::{
        AnimationId, Duration, FramePump, Instant, OutputDriver, Rgb, SharedMembership,
        SyncConfig, color_for,
    };

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    const BLINK_ONLY: &[AnimationId] = &[AnimationId::SequencedBlink];

    #[test]
    fn test_tick_commits_rendered_frame() {
        let now = Cell::new(1_000_000u64);
        let config = SyncConfig::new(8).with_animations(BLINK_ONLY);
        let membership = StaticMembership {
            self_id: 7,
            members: &[3, 9],
        };
        let mut pump = FramePump::<_, _, _, 16, 4>::new(
            &config,
            || now.get(),
            membership,
            RecordingDriver::default(),
        );

        let result = pump.tick(Instant::from_millis(0));
        assert_eq!(result.context.epoch(), 0);
        assert_eq!(result.context.rank(), Some(1));
        assert_eq!(result.context.group_size(), 3);
        assert_eq!(pump.frame().len(), 8);
        assert_eq!(pump.frame(), &[color_for(0, 0); 8]);
        assert_eq!(pump.output().frames.len(), 1);
        assert_eq!(pump.output().frames[0], pump.frame());

        // Next turn belongs to the node with rank 2
        now.set(1_250_000);
        pump.tick(Instant::from_millis(16));
        assert_eq!(pump.frame(), &[BLACK; 8]);
        assert_eq!(pump.output().frames.len(), 2);
    }

    #[test]
    fn test_led_count_is_capped() {
        let config = SyncConfig::new(100);
        let mut pump = FramePump::<_, _, _, 10, 4>::new(
            &config,
            || 0u64,
            StaticMembership {
                self_id: 1,
                members: &[],
            },
            RecordingDriver::default(),
        );
        let ctx = pump.render();
        assert_eq!(ctx.led_count(), 10);
        assert_eq!(pump.frame().len(), 10);
        // Rendering alone does not commit
        assert!(pump.output().frames.is_empty());
    }

    #[test]
    fn test_frame_pacing() {
        let config = SyncConfig::new(4).with_frame_duration(Duration::from_millis(20));
        let mut pump = FramePump::<_, _, _, 4, 4>::new(
            &config,
            || 0u64,
            StaticMembership {
                self_id: 1,
                members: &[],
            },
            RecordingDriver::default(),
        );

        let result = pump.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        // Slightly late: keeps the cadence
        let result = pump.tick(Instant::from_millis(25));
        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));

        // Far behind: skips the backlog
        let result = pump.tick(Instant::from_millis(500));
        assert_eq!(result.next_deadline, Instant::from_millis(520));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_nodes_coordinate_without_messages() {
        let now = Cell::new(0u64);
        let config = SyncConfig::new(4).with_animations(BLINK_ONLY);
        let ids = [3u32, 7, 9];
        let memberships: Vec<SharedMembership<8>> =
            ids.iter().map(|id| SharedMembership::new(*id)).collect();
        for membership in &memberships {
            // Each node hears about the others, never about itself
            membership
                .update(ids.iter().copied().filter(|id| *id != membership_id(membership)))
                .unwrap();
        }

        let mut pumps: Vec<_> = memberships
            .iter()
            .map(|membership| {
                FramePump::<_, _, _, 4, 8>::new(
                    &config,
                    || now.get(),
                    membership,
                    RecordingDriver::default(),
                )
            })
            .collect();

        for frame in 0..12u64 {
            now.set(frame * 250_000 + 1_000);
            let lit: Vec<usize> = pumps
                .iter_mut()
                .filter_map(|pump| {
                    let result = pump.tick(Instant::from_millis(frame * 16));
                    (pump.frame()[0] != BLACK).then_some(result.context.rank().unwrap())
                })
                .collect();
            assert_eq!(lit, [(frame % 3) as usize]);
        }
    }

    fn membership_id(membership: &SharedMembership<8>) -> u32 {
        use myrtio_light_sync::MembershipProvider;
        membership.self_id()
    }
}
