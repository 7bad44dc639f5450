mod tests {
    use air_sculpture_light::color::{average_light, hsv2rgb};
    use air_sculpture_light::{
        AnimationTimings, BrightnessSequence, Duration, Hsv, Instant, PlayMode, PlaybackPhase,
        StripEngine,
    };

    const HUE: u8 = 140;
    const LEDS: usize = 55;
    const FADE_OUT: PlayMode = PlayMode::Playback(PlaybackPhase::FadeOut);
    const INTERPOLATING: PlayMode = PlayMode::Playback(PlaybackPhase::Interpolating);
    const FADE_TO_IDLE: PlayMode = PlayMode::Playback(PlaybackPhase::FadeToIdle);

    /// Drives an engine with 10 ms frames
    struct Harness {
        engine: StripEngine,
        t_ms: u64,
    }

    impl Harness {
        fn new(readings: &[u8]) -> Self {
            let sequence = BrightnessSequence::from_slice(readings).unwrap();
            Self {
                engine: StripEngine::new(
                    sequence,
                    LEDS,
                    AnimationTimings::DEFAULT,
                    255,
                    Instant::from_millis(0),
                ),
                t_ms: 0,
            }
        }

        fn step(&mut self) {
            self.t_ms += 10;
            self.engine.step(Instant::from_millis(self.t_ms), HUE);
        }

        fn steps(&mut self, count: usize) {
            for _ in 0..count {
                self.step();
            }
        }

        /// Step while the engine stays in `mode`, returns the frame count
        fn step_while(&mut self, mode: PlayMode) -> usize {
            let mut frames = 0;
            while self.engine.mode() == mode {
                self.step();
                frames += 1;
                assert!(frames < 10_000, "stuck in {mode:?}");
            }
            frames
        }

        fn is_dark(&self) -> bool {
            let pixels = self.engine.pixels();
            average_light(pixels[0]) == 0 && average_light(pixels[LEDS - 1]) == 0
        }

        fn is_uniform(&self, value: u8) -> bool {
            let color = hsv2rgb(Hsv {
                hue: HUE,
                sat: 255,
                val: value,
            });
            self.engine.pixels().iter().all(|led| *led == color)
        }
    }

    #[test]
    fn test_idle_breathes_uniformly() {
        let mut strip = Harness::new(&[100]);
        strip.steps(40);
        assert_eq!(strip.engine.mode(), PlayMode::Idle);
        assert_eq!(strip.engine.brightness(), 40);
        assert!(strip.is_uniform(40));
        assert_eq!(strip.engine.pixels().len(), LEDS);
    }

    #[test]
    fn test_idle_full_cycle() {
        let mut strip = Harness::new(&[100]);
        strip.steps(77);
        let start = strip.engine.brightness();
        strip.steps(2 * 255);
        assert_eq!(strip.engine.brightness(), start);
        assert!(!strip.engine.is_max_brightness());
    }

    #[test]
    fn test_activation_mid_fade_reaches_black() {
        let mut strip = Harness::new(&[100, 40]);
        strip.steps(130);
        assert_eq!(strip.engine.brightness(), 130);
        assert!(!strip.engine.is_max_brightness());
        assert!(!strip.is_dark());

        strip.engine.activate();
        assert_eq!(strip.engine.mode(), FADE_OUT);
        assert_eq!(strip.engine.fade_delay(), Duration::from_millis(125));
        assert!(strip.engine.take_mode_changed());
        assert!(!strip.engine.take_mode_changed());

        let frames = strip.step_while(FADE_OUT);
        assert!(frames > 1);
        assert_eq!(strip.engine.mode(), INTERPOLATING);
        assert!(strip.is_dark());
        assert_eq!(strip.engine.cursor(), 0);
        assert_eq!(strip.engine.previous_target(), 0);
        assert_eq!(strip.engine.current_target(), 0);
        assert_eq!(strip.engine.value(), 0);
    }

    #[test]
    fn test_activation_at_peak_clears_max_flag() {
        let mut strip = Harness::new(&[100]);
        strip.steps(300);
        assert!(strip.engine.is_max_brightness());

        strip.engine.activate();
        assert!(!strip.engine.is_max_brightness());
        strip.step_while(FADE_OUT);
        assert_eq!(strip.engine.mode(), INTERPOLATING);
    }

    #[test]
    fn test_interpolation_follows_readings() {
        let mut strip = Harness::new(&[100, 40]);
        strip.engine.activate();
        strip.step_while(FADE_OUT);

        // Rising toward the first reading in steps of 10
        strip.step();
        assert_eq!(strip.engine.value(), 10);
        assert_eq!(strip.engine.current_target(), 100);
        strip.steps(9);
        assert_eq!(strip.engine.value(), 100);
        strip.steps(20);
        assert_eq!(strip.engine.value(), 100);
        assert!(strip.is_uniform(100));
        assert_eq!(strip.engine.cursor(), 0);

        // The dwell window of 1 s ends on the 100th frame
        strip.steps(70);
        assert_eq!(strip.engine.cursor(), 1);
        assert_eq!(strip.engine.previous_target(), 100);

        // Falling toward the second reading
        strip.step();
        assert_eq!(strip.engine.value(), 90);
        strip.steps(10);
        assert_eq!(strip.engine.value(), 40);
        assert!(strip.is_uniform(40));
    }

    #[test]
    fn test_interpolation_never_overshoots() {
        let mut strip = Harness::new(&[255, 3]);
        strip.engine.activate();
        strip.step_while(FADE_OUT);

        strip.steps(30);
        assert_eq!(strip.engine.value(), 255);
        strip.steps(70);
        assert_eq!(strip.engine.cursor(), 1);
        strip.steps(30);
        assert_eq!(strip.engine.value(), 3);
    }

    #[test]
    fn test_equal_readings_hold_value() {
        let mut strip = Harness::new(&[60, 60]);
        strip.engine.activate();
        strip.step_while(FADE_OUT);
        strip.steps(100);
        assert_eq!(strip.engine.value(), 60);
        assert_eq!(strip.engine.cursor(), 1);
        // Equal to the previous reading: neither brighten nor dim
        strip.steps(20);
        assert_eq!(strip.engine.value(), 60);
    }

    #[test]
    fn test_last_reading_moves_to_fade_to_idle() {
        let mut strip = Harness::new(&[200]);
        strip.engine.activate();
        strip.step_while(FADE_OUT);

        strip.step_while(INTERPOLATING);
        assert_eq!(strip.engine.mode(), FADE_TO_IDLE);
        assert_eq!(strip.engine.cursor(), 1);
        assert_eq!(strip.engine.previous_target(), 200);

        while strip.engine.mode() == FADE_TO_IDLE {
            strip.step();
            assert_ne!(strip.engine.mode(), INTERPOLATING);
        }
        assert_eq!(strip.engine.mode(), PlayMode::Idle);
    }

    #[test]
    fn test_return_to_idle_resets_state() {
        let mut strip = Harness::new(&[120, 30]);
        strip.steps(50);
        strip.engine.activate();
        assert!(strip.engine.take_mode_changed());

        strip.step_while(FADE_OUT);
        strip.step_while(INTERPOLATING);
        let frames = strip.step_while(FADE_TO_IDLE);
        assert!(frames > 1);

        assert_eq!(strip.engine.mode(), PlayMode::Idle);
        assert!(strip.engine.take_mode_changed());
        assert_eq!(strip.engine.fade_delay(), Duration::from_millis(500));
        assert_eq!(strip.engine.max_brightness(), 255);
        assert!(!strip.engine.is_max_brightness());
        assert_eq!(strip.engine.brightness(), 0);

        // Breathing starts over from black
        strip.step();
        assert_eq!(strip.engine.brightness(), 1);
        assert!(strip.is_uniform(1));
    }

    #[test]
    fn test_activation_during_playback_restarts() {
        let mut strip = Harness::new(&[180, 90, 20]);
        strip.engine.activate();
        strip.step_while(FADE_OUT);
        strip.steps(150);
        assert_eq!(strip.engine.cursor(), 1);

        strip.engine.activate();
        assert_eq!(strip.engine.mode(), FADE_OUT);
        strip.step_while(FADE_OUT);
        assert!(strip.is_dark());
        assert_eq!(strip.engine.cursor(), 0);
        assert_eq!(strip.engine.previous_target(), 0);
    }

    #[test]
    fn test_empty_sequence_goes_back_to_idle() {
        let mut strip = Harness::new(&[]);
        strip.engine.activate();
        strip.step_while(FADE_OUT);
        strip.step();
        assert_eq!(strip.engine.mode(), FADE_TO_IDLE);
        strip.step_while(FADE_TO_IDLE);
        assert_eq!(strip.engine.mode(), PlayMode::Idle);
    }
}
