#[cfg(test)]
mod tests {
    use crate::core::waitlist::{
        DEFAULT_NETWORK_MESSAGE, JoinRequest, JoinResponse, SubmitState, WaitlistError, join_url,
    };
    use crate::core::{
        ADVANCE_DELAY_MS, LINE_REVEAL_INTERVAL_MS, Phase, Playback, RESTART_DELAY_MS,
        SETTLE_DELAY_MS, ScheduledEvent, Script, SequencerEvent, Step, demo_script,
    };

    fn tiny_script() -> Script {
        Script::new(vec![
            Step::new(
                "init",
                vec!["✓ ok".to_string(), "✓ done".to_string()],
                100,
                10,
            ),
            Step::new("run", vec!["→ out".to_string()], 50, 20),
        ])
    }

    /// Feed the returned schedule back into the machine until the predicate
    /// holds, with a transition cap so a broken machine can't spin forever.
    fn drive_until(
        playback: &mut Playback,
        mut next: ScheduledEvent,
        mut stop: impl FnMut(&Playback) -> bool,
    ) -> ScheduledEvent {
        for _ in 0..10_000 {
            next = playback
                .apply(next.event)
                .expect("the playback loop has no terminal state");
            if stop(playback) {
                return next;
            }
        }
        panic!("playback did not reach the expected state");
    }

    // ========================================================================
    // Script
    // ========================================================================

    #[test]
    fn test_script_drops_non_renderable_steps() {
        let script = Script::new(vec![
            Step::new("", vec!["output".to_string()], 0, 10),
            Step::new("visible", vec!["output".to_string()], 0, 10),
            Step::new("no-output", vec![], 0, 10),
        ]);

        assert_eq!(script.len(), 1);
        assert_eq!(script.get(0).unwrap().command, "visible");
    }

    #[test]
    fn test_demo_script_contents() {
        let script = demo_script();

        assert_eq!(script.len(), 3);
        assert!(script.steps().iter().all(Step::is_renderable));
        assert_eq!(script.get(0).unwrap().command, "schemerr init");
        assert_eq!(script.get(2).unwrap().command, "schemerr deploy");
        assert_eq!(script.get(2).unwrap().output.len(), 5);
        assert_eq!(script.get(0).unwrap().start_delay_ms, 1000);
        assert_eq!(script.get(0).unwrap().typing_speed_ms, 50);
    }

    // ========================================================================
    // Sequencer: phase transitions
    // ========================================================================

    #[test]
    fn test_initial_state_and_start() {
        let playback = Playback::new(tiny_script());

        assert_eq!(playback.phase(), Phase::Idle);
        assert_eq!(playback.step_index(), 0);
        assert_eq!(playback.typed_prefix(), "");
        assert!(playback.history().is_empty());
        assert!(playback.visible_output_lines().is_empty());

        let first = playback.start().unwrap();
        assert_eq!(first.delay_ms, 100);
        assert_eq!(first.event, SequencerEvent::StartDelayElapsed);
    }

    #[test]
    fn test_empty_script_never_starts() {
        let mut playback = Playback::new(Script::new(vec![]));

        assert!(playback.start().is_none());
        assert!(playback.apply(SequencerEvent::StartDelayElapsed).is_none());
        assert_eq!(playback.phase(), Phase::Idle);
    }

    #[test]
    fn test_typing_reveals_command_one_char_at_a_time() {
        let mut playback = Playback::new(tiny_script());

        let mut next = playback.apply(SequencerEvent::StartDelayElapsed).unwrap();
        assert_eq!(playback.phase(), Phase::Typing);
        assert_eq!(next, ScheduledEvent {
            delay_ms: 10,
            event: SequencerEvent::CharTick,
        });

        for expected in ["i", "in", "ini", "init"] {
            next = playback.apply(next.event).unwrap();
            assert_eq!(playback.typed_prefix(), expected);
        }

        // Command fully typed: the settle delay is scheduled next.
        assert_eq!(next.delay_ms, SETTLE_DELAY_MS);
        assert_eq!(next.event, SequencerEvent::SettleElapsed);
        assert!(playback.visible_output_lines().is_empty());
    }

    #[test]
    fn test_output_reveals_line_by_line() {
        let mut playback = Playback::new(tiny_script());
        let first = playback.start().unwrap();
        let next = drive_until(&mut playback, first, |p| {
            p.phase() == Phase::OutputRevealing
        });
        assert_eq!(next.delay_ms, LINE_REVEAL_INTERVAL_MS);

        let next = playback.apply(next.event).unwrap();
        assert_eq!(playback.visible_output_lines(), ["✓ ok".to_string()]);
        assert_eq!(next.delay_ms, LINE_REVEAL_INTERVAL_MS);

        let next = playback.apply(next.event).unwrap();
        assert_eq!(playback.visible_output_lines().len(), 2);
        assert_eq!(playback.phase(), Phase::Advancing);
        assert_eq!(next, ScheduledEvent {
            delay_ms: ADVANCE_DELAY_MS,
            event: SequencerEvent::AdvanceElapsed,
        });
    }

    #[test]
    fn test_completing_a_step_appends_one_history_entry() {
        let script = tiny_script();
        let mut playback = Playback::new(script.clone());
        let first = playback.start().unwrap();

        drive_until(&mut playback, first, |p| p.history().len() == 1);

        assert_eq!(playback.history().len(), 1);
        assert_eq!(playback.history()[0].command, script.get(0).unwrap().command);
        assert_eq!(playback.history()[0].output, script.get(0).unwrap().output);

        // The next step starts from a clean slate after its own start delay.
        assert_eq!(playback.step_index(), 1);
        assert_eq!(playback.phase(), Phase::Idle);
        assert_eq!(playback.typed_prefix(), "");
        assert!(playback.visible_output_lines().is_empty());
    }

    #[test]
    fn test_history_preserves_step_order() {
        let script = demo_script();
        let mut playback = Playback::new(script.clone());
        let first = playback.start().unwrap();

        drive_until(&mut playback, first, Playback::is_complete);

        assert_eq!(playback.history().len(), script.len());
        for (entry, step) in playback.history().iter().zip(script.steps()) {
            assert_eq!(entry.command, step.command);
            assert_eq!(entry.output, step.output);
        }
    }

    #[test]
    fn test_typed_prefix_is_monotonic_within_a_step() {
        let mut playback = Playback::new(tiny_script());
        let mut next = playback.start().unwrap();
        let mut prev_len = 0usize;
        let mut prev_step = playback.step_index();

        for _ in 0..10_000 {
            next = playback.apply(next.event).unwrap();
            let len = playback.typed_prefix().chars().count();
            if playback.step_index() == prev_step && !playback.is_complete() {
                assert!(len >= prev_len, "typed prefix shrank mid-step");
            } else {
                // Reset happens only on advancing to the next step or on
                // loop restart, and always back to empty.
                assert_eq!(len, 0);
            }
            prev_len = len;
            prev_step = playback.step_index();
            if playback.is_complete() {
                break;
            }
        }
        assert!(playback.is_complete());
    }

    #[test]
    fn test_complete_is_entered_once_per_cycle() {
        let script = tiny_script();
        let mut playback = Playback::new(script.clone());
        let mut next = playback.start().unwrap();
        let mut completions = 0;

        // Run through one full cycle plus the restart transition.
        for _ in 0..10_000 {
            let was_complete = playback.is_complete();
            next = playback.apply(next.event).unwrap();
            if playback.is_complete() && !was_complete {
                completions += 1;
                assert_eq!(playback.history().len(), script.len());
            }
            if was_complete {
                // The event after Complete is the restart.
                break;
            }
        }

        assert_eq!(completions, 1);
    }

    #[test]
    fn test_restart_resets_to_initial_mount_state() {
        let script = tiny_script();
        let mut playback = Playback::new(script.clone());
        let first = playback.start().unwrap();
        let next = drive_until(&mut playback, first, Playback::is_complete);

        assert_eq!(next, ScheduledEvent {
            delay_ms: RESTART_DELAY_MS,
            event: SequencerEvent::RestartElapsed,
        });

        let rescheduled = playback.apply(next.event).unwrap();

        // Idempotent restart: indistinguishable from a fresh mount.
        assert_eq!(playback, Playback::new(script));
        assert_eq!(rescheduled, playback.start().unwrap());
    }

    #[test]
    fn test_loop_runs_through_a_second_cycle() {
        let script = tiny_script();
        let mut playback = Playback::new(script.clone());
        let first = playback.start().unwrap();

        let mut cycles = 0;
        drive_until(&mut playback, first, |p| {
            if p.is_complete() {
                cycles += 1;
            }
            cycles == 2 && p.is_complete()
        });

        assert_eq!(playback.history().len(), script.len());
    }

    // ========================================================================
    // Sequencer: stale events (cancellation contract, pure half)
    // ========================================================================

    #[test]
    fn test_stale_events_never_mutate_state() {
        let mut playback = Playback::new(tiny_script());
        playback.apply(SequencerEvent::StartDelayElapsed).unwrap();
        playback.apply(SequencerEvent::CharTick).unwrap();
        let snapshot = playback.clone();

        // Every event that does not belong to the Typing phase is stale.
        for stale in [
            SequencerEvent::StartDelayElapsed,
            SequencerEvent::LineTick,
            SequencerEvent::AdvanceElapsed,
            SequencerEvent::RestartElapsed,
        ] {
            assert!(playback.apply(stale).is_none());
            assert_eq!(playback, snapshot);
        }
    }

    #[test]
    fn test_events_before_start_are_ignored() {
        let mut playback = Playback::new(tiny_script());
        let snapshot = playback.clone();

        for stale in [
            SequencerEvent::CharTick,
            SequencerEvent::SettleElapsed,
            SequencerEvent::LineTick,
            SequencerEvent::AdvanceElapsed,
            SequencerEvent::RestartElapsed,
        ] {
            assert!(playback.apply(stale).is_none());
            assert_eq!(playback, snapshot);
        }
    }

    #[test]
    fn test_multibyte_command_types_whole_chars() {
        let script = Script::new(vec![Step::new(
            "schemerr déploy ✓",
            vec!["✓ ok".to_string()],
            0,
            5,
        )]);
        let mut playback = Playback::new(script);
        let mut next = playback.apply(SequencerEvent::StartDelayElapsed).unwrap();

        let mut last_len = 0;
        while next.event == SequencerEvent::CharTick {
            next = playback.apply(next.event).unwrap();
            let len = playback.typed_prefix().chars().count();
            assert_eq!(len, last_len + 1);
            last_len = len;
        }

        assert_eq!(playback.typed_prefix(), "schemerr déploy ✓");
    }

    // ========================================================================
    // Waitlist submission
    // ========================================================================

    #[test]
    fn test_settle_success_clears_input() {
        let (state, clear) = SubmitState::settle(Ok("Welcome!".to_string()));

        assert_eq!(state, SubmitState::Success("Welcome!".to_string()));
        assert!(state.is_success());
        assert_eq!(state.message(), Some("Welcome!"));
        assert!(clear);
    }

    #[test]
    fn test_settle_rejection_keeps_input() {
        let (state, clear) =
            SubmitState::settle(Err(WaitlistError::Rejected("Already joined".to_string())));

        assert_eq!(state, SubmitState::Error("Already joined".to_string()));
        assert!(!state.is_success());
        assert_eq!(state.message(), Some("Already joined"));
        assert!(!clear);
    }

    #[test]
    fn test_settle_network_failure_uses_fallback_message() {
        let (state, clear) = SubmitState::settle(Err(WaitlistError::RequestFailed));

        assert_eq!(state, SubmitState::Error(DEFAULT_NETWORK_MESSAGE.to_string()));
        assert!(!clear);
    }

    #[test]
    fn test_submitting_state_blocks_resubmission() {
        let state = SubmitState::Submitting;

        assert!(state.is_submitting());
        assert!(state.message().is_none());
        assert!(!SubmitState::Idle.is_submitting());
        assert!(!SubmitState::Success("ok".to_string()).is_submitting());
    }

    #[test]
    fn test_join_request_serialization() {
        let body = serde_json::to_string(&JoinRequest {
            email: "a@b.com".to_string(),
        })
        .unwrap();

        assert_eq!(body, r#"{"email":"a@b.com"}"#);
    }

    #[test]
    fn test_join_response_tolerates_missing_message() {
        let with: JoinResponse = serde_json::from_str(r#"{"message":"Welcome!"}"#).unwrap();
        let without: JoinResponse = serde_json::from_str("{}").unwrap();

        assert_eq!(with.message.as_deref(), Some("Welcome!"));
        assert!(without.message.is_none());
    }

    #[test]
    fn test_join_url_targets_join_endpoint() {
        assert!(join_url().ends_with("/waitlist/join"));
    }
}
