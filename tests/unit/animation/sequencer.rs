use super::*;
use crate::{Archetype, DiagramGraph, Edge, LayoutConfig, Node, layout_scene, validate_timeline};

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn scene(archetype: Archetype, importances: &[Option<f64>], chain: bool) -> LayoutResult {
    let mut g = DiagramGraph::new(archetype);
    g.nodes = importances
        .iter()
        .enumerate()
        .map(|(i, imp)| Node {
            importance: *imp,
            ..Node::new(format!("n{i}"), format!("Node {i}"))
        })
        .collect();
    if chain {
        g.edges = (1..importances.len())
            .map(|i| Edge::new(format!("e{i}"), format!("n{}", i - 1), format!("n{i}")))
            .collect();
    }
    layout_scene(&g, &LayoutConfig::default()).unwrap()
}

fn flow4() -> LayoutResult {
    scene(Archetype::Flow, &[None; 4], true)
}

fn by_id<'a>(result: &'a CompositionResult, id: &str) -> &'a AnimationSequence {
    result
        .sequences
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| panic!("missing sequence {id}"))
}

#[test]
fn three_scenes_split_eighteen_seconds() {
    let scenes = vec![flow4(), flow4(), flow4()];
    let result = compose(&scenes, 18_000.0, fps30(), &TimingConfig::default()).unwrap();

    assert_eq!(result.total_frames, 540);
    assert_eq!(result.scene_count, 3);
    assert_eq!(result.node_count, 12);
    assert_eq!(result.edge_count, 9);

    let starts: Vec<(i64, i64, i64)> = result
        .scenes
        .iter()
        .map(|w| (w.start_frame, w.content_start, w.end_frame))
        .collect();
    assert_eq!(starts, [(0, 0, 180), (180, 204, 360), (360, 384, 540)]);

    let t1 = by_id(&result, "s1-transition");
    assert_eq!(t1.kind, AnimationKind::SceneTransition);
    assert_eq!(t1.target_id, "scene-1");
    assert_eq!((t1.start_frame, t1.end_frame), (180, 204));
    assert!(result.sequences.iter().all(|s| s.end_frame <= 540));
    assert!(validate_timeline(&result).valid);
}

#[test]
fn first_scene_has_no_transition() {
    let scenes = vec![flow4(), flow4()];
    let result = compose(&scenes, 10_000.0, fps30(), &TimingConfig::default()).unwrap();
    let transitions: Vec<_> = result
        .sequences
        .iter()
        .filter(|s| s.kind == AnimationKind::SceneTransition)
        .collect();
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].scene, 1);
}

#[test]
fn nodes_then_edges_are_staggered() {
    let result = compose(&[flow4()], 18_000.0, fps30(), &TimingConfig::default()).unwrap();

    // 500ms at 30fps = 15 frames per node, stagger 5.
    for (k, start) in [0, 5, 10, 15].into_iter().enumerate() {
        let s = by_id(&result, &format!("s0-appear-n{k}"));
        assert_eq!((s.start_frame, s.end_frame), (start, start + 15));
        assert_eq!(s.kind, AnimationKind::NodeAppear);
    }

    // Edge block starts after max(15, 4 * 5) = 20 frames; 400ms = 12 frames, stagger 3.
    for (k, start) in [20, 23, 26].into_iter().enumerate() {
        let s = by_id(&result, &format!("s0-edge-e{}", k + 1));
        assert_eq!((s.start_frame, s.end_frame), (start, start + 12));
        assert_eq!(s.kind, AnimationKind::EdgeAppear);
    }
}

#[test]
fn single_important_node_fills_remaining_budget() {
    let layout = scene(Archetype::Flow, &[Some(0.85)], false);
    // 55 frames total: appear block ends at 15, leaving 40 for the highlight.
    let total_ms = 55.0 * 1000.0 / 30.0;
    let result = compose(&[layout], total_ms, fps30(), &TimingConfig::default()).unwrap();
    assert_eq!(result.total_frames, 55);

    let h = by_id(&result, "s0-highlight-n0");
    assert_eq!(h.kind, AnimationKind::Highlight);
    assert_eq!((h.start_frame, h.end_frame), (15, 55));
    assert_eq!(h.duration_frames(), 40);
}

#[test]
fn highlights_only_above_threshold_and_spread() {
    let layout = scene(
        Archetype::Tree,
        &[Some(0.9), Some(0.7), None, Some(0.71), Some(0.95)],
        false,
    );
    let result = compose(&[layout], 10_000.0, fps30(), &TimingConfig::default()).unwrap();

    let highlights: Vec<_> = result
        .sequences
        .iter()
        .filter(|s| s.kind == AnimationKind::Highlight)
        .collect();
    let targets: Vec<&str> = highlights.iter().map(|s| s.target_id.as_str()).collect();
    assert_eq!(targets, ["n0", "n3", "n4"]);

    // Node block max(15, 25) = 25; 275 frames remain, capped at 60 each.
    let spans: Vec<(i64, i64)> = highlights
        .iter()
        .map(|s| (s.start_frame, s.end_frame))
        .collect();
    assert_eq!(spans, [(25, 85), (55, 115), (85, 145)]);
}

#[test]
fn last_scene_absorbs_remainder() {
    let scenes = vec![flow4(), flow4(), flow4()];
    let total_ms = 100.0 * 1000.0 / 30.0;
    let result = compose(&scenes, total_ms, fps30(), &TimingConfig::default()).unwrap();
    let ends: Vec<i64> = result.scenes.iter().map(|w| w.end_frame).collect();
    assert_eq!(ends, [33, 66, 100]);
}

#[test]
fn scenes_never_start_before_previous_end() {
    let scenes: Vec<LayoutResult> = Archetype::ALL
        .iter()
        .map(|&a| scene(a, &[Some(0.9), None, Some(0.8)], true))
        .collect();
    let result = compose(&scenes, 20_000.0, fps30(), &TimingConfig::default()).unwrap();
    for pair in result.scenes.windows(2) {
        assert!(pair[1].start_frame >= pair[0].end_frame);
    }
    for s in &result.sequences {
        assert!(0 <= s.start_frame && s.start_frame <= s.end_frame, "{}", s.id);
        let w = &result.scenes[s.scene];
        assert!(s.start_frame >= w.start_frame);
    }
}

#[test]
fn overfull_scene_is_not_clamped() {
    let layout = scene(Archetype::Timeline, &[Some(0.9); 10], true);
    let result = compose(&[layout], 1_000.0, fps30(), &TimingConfig::default()).unwrap();
    assert_eq!(result.total_frames, 30);

    let last = by_id(&result, "s0-appear-n9");
    assert_eq!((last.start_frame, last.end_frame), (45, 60));
    // No budget left, so highlights are skipped rather than squeezed.
    assert!(
        result
            .sequences
            .iter()
            .all(|s| s.kind != AnimationKind::Highlight)
    );

    let report = validate_timeline(&result);
    assert!(!report.valid);
    assert!(report.ensure_valid().is_err());
}

#[test]
fn empty_scene_only_transitions() {
    let empty = scene(Archetype::Matrix, &[], false);
    let result = compose(
        &[flow4(), empty],
        6_000.0,
        fps30(),
        &TimingConfig::default(),
    )
    .unwrap();
    let second: Vec<_> = result.sequences.iter().filter(|s| s.scene == 1).collect();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].kind, AnimationKind::SceneTransition);
}

#[test]
fn compose_is_deterministic() {
    let scenes = vec![
        scene(Archetype::Cycle, &[Some(0.8), None, None, Some(0.75)], true),
        flow4(),
    ];
    let timing = TimingConfig::default();
    let a = compose(&scenes, 12_000.0, fps30(), &timing).unwrap();
    let b = compose(&scenes, 12_000.0, fps30(), &timing).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rejects_bad_inputs() {
    let timing = TimingConfig::default();
    assert!(compose(&[], 1_000.0, fps30(), &timing).is_err());
    assert!(compose(&[flow4()], -1.0, fps30(), &timing).is_err());
    assert!(compose(&[flow4()], f64::NAN, fps30(), &timing).is_err());
    assert!(compose(&[flow4()], 1_000.0, Fps { num: 30, den: 0 }, &timing).is_err());

    let bad = TimingConfig {
        highlight_threshold: 1.5,
        ..TimingConfig::default()
    };
    assert!(compose(&[flow4()], 1_000.0, fps30(), &bad).is_err());
}

#[test]
fn rejects_frame_counts_past_cap() {
    let huge_transition = TimingConfig {
        transition_ms: 1e300,
        ..TimingConfig::default()
    };
    assert!(huge_transition.validate().is_ok());
    let err = compose(&[flow4(), flow4()], 1_000.0, fps30(), &huge_transition).unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)));

    let huge_stagger = TimingConfig {
        node_stagger_frames: i64::MAX / 2,
        ..TimingConfig::default()
    };
    assert!(huge_stagger.validate().is_err());
    assert!(compose(&[flow4()], 1_000.0, fps30(), &huge_stagger).is_err());

    assert!(compose(&[flow4()], 1e300, fps30(), &TimingConfig::default()).is_err());
}

#[test]
fn stagger_at_cap_schedules_without_overflow() {
    let timing = TimingConfig {
        node_stagger_frames: MAX_FRAMES,
        edge_stagger_frames: MAX_FRAMES,
        highlight_spread_frames: MAX_FRAMES,
        ..TimingConfig::default()
    };
    let layout = scene(Archetype::Flow, &[Some(0.9); 4], true);
    let result = compose(&[layout], 1_000.0, fps30(), &timing).unwrap();

    let last = by_id(&result, "s0-appear-n3");
    assert_eq!(last.start_frame, 3 * MAX_FRAMES);
    assert!(result.sequences.iter().all(|s| s.start_frame <= s.end_frame));
    assert!(!validate_timeline(&result).valid);
}

#[test]
fn properties_follow_kind_and_ease() {
    let timing = TimingConfig {
        ease: crate::Ease::Linear,
        ..TimingConfig::default()
    };
    let result = compose(&[flow4(), flow4()], 10_000.0, fps30(), &timing).unwrap();

    let appear = by_id(&result, "s0-appear-n0");
    assert_eq!(appear.properties["opacity"].from, 0.0);
    assert_eq!(appear.properties["opacity"].to, 1.0);
    assert_eq!(appear.properties["scale"].ease, crate::Ease::Linear);

    let sampled = appear.sample(appear.start_frame + 5);
    assert!((sampled["opacity"] - 5.0 / 15.0).abs() < 1e-12);

    let fade = by_id(&result, "s1-transition");
    assert_eq!(fade.sample(fade.end_frame)["opacity"], 0.0);
}
