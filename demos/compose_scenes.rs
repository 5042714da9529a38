use diagram_motion::{
    AnimationKind, Archetype, ComposerConfig, GraphBuilder, MotionResult, SceneInput,
    compose_diagrams,
};

fn scenes() -> MotionResult<Vec<SceneInput>> {
    let pipeline = GraphBuilder::new(Archetype::Flow)
        .node("ingest", "Ingest")
        .node_with_importance("parse", "Parse", 0.9)
        .node("layout", "Layout")
        .node("render", "Render")
        .edge("ingest", "parse")
        .edge("parse", "layout")
        .edge("layout", "render")
        .build()?;

    let org = GraphBuilder::new(Archetype::Tree)
        .node_with_importance("root", "Platform", 0.8)
        .node("api", "API")
        .node("web", "Web")
        .node("data", "Data")
        .edge("root", "api")
        .edge("root", "web")
        .edge("root", "data")
        .build()?;

    let loop_ = GraphBuilder::new(Archetype::Cycle)
        .node("plan", "Plan")
        .node("build", "Build")
        .node_with_importance("measure", "Measure", 0.75)
        .node("learn", "Learn")
        .edge("plan", "build")
        .edge("build", "measure")
        .edge("measure", "learn")
        .edge("learn", "plan")
        .build()?;

    Ok([pipeline, org, loop_]
        .into_iter()
        .map(SceneInput::from_graph)
        .collect())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ComposerConfig {
        total_duration_ms: 18_000.0,
        ..ComposerConfig::default()
    };
    let out = compose_diagrams(&scenes()?, &config)?;

    for (i, layout) in out.layouts.iter().enumerate() {
        println!(
            "scene {i}: {} nodes={} edges={} fallback={}",
            layout.archetype,
            layout.nodes.len(),
            layout.edges.len(),
            layout.used_fallback
        );
    }

    let highlights = out
        .composition
        .sequences
        .iter()
        .filter(|s| s.kind == AnimationKind::Highlight)
        .count();
    println!(
        "frames={} sequences={} highlights={} warnings={}",
        out.composition.total_frames,
        out.composition.sequences.len(),
        highlights,
        out.report.warnings.len()
    );

    let json = serde_json::to_string_pretty(&out.composition.scenes)?;
    println!("{json}");
    Ok(())
}
