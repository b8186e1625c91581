//! Drive the frame loop without a window
//!
//! Usage: `cargo run --example headless_world [config.toml]`
//!
//! Spawns the player, lets them land, digs a hole in front of their feet,
//! fills it back in and prints what each click did.

use anyhow::Context;
use glam::{Vec2, Vec3};
use terraris_engine::{
    create_game_state, load_block_definitions, load_config, run_frame, BlockRegistry, ClickAction,
    CpuVertexBuffer, EngineConfig, FrameInput, MovementInput,
};

const FRAME_DT: f32 = 1.0 / 60.0;

fn inline_registry() -> anyhow::Result<BlockRegistry> {
    let registry = BlockRegistry::from_json_str(
        r#"{ "blocks": [
            { "id": 1135, "name": "Dirt", "texture": "textures/dirt.png", "is_opaque": true },
            { "id": 1139, "name": "Water", "texture": "textures/water.png", "is_opaque": false }
        ] }"#,
    )?;
    Ok(registry)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path).with_context(|| format!("loading {}", path))?,
        None => EngineConfig::default(),
    };
    let registry = match &config.world.block_definitions {
        Some(path) => load_block_definitions(path)?,
        None => inline_registry()?,
    };

    let mut target = CpuVertexBuffer::new();
    let mut state = create_game_state(config, registry, &mut target)?;
    println!(
        "World {}x{}x{}, {} vertices uploaded",
        state.world.size_x,
        state.world.size_y,
        state.world.size_z,
        target.vertex_count()
    );

    // Fall from the spawn point until something holds the player up
    let idle = FrameInput::default();
    for _ in 0..600 {
        let report = run_frame(&mut state, &idle, FRAME_DT, &mut target)?;
        if report.grounded {
            println!(
                "Landed at {:?} after {} frames",
                report.player_position, report.tick
            );
            break;
        }
    }

    let walk = FrameInput {
        movement: MovementInput {
            wish_direction: Vec2::new(1.0, 0.5),
            ..Default::default()
        },
        ..Default::default()
    };
    for _ in 0..45 {
        run_frame(&mut state, &walk, FRAME_DT, &mut target)?;
    }
    println!("Walked to {:?}", state.player.position);

    if let Some(stone) = state.registry.get_id("Stone") {
        state.interaction.selected_block = stone;
    }
    let selected = state
        .registry
        .lookup(state.interaction.selected_block)
        .map_or("unregistered", |def| def.name.as_str());
    println!("Placing {}", selected);

    let clicks = [
        ClickAction::Destroy,
        ClickAction::Destroy,
        ClickAction::Place,
        ClickAction::Pick,
    ];
    for action in clicks {
        let input = FrameInput {
            look_direction: Vec3::new(0.2, -1.0, 0.1),
            click: Some(action),
            ..Default::default()
        };
        let report = run_frame(&mut state, &input, FRAME_DT, &mut target)?;
        println!(
            "{:?} -> {:?} (mesh uploaded: {}, {} vertices)",
            action, report.interaction, report.mesh_uploaded, report.vertex_count
        );
    }

    let report = run_frame(&mut state, &idle, FRAME_DT, &mut target)?;
    println!(
        "Tick {}: sun at {:?}, {} uploads total",
        report.tick,
        report.sun_position,
        target.upload_count()
    );

    Ok(())
}
