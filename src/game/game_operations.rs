//! Game Operations - Pure DOP Functions
//!
//! Frame orchestration. Each frame runs, strictly in order: movement intent,
//! jump, physics step, click interaction, then mesh rebuild and upload when
//! the world changed.

use super::game_data::{FrameInput, FrameReport, GameState};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::interaction::{click_ray, cycle_selected_block, handle_click, InteractionState};
use crate::lighting::{advance_cycle, create_day_night_cycle, sun_position};
use crate::physics::aabb::aabb_from_center_half_extents;
use crate::physics::{
    apply_movement_input, create_player_entity, eye_position, step_physics, try_jump,
};
use crate::renderer::{generate_mesh, regenerate_mesh, MeshUploadTarget};
use crate::world::generation::seed_flat_world;
use crate::world::world_operations::log_world_stats;
use crate::world::{BlockRegistry, WorldData};

/// Build a session: seeded world, spawned player, first mesh uploaded
pub fn create_game_state(
    config: EngineConfig,
    registry: BlockRegistry,
    target: &mut impl MeshUploadTarget,
) -> EngineResult<GameState> {
    config.validate()?;

    let mut world = WorldData::new(
        config.world.size_x,
        config.world.size_y,
        config.world.size_z,
    )?;
    seed_flat_world(&mut world, &config.world.terrain);
    log_world_stats(&world);

    let player = create_player_entity(&config.physics);
    let interaction = InteractionState::new(config.interaction.initial_block);
    let day_night = create_day_night_cycle(&config.lighting, &world);

    let mesh = generate_mesh(&world, &registry);
    target.replace_vertices(&mesh.vertices);

    log::info!(
        "[create_game_state] Session ready: {} block types, {} vertices, player at {:?}",
        registry.len(),
        mesh.vertex_count(),
        player.position
    );

    Ok(GameState {
        config,
        world,
        registry,
        player,
        interaction,
        day_night,
        mesh,
        tick: 0,
    })
}

/// Run one frame of simulation
pub fn run_frame(
    state: &mut GameState,
    input: &FrameInput,
    dt: f32,
    target: &mut impl MeshUploadTarget,
) -> EngineResult<FrameReport> {
    state.tick += 1;
    state.world.tick = state.tick;

    let physics = &state.config.physics;
    apply_movement_input(&mut state.player, &input.movement, physics);
    let jumped = input.movement.jump && try_jump(&mut state.player, physics);
    step_physics(&mut state.player, dt, &state.world, &state.registry, physics);

    if input.cycle_selection != 0 {
        cycle_selected_block(&mut state.interaction, &state.registry, input.cycle_selection);
    }

    let interaction = match input.click {
        Some(action) => {
            let click_config = &state.config.interaction;
            let ray = click_ray(
                eye_position(&state.player, physics),
                input.look_direction,
                click_config.ray_forward_offset,
                click_config.ray_origin_shift,
            );
            let occupant =
                aabb_from_center_half_extents(state.player.position, state.player.half_extents);
            Some(handle_click(
                action,
                ray,
                &mut state.world,
                &mut state.interaction,
                &occupant,
                click_config.max_reach,
            )?)
        }
        None => None,
    };

    let mesh_uploaded = interaction.map_or(false, |outcome| outcome.world_changed());
    if mesh_uploaded {
        regenerate_mesh(&mut state.mesh, &state.world, &state.registry);
        target.replace_vertices(&state.mesh.vertices);
        log::info!(
            "[run_frame] Mesh rebuilt at tick {}: {} vertices",
            state.tick,
            state.mesh.vertex_count()
        );
    }

    advance_cycle(&mut state.day_night, dt);

    Ok(FrameReport {
        tick: state.tick,
        jumped,
        interaction,
        mesh_uploaded,
        vertex_count: state.mesh.vertex_count(),
        player_position: state.player.position,
        grounded: state.player.grounded,
        sun_position: sun_position(&state.day_night, state.day_night.elapsed_seconds),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::interaction::{ClickAction, InteractionOutcome, PlacementRejection};
    use crate::physics::MovementInput;
    use crate::renderer::CpuVertexBuffer;
    use crate::world::world_operations::get_block;
    use crate::world::{BlockId, VoxelPos};
    use glam::{Vec2, Vec3};

    fn registry() -> BlockRegistry {
        BlockRegistry::from_json_str(
            r#"{ "blocks": [
                { "id": 1135, "name": "Dirt", "texture": "dirt.png", "is_opaque": true },
                { "id": 1139, "name": "Water", "texture": "water.png", "is_opaque": false }
            ] }"#,
        )
        .unwrap()
    }

    fn small_config() -> EngineConfig {
        let mut config = EngineConfig::default();
        config.world.size_x = 16;
        config.world.size_z = 16;
        config
    }

    fn settle(state: &mut GameState, target: &mut CpuVertexBuffer) {
        for _ in 0..300 {
            run_frame(state, &FrameInput::default(), 1.0 / 60.0, target).unwrap();
        }
    }

    #[test]
    fn test_session_starts_with_uploaded_mesh() {
        let mut target = CpuVertexBuffer::new();
        let state = create_game_state(small_config(), registry(), &mut target).unwrap();

        assert_eq!(target.upload_count(), 1);
        assert_eq!(target.vertex_count(), state.mesh.vertex_count());
        assert!(state.mesh.vertex_count() > 0);
        assert_eq!(get_block(&state.world, VoxelPos::new(3, 5, 3)), BlockId(1139));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = small_config();
        config.world.size_y = 0;
        let mut target = CpuVertexBuffer::new();

        let err = create_game_state(config, registry(), &mut target).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
        assert_eq!(target.upload_count(), 0);
    }

    #[test]
    fn test_player_lands_on_ground() {
        let mut target = CpuVertexBuffer::new();
        let mut state = create_game_state(small_config(), registry(), &mut target).unwrap();
        settle(&mut state, &mut target);

        // Water at y = 5 is not solid; the dirt top is at 4.5
        assert!(state.player.grounded);
        assert!((state.player.position.y - (4.5 + 0.9)).abs() < 1e-4);
        assert_eq!(target.upload_count(), 1);
    }

    #[test]
    fn test_destroy_click_rebuilds_mesh_once() {
        let mut target = CpuVertexBuffer::new();
        let mut state = create_game_state(small_config(), registry(), &mut target).unwrap();
        settle(&mut state, &mut target);

        let input = FrameInput {
            look_direction: Vec3::NEG_Y,
            click: Some(ClickAction::Destroy),
            ..Default::default()
        };
        let report = run_frame(&mut state, &input, 1.0 / 60.0, &mut target).unwrap();

        assert!(matches!(
            report.interaction,
            Some(InteractionOutcome::Destroyed { .. })
        ));
        assert!(report.mesh_uploaded);
        assert_eq!(target.upload_count(), 2);
        assert_eq!(target.vertex_count(), report.vertex_count);
    }

    #[test]
    fn test_place_and_pick_clicks() {
        let mut target = CpuVertexBuffer::new();
        let mut state = create_game_state(small_config(), registry(), &mut target).unwrap();
        settle(&mut state, &mut target);

        let pick = FrameInput {
            look_direction: Vec3::NEG_Y,
            click: Some(ClickAction::Pick),
            ..Default::default()
        };
        let report = run_frame(&mut state, &pick, 1.0 / 60.0, &mut target).unwrap();
        // The click ray starts in the air above the water surface
        assert_eq!(
            report.interaction,
            Some(InteractionOutcome::Picked {
                block: BlockId(1139)
            })
        );
        assert!(!report.mesh_uploaded);

        let place = FrameInput {
            look_direction: Vec3::NEG_Y,
            click: Some(ClickAction::Place),
            ..Default::default()
        };
        let report = run_frame(&mut state, &place, 1.0 / 60.0, &mut target).unwrap();
        assert_eq!(
            report.interaction,
            Some(InteractionOutcome::Placed {
                position: VoxelPos::new(7, 6, 7),
                block: BlockId(1139)
            })
        );
        assert_eq!(target.upload_count(), 2);

        // The new block holds the ray origin, so the next hit is the surface
        // below and its placement spot is already taken
        let report = run_frame(&mut state, &place, 1.0 / 60.0, &mut target).unwrap();
        assert!(matches!(
            report.interaction,
            Some(InteractionOutcome::PlacementBlocked {
                reason: PlacementRejection::Occupied(BlockId(1139)),
                ..
            })
        ));
        assert_eq!(target.upload_count(), 2);
    }

    #[test]
    fn test_jump_and_walk() {
        let mut target = CpuVertexBuffer::new();
        let mut state = create_game_state(small_config(), registry(), &mut target).unwrap();
        settle(&mut state, &mut target);
        let start = state.player.position;

        let jump = FrameInput {
            movement: MovementInput {
                jump: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let report = run_frame(&mut state, &jump, 1.0 / 60.0, &mut target).unwrap();
        assert!(report.jumped);
        assert!(report.player_position.y > start.y);

        // Airborne: a second jump request does nothing
        let report = run_frame(&mut state, &jump, 1.0 / 60.0, &mut target).unwrap();
        assert!(!report.jumped);

        settle(&mut state, &mut target);
        let walk = FrameInput {
            movement: MovementInput {
                wish_direction: Vec2::new(1.0, 0.0),
                ..Default::default()
            },
            ..Default::default()
        };
        for _ in 0..30 {
            run_frame(&mut state, &walk, 1.0 / 60.0, &mut target).unwrap();
        }
        assert!(state.player.position.x > start.x);
    }

    #[test]
    fn test_selection_cycles_through_registry() {
        let mut target = CpuVertexBuffer::new();
        let mut state = create_game_state(small_config(), registry(), &mut target).unwrap();
        assert_eq!(state.interaction.selected_block, BlockId(1135));

        let input = FrameInput {
            cycle_selection: 1,
            ..Default::default()
        };
        run_frame(&mut state, &input, 1.0 / 60.0, &mut target).unwrap();
        assert_eq!(state.interaction.selected_block, BlockId(1139));
    }
}
