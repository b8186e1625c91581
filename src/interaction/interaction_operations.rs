//! Interaction Operations - Pure DOP Functions
//!
//! Click handling on top of the raycaster: destroy, place and pick.
//! Remeshing stays with the caller; check `InteractionOutcome::world_changed`.

use super::interaction_data::{ClickAction, InteractionOutcome, InteractionState, PlacementRejection};
use crate::physics::aabb::{aabb_intersects, voxel_aabb, AABB};
use crate::world::error::WorldResult;
use crate::world::world_operations::{get_block, is_in_bounds, raycast, set_block};
use crate::world::{BlockId, BlockRegistry, Ray, WorldData};
use glam::Vec3;

/// Ray used for clicks: starts near the eye, aims along the look direction
///
/// The origin moves `forward_offset` along the normalized look direction,
/// then by `origin_shift` in world space.
pub fn click_ray(eye: Vec3, look_direction: Vec3, forward_offset: f32, origin_shift: Vec3) -> Ray {
    let direction = look_direction.normalize_or_zero();
    Ray::new(eye + direction * forward_offset + origin_shift, direction)
}

/// Resolve one click against the world
///
/// `occupant` is the player's box; placement never overlaps it.
pub fn handle_click(
    action: ClickAction,
    ray: Ray,
    world: &mut WorldData,
    state: &mut InteractionState,
    occupant: &AABB,
    max_distance: f32,
) -> WorldResult<InteractionOutcome> {
    let Some(hit) = raycast(world, ray, max_distance) else {
        log::debug!("[handle_click] {:?}: no block within {} units", action, max_distance);
        return Ok(InteractionOutcome::NoTarget);
    };

    let outcome = match action {
        ClickAction::Destroy => {
            let modification = set_block(world, hit.target, BlockId::AIR)?;
            InteractionOutcome::Destroyed {
                position: hit.target,
                previous: modification.old_block,
            }
        }
        ClickAction::Place => {
            let position = hit.placement;
            let existing = get_block(world, position);

            let rejection = if !is_in_bounds(world, position) {
                Some(PlacementRejection::OutsideWorld)
            } else if !existing.is_air() {
                Some(PlacementRejection::Occupied(existing))
            } else if aabb_intersects(&voxel_aabb(position), occupant) {
                Some(PlacementRejection::OverlapsOccupant)
            } else {
                None
            };

            match rejection {
                Some(reason) => {
                    log::warn!("[handle_click] Cannot place at {}: {}", position, reason);
                    InteractionOutcome::PlacementBlocked { position, reason }
                }
                None => {
                    set_block(world, position, state.selected_block)?;
                    InteractionOutcome::Placed {
                        position,
                        block: state.selected_block,
                    }
                }
            }
        }
        ClickAction::Pick => {
            state.selected_block = hit.block;
            InteractionOutcome::Picked { block: hit.block }
        }
    };

    log::debug!("[handle_click] {:?} -> {:?}", action, outcome);
    Ok(outcome)
}

/// Step the selection through the registered blocks, wrapping at both ends
///
/// A selection that is not registered restarts from the first block. With
/// an empty registry the selection is left alone.
pub fn cycle_selected_block(
    state: &mut InteractionState,
    registry: &BlockRegistry,
    delta: i32,
) -> BlockId {
    let ids = registry.block_ids();
    if ids.is_empty() {
        return state.selected_block;
    }

    let len = ids.len() as i64;
    state.selected_block = match ids.iter().position(|id| *id == state.selected_block) {
        Some(current) => {
            let next = (current as i64 + delta as i64).rem_euclid(len);
            ids[next as usize]
        }
        None => ids[0],
    };

    log::debug!("[cycle_selected_block] Selected {}", state.selected_block);
    state.selected_block
}
