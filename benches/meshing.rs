//! Meshing and raycast benchmarks on the default world
//!
//! Run with: `cargo bench --bench meshing`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use terraris_engine::constants::core::{WORLD_SIZE_X, WORLD_SIZE_Y, WORLD_SIZE_Z};
use terraris_engine::renderer::{generate_mesh, regenerate_mesh, MeshData};
use terraris_engine::world::{
    raycast, seed_flat_world, BlockRegistry, Ray, TerrainConfig, WorldData,
};

fn default_registry() -> BlockRegistry {
    BlockRegistry::from_json_str(
        r#"{ "blocks": [
            { "id": 1135, "name": "Dirt", "texture": "dirt.png", "is_opaque": true },
            { "id": 1139, "name": "Water", "texture": "water.png", "is_opaque": false }
        ] }"#,
    )
    .unwrap()
}

fn seeded_world() -> WorldData {
    let mut world = WorldData::new(WORLD_SIZE_X, WORLD_SIZE_Y, WORLD_SIZE_Z).unwrap();
    seed_flat_world(&mut world, &TerrainConfig::default());
    world
}

fn bench_generate_mesh(c: &mut Criterion) {
    let world = seeded_world();
    let registry = default_registry();

    c.bench_function("generate_mesh_64x16x64", |b| {
        b.iter(|| black_box(generate_mesh(black_box(&world), &registry)));
    });
}

fn bench_regenerate_mesh(c: &mut Criterion) {
    let world = seeded_world();
    let registry = default_registry();
    let mut mesh = MeshData::default();

    c.bench_function("regenerate_mesh_reused_buffer", |b| {
        b.iter(|| {
            regenerate_mesh(&mut mesh, black_box(&world), &registry);
            mesh.vertex_count()
        });
    });
}

fn bench_raycast(c: &mut Criterion) {
    let world = seeded_world();
    let ray = Ray::new(Vec3::new(8.3, 12.7, 8.1), Vec3::new(0.4, -0.8, 0.3));

    c.bench_function("raycast_diagonal_into_ground", |b| {
        b.iter(|| black_box(raycast(&world, black_box(ray), 64.0)));
    });
}

criterion_group!(benches, bench_generate_mesh, bench_regenerate_mesh, bench_raycast);
criterion_main!(benches);
