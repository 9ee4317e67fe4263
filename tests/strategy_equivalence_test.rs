//! Properties every meshing strategy must share.
//!
//! Run with: cargo test --test strategy_equivalence_test

use cgmath::Vector3;
use voxel_mesher::{Mesh, MeshingStrategy, VoxelCell, VoxelGrid};

const AREA_TOLERANCE: f64 = 1e-6;

fn sample_grids() -> Vec<(&'static str, VoxelGrid)> {
    let mut random = VoxelGrid::new(9, 7, 5);
    random.fill_random(VoxelCell::new(0.9, 0.1, 0.3), 0.45, 1234);

    let mut two_tone = VoxelGrid::new(6, 6, 6);
    two_tone.fill_ellipsoid(VoxelCell::new(0.2, 0.8, 0.2));
    for z in 0..6 {
        for x in 0..6 {
            if two_tone.get(x, 2, z).is_some() {
                two_tone
                    .set(x, 2, z, Some(VoxelCell::new(0.5, 0.3, 0.1)))
                    .unwrap();
            }
        }
    }

    let mut checkerboard = VoxelGrid::new(5, 5, 5);
    checkerboard.fill_checkerboard(VoxelCell::WHITE);

    let mut slab = VoxelGrid::new(10, 2, 4);
    slab.fill_cuboid(VoxelCell::WHITE);

    vec![
        ("noise", VoxelGrid::noise(16, VoxelCell::WHITE, 0.15)),
        ("random", random),
        ("sphere", VoxelGrid::spherical(11, VoxelCell::WHITE)),
        ("two_tone", two_tone),
        ("checkerboard", checkerboard),
        ("slab", slab),
    ]
}

/// Volume enclosed by a closed, outward-wound triangle surface.
fn signed_volume(mesh: &Mesh) -> f64 {
    mesh.indices
        .chunks_exact(3)
        .map(|triangle| {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|index| {
                let [x, y, z] = mesh.vertices[index as usize].position;
                Vector3::new(x as f64, y as f64, z as f64)
            });
            cgmath::dot(a, b.cross(c)) / 6.0
        })
        .sum()
}

#[test]
fn culled_and_greedy_cover_the_same_surface() {
    for (name, grid) in sample_grids() {
        let culled = grid.extract_culled();
        let greedy = grid.extract_greedy();

        assert!(
            (culled.surface_area() - greedy.surface_area()).abs() < AREA_TOLERANCE,
            "{}: culled {} vs greedy {}",
            name,
            culled.surface_area(),
            greedy.surface_area()
        );
        // Every culled quad is one unit face.
        assert!((culled.surface_area() - culled.quad_count() as f64).abs() < AREA_TOLERANCE);
        assert!(greedy.quad_count() <= culled.quad_count(), "{}", name);
    }
}

#[test]
fn direct_matches_culled_without_touching_cells() {
    let mut grid = VoxelGrid::new(7, 6, 5);
    grid.fill_checkerboard(VoxelCell::WHITE);

    let direct = grid.extract_direct();
    let culled = grid.extract_culled();
    assert_eq!(direct.quad_count(), 6 * grid.occupied_count());
    assert!((direct.surface_area() - culled.surface_area()).abs() < AREA_TOLERANCE);
}

#[test]
fn direct_never_emits_less_than_culled() {
    for (name, grid) in sample_grids() {
        let direct = grid.extract_direct();
        assert_eq!(direct.quad_count(), 6 * grid.occupied_count(), "{}", name);
        assert!(direct.surface_area() + AREA_TOLERANCE >= grid.extract_culled().surface_area());
    }
}

#[test]
fn every_strategy_encloses_the_occupied_volume() {
    for (name, grid) in sample_grids() {
        for strategy in MeshingStrategy::ALL {
            let volume = signed_volume(&grid.extract(strategy));
            assert!(
                (volume - grid.occupied_count() as f64).abs() < AREA_TOLERANCE,
                "{} / {}: enclosed {} for {} cells",
                name,
                strategy.name(),
                volume,
                grid.occupied_count()
            );
        }
    }
}

#[test]
fn vertices_stay_inside_the_centered_bounds() {
    for (name, grid) in sample_grids() {
        let half = grid.center();
        for strategy in MeshingStrategy::ALL {
            for vertex in &grid.extract(strategy).vertices {
                let [x, y, z] = vertex.position;
                assert!(x.abs() <= half.x && y.abs() <= half.y && z.abs() <= half.z, "{}", name);
            }
        }
    }
}

#[test]
fn no_two_vertices_are_equal() {
    let grid = VoxelGrid::spherical(6, VoxelCell::WHITE);
    for strategy in MeshingStrategy::ALL {
        let mesh = grid.extract(strategy);
        for (i, a) in mesh.vertices.iter().enumerate() {
            for b in &mesh.vertices[i + 1..] {
                assert!(!a.approx_eq(b), "{}: {:?} repeated", strategy.name(), a);
            }
        }
    }
}

#[test]
fn indices_are_valid_triangles() {
    for (name, grid) in sample_grids() {
        for strategy in MeshingStrategy::ALL {
            let mesh = grid.extract(strategy);
            assert_eq!(mesh.indices.len() % 6, 0, "{}", name);
            assert!(mesh
                .indices
                .iter()
                .all(|&index| (index as usize) < mesh.vertices.len()));
        }
    }
}

#[test]
fn extraction_leaves_the_grid_untouched() {
    for (name, grid) in sample_grids() {
        let before = grid.clone();
        for strategy in MeshingStrategy::ALL {
            let first = grid.extract(strategy);
            let second = grid.extract(strategy);
            assert_eq!(first, second, "{} / {}", name, strategy.name());
        }
        assert_eq!(grid, before);
    }
}
